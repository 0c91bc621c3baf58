// SPDX-FileCopyrightText: 2026 Nossa Maternidade Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Emotional risk analysis for NAT-AI chat messages.
//!
//! This crate provides:
//! - [`LocalClassifier`]: keyword heuristic over accent-folded text (pure, zero I/O)
//! - [`edge_analysis`]: maps a remote classifier response onto a [`RiskAnalysis`]
//! - [`merge`]: "most conservative wins" combination of two analyses
//! - [`generate_intervention_response`]: tiered intervention message selection
//! - [`RiskAnalyzer`]: the entry point, optionally backed by a remote classifier
//!
//! [`RiskAnalysis`]: nat_core::RiskAnalysis

pub mod analyzer;
pub mod classifier;
pub mod edge;
pub mod merge;
pub mod normalize;
pub mod patterns;
pub mod recording;
pub mod responder;
pub mod scorer;

pub use analyzer::{AnalysisSource, Assessment, RiskAnalyzer};
pub use classifier::{classify, LocalClassifier};
pub use edge::edge_analysis;
pub use merge::merge;
pub use responder::{generate_intervention_response, InterventionTier, Responder};
pub use scorer::{get_risk_level, BaseScorer, KeywordScorer};
