// SPDX-FileCopyrightText: 2026 Nossa Maternidade Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Test utilities for the NAT-AI risk pipeline.
//!
//! Provides mock collaborators for fast, deterministic tests without
//! network access.
//!
//! # Components
//!
//! - [`MockRemoteClassifier`] - Remote classifier with queued responses and failures
//! - [`fixtures`] - Canned remote responses for common scenarios

pub mod fixtures;
pub mod mock_classifier;

pub use mock_classifier::MockRemoteClassifier;
