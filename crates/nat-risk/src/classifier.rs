// SPDX-FileCopyrightText: 2026 Nossa Maternidade Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Local heuristic risk classification.
//!
//! Maps any message to a [`RiskAnalysis`] using the base scorer plus the
//! crisis pattern groups. No network, no state, no randomness: the same input
//! always yields the same analysis.

use std::collections::BTreeSet;
use std::sync::Arc;

use nat_core::types::{INTERVENTION_LEVEL, MAX_LEVEL};
use nat_core::{RiskAnalysis, RiskFlag};
use tracing::trace;

use crate::normalize::normalize;
use crate::patterns::PATTERN_GROUPS;
use crate::scorer::{BaseScorer, KeywordScorer};

/// Levels at or below this are tagged `normal_stress`.
const NORMAL_STRESS_CEILING: u8 = 2;

/// Keyword/pattern classifier over accent-folded text.
#[derive(Clone)]
pub struct LocalClassifier {
    scorer: Arc<dyn BaseScorer>,
}

impl std::fmt::Debug for LocalClassifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LocalClassifier").finish_non_exhaustive()
    }
}

impl LocalClassifier {
    /// Create a classifier backed by the default [`KeywordScorer`].
    pub fn new() -> Self {
        Self::with_scorer(KeywordScorer)
    }

    /// Create a classifier with a custom base scorer.
    pub fn with_scorer(scorer: impl BaseScorer + 'static) -> Self {
        Self {
            scorer: Arc::new(scorer),
        }
    }

    /// Classify a message. Total over every input, including the empty string.
    pub fn classify(&self, message: &str) -> RiskAnalysis {
        let normalized = normalize(message);

        let mut level = self.scorer.score(message).min(MAX_LEVEL);
        let mut flags = BTreeSet::new();
        let mut resources = BTreeSet::new();

        // No short-circuit: co-occurring signals all contribute.
        for group in PATTERN_GROUPS {
            if group.matches(&normalized) {
                trace!(group = group.name, "risk pattern group matched");
                level = level.max(group.min_level);
                flags.insert(group.flag);
                resources.extend(group.resources.iter().copied());
            }
        }

        if level <= NORMAL_STRESS_CEILING {
            flags.insert(RiskFlag::NormalStress);
        }

        let reasoning = local_reasoning(level, &flags);

        RiskAnalysis {
            level,
            flags,
            requires_intervention: level >= INTERVENTION_LEVEL,
            suggested_resources: resources,
            reasoning,
        }
    }
}

impl Default for LocalClassifier {
    fn default() -> Self {
        Self::new()
    }
}

/// Classify with the default classifier.
pub fn classify(message: &str) -> RiskAnalysis {
    LocalClassifier::new().classify(message)
}

fn local_reasoning(level: u8, flags: &BTreeSet<RiskFlag>) -> String {
    let mut reasoning = format!("Nível de risco: {level}/10");
    if !flags.is_empty() {
        let names: Vec<&str> = flags.iter().map(|f| f.as_ref()).collect();
        reasoning.push_str(". Sinais detectados: ");
        reasoning.push_str(&names.join(", "));
    }
    reasoning
}
