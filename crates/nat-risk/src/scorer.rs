// SPDX-FileCopyrightText: 2026 Nossa Maternidade Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Base severity scoring.
//!
//! The base scorer supplies the starting level before the classifier's
//! pattern groups escalate it. It is deliberately coarse: whole-word
//! distress vocabulary mapped onto three bands.

use crate::normalize::{normalize, word_padded};

/// Supplies the baseline severity (0-10) for a raw message.
pub trait BaseScorer: Send + Sync {
    fn score(&self, message: &str) -> u8;
}

impl<F> BaseScorer for F
where
    F: Fn(&str) -> u8 + Send + Sync,
{
    fn score(&self, message: &str) -> u8 {
        self(message)
    }
}

/// Level for any non-empty message without distress vocabulary.
const NEUTRAL_LEVEL: u8 = 1;
const MILD_LEVEL: u8 = 3;
const STRONG_LEVEL: u8 = 5;

/// Everyday distress vocabulary (whole words or phrases, normalized).
const MILD_TERMS: &[&str] = &[
    "triste",
    "tristeza",
    "ansiosa",
    "ansiedade",
    "preocupada",
    "nervosa",
    "irritada",
    "chorando",
    "choro",
    "chorei",
    "sozinha",
    "solidao",
    "medo",
    "dor",
    "dores",
    "insonia",
    "nao consigo dormir",
];

/// Stronger distress vocabulary (whole words or phrases, normalized).
const STRONG_TERMS: &[&str] = &[
    "desesperada",
    "desespero",
    "sem esperanca",
    "angustia",
    "angustiada",
    "culpa",
    "culpada",
    "inutil",
    "fracassada",
    "panico",
    "vazia",
    "sem sentido",
    "pessima mae",
    "ma mae",
    "nao sou uma boa mae",
];

/// Keyword scorer used by default.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeywordScorer;

impl BaseScorer for KeywordScorer {
    fn score(&self, message: &str) -> u8 {
        get_risk_level(message)
    }
}

/// Baseline severity for a message: 0 for empty text, 1 for neutral text,
/// 3 for mild distress, 5 for strong distress.
pub fn get_risk_level(message: &str) -> u8 {
    let normalized = normalize(message);
    if normalized.is_empty() {
        return 0;
    }

    let padded = word_padded(&normalized);
    let contains_word = |term: &&str| padded.contains(&format!(" {term} "));

    if STRONG_TERMS.iter().any(contains_word) {
        STRONG_LEVEL
    } else if MILD_TERMS.iter().any(contains_word) {
        MILD_LEVEL
    } else {
        NEUTRAL_LEVEL
    }
}
