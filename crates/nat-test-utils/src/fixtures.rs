// SPDX-FileCopyrightText: 2026 Nossa Maternidade Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Canned remote classifier responses.

use nat_core::{RecommendedAction, RemoteClassification};

/// A response with the given scores and action, no keywords, confidence 0.9.
pub fn remote_response(
    medical_risk: f64,
    psychological_risk: f64,
    recommended_action: RecommendedAction,
) -> RemoteClassification {
    RemoteClassification {
        medical_risk,
        psychological_risk,
        urgency_keywords: Vec::new(),
        recommended_action,
        confidence: 0.9,
    }
}

/// Nothing of concern.
pub fn calm_response() -> RemoteClassification {
    remote_response(0.0, 1.0, RecommendedAction::None)
}

/// Medical emergency with a SAMU recommendation.
pub fn medical_emergency_response() -> RemoteClassification {
    remote_response(8.0, 2.0, RecommendedAction::CallSamu)
}

/// Psychological crisis with a CVV recommendation.
pub fn psychological_crisis_response() -> RemoteClassification {
    remote_response(1.0, 9.0, RecommendedAction::CallCvv)
}
