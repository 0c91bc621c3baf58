// SPDX-FileCopyrightText: 2026 Nossa Maternidade Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Common types used across the risk pipeline.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString, IntoStaticStr};

/// Severity at or above which an analysis always requires intervention.
pub const INTERVENTION_LEVEL: u8 = 7;

/// Highest severity score.
pub const MAX_LEVEL: u8 = 10;

/// Categorical tag attached to a risk analysis.
///
/// Ordering follows declaration order, which keeps flag lists in reasoning
/// strings and serialized output stable.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Display,
    EnumString,
    AsRefStr,
    IntoStaticStr,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum RiskFlag {
    SuicidalIdeation,
    HarmToBaby,
    Psychosis,
    SelfHarm,
    SevereDepression,
    Ppd,
    Burnout,
    NormalStress,
    MedicalEmergency,
    MedicalAttention,
    PsychologicalCrisis,
    PsychologicalDistress,
    AcutePain,
}

/// Support resource suggested to the user.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Display,
    EnumString,
    AsRefStr,
    IntoStaticStr,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum SupportResource {
    /// CVV crisis line (188).
    Cvv,
    /// SAMU emergency services (192) or the nearest hospital.
    Emergency,
    /// CAPS public mental-health clinic.
    Caps,
    Therapy,
    MedicalFollowup,
}

/// Result of a risk analysis for one chat message.
///
/// Produced fresh per message and never mutated afterwards. Sets are ordered
/// so that two analyses of the same input serialize identically.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskAnalysis {
    /// Severity score, 0 (no signal) to 10 (life-threatening).
    pub level: u8,
    pub flags: BTreeSet<RiskFlag>,
    pub requires_intervention: bool,
    pub suggested_resources: BTreeSet<SupportResource>,
    /// Human-readable audit trail of which signals fired.
    pub reasoning: String,
}

impl RiskAnalysis {
    /// Returns true if the analysis carries the given flag.
    pub fn has_flag(&self, flag: RiskFlag) -> bool {
        self.flags.contains(&flag)
    }

    /// Flags rendered as their wire names, in stable order.
    pub fn flag_names(&self) -> Vec<&'static str> {
        self.flags.iter().map(|f| <&'static str>::from(*f)).collect()
    }

    /// Resources rendered as their wire names, in stable order.
    pub fn resource_names(&self) -> Vec<&'static str> {
        self
            .suggested_resources
            .iter()
            .map(|r| <&'static str>::from(*r))
            .collect()
    }

    /// JSON payload attached to the chat message's `context_data` audit field.
    pub fn context_data(&self) -> serde_json::Value {
        serde_json::json!({
            "risk_level": self.level,
            "risk_flags": self.flag_names(),
            "requires_intervention": self.requires_intervention,
            "suggested_resources": self.resource_names(),
            "risk_reasoning": self.reasoning,
        })
    }
}

/// Action recommended by the remote classifier.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum RecommendedAction {
    #[default]
    None,
    ConsultDoctor,
    CallSamu,
    CallCvv,
}

impl RecommendedAction {
    /// Actions that force an intervention regardless of the scores.
    pub fn is_escalation(self) -> bool {
        matches!(self, RecommendedAction::CallSamu | RecommendedAction::CallCvv)
    }
}

/// Request body sent to the remote classifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassificationRequest {
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
}

impl ClassificationRequest {
    pub fn new(message: impl Into<String>, user_id: Option<&str>) -> Self {
        Self {
            message: message.into(),
            user_id: user_id.map(str::to_string),
        }
    }
}

/// Response returned by the remote classifier.
///
/// `confidence` is accepted for forward compatibility but does not take part
/// in any scoring decision.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoteClassification {
    pub medical_risk: f64,
    pub psychological_risk: f64,
    #[serde(default)]
    pub urgency_keywords: Vec<String>,
    #[serde(default)]
    pub recommended_action: RecommendedAction,
    #[serde(default)]
    pub confidence: f64,
}
