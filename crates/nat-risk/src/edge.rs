// SPDX-FileCopyrightText: 2026 Nossa Maternidade Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Mapping of remote classifier responses onto [`RiskAnalysis`].
//!
//! The remote response is scored on two axes (medical, psychological) plus a
//! recommended action. The mapping is seeded from the local analysis so that
//! nothing the local classifier found can be lost.

use nat_core::types::MAX_LEVEL;
use nat_core::{RecommendedAction, RemoteClassification, RiskAnalysis, RiskFlag, SupportResource};

use crate::normalize::normalize;

const MEDICAL_EMERGENCY: f64 = 7.0;
const MEDICAL_ATTENTION: f64 = 4.0;
const PSYCHOLOGICAL_CRISIS: f64 = 8.0;
const PSYCHOLOGICAL_DISTRESS: f64 = 5.0;

/// Remote level at or above which the edge analysis requires intervention.
const EDGE_INTERVENTION_LEVEL: u8 = 8;

const DEATH_TERMS: &[&str] = &[
    "suicid",
    "quero morrer",
    "queria morrer",
    "vontade de morrer",
    "pensamentos de morte",
    "pensamento de morte",
    "pensando em morte",
    "me matar",
    "tirar a propria vida",
    "tirar minha vida",
    "kill myself",
    "want to die",
];

const HARM_TERMS: &[&str] = &["machucar", "ferir", "fazer mal", "agredir", "sacudir", "harm", "hurt"];

const BABY_TERMS: &[&str] = &["bebe", "baby", "filho", "filha", "recem-nascido", "recem nascido", "crianca"];

const ACUTE_PAIN_TERMS: &[&str] = &[
    "dor intensa",
    "dor forte",
    "dor aguda",
    "dor insuportavel",
    "sangramento",
    "sangrando",
    "hemorragia",
    "desmaio",
    "desmaiei",
    "desmaiar",
    "desmaiando",
    "severe pain",
    "bleeding",
    "faint",
];

/// Build the "edge analysis" for a remote response.
///
/// `fallback` is the local analysis of the same message; its flags,
/// resources, intervention decision and reasoning are carried over.
pub fn edge_analysis(remote: &RemoteClassification, fallback: &RiskAnalysis) -> RiskAnalysis {
    let level = remote_level(remote);

    let mut flags = fallback.flags.clone();
    if remote.medical_risk >= MEDICAL_EMERGENCY {
        flags.insert(RiskFlag::MedicalEmergency);
    } else if remote.medical_risk >= MEDICAL_ATTENTION {
        flags.insert(RiskFlag::MedicalAttention);
    }
    if remote.psychological_risk >= PSYCHOLOGICAL_CRISIS {
        flags.insert(RiskFlag::PsychologicalCrisis);
    } else if remote.psychological_risk >= PSYCHOLOGICAL_DISTRESS {
        flags.insert(RiskFlag::PsychologicalDistress);
    }
    for keyword in &remote.urgency_keywords {
        flags.extend(keyword_flags(keyword));
    }

    let mut resources = fallback.suggested_resources.clone();
    match remote.recommended_action {
        RecommendedAction::CallSamu => {
            resources.insert(SupportResource::Emergency);
        }
        RecommendedAction::CallCvv => {
            resources.insert(SupportResource::Cvv);
        }
        RecommendedAction::ConsultDoctor => {
            resources.insert(SupportResource::Therapy);
            resources.insert(SupportResource::MedicalFollowup);
        }
        RecommendedAction::None => {}
    }

    let requires_intervention = level >= EDGE_INTERVENTION_LEVEL
        || remote.recommended_action.is_escalation()
        || fallback.requires_intervention;

    RiskAnalysis {
        level,
        flags,
        requires_intervention,
        suggested_resources: resources,
        reasoning: edge_reasoning(remote, fallback),
    }
}

/// `round(max(medical, psychological))`, clamped to 0..=10.
fn remote_level(remote: &RemoteClassification) -> u8 {
    // f64::max ignores a NaN operand; a NaN on both sides scores 0.
    let raw = remote.medical_risk.max(remote.psychological_risk);
    if raw.is_nan() {
        return 0;
    }
    raw.round().clamp(0.0, f64::from(MAX_LEVEL)) as u8
}

fn keyword_flags(keyword: &str) -> Vec<RiskFlag> {
    let normalized = normalize(keyword);
    let contains_any = |terms: &[&str]| terms.iter().any(|t| normalized.contains(t));

    let mut flags = Vec::new();
    if contains_any(DEATH_TERMS) {
        flags.push(RiskFlag::SuicidalIdeation);
    }
    if contains_any(HARM_TERMS) && contains_any(BABY_TERMS) {
        flags.push(RiskFlag::HarmToBaby);
    }
    if contains_any(ACUTE_PAIN_TERMS) {
        flags.push(RiskFlag::AcutePain);
    }
    flags
}

fn edge_reasoning(remote: &RemoteClassification, fallback: &RiskAnalysis) -> String {
    let keywords = if remote.urgency_keywords.is_empty() {
        "nenhuma".to_string()
    } else {
        remote.urgency_keywords.join(", ")
    };
    format!(
        "Classificador remoto: risco médico {:.1}/10, risco psicológico {:.1}/10, \
         ação recomendada: {}, palavras de urgência informadas pelo classificador: {}. {}",
        remote.medical_risk,
        remote.psychological_risk,
        remote.recommended_action,
        keywords,
        fallback.reasoning
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::classify;

    fn remote(medical: f64, psychological: f64, action: RecommendedAction) -> RemoteClassification {
        RemoteClassification {
            medical_risk: medical,
            psychological_risk: psychological,
            urgency_keywords: Vec::new(),
            recommended_action: action,
            confidence: 0.9,
        }
    }

    #[test]
    fn level_is_rounded_maximum() {
        let fallback = classify("tudo bem");
        assert_eq!(edge_analysis(&remote(2.4, 6.5, RecommendedAction::None), &fallback).level, 7);
        assert_eq!(edge_analysis(&remote(3.2, 1.0, RecommendedAction::None), &fallback).level, 3);
    }

    #[test]
    fn level_is_clamped() {
        let fallback = classify("tudo bem");
        assert_eq!(edge_analysis(&remote(14.0, 0.0, RecommendedAction::None), &fallback).level, 10);
        assert_eq!(edge_analysis(&remote(-3.0, -1.0, RecommendedAction::None), &fallback).level, 0);
        assert_eq!(
            edge_analysis(&remote(f64::NAN, f64::NAN, RecommendedAction::None), &fallback).level,
            0
        );
    }

    #[test]
    fn medical_and_psychological_flags_use_thresholds() {
        let fallback = classify("tudo bem");
        let high = edge_analysis(&remote(7.0, 8.0, RecommendedAction::None), &fallback);
        assert!(high.has_flag(RiskFlag::MedicalEmergency));
        assert!(!high.has_flag(RiskFlag::MedicalAttention));
        assert!(high.has_flag(RiskFlag::PsychologicalCrisis));
        assert!(!high.has_flag(RiskFlag::PsychologicalDistress));

        let mid = edge_analysis(&remote(4.0, 5.0, RecommendedAction::None), &fallback);
        assert!(mid.has_flag(RiskFlag::MedicalAttention));
        assert!(mid.has_flag(RiskFlag::PsychologicalDistress));

        let low = edge_analysis(&remote(3.9, 4.9, RecommendedAction::None), &fallback);
        assert!(!low.has_flag(RiskFlag::MedicalAttention));
        assert!(!low.has_flag(RiskFlag::PsychologicalDistress));
    }

    #[test]
    fn urgency_keywords_add_flags() {
        let fallback = classify("tudo bem");
        let mut response = remote(5.0, 5.0, RecommendedAction::None);
        response.urgency_keywords = vec![
            "Pensamentos de MORTE".into(),
            "vontade de machucar o bebê".into(),
            "sangramento intenso".into(),
        ];
        let analysis = edge_analysis(&response, &fallback);
        assert!(analysis.has_flag(RiskFlag::SuicidalIdeation));
        assert!(analysis.has_flag(RiskFlag::HarmToBaby));
        assert!(analysis.has_flag(RiskFlag::AcutePain));
    }

    #[test]
    fn death_idioms_are_not_suicidal_ideation() {
        for keyword in ["morta de cansaço", "morrendo de sono", "morrer de rir", "morte do meu avô"] {
            assert!(
                !keyword_flags(keyword).contains(&RiskFlag::SuicidalIdeation),
                "{keyword:?}"
            );
        }
        assert!(keyword_flags("vontade de morrer").contains(&RiskFlag::SuicidalIdeation));
        assert!(keyword_flags("ideação suicida").contains(&RiskFlag::SuicidalIdeation));
    }

    #[test]
    fn idiom_keyword_adds_no_flag_but_is_still_reported() {
        let fallback = classify("estou exausta");
        let mut response = remote(3.0, 4.0, RecommendedAction::None);
        response.urgency_keywords = vec!["morta de cansaço".into()];
        let analysis = edge_analysis(&response, &fallback);
        assert_eq!(analysis.flags, fallback.flags);
        assert!(analysis
            .reasoning
            .contains("palavras de urgência informadas pelo classificador: morta de cansaço"));
    }

    #[test]
    fn harm_without_baby_is_not_harm_to_baby() {
        assert!(!keyword_flags("machucar alguém").contains(&RiskFlag::HarmToBaby));
        assert!(!keyword_flags("bebê chorando").contains(&RiskFlag::HarmToBaby));
    }

    #[test]
    fn actions_add_resources() {
        let fallback = classify("tudo bem");
        let samu = edge_analysis(&remote(1.0, 1.0, RecommendedAction::CallSamu), &fallback);
        assert!(samu.suggested_resources.contains(&SupportResource::Emergency));

        let cvv = edge_analysis(&remote(1.0, 1.0, RecommendedAction::CallCvv), &fallback);
        assert!(cvv.suggested_resources.contains(&SupportResource::Cvv));

        let doctor = edge_analysis(&remote(1.0, 1.0, RecommendedAction::ConsultDoctor), &fallback);
        assert!(doctor.suggested_resources.contains(&SupportResource::Therapy));
        assert!(doctor
            .suggested_resources
            .contains(&SupportResource::MedicalFollowup));
        assert!(!doctor.requires_intervention);
    }

    #[test]
    fn escalating_action_forces_intervention() {
        let fallback = classify("tudo bem");
        let analysis = edge_analysis(&remote(1.0, 1.0, RecommendedAction::CallCvv), &fallback);
        assert_eq!(analysis.level, 1);
        assert!(analysis.requires_intervention);
    }

    #[test]
    fn level_eight_forces_intervention() {
        let fallback = classify("tudo bem");
        let analysis = edge_analysis(&remote(2.0, 7.6, RecommendedAction::None), &fallback);
        assert_eq!(analysis.level, 8);
        assert!(analysis.requires_intervention);
    }

    #[test]
    fn local_findings_are_preserved() {
        let fallback = classify("quero morrer");
        let analysis = edge_analysis(&remote(0.0, 2.0, RecommendedAction::None), &fallback);
        assert!(analysis.has_flag(RiskFlag::SuicidalIdeation));
        assert!(analysis.requires_intervention);
        assert!(analysis.suggested_resources.contains(&SupportResource::Cvv));
    }

    #[test]
    fn reasoning_summarizes_remote_then_local() {
        let fallback = classify("tudo bem por aqui");
        let mut response = remote(8.0, 2.0, RecommendedAction::CallSamu);
        response.urgency_keywords = vec!["sangramento".into()];
        let analysis = edge_analysis(&response, &fallback);
        assert_eq!(
            analysis.reasoning,
            "Classificador remoto: risco médico 8.0/10, risco psicológico 2.0/10, \
             ação recomendada: call_samu, \
             palavras de urgência informadas pelo classificador: sangramento. \
             Nível de risco: 1/10. Sinais detectados: normal_stress"
        );
    }
}
