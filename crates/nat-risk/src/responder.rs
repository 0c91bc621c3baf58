// SPDX-FileCopyrightText: 2026 Nossa Maternidade Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Intervention message selection.
//!
//! The chat UI shows these messages verbatim. Wording is a product decision;
//! the tier boundaries are the contract.

use nat_core::RiskAnalysis;

/// Name used when the user's name is unknown.
pub const DEFAULT_USER_NAME: &str = "querida";

/// Levels at or above this get the urgent message.
pub const URGENT_LEVEL: u8 = 9;

/// Levels at or above this (and below [`URGENT_LEVEL`]) get the supportive message.
pub const SUPPORTIVE_LEVEL: u8 = 7;

/// Which intervention, if any, an analysis calls for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InterventionTier {
    /// No message; the conversation continues normally.
    None,
    /// Gentle suggestion of support resources.
    Supportive,
    /// Directive message with emergency numbers.
    Urgent,
}

impl InterventionTier {
    pub fn for_level(level: u8) -> Self {
        if level >= URGENT_LEVEL {
            InterventionTier::Urgent
        } else if level >= SUPPORTIVE_LEVEL {
            InterventionTier::Supportive
        } else {
            InterventionTier::None
        }
    }

    /// Label used for metrics and logs.
    pub fn as_str(self) -> &'static str {
        match self {
            InterventionTier::None => "none",
            InterventionTier::Supportive => "supportive",
            InterventionTier::Urgent => "urgent",
        }
    }
}

impl std::fmt::Display for InterventionTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Intervention responder with a configurable fallback name.
#[derive(Debug, Clone)]
pub struct Responder {
    default_user_name: String,
}

impl Responder {
    pub fn new(default_user_name: impl Into<String>) -> Self {
        Self {
            default_user_name: default_user_name.into(),
        }
    }

    /// The message for `analysis`, or an empty string when no intervention
    /// is warranted. A missing or blank `user_name` uses the default name.
    pub fn respond(&self, analysis: &RiskAnalysis, user_name: Option<&str>) -> String {
        let name = user_name
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .unwrap_or(&self.default_user_name);

        match InterventionTier::for_level(analysis.level) {
            InterventionTier::Urgent => urgent_message(name),
            InterventionTier::Supportive => supportive_message(name),
            InterventionTier::None => String::new(),
        }
    }
}

impl Default for Responder {
    fn default() -> Self {
        Self::new(DEFAULT_USER_NAME)
    }
}

/// Respond with the default name ("querida") when `user_name` is absent.
pub fn generate_intervention_response(analysis: &RiskAnalysis, user_name: Option<&str>) -> String {
    Responder::default().respond(analysis, user_name)
}

fn urgent_message(name: &str) -> String {
    format!(
        "{name}, estou muito preocupada com o que você compartilhou. \
         Sua segurança é a coisa mais importante agora.\n\n\
         Por favor, procure ajuda imediatamente:\n\
         • SAMU: ligue 192 (emergência médica, 24 horas)\n\
         • CVV: ligue 188 (apoio emocional, 24 horas, gratuito)\n\n\
         Se você tem um plano para se machucar ou machucar alguém, \
         vá agora ao pronto-socorro ou hospital mais próximo.\n\n\
         Se puder, chame alguém de confiança para ficar com você e com o bebê. \
         Você não está sozinha."
    )
}

fn supportive_message(name: &str) -> String {
    format!(
        "{name}, obrigada por confiar em mim e dividir o que está sentindo. \
         Percebo que este momento está muito pesado para você.\n\n\
         Talvez ajude conversar com alguém preparado para te acolher:\n\
         • CVV: ligue 188 ou acesse cvv.org.br (24 horas, gratuito)\n\
         • CAPS: o Centro de Atenção Psicossocial da sua região atende de graça\n\
         • Seu médico ou obstetra também pode cuidar disso com você\n\n\
         Se em algum momento você sentir que está em perigo, o SAMU atende pelo 192. \
         Estou aqui com você."
    )
}
