// SPDX-FileCopyrightText: 2026 Nossa Maternidade Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! "Most conservative wins" combination of two analyses.

use nat_core::RiskAnalysis;

/// Prefix of the reasoning of every merged analysis.
pub const HYBRID_REASONING_PREFIX: &str = "Análise híbrida → ";

/// Merge two analyses: maximum level, union of flags and resources, OR of the
/// intervention decision.
///
/// Commutative in everything except `reasoning`, which narrates `b` only.
/// Callers pass the remote (edge) analysis as `b`.
pub fn merge(a: &RiskAnalysis, b: &RiskAnalysis) -> RiskAnalysis {
    RiskAnalysis {
        level: a.level.max(b.level),
        flags: a.flags.union(&b.flags).copied().collect(),
        requires_intervention: a.requires_intervention || b.requires_intervention,
        suggested_resources: a
            .suggested_resources
            .union(&b.suggested_resources)
            .copied()
            .collect(),
        reasoning: format!("{HYBRID_REASONING_PREFIX}{}", b.reasoning),
    }
}
