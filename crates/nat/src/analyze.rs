// SPDX-FileCopyrightText: 2026 Nossa Maternidade Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `nat analyze` wiring and output rendering.

use std::sync::Arc;

use nat_config::NatConfig;
use nat_core::NatError;
use nat_edge::EdgeClassifier;
use nat_risk::{Assessment, RiskAnalyzer};
use tracing::info;

/// Build the analyzer for this run.
///
/// The edge classifier is attached only when `remote.enabled` is set and the
/// caller did not ask for a local-only run.
pub fn build_analyzer(config: &NatConfig, local_only: bool) -> Result<RiskAnalyzer, NatError> {
    let analyzer = RiskAnalyzer::from_config(config);
    if local_only || !config.remote.enabled {
        info!("risk analyzer running local-only");
        return Ok(analyzer);
    }
    let edge = EdgeClassifier::new(&config.remote)?;
    Ok(analyzer.with_remote(Arc::new(edge)))
}

/// JSON document: the `context_data` audit payload plus the pipeline outcome.
pub fn render_json(assessment: &Assessment) -> serde_json::Value {
    serde_json::json!({
        "context_data": assessment.analysis.context_data(),
        "source": assessment.source.as_str(),
        "tier": assessment.tier.as_str(),
        "intervention": assessment.intervention,
    })
}

/// Human-readable report.
pub fn render_text(assessment: &Assessment) -> String {
    let analysis = &assessment.analysis;
    let mut out = format!(
        "level:        {}/10\n\
         flags:        {}\n\
         resources:    {}\n\
         intervention: {}\n\
         source:       {}\n\
         reasoning:    {}\n",
        analysis.level,
        join_or_dash(&analysis.flag_names()),
        join_or_dash(&analysis.resource_names()),
        analysis.requires_intervention,
        assessment.source,
        analysis.reasoning,
    );
    if !assessment.intervention.is_empty() {
        out.push('\n');
        out.push_str(&assessment.intervention);
        out.push('\n');
    }
    out
}

fn join_or_dash(names: &[&str]) -> String {
    if names.is_empty() {
        "-".to_string()
    } else {
        names.join(", ")
    }
}
