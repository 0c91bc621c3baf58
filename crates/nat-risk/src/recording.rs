// SPDX-FileCopyrightText: 2026 Nossa Maternidade Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Metric registration and recording helpers.
//!
//! Uses the metrics-rs facade; without an installed recorder every call is
//! a no-op. Labels never carry message content.

use metrics::{describe_counter, describe_histogram};

/// Register all risk pipeline metric descriptions.
///
/// Called once at startup after a recorder is installed.
pub fn register_metrics() {
    describe_counter!(
        "nat_risk_analyses_total",
        "Risk analyses completed, by source (local, hybrid, fallback)"
    );
    describe_counter!(
        "nat_risk_interventions_total",
        "Analyses that produced an intervention message, by tier"
    );
    describe_counter!(
        "nat_remote_failures_total",
        "Remote classifier calls that fell back to local analysis, by reason"
    );
    describe_histogram!(
        "nat_remote_latency_seconds",
        "Remote classifier round-trip latency in seconds"
    );
}

/// Record a completed analysis.
pub fn record_analysis(source: &'static str) {
    metrics::counter!("nat_risk_analyses_total", "source" => source).increment(1);
}

/// Record an intervention message being produced.
pub fn record_intervention(tier: &'static str) {
    metrics::counter!("nat_risk_interventions_total", "tier" => tier).increment(1);
}

/// Record a remote classifier failure.
pub fn record_remote_failure(reason: &'static str) {
    metrics::counter!("nat_remote_failures_total", "reason" => reason).increment(1);
}

/// Record remote classifier latency.
pub fn record_remote_latency(seconds: f64) {
    metrics::histogram!("nat_remote_latency_seconds").record(seconds);
}
