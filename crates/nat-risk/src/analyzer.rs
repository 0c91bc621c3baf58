// SPDX-FileCopyrightText: 2026 Nossa Maternidade Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Risk analysis entry point.
//!
//! Orchestrates: local classification (always) > remote classification
//! (optional, bounded by a timeout) > merge. Remote failures of any kind
//! degrade to the local analysis; `analyze_risk` never fails.

use std::sync::Arc;
use std::time::{Duration, Instant};

use nat_config::NatConfig;
use nat_core::{ClassificationRequest, NatError, RemoteClassification, RemoteClassifier, RiskAnalysis};
use tracing::{debug, info, warn};

use crate::classifier::LocalClassifier;
use crate::edge::edge_analysis;
use crate::merge::merge;
use crate::recording;
use crate::responder::{InterventionTier, Responder};

/// Default bound on a remote classification call.
const DEFAULT_REMOTE_TIMEOUT: Duration = Duration::from_secs(10);

/// Where the final analysis came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnalysisSource {
    /// No remote classifier is configured.
    Local,
    /// Local and remote analyses were merged.
    Hybrid,
    /// The remote classifier failed; the local analysis was used alone.
    Fallback,
}

impl AnalysisSource {
    pub fn as_str(self) -> &'static str {
        match self {
            AnalysisSource::Local => "local",
            AnalysisSource::Hybrid => "hybrid",
            AnalysisSource::Fallback => "fallback",
        }
    }
}

impl std::fmt::Display for AnalysisSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Analysis plus the intervention decision for one chat message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assessment {
    pub analysis: RiskAnalysis,
    pub source: AnalysisSource,
    pub tier: InterventionTier,
    /// Message to show the user; empty when `tier` is `None`.
    pub intervention: String,
}

/// Risk analyzer, optionally backed by a remote classifier.
///
/// Without a remote classifier this is a pure local analyzer. Cheap to clone.
#[derive(Clone)]
pub struct RiskAnalyzer {
    local: LocalClassifier,
    remote: Option<Arc<dyn RemoteClassifier>>,
    remote_timeout: Duration,
    responder: Responder,
}

impl std::fmt::Debug for RiskAnalyzer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RiskAnalyzer")
            .field("remote", &self.remote.as_ref().map(|r| r.name()))
            .field("remote_timeout", &self.remote_timeout)
            .finish_non_exhaustive()
    }
}

impl RiskAnalyzer {
    /// Create a local-only analyzer around the given classifier.
    pub fn new(local: LocalClassifier) -> Self {
        Self {
            local,
            remote: None,
            remote_timeout: DEFAULT_REMOTE_TIMEOUT,
            responder: Responder::default(),
        }
    }

    /// Local-only analyzer with the default keyword scorer.
    pub fn local_only() -> Self {
        Self::new(LocalClassifier::new())
    }

    /// Analyzer with timeout and responder settings from configuration.
    ///
    /// The remote classifier itself is attached with [`with_remote`](Self::with_remote).
    pub fn from_config(config: &NatConfig) -> Self {
        Self::local_only()
            .with_timeout(Duration::from_secs(config.remote.timeout_secs))
            .with_responder(Responder::new(config.responder.default_user_name.clone()))
    }

    pub fn with_remote(mut self, remote: Arc<dyn RemoteClassifier>) -> Self {
        self.remote = Some(remote);
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.remote_timeout = timeout;
        self
    }

    pub fn with_responder(mut self, responder: Responder) -> Self {
        self.responder = responder;
        self
    }

    /// Whether a remote classifier is attached.
    pub fn is_hybrid(&self) -> bool {
        self.remote.is_some()
    }

    /// Local analysis only.
    pub fn classify_local(&self, message: &str) -> RiskAnalysis {
        self.local.classify(message)
    }

    /// Analyze a message. Never fails: remote errors resolve to the local analysis.
    pub async fn analyze_risk(&self, message: &str, user_id: Option<&str>) -> RiskAnalysis {
        self.analyze_with_source(message, user_id).await.0
    }

    /// Analyze a message and select the intervention message.
    pub async fn assess(
        &self,
        message: &str,
        user_id: Option<&str>,
        user_name: Option<&str>,
    ) -> Assessment {
        let (analysis, source) = self.analyze_with_source(message, user_id).await;
        let tier = InterventionTier::for_level(analysis.level);
        let intervention = self.responder.respond(&analysis, user_name);

        if tier != InterventionTier::None {
            recording::record_intervention(tier.as_str());
            info!(
                level = analysis.level,
                flags = ?analysis.flag_names(),
                tier = tier.as_str(),
                "intervention message selected"
            );
        }

        Assessment {
            analysis,
            source,
            tier,
            intervention,
        }
    }

    /// The intervention message for an analysis (empty below level 7).
    pub fn respond(&self, analysis: &RiskAnalysis, user_name: Option<&str>) -> String {
        self.responder.respond(analysis, user_name)
    }

    async fn analyze_with_source(
        &self,
        message: &str,
        user_id: Option<&str>,
    ) -> (RiskAnalysis, AnalysisSource) {
        // The message text is never logged, only its size and the outcome.
        let fallback = self.local.classify(message);
        debug!(
            message_len = message.len(),
            level = fallback.level,
            flags = ?fallback.flag_names(),
            "local risk analysis complete"
        );

        let Some(remote) = &self.remote else {
            recording::record_analysis(AnalysisSource::Local.as_str());
            return (fallback, AnalysisSource::Local);
        };

        match self.call_remote(remote.as_ref(), message, user_id).await {
            Ok(response) => {
                debug!(
                    classifier = remote.name(),
                    medical_risk = response.medical_risk,
                    psychological_risk = response.psychological_risk,
                    action = %response.recommended_action,
                    confidence = response.confidence,
                    "remote risk classification received"
                );
                let edge = edge_analysis(&response, &fallback);
                let merged = merge(&fallback, &edge);
                recording::record_analysis(AnalysisSource::Hybrid.as_str());
                (merged, AnalysisSource::Hybrid)
            }
            Err(e) => {
                warn!(
                    classifier = remote.name(),
                    error = %e,
                    transient = e.is_transient(),
                    "remote risk classification failed, using local analysis"
                );
                recording::record_remote_failure(e.kind());
                recording::record_analysis(AnalysisSource::Fallback.as_str());
                (fallback, AnalysisSource::Fallback)
            }
        }
    }

    async fn call_remote(
        &self,
        remote: &dyn RemoteClassifier,
        message: &str,
        user_id: Option<&str>,
    ) -> Result<RemoteClassification, NatError> {
        let request = ClassificationRequest::new(message, user_id);
        let started = Instant::now();

        let result = tokio::time::timeout(self.remote_timeout, remote.classify(&request))
            .await
            .map_err(|_| NatError::Timeout {
                duration: self.remote_timeout,
            })?;

        recording::record_remote_latency(started.elapsed().as_secs_f64());
        result
    }
}

impl Default for RiskAnalyzer {
    fn default() -> Self {
        Self::local_only()
    }
}
