// SPDX-FileCopyrightText: 2026 Nossa Maternidade Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Supabase Edge Function classifier for the NAT-AI risk pipeline.
//!
//! This crate implements [`RemoteClassifier`] over the risk classification
//! Edge Function. Its errors are never surfaced to users: the analyzer falls
//! back to the local classification whenever a call fails.

pub mod client;
pub mod types;

use std::time::Duration;

use async_trait::async_trait;
use nat_config::model::RemoteConfig;
use nat_core::{ClassificationRequest, NatError, RemoteClassification, RemoteClassifier};
use tracing::info;

use crate::client::EdgeClient;

/// Environment variable consulted when `remote.anon_key` is not configured.
pub const ANON_KEY_ENV: &str = "SUPABASE_ANON_KEY";

/// Remote classifier backed by the Edge Function.
///
/// Anon key resolution order: config -> `SUPABASE_ANON_KEY` env var -> error.
#[derive(Debug, Clone)]
pub struct EdgeClassifier {
    client: EdgeClient,
}

impl EdgeClassifier {
    /// Creates a classifier from the `[remote]` configuration section.
    pub fn new(config: &RemoteConfig) -> Result<Self, NatError> {
        let url = config
            .url
            .as_deref()
            .filter(|u| !u.is_empty())
            .ok_or_else(|| NatError::Config("remote.url is required for the edge classifier".into()))?;
        let anon_key = resolve_anon_key(&config.anon_key)?;

        let client = EdgeClient::new(
            url,
            &anon_key,
            Duration::from_secs(config.timeout_secs),
            config.max_retries,
        )?;

        info!(
            url,
            timeout_secs = config.timeout_secs,
            max_retries = config.max_retries,
            "edge classifier initialized"
        );

        Ok(Self { client })
    }
}

#[async_trait]
impl RemoteClassifier for EdgeClassifier {
    fn name(&self) -> &str {
        "edge"
    }

    async fn classify(
        &self,
        request: &ClassificationRequest,
    ) -> Result<RemoteClassification, NatError> {
        self.client.classify(request).await
    }
}

/// Resolves the anon key: config first, then `SUPABASE_ANON_KEY`.
fn resolve_anon_key(config_key: &Option<String>) -> Result<String, NatError> {
    pick_anon_key(config_key, std::env::var(ANON_KEY_ENV).ok())
}

fn pick_anon_key(config_key: &Option<String>, env_key: Option<String>) -> Result<String, NatError> {
    if let Some(key) = config_key
        && !key.is_empty()
    {
        return Ok(key.clone());
    }

    env_key.filter(|k| !k.is_empty()).ok_or_else(|| {
        NatError::Config(format!(
            "Supabase anon key not found. Set remote.anon_key in config or {ANON_KEY_ENV} environment variable."
        ))
    })
}
