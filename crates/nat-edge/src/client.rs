// SPDX-FileCopyrightText: 2026 Nossa Maternidade Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP client for the risk classification Edge Function.
//!
//! Provides [`EdgeClient`] which handles authentication headers, the request
//! timeout, and transient error retry.

use std::time::Duration;

use nat_core::{ClassificationRequest, NatError, RemoteClassification};
use reqwest::header::{HeaderMap, HeaderValue};
use tracing::{debug, warn};

use crate::types::EdgeErrorResponse;

/// Pause before retrying a transient failure.
const RETRY_DELAY: Duration = Duration::from_millis(500);

/// HTTP client for Edge Function communication.
///
/// Manages the Supabase auth headers, connection pooling, and retry logic
/// for transient errors (429, 500, 503, 529).
#[derive(Debug, Clone)]
pub struct EdgeClient {
    client: reqwest::Client,
    url: String,
    max_retries: u32,
}

impl EdgeClient {
    /// Creates a new Edge Function client.
    ///
    /// # Arguments
    /// * `url` - Full URL of the classification function
    /// * `anon_key` - Supabase anon key, sent as bearer token and `apikey`
    /// * `timeout` - Per-request timeout
    /// * `max_retries` - Retries on transient statuses
    pub fn new(
        url: impl Into<String>,
        anon_key: &str,
        timeout: Duration,
        max_retries: u32,
    ) -> Result<Self, NatError> {
        let mut headers = HeaderMap::new();
        headers.insert(
            "authorization",
            HeaderValue::from_str(&format!("Bearer {anon_key}"))
                .map_err(|e| NatError::Config(format!("invalid anon key header value: {e}")))?,
        );
        headers.insert(
            "apikey",
            HeaderValue::from_str(anon_key)
                .map_err(|e| NatError::Config(format!("invalid anon key header value: {e}")))?,
        );
        headers.insert("content-type", HeaderValue::from_static("application/json"));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(timeout)
            .build()
            .map_err(|e| NatError::Classifier {
                message: format!("failed to build HTTP client: {e}"),
                source: Some(Box::new(e)),
            })?;

        Ok(Self {
            client,
            url: url.into(),
            max_retries,
        })
    }

    /// Sends a classification request.
    ///
    /// On transient errors, retries up to `max_retries` times after a short delay.
    pub async fn classify(
        &self,
        request: &ClassificationRequest,
    ) -> Result<RemoteClassification, NatError> {
        let mut last_error = None;

        for attempt in 0..=self.max_retries {
            if attempt > 0 {
                warn!(attempt, "retrying classification request after transient error");
                tokio::time::sleep(RETRY_DELAY).await;
            }

            let response = self
                .client
                .post(&self.url)
                .json(request)
                .send()
                .await
                .map_err(|e| NatError::Classifier {
                    message: format!("HTTP request failed: {e}"),
                    source: Some(Box::new(e)),
                })?;

            let status = response.status();
            debug!(status = %status, attempt, "classification response received");

            if status.is_success() {
                let body = response.text().await.map_err(|e| NatError::Classifier {
                    message: format!("failed to read response body: {e}"),
                    source: Some(Box::new(e)),
                })?;
                return serde_json::from_str(&body).map_err(|e| NatError::Classifier {
                    message: format!("failed to parse classifier response: {e}"),
                    source: Some(Box::new(e)),
                });
            }

            if is_transient_error(status) && attempt < self.max_retries {
                let body = response.text().await.unwrap_or_default();
                warn!(status = %status, body = %body, "transient error, will retry");
                last_error = Some(NatError::Classifier {
                    message: format!("classifier returned {status}: {body}"),
                    source: None,
                });
                continue;
            }

            // Non-transient error or exhausted retries.
            let body = response.text().await.unwrap_or_default();
            let message = match serde_json::from_str::<EdgeErrorResponse>(&body) {
                Ok(api_err) => format!("classifier error ({status}): {}", api_err.describe()),
                Err(_) => format!("classifier returned {status}: {body}"),
            };
            return Err(NatError::Classifier {
                message,
                source: None,
            });
        }

        Err(last_error.unwrap_or_else(|| NatError::Classifier {
            message: "classification request failed after retries".into(),
            source: None,
        }))
    }
}

/// Returns true for HTTP status codes that indicate transient errors worth retrying.
fn is_transient_error(status: reqwest::StatusCode) -> bool {
    matches!(status.as_u16(), 429 | 500 | 503 | 529)
}
