// SPDX-FileCopyrightText: 2026 Nossa Maternidade Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Wire types specific to the Edge Function.
//!
//! The request and success bodies are the shared
//! [`ClassificationRequest`](nat_core::ClassificationRequest) and
//! [`RemoteClassification`](nat_core::RemoteClassification).

use serde::Deserialize;

/// Error body returned by the Edge Function on non-2xx responses.
#[derive(Debug, Clone, Deserialize)]
pub struct EdgeErrorResponse {
    pub error: String,
    #[serde(default)]
    pub details: Option<String>,
}

impl EdgeErrorResponse {
    pub fn describe(&self) -> String {
        match &self.details {
            Some(details) if !details.is_empty() => format!("{}: {details}", self.error),
            _ => self.error.clone(),
        }
    }
}
