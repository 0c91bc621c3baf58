// SPDX-FileCopyrightText: 2026 Nossa Maternidade Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the NAT-AI risk pipeline.

use thiserror::Error;

/// The error type used across the pipeline's fallible internals.
///
/// None of these ever reach the chat flow: the analyzer converts every
/// variant into a local-only fallback.
#[derive(Debug, Error)]
pub enum NatError {
    /// Configuration errors (invalid URL, missing key, bad header value).
    #[error("configuration error: {0}")]
    Config(String),

    /// Remote classifier errors (network failure, non-2xx, malformed JSON).
    #[error("classifier error: {message}")]
    Classifier {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Operation timed out.
    #[error("operation timed out after {duration:?}")]
    Timeout { duration: std::time::Duration },

    /// Internal or unexpected errors.
    #[error("internal error: {0}")]
    Internal(String),
}

impl NatError {
    /// Whether the failure is worth a metrics label of "transient".
    ///
    /// Classifier and timeout errors come from the network; config and
    /// internal errors indicate a deployment problem.
    pub fn is_transient(&self) -> bool {
        matches!(self, NatError::Classifier { .. } | NatError::Timeout { .. })
    }

    /// Short label used for the `reason` dimension of failure counters.
    pub fn kind(&self) -> &'static str {
        match self {
            NatError::Config(_) => "config",
            NatError::Classifier { .. } => "classifier",
            NatError::Timeout { .. } => "timeout",
            NatError::Internal(_) => "internal",
        }
    }
}
