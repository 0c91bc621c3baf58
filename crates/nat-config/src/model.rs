// SPDX-FileCopyrightText: 2026 Nossa Maternidade Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration model structs for the NAT-AI risk pipeline.
//!
//! All structs use `#[serde(deny_unknown_fields)]` to reject unrecognized
//! config keys at startup, providing actionable error messages.

use serde::{Deserialize, Serialize};

/// Top-level configuration.
///
/// All sections are optional and default to a local-only analyzer.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct NatConfig {
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Remote (Edge Function) classifier settings.
    #[serde(default)]
    pub remote: RemoteConfig,

    /// Intervention message settings.
    #[serde(default)]
    pub responder: ResponderConfig,
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct LoggingConfig {
    /// Logging level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Remote classifier configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct RemoteConfig {
    /// Whether the hybrid (local + remote) analysis is used.
    #[serde(default)]
    pub enabled: bool,

    /// Full URL of the classification Edge Function.
    #[serde(default)]
    pub url: Option<String>,

    /// Supabase anon key. `None` falls back to `SUPABASE_ANON_KEY`.
    #[serde(default)]
    pub anon_key: Option<String>,

    /// Upper bound for a single classification call, retries included.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Retries on transient HTTP statuses (429, 500, 503, 529).
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            url: None,
            anon_key: None,
            timeout_secs: default_timeout_secs(),
            max_retries: default_max_retries(),
        }
    }
}

fn default_timeout_secs() -> u64 {
    10
}

fn default_max_retries() -> u32 {
    1
}

/// Intervention responder configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ResponderConfig {
    /// Name used to address the user when none is known.
    #[serde(default = "default_user_name")]
    pub default_user_name: String,
}

impl Default for ResponderConfig {
    fn default() -> Self {
        Self {
            default_user_name: default_user_name(),
        }
    }
}

fn default_user_name() -> String {
    "querida".to_string()
}
