// SPDX-FileCopyrightText: 2026 Nossa Maternidade Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Post-deserialization validation for configuration values.
//!
//! Validates semantic constraints that cannot be expressed via serde attributes,
//! such as URL schemes, timeout bounds, and known log levels.

use crate::diagnostic::ConfigError;
use crate::model::NatConfig;

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

const MAX_TIMEOUT_SECS: u64 = 120;

/// Validate a deserialized configuration for semantic correctness.
///
/// Returns `Ok(())` if all validations pass, or `Err(Vec<ConfigError>)` with
/// all collected validation errors (does not fail fast).
pub fn validate_config(config: &NatConfig) -> Result<(), Vec<ConfigError>> {
    let mut errors = Vec::new();

    let level = config.logging.log_level.trim().to_lowercase();
    if !LOG_LEVELS.contains(&level.as_str()) {
        errors.push(ConfigError::Validation {
            message: format!(
                "logging.log_level `{}` is not one of: {}",
                config.logging.log_level,
                LOG_LEVELS.join(", ")
            ),
        });
    }

    if config.remote.enabled {
        match config.remote.url.as_deref().map(str::trim) {
            None | Some("") => errors.push(ConfigError::Validation {
                message: "remote.url must be set when remote.enabled = true".to_string(),
            }),
            Some(url) if !(url.starts_with("https://") || url.starts_with("http://")) => {
                errors.push(ConfigError::Validation {
                    message: format!("remote.url `{url}` must start with http:// or https://"),
                });
            }
            Some(_) => {}
        }
    }

    if config.remote.timeout_secs == 0 || config.remote.timeout_secs > MAX_TIMEOUT_SECS {
        errors.push(ConfigError::Validation {
            message: format!(
                "remote.timeout_secs must be between 1 and {MAX_TIMEOUT_SECS}, got {}",
                config.remote.timeout_secs
            ),
        });
    }

    if config.responder.default_user_name.trim().is_empty() {
        errors.push(ConfigError::Validation {
            message: "responder.default_user_name must not be empty".to_string(),
        });
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
