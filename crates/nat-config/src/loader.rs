// SPDX-FileCopyrightText: 2026 Nossa Maternidade Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration loader using Figment for layered config merging.
//!
//! Supports XDG hierarchy: `./nat.toml` > `~/.config/nat/nat.toml` > `/etc/nat/nat.toml`
//! with environment variable overrides via `NAT_` prefix.

#![allow(clippy::result_large_err)] // figment::Error is external and cannot be boxed without wrapper

use std::path::Path;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};

use crate::model::NatConfig;

/// Load configuration from the standard XDG hierarchy with env var overrides.
///
/// Merge order (later overrides earlier):
/// 1. Compiled defaults
/// 2. `/etc/nat/nat.toml` (system-wide)
/// 3. `~/.config/nat/nat.toml` (user XDG config)
/// 4. `./nat.toml` (local directory)
/// 5. `NAT_*` environment variables
pub fn load_config() -> Result<NatConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(NatConfig::default()))
        .merge(Toml::file("/etc/nat/nat.toml"))
        .merge(Toml::file(
            dirs::config_dir()
                .map(|d| d.join("nat/nat.toml"))
                .unwrap_or_default(),
        ))
        .merge(Toml::file("nat.toml"))
        .merge(env_provider())
        .extract()
}

/// Load configuration from a TOML string only (no XDG lookup, no env).
pub fn load_config_from_str(toml_content: &str) -> Result<NatConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(NatConfig::default()))
        .merge(Toml::string(toml_content))
        .extract()
}

/// Load configuration from a specific file path with env var overrides.
pub fn load_config_from_path(path: &Path) -> Result<NatConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(NatConfig::default()))
        .merge(Toml::file(path))
        .merge(env_provider())
        .extract()
}

/// Environment variable provider with explicit section-to-dot mapping.
///
/// Uses `Env::map()` rather than `Env::split("_")` so that underscore-containing
/// keys survive: `NAT_REMOTE_ANON_KEY` must map to `remote.anon_key`, not
/// `remote.anon.key`.
fn env_provider() -> Env {
    Env::prefixed("NAT_").map(|key| {
        let mapped = key
            .as_str()
            .to_ascii_lowercase()
            .replacen("logging_", "logging.", 1)
            .replacen("remote_", "remote.", 1)
            .replacen("responder_", "responder.", 1);
        mapped.into()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn env_overrides_map_to_sections() {
        figment::Jail::expect_with(|jail| {
            jail.set_env("NAT_REMOTE_ANON_KEY", "anon-123");
            jail.set_env("NAT_REMOTE_TIMEOUT_SECS", "5");
            jail.set_env("NAT_LOGGING_LOG_LEVEL", "debug");
            jail.set_env("NAT_RESPONDER_DEFAULT_USER_NAME", "mamãe");
            jail.create_file("nat.toml", "[remote]\nenabled = true\nurl = \"https://x.supabase.co/functions/v1/classify-risk\"\n")?;

            let config = load_config_from_path(Path::new("nat.toml"))?;
            assert!(config.remote.enabled);
            assert_eq!(config.remote.anon_key.as_deref(), Some("anon-123"));
            assert_eq!(config.remote.timeout_secs, 5);
            assert_eq!(config.logging.log_level, "debug");
            assert_eq!(config.responder.default_user_name, "mamãe");
            Ok(())
        });
    }
}
