// SPDX-FileCopyrightText: 2026 Strategist Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration loader using Figment for layered config merging.
//!
//! Supports the XDG hierarchy: `./strategist.toml` >
//! `~/.config/strategist/strategist.toml` > `/etc/strategist/strategist.toml`
//! with environment variable overrides via the `STRATEGIST_` prefix.

#![allow(clippy::result_large_err)] // figment::Error is external and cannot be boxed without wrapper

use std::path::Path;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};

use crate::model::StrategistConfig;

/// Load configuration from the standard XDG hierarchy with env var overrides.
///
/// Merge order (later overrides earlier):
/// 1. Compiled defaults
/// 2. `/etc/strategist/strategist.toml` (system-wide)
/// 3. `~/.config/strategist/strategist.toml` (user XDG config)
/// 4. `./strategist.toml` (local directory)
/// 5. `STRATEGIST_*` environment variables
pub fn load_config() -> Result<StrategistConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(StrategistConfig::default()))
        .merge(Toml::file("/etc/strategist/strategist.toml"))
        .merge(Toml::file(
            dirs::config_dir()
                .map(|d| d.join("strategist/strategist.toml"))
                .unwrap_or_default(),
        ))
        .merge(Toml::file("strategist.toml"))
        .merge(env_provider())
        .extract()
}

/// Load configuration from a TOML string only (no XDG lookup, no env).
///
/// Used for testing and explicit config specification.
pub fn load_config_from_str(toml_content: &str) -> Result<StrategistConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(StrategistConfig::default()))
        .merge(Toml::string(toml_content))
        .extract()
}

/// Load configuration from a specific file path with env var overrides.
pub fn load_config_from_path(path: &Path) -> Result<StrategistConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(StrategistConfig::default()))
        .merge(Toml::file(path))
        .merge(env_provider())
        .extract()
}

/// Create the environment variable provider using explicit `map()` for
/// section-to-dot mapping.
///
/// Uses `Env::map()` NOT `Env::split("_")` to avoid ambiguity with
/// underscore-containing key names: `STRATEGIST_ANTHROPIC_API_KEY` must
/// map to `anthropic.api_key`, not `anthropic.api.key`.
fn env_provider() -> Env {
    Env::prefixed("STRATEGIST_").map(|key| {
        // `key` is the lowercased env var name with the prefix stripped,
        // e.g. STRATEGIST_SERVER_PORT -> "server_port".
        let mapped = key
            .as_str()
            .replacen("app_", "app.", 1)
            .replacen("server_", "server.", 1)
            .replacen("storage_", "storage.", 1)
            .replacen("anthropic_", "anthropic.", 1);
        mapped.into()
    })
}
