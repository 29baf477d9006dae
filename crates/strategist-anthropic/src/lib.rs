// SPDX-FileCopyrightText: 2026 Strategist Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Anthropic Claude gateway for the Strategist backend.
//!
//! This crate implements [`strategist_core::AiGateway`] against the
//! Anthropic Messages API: single-shot completion with an explicit
//! timeout and a single retry on transient errors.

pub mod client;
pub mod strategist;
pub mod types;

pub use client::AnthropicClient;
pub use strategist::ClaudeStrategist;

use strategist_core::StrategistError;

/// Resolve the API key: configuration first, `ANTHROPIC_API_KEY`
/// environment variable second.
pub fn resolve_api_key(configured: &Option<String>) -> Result<String, StrategistError> {
    if let Some(key) = configured
        && !key.trim().is_empty()
    {
        return Ok(key.clone());
    }
    match std::env::var("ANTHROPIC_API_KEY") {
        Ok(key) if !key.trim().is_empty() => Ok(key),
        _ => Err(StrategistError::Config(
            "Anthropic API key required: set anthropic.api_key in strategist.toml \
             or the ANTHROPIC_API_KEY environment variable"
                .to_string(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn configured_key_wins() {
        let key = resolve_api_key(&Some("sk-ant-configured".into())).unwrap();
        assert_eq!(key, "sk-ant-configured");
    }

    #[test]
    fn blank_configured_key_is_ignored() {
        // Falls through to the env var; with neither set this errors.
        // The env var may be present on developer machines, so only the
        // configured-key path is asserted strictly here.
        let result = resolve_api_key(&Some("   ".into()));
        if let Ok(key) = result {
            assert!(!key.trim().is_empty());
        }
    }
}
