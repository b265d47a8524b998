//! Client configuration baked in at build time.
//!
//! A WASM bundle has no process environment, so values are captured with
//! `option_env!` when the crate is compiled:
//!
//! - `CHAT_UI_API_BASE`: prefix for REST paths (default: same origin)
//! - `CHAT_UI_LOG_LEVEL`: console log level (default: `info`)
//! - `CHAT_UI_DEFAULT_TEMPERATURE`: initial sampling temperature
//! - `CHAT_UI_MAX_TOKENS`: initial generation length cap
//!
//! Unparsable values fall back to defaults rather than failing the mount.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::sync::OnceLock;

use crate::net::types::GenerationOptions;

pub const DEFAULT_LOG_LEVEL: log::Level = log::Level::Info;

#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    pub api_base: String,
    pub log_level: log::Level,
    pub generation: GenerationOptions,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self { api_base: String::new(), log_level: DEFAULT_LOG_LEVEL, generation: GenerationOptions::default() }
    }
}

impl ClientConfig {
    /// Build config from the variables captured at compile time.
    #[must_use]
    pub fn from_build_env() -> Self {
        Self::from_lookup(|key| build_var(key).map(str::to_owned))
    }

    /// Build config from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let api_base = lookup("CHAT_UI_API_BASE")
            .map(|raw| raw.trim().trim_end_matches('/').to_owned())
            .unwrap_or(defaults.api_base);
        let log_level = parse_or("CHAT_UI_LOG_LEVEL", &lookup, defaults.log_level);

        let mut generation = defaults.generation;
        generation.temperature = parse_or("CHAT_UI_DEFAULT_TEMPERATURE", &lookup, generation.temperature);
        generation.max_tokens = parse_or("CHAT_UI_MAX_TOKENS", &lookup, generation.max_tokens);

        Self { api_base, log_level, generation }
    }

    /// Join a REST path onto the configured base.
    #[must_use]
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.api_base)
    }
}

/// Process-wide config, resolved once.
pub fn current() -> &'static ClientConfig {
    static CONFIG: OnceLock<ClientConfig> = OnceLock::new();
    CONFIG.get_or_init(ClientConfig::from_build_env)
}

fn parse_or<T: std::str::FromStr>(key: &str, lookup: &impl Fn(&str) -> Option<String>, default: T) -> T {
    lookup(key)
        .and_then(|raw| raw.trim().parse::<T>().ok())
        .unwrap_or(default)
}

fn build_var(key: &str) -> Option<&'static str> {
    match key {
        "CHAT_UI_API_BASE" => option_env!("CHAT_UI_API_BASE"),
        "CHAT_UI_LOG_LEVEL" => option_env!("CHAT_UI_LOG_LEVEL"),
        "CHAT_UI_DEFAULT_TEMPERATURE" => option_env!("CHAT_UI_DEFAULT_TEMPERATURE"),
        "CHAT_UI_MAX_TOKENS" => option_env!("CHAT_UI_MAX_TOKENS"),
        _ => None,
    }
}
