//! Application configuration (§4.7).
//!
//! Compiled-in defaults, optionally overridden by a TOML file (path from
//! `--config` / `RAIL_CONFIG`, mirroring how this codebase's bot binary
//! resolves its own config path), then by `RAIL_`-prefixed environment
//! variables — the layering the rest of this codebase uses `config`-crate
//! sources for.

use crate::error::{AppError, AppResult};
use coach_inventory::CapacityConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;

fn default_waiting_capacity() -> usize {
    10
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub capacity: CapacityConfig,
    #[serde(default = "default_waiting_capacity")]
    pub waiting_capacity: usize,
    #[serde(default)]
    pub http: coach_http::HttpConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            capacity: CapacityConfig::default(),
            waiting_capacity: default_waiting_capacity(),
            http: coach_http::HttpConfig::default(),
        }
    }
}

impl AppConfig {
    /// Resolve the config file path: `--config` CLI arg > `RAIL_CONFIG` env
    /// var > no file (compiled defaults only).
    pub fn resolve_path(cli_arg: Option<String>) -> Option<String> {
        cli_arg.or_else(|| std::env::var("RAIL_CONFIG").ok())
    }

    /// Load defaults, merge a TOML file if one is configured and exists,
    /// then merge `RAIL_`-prefixed environment variable overrides. Fields
    /// absent from every source fall back to their `#[serde(default)]`
    /// values, so an empty builder still deserializes into compiled
    /// defaults.
    pub fn load(cli_arg: Option<String>) -> AppResult<Self> {
        let mut builder = config::Config::builder();

        if let Some(path) = Self::resolve_path(cli_arg) {
            if Path::new(&path).exists() {
                tracing::info!(config_path = %path, "loading configuration file");
                builder = builder.add_source(config::File::with_name(&path));
            } else {
                tracing::warn!(config_path = %path, "configured path not found, using defaults");
            }
        }

        let settings = builder
            .add_source(config::Environment::with_prefix("RAIL").separator("__"))
            .build()
            .map_err(|e| AppError::Config(e.to_string()))?;

        settings.try_deserialize().map_err(|e| AppError::Config(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_load_with_no_file_present() {
        let cfg = AppConfig::load(None).unwrap();
        assert_eq!(cfg.capacity.lower, 21);
        assert_eq!(cfg.waiting_capacity, 10);
        assert_eq!(cfg.http.port, 8080);
    }

    #[test]
    fn resolve_path_prefers_cli_arg_over_env() {
        std::env::set_var("RAIL_CONFIG", "from_env.toml");
        let resolved = AppConfig::resolve_path(Some("from_cli.toml".to_string()));
        assert_eq!(resolved.as_deref(), Some("from_cli.toml"));
        std::env::remove_var("RAIL_CONFIG");
    }

    #[test]
    fn resolve_path_falls_back_to_env_var() {
        std::env::set_var("RAIL_CONFIG", "from_env.toml");
        let resolved = AppConfig::resolve_path(None);
        assert_eq!(resolved.as_deref(), Some("from_env.toml"));
        std::env::remove_var("RAIL_CONFIG");
    }
}
