//! Layered configuration for the canon-resolver service
//!
//! A `Config` struct deriving `Serialize`/`Deserialize`, a coded `Default`,
//! and a `load()` that reads a TOML file if present or writes the defaults
//! out for next time.

use serde::{Deserialize, Serialize};

use crate::errors::{AppError, AppResult};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub web: WebConfig,
    pub resolver: ResolverConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResolverConfig {
    /// Maximum Levenshtein distance a fuzzy candidate may have to be
    /// considered at all.
    pub max_edit_distance: u32,
    /// Maximum number of fuzzy candidates returned per probed split.
    pub max_candidates: usize,
    /// Below this canonical-index size, `resolve` runs inline on the
    /// calling task; at or above it, the web layer offloads the call to
    /// `spawn_blocking` to avoid starving the async reactor.
    pub blocking_threshold: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            web: WebConfig {
                host: "0.0.0.0".to_string(),
                port: 8080,
            },
            resolver: ResolverConfig {
                max_edit_distance: 6,
                max_candidates: 5,
                blocking_threshold: 50_000,
            },
        }
    }
}

impl Config {
    /// Load configuration from `$CONFIG_FILE` (default `config.toml`), or
    /// write out the coded defaults if the file does not exist yet.
    pub fn load() -> AppResult<Self> {
        let config_file =
            std::env::var("CONFIG_FILE").unwrap_or_else(|_| "config.toml".to_string());

        if std::path::Path::new(&config_file).exists() {
            let contents = std::fs::read_to_string(&config_file).map_err(|e| {
                AppError::configuration(format!("reading {config_file}: {e}"))
            })?;
            toml::from_str(&contents)
                .map_err(|e| AppError::configuration(format!("parsing {config_file}: {e}")))
        } else {
            let default_config = Self::default();
            let contents = toml::to_string_pretty(&default_config)
                .map_err(|e| AppError::configuration(format!("encoding defaults: {e}")))?;
            std::fs::write(&config_file, contents)
                .map_err(|e| AppError::configuration(format!("writing {config_file}: {e}")))?;
            Ok(default_config)
        }
    }
}
