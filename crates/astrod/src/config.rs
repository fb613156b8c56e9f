//! Configuration management for astrod.
//!
//! Loads settings from /etc/astro/config.toml or uses defaults.

use anyhow::{Context, Result};
use astro_common::{AiConfig, FallbackConfig};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::{info, warn};

/// Config file path
pub const CONFIG_PATH: &str = "/etc/astro/config.toml";

/// Default config file path for fallback
pub const DEFAULT_CONFIG_PATH: &str = "/var/lib/astro/config.toml";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Listen address
    #[serde(default = "default_bind")]
    pub bind: String,
}

fn default_bind() -> String {
    "127.0.0.1:5000".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { bind: default_bind() }
    }
}

/// Prediction accuracy store
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackingConfig {
    #[serde(default)]
    pub enabled: bool,

    #[serde(default = "default_db_path")]
    pub db_path: String,
}

fn default_db_path() -> String {
    "/var/lib/astro/accuracy.db".to_string()
}

impl Default for TrackingConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            db_path: default_db_path(),
        }
    }
}

/// Main daemon configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub ai: AiConfig,

    #[serde(default)]
    pub fallback: FallbackConfig,

    #[serde(default)]
    pub tracking: TrackingConfig,
}

impl Config {
    /// Load from an explicit path, or the system locations, or defaults.
    ///
    /// An explicit path that fails to load is an error; the system
    /// locations are optional.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load_from_path(path)
                .with_context(|| format!("Failed to load config from {}", path.display()));
        }
        Ok(Self::load_from_path(Path::new(CONFIG_PATH))
            .or_else(|_| Self::load_from_path(Path::new(DEFAULT_CONFIG_PATH)))
            .unwrap_or_else(|e| {
                warn!("Config not found, using defaults: {}", e);
                Config::default()
            }))
    }

    fn load_from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        info!("Loaded config from {}", path.display());
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use astro_common::Provider;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.server.bind, "127.0.0.1:5000");
        assert!(!config.tracking.enabled);
        assert_eq!(config.ai.provider, Provider::Gemini);
        assert_eq!(config.fallback.seed, None);
    }

    #[test]
    fn test_partial_config() {
        let toml_str = r#"
[server]
bind = "0.0.0.0:8080"

[ai]
provider = "openai"
timeout_secs = 12

[fallback]
seed = 42
"#;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.server.bind, "0.0.0.0:8080");
        assert_eq!(config.ai.provider, Provider::OpenAi);
        assert_eq!(config.ai.timeout_secs, 12);
        assert_eq!(config.ai.api_key_env, "GEMINI_API_KEY");
        assert_eq!(config.fallback.seed, Some(42));
        assert_eq!(config.tracking.db_path, "/var/lib/astro/accuracy.db");
    }

    #[test]
    fn test_load_explicit_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[tracking]\nenabled = true\ndb_path = \"/tmp/a.db\"").unwrap();
        let config = Config::load(Some(file.path())).unwrap();
        assert!(config.tracking.enabled);
        assert_eq!(config.tracking.db_path, "/tmp/a.db");
    }

    #[test]
    fn test_explicit_path_errors_are_reported() {
        let dir = tempfile::TempDir::new().unwrap();
        assert!(Config::load(Some(&dir.path().join("missing.toml"))).is_err());
    }
}
