use serde::{Deserialize, Serialize};
use std::path::Path;

use super::analyzer::AnalyzerConfig;
use super::errors::ConfigError;
use super::logging::LoggingConfig;

/// Root configuration, loaded from an optional TOML file.
///
/// ```toml
/// [analyzer]
/// timeout_ms = 5000
/// name_servers = ["8.8.8.8:53", "1.1.1.1:53"]
/// cache_enabled = true
/// cache_ttl_secs = 3600
///
/// [logging]
/// level = "info"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub analyzer: AnalyzerConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Values given on the command line; they win over the file.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub name_servers: Vec<String>,
    pub timeout_ms: Option<u64>,
    pub no_cache: bool,
    pub log_level: Option<String>,
}

impl Config {
    /// Load from `path` when given, otherwise start from defaults, then apply overrides.
    pub fn load(path: Option<&str>, overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.apply_overrides(overrides);
        Ok(config)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::FileRead {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    pub fn apply_overrides(&mut self, overrides: CliOverrides) {
        if !overrides.name_servers.is_empty() {
            self.analyzer.name_servers = overrides.name_servers;
        }
        if let Some(timeout_ms) = overrides.timeout_ms {
            self.analyzer.timeout_ms = timeout_ms;
        }
        if overrides.no_cache {
            self.analyzer.cache_enabled = false;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.analyzer.validate()?;

        if !LoggingConfig::is_valid_level(&self.logging.level) {
            return Err(ConfigError::Validation(format!(
                "unknown log level '{}'",
                self.logging.level
            )));
        }

        Ok(())
    }
}
