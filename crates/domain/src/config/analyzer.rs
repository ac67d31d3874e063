use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::time::Duration;

use super::errors::ConfigError;

/// Longest accepted cache TTL: one week.
pub const MAX_CACHE_TTL_SECS: u64 = 7 * 24 * 3600;

/// Settings shared read-only by every analysis.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct AnalyzerConfig {
    /// Per-exchange timeout in milliseconds
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,

    /// Reserved. Accepted for compatibility, not consulted by any retry loop;
    /// the nameserver list is the only fallback.
    #[serde(default = "default_retry_count")]
    pub retry_count: u32,

    /// Nameservers tried in order, as "host:port"
    #[serde(default = "default_name_servers")]
    pub name_servers: Vec<String>,

    #[serde(default = "default_true")]
    pub cache_enabled: bool,

    #[serde(default = "default_cache_ttl_secs")]
    pub cache_ttl_secs: u64,
}

impl AnalyzerConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_secs)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.timeout_ms == 0 {
            return Err(ConfigError::Validation(
                "timeout_ms must be greater than zero".to_string(),
            ));
        }

        if self.cache_ttl_secs > MAX_CACHE_TTL_SECS {
            return Err(ConfigError::Validation(format!(
                "cache_ttl_secs must be at most {} (got {})",
                MAX_CACHE_TTL_SECS, self.cache_ttl_secs
            )));
        }

        if self.name_servers.is_empty() {
            return Err(ConfigError::Validation(
                "at least one nameserver is required".to_string(),
            ));
        }

        for server in &self.name_servers {
            server.parse::<SocketAddr>().map_err(|e| {
                ConfigError::Validation(format!(
                    "nameserver '{}' is not a host:port address: {}",
                    server, e
                ))
            })?;
        }

        Ok(())
    }
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            timeout_ms: default_timeout_ms(),
            retry_count: default_retry_count(),
            name_servers: default_name_servers(),
            cache_enabled: true,
            cache_ttl_secs: default_cache_ttl_secs(),
        }
    }
}

fn default_timeout_ms() -> u64 {
    5000
}

fn default_retry_count() -> u32 {
    3
}

fn default_name_servers() -> Vec<String> {
    vec!["8.8.8.8:53".to_string(), "8.8.4.4:53".to_string()]
}

fn default_true() -> bool {
    true
}

fn default_cache_ttl_secs() -> u64 {
    3600
}
