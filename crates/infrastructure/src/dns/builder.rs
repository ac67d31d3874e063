use super::cache::InMemoryAnalysisCache;
use super::exchanger::HickoryExchanger;
use linktracer_application::ports::{AnalysisCache, DnsExchanger};
use linktracer_application::AnalyzeDomainUseCase;
use linktracer_domain::AnalyzerConfig;
use std::sync::Arc;
use tracing::info;

/// Wires an analyzer from its configuration.
///
/// Without overrides it gets a `HickoryExchanger` using the configured
/// timeout and its own `InMemoryAnalysisCache`, so the cache lives exactly as
/// long as the analyzer.
pub struct AnalyzerBuilder {
    config: AnalyzerConfig,
    exchanger: Option<Arc<dyn DnsExchanger>>,
    cache: Option<Arc<dyn AnalysisCache>>,
}

impl AnalyzerBuilder {
    pub fn new() -> Self {
        Self {
            config: AnalyzerConfig::default(),
            exchanger: None,
            cache: None,
        }
    }

    pub fn with_config(mut self, config: AnalyzerConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_exchanger(mut self, exchanger: Arc<dyn DnsExchanger>) -> Self {
        self.exchanger = Some(exchanger);
        self
    }

    pub fn with_cache(mut self, cache: Arc<dyn AnalysisCache>) -> Self {
        self.cache = Some(cache);
        self
    }

    pub fn build(self) -> AnalyzeDomainUseCase {
        info!(
            name_servers = ?self.config.name_servers,
            timeout_ms = self.config.timeout_ms,
            cache_enabled = self.config.cache_enabled,
            cache_ttl_secs = self.config.cache_ttl_secs,
            "Building domain analyzer"
        );

        let exchanger = self
            .exchanger
            .unwrap_or_else(|| {
                Arc::new(HickoryExchanger::new(self.config.timeout())) as Arc<dyn DnsExchanger>
            });
        let cache = self
            .cache
            .unwrap_or_else(|| Arc::new(InMemoryAnalysisCache::new()) as Arc<dyn AnalysisCache>);

        AnalyzeDomainUseCase::new(exchanger, cache, self.config)
    }
}

impl Default for AnalyzerBuilder {
    fn default() -> Self {
        Self::new()
    }
}
