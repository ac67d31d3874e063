use crate::context::QueryContext;
use crate::ports::{AnalysisCache, DnsExchanger};
use crate::services::RecordResolver;
use futures::stream::FuturesUnordered;
use futures::StreamExt;
use linktracer_domain::{
    similarity, validate_domain, AnalysisResult, AnalyzerConfig, DomainError, DomainRecord,
    QueryError, RecordType,
};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, instrument, warn};

/// Analyzes a domain: validate, consult the cache, resolve A/AAAA/MX/TXT
/// concurrently, score similarity against the target and cache the result.
pub struct AnalyzeDomainUseCase {
    resolver: Arc<RecordResolver>,
    cache: Arc<dyn AnalysisCache>,
    config: Arc<AnalyzerConfig>,
}

impl AnalyzeDomainUseCase {
    pub fn new(
        exchanger: Arc<dyn DnsExchanger>,
        cache: Arc<dyn AnalysisCache>,
        config: AnalyzerConfig,
    ) -> Self {
        Self {
            resolver: Arc::new(RecordResolver::new(exchanger)),
            cache,
            config: Arc::new(config),
        }
    }

    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    /// Run one analysis.
    ///
    /// The cache is keyed by `domain` alone, so a hit returns the similarity
    /// computed against whichever target populated the entry.
    #[instrument(skip(self, ctx), fields(domain = %domain, target = %target_domain))]
    pub async fn execute(
        &self,
        ctx: &QueryContext,
        domain: &str,
        target_domain: &str,
    ) -> Result<AnalysisResult, DomainError> {
        validate_domain(domain)?;

        if self.config.cache_enabled {
            if let Some(result) = self.cache.lookup(domain) {
                debug!("Cache HIT");
                return Ok(result);
            }
            debug!("Cache MISS");
        }

        let records = self.resolve_all(ctx, domain).await?;
        let result = AnalysisResult::new(records, similarity(domain, target_domain));

        if self.config.cache_enabled {
            self.cache
                .store(domain, result.clone(), self.config.cache_ttl());
        }

        info!(
            records = result.records.len(),
            similarity = result.similarity,
            "Domain analysis completed"
        );

        Ok(result)
    }

    /// Run one analysis under a fresh context bounded by `timeout`.
    pub async fn execute_with_timeout(
        &self,
        domain: &str,
        target_domain: &str,
        timeout: Duration,
    ) -> Result<AnalysisResult, DomainError> {
        let ctx = QueryContext::with_timeout(timeout);
        self.execute(&ctx, domain, target_domain).await
    }

    /// Fan out one task per record type and fan the outcomes back in.
    ///
    /// Returns as soon as the context is done or a task dies. Tasks still in
    /// flight are detached, not aborted; their results are dropped.
    async fn resolve_all(
        &self,
        ctx: &QueryContext,
        domain: &str,
    ) -> Result<Vec<DomainRecord>, DomainError> {
        let domain: Arc<str> = Arc::from(domain);
        let mut pending = FuturesUnordered::new();

        for (slot, record_type) in RecordType::ALL.into_iter().enumerate() {
            let resolver = Arc::clone(&self.resolver);
            let config = Arc::clone(&self.config);
            let ctx = ctx.clone();
            let domain = Arc::clone(&domain);

            pending.push(tokio::spawn(async move {
                let records = resolver
                    .resolve(&ctx, domain, record_type, &config.name_servers)
                    .await;
                (slot, records)
            }));
        }

        let mut by_type: Vec<Vec<DomainRecord>> = vec![Vec::new(); RecordType::ALL.len()];

        while !pending.is_empty() {
            tokio::select! {
                biased;
                err = ctx.done() => {
                    debug!(outstanding = pending.len(), error = %err, "Abandoning fan-in");
                    return Err(err.into());
                }
                Some(joined) = pending.next() => match joined {
                    Ok((slot, records)) => by_type[slot] = records,
                    Err(e) => {
                        warn!(error = %e, "Resolution task failed");
                        return Err(QueryError::TaskFailed(e.to_string()).into());
                    }
                },
            }
        }

        Ok(by_type.into_iter().flatten().collect())
    }
}
