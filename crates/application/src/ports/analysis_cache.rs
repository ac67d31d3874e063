use linktracer_domain::AnalysisResult;
use std::time::Duration;

/// Time-bounded store of analysis results keyed by queried domain.
///
/// Implementations synchronise internally: a lookup never observes a
/// half-written entry and never returns an expired one.
pub trait AnalysisCache: Send + Sync {
    fn lookup(&self, key: &str) -> Option<AnalysisResult>;

    fn store(&self, key: &str, result: AnalysisResult, ttl: Duration);
}
