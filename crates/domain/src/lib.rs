//! LinkTracer Domain Layer
pub mod analysis;
pub mod config;
pub mod dns_query;
pub mod dns_record;
pub mod errors;
pub mod similarity;
pub mod validators;

pub use analysis::AnalysisResult;
pub use config::{AnalyzerConfig, CliOverrides, Config, ConfigError, LoggingConfig};
pub use dns_query::DnsQuery;
pub use dns_record::{DomainRecord, RecordType};
pub use errors::{DomainError, ExchangeError, QueryError};
pub use similarity::{levenshtein_distance, similarity};
pub use validators::{is_valid_domain, validate_domain};
