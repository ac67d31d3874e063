//! Configuration module for LinkTracer
//!
//! - `root`: main configuration and CLI overrides
//! - `analyzer`: resolution and caching settings
//! - `logging`: logging settings
//! - `errors`: configuration errors

pub mod analyzer;
pub mod errors;
pub mod logging;
pub mod root;

pub use analyzer::AnalyzerConfig;
pub use errors::ConfigError;
pub use logging::LoggingConfig;
pub use root::{CliOverrides, Config};
