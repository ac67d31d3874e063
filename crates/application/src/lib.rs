//! LinkTracer Application Layer
//!
//! Ports the analysis depends on, the record resolver service and the
//! analyze-domain use case that orchestrates them.
pub mod context;
pub mod ports;
pub mod services;
pub mod use_cases;

pub use context::QueryContext;
pub use use_cases::AnalyzeDomainUseCase;
