pub mod analyze_domain;

pub use analyze_domain::AnalyzeDomainUseCase;
