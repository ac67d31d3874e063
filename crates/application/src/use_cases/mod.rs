pub mod analysis;

pub use analysis::AnalyzeDomainUseCase;
