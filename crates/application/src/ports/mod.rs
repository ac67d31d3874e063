pub mod analysis_cache;
pub mod dns_exchanger;

pub use analysis_cache::AnalysisCache;
pub use dns_exchanger::{AnswerData, AnswerRecord, DnsExchanger};
