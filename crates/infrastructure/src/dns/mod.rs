pub mod builder;
pub mod cache;
pub mod exchanger;
pub mod forwarding;
pub mod transport;

pub use builder::AnalyzerBuilder;
pub use cache::{Clock, InMemoryAnalysisCache, ManualClock, SystemClock};
pub use exchanger::HickoryExchanger;
