// Analysis result cache

pub mod clock;
pub mod entry;
pub mod storage;

pub use clock::{Clock, ManualClock, SystemClock};
pub use entry::CacheEntry;
pub use storage::InMemoryAnalysisCache;
