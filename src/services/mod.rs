//! Services for persistence, brand management and aggregation

pub mod aggregator;
pub mod brands;
pub mod journal;
pub mod record_store;
pub mod storage;

pub use aggregator::Aggregator;
pub use brands::MoveDirection;
pub use journal::Journal;
pub use record_store::RecordStore;
pub use storage::{FileStore, KeyValueStore, MemoryStore};
