//! Key-value table backing the year buckets.

mod model;
mod repository;

pub use model::KvEntryDB;
pub use repository::SqliteKeyValueStore;
