//! Storage module - the per-year key-value gateway.
//!
//! Durable backends implement [`KeyValueStoreTrait`]; services only talk to
//! [`YearStore`], which buckets entity lists by `(kind, year)` and absorbs
//! storage failures.

mod memory_store;
mod storage_model;
mod storage_traits;
mod year_store;

pub use memory_store::InMemoryKeyValueStore;
pub use storage_model::{BucketKey, EntityKind};
pub use storage_traits::KeyValueStoreTrait;
pub use year_store::YearStore;
