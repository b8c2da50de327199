//! Repository trait for the raw key-value backend.

use async_trait::async_trait;

use crate::errors::Result;

/// A durable string-to-string map.
///
/// Reads are synchronous; writes are async so backends can funnel them
/// through a single writer.
#[async_trait]
pub trait KeyValueStoreTrait: Send + Sync {
    /// Get the value stored under `key`, or `None` if absent.
    fn get_item(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, replacing any previous value.
    async fn set_item(&self, key: &str, value: String) -> Result<()>;

    /// List every key currently stored.
    fn get_all_keys(&self) -> Result<Vec<String>>;
}
