use dashmap::DashMap;
use log::{debug, error};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::BTreeSet;
use std::sync::Arc;
use tokio::sync::{Mutex, OwnedMutexGuard};

use super::{BucketKey, EntityKind, KeyValueStoreTrait};

/// Best-effort gateway from `(kind, year)` to a JSON list.
///
/// Failures never reach callers: reads degrade to an empty list and writes
/// report `false`, with the cause logged. A caller therefore cannot tell an
/// empty bucket from an unreadable one.
pub struct YearStore {
    kv: Arc<dyn KeyValueStoreTrait>,
    locks: DashMap<i32, Arc<Mutex<()>>>,
}

impl YearStore {
    pub fn new(kv: Arc<dyn KeyValueStoreTrait>) -> Self {
        YearStore {
            kv,
            locks: DashMap::new(),
        }
    }

    /// Returns the stored list for the bucket, or an empty list if the
    /// bucket is absent or cannot be read.
    pub fn read<T: DeserializeOwned>(&self, kind: EntityKind, year: i32) -> Vec<T> {
        let key = BucketKey::new(kind, year);
        let raw = match self.kv.get_item(&key.to_string()) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(e) => {
                error!("Error getting {}: {}", key, e);
                return Vec::new();
            }
        };

        match serde_json::from_str::<Vec<T>>(&raw) {
            Ok(items) => items,
            Err(e) => {
                error!("Error parsing {}: {}", key, e);
                Vec::new()
            }
        }
    }

    /// Replaces the whole bucket with `items`. Returns `false` if the list
    /// could not be serialized or persisted.
    pub async fn write<T>(&self, kind: EntityKind, year: i32, items: &[T]) -> bool
    where
        T: Serialize + Sync,
    {
        let key = BucketKey::new(kind, year);
        let payload = match serde_json::to_string(items) {
            Ok(payload) => payload,
            Err(e) => {
                error!("Error serializing {}: {}", key, e);
                return false;
            }
        };

        match self.kv.set_item(&key.to_string(), payload).await {
            Ok(()) => {
                debug!("Saved {} item(s) to {}", items.len(), key);
                true
            }
            Err(e) => {
                error!("Error saving {}: {}", key, e);
                false
            }
        }
    }

    /// Years that hold a non-empty bucket of `kind`, most recent first.
    pub fn list_years(&self, kind: EntityKind) -> Vec<i32> {
        let keys = match self.kv.get_all_keys() {
            Ok(keys) => keys,
            Err(e) => {
                error!("Error getting years: {}", e);
                return Vec::new();
            }
        };

        let years: BTreeSet<i32> = keys
            .iter()
            .filter_map(|key| BucketKey::parse(key))
            .filter(|bucket| bucket.kind == kind)
            .filter(|bucket| {
                !self
                    .read::<serde_json::Value>(bucket.kind, bucket.year)
                    .is_empty()
            })
            .map(|bucket| bucket.year)
            .collect();

        years.into_iter().rev().collect()
    }

    /// Acquires the single-writer guard for a year. Hold it across a whole
    /// read-modify-write sequence on that year's buckets.
    pub async fn lock_year(&self, year: i32) -> OwnedMutexGuard<()> {
        let lock = self.locks.entry(year).or_default().value().clone();
        lock.lock_owned().await
    }
}
