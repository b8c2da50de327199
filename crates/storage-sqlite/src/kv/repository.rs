use async_trait::async_trait;
use diesel::prelude::*;
use log::debug;
use std::sync::Arc;

use super::model::KvEntryDB;
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::{IntoCore, StorageError};
use crate::schema::kv_store::dsl::*;
use goaltracker_core::errors::Result;
use goaltracker_core::storage::KeyValueStoreTrait;

/// `KeyValueStoreTrait` over the `kv_store` table.
///
/// Reads use pooled connections; writes go through the single writer.
pub struct SqliteKeyValueStore {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl SqliteKeyValueStore {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        SqliteKeyValueStore { pool, writer }
    }
}

#[async_trait]
impl KeyValueStoreTrait for SqliteKeyValueStore {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        let mut conn = get_connection(&self.pool)?;
        let value = kv_store
            .select(store_value)
            .filter(store_key.eq(key))
            .first::<String>(&mut conn)
            .optional()
            .into_core()?;
        Ok(value)
    }

    async fn set_item(&self, key: &str, value: String) -> Result<()> {
        let entry = KvEntryDB {
            store_key: key.to_string(),
            store_value: value,
        };
        debug!("Persisting bucket {}", entry.store_key);

        self.writer
            .exec(move |conn| {
                diesel::replace_into(kv_store)
                    .values(&entry)
                    .execute(conn)
                    .map_err(StorageError::from)?;
                Ok(())
            })
            .await
    }

    fn get_all_keys(&self) -> Result<Vec<String>> {
        let mut conn = get_connection(&self.pool)?;
        let keys = kv_store
            .select(store_key)
            .order(store_key.asc())
            .load::<String>(&mut conn)
            .into_core()?;
        Ok(keys)
    }
}
