use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::RwLock;

use super::KeyValueStoreTrait;
use crate::errors::{Error, Result};

/// Process-local key-value store. Nothing survives a restart.
#[derive(Debug, Default)]
pub struct InMemoryKeyValueStore {
    items: RwLock<BTreeMap<String, String>>,
}

impl InMemoryKeyValueStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn poisoned() -> Error {
        Error::Unexpected("In-memory store lock poisoned".to_string())
    }
}

#[async_trait]
impl KeyValueStoreTrait for InMemoryKeyValueStore {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        let items = self.items.read().map_err(|_| Self::poisoned())?;
        Ok(items.get(key).cloned())
    }

    async fn set_item(&self, key: &str, value: String) -> Result<()> {
        let mut items = self.items.write().map_err(|_| Self::poisoned())?;
        items.insert(key.to_string(), value);
        Ok(())
    }

    fn get_all_keys(&self) -> Result<Vec<String>> {
        let items = self.items.read().map_err(|_| Self::poisoned())?;
        Ok(items.keys().cloned().collect())
    }
}
