use std::collections::BTreeSet;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::ItemStore;
use crate::common::errors::StoreError;

/// Process-local store for tests and local runs. Contents are lost with the process.
#[derive(Default)]
pub struct MemoryItemStore {
    names: RwLock<BTreeSet<String>>,
}

impl MemoryItemStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ItemStore for MemoryItemStore {
    async fn list(&self) -> Result<Vec<String>, StoreError> {
        Ok(self.names.read().await.iter().cloned().collect())
    }

    async fn upsert(&self, name: &str) -> Result<(), StoreError> {
        self.names.write().await.insert(name.into());
        Ok(())
    }

    async fn delete(&self, name: &str) -> Result<(), StoreError> {
        self.names.write().await.remove(name);
        Ok(())
    }
}
