use async_trait::async_trait;

use crate::common::errors::StoreError;

mod dynamo;
mod memory;

pub use dynamo::DynamoItemStore;
pub use memory::MemoryItemStore;

/// Todo items keyed by name. Completing an item deletes it.
#[async_trait]
pub trait ItemStore: Send + Sync {
    /// Every stored name, in no particular order.
    async fn list(&self) -> Result<Vec<String>, StoreError>;

    /// Inserts `name`, overwriting an existing entry with the same key.
    async fn upsert(&self, name: &str) -> Result<(), StoreError>;

    /// Removes `name`. Removing a missing name succeeds.
    async fn delete(&self, name: &str) -> Result<(), StoreError>;
}
