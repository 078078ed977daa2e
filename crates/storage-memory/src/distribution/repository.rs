use async_trait::async_trait;
use ledger_core::distribution::{DistributingMetricItem, DistributingMetricItemRepositoryTrait};
use ledger_core::errors::DatabaseError;
use ledger_core::Result;
use log::debug;
use tokio::sync::Mutex;

use crate::errors::StorageError;

/// Subscription store that keeps insertion order.
#[derive(Default)]
pub struct InMemoryDistributingMetricItemRepository {
    items: Mutex<Vec<DistributingMetricItem>>,
}

impl InMemoryDistributingMetricItemRepository {
    pub fn new(items: Vec<DistributingMetricItem>) -> Result<Self> {
        let mut stored: Vec<DistributingMetricItem> = Vec::with_capacity(items.len());
        for item in items {
            if stored.iter().any(|i| i.id == item.id) {
                return Err(StorageError::Duplicate(format!("subscription {}", item.id)).into());
            }
            stored.push(item);
        }
        Ok(Self {
            items: Mutex::new(stored),
        })
    }
}

#[async_trait]
impl DistributingMetricItemRepositoryTrait for InMemoryDistributingMetricItemRepository {
    async fn insert(&self, item: DistributingMetricItem) -> Result<DistributingMetricItem> {
        let mut items = self.items.lock().await;
        if items.iter().any(|i| i.id == item.id) {
            return Err(StorageError::Duplicate(format!("subscription {}", item.id)).into());
        }
        debug!("Storing subscription {} for {}", item.id, item.owner);
        items.push(item.clone());
        Ok(item)
    }

    async fn delete(&self, item_id: &str) -> Result<()> {
        let mut items = self.items.lock().await;
        let position = items
            .iter()
            .position(|i| i.id == item_id)
            .ok_or_else(|| DatabaseError::NotFound(format!("subscription {}", item_id)))?;
        items.remove(position);
        Ok(())
    }

    async fn list(&self, owner: Option<&str>) -> Result<Vec<DistributingMetricItem>> {
        Ok(self
            .items
            .lock()
            .await
            .iter()
            .filter(|i| owner.map_or(true, |o| i.owner == o))
            .cloned()
            .collect())
    }
}
