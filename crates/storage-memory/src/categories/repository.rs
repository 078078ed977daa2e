use std::collections::HashMap;

use async_trait::async_trait;
use ledger_core::categories::{CategoryRepositoryTrait, TransactionCategory};
use ledger_core::Result;
use tokio::sync::RwLock;

use crate::errors::StorageError;

/// Category store keyed by id.
#[derive(Default)]
pub struct InMemoryCategoryRepository {
    categories: RwLock<HashMap<String, TransactionCategory>>,
}

impl InMemoryCategoryRepository {
    pub fn new(categories: Vec<TransactionCategory>) -> Result<Self> {
        let mut by_id = HashMap::with_capacity(categories.len());
        for category in categories {
            if by_id.contains_key(&category.id) {
                return Err(StorageError::Duplicate(format!("category {}", category.id)).into());
            }
            by_id.insert(category.id.clone(), category);
        }
        Ok(Self {
            categories: RwLock::new(by_id),
        })
    }

    pub async fn len(&self) -> usize {
        self.categories.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl CategoryRepositoryTrait for InMemoryCategoryRepository {
    async fn find_by_id(&self, category_id: &str) -> Result<Option<TransactionCategory>> {
        Ok(self.categories.read().await.get(category_id).cloned())
    }

    async fn find_children(&self, category_id: &str) -> Result<Vec<TransactionCategory>> {
        let mut children: Vec<TransactionCategory> = self
            .categories
            .read()
            .await
            .values()
            .filter(|c| c.parent_category_id.as_deref() == Some(category_id))
            .cloned()
            .collect();
        children.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(children)
    }
}
