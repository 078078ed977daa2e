use std::collections::{HashSet, VecDeque};
use std::sync::Arc;

use async_trait::async_trait;
use log::{debug, warn};

use super::categories_model::TransactionCategory;
use super::categories_traits::{CategoryRepositoryTrait, CategoryServiceTrait};
use crate::errors::{DatabaseError, Result};

/// Service resolving categories and their descendants.
pub struct CategoryService {
    repository: Arc<dyn CategoryRepositoryTrait>,
}

impl CategoryService {
    pub fn new(repository: Arc<dyn CategoryRepositoryTrait>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl CategoryServiceTrait for CategoryService {
    async fn get_category(&self, category_id: &str) -> Result<TransactionCategory> {
        self.repository
            .find_by_id(category_id)
            .await?
            .ok_or_else(|| DatabaseError::NotFound(format!("Category {}", category_id)).into())
    }

    async fn get_children(&self, category_id: &str) -> Result<Vec<TransactionCategory>> {
        self.get_category(category_id).await?;
        self.repository.find_children(category_id).await
    }

    async fn get_subtree_ids(&self, category_id: &str) -> Result<HashSet<String>> {
        let root = self.get_category(category_id).await?;

        let mut ids: HashSet<String> = HashSet::new();
        let mut queue: VecDeque<String> = VecDeque::new();
        ids.insert(root.id.clone());
        queue.push_back(root.id);

        while let Some(current) = queue.pop_front() {
            for child in self.repository.find_children(&current).await? {
                // Parent links are assumed acyclic; stop on a revisit anyway.
                if !ids.insert(child.id.clone()) {
                    warn!(
                        "Category {} reached twice while walking {}; skipping",
                        child.id, category_id
                    );
                    continue;
                }
                queue.push_back(child.id);
            }
        }

        debug!("Category {} covers {} categories", category_id, ids.len());
        Ok(ids)
    }
}
