use std::collections::HashSet;

use async_trait::async_trait;

use super::categories_model::TransactionCategory;
use crate::errors::Result;

/// Read access to the category store.
#[async_trait]
pub trait CategoryRepositoryTrait: Send + Sync {
    async fn find_by_id(&self, category_id: &str) -> Result<Option<TransactionCategory>>;
    /// Direct children only.
    async fn find_children(&self, category_id: &str) -> Result<Vec<TransactionCategory>>;
}

/// Trait for category hierarchy lookups used by the analytics engine.
#[async_trait]
pub trait CategoryServiceTrait: Send + Sync {
    /// Loads a category, failing with `NotFound` when it does not exist.
    async fn get_category(&self, category_id: &str) -> Result<TransactionCategory>;

    /// Direct children of an existing category.
    async fn get_children(&self, category_id: &str) -> Result<Vec<TransactionCategory>>;

    /// Ids of the category and all of its descendants.
    async fn get_subtree_ids(&self, category_id: &str) -> Result<HashSet<String>>;
}
