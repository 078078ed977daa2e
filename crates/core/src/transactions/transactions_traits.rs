use async_trait::async_trait;

use super::transactions_model::{Transaction, TransactionQuery};
use crate::errors::Result;

/// Read access to the transaction store.
#[async_trait]
pub trait TransactionRepositoryTrait: Send + Sync {
    async fn find(&self, query: &TransactionQuery) -> Result<Vec<Transaction>>;
}
