use async_trait::async_trait;
use ledger_core::transactions::{Transaction, TransactionQuery, TransactionRepositoryTrait};
use ledger_core::Result;
use log::debug;
use tokio::sync::RwLock;

use crate::errors::StorageError;

/// Transaction store that answers queries by scanning its contents.
#[derive(Default)]
pub struct InMemoryTransactionRepository {
    transactions: RwLock<Vec<Transaction>>,
}

impl InMemoryTransactionRepository {
    pub fn new(transactions: Vec<Transaction>) -> Result<Self> {
        let mut stored = Vec::with_capacity(transactions.len());
        for transaction in transactions {
            Self::push_unique(&mut stored, transaction)?;
        }
        Ok(Self {
            transactions: RwLock::new(stored),
        })
    }

    /// Appends a transaction, failing if its id is already stored.
    pub async fn insert(&self, transaction: Transaction) -> Result<Transaction> {
        let mut stored = self.transactions.write().await;
        Self::push_unique(&mut stored, transaction.clone())?;
        Ok(transaction)
    }

    pub async fn len(&self) -> usize {
        self.transactions.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    fn push_unique(stored: &mut Vec<Transaction>, transaction: Transaction) -> Result<()> {
        if stored.iter().any(|t| t.id == transaction.id) {
            return Err(StorageError::Duplicate(format!("transaction {}", transaction.id)).into());
        }
        stored.push(transaction);
        Ok(())
    }
}

#[async_trait]
impl TransactionRepositoryTrait for InMemoryTransactionRepository {
    async fn find(&self, query: &TransactionQuery) -> Result<Vec<Transaction>> {
        let mut found: Vec<Transaction> = self
            .transactions
            .read()
            .await
            .iter()
            .filter(|t| query.matches(t))
            .cloned()
            .collect();
        found.sort_by_key(|t| t.timestamp);
        debug!("Transaction query matched {} records", found.len());
        Ok(found)
    }
}
