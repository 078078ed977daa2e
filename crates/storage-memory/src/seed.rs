//! Seed data loading.
//!
//! A seed file is a JSON document with four optional arrays:
//!
//! ```json
//! {
//!   "categories": [{ "id": "food", "name": "Food", "isOutcome": true,
//!                    "isSystem": false, "owner": null, "parentCategoryId": null }],
//!   "transactions": [{ "id": "t1", "amount": 1250, "currency": "EUR",
//!                      "timestamp": "2024-03-05T09:00:00Z", "owner": "alice",
//!                      "categoryId": "food", "description": null }],
//!   "rates": [{ "fromCurrency": "EUR", "toCurrency": "USD", "rate": "1.08" }],
//!   "subscriptions": []
//! }
//! ```

use std::path::Path;
use std::sync::Arc;

use ledger_core::categories::TransactionCategory;
use ledger_core::distribution::DistributingMetricItem;
use ledger_core::fx::{CurrencyConverter, ExchangeRate};
use ledger_core::transactions::Transaction;
use ledger_core::Result;
use log::info;
use serde::{Deserialize, Serialize};

use crate::categories::InMemoryCategoryRepository;
use crate::distribution::InMemoryDistributingMetricItemRepository;
use crate::errors::StorageError;
use crate::transactions::InMemoryTransactionRepository;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SeedData {
    pub categories: Vec<TransactionCategory>,
    pub transactions: Vec<Transaction>,
    pub rates: Vec<ExchangeRate>,
    pub subscriptions: Vec<DistributingMetricItem>,
}

impl SeedData {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json).map_err(StorageError::from)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let contents = std::fs::read_to_string(path.as_ref()).map_err(StorageError::from)?;
        Self::from_json(&contents)
    }
}

/// Every in-memory store, plus the rate table, built from one seed.
pub struct MemoryStorage {
    pub categories: Arc<InMemoryCategoryRepository>,
    pub transactions: Arc<InMemoryTransactionRepository>,
    pub subscriptions: Arc<InMemoryDistributingMetricItemRepository>,
    pub currency_converter: Arc<CurrencyConverter>,
}

impl MemoryStorage {
    pub fn from_seed(seed: SeedData) -> Result<Self> {
        info!(
            "Loading seed: {} categories, {} transactions, {} rates, {} subscriptions",
            seed.categories.len(),
            seed.transactions.len(),
            seed.rates.len(),
            seed.subscriptions.len()
        );
        Ok(Self {
            categories: Arc::new(InMemoryCategoryRepository::new(seed.categories)?),
            transactions: Arc::new(InMemoryTransactionRepository::new(seed.transactions)?),
            subscriptions: Arc::new(InMemoryDistributingMetricItemRepository::new(
                seed.subscriptions,
            )?),
            currency_converter: Arc::new(CurrencyConverter::new(seed.rates)?),
        })
    }

    pub fn empty() -> Self {
        Self {
            categories: Arc::default(),
            transactions: Arc::default(),
            subscriptions: Arc::default(),
            currency_converter: Arc::new(CurrencyConverter::default()),
        }
    }
}
