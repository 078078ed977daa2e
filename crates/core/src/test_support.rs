//! Shared fixtures and mock collaborators for unit tests.
//!
//! The fixture ledger is anchored at 2019-09-30 12:00 UTC. All transactions
//! belong to `user-1`. Category `1` has children `2`, `3`, `4`; `5` sits
//! under `2`. Category `6` is an unrelated root with child `7`.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use rust_decimal_macros::dec;

use crate::analytics::TransactionAnalyticService;
use crate::categories::{CategoryRepositoryTrait, CategoryService, TransactionCategory};
use crate::errors::Result;
use crate::fx::{CurrencyConverter, ExchangeRate};
use crate::transactions::{Transaction, TransactionQuery, TransactionRepositoryTrait};

pub const OWNER: &str = "user-1";
pub const SCOPE_CATEGORY: &str = "1";

pub fn anchor() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2019, 9, 30, 12, 0, 0).unwrap()
}

pub fn category(id: &str, parent: Option<&str>) -> TransactionCategory {
    TransactionCategory {
        id: id.to_string(),
        name: format!("Category {}", id),
        is_outcome: true,
        is_system: parent.is_none(),
        owner: None,
        parent_category_id: parent.map(str::to_string),
    }
}

pub fn categories() -> Vec<TransactionCategory> {
    vec![
        category("1", None),
        category("2", Some("1")),
        category("3", Some("1")),
        category("4", Some("1")),
        category("5", Some("2")),
        category("6", None),
        category("7", Some("6")),
    ]
}

pub fn transaction(
    id: &str,
    (y, m, d): (i32, u32, u32),
    category_id: &str,
    amount: i64,
    currency: &str,
) -> Transaction {
    Transaction {
        id: id.to_string(),
        amount,
        currency: currency.to_string(),
        timestamp: Utc.with_ymd_and_hms(y, m, d, 10, 0, 0).unwrap(),
        owner: OWNER.to_string(),
        category_id: category_id.to_string(),
        description: None,
    }
}

/// Category `1` subtree: month 0 / 0, quarter 1 / 501, year 5 / 25002.
pub fn transactions() -> Vec<Transaction> {
    vec![
        transaction("t1", (2019, 7, 15), "1", 501, "USD"),
        transaction("t2", (2019, 4, 2), "2", 100_00, "USD"),
        transaction("t3", (2019, 1, 20), "3", 50_00, "USD"),
        // 2250 EUR at 2.0 -> 4500 USD
        transaction("t4", (2018, 12, 5), "5", 22_50, "EUR"),
        transaction("t5", (2018, 10, 1), "4", 50_01, "USD"),
        transaction("t6", (2019, 8, 31), "7", 9_99, "USD"),
        transaction("t7", (2018, 2, 14), "3", 12_00, "USD"),
    ]
}

pub fn converter() -> CurrencyConverter {
    CurrencyConverter::new(vec![ExchangeRate::new("EUR", "USD", dec!(2))]).unwrap()
}

pub struct MockCategoryRepository {
    categories: HashMap<String, TransactionCategory>,
}

impl MockCategoryRepository {
    pub fn new(categories: Vec<TransactionCategory>) -> Self {
        Self {
            categories: categories.into_iter().map(|c| (c.id.clone(), c)).collect(),
        }
    }
}

#[async_trait]
impl CategoryRepositoryTrait for MockCategoryRepository {
    async fn find_by_id(&self, category_id: &str) -> Result<Option<TransactionCategory>> {
        Ok(self.categories.get(category_id).cloned())
    }

    async fn find_children(&self, category_id: &str) -> Result<Vec<TransactionCategory>> {
        Ok(self
            .categories
            .values()
            .filter(|c| c.parent_category_id.as_deref() == Some(category_id))
            .cloned()
            .collect())
    }
}

/// Transaction store that filters in memory and records every query.
pub struct MockTransactionRepository {
    transactions: Vec<Transaction>,
    queries: Mutex<Vec<TransactionQuery>>,
}

impl MockTransactionRepository {
    pub fn new(transactions: Vec<Transaction>) -> Self {
        Self {
            transactions,
            queries: Mutex::new(Vec::new()),
        }
    }

    pub fn queries(&self) -> Vec<TransactionQuery> {
        self.queries.lock().unwrap().clone()
    }
}

#[async_trait]
impl TransactionRepositoryTrait for MockTransactionRepository {
    async fn find(&self, query: &TransactionQuery) -> Result<Vec<Transaction>> {
        self.queries.lock().unwrap().push(query.clone());
        Ok(self
            .transactions
            .iter()
            .filter(|t| query.matches(t))
            .cloned()
            .collect())
    }
}

pub fn category_service() -> Arc<CategoryService> {
    Arc::new(CategoryService::new(Arc::new(MockCategoryRepository::new(
        categories(),
    ))))
}

pub fn analytic_service() -> TransactionAnalyticService {
    TransactionAnalyticService::new(Arc::new(converter()), category_service(), "USD".to_string())
}
