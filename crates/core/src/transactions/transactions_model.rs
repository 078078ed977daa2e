//! Transaction domain models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::period::DateRange;

/// A ledger entry. Amounts are signed minor units in the transaction's own
/// currency and are never rewritten; conversion only happens when aggregating.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: String,
    pub amount: i64,
    pub currency: String,
    pub timestamp: DateTime<Utc>,
    pub owner: String,
    pub category_id: String,
    pub description: Option<String>,
}

/// Typed filter for the transaction store. `None` fields do not filter.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransactionQuery {
    pub owner: Option<String>,
    pub range: Option<DateRange>,
}

impl TransactionQuery {
    pub fn for_owner(owner: impl Into<String>) -> Self {
        Self {
            owner: Some(owner.into()),
            ..Default::default()
        }
    }

    pub fn within(mut self, range: DateRange) -> Self {
        self.range = Some(range);
        self
    }

    /// Applies the filter to a single transaction. Stores that cannot push the
    /// query down can use this to filter in memory.
    pub fn matches(&self, transaction: &Transaction) -> bool {
        if let Some(owner) = &self.owner {
            if &transaction.owner != owner {
                return false;
            }
        }
        if let Some(range) = &self.range {
            if !range.contains(transaction.timestamp) {
                return false;
            }
        }
        true
    }
}
