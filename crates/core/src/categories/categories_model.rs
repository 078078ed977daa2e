//! Category domain models.

use serde::{Deserialize, Serialize};

/// A transaction category. Categories form a forest through
/// `parent_category_id`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TransactionCategory {
    pub id: String,
    pub name: String,
    /// Expense category when true, income category otherwise
    pub is_outcome: bool,
    /// Built-in category shared by all users
    pub is_system: bool,
    pub owner: Option<String>,
    pub parent_category_id: Option<String>,
}
