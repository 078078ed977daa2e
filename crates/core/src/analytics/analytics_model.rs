//! Analytics domain models.

use std::collections::BTreeMap;
use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::period::{DateRange, Period};

/// Metrics a subscriber can ask for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AvailableAnalyticMetric {
    TransactionsCountByCategoryAndDateRange,
    TransactionsSumByCategoryAndDateRange,
    TransactionsCountByDateRange,
    TransactionsSumByDateRange,
    TransactionsCountRatioByCategoryAndDateRange,
    TransactionsSumRatioByCategoryAndDateRange,
    TransactionsCountChangeByCategoryAndDateRange,
    TransactionsSumChangeByCategoryAndDateRange,
}

/// What is folded over each transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Aggregation {
    Count,
    /// Amounts converted to the base currency.
    Sum,
}

/// Shape of a metric's result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetricShape {
    Scalar,
    Ratio,
    Change,
}

impl AvailableAnalyticMetric {
    pub const ALL: [AvailableAnalyticMetric; 8] = [
        AvailableAnalyticMetric::TransactionsCountByCategoryAndDateRange,
        AvailableAnalyticMetric::TransactionsSumByCategoryAndDateRange,
        AvailableAnalyticMetric::TransactionsCountByDateRange,
        AvailableAnalyticMetric::TransactionsSumByDateRange,
        AvailableAnalyticMetric::TransactionsCountRatioByCategoryAndDateRange,
        AvailableAnalyticMetric::TransactionsSumRatioByCategoryAndDateRange,
        AvailableAnalyticMetric::TransactionsCountChangeByCategoryAndDateRange,
        AvailableAnalyticMetric::TransactionsSumChangeByCategoryAndDateRange,
    ];

    pub fn aggregation(&self) -> Aggregation {
        match self {
            Self::TransactionsCountByCategoryAndDateRange
            | Self::TransactionsCountByDateRange
            | Self::TransactionsCountRatioByCategoryAndDateRange
            | Self::TransactionsCountChangeByCategoryAndDateRange => Aggregation::Count,
            Self::TransactionsSumByCategoryAndDateRange
            | Self::TransactionsSumByDateRange
            | Self::TransactionsSumRatioByCategoryAndDateRange
            | Self::TransactionsSumChangeByCategoryAndDateRange => Aggregation::Sum,
        }
    }

    pub fn shape(&self) -> MetricShape {
        match self {
            Self::TransactionsCountRatioByCategoryAndDateRange
            | Self::TransactionsSumRatioByCategoryAndDateRange => MetricShape::Ratio,
            Self::TransactionsCountChangeByCategoryAndDateRange
            | Self::TransactionsSumChangeByCategoryAndDateRange => MetricShape::Change,
            _ => MetricShape::Scalar,
        }
    }

    /// Whether the metric is scoped to a category subtree.
    pub fn requires_category(&self) -> bool {
        !matches!(
            self,
            Self::TransactionsCountByDateRange | Self::TransactionsSumByDateRange
        )
    }
}

impl fmt::Display for AvailableAnalyticMetric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::TransactionsCountByCategoryAndDateRange => {
                "TRANSACTIONS_COUNT_BY_CATEGORY_AND_DATE_RANGE"
            }
            Self::TransactionsSumByCategoryAndDateRange => {
                "TRANSACTIONS_SUM_BY_CATEGORY_AND_DATE_RANGE"
            }
            Self::TransactionsCountByDateRange => "TRANSACTIONS_COUNT_BY_DATE_RANGE",
            Self::TransactionsSumByDateRange => "TRANSACTIONS_SUM_BY_DATE_RANGE",
            Self::TransactionsCountRatioByCategoryAndDateRange => {
                "TRANSACTIONS_COUNT_RATIO_BY_CATEGORY_AND_DATE_RANGE"
            }
            Self::TransactionsSumRatioByCategoryAndDateRange => {
                "TRANSACTIONS_SUM_RATIO_BY_CATEGORY_AND_DATE_RANGE"
            }
            Self::TransactionsCountChangeByCategoryAndDateRange => {
                "TRANSACTIONS_COUNT_CHANGE_BY_CATEGORY_AND_DATE_RANGE"
            }
            Self::TransactionsSumChangeByCategoryAndDateRange => {
                "TRANSACTIONS_SUM_CHANGE_BY_CATEGORY_AND_DATE_RANGE"
            }
        };
        f.write_str(name)
    }
}

/// Result of a metric computation.
///
/// Serialized untagged: scalars become a JSON number, ratios and changes a
/// JSON object.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum MetricValue {
    /// Count, or sum in base-currency minor units.
    Scalar(i64),
    /// Child category id -> share of the parent's total.
    Ratios(BTreeMap<String, Decimal>),
    /// `DD.MM.YYYY` start of the preceding period -> count or sum.
    Change(BTreeMap<String, i64>),
}

/// Everything the analytic service needs to compute one metric.
#[derive(Debug, Clone, PartialEq)]
pub struct MetricRequest {
    pub metric: AvailableAnalyticMetric,
    pub period: Period,
    pub range: DateRange,
    pub category_id: Option<String>,
}
