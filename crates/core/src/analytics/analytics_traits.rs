use async_trait::async_trait;

use super::analytics_model::{MetricRequest, MetricValue};
use crate::errors::Result;
use crate::period::DateRange;
use crate::transactions::Transaction;

/// Trait for computing report metrics over a set of transactions.
#[async_trait]
pub trait TransactionAnalyticServiceTrait: Send + Sync {
    /// Window of transactions a caller has to load for `request`.
    ///
    /// Change metrics look at the period before `request.range`, so their
    /// window starts earlier than the range itself.
    fn lookup_range(&self, request: &MetricRequest) -> Result<DateRange>;

    /// Computes `request.metric`. Transactions outside the relevant range are
    /// ignored, so callers may pass a superset.
    async fn compute_metric(
        &self,
        transactions: &[Transaction],
        request: &MetricRequest,
    ) -> Result<MetricValue>;
}
