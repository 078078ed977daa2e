use async_trait::async_trait;

use super::distribution_events::ReportHasBeenGeneratedEvent;
use super::distribution_model::{DistributingMetricItem, DistributionSummary};
use crate::analytics::MetricValue;
use crate::errors::Result;

/// Persistence contract for metric subscriptions.
#[async_trait]
pub trait DistributingMetricItemRepositoryTrait: Send + Sync {
    async fn insert(&self, item: DistributingMetricItem) -> Result<DistributingMetricItem>;
    async fn delete(&self, item_id: &str) -> Result<()>;
    /// Subscriptions of `owner`, or of everyone when `None`.
    async fn list(&self, owner: Option<&str>) -> Result<Vec<DistributingMetricItem>>;
}

/// Receives every generated report once its delivery state is final.
///
/// Must be cheap and must not fail; the interactor does not wait on it.
pub trait ReportOutputPort: Send + Sync {
    fn present(&self, event: &ReportHasBeenGeneratedEvent);
}

/// Trait for the report distribution use cases.
#[async_trait]
pub trait ReportDistributionInteractorTrait: Send + Sync {
    /// Stores each item in order. The first failure is returned as-is;
    /// items stored before it stay stored.
    async fn subscribe(
        &self,
        items: Vec<DistributingMetricItem>,
    ) -> Result<Vec<DistributingMetricItem>>;

    /// Deletes each item in order, with the same partial-failure behaviour
    /// as `subscribe`.
    async fn unsubscribe(&self, items: &[DistributingMetricItem]) -> Result<()>;

    async fn list_subscriptions(&self, owner: Option<&str>) -> Result<Vec<DistributingMetricItem>>;

    /// Computes the item's metric as of now and dispatches it. The computed
    /// value is returned even when dispatching fails.
    async fn send(&self, item: &DistributingMetricItem) -> Result<MetricValue>;

    /// Sends every stored subscription, continuing past per-item failures.
    async fn send_all(&self, owner: Option<&str>) -> Result<DistributionSummary>;
}
