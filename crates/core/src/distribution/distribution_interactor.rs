use std::sync::Arc;

use async_trait::async_trait;
use log::{debug, error, info, warn};

use super::distribution_events::ReportHasBeenGeneratedEvent;
use super::distribution_model::{DistributingMetricItem, DistributionSummary};
use super::distribution_traits::{
    DistributingMetricItemRepositoryTrait, ReportDistributionInteractorTrait, ReportOutputPort,
};
use crate::analytics::{MetricRequest, MetricValue, TransactionAnalyticServiceTrait};
use crate::errors::Result;
use crate::events::{DispatchStatus, EventDispatchServiceTrait, EventStatus};
use crate::period::define_date_range;
use crate::transactions::{TransactionQuery, TransactionRepositoryTrait};
use crate::utils::time_utils::Clock;

/// Ties subscriptions, metric computation and event dispatch together.
///
/// Holds no state of its own; subscriptions live in the repository.
pub struct ReportDistributionInteractor {
    subscription_repository: Arc<dyn DistributingMetricItemRepositoryTrait>,
    transaction_repository: Arc<dyn TransactionRepositoryTrait>,
    analytic_service: Arc<dyn TransactionAnalyticServiceTrait>,
    event_dispatcher: Arc<dyn EventDispatchServiceTrait<ReportHasBeenGeneratedEvent>>,
    output_port: Arc<dyn ReportOutputPort>,
    clock: Arc<dyn Clock>,
}

impl ReportDistributionInteractor {
    pub fn new(
        subscription_repository: Arc<dyn DistributingMetricItemRepositoryTrait>,
        transaction_repository: Arc<dyn TransactionRepositoryTrait>,
        analytic_service: Arc<dyn TransactionAnalyticServiceTrait>,
        event_dispatcher: Arc<dyn EventDispatchServiceTrait<ReportHasBeenGeneratedEvent>>,
        output_port: Arc<dyn ReportOutputPort>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            subscription_repository,
            transaction_repository,
            analytic_service,
            event_dispatcher,
            output_port,
            clock,
        }
    }

    /// Computes and dispatches one report, returning the event in its final
    /// state. Only computation errors are returned as `Err`.
    async fn deliver(&self, item: &DistributingMetricItem) -> Result<ReportHasBeenGeneratedEvent> {
        let now = self.clock.now();
        let range = define_date_range(item.period, now)?;
        let request = MetricRequest {
            metric: item.metric,
            period: item.period,
            range,
            category_id: item.category_id.clone(),
        };

        let window = self.analytic_service.lookup_range(&request)?;
        let query = TransactionQuery::for_owner(item.owner.clone()).within(window);
        let transactions = self.transaction_repository.find(&query).await?;
        debug!(
            "Loaded {} transactions in {} for subscription {}",
            transactions.len(),
            window,
            item.id
        );

        let result = self
            .analytic_service
            .compute_metric(&transactions, &request)
            .await?;

        let mut event = ReportHasBeenGeneratedEvent::new(item.clone(), range, result, now);
        match self.event_dispatcher.dispatch(&event).await {
            Ok(DispatchStatus::Accepted) => event.mark_dispatched()?,
            Ok(DispatchStatus::Rejected { reason }) => {
                warn!(
                    "Report {} for subscription {} was rejected: {}",
                    event.id(),
                    item.id,
                    reason
                );
                event.mark_failed(reason)?;
            }
            Err(e) => {
                warn!(
                    "Failed to dispatch report {} for subscription {}: {}",
                    event.id(),
                    item.id,
                    e
                );
                event.mark_failed(e.to_string())?;
            }
        }

        self.output_port.present(&event);
        Ok(event)
    }
}

#[async_trait]
impl ReportDistributionInteractorTrait for ReportDistributionInteractor {
    async fn subscribe(
        &self,
        items: Vec<DistributingMetricItem>,
    ) -> Result<Vec<DistributingMetricItem>> {
        let mut inserted = Vec::with_capacity(items.len());
        for item in items {
            let item_id = item.id.clone();
            match self.subscription_repository.insert(item).await {
                Ok(stored) => inserted.push(stored),
                Err(e) => {
                    error!(
                        "Failed to subscribe {} after {} successful inserts: {}",
                        item_id,
                        inserted.len(),
                        e
                    );
                    return Err(e);
                }
            }
        }
        debug!("Subscribed {} metric items", inserted.len());
        Ok(inserted)
    }

    async fn unsubscribe(&self, items: &[DistributingMetricItem]) -> Result<()> {
        for (deleted, item) in items.iter().enumerate() {
            if let Err(e) = self.subscription_repository.delete(&item.id).await {
                error!(
                    "Failed to unsubscribe {} after {} successful deletes: {}",
                    item.id, deleted, e
                );
                return Err(e);
            }
        }
        debug!("Unsubscribed {} metric items", items.len());
        Ok(())
    }

    async fn list_subscriptions(&self, owner: Option<&str>) -> Result<Vec<DistributingMetricItem>> {
        self.subscription_repository.list(owner).await
    }

    async fn send(&self, item: &DistributingMetricItem) -> Result<MetricValue> {
        let event = self.deliver(item).await?;
        Ok(event.into_result())
    }

    async fn send_all(&self, owner: Option<&str>) -> Result<DistributionSummary> {
        let items = self.subscription_repository.list(owner).await?;
        let mut summary = DistributionSummary::default();

        for item in &items {
            match self.deliver(item).await {
                Ok(event) if event.state() == EventStatus::Dispatched => summary.sent += 1,
                Ok(_) => summary.dispatch_failed += 1,
                Err(e) if e.is_retryable_later() => {
                    debug!("Deferring subscription {}: {}", item.id, e);
                    summary.deferred += 1;
                }
                Err(e) => {
                    error!("Failed to compute subscription {}: {}", item.id, e);
                    summary.errored += 1;
                }
            }
        }

        info!(
            "Distributed {} subscriptions: {} sent, {} dispatch failures, {} deferred, {} errors",
            summary.total(),
            summary.sent,
            summary.dispatch_failed,
            summary.deferred,
            summary.errored
        );
        Ok(summary)
    }
}
