//! Distribution domain models.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::analytics::AvailableAnalyticMetric;
use crate::period::Period;

/// Where a generated report should be delivered.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DeliveryChannel {
    Email { address: String },
    Webhook { url: String },
    InApp,
}

/// A subscription to one metric, for one period, optionally scoped to a
/// category.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DistributingMetricItem {
    pub id: String,
    pub owner: String,
    pub metric: AvailableAnalyticMetric,
    pub period: Period,
    pub category_id: Option<String>,
    pub delivery: DeliveryChannel,
}

impl DistributingMetricItem {
    /// Creates a subscription with a fresh id.
    pub fn new(
        owner: impl Into<String>,
        metric: AvailableAnalyticMetric,
        period: Period,
        category_id: Option<String>,
        delivery: DeliveryChannel,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            owner: owner.into(),
            metric,
            period,
            category_id,
            delivery,
        }
    }
}

/// Outcome counters of a bulk distribution run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DistributionSummary {
    /// Computed and accepted by the dispatcher.
    pub sent: usize,
    /// Computed, but the dispatcher rejected or failed.
    pub dispatch_failed: usize,
    /// Period not closed yet; will be picked up by a later run.
    pub deferred: usize,
    /// Computation failed.
    pub errored: usize,
}

impl DistributionSummary {
    pub fn total(&self) -> usize {
        self.sent + self.dispatch_failed + self.deferred + self.errored
    }
}
