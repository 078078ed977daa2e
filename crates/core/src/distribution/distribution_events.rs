use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use super::distribution_model::DistributingMetricItem;
use crate::analytics::MetricValue;
use crate::errors::Result;
use crate::events::EventStatus;
use crate::period::DateRange;

/// Emitted once a subscribed metric has been computed.
///
/// The state starts at `Waiting` and can only be moved to a terminal state
/// through [`mark_dispatched`](Self::mark_dispatched) or
/// [`mark_failed`](Self::mark_failed).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportHasBeenGeneratedEvent {
    id: String,
    item: DistributingMetricItem,
    range: DateRange,
    result: MetricValue,
    generated_at: DateTime<Utc>,
    state: EventStatus,
    failure_reason: Option<String>,
}

impl ReportHasBeenGeneratedEvent {
    pub fn new(
        item: DistributingMetricItem,
        range: DateRange,
        result: MetricValue,
        generated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            item,
            range,
            result,
            generated_at,
            state: EventStatus::Waiting,
            failure_reason: None,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn item(&self) -> &DistributingMetricItem {
        &self.item
    }

    pub fn range(&self) -> &DateRange {
        &self.range
    }

    pub fn result(&self) -> &MetricValue {
        &self.result
    }

    pub fn generated_at(&self) -> DateTime<Utc> {
        self.generated_at
    }

    pub fn state(&self) -> EventStatus {
        self.state
    }

    pub fn failure_reason(&self) -> Option<&str> {
        self.failure_reason.as_deref()
    }

    pub fn mark_dispatched(&mut self) -> Result<()> {
        self.state = self.state.transition(EventStatus::Dispatched)?;
        Ok(())
    }

    pub fn mark_failed(&mut self, reason: impl Into<String>) -> Result<()> {
        self.state = self.state.transition(EventStatus::Failed)?;
        self.failure_reason = Some(reason.into());
        Ok(())
    }

    pub fn into_result(self) -> MetricValue {
        self.result
    }
}
