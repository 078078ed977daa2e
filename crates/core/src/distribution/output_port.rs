//! Output port implementations.

use std::sync::{Arc, Mutex};

use super::distribution_events::ReportHasBeenGeneratedEvent;
use super::distribution_traits::ReportOutputPort;

/// Discards every report.
#[derive(Clone, Default)]
pub struct NoOpReportOutputPort;

impl ReportOutputPort for NoOpReportOutputPort {
    fn present(&self, _event: &ReportHasBeenGeneratedEvent) {}
}

/// Keeps every presented report in memory.
#[derive(Clone, Default)]
pub struct CollectingReportOutputPort {
    events: Arc<Mutex<Vec<ReportHasBeenGeneratedEvent>>>,
}

impl CollectingReportOutputPort {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns all collected reports.
    pub fn events(&self) -> Vec<ReportHasBeenGeneratedEvent> {
        self.events
            .lock()
            .map(|events| events.clone())
            .unwrap_or_default()
    }

    pub fn last(&self) -> Option<ReportHasBeenGeneratedEvent> {
        self.events().pop()
    }

    pub fn len(&self) -> usize {
        self.events().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl ReportOutputPort for CollectingReportOutputPort {
    fn present(&self, event: &ReportHasBeenGeneratedEvent) {
        if let Ok(mut events) = self.events.lock() {
            events.push(event.clone());
        }
    }
}
