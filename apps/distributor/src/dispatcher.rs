//! Event dispatcher that delivers reports to the log.

use async_trait::async_trait;
use ledger_core::distribution::{DeliveryChannel, ReportHasBeenGeneratedEvent};
use ledger_core::events::{DispatchStatus, EventDispatchServiceTrait};
use ledger_core::Result;
use tracing::info;

/// Accepts every report and records it through `tracing`.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogEventDispatcher;

fn describe(channel: &DeliveryChannel) -> String {
    match channel {
        DeliveryChannel::Email { address } => format!("email:{}", address),
        DeliveryChannel::Webhook { url } => format!("webhook:{}", url),
        DeliveryChannel::InApp => "in-app".to_string(),
    }
}

#[async_trait]
impl EventDispatchServiceTrait<ReportHasBeenGeneratedEvent> for LogEventDispatcher {
    async fn dispatch(&self, event: &ReportHasBeenGeneratedEvent) -> Result<DispatchStatus> {
        let item = event.item();
        let result = serde_json::to_string(event.result())
            .unwrap_or_else(|e| format!("<unserializable: {}>", e));
        info!(
            event_id = %event.id(),
            subscription = %item.id,
            owner = %item.owner,
            metric = %item.metric,
            period = %item.period,
            range = %event.range(),
            channel = %describe(&item.delivery),
            "Report generated: {}",
            result
        );
        Ok(DispatchStatus::Accepted)
    }
}
