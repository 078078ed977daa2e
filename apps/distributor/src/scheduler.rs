//! Background scheduler for periodic report distribution.

use std::sync::Arc;
use tokio::task::JoinHandle;
use tokio::time::{interval, Duration, MissedTickBehavior};
use tracing::{info, warn};

use ledger_core::distribution::DistributionSummary;

use crate::main_lib::AppState;

/// Starts the distribution loop. The first run happens immediately.
pub fn start_distribution_scheduler(state: Arc<AppState>, period: Duration) -> JoinHandle<()> {
    tokio::spawn(async move {
        info!(
            "Distribution scheduler started ({}s interval)",
            period.as_secs()
        );

        let mut distribution_interval = interval(period);
        distribution_interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            distribution_interval.tick().await;
            run_scheduled_distribution(&state).await;
        }
    })
}

/// Runs a single distribution pass over every subscription.
pub async fn run_scheduled_distribution(state: &AppState) -> Option<DistributionSummary> {
    info!("Running scheduled report distribution...");

    match state.interactor.send_all(None).await {
        Ok(summary) => {
            if summary.deferred > 0 {
                info!(
                    "{} subscriptions deferred until their period closes",
                    summary.deferred
                );
            }
            if summary.errored > 0 || summary.dispatch_failed > 0 {
                warn!(
                    "Scheduled distribution finished with {} errors and {} failed dispatches",
                    summary.errored, summary.dispatch_failed
                );
            }
            Some(summary)
        }
        Err(e) => {
            warn!("Scheduled distribution failed: {}", e);
            None
        }
    }
}
