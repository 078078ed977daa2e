mod config;
mod dispatcher;
mod main_lib;
mod scheduler;

use config::Config;
use main_lib::{build_state, init_tracing};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = Config::from_env()?;
    init_tracing(&config.log_format);
    let state = build_state(&config)?;

    let scheduler = scheduler::start_distribution_scheduler(state, config.distribution_interval);

    tokio::select! {
        result = scheduler => {
            if let Err(e) = result {
                tracing::error!("Distribution scheduler stopped: {}", e);
            }
        }
        _ = tokio::signal::ctrl_c() => {
            tracing::info!("Shutdown signal received");
        }
    }
    Ok(())
}
