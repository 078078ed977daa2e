use std::sync::Arc;

use ledger_core::analytics::TransactionAnalyticService;
use ledger_core::categories::CategoryService;
use ledger_core::distribution::{
    NoOpReportOutputPort, ReportDistributionInteractor, ReportDistributionInteractorTrait,
};
use ledger_core::settings::ReportingSettings;
use ledger_core::utils::time_utils::{Clock, SystemClock};
use ledger_storage_memory::{MemoryStorage, SeedData};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::dispatcher::LogEventDispatcher;

pub struct AppState {
    pub interactor: Arc<dyn ReportDistributionInteractorTrait>,
    pub settings: ReportingSettings,
}

pub fn init_tracing(log_format: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init();
    }
}

pub fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    let storage = match &config.seed_file {
        Some(path) => {
            tracing::info!("Seed file in use: {}", path.display());
            MemoryStorage::from_seed(SeedData::from_path(path)?)?
        }
        None => {
            tracing::warn!("LEDGER_SEED_FILE not set, starting with empty stores");
            MemoryStorage::empty()
        }
    };
    build_state_with(config, storage, Arc::new(SystemClock))
}

pub fn build_state_with(
    config: &Config,
    storage: MemoryStorage,
    clock: Arc<dyn Clock>,
) -> anyhow::Result<Arc<AppState>> {
    let settings = ReportingSettings::new(config.base_currency.as_str())?;
    tracing::info!("Base currency in use: {}", settings.base_currency);

    let category_service = Arc::new(CategoryService::new(storage.categories.clone()));
    let analytic_service = Arc::new(TransactionAnalyticService::new(
        storage.currency_converter.clone(),
        category_service,
        settings.base_currency.clone(),
    ));

    let interactor = ReportDistributionInteractor::new(
        storage.subscriptions.clone(),
        storage.transactions.clone(),
        analytic_service,
        Arc::new(LogEventDispatcher),
        Arc::new(NoOpReportOutputPort),
        clock,
    );

    Ok(Arc::new(AppState {
        interactor: Arc::new(interactor),
        settings,
    }))
}
