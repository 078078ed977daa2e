use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;

/// Default run interval: once a day.
const DEFAULT_DISTRIBUTION_INTERVAL_SECS: u64 = 24 * 60 * 60;

#[derive(Debug, Clone)]
pub struct Config {
    pub base_currency: String,
    pub seed_file: Option<PathBuf>,
    pub distribution_interval: Duration,
    pub log_format: String,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let base_currency = lookup("LEDGER_BASE_CURRENCY")
            .unwrap_or_else(|| ledger_core::constants::DEFAULT_BASE_CURRENCY.to_string());
        let seed_file = lookup("LEDGER_SEED_FILE")
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from);
        let interval_secs = match lookup("LEDGER_DISTRIBUTION_INTERVAL_SECS") {
            Some(raw) => raw
                .trim()
                .parse::<u64>()
                .with_context(|| format!("Invalid LEDGER_DISTRIBUTION_INTERVAL_SECS: {}", raw))?,
            None => DEFAULT_DISTRIBUTION_INTERVAL_SECS,
        };
        if interval_secs == 0 {
            anyhow::bail!("LEDGER_DISTRIBUTION_INTERVAL_SECS must be greater than zero");
        }
        let log_format = lookup("LEDGER_LOG_FORMAT").unwrap_or_else(|| "text".to_string());

        Ok(Self {
            base_currency,
            seed_file,
            distribution_interval: Duration::from_secs(interval_secs),
            log_format,
        })
    }
}
