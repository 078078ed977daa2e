use thiserror::Error;

/// Errors raised while converting between currencies.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FxError {
    #[error("Exchange rate not found: {0}")]
    RateNotFound(String),

    #[error("Invalid exchange rate: {0}")]
    InvalidRate(String),

    #[error("Converted amount does not fit in minor units: {0}")]
    AmountOverflow(String),
}
