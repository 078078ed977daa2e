use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Rate for converting one unit of `from_currency` into `to_currency`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ExchangeRate {
    pub from_currency: String,
    pub to_currency: String,
    pub rate: Decimal,
}

impl ExchangeRate {
    pub fn new(from_currency: &str, to_currency: &str, rate: Decimal) -> Self {
        Self {
            from_currency: from_currency.to_string(),
            to_currency: to_currency.to_string(),
            rate,
        }
    }
}
