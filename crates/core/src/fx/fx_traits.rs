use async_trait::async_trait;

use crate::errors::Result;

/// Contract of the currency conversion source.
///
/// Amounts are signed minor units. Implementations fail with
/// [`FxError::RateNotFound`](super::FxError::RateNotFound) when no rate is
/// known for the pair.
#[async_trait]
pub trait CurrencyConverterTrait: Send + Sync {
    async fn convert(&self, amount: i64, from_currency: &str, to_currency: &str) -> Result<i64>;
}
