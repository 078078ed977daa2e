use std::collections::{HashMap, HashSet, VecDeque};

use async_trait::async_trait;
use num_traits::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

use super::fx_errors::FxError;
use super::fx_model::ExchangeRate;
use super::fx_traits::CurrencyConverterTrait;
use crate::errors::Result;

/// Converter backed by a fixed table of rates.
///
/// Rates are stored per pair together with their inverse, and conversions
/// between currencies without a direct rate follow the shortest chain of known
/// pairs (e.g. `EUR -> USD -> GBP`).
#[derive(Default)]
pub struct CurrencyConverter {
    /// Currency -> currencies it has a rate to.
    adj: HashMap<String, HashSet<String>>,
    rates: HashMap<(String, String), Decimal>,
}

impl CurrencyConverter {
    pub fn new(exchange_rates: Vec<ExchangeRate>) -> std::result::Result<Self, FxError> {
        let mut converter = CurrencyConverter {
            adj: HashMap::new(),
            rates: HashMap::new(),
        };
        for rate in exchange_rates {
            converter.add_rate(rate)?;
        }
        Ok(converter)
    }

    /// Adds or replaces a rate along with its inverse.
    pub fn add_rate(&mut self, rate: ExchangeRate) -> std::result::Result<(), FxError> {
        if rate.rate <= Decimal::ZERO {
            return Err(FxError::InvalidRate(format!(
                "{} -> {} must be positive, got {}",
                rate.from_currency, rate.to_currency, rate.rate
            )));
        }
        if rate.from_currency == rate.to_currency {
            return Ok(());
        }

        let inverse = Decimal::ONE / rate.rate;
        self.insert_edge(&rate.from_currency, &rate.to_currency, rate.rate);
        self.insert_edge(&rate.to_currency, &rate.from_currency, inverse);
        Ok(())
    }

    fn insert_edge(&mut self, from: &str, to: &str, rate: Decimal) {
        self.rates.insert((from.to_string(), to.to_string()), rate);
        self.adj
            .entry(from.to_string())
            .or_default()
            .insert(to.to_string());
    }

    /// Rate for one unit of `from_currency`, found by breadth-first search so
    /// the shortest chain of pairs wins.
    pub fn get_rate(
        &self,
        from_currency: &str,
        to_currency: &str,
    ) -> std::result::Result<Decimal, FxError> {
        if from_currency == to_currency {
            return Ok(Decimal::ONE);
        }

        let mut queue: VecDeque<(&str, Decimal)> = VecDeque::new();
        let mut visited: HashSet<&str> = HashSet::new();
        let mut overflowed = false;
        queue.push_back((from_currency, Decimal::ONE));
        visited.insert(from_currency);

        while let Some((current, accumulated)) = queue.pop_front() {
            if current == to_currency {
                return Ok(accumulated);
            }
            let Some(neighbors) = self.adj.get(current) else {
                continue;
            };
            for neighbor in neighbors {
                if visited.contains(neighbor.as_str()) {
                    continue;
                }
                if let Some(rate) = self.rates.get(&(current.to_string(), neighbor.clone())) {
                    // Chains leaving the Decimal range are skipped.
                    let Some(chained) = accumulated.checked_mul(*rate) else {
                        overflowed = true;
                        continue;
                    };
                    visited.insert(neighbor.as_str());
                    queue.push_back((neighbor.as_str(), chained));
                }
            }
        }

        if overflowed {
            return Err(FxError::AmountOverflow(format!(
                "Rate chain {} -> {} exceeds the decimal range",
                from_currency, to_currency
            )));
        }
        Err(FxError::RateNotFound(format!(
            "No conversion path found for {} -> {}",
            from_currency, to_currency
        )))
    }

    /// Converts minor units, rounding half away from zero.
    pub fn convert_amount(
        &self,
        amount: i64,
        from_currency: &str,
        to_currency: &str,
    ) -> std::result::Result<i64, FxError> {
        if from_currency == to_currency {
            return Ok(amount);
        }
        let rate = self.get_rate(from_currency, to_currency)?;
        let overflow = || {
            FxError::AmountOverflow(format!(
                "{} {} -> {}",
                amount, from_currency, to_currency
            ))
        };
        Decimal::from(amount)
            .checked_mul(rate)
            .ok_or_else(overflow)?
            .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
            .to_i64()
            .ok_or_else(overflow)
    }
}

#[async_trait]
impl CurrencyConverterTrait for CurrencyConverter {
    async fn convert(&self, amount: i64, from_currency: &str, to_currency: &str) -> Result<i64> {
        Ok(self.convert_amount(amount, from_currency, to_currency)?)
    }
}
