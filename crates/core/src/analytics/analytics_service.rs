use std::collections::{BTreeMap, HashSet};
use std::sync::Arc;

use async_trait::async_trait;
use futures::future::try_join_all;
use log::debug;
use rust_decimal::Decimal;

use super::analytics_model::{Aggregation, MetricRequest, MetricShape, MetricValue};
use super::analytics_traits::TransactionAnalyticServiceTrait;
use crate::categories::CategoryServiceTrait;
use crate::constants::RATIO_DECIMAL_PRECISION;
use crate::errors::{Error, Result, ValidationError};
use crate::fx::CurrencyConverterTrait;
use crate::period::{define_previous_date_range, DateRange};
use crate::transactions::Transaction;
use crate::utils::time_utils::format_change_key;

/// A transaction paired with what it contributes to the aggregate:
/// 1 for counts, the base-currency amount for sums.
type Weighted<'a> = (&'a Transaction, i64);

pub struct TransactionAnalyticService {
    currency_converter: Arc<dyn CurrencyConverterTrait>,
    category_service: Arc<dyn CategoryServiceTrait>,
    base_currency: String,
}

impl TransactionAnalyticService {
    pub fn new(
        currency_converter: Arc<dyn CurrencyConverterTrait>,
        category_service: Arc<dyn CategoryServiceTrait>,
        base_currency: String,
    ) -> Self {
        Self {
            currency_converter,
            category_service,
            base_currency,
        }
    }

    fn require_category(request: &MetricRequest) -> Result<&str> {
        request.category_id.as_deref().ok_or_else(|| {
            debug!("Metric {} requested without a category", request.metric);
            Error::Validation(ValidationError::MissingField("category_id".to_string()))
        })
    }

    /// Weighs every transaction in `range` (and, when given, in `categories`).
    ///
    /// Conversions are issued concurrently and the first failure aborts the
    /// whole computation.
    async fn weigh<'a>(
        &self,
        transactions: &'a [Transaction],
        range: &DateRange,
        categories: Option<&HashSet<String>>,
        aggregation: Aggregation,
    ) -> Result<Vec<Weighted<'a>>> {
        let selected: Vec<&Transaction> = transactions
            .iter()
            .filter(|t| range.contains(t.timestamp))
            .filter(|t| categories.map_or(true, |ids| ids.contains(&t.category_id)))
            .collect();

        match aggregation {
            Aggregation::Count => Ok(selected.into_iter().map(|t| (t, 1)).collect()),
            Aggregation::Sum => {
                let converted = try_join_all(selected.iter().map(|t| {
                    self.currency_converter
                        .convert(t.amount, &t.currency, &self.base_currency)
                }))
                .await?;
                Ok(selected.into_iter().zip(converted).collect())
            }
        }
    }

    fn total(weights: impl IntoIterator<Item = i64>) -> Result<i64> {
        weights.into_iter().try_fold(0i64, |acc, weight| {
            acc.checked_add(weight)
                .ok_or_else(|| Error::Unexpected("Metric total overflowed".to_string()))
        })
    }

    async fn scalar(
        &self,
        transactions: &[Transaction],
        request: &MetricRequest,
        range: &DateRange,
    ) -> Result<i64> {
        let aggregation = request.metric.aggregation();
        let weighted = if request.metric.requires_category() {
            let scope = Self::require_category(request)?;
            let ids = self.category_service.get_subtree_ids(scope).await?;
            self.weigh(transactions, range, Some(&ids), aggregation)
                .await?
        } else {
            self.weigh(transactions, range, None, aggregation).await?
        };
        Self::total(weighted.iter().map(|(_, weight)| *weight))
    }

    async fn ratios(
        &self,
        transactions: &[Transaction],
        request: &MetricRequest,
    ) -> Result<BTreeMap<String, Decimal>> {
        let scope = Self::require_category(request)?;
        let scope_ids = self.category_service.get_subtree_ids(scope).await?;
        let weighted = self
            .weigh(
                transactions,
                &request.range,
                Some(&scope_ids),
                request.metric.aggregation(),
            )
            .await?;
        let total = Self::total(weighted.iter().map(|(_, weight)| *weight))?;

        let mut ratios = BTreeMap::new();
        for child in self.category_service.get_children(scope).await? {
            let child_ids = self.category_service.get_subtree_ids(&child.id).await?;
            let part = Self::total(
                weighted
                    .iter()
                    .filter(|(t, _)| child_ids.contains(&t.category_id))
                    .map(|(_, weight)| *weight),
            )?;
            let ratio = Decimal::from(part)
                .checked_div(Decimal::from(total))
                .map(|r| r.round_dp(RATIO_DECIMAL_PRECISION))
                .unwrap_or(Decimal::ZERO);
            ratios.insert(child.id, ratio);
        }
        Ok(ratios)
    }

    /// Aggregate over the period *preceding* `request.range`, keyed by that
    /// preceding range's start. For a QUARTER anchored at 30.09.2019 the key
    /// is `30.03.2019`, not the requested range's own start `30.06.2019`.
    async fn change(
        &self,
        transactions: &[Transaction],
        request: &MetricRequest,
    ) -> Result<BTreeMap<String, i64>> {
        let previous = define_previous_date_range(request.period, &request.range)?;
        let value = self.scalar(transactions, request, &previous).await?;

        let mut change = BTreeMap::new();
        change.insert(format_change_key(previous.start()), value);
        Ok(change)
    }
}

#[async_trait]
impl TransactionAnalyticServiceTrait for TransactionAnalyticService {
    fn lookup_range(&self, request: &MetricRequest) -> Result<DateRange> {
        match request.metric.shape() {
            MetricShape::Change => {
                let previous = define_previous_date_range(request.period, &request.range)?;
                Ok(previous.union(&request.range))
            }
            MetricShape::Scalar | MetricShape::Ratio => Ok(request.range),
        }
    }

    async fn compute_metric(
        &self,
        transactions: &[Transaction],
        request: &MetricRequest,
    ) -> Result<MetricValue> {
        debug!(
            "Computing {} over {} for category {:?} ({} candidate transactions)",
            request.metric,
            request.range,
            request.category_id,
            transactions.len()
        );

        let value = match request.metric.shape() {
            MetricShape::Scalar => MetricValue::Scalar(
                self.scalar(transactions, request, &request.range).await?,
            ),
            MetricShape::Ratio => MetricValue::Ratios(self.ratios(transactions, request).await?),
            MetricShape::Change => MetricValue::Change(self.change(transactions, request).await?),
        };

        debug!("Computed {}: {:?}", request.metric, value);
        Ok(value)
    }
}
