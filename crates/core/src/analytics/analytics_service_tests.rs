//! Unit tests for the transaction analytic service.

use super::*;
use crate::errors::{DatabaseError, Error, ValidationError};
use crate::fx::FxError;
use crate::period::{define_date_range, Period};
use crate::test_support::{analytic_service, anchor, transaction, transactions, SCOPE_CATEGORY};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::collections::BTreeMap;

use super::AvailableAnalyticMetric::*;

fn request(metric: AvailableAnalyticMetric, period: Period) -> MetricRequest {
    MetricRequest {
        metric,
        period,
        range: define_date_range(period, anchor()).unwrap(),
        category_id: Some(SCOPE_CATEGORY.to_string()),
    }
}

async fn compute(metric: AvailableAnalyticMetric, period: Period) -> MetricValue {
    analytic_service()
        .compute_metric(&transactions(), &request(metric, period))
        .await
        .unwrap()
}

fn ratios(entries: &[(&str, Decimal)]) -> MetricValue {
    MetricValue::Ratios(
        entries
            .iter()
            .map(|(id, ratio)| (id.to_string(), *ratio))
            .collect::<BTreeMap<_, _>>(),
    )
}

fn change(key: &str, value: i64) -> MetricValue {
    let mut map = BTreeMap::new();
    map.insert(key.to_string(), value);
    MetricValue::Change(map)
}

// ============================================================================
// Scalar metrics
// ============================================================================

#[tokio::test]
async fn test_count_by_category() {
    let metric = TransactionsCountByCategoryAndDateRange;
    assert_eq!(compute(metric, Period::Month).await, MetricValue::Scalar(0));
    assert_eq!(compute(metric, Period::Quarter).await, MetricValue::Scalar(1));
    assert_eq!(compute(metric, Period::Year).await, MetricValue::Scalar(5));
}

#[tokio::test]
async fn test_sum_by_category_converts_to_base_currency() {
    let metric = TransactionsSumByCategoryAndDateRange;
    assert_eq!(compute(metric, Period::Month).await, MetricValue::Scalar(0));
    assert_eq!(compute(metric, Period::Quarter).await, MetricValue::Scalar(5_01));
    assert_eq!(compute(metric, Period::Year).await, MetricValue::Scalar(250_02));
}

#[tokio::test]
async fn test_count_by_date_range_ignores_categories() {
    let metric = TransactionsCountByDateRange;
    assert_eq!(compute(metric, Period::Month).await, MetricValue::Scalar(1));
    assert_eq!(compute(metric, Period::Quarter).await, MetricValue::Scalar(2));
    assert_eq!(compute(metric, Period::Year).await, MetricValue::Scalar(6));
}

#[tokio::test]
async fn test_sum_by_date_range_ignores_categories() {
    let metric = TransactionsSumByDateRange;
    assert_eq!(compute(metric, Period::Month).await, MetricValue::Scalar(9_99));
    assert_eq!(compute(metric, Period::Quarter).await, MetricValue::Scalar(15_00));
    assert_eq!(compute(metric, Period::Year).await, MetricValue::Scalar(260_01));
}

#[tokio::test]
async fn test_date_range_metrics_do_not_need_a_category() {
    let mut request = request(TransactionsCountByDateRange, Period::Year);
    request.category_id = None;
    let value = analytic_service()
        .compute_metric(&transactions(), &request)
        .await
        .unwrap();
    assert_eq!(value, MetricValue::Scalar(6));
}

#[tokio::test]
async fn test_leaf_category_scope_counts_only_that_leaf() {
    let mut request = request(TransactionsSumByCategoryAndDateRange, Period::Year);
    request.category_id = Some("5".to_string());
    let value = analytic_service()
        .compute_metric(&transactions(), &request)
        .await
        .unwrap();
    assert_eq!(value, MetricValue::Scalar(45_00));
}

// ============================================================================
// Ratio metrics
// ============================================================================

#[tokio::test]
async fn test_count_ratio_is_zero_without_activity() {
    let expected = ratios(&[("2", dec!(0)), ("3", dec!(0)), ("4", dec!(0))]);
    let metric = TransactionsCountRatioByCategoryAndDateRange;
    assert_eq!(compute(metric, Period::Month).await, expected);
    // The only quarter transaction is booked on the parent itself.
    assert_eq!(compute(metric, Period::Quarter).await, expected);
}

#[tokio::test]
async fn test_count_ratio_over_year() {
    let value = compute(TransactionsCountRatioByCategoryAndDateRange, Period::Year).await;
    assert_eq!(
        value,
        ratios(&[("2", dec!(0.4)), ("3", dec!(0.2)), ("4", dec!(0.2))])
    );
}

#[tokio::test]
async fn test_sum_ratio_over_year_includes_grandchildren() {
    let value = compute(TransactionsSumRatioByCategoryAndDateRange, Period::Year).await;
    let share = |part: i64| (Decimal::from(part) / Decimal::from(250_02)).round_dp(6);
    assert_eq!(
        value,
        ratios(&[
            ("2", share(145_00)),
            ("3", share(50_00)),
            ("4", share(50_01)),
        ])
    );
}

#[tokio::test]
async fn test_sum_ratio_is_zero_without_activity() {
    let value = compute(TransactionsSumRatioByCategoryAndDateRange, Period::Month).await;
    assert_eq!(
        value,
        ratios(&[("2", dec!(0)), ("3", dec!(0)), ("4", dec!(0))])
    );
}

#[tokio::test]
async fn test_ratio_of_childless_category_is_empty() {
    let mut request = request(TransactionsCountRatioByCategoryAndDateRange, Period::Year);
    request.category_id = Some("4".to_string());
    let value = analytic_service()
        .compute_metric(&transactions(), &request)
        .await
        .unwrap();
    assert_eq!(value, MetricValue::Ratios(BTreeMap::new()));
}

// ============================================================================
// Change metrics
// ============================================================================

#[tokio::test]
async fn test_count_change_is_keyed_by_previous_period_start() {
    let metric = TransactionsCountChangeByCategoryAndDateRange;
    assert_eq!(compute(metric, Period::Month).await, change("30.07.2019", 0));
    assert_eq!(compute(metric, Period::Quarter).await, change("30.03.2019", 1));
    assert_eq!(compute(metric, Period::Year).await, change("30.09.2017", 1));
}

#[tokio::test]
async fn test_sum_change_is_keyed_by_previous_period_start() {
    let metric = TransactionsSumChangeByCategoryAndDateRange;
    assert_eq!(compute(metric, Period::Month).await, change("30.07.2019", 0));
    assert_eq!(compute(metric, Period::Quarter).await, change("30.03.2019", 100_00));
    assert_eq!(compute(metric, Period::Year).await, change("30.09.2017", 12_00));
}

#[tokio::test]
async fn test_change_lookup_range_reaches_back_one_period() {
    let service = analytic_service();
    let request = request(TransactionsCountChangeByCategoryAndDateRange, Period::Quarter);
    let window = service.lookup_range(&request).unwrap();
    let previous = crate::period::define_previous_date_range(Period::Quarter, &request.range).unwrap();
    assert_eq!(window.start(), previous.start());
    assert_eq!(window.end(), request.range.end());
}

#[tokio::test]
async fn test_non_change_lookup_range_is_the_range() {
    let service = analytic_service();
    let request = request(TransactionsSumRatioByCategoryAndDateRange, Period::Month);
    assert_eq!(service.lookup_range(&request).unwrap(), request.range);
}

// ============================================================================
// Failures
// ============================================================================

#[tokio::test]
async fn test_conversion_failure_fails_the_sum() {
    let mut ledger = transactions();
    ledger.push(transaction("t-jpy", (2019, 5, 5), "3", 1000, "JPY"));

    let result = analytic_service()
        .compute_metric(&ledger, &request(TransactionsSumByCategoryAndDateRange, Period::Year))
        .await;
    assert!(matches!(result, Err(Error::Fx(FxError::RateNotFound(_)))));
}

#[tokio::test]
async fn test_conversion_failure_does_not_affect_counts() {
    let mut ledger = transactions();
    ledger.push(transaction("t-jpy", (2019, 5, 5), "3", 1000, "JPY"));

    let value = analytic_service()
        .compute_metric(&ledger, &request(TransactionsCountByCategoryAndDateRange, Period::Year))
        .await
        .unwrap();
    assert_eq!(value, MetricValue::Scalar(6));
}

#[tokio::test]
async fn test_category_metric_without_category_is_rejected() {
    let mut request = request(TransactionsCountRatioByCategoryAndDateRange, Period::Year);
    request.category_id = None;
    let result = analytic_service()
        .compute_metric(&transactions(), &request)
        .await;
    match result {
        Err(Error::Validation(ValidationError::MissingField(field))) => {
            assert_eq!(field, "category_id")
        }
        other => panic!("Expected MissingField, got {:?}", other),
    }
}

#[tokio::test]
async fn test_unknown_category_is_not_found() {
    let mut request = request(TransactionsCountByCategoryAndDateRange, Period::Year);
    request.category_id = Some("404".to_string());
    let result = analytic_service()
        .compute_metric(&transactions(), &request)
        .await;
    assert!(matches!(
        result,
        Err(Error::Database(DatabaseError::NotFound(_)))
    ));
}
