//! Analytics module - metric definitions and the transaction analytic service.

mod analytics_model;
mod analytics_service;
mod analytics_traits;

pub use analytics_model::{Aggregation, AvailableAnalyticMetric, MetricRequest, MetricShape, MetricValue};
pub use analytics_service::TransactionAnalyticService;
pub use analytics_traits::TransactionAnalyticServiceTrait;

#[cfg(test)]
mod analytics_service_tests;
