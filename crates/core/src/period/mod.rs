//! Period module - reporting periods and date-range resolution.

mod period_model;
mod period_resolver;

pub use period_model::{DateRange, Period};
pub use period_resolver::{define_date_range, define_previous_date_range};
