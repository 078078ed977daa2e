//! Maps a period and an anchor instant onto the report's date range.
//!
//! Months are handled with zero-based indices (January = 0) because the
//! report calendar is defined in those terms:
//!
//! - `MONTH` steps back one month, except that January and February both
//!   roll back to December of the previous year.
//! - `QUARTER` reports close one month after the calendar quarter. February
//!   is a blackout month: the previous quarter is not final yet and
//!   resolution fails with [`Error::InvalidPeriodRange`].
//! - `YEAR` steps back one year.
//!
//! Day-of-month and time-of-day are kept from the anchor. A day that does not
//! exist in the target month is clamped to that month's last day.

use chrono::{DateTime, Datelike, NaiveDate, TimeZone, Utc};
use log::debug;

use super::period_model::{DateRange, Period};
use crate::errors::{Error, Result};

const FEBRUARY: u32 = 1;
const JANUARY: u32 = 0;
const MARCH: u32 = 2;
const SEPTEMBER: u32 = 8;
const DECEMBER: u32 = 11;

/// Resolves the `[start, end)` range for `period` ending at `reference_end`.
pub fn define_date_range(period: Period, reference_end: DateTime<Utc>) -> Result<DateRange> {
    let year = reference_end.year();
    let month = reference_end.month0();

    let (start_year, start_month) = match period {
        Period::Month => {
            if month > FEBRUARY {
                (year, month - 1)
            } else {
                (year - 1, DECEMBER)
            }
        }
        Period::Quarter => match month {
            FEBRUARY => {
                return Err(Error::InvalidPeriodRange(format!(
                    "Quarter has not been ended yet for anchor {}",
                    reference_end.to_rfc3339()
                )));
            }
            JANUARY => (year - 1, SEPTEMBER),
            MARCH => (year - 1, DECEMBER),
            _ => (year, month - 3),
        },
        Period::Year => (year - 1, month),
    };

    let start = shift_to(reference_end, start_year, start_month)?;
    let range = DateRange::new(start, reference_end);
    debug!("Resolved {} range {}", period, range);
    Ok(range)
}

/// Resolves the period immediately preceding an already-resolved range by
/// re-anchoring the resolver at the range's start.
pub fn define_previous_date_range(period: Period, range: &DateRange) -> Result<DateRange> {
    define_date_range(period, range.start())
}

/// Moves `anchor` to `year`/`month0`, keeping day and time where possible.
fn shift_to(anchor: DateTime<Utc>, year: i32, month0: u32) -> Result<DateTime<Utc>> {
    let naive = anchor.naive_utc();
    let month = month0 + 1;
    let day = naive.day().min(last_day_of_month(year, month)?);
    let date = NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| {
        Error::Unexpected(format!("Cannot build date {}-{}-{}", year, month, day))
    })?;
    Ok(Utc.from_utc_datetime(&date.and_time(naive.time())))
}

fn last_day_of_month(year: i32, month: u32) -> Result<u32> {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .and_then(|first_of_next| first_of_next.pred_opt())
        .map(|last| last.day())
        .ok_or_else(|| Error::Unexpected(format!("Month {}-{} is out of range", year, month)))
}
