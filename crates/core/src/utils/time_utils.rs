use chrono::{DateTime, Utc};

use crate::constants::CHANGE_KEY_DATE_FORMAT;

/// Source of "now" for anything that anchors a report in time.
///
/// Services take a clock instead of calling `Utc::now()` so a fixed anchor can
/// be substituted in tests.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock time.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Clock frozen at a single instant.
#[derive(Clone, Copy, Debug)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Formats an instant as the `DD.MM.YYYY` key used by change metrics.
pub fn format_change_key(instant: DateTime<Utc>) -> String {
    instant.format(CHANGE_KEY_DATE_FORMAT).to_string()
}
