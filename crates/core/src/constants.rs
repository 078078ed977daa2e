/// Base currency used when no reporting settings are provided
pub const DEFAULT_BASE_CURRENCY: &str = "USD";

/// Decimal precision for ratio metrics
pub const RATIO_DECIMAL_PRECISION: u32 = 6;

/// Format of the date keys used by change metrics (e.g. `30.08.2019`)
pub const CHANGE_KEY_DATE_FORMAT: &str = "%d.%m.%Y";
