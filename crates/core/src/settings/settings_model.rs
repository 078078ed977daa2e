//! Reporting settings.

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_BASE_CURRENCY;
use crate::errors::{Result, ValidationError};

/// Engine-wide settings for report computation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportingSettings {
    /// Currency every summed metric is expressed in.
    pub base_currency: String,
}

impl Default for ReportingSettings {
    fn default() -> Self {
        Self {
            base_currency: DEFAULT_BASE_CURRENCY.to_string(),
        }
    }
}

impl ReportingSettings {
    pub fn new(base_currency: impl Into<String>) -> Result<Self> {
        let settings = Self {
            base_currency: base_currency.into().trim().to_uppercase(),
        };
        settings.validate()?;
        Ok(settings)
    }

    /// Checks that the base currency looks like an ISO 4217 code.
    pub fn validate(&self) -> Result<()> {
        let code = &self.base_currency;
        if code.len() != 3 || !code.chars().all(|c| c.is_ascii_uppercase()) {
            return Err(ValidationError::InvalidInput(format!(
                "Base currency must be a three-letter code, got '{}'",
                code
            ))
            .into());
        }
        Ok(())
    }
}
