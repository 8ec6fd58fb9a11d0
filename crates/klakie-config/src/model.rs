use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Whole-number tax percentage applied when none has been configured.
pub const DEFAULT_TAX_PERCENT: f64 = 2.0;

/// Invoice issuer/recipient details plus the two numeric billing parameters.
///
/// Field names follow the camelCase JSON written by the settings form.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceConfig {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub tin: String,
    #[serde(default)]
    pub employment_type: String,
    /// Whole-number percentage, e.g. `12.0` for 12%.
    #[serde(default = "InvoiceConfig::default_tax_percent")]
    pub tax_percent: f64,
    #[serde(default)]
    pub bank_name: String,
    #[serde(default)]
    pub bank_account: String,
    #[serde(default)]
    pub hourly_rate: f64,
    #[serde(default)]
    pub employer: String,
    #[serde(default)]
    pub employer_address: String,
    #[serde(default)]
    pub employer_email: String,
    #[serde(default)]
    pub employer_tin: String,
}

impl Default for InvoiceConfig {
    fn default() -> Self {
        Self {
            name: String::new(),
            address: String::new(),
            email: String::new(),
            tin: String::new(),
            employment_type: String::new(),
            tax_percent: Self::default_tax_percent(),
            bank_name: String::new(),
            bank_account: String::new(),
            hourly_rate: 0.0,
            employer: String::new(),
            employer_address: String::new(),
            employer_email: String::new(),
            employer_tin: String::new(),
        }
    }
}

impl InvoiceConfig {
    pub fn default_tax_percent() -> f64 {
        DEFAULT_TAX_PERCENT
    }

    /// Issuer name with whitespace removed and lowercased, used as the document watermark.
    pub fn watermark(&self) -> String {
        self.name
            .split_whitespace()
            .collect::<String>()
            .to_lowercase()
    }

    /// Rejects values the calculators would otherwise propagate unchecked.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.hourly_rate.is_finite() || self.hourly_rate < 0.0 {
            return Err(ConfigError::InvalidValue {
                field: "hourlyRate",
                reason: format!("must be a non-negative number, got {}", self.hourly_rate),
            });
        }
        if !(0.0..=100.0).contains(&self.tax_percent) {
            return Err(ConfigError::InvalidValue {
                field: "taxPercent",
                reason: format!("must be between 0 and 100, got {}", self.tax_percent),
            });
        }
        Ok(())
    }
}
