//! User settings for Kasa
//!
//! Manages company details, the recognized currency table and display
//! preferences.

use chrono::format::{Item, StrftimeItems};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::paths::KasaPaths;
use crate::error::KasaError;
use crate::models::{Currency, CurrencyTable};

/// User settings for Kasa
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Company name printed on receipts and report headers
    #[serde(default = "default_company_name")]
    pub company_name: String,

    /// Currencies recognized by reports; order is display order
    #[serde(default)]
    pub currencies: CurrencyTable,

    /// Currency code used when a command does not name one
    #[serde(default = "default_currency")]
    pub default_currency: String,

    /// Date format preference (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// Days past the due date before an unpaid invoice or installment counts as overdue
    #[serde(default)]
    pub overdue_grace_days: u32,
}

fn default_schema_version() -> u32 {
    1
}

fn default_company_name() -> String {
    "Kasa İnşaat".to_string()
}

fn default_currency() -> String {
    "TRY".to_string()
}

fn is_valid_date_format(pattern: &str) -> bool {
    !StrftimeItems::new(pattern).any(|item| matches!(item, Item::Error))
}

fn default_date_format() -> String {
    "%d.%m.%Y".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            company_name: default_company_name(),
            currencies: CurrencyTable::default(),
            default_currency: default_currency(),
            date_format: default_date_format(),
            overdue_grace_days: 0,
        }
    }
}

impl Settings {
    /// Load settings from disk, or return defaults if the file doesn't exist
    pub fn load_or_create(paths: &KasaPaths) -> Result<Self, KasaError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path)
                .map_err(|e| KasaError::Io(format!("Failed to read settings file: {}", e)))?;

            let settings: Settings = serde_json::from_str(&contents)
                .map_err(|e| KasaError::Config(format!("Failed to parse settings file: {}", e)))?;

            settings.validate()?;
            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &KasaPaths) -> Result<(), KasaError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| KasaError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| KasaError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }

    /// Check that the settings are internally consistent
    pub fn validate(&self) -> Result<(), KasaError> {
        if self.currencies.is_empty() {
            return Err(KasaError::Config(
                "At least one currency must be configured".into(),
            ));
        }
        if !self.currencies.contains(&self.default_currency) {
            return Err(KasaError::Config(format!(
                "Default currency '{}' is not in the currency table",
                self.default_currency
            )));
        }
        if !is_valid_date_format(&self.date_format) {
            return Err(KasaError::Config(format!(
                "Invalid date format '{}'",
                self.date_format
            )));
        }
        Ok(())
    }

    /// Format a date with the configured pattern
    ///
    /// An invalid pattern falls back to the default `%d.%m.%Y`.
    pub fn format_date(&self, date: NaiveDate) -> String {
        if is_valid_date_format(&self.date_format) {
            date.format(&self.date_format).to_string()
        } else {
            date.format(&default_date_format()).to_string()
        }
    }

    /// The default currency entry
    pub fn default_currency(&self) -> Option<&Currency> {
        self.currencies.get(&self.default_currency)
    }

    /// Resolve a currency code given on the command line, falling back to the default
    pub fn resolve_currency(&self, code: Option<&str>) -> Result<String, KasaError> {
        let code = code
            .map(|c| c.trim().to_uppercase())
            .unwrap_or_else(|| self.default_currency.clone());

        if self.currencies.contains(&code) {
            Ok(code)
        } else {
            Err(KasaError::Validation(format!(
                "Unknown currency '{}'. Configured: {}",
                code,
                self.currencies.codes().collect::<Vec<_>>().join(", ")
            )))
        }
    }
}
