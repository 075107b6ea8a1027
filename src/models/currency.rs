//! Currency definitions
//!
//! Records carry a currency code string. The configured [`CurrencyTable`]
//! decides which codes reports recognize and how they are shown.

use serde::{Deserialize, Serialize};

/// A recognized currency
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Currency {
    /// ISO-style code used as the grouping key (e.g., "TRY")
    pub code: String,
    /// Display symbol (e.g., "₺")
    pub symbol: String,
    /// Name written on receipts (e.g., "Türk Lirası")
    pub name: String,
    /// Name of the hundredth unit written on receipts (e.g., "kuruş")
    #[serde(default = "default_minor_name")]
    pub minor_name: String,
}

fn default_minor_name() -> String {
    "cent".to_string()
}

impl Currency {
    pub fn new(
        code: impl Into<String>,
        symbol: impl Into<String>,
        name: impl Into<String>,
        minor_name: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            symbol: symbol.into(),
            name: name.into(),
            minor_name: minor_name.into(),
        }
    }
}

/// Ordered list of recognized currencies
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CurrencyTable(Vec<Currency>);

impl Default for CurrencyTable {
    fn default() -> Self {
        Self(vec![
            Currency::new("TRY", "₺", "Türk Lirası", "kuruş"),
            Currency::new("USD", "$", "Amerikan Doları", "sent"),
            Currency::new("EUR", "€", "Euro", "sent"),
        ])
    }
}

impl CurrencyTable {
    pub fn new(currencies: Vec<Currency>) -> Self {
        Self(currencies)
    }

    pub fn get(&self, code: &str) -> Option<&Currency> {
        self.0.iter().find(|c| c.code == code)
    }

    pub fn contains(&self, code: &str) -> bool {
        self.get(code).is_some()
    }

    /// Display symbol for a code, falling back to the raw code when unknown
    pub fn symbol_for<'a>(&'a self, code: &'a str) -> &'a str {
        self.get(code).map(|c| c.symbol.as_str()).unwrap_or(code)
    }

    /// Codes in table order
    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|c| c.code.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Currency> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
