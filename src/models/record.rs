//! The common monetary record shape
//!
//! Every entity that carries an amount maps itself into a [`MonetaryRecord`]
//! through [`AsMonetaryRecord`] before it reaches the aggregation code.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::money::Money;

/// Income/expense discriminator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordKind {
    Income,
    Expense,
}

impl RecordKind {
    /// Parse from user input (English or Turkish)
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "income" | "in" | "gelir" => Some(Self::Income),
            "expense" | "out" | "gider" => Some(Self::Expense),
            _ => None,
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Income => write!(f, "Gelir"),
            Self::Expense => write!(f, "Gider"),
        }
    }
}

/// One amount in one currency, optionally classified and dated
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonetaryRecord {
    pub amount: Money,
    pub currency_code: String,
    pub kind: Option<RecordKind>,
    pub date: Option<NaiveDate>,
}

impl MonetaryRecord {
    pub fn new(amount: Money, currency_code: impl Into<String>) -> Self {
        Self {
            amount,
            currency_code: currency_code.into(),
            kind: None,
            date: None,
        }
    }

    pub fn with_kind(mut self, kind: RecordKind) -> Self {
        self.kind = Some(kind);
        self
    }

    pub fn with_date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }
}

/// Adapter from a domain entity into the common record shape
pub trait AsMonetaryRecord {
    fn to_record(&self) -> MonetaryRecord;
}

impl AsMonetaryRecord for MonetaryRecord {
    fn to_record(&self) -> MonetaryRecord {
        self.clone()
    }
}

impl<T: AsMonetaryRecord + ?Sized> AsMonetaryRecord for &T {
    fn to_record(&self) -> MonetaryRecord {
        (**self).to_record()
    }
}
