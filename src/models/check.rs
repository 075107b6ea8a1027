//! Check (çek) model
//!
//! Checks are tracked in a portfolio until deposited, cleared, endorsed to a
//! third party, or bounced.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::CheckId;
use super::money::Money;
use super::record::{AsMonetaryRecord, MonetaryRecord, RecordKind};

/// Whether the company received or wrote the check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckDirection {
    Received,
    Issued,
}

impl CheckDirection {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "received" | "alinan" | "alınan" => Some(Self::Received),
            "issued" | "verilen" => Some(Self::Issued),
            _ => None,
        }
    }
}

impl fmt::Display for CheckDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Received => write!(f, "Alınan"),
            Self::Issued => write!(f, "Verilen"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum CheckStatus {
    /// Held, not yet presented
    #[default]
    Portfolio,
    /// Presented to the bank for collection
    Deposited,
    /// Paid
    Cleared,
    /// Passed on to a third party
    Endorsed,
    /// Returned unpaid
    Bounced,
}

impl CheckStatus {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "portfolio" => Some(Self::Portfolio),
            "deposited" => Some(Self::Deposited),
            "cleared" => Some(Self::Cleared),
            "endorsed" => Some(Self::Endorsed),
            "bounced" => Some(Self::Bounced),
            _ => None,
        }
    }

    /// Whether the check still represents an open amount
    pub fn is_open(&self) -> bool {
        matches!(self, Self::Portfolio | Self::Deposited)
    }
}

impl fmt::Display for CheckStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Portfolio => write!(f, "Portföyde"),
            Self::Deposited => write!(f, "Tahsilde"),
            Self::Cleared => write!(f, "Tahsil Edildi"),
            Self::Endorsed => write!(f, "Ciro Edildi"),
            Self::Bounced => write!(f, "Karşılıksız"),
        }
    }
}

/// A check
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Check {
    pub id: CheckId,
    pub number: String,
    pub bank: String,
    /// Person or company who wrote the check
    pub drawer: String,
    pub direction: CheckDirection,
    pub amount: Money,
    pub currency: String,
    pub issue_date: NaiveDate,
    pub due_date: NaiveDate,
    #[serde(default)]
    pub status: CheckStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Check {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        number: impl Into<String>,
        bank: impl Into<String>,
        drawer: impl Into<String>,
        direction: CheckDirection,
        amount: Money,
        currency: impl Into<String>,
        issue_date: NaiveDate,
        due_date: NaiveDate,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: CheckId::new(),
            number: number.into(),
            bank: bank.into(),
            drawer: drawer.into(),
            direction,
            amount,
            currency: currency.into(),
            issue_date,
            due_date,
            status: CheckStatus::Portfolio,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn set_status(&mut self, status: CheckStatus) {
        self.status = status;
        self.updated_at = Utc::now();
    }

    pub fn validate(&self) -> Result<(), CheckValidationError> {
        if self.number.trim().is_empty() {
            return Err(CheckValidationError::EmptyNumber);
        }
        if self.bank.trim().is_empty() {
            return Err(CheckValidationError::EmptyBank);
        }
        if !self.amount.is_positive() {
            return Err(CheckValidationError::NonPositiveAmount);
        }
        if self.due_date < self.issue_date {
            return Err(CheckValidationError::DueBeforeIssue);
        }
        Ok(())
    }
}

/// Dated by due date; the checks tab aggregates with `KindRouting::IncomeOnly`
impl AsMonetaryRecord for Check {
    fn to_record(&self) -> MonetaryRecord {
        let record = MonetaryRecord::new(self.amount, self.currency.clone()).with_date(self.due_date);
        match self.direction {
            CheckDirection::Received => record.with_kind(RecordKind::Income),
            CheckDirection::Issued => record.with_kind(RecordKind::Expense),
        }
    }
}

impl fmt::Display for Check {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} / {} ({})", self.number, self.bank, self.drawer)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckValidationError {
    EmptyNumber,
    EmptyBank,
    NonPositiveAmount,
    DueBeforeIssue,
}

impl fmt::Display for CheckValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyNumber => write!(f, "Check number cannot be empty"),
            Self::EmptyBank => write!(f, "Bank name cannot be empty"),
            Self::NonPositiveAmount => write!(f, "Check amount must be positive"),
            Self::DueBeforeIssue => write!(f, "Due date cannot be before the issue date"),
        }
    }
}

impl std::error::Error for CheckValidationError {}
