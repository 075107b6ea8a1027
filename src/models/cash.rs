//! Cash accounts (kasa) and their transactions

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::{CashAccountId, CashTransactionId, ProjectId};
use super::money::Money;
use super::record::{AsMonetaryRecord, MonetaryRecord, RecordKind};

/// A cash box or bank account in a single currency
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CashAccount {
    pub id: CashAccountId,
    pub name: String,
    pub currency: String,
    pub opening_balance: Money,
    #[serde(default)]
    pub archived: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl CashAccount {
    pub fn new(name: impl Into<String>, currency: impl Into<String>, opening_balance: Money) -> Self {
        let now = Utc::now();
        Self {
            id: CashAccountId::new(),
            name: name.into(),
            currency: currency.into(),
            opening_balance,
            archived: false,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn archive(&mut self) {
        self.archived = true;
        self.updated_at = Utc::now();
    }

    pub fn validate(&self) -> Result<(), CashValidationError> {
        if self.name.trim().is_empty() {
            return Err(CashValidationError::EmptyName);
        }
        if self.name.len() > 100 {
            return Err(CashValidationError::NameTooLong(self.name.len()));
        }
        Ok(())
    }
}

impl fmt::Display for CashAccount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.currency)
    }
}

/// Money in or out of a cash account
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CashTransaction {
    pub id: CashTransactionId,
    pub account_id: CashAccountId,
    pub kind: RecordKind,
    pub amount: Money,
    pub currency: String,
    pub date: NaiveDate,
    #[serde(default)]
    pub description: String,
    /// Free-text category (e.g., "Malzeme", "Kira")
    #[serde(default)]
    pub category: String,
    /// Counterparty name, printed on receipts
    #[serde(default)]
    pub party: String,
    #[serde(default)]
    pub project_id: Option<ProjectId>,
    pub created_at: DateTime<Utc>,
}

impl CashTransaction {
    pub fn new(
        account: &CashAccount,
        kind: RecordKind,
        amount: Money,
        date: NaiveDate,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: CashTransactionId::new(),
            account_id: account.id,
            kind,
            amount,
            currency: account.currency.clone(),
            date,
            description: description.into(),
            category: String::new(),
            party: String::new(),
            project_id: None,
            created_at: Utc::now(),
        }
    }

    /// Signed effect on the account balance
    pub fn signed_amount(&self) -> Money {
        match self.kind {
            RecordKind::Income => self.amount,
            RecordKind::Expense => -self.amount,
        }
    }

    pub fn validate(&self) -> Result<(), CashValidationError> {
        if !self.amount.is_positive() {
            return Err(CashValidationError::NonPositiveAmount);
        }
        Ok(())
    }
}

impl AsMonetaryRecord for CashTransaction {
    fn to_record(&self) -> MonetaryRecord {
        MonetaryRecord::new(self.amount, self.currency.clone())
            .with_kind(self.kind)
            .with_date(self.date)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CashValidationError {
    EmptyName,
    NameTooLong(usize),
    NonPositiveAmount,
}

impl fmt::Display for CashValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Cash account name cannot be empty"),
            Self::NameTooLong(len) => {
                write!(f, "Cash account name too long ({} chars, max 100)", len)
            }
            Self::NonPositiveAmount => write!(f, "Transaction amount must be positive"),
        }
    }
}

impl std::error::Error for CashValidationError {}
