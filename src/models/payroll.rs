//! Monthly payroll entries

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::PayrollId;
use super::money::Money;
use super::period::PeriodKey;
use super::record::{AsMonetaryRecord, MonetaryRecord, RecordKind};

/// Salary owed to one employee for one month
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayrollEntry {
    pub id: PayrollId,
    pub employee: String,
    pub period: PeriodKey,
    pub gross: Money,
    pub net: Money,
    pub currency: String,
    #[serde(default)]
    pub paid_date: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
}

impl PayrollEntry {
    pub fn new(
        employee: impl Into<String>,
        period: PeriodKey,
        gross: Money,
        net: Money,
        currency: impl Into<String>,
    ) -> Self {
        Self {
            id: PayrollId::new(),
            employee: employee.into(),
            period,
            gross,
            net,
            currency: currency.into(),
            paid_date: None,
            created_at: Utc::now(),
        }
    }

    pub fn is_paid(&self) -> bool {
        self.paid_date.is_some()
    }

    pub fn mark_paid(&mut self, date: NaiveDate) {
        self.paid_date = Some(date);
    }

    pub fn validate(&self) -> Result<(), PayrollValidationError> {
        if self.employee.trim().is_empty() {
            return Err(PayrollValidationError::EmptyEmployee);
        }
        if self.gross.is_negative() || self.net.is_negative() {
            return Err(PayrollValidationError::NegativeAmount);
        }
        if self.net > self.gross {
            return Err(PayrollValidationError::NetAboveGross);
        }
        Ok(())
    }
}

/// Net pay dated by the last day of the period
impl AsMonetaryRecord for PayrollEntry {
    fn to_record(&self) -> MonetaryRecord {
        MonetaryRecord::new(self.net, self.currency.clone())
            .with_kind(RecordKind::Expense)
            .with_date(self.period.end_date())
    }
}

impl fmt::Display for PayrollEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.employee, self.period)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PayrollValidationError {
    EmptyEmployee,
    NegativeAmount,
    NetAboveGross,
}

impl fmt::Display for PayrollValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyEmployee => write!(f, "Employee name cannot be empty"),
            Self::NegativeAmount => write!(f, "Payroll amounts cannot be negative"),
            Self::NetAboveGross => write!(f, "Net pay cannot exceed gross pay"),
        }
    }
}

impl std::error::Error for PayrollValidationError {}
