//! Invoice model
//!
//! Sales invoices are income, purchase invoices are expense.

use chrono::{DateTime, Days, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::{InvoiceId, ProjectId};
use super::money::Money;
use super::record::{AsMonetaryRecord, MonetaryRecord, RecordKind};

/// Direction of an invoice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvoiceKind {
    /// Issued to a customer
    Sales,
    /// Received from a supplier or subcontractor
    Purchase,
}

impl InvoiceKind {
    pub fn record_kind(&self) -> RecordKind {
        match self {
            Self::Sales => RecordKind::Income,
            Self::Purchase => RecordKind::Expense,
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "sales" | "sale" | "satis" | "satış" => Some(Self::Sales),
            "purchase" | "alis" | "alış" => Some(Self::Purchase),
            _ => None,
        }
    }
}

impl fmt::Display for InvoiceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sales => write!(f, "Satış"),
            Self::Purchase => write!(f, "Alış"),
        }
    }
}

/// Invoice lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum InvoiceStatus {
    #[default]
    Draft,
    Sent,
    Paid,
    Overdue,
    Cancelled,
}

impl InvoiceStatus {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "draft" => Some(Self::Draft),
            "sent" => Some(Self::Sent),
            "paid" => Some(Self::Paid),
            "overdue" => Some(Self::Overdue),
            "cancelled" | "canceled" => Some(Self::Cancelled),
            _ => None,
        }
    }
}

impl fmt::Display for InvoiceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Draft => write!(f, "Taslak"),
            Self::Sent => write!(f, "Gönderildi"),
            Self::Paid => write!(f, "Ödendi"),
            Self::Overdue => write!(f, "Gecikmiş"),
            Self::Cancelled => write!(f, "İptal"),
        }
    }
}

/// An invoice
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Invoice {
    pub id: InvoiceId,

    /// Invoice number as printed (e.g., "FTR-2024-001")
    pub number: String,

    /// Customer or supplier name
    pub party: String,

    pub kind: InvoiceKind,

    /// Issue date
    pub date: NaiveDate,

    #[serde(default)]
    pub due_date: Option<NaiveDate>,

    pub currency: String,

    /// Amount before VAT
    pub subtotal: Money,

    /// VAT rate in percent
    #[serde(default)]
    pub vat_rate: u32,

    /// Amount including VAT
    pub total: Money,

    #[serde(default)]
    pub status: InvoiceStatus,

    #[serde(default)]
    pub project_id: Option<ProjectId>,

    #[serde(default)]
    pub notes: String,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Invoice {
    /// Create an invoice; the total is derived from subtotal and VAT rate
    pub fn new(
        number: impl Into<String>,
        party: impl Into<String>,
        kind: InvoiceKind,
        date: NaiveDate,
        subtotal: Money,
        vat_rate: u32,
        currency: impl Into<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: InvoiceId::new(),
            number: number.into(),
            party: party.into(),
            kind,
            date,
            due_date: None,
            currency: currency.into(),
            subtotal,
            vat_rate,
            total: subtotal + subtotal.percentage(vat_rate),
            status: InvoiceStatus::Draft,
            project_id: None,
            notes: String::new(),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn vat_amount(&self) -> Money {
        self.total - self.subtotal
    }

    pub fn is_paid(&self) -> bool {
        self.status == InvoiceStatus::Paid
    }

    /// Unpaid, not cancelled, and past its due date (plus grace days) on `as_of`
    pub fn is_overdue(&self, as_of: NaiveDate, grace_days: u32) -> bool {
        if matches!(self.status, InvoiceStatus::Paid | InvoiceStatus::Cancelled) {
            return false;
        }
        if self.status == InvoiceStatus::Overdue {
            return true;
        }
        match self.due_date {
            Some(due) => due
                .checked_add_days(Days::new(grace_days as u64))
                .is_some_and(|limit| as_of > limit),
            None => false,
        }
    }

    pub fn mark_paid(&mut self) {
        self.status = InvoiceStatus::Paid;
        self.updated_at = Utc::now();
    }

    pub fn validate(&self) -> Result<(), InvoiceValidationError> {
        if self.number.trim().is_empty() {
            return Err(InvoiceValidationError::EmptyNumber);
        }
        if self.party.trim().is_empty() {
            return Err(InvoiceValidationError::EmptyParty);
        }
        if self.subtotal.is_negative() || self.total.is_negative() {
            return Err(InvoiceValidationError::NegativeAmount);
        }
        if self.vat_rate > 100 {
            return Err(InvoiceValidationError::InvalidVatRate(self.vat_rate));
        }
        if let Some(due) = self.due_date {
            if due < self.date {
                return Err(InvoiceValidationError::DueBeforeIssue);
            }
        }
        Ok(())
    }
}

impl AsMonetaryRecord for Invoice {
    fn to_record(&self) -> MonetaryRecord {
        MonetaryRecord::new(self.total, self.currency.clone())
            .with_kind(self.kind.record_kind())
            .with_date(self.date)
    }
}

impl fmt::Display for Invoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.number, self.party)
    }
}

/// Validation errors for invoices
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvoiceValidationError {
    EmptyNumber,
    EmptyParty,
    NegativeAmount,
    InvalidVatRate(u32),
    DueBeforeIssue,
}

impl fmt::Display for InvoiceValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyNumber => write!(f, "Invoice number cannot be empty"),
            Self::EmptyParty => write!(f, "Invoice party cannot be empty"),
            Self::NegativeAmount => write!(f, "Invoice amounts cannot be negative"),
            Self::InvalidVatRate(rate) => write!(f, "Invalid VAT rate: {}%", rate),
            Self::DueBeforeIssue => write!(f, "Due date cannot be before the invoice date"),
        }
    }
}

impl std::error::Error for InvoiceValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn sample() -> Invoice {
        Invoice::new(
            "FTR-2024-001",
            "Yıldız Yapı",
            InvoiceKind::Sales,
            date(2024, 7, 10),
            Money::from_major(5000),
            18,
            "TRY",
        )
    }

    #[test]
    fn test_total_includes_vat() {
        let invoice = sample();
        assert_eq!(invoice.total, Money::from_major(5900));
        assert_eq!(invoice.vat_amount(), Money::from_major(900));
    }

    #[test]
    fn test_to_record() {
        let record = sample().to_record();
        assert_eq!(record.amount, Money::from_major(5900));
        assert_eq!(record.kind, Some(RecordKind::Income));
        assert_eq!(record.date, Some(date(2024, 7, 10)));
    }

    #[test]
    fn test_overdue() {
        let mut invoice = sample();
        invoice.status = InvoiceStatus::Sent;
        invoice.due_date = Some(date(2024, 8, 10));

        assert!(!invoice.is_overdue(date(2024, 8, 10), 0));
        assert!(invoice.is_overdue(date(2024, 8, 11), 0));
        assert!(!invoice.is_overdue(date(2024, 8, 11), 5));

        invoice.mark_paid();
        assert!(!invoice.is_overdue(date(2024, 9, 1), 0));
    }

    #[test]
    fn test_overdue_near_date_limit() {
        let mut invoice = sample();
        invoice.status = InvoiceStatus::Sent;
        invoice.due_date = Some(NaiveDate::MAX);

        assert!(!invoice.is_overdue(NaiveDate::MAX, 0));
        assert!(!invoice.is_overdue(NaiveDate::MAX, u32::MAX));
    }

    #[test]
    fn test_validation() {
        let mut invoice = sample();
        assert!(invoice.validate().is_ok());

        invoice.due_date = Some(date(2024, 7, 1));
        assert_eq!(invoice.validate(), Err(InvoiceValidationError::DueBeforeIssue));

        invoice.due_date = None;
        invoice.vat_rate = 120;
        assert_eq!(invoice.validate(), Err(InvoiceValidationError::InvalidVatRate(120)));

        invoice.vat_rate = 18;
        invoice.party = "  ".into();
        assert_eq!(invoice.validate(), Err(InvoiceValidationError::EmptyParty));
    }
}
