//! Contracts and their installments

use chrono::{DateTime, Days, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::{ContractId, InstallmentId, ProjectId};
use super::money::Money;
use super::record::{AsMonetaryRecord, MonetaryRecord, RecordKind};

/// Which side of the contract the company is on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContractKind {
    /// Sale or construction contract with a customer
    Customer,
    /// Work bought from a subcontractor
    Subcontractor,
}

impl ContractKind {
    pub fn record_kind(&self) -> RecordKind {
        match self {
            Self::Customer => RecordKind::Income,
            Self::Subcontractor => RecordKind::Expense,
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "customer" | "musteri" | "müşteri" => Some(Self::Customer),
            "subcontractor" | "taseron" | "taşeron" => Some(Self::Subcontractor),
            _ => None,
        }
    }
}

impl fmt::Display for ContractKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Customer => write!(f, "Müşteri"),
            Self::Subcontractor => write!(f, "Taşeron"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ContractStatus {
    #[default]
    Draft,
    Active,
    Completed,
    Terminated,
}

impl ContractStatus {
    pub fn all() -> &'static [ContractStatus] {
        &[Self::Draft, Self::Active, Self::Completed, Self::Terminated]
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "draft" | "taslak" => Some(Self::Draft),
            "active" | "aktif" => Some(Self::Active),
            "completed" | "tamamlandı" => Some(Self::Completed),
            "terminated" | "feshedildi" => Some(Self::Terminated),
            _ => None,
        }
    }
}

impl fmt::Display for ContractStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Draft => write!(f, "Taslak"),
            Self::Active => write!(f, "Aktif"),
            Self::Completed => write!(f, "Tamamlandı"),
            Self::Terminated => write!(f, "Feshedildi"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contract {
    pub id: ContractId,
    pub title: String,
    pub party: String,
    pub kind: ContractKind,
    #[serde(default)]
    pub project_id: Option<ProjectId>,
    pub amount: Money,
    pub currency: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[serde(default)]
    pub status: ContractStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Contract {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        title: impl Into<String>,
        party: impl Into<String>,
        kind: ContractKind,
        amount: Money,
        currency: impl Into<String>,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: ContractId::new(),
            title: title.into(),
            party: party.into(),
            kind,
            project_id: None,
            amount,
            currency: currency.into(),
            start_date,
            end_date,
            status: ContractStatus::Draft,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn validate(&self) -> Result<(), ContractValidationError> {
        if self.title.trim().is_empty() {
            return Err(ContractValidationError::EmptyTitle);
        }
        if self.party.trim().is_empty() {
            return Err(ContractValidationError::EmptyParty);
        }
        if self.amount.is_negative() {
            return Err(ContractValidationError::NegativeAmount);
        }
        if self.end_date < self.start_date {
            return Err(ContractValidationError::EndBeforeStart);
        }
        Ok(())
    }
}

impl AsMonetaryRecord for Contract {
    fn to_record(&self) -> MonetaryRecord {
        MonetaryRecord::new(self.amount, self.currency.clone())
            .with_kind(self.kind.record_kind())
            .with_date(self.start_date)
    }
}

impl fmt::Display for Contract {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.title, self.party)
    }
}

/// One scheduled payment of a contract
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Installment {
    pub id: InstallmentId,
    pub contract_id: ContractId,
    /// 1-based position in the schedule
    pub sequence: u32,
    pub due_date: NaiveDate,
    pub amount: Money,
    pub currency: String,
    #[serde(default)]
    pub paid_date: Option<NaiveDate>,
}

impl Installment {
    pub fn new(contract: &Contract, sequence: u32, due_date: NaiveDate, amount: Money) -> Self {
        Self {
            id: InstallmentId::new(),
            contract_id: contract.id,
            sequence,
            due_date,
            amount,
            currency: contract.currency.clone(),
            paid_date: None,
        }
    }

    pub fn is_paid(&self) -> bool {
        self.paid_date.is_some()
    }

    /// Unpaid and past due (plus grace days) on `as_of`
    pub fn is_overdue(&self, as_of: NaiveDate, grace_days: u32) -> bool {
        !self.is_paid()
            && self
                .due_date
                .checked_add_days(Days::new(grace_days as u64))
                .is_some_and(|limit| as_of > limit)
    }

    pub fn mark_paid(&mut self, date: NaiveDate) {
        self.paid_date = Some(date);
    }
}

/// Installments are a single-sided dataset: no kind
impl AsMonetaryRecord for Installment {
    fn to_record(&self) -> MonetaryRecord {
        MonetaryRecord::new(self.amount, self.currency.clone()).with_date(self.due_date)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContractValidationError {
    EmptyTitle,
    EmptyParty,
    NegativeAmount,
    EndBeforeStart,
}

impl fmt::Display for ContractValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyTitle => write!(f, "Contract title cannot be empty"),
            Self::EmptyParty => write!(f, "Contract party cannot be empty"),
            Self::NegativeAmount => write!(f, "Contract amount cannot be negative"),
            Self::EndBeforeStart => write!(f, "Contract end date cannot be before its start date"),
        }
    }
}

impl std::error::Error for ContractValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn sample() -> Contract {
        Contract::new(
            "B Blok Daire 12 Satış",
            "Ayşe Kaya",
            ContractKind::Customer,
            Money::from_major(3_500_000),
            "TRY",
            date(2024, 3, 1),
            date(2025, 3, 1),
        )
    }

    #[test]
    fn test_contract_record() {
        let record = sample().to_record();
        assert_eq!(record.kind, Some(RecordKind::Income));
        assert_eq!(record.date, Some(date(2024, 3, 1)));
    }

    #[test]
    fn test_installment_overdue() {
        let contract = sample();
        let mut installment = Installment::new(&contract, 1, date(2024, 4, 1), Money::from_major(100_000));

        assert_eq!(installment.currency, "TRY");
        assert!(!installment.is_overdue(date(2024, 4, 1), 0));
        assert!(installment.is_overdue(date(2024, 4, 2), 0));

        installment.mark_paid(date(2024, 4, 5));
        assert!(installment.is_paid());
        assert!(!installment.is_overdue(date(2024, 5, 1), 0));
        assert_eq!(installment.to_record().kind, None);
    }

    #[test]
    fn test_installment_overdue_near_date_limit() {
        let contract = sample();
        let installment = Installment::new(&contract, 1, NaiveDate::MAX, Money::from_major(100_000));

        assert!(!installment.is_overdue(NaiveDate::MAX, 30));
        assert!(!installment.is_overdue(NaiveDate::MAX, u32::MAX));
    }

    #[test]
    fn test_validation() {
        let mut contract = sample();
        assert!(contract.validate().is_ok());

        contract.end_date = date(2024, 1, 1);
        assert_eq!(contract.validate(), Err(ContractValidationError::EndBeforeStart));
    }
}
