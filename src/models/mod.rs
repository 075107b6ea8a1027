//! Core data models for Kasa
//!
//! Entities of the ledger (invoices, checks, cash, projects, contracts,
//! installments, payroll) plus the value types shared by them. Every entity
//! that carries an amount implements [`AsMonetaryRecord`].

pub mod cash;
pub mod check;
pub mod contract;
pub mod currency;
pub mod ids;
pub mod invoice;
pub mod money;
pub mod payroll;
pub mod period;
pub mod project;
pub mod record;

pub use cash::{CashAccount, CashTransaction};
pub use check::{Check, CheckDirection, CheckStatus};
pub use contract::{Contract, ContractKind, ContractStatus, Installment};
pub use currency::{Currency, CurrencyTable};
pub use ids::{
    CashAccountId, CashTransactionId, CheckId, ContractId, InstallmentId, InvoiceId, PayrollId,
    ProjectId,
};
pub use invoice::{Invoice, InvoiceKind, InvoiceStatus};
pub use money::Money;
pub use payroll::PayrollEntry;
pub use period::PeriodKey;
pub use project::{Project, ProjectStatus};
pub use record::{AsMonetaryRecord, MonetaryRecord, RecordKind};
