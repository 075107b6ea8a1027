//! Read access to ledger data for reporting

use crate::error::KasaResult;
use crate::models::{
    CashTransaction, Check, Contract, Installment, Invoice, PayrollEntry, Project,
};

/// Source of the entity lists that report tabs are built from
pub trait LedgerSource {
    fn invoices(&self) -> KasaResult<Vec<Invoice>>;
    fn checks(&self) -> KasaResult<Vec<Check>>;
    fn cash_transactions(&self) -> KasaResult<Vec<CashTransaction>>;
    fn projects(&self) -> KasaResult<Vec<Project>>;
    fn contracts(&self) -> KasaResult<Vec<Contract>>;
    fn installments(&self) -> KasaResult<Vec<Installment>>;
    fn payroll(&self) -> KasaResult<Vec<PayrollEntry>>;
}

/// In-memory ledger, for library callers that hold their data elsewhere
#[derive(Debug, Clone, Default)]
pub struct MemoryLedger {
    pub invoices: Vec<Invoice>,
    pub checks: Vec<Check>,
    pub cash_transactions: Vec<CashTransaction>,
    pub projects: Vec<Project>,
    pub contracts: Vec<Contract>,
    pub installments: Vec<Installment>,
    pub payroll: Vec<PayrollEntry>,
}

impl LedgerSource for MemoryLedger {
    fn invoices(&self) -> KasaResult<Vec<Invoice>> {
        Ok(self.invoices.clone())
    }

    fn checks(&self) -> KasaResult<Vec<Check>> {
        Ok(self.checks.clone())
    }

    fn cash_transactions(&self) -> KasaResult<Vec<CashTransaction>> {
        Ok(self.cash_transactions.clone())
    }

    fn projects(&self) -> KasaResult<Vec<Project>> {
        Ok(self.projects.clone())
    }

    fn contracts(&self) -> KasaResult<Vec<Contract>> {
        Ok(self.contracts.clone())
    }

    fn installments(&self) -> KasaResult<Vec<Installment>> {
        Ok(self.installments.clone())
    }

    fn payroll(&self) -> KasaResult<Vec<PayrollEntry>> {
        Ok(self.payroll.clone())
    }
}
