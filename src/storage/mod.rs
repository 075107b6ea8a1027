//! Storage layer for Kasa
//!
//! One JSON file per entity family under `data/`, written atomically, plus
//! the audit log. [`Storage`] owns every repository and implements
//! [`LedgerSource`] for the report tabs.

pub mod file_io;
pub mod init;
pub mod ledger;
pub mod repository;

pub use file_io::{read_json, write_json_atomic};
pub use init::{initialize_storage, seed_demo_data};
pub use ledger::{LedgerSource, MemoryLedger};
pub use repository::{Entity, Repository};

use serde::Serialize;
use tracing::info;

use crate::audit::{AuditEntry, AuditLogger};
use crate::config::paths::KasaPaths;
use crate::error::{KasaError, KasaResult};
use crate::models::{
    CashAccount, CashTransaction, Check, Contract, Installment, Invoice, PayrollEntry, Project,
};

/// Main storage coordinator that provides access to all repositories
pub struct Storage {
    paths: KasaPaths,
    pub invoices: Repository<Invoice>,
    pub checks: Repository<Check>,
    pub cash_accounts: Repository<CashAccount>,
    pub cash_transactions: Repository<CashTransaction>,
    pub projects: Repository<Project>,
    pub contracts: Repository<Contract>,
    pub installments: Repository<Installment>,
    pub payroll: Repository<PayrollEntry>,
    audit: AuditLogger,
}

impl Storage {
    pub fn new(paths: KasaPaths) -> Result<Self, KasaError> {
        paths.ensure_directories()?;

        Ok(Self {
            invoices: Repository::new(paths.invoices_file()),
            checks: Repository::new(paths.checks_file()),
            cash_accounts: Repository::new(paths.cash_accounts_file()),
            cash_transactions: Repository::new(paths.cash_transactions_file()),
            projects: Repository::new(paths.projects_file()),
            contracts: Repository::new(paths.contracts_file()),
            installments: Repository::new(paths.installments_file()),
            payroll: Repository::new(paths.payroll_file()),
            audit: AuditLogger::new(paths.audit_log()),
            paths,
        })
    }

    /// Open the store and load every file
    pub fn open(paths: KasaPaths) -> Result<Self, KasaError> {
        let storage = Self::new(paths)?;
        storage.load_all()?;
        Ok(storage)
    }

    pub fn paths(&self) -> &KasaPaths {
        &self.paths
    }

    pub fn audit(&self) -> &AuditLogger {
        &self.audit
    }

    pub fn load_all(&self) -> Result<(), KasaError> {
        self.invoices.load()?;
        self.checks.load()?;
        self.cash_accounts.load()?;
        self.cash_transactions.load()?;
        self.projects.load()?;
        self.contracts.load()?;
        self.installments.load()?;
        self.payroll.load()?;
        Ok(())
    }

    pub fn save_all(&self) -> Result<(), KasaError> {
        self.invoices.save()?;
        self.checks.save()?;
        self.cash_accounts.save()?;
        self.cash_transactions.save()?;
        self.projects.save()?;
        self.contracts.save()?;
        self.installments.save()?;
        self.payroll.save()?;
        Ok(())
    }

    pub fn is_initialized(&self) -> bool {
        self.paths.is_initialized()
    }

    pub fn log_create<E: Entity + Serialize>(&self, entity: &E) -> KasaResult<()> {
        info!(entity = E::KIND, id = %entity.id(), "created");
        self.audit.log(&AuditEntry::create(
            E::AUDIT_TYPE,
            entity.id().to_string(),
            Some(entity.label()),
            entity,
        ))
    }

    pub fn log_update<E: Entity + Serialize>(&self, before: &E, after: &E) -> KasaResult<()> {
        info!(entity = E::KIND, id = %after.id(), "updated");
        self.audit.log(&AuditEntry::update(
            E::AUDIT_TYPE,
            after.id().to_string(),
            Some(after.label()),
            before,
            after,
        ))
    }

    pub fn log_delete<E: Entity + Serialize>(&self, entity: &E) -> KasaResult<()> {
        info!(entity = E::KIND, id = %entity.id(), "deleted");
        self.audit.log(&AuditEntry::delete(
            E::AUDIT_TYPE,
            entity.id().to_string(),
            Some(entity.label()),
            entity,
        ))
    }
}

impl LedgerSource for Storage {
    fn invoices(&self) -> KasaResult<Vec<Invoice>> {
        self.invoices.get_all()
    }

    fn checks(&self) -> KasaResult<Vec<Check>> {
        self.checks.get_all()
    }

    fn cash_transactions(&self) -> KasaResult<Vec<CashTransaction>> {
        self.cash_transactions.get_all()
    }

    fn projects(&self) -> KasaResult<Vec<Project>> {
        self.projects.get_all()
    }

    fn contracts(&self) -> KasaResult<Vec<Contract>> {
        self.contracts.get_all()
    }

    fn installments(&self) -> KasaResult<Vec<Installment>> {
        self.installments.get_all()
    }

    fn payroll(&self) -> KasaResult<Vec<PayrollEntry>> {
        self.payroll.get_all()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::Operation;
    use crate::models::{InvoiceKind, Money};
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn storage() -> (Storage, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let paths = KasaPaths::with_base_dir(temp_dir.path().to_path_buf());
        (Storage::new(paths).unwrap(), temp_dir)
    }

    #[test]
    fn test_storage_creation() {
        let (storage, temp_dir) = storage();
        assert!(temp_dir.path().join("data").exists());
        assert!(!storage.is_initialized());
    }

    #[test]
    fn test_save_all_and_reopen() {
        let (storage, _temp) = storage();
        let date = NaiveDate::from_ymd_opt(2024, 7, 10).unwrap();
        storage
            .invoices
            .upsert(Invoice::new("F-1", "Ayşe", InvoiceKind::Sales, date, Money::from_major(10), 0, "TRY"))
            .unwrap();
        storage.save_all().unwrap();

        let reopened = Storage::open(storage.paths().clone()).unwrap();
        assert_eq!(reopened.invoices().unwrap().len(), 1);
        assert!(reopened.checks().unwrap().is_empty());
    }

    #[test]
    fn test_log_helpers_write_audit_lines() {
        let (storage, _temp) = storage();
        let date = NaiveDate::from_ymd_opt(2024, 7, 10).unwrap();
        let before = Invoice::new("F-1", "Ayşe", InvoiceKind::Sales, date, Money::from_major(10), 0, "TRY");
        let mut after = before.clone();
        after.mark_paid();

        storage.log_create(&before).unwrap();
        storage.log_update(&before, &after).unwrap();
        storage.log_delete(&after).unwrap();

        let entries = storage.audit().read_all().unwrap();
        let ops: Vec<Operation> = entries.iter().map(|e| e.operation).collect();
        assert_eq!(ops, vec![Operation::Create, Operation::Update, Operation::Delete]);
        assert_eq!(entries[0].entity_name.as_deref(), Some("F-1"));
    }
}
