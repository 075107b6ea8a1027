//! JSON export
//!
//! A full snapshot of the ledger with a schema version, and single report
//! tabs as JSON documents.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::error::{KasaError, KasaResult};
use crate::models::{
    CashAccount, CashTransaction, Check, Contract, Installment, Invoice, PayrollEntry, Project,
};
use crate::reports::TabReport;
use crate::storage::{LedgerSource, Storage};

pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Every entity in the store
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LedgerSnapshot {
    pub schema_version: String,
    pub exported_at: DateTime<Utc>,
    pub app_version: String,
    pub invoices: Vec<Invoice>,
    pub checks: Vec<Check>,
    pub cash_accounts: Vec<CashAccount>,
    pub cash_transactions: Vec<CashTransaction>,
    pub projects: Vec<Project>,
    pub contracts: Vec<Contract>,
    pub installments: Vec<Installment>,
    pub payroll: Vec<PayrollEntry>,
}

impl LedgerSnapshot {
    pub fn from_storage(storage: &Storage) -> KasaResult<Self> {
        Ok(Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            invoices: storage.invoices()?,
            checks: storage.checks()?,
            cash_accounts: storage.cash_accounts.get_all()?,
            cash_transactions: storage.cash_transactions()?,
            projects: storage.projects()?,
            contracts: storage.contracts()?,
            installments: storage.installments()?,
            payroll: storage.payroll()?,
        })
    }

    pub fn record_count(&self) -> usize {
        self.invoices.len()
            + self.checks.len()
            + self.cash_accounts.len()
            + self.cash_transactions.len()
            + self.projects.len()
            + self.contracts.len()
            + self.installments.len()
            + self.payroll.len()
    }
}

/// Write a ledger snapshot as pretty JSON
pub fn export_ledger_json<W: Write>(storage: &Storage, writer: &mut W) -> KasaResult<()> {
    let snapshot = LedgerSnapshot::from_storage(storage)?;
    serde_json::to_writer_pretty(&mut *writer, &snapshot)
        .map_err(|e| KasaError::Export(format!("Failed to write JSON: {}", e)))?;
    writeln!(writer).map_err(|e| KasaError::Export(e.to_string()))?;
    Ok(())
}

/// Write one report tab as pretty JSON
pub fn export_report_json<W: Write>(report: &TabReport, writer: &mut W) -> KasaResult<()> {
    serde_json::to_writer_pretty(&mut *writer, report)
        .map_err(|e| KasaError::Export(format!("Failed to write JSON: {}", e)))?;
    writeln!(writer).map_err(|e| KasaError::Export(e.to_string()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::KasaPaths;
    use crate::models::{CurrencyTable, InvoiceKind, Money};
    use crate::reports::{invoices_report, DateWindow, ReportOptions};
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 7, 10).unwrap()
    }

    #[test]
    fn test_snapshot_round_trips() {
        let temp_dir = TempDir::new().unwrap();
        let storage = Storage::new(KasaPaths::with_base_dir(temp_dir.path().to_path_buf())).unwrap();
        storage
            .invoices
            .upsert(Invoice::new("F-1", "Ayşe", InvoiceKind::Sales, date(), Money::from_major(5000), 18, "TRY"))
            .unwrap();

        let mut buffer = Vec::new();
        export_ledger_json(&storage, &mut buffer).unwrap();

        let snapshot: LedgerSnapshot = serde_json::from_slice(&buffer).unwrap();
        assert_eq!(snapshot.schema_version, EXPORT_SCHEMA_VERSION);
        assert_eq!(snapshot.record_count(), 1);
        assert_eq!(snapshot.invoices[0].total, Money::from_major(5900));
    }

    #[test]
    fn test_report_json_shape() {
        let invoices = vec![Invoice::new("F-1", "Ayşe", InvoiceKind::Sales, date(), Money::from_major(5000), 18, "TRY")];
        let options = ReportOptions::new(DateWindow::unbounded(), CurrencyTable::default(), date());
        let report = invoices_report(&invoices, &options);

        let mut buffer = Vec::new();
        export_report_json(&report, &mut buffer).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&buffer).unwrap();

        assert_eq!(value["tab"], "invoices");
        assert_eq!(value["stats"][0]["label"], "Toplam Fatura");
        assert_eq!(value["stats"][0]["value"]["type"], "count");
        assert_eq!(value["currencies"][0]["currency_code"], "TRY");
    }
}
