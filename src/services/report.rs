//! Report service
//!
//! Reads entity lists from any [`LedgerSource`] and builds report tabs.

use tracing::debug;

use crate::error::KasaResult;
use crate::reports::{
    cash_report, checks_report, contracts_report, installments_report, invoices_report,
    payroll_report, projects_report, ReportOptions, ReportTab, TabReport,
};
use crate::storage::LedgerSource;

pub struct ReportService<'a, S: LedgerSource + ?Sized> {
    source: &'a S,
}

impl<'a, S: LedgerSource + ?Sized> ReportService<'a, S> {
    pub fn new(source: &'a S) -> Self {
        Self { source }
    }

    pub fn build(&self, tab: ReportTab, options: &ReportOptions) -> KasaResult<TabReport> {
        let report = match tab {
            ReportTab::Invoices => invoices_report(&self.source.invoices()?, options),
            ReportTab::Checks => checks_report(&self.source.checks()?, options),
            ReportTab::Projects => projects_report(&self.source.projects()?, options),
            ReportTab::Cash => cash_report(&self.source.cash_transactions()?, options),
            ReportTab::Contracts => contracts_report(&self.source.contracts()?, options),
            ReportTab::Installments => installments_report(&self.source.installments()?, options),
            ReportTab::Payroll => payroll_report(&self.source.payroll()?, options),
        };

        debug!(
            tab = %tab,
            window = %options.window,
            records = report.record_count,
            currencies = report.currencies.len(),
            "built report"
        );
        Ok(report)
    }

    /// Every tab in display order
    pub fn build_all(&self, options: &ReportOptions) -> KasaResult<Vec<TabReport>> {
        ReportTab::all()
            .iter()
            .map(|tab| self.build(*tab, options))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CurrencyTable, Invoice, InvoiceKind, Money};
    use crate::reports::{DateWindow, StatValue};
    use crate::storage::MemoryLedger;
    use chrono::NaiveDate;

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 7, d).unwrap()
    }

    #[test]
    fn test_invoices_from_memory_ledger() {
        let ledger = MemoryLedger {
            invoices: vec![
                Invoice::new("F-1", "Ayşe", InvoiceKind::Sales, date(10), Money::from_major(5000), 18, "TRY"),
                Invoice::new("F-2", "Demir AŞ", InvoiceKind::Purchase, date(15), Money::from_major(15000), 18, "TRY"),
            ],
            ..Default::default()
        };
        let options = ReportOptions::new(
            DateWindow::between(date(1), date(31)),
            CurrencyTable::default(),
            date(31),
        );

        let report = ReportService::new(&ledger).build(ReportTab::Invoices, &options).unwrap();
        let totals = report.currencies.get("TRY").unwrap();
        assert_eq!(totals.income, Money::from_major(5900));
        assert_eq!(totals.expense, Money::from_major(17700));
    }

    #[test]
    fn test_build_all_on_empty_ledger() {
        let ledger = MemoryLedger::default();
        let options = ReportOptions::new(DateWindow::unbounded(), CurrencyTable::default(), date(1));

        let reports = ReportService::new(&ledger).build_all(&options).unwrap();
        assert_eq!(reports.len(), ReportTab::all().len());
        for report in &reports {
            assert!(report.currencies.is_empty());
            assert!(report.stats[0].value.is_zero());
        }
        assert!(matches!(reports[0].stats[0].value, StatValue::Count(0)));
    }
}
