//! Report tabs
//!
//! Each tab filters one entity list by the report window, builds its
//! statistic cards and sums the filtered amounts per currency.

use chrono::NaiveDate;
use serde::Serialize;
use std::fmt;

use super::currency::{summarize_by_currency, CurrencySummary, KindRouting};
use super::filter::{filter_by_date, filter_by_span, DateWindow};
use super::stats::{average_percent, ColorTag, ReportStat, StatValue, StatsBuilder};
use crate::display::{double_separator, format_amount, separator};
use crate::models::{
    CashTransaction, Check, CheckStatus, Contract, ContractStatus, CurrencyTable, Installment,
    Invoice, InvoiceKind, InvoiceStatus, PayrollEntry, Project, ProjectStatus, RecordKind,
};

/// The report views
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportTab {
    Invoices,
    Checks,
    Projects,
    Cash,
    Contracts,
    Installments,
    Payroll,
}

impl ReportTab {
    pub fn all() -> &'static [ReportTab] {
        &[
            Self::Invoices,
            Self::Checks,
            Self::Projects,
            Self::Cash,
            Self::Contracts,
            Self::Installments,
            Self::Payroll,
        ]
    }

    /// Parse an English or Turkish tab name
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "invoices" | "invoice" | "faturalar" => Some(Self::Invoices),
            "checks" | "check" | "cekler" | "çekler" => Some(Self::Checks),
            "projects" | "project" | "projeler" => Some(Self::Projects),
            "cash" | "kasa" => Some(Self::Cash),
            "contracts" | "contract" | "sozlesmeler" | "sözleşmeler" => Some(Self::Contracts),
            "installments" | "installment" | "taksitler" => Some(Self::Installments),
            "payroll" | "bordro" => Some(Self::Payroll),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Invoices => "invoices",
            Self::Checks => "checks",
            Self::Projects => "projects",
            Self::Cash => "cash",
            Self::Contracts => "contracts",
            Self::Installments => "installments",
            Self::Payroll => "payroll",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Invoices => "Fatura Raporu",
            Self::Checks => "Çek Raporu",
            Self::Projects => "Proje Raporu",
            Self::Cash => "Kasa Raporu",
            Self::Contracts => "Sözleşme Raporu",
            Self::Installments => "Taksit Raporu",
            Self::Payroll => "Bordro Raporu",
        }
    }
}

impl fmt::Display for ReportTab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Inputs shared by every tab builder
#[derive(Debug, Clone)]
pub struct ReportOptions {
    pub window: DateWindow,
    pub currencies: CurrencyTable,
    /// Currency of amount-summing cards
    pub default_currency: String,
    /// Reference day for overdue checks
    pub as_of: NaiveDate,
    pub grace_days: u32,
}

impl ReportOptions {
    pub fn new(window: DateWindow, currencies: CurrencyTable, as_of: NaiveDate) -> Self {
        let default_currency = currencies
            .codes()
            .next()
            .unwrap_or("TRY")
            .to_string();
        Self {
            window,
            currencies,
            default_currency,
            as_of,
            grace_days: 0,
        }
    }

    pub fn with_default_currency(mut self, code: impl Into<String>) -> Self {
        self.default_currency = code.into();
        self
    }

    pub fn with_grace_days(mut self, days: u32) -> Self {
        self.grace_days = days;
        self
    }
}

/// A built report tab: statistic cards plus per-currency totals
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TabReport {
    pub tab: ReportTab,
    pub window: DateWindow,
    /// Number of records inside the window
    pub record_count: usize,
    pub stats: Vec<ReportStat>,
    pub currencies: CurrencySummary,
}

impl TabReport {
    pub fn stat(&self, label: &str) -> Option<&ReportStat> {
        self.stats.iter().find(|s| s.label == label)
    }

    /// Format for terminal display
    pub fn format_terminal(&self, currencies: &CurrencyTable) -> String {
        let mut output = String::new();

        output.push_str(&format!("{}\n", self.tab.title()));
        output.push_str(&format!("Dönem: {}\n", self.window));
        output.push_str(&double_separator(50));
        output.push('\n');

        for stat in &self.stats {
            output.push_str(&format!("{:<30} {:>19}\n", stat.label, stat.value));
        }

        output.push('\n');
        if self.currencies.is_empty() {
            output.push_str("Para birimi hareketi yok\n");
            return output;
        }

        output.push_str(&format!(
            "{:<8} {:>18} {:>18}\n",
            "Birim", "Gelir", "Gider"
        ));
        output.push_str(&separator(50));
        output.push('\n');
        for line in self.currencies.iter() {
            output.push_str(&format!(
                "{:<8} {:>18} {:>18}\n",
                line.currency_code,
                format_amount(line.totals.income, &line.currency_code, currencies),
                format_amount(line.totals.expense, &line.currency_code, currencies),
            ));
        }

        output
    }
}

fn report(
    tab: ReportTab,
    options: &ReportOptions,
    record_count: usize,
    stats: Vec<ReportStat>,
    currencies: CurrencySummary,
) -> TabReport {
    TabReport {
        tab,
        window: options.window,
        record_count,
        stats,
        currencies,
    }
}

/// Invoices dated inside the window
///
/// Cancelled invoices are left out of the counts and the currency totals.
pub fn invoices_report(invoices: &[Invoice], options: &ReportOptions) -> TabReport {
    let mut filtered = filter_by_date(invoices, &options.window, |i| Some(i.date));
    filtered.retain(|i| i.status != InvoiceStatus::Cancelled);
    let (as_of, grace) = (options.as_of, options.grace_days);

    let stats = StatsBuilder::new("Toplam Fatura", ColorTag::Blue)
        .category("Satış", ColorTag::Green, |i: &Invoice| i.kind == InvoiceKind::Sales)
        .category("Alış", ColorTag::Orange, |i: &Invoice| i.kind == InvoiceKind::Purchase)
        .category("Ödenen", ColorTag::Green, |i: &Invoice| i.is_paid())
        .category("Ödenmemiş", ColorTag::Yellow, |i: &Invoice| !i.is_paid())
        .category("Vadesi Geçen", ColorTag::Red, move |i: &Invoice| {
            i.is_overdue(as_of, grace)
        })
        .build(filtered.iter().copied());

    let summary = summarize_by_currency(&filtered, &options.currencies, KindRouting::ByKind);
    report(ReportTab::Invoices, options, filtered.len(), stats, summary)
}

/// Checks due inside the window
pub fn checks_report(checks: &[Check], options: &ReportOptions) -> TabReport {
    let filtered = filter_by_date(checks, &options.window, |c| Some(c.due_date));

    let stats = StatsBuilder::new("Toplam Çek", ColorTag::Blue)
        .category("Portföyde", ColorTag::Purple, |c: &Check| c.status == CheckStatus::Portfolio)
        .category("Tahsilde", ColorTag::Yellow, |c: &Check| c.status == CheckStatus::Deposited)
        .category("Tahsil Edildi", ColorTag::Green, |c: &Check| c.status == CheckStatus::Cleared)
        .category("Ciro Edildi", ColorTag::Orange, |c: &Check| c.status == CheckStatus::Endorsed)
        .category("Karşılıksız", ColorTag::Red, |c: &Check| c.status == CheckStatus::Bounced)
        .build(filtered.iter().copied());

    let summary = summarize_by_currency(&filtered, &options.currencies, KindRouting::IncomeOnly);
    report(ReportTab::Checks, options, filtered.len(), stats, summary)
}

/// Projects running at any point of the window
///
/// A project without an end date has no span and is left out.
pub fn projects_report(projects: &[Project], options: &ReportOptions) -> TabReport {
    let filtered = filter_by_span(projects, &options.window, |p| {
        (Some(p.start_date), p.end_date)
    });

    let mut builder = StatsBuilder::new("Toplam Proje", ColorTag::Blue);
    for &status in ProjectStatus::all() {
        builder = builder.category(status.to_string(), project_color(status), move |p: &Project| {
            p.status == status
        });
    }
    let mut stats = builder.build(filtered.iter().copied());

    let progress = average_percent(filtered.iter().map(|p| p.progress as f64));
    stats.push(ReportStat::new(
        "Ortalama İlerleme",
        StatValue::Percent(progress),
        ColorTag::Purple,
    ));

    let summary = summarize_by_currency(&filtered, &options.currencies, KindRouting::IncomeOnly);
    report(ReportTab::Projects, options, filtered.len(), stats, summary)
}

fn project_color(status: ProjectStatus) -> ColorTag {
    match status {
        ProjectStatus::Planning => ColorTag::Gray,
        ProjectStatus::Active => ColorTag::Green,
        ProjectStatus::OnHold => ColorTag::Yellow,
        ProjectStatus::Completed => ColorTag::Blue,
        ProjectStatus::Cancelled => ColorTag::Red,
    }
}

/// Cash transactions dated inside the window
pub fn cash_report(transactions: &[CashTransaction], options: &ReportOptions) -> TabReport {
    let filtered = filter_by_date(transactions, &options.window, |t| Some(t.date));

    let stats = StatsBuilder::new("Toplam İşlem", ColorTag::Blue)
        .category("Gelir", ColorTag::Green, |t: &CashTransaction| t.kind == RecordKind::Income)
        .category("Gider", ColorTag::Red, |t: &CashTransaction| t.kind == RecordKind::Expense)
        .build(filtered.iter().copied());

    let summary = summarize_by_currency(&filtered, &options.currencies, KindRouting::ByKind);
    report(ReportTab::Cash, options, filtered.len(), stats, summary)
}

/// Contracts in force at any point of the window
pub fn contracts_report(contracts: &[Contract], options: &ReportOptions) -> TabReport {
    let filtered = filter_by_span(contracts, &options.window, |c| {
        (Some(c.start_date), Some(c.end_date))
    });

    let mut builder = StatsBuilder::new("Toplam Sözleşme", ColorTag::Blue);
    for &status in ContractStatus::all() {
        builder = builder.category(status.to_string(), contract_color(status), move |c: &Contract| {
            c.status == status
        });
    }
    let stats = builder.build(filtered.iter().copied());

    let summary = summarize_by_currency(&filtered, &options.currencies, KindRouting::ByKind);
    report(ReportTab::Contracts, options, filtered.len(), stats, summary)
}

fn contract_color(status: ContractStatus) -> ColorTag {
    match status {
        ContractStatus::Draft => ColorTag::Gray,
        ContractStatus::Active => ColorTag::Green,
        ContractStatus::Completed => ColorTag::Blue,
        ContractStatus::Terminated => ColorTag::Red,
    }
}

/// Installments due inside the window
///
/// The cards sum amounts in the default currency only; every currency still
/// shows up in the currency totals.
pub fn installments_report(installments: &[Installment], options: &ReportOptions) -> TabReport {
    let filtered = filter_by_date(installments, &options.window, |i| Some(i.due_date));
    let (as_of, grace) = (options.as_of, options.grace_days);

    let total_label = format!("Toplam Tutar ({})", options.default_currency);
    let stats = StatsBuilder::new(total_label, ColorTag::Blue)
        .sum_of(|i: &Installment| i.amount)
        .category("Ödenen", ColorTag::Green, |i: &Installment| i.is_paid())
        .category("Bekleyen", ColorTag::Yellow, move |i: &Installment| {
            !i.is_paid() && !i.is_overdue(as_of, grace)
        })
        .category("Vadesi Geçen", ColorTag::Red, move |i: &Installment| {
            i.is_overdue(as_of, grace)
        })
        .build(
            filtered
                .iter()
                .copied()
                .filter(|i| i.currency == options.default_currency),
        );

    let summary = summarize_by_currency(&filtered, &options.currencies, KindRouting::IncomeOnly);
    report(ReportTab::Installments, options, filtered.len(), stats, summary)
}

/// Payroll entries whose month overlaps the window
pub fn payroll_report(entries: &[PayrollEntry], options: &ReportOptions) -> TabReport {
    let filtered: Vec<&PayrollEntry> = entries
        .iter()
        .filter(|e| options.window.intersects_period(&e.period))
        .collect();

    let stats = StatsBuilder::new("Toplam Bordro", ColorTag::Blue)
        .category("Ödenen", ColorTag::Green, |e: &PayrollEntry| e.is_paid())
        .category("Ödenmemiş", ColorTag::Yellow, |e: &PayrollEntry| !e.is_paid())
        .build(filtered.iter().copied());

    let summary = summarize_by_currency(&filtered, &options.currencies, KindRouting::IncomeOnly);
    report(ReportTab::Payroll, options, filtered.len(), stats, summary)
}
