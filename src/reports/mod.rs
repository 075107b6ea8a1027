//! Reports module for Kasa
//!
//! The reporting core is pure: it takes entity slices and returns values.
//!
//! - `filter`: inclusive date windows over dates, spans and period keys
//! - `currency`: per-currency income/expense totals
//! - `stats`: ordered statistic cards
//! - `tabs`: one builder per report tab composing the three above

pub mod currency;
pub mod filter;
pub mod stats;
pub mod tabs;

pub use currency::{summarize_by_currency, CurrencyLine, CurrencySummary, CurrencyTotals, KindRouting};
pub use filter::{filter_by_date, filter_by_span, DateWindow};
pub use stats::{
    average_percent, share_percent, ColorTag, ReportStat, Rollup, StatCategory, StatValue,
    StatsBuilder,
};
pub use tabs::{
    cash_report, checks_report, contracts_report, installments_report, invoices_report,
    payroll_report, projects_report, ReportOptions, ReportTab, TabReport,
};
