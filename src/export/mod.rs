//! Export module for Kasa
//!
//! - CSV: report tabs, for spreadsheets
//! - JSON: report tabs and a full ledger snapshot

pub mod csv;
pub mod json;

pub use self::csv::export_report_csv;
pub use self::json::{export_ledger_json, export_report_json, LedgerSnapshot, EXPORT_SCHEMA_VERSION};
