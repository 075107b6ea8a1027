//! Kasa - bookkeeping for construction and real-estate companies
//!
//! Tracks sales and purchase invoices, received and issued checks, cash
//! accounts, projects, contracts with installment plans and payroll, in any
//! number of currencies. Report tabs summarize each dataset over a date
//! window with per-currency income and expense totals.
//!
//! # Architecture
//!
//! - `config`: paths and user settings (company, currency table)
//! - `error`: the crate error type
//! - `models`: entities, money and currency types
//! - `storage`: JSON file repositories and the [`storage::LedgerSource`] seam
//! - `services`: validation and writes, with an audit entry per change
//! - `audit`: append-only change log
//! - `reports`: date filtering, currency aggregation and statistic cards
//! - `receipt`: receipts and amounts in Turkish words
//! - `export`: CSV and JSON output
//! - `display`, `cli`: terminal formatting and command handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use kasa::config::{KasaPaths, Settings};
//! use kasa::reports::{DateWindow, ReportOptions, ReportTab};
//! use kasa::services::ReportService;
//! use kasa::storage::Storage;
//!
//! let paths = KasaPaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! let storage = Storage::open(paths)?;
//!
//! let options = ReportOptions::new(DateWindow::unbounded(), settings.currencies.clone(), today);
//! let report = ReportService::new(&storage).build(ReportTab::Invoices, &options)?;
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod receipt;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{KasaError, KasaResult};
