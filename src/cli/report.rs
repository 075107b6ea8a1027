//! CLI command for report tabs

use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use clap::Args;

use super::{parse_date_or_today, parse_period};
use crate::config::Settings;
use crate::error::{KasaError, KasaResult};
use crate::export::{export_report_csv, export_report_json};
use crate::reports::{DateWindow, ReportOptions, ReportTab};
use crate::services::ReportService;
use crate::storage::Storage;

#[derive(Args, Debug)]
pub struct ReportArgs {
    /// Tab: invoices, checks, projects, cash, contracts, installments, payroll, or all
    pub tab: String,

    /// Start date (YYYY-MM-DD)
    #[arg(short, long)]
    pub start: Option<String>,

    /// End date (YYYY-MM-DD)
    #[arg(short, long)]
    pub end: Option<String>,

    /// Month to report on (YYYY-MM), instead of start/end
    #[arg(short, long, conflicts_with_all = ["start", "end"])]
    pub period: Option<String>,

    /// Reference date for overdue checks (default: today)
    #[arg(long)]
    pub as_of: Option<String>,

    /// Write to a file instead of the terminal (.json for JSON, otherwise CSV)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

pub fn handle_report_command(storage: &Storage, settings: &Settings, args: ReportArgs) -> KasaResult<()> {
    let tabs: Vec<ReportTab> = if args.tab.eq_ignore_ascii_case("all") {
        ReportTab::all().to_vec()
    } else {
        let tab = ReportTab::parse(&args.tab).ok_or_else(|| {
            KasaError::Validation(format!(
                "Unknown report '{}'. Valid reports: {}, all",
                args.tab,
                ReportTab::all()
                    .iter()
                    .map(|t| t.name())
                    .collect::<Vec<_>>()
                    .join(", ")
            ))
        })?;
        vec![tab]
    };

    let window = match &args.period {
        Some(period) => DateWindow::from_period(&parse_period(period)?),
        None => DateWindow::parse_bounds(args.start.as_deref(), args.end.as_deref())?,
    };
    let as_of = parse_date_or_today(args.as_of.as_deref())?;

    let options = ReportOptions::new(window, settings.currencies.clone(), as_of)
        .with_default_currency(settings.default_currency.clone())
        .with_grace_days(settings.overdue_grace_days);

    let service = ReportService::new(storage);

    match args.output {
        Some(path) => {
            if tabs.len() > 1 {
                return Err(KasaError::Validation(
                    "Export one report at a time".into(),
                ));
            }
            let report = service.build(tabs[0], &options)?;

            let file = File::create(&path)
                .map_err(|e| KasaError::Export(format!("Failed to create {}: {}", path.display(), e)))?;
            let mut writer = BufWriter::new(file);
            let is_json = path
                .extension()
                .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
            if is_json {
                export_report_json(&report, &mut writer)?;
            } else {
                export_report_csv(&report, &mut writer)?;
            }
            println!("Rapor yazıldı: {}", path.display());
        }
        None => {
            for (i, tab) in tabs.iter().enumerate() {
                if i > 0 {
                    println!();
                }
                let report = service.build(*tab, &options)?;
                print!("{}", report.format_terminal(&settings.currencies));
            }
        }
    }

    Ok(())
}
