//! CLI commands for ledger export

use std::fs::File;
use std::io::{self, BufWriter};
use std::path::PathBuf;

use clap::Subcommand;

use crate::error::{KasaError, KasaResult};
use crate::export::{export_ledger_json, LedgerSnapshot, EXPORT_SCHEMA_VERSION};
use crate::storage::Storage;

#[derive(Subcommand, Debug)]
pub enum ExportCommands {
    /// Write every record as one JSON document
    Json {
        /// Output file (default: standard output)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Show what an export would contain
    Info,
}

pub fn handle_export_command(storage: &Storage, cmd: ExportCommands) -> KasaResult<()> {
    match cmd {
        ExportCommands::Json { output: Some(path) } => {
            let file = File::create(&path).map_err(|e| {
                KasaError::Export(format!("Failed to create file {}: {}", path.display(), e))
            })?;
            let mut writer = BufWriter::new(file);
            export_ledger_json(storage, &mut writer)?;
            eprintln!("Kayıtlar dışa aktarıldı: {}", path.display());
        }
        ExportCommands::Json { output: None } => {
            let mut stdout = io::stdout().lock();
            export_ledger_json(storage, &mut stdout)?;
        }
        ExportCommands::Info => {
            let snapshot = LedgerSnapshot::from_storage(storage)?;
            println!("Şema sürümü : {}", EXPORT_SCHEMA_VERSION);
            println!("Faturalar   : {}", snapshot.invoices.len());
            println!("Çekler      : {}", snapshot.checks.len());
            println!("Kasa hesap. : {}", snapshot.cash_accounts.len());
            println!("Kasa hareket: {}", snapshot.cash_transactions.len());
            println!("Projeler    : {}", snapshot.projects.len());
            println!("Sözleşmeler : {}", snapshot.contracts.len());
            println!("Taksitler   : {}", snapshot.installments.len());
            println!("Bordro      : {}", snapshot.payroll.len());
            println!("Toplam      : {}", snapshot.record_count());
        }
    }

    Ok(())
}
