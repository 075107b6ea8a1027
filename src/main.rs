use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use kasa::cli::{
    handle_cash_command, handle_check_command, handle_contract_command, handle_export_command,
    handle_invoice_command, handle_payroll_command, handle_project_command,
    handle_receipt_command, handle_report_command, handle_words_command, CashCommands,
    CheckCommands, ContractCommands, ExportCommands, InvoiceCommands, PayrollCommands,
    ProjectCommands, ReportArgs,
};
use kasa::config::{KasaPaths, Settings};
use kasa::storage::{initialize_storage, seed_demo_data, Storage};

#[derive(Parser)]
#[command(
    name = "kasa",
    version,
    about = "Invoices, checks, cash and reports for construction companies",
    long_about = "Kasa keeps the books of a construction or real-estate company: \
                  sales and purchase invoices, checks, cash accounts, projects, \
                  contracts with installment plans and payroll. Report tabs summarize \
                  each of them per currency over a date range."
)]
struct Cli {
    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the data directory and default settings
    Init {
        /// Add a small sample ledger
        #[arg(long)]
        demo: bool,
    },

    /// Show current configuration and paths
    Config,

    /// Show a report tab
    Report(ReportArgs),

    /// Spell an amount in Turkish words
    Words {
        /// Amount (whole number, or any amount with --currency)
        amount: String,
        /// Currency code, for the receipt phrase with the minor unit
        #[arg(short, long)]
        currency: Option<String>,
    },

    /// Print the receipt of a cash transaction or a paid installment
    Receipt {
        /// Cash transaction or installment ID
        id: String,
    },

    /// Invoice commands
    #[command(subcommand)]
    Invoice(InvoiceCommands),

    /// Check commands
    #[command(subcommand)]
    Check(CheckCommands),

    /// Cash account commands
    #[command(subcommand)]
    Cash(CashCommands),

    /// Project commands
    #[command(subcommand)]
    Project(ProjectCommands),

    /// Contract and installment commands
    #[command(subcommand)]
    Contract(ContractCommands),

    /// Payroll commands
    #[command(subcommand)]
    Payroll(PayrollCommands),

    /// Export the ledger
    #[command(subcommand)]
    Export(ExportCommands),

    /// Show recent changes from the audit log
    Audit {
        /// Number of entries
        #[arg(short = 'n', long, default_value = "20")]
        limit: usize,
    },
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("kasa=debug"))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("kasa=warn"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn init(paths: &KasaPaths, demo: bool) -> Result<()> {
    println!("Kasa veri dizini: {}", paths.base_dir().display());
    let settings = initialize_storage(paths)?;
    if demo {
        let storage = Storage::open(paths.clone())?;
        seed_demo_data(&storage)?;
        println!("Örnek veriler eklendi.");
    }
    println!("Hazır. Varsayılan para birimi: {}", settings.default_currency);
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let paths = KasaPaths::new()?;

    let Some(command) = cli.command else {
        println!("Kasa - construction company bookkeeping");
        println!();
        println!("Run 'kasa init' to set up, then 'kasa --help' for usage information.");
        return Ok(());
    };

    if let Commands::Init { demo } = command {
        return init(&paths, demo);
    }

    let settings = Settings::load_or_create(&paths)?;
    let storage = Storage::open(paths.clone())?;

    match command {
        Commands::Init { .. } => {}
        Commands::Config => {
            println!("Kasa Yapılandırması");
            println!("===================");
            println!("Ayar dosyası : {}", paths.settings_file().display());
            println!("Veri dizini  : {}", paths.data_dir().display());
            println!("Denetim kaydı: {}", paths.audit_log().display());
            println!();
            println!("Şirket          : {}", settings.company_name);
            println!("Varsayılan birim: {}", settings.default_currency);
            println!("Tarih biçimi    : {}", settings.date_format);
            println!("Vade toleransı  : {} gün", settings.overdue_grace_days);
            println!("Para birimleri:");
            for currency in settings.currencies.iter() {
                println!("  {} {} ({})", currency.code, currency.symbol, currency.name);
            }
        }
        Commands::Report(args) => handle_report_command(&storage, &settings, args)?,
        Commands::Words { amount, currency } => {
            handle_words_command(&settings, &amount, currency.as_deref())?
        }
        Commands::Receipt { id } => handle_receipt_command(&storage, &settings, &id)?,
        Commands::Invoice(cmd) => handle_invoice_command(&storage, &settings, cmd)?,
        Commands::Check(cmd) => handle_check_command(&storage, &settings, cmd)?,
        Commands::Cash(cmd) => handle_cash_command(&storage, &settings, cmd)?,
        Commands::Project(cmd) => handle_project_command(&storage, &settings, cmd)?,
        Commands::Contract(cmd) => handle_contract_command(&storage, &settings, cmd)?,
        Commands::Payroll(cmd) => handle_payroll_command(&storage, &settings, cmd)?,
        Commands::Export(cmd) => handle_export_command(&storage, cmd)?,
        Commands::Audit { limit } => {
            let entries = storage.audit().read_recent(limit)?;
            if entries.is_empty() {
                println!("Denetim kaydı boş.");
            }
            for entry in entries {
                println!("{}", entry.format_human_readable());
            }
        }
    }

    Ok(())
}
