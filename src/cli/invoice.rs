//! Invoice CLI commands

use clap::Subcommand;

use super::{parse_amount, parse_choice, parse_date, parse_date_or_today};
use crate::config::Settings;
use crate::display::{format_amount, format_invoice_list};
use crate::error::KasaResult;
use crate::models::{Invoice, InvoiceKind};
use crate::services::{InvoiceService, ProjectService};
use crate::storage::Storage;

#[derive(Subcommand)]
pub enum InvoiceCommands {
    /// Record a new invoice
    Add {
        /// Invoice number (e.g., SF-2024-001)
        number: String,
        /// Customer or supplier
        party: String,
        /// Amount before VAT
        amount: String,
        /// Kind (sales, purchase)
        #[arg(short, long, default_value = "sales")]
        kind: String,
        /// VAT rate in percent
        #[arg(long, default_value = "20")]
        vat: u32,
        /// Invoice date (default: today)
        #[arg(short, long)]
        date: Option<String>,
        /// Due date
        #[arg(long)]
        due: Option<String>,
        /// Currency code (default: configured default)
        #[arg(short, long)]
        currency: Option<String>,
        /// Project name or ID
        #[arg(short, long)]
        project: Option<String>,
        /// Free-text notes
        #[arg(short, long)]
        notes: Option<String>,
    },
    /// List invoices
    List {
        /// Only this kind (sales, purchase)
        #[arg(short, long)]
        kind: Option<String>,
    },
    /// Mark an invoice as paid
    Pay {
        /// Invoice number or ID
        invoice: String,
    },
    /// Mark unpaid invoices past their due date as overdue
    Refresh {
        /// Reference date (default: today)
        #[arg(long)]
        as_of: Option<String>,
    },
    /// Delete an invoice
    Delete {
        /// Invoice number or ID
        invoice: String,
    },
}

const KINDS: &str = "sales, purchase";

pub fn handle_invoice_command(storage: &Storage, settings: &Settings, cmd: InvoiceCommands) -> KasaResult<()> {
    let service = InvoiceService::new(storage);

    match cmd {
        InvoiceCommands::Add {
            number,
            party,
            amount,
            kind,
            vat,
            date,
            due,
            currency,
            project,
            notes,
        } => {
            let kind = parse_choice(&kind, InvoiceKind::parse, "invoice kind", KINDS)?;
            let currency = settings.resolve_currency(currency.as_deref())?;
            let date = parse_date_or_today(date.as_deref())?;

            let mut invoice = Invoice::new(number, party, kind, date, parse_amount(&amount)?, vat, currency);
            invoice.due_date = due.as_deref().map(parse_date).transpose()?;
            if let Some(project) = project {
                invoice.project_id = Some(ProjectService::new(storage).find(&project)?.id);
            }
            if let Some(notes) = notes {
                invoice.notes = notes;
            }

            let invoice = service.create(invoice)?;
            println!("Fatura kaydedildi: {}", invoice.number);
            println!("  Tür: {}", invoice.kind);
            println!(
                "  Toplam: {}",
                format_amount(invoice.total, &invoice.currency, &settings.currencies)
            );
            println!("  ID: {}", invoice.id);
        }

        InvoiceCommands::List { kind } => {
            let kind = kind
                .as_deref()
                .map(|k| parse_choice(k, InvoiceKind::parse, "invoice kind", KINDS))
                .transpose()?;
            let invoices = service.list(kind)?;
            print!("{}", format_invoice_list(&invoices, &settings.currencies));
        }

        InvoiceCommands::Pay { invoice } => {
            let found = service.find(&invoice)?;
            let paid = service.mark_paid(found.id)?;
            println!("Fatura ödendi: {}", paid.number);
        }

        InvoiceCommands::Refresh { as_of } => {
            let as_of = parse_date_or_today(as_of.as_deref())?;
            let count = service.refresh_overdue(as_of, settings.overdue_grace_days)?;
            println!("{} fatura vadesi geçmiş olarak işaretlendi", count);
        }

        InvoiceCommands::Delete { invoice } => {
            let found = service.find(&invoice)?;
            let deleted = service.delete(found.id)?;
            println!("Fatura silindi: {}", deleted.number);
        }
    }

    Ok(())
}
