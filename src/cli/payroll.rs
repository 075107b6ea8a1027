//! Payroll CLI commands

use clap::Subcommand;

use super::{parse_amount, parse_date_or_today, parse_period};
use crate::config::Settings;
use crate::display::{format_amount, format_payroll_list};
use crate::error::KasaResult;
use crate::models::PayrollEntry;
use crate::services::PayrollService;
use crate::storage::Storage;

#[derive(Subcommand)]
pub enum PayrollCommands {
    /// Record a month's salary for an employee
    Add {
        /// Employee name
        employee: String,
        /// Month (YYYY-MM)
        period: String,
        /// Gross salary
        gross: String,
        /// Net salary
        net: String,
        /// Currency code (default: configured default)
        #[arg(short, long)]
        currency: Option<String>,
    },
    /// List payroll entries
    List {
        /// Only this month (YYYY-MM)
        #[arg(short, long)]
        period: Option<String>,
    },
    /// Mark a payroll entry as paid
    Pay {
        /// Payroll entry ID
        entry: String,
        /// Payment date (default: today)
        #[arg(short, long)]
        date: Option<String>,
    },
    /// Delete a payroll entry
    Delete {
        /// Payroll entry ID
        entry: String,
    },
}

pub fn handle_payroll_command(storage: &Storage, settings: &Settings, cmd: PayrollCommands) -> KasaResult<()> {
    let service = PayrollService::new(storage);

    match cmd {
        PayrollCommands::Add {
            employee,
            period,
            gross,
            net,
            currency,
        } => {
            let entry = PayrollEntry::new(
                employee,
                parse_period(&period)?,
                parse_amount(&gross)?,
                parse_amount(&net)?,
                settings.resolve_currency(currency.as_deref())?,
            );

            let entry = service.create(entry)?;
            println!("Bordro kaydedildi: {} ({})", entry.employee, entry.period);
            println!(
                "  Net: {}",
                format_amount(entry.net, &entry.currency, &settings.currencies)
            );
            println!("  ID: {}", entry.id);
        }

        PayrollCommands::List { period } => {
            let period = period.as_deref().map(parse_period).transpose()?;
            let entries = service.list(period)?;
            print!("{}", format_payroll_list(&entries, &settings.currencies));
        }

        PayrollCommands::Pay { entry, date } => {
            let found = service.find(&entry)?;
            let paid = service.mark_paid(found.id, parse_date_or_today(date.as_deref())?)?;
            println!("Maaş ödendi: {} ({})", paid.employee, paid.period);
        }

        PayrollCommands::Delete { entry } => {
            let found = service.find(&entry)?;
            let deleted = service.delete(found.id)?;
            println!("Bordro silindi: {} ({})", deleted.employee, deleted.period);
        }
    }

    Ok(())
}
