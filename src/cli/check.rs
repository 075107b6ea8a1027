//! Check CLI commands

use clap::Subcommand;

use super::{parse_amount, parse_choice, parse_date, parse_date_or_today};
use crate::config::Settings;
use crate::display::{format_amount, format_check_list};
use crate::error::KasaResult;
use crate::models::{Check, CheckDirection, CheckStatus};
use crate::services::CheckService;
use crate::storage::Storage;

#[derive(Subcommand)]
pub enum CheckCommands {
    /// Record a received or issued check
    Add {
        /// Check number
        number: String,
        /// Bank name
        bank: String,
        /// Person or company who wrote the check
        drawer: String,
        /// Check amount
        amount: String,
        /// Due date
        due: String,
        /// Direction (received, issued)
        #[arg(short = 'D', long, default_value = "received")]
        direction: String,
        /// Issue date (default: today)
        #[arg(short, long)]
        issued: Option<String>,
        /// Currency code (default: configured default)
        #[arg(short, long)]
        currency: Option<String>,
    },
    /// List checks
    List {
        /// Only this direction (received, issued)
        #[arg(short = 'D', long)]
        direction: Option<String>,
        /// Only this status
        #[arg(short, long)]
        status: Option<String>,
    },
    /// Move a check to a new status
    Status {
        /// Check number or ID
        check: String,
        /// New status (portfolio, deposited, cleared, endorsed, bounced)
        status: String,
    },
    /// Delete a check
    Delete {
        /// Check number or ID
        check: String,
    },
}

const DIRECTIONS: &str = "received, issued";
const STATUSES: &str = "portfolio, deposited, cleared, endorsed, bounced";

pub fn handle_check_command(storage: &Storage, settings: &Settings, cmd: CheckCommands) -> KasaResult<()> {
    let service = CheckService::new(storage);

    match cmd {
        CheckCommands::Add {
            number,
            bank,
            drawer,
            amount,
            due,
            direction,
            issued,
            currency,
        } => {
            let direction = parse_choice(&direction, CheckDirection::parse, "direction", DIRECTIONS)?;
            let check = Check::new(
                number,
                bank,
                drawer,
                direction,
                parse_amount(&amount)?,
                settings.resolve_currency(currency.as_deref())?,
                parse_date_or_today(issued.as_deref())?,
                parse_date(&due)?,
            );

            let check = service.create(check)?;
            println!("Çek kaydedildi: {} ({})", check.number, check.bank);
            println!("  Yön: {}", check.direction);
            println!(
                "  Tutar: {}",
                format_amount(check.amount, &check.currency, &settings.currencies)
            );
            println!("  Vade: {}", settings.format_date(check.due_date));
            println!("  ID: {}", check.id);
        }

        CheckCommands::List { direction, status } => {
            let direction = direction
                .as_deref()
                .map(|d| parse_choice(d, CheckDirection::parse, "direction", DIRECTIONS))
                .transpose()?;
            let status = status
                .as_deref()
                .map(|s| parse_choice(s, CheckStatus::parse, "check status", STATUSES))
                .transpose()?;
            let checks = service.list(direction, status)?;
            print!("{}", format_check_list(&checks, &settings.currencies));
        }

        CheckCommands::Status { check, status } => {
            let status = parse_choice(&status, CheckStatus::parse, "check status", STATUSES)?;
            let found = service.find(&check)?;
            let updated = service.set_status(found.id, status)?;
            println!("Çek {}: {}", updated.number, updated.status);
        }

        CheckCommands::Delete { check } => {
            let found = service.find(&check)?;
            let deleted = service.delete(found.id)?;
            println!("Çek silindi: {}", deleted.number);
        }
    }

    Ok(())
}
