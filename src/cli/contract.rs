//! Contract and installment CLI commands

use clap::Subcommand;

use super::{parse_amount, parse_choice, parse_date, parse_date_or_today};
use crate::config::Settings;
use crate::display::{format_amount, format_contract_list, format_installment_list};
use crate::error::KasaResult;
use crate::models::{Contract, ContractKind, ContractStatus};
use crate::services::{ContractService, ProjectService};
use crate::storage::Storage;

#[derive(Subcommand)]
pub enum ContractCommands {
    /// Record a contract
    Add {
        /// Contract title
        title: String,
        /// Customer or subcontractor
        party: String,
        /// Contract amount
        amount: String,
        /// Start date
        start: String,
        /// End date
        end: String,
        /// Kind (customer, subcontractor)
        #[arg(short, long, default_value = "customer")]
        kind: String,
        /// Currency code (default: configured default)
        #[arg(short, long)]
        currency: Option<String>,
        /// Project name or ID
        #[arg(short, long)]
        project: Option<String>,
    },
    /// List contracts
    List {
        /// Only this status
        #[arg(short, long)]
        status: Option<String>,
    },
    /// Change contract status
    Status {
        /// Contract title or ID
        contract: String,
        /// New status (draft, active, completed, terminated)
        status: String,
    },
    /// List installments, or generate a schedule with --count
    Installments {
        /// Contract title or ID
        contract: String,
        /// Number of monthly installments to generate
        #[arg(short = 'n', long)]
        count: Option<u32>,
        /// First due date (default: contract start)
        #[arg(short, long)]
        first_due: Option<String>,
    },
    /// Mark an installment as paid
    PayInstallment {
        /// Installment ID
        installment: String,
        /// Payment date (default: today)
        #[arg(short, long)]
        date: Option<String>,
    },
    /// Delete a contract and its installments
    Delete {
        /// Contract title or ID
        contract: String,
    },
}

const STATUSES: &str = "draft, active, completed, terminated";

pub fn handle_contract_command(storage: &Storage, settings: &Settings, cmd: ContractCommands) -> KasaResult<()> {
    let service = ContractService::new(storage);

    match cmd {
        ContractCommands::Add {
            title,
            party,
            amount,
            start,
            end,
            kind,
            currency,
            project,
        } => {
            let kind = parse_choice(&kind, ContractKind::parse, "contract kind", "customer, subcontractor")?;
            let mut contract = Contract::new(
                title,
                party,
                kind,
                parse_amount(&amount)?,
                settings.resolve_currency(currency.as_deref())?,
                parse_date(&start)?,
                parse_date(&end)?,
            );
            if let Some(project) = project {
                contract.project_id = Some(ProjectService::new(storage).find(&project)?.id);
            }

            let contract = service.create(contract)?;
            println!("Sözleşme kaydedildi: {}", contract.title);
            println!(
                "  Tutar: {}",
                format_amount(contract.amount, &contract.currency, &settings.currencies)
            );
            println!("  ID: {}", contract.id);
        }

        ContractCommands::List { status } => {
            let status = status
                .as_deref()
                .map(|s| parse_choice(s, ContractStatus::parse, "contract status", STATUSES))
                .transpose()?;
            let contracts = service.list(status)?;
            print!("{}", format_contract_list(&contracts, &settings.currencies));
        }

        ContractCommands::Status { contract, status } => {
            let status = parse_choice(&status, ContractStatus::parse, "contract status", STATUSES)?;
            let found = service.find(&contract)?;
            let updated = service.set_status(found.id, status)?;
            println!("Sözleşme {}: {}", updated.title, updated.status);
        }

        ContractCommands::Installments {
            contract,
            count,
            first_due,
        } => {
            let found = service.find(&contract)?;
            let installments = match count {
                Some(count) => {
                    let first_due = match first_due {
                        Some(d) => parse_date(&d)?,
                        None => found.start_date,
                    };
                    let generated = service.generate_installments(found.id, count, first_due)?;
                    println!("{} taksit oluşturuldu: {}", generated.len(), found.title);
                    generated
                }
                None => service.installments(found.id)?,
            };
            print!("{}", format_installment_list(&installments, &settings.currencies));
        }

        ContractCommands::PayInstallment { installment, date } => {
            let found = service.find_installment(&installment)?;
            let paid = service.mark_installment_paid(found.id, parse_date_or_today(date.as_deref())?)?;
            println!(
                "{}. taksit ödendi: {}",
                paid.sequence,
                format_amount(paid.amount, &paid.currency, &settings.currencies)
            );
        }

        ContractCommands::Delete { contract } => {
            let found = service.find(&contract)?;
            let deleted = service.delete(found.id)?;
            println!("Sözleşme silindi: {}", deleted.title);
        }
    }

    Ok(())
}
