//! Cash account CLI commands

use clap::Subcommand;

use super::{parse_amount, parse_choice, parse_date_or_today};
use crate::config::Settings;
use crate::display::{
    format_amount, format_amount_colored, format_cash_account_list, format_cash_transaction_list,
};
use crate::error::KasaResult;
use crate::models::{CashAccount, CashTransaction, Money, RecordKind};
use crate::services::{CashService, ProjectService};
use crate::storage::Storage;

#[derive(Subcommand)]
pub enum CashCommands {
    /// Open a cash account
    AccountAdd {
        /// Account name
        name: String,
        /// Currency code (default: configured default)
        #[arg(short, long)]
        currency: Option<String>,
        /// Opening balance
        #[arg(short, long, default_value = "0")]
        opening: String,
    },
    /// List cash accounts with balances
    Accounts {
        /// Include archived accounts
        #[arg(short, long)]
        all: bool,
    },
    /// Archive a cash account
    Archive {
        /// Account name or ID
        account: String,
    },
    /// Record money in or out of an account
    Add {
        /// Account name or ID
        account: String,
        /// Kind (income, expense)
        kind: String,
        /// Amount
        amount: String,
        /// Description
        description: String,
        /// Date (default: today)
        #[arg(short, long)]
        date: Option<String>,
        /// Counterparty, printed on receipts
        #[arg(short = 'P', long)]
        party: Option<String>,
        /// Free-text category
        #[arg(short = 'C', long)]
        category: Option<String>,
        /// Project name or ID
        #[arg(short, long)]
        project: Option<String>,
    },
    /// List transactions
    List {
        /// Only this account (name or ID)
        account: Option<String>,
    },
    /// Show an account balance
    Balance {
        /// Account name or ID
        account: String,
    },
    /// Delete a transaction
    Delete {
        /// Transaction ID
        transaction: String,
    },
}

pub fn handle_cash_command(storage: &Storage, settings: &Settings, cmd: CashCommands) -> KasaResult<()> {
    let service = CashService::new(storage);

    match cmd {
        CashCommands::AccountAdd {
            name,
            currency,
            opening,
        } => {
            let currency = settings.resolve_currency(currency.as_deref())?;
            let opening = Money::parse(&opening).map_err(|e| {
                crate::error::KasaError::Validation(format!(
                    "Invalid opening balance '{}': {}",
                    opening, e
                ))
            })?;

            let account = service.create_account(CashAccount::new(name, currency, opening))?;
            println!("Kasa hesabı açıldı: {}", account.name);
            println!(
                "  Açılış bakiyesi: {}",
                format_amount(account.opening_balance, &account.currency, &settings.currencies)
            );
            println!("  ID: {}", account.id);
        }

        CashCommands::Accounts { all } => {
            let summaries = service.list_with_balances(all)?;
            print!("{}", format_cash_account_list(&summaries, &settings.currencies));
        }

        CashCommands::Archive { account } => {
            let found = service.find_account(&account)?;
            let archived = service.archive_account(found.id)?;
            println!("Kasa hesabı arşivlendi: {}", archived.name);
        }

        CashCommands::Add {
            account,
            kind,
            amount,
            description,
            date,
            party,
            category,
            project,
        } => {
            let account = service.find_account(&account)?;
            let kind = parse_choice(&kind, RecordKind::parse, "kind", "income, expense")?;

            let mut txn = CashTransaction::new(
                &account,
                kind,
                parse_amount(&amount)?,
                parse_date_or_today(date.as_deref())?,
                description,
            );
            txn.party = party.unwrap_or_default();
            txn.category = category.unwrap_or_default();
            if let Some(project) = project {
                txn.project_id = Some(ProjectService::new(storage).find(&project)?.id);
            }

            let txn = service.add_transaction(txn)?;
            println!(
                "{} kaydedildi: {} ({})",
                txn.kind,
                format_amount(txn.amount, &txn.currency, &settings.currencies),
                account.name
            );
            println!("  ID: {}", txn.id);
        }

        CashCommands::List { account } => {
            let account_id = account
                .as_deref()
                .map(|a| service.find_account(a))
                .transpose()?
                .map(|a| a.id);
            let transactions = service.transactions(account_id)?;
            print!("{}", format_cash_transaction_list(&transactions, &settings.currencies));
        }

        CashCommands::Balance { account } => {
            let found = service.find_account(&account)?;
            let summary = service.summary(found)?;
            println!(
                "{}: {} ({} hareket)",
                summary.account.name,
                format_amount_colored(summary.balance, &summary.account.currency, &settings.currencies),
                summary.transaction_count
            );
        }

        CashCommands::Delete { transaction } => {
            let found = service.find_transaction(&transaction)?;
            let deleted = service.delete_transaction(found.id)?;
            println!(
                "Kasa hareketi silindi: {} {}",
                deleted.date,
                format_amount(deleted.amount, &deleted.currency, &settings.currencies)
            );
        }
    }

    Ok(())
}
