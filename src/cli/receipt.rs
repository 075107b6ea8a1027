//! CLI commands for receipts and amounts in words

use crate::config::Settings;
use crate::error::{KasaError, KasaResult};
use crate::models::RecordKind;
use crate::receipt::{to_words, Receipt};
use crate::services::{CashService, ContractService};
use crate::storage::Storage;

use super::parse_amount;

/// Print an amount in Turkish words
///
/// Without a currency the amount must be a whole number. With one, the
/// receipt phrase is printed, including the minor unit.
pub fn handle_words_command(settings: &Settings, amount: &str, currency: Option<&str>) -> KasaResult<()> {
    match currency {
        None => {
            let n: u64 = amount.trim().parse().map_err(|_| {
                KasaError::Validation(format!(
                    "'{}' is not a whole non-negative number; pass --currency for amounts with decimals",
                    amount
                ))
            })?;
            println!("{}", to_words(n));
        }
        Some(code) => {
            let code = settings.resolve_currency(Some(code))?;
            let receipt = Receipt {
                number: String::new(),
                date: chrono::Local::now().date_naive(),
                payer: String::new(),
                description: String::new(),
                amount: parse_amount(amount)?,
                currency: code,
                kind: RecordKind::Income,
            };
            println!("{}", receipt.amount_in_words(&settings.currencies));
        }
    }
    Ok(())
}

/// Print the receipt of a cash transaction, or of a paid installment
pub fn handle_receipt_command(storage: &Storage, settings: &Settings, id: &str) -> KasaResult<()> {
    let receipt = match CashService::new(storage).find_transaction(id) {
        Ok(txn) => Receipt::from_cash_transaction(&txn),
        Err(e) if e.is_not_found() => {
            let contracts = ContractService::new(storage);
            let installment = contracts.find_installment(id).map_err(|_| e)?;
            let contract = contracts
                .get(installment.contract_id)?
                .ok_or_else(|| KasaError::not_found("Contract", installment.contract_id.to_string()))?;
            Receipt::from_installment(&installment, &contract).ok_or_else(|| {
                KasaError::Validation(format!(
                    "Installment {} of '{}' is not paid yet",
                    installment.sequence, contract.title
                ))
            })?
        }
        Err(e) => return Err(e),
    };

    print!("{}", receipt.format_text(settings));
    Ok(())
}
