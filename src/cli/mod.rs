//! CLI command handlers
//!
//! Bridges clap argument parsing with the service layer. Each submodule owns
//! one command family: its `Subcommand` enum and a `handle_*` function.

pub mod cash;
pub mod check;
pub mod contract;
pub mod export;
pub mod invoice;
pub mod payroll;
pub mod project;
pub mod receipt;
pub mod report;

pub use cash::{handle_cash_command, CashCommands};
pub use check::{handle_check_command, CheckCommands};
pub use contract::{handle_contract_command, ContractCommands};
pub use export::{handle_export_command, ExportCommands};
pub use invoice::{handle_invoice_command, InvoiceCommands};
pub use payroll::{handle_payroll_command, PayrollCommands};
pub use project::{handle_project_command, ProjectCommands};
pub use receipt::{handle_receipt_command, handle_words_command};
pub use report::{handle_report_command, ReportArgs};

use chrono::{Local, NaiveDate};

use crate::error::{KasaError, KasaResult};
use crate::models::{Money, PeriodKey};

/// Parse a date given as `YYYY-MM-DD` or `DD.MM.YYYY`
pub(crate) fn parse_date(input: &str) -> KasaResult<NaiveDate> {
    let input = input.trim();
    NaiveDate::parse_from_str(input, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(input, "%d.%m.%Y"))
        .map_err(|_| {
            KasaError::Validation(format!(
                "Invalid date '{}'. Use YYYY-MM-DD or DD.MM.YYYY",
                input
            ))
        })
}

/// Parse an optional date, defaulting to today
pub(crate) fn parse_date_or_today(input: Option<&str>) -> KasaResult<NaiveDate> {
    match input {
        Some(s) => parse_date(s),
        None => Ok(Local::now().date_naive()),
    }
}

/// Parse a non-negative amount
pub(crate) fn parse_amount(input: &str) -> KasaResult<Money> {
    let amount = Money::parse(input)
        .map_err(|e| KasaError::Validation(format!("Invalid amount '{}': {}", input, e)))?;
    if amount.is_negative() {
        return Err(KasaError::Validation(format!(
            "Amount cannot be negative: {}",
            input
        )));
    }
    Ok(amount)
}

/// Parse a keyword argument with the enum's own parser
pub(crate) fn parse_choice<T>(
    input: &str,
    parse: impl Fn(&str) -> Option<T>,
    what: &str,
    valid: &str,
) -> KasaResult<T> {
    parse(input).ok_or_else(|| {
        KasaError::Validation(format!("Invalid {}: '{}'. Valid values: {}", what, input, valid))
    })
}

pub(crate) fn parse_period(input: &str) -> KasaResult<PeriodKey> {
    PeriodKey::parse(input).map_err(|e| {
        KasaError::Validation(format!("Invalid period '{}': {}. Use YYYY-MM", input, e))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date_formats() {
        let expected = NaiveDate::from_ymd_opt(2024, 7, 10).unwrap();
        assert_eq!(parse_date("2024-07-10").unwrap(), expected);
        assert_eq!(parse_date("10.07.2024").unwrap(), expected);
        assert!(parse_date("07/10/2024").unwrap_err().is_validation());
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("5.900,50").unwrap(), Money::from_major_minor(5900, 50));
        assert!(parse_amount("-5").unwrap_err().is_validation());
        assert!(parse_amount("beş").is_err());
    }

    #[test]
    fn test_parse_period() {
        assert_eq!(parse_period("2024-07").unwrap(), PeriodKey::new(2024, 7).unwrap());
        assert!(parse_period("2024-13").is_err());
    }
}
