//! Money formatting with currency symbols

use crate::models::{CurrencyTable, Money};

/// Format an amount with its currency symbol: `₺5.900,00`, `-$12,50`
///
/// Unknown currency codes are shown as the raw code followed by a space.
pub fn format_amount(amount: Money, currency_code: &str, currencies: &CurrencyTable) -> String {
    let sign = if amount.is_negative() { "-" } else { "" };
    match currencies.get(currency_code) {
        Some(currency) => format!("{}{}{}", sign, currency.symbol, amount.abs()),
        None => format!("{}{} {}", sign, currency_code, amount.abs()),
    }
}

/// Format an amount with ANSI colour hints: red for negative, green for positive
pub fn format_amount_colored(amount: Money, currency_code: &str, currencies: &CurrencyTable) -> String {
    let text = format_amount(amount, currency_code, currencies);
    if amount.is_negative() {
        format!("\x1b[31m{}\x1b[0m", text)
    } else if amount.is_positive() {
        format!("\x1b[32m{}\x1b[0m", text)
    } else {
        text
    }
}
