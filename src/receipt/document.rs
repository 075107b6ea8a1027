//! Payment receipts (tahsilat makbuzu)
//!
//! A receipt prints the amount twice: formatted with the currency symbol and
//! spelled out in words. PDF output is left to external tools; this renders
//! plain text.

use chrono::NaiveDate;

use super::words::to_words;
use crate::config::Settings;
use crate::display::format_amount;
use crate::models::{CashTransaction, Contract, CurrencyTable, Installment, Money, RecordKind};

/// A payment receipt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Receipt {
    pub number: String,
    pub date: NaiveDate,
    /// Who paid (or, for an expense, who was paid)
    pub payer: String,
    pub description: String,
    pub amount: Money,
    pub currency: String,
    pub kind: RecordKind,
}

impl Receipt {
    /// Receipt for a cash transaction
    pub fn from_cash_transaction(txn: &CashTransaction) -> Self {
        Self {
            number: txn.id.to_string(),
            date: txn.date,
            payer: txn.party.clone(),
            description: txn.description.clone(),
            amount: txn.amount,
            currency: txn.currency.clone(),
            kind: txn.kind,
        }
    }

    /// Receipt for a paid installment; `None` while it is unpaid
    pub fn from_installment(installment: &Installment, contract: &Contract) -> Option<Self> {
        let paid_date = installment.paid_date?;
        Some(Self {
            number: installment.id.to_string(),
            date: paid_date,
            payer: contract.party.clone(),
            description: format!("{} - {}. taksit", contract.title, installment.sequence),
            amount: installment.amount,
            currency: installment.currency.clone(),
            kind: contract.kind.record_kind(),
        })
    }

    /// The amount in words, e.g. "yalnız beşbindokuzyüz Türk Lirası elli kuruş"
    ///
    /// The minor part is spelled separately and omitted when zero. Unknown
    /// currencies are named by their code.
    pub fn amount_in_words(&self, currencies: &CurrencyTable) -> String {
        let (name, minor_name) = match currencies.get(&self.currency) {
            Some(c) => (c.name.as_str(), c.minor_name.as_str()),
            None => (self.currency.as_str(), ""),
        };

        let amount = self.amount.abs();
        let mut text = format!("yalnız {} {}", to_words(amount.major().unsigned_abs()), name);
        if amount.minor_part() > 0 {
            text.push(' ');
            text.push_str(&to_words(amount.minor_part().unsigned_abs()));
            if !minor_name.is_empty() {
                text.push(' ');
                text.push_str(minor_name);
            }
        }
        text
    }

    /// Plain-text receipt
    pub fn format_text(&self, settings: &Settings) -> String {
        let title = match self.kind {
            RecordKind::Income => "TAHSİLAT MAKBUZU",
            RecordKind::Expense => "TEDİYE MAKBUZU",
        };
        let party_label = match self.kind {
            RecordKind::Income => "Ödeyen",
            RecordKind::Expense => "Ödenen",
        };

        let mut output = String::new();
        output.push_str(&format!("{}\n", settings.company_name));
        output.push_str(&format!("{}\n", title));
        output.push_str(&"=".repeat(60));
        output.push('\n');
        output.push_str(&format!("Makbuz No : {}\n", self.number));
        output.push_str(&format!(
            "Tarih     : {}\n",
            settings.format_date(self.date)
        ));
        output.push_str(&format!("{:<10}: {}\n", party_label, self.payer));
        output.push_str(&format!(
            "Tutar     : {}\n",
            format_amount(self.amount, &self.currency, &settings.currencies)
        ));
        output.push_str(&format!(
            "Yazıyla   : {}\n",
            self.amount_in_words(&settings.currencies)
        ));
        if !self.description.is_empty() {
            output.push_str(&format!("Açıklama  : {}\n", self.description));
        }
        output.push_str(&"-".repeat(60));
        output.push('\n');
        output.push_str(&format!("{:<30}{:>30}\n", "Teslim Eden", "Teslim Alan"));
        output
    }
}
