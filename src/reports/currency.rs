//! Per-currency income/expense totals
//!
//! Totals start at zero for every recognized currency and only grow. Records
//! in currencies outside the table are dropped, and currencies that end with
//! no activity are left out of the result.

use serde::Serialize;
use tracing::debug;

use crate::models::{AsMonetaryRecord, CurrencyTable, Money, RecordKind};

/// How record amounts are routed into the income and expense buckets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KindRouting {
    /// Income-kind amounts go to `income`, expense-kind to `expense`, the rest is ignored
    ByKind,
    /// Every amount goes to `income`, for single-sided datasets (checks, installments)
    IncomeOnly,
}

/// Totals for one currency
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct CurrencyTotals {
    pub income: Money,
    pub expense: Money,
}

impl CurrencyTotals {
    pub fn is_zero(&self) -> bool {
        self.income.is_zero() && self.expense.is_zero()
    }

    /// Income minus expense
    pub fn net(&self) -> Money {
        self.income - self.expense
    }
}

/// One row of a currency summary
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CurrencyLine {
    pub currency_code: String,
    #[serde(flatten)]
    pub totals: CurrencyTotals,
}

/// Currency totals in currency-table order, zero-activity currencies removed
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct CurrencySummary {
    lines: Vec<CurrencyLine>,
}

impl CurrencySummary {
    pub fn get(&self, code: &str) -> Option<&CurrencyTotals> {
        self.lines
            .iter()
            .find(|line| line.currency_code == code)
            .map(|line| &line.totals)
    }

    pub fn lines(&self) -> &[CurrencyLine] {
        &self.lines
    }

    pub fn iter(&self) -> impl Iterator<Item = &CurrencyLine> {
        self.lines.iter()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Sum record amounts per recognized currency
///
/// # Examples
/// ```
/// use kasa::models::{CurrencyTable, MonetaryRecord, Money, RecordKind};
/// use kasa::reports::{summarize_by_currency, KindRouting};
///
/// let records = vec![
///     MonetaryRecord::new(Money::from_major(5900), "TRY").with_kind(RecordKind::Income),
///     MonetaryRecord::new(Money::from_major(17700), "TRY").with_kind(RecordKind::Expense),
/// ];
/// let summary = summarize_by_currency(&records, &CurrencyTable::default(), KindRouting::ByKind);
/// let totals = summary.get("TRY").unwrap();
/// assert_eq!(totals.income, Money::from_major(5900));
/// assert_eq!(totals.expense, Money::from_major(17700));
/// ```
pub fn summarize_by_currency<'a, T, I>(
    records: I,
    currencies: &CurrencyTable,
    routing: KindRouting,
) -> CurrencySummary
where
    T: AsMonetaryRecord + 'a,
    I: IntoIterator<Item = &'a T>,
{
    let mut lines: Vec<CurrencyLine> = currencies
        .codes()
        .map(|code| CurrencyLine {
            currency_code: code.to_string(),
            totals: CurrencyTotals::default(),
        })
        .collect();

    for item in records {
        let record = item.to_record();

        let Some(line) = lines
            .iter_mut()
            .find(|line| line.currency_code == record.currency_code)
        else {
            debug!(currency = %record.currency_code, "skipping record in unrecognized currency");
            continue;
        };

        if record.amount.is_negative() {
            debug!(amount = record.amount.minor(), "skipping record with negative amount");
            continue;
        }

        match (routing, record.kind) {
            (KindRouting::IncomeOnly, _) => line.totals.income += record.amount,
            (KindRouting::ByKind, Some(RecordKind::Income)) => line.totals.income += record.amount,
            (KindRouting::ByKind, Some(RecordKind::Expense)) => line.totals.expense += record.amount,
            (KindRouting::ByKind, None) => {}
        }
    }

    lines.retain(|line| !line.totals.is_zero());
    CurrencySummary { lines }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MonetaryRecord;

    fn income(amount: i64, code: &str) -> MonetaryRecord {
        MonetaryRecord::new(Money::from_major(amount), code).with_kind(RecordKind::Income)
    }

    fn expense(amount: i64, code: &str) -> MonetaryRecord {
        MonetaryRecord::new(Money::from_major(amount), code).with_kind(RecordKind::Expense)
    }

    #[test]
    fn test_groups_by_currency_and_kind() {
        let records = vec![
            income(5900, "TRY"),
            expense(17700, "TRY"),
            income(1000, "USD"),
            income(250, "USD"),
        ];
        let summary = summarize_by_currency(&records, &CurrencyTable::default(), KindRouting::ByKind);

        assert_eq!(summary.len(), 2);
        assert_eq!(
            summary.get("TRY"),
            Some(&CurrencyTotals {
                income: Money::from_major(5900),
                expense: Money::from_major(17700),
            })
        );
        assert_eq!(summary.get("USD").unwrap().income, Money::from_major(1250));
        assert_eq!(summary.get("USD").unwrap().expense, Money::zero());
    }

    #[test]
    fn test_totals_match_inputs() {
        let records = vec![
            income(100, "TRY"),
            income(200, "USD"),
            expense(50, "EUR"),
            expense(75, "TRY"),
        ];
        let summary = summarize_by_currency(&records, &CurrencyTable::default(), KindRouting::ByKind);

        let income_total: Money = summary.iter().map(|l| l.totals.income).sum();
        let expense_total: Money = summary.iter().map(|l| l.totals.expense).sum();
        assert_eq!(income_total, Money::from_major(300));
        assert_eq!(expense_total, Money::from_major(125));
    }

    #[test]
    fn test_zero_activity_currencies_are_dropped() {
        let records = vec![income(10, "EUR")];
        let summary = summarize_by_currency(&records, &CurrencyTable::default(), KindRouting::ByKind);

        let codes: Vec<_> = summary.iter().map(|l| l.currency_code.as_str()).collect();
        assert_eq!(codes, vec!["EUR"]);
        assert!(summary.get("TRY").is_none());
    }

    #[test]
    fn test_unrecognized_currency_is_skipped() {
        let records = vec![income(10, "GBP"), income(20, "TRY")];
        let summary = summarize_by_currency(&records, &CurrencyTable::default(), KindRouting::ByKind);

        assert_eq!(summary.len(), 1);
        assert!(summary.get("GBP").is_none());
    }

    #[test]
    fn test_by_kind_ignores_unclassified_records() {
        let records = vec![MonetaryRecord::new(Money::from_major(10), "TRY")];
        let summary = summarize_by_currency(&records, &CurrencyTable::default(), KindRouting::ByKind);
        assert!(summary.is_empty());
    }

    #[test]
    fn test_income_only_routes_everything_to_income() {
        let records = vec![
            MonetaryRecord::new(Money::from_major(10), "TRY"),
            expense(5, "TRY"),
            income(1, "TRY"),
        ];
        let summary =
            summarize_by_currency(&records, &CurrencyTable::default(), KindRouting::IncomeOnly);

        let totals = summary.get("TRY").unwrap();
        assert_eq!(totals.income, Money::from_major(16));
        assert_eq!(totals.expense, Money::zero());
    }

    #[test]
    fn test_negative_amounts_do_not_reduce_totals() {
        let records = vec![income(10, "TRY"), income(-4, "TRY")];
        let summary = summarize_by_currency(&records, &CurrencyTable::default(), KindRouting::ByKind);
        assert_eq!(summary.get("TRY").unwrap().income, Money::from_major(10));
    }

    #[test]
    fn test_order_follows_currency_table() {
        let records = vec![income(1, "EUR"), income(1, "TRY"), income(1, "USD")];
        let summary = summarize_by_currency(&records, &CurrencyTable::default(), KindRouting::ByKind);
        let codes: Vec<_> = summary.iter().map(|l| l.currency_code.as_str()).collect();
        assert_eq!(codes, vec!["TRY", "USD", "EUR"]);
    }
}
