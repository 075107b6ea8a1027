//! CSV export of report tabs
//!
//! A report is written as two sections sharing one header: the statistic
//! cards, then the per-currency totals. Amounts are plain decimals with a dot
//! so spreadsheets can parse them.

use std::io::Write;

use crate::error::{KasaError, KasaResult};
use crate::models::Money;
use crate::reports::{StatValue, TabReport};

const HEADER: [&str; 6] = ["section", "label", "currency", "value", "income", "expense"];

fn decimal(amount: Money) -> String {
    format!("{:.2}", amount.as_major_f64())
}

fn stat_value(value: &StatValue) -> String {
    match value {
        StatValue::Count(n) => n.to_string(),
        StatValue::Amount(m) => decimal(*m),
        StatValue::Percent(p) => format!("{:.1}", p),
        StatValue::Text(t) => t.clone(),
    }
}

/// Write a report tab as CSV
pub fn export_report_csv<W: Write>(report: &TabReport, writer: W) -> KasaResult<()> {
    let mut out = csv::Writer::from_writer(writer);
    out.write_record(HEADER)?;

    for stat in &report.stats {
        out.write_record([
            "stat",
            stat.label.as_str(),
            "",
            stat_value(&stat.value).as_str(),
            "",
            "",
        ])?;
    }

    for line in report.currencies.iter() {
        out.write_record([
            "currency",
            line.currency_code.as_str(),
            line.currency_code.as_str(),
            decimal(line.totals.net()).as_str(),
            decimal(line.totals.income).as_str(),
            decimal(line.totals.expense).as_str(),
        ])?;
    }

    out.flush()
        .map_err(|e| KasaError::Export(format!("Failed to flush CSV: {}", e)))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CurrencyTable, Invoice, InvoiceKind};
    use crate::reports::{invoices_report, DateWindow, ReportOptions};
    use chrono::NaiveDate;

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 7, d).unwrap()
    }

    #[test]
    fn test_report_csv() {
        let invoices = vec![
            Invoice::new("F-1", "Ayşe", InvoiceKind::Sales, date(10), Money::from_major(5000), 18, "TRY"),
            Invoice::new("F-2", "Demir, AŞ", InvoiceKind::Purchase, date(15), Money::from_major(15000), 18, "TRY"),
        ];
        let options = ReportOptions::new(
            DateWindow::between(date(1), date(31)),
            CurrencyTable::default(),
            date(31),
        );
        let report = invoices_report(&invoices, &options);

        let mut buffer = Vec::new();
        export_report_csv(&report, &mut buffer).unwrap();
        let text = String::from_utf8(buffer).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "section,label,currency,value,income,expense");
        assert_eq!(lines[1], "stat,Toplam Fatura,,2,,");
        assert!(lines.contains(&"currency,TRY,TRY,-11800.00,5900.00,17700.00"));
        assert_eq!(lines.len(), 1 + report.stats.len() + 1);
    }
}
