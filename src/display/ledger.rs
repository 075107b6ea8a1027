//! Ledger list formatting
//!
//! Formats entity lists as aligned terminal tables.

use super::money::format_amount;
use super::report::{format_progress_bar, truncate};
use crate::models::{
    CashTransaction, Check, Contract, CurrencyTable, Installment, Invoice, PayrollEntry, Project,
};
use crate::services::cash::CashAccountSummary;

const PARTY_WIDTH: usize = 24;

/// Render rows under a header; columns listed in `right` are right-aligned
fn render_table(headers: &[&str], rows: &[Vec<String>], right: &[usize]) -> String {
    let widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(i, h)| {
            rows.iter()
                .map(|r| r[i].chars().count())
                .max()
                .unwrap_or(0)
                .max(h.chars().count())
        })
        .collect();

    let render_row = |cells: &[String]| -> String {
        let line: Vec<String> = cells
            .iter()
            .enumerate()
            .map(|(i, cell)| {
                let pad = widths[i].saturating_sub(cell.chars().count());
                if right.contains(&i) {
                    format!("{}{}", " ".repeat(pad), cell)
                } else {
                    format!("{}{}", cell, " ".repeat(pad))
                }
            })
            .collect();
        format!("{}\n", line.join("  ").trim_end())
    };

    let header: Vec<String> = headers.iter().map(|h| h.to_string()).collect();
    let mut output = render_row(&header);
    let dashes: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    output.push_str(&format!("{}\n", dashes.join("  ")));
    for row in rows {
        output.push_str(&render_row(row));
    }
    output
}

pub fn format_invoice_list(invoices: &[Invoice], currencies: &CurrencyTable) -> String {
    if invoices.is_empty() {
        return "Fatura bulunamadı.".to_string();
    }

    let rows: Vec<Vec<String>> = invoices
        .iter()
        .map(|i| {
            vec![
                i.id.to_string(),
                i.number.clone(),
                i.date.to_string(),
                i.kind.to_string(),
                truncate(&i.party, PARTY_WIDTH),
                format_amount(i.total, &i.currency, currencies),
                i.status.to_string(),
            ]
        })
        .collect();

    render_table(
        &["ID", "No", "Tarih", "Tür", "Cari", "Toplam", "Durum"],
        &rows,
        &[5],
    )
}

pub fn format_check_list(checks: &[Check], currencies: &CurrencyTable) -> String {
    if checks.is_empty() {
        return "Çek bulunamadı.".to_string();
    }

    let rows: Vec<Vec<String>> = checks
        .iter()
        .map(|c| {
            vec![
                c.id.to_string(),
                c.number.clone(),
                c.bank.clone(),
                c.direction.to_string(),
                c.due_date.to_string(),
                format_amount(c.amount, &c.currency, currencies),
                c.status.to_string(),
            ]
        })
        .collect();

    render_table(
        &["ID", "No", "Banka", "Yön", "Vade", "Tutar", "Durum"],
        &rows,
        &[5],
    )
}

pub fn format_cash_account_list(summaries: &[CashAccountSummary], currencies: &CurrencyTable) -> String {
    if summaries.is_empty() {
        return "Kasa hesabı bulunamadı.".to_string();
    }

    let rows: Vec<Vec<String>> = summaries
        .iter()
        .map(|s| {
            vec![
                s.account.id.to_string(),
                s.account.name.clone(),
                s.account.currency.clone(),
                format_amount(s.balance, &s.account.currency, currencies),
                if s.account.archived { "Arşiv".into() } else { String::new() },
            ]
        })
        .collect();

    render_table(&["ID", "Ad", "Birim", "Bakiye", ""], &rows, &[3])
}

pub fn format_cash_transaction_list(
    transactions: &[CashTransaction],
    currencies: &CurrencyTable,
) -> String {
    if transactions.is_empty() {
        return "Kasa hareketi bulunamadı.".to_string();
    }

    let rows: Vec<Vec<String>> = transactions
        .iter()
        .map(|t| {
            vec![
                t.id.to_string(),
                t.date.to_string(),
                t.kind.to_string(),
                truncate(&t.description, 30),
                format_amount(t.signed_amount(), &t.currency, currencies),
            ]
        })
        .collect();

    render_table(&["ID", "Tarih", "Tür", "Açıklama", "Tutar"], &rows, &[4])
}

pub fn format_project_list(projects: &[Project], currencies: &CurrencyTable) -> String {
    if projects.is_empty() {
        return "Proje bulunamadı.".to_string();
    }

    let rows: Vec<Vec<String>> = projects
        .iter()
        .map(|p| {
            vec![
                p.id.to_string(),
                truncate(&p.name, PARTY_WIDTH),
                match p.end_date {
                    Some(end) => format!("{} - {}", p.start_date, end),
                    None => format!("{} -", p.start_date),
                },
                format!("{} %{}", format_progress_bar(p.progress as f64, 10), p.progress),
                format_amount(p.budget, &p.currency, currencies),
                p.status.to_string(),
            ]
        })
        .collect();

    render_table(
        &["ID", "Ad", "Süre", "İlerleme", "Bütçe", "Durum"],
        &rows,
        &[4],
    )
}

pub fn format_contract_list(contracts: &[Contract], currencies: &CurrencyTable) -> String {
    if contracts.is_empty() {
        return "Sözleşme bulunamadı.".to_string();
    }

    let rows: Vec<Vec<String>> = contracts
        .iter()
        .map(|c| {
            vec![
                c.id.to_string(),
                truncate(&c.title, PARTY_WIDTH),
                truncate(&c.party, PARTY_WIDTH),
                c.kind.to_string(),
                format_amount(c.amount, &c.currency, currencies),
                c.status.to_string(),
            ]
        })
        .collect();

    render_table(
        &["ID", "Başlık", "Taraf", "Tür", "Tutar", "Durum"],
        &rows,
        &[4],
    )
}

pub fn format_installment_list(installments: &[Installment], currencies: &CurrencyTable) -> String {
    if installments.is_empty() {
        return "Taksit bulunamadı.".to_string();
    }

    let rows: Vec<Vec<String>> = installments
        .iter()
        .map(|i| {
            vec![
                i.id.to_string(),
                i.sequence.to_string(),
                i.due_date.to_string(),
                format_amount(i.amount, &i.currency, currencies),
                i.paid_date.map(|d| d.to_string()).unwrap_or_default(),
            ]
        })
        .collect();

    render_table(&["ID", "Sıra", "Vade", "Tutar", "Ödeme"], &rows, &[1, 3])
}

pub fn format_payroll_list(entries: &[PayrollEntry], currencies: &CurrencyTable) -> String {
    if entries.is_empty() {
        return "Bordro kaydı bulunamadı.".to_string();
    }

    let rows: Vec<Vec<String>> = entries
        .iter()
        .map(|e| {
            vec![
                e.id.to_string(),
                e.period.to_string(),
                truncate(&e.employee, PARTY_WIDTH),
                format_amount(e.gross, &e.currency, currencies),
                format_amount(e.net, &e.currency, currencies),
                e.paid_date.map(|d| d.to_string()).unwrap_or_default(),
            ]
        })
        .collect();

    render_table(
        &["ID", "Dönem", "Çalışan", "Brüt", "Net", "Ödeme"],
        &rows,
        &[3, 4],
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{InvoiceKind, Money};
    use chrono::NaiveDate;

    #[test]
    fn test_empty_lists() {
        let table = CurrencyTable::default();
        assert_eq!(format_invoice_list(&[], &table), "Fatura bulunamadı.");
        assert_eq!(format_payroll_list(&[], &table), "Bordro kaydı bulunamadı.");
    }

    #[test]
    fn test_invoice_table_alignment() {
        let table = CurrencyTable::default();
        let date = NaiveDate::from_ymd_opt(2024, 7, 10).unwrap();
        let invoices = vec![
            Invoice::new("F-1", "Ayşe", InvoiceKind::Sales, date, Money::from_major(5000), 18, "TRY"),
            Invoice::new("F-22", "Demir AŞ", InvoiceKind::Purchase, date, Money::from_major(10), 0, "USD"),
        ];

        let output = format_invoice_list(&invoices, &table);
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("ID"));
        assert!(lines[2].contains("₺5.900,00"));
        assert!(lines[3].contains("$10,00"));
        // amounts are right-aligned in the same column
        let end_a = lines[2].find("₺5.900,00").unwrap() + "₺5.900,00".len();
        let end_b = lines[3].find("$10,00").unwrap() + "$10,00".len();
        assert_eq!(
            lines[2][..end_a].chars().count(),
            lines[3][..end_b].chars().count()
        );
    }
}
