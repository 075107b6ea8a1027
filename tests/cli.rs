//! End-to-end tests for the `kasa` binary

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn kasa(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("kasa").unwrap();
    cmd.env("KASA_DATA_DIR", dir.path()).env_remove("RUST_LOG");
    cmd
}

fn demo_ledger() -> TempDir {
    let dir = TempDir::new().unwrap();
    kasa(&dir).args(["init", "--demo"]).assert().success();
    dir
}

#[test]
fn words_spells_whole_amounts() {
    let dir = TempDir::new().unwrap();
    kasa(&dir)
        .args(["words", "21000"])
        .assert()
        .success()
        .stdout("yirmibin\n");
}

#[test]
fn words_with_currency_prints_receipt_phrase() {
    let dir = TempDir::new().unwrap();
    kasa(&dir)
        .args(["words", "5.900,50", "--currency", "try"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "yalnız beşbindokuzyüz Türk Lirası elli kuruş",
        ));
}

#[test]
fn words_rejects_decimals_without_currency() {
    let dir = TempDir::new().unwrap();
    kasa(&dir).args(["words", "12,50"]).assert().failure();
}

#[test]
fn init_writes_settings() {
    let dir = TempDir::new().unwrap();
    kasa(&dir).arg("init").assert().success();
    assert!(dir.path().join("config.json").exists());
}

#[test]
fn invoices_report_totals_per_currency() {
    let dir = demo_ledger();
    kasa(&dir)
        .args(["report", "invoices", "--start", "2024-07-01", "--end", "2024-07-31"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Toplam Fatura"))
        .stdout(predicate::str::contains("₺5.900,00"))
        .stdout(predicate::str::contains("₺17.700,00"));
}

#[test]
fn cash_report_for_a_period() {
    let dir = demo_ledger();
    kasa(&dir)
        .args(["report", "cash", "--period", "2024-07"])
        .assert()
        .success()
        .stdout(predicate::str::contains("₺100.000,00"))
        .stdout(predicate::str::contains("₺7.500,00"));
}

#[test]
fn report_outside_the_data_has_no_currency_lines() {
    let dir = demo_ledger();
    kasa(&dir)
        .args(["report", "invoices", "--period", "2023-01"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Para birimi hareketi yok"));
}

#[test]
fn report_writes_csv() {
    let dir = demo_ledger();
    let out = dir.path().join("faturalar.csv");
    kasa(&dir)
        .args(["report", "invoices", "--period", "2024-07", "--output"])
        .arg(&out)
        .assert()
        .success();

    let csv = std::fs::read_to_string(&out).unwrap();
    assert!(csv.starts_with("section,label,currency,value,income,expense"));
    assert!(csv.contains("stat,Toplam Fatura,,2,,"));
    assert!(csv.contains("currency,TRY,TRY,-11800.00,5900.00,17700.00"));
}

#[test]
fn report_writes_json() {
    let dir = demo_ledger();
    let out = dir.path().join("kasa.json");
    kasa(&dir)
        .args(["report", "cash", "--period", "2024-07", "--output"])
        .arg(&out)
        .assert()
        .success();

    let json: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&out).unwrap()).unwrap();
    assert_eq!(json["record_count"], 2);
}

#[test]
fn unknown_report_tab_fails() {
    let dir = demo_ledger();
    kasa(&dir)
        .args(["report", "budgets"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown report"));
}

#[test]
fn period_conflicts_with_start() {
    let dir = demo_ledger();
    kasa(&dir)
        .args(["report", "cash", "--period", "2024-07", "--start", "2024-07-01"])
        .assert()
        .failure();
}

#[test]
fn duplicate_invoice_number_is_rejected() {
    let dir = TempDir::new().unwrap();
    kasa(&dir).arg("init").assert().success();

    let add = ["invoice", "add", "SF-1", "Ayşe Kaya", "1000", "--date", "2024-07-10"];
    kasa(&dir).args(add).assert().success();
    kasa(&dir).args(add).assert().failure();

    kasa(&dir)
        .args(["invoice", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("SF-1"));
}

#[test]
fn cash_balance_after_transactions() {
    let dir = TempDir::new().unwrap();
    kasa(&dir).arg("init").assert().success();

    kasa(&dir)
        .args(["cash", "account-add", "Şantiye", "--opening", "1000"])
        .assert()
        .success();
    kasa(&dir)
        .args(["cash", "add", "Şantiye", "income", "500", "Hurda satışı", "--date", "2024-07-02"])
        .assert()
        .success();
    kasa(&dir)
        .args(["cash", "add", "şantiye", "gider", "200", "Yemek", "--date", "2024-07-03"])
        .assert()
        .success();

    kasa(&dir)
        .args(["cash", "balance", "Şantiye"])
        .assert()
        .success()
        .stdout(predicate::str::contains("₺1.300,00"));
}

#[test]
fn export_json_to_stdout() {
    let dir = demo_ledger();
    let output = kasa(&dir).args(["export", "json"]).output().unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["schema_version"], "1.0.0");
    assert_eq!(json["invoices"].as_array().unwrap().len(), 2);
}

#[test]
fn changes_are_audited() {
    let dir = demo_ledger();
    kasa(&dir)
        .args(["audit", "-n", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("CREATE"));
}

#[test]
fn project_without_end_date_is_listed() {
    let dir = TempDir::new().unwrap();
    kasa(&dir).arg("init").assert().success();
    kasa(&dir)
        .args(["project", "add", "Çamlık Evleri", "2024-03-01", "--budget", "250000"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Proje oluşturuldu: Çamlık Evleri"));
    kasa(&dir)
        .args(["project", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2024-03-01 -"));
}
