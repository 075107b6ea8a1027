//! Storage initialization
//!
//! First-run setup and the optional demo ledger.

use chrono::NaiveDate;
use tracing::info;

use crate::config::paths::KasaPaths;
use crate::config::settings::Settings;
use crate::error::{KasaError, KasaResult};
use crate::models::{
    CashAccount, CashTransaction, Check, CheckDirection, CheckStatus, Contract, ContractKind,
    ContractStatus, Installment, Invoice, InvoiceKind, Money, PayrollEntry, PeriodKey, Project,
    RecordKind,
};

use super::repository::{Entity, Repository};
use super::Storage;

/// Create the directories and a default `config.json` when missing
///
/// Returns the settings now on disk.
pub fn initialize_storage(paths: &KasaPaths) -> KasaResult<Settings> {
    paths.ensure_directories()?;

    let settings = Settings::load_or_create(paths)?;
    if !paths.settings_file().exists() {
        settings.save(paths)?;
        info!(path = %paths.settings_file().display(), "created settings");
    }

    Ok(settings)
}

fn day(y: i32, m: u32, d: u32) -> KasaResult<NaiveDate> {
    NaiveDate::from_ymd_opt(y, m, d)
        .ok_or_else(|| KasaError::Validation(format!("Invalid date {}-{}-{}", y, m, d)))
}

fn seed<E: Entity>(storage: &Storage, repo: &Repository<E>, items: Vec<E>) -> KasaResult<()> {
    for item in items {
        repo.upsert(item.clone())?;
        storage.log_create(&item)?;
    }
    repo.save()
}

/// Fill an empty store with a small sample ledger from July 2024
pub fn seed_demo_data(storage: &Storage) -> KasaResult<()> {
    if storage.invoices.count()? > 0 || storage.projects.count()? > 0 {
        return Err(KasaError::Validation(
            "Demo data can only be added to an empty ledger".into(),
        ));
    }

    let mut tower = Project::new(
        "Güneşli Vadi Konutları",
        day(2024, 1, 15)?,
        day(2025, 6, 30)?,
        Money::from_major(12_500_000),
        "TRY",
    );
    tower.location = "Çankaya, Ankara".into();
    tower.set_progress(45);
    let mut villa = Project::new(
        "Ege Villaları",
        day(2024, 6, 1)?,
        day(2025, 9, 30)?,
        Money::from_major(800_000),
        "EUR",
    );
    villa.location = "Bodrum, Muğla".into();

    let mut sale = Invoice::new(
        "SF-2024-001",
        "Ayşe Kaya",
        InvoiceKind::Sales,
        day(2024, 7, 10)?,
        Money::from_major(5000),
        18,
        "TRY",
    );
    sale.due_date = Some(day(2024, 8, 10)?);
    sale.project_id = Some(tower.id);
    let mut purchase = Invoice::new(
        "AF-2024-014",
        "Demir Çelik AŞ",
        InvoiceKind::Purchase,
        day(2024, 7, 15)?,
        Money::from_major(15000),
        18,
        "TRY",
    );
    purchase.due_date = Some(day(2024, 7, 30)?);
    purchase.project_id = Some(tower.id);
    purchase.mark_paid();

    let mut received = Check::new(
        "4471023",
        "Ziraat Bankası",
        "Mehmet Yılmaz",
        CheckDirection::Received,
        Money::from_major(250_000),
        "TRY",
        day(2024, 7, 1)?,
        day(2024, 7, 31)?,
    );
    received.set_status(CheckStatus::Deposited);
    let issued = Check::new(
        "0098812",
        "Garanti BBVA",
        "Kasa İnşaat",
        CheckDirection::Issued,
        Money::from_major(12_000),
        "USD",
        day(2024, 7, 5)?,
        day(2024, 8, 20)?,
    );

    let cashbox = CashAccount::new("Merkez Kasa", "TRY", Money::from_major(50_000));
    let mut deposit = CashTransaction::new(
        &cashbox,
        RecordKind::Income,
        Money::from_major(100_000),
        day(2024, 7, 3)?,
        "Daire kaparo",
    );
    deposit.party = "Ayşe Kaya".into();
    deposit.project_id = Some(tower.id);
    let mut freight = CashTransaction::new(
        &cashbox,
        RecordKind::Expense,
        Money::from_major(7_500),
        day(2024, 7, 8)?,
        "Nakliye",
    );
    freight.party = "Hızlı Lojistik".into();
    freight.category = "Lojistik".into();

    let mut flat = Contract::new(
        "A Blok Daire 12 Satış",
        "Ayşe Kaya",
        ContractKind::Customer,
        Money::from_major(3_600_000),
        "TRY",
        day(2024, 7, 1)?,
        day(2025, 6, 30)?,
    );
    flat.project_id = Some(tower.id);
    flat.status = ContractStatus::Active;
    let mut frame = Contract::new(
        "Kaba İnşaat",
        "Yıldız Yapı Ltd.",
        ContractKind::Subcontractor,
        Money::from_major(1_900_000),
        "TRY",
        day(2024, 2, 1)?,
        day(2024, 12, 31)?,
    );
    frame.project_id = Some(tower.id);
    frame.status = ContractStatus::Active;

    let mut installments = Vec::new();
    let mut due = day(2024, 7, 15)?;
    for (i, amount) in flat.amount.split(12).into_iter().enumerate() {
        let mut installment = Installment::new(&flat, i as u32 + 1, due, amount);
        if i == 0 {
            installment.mark_paid(day(2024, 7, 14)?);
        }
        installments.push(installment);
        due = due
            .checked_add_months(chrono::Months::new(1))
            .ok_or_else(|| KasaError::Validation("Installment due date out of range".into()))?;
    }

    let july = PeriodKey::new(2024, 7).map_err(|e| KasaError::Validation(e.to_string()))?;
    let mut foreman = PayrollEntry::new(
        "Hasan Çelik",
        july,
        Money::from_major(42_000),
        Money::from_major(33_500),
        "TRY",
    );
    foreman.mark_paid(day(2024, 7, 31)?);
    let engineer = PayrollEntry::new(
        "Elif Arslan",
        july,
        Money::from_major(68_000),
        Money::from_major(51_000),
        "TRY",
    );

    seed(storage, &storage.projects, vec![tower, villa])?;
    seed(storage, &storage.invoices, vec![sale, purchase])?;
    seed(storage, &storage.checks, vec![received, issued])?;
    seed(storage, &storage.cash_accounts, vec![cashbox])?;
    seed(storage, &storage.cash_transactions, vec![deposit, freight])?;
    seed(storage, &storage.contracts, vec![flat, frame])?;
    seed(storage, &storage.installments, installments)?;
    seed(storage, &storage.payroll, vec![foreman, engineer])?;

    info!("seeded demo ledger");
    Ok(())
}
