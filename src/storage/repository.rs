//! Generic JSON-backed repository
//!
//! Each entity family lives in its own file as `{"items": [...]}`. The
//! in-memory copy is a map behind a `RwLock`; `save` writes the whole file
//! atomically.

use std::cmp::Ordering;
use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;
use std::path::PathBuf;
use std::sync::RwLock;

use serde::{de::DeserializeOwned, Deserialize, Serialize};

use crate::audit::EntityType;
use crate::error::{KasaError, KasaResult};
use crate::models::{
    CashAccount, CashAccountId, CashTransaction, CashTransactionId, Check, CheckId, Contract,
    ContractId, Installment, InstallmentId, Invoice, InvoiceId, PayrollEntry, PayrollId, Project,
    ProjectId,
};

use super::file_io::{read_json, write_json_atomic};

/// A persisted ledger entity
pub trait Entity: Clone + Serialize + DeserializeOwned {
    type Id: Copy + Eq + Hash + fmt::Display;

    /// Name used in "not found" errors
    const KIND: &'static str;
    const AUDIT_TYPE: EntityType;

    fn id(&self) -> Self::Id;

    /// Whether user input (full uuid, short id, or id prefix) names this entity
    fn id_matches(&self, input: &str) -> bool;

    /// Human label for audit entries
    fn label(&self) -> String;

    /// Listing order
    fn ordering(&self, other: &Self) -> Ordering;
}

#[derive(Serialize, Deserialize)]
#[serde(bound(deserialize = "E: DeserializeOwned"))]
struct FileData<E> {
    items: Vec<E>,
}

impl<E> Default for FileData<E> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

/// Repository for one entity family
pub struct Repository<E: Entity> {
    path: PathBuf,
    data: RwLock<HashMap<E::Id, E>>,
}

impl<E: Entity> Repository<E> {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(HashMap::new()),
        }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    pub fn load(&self) -> KasaResult<()> {
        let file_data: FileData<E> = read_json(&self.path)?;

        let mut data = self
            .data
            .write()
            .map_err(|e| KasaError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        data.clear();
        for item in file_data.items {
            data.insert(item.id(), item);
        }

        Ok(())
    }

    pub fn save(&self) -> KasaResult<()> {
        let file_data = FileData {
            items: self.get_all()?,
        };
        write_json_atomic(&self.path, &file_data)
    }

    pub fn get(&self, id: E::Id) -> KasaResult<Option<E>> {
        let data = self
            .data
            .read()
            .map_err(|e| KasaError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.get(&id).cloned())
    }

    /// All items in listing order
    pub fn get_all(&self) -> KasaResult<Vec<E>> {
        let data = self
            .data
            .read()
            .map_err(|e| KasaError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut items: Vec<E> = data.values().cloned().collect();
        items.sort_by(|a, b| a.ordering(b));
        Ok(items)
    }

    /// Items matching a predicate, in listing order
    pub fn filter(&self, predicate: impl Fn(&E) -> bool) -> KasaResult<Vec<E>> {
        Ok(self.get_all()?.into_iter().filter(|e| predicate(e)).collect())
    }

    /// Look up an item from user input; ambiguous prefixes are rejected
    pub fn resolve(&self, input: &str) -> KasaResult<E> {
        let input = input.trim();
        let data = self
            .data
            .read()
            .map_err(|e| KasaError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut matches = data.values().filter(|e| e.id_matches(input));
        match (matches.next(), matches.next()) {
            (Some(item), None) => Ok(item.clone()),
            (Some(_), Some(_)) => Err(KasaError::Validation(format!(
                "Ambiguous {} id '{}'",
                E::KIND.to_lowercase(),
                input
            ))),
            (None, _) => Err(KasaError::not_found(E::KIND, input)),
        }
    }

    pub fn upsert(&self, item: E) -> KasaResult<()> {
        let mut data = self
            .data
            .write()
            .map_err(|e| KasaError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        data.insert(item.id(), item);
        Ok(())
    }

    /// Remove an item; returns whether it existed
    pub fn delete(&self, id: E::Id) -> KasaResult<bool> {
        let mut data = self
            .data
            .write()
            .map_err(|e| KasaError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        Ok(data.remove(&id).is_some())
    }

    pub fn count(&self) -> KasaResult<usize> {
        let data = self
            .data
            .read()
            .map_err(|e| KasaError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.len())
    }
}

impl Entity for Invoice {
    type Id = InvoiceId;
    const KIND: &'static str = "Invoice";
    const AUDIT_TYPE: EntityType = EntityType::Invoice;

    fn id(&self) -> InvoiceId {
        self.id
    }

    fn id_matches(&self, input: &str) -> bool {
        self.id.matches(input) || self.number == input
    }

    fn label(&self) -> String {
        self.number.clone()
    }

    fn ordering(&self, other: &Self) -> Ordering {
        self.date.cmp(&other.date).then_with(|| self.number.cmp(&other.number))
    }
}

impl Entity for Check {
    type Id = CheckId;
    const KIND: &'static str = "Check";
    const AUDIT_TYPE: EntityType = EntityType::Check;

    fn id(&self) -> CheckId {
        self.id
    }

    fn id_matches(&self, input: &str) -> bool {
        self.id.matches(input)
    }

    fn label(&self) -> String {
        format!("{} {}", self.bank, self.number)
    }

    fn ordering(&self, other: &Self) -> Ordering {
        self.due_date.cmp(&other.due_date).then_with(|| self.number.cmp(&other.number))
    }
}

impl Entity for CashAccount {
    type Id = CashAccountId;
    const KIND: &'static str = "Cash account";
    const AUDIT_TYPE: EntityType = EntityType::CashAccount;

    fn id(&self) -> CashAccountId {
        self.id
    }

    fn id_matches(&self, input: &str) -> bool {
        self.id.matches(input) || self.name.to_lowercase() == input.to_lowercase()
    }

    fn label(&self) -> String {
        self.name.clone()
    }

    fn ordering(&self, other: &Self) -> Ordering {
        self.name.cmp(&other.name)
    }
}

impl Entity for CashTransaction {
    type Id = CashTransactionId;
    const KIND: &'static str = "Cash transaction";
    const AUDIT_TYPE: EntityType = EntityType::CashTransaction;

    fn id(&self) -> CashTransactionId {
        self.id
    }

    fn id_matches(&self, input: &str) -> bool {
        self.id.matches(input)
    }

    fn label(&self) -> String {
        self.description.clone()
    }

    fn ordering(&self, other: &Self) -> Ordering {
        self.date
            .cmp(&other.date)
            .then_with(|| self.created_at.cmp(&other.created_at))
    }
}

impl Entity for Project {
    type Id = ProjectId;
    const KIND: &'static str = "Project";
    const AUDIT_TYPE: EntityType = EntityType::Project;

    fn id(&self) -> ProjectId {
        self.id
    }

    fn id_matches(&self, input: &str) -> bool {
        self.id.matches(input) || self.name.to_lowercase() == input.to_lowercase()
    }

    fn label(&self) -> String {
        self.name.clone()
    }

    fn ordering(&self, other: &Self) -> Ordering {
        self.start_date.cmp(&other.start_date).then_with(|| self.name.cmp(&other.name))
    }
}

impl Entity for Contract {
    type Id = ContractId;
    const KIND: &'static str = "Contract";
    const AUDIT_TYPE: EntityType = EntityType::Contract;

    fn id(&self) -> ContractId {
        self.id
    }

    fn id_matches(&self, input: &str) -> bool {
        self.id.matches(input)
    }

    fn label(&self) -> String {
        self.title.clone()
    }

    fn ordering(&self, other: &Self) -> Ordering {
        self.start_date.cmp(&other.start_date).then_with(|| self.title.cmp(&other.title))
    }
}

impl Entity for Installment {
    type Id = InstallmentId;
    const KIND: &'static str = "Installment";
    const AUDIT_TYPE: EntityType = EntityType::Installment;

    fn id(&self) -> InstallmentId {
        self.id
    }

    fn id_matches(&self, input: &str) -> bool {
        self.id.matches(input)
    }

    fn label(&self) -> String {
        format!("{}. taksit", self.sequence)
    }

    fn ordering(&self, other: &Self) -> Ordering {
        self.due_date
            .cmp(&other.due_date)
            .then_with(|| self.sequence.cmp(&other.sequence))
    }
}

impl Entity for PayrollEntry {
    type Id = PayrollId;
    const KIND: &'static str = "Payroll entry";
    const AUDIT_TYPE: EntityType = EntityType::Payroll;

    fn id(&self) -> PayrollId {
        self.id
    }

    fn id_matches(&self, input: &str) -> bool {
        self.id.matches(input)
    }

    fn label(&self) -> String {
        format!("{} {}", self.employee, self.period)
    }

    fn ordering(&self, other: &Self) -> Ordering {
        self.period
            .cmp(&other.period)
            .then_with(|| self.employee.cmp(&other.employee))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{InvoiceKind, Money};
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 7, d).unwrap()
    }

    fn invoice(number: &str, day: u32) -> Invoice {
        Invoice::new(number, "Ayşe", InvoiceKind::Sales, date(day), Money::from_major(100), 18, "TRY")
    }

    fn repo() -> (Repository<Invoice>, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let repo = Repository::new(temp_dir.path().join("invoices.json"));
        (repo, temp_dir)
    }

    #[test]
    fn test_save_and_load() {
        let (repo, _temp) = repo();
        let first = invoice("F-1", 10);
        repo.upsert(first.clone()).unwrap();
        repo.upsert(invoice("F-2", 15)).unwrap();
        repo.save().unwrap();

        let reloaded: Repository<Invoice> = Repository::new(repo.path().clone());
        reloaded.load().unwrap();
        assert_eq!(reloaded.count().unwrap(), 2);
        assert_eq!(reloaded.get(first.id).unwrap(), Some(first));
    }

    #[test]
    fn test_file_layout() {
        let (repo, _temp) = repo();
        repo.upsert(invoice("F-1", 10)).unwrap();
        repo.save().unwrap();

        let raw: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(repo.path()).unwrap()).unwrap();
        assert_eq!(raw["items"].as_array().unwrap().len(), 1);
        assert_eq!(raw["items"][0]["number"], "F-1");
    }

    #[test]
    fn test_get_all_is_ordered() {
        let (repo, _temp) = repo();
        repo.upsert(invoice("F-3", 20)).unwrap();
        repo.upsert(invoice("F-1", 5)).unwrap();
        repo.upsert(invoice("F-2", 12)).unwrap();

        let numbers: Vec<String> = repo.get_all().unwrap().into_iter().map(|i| i.number).collect();
        assert_eq!(numbers, vec!["F-1", "F-2", "F-3"]);
    }

    #[test]
    fn test_resolve_by_short_id_and_number() {
        let (repo, _temp) = repo();
        let inv = invoice("F-1", 10);
        repo.upsert(inv.clone()).unwrap();

        assert_eq!(repo.resolve(&inv.id.to_string()).unwrap().id, inv.id);
        assert_eq!(repo.resolve("F-1").unwrap().id, inv.id);

        let err = repo.resolve("F-404").unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_delete() {
        let (repo, _temp) = repo();
        let inv = invoice("F-1", 10);
        repo.upsert(inv.clone()).unwrap();

        assert!(repo.delete(inv.id).unwrap());
        assert!(!repo.delete(inv.id).unwrap());
        assert_eq!(repo.get(inv.id).unwrap(), None);
    }
}
