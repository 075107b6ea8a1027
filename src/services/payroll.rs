//! Payroll service

use chrono::NaiveDate;

use super::{insert, invalid, remove, replace};
use crate::error::{KasaError, KasaResult};
use crate::models::{PayrollEntry, PayrollId, PeriodKey};
use crate::storage::Storage;

pub struct PayrollService<'a> {
    storage: &'a Storage,
}

impl<'a> PayrollService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Add an entry; one entry per employee and period
    pub fn create(&self, entry: PayrollEntry) -> KasaResult<PayrollEntry> {
        entry.validate().map_err(invalid)?;

        let employee = entry.employee.trim().to_lowercase();
        let existing = self.storage.payroll.filter(|e| {
            e.period == entry.period && e.employee.trim().to_lowercase() == employee
        })?;
        if !existing.is_empty() {
            return Err(KasaError::duplicate(
                "Payroll entry",
                format!("{} {}", entry.employee.trim(), entry.period),
            ));
        }

        insert(self.storage, &self.storage.payroll, entry)
    }

    pub fn update(&self, entry: PayrollEntry) -> KasaResult<PayrollEntry> {
        entry.validate().map_err(invalid)?;
        replace(self.storage, &self.storage.payroll, entry)
    }

    pub fn delete(&self, id: PayrollId) -> KasaResult<PayrollEntry> {
        remove(self.storage, &self.storage.payroll, id)
    }

    pub fn get(&self, id: PayrollId) -> KasaResult<Option<PayrollEntry>> {
        self.storage.payroll.get(id)
    }

    pub fn find(&self, identifier: &str) -> KasaResult<PayrollEntry> {
        self.storage.payroll.resolve(identifier)
    }

    pub fn list(&self, period: Option<PeriodKey>) -> KasaResult<Vec<PayrollEntry>> {
        self.storage
            .payroll
            .filter(|e| period.map_or(true, |p| e.period == p))
    }

    pub fn mark_paid(&self, id: PayrollId, paid_on: NaiveDate) -> KasaResult<PayrollEntry> {
        let mut entry = self
            .get(id)?
            .ok_or_else(|| KasaError::not_found("Payroll entry", id.to_string()))?;

        if entry.is_paid() {
            return Err(KasaError::Validation(format!(
                "{} is already paid for {}",
                entry.employee, entry.period
            )));
        }

        entry.mark_paid(paid_on);
        replace(self.storage, &self.storage.payroll, entry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use crate::services::test_support::{date, storage};

    fn july(employee: &str) -> PayrollEntry {
        PayrollEntry::new(
            employee,
            PeriodKey::new(2024, 7).unwrap(),
            Money::from_major(30_000),
            Money::from_major(24_000),
            "TRY",
        )
    }

    #[test]
    fn test_one_entry_per_employee_and_period() {
        let (storage, _temp) = storage();
        let service = PayrollService::new(&storage);
        service.create(july("Mehmet Usta")).unwrap();

        assert!(matches!(
            service.create(july("mehmet usta")).unwrap_err(),
            KasaError::Duplicate { .. }
        ));

        let mut august = july("Mehmet Usta");
        august.period = PeriodKey::new(2024, 8).unwrap();
        service.create(august).unwrap();
        assert_eq!(service.list(None).unwrap().len(), 2);
        assert_eq!(service.list(PeriodKey::new(2024, 8).ok()).unwrap().len(), 1);
    }

    #[test]
    fn test_net_above_gross_rejected() {
        let (storage, _temp) = storage();
        let service = PayrollService::new(&storage);
        let mut entry = july("Mehmet Usta");
        entry.net = Money::from_major(40_000);
        assert!(service.create(entry).unwrap_err().is_validation());
    }

    #[test]
    fn test_mark_paid() {
        let (storage, _temp) = storage();
        let service = PayrollService::new(&storage);
        let entry = service.create(july("Mehmet Usta")).unwrap();

        let paid = service.mark_paid(entry.id, date(2024, 7, 31)).unwrap();
        assert!(paid.is_paid());
        assert!(service.mark_paid(entry.id, date(2024, 8, 1)).unwrap_err().is_validation());
    }
}
