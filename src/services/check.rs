//! Check service

use chrono::Utc;

use super::{insert, invalid, remove, replace};
use crate::error::{KasaError, KasaResult};
use crate::models::{Check, CheckDirection, CheckId, CheckStatus};
use crate::storage::Storage;

pub struct CheckService<'a> {
    storage: &'a Storage,
}

impl<'a> CheckService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    pub fn create(&self, check: Check) -> KasaResult<Check> {
        check.validate().map_err(invalid)?;

        let taken = self.storage.checks.filter(|c| {
            c.bank.eq_ignore_ascii_case(&check.bank) && c.number.trim() == check.number.trim()
        })?;
        if !taken.is_empty() {
            return Err(KasaError::duplicate(
                "Check",
                format!("{} {}", check.bank, check.number),
            ));
        }

        insert(self.storage, &self.storage.checks, check)
    }

    pub fn update(&self, mut check: Check) -> KasaResult<Check> {
        check.updated_at = Utc::now();
        check.validate().map_err(invalid)?;
        replace(self.storage, &self.storage.checks, check)
    }

    pub fn delete(&self, id: CheckId) -> KasaResult<Check> {
        remove(self.storage, &self.storage.checks, id)
    }

    pub fn get(&self, id: CheckId) -> KasaResult<Option<Check>> {
        self.storage.checks.get(id)
    }

    pub fn find(&self, identifier: &str) -> KasaResult<Check> {
        self.storage.checks.resolve(identifier)
    }

    pub fn list(
        &self,
        direction: Option<CheckDirection>,
        status: Option<CheckStatus>,
    ) -> KasaResult<Vec<Check>> {
        self.storage.checks.filter(|c| {
            direction.map_or(true, |d| c.direction == d) && status.map_or(true, |s| c.status == s)
        })
    }

    /// Move a check to a new status
    ///
    /// Only checks still in the portfolio or out for collection can move;
    /// cleared, endorsed and bounced checks are final.
    pub fn set_status(&self, id: CheckId, status: CheckStatus) -> KasaResult<Check> {
        let mut check = self
            .get(id)?
            .ok_or_else(|| KasaError::not_found("Check", id.to_string()))?;

        if check.status == status {
            return Ok(check);
        }
        if !check.status.is_open() {
            return Err(KasaError::Validation(format!(
                "Check {} is already {}",
                check.number, check.status
            )));
        }

        check.set_status(status);
        replace(self.storage, &self.storage.checks, check)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use crate::services::test_support::{date, storage};

    fn received(number: &str) -> Check {
        Check::new(
            number,
            "Ziraat",
            "Ali Veli",
            CheckDirection::Received,
            Money::from_major(25_000),
            "TRY",
            date(2024, 7, 1),
            date(2024, 9, 1),
        )
    }

    #[test]
    fn test_create_and_filter() {
        let (storage, _temp) = storage();
        let service = CheckService::new(&storage);
        service.create(received("0001")).unwrap();

        assert_eq!(service.list(Some(CheckDirection::Received), None).unwrap().len(), 1);
        assert!(service.list(Some(CheckDirection::Issued), None).unwrap().is_empty());
        assert_eq!(service.list(None, Some(CheckStatus::Portfolio)).unwrap().len(), 1);
    }

    #[test]
    fn test_same_number_same_bank_is_duplicate() {
        let (storage, _temp) = storage();
        let service = CheckService::new(&storage);
        service.create(received("0001")).unwrap();

        assert!(matches!(
            service.create(received("0001")).unwrap_err(),
            KasaError::Duplicate { .. }
        ));
    }

    #[test]
    fn test_status_flow() {
        let (storage, _temp) = storage();
        let service = CheckService::new(&storage);
        let check = service.create(received("0001")).unwrap();

        service.set_status(check.id, CheckStatus::Deposited).unwrap();
        let cleared = service.set_status(check.id, CheckStatus::Cleared).unwrap();
        assert_eq!(cleared.status, CheckStatus::Cleared);

        let err = service.set_status(check.id, CheckStatus::Bounced).unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_set_status_unknown_check() {
        let (storage, _temp) = storage();
        let service = CheckService::new(&storage);
        assert!(service.set_status(CheckId::new(), CheckStatus::Cleared).unwrap_err().is_not_found());
    }
}
