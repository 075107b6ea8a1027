//! Contract and installment service

use chrono::{Months, NaiveDate, Utc};

use super::{insert, invalid, remove, replace};
use crate::error::{KasaError, KasaResult};
use crate::models::{Contract, ContractId, ContractStatus, Installment, InstallmentId};
use crate::storage::Storage;

/// Longest installment plan: thirty years of monthly payments
pub const MAX_INSTALLMENTS: u32 = 360;

pub struct ContractService<'a> {
    storage: &'a Storage,
}

impl<'a> ContractService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    pub fn create(&self, contract: Contract) -> KasaResult<Contract> {
        contract.validate().map_err(invalid)?;

        if let Some(project_id) = contract.project_id {
            if self.storage.projects.get(project_id)?.is_none() {
                return Err(KasaError::not_found("Project", project_id.to_string()));
            }
        }

        insert(self.storage, &self.storage.contracts, contract)
    }

    pub fn update(&self, mut contract: Contract) -> KasaResult<Contract> {
        contract.updated_at = Utc::now();
        contract.validate().map_err(invalid)?;
        replace(self.storage, &self.storage.contracts, contract)
    }

    /// Delete a contract together with its installments
    pub fn delete(&self, id: ContractId) -> KasaResult<Contract> {
        for installment in self.installments(id)? {
            remove(self.storage, &self.storage.installments, installment.id)?;
        }
        remove(self.storage, &self.storage.contracts, id)
    }

    pub fn get(&self, id: ContractId) -> KasaResult<Option<Contract>> {
        self.storage.contracts.get(id)
    }

    pub fn find(&self, identifier: &str) -> KasaResult<Contract> {
        self.storage.contracts.resolve(identifier)
    }

    pub fn list(&self, status: Option<ContractStatus>) -> KasaResult<Vec<Contract>> {
        self.storage
            .contracts
            .filter(|c| status.map_or(true, |s| c.status == s))
    }

    pub fn set_status(&self, id: ContractId, status: ContractStatus) -> KasaResult<Contract> {
        let mut contract = self
            .get(id)?
            .ok_or_else(|| KasaError::not_found("Contract", id.to_string()))?;
        contract.status = status;
        self.update(contract)
    }

    /// Split the contract amount into `count` monthly installments
    ///
    /// The first one is due on `first_due`, the rest on the same day of each
    /// following month (clamped to the month's last day). The remainder of the
    /// division goes to the last installment, so the installments always sum
    /// to the contract amount.
    pub fn generate_installments(
        &self,
        id: ContractId,
        count: u32,
        first_due: NaiveDate,
    ) -> KasaResult<Vec<Installment>> {
        if count == 0 {
            return Err(KasaError::Validation(
                "Installment count must be at least 1".into(),
            ));
        }
        if count > MAX_INSTALLMENTS {
            return Err(KasaError::Validation(format!(
                "Installment count must be at most {}",
                MAX_INSTALLMENTS
            )));
        }

        let contract = self
            .get(id)?
            .ok_or_else(|| KasaError::not_found("Contract", id.to_string()))?;
        if !self.installments(id)?.is_empty() {
            return Err(KasaError::Validation(format!(
                "Contract '{}' already has installments",
                contract.title
            )));
        }

        let mut created = Vec::with_capacity(count as usize);
        for (i, amount) in contract.amount.split(count).into_iter().enumerate() {
            let due = first_due
                .checked_add_months(Months::new(i as u32))
                .ok_or_else(|| KasaError::Validation("Installment due date out of range".into()))?;
            let installment = Installment::new(&contract, i as u32 + 1, due, amount);
            self.storage.installments.upsert(installment.clone())?;
            created.push(installment);
        }
        self.storage.installments.save()?;

        for installment in &created {
            self.storage.log_create(installment)?;
        }

        Ok(created)
    }

    /// Installments of a contract in sequence order
    pub fn installments(&self, id: ContractId) -> KasaResult<Vec<Installment>> {
        let mut installments = self.storage.installments.filter(|i| i.contract_id == id)?;
        installments.sort_by_key(|i| i.sequence);
        Ok(installments)
    }

    pub fn find_installment(&self, identifier: &str) -> KasaResult<Installment> {
        self.storage.installments.resolve(identifier)
    }

    pub fn mark_installment_paid(&self, id: InstallmentId, paid_on: NaiveDate) -> KasaResult<Installment> {
        let mut installment = self
            .storage
            .installments
            .get(id)?
            .ok_or_else(|| KasaError::not_found("Installment", id.to_string()))?;

        if installment.is_paid() {
            return Err(KasaError::Validation(format!(
                "Installment {} is already paid",
                installment.sequence
            )));
        }

        installment.mark_paid(paid_on);
        replace(self.storage, &self.storage.installments, installment)
    }
}
