//! Project service

use chrono::Utc;

use super::{insert, invalid, remove, replace};
use crate::error::{KasaError, KasaResult};
use crate::models::{Project, ProjectId, ProjectStatus};
use crate::storage::Storage;

pub struct ProjectService<'a> {
    storage: &'a Storage,
}

impl<'a> ProjectService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    pub fn create(&self, project: Project) -> KasaResult<Project> {
        project.validate().map_err(invalid)?;

        let name = project.name.trim().to_lowercase();
        if !self
            .storage
            .projects
            .filter(|p| p.name.trim().to_lowercase() == name)?
            .is_empty()
        {
            return Err(KasaError::duplicate("Project", project.name.trim()));
        }

        insert(self.storage, &self.storage.projects, project)
    }

    pub fn update(&self, mut project: Project) -> KasaResult<Project> {
        project.updated_at = Utc::now();
        project.validate().map_err(invalid)?;
        replace(self.storage, &self.storage.projects, project)
    }

    /// Delete a project no contract or invoice refers to
    pub fn delete(&self, id: ProjectId) -> KasaResult<Project> {
        let linked_contracts = self.storage.contracts.filter(|c| c.project_id == Some(id))?;
        let linked_invoices = self.storage.invoices.filter(|i| i.project_id == Some(id))?;
        if !linked_contracts.is_empty() || !linked_invoices.is_empty() {
            return Err(KasaError::Validation(format!(
                "Project is referenced by {} contract(s) and {} invoice(s)",
                linked_contracts.len(),
                linked_invoices.len()
            )));
        }

        remove(self.storage, &self.storage.projects, id)
    }

    pub fn get(&self, id: ProjectId) -> KasaResult<Option<Project>> {
        self.storage.projects.get(id)
    }

    /// Find by id or name
    pub fn find(&self, identifier: &str) -> KasaResult<Project> {
        self.storage.projects.resolve(identifier)
    }

    pub fn list(&self, status: Option<ProjectStatus>) -> KasaResult<Vec<Project>> {
        self.storage
            .projects
            .filter(|p| status.map_or(true, |s| p.status == s))
    }

    /// Set completion percentage (0-100)
    pub fn set_progress(&self, id: ProjectId, progress: u8) -> KasaResult<Project> {
        if progress > 100 {
            return Err(KasaError::Validation(format!(
                "Progress must be between 0 and 100, got {}",
                progress
            )));
        }

        let mut project = self
            .get(id)?
            .ok_or_else(|| KasaError::not_found("Project", id.to_string()))?;
        if project.status == ProjectStatus::Cancelled {
            return Err(KasaError::Validation(format!(
                "Project '{}' is cancelled",
                project.name
            )));
        }

        project.set_progress(progress);
        replace(self.storage, &self.storage.projects, project)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Contract, ContractKind, Money};
    use crate::services::test_support::{date, storage};

    fn tower() -> Project {
        Project::new("Güneşli Vadi", date(2024, 1, 1), date(2025, 12, 31), Money::from_major(2_000_000), "TRY")
    }

    #[test]
    fn test_progress_updates_status() {
        let (storage, _temp) = storage();
        let service = ProjectService::new(&storage);
        let project = service.create(tower()).unwrap();

        let active = service.set_progress(project.id, 35).unwrap();
        assert_eq!(active.status, ProjectStatus::Active);

        let done = service.set_progress(project.id, 100).unwrap();
        assert_eq!(done.status, ProjectStatus::Completed);
        assert_eq!(service.list(Some(ProjectStatus::Completed)).unwrap().len(), 1);
    }

    #[test]
    fn test_progress_out_of_range() {
        let (storage, _temp) = storage();
        let service = ProjectService::new(&storage);
        let project = service.create(tower()).unwrap();

        assert!(service.set_progress(project.id, 101).unwrap_err().is_validation());
        assert_eq!(service.get(project.id).unwrap().unwrap().progress, 0);
    }

    #[test]
    fn test_find_by_name() {
        let (storage, _temp) = storage();
        let service = ProjectService::new(&storage);
        let project = service.create(tower()).unwrap();
        assert_eq!(service.find("güneşli vadi").unwrap().id, project.id);
    }

    #[test]
    fn test_linked_project_cannot_be_deleted() {
        let (storage, _temp) = storage();
        let service = ProjectService::new(&storage);
        let project = service.create(tower()).unwrap();

        let mut contract = Contract::new(
            "Kaba inşaat", "Yıldız Yapı", ContractKind::Subcontractor,
            Money::from_major(500_000), "TRY", date(2024, 2, 1), date(2024, 11, 30),
        );
        contract.project_id = Some(project.id);
        storage.contracts.upsert(contract).unwrap();

        assert!(service.delete(project.id).unwrap_err().is_validation());
    }
}
