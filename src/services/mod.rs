//! Service layer for Kasa
//!
//! Services validate input, write through the repositories, save the
//! affected file and append an audit entry. Reports only read, through
//! [`ReportService`].

pub mod cash;
pub mod check;
pub mod contract;
pub mod invoice;
pub mod payroll;
pub mod project;
pub mod report;

pub use cash::{CashAccountSummary, CashService};
pub use check::CheckService;
pub use contract::ContractService;
pub use invoice::InvoiceService;
pub use payroll::PayrollService;
pub use project::ProjectService;
pub use report::ReportService;

use crate::error::{KasaError, KasaResult};
use crate::storage::{Entity, Repository, Storage};

/// Store a new entity, save its file and audit the creation
fn insert<E: Entity>(storage: &Storage, repo: &Repository<E>, item: E) -> KasaResult<E> {
    repo.upsert(item.clone())?;
    repo.save()?;
    storage.log_create(&item)?;
    Ok(item)
}

/// Replace an existing entity, save its file and audit the change
fn replace<E: Entity>(storage: &Storage, repo: &Repository<E>, item: E) -> KasaResult<E> {
    let before = repo
        .get(item.id())?
        .ok_or_else(|| KasaError::not_found(E::KIND, item.id().to_string()))?;

    repo.upsert(item.clone())?;
    repo.save()?;
    storage.log_update(&before, &item)?;
    Ok(item)
}

/// Delete an entity, save its file and audit the removal
fn remove<E: Entity>(storage: &Storage, repo: &Repository<E>, id: E::Id) -> KasaResult<E> {
    let existing = repo
        .get(id)?
        .ok_or_else(|| KasaError::not_found(E::KIND, id.to_string()))?;

    repo.delete(id)?;
    repo.save()?;
    storage.log_delete(&existing)?;
    Ok(existing)
}

/// Map a model validation error into a service error
fn invalid(err: impl std::fmt::Display) -> KasaError {
    KasaError::Validation(err.to_string())
}

#[cfg(test)]
pub(crate) mod test_support {
    use crate::config::paths::KasaPaths;
    use crate::storage::Storage;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    pub fn storage() -> (Storage, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let paths = KasaPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths).unwrap();
        (storage, temp_dir)
    }

    pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }
}
