//! Audit trail of ledger writes
//!
//! Every create, update and delete performed through the services appends one
//! JSON line to `audit.log` with the entity state before and after the write.
//! Updates also carry a short summary of the top-level fields that changed.

mod entry;
mod logger;

pub use entry::{AuditEntry, EntityType, Operation};
pub use logger::AuditLogger;
