//! Orchestration services wiring the record store, clock, and domain
//! engines together.
//!
//! Each public operation reads the injected clock exactly once and threads
//! that instant through every timestamp it writes.

mod acts;
mod area_status;
mod chore_lifecycle;

pub use acts::ActService;
pub use area_status::AreaStatusService;
pub use chore_lifecycle::ChoreLifecycleService;

use crate::household::{
    domain::{DomainError, PersonId},
    ports::{RecordKind, RecordStore, RecordStoreError},
};
use thiserror::Error;
use uuid::Uuid;

/// Service-level errors for household operations.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Record store operation failed.
    #[error(transparent)]
    Store(#[from] RecordStoreError),

    /// An identifier did not resolve to a stored record.
    #[error("{kind} not found: {id}")]
    NotFound {
        /// Kind of the missing record.
        kind: RecordKind,
        /// Missing identifier.
        id: Uuid,
    },
}

/// Result type for household service operations.
pub type ServiceResult<T> = Result<T, ServiceError>;

/// Resolves the owning person of a new record.
///
/// An explicit identifier wins over a name lookup; a name that matches no
/// stored person is a validation failure, as is supplying neither.
pub(crate) async fn resolve_person<R: RecordStore>(
    store: &R,
    person_id: Option<PersonId>,
    person_name: Option<&str>,
) -> ServiceResult<PersonId> {
    if let Some(id) = person_id {
        return Ok(id);
    }
    let name = person_name.ok_or(DomainError::MissingPerson)?;
    let person = store
        .person_by_name(name)
        .await?
        .ok_or_else(|| DomainError::UnknownPerson(name.to_owned()))?;
    Ok(person.id())
}
