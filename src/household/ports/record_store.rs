//! Record store port for household record persistence.
//!
//! The lifecycle engines treat persistence as an external collaborator:
//! updates apply atomically and report an equality-based change count that
//! doubles as the reported result of idempotent lifecycle actions.

use crate::household::domain::{
    Act, ActId, Area, AreaId, Chore, ChoreId, Person, PersonId, Template, TemplateId,
};
use async_trait::async_trait;
use std::fmt;
use std::sync::Arc;
use thiserror::Error;
use uuid::Uuid;

/// Result type for record store operations.
pub type RecordStoreResult<T> = Result<T, RecordStoreError>;

/// Kind discriminator used in store errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordKind {
    /// Person records.
    Person,
    /// Area records.
    Area,
    /// Template records.
    Template,
    /// Chore records.
    Chore,
    /// Act records.
    Act,
}

impl RecordKind {
    /// Returns the lowercase kind label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Person => "person",
            Self::Area => "area",
            Self::Template => "template",
            Self::Chore => "chore",
            Self::Act => "act",
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors returned by record store implementations.
#[derive(Debug, Clone, Error)]
pub enum RecordStoreError {
    /// A record with the same identifier already exists.
    #[error("duplicate {kind} record: {id}")]
    Duplicate {
        /// Kind of the colliding record.
        kind: RecordKind,
        /// Colliding identifier.
        id: Uuid,
    },

    /// The record was not found.
    #[error("{kind} not found: {id}")]
    NotFound {
        /// Kind of the missing record.
        kind: RecordKind,
        /// Missing identifier.
        id: Uuid,
    },

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl RecordStoreError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}

/// Household record persistence contract.
///
/// `update_*` methods compare the incoming record against the stored one
/// and return `0` when they are equal and `1` when the write changed
/// anything, matching the idempotence-by-comparison pattern the lifecycle
/// services rely on. `delete_*` methods return the number of records
/// removed.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Stores a new person.
    ///
    /// # Errors
    ///
    /// Returns [`RecordStoreError::Duplicate`] when the identifier exists.
    async fn create_person(&self, person: &Person) -> RecordStoreResult<()>;

    /// Finds a person by identifier.
    async fn person(&self, id: PersonId) -> RecordStoreResult<Option<Person>>;

    /// Finds the first person with the given name.
    async fn person_by_name(&self, name: &str) -> RecordStoreResult<Option<Person>>;

    /// Returns all persons.
    async fn persons(&self) -> RecordStoreResult<Vec<Person>>;

    /// Persists changes to an existing person.
    ///
    /// # Errors
    ///
    /// Returns [`RecordStoreError::NotFound`] when the person does not exist.
    async fn update_person(&self, person: &Person) -> RecordStoreResult<u64>;

    /// Deletes a person.
    async fn delete_person(&self, id: PersonId) -> RecordStoreResult<u64>;

    /// Stores a new area.
    ///
    /// # Errors
    ///
    /// Returns [`RecordStoreError::Duplicate`] when the identifier exists.
    async fn create_area(&self, area: &Area) -> RecordStoreResult<()>;

    /// Finds an area by identifier.
    async fn area(&self, id: AreaId) -> RecordStoreResult<Option<Area>>;

    /// Returns all areas.
    async fn areas(&self) -> RecordStoreResult<Vec<Area>>;

    /// Persists changes to an existing area.
    ///
    /// # Errors
    ///
    /// Returns [`RecordStoreError::NotFound`] when the area does not exist.
    async fn update_area(&self, area: &Area) -> RecordStoreResult<u64>;

    /// Deletes an area.
    async fn delete_area(&self, id: AreaId) -> RecordStoreResult<u64>;

    /// Stores a new template.
    ///
    /// # Errors
    ///
    /// Returns [`RecordStoreError::Duplicate`] when the identifier exists.
    async fn create_template(&self, template: &Template) -> RecordStoreResult<()>;

    /// Finds a template by identifier.
    async fn template(&self, id: TemplateId) -> RecordStoreResult<Option<Template>>;

    /// Returns all templates.
    async fn templates(&self) -> RecordStoreResult<Vec<Template>>;

    /// Persists changes to an existing template.
    ///
    /// # Errors
    ///
    /// Returns [`RecordStoreError::NotFound`] when the template does not
    /// exist.
    async fn update_template(&self, template: &Template) -> RecordStoreResult<u64>;

    /// Deletes a template.
    async fn delete_template(&self, id: TemplateId) -> RecordStoreResult<u64>;

    /// Stores a new chore.
    ///
    /// # Errors
    ///
    /// Returns [`RecordStoreError::Duplicate`] when the identifier exists.
    async fn create_chore(&self, chore: &Chore) -> RecordStoreResult<()>;

    /// Finds a chore by identifier.
    async fn chore(&self, id: ChoreId) -> RecordStoreResult<Option<Chore>>;

    /// Returns all chores.
    async fn chores(&self) -> RecordStoreResult<Vec<Chore>>;

    /// Persists changes to an existing chore.
    ///
    /// # Errors
    ///
    /// Returns [`RecordStoreError::NotFound`] when the chore does not exist.
    async fn update_chore(&self, chore: &Chore) -> RecordStoreResult<u64>;

    /// Deletes a chore.
    async fn delete_chore(&self, id: ChoreId) -> RecordStoreResult<u64>;

    /// Stores a new act.
    ///
    /// # Errors
    ///
    /// Returns [`RecordStoreError::Duplicate`] when the identifier exists.
    async fn create_act(&self, act: &Act) -> RecordStoreResult<()>;

    /// Finds an act by identifier.
    async fn act(&self, id: ActId) -> RecordStoreResult<Option<Act>>;

    /// Returns all acts.
    async fn acts(&self) -> RecordStoreResult<Vec<Act>>;

    /// Persists changes to an existing act.
    ///
    /// # Errors
    ///
    /// Returns [`RecordStoreError::NotFound`] when the act does not exist.
    async fn update_act(&self, act: &Act) -> RecordStoreResult<u64>;

    /// Deletes an act.
    async fn delete_act(&self, id: ActId) -> RecordStoreResult<u64>;
}
