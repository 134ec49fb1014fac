//! Error types for household domain validation and parsing.

use super::{ChoreId, TemplateKind};
use thiserror::Error;

/// Errors returned while constructing or mutating domain records.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DomainError {
    /// Instantiation was given neither a template nor explicit fields.
    #[error("record creation requires a template or explicit fields")]
    MissingSeed,

    /// The merged seed carries no record name.
    #[error("record creation requires a name")]
    MissingName,

    /// The merged seed names no owning person.
    #[error("record creation requires a person")]
    MissingPerson,

    /// The named person does not exist.
    #[error("unknown person: {0}")]
    UnknownPerson(String),

    /// A stored template has a different kind than the record being created.
    #[error("template kind mismatch: expected {expected}, found {found}")]
    TemplateKindMismatch {
        /// Kind required by the creation path.
        expected: TemplateKind,
        /// Kind recorded on the stored template.
        found: TemplateKind,
    },

    /// A stored template payload does not parse as a seed of its kind.
    #[error("malformed template payload: {0}")]
    MalformedTemplate(String),

    /// The task index does not resolve within the chore's task sequence.
    #[error("chore {chore_id} has no task at index {index}")]
    TaskNotFound {
        /// Owning chore identifier.
        chore_id: ChoreId,
        /// Requested task index.
        index: usize,
    },
}

/// Error returned while parsing action names at the boundary.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown action: {0}")]
pub struct ParseActionError(pub String);

/// Error returned while parsing template kinds from persistence.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown template kind: {0}")]
pub struct ParseTemplateKindError(pub String);
