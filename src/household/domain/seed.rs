//! Declarative creation seeds for chores and acts.
//!
//! A seed is the merge input of record creation: a reusable template
//! fragment, an explicit field set supplied by the caller, or both. Seeds
//! also appear embedded in payloads, as the `chore` fragment of an act and
//! of an area status entry.

use serde::{Deserialize, Serialize};

use super::{ActData, ChoreData, DomainError, PersonId};

/// Declarative input for creating a chore.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChoreSeed {
    /// Owning person identifier, when already resolved.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub person_id: Option<PersonId>,
    /// Owning person name, resolved against the record store.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub person: Option<String>,
    /// Chore name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Initial status label, defaulted to `"started"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// Chore payload fragment.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<ChoreData>,
}

/// Declarative input for creating an act.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ActSeed {
    /// Owning person identifier, when already resolved.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub person_id: Option<PersonId>,
    /// Owning person name, resolved against the record store.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub person: Option<String>,
    /// Act name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Free-form judgement label, e.g. `"positive"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    /// Act payload fragment.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<ActData>,
}

/// Shallow-merges a template seed with explicit field overrides.
///
/// Explicit fields win on collision at the top level; the `data` payload
/// counts as a single top-level key and is replaced wholesale when both
/// sides carry one. Nested collision resolution below the top level is
/// deliberately not attempted.
macro_rules! merge_seeds {
    ($template:expr, $fields:expr, { $($field:ident),+ $(,)? }) => {
        match ($template, $fields) {
            (None, None) => Err(DomainError::MissingSeed),
            (Some(template), None) => Ok(template),
            (None, Some(fields)) => Ok(fields),
            (Some(template), Some(fields)) => Ok(Self {
                $($field: fields.$field.or(template.$field)),+
            }),
        }
    };
}

impl ChoreSeed {
    /// Merges an optional template fragment with optional explicit fields.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::MissingSeed`] when neither input is supplied.
    pub fn merged(template: Option<Self>, fields: Option<Self>) -> Result<Self, DomainError> {
        merge_seeds!(template, fields, { person_id, person, name, status, data })
    }
}

impl ActSeed {
    /// Merges an optional template fragment with optional explicit fields.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::MissingSeed`] when neither input is supplied.
    pub fn merged(template: Option<Self>, fields: Option<Self>) -> Result<Self, DomainError> {
        merge_seeds!(template, fields, { person_id, person, name, value, data })
    }
}
