//! Act records: point-in-time behaviour judgements.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{ActData, ActId, ActSeed, DomainError, PersonId};

/// A point-in-time behavioural judgement record for a person.
///
/// The payload may carry a `chore` seed; act creation instantiates it as a
/// companion chore for the same person before the act itself is persisted.
/// The seed stays in the stored payload for later inspection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Act {
    id: ActId,
    person_id: PersonId,
    name: String,
    value: Option<String>,
    created: DateTime<Utc>,
    data: ActData,
}

impl Act {
    /// Instantiates an act from a merged seed.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::MissingName`] when the seed carries no name.
    pub fn from_seed(
        seed: ActSeed,
        person_id: PersonId,
        now: DateTime<Utc>,
    ) -> Result<Self, DomainError> {
        let ActSeed {
            name, value, data, ..
        } = seed;
        Ok(Self {
            id: ActId::new(),
            person_id,
            name: name.ok_or(DomainError::MissingName)?,
            value,
            created: now,
            data: data.unwrap_or_default(),
        })
    }

    /// Reconstructs an act from persisted storage.
    #[must_use]
    pub const fn from_persisted(
        id: ActId,
        person_id: PersonId,
        name: String,
        value: Option<String>,
        created: DateTime<Utc>,
        data: ActData,
    ) -> Self {
        Self {
            id,
            person_id,
            name,
            value,
            created,
            data,
        }
    }

    /// Returns the act identifier.
    #[must_use]
    pub const fn id(&self) -> ActId {
        self.id
    }

    /// Returns the owning person identifier.
    #[must_use]
    pub const fn person_id(&self) -> PersonId {
        self.person_id
    }

    /// Returns the act name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the judgement label, if recorded.
    #[must_use]
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created(&self) -> DateTime<Utc> {
        self.created
    }

    /// Returns the act payload.
    #[must_use]
    pub const fn data(&self) -> &ActData {
        &self.data
    }
}
