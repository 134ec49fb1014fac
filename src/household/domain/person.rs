//! Person records: the owners of chores and acts.

use serde::{Deserialize, Serialize};

use super::{ExtraFields, PersonId};

/// A household member who owns chores and acts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Person {
    id: PersonId,
    name: String,
    email: Option<String>,
    #[serde(default)]
    data: ExtraFields,
}

impl Person {
    /// Creates a new person record.
    #[must_use]
    pub fn new(name: impl Into<String>, email: Option<String>) -> Self {
        Self {
            id: PersonId::new(),
            name: name.into(),
            email,
            data: ExtraFields::new(),
        }
    }

    /// Reconstructs a person from persisted storage.
    #[must_use]
    pub const fn from_persisted(
        id: PersonId,
        name: String,
        email: Option<String>,
        data: ExtraFields,
    ) -> Self {
        Self {
            id,
            name,
            email,
            data,
        }
    }

    /// Returns the person identifier.
    #[must_use]
    pub const fn id(&self) -> PersonId {
        self.id
    }

    /// Returns the person name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the person email, if recorded.
    #[must_use]
    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    /// Returns the opaque payload.
    #[must_use]
    pub const fn data(&self) -> &ExtraFields {
        &self.data
    }
}
