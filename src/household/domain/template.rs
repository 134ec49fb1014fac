//! Reusable creation templates for chores and acts.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

use super::{ActSeed, ChoreSeed, DomainError, ParseTemplateKindError, TemplateId};

/// Kind of record a template seeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TemplateKind {
    /// The template seeds chore records.
    Chore,
    /// The template seeds act records.
    Act,
}

impl TemplateKind {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Chore => "chore",
            Self::Act => "act",
        }
    }
}

impl fmt::Display for TemplateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for TemplateKind {
    type Error = ParseTemplateKindError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().to_ascii_lowercase().as_str() {
            "chore" => Ok(Self::Chore),
            "act" => Ok(Self::Act),
            _ => Err(ParseTemplateKindError(value.to_owned())),
        }
    }
}

/// A stored, declarative seed payload for creating chores or acts.
///
/// The payload is kept opaque in storage and parsed into a typed seed at
/// the point of use, so templates of either kind share one record shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Template {
    id: TemplateId,
    name: String,
    kind: TemplateKind,
    data: Value,
}

impl Template {
    /// Creates a new template record.
    #[must_use]
    pub fn new(name: impl Into<String>, kind: TemplateKind, data: Value) -> Self {
        Self {
            id: TemplateId::new(),
            name: name.into(),
            kind,
            data,
        }
    }

    /// Reconstructs a template from persisted storage.
    #[must_use]
    pub const fn from_persisted(id: TemplateId, name: String, kind: TemplateKind, data: Value) -> Self {
        Self {
            id,
            name,
            kind,
            data,
        }
    }

    /// Returns the template identifier.
    #[must_use]
    pub const fn id(&self) -> TemplateId {
        self.id
    }

    /// Returns the template name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the kind of record this template seeds.
    #[must_use]
    pub const fn kind(&self) -> TemplateKind {
        self.kind
    }

    /// Returns the opaque seed payload.
    #[must_use]
    pub const fn data(&self) -> &Value {
        &self.data
    }

    /// Parses the payload as a chore seed.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::TemplateKindMismatch`] for an act template and
    /// [`DomainError::MalformedTemplate`] when the payload does not parse.
    pub fn chore_seed(&self) -> Result<ChoreSeed, DomainError> {
        self.expect_kind(TemplateKind::Chore)?;
        serde_json::from_value(self.data.clone())
            .map_err(|err| DomainError::MalformedTemplate(err.to_string()))
    }

    /// Parses the payload as an act seed.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::TemplateKindMismatch`] for a chore template and
    /// [`DomainError::MalformedTemplate`] when the payload does not parse.
    pub fn act_seed(&self) -> Result<ActSeed, DomainError> {
        self.expect_kind(TemplateKind::Act)?;
        serde_json::from_value(self.data.clone())
            .map_err(|err| DomainError::MalformedTemplate(err.to_string()))
    }

    fn expect_kind(&self, expected: TemplateKind) -> Result<(), DomainError> {
        if self.kind == expected {
            Ok(())
        } else {
            Err(DomainError::TemplateKindMismatch {
                expected,
                found: self.kind,
            })
        }
    }
}
