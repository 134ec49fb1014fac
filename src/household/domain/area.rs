//! Area records and the status transition engine.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{AreaData, AreaId, ChoreSeed};

/// Outcome of requesting an area status change.
#[derive(Debug, Clone, PartialEq)]
pub enum StatusTransition {
    /// The request matched no table entry, or matched the current status.
    Unchanged,
    /// The status changed; the matched entry's chore seed, when present,
    /// must be instantiated for the person it names.
    Applied {
        /// Chore seed configured on the matched status entry.
        chore: Option<ChoreSeed>,
    },
}

/// A physical area people are attached to, carrying a configured status
/// table that can spawn chores on transition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Area {
    id: AreaId,
    name: String,
    status: Option<String>,
    updated: DateTime<Utc>,
    data: AreaData,
}

impl Area {
    /// Creates a new area record.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        status: Option<String>,
        data: AreaData,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id: AreaId::new(),
            name: name.into(),
            status,
            updated: now,
            data,
        }
    }

    /// Reconstructs an area from persisted storage.
    #[must_use]
    pub const fn from_persisted(
        id: AreaId,
        name: String,
        status: Option<String>,
        updated: DateTime<Utc>,
        data: AreaData,
    ) -> Self {
        Self {
            id,
            name,
            status,
            updated,
            data,
        }
    }

    /// Returns the area identifier.
    #[must_use]
    pub const fn id(&self) -> AreaId {
        self.id
    }

    /// Returns the area name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the current status label.
    #[must_use]
    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    /// Returns the latest transition timestamp.
    #[must_use]
    pub const fn updated(&self) -> DateTime<Utc> {
        self.updated
    }

    /// Returns the area payload.
    #[must_use]
    pub const fn data(&self) -> &AreaData {
        &self.data
    }

    /// Applies a requested status against the configured status table.
    ///
    /// An unknown status is treated identically to requesting the current
    /// status: nothing is touched. On a distinct match (first entry wins
    /// when the table holds duplicate values) the status and `updated`
    /// timestamp change and the matched entry's chore seed is handed back
    /// for instantiation.
    pub fn apply_status(&mut self, requested: &str, now: DateTime<Utc>) -> StatusTransition {
        let Some(entry) = self
            .data
            .statuses
            .iter()
            .find(|entry| entry.value == requested)
        else {
            return StatusTransition::Unchanged;
        };
        if self.status.as_deref() == Some(requested) {
            return StatusTransition::Unchanged;
        }

        let chore = entry.chore.clone();
        self.status = Some(requested.to_owned());
        self.updated = now;
        StatusTransition::Applied { chore }
    }
}
