//! Schema-flexible record payloads.
//!
//! Persisted records carry a strongly-typed payload with the keys the
//! lifecycle engines recognise, plus a flattened `extra` map that preserves
//! any other keys a caller supplies.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::ChoreSeed;

/// Opaque payload map carried by records without recognised keys.
pub type ExtraFields = Map<String, Value>;

fn is_false(value: &bool) -> bool {
    !*value
}

/// One step within a chore's task sequence.
///
/// The identifier is the task's position in the sequence; positions are
/// dense, start at zero, and are never re-issued after instantiation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TaskRecord {
    /// Positional task identifier.
    #[serde(default)]
    pub id: usize,
    /// Human-readable task description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Instant the task was started.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<DateTime<Utc>>,
    /// Instant of the most recent notification-worthy change.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notified: Option<DateTime<Utc>>,
    /// Instant the task ended, when it has.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<DateTime<Utc>>,
    /// Whether the task is paused. Absent serialises as `false`.
    #[serde(default, skip_serializing_if = "is_false")]
    pub paused: bool,
    /// Whether the task was skipped rather than completed.
    #[serde(default, skip_serializing_if = "is_false")]
    pub skipped: bool,
    /// Unrecognised keys preserved verbatim.
    #[serde(flatten)]
    pub extra: ExtraFields,
}

impl TaskRecord {
    /// Returns whether the task has started but not ended.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.start.is_some() && self.end.is_none()
    }

    /// Returns whether the task has not started.
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        self.start.is_none()
    }

    /// Returns whether the task has ended.
    #[must_use]
    pub const fn is_ended(&self) -> bool {
        self.end.is_some()
    }
}

/// Payload of a chore record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChoreData {
    /// Human-readable chore description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Node the chore is announced on.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub node: Option<String>,
    /// Speech language tag, defaulted at instantiation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    /// Instant the chore was started.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<DateTime<Utc>>,
    /// Instant of the most recent notification-worthy change.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notified: Option<DateTime<Utc>>,
    /// Instant of the most recent payload mutation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated: Option<DateTime<Utc>>,
    /// Instant the chore ended, when it has.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<DateTime<Utc>>,
    /// Whether the chore is paused.
    #[serde(default, skip_serializing_if = "is_false")]
    pub paused: bool,
    /// Whether the chore was skipped rather than completed.
    #[serde(default, skip_serializing_if = "is_false")]
    pub skipped: bool,
    /// Ordered task sequence. Absent means the chore was created without
    /// tasks, which is distinct from an empty sequence.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tasks: Option<Vec<TaskRecord>>,
    /// Unrecognised keys preserved verbatim.
    #[serde(flatten)]
    pub extra: ExtraFields,
}

/// Payload of an act record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ActData {
    /// Companion chore seed, instantiated as a side effect of act creation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chore: Option<ChoreSeed>,
    /// Unrecognised keys preserved verbatim.
    #[serde(flatten)]
    pub extra: ExtraFields,
}

/// One entry in an area's configured status table.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StatusEntry {
    /// Status label this entry responds to.
    pub value: String,
    /// Chore seed instantiated when the area transitions to this status.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chore: Option<ChoreSeed>,
    /// Unrecognised keys preserved verbatim.
    #[serde(flatten)]
    pub extra: ExtraFields,
}

/// Payload of an area record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AreaData {
    /// Status table consulted by the status transition engine.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub statuses: Vec<StatusEntry>,
    /// Unrecognised keys preserved verbatim.
    #[serde(flatten)]
    pub extra: ExtraFields,
}
