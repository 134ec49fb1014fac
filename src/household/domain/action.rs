//! Closed action vocabularies for chore and task lifecycle requests.
//!
//! Inbound action names are free-form strings; they are parsed into these
//! enums before reaching the state machines so that unknown names are
//! rejected at the boundary.

use super::ParseActionError;
use serde::{Deserialize, Serialize};

/// Chore-level lifecycle action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChoreAction {
    /// Advance one task step.
    Next,
    /// Mark the chore paused.
    Pause,
    /// Clear the paused flag.
    Unpause,
    /// Mark the chore skipped and ended.
    Skip,
    /// Clear the skipped flag and reopen the chore.
    Unskip,
    /// Mark the chore ended.
    Complete,
    /// Reopen an ended chore.
    Incomplete,
}

impl ChoreAction {
    /// Returns the canonical wire representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Next => "next",
            Self::Pause => "pause",
            Self::Unpause => "unpause",
            Self::Skip => "skip",
            Self::Unskip => "unskip",
            Self::Complete => "complete",
            Self::Incomplete => "incomplete",
        }
    }
}

impl TryFrom<&str> for ChoreAction {
    type Error = ParseActionError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().to_ascii_lowercase().as_str() {
            "next" => Ok(Self::Next),
            "pause" => Ok(Self::Pause),
            "unpause" => Ok(Self::Unpause),
            "skip" => Ok(Self::Skip),
            "unskip" => Ok(Self::Unskip),
            "complete" => Ok(Self::Complete),
            "incomplete" => Ok(Self::Incomplete),
            _ => Err(ParseActionError(value.to_owned())),
        }
    }
}

/// Task-level lifecycle action, parameterised by a task index at the call
/// site. Tasks have no `next`; sequencing belongs to the owning chore.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskAction {
    /// Mark the task paused.
    Pause,
    /// Clear the paused flag.
    Unpause,
    /// Mark the task skipped and ended.
    Skip,
    /// Clear the skipped flag and reopen the task.
    Unskip,
    /// Mark the task ended.
    Complete,
    /// Reopen an ended task.
    Incomplete,
}

impl TaskAction {
    /// Returns the canonical wire representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pause => "pause",
            Self::Unpause => "unpause",
            Self::Skip => "skip",
            Self::Unskip => "unskip",
            Self::Complete => "complete",
            Self::Incomplete => "incomplete",
        }
    }
}

impl TryFrom<&str> for TaskAction {
    type Error = ParseActionError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().to_ascii_lowercase().as_str() {
            "pause" => Ok(Self::Pause),
            "unpause" => Ok(Self::Unpause),
            "skip" => Ok(Self::Skip),
            "unskip" => Ok(Self::Unskip),
            "complete" => Ok(Self::Complete),
            "incomplete" => Ok(Self::Incomplete),
            _ => Err(ParseActionError(value.to_owned())),
        }
    }
}
