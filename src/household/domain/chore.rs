//! Chore aggregate root and the task/chore lifecycle state machines.
//!
//! A chore owns an ordered sequence of tasks inside its payload. Task-level
//! transitions that set or clear a task `end` run an invariant-restoring
//! pass that keeps the chore's own `end` consistent with the aggregate
//! ended state of its tasks.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{ChoreData, ChoreId, ChoreSeed, DomainError, PersonId, TaskRecord};

/// Status label stamped on newly created chores.
pub const STATUS_STARTED: &str = "started";

/// Speech language applied when a template omits one.
pub const DEFAULT_LANGUAGE: &str = "en-us";

/// A tracked, multi-task unit of recurring work owned by a person.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chore {
    id: ChoreId,
    person_id: PersonId,
    name: String,
    status: String,
    created: DateTime<Utc>,
    updated: DateTime<Utc>,
    data: ChoreData,
}

/// Parameter object for reconstructing a persisted chore aggregate.
#[derive(Debug, Clone, PartialEq)]
pub struct PersistedChore {
    /// Persisted chore identifier.
    pub id: ChoreId,
    /// Persisted owning person identifier.
    pub person_id: PersonId,
    /// Persisted chore name.
    pub name: String,
    /// Persisted status label.
    pub status: String,
    /// Persisted creation timestamp.
    pub created: DateTime<Utc>,
    /// Persisted latest lifecycle timestamp.
    pub updated: DateTime<Utc>,
    /// Persisted payload.
    pub data: ChoreData,
}

impl Chore {
    /// Instantiates a chore from a merged template seed.
    ///
    /// Defaults the payload language, stamps `start`/`notified`/`updated`
    /// where absent, and expands the task sequence: every entry receives its
    /// position as identifier and is stamped with the same instant. The
    /// caller supplies one clock reading for the whole operation.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::MissingName`] when the seed carries no name.
    pub fn from_seed(
        seed: ChoreSeed,
        person_id: PersonId,
        now: DateTime<Utc>,
    ) -> Result<Self, DomainError> {
        let ChoreSeed {
            name, status, data, ..
        } = seed;
        let mut data = data.unwrap_or_default();

        if data.language.is_none() {
            data.language = Some(DEFAULT_LANGUAGE.to_owned());
        }
        data.start.get_or_insert(now);
        data.notified.get_or_insert(now);
        data.updated.get_or_insert(now);
        if let Some(tasks) = data.tasks.as_mut() {
            for (index, task) in tasks.iter_mut().enumerate() {
                task.id = index;
                task.start.get_or_insert(now);
                task.notified.get_or_insert(now);
            }
        }

        Self::assemble(name, status, data, person_id, now)
    }

    /// Creates a chore from caller-supplied explicit fields.
    ///
    /// This is the manually specified creation path: the payload is accepted
    /// as-is with no stamping and no task expansion.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::MissingName`] when the fields carry no name.
    pub fn from_fields(
        fields: ChoreSeed,
        person_id: PersonId,
        now: DateTime<Utc>,
    ) -> Result<Self, DomainError> {
        let ChoreSeed {
            name, status, data, ..
        } = fields;
        Self::assemble(name, status, data.unwrap_or_default(), person_id, now)
    }

    fn assemble(
        name: Option<String>,
        status: Option<String>,
        data: ChoreData,
        person_id: PersonId,
        now: DateTime<Utc>,
    ) -> Result<Self, DomainError> {
        Ok(Self {
            id: ChoreId::new(),
            person_id,
            name: name.ok_or(DomainError::MissingName)?,
            status: status.unwrap_or_else(|| STATUS_STARTED.to_owned()),
            created: now,
            updated: now,
            data,
        })
    }

    /// Reconstructs a chore from persisted storage.
    #[must_use]
    pub fn from_persisted(persisted: PersistedChore) -> Self {
        Self {
            id: persisted.id,
            person_id: persisted.person_id,
            name: persisted.name,
            status: persisted.status,
            created: persisted.created,
            updated: persisted.updated,
            data: persisted.data,
        }
    }

    /// Returns the chore identifier.
    #[must_use]
    pub const fn id(&self) -> ChoreId {
        self.id
    }

    /// Returns the owning person identifier.
    #[must_use]
    pub const fn person_id(&self) -> PersonId {
        self.person_id
    }

    /// Returns the chore name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the status label.
    #[must_use]
    pub fn status(&self) -> &str {
        &self.status
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created(&self) -> DateTime<Utc> {
        self.created
    }

    /// Returns the latest lifecycle timestamp.
    #[must_use]
    pub const fn updated(&self) -> DateTime<Utc> {
        self.updated
    }

    /// Returns the chore payload.
    #[must_use]
    pub const fn data(&self) -> &ChoreData {
        &self.data
    }

    /// Returns the task at the given index, when it exists.
    #[must_use]
    pub fn task(&self, index: usize) -> Option<&TaskRecord> {
        self.data.tasks.as_ref().and_then(|tasks| tasks.get(index))
    }

    /// Marks the chore paused.
    ///
    /// Returns whether the payload changed.
    pub fn pause(&mut self, now: DateTime<Utc>) -> bool {
        if self.data.paused {
            return false;
        }
        self.data.paused = true;
        self.touch(now);
        true
    }

    /// Clears the chore's paused flag.
    ///
    /// Returns whether the payload changed.
    pub fn unpause(&mut self, now: DateTime<Utc>) -> bool {
        if !self.data.paused {
            return false;
        }
        self.data.paused = false;
        self.touch(now);
        true
    }

    /// Marks the chore skipped, ending it if it has not ended.
    ///
    /// Returns whether the payload changed.
    pub fn skip(&mut self, now: DateTime<Utc>) -> bool {
        if self.data.skipped {
            return false;
        }
        self.data.skipped = true;
        if self.data.end.is_none() {
            self.data.end = Some(now);
            self.data.notified = Some(now);
        }
        self.touch(now);
        true
    }

    /// Clears the chore's skipped flag and reopens it.
    ///
    /// Returns whether the payload changed.
    pub fn unskip(&mut self, now: DateTime<Utc>) -> bool {
        if !self.data.skipped {
            return false;
        }
        self.data.skipped = false;
        if self.data.end.is_some() {
            self.data.end = None;
        }
        self.data.notified = Some(now);
        self.touch(now);
        true
    }

    /// Marks the chore ended.
    ///
    /// Returns whether the payload changed.
    pub fn complete(&mut self, now: DateTime<Utc>) -> bool {
        if self.data.end.is_some() {
            return false;
        }
        self.data.end = Some(now);
        self.data.notified = Some(now);
        self.touch(now);
        true
    }

    /// Reopens an ended chore.
    ///
    /// Returns whether the payload changed.
    pub fn incomplete(&mut self, now: DateTime<Utc>) -> bool {
        if self.data.end.is_none() {
            return false;
        }
        self.data.end = None;
        self.data.notified = Some(now);
        self.touch(now);
        true
    }

    /// Advances exactly one task step.
    ///
    /// Ends the earliest active task, then starts the earliest pending one.
    /// The chore's own `end` is never set here directly; ending the final
    /// task reaches it through bubbling.
    ///
    /// Returns whether either sub-step fired.
    pub fn next(&mut self, now: DateTime<Utc>) -> bool {
        let mut changed = false;

        if let Some(tasks) = self.data.tasks.as_mut() {
            if let Some(active) = tasks.iter_mut().find(|entry| entry.is_active()) {
                active.end = Some(now);
                active.notified = Some(now);
                changed = true;
            }
        }
        if changed {
            self.restore_end_invariant(now);
        }

        if let Some(tasks) = self.data.tasks.as_mut() {
            if let Some(pending) = tasks.iter_mut().find(|entry| entry.is_pending()) {
                pending.start = Some(now);
                pending.notified = Some(now);
                changed = true;
            }
        }

        if changed {
            self.touch(now);
        }
        changed
    }

    /// Marks a task paused.
    ///
    /// Returns whether the payload changed.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::TaskNotFound`] for an out-of-range index.
    pub fn task_pause(&mut self, index: usize, now: DateTime<Utc>) -> Result<bool, DomainError> {
        let task = self.task_mut(index)?;
        if task.paused {
            return Ok(false);
        }
        task.paused = true;
        self.touch(now);
        Ok(true)
    }

    /// Clears a task's paused flag.
    ///
    /// Returns whether the payload changed.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::TaskNotFound`] for an out-of-range index.
    pub fn task_unpause(&mut self, index: usize, now: DateTime<Utc>) -> Result<bool, DomainError> {
        let task = self.task_mut(index)?;
        if !task.paused {
            return Ok(false);
        }
        task.paused = false;
        self.touch(now);
        Ok(true)
    }

    /// Marks a task skipped, ending it if it has not ended.
    ///
    /// Returns whether the payload changed.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::TaskNotFound`] for an out-of-range index.
    pub fn task_skip(&mut self, index: usize, now: DateTime<Utc>) -> Result<bool, DomainError> {
        let task = self.task_mut(index)?;
        if task.skipped {
            return Ok(false);
        }
        task.skipped = true;
        if task.end.is_none() {
            task.end = Some(now);
            task.notified = Some(now);
        }
        self.restore_end_invariant(now);
        self.touch(now);
        Ok(true)
    }

    /// Clears a task's skipped flag and reopens it.
    ///
    /// Returns whether the payload changed.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::TaskNotFound`] for an out-of-range index.
    pub fn task_unskip(&mut self, index: usize, now: DateTime<Utc>) -> Result<bool, DomainError> {
        let task = self.task_mut(index)?;
        if !task.skipped {
            return Ok(false);
        }
        task.skipped = false;
        if task.end.is_some() {
            task.end = None;
        }
        task.notified = Some(now);
        self.restore_end_invariant(now);
        self.touch(now);
        Ok(true)
    }

    /// Marks a task ended.
    ///
    /// Returns whether the payload changed.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::TaskNotFound`] for an out-of-range index.
    pub fn task_complete(&mut self, index: usize, now: DateTime<Utc>) -> Result<bool, DomainError> {
        let task = self.task_mut(index)?;
        if task.end.is_some() {
            return Ok(false);
        }
        task.end = Some(now);
        task.notified = Some(now);
        self.restore_end_invariant(now);
        self.touch(now);
        Ok(true)
    }

    /// Reopens an ended task.
    ///
    /// Returns whether the payload changed.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::TaskNotFound`] for an out-of-range index.
    pub fn task_incomplete(
        &mut self,
        index: usize,
        now: DateTime<Utc>,
    ) -> Result<bool, DomainError> {
        let task = self.task_mut(index)?;
        if task.end.is_none() {
            return Ok(false);
        }
        task.end = None;
        task.notified = Some(now);
        self.restore_end_invariant(now);
        self.touch(now);
        Ok(true)
    }

    fn task_mut(&mut self, index: usize) -> Result<&mut TaskRecord, DomainError> {
        let chore_id = self.id;
        self.data
            .tasks
            .as_mut()
            .and_then(|tasks| tasks.get_mut(index))
            .ok_or(DomainError::TaskNotFound { chore_id, index })
    }

    /// Restores the parent/child aggregate invariant after a task `end`
    /// mutation: the chore's own `end` is set exactly when every task of a
    /// non-empty sequence has ended.
    fn restore_end_invariant(&mut self, now: DateTime<Utc>) {
        let all_ended = self
            .data
            .tasks
            .as_ref()
            .is_some_and(|tasks| !tasks.is_empty() && tasks.iter().all(TaskRecord::is_ended));
        if all_ended && self.data.end.is_none() {
            self.data.end = Some(now);
            self.data.notified = Some(now);
        } else if !all_ended && self.data.end.is_some() {
            self.data.end = None;
        }
    }

    fn touch(&mut self, now: DateTime<Utc>) {
        self.updated = now;
        self.data.updated = Some(now);
    }
}
