//! Unit tests for the household module.
//!
//! Tests are organised by engine: template instantiation, the task and
//! chore lifecycle state machines, area status transitions, the services
//! that orchestrate them, and the in-memory store adapter.

mod chore_lifecycle_tests;
mod domain_tests;
mod instantiation_tests;
mod task_lifecycle_tests;

use chrono::{DateTime, Local, TimeZone, Utc};
use mockable::Clock;

use crate::household::domain::{Chore, ChoreData, ChoreSeed, PersonId, TaskRecord};

/// Clock pinned to a constant instant, for deterministic timestamps.
#[derive(Debug, Clone, Copy)]
pub(crate) struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn local(&self) -> DateTime<Local> {
        self.0.with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Builds an instant at the given offset in seconds from the epoch.
pub(crate) fn instant(secs: i64) -> DateTime<Utc> {
    Utc.timestamp_opt(secs, 0)
        .single()
        .expect("valid test timestamp")
}

/// Builds a template seed whose tasks carry only their text.
pub(crate) fn seed_with_task_texts(name: &str, texts: &[&str]) -> ChoreSeed {
    let tasks = texts
        .iter()
        .map(|text| TaskRecord {
            text: Some((*text).to_owned()),
            ..TaskRecord::default()
        })
        .collect();
    ChoreSeed {
        name: Some(name.to_owned()),
        data: Some(ChoreData {
            tasks: Some(tasks),
            ..ChoreData::default()
        }),
        ..ChoreSeed::default()
    }
}

/// Builds a chore through the manual creation path with the given task
/// records, bypassing instantiation stamping.
pub(crate) fn manual_chore(tasks: Vec<TaskRecord>, now: DateTime<Utc>) -> Chore {
    let fields = ChoreSeed {
        name: Some("manual".to_owned()),
        data: Some(ChoreData {
            tasks: Some(tasks),
            ..ChoreData::default()
        }),
        ..ChoreSeed::default()
    };
    Chore::from_fields(fields, PersonId::new(), now).expect("manual chore should build")
}
