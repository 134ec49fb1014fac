//! Unit tests for task-level lifecycle transitions and end bubbling.

use chrono::{DateTime, Utc};

use super::{instant, manual_chore};
use crate::household::domain::{Chore, DomainError, TaskRecord};
use rstest::rstest;

fn active_task(start: DateTime<Utc>) -> TaskRecord {
    TaskRecord {
        start: Some(start),
        ..TaskRecord::default()
    }
}

fn ended_task(start: DateTime<Utc>, end: DateTime<Utc>) -> TaskRecord {
    TaskRecord {
        start: Some(start),
        end: Some(end),
        ..TaskRecord::default()
    }
}

fn single_task_chore() -> Chore {
    manual_chore(vec![active_task(instant(0))], instant(0))
}

#[rstest]
fn task_pause_fires_once_and_is_then_a_no_op() {
    let mut chore = single_task_chore();

    assert_eq!(chore.task_pause(0, instant(10)), Ok(true));
    let after_first = chore.clone();
    assert_eq!(chore.task_pause(0, instant(20)), Ok(false));

    assert_eq!(chore, after_first);
    let task = chore.task(0).expect("task present");
    assert!(task.paused);
    assert!(task.notified.is_none());
}

#[rstest]
fn task_unpause_inverts_task_pause() {
    let mut chore = single_task_chore();

    assert_eq!(chore.task_pause(0, instant(10)), Ok(true));
    assert_eq!(chore.task_unpause(0, instant(20)), Ok(true));
    assert_eq!(chore.task_unpause(0, instant(30)), Ok(false));

    let task = chore.task(0).expect("task present");
    assert!(!task.paused);
    assert!(task.end.is_none());
}

#[rstest]
fn task_complete_on_the_only_task_bubbles_to_the_chore() {
    let mut chore = single_task_chore();
    let now = instant(10);

    assert_eq!(chore.task_complete(0, now), Ok(true));

    let task = chore.task(0).expect("task present");
    assert_eq!(task.end, Some(now));
    assert_eq!(task.notified, Some(now));
    assert_eq!(chore.data().end, Some(now));
    assert_eq!(chore.data().notified, Some(now));
    assert_eq!(chore.updated(), now);
}

#[rstest]
fn task_incomplete_reopens_both_task_and_chore() {
    let mut chore = single_task_chore();
    chore.task_complete(0, instant(10)).expect("complete");

    assert_eq!(chore.task_incomplete(0, instant(20)), Ok(true));
    assert_eq!(chore.task_incomplete(0, instant(30)), Ok(false));

    let task = chore.task(0).expect("task present");
    assert!(task.end.is_none());
    assert_eq!(task.notified, Some(instant(20)));
    assert!(chore.data().end.is_none());
}

#[rstest]
fn completing_a_task_mid_sequence_does_not_end_the_chore() {
    let mut chore = manual_chore(
        vec![active_task(instant(0)), active_task(instant(0))],
        instant(0),
    );

    assert_eq!(chore.task_complete(0, instant(10)), Ok(true));

    assert!(chore.data().end.is_none());
}

#[rstest]
fn completing_the_last_open_task_ends_the_chore() {
    let mut chore = manual_chore(
        vec![ended_task(instant(0), instant(5)), active_task(instant(0))],
        instant(0),
    );
    let now = instant(10);

    assert_eq!(chore.task_complete(1, now), Ok(true));

    assert_eq!(chore.data().end, Some(now));
}

#[rstest]
fn reopening_one_task_clears_a_bubbled_chore_end() {
    let mut chore = manual_chore(
        vec![active_task(instant(0)), active_task(instant(0))],
        instant(0),
    );
    chore.task_complete(0, instant(5)).expect("first complete");
    chore.task_complete(1, instant(6)).expect("second complete");
    assert_eq!(chore.data().end, Some(instant(6)));

    assert_eq!(chore.task_incomplete(1, instant(10)), Ok(true));

    assert!(chore.data().end.is_none());
    assert!(chore.task(0).expect("task present").is_ended());
}

#[rstest]
fn task_skip_ends_the_task_and_can_end_the_chore() {
    let mut chore = single_task_chore();
    let now = instant(10);

    assert_eq!(chore.task_skip(0, now), Ok(true));
    assert_eq!(chore.task_skip(0, instant(20)), Ok(false));

    let task = chore.task(0).expect("task present");
    assert!(task.skipped);
    assert_eq!(task.end, Some(now));
    assert_eq!(chore.data().end, Some(now));
}

#[rstest]
fn task_unskip_reopens_the_task_and_the_chore() {
    let mut chore = single_task_chore();
    chore.task_skip(0, instant(10)).expect("skip");

    assert_eq!(chore.task_unskip(0, instant(20)), Ok(true));

    let task = chore.task(0).expect("task present");
    assert!(!task.skipped);
    assert!(task.end.is_none());
    assert_eq!(task.notified, Some(instant(20)));
    assert!(chore.data().end.is_none());
}

#[rstest]
fn task_skip_on_an_ended_task_keeps_the_original_end() {
    let mut chore = manual_chore(vec![ended_task(instant(0), instant(5))], instant(0));

    assert_eq!(chore.task_skip(0, instant(10)), Ok(true));

    let task = chore.task(0).expect("task present");
    assert!(task.skipped);
    assert_eq!(task.end, Some(instant(5)));
}

#[rstest]
fn out_of_range_task_index_is_rejected() {
    let mut chore = single_task_chore();

    let result = chore.task_complete(5, instant(10));

    assert_eq!(
        result,
        Err(DomainError::TaskNotFound {
            chore_id: chore.id(),
            index: 5,
        })
    );
}

#[rstest]
fn task_actions_on_a_chore_without_tasks_are_rejected() {
    let mut chore = manual_chore(Vec::new(), instant(0));

    let result = chore.task_pause(0, instant(10));

    assert_eq!(
        result,
        Err(DomainError::TaskNotFound {
            chore_id: chore.id(),
            index: 0,
        })
    );
}
