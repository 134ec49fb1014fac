//! Unit tests for chore-level lifecycle transitions and task sequencing.

use chrono::{DateTime, Utc};

use super::{instant, manual_chore, seed_with_task_texts};
use crate::household::domain::{Chore, ChoreSeed, PersonId, TaskRecord};
use rstest::rstest;

fn started_chore(now: DateTime<Utc>) -> Chore {
    let seed = ChoreSeed {
        name: Some("laundry".to_owned()),
        ..ChoreSeed::default()
    };
    Chore::from_seed(seed, PersonId::new(), now).expect("seed should instantiate")
}

#[rstest]
fn pause_fires_once_and_is_then_a_no_op() {
    let mut chore = started_chore(instant(0));
    let now = instant(10);

    assert!(chore.pause(now));
    let after_first = chore.clone();
    assert!(!chore.pause(instant(20)));

    assert_eq!(chore, after_first);
    assert!(chore.data().paused);
    assert_eq!(chore.updated(), now);
}

#[rstest]
fn unpause_inverts_pause() {
    let mut chore = started_chore(instant(0));
    let reference = chore.clone();

    assert!(chore.pause(instant(10)));
    assert!(chore.unpause(instant(20)));
    assert!(!chore.unpause(instant(30)));

    assert!(!chore.data().paused);
    assert_eq!(chore.data().end, reference.data().end);
    assert_eq!(chore.data().start, reference.data().start);
}

#[rstest]
fn complete_sets_end_and_notified_once() {
    let mut chore = started_chore(instant(0));
    let now = instant(50);

    assert!(chore.complete(now));
    assert!(!chore.complete(instant(60)));

    assert_eq!(chore.data().end, Some(now));
    assert_eq!(chore.data().notified, Some(now));
    assert_eq!(chore.updated(), now);
}

#[rstest]
fn incomplete_reopens_a_completed_chore() {
    let mut chore = started_chore(instant(0));
    chore.complete(instant(50));

    assert!(chore.incomplete(instant(60)));
    assert!(!chore.incomplete(instant(70)));

    assert_eq!(chore.data().end, None);
    assert_eq!(chore.data().notified, Some(instant(60)));
}

#[rstest]
fn skip_ends_an_open_chore() {
    let mut chore = started_chore(instant(0));
    let now = instant(40);

    assert!(chore.skip(now));

    assert!(chore.data().skipped);
    assert_eq!(chore.data().end, Some(now));
    assert_eq!(chore.data().notified, Some(now));
}

#[rstest]
fn skip_on_a_completed_chore_keeps_the_original_end() {
    let mut chore = started_chore(instant(0));
    let completed_at = instant(40);
    chore.complete(completed_at);

    assert!(chore.skip(instant(50)));

    assert!(chore.data().skipped);
    assert_eq!(chore.data().end, Some(completed_at));
    assert_eq!(chore.data().notified, Some(completed_at));
}

#[rstest]
fn unskip_reopens_a_skipped_chore() {
    let mut chore = started_chore(instant(0));
    chore.skip(instant(40));

    assert!(chore.unskip(instant(50)));
    assert!(!chore.unskip(instant(60)));

    assert!(!chore.data().skipped);
    assert_eq!(chore.data().end, None);
    assert_eq!(chore.data().notified, Some(instant(50)));
}

#[rstest]
fn next_on_a_chore_without_tasks_does_nothing() {
    let mut chore = started_chore(instant(0));
    let before = chore.clone();

    assert!(!chore.next(instant(10)));

    assert_eq!(chore, before);
}

#[rstest]
fn next_walks_an_instantiated_sequence_and_bubbles_the_final_end() {
    let now = instant(0);
    let seed = seed_with_task_texts("dishes", &["scrape", "scrub", "dry"]);
    let mut chore = Chore::from_seed(seed, PersonId::new(), now).expect("seed should instantiate");

    // Instantiation starts every task, so each step ends the earliest
    // still-active one.
    for step in 1..=3 {
        let at = instant(i64::from(step) * 10);
        assert!(chore.next(at), "step {step} should fire");
        let tasks = chore.data().tasks.as_ref().expect("tasks present");
        let ended = tasks.iter().filter(|task| task.is_ended()).count();
        assert_eq!(ended, step as usize);
    }

    // Ending the final task bubbles up to the chore itself.
    assert_eq!(chore.data().end, Some(instant(30)));
    assert!(!chore.next(instant(40)));
}

#[rstest]
fn next_ends_the_active_task_then_starts_the_earliest_pending_one() {
    let now = instant(0);
    let tasks = vec![
        TaskRecord {
            id: 0,
            start: Some(now),
            ..TaskRecord::default()
        },
        TaskRecord {
            id: 1,
            ..TaskRecord::default()
        },
        TaskRecord {
            id: 2,
            ..TaskRecord::default()
        },
    ];
    let mut chore = manual_chore(tasks, now);
    let at = instant(10);

    assert!(chore.next(at));

    let tasks = chore.data().tasks.as_ref().expect("tasks present");
    assert_eq!(tasks[0].end, Some(at));
    assert_eq!(tasks[1].start, Some(at));
    assert!(tasks[1].end.is_none());
    assert!(tasks[2].is_pending());
    assert!(chore.data().end.is_none());
    assert_eq!(chore.updated(), at);
}

#[rstest]
fn next_with_only_pending_tasks_starts_without_ending() {
    let tasks = vec![TaskRecord::default(), TaskRecord::default()];
    let mut chore = manual_chore(tasks, instant(0));
    let at = instant(10);

    assert!(chore.next(at));

    let tasks = chore.data().tasks.as_ref().expect("tasks present");
    assert_eq!(tasks[0].start, Some(at));
    assert!(tasks[0].end.is_none());
    assert!(tasks[1].is_pending());
}
