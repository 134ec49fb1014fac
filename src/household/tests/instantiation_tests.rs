//! Unit tests for template instantiation and seed merging.

use serde_json::json;

use super::{instant, seed_with_task_texts};
use crate::household::domain::{
    Chore, ChoreData, ChoreSeed, DEFAULT_LANGUAGE, DomainError, PersonId, STATUS_STARTED, Template,
    TemplateKind,
};
use rstest::rstest;

#[rstest]
fn instantiation_is_deterministic_at_a_fixed_instant() {
    let now = instant(1_000);
    let seed = seed_with_task_texts("wash up", &["scrape", "scrub"]);

    let chore = Chore::from_seed(seed, PersonId::new(), now).expect("seed should instantiate");

    assert_eq!(chore.name(), "wash up");
    assert_eq!(chore.status(), STATUS_STARTED);
    assert_eq!(chore.created(), now);
    assert_eq!(chore.updated(), now);
    assert_eq!(chore.data().language.as_deref(), Some(DEFAULT_LANGUAGE));
    assert_eq!(chore.data().start, Some(now));
    assert_eq!(chore.data().notified, Some(now));
    assert_eq!(chore.data().updated, Some(now));
    assert_eq!(chore.data().end, None);

    let tasks = chore.data().tasks.as_ref().expect("tasks should expand");
    assert_eq!(tasks.len(), 2);
    for (index, task) in tasks.iter().enumerate() {
        assert_eq!(task.id, index);
        assert_eq!(task.start, Some(now));
        assert_eq!(task.notified, Some(now));
        assert_eq!(task.end, None);
    }
    assert_eq!(tasks[0].text.as_deref(), Some("scrape"));
    assert_eq!(tasks[1].text.as_deref(), Some("scrub"));
}

#[rstest]
fn instantiation_without_tasks_leaves_the_sequence_absent() {
    let seed = ChoreSeed {
        name: Some("water plants".to_owned()),
        ..ChoreSeed::default()
    };

    let chore =
        Chore::from_seed(seed, PersonId::new(), instant(5)).expect("seed should instantiate");

    assert!(chore.data().tasks.is_none());
}

#[rstest]
fn instantiation_preserves_explicit_language_and_timestamps() {
    let now = instant(2_000);
    let earlier = instant(1_500);
    let mut seed = seed_with_task_texts("tidy", &["shelves"]);
    if let Some(data) = seed.data.as_mut() {
        data.language = Some("en-gb".to_owned());
        data.start = Some(earlier);
    }

    let chore = Chore::from_seed(seed, PersonId::new(), now).expect("seed should instantiate");

    assert_eq!(chore.data().language.as_deref(), Some("en-gb"));
    assert_eq!(chore.data().start, Some(earlier));
    assert_eq!(chore.data().notified, Some(now));
}

#[rstest]
fn manual_creation_accepts_the_payload_as_is() {
    let data = ChoreData {
        text: Some("free-form".to_owned()),
        ..ChoreData::default()
    };
    let fields = ChoreSeed {
        name: Some("manual".to_owned()),
        status: Some("blocked".to_owned()),
        data: Some(data.clone()),
        ..ChoreSeed::default()
    };

    let chore =
        Chore::from_fields(fields, PersonId::new(), instant(3)).expect("fields should build");

    assert_eq!(chore.status(), "blocked");
    assert_eq!(chore.data(), &data);
    assert!(chore.data().language.is_none());
    assert!(chore.data().start.is_none());
}

#[rstest]
fn instantiation_without_a_name_is_rejected() {
    let seed = ChoreSeed::default();

    let result = Chore::from_seed(seed, PersonId::new(), instant(0));

    assert_eq!(result.unwrap_err(), DomainError::MissingName);
}

#[rstest]
fn merge_requires_at_least_one_input() {
    assert_eq!(
        ChoreSeed::merged(None, None).unwrap_err(),
        DomainError::MissingSeed
    );
}

#[rstest]
fn merge_passes_a_lone_side_through_unchanged() {
    let template = seed_with_task_texts("template", &["one"]);

    let merged = ChoreSeed::merged(Some(template.clone()), None).expect("merge should succeed");

    assert_eq!(merged, template);
}

#[rstest]
fn merge_lets_explicit_fields_win_per_top_level_key() {
    let template = ChoreSeed {
        person: Some("kid".to_owned()),
        name: Some("from template".to_owned()),
        status: Some("started".to_owned()),
        ..ChoreSeed::default()
    };
    let fields = ChoreSeed {
        name: Some("from fields".to_owned()),
        ..ChoreSeed::default()
    };

    let merged =
        ChoreSeed::merged(Some(template), Some(fields)).expect("merge should succeed");

    assert_eq!(merged.name.as_deref(), Some("from fields"));
    assert_eq!(merged.person.as_deref(), Some("kid"));
    assert_eq!(merged.status.as_deref(), Some("started"));
}

#[rstest]
fn merge_replaces_the_data_payload_wholesale() {
    let template = seed_with_task_texts("template", &["one", "two"]);
    let fields_data = ChoreData {
        text: Some("override".to_owned()),
        ..ChoreData::default()
    };
    let fields = ChoreSeed {
        data: Some(fields_data.clone()),
        ..ChoreSeed::default()
    };

    let merged =
        ChoreSeed::merged(Some(template), Some(fields)).expect("merge should succeed");

    assert_eq!(merged.data, Some(fields_data));
}

#[rstest]
fn stored_chore_template_parses_into_a_seed() {
    let template = Template::new(
        "morning routine",
        TemplateKind::Chore,
        json!({
            "name": "morning routine",
            "data": { "tasks": [{ "text": "teeth" }, { "text": "bed" }] }
        }),
    );

    let seed = template.chore_seed().expect("payload should parse");

    assert_eq!(seed.name.as_deref(), Some("morning routine"));
    let tasks = seed
        .data
        .as_ref()
        .and_then(|data| data.tasks.as_ref())
        .expect("tasks should parse");
    assert_eq!(tasks.len(), 2);
}

#[rstest]
fn chore_seed_from_an_act_template_is_a_kind_mismatch() {
    let template = Template::new("praise", TemplateKind::Act, json!({ "name": "praise" }));

    let result = template.chore_seed();

    assert_eq!(
        result.unwrap_err(),
        DomainError::TemplateKindMismatch {
            expected: TemplateKind::Chore,
            found: TemplateKind::Act,
        }
    );
}

#[rstest]
fn unparseable_template_payload_is_reported_as_malformed() {
    let template = Template::new("broken", TemplateKind::Chore, json!({ "name": 42 }));

    let result = template.chore_seed();

    assert!(matches!(result, Err(DomainError::MalformedTemplate(_))));
}
