//! Unit tests for action parsing, template kinds, and payload serialisation.

use serde_json::json;

use super::instant;
use crate::household::domain::{
    ChoreAction, ChoreData, ChoreId, ParseActionError, ParseTemplateKindError, TaskAction,
    TaskRecord, TemplateKind,
};
use rstest::rstest;

#[rstest]
#[case("next", ChoreAction::Next)]
#[case("pause", ChoreAction::Pause)]
#[case("unpause", ChoreAction::Unpause)]
#[case("skip", ChoreAction::Skip)]
#[case("unskip", ChoreAction::Unskip)]
#[case("complete", ChoreAction::Complete)]
#[case("incomplete", ChoreAction::Incomplete)]
fn chore_action_parses_its_wire_names(#[case] input: &str, #[case] expected: ChoreAction) {
    assert_eq!(ChoreAction::try_from(input), Ok(expected));
    assert_eq!(expected.as_str(), input);
}

#[rstest]
#[case(" Pause ")]
#[case("COMPLETE")]
fn chore_action_parsing_trims_and_ignores_case(#[case] input: &str) {
    assert!(ChoreAction::try_from(input).is_ok());
}

#[rstest]
fn unknown_chore_action_is_rejected() {
    assert_eq!(
        ChoreAction::try_from("explode"),
        Err(ParseActionError("explode".to_owned()))
    );
}

#[rstest]
fn task_action_has_no_next() {
    assert_eq!(
        TaskAction::try_from("next"),
        Err(ParseActionError("next".to_owned()))
    );
}

#[rstest]
#[case("pause", TaskAction::Pause)]
#[case("unpause", TaskAction::Unpause)]
#[case("skip", TaskAction::Skip)]
#[case("unskip", TaskAction::Unskip)]
#[case("complete", TaskAction::Complete)]
#[case("incomplete", TaskAction::Incomplete)]
fn task_action_parses_its_wire_names(#[case] input: &str, #[case] expected: TaskAction) {
    assert_eq!(TaskAction::try_from(input), Ok(expected));
    assert_eq!(expected.as_str(), input);
}

#[rstest]
#[case("chore", TemplateKind::Chore)]
#[case("act", TemplateKind::Act)]
fn template_kind_round_trips_through_its_storage_form(
    #[case] input: &str,
    #[case] expected: TemplateKind,
) {
    assert_eq!(TemplateKind::try_from(input), Ok(expected));
    assert_eq!(expected.to_string(), input);
}

#[rstest]
fn unknown_template_kind_is_rejected() {
    assert_eq!(
        TemplateKind::try_from("routine"),
        Err(ParseTemplateKindError("routine".to_owned()))
    );
}

#[rstest]
fn false_flags_and_absent_fields_stay_out_of_serialised_payloads() {
    let data = ChoreData {
        text: Some("hoover".to_owned()),
        ..ChoreData::default()
    };

    let value = serde_json::to_value(&data).expect("payload should serialise");

    assert_eq!(value, json!({ "text": "hoover" }));
}

#[rstest]
fn absent_flags_deserialise_as_false() {
    let data: ChoreData =
        serde_json::from_value(json!({ "text": "hoover" })).expect("payload should parse");

    assert!(!data.paused);
    assert!(!data.skipped);
    assert!(data.end.is_none());
}

#[rstest]
fn flag_round_trip_restores_exact_payload_equality() {
    let original = ChoreData {
        text: Some("hoover".to_owned()),
        ..ChoreData::default()
    };
    let mut toggled = original.clone();
    toggled.paused = true;
    toggled.paused = false;

    let original_json = serde_json::to_value(&original).expect("serialise original");
    let toggled_json = serde_json::to_value(&toggled).expect("serialise toggled");

    assert_eq!(original, toggled);
    assert_eq!(original_json, toggled_json);
}

#[rstest]
fn unrecognised_payload_keys_survive_a_round_trip() {
    let input = json!({
        "text": "hoover",
        "room_hint": "landing",
        "priority": 3
    });

    let data: ChoreData = serde_json::from_value(input.clone()).expect("payload should parse");
    let output = serde_json::to_value(&data).expect("payload should serialise");

    assert_eq!(data.extra.get("room_hint"), Some(&json!("landing")));
    assert_eq!(output, input);
}

#[rstest]
fn task_record_state_predicates_partition_the_lifecycle() {
    let pending = TaskRecord::default();
    let active = TaskRecord {
        start: Some(instant(1)),
        ..TaskRecord::default()
    };
    let ended = TaskRecord {
        start: Some(instant(1)),
        end: Some(instant(2)),
        ..TaskRecord::default()
    };

    assert!(pending.is_pending() && !pending.is_active() && !pending.is_ended());
    assert!(!active.is_pending() && active.is_active() && !active.is_ended());
    assert!(!ended.is_pending() && !ended.is_active() && ended.is_ended());
}

#[rstest]
fn record_ids_serialise_transparently() {
    let id = ChoreId::new();

    let value = serde_json::to_value(id).expect("identifier should serialise");

    assert_eq!(value, json!(id.into_inner().to_string()));
    assert_eq!(id.to_string(), id.into_inner().to_string());
}
