//! Property-based tests for the canonical serializer.
//!
//! Uses proptest to verify the serialization laws over generated graphs:
//! decode inverts encode, unset fields vanish instead of becoming null,
//! and ordered collections and reference forms survive the wire format.

use caliper_model::clock::{format_timestamp, parse_timestamp};
use caliper_model::entities::{
    Attempt, EPubVolume, Entity, MediaLocation, Membership, Person, ResultEntity,
};
use caliper_model::events::{
    AssessmentEvent, Event, EventContext, MediaEvent, NavigationEvent, SessionEvent,
};
use caliper_model::serializer::{entity_to_json, event_to_json, event_to_string, Decoder};
use caliper_model::vocab::{actions, lis};
use caliper_model::{EntityRef, FixedClock};
use chrono::{DateTime, TimeZone, Utc};
use proptest::prelude::*;
use serde_json::Value;

fn fixture_clock() -> FixedClock {
    FixedClock(Utc.with_ymd_and_hms(2015, 8, 1, 6, 0, 0).unwrap())
}

// =============================================================================
// Strategies
// =============================================================================

/// Millisecond-quantized instants, the only precision the wire format
/// represents.
fn instants() -> impl Strategy<Value = DateTime<Utc>> {
    (0i64..4_102_444_800, 0u32..1000)
        .prop_map(|(secs, millis)| Utc.timestamp_opt(secs, millis * 1_000_000).unwrap())
}

fn iris() -> impl Strategy<Value = String> {
    "[a-z0-9]{1,12}".prop_map(|tail| format!("https://example.edu/{tail}"))
}

fn labels() -> impl Strategy<Value = String> {
    "[ -~]{0,16}"
}

fn persons() -> impl Strategy<Value = Person> {
    (iris(), labels(), instants(), instants()).prop_map(|(id, name, created, modified)| {
        let mut person = Person::new(id, &FixedClock(created));
        person.base.name = name;
        person.base.date_modified = modified;
        person
    })
}

fn memberships() -> impl Strategy<Value = Membership> {
    (
        iris(),
        prop::option::of(iris()),
        prop::option::of(iris()),
        prop::collection::vec(prop::sample::select(lis::role::ALL), 0..4),
        prop::option::of(prop::sample::select(lis::status::ALL)),
        instants(),
    )
        .prop_map(|(id, member, organization, roles, status, created)| {
            let mut membership = Membership::new(id, &FixedClock(created));
            membership.member = member;
            membership.organization = organization;
            membership.roles = roles.into_iter().map(str::to_owned).collect();
            membership.status = status.map(str::to_owned);
            membership
        })
}

fn volumes() -> impl Strategy<Value = EPubVolume> {
    (
        iris(),
        labels(),
        prop::collection::vec("[a-z]{1,8}", 0..3),
        prop::option::of("[0-9]\\.[0-9]"),
        prop::option::of(iris()),
        instants(),
    )
        .prop_map(|(id, name, keywords, version, part_of, created)| {
            let mut volume = EPubVolume::new(id, &FixedClock(created));
            volume.base.name = name;
            volume.resource.keywords = keywords;
            volume.resource.version = version;
            volume.resource.is_part_of = part_of.map(EntityRef::Id);
            volume
        })
}

fn media_locations() -> impl Strategy<Value = MediaLocation> {
    (iris(), prop::option::of(0i64..36_000), instants()).prop_map(|(id, current, created)| {
        let mut location = MediaLocation::new(id, &FixedClock(created));
        location.current_time = current;
        location
    })
}

fn attempts() -> impl Strategy<Value = Attempt> {
    (
        iris(),
        prop::option::of(iris()),
        prop::option::of(iris()),
        prop::option::of(1u32..10),
        prop::option::of(instants()),
        instants(),
    )
        .prop_map(|(id, assignable, actor, count, started, created)| {
            let mut attempt = Attempt::new(id, &FixedClock(created));
            attempt.assignable = assignable.map(EntityRef::Id);
            attempt.actor = actor.map(EntityRef::Id);
            attempt.count = count;
            attempt.started_at_time = started;
            attempt
        })
}

fn results() -> impl Strategy<Value = ResultEntity> {
    (
        iris(),
        prop::option::of(0.0f64..100.0),
        prop::option::of(0.0f64..100.0),
        prop::option::of(labels()),
        instants(),
    )
        .prop_map(|(id, normal, total, comment, created)| {
            let mut result = ResultEntity::new(id, &FixedClock(created));
            result.normal_score = normal;
            result.total_score = total;
            result.comment = comment;
            result
        })
}

fn entities() -> impl Strategy<Value = Entity> {
    prop_oneof![
        persons().prop_map(Entity::from),
        memberships().prop_map(Entity::from),
        volumes().prop_map(Entity::from),
        media_locations().prop_map(Entity::from),
        attempts().prop_map(Entity::from),
        results().prop_map(Entity::from),
    ]
}

fn references() -> impl Strategy<Value = EntityRef> {
    prop_oneof![
        iris().prop_map(EntityRef::Id),
        entities().prop_map(EntityRef::from),
    ]
}

fn events() -> impl Strategy<Value = Event> {
    let navigations = (
        references(),
        references(),
        prop::option::of(references()),
        prop::option::of(references()),
        instants(),
    )
        .prop_map(|(actor, object, target, from, time)| {
            let mut event =
                NavigationEvent::new(actor, actions::navigation::NAVIGATED_TO, object, time);
            if let Some(target) = target {
                event = event.with_target(target);
            }
            if let Some(from) = from {
                event = event.with_navigated_from(from);
            }
            Event::from(event)
        });

    let sessions = (
        references(),
        references(),
        prop::sample::select(actions::session::ALL),
        instants(),
    )
        .prop_map(|(actor, object, action, time)| {
            Event::from(SessionEvent::new(actor, action, object, time))
        });

    let assessments = (references(), references(), attempts(), instants()).prop_map(
        |(actor, object, attempt, time)| {
            Event::from(
                AssessmentEvent::new(actor, actions::assessment::SUBMITTED, object, time)
                    .with_generated(EntityRef::embedded(attempt)),
            )
        },
    );

    let media = (
        references(),
        references(),
        prop::sample::select(actions::media::ALL),
        media_locations(),
        instants(),
    )
        .prop_map(|(actor, object, action, location, time)| {
            Event::from(
                MediaEvent::new(actor, action, object, time)
                    .with_target(EntityRef::embedded(location)),
            )
        });

    prop_oneof![navigations, sessions, assessments, media]
}

fn contains_null(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Array(items) => items.iter().any(contains_null),
        Value::Object(map) => map.values().any(contains_null),
        _ => false,
    }
}

// =============================================================================
// Round-Trip Properties
// =============================================================================

proptest! {
    /// decode(encode(entity)) = entity
    #[test]
    fn prop_entity_documents_round_trip(entity in entities()) {
        let document = entity_to_json(&entity);
        let decoded = Decoder::new(&fixture_clock()).entity(&document);
        prop_assert_eq!(decoded, Ok(entity));
    }

    /// decode(encode(event)) = event
    #[test]
    fn prop_event_documents_round_trip(event in events()) {
        let document = event_to_json(&event);
        let decoded = Decoder::new(&fixture_clock()).event(&document);
        prop_assert_eq!(decoded, Ok(event));
    }

    /// The compact string form decodes to the same event as the value form.
    #[test]
    fn prop_compact_text_round_trips(event in events()) {
        let text = event_to_string(&event);
        let decoded = Decoder::new(&fixture_clock()).event_str(&text);
        prop_assert_eq!(decoded, Ok(event));
    }

    /// Equal graphs encode to byte-identical documents.
    #[test]
    fn prop_encoding_is_deterministic(event in events()) {
        prop_assert_eq!(event_to_string(&event), event_to_string(&event.clone()));
    }

    /// The wire timestamp form loses nothing at millisecond precision.
    #[test]
    fn prop_timestamps_survive_the_wire_format(instant in instants()) {
        prop_assert_eq!(parse_timestamp(&format_timestamp(instant)), Ok(instant));
    }
}

// =============================================================================
// Omission Properties
// =============================================================================

proptest! {
    /// Unset fields disappear; nothing ever encodes as JSON null.
    #[test]
    fn prop_unset_fields_never_encode_as_null(event in events()) {
        prop_assert!(!contains_null(&event_to_json(&event)));
    }

    /// `name` is present exactly when it is non-empty.
    #[test]
    fn prop_empty_name_is_omitted(entity in entities()) {
        let document = entity_to_json(&entity);
        let has_name = document.get("name").is_some();
        prop_assert_eq!(has_name, !entity.base().name.is_empty());
    }

    /// `properties` is present exactly when the map is non-empty.
    #[test]
    fn prop_empty_properties_are_omitted(entity in entities()) {
        let document = entity_to_json(&entity);
        let has_properties = document.get("properties").is_some();
        prop_assert_eq!(has_properties, !entity.base().properties.is_empty());
    }
}

// =============================================================================
// Order and Form Preservation
// =============================================================================

proptest! {
    /// The embedded-vs-id form of `actor` survives a round trip.
    #[test]
    fn prop_reference_forms_are_preserved(event in events()) {
        let document = event_to_json(&event);
        let decoded = Decoder::new(&fixture_clock()).event(&document).unwrap();
        let id_before = matches!(event.base().actor, EntityRef::Id(_));
        let id_after = matches!(decoded.base().actor, EntityRef::Id(_));
        prop_assert_eq!(id_before, id_after);
    }

    /// Role lists serialize in caller order and decode in document order.
    #[test]
    fn prop_roles_keep_their_order(membership in memberships()) {
        let roles = membership.roles.clone();
        let document = entity_to_json(&Entity::from(membership));
        let wire_roles: Vec<String> = document
            .get("roles")
            .and_then(Value::as_array)
            .map(|items| {
                items
                    .iter()
                    .filter_map(Value::as_str)
                    .map(str::to_owned)
                    .collect()
            })
            .unwrap_or_default();
        prop_assert_eq!(wire_roles, roles);
    }
}
