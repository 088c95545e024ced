//! End-to-end exercise of a fully populated navigation event: canonical
//! layout, omission of unset fields, and exact round-trip equality.

use caliper_model::entities::{
    CourseOffering, CourseSection, EPubVolume, Frame, Group, Membership, Person,
    SoftwareApplication, WebPage,
};
use caliper_model::events::NavigationEvent;
use caliper_model::serializer::{event_to_json, event_to_string, Decoder};
use caliper_model::vocab::{actions, entity_type, lis};
use caliper_model::{EntityRef, Event, EventContext, FixedClock};
use chrono::{DateTime, TimeZone, Utc};
use serde_json::json;

fn created() -> FixedClock {
    FixedClock(Utc.with_ymd_and_hms(2015, 8, 1, 6, 0, 0).unwrap())
}

fn modified() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2015, 9, 2, 11, 30, 0).unwrap()
}

fn event_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2015, 9, 15, 10, 15, 0).unwrap()
}

/// A reader in a political science course navigating from the course
/// landing page to a chapter of an EPUB volume.
fn scenario_event() -> Event {
    let clock = created();

    let mut actor = Person::new("https://example.edu/user/554433", &clock);
    actor.base.date_modified = modified();

    let mut volume = EPubVolume::new(
        "https://example.com/viewer/book/34843#epubcfi(/4/3)",
        &clock,
    );
    volume.base.name = "The Glorious Cause: The American Revolution, 1763-1789 \
                        (Oxford History of the United States)"
        .to_owned();
    volume.base.date_modified = modified();
    volume.resource.version = Some("2nd ed.".to_owned());

    let mut frame = Frame::new(
        "https://example.com/viewer/book/34843#epubcfi(/4/3/1)",
        &clock,
    );
    frame.base.name = "Key Figures: George Washington".to_owned();
    frame.base.date_modified = modified();
    frame.resource.version = Some("2nd ed.".to_owned());
    frame.resource.is_part_of = Some(EntityRef::embedded(volume.clone()));
    frame.index = 1;

    let mut landing = WebPage::new(
        "https://example.edu/politicalScience/2015/american-revolution-101/index.html",
        &clock,
    );
    landing.base.name = "American Revolution 101 Landing Page".to_owned();
    landing.base.date_modified = modified();
    landing.resource.version = Some("1.0".to_owned());

    let mut viewer = SoftwareApplication::new("https://example.com/viewer", &clock);
    viewer.base.name = "ePub".to_owned();
    viewer.base.date_modified = modified();

    let mut course = CourseOffering::new(
        "https://example.edu/politicalScience/2015/american-revolution-101",
        &clock,
    );
    course.base.name = "Political Science 101: The American Revolution".to_owned();
    course.base.date_modified = modified();
    course.course_number = Some("POL101".to_owned());
    course.academic_session = Some("Fall-2015".to_owned());

    let mut section = CourseSection::new(
        "https://example.edu/politicalScience/2015/american-revolution-101/section/001",
        &clock,
    );
    section.base.name = "American Revolution 101".to_owned();
    section.base.date_modified = modified();
    section.course_number = Some("POL101".to_owned());
    section.academic_session = Some("Fall-2015".to_owned());
    section.sub_organization_of = Some(EntityRef::embedded(course));

    let mut group = Group::new(
        "https://example.edu/politicalScience/2015/american-revolution-101/section/001/group/001",
        &clock,
    );
    group.base.name = "Discussion Group 001".to_owned();
    group.sub_organization_of = Some(EntityRef::embedded(section));

    let mut membership = Membership::new(
        "https://example.edu/politicalScience/2015/american-revolution-101/roster/554433",
        &clock,
    );
    membership.base.name = "American Revolution 101".to_owned();
    membership.base.description = "Roster entry".to_owned();
    membership.member = Some("https://example.edu/user/554433".to_owned());
    membership.organization = Some(
        "https://example.edu/politicalScience/2015/american-revolution-101/section/001".to_owned(),
    );
    membership.roles = vec![lis::role::LEARNER.to_owned()];
    membership.status = Some(lis::status::ACTIVE.to_owned());

    NavigationEvent::new(
        EntityRef::embedded(actor),
        actions::navigation::NAVIGATED_TO,
        EntityRef::embedded(volume),
        event_time(),
    )
    .with_target(EntityRef::embedded(frame))
    .with_navigated_from(EntityRef::embedded(landing))
    .with_ed_app(EntityRef::embedded(viewer))
    .with_group(EntityRef::embedded(group))
    .with_membership(EntityRef::embedded(membership))
    .into()
}

#[test]
fn document_layout_matches_the_canonical_key_sequence() {
    let document = event_to_json(&scenario_event());
    let keys: Vec<&str> = document
        .as_object()
        .unwrap()
        .keys()
        .map(String::as_str)
        .collect();
    assert_eq!(
        keys,
        vec![
            "@context",
            "@type",
            "actor",
            "action",
            "object",
            "target",
            "navigatedFrom",
            "eventTime",
            "edApp",
            "group",
            "membership",
        ]
    );
}

#[test]
fn unset_fields_are_absent_rather_than_null() {
    let document = event_to_json(&scenario_event());
    assert!(document.get("generated").is_none());
    assert!(document["object"].get("description").is_none());
    assert!(document["object"].get("keywords").is_none());
    assert!(document["actor"].get("name").is_none());
    assert!(!event_to_string(&scenario_event()).contains("null"));
}

#[test]
fn embedded_entities_nest_as_full_objects() {
    let document = event_to_json(&scenario_event());
    assert_eq!(document["actor"]["@id"], "https://example.edu/user/554433");
    assert_eq!(document["eventTime"], "2015-09-15T10:15:00.000Z");
    assert_eq!(document["target"]["index"], 1);
    assert_eq!(
        document["target"]["isPartOf"]["@id"],
        "https://example.com/viewer/book/34843#epubcfi(/4/3)"
    );
    assert_eq!(
        document["group"]["subOrganizationOf"]["subOrganizationOf"]["@type"],
        entity_type::COURSE_OFFERING
    );
    assert_eq!(
        document["membership"]["member"],
        "https://example.edu/user/554433"
    );
    assert_eq!(document["membership"]["roles"], json!([lis::role::LEARNER]));
    assert_eq!(document["membership"]["status"], lis::status::ACTIVE);
}

#[test]
fn the_document_round_trips_to_an_equal_event() {
    let event = scenario_event();
    let clock = created();

    let decoded = Decoder::new(&clock).event(&event_to_json(&event)).unwrap();
    assert_eq!(decoded, event);

    let redecoded = Decoder::new(&clock)
        .event_str(&event_to_string(&event))
        .unwrap();
    assert_eq!(redecoded, event);
}

#[test]
fn removing_event_time_fails_decoding() {
    let mut document = event_to_json(&scenario_event());
    document.as_object_mut().unwrap().remove("eventTime");
    let err = Decoder::new(&created()).event(&document).unwrap_err();
    assert_eq!(err.to_string(), "required field `eventTime` is missing");
}

#[test]
fn unknown_keys_do_not_disturb_decoding() {
    let event = scenario_event();
    let mut document = event_to_json(&event);
    document
        .as_object_mut()
        .unwrap()
        .insert("foo".to_owned(), json!(1));
    document["actor"]
        .as_object_mut()
        .unwrap()
        .insert("bar".to_owned(), json!({ "nested": true }));

    let decoded = Decoder::new(&created()).event(&document).unwrap();
    assert_eq!(decoded, event);
}
