//! Canonical JSON encoding.
//!
//! One [`ObjectWriter`] builds every object. Its methods know the empty
//! sentinel of each JSON kind, so omission is decided in one place and
//! call sites just name fields in canonical order.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde_json::{Map, Value};

use crate::clock::format_timestamp;
use crate::entities::{AssignableAttrs, Entity, EntityBase, EntityRef, ResourceAttrs};
use crate::events::Event;
use crate::vocab;

/// Accumulates keys in insertion order, skipping values that sit at
/// their empty sentinels.
struct ObjectWriter {
    map: Map<String, Value>,
}

impl ObjectWriter {
    fn new() -> Self {
        Self { map: Map::new() }
    }

    /// Inserts unconditionally.
    fn raw(&mut self, key: &str, value: Value) {
        self.map.insert(key.to_owned(), value);
    }

    /// Inserts a string unless it is empty.
    fn string(&mut self, key: &str, value: &str) {
        if !value.is_empty() {
            self.raw(key, Value::String(value.to_owned()));
        }
    }

    fn opt_string(&mut self, key: &str, value: Option<&str>) {
        if let Some(value) = value {
            self.raw(key, Value::String(value.to_owned()));
        }
    }

    /// Inserts a string-valued map unless it is empty.
    fn string_map(&mut self, key: &str, entries: &BTreeMap<String, String>) {
        if !entries.is_empty() {
            let map: Map<String, Value> = entries
                .iter()
                .map(|(name, value)| (name.clone(), Value::String(value.clone())))
                .collect();
            self.raw(key, Value::Object(map));
        }
    }

    /// Inserts a string list unless it is empty, in caller order.
    fn string_list(&mut self, key: &str, items: &[String]) {
        if !items.is_empty() {
            let list = items.iter().map(|item| Value::String(item.clone())).collect();
            self.raw(key, Value::Array(list));
        }
    }

    fn timestamp(&mut self, key: &str, value: DateTime<Utc>) {
        self.raw(key, Value::String(format_timestamp(value)));
    }

    fn opt_timestamp(&mut self, key: &str, value: Option<DateTime<Utc>>) {
        if let Some(value) = value {
            self.timestamp(key, value);
        }
    }

    fn opt_u32(&mut self, key: &str, value: Option<u32>) {
        if let Some(value) = value {
            self.raw(key, Value::from(value));
        }
    }

    fn opt_i64(&mut self, key: &str, value: Option<i64>) {
        if let Some(value) = value {
            self.raw(key, Value::from(value));
        }
    }

    fn opt_f64(&mut self, key: &str, value: Option<f64>) {
        if let Some(value) = value {
            self.raw(key, Value::from(value));
        }
    }

    /// Inserts a reference in whichever form the producer chose.
    fn reference(&mut self, key: &str, reference: &EntityRef) {
        self.raw(key, reference_value(reference));
    }

    fn opt_reference(&mut self, key: &str, reference: Option<&EntityRef>) {
        if let Some(reference) = reference {
            self.reference(key, reference);
        }
    }

    /// Inserts a reference list unless it is empty, in caller order.
    fn reference_list(&mut self, key: &str, references: &[EntityRef]) {
        if !references.is_empty() {
            let list = references.iter().map(reference_value).collect();
            self.raw(key, Value::Array(list));
        }
    }

    fn finish(self) -> Value {
        Value::Object(self.map)
    }
}

/// An embedded entity encodes as a nested object, an id reference as a
/// bare string. The form is never converted.
fn reference_value(reference: &EntityRef) -> Value {
    match reference {
        EntityRef::Entity(entity) => entity_to_json(entity),
        EntityRef::Id(id) => Value::String(id.clone()),
    }
}

/// Common entity attributes, in canonical order.
fn write_base(writer: &mut ObjectWriter, type_iri: &str, base: &EntityBase) {
    writer.raw("@id", Value::String(base.id.clone()));
    writer.raw("@type", Value::String(type_iri.to_owned()));
    writer.string("name", &base.name);
    writer.string("description", &base.description);
    writer.string_map("properties", &base.properties);
    writer.timestamp("dateCreated", base.date_created);
    writer.timestamp("dateModified", base.date_modified);
}

/// Common digital resource attributes, in canonical order.
fn write_resource(writer: &mut ObjectWriter, resource: &ResourceAttrs) {
    writer.string_list("objectType", &resource.object_type);
    writer.reference_list(
        "alignedLearningObjective",
        &resource.aligned_learning_objective,
    );
    writer.string_list("keywords", &resource.keywords);
    writer.opt_reference("isPartOf", resource.is_part_of.as_ref());
    writer.opt_timestamp("datePublished", resource.date_published);
    writer.opt_string("version", resource.version.as_deref());
}

/// Assignment window and limit attributes, in canonical order.
fn write_assignable(writer: &mut ObjectWriter, assignable: &AssignableAttrs) {
    writer.opt_timestamp("dateToActivate", assignable.date_to_activate);
    writer.opt_timestamp("dateToShow", assignable.date_to_show);
    writer.opt_timestamp("dateToStartOn", assignable.date_to_start_on);
    writer.opt_timestamp("dateToSubmit", assignable.date_to_submit);
    writer.opt_u32("maxAttempts", assignable.max_attempts);
    writer.opt_u32("maxSubmits", assignable.max_submits);
    writer.opt_f64("maxScore", assignable.max_score);
}

/// Encodes `entity` as its canonical JSON document.
///
/// Encoding is total: every entity value has exactly one document, and
/// equal entities produce byte-identical documents.
#[must_use]
pub fn entity_to_json(entity: &Entity) -> Value {
    let mut writer = ObjectWriter::new();
    write_base(&mut writer, entity.type_iri(), entity.base());
    match entity {
        Entity::Generic(_)
        | Entity::Person(_)
        | Entity::SoftwareApplication(_)
        | Entity::LearningObjective(_) => {}
        Entity::Organization(e) => {
            writer.opt_reference("subOrganizationOf", e.sub_organization_of.as_ref());
        }
        Entity::CourseOffering(e) => {
            writer.opt_string("courseNumber", e.course_number.as_deref());
            writer.opt_string("academicSession", e.academic_session.as_deref());
            writer.opt_reference("subOrganizationOf", e.sub_organization_of.as_ref());
        }
        Entity::CourseSection(e) => {
            writer.opt_string("courseNumber", e.course_number.as_deref());
            writer.opt_string("academicSession", e.academic_session.as_deref());
            writer.opt_reference("subOrganizationOf", e.sub_organization_of.as_ref());
        }
        Entity::Group(e) => {
            writer.opt_reference("subOrganizationOf", e.sub_organization_of.as_ref());
        }
        Entity::Membership(e) => {
            writer.opt_string("member", e.member.as_deref());
            writer.opt_string("organization", e.organization.as_deref());
            writer.string_list("roles", &e.roles);
            writer.opt_string("status", e.status.as_deref());
        }
        Entity::DigitalResource(e) => write_resource(&mut writer, &e.resource),
        Entity::WebPage(e) => write_resource(&mut writer, &e.resource),
        Entity::EPubVolume(e) => write_resource(&mut writer, &e.resource),
        Entity::Frame(e) => {
            write_resource(&mut writer, &e.resource);
            writer.raw("index", Value::from(e.index));
        }
        Entity::View(e) => {
            writer.opt_reference("actor", e.actor.as_ref());
            writer.opt_reference("frame", e.frame.as_ref());
            writer.opt_timestamp("startedAtTime", e.started_at_time);
            writer.opt_timestamp("endedAtTime", e.ended_at_time);
            writer.opt_string("duration", e.duration.as_deref());
        }
        Entity::MediaObject(e) => {
            write_resource(&mut writer, &e.resource);
            writer.opt_i64("duration", e.duration);
        }
        Entity::ImageObject(e) => {
            write_resource(&mut writer, &e.resource);
            writer.opt_i64("duration", e.duration);
        }
        Entity::AudioObject(e) => {
            write_resource(&mut writer, &e.resource);
            writer.opt_i64("duration", e.duration);
        }
        Entity::VideoObject(e) => {
            write_resource(&mut writer, &e.resource);
            writer.opt_i64("duration", e.duration);
        }
        Entity::MediaLocation(e) => {
            write_resource(&mut writer, &e.resource);
            writer.opt_i64("currentTime", e.current_time);
        }
        Entity::AssignableDigitalResource(e) => {
            write_resource(&mut writer, &e.resource);
            write_assignable(&mut writer, &e.assignable);
        }
        Entity::Assessment(e) => {
            write_resource(&mut writer, &e.resource);
            write_assignable(&mut writer, &e.assignable);
        }
        Entity::AssessmentItem(e) => {
            write_resource(&mut writer, &e.resource);
            write_assignable(&mut writer, &e.assignable);
        }
        Entity::Attempt(e) => {
            writer.opt_reference("assignable", e.assignable.as_ref());
            writer.opt_reference("actor", e.actor.as_ref());
            writer.opt_u32("count", e.count);
            writer.opt_timestamp("startedAtTime", e.started_at_time);
            writer.opt_timestamp("endedAtTime", e.ended_at_time);
            writer.opt_string("duration", e.duration.as_deref());
        }
        Entity::Result(e) => {
            writer.opt_reference("assignable", e.assignable.as_ref());
            writer.opt_reference("actor", e.actor.as_ref());
            writer.opt_f64("normalScore", e.normal_score);
            writer.opt_f64("penaltyScore", e.penalty_score);
            writer.opt_f64("extraCreditScore", e.extra_credit_score);
            writer.opt_f64("totalScore", e.total_score);
            writer.opt_f64("curvedTotalScore", e.curved_total_score);
            writer.opt_f64("curveFactor", e.curve_factor);
            writer.opt_string("comment", e.comment.as_deref());
            writer.opt_reference("scoredBy", e.scored_by.as_ref());
        }
        Entity::Session(e) => {
            writer.opt_reference("actor", e.actor.as_ref());
            writer.opt_timestamp("startedAtTime", e.started_at_time);
            writer.opt_timestamp("endedAtTime", e.ended_at_time);
            writer.opt_string("duration", e.duration.as_deref());
        }
    }
    writer.finish()
}

/// Encodes `event` as its canonical JSON document.
///
/// `@context` comes first on every event, then `@type`, the required
/// triple, the optional context in canonical order, and `eventTime`
/// after any subtype fields.
#[must_use]
pub fn event_to_json(event: &Event) -> Value {
    let mut writer = ObjectWriter::new();
    let base = event.base();
    writer.raw("@context", Value::String(vocab::CONTEXT.to_owned()));
    writer.raw("@type", Value::String(event.type_iri().to_owned()));
    writer.reference("actor", &base.actor);
    writer.raw("action", Value::String(base.action.clone()));
    writer.reference("object", &base.object);
    writer.opt_reference("target", base.target.as_ref());
    writer.opt_reference("generated", base.generated.as_ref());
    if let Event::Navigation(e) = event {
        writer.opt_reference("navigatedFrom", e.navigated_from.as_ref());
    }
    writer.timestamp("eventTime", base.event_time);
    writer.opt_reference("edApp", base.ed_app.as_ref());
    writer.opt_reference("group", base.group.as_ref());
    writer.opt_reference("membership", base.membership.as_ref());
    writer.finish()
}
