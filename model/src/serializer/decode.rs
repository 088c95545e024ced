//! Canonical JSON decoding.
//!
//! The decoder dispatches on `@type` before looking at any other field,
//! so an unknown kind is reported as unsupported even when the rest of
//! the document is malformed. Field checks never yield partial graphs:
//! the first violation returns an error and nothing else.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde_json::{Map, Value};

use crate::clock::{parse_timestamp, Clock};
use crate::entities::{
    Assessment, AssessmentItem, AssignableAttrs, AssignableDigitalResource, Attempt, AudioObject,
    CourseOffering, CourseSection, DigitalResource, EPubVolume, Entity, EntityBase, EntityRef,
    Frame, GenericEntity, Group, ImageObject, LearningObjective, MediaLocation, MediaObject,
    Membership, Organization, Person, ResourceAttrs, ResultEntity, Session, SoftwareApplication,
    VideoObject, View, WebPage,
};
use crate::error::DecodeError;
use crate::events::{
    AssessmentEvent, AssessmentItemEvent, AssignableEvent, Event, EventBase, MediaEvent,
    NavigationEvent, OutcomeEvent, SessionEvent, ViewEvent,
};
use crate::vocab::{entity_type, event_type};

/// Decodes canonical JSON documents back into entity and event graphs.
///
/// The decoder carries a clock so that documents without timestamp keys
/// decode to the same defaults construction would have produced.
pub struct Decoder<'a> {
    clock: &'a dyn Clock,
}

impl<'a> Decoder<'a> {
    /// Builds a decoder that fills absent timestamps from `clock`.
    #[must_use]
    pub fn new(clock: &'a dyn Clock) -> Self {
        Self { clock }
    }

    /// Decodes an entity document.
    ///
    /// Unknown keys and `@context` are ignored. Absent optional keys
    /// leave the constructor defaults in place.
    ///
    /// # Errors
    ///
    /// [`DecodeError::NotAnObject`] when `value` is not a JSON object,
    /// [`DecodeError::MissingField`] when `@id` or `@type` is absent,
    /// [`DecodeError::UnsupportedType`] for an unrecognized `@type`, and
    /// [`DecodeError::FieldShape`] when a present field has the wrong
    /// JSON shape.
    pub fn entity(&self, value: &Value) -> Result<Entity, DecodeError> {
        let map = require_object(value)?;
        let type_iri = require_str(map, "@type")?;
        match type_iri {
            entity_type::ENTITY => Ok(Entity::Generic(GenericEntity {
                base: self.base(map)?,
            })),
            entity_type::PERSON => Ok(Entity::Person(Person {
                base: self.base(map)?,
            })),
            entity_type::SOFTWARE_APPLICATION => {
                Ok(Entity::SoftwareApplication(SoftwareApplication {
                    base: self.base(map)?,
                }))
            }
            entity_type::ORGANIZATION => Ok(Entity::Organization(Organization {
                base: self.base(map)?,
                sub_organization_of: self.opt_reference(map, "subOrganizationOf")?,
            })),
            entity_type::COURSE_OFFERING => Ok(Entity::CourseOffering(CourseOffering {
                base: self.base(map)?,
                course_number: opt_str(map, "courseNumber")?.map(str::to_owned),
                academic_session: opt_str(map, "academicSession")?.map(str::to_owned),
                sub_organization_of: self.opt_reference(map, "subOrganizationOf")?,
            })),
            entity_type::COURSE_SECTION => Ok(Entity::CourseSection(CourseSection {
                base: self.base(map)?,
                course_number: opt_str(map, "courseNumber")?.map(str::to_owned),
                academic_session: opt_str(map, "academicSession")?.map(str::to_owned),
                sub_organization_of: self.opt_reference(map, "subOrganizationOf")?,
            })),
            entity_type::GROUP => Ok(Entity::Group(Group {
                base: self.base(map)?,
                sub_organization_of: self.opt_reference(map, "subOrganizationOf")?,
            })),
            entity_type::MEMBERSHIP => Ok(Entity::Membership(Membership {
                base: self.base(map)?,
                member: opt_str(map, "member")?.map(str::to_owned),
                organization: opt_str(map, "organization")?.map(str::to_owned),
                roles: opt_string_list(map, "roles")?,
                status: opt_str(map, "status")?.map(str::to_owned),
            })),
            entity_type::DIGITAL_RESOURCE => Ok(Entity::DigitalResource(DigitalResource {
                base: self.base(map)?,
                resource: self.resource_attrs(map)?,
            })),
            entity_type::WEB_PAGE => Ok(Entity::WebPage(WebPage {
                base: self.base(map)?,
                resource: self.resource_attrs(map)?,
            })),
            entity_type::EPUB_VOLUME => Ok(Entity::EPubVolume(EPubVolume {
                base: self.base(map)?,
                resource: self.resource_attrs(map)?,
            })),
            entity_type::FRAME => Ok(Entity::Frame(Frame {
                base: self.base(map)?,
                resource: self.resource_attrs(map)?,
                index: opt_u32(map, "index")?.unwrap_or(0),
            })),
            entity_type::VIEW => Ok(Entity::View(View {
                base: self.base(map)?,
                actor: self.opt_reference(map, "actor")?,
                frame: self.opt_reference(map, "frame")?,
                started_at_time: opt_timestamp(map, "startedAtTime")?,
                ended_at_time: opt_timestamp(map, "endedAtTime")?,
                duration: opt_str(map, "duration")?.map(str::to_owned),
            })),
            entity_type::MEDIA_OBJECT => Ok(Entity::MediaObject(MediaObject {
                base: self.base(map)?,
                resource: self.resource_attrs(map)?,
                duration: opt_i64(map, "duration")?,
            })),
            entity_type::IMAGE_OBJECT => Ok(Entity::ImageObject(ImageObject {
                base: self.base(map)?,
                resource: self.resource_attrs(map)?,
                duration: opt_i64(map, "duration")?,
            })),
            entity_type::AUDIO_OBJECT => Ok(Entity::AudioObject(AudioObject {
                base: self.base(map)?,
                resource: self.resource_attrs(map)?,
                duration: opt_i64(map, "duration")?,
            })),
            entity_type::VIDEO_OBJECT => Ok(Entity::VideoObject(VideoObject {
                base: self.base(map)?,
                resource: self.resource_attrs(map)?,
                duration: opt_i64(map, "duration")?,
            })),
            entity_type::MEDIA_LOCATION => Ok(Entity::MediaLocation(MediaLocation {
                base: self.base(map)?,
                resource: self.resource_attrs(map)?,
                current_time: opt_i64(map, "currentTime")?,
            })),
            entity_type::ASSIGNABLE_DIGITAL_RESOURCE => {
                Ok(Entity::AssignableDigitalResource(AssignableDigitalResource {
                    base: self.base(map)?,
                    resource: self.resource_attrs(map)?,
                    assignable: assignable_attrs(map)?,
                }))
            }
            entity_type::ASSESSMENT => Ok(Entity::Assessment(Assessment {
                base: self.base(map)?,
                resource: self.resource_attrs(map)?,
                assignable: assignable_attrs(map)?,
            })),
            entity_type::ASSESSMENT_ITEM => Ok(Entity::AssessmentItem(AssessmentItem {
                base: self.base(map)?,
                resource: self.resource_attrs(map)?,
                assignable: assignable_attrs(map)?,
            })),
            entity_type::ATTEMPT => Ok(Entity::Attempt(Attempt {
                base: self.base(map)?,
                assignable: self.opt_reference(map, "assignable")?,
                actor: self.opt_reference(map, "actor")?,
                count: opt_u32(map, "count")?,
                started_at_time: opt_timestamp(map, "startedAtTime")?,
                ended_at_time: opt_timestamp(map, "endedAtTime")?,
                duration: opt_str(map, "duration")?.map(str::to_owned),
            })),
            entity_type::RESULT => Ok(Entity::Result(ResultEntity {
                base: self.base(map)?,
                assignable: self.opt_reference(map, "assignable")?,
                actor: self.opt_reference(map, "actor")?,
                normal_score: opt_f64(map, "normalScore")?,
                penalty_score: opt_f64(map, "penaltyScore")?,
                extra_credit_score: opt_f64(map, "extraCreditScore")?,
                total_score: opt_f64(map, "totalScore")?,
                curved_total_score: opt_f64(map, "curvedTotalScore")?,
                curve_factor: opt_f64(map, "curveFactor")?,
                comment: opt_str(map, "comment")?.map(str::to_owned),
                scored_by: self.opt_reference(map, "scoredBy")?,
            })),
            entity_type::SESSION => Ok(Entity::Session(Session {
                base: self.base(map)?,
                actor: self.opt_reference(map, "actor")?,
                started_at_time: opt_timestamp(map, "startedAtTime")?,
                ended_at_time: opt_timestamp(map, "endedAtTime")?,
                duration: opt_str(map, "duration")?.map(str::to_owned),
            })),
            entity_type::LEARNING_OBJECTIVE => Ok(Entity::LearningObjective(LearningObjective {
                base: self.base(map)?,
            })),
            other => Err(DecodeError::UnsupportedType {
                type_iri: other.to_owned(),
            }),
        }
    }

    /// Decodes an event document.
    ///
    /// Unknown keys and `@context` are ignored.
    ///
    /// # Errors
    ///
    /// [`DecodeError::NotAnObject`] when `value` is not a JSON object,
    /// [`DecodeError::MissingField`] when `@type`, `actor`, `action`,
    /// `object`, or `eventTime` is absent,
    /// [`DecodeError::UnsupportedType`] for an unrecognized `@type`, and
    /// [`DecodeError::FieldShape`] when a present field has the wrong
    /// JSON shape.
    pub fn event(&self, value: &Value) -> Result<Event, DecodeError> {
        let map = require_object(value)?;
        let type_iri = require_str(map, "@type")?;
        match type_iri {
            event_type::NAVIGATION => Ok(Event::Navigation(NavigationEvent {
                base: self.event_base(map)?,
                navigated_from: self.opt_reference(map, "navigatedFrom")?,
            })),
            event_type::VIEW => Ok(Event::View(ViewEvent {
                base: self.event_base(map)?,
            })),
            event_type::MEDIA => Ok(Event::Media(MediaEvent {
                base: self.event_base(map)?,
            })),
            event_type::ASSIGNABLE => Ok(Event::Assignable(AssignableEvent {
                base: self.event_base(map)?,
            })),
            event_type::ASSESSMENT => Ok(Event::Assessment(AssessmentEvent {
                base: self.event_base(map)?,
            })),
            event_type::ASSESSMENT_ITEM => Ok(Event::AssessmentItem(AssessmentItemEvent {
                base: self.event_base(map)?,
            })),
            event_type::OUTCOME => Ok(Event::Outcome(OutcomeEvent {
                base: self.event_base(map)?,
            })),
            event_type::SESSION => Ok(Event::Session(SessionEvent {
                base: self.event_base(map)?,
            })),
            other => Err(DecodeError::UnsupportedType {
                type_iri: other.to_owned(),
            }),
        }
    }

    /// Decodes an entity from JSON text.
    ///
    /// # Errors
    ///
    /// [`DecodeError::Syntax`] when `text` is not valid JSON, otherwise
    /// as [`Decoder::entity`].
    pub fn entity_str(&self, text: &str) -> Result<Entity, DecodeError> {
        let value: Value =
            serde_json::from_str(text).map_err(|err| DecodeError::Syntax(err.to_string()))?;
        self.entity(&value)
    }

    /// Decodes an event from JSON text.
    ///
    /// # Errors
    ///
    /// [`DecodeError::Syntax`] when `text` is not valid JSON, otherwise
    /// as [`Decoder::event`].
    pub fn event_str(&self, text: &str) -> Result<Event, DecodeError> {
        let value: Value =
            serde_json::from_str(text).map_err(|err| DecodeError::Syntax(err.to_string()))?;
        self.event(&value)
    }

    fn base(&self, map: &Map<String, Value>) -> Result<EntityBase, DecodeError> {
        let now = self.clock.now();
        Ok(EntityBase {
            id: require_str(map, "@id")?.to_owned(),
            name: opt_str(map, "name")?.map(str::to_owned).unwrap_or_default(),
            description: opt_str(map, "description")?
                .map(str::to_owned)
                .unwrap_or_default(),
            properties: opt_string_map(map, "properties")?,
            date_created: opt_timestamp(map, "dateCreated")?.unwrap_or(now),
            date_modified: opt_timestamp(map, "dateModified")?.unwrap_or(now),
        })
    }

    fn event_base(&self, map: &Map<String, Value>) -> Result<EventBase, DecodeError> {
        Ok(EventBase {
            actor: self.require_reference(map, "actor")?,
            action: require_str(map, "action")?.to_owned(),
            object: self.require_reference(map, "object")?,
            target: self.opt_reference(map, "target")?,
            generated: self.opt_reference(map, "generated")?,
            event_time: require_timestamp(map, "eventTime")?,
            ed_app: self.opt_reference(map, "edApp")?,
            group: self.opt_reference(map, "group")?,
            membership: self.opt_reference(map, "membership")?,
        })
    }

    fn resource_attrs(&self, map: &Map<String, Value>) -> Result<ResourceAttrs, DecodeError> {
        Ok(ResourceAttrs {
            object_type: opt_string_list(map, "objectType")?,
            aligned_learning_objective: self.reference_list(map, "alignedLearningObjective")?,
            keywords: opt_string_list(map, "keywords")?,
            is_part_of: self.opt_reference(map, "isPartOf")?,
            date_published: opt_timestamp(map, "datePublished")?,
            version: opt_str(map, "version")?.map(str::to_owned),
        })
    }

    /// A reference key holds either an id string or a full entity object.
    fn reference(&self, field: &str, value: &Value) -> Result<EntityRef, DecodeError> {
        match value {
            Value::String(id) => Ok(EntityRef::Id(id.clone())),
            Value::Object(_) => Ok(EntityRef::embedded(self.entity(value)?)),
            other => Err(DecodeError::FieldShape {
                field: field.to_owned(),
                expected: "an entity object or an id string",
                found: kind(other),
            }),
        }
    }

    fn require_reference(
        &self,
        map: &Map<String, Value>,
        field: &str,
    ) -> Result<EntityRef, DecodeError> {
        match map.get(field) {
            None => Err(DecodeError::MissingField {
                field: field.to_owned(),
            }),
            Some(value) => self.reference(field, value),
        }
    }

    fn opt_reference(
        &self,
        map: &Map<String, Value>,
        field: &str,
    ) -> Result<Option<EntityRef>, DecodeError> {
        match map.get(field) {
            None => Ok(None),
            Some(value) => Ok(Some(self.reference(field, value)?)),
        }
    }

    fn reference_list(
        &self,
        map: &Map<String, Value>,
        field: &str,
    ) -> Result<Vec<EntityRef>, DecodeError> {
        match map.get(field) {
            None => Ok(Vec::new()),
            Some(Value::Array(items)) => items
                .iter()
                .map(|item| self.reference(field, item))
                .collect(),
            Some(other) => Err(DecodeError::FieldShape {
                field: field.to_owned(),
                expected: "an array of references",
                found: kind(other),
            }),
        }
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

fn require_object(value: &Value) -> Result<&Map<String, Value>, DecodeError> {
    value
        .as_object()
        .ok_or(DecodeError::NotAnObject { found: kind(value) })
}

fn as_str<'v>(field: &str, value: &'v Value) -> Result<&'v str, DecodeError> {
    value.as_str().ok_or_else(|| DecodeError::FieldShape {
        field: field.to_owned(),
        expected: "a string",
        found: kind(value),
    })
}

fn require_str<'v>(map: &'v Map<String, Value>, field: &str) -> Result<&'v str, DecodeError> {
    match map.get(field) {
        None => Err(DecodeError::MissingField {
            field: field.to_owned(),
        }),
        Some(value) => as_str(field, value),
    }
}

fn opt_str<'v>(map: &'v Map<String, Value>, field: &str) -> Result<Option<&'v str>, DecodeError> {
    map.get(field).map(|value| as_str(field, value)).transpose()
}

fn opt_string_list(map: &Map<String, Value>, field: &str) -> Result<Vec<String>, DecodeError> {
    match map.get(field) {
        None => Ok(Vec::new()),
        Some(Value::Array(items)) => items
            .iter()
            .map(|item| as_str(field, item).map(str::to_owned))
            .collect(),
        Some(other) => Err(DecodeError::FieldShape {
            field: field.to_owned(),
            expected: "an array of strings",
            found: kind(other),
        }),
    }
}

fn opt_string_map(
    map: &Map<String, Value>,
    field: &str,
) -> Result<BTreeMap<String, String>, DecodeError> {
    match map.get(field) {
        None => Ok(BTreeMap::new()),
        Some(Value::Object(entries)) => entries
            .iter()
            .map(|(name, value)| as_str(field, value).map(|value| (name.clone(), value.to_owned())))
            .collect(),
        Some(other) => Err(DecodeError::FieldShape {
            field: field.to_owned(),
            expected: "an object of strings",
            found: kind(other),
        }),
    }
}

fn opt_timestamp(
    map: &Map<String, Value>,
    field: &str,
) -> Result<Option<DateTime<Utc>>, DecodeError> {
    match map.get(field) {
        None => Ok(None),
        Some(value) => {
            let text = as_str(field, value)?;
            parse_timestamp(text)
                .map(Some)
                .map_err(|_| DecodeError::FieldShape {
                    field: field.to_owned(),
                    expected: "an ISO-8601 timestamp",
                    found: "a string",
                })
        }
    }
}

fn require_timestamp(map: &Map<String, Value>, field: &str) -> Result<DateTime<Utc>, DecodeError> {
    opt_timestamp(map, field)?.ok_or_else(|| DecodeError::MissingField {
        field: field.to_owned(),
    })
}

fn opt_u32(map: &Map<String, Value>, field: &str) -> Result<Option<u32>, DecodeError> {
    match map.get(field) {
        None => Ok(None),
        Some(value) => value
            .as_u64()
            .and_then(|n| u32::try_from(n).ok())
            .map(Some)
            .ok_or_else(|| DecodeError::FieldShape {
                field: field.to_owned(),
                expected: "an unsigned integer",
                found: kind(value),
            }),
    }
}

fn opt_i64(map: &Map<String, Value>, field: &str) -> Result<Option<i64>, DecodeError> {
    match map.get(field) {
        None => Ok(None),
        Some(value) => value
            .as_i64()
            .map(Some)
            .ok_or_else(|| DecodeError::FieldShape {
                field: field.to_owned(),
                expected: "an integer",
                found: kind(value),
            }),
    }
}

fn opt_f64(map: &Map<String, Value>, field: &str) -> Result<Option<f64>, DecodeError> {
    match map.get(field) {
        None => Ok(None),
        Some(value) => value
            .as_f64()
            .map(Some)
            .ok_or_else(|| DecodeError::FieldShape {
                field: field.to_owned(),
                expected: "a number",
                found: kind(value),
            }),
    }
}

fn assignable_attrs(map: &Map<String, Value>) -> Result<AssignableAttrs, DecodeError> {
    Ok(AssignableAttrs {
        date_to_activate: opt_timestamp(map, "dateToActivate")?,
        date_to_show: opt_timestamp(map, "dateToShow")?,
        date_to_start_on: opt_timestamp(map, "dateToStartOn")?,
        date_to_submit: opt_timestamp(map, "dateToSubmit")?,
        max_attempts: opt_u32(map, "maxAttempts")?,
        max_submits: opt_u32(map, "maxSubmits")?,
        max_score: opt_f64(map, "maxScore")?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use crate::events::EventContext;
    use crate::serializer::{entity_to_json, event_to_json};
    use crate::vocab::actions;
    use chrono::TimeZone;
    use serde_json::json;

    fn clock() -> FixedClock {
        FixedClock(Utc.with_ymd_and_hms(2015, 9, 15, 10, 15, 0).unwrap())
    }

    fn navigation_document() -> Value {
        json!({
            "@context": "http://purl.imsglobal.org/ctx/caliper/v1/Context",
            "@type": "http://purl.imsglobal.org/caliper/v1/NavigationEvent",
            "actor": "https://example.edu/user/554433",
            "action": actions::navigation::NAVIGATED_TO,
            "object": {
                "@id": "https://example.com/viewer/book/34843#epubcfi(/4/3)",
                "@type": "http://www.idpf.org/epub/vocab/structure/#volume",
                "name": "The Glorious Cause",
                "dateCreated": "2015-08-01T06:00:00.000Z",
                "dateModified": "2015-09-02T11:30:00.000Z"
            },
            "navigatedFrom": "https://example.com/viewer/index.html",
            "eventTime": "2015-09-15T10:15:00.000Z"
        })
    }

    #[test]
    fn missing_event_time_is_a_missing_field() {
        let mut document = navigation_document();
        document.as_object_mut().unwrap().remove("eventTime");
        let err = Decoder::new(&clock()).event(&document).unwrap_err();
        assert_eq!(
            err,
            DecodeError::MissingField {
                field: "eventTime".to_owned()
            }
        );
    }

    #[test]
    fn missing_actor_is_a_missing_field() {
        let mut document = navigation_document();
        document.as_object_mut().unwrap().remove("actor");
        let err = Decoder::new(&clock()).event(&document).unwrap_err();
        assert_eq!(
            err,
            DecodeError::MissingField {
                field: "actor".to_owned()
            }
        );
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let clock = clock();
        let baseline = Decoder::new(&clock).event(&navigation_document()).unwrap();

        let mut document = navigation_document();
        document.as_object_mut().unwrap().insert("foo".to_owned(), json!(1));
        let decoded = Decoder::new(&clock).event(&document).unwrap();
        assert_eq!(decoded, baseline);
    }

    #[test]
    fn unknown_type_tag_is_unsupported() {
        let mut document = navigation_document();
        document["@type"] = json!("https://example.com/CustomEvent");
        let err = Decoder::new(&clock()).event(&document).unwrap_err();
        assert_eq!(
            err,
            DecodeError::UnsupportedType {
                type_iri: "https://example.com/CustomEvent".to_owned()
            }
        );
    }

    #[test]
    fn unsupported_type_wins_over_missing_fields() {
        // Dispatch happens before field checks.
        let document = json!({ "@type": "https://example.com/CustomEvent" });
        let err = Decoder::new(&clock()).event(&document).unwrap_err();
        assert!(matches!(err, DecodeError::UnsupportedType { .. }));
    }

    #[test]
    fn number_for_string_is_a_shape_error() {
        let document = json!({
            "@id": "https://example.edu/user/554433",
            "@type": "http://purl.imsglobal.org/caliper/v1/lis/Person",
            "name": 42
        });
        let err = Decoder::new(&clock()).entity(&document).unwrap_err();
        assert_eq!(
            err,
            DecodeError::FieldShape {
                field: "name".to_owned(),
                expected: "a string",
                found: "a number"
            }
        );
    }

    #[test]
    fn top_level_scalar_is_not_an_object() {
        let err = Decoder::new(&clock()).entity(&json!("just a string")).unwrap_err();
        assert_eq!(err, DecodeError::NotAnObject { found: "a string" });
    }

    #[test]
    fn unparseable_text_is_a_syntax_error() {
        let err = Decoder::new(&clock()).event_str("{not json").unwrap_err();
        assert!(matches!(err, DecodeError::Syntax(_)));
    }

    #[test]
    fn reference_forms_survive_decoding() {
        let decoded = Decoder::new(&clock()).event(&navigation_document()).unwrap();
        let base = decoded.base();
        assert!(matches!(base.actor, EntityRef::Id(_)));
        assert!(matches!(base.object, EntityRef::Entity(_)));
        assert_eq!(
            base.object.id(),
            "https://example.com/viewer/book/34843#epubcfi(/4/3)"
        );
    }

    #[test]
    fn absent_timestamps_fall_back_to_the_decoder_clock() {
        let clock = clock();
        let document = json!({
            "@id": "https://example.edu/user/554433",
            "@type": "http://purl.imsglobal.org/caliper/v1/lis/Person"
        });
        let decoded = Decoder::new(&clock).entity(&document).unwrap();
        assert_eq!(decoded.base().date_created, clock.now());
        assert_eq!(decoded.base().date_modified, clock.now());
    }

    #[test]
    fn malformed_timestamp_is_a_shape_error() {
        let document = json!({
            "@id": "https://example.edu/user/554433",
            "@type": "http://purl.imsglobal.org/caliper/v1/lis/Person",
            "dateCreated": "yesterday-ish"
        });
        let err = Decoder::new(&clock()).entity(&document).unwrap_err();
        assert_eq!(
            err,
            DecodeError::FieldShape {
                field: "dateCreated".to_owned(),
                expected: "an ISO-8601 timestamp",
                found: "a string"
            }
        );
    }

    #[test]
    fn roles_preserve_document_order() {
        let document = json!({
            "@id": "https://example.edu/pol101/roster/554433",
            "@type": "http://purl.imsglobal.org/caliper/v1/lis/Membership",
            "roles": [
                "http://purl.imsglobal.org/vocab/lis/v2/membership#Instructor",
                "http://purl.imsglobal.org/vocab/lis/v2/membership#Learner"
            ]
        });
        let decoded = Decoder::new(&clock()).entity(&document).unwrap();
        let Entity::Membership(membership) = decoded else {
            panic!("wrong variant");
        };
        assert_eq!(
            membership.roles,
            vec![
                "http://purl.imsglobal.org/vocab/lis/v2/membership#Instructor".to_owned(),
                "http://purl.imsglobal.org/vocab/lis/v2/membership#Learner".to_owned()
            ]
        );
    }

    #[test]
    fn negative_count_is_a_shape_error() {
        let document = json!({
            "@id": "https://example.edu/assessment/1/attempt/1",
            "@type": "http://purl.imsglobal.org/caliper/v1/Attempt",
            "count": -1
        });
        let err = Decoder::new(&clock()).entity(&document).unwrap_err();
        assert_eq!(
            err,
            DecodeError::FieldShape {
                field: "count".to_owned(),
                expected: "an unsigned integer",
                found: "a number"
            }
        );
    }

    #[test]
    fn decode_inverts_encode_for_a_nested_graph() {
        let clock = clock();
        let mut person = crate::entities::Person::new("https://example.edu/user/554433", &clock);
        person.base.name = "Student 554433".to_owned();
        let volume =
            crate::entities::EPubVolume::new("https://example.com/viewer/book/34843", &clock);

        let event: Event = NavigationEvent::new(
            EntityRef::embedded(person),
            actions::navigation::NAVIGATED_TO,
            EntityRef::embedded(volume),
            clock.now(),
        )
        .with_ed_app(EntityRef::by_id("https://example.com/viewer"))
        .into();

        let document = event_to_json(&event);
        let decoded = Decoder::new(&clock).event(&document).unwrap();
        assert_eq!(decoded, event);
    }

    #[test]
    fn entity_decode_inverts_encode() {
        let clock = clock();
        let mut membership =
            crate::entities::Membership::new("https://example.edu/pol101/roster/554433", &clock);
        membership.member = Some("https://example.edu/user/554433".to_owned());
        membership.roles = vec![
            "http://purl.imsglobal.org/vocab/lis/v2/membership#Learner".to_owned(),
        ];
        let entity = Entity::Membership(membership);

        let document = entity_to_json(&entity);
        let decoded = Decoder::new(&clock).entity(&document).unwrap();
        assert_eq!(decoded, entity);
    }
}
