//! IMS Caliper v1 learning-analytics data model.
//!
//! The `caliper-model` crate models Caliper entities and events as plain
//! Rust records and serializes them to the canonical JSON form of the v1
//! information model: fixed key order, absence (never null) for unset
//! fields, and embedded entities vs. id-only references preserved exactly
//! as the producer chose them.
//!
//! # Entry Point
//!
//! ```
//! use caliper_model::entities::{EPubVolume, Person};
//! use caliper_model::events::NavigationEvent;
//! use caliper_model::serializer::{event_to_json, Decoder};
//! use caliper_model::vocab::actions;
//! use caliper_model::{Clock, EntityRef, Event, FixedClock};
//! use chrono::{TimeZone, Utc};
//!
//! let clock = FixedClock(Utc.with_ymd_and_hms(2015, 9, 15, 10, 15, 0).unwrap());
//! let actor = Person::new("https://example.edu/user/554433", &clock);
//! let volume = EPubVolume::new("https://example.com/viewer/book/34843#epubcfi(/4/3)", &clock);
//!
//! let event = Event::from(NavigationEvent::new(
//!     EntityRef::embedded(actor),
//!     actions::navigation::NAVIGATED_TO,
//!     EntityRef::embedded(volume),
//!     clock.now(),
//! ));
//!
//! let document = event_to_json(&event);
//! let decoded = Decoder::new(&clock).event(&document).unwrap();
//! assert_eq!(decoded, event);
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod clock;
pub mod entities;
pub mod error;
pub mod events;
pub mod profiles;
pub mod serializer;
pub mod vocab;

pub use clock::{Clock, FixedClock, SystemClock};
pub use entities::{Describable, Entity, EntityBase, EntityRef, Temporal};
pub use error::{DecodeError, ProfileError};
pub use events::{Event, EventBase, EventContext};
pub use profiles::{validate_event, Profile};
pub use serializer::{entity_to_json, entity_to_string, event_to_json, event_to_string, Decoder};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{
        Assessment, AssessmentItem, AssignableDigitalResource, Attempt, AudioObject,
        CourseOffering, CourseSection, DigitalResource, EPubVolume, Frame, GenericEntity, Group,
        ImageObject, LearningObjective, MediaLocation, MediaObject, Membership, Organization,
        Person, ResultEntity, Session, SoftwareApplication, VideoObject, View, WebPage,
    };
    use chrono::{TimeZone, Utc};

    fn clock() -> FixedClock {
        FixedClock(Utc.with_ymd_and_hms(2015, 8, 1, 6, 0, 0).unwrap())
    }

    fn every_entity() -> Vec<Entity> {
        let clock = clock();
        vec![
            GenericEntity::new("https://example.edu/thing/1", &clock).into(),
            Person::new("https://example.edu/user/554433", &clock).into(),
            SoftwareApplication::new("https://example.com/viewer", &clock).into(),
            Organization::new("https://example.edu", &clock).into(),
            CourseOffering::new("https://example.edu/pol101", &clock).into(),
            CourseSection::new("https://example.edu/pol101/section/001", &clock).into(),
            Group::new("https://example.edu/pol101/section/001/group/001", &clock).into(),
            Membership::new("https://example.edu/pol101/roster/554433", &clock).into(),
            DigitalResource::new("https://example.com/resource/1", &clock).into(),
            WebPage::new("https://example.com/page/1", &clock).into(),
            EPubVolume::new("https://example.com/book/1", &clock).into(),
            Frame::new("https://example.com/book/1#frame", &clock).into(),
            MediaObject::new("https://example.com/media/1", &clock).into(),
            ImageObject::new("https://example.com/image/1", &clock).into(),
            AudioObject::new("https://example.com/audio/1", &clock).into(),
            VideoObject::new("https://example.com/video/1", &clock).into(),
            MediaLocation::new("https://example.com/video/1?t=710", &clock).into(),
            AssignableDigitalResource::new("https://example.edu/assignable/1", &clock).into(),
            Assessment::new("https://example.edu/assessment/1", &clock).into(),
            AssessmentItem::new("https://example.edu/assessment/1/item/1", &clock).into(),
            Attempt::new("https://example.edu/assessment/1/attempt/1", &clock).into(),
            ResultEntity::new("https://example.edu/assessment/1/result/1", &clock).into(),
            Session::new("https://example.com/session/1", &clock).into(),
            LearningObjective::new("https://example.edu/objective/1", &clock).into(),
            View::new("https://example.edu/view/1", &clock).into(),
        ]
    }

    #[test]
    fn every_variant_carries_its_own_type_tag() {
        // Mutating other fields must never move the tag.
        for mut entity in every_entity() {
            let before = entity.type_iri();
            entity.base_mut().name = "changed".to_owned();
            entity.base_mut().description = "changed".to_owned();
            assert_eq!(entity.type_iri(), before);
        }
    }

    #[test]
    fn type_tags_are_unique_across_variants() {
        let mut seen = std::collections::HashSet::new();
        for entity in every_entity() {
            assert!(
                seen.insert(entity.type_iri()),
                "duplicate type tag: {}",
                entity.type_iri()
            );
        }
        assert_eq!(seen.len(), 25);
    }

    #[test]
    fn entity_id_comes_from_the_base() {
        for entity in every_entity() {
            assert_eq!(entity.id(), entity.base().id);
        }
    }
}
