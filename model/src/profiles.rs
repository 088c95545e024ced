//! Metric profiles: the action table each event kind draws from.
//!
//! A profile groups the actions one kind of learning activity reports.
//! Construction and field assignment never check profile membership;
//! [`validate_event`] is the explicit check a caller runs when it wants
//! the constraints enforced.

use std::fmt;

use crate::entities::{Entity, EntityRef};
use crate::error::ProfileError;
use crate::events::Event;
use crate::vocab::actions;

/// The metric profiles of the v1 information model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Profile {
    /// Navigating between resources.
    Navigation,
    /// Reading resources.
    Reading,
    /// Controlling media playback.
    Media,
    /// Working assignable resources.
    Assignable,
    /// Working assessments.
    Assessment,
    /// Working single assessment items.
    AssessmentItem,
    /// Recording grades.
    Outcome,
    /// Starting and ending sessions.
    Session,
}

impl Profile {
    /// The profile's action table.
    #[must_use]
    pub fn actions(self) -> &'static [&'static str] {
        match self {
            Profile::Navigation => actions::navigation::ALL,
            Profile::Reading => actions::reading::ALL,
            Profile::Media => actions::media::ALL,
            Profile::Assignable => actions::assignable::ALL,
            Profile::Assessment => actions::assessment::ALL,
            Profile::AssessmentItem => actions::assessment_item::ALL,
            Profile::Outcome => actions::outcome::ALL,
            Profile::Session => actions::session::ALL,
        }
    }
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Profile::Navigation => "navigation",
            Profile::Reading => "reading",
            Profile::Media => "media",
            Profile::Assignable => "assignable",
            Profile::Assessment => "assessment",
            Profile::AssessmentItem => "assessment item",
            Profile::Outcome => "outcome",
            Profile::Session => "session",
        };
        f.write_str(name)
    }
}

impl Event {
    /// The fixed profile of this event's variant.
    #[must_use]
    pub fn profile(&self) -> Profile {
        match self {
            Event::Navigation(_) => Profile::Navigation,
            Event::View(_) => Profile::Reading,
            Event::Media(_) => Profile::Media,
            Event::Assignable(_) => Profile::Assignable,
            Event::Assessment(_) => Profile::Assessment,
            Event::AssessmentItem(_) => Profile::AssessmentItem,
            Event::Outcome(_) => Profile::Outcome,
            Event::Session(_) => Profile::Session,
        }
    }
}

/// Checks `event` against its profile's constraints.
///
/// The action must come from the profile's action table. For the
/// assignable profile, an embedded object must additionally be a digital
/// resource and an embedded target must be a frame. Id-only references
/// carry no type information and always pass.
///
/// # Errors
///
/// Returns a [`ProfileError`] naming the first constraint violated.
pub fn validate_event(event: &Event) -> Result<(), ProfileError> {
    let profile = event.profile();
    let base = event.base();

    if !profile.actions().contains(&base.action.as_str()) {
        return Err(ProfileError::ForeignAction {
            action: base.action.clone(),
            profile,
        });
    }

    if profile == Profile::Assignable {
        if let EntityRef::Entity(object) = &base.object {
            if !is_digital_resource(object) {
                return Err(ProfileError::ObjectKind {
                    profile,
                    found: object.type_iri(),
                });
            }
        }
        if let Some(EntityRef::Entity(target)) = &base.target {
            if !matches!(target.as_ref(), Entity::Frame(_)) {
                return Err(ProfileError::TargetKind {
                    profile,
                    found: target.type_iri(),
                });
            }
        }
    }

    Ok(())
}

/// Whether `entity` is in the digital resource family.
fn is_digital_resource(entity: &Entity) -> bool {
    matches!(
        entity,
        Entity::DigitalResource(_)
            | Entity::WebPage(_)
            | Entity::EPubVolume(_)
            | Entity::Frame(_)
            | Entity::MediaObject(_)
            | Entity::ImageObject(_)
            | Entity::AudioObject(_)
            | Entity::VideoObject(_)
            | Entity::MediaLocation(_)
            | Entity::AssignableDigitalResource(_)
            | Entity::Assessment(_)
            | Entity::AssessmentItem(_)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use crate::entities::{Assessment, EPubVolume, Frame, Person};
    use crate::events::{
        AssessmentEvent, AssessmentItemEvent, AssignableEvent, EventContext, MediaEvent,
        NavigationEvent, OutcomeEvent, SessionEvent, ViewEvent,
    };
    use crate::vocab::actions;
    use chrono::{TimeZone, Utc};

    fn clock() -> FixedClock {
        FixedClock(Utc.with_ymd_and_hms(2015, 9, 15, 10, 15, 0).unwrap())
    }

    fn id_refs() -> (EntityRef, EntityRef) {
        (
            EntityRef::by_id("https://example.edu/user/554433"),
            EntityRef::by_id("https://example.com/resource/1"),
        )
    }

    fn event_for(profile: Profile, action: &str) -> Event {
        let (actor, object) = id_refs();
        let time = clock().0;
        match profile {
            Profile::Navigation => NavigationEvent::new(actor, action, object, time).into(),
            Profile::Reading => ViewEvent::new(actor, action, object, time).into(),
            Profile::Media => MediaEvent::new(actor, action, object, time).into(),
            Profile::Assignable => AssignableEvent::new(actor, action, object, time).into(),
            Profile::Assessment => AssessmentEvent::new(actor, action, object, time).into(),
            Profile::AssessmentItem => {
                AssessmentItemEvent::new(actor, action, object, time).into()
            }
            Profile::Outcome => OutcomeEvent::new(actor, action, object, time).into(),
            Profile::Session => SessionEvent::new(actor, action, object, time).into(),
        }
    }

    #[test]
    fn every_profile_accepts_its_whole_action_table() {
        let profiles = [
            Profile::Navigation,
            Profile::Reading,
            Profile::Media,
            Profile::Assignable,
            Profile::Assessment,
            Profile::AssessmentItem,
            Profile::Outcome,
            Profile::Session,
        ];
        for profile in profiles {
            for action in profile.actions() {
                let event = event_for(profile, action);
                assert_eq!(validate_event(&event), Ok(()), "{profile}: {action}");
            }
        }
    }

    #[test]
    fn foreign_action_is_rejected() {
        let event = event_for(Profile::Navigation, actions::reading::VIEWED);
        assert_eq!(
            validate_event(&event),
            Err(ProfileError::ForeignAction {
                action: actions::reading::VIEWED.to_owned(),
                profile: Profile::Navigation,
            })
        );
    }

    #[test]
    fn assignable_embedded_object_must_be_a_digital_resource() {
        let person = Person::new("https://example.edu/user/554433", &clock());
        let event: Event = AssignableEvent::new(
            EntityRef::by_id("https://example.edu/user/554433"),
            actions::assignable::STARTED,
            EntityRef::embedded(person),
            clock().0,
        )
        .into();
        assert_eq!(
            validate_event(&event),
            Err(ProfileError::ObjectKind {
                profile: Profile::Assignable,
                found: "http://purl.imsglobal.org/caliper/v1/lis/Person",
            })
        );
    }

    #[test]
    fn assignable_embedded_target_must_be_a_frame() {
        let assessment = Assessment::new("https://example.edu/assessment/1", &clock());
        let volume = EPubVolume::new("https://example.com/book/1", &clock());
        let event: Event = AssignableEvent::new(
            EntityRef::by_id("https://example.edu/user/554433"),
            actions::assignable::STARTED,
            EntityRef::embedded(assessment),
            clock().0,
        )
        .with_target(EntityRef::embedded(volume))
        .into();
        assert_eq!(
            validate_event(&event),
            Err(ProfileError::TargetKind {
                profile: Profile::Assignable,
                found: "http://www.idpf.org/epub/vocab/structure/#volume",
            })
        );
    }

    #[test]
    fn assignable_frame_target_passes() {
        let assessment = Assessment::new("https://example.edu/assessment/1", &clock());
        let frame = Frame::new("https://example.edu/assessment/1#item", &clock());
        let event: Event = AssignableEvent::new(
            EntityRef::by_id("https://example.edu/user/554433"),
            actions::assignable::STARTED,
            EntityRef::embedded(assessment),
            clock().0,
        )
        .with_target(EntityRef::embedded(frame))
        .into();
        assert_eq!(validate_event(&event), Ok(()));
    }

    #[test]
    fn assignable_id_only_references_always_pass() {
        let event = event_for(Profile::Assignable, actions::assignable::SUBMITTED);
        assert_eq!(validate_event(&event), Ok(()));
    }
}
