//! The Caliper event model.
//!
//! An event records one actor performing one action on one object at one
//! instant. Those four fields are constructor arguments on every variant,
//! so an event missing any of them cannot be built; the optional context
//! fields are filled through the chainable [`EventContext`] setters.

pub mod assessment;
pub mod assignable;
pub mod media;
pub mod navigation;
pub mod outcome;
pub mod reading;
pub mod session;

pub use assessment::{AssessmentEvent, AssessmentItemEvent};
pub use assignable::AssignableEvent;
pub use media::MediaEvent;
pub use navigation::NavigationEvent;
pub use outcome::OutcomeEvent;
pub use reading::ViewEvent;
pub use session::SessionEvent;

use chrono::{DateTime, Utc};

use crate::entities::EntityRef;
use crate::vocab::event_type;

/// Fields common to every event variant.
#[derive(Debug, Clone, PartialEq)]
pub struct EventBase {
    /// Who performed the action.
    pub actor: EntityRef,
    /// Action URI from the event's profile table.
    pub action: String,
    /// What the action was performed on.
    pub object: EntityRef,
    /// The more specific object within `object`, when one exists.
    pub target: Option<EntityRef>,
    /// Entity the event brought into being.
    pub generated: Option<EntityRef>,
    /// Instant the event occurred.
    pub event_time: DateTime<Utc>,
    /// Application in which the event happened.
    pub ed_app: Option<EntityRef>,
    /// Group context, usually a course section or group.
    pub group: Option<EntityRef>,
    /// The actor's membership in the group context.
    pub membership: Option<EntityRef>,
}

impl EventBase {
    /// Builds the common event fields from the four required values.
    #[must_use]
    pub fn new(
        actor: EntityRef,
        action: impl Into<String>,
        object: EntityRef,
        event_time: DateTime<Utc>,
    ) -> Self {
        Self {
            actor,
            action: action.into(),
            object,
            target: None,
            generated: None,
            event_time,
            ed_app: None,
            group: None,
            membership: None,
        }
    }
}

/// Chainable setters for the optional event context fields.
///
/// Every event variant exposes its [`EventBase`] through `base_mut` and
/// inherits the setters, so context is attached the same way regardless
/// of variant.
pub trait EventContext {
    /// Mutable access to the common event fields.
    fn base_mut(&mut self) -> &mut EventBase;

    /// Sets the target, the more specific object within `object`.
    #[must_use]
    fn with_target(mut self, target: EntityRef) -> Self
    where
        Self: Sized,
    {
        self.base_mut().target = Some(target);
        self
    }

    /// Sets the entity the event brought into being.
    #[must_use]
    fn with_generated(mut self, generated: EntityRef) -> Self
    where
        Self: Sized,
    {
        self.base_mut().generated = Some(generated);
        self
    }

    /// Sets the application in which the event happened.
    #[must_use]
    fn with_ed_app(mut self, ed_app: EntityRef) -> Self
    where
        Self: Sized,
    {
        self.base_mut().ed_app = Some(ed_app);
        self
    }

    /// Sets the group context.
    #[must_use]
    fn with_group(mut self, group: EntityRef) -> Self
    where
        Self: Sized,
    {
        self.base_mut().group = Some(group);
        self
    }

    /// Sets the actor's membership in the group context.
    #[must_use]
    fn with_membership(mut self, membership: EntityRef) -> Self
    where
        Self: Sized,
    {
        self.base_mut().membership = Some(membership);
        self
    }
}

/// The closed set of event variants.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// An actor navigating to a resource.
    Navigation(NavigationEvent),
    /// An actor viewing a resource.
    View(ViewEvent),
    /// An actor controlling media playback.
    Media(MediaEvent),
    /// An actor working an assignable resource.
    Assignable(AssignableEvent),
    /// An actor working an assessment.
    Assessment(AssessmentEvent),
    /// An actor working one assessment item.
    AssessmentItem(AssessmentItemEvent),
    /// A grade being recorded for an attempt.
    Outcome(OutcomeEvent),
    /// An actor starting or ending a session.
    Session(SessionEvent),
}

impl Event {
    /// Common fields of whichever variant this is.
    #[must_use]
    pub fn base(&self) -> &EventBase {
        match self {
            Event::Navigation(e) => &e.base,
            Event::View(e) => &e.base,
            Event::Media(e) => &e.base,
            Event::Assignable(e) => &e.base,
            Event::Assessment(e) => &e.base,
            Event::AssessmentItem(e) => &e.base,
            Event::Outcome(e) => &e.base,
            Event::Session(e) => &e.base,
        }
    }

    /// Mutable access to the common fields.
    pub fn base_mut(&mut self) -> &mut EventBase {
        match self {
            Event::Navigation(e) => &mut e.base,
            Event::View(e) => &mut e.base,
            Event::Media(e) => &mut e.base,
            Event::Assignable(e) => &mut e.base,
            Event::Assessment(e) => &mut e.base,
            Event::AssessmentItem(e) => &mut e.base,
            Event::Outcome(e) => &mut e.base,
            Event::Session(e) => &mut e.base,
        }
    }

    /// Vocabulary URI naming the concrete event kind.
    #[must_use]
    pub fn type_iri(&self) -> &'static str {
        match self {
            Event::Navigation(_) => event_type::NAVIGATION,
            Event::View(_) => event_type::VIEW,
            Event::Media(_) => event_type::MEDIA,
            Event::Assignable(_) => event_type::ASSIGNABLE,
            Event::Assessment(_) => event_type::ASSESSMENT,
            Event::AssessmentItem(_) => event_type::ASSESSMENT_ITEM,
            Event::Outcome(_) => event_type::OUTCOME,
            Event::Session(_) => event_type::SESSION,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vocab::actions;
    use chrono::TimeZone;

    fn event_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2015, 9, 15, 10, 15, 0).unwrap()
    }

    fn every_event() -> Vec<Event> {
        let actor = EntityRef::by_id("https://example.edu/user/554433");
        let object = EntityRef::by_id("https://example.com/resource/1");
        vec![
            NavigationEvent::new(
                actor.clone(),
                actions::navigation::NAVIGATED_TO,
                object.clone(),
                event_time(),
            )
            .into(),
            ViewEvent::new(
                actor.clone(),
                actions::reading::VIEWED,
                object.clone(),
                event_time(),
            )
            .into(),
            MediaEvent::new(
                actor.clone(),
                actions::media::PAUSED,
                object.clone(),
                event_time(),
            )
            .into(),
            AssignableEvent::new(
                actor.clone(),
                actions::assignable::STARTED,
                object.clone(),
                event_time(),
            )
            .into(),
            AssessmentEvent::new(
                actor.clone(),
                actions::assessment::SUBMITTED,
                object.clone(),
                event_time(),
            )
            .into(),
            AssessmentItemEvent::new(
                actor.clone(),
                actions::assessment_item::COMPLETED,
                object.clone(),
                event_time(),
            )
            .into(),
            OutcomeEvent::new(
                actor.clone(),
                actions::outcome::GRADED,
                object.clone(),
                event_time(),
            )
            .into(),
            SessionEvent::new(actor, actions::session::LOGGED_IN, object, event_time()).into(),
        ]
    }

    #[test]
    fn type_tags_are_unique_across_variants() {
        let mut seen = std::collections::HashSet::new();
        for event in every_event() {
            assert!(
                seen.insert(event.type_iri()),
                "duplicate type tag: {}",
                event.type_iri()
            );
        }
        assert_eq!(seen.len(), 8);
    }

    #[test]
    fn type_tag_survives_context_mutation() {
        for mut event in every_event() {
            let before = event.type_iri();
            event.base_mut().group = Some(EntityRef::by_id("https://example.edu/pol101"));
            event.base_mut().target = None;
            assert_eq!(event.type_iri(), before);
        }
    }

    #[test]
    fn context_setters_fill_the_optional_slots() {
        let event = NavigationEvent::new(
            EntityRef::by_id("https://example.edu/user/554433"),
            actions::navigation::NAVIGATED_TO,
            EntityRef::by_id("https://example.com/book/1"),
            event_time(),
        )
        .with_target(EntityRef::by_id("https://example.com/book/1#frame"))
        .with_ed_app(EntityRef::by_id("https://example.com/viewer"))
        .with_group(EntityRef::by_id("https://example.edu/pol101"))
        .with_membership(EntityRef::by_id("https://example.edu/pol101/roster/554433"));

        assert!(event.base.target.is_some());
        assert!(event.base.generated.is_none());
        assert!(event.base.ed_app.is_some());
        assert!(event.base.group.is_some());
        assert!(event.base.membership.is_some());
    }

    #[test]
    fn required_fields_land_in_the_base() {
        let event = SessionEvent::new(
            EntityRef::by_id("https://example.edu/user/554433"),
            actions::session::LOGGED_IN,
            EntityRef::by_id("https://example.com/viewer"),
            event_time(),
        );
        assert_eq!(event.base.actor.id(), "https://example.edu/user/554433");
        assert_eq!(event.base.action, actions::session::LOGGED_IN);
        assert_eq!(event.base.object.id(), "https://example.com/viewer");
        assert_eq!(event.base.event_time, event_time());
    }
}
