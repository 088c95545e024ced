//! Assessment and assessment item events.

use chrono::{DateTime, Utc};

use crate::entities::EntityRef;
use crate::events::{Event, EventBase, EventContext};

/// An actor working an assessment as a whole, conventionally generating
/// an `Attempt`.
#[derive(Debug, Clone, PartialEq)]
pub struct AssessmentEvent {
    /// Common event fields.
    pub base: EventBase,
}

impl AssessmentEvent {
    /// Builds an assessment event from the four required fields.
    #[must_use]
    pub fn new(
        actor: EntityRef,
        action: impl Into<String>,
        object: EntityRef,
        event_time: DateTime<Utc>,
    ) -> Self {
        Self {
            base: EventBase::new(actor, action, object, event_time),
        }
    }
}

impl EventContext for AssessmentEvent {
    fn base_mut(&mut self) -> &mut EventBase {
        &mut self.base
    }
}

impl From<AssessmentEvent> for Event {
    fn from(event: AssessmentEvent) -> Self {
        Event::Assessment(event)
    }
}

/// An actor working one item within an assessment.
#[derive(Debug, Clone, PartialEq)]
pub struct AssessmentItemEvent {
    /// Common event fields.
    pub base: EventBase,
}

impl AssessmentItemEvent {
    /// Builds an assessment item event from the four required fields.
    #[must_use]
    pub fn new(
        actor: EntityRef,
        action: impl Into<String>,
        object: EntityRef,
        event_time: DateTime<Utc>,
    ) -> Self {
        Self {
            base: EventBase::new(actor, action, object, event_time),
        }
    }
}

impl EventContext for AssessmentItemEvent {
    fn base_mut(&mut self) -> &mut EventBase {
        &mut self.base
    }
}

impl From<AssessmentItemEvent> for Event {
    fn from(event: AssessmentItemEvent) -> Self {
        Event::AssessmentItem(event)
    }
}
