//! Assignable events.

use chrono::{DateTime, Utc};

use crate::entities::EntityRef;
use crate::events::{Event, EventBase, EventContext};

/// An actor working an assignable resource, conventionally generating
/// an `Attempt`.
#[derive(Debug, Clone, PartialEq)]
pub struct AssignableEvent {
    /// Common event fields.
    pub base: EventBase,
}

impl AssignableEvent {
    /// Builds an assignable event from the four required fields.
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

impl EventContext for AssignableEvent {
    fn base_mut(&mut self) -> &mut EventBase {
        &mut self.base
    }
}

impl From<AssignableEvent> for Event {
    fn from(event: AssignableEvent) -> Self {
        Event::Assignable(event)
    }
}
