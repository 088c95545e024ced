//! Reading events.

use chrono::{DateTime, Utc};

use crate::entities::EntityRef;
use crate::events::{Event, EventBase, EventContext};

/// An actor viewing a resource, conventionally with a `Frame` target
/// pinning the spot being read.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewEvent {
    /// Common event fields.
    pub base: EventBase,
}

impl ViewEvent {
    /// Builds a view event from the four required fields.
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

impl EventContext for ViewEvent {
    fn base_mut(&mut self) -> &mut EventBase {
        &mut self.base
    }
}

impl From<ViewEvent> for Event {
    fn from(event: ViewEvent) -> Self {
        Event::View(event)
    }
}
