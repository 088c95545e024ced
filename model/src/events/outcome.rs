//! Outcome events.

use chrono::{DateTime, Utc};

use crate::entities::EntityRef;
use crate::events::{Event, EventBase, EventContext};

/// A grade being recorded for an attempt, conventionally generating a
/// result entity.
#[derive(Debug, Clone, PartialEq)]
pub struct OutcomeEvent {
    /// Common event fields.
    pub base: EventBase,
}

impl OutcomeEvent {
    /// Builds an outcome event from the four required fields.
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

impl EventContext for OutcomeEvent {
    fn base_mut(&mut self) -> &mut EventBase {
        &mut self.base
    }
}

impl From<OutcomeEvent> for Event {
    fn from(event: OutcomeEvent) -> Self {
        Event::Outcome(event)
    }
}
