//! Media playback events.

use chrono::{DateTime, Utc};

use crate::entities::EntityRef;
use crate::events::{Event, EventBase, EventContext};

/// An actor controlling media playback, conventionally with a
/// `MediaLocation` target pinning the playback position.
#[derive(Debug, Clone, PartialEq)]
pub struct MediaEvent {
    /// Common event fields.
    pub base: EventBase,
}

impl MediaEvent {
    /// Builds a media event from the four required fields.
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

impl EventContext for MediaEvent {
    fn base_mut(&mut self) -> &mut EventBase {
        &mut self.base
    }
}

impl From<MediaEvent> for Event {
    fn from(event: MediaEvent) -> Self {
        Event::Media(event)
    }
}
