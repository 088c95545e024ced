//! Navigation events.

use chrono::{DateTime, Utc};

use crate::entities::EntityRef;
use crate::events::{Event, EventBase, EventContext};

/// An actor navigating to a resource.
#[derive(Debug, Clone, PartialEq)]
pub struct NavigationEvent {
    /// Common event fields.
    pub base: EventBase,
    /// The resource the actor navigated from.
    pub navigated_from: Option<EntityRef>,
}

impl NavigationEvent {
    /// Builds a navigation event from the four required fields.
    #[must_use]
    pub fn new(
        actor: EntityRef,
        action: impl Into<String>,
        object: EntityRef,
        event_time: DateTime<Utc>,
    ) -> Self {
        Self {
            base: EventBase::new(actor, action, object, event_time),
            navigated_from: None,
        }
    }

    /// Sets the resource the actor navigated from.
    #[must_use]
    pub fn with_navigated_from(mut self, navigated_from: EntityRef) -> Self {
        self.navigated_from = Some(navigated_from);
        self
    }
}

impl EventContext for NavigationEvent {
    fn base_mut(&mut self) -> &mut EventBase {
        &mut self.base
    }
}

impl From<NavigationEvent> for Event {
    fn from(event: NavigationEvent) -> Self {
        Event::Navigation(event)
    }
}
