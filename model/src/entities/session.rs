//! Session entities: one actor's bounded use of an application.

use chrono::{DateTime, Utc};

use crate::clock::Clock;
use crate::entities::{Describable, Entity, EntityBase, EntityRef, Temporal};
use crate::vocab::entity_type;

/// A login session.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    /// Common entity attributes.
    pub base: EntityBase,
    /// Whose session this is.
    pub actor: Option<EntityRef>,
    /// Instant the session began.
    pub started_at_time: Option<DateTime<Utc>>,
    /// Instant the session ended.
    pub ended_at_time: Option<DateTime<Utc>>,
    /// Session length as an ISO-8601 duration literal.
    pub duration: Option<String>,
}

impl Session {
    /// Builds a session with timestamps taken from `clock`.
    #[must_use]
    pub fn new(id: impl Into<String>, clock: &dyn Clock) -> Self {
        Self {
            base: EntityBase::new(id, clock),
            actor: None,
            started_at_time: None,
            ended_at_time: None,
            duration: None,
        }
    }
}

impl Describable for Session {
    fn id(&self) -> &str {
        &self.base.id
    }

    fn type_iri(&self) -> &'static str {
        entity_type::SESSION
    }
}

impl Temporal for Session {
    fn date_created(&self) -> DateTime<Utc> {
        self.base.date_created
    }

    fn date_modified(&self) -> DateTime<Utc> {
        self.base.date_modified
    }
}

impl From<Session> for Entity {
    fn from(entity: Session) -> Self {
        Entity::Session(entity)
    }
}
