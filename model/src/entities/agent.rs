//! Agent entities: the people and software applications that act.

use chrono::{DateTime, Utc};

use crate::clock::Clock;
use crate::entities::{Describable, Entity, EntityBase, Temporal};
use crate::vocab::entity_type;

/// A person, the usual actor of an event.
#[derive(Debug, Clone, PartialEq)]
pub struct Person {
    /// Common entity attributes.
    pub base: EntityBase,
}

impl Person {
    /// Builds a person with timestamps taken from `clock`.
    #[must_use]
    pub fn new(id: impl Into<String>, clock: &dyn Clock) -> Self {
        Self {
            base: EntityBase::new(id, clock),
        }
    }
}

impl Describable for Person {
    fn id(&self) -> &str {
        &self.base.id
    }

    fn type_iri(&self) -> &'static str {
        entity_type::PERSON
    }
}

impl Temporal for Person {
    fn date_created(&self) -> DateTime<Utc> {
        self.base.date_created
    }

    fn date_modified(&self) -> DateTime<Utc> {
        self.base.date_modified
    }
}

impl From<Person> for Entity {
    fn from(entity: Person) -> Self {
        Entity::Person(entity)
    }
}

/// A software application, typically the `edApp` of an event or the
/// scorer of a result.
#[derive(Debug, Clone, PartialEq)]
pub struct SoftwareApplication {
    /// Common entity attributes.
    pub base: EntityBase,
}

impl SoftwareApplication {
    /// Builds a software application with timestamps taken from `clock`.
    #[must_use]
    pub fn new(id: impl Into<String>, clock: &dyn Clock) -> Self {
        Self {
            base: EntityBase::new(id, clock),
        }
    }
}

impl Describable for SoftwareApplication {
    fn id(&self) -> &str {
        &self.base.id
    }

    fn type_iri(&self) -> &'static str {
        entity_type::SOFTWARE_APPLICATION
    }
}

impl Temporal for SoftwareApplication {
    fn date_created(&self) -> DateTime<Utc> {
        self.base.date_created
    }

    fn date_modified(&self) -> DateTime<Utc> {
        self.base.date_modified
    }
}

impl From<SoftwareApplication> for Entity {
    fn from(entity: SoftwareApplication) -> Self {
        Entity::SoftwareApplication(entity)
    }
}
