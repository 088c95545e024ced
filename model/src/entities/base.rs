//! Attribute set and capability traits shared by every entity variant.
//!
//! Each concrete entity embeds [`EntityBase`] as a public `base` field and
//! layers its own attributes on top. Identity (`@id`/`@type`) and temporal
//! metadata are exposed through the [`Describable`] and [`Temporal`] traits
//! so callers can work over any variant without matching on the
//! [`Entity`] enum.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};

use crate::clock::Clock;
use crate::entities::Entity;
use crate::vocab::entity_type;

/// Identity every entity carries: a globally unique IRI plus the
/// vocabulary URI naming its concrete kind.
pub trait Describable {
    /// Globally unique IRI identifying the entity.
    fn id(&self) -> &str;

    /// Vocabulary URI naming the concrete kind.
    ///
    /// The tag is fixed per variant and never stored as data, so it cannot
    /// drift after construction.
    fn type_iri(&self) -> &'static str;
}

/// Temporal metadata every entity carries.
pub trait Temporal {
    /// Instant the entity was created.
    fn date_created(&self) -> DateTime<Utc>;

    /// Instant the entity was last modified.
    fn date_modified(&self) -> DateTime<Utc>;
}

/// Attributes common to every entity variant.
///
/// `name`, `description`, and `properties` start at their empty sentinels
/// and stay out of the serialized form until set. Both timestamps default
/// to the same clock reading at construction and may be overwritten by
/// plain assignment.
#[derive(Debug, Clone, PartialEq)]
pub struct EntityBase {
    /// Globally unique IRI for the entity.
    pub id: String,
    /// Display name. Empty means unset.
    pub name: String,
    /// Free-text description. Empty means unset.
    pub description: String,
    /// Producer-defined extension attributes.
    pub properties: BTreeMap<String, String>,
    /// Instant the entity was created.
    pub date_created: DateTime<Utc>,
    /// Instant the entity was last modified.
    pub date_modified: DateTime<Utc>,
}

impl EntityBase {
    /// Builds the common attribute set, reading `clock` once so that both
    /// timestamps start at the same instant.
    #[must_use]
    pub fn new(id: impl Into<String>, clock: &dyn Clock) -> Self {
        let now = clock.now();
        Self {
            id: id.into(),
            name: String::new(),
            description: String::new(),
            properties: BTreeMap::new(),
            date_created: now,
            date_modified: now,
        }
    }
}

/// An entity with no kind-specific attributes, tagged with the root
/// entity type URI.
#[derive(Debug, Clone, PartialEq)]
pub struct GenericEntity {
    /// Common entity attributes.
    pub base: EntityBase,
}

impl GenericEntity {
    /// Builds a generic entity with timestamps taken from `clock`.
    #[must_use]
    pub fn new(id: impl Into<String>, clock: &dyn Clock) -> Self {
        Self {
            base: EntityBase::new(id, clock),
        }
    }
}

impl Describable for GenericEntity {
    fn id(&self) -> &str {
        &self.base.id
    }

    fn type_iri(&self) -> &'static str {
        entity_type::ENTITY
    }
}

impl Temporal for GenericEntity {
    fn date_created(&self) -> DateTime<Utc> {
        self.base.date_created
    }

    fn date_modified(&self) -> DateTime<Utc> {
        self.base.date_modified
    }
}

impl From<GenericEntity> for Entity {
    fn from(entity: GenericEntity) -> Self {
        Entity::Generic(entity)
    }
}

/// A reference from one record to an entity: either the entity embedded
/// in full or its IRI alone.
///
/// The producer chooses the form and the serializer keeps it. An embedded
/// entity encodes as a nested object, an id reference as a bare JSON
/// string, and decode reconstructs whichever form the document holds.
/// The two forms never compare equal, even when the embedded entity's
/// `@id` matches the id reference.
#[derive(Debug, Clone, PartialEq)]
pub enum EntityRef {
    /// The referenced entity carried in full.
    Entity(Box<Entity>),
    /// The referenced entity's IRI alone.
    Id(String),
}

impl EntityRef {
    /// Wraps `entity` as an embedded reference.
    #[must_use]
    pub fn embedded(entity: impl Into<Entity>) -> Self {
        EntityRef::Entity(Box::new(entity.into()))
    }

    /// Builds an id-only reference.
    #[must_use]
    pub fn by_id(id: impl Into<String>) -> Self {
        EntityRef::Id(id.into())
    }

    /// The referenced entity's IRI, whichever form the reference takes.
    #[must_use]
    pub fn id(&self) -> &str {
        match self {
            EntityRef::Entity(entity) => entity.id(),
            EntityRef::Id(id) => id,
        }
    }
}

impl From<Entity> for EntityRef {
    fn from(entity: Entity) -> Self {
        EntityRef::Entity(Box::new(entity))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use crate::entities::Person;
    use chrono::TimeZone;

    fn clock() -> FixedClock {
        FixedClock(Utc.with_ymd_and_hms(2015, 8, 1, 6, 0, 0).unwrap())
    }

    #[test]
    fn both_timestamps_start_at_the_same_instant() {
        let base = EntityBase::new("https://example.edu/thing/1", &clock());
        assert_eq!(base.date_created, base.date_modified);
        assert_eq!(base.date_created, clock().now());
    }

    #[test]
    fn optional_base_attributes_start_empty() {
        let base = EntityBase::new("https://example.edu/thing/1", &clock());
        assert!(base.name.is_empty());
        assert!(base.description.is_empty());
        assert!(base.properties.is_empty());
    }

    #[test]
    fn reference_forms_never_compare_equal() {
        let person = Person::new("https://example.edu/user/554433", &clock());
        let embedded = EntityRef::embedded(person);
        let by_id = EntityRef::by_id("https://example.edu/user/554433");
        assert_eq!(embedded.id(), by_id.id());
        assert_ne!(embedded, by_id);
    }

    #[test]
    fn embedded_reference_reports_the_inner_id() {
        let person = Person::new("https://example.edu/user/554433", &clock());
        let reference = EntityRef::from(Entity::from(person));
        assert_eq!(reference.id(), "https://example.edu/user/554433");
    }
}
