//! Learning objective entities.

use chrono::{DateTime, Utc};

use crate::clock::Clock;
use crate::entities::{Describable, Entity, EntityBase, Temporal};
use crate::vocab::entity_type;

/// A learning objective a resource can be aligned with.
#[derive(Debug, Clone, PartialEq)]
pub struct LearningObjective {
    /// Common entity attributes.
    pub base: EntityBase,
}

impl LearningObjective {
    /// Builds a learning objective with timestamps taken from `clock`.
    #[must_use]
    pub fn new(id: impl Into<String>, clock: &dyn Clock) -> Self {
        Self {
            base: EntityBase::new(id, clock),
        }
    }
}

impl Describable for LearningObjective {
    fn id(&self) -> &str {
        &self.base.id
    }

    fn type_iri(&self) -> &'static str {
        entity_type::LEARNING_OBJECTIVE
    }
}

impl Temporal for LearningObjective {
    fn date_created(&self) -> DateTime<Utc> {
        self.base.date_created
    }

    fn date_modified(&self) -> DateTime<Utc> {
        self.base.date_modified
    }
}

impl From<LearningObjective> for Entity {
    fn from(entity: LearningObjective) -> Self {
        Entity::LearningObjective(entity)
    }
}
