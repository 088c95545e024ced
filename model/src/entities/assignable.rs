//! Assignable entities: gradeable resources and attempts against them.
//!
//! The three assignable resource kinds share [`AssignableAttrs`], the
//! window and limit attributes controlling when an assignable is shown,
//! worked on, and submitted. An `Attempt` records one actor working one
//! assignable and is the conventional `generated` entity of assignable
//! and assessment events.

use chrono::{DateTime, Utc};

use crate::clock::Clock;
use crate::entities::{Describable, Entity, EntityBase, EntityRef, ResourceAttrs, Temporal};
use crate::vocab::entity_type;

/// Window and limit attributes shared by assignable resources.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AssignableAttrs {
    /// Instant the assignable becomes available.
    pub date_to_activate: Option<DateTime<Utc>>,
    /// Instant the assignable becomes visible.
    pub date_to_show: Option<DateTime<Utc>>,
    /// Instant work is expected to begin.
    pub date_to_start_on: Option<DateTime<Utc>>,
    /// Submission deadline.
    pub date_to_submit: Option<DateTime<Utc>>,
    /// Maximum number of attempts allowed.
    pub max_attempts: Option<u32>,
    /// Maximum number of submissions allowed.
    pub max_submits: Option<u32>,
    /// Maximum attainable score.
    pub max_score: Option<f64>,
}

/// An assignable digital resource with no more specific kind.
#[derive(Debug, Clone, PartialEq)]
pub struct AssignableDigitalResource {
    /// Common entity attributes.
    pub base: EntityBase,
    /// Common resource attributes.
    pub resource: ResourceAttrs,
    /// Assignment window and limit attributes.
    pub assignable: AssignableAttrs,
}

impl AssignableDigitalResource {
    /// Builds an assignable resource with timestamps taken from `clock`.
    #[must_use]
    pub fn new(id: impl Into<String>, clock: &dyn Clock) -> Self {
        Self {
            base: EntityBase::new(id, clock),
            resource: ResourceAttrs::default(),
            assignable: AssignableAttrs::default(),
        }
    }
}

impl Describable for AssignableDigitalResource {
    fn id(&self) -> &str {
        &self.base.id
    }

    fn type_iri(&self) -> &'static str {
        entity_type::ASSIGNABLE_DIGITAL_RESOURCE
    }
}

impl Temporal for AssignableDigitalResource {
    fn date_created(&self) -> DateTime<Utc> {
        self.base.date_created
    }

    fn date_modified(&self) -> DateTime<Utc> {
        self.base.date_modified
    }
}

impl From<AssignableDigitalResource> for Entity {
    fn from(entity: AssignableDigitalResource) -> Self {
        Entity::AssignableDigitalResource(entity)
    }
}

/// An assessment.
#[derive(Debug, Clone, PartialEq)]
pub struct Assessment {
    /// Common entity attributes.
    pub base: EntityBase,
    /// Common resource attributes.
    pub resource: ResourceAttrs,
    /// Assignment window and limit attributes.
    pub assignable: AssignableAttrs,
}

impl Assessment {
    /// Builds an assessment with timestamps taken from `clock`.
    #[must_use]
    pub fn new(id: impl Into<String>, clock: &dyn Clock) -> Self {
        Self {
            base: EntityBase::new(id, clock),
            resource: ResourceAttrs::default(),
            assignable: AssignableAttrs::default(),
        }
    }
}

impl Describable for Assessment {
    fn id(&self) -> &str {
        &self.base.id
    }

    fn type_iri(&self) -> &'static str {
        entity_type::ASSESSMENT
    }
}

impl Temporal for Assessment {
    fn date_created(&self) -> DateTime<Utc> {
        self.base.date_created
    }

    fn date_modified(&self) -> DateTime<Utc> {
        self.base.date_modified
    }
}

impl From<Assessment> for Entity {
    fn from(entity: Assessment) -> Self {
        Entity::Assessment(entity)
    }
}

/// One item within an assessment.
#[derive(Debug, Clone, PartialEq)]
pub struct AssessmentItem {
    /// Common entity attributes.
    pub base: EntityBase,
    /// Common resource attributes. `is_part_of` names the containing
    /// assessment.
    pub resource: ResourceAttrs,
    /// Assignment window and limit attributes.
    pub assignable: AssignableAttrs,
}

impl AssessmentItem {
    /// Builds an assessment item with timestamps taken from `clock`.
    #[must_use]
    pub fn new(id: impl Into<String>, clock: &dyn Clock) -> Self {
        Self {
            base: EntityBase::new(id, clock),
            resource: ResourceAttrs::default(),
            assignable: AssignableAttrs::default(),
        }
    }
}

impl Describable for AssessmentItem {
    fn id(&self) -> &str {
        &self.base.id
    }

    fn type_iri(&self) -> &'static str {
        entity_type::ASSESSMENT_ITEM
    }
}

impl Temporal for AssessmentItem {
    fn date_created(&self) -> DateTime<Utc> {
        self.base.date_created
    }

    fn date_modified(&self) -> DateTime<Utc> {
        self.base.date_modified
    }
}

impl From<AssessmentItem> for Entity {
    fn from(entity: AssessmentItem) -> Self {
        Entity::AssessmentItem(entity)
    }
}

/// One actor's attempt at an assignable.
#[derive(Debug, Clone, PartialEq)]
pub struct Attempt {
    /// Common entity attributes.
    pub base: EntityBase,
    /// The assignable being attempted.
    pub assignable: Option<EntityRef>,
    /// Who is attempting.
    pub actor: Option<EntityRef>,
    /// Ordinal of this attempt, starting at 1.
    pub count: Option<u32>,
    /// Instant the attempt began.
    pub started_at_time: Option<DateTime<Utc>>,
    /// Instant the attempt ended.
    pub ended_at_time: Option<DateTime<Utc>>,
    /// Total working time as an ISO-8601 duration literal.
    pub duration: Option<String>,
}

impl Attempt {
    /// Builds an attempt with timestamps taken from `clock`.
    #[must_use]
    pub fn new(id: impl Into<String>, clock: &dyn Clock) -> Self {
        Self {
            base: EntityBase::new(id, clock),
            assignable: None,
            actor: None,
            count: None,
            started_at_time: None,
            ended_at_time: None,
            duration: None,
        }
    }
}

impl Describable for Attempt {
    fn id(&self) -> &str {
        &self.base.id
    }

    fn type_iri(&self) -> &'static str {
        entity_type::ATTEMPT
    }
}

impl Temporal for Attempt {
    fn date_created(&self) -> DateTime<Utc> {
        self.base.date_created
    }

    fn date_modified(&self) -> DateTime<Utc> {
        self.base.date_modified
    }
}

impl From<Attempt> for Entity {
    fn from(entity: Attempt) -> Self {
        Entity::Attempt(entity)
    }
}
