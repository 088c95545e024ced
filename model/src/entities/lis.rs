//! LIS organizational entities: organizations, courses, groups, and
//! the memberships tying people to them.
//!
//! `Membership` follows the LIS v2 convention of referring to its member
//! and organization by IRI only; both sides stay id references and are
//! never embedded.

use chrono::{DateTime, Utc};

use crate::clock::Clock;
use crate::entities::{Describable, Entity, EntityBase, EntityRef, Temporal};
use crate::vocab::entity_type;

/// An organization such as an institution or a department.
#[derive(Debug, Clone, PartialEq)]
pub struct Organization {
    /// Common entity attributes.
    pub base: EntityBase,
    /// Parent organization, when this one is nested.
    pub sub_organization_of: Option<EntityRef>,
}

impl Organization {
    /// Builds an organization with timestamps taken from `clock`.
    #[must_use]
    pub fn new(id: impl Into<String>, clock: &dyn Clock) -> Self {
        Self {
            base: EntityBase::new(id, clock),
            sub_organization_of: None,
        }
    }
}

impl Describable for Organization {
    fn id(&self) -> &str {
        &self.base.id
    }

    fn type_iri(&self) -> &'static str {
        entity_type::ORGANIZATION
    }
}

impl Temporal for Organization {
    fn date_created(&self) -> DateTime<Utc> {
        self.base.date_created
    }

    fn date_modified(&self) -> DateTime<Utc> {
        self.base.date_modified
    }
}

impl From<Organization> for Entity {
    fn from(entity: Organization) -> Self {
        Entity::Organization(entity)
    }
}

/// A course offering: one course run in one academic session.
#[derive(Debug, Clone, PartialEq)]
pub struct CourseOffering {
    /// Common entity attributes.
    pub base: EntityBase,
    /// Institutional course number, e.g. `POL101`.
    pub course_number: Option<String>,
    /// Academic session label, e.g. `Fall-2015`.
    pub academic_session: Option<String>,
    /// Parent organization.
    pub sub_organization_of: Option<EntityRef>,
}

impl CourseOffering {
    /// Builds a course offering with timestamps taken from `clock`.
    #[must_use]
    pub fn new(id: impl Into<String>, clock: &dyn Clock) -> Self {
        Self {
            base: EntityBase::new(id, clock),
            course_number: None,
            academic_session: None,
            sub_organization_of: None,
        }
    }
}

impl Describable for CourseOffering {
    fn id(&self) -> &str {
        &self.base.id
    }

    fn type_iri(&self) -> &'static str {
        entity_type::COURSE_OFFERING
    }
}

impl Temporal for CourseOffering {
    fn date_created(&self) -> DateTime<Utc> {
        self.base.date_created
    }

    fn date_modified(&self) -> DateTime<Utc> {
        self.base.date_modified
    }
}

impl From<CourseOffering> for Entity {
    fn from(entity: CourseOffering) -> Self {
        Entity::CourseOffering(entity)
    }
}

/// One section of a course offering.
#[derive(Debug, Clone, PartialEq)]
pub struct CourseSection {
    /// Common entity attributes.
    pub base: EntityBase,
    /// Institutional course number, e.g. `POL101`.
    pub course_number: Option<String>,
    /// Academic session label, e.g. `Fall-2015`.
    pub academic_session: Option<String>,
    /// The offering this section belongs to.
    pub sub_organization_of: Option<EntityRef>,
}

impl CourseSection {
    /// Builds a course section with timestamps taken from `clock`.
    #[must_use]
    pub fn new(id: impl Into<String>, clock: &dyn Clock) -> Self {
        Self {
            base: EntityBase::new(id, clock),
            course_number: None,
            academic_session: None,
            sub_organization_of: None,
        }
    }
}

impl Describable for CourseSection {
    fn id(&self) -> &str {
        &self.base.id
    }

    fn type_iri(&self) -> &'static str {
        entity_type::COURSE_SECTION
    }
}

impl Temporal for CourseSection {
    fn date_created(&self) -> DateTime<Utc> {
        self.base.date_created
    }

    fn date_modified(&self) -> DateTime<Utc> {
        self.base.date_modified
    }
}

impl From<CourseSection> for Entity {
    fn from(entity: CourseSection) -> Self {
        Entity::CourseSection(entity)
    }
}

/// A working group inside a section or offering.
#[derive(Debug, Clone, PartialEq)]
pub struct Group {
    /// Common entity attributes.
    pub base: EntityBase,
    /// The section or offering this group belongs to.
    pub sub_organization_of: Option<EntityRef>,
}

impl Group {
    /// Builds a group with timestamps taken from `clock`.
    #[must_use]
    pub fn new(id: impl Into<String>, clock: &dyn Clock) -> Self {
        Self {
            base: EntityBase::new(id, clock),
            sub_organization_of: None,
        }
    }
}

impl Describable for Group {
    fn id(&self) -> &str {
        &self.base.id
    }

    fn type_iri(&self) -> &'static str {
        entity_type::GROUP
    }
}

impl Temporal for Group {
    fn date_created(&self) -> DateTime<Utc> {
        self.base.date_created
    }

    fn date_modified(&self) -> DateTime<Utc> {
        self.base.date_modified
    }
}

impl From<Group> for Entity {
    fn from(entity: Group) -> Self {
        Entity::Group(entity)
    }
}

/// A person's membership in an organization, with zero or more LIS roles
/// and an optional status.
///
/// `roles` is ordered and serializes in the order the caller supplied.
#[derive(Debug, Clone, PartialEq)]
pub struct Membership {
    /// Common entity attributes.
    pub base: EntityBase,
    /// IRI of the member.
    pub member: Option<String>,
    /// IRI of the organization the member belongs to.
    pub organization: Option<String>,
    /// LIS role URIs, in caller order.
    pub roles: Vec<String>,
    /// LIS status URI.
    pub status: Option<String>,
}

impl Membership {
    /// Builds a membership with timestamps taken from `clock`.
    #[must_use]
    pub fn new(id: impl Into<String>, clock: &dyn Clock) -> Self {
        Self {
            base: EntityBase::new(id, clock),
            member: None,
            organization: None,
            roles: Vec::new(),
            status: None,
        }
    }
}

impl Describable for Membership {
    fn id(&self) -> &str {
        &self.base.id
    }

    fn type_iri(&self) -> &'static str {
        entity_type::MEMBERSHIP
    }
}

impl Temporal for Membership {
    fn date_created(&self) -> DateTime<Utc> {
        self.base.date_created
    }

    fn date_modified(&self) -> DateTime<Utc> {
        self.base.date_modified
    }
}

impl From<Membership> for Entity {
    fn from(entity: Membership) -> Self {
        Entity::Membership(entity)
    }
}
