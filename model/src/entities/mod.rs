//! The Caliper entity model.
//!
//! Entities are flat records: each variant owns a public [`EntityBase`]
//! plus its own attributes, and the closed set is the [`Entity`] enum.
//! There is no inheritance chain to walk; attribute groups shared by a
//! family of variants ([`ResourceAttrs`], [`AssignableAttrs`]) are plain
//! structs embedded by value.
//!
//! Cross-entity links use [`EntityRef`], which keeps the producer's
//! choice of embedding versus id-only reference.

pub mod agent;
pub mod assignable;
pub mod base;
pub mod learning;
pub mod lis;
pub mod media;
pub mod outcome;
pub mod resource;
pub mod session;

pub use agent::{Person, SoftwareApplication};
pub use assignable::{
    Assessment, AssessmentItem, AssignableAttrs, AssignableDigitalResource, Attempt,
};
pub use base::{Describable, EntityBase, EntityRef, GenericEntity, Temporal};
pub use learning::LearningObjective;
pub use lis::{CourseOffering, CourseSection, Group, Membership, Organization};
pub use media::{AudioObject, ImageObject, MediaLocation, MediaObject, VideoObject};
pub use outcome::ResultEntity;
pub use resource::{DigitalResource, EPubVolume, Frame, ResourceAttrs, View, WebPage};
pub use session::Session;

use chrono::{DateTime, Utc};

/// The closed set of entity variants.
///
/// Every variant wraps its concrete record; the enum is what the
/// serializer encodes and decodes, and what [`EntityRef`] embeds.
#[derive(Debug, Clone, PartialEq)]
pub enum Entity {
    /// An entity with no kind-specific attributes.
    Generic(GenericEntity),
    /// A person.
    Person(Person),
    /// A software application.
    SoftwareApplication(SoftwareApplication),
    /// An organization.
    Organization(Organization),
    /// A course offering.
    CourseOffering(CourseOffering),
    /// A course section.
    CourseSection(CourseSection),
    /// A working group.
    Group(Group),
    /// A person's membership in an organization.
    Membership(Membership),
    /// A digital resource with no more specific kind.
    DigitalResource(DigitalResource),
    /// A web page.
    WebPage(WebPage),
    /// An EPUB volume.
    EPubVolume(EPubVolume),
    /// One addressable span of a larger resource.
    Frame(Frame),
    /// A record of an actor viewing a frame.
    View(View),
    /// A media object with no more specific kind.
    MediaObject(MediaObject),
    /// An image.
    ImageObject(ImageObject),
    /// An audio recording.
    AudioObject(AudioObject),
    /// A video.
    VideoObject(VideoObject),
    /// A position within a media object.
    MediaLocation(MediaLocation),
    /// An assignable digital resource with no more specific kind.
    AssignableDigitalResource(AssignableDigitalResource),
    /// An assessment.
    Assessment(Assessment),
    /// One item within an assessment.
    AssessmentItem(AssessmentItem),
    /// One actor's attempt at an assignable.
    Attempt(Attempt),
    /// The graded result of an attempt.
    Result(ResultEntity),
    /// A login session.
    Session(Session),
    /// A learning objective.
    LearningObjective(LearningObjective),
}

impl Entity {
    /// Common attributes of whichever variant this is.
    #[must_use]
    pub fn base(&self) -> &EntityBase {
        match self {
            Entity::Generic(e) => &e.base,
            Entity::Person(e) => &e.base,
            Entity::SoftwareApplication(e) => &e.base,
            Entity::Organization(e) => &e.base,
            Entity::CourseOffering(e) => &e.base,
            Entity::CourseSection(e) => &e.base,
            Entity::Group(e) => &e.base,
            Entity::Membership(e) => &e.base,
            Entity::DigitalResource(e) => &e.base,
            Entity::WebPage(e) => &e.base,
            Entity::EPubVolume(e) => &e.base,
            Entity::Frame(e) => &e.base,
            Entity::View(e) => &e.base,
            Entity::MediaObject(e) => &e.base,
            Entity::ImageObject(e) => &e.base,
            Entity::AudioObject(e) => &e.base,
            Entity::VideoObject(e) => &e.base,
            Entity::MediaLocation(e) => &e.base,
            Entity::AssignableDigitalResource(e) => &e.base,
            Entity::Assessment(e) => &e.base,
            Entity::AssessmentItem(e) => &e.base,
            Entity::Attempt(e) => &e.base,
            Entity::Result(e) => &e.base,
            Entity::Session(e) => &e.base,
            Entity::LearningObjective(e) => &e.base,
        }
    }

    /// Mutable access to the common attributes.
    pub fn base_mut(&mut self) -> &mut EntityBase {
        match self {
            Entity::Generic(e) => &mut e.base,
            Entity::Person(e) => &mut e.base,
            Entity::SoftwareApplication(e) => &mut e.base,
            Entity::Organization(e) => &mut e.base,
            Entity::CourseOffering(e) => &mut e.base,
            Entity::CourseSection(e) => &mut e.base,
            Entity::Group(e) => &mut e.base,
            Entity::Membership(e) => &mut e.base,
            Entity::DigitalResource(e) => &mut e.base,
            Entity::WebPage(e) => &mut e.base,
            Entity::EPubVolume(e) => &mut e.base,
            Entity::Frame(e) => &mut e.base,
            Entity::View(e) => &mut e.base,
            Entity::MediaObject(e) => &mut e.base,
            Entity::ImageObject(e) => &mut e.base,
            Entity::AudioObject(e) => &mut e.base,
            Entity::VideoObject(e) => &mut e.base,
            Entity::MediaLocation(e) => &mut e.base,
            Entity::AssignableDigitalResource(e) => &mut e.base,
            Entity::Assessment(e) => &mut e.base,
            Entity::AssessmentItem(e) => &mut e.base,
            Entity::Attempt(e) => &mut e.base,
            Entity::Result(e) => &mut e.base,
            Entity::Session(e) => &mut e.base,
            Entity::LearningObjective(e) => &mut e.base,
        }
    }

    /// Globally unique IRI identifying the entity.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.base().id
    }

    /// Vocabulary URI naming the concrete kind.
    #[must_use]
    pub fn type_iri(&self) -> &'static str {
        match self {
            Entity::Generic(e) => e.type_iri(),
            Entity::Person(e) => e.type_iri(),
            Entity::SoftwareApplication(e) => e.type_iri(),
            Entity::Organization(e) => e.type_iri(),
            Entity::CourseOffering(e) => e.type_iri(),
            Entity::CourseSection(e) => e.type_iri(),
            Entity::Group(e) => e.type_iri(),
            Entity::Membership(e) => e.type_iri(),
            Entity::DigitalResource(e) => e.type_iri(),
            Entity::WebPage(e) => e.type_iri(),
            Entity::EPubVolume(e) => e.type_iri(),
            Entity::Frame(e) => e.type_iri(),
            Entity::View(e) => e.type_iri(),
            Entity::MediaObject(e) => e.type_iri(),
            Entity::ImageObject(e) => e.type_iri(),
            Entity::AudioObject(e) => e.type_iri(),
            Entity::VideoObject(e) => e.type_iri(),
            Entity::MediaLocation(e) => e.type_iri(),
            Entity::AssignableDigitalResource(e) => e.type_iri(),
            Entity::Assessment(e) => e.type_iri(),
            Entity::AssessmentItem(e) => e.type_iri(),
            Entity::Attempt(e) => e.type_iri(),
            Entity::Result(e) => e.type_iri(),
            Entity::Session(e) => e.type_iri(),
            Entity::LearningObjective(e) => e.type_iri(),
        }
    }
}

impl Describable for Entity {
    fn id(&self) -> &str {
        Entity::id(self)
    }

    fn type_iri(&self) -> &'static str {
        Entity::type_iri(self)
    }
}

impl Temporal for Entity {
    fn date_created(&self) -> DateTime<Utc> {
        self.base().date_created
    }

    fn date_modified(&self) -> DateTime<Utc> {
        self.base().date_modified
    }
}
