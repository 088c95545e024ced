//! Digital resource entities: readable content and the frames within it.
//!
//! Resource variants share [`ResourceAttrs`], the attribute group the
//! Caliper v1 model gives every digital resource. A `Frame` is one
//! addressable span of a larger resource; its `is_part_of` points back at
//! the containing volume.

use chrono::{DateTime, Utc};

use crate::clock::Clock;
use crate::entities::{Describable, Entity, EntityBase, EntityRef, Temporal};
use crate::vocab::entity_type;

/// Attributes shared by every digital resource variant.
///
/// All fields start at their empty sentinels and are omitted from the
/// serialized form until set. `object_type`, `aligned_learning_objective`,
/// and `keywords` are ordered and serialize in caller order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ResourceAttrs {
    /// Producer-defined object type labels.
    pub object_type: Vec<String>,
    /// Learning objectives this resource is aligned with.
    pub aligned_learning_objective: Vec<EntityRef>,
    /// Keyword labels.
    pub keywords: Vec<String>,
    /// The resource this one is part of.
    pub is_part_of: Option<EntityRef>,
    /// Instant the resource was published.
    pub date_published: Option<DateTime<Utc>>,
    /// Version label.
    pub version: Option<String>,
}

/// A digital resource with no more specific kind.
#[derive(Debug, Clone, PartialEq)]
pub struct DigitalResource {
    /// Common entity attributes.
    pub base: EntityBase,
    /// Common resource attributes.
    pub resource: ResourceAttrs,
}

impl DigitalResource {
    /// Builds a digital resource with timestamps taken from `clock`.
    #[must_use]
    pub fn new(id: impl Into<String>, clock: &dyn Clock) -> Self {
        Self {
            base: EntityBase::new(id, clock),
            resource: ResourceAttrs::default(),
        }
    }
}

impl Describable for DigitalResource {
    fn id(&self) -> &str {
        &self.base.id
    }

    fn type_iri(&self) -> &'static str {
        entity_type::DIGITAL_RESOURCE
    }
}

impl Temporal for DigitalResource {
    fn date_created(&self) -> DateTime<Utc> {
        self.base.date_created
    }

    fn date_modified(&self) -> DateTime<Utc> {
        self.base.date_modified
    }
}

impl From<DigitalResource> for Entity {
    fn from(entity: DigitalResource) -> Self {
        Entity::DigitalResource(entity)
    }
}

/// A web page.
#[derive(Debug, Clone, PartialEq)]
pub struct WebPage {
    /// Common entity attributes.
    pub base: EntityBase,
    /// Common resource attributes.
    pub resource: ResourceAttrs,
}

impl WebPage {
    /// Builds a web page with timestamps taken from `clock`.
    #[must_use]
    pub fn new(id: impl Into<String>, clock: &dyn Clock) -> Self {
        Self {
            base: EntityBase::new(id, clock),
            resource: ResourceAttrs::default(),
        }
    }
}

impl Describable for WebPage {
    fn id(&self) -> &str {
        &self.base.id
    }

    fn type_iri(&self) -> &'static str {
        entity_type::WEB_PAGE
    }
}

impl Temporal for WebPage {
    fn date_created(&self) -> DateTime<Utc> {
        self.base.date_created
    }

    fn date_modified(&self) -> DateTime<Utc> {
        self.base.date_modified
    }
}

impl From<WebPage> for Entity {
    fn from(entity: WebPage) -> Self {
        Entity::WebPage(entity)
    }
}

/// An EPUB volume.
///
/// Tagged with the EPUB structure vocabulary URI rather than a Caliper
/// namespace URI.
#[derive(Debug, Clone, PartialEq)]
pub struct EPubVolume {
    /// Common entity attributes.
    pub base: EntityBase,
    /// Common resource attributes.
    pub resource: ResourceAttrs,
}

impl EPubVolume {
    /// Builds an EPUB volume with timestamps taken from `clock`.
    #[must_use]
    pub fn new(id: impl Into<String>, clock: &dyn Clock) -> Self {
        Self {
            base: EntityBase::new(id, clock),
            resource: ResourceAttrs::default(),
        }
    }
}

impl Describable for EPubVolume {
    fn id(&self) -> &str {
        &self.base.id
    }

    fn type_iri(&self) -> &'static str {
        entity_type::EPUB_VOLUME
    }
}

impl Temporal for EPubVolume {
    fn date_created(&self) -> DateTime<Utc> {
        self.base.date_created
    }

    fn date_modified(&self) -> DateTime<Utc> {
        self.base.date_modified
    }
}

impl From<EPubVolume> for Entity {
    fn from(entity: EPubVolume) -> Self {
        Entity::EPubVolume(entity)
    }
}

/// One addressable span of a larger resource, such as a chapter of a
/// volume.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    /// Common entity attributes.
    pub base: EntityBase,
    /// Common resource attributes. `is_part_of` names the containing
    /// resource.
    pub resource: ResourceAttrs,
    /// Ordinal position within the containing resource. Always
    /// serialized, including at zero.
    pub index: u32,
}

impl Frame {
    /// Builds a frame with timestamps taken from `clock` and index `0`.
    #[must_use]
    pub fn new(id: impl Into<String>, clock: &dyn Clock) -> Self {
        Self {
            base: EntityBase::new(id, clock),
            resource: ResourceAttrs::default(),
            index: 0,
        }
    }
}

impl Describable for Frame {
    fn id(&self) -> &str {
        &self.base.id
    }

    fn type_iri(&self) -> &'static str {
        entity_type::FRAME
    }
}

impl Temporal for Frame {
    fn date_created(&self) -> DateTime<Utc> {
        self.base.date_created
    }

    fn date_modified(&self) -> DateTime<Utc> {
        self.base.date_modified
    }
}

impl From<Frame> for Entity {
    fn from(entity: Frame) -> Self {
        Entity::Frame(entity)
    }
}

/// A record of an actor viewing a frame.
#[derive(Debug, Clone, PartialEq)]
pub struct View {
    /// Common entity attributes.
    pub base: EntityBase,
    /// Who viewed.
    pub actor: Option<EntityRef>,
    /// The frame viewed.
    pub frame: Option<EntityRef>,
    /// Instant the viewing began.
    pub started_at_time: Option<DateTime<Utc>>,
    /// Instant the viewing ended.
    pub ended_at_time: Option<DateTime<Utc>>,
    /// Total viewing time as an ISO-8601 duration literal.
    pub duration: Option<String>,
}

impl View {
    /// Builds a view with timestamps taken from `clock`.
    #[must_use]
    pub fn new(id: impl Into<String>, clock: &dyn Clock) -> Self {
        Self {
            base: EntityBase::new(id, clock),
            actor: None,
            frame: None,
            started_at_time: None,
            ended_at_time: None,
            duration: None,
        }
    }
}

impl Describable for View {
    fn id(&self) -> &str {
        &self.base.id
    }

    fn type_iri(&self) -> &'static str {
        entity_type::VIEW
    }
}

impl Temporal for View {
    fn date_created(&self) -> DateTime<Utc> {
        self.base.date_created
    }

    fn date_modified(&self) -> DateTime<Utc> {
        self.base.date_modified
    }
}

impl From<View> for Entity {
    fn from(entity: View) -> Self {
        Entity::View(entity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use chrono::TimeZone;

    #[test]
    fn epub_volume_is_tagged_outside_the_caliper_namespace() {
        let clock = FixedClock(Utc.with_ymd_and_hms(2015, 8, 1, 6, 0, 0).unwrap());
        let volume = EPubVolume::new("https://example.com/viewer/book/34843", &clock);
        assert_eq!(
            volume.type_iri(),
            "http://www.idpf.org/epub/vocab/structure/#volume"
        );
    }
}
