//! Media entities: playable objects and positions within them.
//!
//! Durations and playback positions are whole seconds, matching the v1
//! media profile. A `MediaLocation` is the usual `target` of a media
//! event, pinning the playback position the action happened at.

use chrono::{DateTime, Utc};

use crate::clock::Clock;
use crate::entities::{Describable, Entity, EntityBase, ResourceAttrs, Temporal};
use crate::vocab::entity_type;

/// A media object with no more specific kind.
#[derive(Debug, Clone, PartialEq)]
pub struct MediaObject {
    /// Common entity attributes.
    pub base: EntityBase,
    /// Common resource attributes.
    pub resource: ResourceAttrs,
    /// Total length in seconds.
    pub duration: Option<i64>,
}

impl MediaObject {
    /// Builds a media object with timestamps taken from `clock`.
    #[must_use]
    pub fn new(id: impl Into<String>, clock: &dyn Clock) -> Self {
        Self {
            base: EntityBase::new(id, clock),
            resource: ResourceAttrs::default(),
            duration: None,
        }
    }
}

impl Describable for MediaObject {
    fn id(&self) -> &str {
        &self.base.id
    }

    fn type_iri(&self) -> &'static str {
        entity_type::MEDIA_OBJECT
    }
}

impl Temporal for MediaObject {
    fn date_created(&self) -> DateTime<Utc> {
        self.base.date_created
    }

    fn date_modified(&self) -> DateTime<Utc> {
        self.base.date_modified
    }
}

impl From<MediaObject> for Entity {
    fn from(entity: MediaObject) -> Self {
        Entity::MediaObject(entity)
    }
}

/// An image.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageObject {
    /// Common entity attributes.
    pub base: EntityBase,
    /// Common resource attributes.
    pub resource: ResourceAttrs,
    /// Total length in seconds, for animated images.
    pub duration: Option<i64>,
}

impl ImageObject {
    /// Builds an image object with timestamps taken from `clock`.
    #[must_use]
    pub fn new(id: impl Into<String>, clock: &dyn Clock) -> Self {
        Self {
            base: EntityBase::new(id, clock),
            resource: ResourceAttrs::default(),
            duration: None,
        }
    }
}

impl Describable for ImageObject {
    fn id(&self) -> &str {
        &self.base.id
    }

    fn type_iri(&self) -> &'static str {
        entity_type::IMAGE_OBJECT
    }
}

impl Temporal for ImageObject {
    fn date_created(&self) -> DateTime<Utc> {
        self.base.date_created
    }

    fn date_modified(&self) -> DateTime<Utc> {
        self.base.date_modified
    }
}

impl From<ImageObject> for Entity {
    fn from(entity: ImageObject) -> Self {
        Entity::ImageObject(entity)
    }
}

/// An audio recording.
#[derive(Debug, Clone, PartialEq)]
pub struct AudioObject {
    /// Common entity attributes.
    pub base: EntityBase,
    /// Common resource attributes.
    pub resource: ResourceAttrs,
    /// Total length in seconds.
    pub duration: Option<i64>,
}

impl AudioObject {
    /// Builds an audio object with timestamps taken from `clock`.
    #[must_use]
    pub fn new(id: impl Into<String>, clock: &dyn Clock) -> Self {
        Self {
            base: EntityBase::new(id, clock),
            resource: ResourceAttrs::default(),
            duration: None,
        }
    }
}

impl Describable for AudioObject {
    fn id(&self) -> &str {
        &self.base.id
    }

    fn type_iri(&self) -> &'static str {
        entity_type::AUDIO_OBJECT
    }
}

impl Temporal for AudioObject {
    fn date_created(&self) -> DateTime<Utc> {
        self.base.date_created
    }

    fn date_modified(&self) -> DateTime<Utc> {
        self.base.date_modified
    }
}

impl From<AudioObject> for Entity {
    fn from(entity: AudioObject) -> Self {
        Entity::AudioObject(entity)
    }
}

/// A video.
#[derive(Debug, Clone, PartialEq)]
pub struct VideoObject {
    /// Common entity attributes.
    pub base: EntityBase,
    /// Common resource attributes.
    pub resource: ResourceAttrs,
    /// Total length in seconds.
    pub duration: Option<i64>,
}

impl VideoObject {
    /// Builds a video object with timestamps taken from `clock`.
    #[must_use]
    pub fn new(id: impl Into<String>, clock: &dyn Clock) -> Self {
        Self {
            base: EntityBase::new(id, clock),
            resource: ResourceAttrs::default(),
            duration: None,
        }
    }
}

impl Describable for VideoObject {
    fn id(&self) -> &str {
        &self.base.id
    }

    fn type_iri(&self) -> &'static str {
        entity_type::VIDEO_OBJECT
    }
}

impl Temporal for VideoObject {
    fn date_created(&self) -> DateTime<Utc> {
        self.base.date_created
    }

    fn date_modified(&self) -> DateTime<Utc> {
        self.base.date_modified
    }
}

impl From<VideoObject> for Entity {
    fn from(entity: VideoObject) -> Self {
        Entity::VideoObject(entity)
    }
}

/// A position within a media object.
#[derive(Debug, Clone, PartialEq)]
pub struct MediaLocation {
    /// Common entity attributes.
    pub base: EntityBase,
    /// Common resource attributes.
    pub resource: ResourceAttrs,
    /// Playback position in seconds from the start.
    pub current_time: Option<i64>,
}

impl MediaLocation {
    /// Builds a media location with timestamps taken from `clock`.
    #[must_use]
    pub fn new(id: impl Into<String>, clock: &dyn Clock) -> Self {
        Self {
            base: EntityBase::new(id, clock),
            resource: ResourceAttrs::default(),
            current_time: None,
        }
    }
}

impl Describable for MediaLocation {
    fn id(&self) -> &str {
        &self.base.id
    }

    fn type_iri(&self) -> &'static str {
        entity_type::MEDIA_LOCATION
    }
}

impl Temporal for MediaLocation {
    fn date_created(&self) -> DateTime<Utc> {
        self.base.date_created
    }

    fn date_modified(&self) -> DateTime<Utc> {
        self.base.date_modified
    }
}

impl From<MediaLocation> for Entity {
    fn from(entity: MediaLocation) -> Self {
        Entity::MediaLocation(entity)
    }
}
