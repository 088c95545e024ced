//! A learner pauses a key-figures video partway through. Exercises the
//! media entity kinds and the omission of every unset event field:
//! `generated`, `group`, and `membership` never appear in the document.

use caliper_model::entities::{MediaLocation, Person, SoftwareApplication, VideoObject};
use caliper_model::events::MediaEvent;
use caliper_model::vocab::actions;
use caliper_model::{EntityRef, Event, EventContext};

use super::{created_clock, event_at, modified_at};

/// Builds the media playback scenario graph.
#[must_use]
pub fn paused_video_event() -> Event {
    let clock = created_clock();

    let mut actor = Person::new("https://example.edu/user/554433", &clock);
    actor.base.date_modified = modified_at();

    let mut video = VideoObject::new("https://com.sat/super-media-tool/video/video1", &clock);
    video.base.name = "American Revolution - Key Figures Video".to_owned();
    video.base.date_modified = modified_at();
    video.duration = Some(1420);

    // The location shares the video id; only currentTime distinguishes it.
    let mut location = MediaLocation::new("https://com.sat/super-media-tool/video/video1", &clock);
    location.current_time = Some(710);

    let mut player = SoftwareApplication::new("https://com.sat/super-media-tool", &clock);
    player.base.name = "Super Media Tool".to_owned();
    player.base.date_modified = modified_at();

    MediaEvent::new(
        EntityRef::embedded(actor),
        actions::media::PAUSED,
        EntityRef::embedded(video),
        event_at(),
    )
    .with_target(EntityRef::embedded(location))
    .with_ed_app(EntityRef::embedded(player))
    .into()
}

/// Published canonical document of [`paused_video_event`].
pub const MEDIA_PLAYBACK_DOCUMENT: &str = r#"{
  "@context": "http://purl.imsglobal.org/ctx/caliper/v1/Context",
  "@type": "http://purl.imsglobal.org/caliper/v1/MediaEvent",
  "actor": {
    "@id": "https://example.edu/user/554433",
    "@type": "http://purl.imsglobal.org/caliper/v1/lis/Person",
    "dateCreated": "2015-08-01T06:00:00.000Z",
    "dateModified": "2015-09-02T11:30:00.000Z"
  },
  "action": "http://purl.imsglobal.org/vocab/caliper/v1/action#Paused",
  "object": {
    "@id": "https://com.sat/super-media-tool/video/video1",
    "@type": "http://purl.imsglobal.org/caliper/v1/VideoObject",
    "name": "American Revolution - Key Figures Video",
    "dateCreated": "2015-08-01T06:00:00.000Z",
    "dateModified": "2015-09-02T11:30:00.000Z",
    "duration": 1420
  },
  "target": {
    "@id": "https://com.sat/super-media-tool/video/video1",
    "@type": "http://purl.imsglobal.org/caliper/v1/MediaLocation",
    "dateCreated": "2015-08-01T06:00:00.000Z",
    "dateModified": "2015-08-01T06:00:00.000Z",
    "currentTime": 710
  },
  "eventTime": "2015-09-15T10:15:00.000Z",
  "edApp": {
    "@id": "https://com.sat/super-media-tool",
    "@type": "http://purl.imsglobal.org/caliper/v1/SoftwareApplication",
    "name": "Super Media Tool",
    "dateCreated": "2015-08-01T06:00:00.000Z",
    "dateModified": "2015-09-02T11:30:00.000Z"
  }
}"#;
