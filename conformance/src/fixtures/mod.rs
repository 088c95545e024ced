//! Canonical scenario fixtures.
//!
//! Each module builds one fully populated graph together with its
//! published canonical JSON document. Validators treat the pair as
//! ground truth: the graph must encode to exactly the published
//! document, and the document must decode back to exactly the graph.
//!
//! All fixtures share the same three instants so documents stay easy to
//! read: entities are created at 06:00 on 2015-08-01, the ones that were
//! later revised are modified at 11:30 on 2015-09-02, and every event
//! fires at 10:15 on 2015-09-15.

mod assessment_submission;
mod graded_outcome;
mod media_playback;
mod navigation;
mod roster_membership;

pub use assessment_submission::{submitted_assessment_event, ASSESSMENT_SUBMISSION_DOCUMENT};
pub use graded_outcome::{graded_attempt_event, GRADED_OUTCOME_DOCUMENT};
pub use media_playback::{paused_video_event, MEDIA_PLAYBACK_DOCUMENT};
pub use navigation::{navigated_to_event, NAVIGATION_DOCUMENT};
pub use roster_membership::{roster_membership, ROSTER_MEMBERSHIP_DOCUMENT};

use caliper_model::entities::Entity;
use caliper_model::events::Event;
use caliper_model::FixedClock;
use chrono::{DateTime, TimeZone, Utc};

// Calendar literals below are fixed and valid; a bad one would surface
// as an epoch timestamp in every document comparison.
fn instant(year: i32, month: u32, day: u32, hour: u32, min: u32, sec: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, min, sec)
        .single()
        .unwrap_or(DateTime::UNIX_EPOCH)
}

/// Clock frozen at the shared creation instant of every fixture entity.
#[must_use]
pub fn created_clock() -> FixedClock {
    FixedClock(instant(2015, 8, 1, 6, 0, 0))
}

/// Shared modification instant of the fixture entities that were revised.
#[must_use]
pub fn modified_at() -> DateTime<Utc> {
    instant(2015, 9, 2, 11, 30, 0)
}

/// Shared occurrence instant of every fixture event.
#[must_use]
pub fn event_at() -> DateTime<Utc> {
    instant(2015, 9, 15, 10, 15, 0)
}

/// Every event fixture, as (name, graph, published document) triples.
#[must_use]
pub fn events() -> Vec<(&'static str, Event, &'static str)> {
    vec![
        ("navigation", navigated_to_event(), NAVIGATION_DOCUMENT),
        ("media-playback", paused_video_event(), MEDIA_PLAYBACK_DOCUMENT),
        (
            "assessment-submission",
            submitted_assessment_event(),
            ASSESSMENT_SUBMISSION_DOCUMENT,
        ),
        ("graded-outcome", graded_attempt_event(), GRADED_OUTCOME_DOCUMENT),
    ]
}

/// Every standalone entity fixture, as (name, graph, published document)
/// triples.
#[must_use]
pub fn entities() -> Vec<(&'static str, Entity, &'static str)> {
    vec![(
        "roster-membership",
        roster_membership(),
        ROSTER_MEMBERSHIP_DOCUMENT,
    )]
}
