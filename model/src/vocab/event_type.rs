//! Event type URIs.
//!
//! Each event variant carries exactly one of these as its `@type` tag.

/// Base event.
pub const EVENT: &str = "http://purl.imsglobal.org/caliper/v1/Event";
/// Navigation to a resource.
pub const NAVIGATION: &str = "http://purl.imsglobal.org/caliper/v1/NavigationEvent";
/// A view of a resource.
pub const VIEW: &str = "http://purl.imsglobal.org/caliper/v1/ViewEvent";
/// Media playback interaction.
pub const MEDIA: &str = "http://purl.imsglobal.org/caliper/v1/MediaEvent";
/// Assignable resource lifecycle.
pub const ASSIGNABLE: &str = "http://purl.imsglobal.org/caliper/v1/AssignableEvent";
/// Assessment lifecycle.
pub const ASSESSMENT: &str = "http://purl.imsglobal.org/caliper/v1/AssessmentEvent";
/// Assessment item lifecycle.
pub const ASSESSMENT_ITEM: &str = "http://purl.imsglobal.org/caliper/v1/AssessmentItemEvent";
/// Grading outcome.
pub const OUTCOME: &str = "http://purl.imsglobal.org/caliper/v1/OutcomeEvent";
/// Session lifecycle.
pub const SESSION: &str = "http://purl.imsglobal.org/caliper/v1/SessionEvent";

/// Every event type URI, for table-membership checks.
pub const ALL: &[&str] = &[
    EVENT,
    NAVIGATION,
    VIEW,
    MEDIA,
    ASSIGNABLE,
    ASSESSMENT,
    ASSESSMENT_ITEM,
    OUTCOME,
    SESSION,
];
