//! Entity type URIs.
//!
//! Each concrete entity variant carries exactly one of these as its
//! immutable `@type` tag. LIS concepts live under the `lis/` subpath; the
//! EPUB volume type comes from the EPUB structure vocabulary.

/// Base entity.
pub const ENTITY: &str = "http://purl.imsglobal.org/caliper/v1/Entity";
/// Agent base concept.
pub const AGENT: &str = "http://purl.imsglobal.org/caliper/v1/Agent";
/// A person.
pub const PERSON: &str = "http://purl.imsglobal.org/caliper/v1/lis/Person";
/// A software application acting as an agent or app context.
pub const SOFTWARE_APPLICATION: &str = "http://purl.imsglobal.org/caliper/v1/SoftwareApplication";
/// An LIS organization.
pub const ORGANIZATION: &str = "http://purl.imsglobal.org/caliper/v1/lis/Organization";
/// An LIS course offering.
pub const COURSE_OFFERING: &str = "http://purl.imsglobal.org/caliper/v1/lis/CourseOffering";
/// An LIS course section.
pub const COURSE_SECTION: &str = "http://purl.imsglobal.org/caliper/v1/lis/CourseSection";
/// An LIS group within a course section.
pub const GROUP: &str = "http://purl.imsglobal.org/caliper/v1/lis/Group";
/// An LIS roster membership.
pub const MEMBERSHIP: &str = "http://purl.imsglobal.org/caliper/v1/lis/Membership";
/// A generic digital resource.
pub const DIGITAL_RESOURCE: &str = "http://purl.imsglobal.org/caliper/v1/DigitalResource";
/// A web page.
pub const WEB_PAGE: &str = "http://purl.imsglobal.org/caliper/v1/WebPage";
/// An EPUB volume (EPUB structure vocabulary).
pub const EPUB_VOLUME: &str = "http://www.idpf.org/epub/vocab/structure/#volume";
/// A frame within a digital resource.
pub const FRAME: &str = "http://purl.imsglobal.org/caliper/v1/Frame";
/// A generic media object.
pub const MEDIA_OBJECT: &str = "http://purl.imsglobal.org/caliper/v1/MediaObject";
/// An image.
pub const IMAGE_OBJECT: &str = "http://purl.imsglobal.org/caliper/v1/ImageObject";
/// An audio stream.
pub const AUDIO_OBJECT: &str = "http://purl.imsglobal.org/caliper/v1/AudioObject";
/// A video stream.
pub const VIDEO_OBJECT: &str = "http://purl.imsglobal.org/caliper/v1/VideoObject";
/// A playback position within a media object.
pub const MEDIA_LOCATION: &str = "http://purl.imsglobal.org/caliper/v1/MediaLocation";
/// An assignable digital resource.
pub const ASSIGNABLE_DIGITAL_RESOURCE: &str =
    "http://purl.imsglobal.org/caliper/v1/AssignableDigitalResource";
/// An assessment.
pub const ASSESSMENT: &str = "http://purl.imsglobal.org/caliper/v1/Assessment";
/// A single assessment item.
pub const ASSESSMENT_ITEM: &str = "http://purl.imsglobal.org/caliper/v1/AssessmentItem";
/// An attempt on an assignable resource.
pub const ATTEMPT: &str = "http://purl.imsglobal.org/caliper/v1/Attempt";
/// A graded result.
pub const RESULT: &str = "http://purl.imsglobal.org/caliper/v1/Result";
/// A user session.
pub const SESSION: &str = "http://purl.imsglobal.org/caliper/v1/Session";
/// A learning objective.
pub const LEARNING_OBJECTIVE: &str = "http://purl.imsglobal.org/caliper/v1/LearningObjective";
/// A view of a frame by an actor.
pub const VIEW: &str = "http://purl.imsglobal.org/caliper/v1/View";

/// Every entity type URI, for table-membership checks.
pub const ALL: &[&str] = &[
    ENTITY,
    AGENT,
    PERSON,
    SOFTWARE_APPLICATION,
    ORGANIZATION,
    COURSE_OFFERING,
    COURSE_SECTION,
    GROUP,
    MEMBERSHIP,
    DIGITAL_RESOURCE,
    WEB_PAGE,
    EPUB_VOLUME,
    FRAME,
    MEDIA_OBJECT,
    IMAGE_OBJECT,
    AUDIO_OBJECT,
    VIDEO_OBJECT,
    MEDIA_LOCATION,
    ASSIGNABLE_DIGITAL_RESOURCE,
    ASSESSMENT,
    ASSESSMENT_ITEM,
    ATTEMPT,
    RESULT,
    SESSION,
    LEARNING_OBJECTIVE,
    VIEW,
];
