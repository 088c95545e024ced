//! LIS membership role and status URIs.
//!
//! Used by the membership entity's `roles` (ordered, zero or more) and
//! `status` (single) fields.

/// LIS v2 membership role URIs.
pub mod role {
    /// Administrator role.
    pub const ADMINISTRATOR: &str =
        "http://purl.imsglobal.org/vocab/lis/v2/membership#Administrator";
    /// Content developer role.
    pub const CONTENT_DEVELOPER: &str =
        "http://purl.imsglobal.org/vocab/lis/v2/membership#ContentDeveloper";
    /// Instructor role.
    pub const INSTRUCTOR: &str = "http://purl.imsglobal.org/vocab/lis/v2/membership#Instructor";
    /// Learner role.
    pub const LEARNER: &str = "http://purl.imsglobal.org/vocab/lis/v2/membership#Learner";
    /// Manager role.
    pub const MANAGER: &str = "http://purl.imsglobal.org/vocab/lis/v2/membership#Manager";
    /// Member role.
    pub const MEMBER: &str = "http://purl.imsglobal.org/vocab/lis/v2/membership#Member";
    /// Mentor role.
    pub const MENTOR: &str = "http://purl.imsglobal.org/vocab/lis/v2/membership#Mentor";
    /// Officer role.
    pub const OFFICER: &str = "http://purl.imsglobal.org/vocab/lis/v2/membership#Officer";
    /// Teaching assistant role.
    pub const TEACHING_ASSISTANT: &str =
        "http://purl.imsglobal.org/vocab/lis/v2/membership#TeachingAssistant";

    /// Every role URI.
    pub const ALL: &[&str] = &[
        ADMINISTRATOR,
        CONTENT_DEVELOPER,
        INSTRUCTOR,
        LEARNER,
        MANAGER,
        MEMBER,
        MENTOR,
        OFFICER,
        TEACHING_ASSISTANT,
    ];
}

/// LIS v2 membership status URIs.
pub mod status {
    /// Membership is active.
    pub const ACTIVE: &str = "http://purl.imsglobal.org/vocab/lis/v2/status#Active";
    /// Membership has been deleted.
    pub const DELETED: &str = "http://purl.imsglobal.org/vocab/lis/v2/status#Deleted";
    /// Membership is inactive.
    pub const INACTIVE: &str = "http://purl.imsglobal.org/vocab/lis/v2/status#Inactive";

    /// Every status URI.
    pub const ALL: &[&str] = &[ACTIVE, DELETED, INACTIVE];
}
