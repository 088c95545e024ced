//! Action URIs, one table per profile.
//!
//! An event's `action` field carries one of these URIs. Which table applies
//! is fixed by the event variant; [`crate::profiles::validate_event`]
//! checks membership after construction.

/// Actions of the navigation profile.
pub mod navigation {
    /// Actor navigated to the object.
    pub const NAVIGATED_TO: &str = "http://purl.imsglobal.org/vocab/caliper/v1/action#NavigatedTo";

    /// Every action URI in this profile.
    pub const ALL: &[&str] = &[NAVIGATED_TO];
}

/// Actions of the reading profile.
pub mod reading {
    /// Actor searched within the object.
    pub const SEARCHED: &str = "http://purl.imsglobal.org/vocab/caliper/v1/action#Searched";
    /// Actor viewed the object.
    pub const VIEWED: &str = "http://purl.imsglobal.org/vocab/caliper/v1/action#Viewed";

    /// Every action URI in this profile.
    pub const ALL: &[&str] = &[SEARCHED, VIEWED];
}

/// Actions of the media profile.
pub mod media {
    /// Playback resolution changed.
    pub const CHANGED_RESOLUTION: &str =
        "http://purl.imsglobal.org/vocab/caliper/v1/action#ChangedResolution";
    /// Player window resized.
    pub const CHANGED_SIZE: &str = "http://purl.imsglobal.org/vocab/caliper/v1/action#ChangedSize";
    /// Playback speed changed.
    pub const CHANGED_SPEED: &str =
        "http://purl.imsglobal.org/vocab/caliper/v1/action#ChangedSpeed";
    /// Volume changed.
    pub const CHANGED_VOLUME: &str =
        "http://purl.imsglobal.org/vocab/caliper/v1/action#ChangedVolume";
    /// Popout player closed.
    pub const CLOSED_POPOUT: &str =
        "http://purl.imsglobal.org/vocab/caliper/v1/action#ClosedPopout";
    /// Closed captioning disabled.
    pub const DISABLED_CLOSED_CAPTIONING: &str =
        "http://purl.imsglobal.org/vocab/caliper/v1/action#DisabledClosedCaptioning";
    /// Closed captioning enabled.
    pub const ENABLED_CLOSED_CAPTIONING: &str =
        "http://purl.imsglobal.org/vocab/caliper/v1/action#EnabledClosedCaptioning";
    /// Playback reached the end.
    pub const ENDED: &str = "http://purl.imsglobal.org/vocab/caliper/v1/action#Ended";
    /// Player entered full-screen mode.
    pub const ENTERED_FULL_SCREEN: &str =
        "http://purl.imsglobal.org/vocab/caliper/v1/action#EnteredFullScreen";
    /// Player left full-screen mode.
    pub const EXITED_FULL_SCREEN: &str =
        "http://purl.imsglobal.org/vocab/caliper/v1/action#ExitedFullScreen";
    /// Skipped forward to a position.
    pub const FORWARDED_TO: &str =
        "http://purl.imsglobal.org/vocab/caliper/v1/action#ForwardedTo";
    /// Jumped to a position.
    pub const JUMPED_TO: &str = "http://purl.imsglobal.org/vocab/caliper/v1/action#JumpedTo";
    /// Audio muted.
    pub const MUTED: &str = "http://purl.imsglobal.org/vocab/caliper/v1/action#Muted";
    /// Popout player opened.
    pub const OPENED_POPOUT: &str =
        "http://purl.imsglobal.org/vocab/caliper/v1/action#OpenedPopout";
    /// Playback paused.
    pub const PAUSED: &str = "http://purl.imsglobal.org/vocab/caliper/v1/action#Paused";
    /// Playback resumed.
    pub const RESUMED: &str = "http://purl.imsglobal.org/vocab/caliper/v1/action#Resumed";
    /// Playback rewound.
    pub const REWOUND: &str = "http://purl.imsglobal.org/vocab/caliper/v1/action#Rewound";
    /// Playback started.
    pub const STARTED: &str = "http://purl.imsglobal.org/vocab/caliper/v1/action#Started";
    /// Audio unmuted.
    pub const UNMUTED: &str = "http://purl.imsglobal.org/vocab/caliper/v1/action#Unmuted";

    /// Every action URI in this profile.
    pub const ALL: &[&str] = &[
        CHANGED_RESOLUTION,
        CHANGED_SIZE,
        CHANGED_SPEED,
        CHANGED_VOLUME,
        CLOSED_POPOUT,
        DISABLED_CLOSED_CAPTIONING,
        ENABLED_CLOSED_CAPTIONING,
        ENDED,
        ENTERED_FULL_SCREEN,
        EXITED_FULL_SCREEN,
        FORWARDED_TO,
        JUMPED_TO,
        MUTED,
        OPENED_POPOUT,
        PAUSED,
        RESUMED,
        REWOUND,
        STARTED,
        UNMUTED,
    ];
}

/// Actions of the assignable profile.
pub mod assignable {
    /// Work on the assignable abandoned.
    pub const ABANDONED: &str = "http://purl.imsglobal.org/vocab/caliper/v1/action#Abandoned";
    /// Assignable activated.
    pub const ACTIVATED: &str = "http://purl.imsglobal.org/vocab/caliper/v1/action#Activated";
    /// Work on the assignable completed.
    pub const COMPLETED: &str = "http://purl.imsglobal.org/vocab/caliper/v1/action#Completed";
    /// Assignable deactivated.
    pub const DEACTIVATED: &str = "http://purl.imsglobal.org/vocab/caliper/v1/action#Deactivated";
    /// Assignable hidden.
    pub const HID: &str = "http://purl.imsglobal.org/vocab/caliper/v1/action#Hid";
    /// Completed work reviewed.
    pub const REVIEWED: &str = "http://purl.imsglobal.org/vocab/caliper/v1/action#Reviewed";
    /// Assignable shown.
    pub const SHOWED: &str = "http://purl.imsglobal.org/vocab/caliper/v1/action#Showed";
    /// Work on the assignable started.
    pub const STARTED: &str = "http://purl.imsglobal.org/vocab/caliper/v1/action#Started";
    /// Work submitted.
    pub const SUBMITTED: &str = "http://purl.imsglobal.org/vocab/caliper/v1/action#Submitted";

    /// Every action URI in this profile.
    pub const ALL: &[&str] = &[
        ABANDONED, ACTIVATED, COMPLETED, DEACTIVATED, HID, REVIEWED, SHOWED, STARTED, SUBMITTED,
    ];
}

/// Actions of the assessment profile.
pub mod assessment {
    /// Assessment paused.
    pub const PAUSED: &str = "http://purl.imsglobal.org/vocab/caliper/v1/action#Paused";
    /// Assessment restarted.
    pub const RESTARTED: &str = "http://purl.imsglobal.org/vocab/caliper/v1/action#Restarted";
    /// Assessment started.
    pub const STARTED: &str = "http://purl.imsglobal.org/vocab/caliper/v1/action#Started";
    /// Assessment submitted.
    pub const SUBMITTED: &str = "http://purl.imsglobal.org/vocab/caliper/v1/action#Submitted";

    /// Every action URI in this profile.
    pub const ALL: &[&str] = &[PAUSED, RESTARTED, STARTED, SUBMITTED];
}

/// Actions of the assessment item profile.
pub mod assessment_item {
    /// Item completed.
    pub const COMPLETED: &str = "http://purl.imsglobal.org/vocab/caliper/v1/action#Completed";
    /// Item reviewed.
    pub const REVIEWED: &str = "http://purl.imsglobal.org/vocab/caliper/v1/action#Reviewed";
    /// Item skipped.
    pub const SKIPPED: &str = "http://purl.imsglobal.org/vocab/caliper/v1/action#Skipped";
    /// Item started.
    pub const STARTED: &str = "http://purl.imsglobal.org/vocab/caliper/v1/action#Started";
    /// Item viewed.
    pub const VIEWED: &str = "http://purl.imsglobal.org/vocab/caliper/v1/action#Viewed";

    /// Every action URI in this profile.
    pub const ALL: &[&str] = &[COMPLETED, REVIEWED, SKIPPED, STARTED, VIEWED];
}

/// Actions of the outcome profile.
pub mod outcome {
    /// An attempt was graded.
    pub const GRADED: &str = "http://purl.imsglobal.org/vocab/caliper/v1/action#Graded";

    /// Every action URI in this profile.
    pub const ALL: &[&str] = &[GRADED];
}

/// Actions of the session profile.
pub mod session {
    /// Actor logged in.
    pub const LOGGED_IN: &str = "http://purl.imsglobal.org/vocab/caliper/v1/action#LoggedIn";
    /// Actor logged out.
    pub const LOGGED_OUT: &str = "http://purl.imsglobal.org/vocab/caliper/v1/action#LoggedOut";
    /// Session timed out.
    pub const TIMED_OUT: &str = "http://purl.imsglobal.org/vocab/caliper/v1/action#TimedOut";

    /// Every action URI in this profile.
    pub const ALL: &[&str] = &[LOGGED_IN, LOGGED_OUT, TIMED_OUT];
}
