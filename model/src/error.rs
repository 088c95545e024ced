//! Error types for decoding and for profile validation.

use thiserror::Error;

use crate::profiles::Profile;

/// Errors produced while decoding a canonical JSON document.
///
/// Decoding never yields a partial graph: every variant below is returned
/// before any entity or event value reaches the caller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// The input text could not be parsed as JSON at all.
    #[error("input is not valid JSON: {0}")]
    Syntax(String),

    /// The top-level value, or an embedded entity, is not a JSON object.
    #[error("expected a JSON object, found {found}")]
    NotAnObject {
        /// JSON kind actually found.
        found: &'static str,
    },

    /// A required field is absent.
    #[error("required field `{field}` is missing")]
    MissingField {
        /// JSON key of the missing field.
        field: String,
    },

    /// A present field does not have the JSON shape its type expects.
    #[error("field `{field}` expects {expected}, found {found}")]
    FieldShape {
        /// JSON key of the offending field.
        field: String,
        /// What the decoder expected, e.g. `"a string"`.
        expected: &'static str,
        /// JSON kind actually found.
        found: &'static str,
    },

    /// The `@type` tag names a variant this serializer does not know.
    #[error("unsupported @type `{type_iri}`")]
    UnsupportedType {
        /// The unrecognized type URI.
        type_iri: String,
    },
}

/// Errors reported by [`crate::profiles::validate_event`].
///
/// These are advisory construction checks. Nothing in the model enforces
/// them at assignment time; callers invoke the check explicitly.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProfileError {
    /// The event's action URI is not in its profile's action table.
    #[error("action `{action}` is not in the {profile} profile")]
    ForeignAction {
        /// The offending action URI.
        action: String,
        /// The profile the event belongs to.
        profile: Profile,
    },

    /// The embedded object entity is of a kind the profile does not accept.
    #[error("the {profile} profile does not accept `{found}` as object")]
    ObjectKind {
        /// The profile the event belongs to.
        profile: Profile,
        /// Type URI of the embedded object.
        found: &'static str,
    },

    /// The embedded target entity is of a kind the profile does not accept.
    #[error("the {profile} profile does not accept `{found}` as target")]
    TargetKind {
        /// The profile the event belongs to.
        profile: Profile,
        /// Type URI of the embedded target.
        found: &'static str,
    },
}
