//! Caliper v1 vocabulary tables.
//!
//! Static concept-to-URI mappings published by the Caliper v1 information
//! model. These are inert lookup data: entity and event variants embed them
//! as fixed type tags, and the profile layer checks actions against the
//! per-profile tables. Nothing here has behavior.

pub mod actions;
pub mod entity_type;
pub mod event_type;
pub mod lis;

/// JSON-LD context URI, emitted as `@context` on every serialized event.
pub const CONTEXT: &str = "http://purl.imsglobal.org/ctx/caliper/v1/Context";
