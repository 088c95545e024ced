//! Canonical JSON serialization.
//!
//! Encoding is total: every well-formed graph has exactly one canonical
//! document, with fixed key order and unset fields absent rather than
//! null. Decoding inverts it exactly for canonical input and rejects
//! malformed documents without yielding partial graphs.

pub mod decode;
pub mod encode;

pub use decode::Decoder;
pub use encode::{entity_to_json, event_to_json};

use crate::entities::Entity;
use crate::events::Event;

/// Renders the canonical document for `entity` as a compact JSON string.
#[must_use]
pub fn entity_to_string(entity: &Entity) -> String {
    entity_to_json(entity).to_string()
}

/// Renders the canonical document for `event` as a compact JSON string,
/// ready for a transport collaborator to send.
#[must_use]
pub fn event_to_string(event: &Event) -> String {
    event_to_json(event).to_string()
}
