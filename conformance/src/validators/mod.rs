//! Validator families, one module per concern.

pub mod layout;
pub mod roundtrip;
pub mod vocabulary;
