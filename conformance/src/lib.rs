//! Caliper model conformance suite.
//!
//! Validates the model crate's canonical serialization against a fixed
//! corpus of scenario fixtures. Each fixture pairs a fully populated
//! graph with its published canonical document, and three validator
//! families check the pair:
//!
//! | Validator | Checks |
//! |-----------|--------|
//! | `roundtrip` | the graph encodes to the published document; decode inverts encode |
//! | `layout` | event key precedence, `@id`/`@type` first, no null or empty values |
//! | `vocabulary` | type tags, profile actions, LIS roles and statuses |
//!
//! # Entry Point
//!
//! ```
//! let report = caliper_conformance::run_all();
//! assert!(report.all_passed());
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod fixtures;
pub mod report;
pub mod validators;

pub use report::{CheckResult, ConformanceReport, Severity};

/// Runs every validator over the fixture corpus and returns the
/// aggregated report.
#[must_use]
pub fn run_all() -> ConformanceReport {
    let mut report = ConformanceReport::new();
    report.extend(validators::roundtrip::validate());
    report.extend(validators::layout::validate());
    report.extend(validators::vocabulary::validate());
    report
}
