//! Round-trip validator.
//!
//! Three equalities must hold for every fixture: the graph encodes to
//! the published document, the published document decodes back to the
//! graph, and decode inverts encode exactly.

use caliper_model::serializer::{entity_to_json, event_to_json, Decoder};
use serde_json::Value;

use crate::fixtures;
use crate::report::{CheckResult, ConformanceReport};

/// Checks the round-trip equalities over the whole fixture corpus.
#[must_use]
pub fn validate() -> ConformanceReport {
    let mut report = ConformanceReport::new();
    let clock = fixtures::created_clock();
    let decoder = Decoder::new(&clock);

    for (name, event, document) in fixtures::events() {
        let mut violations = Vec::new();
        let encoded = event_to_json(&event);

        match serde_json::from_str::<Value>(document) {
            Ok(published) => {
                if encoded != published {
                    violations
                        .push("encoded document differs from the published form".to_owned());
                }
            }
            Err(err) => violations.push(format!("published document is not valid JSON: {err}")),
        }

        match decoder.event_str(document) {
            Ok(decoded) => {
                if decoded != event {
                    violations.push("published document decodes to a different graph".to_owned());
                }
            }
            Err(err) => violations.push(format!("published document fails to decode: {err}")),
        }

        match decoder.event(&encoded) {
            Ok(decoded) => {
                if decoded != event {
                    violations.push("decode does not invert encode".to_owned());
                }
            }
            Err(err) => violations.push(format!("encoded document fails to decode: {err}")),
        }

        push(&mut report, &format!("roundtrip/{name}"), violations);
    }

    for (name, entity, document) in fixtures::entities() {
        let mut violations = Vec::new();
        let encoded = entity_to_json(&entity);

        match serde_json::from_str::<Value>(document) {
            Ok(published) => {
                if encoded != published {
                    violations
                        .push("encoded document differs from the published form".to_owned());
                }
            }
            Err(err) => violations.push(format!("published document is not valid JSON: {err}")),
        }

        match decoder.entity_str(document) {
            Ok(decoded) => {
                if decoded != entity {
                    violations.push("published document decodes to a different graph".to_owned());
                }
            }
            Err(err) => violations.push(format!("published document fails to decode: {err}")),
        }

        match decoder.entity(&encoded) {
            Ok(decoded) => {
                if decoded != entity {
                    violations.push("decode does not invert encode".to_owned());
                }
            }
            Err(err) => violations.push(format!("encoded document fails to decode: {err}")),
        }

        push(&mut report, &format!("roundtrip/{name}"), violations);
    }

    report
}

fn push(report: &mut ConformanceReport, check: &str, violations: Vec<String>) {
    if violations.is_empty() {
        report.push(CheckResult::pass(
            check,
            "encode and decode agree with the published document",
        ));
    } else {
        report.push(CheckResult::fail_with_details(
            check,
            "round-trip equalities violated",
            violations,
        ));
    }
}
