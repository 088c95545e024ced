//! Canonical layout validator.
//!
//! Checks what encoding must guarantee on every document it produces:
//! event keys follow the fixed precedence, every entity object leads
//! with `@id` then `@type`, and nothing encodes as null or as an empty
//! string, array, or object.

use caliper_model::events::Event;
use caliper_model::serializer::{entity_to_json, event_to_json};
use serde_json::Value;

use crate::fixtures;
use crate::report::{CheckResult, ConformanceReport};

const EVENT_KEY_ORDER: &[&str] = &[
    "@context",
    "@type",
    "actor",
    "action",
    "object",
    "target",
    "generated",
    "navigatedFrom",
    "eventTime",
    "edApp",
    "group",
    "membership",
];

const REQUIRED_EVENT_KEYS: &[&str] =
    &["@context", "@type", "actor", "action", "object", "eventTime"];

/// Checks the canonical layout of every encoded fixture document.
#[must_use]
pub fn validate() -> ConformanceReport {
    let mut report = ConformanceReport::new();

    for (name, event, _) in fixtures::events() {
        let document = event_to_json(&event);
        let mut violations = Vec::new();
        check_event_keys(&document, &mut violations);
        check_absent_optionals(&event, &document, &mut violations);
        walk(&document, "$", &mut violations);
        push(&mut report, &format!("layout/{name}"), violations);
    }

    for (name, entity, _) in fixtures::entities() {
        let document = entity_to_json(&entity);
        let mut violations = Vec::new();
        walk(&document, "$", &mut violations);
        push(&mut report, &format!("layout/{name}"), violations);
    }

    report
}

fn check_event_keys(document: &Value, violations: &mut Vec<String>) {
    let Some(map) = document.as_object() else {
        violations.push("event document is not a JSON object".to_owned());
        return;
    };
    let keys: Vec<&str> = map.keys().map(String::as_str).collect();

    for required in REQUIRED_EVENT_KEYS {
        if !keys.contains(required) {
            violations.push(format!("required key `{required}` is missing"));
        }
    }

    let mut last = 0;
    for key in &keys {
        match EVENT_KEY_ORDER.iter().position(|canonical| canonical == key) {
            Some(position) => {
                if position < last {
                    violations.push(format!("key `{key}` appears out of canonical order"));
                }
                last = position;
            }
            None => violations.push(format!("unexpected key `{key}` in event document")),
        }
    }
}

fn check_absent_optionals(event: &Event, document: &Value, violations: &mut Vec<String>) {
    let base = event.base();
    let mut optionals: Vec<(&str, bool)> = vec![
        ("target", base.target.is_none()),
        ("generated", base.generated.is_none()),
        ("edApp", base.ed_app.is_none()),
        ("group", base.group.is_none()),
        ("membership", base.membership.is_none()),
    ];
    optionals.push(match event {
        Event::Navigation(e) => ("navigatedFrom", e.navigated_from.is_none()),
        _ => ("navigatedFrom", true),
    });

    for (key, unset) in optionals {
        if unset && document.get(key).is_some() {
            violations.push(format!("unset field `{key}` appears in the document"));
        }
    }
}

/// Rejects every value an encoder obeying the omission rules can never
/// produce, and checks that entity objects lead with `@id` then `@type`.
fn walk(value: &Value, path: &str, violations: &mut Vec<String>) {
    match value {
        Value::Null => violations.push(format!("{path} is null")),
        Value::String(text) if text.is_empty() => {
            violations.push(format!("{path} is an empty string"));
        }
        Value::Array(items) => {
            if items.is_empty() {
                violations.push(format!("{path} is an empty array"));
            }
            for (index, item) in items.iter().enumerate() {
                walk(item, &format!("{path}[{index}]"), violations);
            }
        }
        Value::Object(map) => {
            if map.is_empty() {
                violations.push(format!("{path} is an empty object"));
            }
            if map.contains_key("@id") {
                let keys: Vec<&str> = map.keys().map(String::as_str).collect();
                if keys.first() != Some(&"@id") || keys.get(1) != Some(&"@type") {
                    violations.push(format!("{path} does not lead with @id and @type"));
                }
            }
            for (key, nested) in map {
                walk(nested, &format!("{path}.{key}"), violations);
            }
        }
        _ => {}
    }
}

fn push(report: &mut ConformanceReport, check: &str, violations: Vec<String>) {
    if violations.is_empty() {
        report.push(CheckResult::pass(check, "document layout is canonical"));
    } else {
        report.push(CheckResult::fail_with_details(
            check,
            "layout violations detected",
            violations,
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn walk_rejects_every_empty_sentinel() {
        let document = json!({
            "@id": "https://example.edu/thing/1",
            "@type": "https://example.edu/Thing",
            "name": "",
            "keywords": [],
            "properties": {},
            "comment": null,
        });
        let mut violations = Vec::new();
        walk(&document, "$", &mut violations);
        assert_eq!(violations.len(), 4, "violations: {violations:#?}");
    }

    #[test]
    fn entity_objects_must_lead_with_id_then_type() {
        let document = json!({
            "name": "out of place",
            "@id": "https://example.edu/thing/1",
            "@type": "https://example.edu/Thing",
        });
        let mut violations = Vec::new();
        walk(&document, "$", &mut violations);
        assert_eq!(violations, vec!["$ does not lead with @id and @type"]);
    }

    #[test]
    fn event_keys_must_follow_the_canonical_precedence() {
        let document = json!({
            "@context": "ctx",
            "@type": "type",
            "actor": "a",
            "action": "act",
            "eventTime": "t",
            "object": "o",
        });
        let mut violations = Vec::new();
        check_event_keys(&document, &mut violations);
        assert_eq!(
            violations,
            vec!["key `object` appears out of canonical order"]
        );
    }

    #[test]
    fn unknown_event_keys_are_flagged() {
        let document = json!({
            "@context": "ctx",
            "@type": "type",
            "actor": "a",
            "action": "act",
            "object": "o",
            "eventTime": "t",
            "foo": 1,
        });
        let mut violations = Vec::new();
        check_event_keys(&document, &mut violations);
        assert_eq!(violations, vec!["unexpected key `foo` in event document"]);
    }

    #[test]
    fn the_fixture_corpus_is_canonical() {
        let report = validate();
        assert!(report.all_passed(), "failures: {:#?}", report.results);
    }
}
