//! Vocabulary validator.
//!
//! Every type tag must come from the published URI tables and every
//! action must belong to its profile's table. LIS roles and statuses
//! outside the published vocabularies are extensions, reported as
//! warnings rather than failures.

use caliper_model::entities::{Entity, EntityRef, ResourceAttrs};
use caliper_model::events::Event;
use caliper_model::vocab::{entity_type, event_type, lis};
use caliper_model::validate_event;

use crate::fixtures;
use crate::report::{CheckResult, ConformanceReport};

/// Checks vocabulary membership over the whole fixture corpus.
#[must_use]
pub fn validate() -> ConformanceReport {
    let mut report = ConformanceReport::new();

    for (name, event, _) in fixtures::events() {
        let check = format!("vocabulary/{name}");
        let mut violations = Vec::new();
        let mut foreign = Vec::new();

        if !event_type::ALL.contains(&event.type_iri()) {
            violations.push(format!(
                "event type tag `{}` is outside the event table",
                event.type_iri()
            ));
        }
        if let Err(err) = validate_event(&event) {
            violations.push(err.to_string());
        }
        for entity in embedded_entities(&event) {
            check_entity(entity, &mut violations, &mut foreign);
        }

        push(&mut report, &check, violations, foreign);
    }

    for (name, entity, _) in fixtures::entities() {
        let check = format!("vocabulary/{name}");
        let mut violations = Vec::new();
        let mut foreign = Vec::new();
        check_entity(&entity, &mut violations, &mut foreign);
        push(&mut report, &check, violations, foreign);
    }

    report
}

fn check_entity(entity: &Entity, violations: &mut Vec<String>, foreign: &mut Vec<String>) {
    if !entity_type::ALL.contains(&entity.type_iri()) {
        violations.push(format!(
            "entity type tag `{}` is outside the entity table",
            entity.type_iri()
        ));
    }
    let Entity::Membership(membership) = entity else {
        return;
    };
    for role in &membership.roles {
        if !lis::role::ALL.contains(&role.as_str()) {
            foreign.push(role.clone());
        }
    }
    if let Some(status) = &membership.status {
        if !lis::status::ALL.contains(&status.as_str()) {
            foreign.push(status.clone());
        }
    }
}

/// Every entity embedded anywhere in the event, including entities
/// nested inside other embedded entities. Id references contribute
/// nothing; the form carries no type tag to check.
fn embedded_entities(event: &Event) -> Vec<&Entity> {
    let base = event.base();
    let mut references: Vec<&EntityRef> = vec![&base.actor, &base.object];
    references.extend(base.target.as_ref());
    references.extend(base.generated.as_ref());
    if let Event::Navigation(e) = event {
        references.extend(e.navigated_from.as_ref());
    }
    references.extend(base.ed_app.as_ref());
    references.extend(base.group.as_ref());
    references.extend(base.membership.as_ref());

    let mut found = Vec::new();
    for reference in references {
        collect(reference, &mut found);
    }
    found
}

fn collect<'a>(reference: &'a EntityRef, found: &mut Vec<&'a Entity>) {
    let EntityRef::Entity(entity) = reference else {
        return;
    };
    found.push(entity);
    for nested in nested_references(entity) {
        collect(nested, found);
    }
}

fn nested_references(entity: &Entity) -> Vec<&EntityRef> {
    match entity {
        Entity::Generic(_)
        | Entity::Person(_)
        | Entity::SoftwareApplication(_)
        | Entity::Membership(_)
        | Entity::LearningObjective(_) => Vec::new(),
        Entity::Organization(e) => e.sub_organization_of.iter().collect(),
        Entity::CourseOffering(e) => e.sub_organization_of.iter().collect(),
        Entity::CourseSection(e) => e.sub_organization_of.iter().collect(),
        Entity::Group(e) => e.sub_organization_of.iter().collect(),
        Entity::DigitalResource(e) => resource_references(&e.resource),
        Entity::WebPage(e) => resource_references(&e.resource),
        Entity::EPubVolume(e) => resource_references(&e.resource),
        Entity::Frame(e) => resource_references(&e.resource),
        Entity::View(e) => e.actor.iter().chain(e.frame.iter()).collect(),
        Entity::MediaObject(e) => resource_references(&e.resource),
        Entity::ImageObject(e) => resource_references(&e.resource),
        Entity::AudioObject(e) => resource_references(&e.resource),
        Entity::VideoObject(e) => resource_references(&e.resource),
        Entity::MediaLocation(e) => resource_references(&e.resource),
        Entity::AssignableDigitalResource(e) => resource_references(&e.resource),
        Entity::Assessment(e) => resource_references(&e.resource),
        Entity::AssessmentItem(e) => resource_references(&e.resource),
        Entity::Attempt(e) => e.assignable.iter().chain(e.actor.iter()).collect(),
        Entity::Result(e) => e
            .assignable
            .iter()
            .chain(e.actor.iter())
            .chain(e.scored_by.iter())
            .collect(),
        Entity::Session(e) => e.actor.iter().collect(),
    }
}

fn resource_references(resource: &ResourceAttrs) -> Vec<&EntityRef> {
    resource
        .aligned_learning_objective
        .iter()
        .chain(resource.is_part_of.iter())
        .collect()
}

fn push(
    report: &mut ConformanceReport,
    check: &str,
    violations: Vec<String>,
    foreign: Vec<String>,
) {
    if !violations.is_empty() {
        report.push(CheckResult::fail_with_details(
            check,
            "vocabulary violations detected",
            violations,
        ));
        return;
    }
    for term in &foreign {
        report.push(CheckResult::warn(
            check,
            format!("LIS term outside the published vocabulary: {term}"),
        ));
    }
    if foreign.is_empty() {
        report.push(CheckResult::pass(
            check,
            "all terms come from the published vocabularies",
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use caliper_model::entities::{Group, Membership, Organization, Person};
    use caliper_model::events::NavigationEvent;
    use caliper_model::vocab::actions;
    use caliper_model::{EntityRef, EventContext};

    #[test]
    fn embedded_entities_are_walked_recursively() {
        let clock = crate::fixtures::created_clock();
        let mut group = Group::new("https://example.edu/pol101/group/001", &clock);
        group.sub_organization_of = Some(EntityRef::embedded(Organization::new(
            "https://example.edu",
            &clock,
        )));
        let event = Event::from(
            NavigationEvent::new(
                EntityRef::embedded(Person::new("https://example.edu/user/554433", &clock)),
                actions::navigation::NAVIGATED_TO,
                EntityRef::by_id("https://example.com/book/1"),
                crate::fixtures::event_at(),
            )
            .with_group(EntityRef::embedded(group)),
        );
        assert_eq!(embedded_entities(&event).len(), 3);
    }

    #[test]
    fn foreign_roles_warn_rather_than_fail() {
        let clock = crate::fixtures::created_clock();
        let mut membership = Membership::new("https://example.edu/pol101/roster/9", &clock);
        membership.roles = vec!["https://example.edu/vocab/roles#Auditor".to_owned()];
        let mut violations = Vec::new();
        let mut foreign = Vec::new();
        check_entity(&Entity::from(membership), &mut violations, &mut foreign);
        assert!(violations.is_empty());
        assert_eq!(foreign, vec!["https://example.edu/vocab/roles#Auditor"]);
    }

    #[test]
    fn the_fixture_corpus_uses_published_terms() {
        let report = validate();
        assert!(report.all_passed(), "failures: {:#?}", report.results);
    }
}
