//! A standalone roster entry for a teaching assistant who is also
//! enrolled as a learner. Two roles pin the rule that `roles` keeps
//! caller order on the wire.

use caliper_model::entities::Membership;
use caliper_model::vocab::lis;
use caliper_model::Entity;

use super::{created_clock, modified_at};

/// Builds the roster membership entity.
#[must_use]
pub fn roster_membership() -> Entity {
    let clock = created_clock();

    let mut membership = Membership::new(
        "https://example.edu/politicalScience/2015/american-revolution-101/roster/778899",
        &clock,
    );
    membership.base.name = "American Revolution 101".to_owned();
    membership.base.description = "Roster entry".to_owned();
    membership.base.date_modified = modified_at();
    membership.member = Some("https://example.edu/user/778899".to_owned());
    membership.organization = Some(
        "https://example.edu/politicalScience/2015/american-revolution-101/section/001".to_owned(),
    );
    membership.roles = vec![
        lis::role::TEACHING_ASSISTANT.to_owned(),
        lis::role::LEARNER.to_owned(),
    ];
    membership.status = Some(lis::status::ACTIVE.to_owned());
    membership.into()
}

/// Published canonical document of [`roster_membership`].
pub const ROSTER_MEMBERSHIP_DOCUMENT: &str = r#"{
  "@id": "https://example.edu/politicalScience/2015/american-revolution-101/roster/778899",
  "@type": "http://purl.imsglobal.org/caliper/v1/lis/Membership",
  "name": "American Revolution 101",
  "description": "Roster entry",
  "dateCreated": "2015-08-01T06:00:00.000Z",
  "dateModified": "2015-09-02T11:30:00.000Z",
  "member": "https://example.edu/user/778899",
  "organization": "https://example.edu/politicalScience/2015/american-revolution-101/section/001",
  "roles": [
    "http://purl.imsglobal.org/vocab/lis/v2/membership#TeachingAssistant",
    "http://purl.imsglobal.org/vocab/lis/v2/membership#Learner"
  ],
  "status": "http://purl.imsglobal.org/vocab/lis/v2/status#Active"
}"#;
