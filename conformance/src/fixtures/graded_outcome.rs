//! The grading tool grades a submitted attempt, generating a result.
//! The result's `scoredBy` stays an id reference, and the event carries
//! no edApp, group, or membership.

use caliper_model::entities::{Attempt, Person, ResultEntity};
use caliper_model::events::OutcomeEvent;
use caliper_model::vocab::actions;
use caliper_model::{EntityRef, Event, EventContext};

use super::{created_clock, event_at, modified_at};

const ASSESSMENT_ID: &str =
    "https://example.edu/politicalScience/2015/american-revolution-101/assessment/001";
const ATTEMPT_ID: &str =
    "https://example.edu/politicalScience/2015/american-revolution-101/assessment/001/attempt1";

/// Builds the graded outcome scenario graph.
#[must_use]
pub fn graded_attempt_event() -> Event {
    let clock = created_clock();

    let mut actor = Person::new("https://example.edu/user/554433", &clock);
    actor.base.date_modified = modified_at();

    let mut attempt = Attempt::new(ATTEMPT_ID, &clock);
    attempt.assignable = Some(EntityRef::by_id(ASSESSMENT_ID));
    attempt.actor = Some(EntityRef::by_id("https://example.edu/user/554433"));
    attempt.count = Some(1);
    attempt.started_at_time = Some(event_at());

    let mut result = ResultEntity::new(
        "https://example.edu/politicalScience/2015/american-revolution-101/assessment/001/attempt1/result",
        &clock,
    );
    result.assignable = Some(EntityRef::by_id(ASSESSMENT_ID));
    result.actor = Some(EntityRef::by_id("https://example.edu/user/554433"));
    result.normal_score = Some(3.0);
    result.penalty_score = Some(0.0);
    result.extra_credit_score = Some(0.0);
    result.total_score = Some(3.0);
    result.curved_total_score = Some(3.0);
    result.curve_factor = Some(0.0);
    result.comment = Some("Well done.".to_owned());
    result.scored_by = Some(EntityRef::by_id("https://com.sat/super-grading-tool"));

    OutcomeEvent::new(
        EntityRef::embedded(actor),
        actions::outcome::GRADED,
        EntityRef::embedded(attempt),
        event_at(),
    )
    .with_generated(EntityRef::embedded(result))
    .into()
}

/// Published canonical document of [`graded_attempt_event`].
pub const GRADED_OUTCOME_DOCUMENT: &str = r#"{
  "@context": "http://purl.imsglobal.org/ctx/caliper/v1/Context",
  "@type": "http://purl.imsglobal.org/caliper/v1/OutcomeEvent",
  "actor": {
    "@id": "https://example.edu/user/554433",
    "@type": "http://purl.imsglobal.org/caliper/v1/lis/Person",
    "dateCreated": "2015-08-01T06:00:00.000Z",
    "dateModified": "2015-09-02T11:30:00.000Z"
  },
  "action": "http://purl.imsglobal.org/vocab/caliper/v1/action#Graded",
  "object": {
    "@id": "https://example.edu/politicalScience/2015/american-revolution-101/assessment/001/attempt1",
    "@type": "http://purl.imsglobal.org/caliper/v1/Attempt",
    "dateCreated": "2015-08-01T06:00:00.000Z",
    "dateModified": "2015-08-01T06:00:00.000Z",
    "assignable": "https://example.edu/politicalScience/2015/american-revolution-101/assessment/001",
    "actor": "https://example.edu/user/554433",
    "count": 1,
    "startedAtTime": "2015-09-15T10:15:00.000Z"
  },
  "generated": {
    "@id": "https://example.edu/politicalScience/2015/american-revolution-101/assessment/001/attempt1/result",
    "@type": "http://purl.imsglobal.org/caliper/v1/Result",
    "dateCreated": "2015-08-01T06:00:00.000Z",
    "dateModified": "2015-08-01T06:00:00.000Z",
    "assignable": "https://example.edu/politicalScience/2015/american-revolution-101/assessment/001",
    "actor": "https://example.edu/user/554433",
    "normalScore": 3.0,
    "penaltyScore": 0.0,
    "extraCreditScore": 0.0,
    "totalScore": 3.0,
    "curvedTotalScore": 3.0,
    "curveFactor": 0.0,
    "comment": "Well done.",
    "scoredBy": "https://com.sat/super-grading-tool"
  },
  "eventTime": "2015-09-15T10:15:00.000Z"
}"#;
