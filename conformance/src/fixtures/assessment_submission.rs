//! A learner submits an assessment, generating an attempt. The
//! assessment carries the full assignment window, and the generated
//! attempt points back at its assignable and actor by id, never by
//! embedding.

use caliper_model::entities::{Assessment, Attempt, Person, SoftwareApplication};
use caliper_model::events::AssessmentEvent;
use caliper_model::vocab::actions;
use caliper_model::{EntityRef, Event, EventContext};

use super::{created_clock, event_at, instant, modified_at};

const ASSESSMENT_ID: &str =
    "https://example.edu/politicalScience/2015/american-revolution-101/assessment/001";

/// Builds the assessment submission scenario graph.
#[must_use]
pub fn submitted_assessment_event() -> Event {
    let clock = created_clock();

    let mut actor = Person::new("https://example.edu/user/554433", &clock);
    actor.base.date_modified = modified_at();

    let mut assessment = Assessment::new(ASSESSMENT_ID, &clock);
    assessment.base.name = "American Revolution - Key Figures Assessment".to_owned();
    assessment.base.date_modified = modified_at();
    assessment.resource.is_part_of = Some(EntityRef::by_id(
        "https://example.edu/politicalScience/2015/american-revolution-101",
    ));
    assessment.resource.date_published = Some(instant(2015, 8, 15, 9, 30, 0));
    assessment.assignable.date_to_activate = Some(instant(2015, 8, 16, 5, 0, 0));
    assessment.assignable.date_to_show = Some(instant(2015, 8, 16, 5, 0, 0));
    assessment.assignable.date_to_start_on = Some(instant(2015, 8, 16, 5, 0, 0));
    assessment.assignable.date_to_submit = Some(instant(2015, 9, 28, 11, 59, 59));
    assessment.assignable.max_attempts = Some(2);
    assessment.assignable.max_submits = Some(2);
    assessment.assignable.max_score = Some(3.0);

    let mut attempt = Attempt::new(
        "https://example.edu/politicalScience/2015/american-revolution-101/assessment/001/attempt1",
        &clock,
    );
    attempt.assignable = Some(EntityRef::by_id(ASSESSMENT_ID));
    attempt.actor = Some(EntityRef::by_id("https://example.edu/user/554433"));
    attempt.count = Some(1);
    attempt.started_at_time = Some(event_at());

    let mut app = SoftwareApplication::new("https://com.sat/super-assessment-tool", &clock);
    app.base.name = "Super Assessment Tool".to_owned();
    app.base.date_modified = modified_at();

    AssessmentEvent::new(
        EntityRef::embedded(actor),
        actions::assessment::SUBMITTED,
        EntityRef::embedded(assessment),
        event_at(),
    )
    .with_generated(EntityRef::embedded(attempt))
    .with_ed_app(EntityRef::embedded(app))
    .into()
}

/// Published canonical document of [`submitted_assessment_event`].
pub const ASSESSMENT_SUBMISSION_DOCUMENT: &str = r#"{
  "@context": "http://purl.imsglobal.org/ctx/caliper/v1/Context",
  "@type": "http://purl.imsglobal.org/caliper/v1/AssessmentEvent",
  "actor": {
    "@id": "https://example.edu/user/554433",
    "@type": "http://purl.imsglobal.org/caliper/v1/lis/Person",
    "dateCreated": "2015-08-01T06:00:00.000Z",
    "dateModified": "2015-09-02T11:30:00.000Z"
  },
  "action": "http://purl.imsglobal.org/vocab/caliper/v1/action#Submitted",
  "object": {
    "@id": "https://example.edu/politicalScience/2015/american-revolution-101/assessment/001",
    "@type": "http://purl.imsglobal.org/caliper/v1/Assessment",
    "name": "American Revolution - Key Figures Assessment",
    "dateCreated": "2015-08-01T06:00:00.000Z",
    "dateModified": "2015-09-02T11:30:00.000Z",
    "isPartOf": "https://example.edu/politicalScience/2015/american-revolution-101",
    "datePublished": "2015-08-15T09:30:00.000Z",
    "dateToActivate": "2015-08-16T05:00:00.000Z",
    "dateToShow": "2015-08-16T05:00:00.000Z",
    "dateToStartOn": "2015-08-16T05:00:00.000Z",
    "dateToSubmit": "2015-09-28T11:59:59.000Z",
    "maxAttempts": 2,
    "maxSubmits": 2,
    "maxScore": 3.0
  },
  "generated": {
    "@id": "https://example.edu/politicalScience/2015/american-revolution-101/assessment/001/attempt1",
    "@type": "http://purl.imsglobal.org/caliper/v1/Attempt",
    "dateCreated": "2015-08-01T06:00:00.000Z",
    "dateModified": "2015-08-01T06:00:00.000Z",
    "assignable": "https://example.edu/politicalScience/2015/american-revolution-101/assessment/001",
    "actor": "https://example.edu/user/554433",
    "count": 1,
    "startedAtTime": "2015-09-15T10:15:00.000Z"
  },
  "eventTime": "2015-09-15T10:15:00.000Z",
  "edApp": {
    "@id": "https://com.sat/super-assessment-tool",
    "@type": "http://purl.imsglobal.org/caliper/v1/SoftwareApplication",
    "name": "Super Assessment Tool",
    "dateCreated": "2015-08-01T06:00:00.000Z",
    "dateModified": "2015-09-02T11:30:00.000Z"
  }
}"#;
