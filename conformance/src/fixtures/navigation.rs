//! A reader in a political science course navigates from the course
//! landing page to a chapter of an EPUB volume. The richest fixture:
//! every optional event field except `generated` is populated, and the
//! group chain nests three organizations deep.

use caliper_model::entities::{
    CourseOffering, CourseSection, EPubVolume, Frame, Group, Membership, Person,
    SoftwareApplication, WebPage,
};
use caliper_model::events::NavigationEvent;
use caliper_model::vocab::{actions, lis};
use caliper_model::{EntityRef, Event, EventContext};

use super::{created_clock, event_at, modified_at};

/// Builds the navigation scenario graph.
#[must_use]
pub fn navigated_to_event() -> Event {
    let clock = created_clock();

    let mut actor = Person::new("https://example.edu/user/554433", &clock);
    actor.base.date_modified = modified_at();

    let mut volume = EPubVolume::new(
        "https://example.com/viewer/book/34843#epubcfi(/4/3)",
        &clock,
    );
    volume.base.name = "The Glorious Cause: The American Revolution, 1763-1789 \
                        (Oxford History of the United States)"
        .to_owned();
    volume.base.date_modified = modified_at();
    volume.resource.version = Some("2nd ed.".to_owned());

    let mut frame = Frame::new(
        "https://example.com/viewer/book/34843#epubcfi(/4/3/1)",
        &clock,
    );
    frame.base.name = "Key Figures: George Washington".to_owned();
    frame.base.date_modified = modified_at();
    frame.resource.version = Some("2nd ed.".to_owned());
    frame.resource.is_part_of = Some(EntityRef::embedded(volume.clone()));
    frame.index = 1;

    let mut landing = WebPage::new(
        "https://example.edu/politicalScience/2015/american-revolution-101/index.html",
        &clock,
    );
    landing.base.name = "American Revolution 101 Landing Page".to_owned();
    landing.base.date_modified = modified_at();
    landing.resource.version = Some("1.0".to_owned());

    let mut viewer = SoftwareApplication::new("https://example.com/viewer", &clock);
    viewer.base.name = "ePub".to_owned();
    viewer.base.date_modified = modified_at();

    let mut course = CourseOffering::new(
        "https://example.edu/politicalScience/2015/american-revolution-101",
        &clock,
    );
    course.base.name = "Political Science 101: The American Revolution".to_owned();
    course.base.date_modified = modified_at();
    course.course_number = Some("POL101".to_owned());
    course.academic_session = Some("Fall-2015".to_owned());

    let mut section = CourseSection::new(
        "https://example.edu/politicalScience/2015/american-revolution-101/section/001",
        &clock,
    );
    section.base.name = "American Revolution 101".to_owned();
    section.base.date_modified = modified_at();
    section.course_number = Some("POL101".to_owned());
    section.academic_session = Some("Fall-2015".to_owned());
    section.sub_organization_of = Some(EntityRef::embedded(course));

    let mut group = Group::new(
        "https://example.edu/politicalScience/2015/american-revolution-101/section/001/group/001",
        &clock,
    );
    group.base.name = "Discussion Group 001".to_owned();
    group.sub_organization_of = Some(EntityRef::embedded(section));

    let mut membership = Membership::new(
        "https://example.edu/politicalScience/2015/american-revolution-101/roster/554433",
        &clock,
    );
    membership.base.name = "American Revolution 101".to_owned();
    membership.base.description = "Roster entry".to_owned();
    membership.member = Some("https://example.edu/user/554433".to_owned());
    membership.organization = Some(
        "https://example.edu/politicalScience/2015/american-revolution-101/section/001".to_owned(),
    );
    membership.roles = vec![lis::role::LEARNER.to_owned()];
    membership.status = Some(lis::status::ACTIVE.to_owned());

    NavigationEvent::new(
        EntityRef::embedded(actor),
        actions::navigation::NAVIGATED_TO,
        EntityRef::embedded(volume),
        event_at(),
    )
    .with_target(EntityRef::embedded(frame))
    .with_navigated_from(EntityRef::embedded(landing))
    .with_ed_app(EntityRef::embedded(viewer))
    .with_group(EntityRef::embedded(group))
    .with_membership(EntityRef::embedded(membership))
    .into()
}

/// Published canonical document of [`navigated_to_event`].
pub const NAVIGATION_DOCUMENT: &str = r#"{
  "@context": "http://purl.imsglobal.org/ctx/caliper/v1/Context",
  "@type": "http://purl.imsglobal.org/caliper/v1/NavigationEvent",
  "actor": {
    "@id": "https://example.edu/user/554433",
    "@type": "http://purl.imsglobal.org/caliper/v1/lis/Person",
    "dateCreated": "2015-08-01T06:00:00.000Z",
    "dateModified": "2015-09-02T11:30:00.000Z"
  },
  "action": "http://purl.imsglobal.org/vocab/caliper/v1/action#NavigatedTo",
  "object": {
    "@id": "https://example.com/viewer/book/34843#epubcfi(/4/3)",
    "@type": "http://www.idpf.org/epub/vocab/structure/#volume",
    "name": "The Glorious Cause: The American Revolution, 1763-1789 (Oxford History of the United States)",
    "dateCreated": "2015-08-01T06:00:00.000Z",
    "dateModified": "2015-09-02T11:30:00.000Z",
    "version": "2nd ed."
  },
  "target": {
    "@id": "https://example.com/viewer/book/34843#epubcfi(/4/3/1)",
    "@type": "http://purl.imsglobal.org/caliper/v1/Frame",
    "name": "Key Figures: George Washington",
    "dateCreated": "2015-08-01T06:00:00.000Z",
    "dateModified": "2015-09-02T11:30:00.000Z",
    "isPartOf": {
      "@id": "https://example.com/viewer/book/34843#epubcfi(/4/3)",
      "@type": "http://www.idpf.org/epub/vocab/structure/#volume",
      "name": "The Glorious Cause: The American Revolution, 1763-1789 (Oxford History of the United States)",
      "dateCreated": "2015-08-01T06:00:00.000Z",
      "dateModified": "2015-09-02T11:30:00.000Z",
      "version": "2nd ed."
    },
    "version": "2nd ed.",
    "index": 1
  },
  "navigatedFrom": {
    "@id": "https://example.edu/politicalScience/2015/american-revolution-101/index.html",
    "@type": "http://purl.imsglobal.org/caliper/v1/WebPage",
    "name": "American Revolution 101 Landing Page",
    "dateCreated": "2015-08-01T06:00:00.000Z",
    "dateModified": "2015-09-02T11:30:00.000Z",
    "version": "1.0"
  },
  "eventTime": "2015-09-15T10:15:00.000Z",
  "edApp": {
    "@id": "https://example.com/viewer",
    "@type": "http://purl.imsglobal.org/caliper/v1/SoftwareApplication",
    "name": "ePub",
    "dateCreated": "2015-08-01T06:00:00.000Z",
    "dateModified": "2015-09-02T11:30:00.000Z"
  },
  "group": {
    "@id": "https://example.edu/politicalScience/2015/american-revolution-101/section/001/group/001",
    "@type": "http://purl.imsglobal.org/caliper/v1/lis/Group",
    "name": "Discussion Group 001",
    "dateCreated": "2015-08-01T06:00:00.000Z",
    "dateModified": "2015-08-01T06:00:00.000Z",
    "subOrganizationOf": {
      "@id": "https://example.edu/politicalScience/2015/american-revolution-101/section/001",
      "@type": "http://purl.imsglobal.org/caliper/v1/lis/CourseSection",
      "name": "American Revolution 101",
      "dateCreated": "2015-08-01T06:00:00.000Z",
      "dateModified": "2015-09-02T11:30:00.000Z",
      "courseNumber": "POL101",
      "academicSession": "Fall-2015",
      "subOrganizationOf": {
        "@id": "https://example.edu/politicalScience/2015/american-revolution-101",
        "@type": "http://purl.imsglobal.org/caliper/v1/lis/CourseOffering",
        "name": "Political Science 101: The American Revolution",
        "dateCreated": "2015-08-01T06:00:00.000Z",
        "dateModified": "2015-09-02T11:30:00.000Z",
        "courseNumber": "POL101",
        "academicSession": "Fall-2015"
      }
    }
  },
  "membership": {
    "@id": "https://example.edu/politicalScience/2015/american-revolution-101/roster/554433",
    "@type": "http://purl.imsglobal.org/caliper/v1/lis/Membership",
    "name": "American Revolution 101",
    "description": "Roster entry",
    "dateCreated": "2015-08-01T06:00:00.000Z",
    "dateModified": "2015-08-01T06:00:00.000Z",
    "member": "https://example.edu/user/554433",
    "organization": "https://example.edu/politicalScience/2015/american-revolution-101/section/001",
    "roles": ["http://purl.imsglobal.org/vocab/lis/v2/membership#Learner"],
    "status": "http://purl.imsglobal.org/vocab/lis/v2/status#Active"
  }
}"#;
