//! Outcome entities: the scores produced by grading an attempt.

use chrono::{DateTime, Utc};

use crate::clock::Clock;
use crate::entities::{Describable, Entity, EntityBase, EntityRef, Temporal};
use crate::vocab::entity_type;

/// The graded result of an attempt.
///
/// The vocabulary names this kind `Result`; the Rust identifier avoids
/// shadowing the prelude type. Score fields are plain numbers with no
/// range constraint; producers decide what each score means.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultEntity {
    /// Common entity attributes.
    pub base: EntityBase,
    /// The assignable the result grades.
    pub assignable: Option<EntityRef>,
    /// Whose work was graded.
    pub actor: Option<EntityRef>,
    /// Score before penalties and extra credit.
    pub normal_score: Option<f64>,
    /// Points deducted.
    pub penalty_score: Option<f64>,
    /// Points awarded beyond the normal score.
    pub extra_credit_score: Option<f64>,
    /// Final score.
    pub total_score: Option<f64>,
    /// Final score after curving.
    pub curved_total_score: Option<f64>,
    /// Curve factor applied to produce the curved score.
    pub curve_factor: Option<f64>,
    /// Grader's comment.
    pub comment: Option<String>,
    /// The agent that produced the scores.
    pub scored_by: Option<EntityRef>,
}

impl ResultEntity {
    /// Builds a result with timestamps taken from `clock`.
    #[must_use]
    pub fn new(id: impl Into<String>, clock: &dyn Clock) -> Self {
        Self {
            base: EntityBase::new(id, clock),
            assignable: None,
            actor: None,
            normal_score: None,
            penalty_score: None,
            extra_credit_score: None,
            total_score: None,
            curved_total_score: None,
            curve_factor: None,
            comment: None,
            scored_by: None,
        }
    }
}

impl Describable for ResultEntity {
    fn id(&self) -> &str {
        &self.base.id
    }

    fn type_iri(&self) -> &'static str {
        entity_type::RESULT
    }
}

impl Temporal for ResultEntity {
    fn date_created(&self) -> DateTime<Utc> {
        self.base.date_created
    }

    fn date_modified(&self) -> DateTime<Utc> {
        self.base.date_modified
    }
}

impl From<ResultEntity> for Entity {
    fn from(entity: ResultEntity) -> Self {
        Entity::Result(entity)
    }
}
