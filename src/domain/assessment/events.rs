//! Assessment domain events.

use crate::domain::foundation::{AssessmentId, Stage, Timestamp};
use crate::domain::scoring::{AlignmentLevel, PreferenceProfile};
use serde::{Deserialize, Serialize};

/// Events recorded while an assessment moves through its stages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum AssessmentEvent {
    /// A new assessment was opened at the intro.
    Started {
        assessment_id: AssessmentId,
        started_at: Timestamp,
    },

    /// A stage record was accepted for the first time.
    StageCompleted {
        assessment_id: AssessmentId,
        stage: Stage,
    },

    /// A stage was completed again after navigating back; its record was replaced.
    StageAmended {
        assessment_id: AssessmentId,
        stage: Stage,
    },

    /// The user stepped back to the previous section.
    NavigatedBack {
        assessment_id: AssessmentId,
        from: Stage,
        to: Stage,
    },

    /// Results were derived on entering the results stage.
    ResultsComputed {
        assessment_id: AssessmentId,
        alignment_score: u32,
        alignment_level: AlignmentLevel,
        profile: PreferenceProfile,
        completed_at: Timestamp,
    },
}

impl AssessmentEvent {
    pub fn assessment_id(&self) -> AssessmentId {
        match self {
            AssessmentEvent::Started { assessment_id, .. }
            | AssessmentEvent::StageCompleted { assessment_id, .. }
            | AssessmentEvent::StageAmended { assessment_id, .. }
            | AssessmentEvent::NavigatedBack { assessment_id, .. }
            | AssessmentEvent::ResultsComputed { assessment_id, .. } => *assessment_id,
        }
    }
}
