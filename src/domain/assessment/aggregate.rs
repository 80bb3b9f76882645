//! Assessment aggregate - The stage state machine and the answers it collects.
//!
//! An Assessment walks `intro → values → purpose → meaning → pact → results`,
//! stores each accepted stage record and derives results on entering the
//! final stage. Stepping back keeps stored records; completing a stage again
//! re-validates the new payload and replaces the earlier record.

use tracing::{debug, info};

use crate::domain::foundation::{
    AssessmentId, DomainError, ErrorCode, Stage, StateMachine, Timestamp,
};
use crate::domain::scoring::{AssessmentResults, ScoringEngine};

use super::{AssessmentEvent, AssessmentProgress, AssessmentRecord, StagePayload};

/// The Assessment aggregate root.
#[derive(Debug, Clone)]
pub struct Assessment {
    id: AssessmentId,
    stage: Stage,
    record: AssessmentRecord,
    results: Option<AssessmentResults>,
    engine: ScoringEngine,
    started_at: Timestamp,
    completed_at: Option<Timestamp>,
    domain_events: Vec<AssessmentEvent>,
}

impl Assessment {
    /// Opens a new assessment at the intro with the default scoring engine.
    pub fn start() -> Self {
        Self::start_with(ScoringEngine::default())
    }

    /// Opens a new assessment that will score with the given engine.
    pub fn start_with(engine: ScoringEngine) -> Self {
        let id = AssessmentId::new();
        let now = Timestamp::now();

        let mut assessment = Self {
            id,
            stage: Stage::first(),
            record: AssessmentRecord::default(),
            results: None,
            engine,
            started_at: now,
            completed_at: None,
            domain_events: Vec::new(),
        };

        assessment.record_event(AssessmentEvent::Started {
            assessment_id: id,
            started_at: now,
        });
        info!(assessment_id = %id, "Assessment started");

        assessment
    }

    // ───────────────────────────────────────────────────────────────
    // Accessors
    // ───────────────────────────────────────────────────────────────

    pub fn id(&self) -> AssessmentId {
        self.id
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    pub fn record(&self) -> &AssessmentRecord {
        &self.record
    }

    /// Results, available once the assessment reached the results stage.
    pub fn results(&self) -> Option<&AssessmentResults> {
        self.results.as_ref()
    }

    pub fn engine(&self) -> ScoringEngine {
        self.engine
    }

    pub fn started_at(&self) -> Timestamp {
        self.started_at
    }

    pub fn completed_at(&self) -> Option<Timestamp> {
        self.completed_at
    }

    pub fn is_finished(&self) -> bool {
        self.stage.is_terminal()
    }

    pub fn progress(&self) -> AssessmentProgress {
        AssessmentProgress::at(self.stage)
    }

    /// Drains recorded domain events.
    pub fn take_events(&mut self) -> Vec<AssessmentEvent> {
        std::mem::take(&mut self.domain_events)
    }

    // ───────────────────────────────────────────────────────────────
    // Stage Transitions
    // ───────────────────────────────────────────────────────────────

    /// Accepts the current stage's payload and advances one stage.
    ///
    /// Checks:
    /// 1. Assessment has not reached results
    /// 2. Payload belongs to the current stage
    /// 3. Payload passes its record validation
    ///
    /// Returns the stage now active.
    pub fn complete_stage(&mut self, payload: StagePayload) -> Result<Stage, DomainError> {
        // 1. Results is terminal
        if self.is_finished() {
            return Err(DomainError::new(
                ErrorCode::AssessmentFinished,
                "Assessment already reached its results",
            ));
        }

        // 2. Payload must match the active stage
        let stage = payload.stage();
        if stage != self.stage {
            return Err(DomainError::new(
                ErrorCode::InvalidStateTransition,
                format!(
                    "Cannot complete {} while {} is active",
                    stage.title(),
                    self.stage.title()
                ),
            )
            .with_detail("expected", self.stage.key())
            .with_detail("received", stage.key()));
        }

        // 3. Re-check the record
        payload.validate().map_err(|e| {
            DomainError::new(
                ErrorCode::StageIncomplete,
                format!("{} is incomplete: {}", stage.title(), e),
            )
            .with_detail("stage", stage.key())
            .with_detail("field", e.field())
        })?;

        let next = self
            .stage
            .next()
            .ok_or_else(|| DomainError::new(ErrorCode::AssessmentFinished, "No stage follows"))?;
        self.stage = self
            .stage
            .transition_to(next)
            .map_err(|e| DomainError::new(ErrorCode::InvalidStateTransition, e.to_string()))?;

        let amended = self.record.has(stage);
        self.record.store(payload);

        if amended {
            self.record_event(AssessmentEvent::StageAmended {
                assessment_id: self.id,
                stage,
            });
            info!(assessment_id = %self.id, stage = stage.key(), "Stage amended");
        } else if stage.collects_answers() {
            self.record_event(AssessmentEvent::StageCompleted {
                assessment_id: self.id,
                stage,
            });
            info!(assessment_id = %self.id, stage = stage.key(), "Stage completed");
        } else {
            debug!(assessment_id = %self.id, "Intro acknowledged");
        }

        if self.stage == Stage::Results {
            self.compute_results();
        }

        Ok(self.stage)
    }

    /// Steps back to the previous section, keeping stored records.
    ///
    /// Only valid strictly between the intro and the results.
    pub fn go_back(&mut self) -> Result<Stage, DomainError> {
        if self.is_finished() {
            return Err(DomainError::new(
                ErrorCode::AssessmentFinished,
                "Cannot leave the results stage",
            ));
        }

        let previous = self.stage.previous_section().ok_or_else(|| {
            DomainError::new(
                ErrorCode::InvalidStateTransition,
                format!("No previous section before {}", self.stage.title()),
            )
            .with_detail("stage", self.stage.key())
        })?;

        let from = self.stage;
        self.stage = from
            .transition_to(previous)
            .map_err(|e| DomainError::new(ErrorCode::InvalidStateTransition, e.to_string()))?;

        self.record_event(AssessmentEvent::NavigatedBack {
            assessment_id: self.id,
            from,
            to: previous,
        });
        debug!(assessment_id = %self.id, from = from.key(), to = previous.key(), "Navigated back");

        Ok(previous)
    }

    // ───────────────────────────────────────────────────────────────
    // Internal Helpers
    // ───────────────────────────────────────────────────────────────

    fn compute_results(&mut self) {
        let results = self.engine.evaluate(&self.record);
        let now = Timestamp::now();

        self.record_event(AssessmentEvent::ResultsComputed {
            assessment_id: self.id,
            alignment_score: results.alignment_score,
            alignment_level: results.alignment_level,
            profile: results.profile,
            completed_at: now,
        });
        info!(
            assessment_id = %self.id,
            alignment_score = results.alignment_score,
            profile = results.profile.label(),
            "Assessment results computed"
        );

        self.results = Some(results);
        self.completed_at = Some(now);
    }

    fn record_event(&mut self, event: AssessmentEvent) {
        self.domain_events.push(event);
    }
}
