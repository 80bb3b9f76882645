//! AssessmentRunner - Replays an answer sheet through the stage forms.

use thiserror::Error;
use tracing::{debug, warn};

use crate::domain::answers::{
    AnswerSheet, MeaningAnswers, PactAnswers, PurposeAnswers, ValuesAnswers,
};
use crate::domain::assessment::{Assessment, StagePayload};
use crate::domain::catalog::PactDimension;
use crate::domain::foundation::{DomainError, Stage, ValidationError};
use crate::domain::scoring::ScoringEngine;
use crate::domain::stages::{
    AllocationEdit, MeaningForm, PactForm, PurposeForm, StageCollector, ValueToggle, ValuesForm,
};

/// Errors raised while replaying a sheet.
#[derive(Debug, Clone, Error)]
pub enum ReplayError {
    #[error("No answers for {stage}")]
    MissingStage { stage: Stage },

    #[error("{stage} answers leave the form incomplete")]
    Incomplete { stage: Stage },

    #[error("Invalid answer in {stage}: {source}")]
    InvalidAnswer {
        stage: Stage,
        #[source]
        source: ValidationError,
    },

    #[error(transparent)]
    Domain(#[from] DomainError),
}

impl ReplayError {
    fn invalid(stage: Stage) -> impl FnOnce(ValidationError) -> Self {
        move |source| ReplayError::InvalidAnswer { stage, source }
    }
}

/// Drives a fresh [`Assessment`] from intro to results using a sheet.
#[derive(Debug, Clone, Copy, Default)]
pub struct AssessmentRunner {
    engine: ScoringEngine,
}

impl AssessmentRunner {
    pub fn new(engine: ScoringEngine) -> Self {
        Self { engine }
    }

    /// Replays every stage in order and returns the finished assessment.
    pub fn run(&self, sheet: &AnswerSheet) -> Result<Assessment, ReplayError> {
        let mut assessment = Assessment::start_with(self.engine);
        assessment.complete_stage(StagePayload::Intro)?;

        let values = require(sheet.values.as_ref(), Stage::Values)?;
        let record = submit(replay_values(values), Stage::Values)?;
        assessment.complete_stage(record.into())?;

        let purpose = require(sheet.purpose.as_ref(), Stage::Purpose)?;
        let record = submit(replay_purpose(purpose)?, Stage::Purpose)?;
        assessment.complete_stage(record.into())?;

        let meaning = require(sheet.meaning.as_ref(), Stage::Meaning)?;
        let record = submit(replay_meaning(meaning)?, Stage::Meaning)?;
        assessment.complete_stage(record.into())?;

        let pact = require(sheet.pact.as_ref(), Stage::Pact)?;
        let record = submit(replay_pact(pact)?, Stage::Pact)?;
        assessment.complete_stage(record.into())?;

        Ok(assessment)
    }
}

fn require<T>(answers: Option<&T>, stage: Stage) -> Result<&T, ReplayError> {
    answers.ok_or(ReplayError::MissingStage { stage })
}

fn submit<C: StageCollector>(mut form: C, stage: Stage) -> Result<C::Record, ReplayError> {
    form.submit().ok_or(ReplayError::Incomplete { stage })
}

fn replay_values(answers: &ValuesAnswers) -> ValuesForm {
    let mut form = ValuesForm::new();
    if let Some(choice) = answers.paired_choice {
        form.choose(choice);
    }
    if let Some(independence) = answers.independence {
        form.set_independence(independence);
    }
    if let Some(preference) = answers.job_preference {
        form.prefer_job(preference);
    }
    for value in &answers.toggles {
        if form.toggle_value(*value) == ValueToggle::LimitReached {
            debug!(%value, "Toggle ignored during replay");
        }
    }
    form
}

fn replay_purpose(answers: &PurposeAnswers) -> Result<PurposeForm, ReplayError> {
    let mut form = PurposeForm::new();
    for (archetype, rating) in &answers.ratings {
        form.rate(*archetype, *rating)
            .map_err(ReplayError::invalid(Stage::Purpose))?;
    }
    if let Some(symbol) = answers.symbol {
        form.select_symbol(symbol);
    }
    Ok(form)
}

fn replay_meaning(answers: &MeaningAnswers) -> Result<MeaningForm, ReplayError> {
    let mut form = MeaningForm::new();
    for (task, energy) in &answers.task_energy {
        form.rate_task(*task, *energy)
            .map_err(ReplayError::invalid(Stage::Meaning))?;
    }
    if let Some(level) = answers.impact_level {
        form.select_impact(level);
    }
    for edit in &answers.reward_edits {
        if let AllocationEdit::Rejected { attempted_total } = form.set_reward(edit.category, edit.points) {
            warn!(
                category = ?edit.category,
                points = edit.points,
                attempted_total,
                "Reward edit rejected during replay; keeping previous value"
            );
        }
    }
    form.describe_ideal_workday(answers.ideal_workday.clone());
    Ok(form)
}

fn replay_pact(answers: &PactAnswers) -> Result<PactForm, ReplayError> {
    let mut form = PactForm::new();
    let ratings = [
        (PactDimension::Purpose, answers.purpose),
        (PactDimension::Authenticity, answers.authenticity),
        (PactDimension::Congruence, answers.congruence),
        (PactDimension::Trajectory, answers.trajectory),
    ];
    for (dimension, value) in ratings {
        if let Some(value) = value {
            form.rate(dimension, value)
                .map_err(ReplayError::invalid(Stage::Pact))?;
        }
    }
    form.reflect(answers.reflection.clone());
    Ok(form)
}
