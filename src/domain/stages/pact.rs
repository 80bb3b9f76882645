//! PACT framework stage: purpose, authenticity and trajectory ratings, the
//! congruence slider and a trajectory reflection.

use serde::{Deserialize, Serialize};

use crate::domain::catalog::PactDimension;
use crate::domain::foundation::{Percentage, SevenPointRating, Stage, ValidationError};

use super::StageCollector;

/// The trajectory reflection must be longer than this many characters.
pub const REFLECTION_MIN_CHARS: usize = 20;

/// Raw PACT answers, each on its own scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PactScores {
    pub purpose: SevenPointRating,
    pub authenticity: SevenPointRating,
    pub trajectory: SevenPointRating,
    pub congruence: Percentage,
}

impl PactScores {
    /// Returns the raw value recorded for a dimension.
    pub fn value(&self, dimension: PactDimension) -> f64 {
        let raw = match dimension {
            PactDimension::Purpose => self.purpose.value(),
            PactDimension::Authenticity => self.authenticity.value(),
            PactDimension::Congruence => self.congruence.value(),
            PactDimension::Trajectory => self.trajectory.value(),
        };
        f64::from(raw)
    }

    /// Raw values in acronym order.
    pub fn entries(&self) -> Vec<(PactDimension, f64)> {
        PactDimension::all()
            .iter()
            .map(|d| (*d, self.value(*d)))
            .collect()
    }

    /// Arithmetic mean of the four raw values.
    ///
    /// Mixes the 1-7 and 0-100 scales; callers wanting a comparable figure
    /// should average normalized values instead.
    pub fn raw_mean(&self) -> f64 {
        let entries = self.entries();
        entries.iter().map(|(_, v)| v).sum::<f64>() / entries.len() as f64
    }
}

/// Answers collected by the PACT stage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PactRecord {
    pub pact_scores: PactScores,
    pub overall_pact_score: f64,
    pub trajectory_reflection: String,
}

impl PactRecord {
    /// Builds a record, deriving the overall score from the raw answers.
    pub fn new(pact_scores: PactScores, trajectory_reflection: impl Into<String>) -> Self {
        Self {
            overall_pact_score: pact_scores.raw_mean(),
            pact_scores,
            trajectory_reflection: trajectory_reflection.into(),
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        check_reflection(&self.trajectory_reflection)?;
        if (self.overall_pact_score - self.pact_scores.raw_mean()).abs() > 1e-9 {
            return Err(ValidationError::invalid_format(
                "overall_pact_score",
                format!(
                    "{} does not match the mean of the PACT scores ({})",
                    self.overall_pact_score,
                    self.pact_scores.raw_mean()
                ),
            ));
        }
        Ok(())
    }
}

fn check_reflection(text: &str) -> Result<(), ValidationError> {
    let len = text.trim().chars().count();
    if len == 0 {
        return Err(ValidationError::empty_field("trajectory_reflection"));
    }
    if len <= REFLECTION_MIN_CHARS {
        return Err(ValidationError::invalid_format(
            "trajectory_reflection",
            format!("must be longer than {} characters", REFLECTION_MIN_CHARS),
        ));
    }
    Ok(())
}

/// Form state for the PACT stage.
#[derive(Debug, Clone)]
pub struct PactForm {
    purpose: Option<SevenPointRating>,
    authenticity: Option<SevenPointRating>,
    trajectory: Option<SevenPointRating>,
    congruence: Percentage,
    reflection: String,
    submitted: bool,
}

impl PactForm {
    pub fn new() -> Self {
        Self {
            purpose: None,
            authenticity: None,
            trajectory: None,
            congruence: Percentage::HALF,
            reflection: String::new(),
            submitted: false,
        }
    }

    /// Records an answer for a dimension on that dimension's own scale.
    ///
    /// Purpose, authenticity and trajectory take 1-7; congruence takes 0-100.
    pub fn rate(&mut self, dimension: PactDimension, value: u8) -> Result<(), ValidationError> {
        match dimension {
            PactDimension::Congruence => {
                self.congruence = Percentage::try_new_for("congruence", value)?;
            }
            PactDimension::Purpose => self.purpose = Some(SevenPointRating::try_new(value)?),
            PactDimension::Authenticity => {
                self.authenticity = Some(SevenPointRating::try_new(value)?)
            }
            PactDimension::Trajectory => self.trajectory = Some(SevenPointRating::try_new(value)?),
        }
        Ok(())
    }

    pub fn reflect(&mut self, text: impl Into<String>) {
        self.reflection = text.into();
    }

    fn scores(&self) -> Option<PactScores> {
        Some(PactScores {
            purpose: self.purpose?,
            authenticity: self.authenticity?,
            trajectory: self.trajectory?,
            congruence: self.congruence,
        })
    }
}

impl Default for PactForm {
    fn default() -> Self {
        Self::new()
    }
}

impl StageCollector for PactForm {
    type Record = PactRecord;
    const STAGE: Stage = Stage::Pact;

    fn is_complete(&self) -> bool {
        self.scores().is_some() && check_reflection(&self.reflection).is_ok()
    }

    fn snapshot(&self) -> Option<PactRecord> {
        if !self.is_complete() {
            return None;
        }
        Some(PactRecord::new(self.scores()?, self.reflection.clone()))
    }

    fn is_submitted(&self) -> bool {
        self.submitted
    }

    fn set_submitted(&mut self, submitted: bool) {
        self.submitted = submitted;
    }
}
