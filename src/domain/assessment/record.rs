//! The aggregated assessment record and the per-stage completion payload.

use serde::{Deserialize, Deserializer, Serialize};

use crate::domain::foundation::{Stage, ValidationError};
use crate::domain::stages::{MeaningRecord, PactRecord, PurposeRecord, ValuesRecord};

/// Answers gathered so far, one optional record per answer stage.
///
/// Any subset may be absent. A missing, `null` or empty (`{}`) section reads
/// as absent; a section with only some of its fields is rejected.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentRecord {
    #[serde(default, deserialize_with = "section", skip_serializing_if = "Option::is_none")]
    pub values: Option<ValuesRecord>,
    #[serde(default, deserialize_with = "section", skip_serializing_if = "Option::is_none")]
    pub purpose: Option<PurposeRecord>,
    #[serde(default, deserialize_with = "section", skip_serializing_if = "Option::is_none")]
    pub meaning: Option<MeaningRecord>,
    #[serde(default, deserialize_with = "section", skip_serializing_if = "Option::is_none")]
    pub pact: Option<PactRecord>,
}

impl AssessmentRecord {
    pub fn is_empty(&self) -> bool {
        self.values.is_none() && self.purpose.is_none() && self.meaning.is_none() && self.pact.is_none()
    }

    /// Whether a record is stored for the given stage.
    pub fn has(&self, stage: Stage) -> bool {
        match stage {
            Stage::Values => self.values.is_some(),
            Stage::Purpose => self.purpose.is_some(),
            Stage::Meaning => self.meaning.is_some(),
            Stage::Pact => self.pact.is_some(),
            Stage::Intro | Stage::Results => false,
        }
    }

    /// Stages with a stored record, in wizard order.
    pub fn completed_stages(&self) -> Vec<Stage> {
        Stage::all().iter().copied().filter(|s| self.has(*s)).collect()
    }

    /// Stores a payload under its stage key, replacing any earlier record.
    pub(crate) fn store(&mut self, payload: StagePayload) {
        match payload {
            StagePayload::Intro => {}
            StagePayload::Values(r) => self.values = Some(r),
            StagePayload::Purpose(r) => self.purpose = Some(r),
            StagePayload::Meaning(r) => self.meaning = Some(r),
            StagePayload::Pact(r) => self.pact = Some(r),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Section<T> {
    Filled(T),
    Empty(Empty),
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct Empty {}

fn section<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(match Option::<Section<T>>::deserialize(deserializer)? {
        Some(Section::Filled(record)) => Some(record),
        Some(Section::Empty(_)) | None => None,
    })
}

/// What a stage hands to the orchestrator when it completes.
#[derive(Debug, Clone, PartialEq)]
pub enum StagePayload {
    /// The intro collects nothing; completing it just starts the questions.
    Intro,
    Values(ValuesRecord),
    Purpose(PurposeRecord),
    Meaning(MeaningRecord),
    Pact(PactRecord),
}

impl StagePayload {
    pub fn stage(&self) -> Stage {
        match self {
            StagePayload::Intro => Stage::Intro,
            StagePayload::Values(_) => Stage::Values,
            StagePayload::Purpose(_) => Stage::Purpose,
            StagePayload::Meaning(_) => Stage::Meaning,
            StagePayload::Pact(_) => Stage::Pact,
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        match self {
            StagePayload::Intro => Ok(()),
            StagePayload::Values(r) => r.validate(),
            StagePayload::Purpose(r) => r.validate(),
            StagePayload::Meaning(r) => r.validate(),
            StagePayload::Pact(r) => r.validate(),
        }
    }
}

impl From<ValuesRecord> for StagePayload {
    fn from(record: ValuesRecord) -> Self {
        StagePayload::Values(record)
    }
}

impl From<PurposeRecord> for StagePayload {
    fn from(record: PurposeRecord) -> Self {
        StagePayload::Purpose(record)
    }
}

impl From<MeaningRecord> for StagePayload {
    fn from(record: MeaningRecord) -> Self {
        StagePayload::Meaning(record)
    }
}

impl From<PactRecord> for StagePayload {
    fn from(record: PactRecord) -> Self {
        StagePayload::Pact(record)
    }
}
