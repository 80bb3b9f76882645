//! AnswerSheet - A respondent's raw interactions, in the order they happened.
//!
//! Sheets are replayed through the stage forms, so every rule a form applies
//! interactively (value cap, reward budget, slider clamping) also applies here.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::catalog::{Archetype, CoreValue, ImpactLevel, MeaningTask, RewardCategory};
use crate::domain::foundation::Stage;
use crate::domain::stages::{JobPreference, PairedChoice};

/// Raw answers for all four question stages.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnswerSheet {
    /// Optional respondent label carried into the report header.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub respondent: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub values: Option<ValuesAnswers>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub purpose: Option<PurposeAnswers>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meaning: Option<MeaningAnswers>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pact: Option<PactAnswers>,
}

impl AnswerSheet {
    /// Question stages with no answers on this sheet, in wizard order.
    pub fn missing_stages(&self) -> Vec<Stage> {
        let present = [
            (Stage::Values, self.values.is_some()),
            (Stage::Purpose, self.purpose.is_some()),
            (Stage::Meaning, self.meaning.is_some()),
            (Stage::Pact, self.pact.is_some()),
        ];
        present
            .into_iter()
            .filter(|(_, has)| !has)
            .map(|(stage, _)| stage)
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValuesAnswers {
    pub paired_choice: Option<PairedChoice>,
    /// Slider position; the form's default applies when omitted.
    #[serde(default)]
    pub independence: Option<u8>,
    pub job_preference: Option<JobPreference>,
    /// Value toggles in click order. Toggling a selected value deselects it.
    #[serde(default)]
    pub toggles: Vec<CoreValue>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PurposeAnswers {
    #[serde(default)]
    pub ratings: BTreeMap<Archetype, u8>,
    pub symbol: Option<Archetype>,
}

/// One reward slider move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RewardEdit {
    pub category: RewardCategory,
    pub points: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeaningAnswers {
    #[serde(default)]
    pub task_energy: BTreeMap<MeaningTask, u8>,
    pub impact_level: Option<ImpactLevel>,
    /// Slider moves in order; moves that overshoot the budget are rejected.
    #[serde(default)]
    pub reward_edits: Vec<RewardEdit>,
    #[serde(default)]
    pub ideal_workday: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PactAnswers {
    pub purpose: Option<u8>,
    pub authenticity: Option<u8>,
    pub trajectory: Option<u8>,
    /// Slider position; the form's default applies when omitted.
    #[serde(default)]
    pub congruence: Option<u8>,
    #[serde(default)]
    pub reflection: String,
}
