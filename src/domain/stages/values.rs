//! Core values discovery stage: paired choice, independence slider,
//! job preference and the top-5 value pick.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::domain::catalog::{CoreValue, TOP_VALUES_LIMIT};
use crate::domain::foundation::{Percentage, Stage, ValidationError};

use super::StageCollector;

/// "Which matters more to you?"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PairedChoice {
    /// Freedom to choose how you work.
    Freedom,
    /// Clear rules and predictable routines.
    Structure,
}

/// Preferred job environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JobPreference {
    /// Flexible hours but unclear expectations.
    Flexible,
    /// 9-5 schedule with strict protocols.
    Structured,
}

/// Answers collected by the values stage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValuesRecord {
    pub paired_choice: PairedChoice,
    pub independence_preference: Percentage,
    pub job_preference: JobPreference,
    /// Selected values in the order they were picked.
    pub top_values: Vec<CoreValue>,
}

impl ValuesRecord {
    /// Returns true if the respondent picked the given value.
    pub fn includes(&self, value: CoreValue) -> bool {
        self.top_values.contains(&value)
    }

    /// Checks that exactly five distinct values were picked.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.top_values.len() != TOP_VALUES_LIMIT {
            return Err(ValidationError::out_of_range(
                "top_values",
                TOP_VALUES_LIMIT as i32,
                TOP_VALUES_LIMIT as i32,
                self.top_values.len() as i32,
            ));
        }
        for (idx, value) in self.top_values.iter().enumerate() {
            if self.top_values[..idx].contains(value) {
                return Err(ValidationError::invalid_format(
                    "top_values",
                    format!("'{}' selected more than once", value),
                ));
            }
        }
        Ok(())
    }
}

/// Result of toggling a value button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueToggle {
    Selected,
    Deselected,
    /// Five values are already selected; nothing changed.
    LimitReached,
}

/// Form state for the values stage.
#[derive(Debug, Clone)]
pub struct ValuesForm {
    paired_choice: Option<PairedChoice>,
    independence: Percentage,
    job_preference: Option<JobPreference>,
    selected: Vec<CoreValue>,
    submitted: bool,
}

impl ValuesForm {
    pub fn new() -> Self {
        Self {
            paired_choice: None,
            independence: Percentage::HALF,
            job_preference: None,
            selected: Vec::with_capacity(TOP_VALUES_LIMIT),
            submitted: false,
        }
    }

    pub fn choose(&mut self, choice: PairedChoice) {
        self.paired_choice = Some(choice);
    }

    /// Moves the independence slider; values above 100 pin to 100.
    pub fn set_independence(&mut self, value: u8) {
        self.independence = Percentage::new(value);
    }

    pub fn prefer_job(&mut self, preference: JobPreference) {
        self.job_preference = Some(preference);
    }

    /// Toggles a value, refusing a sixth selection.
    pub fn toggle_value(&mut self, value: CoreValue) -> ValueToggle {
        if let Some(pos) = self.selected.iter().position(|v| *v == value) {
            self.selected.remove(pos);
            debug!(%value, "Value deselected");
            return ValueToggle::Deselected;
        }
        if self.selected.len() >= TOP_VALUES_LIMIT {
            warn!(%value, limit = TOP_VALUES_LIMIT, "Value selection ignored: limit reached");
            return ValueToggle::LimitReached;
        }
        self.selected.push(value);
        ValueToggle::Selected
    }

    /// Selected values in pick order.
    pub fn selected(&self) -> &[CoreValue] {
        &self.selected
    }

    /// Returns true if the value button should be disabled.
    pub fn is_value_disabled(&self, value: CoreValue) -> bool {
        !self.selected.contains(&value) && self.selected.len() >= TOP_VALUES_LIMIT
    }
}

impl Default for ValuesForm {
    fn default() -> Self {
        Self::new()
    }
}

impl StageCollector for ValuesForm {
    type Record = ValuesRecord;
    const STAGE: Stage = Stage::Values;

    fn is_complete(&self) -> bool {
        self.paired_choice.is_some()
            && self.job_preference.is_some()
            && self.selected.len() == TOP_VALUES_LIMIT
    }

    fn snapshot(&self) -> Option<ValuesRecord> {
        if !self.is_complete() {
            return None;
        }
        Some(ValuesRecord {
            paired_choice: self.paired_choice?,
            independence_preference: self.independence,
            job_preference: self.job_preference?,
            top_values: self.selected.clone(),
        })
    }

    fn is_submitted(&self) -> bool {
        self.submitted
    }

    fn set_submitted(&mut self, submitted: bool) {
        self.submitted = submitted;
    }
}
