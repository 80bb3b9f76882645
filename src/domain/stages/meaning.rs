//! Meaning & fulfillment stage: task energy audit, impact level, reward
//! point distribution and the ideal-workday narrative.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::domain::catalog::{
    ImpactLevel, MeaningTask, RewardCategory, INITIAL_REWARD_POINTS, REWARD_POINTS_CAP,
};
use crate::domain::foundation::{FivePointRating, Percentage, Stage, ValidationError};

use super::StageCollector;

/// The ideal-workday description must be longer than this many characters.
pub const IDEAL_WORKDAY_MIN_CHARS: usize = 10;

/// Outcome of moving one reward slider.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AllocationEdit {
    Applied,
    /// The edit would have pushed the total over the cap; prior value kept.
    Rejected { attempted_total: u16 },
}

/// Points distributed across the four reward categories.
///
/// Invariant: the points never add up to more than [`REWARD_POINTS_CAP`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RewardAllocation(BTreeMap<RewardCategory, Percentage>);

impl RewardAllocation {
    /// Every category starts at 25 points.
    pub fn initial() -> Self {
        Self(
            RewardCategory::all()
                .iter()
                .map(|c| (*c, Percentage::new(INITIAL_REWARD_POINTS)))
                .collect(),
        )
    }

    /// Points currently assigned to a category.
    pub fn get(&self, category: RewardCategory) -> Percentage {
        self.0.get(&category).copied().unwrap_or_default()
    }

    /// Sum of all categories.
    pub fn total(&self) -> u16 {
        self.0.values().map(|p| p.value() as u16).sum()
    }

    /// Sets a category, rejecting the edit if the total would exceed the cap.
    ///
    /// Other sliders are never adjusted to make room.
    pub fn set(&mut self, category: RewardCategory, value: Percentage) -> AllocationEdit {
        let attempted_total = self.total() - self.get(category).value() as u16 + value.value() as u16;
        if attempted_total > REWARD_POINTS_CAP {
            return AllocationEdit::Rejected { attempted_total };
        }
        self.0.insert(category, value);
        AllocationEdit::Applied
    }

    /// Iterates categories in slider order.
    pub fn iter(&self) -> impl Iterator<Item = (RewardCategory, Percentage)> + '_ {
        self.0.iter().map(|(c, p)| (*c, *p))
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Some(missing) = RewardCategory::all().iter().find(|c| !self.0.contains_key(*c)) {
            return Err(ValidationError::empty_field(format!(
                "reward_preferences.{}",
                missing.name()
            )));
        }
        let total = self.total();
        if total > REWARD_POINTS_CAP {
            return Err(ValidationError::out_of_range(
                "reward_preferences",
                0,
                REWARD_POINTS_CAP as i32,
                total as i32,
            ));
        }
        Ok(())
    }
}

impl Default for RewardAllocation {
    fn default() -> Self {
        Self::initial()
    }
}

/// Answers collected by the meaning stage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeaningRecord {
    pub task_energy: BTreeMap<MeaningTask, FivePointRating>,
    pub impact_level: ImpactLevel,
    pub reward_preferences: RewardAllocation,
    pub ideal_workday: String,
}

impl MeaningRecord {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Some(missing) = MeaningTask::all().iter().find(|t| !self.task_energy.contains_key(*t)) {
            return Err(ValidationError::empty_field(format!("task_energy.{}", missing.id())));
        }
        self.reward_preferences.validate()?;
        check_ideal_workday(&self.ideal_workday)
    }
}

fn check_ideal_workday(text: &str) -> Result<(), ValidationError> {
    let len = text.trim().chars().count();
    if len == 0 {
        return Err(ValidationError::empty_field("ideal_workday"));
    }
    if len <= IDEAL_WORKDAY_MIN_CHARS {
        return Err(ValidationError::invalid_format(
            "ideal_workday",
            format!("must be longer than {} characters", IDEAL_WORKDAY_MIN_CHARS),
        ));
    }
    Ok(())
}

/// Form state for the meaning stage.
#[derive(Debug, Clone, Default)]
pub struct MeaningForm {
    task_energy: BTreeMap<MeaningTask, FivePointRating>,
    impact_level: Option<ImpactLevel>,
    rewards: RewardAllocation,
    ideal_workday: String,
    submitted: bool,
}

impl MeaningForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rates how energizing a task is (1-5).
    pub fn rate_task(&mut self, task: MeaningTask, energy: u8) -> Result<(), ValidationError> {
        let rating = FivePointRating::try_new(energy)?;
        self.task_energy.insert(task, rating);
        Ok(())
    }

    pub fn select_impact(&mut self, level: ImpactLevel) {
        self.impact_level = Some(level);
    }

    /// Moves a reward slider. Values above 100 pin to 100 before the cap check.
    pub fn set_reward(&mut self, category: RewardCategory, points: u8) -> AllocationEdit {
        let edit = self.rewards.set(category, Percentage::new(points));
        if let AllocationEdit::Rejected { attempted_total } = edit {
            warn!(
                %category,
                points,
                attempted_total,
                "Reward edit rejected: total would exceed {}",
                REWARD_POINTS_CAP
            );
        }
        edit
    }

    pub fn rewards(&self) -> &RewardAllocation {
        &self.rewards
    }

    pub fn describe_ideal_workday(&mut self, text: impl Into<String>) {
        self.ideal_workday = text.into();
    }
}

impl StageCollector for MeaningForm {
    type Record = MeaningRecord;
    const STAGE: Stage = Stage::Meaning;

    fn is_complete(&self) -> bool {
        self.task_energy.len() == MeaningTask::all().len()
            && self.impact_level.is_some()
            && check_ideal_workday(&self.ideal_workday).is_ok()
    }

    fn snapshot(&self) -> Option<MeaningRecord> {
        if !self.is_complete() {
            return None;
        }
        Some(MeaningRecord {
            task_energy: self.task_energy.clone(),
            impact_level: self.impact_level?,
            reward_preferences: self.rewards.clone(),
            ideal_workday: self.ideal_workday.clone(),
        })
    }

    fn is_submitted(&self) -> bool {
        self.submitted
    }

    fn set_submitted(&mut self, submitted: bool) {
        self.submitted = submitted;
    }
}
