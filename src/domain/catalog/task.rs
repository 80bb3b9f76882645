//! Work tasks rated for energy in the meaning stage.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Whether a task tends to suit autonomy seekers, structure preferrers, or neither.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskOrientation {
    Autonomy,
    Structure,
    Neutral,
}

/// The six tasks of the energy audit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MeaningTask {
    SelfDirected,
    Routine,
    TeamMeetings,
    Admin,
    CreativeProblem,
    FollowingProcess,
}

impl MeaningTask {
    /// Returns all tasks in catalog order.
    pub fn all() -> &'static [MeaningTask] {
        &[
            MeaningTask::SelfDirected,
            MeaningTask::Routine,
            MeaningTask::TeamMeetings,
            MeaningTask::Admin,
            MeaningTask::CreativeProblem,
            MeaningTask::FollowingProcess,
        ]
    }

    pub fn id(&self) -> &'static str {
        match self {
            MeaningTask::SelfDirected => "self-directed",
            MeaningTask::Routine => "routine",
            MeaningTask::TeamMeetings => "team-meetings",
            MeaningTask::Admin => "admin",
            MeaningTask::CreativeProblem => "creative-problem",
            MeaningTask::FollowingProcess => "following-process",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            MeaningTask::SelfDirected => "Self-directed projects",
            MeaningTask::Routine => "Routine tasks with clear steps",
            MeaningTask::TeamMeetings => "Team meetings and collaboration",
            MeaningTask::Admin => "Administrative work",
            MeaningTask::CreativeProblem => "Creative problem solving",
            MeaningTask::FollowingProcess => "Following established processes",
        }
    }

    pub fn orientation(&self) -> TaskOrientation {
        match self {
            MeaningTask::SelfDirected | MeaningTask::CreativeProblem => TaskOrientation::Autonomy,
            MeaningTask::Routine | MeaningTask::Admin | MeaningTask::FollowingProcess => {
                TaskOrientation::Structure
            }
            MeaningTask::TeamMeetings => TaskOrientation::Neutral,
        }
    }
}

impl fmt::Display for MeaningTask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_has_six_tasks() {
        assert_eq!(MeaningTask::all().len(), 6);
    }

    #[test]
    fn orientation_split_is_two_three_one() {
        let count = |o| {
            MeaningTask::all()
                .iter()
                .filter(|t| t.orientation() == o)
                .count()
        };
        assert_eq!(count(TaskOrientation::Autonomy), 2);
        assert_eq!(count(TaskOrientation::Structure), 3);
        assert_eq!(count(TaskOrientation::Neutral), 1);
    }

    #[test]
    fn serde_uses_kebab_case_ids() {
        for task in MeaningTask::all() {
            let json = serde_json::to_string(task).unwrap();
            assert_eq!(json, format!("\"{}\"", task.id()));
        }
    }
}
