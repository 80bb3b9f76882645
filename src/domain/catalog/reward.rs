//! RewardCategory enum - the four motivators respondents distribute points across.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Total points available across all reward sliders.
pub const REWARD_POINTS_CAP: u16 = 100;

/// Starting allocation for every reward slider.
pub const INITIAL_REWARD_POINTS: u8 = 25;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RewardCategory {
    Recognition,
    Mastery,
    Autonomy,
    Financial,
}

impl RewardCategory {
    /// Returns all categories in slider order.
    pub fn all() -> &'static [RewardCategory] {
        &[
            RewardCategory::Recognition,
            RewardCategory::Mastery,
            RewardCategory::Autonomy,
            RewardCategory::Financial,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            RewardCategory::Recognition => "Recognition",
            RewardCategory::Mastery => "Mastery",
            RewardCategory::Autonomy => "Autonomy",
            RewardCategory::Financial => "Financial",
        }
    }
}

impl fmt::Display for RewardCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
