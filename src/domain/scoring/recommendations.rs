//! Career recommendation sets keyed by profile orientation.

use serde::Serialize;

use super::profile::{Orientation, PreferenceProfile};

/// Work environments, example roles and cultures that suit an orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CareerRecommendations {
    pub environments: &'static [&'static str],
    pub roles: &'static [&'static str],
    pub cultures: &'static [&'static str],
}

static AUTONOMY: CareerRecommendations = CareerRecommendations {
    environments: &["Startup", "Creative Agency", "Freelance/Consulting"],
    roles: &["Entrepreneur", "Creative Director", "Independent Consultant"],
    cultures: &["Innovation-focused", "Flexible", "Results-oriented"],
};

static STRUCTURE: CareerRecommendations = CareerRecommendations {
    environments: &["Enterprise", "Government", "Healthcare"],
    roles: &["Project Manager", "Operations Specialist", "Quality Assurance"],
    cultures: &["Process-driven", "Stable", "Hierarchy-based"],
};

static BALANCED: CareerRecommendations = CareerRecommendations {
    environments: &["Mid-size Companies", "NGOs", "Academia"],
    roles: &["Team Lead", "Product Manager", "Research Analyst"],
    cultures: &["Collaborative", "Growth-oriented", "Mission-driven"],
};

pub fn for_orientation(orientation: Orientation) -> &'static CareerRecommendations {
    match orientation {
        Orientation::Autonomy => &AUTONOMY,
        Orientation::Structure => &STRUCTURE,
        Orientation::Balanced => &BALANCED,
    }
}

pub fn for_profile(profile: PreferenceProfile) -> &'static CareerRecommendations {
    for_orientation(profile.orientation())
}
