//! Narrative copy derived from the score and profile.

use serde::Serialize;

use super::alignment::PARTIALLY_ALIGNED_THRESHOLD;
use super::profile::PreferenceProfile;

/// Closing reflection line that follows the next-step prompt.
pub const REFLECTION_PROMPT: &str =
    "Reflect on one specific action you could take to move closer to your ideal work environment.";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Insights {
    pub profile_description: &'static str,
    /// Present when the alignment score falls below the partial band.
    pub attention: Option<String>,
    pub next_step: String,
    pub reflection_prompt: &'static str,
}

impl Insights {
    pub fn derive(alignment_score: u32, profile: PreferenceProfile) -> Self {
        let preference = profile.label().to_lowercase();
        let attention = (alignment_score < PARTIALLY_ALIGNED_THRESHOLD).then(|| {
            format!(
                "Your assessment indicates potential misalignment between your preferences and \
                 current situation. Consider exploring roles that better match your {} preferences.",
                preference
            )
        });
        Self {
            profile_description: profile.description(),
            attention,
            next_step: format!(
                "What small change could you try this week to better align your work with your {} preference?",
                preference
            ),
            reflection_prompt: REFLECTION_PROMPT,
        }
    }

    pub fn needs_attention(&self) -> bool {
        self.attention.is_some()
    }
}
