//! Archetype enum - the five purpose archetypes rated in the purpose stage.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Purpose-identity categories, in catalog order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Archetype {
    Creator,
    Builder,
    Healer,
    Seeker,
    Justice,
}

impl Archetype {
    /// Returns all archetypes in catalog order.
    pub fn all() -> &'static [Archetype] {
        &[
            Archetype::Creator,
            Archetype::Builder,
            Archetype::Healer,
            Archetype::Seeker,
            Archetype::Justice,
        ]
    }

    /// Returns the stable id used in answer sheets and records.
    pub fn id(&self) -> &'static str {
        match self {
            Archetype::Creator => "creator",
            Archetype::Builder => "builder",
            Archetype::Healer => "healer",
            Archetype::Seeker => "seeker",
            Archetype::Justice => "justice",
        }
    }

    /// Returns the display name.
    pub fn name(&self) -> &'static str {
        match self {
            Archetype::Creator => "Creator",
            Archetype::Builder => "Builder",
            Archetype::Healer => "Healer/Guide",
            Archetype::Seeker => "Seeker",
            Archetype::Justice => "Justice-Seeker",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Archetype::Creator => "Driven by innovation and original thinking",
            Archetype::Builder => "Finds satisfaction in systematic achievement",
            Archetype::Healer => "Motivated by helping others grow",
            Archetype::Seeker => "Thrives on discovery and exploration",
            Archetype::Justice => "Motivated by fairness and systematic improvement",
        }
    }

    /// Returns the statement the respondent rates from 1 to 7.
    pub fn statement(&self) -> &'static str {
        match self {
            Archetype::Creator => {
                "I feel energized when I create something original with complete control."
            }
            Archetype::Builder => {
                "I find satisfaction in following proven methods to achieve results."
            }
            Archetype::Healer => "Helping others grow in a supportive environment is my purpose.",
            Archetype::Seeker => "I am driven by discovering new paths, even if uncertain.",
            Archetype::Justice => "Fighting for fair systems and rules motivates me.",
        }
    }
}

impl fmt::Display for Archetype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_has_five_archetypes() {
        let ids: Vec<_> = Archetype::all().iter().map(|a| a.id()).collect();
        assert_eq!(ids, vec!["creator", "builder", "healer", "seeker", "justice"]);
    }

    #[test]
    fn serde_uses_the_archetype_id() {
        for archetype in Archetype::all() {
            let json = serde_json::to_string(archetype).unwrap();
            assert_eq!(json, format!("\"{}\"", archetype.id()));
        }
    }

    #[test]
    fn display_uses_name() {
        assert_eq!(Archetype::Justice.to_string(), "Justice-Seeker");
        assert_eq!(Archetype::Healer.to_string(), "Healer/Guide");
    }
}
