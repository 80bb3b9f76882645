//! ImpactLevel enum - the reach a respondent wants their work to have.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImpactLevel {
    #[serde(rename = "self")]
    Personal,
    Team,
    Organization,
    Society,
}

impl ImpactLevel {
    /// Returns all levels, narrowest first.
    pub fn all() -> &'static [ImpactLevel] {
        &[
            ImpactLevel::Personal,
            ImpactLevel::Team,
            ImpactLevel::Organization,
            ImpactLevel::Society,
        ]
    }

    pub fn id(&self) -> &'static str {
        match self {
            ImpactLevel::Personal => "self",
            ImpactLevel::Team => "team",
            ImpactLevel::Organization => "organization",
            ImpactLevel::Society => "society",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ImpactLevel::Personal => "Self",
            ImpactLevel::Team => "Team",
            ImpactLevel::Organization => "Organization",
            ImpactLevel::Society => "Society",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            ImpactLevel::Personal => "Personal growth and achievement",
            ImpactLevel::Team => "Direct impact on colleagues",
            ImpactLevel::Organization => "Company-wide influence",
            ImpactLevel::Society => "Broader social impact",
        }
    }
}

impl fmt::Display for ImpactLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn personal_level_serializes_as_self() {
        assert_eq!(serde_json::to_string(&ImpactLevel::Personal).unwrap(), "\"self\"");
        let level: ImpactLevel = serde_json::from_str("\"self\"").unwrap();
        assert_eq!(level, ImpactLevel::Personal);
    }

    #[test]
    fn ids_match_serde_names() {
        for level in ImpactLevel::all() {
            let json = serde_json::to_string(level).unwrap();
            assert_eq!(json, format!("\"{}\"", level.id()));
        }
    }
}
