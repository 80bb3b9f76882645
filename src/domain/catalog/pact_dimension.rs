//! PactDimension enum - Purpose, Authenticity, Congruence, Trajectory.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The answer scale a PACT dimension is collected on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PactScale {
    /// 1-7 agreement rating.
    SevenPoint,
    /// 0-100 slider.
    Percent,
}

impl PactScale {
    /// The value that maps to a full bar in the results breakdown.
    pub fn max(&self) -> f64 {
        match self {
            PactScale::SevenPoint => 7.0,
            PactScale::Percent => 100.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PactDimension {
    Purpose,
    Authenticity,
    Congruence,
    Trajectory,
}

impl PactDimension {
    /// Returns all dimensions in acronym order.
    pub fn all() -> &'static [PactDimension] {
        &[
            PactDimension::Purpose,
            PactDimension::Authenticity,
            PactDimension::Congruence,
            PactDimension::Trajectory,
        ]
    }

    pub fn key(&self) -> &'static str {
        match self {
            PactDimension::Purpose => "purpose",
            PactDimension::Authenticity => "authenticity",
            PactDimension::Congruence => "congruence",
            PactDimension::Trajectory => "trajectory",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            PactDimension::Purpose => "Purpose Alignment",
            PactDimension::Authenticity => "Authenticity",
            PactDimension::Congruence => "Congruence",
            PactDimension::Trajectory => "Trajectory Fit",
        }
    }

    pub fn statement(&self) -> &'static str {
        match self {
            PactDimension::Purpose => {
                "My current or ideal role fits my need for autonomy/structure."
            }
            PactDimension::Authenticity => "I can be my true self within my work environment.",
            PactDimension::Congruence => "My actions align with my values and career goals.",
            PactDimension::Trajectory => {
                "My career path supports my desired balance of autonomy and structure."
            }
        }
    }

    pub fn scale(&self) -> PactScale {
        match self {
            PactDimension::Congruence => PactScale::Percent,
            _ => PactScale::SevenPoint,
        }
    }
}

impl fmt::Display for PactDimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_congruence_uses_percent_scale() {
        for dim in PactDimension::all() {
            let expected = if *dim == PactDimension::Congruence {
                PactScale::Percent
            } else {
                PactScale::SevenPoint
            };
            assert_eq!(dim.scale(), expected);
        }
    }

    #[test]
    fn scale_max_matches_answer_range() {
        assert_eq!(PactScale::SevenPoint.max(), 7.0);
        assert_eq!(PactScale::Percent.max(), 100.0);
    }

    #[test]
    fn keys_match_serde_names() {
        for dim in PactDimension::all() {
            assert_eq!(serde_json::to_string(dim).unwrap(), format!("\"{}\"", dim.key()));
        }
    }
}
