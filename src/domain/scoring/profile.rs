//! Preference profile classification.
//!
//! Classification is table driven: indicator tables list the answer patterns
//! that point toward autonomy or structure, and an ordered rule list maps an
//! indicator tally to a profile. The first matching rule wins, so the autonomy
//! rules shadow the structure rule when both would match.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::catalog::CoreValue;
use crate::domain::stages::{JobPreference, PairedChoice, ValuesRecord};

/// Broad direction of a profile, used to pick recommendations and copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    Autonomy,
    Structure,
    Balanced,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PreferenceProfile {
    StrongAutonomySeeker,
    AutonomyLeaning,
    StructurePreferrer,
    BalancedIntegrator,
}

impl PreferenceProfile {
    pub fn label(&self) -> &'static str {
        match self {
            PreferenceProfile::StrongAutonomySeeker => "Strong Autonomy Seeker",
            PreferenceProfile::AutonomyLeaning => "Autonomy Leaning",
            PreferenceProfile::StructurePreferrer => "Structure Preferrer",
            PreferenceProfile::BalancedIntegrator => "Balanced Integrator",
        }
    }

    pub fn orientation(&self) -> Orientation {
        match self {
            PreferenceProfile::StrongAutonomySeeker | PreferenceProfile::AutonomyLeaning => {
                Orientation::Autonomy
            }
            PreferenceProfile::StructurePreferrer => Orientation::Structure,
            PreferenceProfile::BalancedIntegrator => Orientation::Balanced,
        }
    }

    /// One-paragraph explanation shown under the profile badge.
    pub fn description(&self) -> &'static str {
        match self.orientation() {
            Orientation::Autonomy => {
                "You thrive with creative freedom and self-direction. You prefer flexible \
                 environments where you can innovate and work independently."
            }
            Orientation::Structure => {
                "You excel in organized environments with clear processes. You appreciate \
                 stability, predictable routines, and defined expectations."
            }
            Orientation::Balanced => {
                "You value both autonomy and structure. You seek environments that balance \
                 creative freedom with clear guidelines and support."
            }
        }
    }
}

impl Default for PreferenceProfile {
    fn default() -> Self {
        PreferenceProfile::BalancedIntegrator
    }
}

impl fmt::Display for PreferenceProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// An answer pattern that counts toward a profile.
#[derive(Clone, Copy)]
pub struct Indicator {
    pub name: &'static str,
    pub weight: u8,
    pub test: fn(&ValuesRecord) -> bool,
}

impl fmt::Debug for Indicator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Indicator")
            .field("name", &self.name)
            .field("weight", &self.weight)
            .finish()
    }
}

pub static AUTONOMY_INDICATORS: &[Indicator] = &[
    Indicator {
        name: "prefers freedom over structure",
        weight: 1,
        test: |v| v.paired_choice == PairedChoice::Freedom,
    },
    Indicator {
        name: "independence above 60",
        weight: 1,
        test: |v| v.independence_preference.value() > 60,
    },
    Indicator {
        name: "prefers flexible jobs",
        weight: 1,
        test: |v| v.job_preference == JobPreference::Flexible,
    },
    Indicator {
        name: "values Autonomy",
        weight: 1,
        test: |v| v.includes(CoreValue::Autonomy),
    },
    Indicator {
        name: "values Independence",
        weight: 1,
        test: |v| v.includes(CoreValue::Independence),
    },
    Indicator {
        name: "values Creativity",
        weight: 1,
        test: |v| v.includes(CoreValue::Creativity),
    },
];

pub static STRUCTURE_INDICATORS: &[Indicator] = &[
    Indicator {
        name: "prefers structure over freedom",
        weight: 1,
        test: |v| v.paired_choice == PairedChoice::Structure,
    },
    Indicator {
        name: "independence below 40",
        weight: 1,
        test: |v| v.independence_preference.value() < 40,
    },
    Indicator {
        name: "prefers structured jobs",
        weight: 1,
        test: |v| v.job_preference == JobPreference::Structured,
    },
    Indicator {
        name: "values Stability",
        weight: 1,
        test: |v| v.includes(CoreValue::Stability),
    },
    Indicator {
        name: "values Security",
        weight: 1,
        test: |v| v.includes(CoreValue::Security),
    },
];

/// Maps a tally over `indicators` reaching `threshold` to `profile`.
#[derive(Debug, Clone, Copy)]
pub struct ProfileRule {
    pub indicators: &'static [Indicator],
    pub threshold: u8,
    pub profile: PreferenceProfile,
}

/// Evaluated in order; the first satisfied rule decides the profile.
pub static PROFILE_RULES: &[ProfileRule] = &[
    ProfileRule {
        indicators: AUTONOMY_INDICATORS,
        threshold: 4,
        profile: PreferenceProfile::StrongAutonomySeeker,
    },
    ProfileRule {
        indicators: AUTONOMY_INDICATORS,
        threshold: 2,
        profile: PreferenceProfile::AutonomyLeaning,
    },
    ProfileRule {
        indicators: STRUCTURE_INDICATORS,
        threshold: 3,
        profile: PreferenceProfile::StructurePreferrer,
    },
];

/// Sums the weights of satisfied indicators; absent values score 0.
pub fn tally(indicators: &[Indicator], values: Option<&ValuesRecord>) -> u8 {
    let Some(values) = values else {
        return 0;
    };
    indicators
        .iter()
        .filter(|i| (i.test)(values))
        .map(|i| i.weight)
        .sum()
}

/// Names of the indicators a record satisfies.
pub fn matched_indicators(indicators: &[Indicator], values: Option<&ValuesRecord>) -> Vec<&'static str> {
    values
        .map(|v| {
            indicators
                .iter()
                .filter(|i| (i.test)(v))
                .map(|i| i.name)
                .collect()
        })
        .unwrap_or_default()
}

/// Classifies against an arbitrary ordered rule list.
pub fn classify_with(rules: &[ProfileRule], values: Option<&ValuesRecord>) -> PreferenceProfile {
    rules
        .iter()
        .find(|rule| tally(rule.indicators, values) >= rule.threshold)
        .map(|rule| rule.profile)
        .unwrap_or_default()
}

/// Classifies with the standard rule list.
pub fn classify(values: Option<&ValuesRecord>) -> PreferenceProfile {
    classify_with(PROFILE_RULES, values)
}

/// Both indicator counts, for display alongside the profile.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct IndicatorTally {
    pub autonomy: u8,
    pub structure: u8,
}

impl IndicatorTally {
    pub fn of(values: Option<&ValuesRecord>) -> Self {
        Self {
            autonomy: tally(AUTONOMY_INDICATORS, values),
            structure: tally(STRUCTURE_INDICATORS, values),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::Percentage;

    fn values(
        paired: PairedChoice,
        independence: u8,
        job: JobPreference,
        top: [CoreValue; 5],
    ) -> ValuesRecord {
        ValuesRecord {
            paired_choice: paired,
            independence_preference: Percentage::new(independence),
            job_preference: job,
            top_values: top.to_vec(),
        }
    }

    #[test]
    fn all_six_autonomy_indicators_make_a_strong_seeker() {
        let v = values(
            PairedChoice::Freedom,
            70,
            JobPreference::Flexible,
            [
                CoreValue::Autonomy,
                CoreValue::Independence,
                CoreValue::Creativity,
                CoreValue::Growth,
                CoreValue::Balance,
            ],
        );
        assert_eq!(tally(AUTONOMY_INDICATORS, Some(&v)), 6);
        assert_eq!(classify(Some(&v)), PreferenceProfile::StrongAutonomySeeker);
    }

    #[test]
    fn two_autonomy_indicators_lean_autonomy() {
        let v = values(
            PairedChoice::Structure,
            50,
            JobPreference::Structured,
            [
                CoreValue::Autonomy,
                CoreValue::Creativity,
                CoreValue::Stability,
                CoreValue::Service,
                CoreValue::Balance,
            ],
        );
        assert_eq!(tally(AUTONOMY_INDICATORS, Some(&v)), 2);
        // Would also satisfy the structure rule (3 indicators) but autonomy is checked first.
        assert_eq!(tally(STRUCTURE_INDICATORS, Some(&v)), 3);
        assert_eq!(classify(Some(&v)), PreferenceProfile::AutonomyLeaning);
    }

    #[test]
    fn autonomy_branch_wins_when_both_thresholds_met() {
        let v = values(
            PairedChoice::Structure,
            30,
            JobPreference::Flexible,
            [
                CoreValue::Autonomy,
                CoreValue::Independence,
                CoreValue::Creativity,
                CoreValue::Stability,
                CoreValue::Security,
            ],
        );
        let counts = IndicatorTally::of(Some(&v));
        assert!(counts.autonomy >= 4);
        assert!(counts.structure >= 3);
        assert_eq!(classify(Some(&v)), PreferenceProfile::StrongAutonomySeeker);
    }

    #[test]
    fn structure_preferrer_needs_three_structure_indicators() {
        let v = values(
            PairedChoice::Structure,
            20,
            JobPreference::Structured,
            [
                CoreValue::Stability,
                CoreValue::Security,
                CoreValue::Service,
                CoreValue::Collaboration,
                CoreValue::Recognition,
            ],
        );
        assert_eq!(tally(STRUCTURE_INDICATORS, Some(&v)), 5);
        assert_eq!(classify(Some(&v)), PreferenceProfile::StructurePreferrer);
    }

    #[test]
    fn weak_signals_are_balanced() {
        let v = values(
            PairedChoice::Structure,
            50,
            JobPreference::Flexible,
            [
                CoreValue::Growth,
                CoreValue::Impact,
                CoreValue::Service,
                CoreValue::Collaboration,
                CoreValue::Balance,
            ],
        );
        assert_eq!(IndicatorTally::of(Some(&v)), IndicatorTally { autonomy: 1, structure: 1 });
        assert_eq!(classify(Some(&v)), PreferenceProfile::BalancedIntegrator);
    }

    #[test]
    fn slider_boundaries_are_exclusive() {
        let at_sixty = values(
            PairedChoice::Structure,
            60,
            JobPreference::Structured,
            [
                CoreValue::Growth,
                CoreValue::Impact,
                CoreValue::Service,
                CoreValue::Collaboration,
                CoreValue::Balance,
            ],
        );
        assert!(!matched_indicators(AUTONOMY_INDICATORS, Some(&at_sixty))
            .contains(&"independence above 60"));

        let at_forty = ValuesRecord {
            independence_preference: Percentage::new(40),
            ..at_sixty
        };
        assert!(!matched_indicators(STRUCTURE_INDICATORS, Some(&at_forty))
            .contains(&"independence below 40"));
    }

    #[test]
    fn absent_values_classify_as_balanced_integrator() {
        assert_eq!(tally(AUTONOMY_INDICATORS, None), 0);
        assert!(matched_indicators(STRUCTURE_INDICATORS, None).is_empty());
        assert_eq!(classify(None), PreferenceProfile::BalancedIntegrator);
    }

    #[test]
    fn custom_rules_can_retune_thresholds() {
        let strict: &[ProfileRule] = &[ProfileRule {
            indicators: AUTONOMY_INDICATORS,
            threshold: 6,
            profile: PreferenceProfile::StrongAutonomySeeker,
        }];
        let v = values(
            PairedChoice::Freedom,
            90,
            JobPreference::Flexible,
            [
                CoreValue::Autonomy,
                CoreValue::Independence,
                CoreValue::Growth,
                CoreValue::Impact,
                CoreValue::Balance,
            ],
        );
        assert_eq!(classify_with(strict, Some(&v)), PreferenceProfile::BalancedIntegrator);
        assert_eq!(classify(Some(&v)), PreferenceProfile::StrongAutonomySeeker);
    }

    #[test]
    fn orientation_groups_profiles() {
        assert_eq!(PreferenceProfile::AutonomyLeaning.orientation(), Orientation::Autonomy);
        assert_eq!(PreferenceProfile::StructurePreferrer.orientation(), Orientation::Structure);
        assert_eq!(PreferenceProfile::BalancedIntegrator.orientation(), Orientation::Balanced);
    }
}
