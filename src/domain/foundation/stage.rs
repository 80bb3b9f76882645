//! Stage enum representing the six ordered sections of the assessment.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::StateMachine;

/// The six assessment sections, in the order the wizard walks them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    Intro,
    Values,
    Purpose,
    Meaning,
    Pact,
    Results,
}

impl Stage {
    /// Returns all stages in canonical order.
    pub fn all() -> &'static [Stage] {
        &[
            Stage::Intro,
            Stage::Values,
            Stage::Purpose,
            Stage::Meaning,
            Stage::Pact,
            Stage::Results,
        ]
    }

    /// Returns the first stage of every assessment.
    pub fn first() -> Stage {
        Stage::Intro
    }

    /// Returns the 0-based index of this stage in the canonical order.
    pub fn order_index(&self) -> usize {
        match self {
            Stage::Intro => 0,
            Stage::Values => 1,
            Stage::Purpose => 2,
            Stage::Meaning => 3,
            Stage::Pact => 4,
            Stage::Results => 5,
        }
    }

    /// Returns the next stage in order, if any.
    pub fn next(&self) -> Option<Stage> {
        Self::all().get(self.order_index() + 1).copied()
    }

    /// Returns the stage "Previous Section" leads to, if the affordance is offered.
    ///
    /// Only stages strictly between the intro and the results page offer it.
    pub fn previous_section(&self) -> Option<Stage> {
        match self {
            Stage::Intro | Stage::Results => None,
            _ => Self::all().get(self.order_index() - 1).copied(),
        }
    }

    /// Returns true if the stage collects answers through a form.
    pub fn collects_answers(&self) -> bool {
        matches!(
            self,
            Stage::Values | Stage::Purpose | Stage::Meaning | Stage::Pact
        )
    }

    /// Returns the section title shown above the progress bar.
    pub fn title(&self) -> &'static str {
        match self {
            Stage::Intro => "Introduction",
            Stage::Values => "Core Values Discovery",
            Stage::Purpose => "Purpose Archetype",
            Stage::Meaning => "Meaning & Fulfillment",
            Stage::Pact => "PACT Framework",
            Stage::Results => "Your Results",
        }
    }

    /// Returns the machine key used in records and answer sheets.
    pub fn key(&self) -> &'static str {
        match self {
            Stage::Intro => "intro",
            Stage::Values => "values",
            Stage::Purpose => "purpose",
            Stage::Meaning => "meaning",
            Stage::Pact => "pact",
            Stage::Results => "results",
        }
    }
}

impl StateMachine for Stage {
    fn can_transition_to(&self, target: &Self) -> bool {
        self.next() == Some(*target) || self.previous_section() == Some(*target)
    }

    fn valid_transitions(&self) -> Vec<Self> {
        self.next().into_iter().chain(self.previous_section()).collect()
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_returns_six_stages_in_order() {
        let all = Stage::all();
        assert_eq!(all.len(), 6);
        for (idx, stage) in all.iter().enumerate() {
            assert_eq!(stage.order_index(), idx);
        }
    }

    #[test]
    fn next_walks_the_wizard_forward() {
        assert_eq!(Stage::Intro.next(), Some(Stage::Values));
        assert_eq!(Stage::Pact.next(), Some(Stage::Results));
        assert_eq!(Stage::Results.next(), None);
    }

    #[test]
    fn previous_section_is_offered_only_mid_wizard() {
        assert_eq!(Stage::Intro.previous_section(), None);
        assert_eq!(Stage::Values.previous_section(), Some(Stage::Intro));
        assert_eq!(Stage::Pact.previous_section(), Some(Stage::Meaning));
        assert_eq!(Stage::Results.previous_section(), None);
    }

    #[test]
    fn results_is_terminal() {
        assert!(Stage::Results.is_terminal());
        assert!(!Stage::Intro.is_terminal());
    }

    #[test]
    fn transition_to_succeeds_for_forward_and_back() {
        assert_eq!(Stage::Purpose.transition_to(Stage::Meaning), Ok(Stage::Meaning));
        assert_eq!(Stage::Purpose.transition_to(Stage::Values), Ok(Stage::Values));
    }

    #[test]
    fn transition_to_fails_when_skipping_stages() {
        assert!(Stage::Intro.transition_to(Stage::Results).is_err());
        assert!(Stage::Values.transition_to(Stage::Meaning).is_err());
    }

    #[test]
    fn can_transition_to_is_consistent_with_valid_transitions() {
        for stage in Stage::all() {
            for target in stage.valid_transitions() {
                assert!(
                    stage.can_transition_to(&target),
                    "can_transition_to should return true for {:?} -> {:?}",
                    stage,
                    target
                );
            }
        }
    }

    #[test]
    fn only_the_four_forms_collect_answers() {
        let collecting: Vec<_> = Stage::all()
            .iter()
            .filter(|s| s.collects_answers())
            .collect();
        assert_eq!(collecting.len(), 4);
        assert!(!Stage::Intro.collects_answers());
    }

    #[test]
    fn serializes_to_snake_case_json() {
        assert_eq!(serde_json::to_string(&Stage::Pact).unwrap(), "\"pact\"");
        let stage: Stage = serde_json::from_str("\"meaning\"").unwrap();
        assert_eq!(stage, Stage::Meaning);
    }
}
