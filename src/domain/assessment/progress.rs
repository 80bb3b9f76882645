//! AssessmentProgress value object - Where the user is in the wizard.

use serde::Serialize;

use crate::domain::foundation::Stage;

/// Snapshot of wizard position for the progress header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentProgress {
    pub stage: Stage,
    /// 1-based position of the current stage.
    pub position: usize,
    pub total: usize,
}

impl AssessmentProgress {
    pub fn at(stage: Stage) -> Self {
        Self {
            stage,
            position: stage.order_index() + 1,
            total: Stage::all().len(),
        }
    }

    pub fn title(&self) -> &'static str {
        self.stage.title()
    }

    /// "n of 6".
    pub fn label(&self) -> String {
        format!("{} of {}", self.position, self.total)
    }

    /// Progress bar fill (0-100), counting the current stage as reached.
    pub fn percent_complete(&self) -> u8 {
        ((self.position * 100) / self.total) as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn intro_is_first_of_six() {
        let progress = AssessmentProgress::at(Stage::Intro);
        assert_eq!(progress.label(), "1 of 6");
        assert_eq!(progress.percent_complete(), 16);
        assert_eq!(progress.title(), "Introduction");
    }

    #[test]
    fn pact_is_fifth() {
        let progress = AssessmentProgress::at(Stage::Pact);
        assert_eq!(progress.label(), "5 of 6");
        assert_eq!(progress.percent_complete(), 83);
        assert_eq!(progress.title(), "PACT Framework");
    }

    #[test]
    fn results_is_full() {
        assert_eq!(AssessmentProgress::at(Stage::Results).percent_complete(), 100);
    }
}
