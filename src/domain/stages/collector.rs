//! StageCollector trait - the contract every questionnaire form honours.

use tracing::debug;

use crate::domain::foundation::Stage;

/// A self-contained form over one stage's fixed question set.
///
/// The completeness predicate is evaluated on every call, never cached. A form
/// hands out its record at most once per activation; while incomplete,
/// `submit` is inert.
pub trait StageCollector {
    /// The record produced when the form is submitted.
    type Record;

    /// The stage this form collects answers for.
    const STAGE: Stage;

    /// Returns true when every required answer is present and valid.
    fn is_complete(&self) -> bool;

    /// Builds the record from current answers, or `None` if incomplete.
    fn snapshot(&self) -> Option<Self::Record>;

    /// Returns true once the record has been handed out for this activation.
    fn is_submitted(&self) -> bool;

    /// Marks the record as handed out (or not, when reopening).
    fn set_submitted(&mut self, submitted: bool);

    /// Produces the stage record exactly once, only while the form is complete.
    fn submit(&mut self) -> Option<Self::Record> {
        if self.is_submitted() {
            debug!(stage = %Self::STAGE, "Submit ignored: already submitted");
            return None;
        }
        if !self.is_complete() {
            debug!(stage = %Self::STAGE, "Submit ignored: form incomplete");
            return None;
        }
        let record = self.snapshot()?;
        self.set_submitted(true);
        Some(record)
    }

    /// Starts a new activation so the form may submit again (after "Previous Section").
    fn reopen(&mut self) {
        self.set_submitted(false);
    }
}
