//! Purpose archetype stage: rate each archetype statement and pick a symbol.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::catalog::Archetype;
use crate::domain::foundation::{SevenPointRating, Stage, ValidationError};

use super::StageCollector;

/// Returns the archetype with the highest rating.
///
/// Ties go to the archetype that comes first in catalog order.
pub fn primary_archetype(responses: &BTreeMap<Archetype, SevenPointRating>) -> Option<Archetype> {
    Archetype::all()
        .iter()
        .filter_map(|a| responses.get(a).map(|r| (*a, *r)))
        .fold(None, |best: Option<(Archetype, SevenPointRating)>, (archetype, rating)| {
            match best {
                Some((_, best_rating)) if best_rating >= rating => best,
                _ => Some((archetype, rating)),
            }
        })
        .map(|(archetype, _)| archetype)
}

/// Answers collected by the purpose stage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PurposeRecord {
    pub responses: BTreeMap<Archetype, SevenPointRating>,
    pub primary_archetype: Archetype,
    pub selected_symbol: Archetype,
}

impl PurposeRecord {
    /// Checks every archetype is rated and the primary archetype is consistent.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Some(missing) = Archetype::all().iter().find(|a| !self.responses.contains_key(*a)) {
            return Err(ValidationError::empty_field(format!("responses.{}", missing.id())));
        }
        if primary_archetype(&self.responses) != Some(self.primary_archetype) {
            return Err(ValidationError::invalid_format(
                "primary_archetype",
                format!("'{}' is not the highest rated archetype", self.primary_archetype.id()),
            ));
        }
        Ok(())
    }
}

/// Form state for the purpose stage.
#[derive(Debug, Clone, Default)]
pub struct PurposeForm {
    responses: BTreeMap<Archetype, SevenPointRating>,
    selected_symbol: Option<Archetype>,
    submitted: bool,
}

impl PurposeForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rates how much an archetype statement resonates (1-7).
    pub fn rate(&mut self, archetype: Archetype, rating: u8) -> Result<(), ValidationError> {
        let rating = SevenPointRating::try_new(rating)?;
        self.responses.insert(archetype, rating);
        Ok(())
    }

    pub fn select_symbol(&mut self, archetype: Archetype) {
        self.selected_symbol = Some(archetype);
    }

    /// Number of archetypes rated so far.
    pub fn rated_count(&self) -> usize {
        self.responses.len()
    }
}

impl StageCollector for PurposeForm {
    type Record = PurposeRecord;
    const STAGE: Stage = Stage::Purpose;

    fn is_complete(&self) -> bool {
        self.responses.len() == Archetype::all().len() && self.selected_symbol.is_some()
    }

    fn snapshot(&self) -> Option<PurposeRecord> {
        if !self.is_complete() {
            return None;
        }
        Some(PurposeRecord {
            primary_archetype: primary_archetype(&self.responses)?,
            responses: self.responses.clone(),
            selected_symbol: self.selected_symbol?,
        })
    }

    fn is_submitted(&self) -> bool {
        self.submitted
    }

    fn set_submitted(&mut self, submitted: bool) {
        self.submitted = submitted;
    }
}
