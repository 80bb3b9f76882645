//! CoreValue enum - the twelve work values offered in the values stage.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

/// How many values a respondent must pick.
pub const TOP_VALUES_LIMIT: usize = 5;

/// The twelve selectable work values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CoreValue {
    Autonomy,
    Stability,
    Impact,
    Creativity,
    Growth,
    Service,
    Security,
    Recognition,
    Independence,
    Collaboration,
    Innovation,
    Balance,
}

impl CoreValue {
    /// Returns all values in catalog order.
    pub fn all() -> &'static [CoreValue] {
        &[
            CoreValue::Autonomy,
            CoreValue::Stability,
            CoreValue::Impact,
            CoreValue::Creativity,
            CoreValue::Growth,
            CoreValue::Service,
            CoreValue::Security,
            CoreValue::Recognition,
            CoreValue::Independence,
            CoreValue::Collaboration,
            CoreValue::Innovation,
            CoreValue::Balance,
        ]
    }

    /// Returns the display name.
    pub fn name(&self) -> &'static str {
        match self {
            CoreValue::Autonomy => "Autonomy",
            CoreValue::Stability => "Stability",
            CoreValue::Impact => "Impact",
            CoreValue::Creativity => "Creativity",
            CoreValue::Growth => "Growth",
            CoreValue::Service => "Service",
            CoreValue::Security => "Security",
            CoreValue::Recognition => "Recognition",
            CoreValue::Independence => "Independence",
            CoreValue::Collaboration => "Collaboration",
            CoreValue::Innovation => "Innovation",
            CoreValue::Balance => "Balance",
        }
    }
}

impl fmt::Display for CoreValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for CoreValue {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .find(|v| v.name().eq_ignore_ascii_case(s.trim()))
            .copied()
            .ok_or_else(|| {
                ValidationError::invalid_format("core_value", format!("unknown value '{}'", s))
            })
    }
}
