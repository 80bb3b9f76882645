//! Likert rating value objects (1..=MAX scale).

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// A rating on a 1-to-`MAX` agreement scale.
///
/// The scale is part of the type so a 5-point task-energy rating can never be
/// mixed up with a 7-point archetype or PACT rating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Likert<const MAX: u8>(u8);

/// 1 (not at all) to 7 (completely true).
pub type SevenPointRating = Likert<7>;

/// 1 (drains energy) to 5 (energizes).
pub type FivePointRating = Likert<5>;

impl<const MAX: u8> Likert<MAX> {
    /// Lowest rating on every scale.
    pub const MIN: u8 = 1;

    /// Creates a rating, returning error if outside `1..=MAX`.
    pub fn try_new(value: u8) -> Result<Self, ValidationError> {
        if !(Self::MIN..=MAX).contains(&value) {
            return Err(ValidationError::out_of_range(
                "rating",
                Self::MIN as i32,
                MAX as i32,
                value as i32,
            ));
        }
        Ok(Self(value))
    }

    /// Returns the numeric value.
    pub fn value(&self) -> u8 {
        self.0
    }

    /// Returns the top of the scale.
    pub fn scale_max() -> u8 {
        MAX
    }

    /// Returns every valid rating, lowest first.
    pub fn all() -> impl Iterator<Item = Self> {
        (Self::MIN..=MAX).map(Self)
    }
}

impl<const MAX: u8> TryFrom<u8> for Likert<MAX> {
    type Error = ValidationError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::try_new(value)
    }
}

impl<const MAX: u8> From<Likert<MAX>> for u8 {
    fn from(rating: Likert<MAX>) -> Self {
        rating.0
    }
}

impl<const MAX: u8> fmt::Display for Likert<MAX> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.0, MAX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seven_point_accepts_one_through_seven() {
        for v in 1..=7 {
            assert_eq!(SevenPointRating::try_new(v).unwrap().value(), v);
        }
    }

    #[test]
    fn seven_point_rejects_zero_and_eight() {
        assert!(SevenPointRating::try_new(0).is_err());
        assert!(SevenPointRating::try_new(8).is_err());
    }

    #[test]
    fn five_point_rejects_six() {
        match FivePointRating::try_new(6) {
            Err(ValidationError::OutOfRange { min, max, actual, .. }) => {
                assert_eq!((min, max, actual), (1, 5, 6));
            }
            other => panic!("Expected OutOfRange error, got {:?}", other),
        }
    }

    #[test]
    fn all_enumerates_the_scale() {
        let values: Vec<u8> = FivePointRating::all().map(|r| r.value()).collect();
        assert_eq!(values, vec![1, 2, 3, 4, 5]);
        assert_eq!(SevenPointRating::scale_max(), 7);
    }

    #[test]
    fn displays_with_scale() {
        assert_eq!(SevenPointRating::try_new(6).unwrap().to_string(), "6/7");
    }

    #[test]
    fn deserializes_with_validation() {
        let rating: SevenPointRating = serde_json::from_str("4").unwrap();
        assert_eq!(rating.value(), 4);
        assert!(serde_json::from_str::<SevenPointRating>("9").is_err());
    }
}
