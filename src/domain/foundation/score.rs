//! Score value objects for key results and review ratings.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// Key result score on the 1-10 scale.
///
/// The invariant that a key result score is always within [1, 10] is
/// enforced at construction; the raw integer never leaks out unvalidated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct KrScore(u8);

impl KrScore {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 10;

    /// Creates a score, returning an error if outside [1, 10].
    pub fn new(value: u8) -> Result<Self, ValidationError> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(ValidationError::out_of_range(
                "score",
                Self::MIN as f64,
                Self::MAX as f64,
                value as f64,
            ))
        }
    }

    /// Returns the numeric value.
    pub fn value(&self) -> u8 {
        self.0
    }
}

impl Default for KrScore {
    fn default() -> Self {
        Self(Self::MIN)
    }
}

impl TryFrom<u8> for KrScore {
    type Error = ValidationError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<KrScore> for u8 {
    fn from(score: KrScore) -> Self {
        score.0
    }
}

impl fmt::Display for KrScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/10", self.0)
    }
}

/// Review or feedback rating on the 1-5 scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct RatingValue(u8);

impl RatingValue {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    /// Creates a rating, returning an error if outside [1, 5].
    pub fn new(value: u8) -> Result<Self, ValidationError> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(ValidationError::out_of_range(
                "rating",
                Self::MIN as f64,
                Self::MAX as f64,
                value as f64,
            ))
        }
    }

    /// Returns the numeric value.
    pub fn value(&self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for RatingValue {
    type Error = ValidationError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<RatingValue> for u8 {
    fn from(rating: RatingValue) -> Self {
        rating.0
    }
}

impl fmt::Display for RatingValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/5", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn kr_score_accepts_bounds() {
        assert_eq!(KrScore::new(1).unwrap().value(), 1);
        assert_eq!(KrScore::new(10).unwrap().value(), 10);
    }

    #[test]
    fn kr_score_rejects_zero_and_eleven() {
        assert!(KrScore::new(0).is_err());
        assert!(KrScore::new(11).is_err());
    }

    #[test]
    fn kr_score_serializes_as_bare_number() {
        let score = KrScore::new(7).unwrap();
        assert_eq!(serde_json::to_string(&score).unwrap(), "7");
    }

    #[test]
    fn kr_score_deserialization_validates() {
        let ok: Result<KrScore, _> = serde_json::from_str("10");
        assert!(ok.is_ok());
        let bad: Result<KrScore, _> = serde_json::from_str("0");
        assert!(bad.is_err());
    }

    #[test]
    fn rating_accepts_one_through_five() {
        for v in 1..=5u8 {
            assert_eq!(RatingValue::new(v).unwrap().value(), v);
        }
    }

    #[test]
    fn rating_rejects_out_of_range() {
        assert!(RatingValue::new(0).is_err());
        assert!(RatingValue::new(6).is_err());
    }

    #[test]
    fn score_displays_with_scale() {
        assert_eq!(KrScore::new(8).unwrap().to_string(), "8/10");
        assert_eq!(RatingValue::new(4).unwrap().to_string(), "4/5");
    }

    proptest! {
        #[test]
        fn constructed_kr_score_is_always_in_range(v in 0u8..=255) {
            if let Ok(score) = KrScore::new(v) {
                prop_assert!((1..=10).contains(&score.value()));
            } else {
                prop_assert!(!(1..=10).contains(&v));
            }
        }

        #[test]
        fn constructed_rating_is_always_in_range(v in 0u8..=255) {
            if let Ok(rating) = RatingValue::new(v) {
                prop_assert!((1..=5).contains(&rating.value()));
            } else {
                prop_assert!(!(1..=5).contains(&v));
            }
        }
    }
}
