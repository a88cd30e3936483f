//! Tire types and the seasonal threshold classifier.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Average temperature (°C) below which winter tires are recommended.
pub const WINTER_BOUNDARY_C: f64 = 7.0;

/// The two tire types a subscriber can run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TireType {
    Winter,
    Summer,
}

impl TireType {
    /// The other tire type. Involutive: `t.opposite().opposite() == t`.
    pub fn opposite(self) -> Self {
        match self {
            TireType::Winter => TireType::Summer,
            TireType::Summer => TireType::Winter,
        }
    }

    /// Integer representation used for storage (winter = 0, summer = 1).
    pub fn as_i64(self) -> i64 {
        match self {
            TireType::Winter => 0,
            TireType::Summer => 1,
        }
    }
}

impl std::fmt::Display for TireType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TireType::Winter => write!(f, "winter"),
            TireType::Summer => write!(f, "summer"),
        }
    }
}

/// Error for integer values outside the tire type encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("invalid tire type value: {0}")]
pub struct InvalidTireType(pub i64);

impl TryFrom<i64> for TireType {
    type Error = InvalidTireType;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(TireType::Winter),
            1 => Ok(TireType::Summer),
            other => Err(InvalidTireType(other)),
        }
    }
}

/// Classify a forecast average temperature against the default boundary.
pub fn classify(avg_c: f64) -> TireType {
    classify_at(avg_c, WINTER_BOUNDARY_C)
}

/// Classify a forecast average temperature against a custom boundary.
///
/// Winter strictly below the boundary, summer at or above it.
pub fn classify_at(avg_c: f64, boundary_c: f64) -> TireType {
    if avg_c < boundary_c {
        TireType::Winter
    } else {
        TireType::Summer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_below_boundary() {
        assert_eq!(classify(-20.0), TireType::Winter);
        assert_eq!(classify(0.0), TireType::Winter);
        assert_eq!(classify(6.99), TireType::Winter);
    }

    #[test]
    fn test_classify_at_and_above_boundary() {
        assert_eq!(classify(7.0), TireType::Summer);
        assert_eq!(classify(7.01), TireType::Summer);
        assert_eq!(classify(35.0), TireType::Summer);
    }

    #[test]
    fn test_classify_custom_boundary() {
        assert_eq!(classify_at(9.0, 10.0), TireType::Winter);
        assert_eq!(classify_at(10.0, 10.0), TireType::Summer);
    }

    #[test]
    fn test_opposite_involutive_no_fixed_point() {
        for t in [TireType::Winter, TireType::Summer] {
            assert_ne!(t.opposite(), t);
            assert_eq!(t.opposite().opposite(), t);
        }
    }

    #[test]
    fn test_integer_round_trip() {
        for t in [TireType::Winter, TireType::Summer] {
            assert_eq!(TireType::try_from(t.as_i64()).unwrap(), t);
        }
        assert_eq!(TireType::try_from(2), Err(InvalidTireType(2)));
        assert_eq!(TireType::try_from(-1), Err(InvalidTireType(-1)));
    }

    #[test]
    fn test_display() {
        assert_eq!(TireType::Winter.to_string(), "winter");
        assert_eq!(TireType::Summer.to_string(), "summer");
    }
}
