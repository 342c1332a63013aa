//! Weapon attack range.

use core::fmt;
use core::str::FromStr;

use crate::error::{ErrorSeverity, GameError};

/// Inclusive span of tile distances a weapon can strike at.
///
/// Parsed from `"N"` or `"N-M"`. The two bounds are always stored sorted, so a
/// range written as `"3-1"` reads back as `1-3`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String", into = "String"))]
pub struct WeaponRange {
    min: u32,
    max: u32,
}

impl WeaponRange {
    /// Range of a unit that cannot attack at all.
    pub const ZERO: Self = Self { min: 0, max: 0 };

    /// Creates a range from two bounds in any order.
    pub fn new(a: u32, b: u32) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    /// Range covering exactly one distance.
    pub const fn single(distance: u32) -> Self {
        Self {
            min: distance,
            max: distance,
        }
    }

    pub const fn min(&self) -> u32 {
        self.min
    }

    pub const fn max(&self) -> u32 {
        self.max
    }

    /// Returns true if a target `distance` tiles away can be struck.
    pub const fn contains(&self, distance: u32) -> bool {
        self.min <= distance && distance <= self.max
    }

    /// Smallest range covering both `self` and `other`.
    #[must_use]
    pub fn union(self, other: Self) -> Self {
        Self {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }
}

impl fmt::Display for WeaponRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.min == self.max {
            write!(f, "{}", self.min)
        } else {
            write!(f, "{}-{}", self.min, self.max)
        }
    }
}

/// A range string that is neither `"N"` nor `"N-M"`.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("invalid weapon range '{input}': expected \"N\" or \"N-M\"")]
pub struct RangeParseError {
    pub input: String,
}

impl GameError for RangeParseError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        "ITEM_INVALID_RANGE"
    }
}

impl FromStr for WeaponRange {
    type Err = RangeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || RangeParseError {
            input: s.to_string(),
        };
        let parse = |part: &str| part.trim().parse::<u32>().map_err(|_| invalid());

        match s.split_once('-') {
            Some((a, b)) => Ok(Self::new(parse(a)?, parse(b)?)),
            None => parse(s).map(Self::single),
        }
    }
}

impl TryFrom<String> for WeaponRange {
    type Error = RangeParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<WeaponRange> for String {
    fn from(range: WeaponRange) -> Self {
        range.to_string()
    }
}
