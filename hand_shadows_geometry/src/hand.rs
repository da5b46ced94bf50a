// Copyright 2025 the Hand Shadows Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

/// Which hand a silhouette depicts.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum HandType {
    /// The left hand.
    Left,
    /// The right hand.
    Right,
}

impl HandType {
    /// Both hands, left first.
    pub const BOTH: [Self; 2] = [Self::Left, Self::Right];

    /// Returns `true` for [`HandType::Left`].
    #[must_use]
    pub const fn is_left(self) -> bool {
        matches!(self, Self::Left)
    }

    /// Returns `true` for [`HandType::Right`].
    #[must_use]
    pub const fn is_right(self) -> bool {
        matches!(self, Self::Right)
    }

    /// Returns the other hand.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// Lowercase name, suitable for logs and asset file names.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
        }
    }
}

impl fmt::Display for HandType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a raw handedness value is neither left (`0`) nor right (`1`).
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct InvalidHandedness(pub u8);

impl fmt::Display for InvalidHandedness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid handedness value {} (expected 0 or 1)", self.0)
    }
}

impl core::error::Error for InvalidHandedness {}

impl TryFrom<u8> for HandType {
    type Error = InvalidHandedness;

    /// Decodes the integer encoding used by touch integrations: `0` is left, `1` is right.
    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Left),
            1 => Ok(Self::Right),
            other => Err(InvalidHandedness(other)),
        }
    }
}

impl From<HandType> for u8 {
    fn from(hand: HandType) -> Self {
        match hand {
            HandType::Left => 0,
            HandType::Right => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_values_round_trip() {
        for hand in HandType::BOTH {
            assert_eq!(HandType::try_from(u8::from(hand)), Ok(hand));
        }
    }

    #[test]
    fn unknown_raw_value_is_rejected() {
        assert_eq!(HandType::try_from(2), Err(InvalidHandedness(2)));
        assert_eq!(HandType::try_from(255), Err(InvalidHandedness(255)));
    }

    #[test]
    fn opposite_swaps_hands() {
        assert_eq!(HandType::Left.opposite(), HandType::Right);
        assert_eq!(HandType::Right.opposite(), HandType::Left);
        assert!(HandType::Left.is_left());
        assert!(!HandType::Left.is_right());
        assert_eq!(HandType::Right.as_str(), "right");
    }
}
