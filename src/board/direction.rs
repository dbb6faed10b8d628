/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::fmt;

/// Represents one of the four diagonal directions a checker can travel along.
///
/// Rows are counted from the top of the displayed board, so the two "north"
/// diagonals have a negative row delta.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Diagonal {
    NorthEast,
    NorthWest,
    SouthEast,
    SouthWest,
}

impl Diagonal {
    /// Number of diagonal directions.
    pub const COUNT: usize = 4;

    /// All four diagonals, in the fixed order move generation scans them.
    pub const ALL: [Self; Self::COUNT] = [
        Self::NorthEast,
        Self::NorthWest,
        Self::SouthEast,
        Self::SouthWest,
    ];

    /// Returns the column delta of a single step along this [`Diagonal`].
    #[inline(always)]
    pub const fn col_delta(&self) -> i8 {
        match self {
            Self::NorthEast | Self::SouthEast => 1,
            Self::NorthWest | Self::SouthWest => -1,
        }
    }

    /// Returns the row delta of a single step along this [`Diagonal`].
    #[inline(always)]
    pub const fn row_delta(&self) -> i8 {
        match self {
            Self::NorthEast | Self::NorthWest => -1,
            Self::SouthEast | Self::SouthWest => 1,
        }
    }

    /// Returns the [`Diagonal`] pointing the opposite way.
    ///
    /// A capture chain must never immediately reverse into this direction.
    ///
    /// # Example
    /// ```
    /// # use draughts::Diagonal;
    /// assert_eq!(Diagonal::NorthEast.opposite(), Diagonal::SouthWest);
    /// assert_eq!(Diagonal::SouthEast.opposite(), Diagonal::NorthWest);
    /// ```
    #[inline(always)]
    pub const fn opposite(&self) -> Self {
        match self {
            Self::NorthEast => Self::SouthWest,
            Self::NorthWest => Self::SouthEast,
            Self::SouthEast => Self::NorthWest,
            Self::SouthWest => Self::NorthEast,
        }
    }

    /// Abbreviated compass name of this [`Diagonal`].
    #[inline(always)]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::NorthEast => "NE",
            Self::NorthWest => "NW",
            Self::SouthEast => "SE",
            Self::SouthWest => "SW",
        }
    }
}

impl fmt::Display for Diagonal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opposites_pair_up() {
        for diagonal in Diagonal::ALL {
            assert_ne!(diagonal, diagonal.opposite());
            assert_eq!(diagonal, diagonal.opposite().opposite());
            assert_eq!(diagonal.col_delta(), -diagonal.opposite().col_delta());
            assert_eq!(diagonal.row_delta(), -diagonal.opposite().row_delta());
        }
    }
}
