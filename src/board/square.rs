/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::{
    fmt,
    ops::{Index, IndexMut},
    str::FromStr,
};

use anyhow::{bail, Result};

use super::Diagonal;
use crate::BOARD_SIZE;

/// Represents a single square on an `8x8` checkers board.
///
/// Internally encoded using the following bit pattern:
/// ```text
///     00 000 000
///      |  |   |
///      |  |   +- Represents the column.
///      |  +- Represents the row.
///      +- Unused.
/// ```
///
/// Rows are counted from the *top* of the displayed board, so `square = column + row * 8`
/// places index `0` at the top-left corner. In board notation, columns are lettered
/// `A`-`H` from the left and rows are numbered `8`-`1` from the top:
/// ```text
/// 8|  0  1  2  3  4  5  6  7
/// 7|  8  9 10 11 12 13 14 15
/// 6| 16 17 18 19 20 21 22 23
/// 5| 24 25 26 27 28 29 30 31
/// 4| 32 33 34 35 36 37 38 39
/// 3| 40 41 42 43 44 45 46 47
/// 2| 48 49 50 51 52 53 54 55
/// 1| 56 57 58 59 60 61 62 63
///  +------------------------
///    A  B  C  D  E  F  G  H
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct Square(pub(crate) u8);

impl Square {
    /// Number of squares on the board.
    pub const COUNT: usize = (BOARD_SIZE * BOARD_SIZE) as usize;

    pub const A1: Self = Self::new_unchecked(0, 7);
    pub const A2: Self = Self::new_unchecked(0, 6);
    pub const A3: Self = Self::new_unchecked(0, 5);
    pub const A4: Self = Self::new_unchecked(0, 4);
    pub const A5: Self = Self::new_unchecked(0, 3);
    pub const A6: Self = Self::new_unchecked(0, 2);
    pub const A7: Self = Self::new_unchecked(0, 1);
    pub const A8: Self = Self::new_unchecked(0, 0);

    pub const B1: Self = Self::new_unchecked(1, 7);
    pub const B2: Self = Self::new_unchecked(1, 6);
    pub const B3: Self = Self::new_unchecked(1, 5);
    pub const B4: Self = Self::new_unchecked(1, 4);
    pub const B5: Self = Self::new_unchecked(1, 3);
    pub const B6: Self = Self::new_unchecked(1, 2);
    pub const B7: Self = Self::new_unchecked(1, 1);
    pub const B8: Self = Self::new_unchecked(1, 0);

    pub const C1: Self = Self::new_unchecked(2, 7);
    pub const C2: Self = Self::new_unchecked(2, 6);
    pub const C3: Self = Self::new_unchecked(2, 5);
    pub const C4: Self = Self::new_unchecked(2, 4);
    pub const C5: Self = Self::new_unchecked(2, 3);
    pub const C6: Self = Self::new_unchecked(2, 2);
    pub const C7: Self = Self::new_unchecked(2, 1);
    pub const C8: Self = Self::new_unchecked(2, 0);

    pub const D1: Self = Self::new_unchecked(3, 7);
    pub const D2: Self = Self::new_unchecked(3, 6);
    pub const D3: Self = Self::new_unchecked(3, 5);
    pub const D4: Self = Self::new_unchecked(3, 4);
    pub const D5: Self = Self::new_unchecked(3, 3);
    pub const D6: Self = Self::new_unchecked(3, 2);
    pub const D7: Self = Self::new_unchecked(3, 1);
    pub const D8: Self = Self::new_unchecked(3, 0);

    pub const E1: Self = Self::new_unchecked(4, 7);
    pub const E2: Self = Self::new_unchecked(4, 6);
    pub const E3: Self = Self::new_unchecked(4, 5);
    pub const E4: Self = Self::new_unchecked(4, 4);
    pub const E5: Self = Self::new_unchecked(4, 3);
    pub const E6: Self = Self::new_unchecked(4, 2);
    pub const E7: Self = Self::new_unchecked(4, 1);
    pub const E8: Self = Self::new_unchecked(4, 0);

    pub const F1: Self = Self::new_unchecked(5, 7);
    pub const F2: Self = Self::new_unchecked(5, 6);
    pub const F3: Self = Self::new_unchecked(5, 5);
    pub const F4: Self = Self::new_unchecked(5, 4);
    pub const F5: Self = Self::new_unchecked(5, 3);
    pub const F6: Self = Self::new_unchecked(5, 2);
    pub const F7: Self = Self::new_unchecked(5, 1);
    pub const F8: Self = Self::new_unchecked(5, 0);

    pub const G1: Self = Self::new_unchecked(6, 7);
    pub const G2: Self = Self::new_unchecked(6, 6);
    pub const G3: Self = Self::new_unchecked(6, 5);
    pub const G4: Self = Self::new_unchecked(6, 4);
    pub const G5: Self = Self::new_unchecked(6, 3);
    pub const G6: Self = Self::new_unchecked(6, 2);
    pub const G7: Self = Self::new_unchecked(6, 1);
    pub const G8: Self = Self::new_unchecked(6, 0);

    pub const H1: Self = Self::new_unchecked(7, 7);
    pub const H2: Self = Self::new_unchecked(7, 6);
    pub const H3: Self = Self::new_unchecked(7, 5);
    pub const H4: Self = Self::new_unchecked(7, 4);
    pub const H5: Self = Self::new_unchecked(7, 3);
    pub const H6: Self = Self::new_unchecked(7, 2);
    pub const H7: Self = Self::new_unchecked(7, 1);
    pub const H8: Self = Self::new_unchecked(7, 0);

    /// Creates a new [`Square`] from the provided column and row.
    ///
    /// Both components must be `[0, 7]` or else an error is returned.
    ///
    /// # Example
    /// ```
    /// # use draughts::Square;
    /// let c3 = Square::new(2, 5);
    /// assert!(c3.is_ok());
    /// assert_eq!(c3.unwrap(), Square::C3);
    ///
    /// assert!(Square::new(8, 0).is_err());
    /// ```
    #[inline(always)]
    pub fn new(col: u8, row: u8) -> Result<Self> {
        if col >= BOARD_SIZE || row >= BOARD_SIZE {
            bail!(
                "Invalid column/row for Square: Both must be between [0, {}]. Got ({col}, {row})",
                BOARD_SIZE - 1
            );
        }
        Ok(Self::new_unchecked(col, row))
    }

    /// Creates a new [`Square`] from the provided column and row, without bounds checking.
    ///
    /// # Panics
    /// If either component is greater than `7` and debug assertions are enabled.
    #[inline(always)]
    pub const fn new_unchecked(col: u8, row: u8) -> Self {
        debug_assert!(
            col < BOARD_SIZE && row < BOARD_SIZE,
            "Column and row must be between [0, 7]"
        );
        Self(row << 3 | col)
    }

    /// Creates a new [`Square`] from the provided index value.
    ///
    /// The provided `index` must be `[0, 63]` or else an error is returned.
    ///
    /// # Example
    /// ```
    /// # use draughts::Square;
    /// let a8 = Square::from_index(0);
    /// assert!(a8.is_ok());
    /// assert_eq!(a8.unwrap(), Square::A8);
    /// ```
    #[inline(always)]
    pub fn from_index(index: usize) -> Result<Self> {
        if index >= Self::COUNT {
            bail!(
                "Invalid index for Square: Must be between [0, {}]. Got {index}",
                Self::COUNT - 1
            );
        }
        Ok(Self(index as u8))
    }

    /// Creates a new [`Square`] from the provided index value, without bounds checking.
    ///
    /// # Panics
    /// If `index` is greater than `63` and debug assertions are enabled.
    #[inline(always)]
    pub const fn from_index_unchecked(index: usize) -> Self {
        debug_assert!(index < Self::COUNT, "Index must be between [0, 64)");
        Self(index as u8)
    }

    /// Creates a [`Square`] from a two-character board-notation string such as `"C3"`.
    ///
    /// The column letter may be upper or lower case.
    ///
    /// # Example
    /// ```
    /// # use draughts::Square;
    /// assert_eq!(Square::from_notation("A8").unwrap(), Square::A8);
    /// assert_eq!(Square::from_notation("h1").unwrap(), Square::H1);
    /// assert!(Square::from_notation("J9").is_err());
    /// ```
    pub fn from_notation(notation: &str) -> Result<Self> {
        let mut chars = notation.chars();
        let (Some(col_char), Some(row_char), None) = (chars.next(), chars.next(), chars.next())
        else {
            bail!("Square notation must be exactly two characters. Got {notation:?}");
        };

        let col = (col_char.to_ascii_uppercase() as u8).wrapping_sub(b'A');
        if col >= BOARD_SIZE {
            bail!("Invalid column letter in {notation:?}: Must be between [A, H]");
        }

        let row = b'8'.wrapping_sub(row_char as u8);
        if row >= BOARD_SIZE {
            bail!("Invalid row number in {notation:?}: Must be between [1, 8]");
        }

        Ok(Self::new_unchecked(col, row))
    }

    /// Returns the column of this [`Square`], with `0` being the leftmost (`A`) column.
    #[inline(always)]
    pub const fn col(&self) -> u8 {
        self.0 & 7
    }

    /// Returns the row of this [`Square`], with `0` being the *top* row of the displayed board.
    #[inline(always)]
    pub const fn row(&self) -> u8 {
        self.0 >> 3
    }

    /// Returns this [`Square`] as a `usize`, useful for indexing into lists.
    #[inline(always)]
    pub const fn index(&self) -> usize {
        self.0 as usize
    }

    /// Returns a mask with only this [`Square`]'s bit set, for use in 64-bit square sets.
    #[inline(always)]
    pub const fn bit(&self) -> u64 {
        1u64 << self.0
    }

    /// Returns the board-notation letter for this [`Square`]'s column (`A`-`H`).
    #[inline(always)]
    pub const fn col_char(&self) -> char {
        (b'A' + self.col()) as char
    }

    /// Returns the board-notation digit for this [`Square`]'s row (`8` at the top through `1` at the bottom).
    #[inline(always)]
    pub const fn row_char(&self) -> char {
        (b'8' - self.row()) as char
    }

    /// Returns `true` if this [`Square`] is one of the dark squares checkers are played on.
    ///
    /// # Example
    /// ```
    /// # use draughts::Square;
    /// assert!(Square::B8.is_dark());
    /// assert!(!Square::A8.is_dark());
    /// ```
    #[inline(always)]
    pub const fn is_dark(&self) -> bool {
        (self.col() + self.row()) % 2 == 1
    }

    /// Attempt to offset this [`Square`] by the column and row deltas.
    ///
    /// If `self + offset` would leave the board, then `None` is returned.
    ///
    /// # Example
    /// ```
    /// # use draughts::Square;
    /// assert_eq!(Square::C3.offset(1, -1), Some(Square::D4));
    /// assert_eq!(Square::C3.offset(-1, 1), Some(Square::B2));
    /// assert_eq!(Square::A8.offset(-1, -1), None);
    /// ```
    #[inline(always)]
    pub const fn offset(&self, col_delta: i8, row_delta: i8) -> Option<Self> {
        let col = self.col() as i8 + col_delta;
        let row = self.row() as i8 + row_delta;

        if col < 0 || col >= BOARD_SIZE as i8 || row < 0 || row >= BOARD_SIZE as i8 {
            return None;
        }

        Some(Self::new_unchecked(col as u8, row as u8))
    }

    /// Steps one square along the provided [`Diagonal`], if the result stays on the board.
    ///
    /// # Example
    /// ```
    /// # use draughts::{Diagonal, Square};
    /// assert_eq!(Square::C3.toward(Diagonal::NorthEast), Some(Square::D4));
    /// assert_eq!(Square::A1.toward(Diagonal::SouthWest), None);
    /// ```
    #[inline(always)]
    pub const fn toward(&self, diagonal: Diagonal) -> Option<Self> {
        self.offset(diagonal.col_delta(), diagonal.row_delta())
    }

    /// Iterates over all squares, in index order (`A8` through `H1`).
    #[inline(always)]
    pub fn iter() -> impl Iterator<Item = Self> {
        (0..Self::COUNT as u8).map(Self)
    }
}

impl FromStr for Square {
    type Err = anyhow::Error;
    /// Wrapper for [`Square::from_notation`].
    #[inline(always)]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_notation(s)
    }
}

impl<T> Index<Square> for [T; Square::COUNT] {
    type Output = T;
    /// A [`Square`] can be used to index into an array of 64 elements.
    #[inline(always)]
    fn index(&self, index: Square) -> &Self::Output {
        &self[index.index()]
    }
}

impl<T> IndexMut<Square> for [T; Square::COUNT] {
    /// A [`Square`] can be used to mutably index into an array of 64 elements.
    #[inline(always)]
    fn index_mut(&mut self, index: Square) -> &mut Self::Output {
        &mut self[index.index()]
    }
}

impl fmt::Display for Square {
    /// Formats this [`Square`] in board notation (`A8` top-left through `H1` bottom-right).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.col_char(), self.row_char())
    }
}

impl fmt::Debug for Square {
    /// Formats this [`Square`] in board notation, alongside its internal index.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self} ({})", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corners_map_to_notation() {
        assert_eq!(Square::A8.to_string(), "A8");
        assert_eq!(Square::H1.to_string(), "H1");
        assert_eq!(Square::A8, Square::new(0, 0).unwrap());
        assert_eq!(Square::H1, Square::new(7, 7).unwrap());
    }

    #[test]
    fn notation_round_trips() {
        for square in Square::iter() {
            let notation = square.to_string();
            assert_eq!(Square::from_notation(&notation).unwrap(), square);
        }
    }

    #[test]
    fn offsets_stop_at_the_edge() {
        assert_eq!(Square::H8.offset(1, 0), None);
        assert_eq!(Square::H8.offset(0, -1), None);
        assert_eq!(Square::H8.offset(-1, 1), Some(Square::G7));
    }

    #[test]
    fn rejects_bad_notation() {
        assert!(Square::from_notation("").is_err());
        assert!(Square::from_notation("C").is_err());
        assert!(Square::from_notation("C33").is_err());
        assert!(Square::from_notation("I5").is_err());
        assert!(Square::from_notation("C0").is_err());
        assert!(Square::from_notation("C9").is_err());
    }
}
