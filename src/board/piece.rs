/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::{fmt, str::FromStr};

use anyhow::{bail, Result};

use super::{generate, Diagonal, Occupancy, PathTree, Square};
use crate::{KING_RANGE, MAN_RANGE};

/// Represents the side a checker belongs to.
///
/// White's home rows are the bottom of the displayed board (`1`-`3`), so White
/// men travel up the board; Black men travel down. White traditionally moves
/// first, and therefore [`Side`] defaults to [`Side::White`].
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Side {
    #[default]
    White,
    Black,
}

impl Side {
    /// Number of side variants.
    pub const COUNT: usize = 2;

    /// An array of both sides, starting with White.
    #[inline(always)]
    pub const fn all() -> [Self; Self::COUNT] {
        [Self::White, Self::Black]
    }

    /// Returns this [`Side`]'s opponent.
    ///
    /// # Example
    /// ```
    /// # use draughts::Side;
    /// assert_eq!(Side::White.opponent(), Side::Black);
    /// assert_eq!(Side::Black.opponent(), Side::White);
    /// ```
    #[inline(always)]
    pub const fn opponent(&self) -> Self {
        match self {
            Self::White => Self::Black,
            Self::Black => Self::White,
        }
    }

    /// Returns the [`Heading`] an uncrowned checker of this [`Side`] travels with.
    ///
    /// # Example
    /// ```
    /// # use draughts::{Heading, Side};
    /// assert_eq!(Side::White.heading(), Heading::Up);
    /// assert_eq!(Side::Black.heading(), Heading::Down);
    /// ```
    #[inline(always)]
    pub const fn heading(&self) -> Heading {
        match self {
            Self::White => Heading::Up,
            Self::Black => Heading::Down,
        }
    }

    /// Creates a [`Side`] from a `char`, as used in board layout strings.
    #[inline(always)]
    pub fn from_char(side: char) -> Result<Self> {
        match side {
            'w' | 'W' => Ok(Self::White),
            'b' | 'B' => Ok(Self::Black),
            _ => bail!("Side must be either 'w' or 'b' (case-insensitive). Found {side}"),
        }
    }

    /// Converts this [`Side`] to a `char`, as used in board layout strings.
    #[inline(always)]
    pub const fn to_char(&self) -> char {
        match self {
            Self::White => 'w',
            Self::Black => 'b',
        }
    }

    /// Fetches a human-readable name for this [`Side`].
    #[inline(always)]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::White => "white",
            Self::Black => "black",
        }
    }
}

impl FromStr for Side {
    type Err = anyhow::Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "w" | "W" | "white" | "White" | "WHITE" => Ok(Self::White),
            "b" | "B" | "black" | "Black" | "BLACK" => Ok(Self::Black),
            _ => bail!("Side must be \"white\"/\"w\" or \"black\"/\"b\". Found {s:?}"),
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl fmt::Debug for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// The direction of travel of a checker, along the row axis of the board.
///
/// [`Heading::Both`] denotes a crowned checker (king).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Heading {
    /// Toward the top of the displayed board (decreasing row).
    Up,
    /// Toward the bottom of the displayed board (increasing row).
    Down,
    /// Either way; the heading of a king.
    Both,
}

impl Heading {
    /// Returns `true` if travel along `diagonal` is permitted under this [`Heading`].
    ///
    /// # Example
    /// ```
    /// # use draughts::{Diagonal, Heading};
    /// assert!(Heading::Up.permits(Diagonal::NorthEast));
    /// assert!(!Heading::Up.permits(Diagonal::SouthEast));
    /// assert!(Heading::Both.permits(Diagonal::SouthWest));
    /// ```
    #[inline(always)]
    pub const fn permits(&self, diagonal: Diagonal) -> bool {
        match self {
            Self::Up => diagonal.row_delta() < 0,
            Self::Down => diagonal.row_delta() > 0,
            Self::Both => true,
        }
    }
}

/// A single checker: its side, direction of travel, move range, and location.
///
/// A man travels with its side's [`Heading`] and a range of one square; a king
/// travels both ways with unbounded (board-sized) range. The checker's square
/// changes only through [`Checker::move_to`], called by the layer that owns the
/// game state once a move has been chosen; crowning likewise happens through an
/// explicit [`Checker::crown`] call from that layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Checker {
    side: Side,
    heading: Heading,
    range: u8,
    square: Square,
}

impl Checker {
    /// Creates a new uncrowned checker for `side` on `square`.
    ///
    /// # Example
    /// ```
    /// # use draughts::{Checker, Heading, Side, Square};
    /// let man = Checker::man(Side::White, Square::C3);
    /// assert_eq!(man.heading(), Heading::Up);
    /// assert_eq!(man.range(), 1);
    /// ```
    #[inline(always)]
    pub const fn man(side: Side, square: Square) -> Self {
        Self {
            side,
            heading: side.heading(),
            range: MAN_RANGE,
            square,
        }
    }

    /// Creates a new crowned checker (king) for `side` on `square`.
    ///
    /// # Example
    /// ```
    /// # use draughts::{Checker, Heading, Side, Square};
    /// let king = Checker::king(Side::Black, Square::E5);
    /// assert_eq!(king.heading(), Heading::Both);
    /// assert_eq!(king.range(), 8);
    /// ```
    #[inline(always)]
    pub const fn king(side: Side, square: Square) -> Self {
        Self {
            side,
            heading: Heading::Both,
            range: KING_RANGE,
            square,
        }
    }

    /// Creates a [`Checker`] from its layout symbol: `w`/`b` for men, `W`/`B` for kings.
    #[inline(always)]
    pub fn from_symbol(symbol: char, square: Square) -> Result<Self> {
        let side = Side::from_char(symbol)?;
        if symbol.is_ascii_uppercase() {
            Ok(Self::king(side, square))
        } else {
            Ok(Self::man(side, square))
        }
    }

    /// The [`Side`] this checker belongs to. Fixed at creation.
    #[inline(always)]
    pub const fn side(&self) -> Side {
        self.side
    }

    /// The current direction of travel.
    #[inline(always)]
    pub const fn heading(&self) -> Heading {
        self.heading
    }

    /// Maximum number of squares this checker may slide in one direction per move.
    #[inline(always)]
    pub const fn range(&self) -> u8 {
        self.range
    }

    /// The checker's current location.
    #[inline(always)]
    pub const fn square(&self) -> Square {
        self.square
    }

    /// Returns `true` if this checker has been crowned.
    #[inline(always)]
    pub const fn is_crowned(&self) -> bool {
        matches!(self.heading, Heading::Both)
    }

    /// The layout symbol of this checker: `w`/`b` for men, `W`/`B` for kings.
    #[inline(always)]
    pub fn symbol(&self) -> char {
        if self.is_crowned() {
            self.side.to_char().to_ascii_uppercase()
        } else {
            self.side.to_char()
        }
    }

    /// Crowns this checker, granting it unbounded range in all four diagonals.
    ///
    /// Detecting *when* a checker reaches the far edge is the job of the layer
    /// that owns the game state; this merely records the result.
    #[inline(always)]
    pub fn crown(&mut self) {
        self.heading = Heading::Both;
        self.range = KING_RANGE;
    }

    /// Commits a chosen move, relocating this checker to `square`.
    #[inline(always)]
    pub fn move_to(&mut self, square: Square) {
        self.square = square;
    }

    /// Enumerates every move available to this checker, as a [`PathTree`].
    ///
    /// Equivalent to calling [`generate`] with this checker's state and no
    /// banned diagonal.
    #[inline(always)]
    pub fn moves(&self, occupancy: &impl Occupancy) -> Result<PathTree> {
        generate(occupancy, self.square, self.range, self.side, None)
    }

    /// Enumerates the moves available mid-capture-chain, with the diagonal the
    /// checker just jumped along reversed and banned.
    ///
    /// Callers that walk a [`PathTree`] one jump at a time use this to ask
    /// "what can this checker do next" without re-deriving the forbidden
    /// diagonal themselves.
    #[inline(always)]
    pub fn moves_after_jump(&self, occupancy: &impl Occupancy, jumped: Diagonal) -> Result<PathTree> {
        generate(
            occupancy,
            self.square,
            self.range,
            self.side,
            Some(jumped.opposite()),
        )
    }
}

impl fmt::Display for Checker {
    /// Formats this checker's location in board notation (e.g. `C3`).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.square)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crowning_unlocks_every_diagonal() {
        let mut checker = Checker::man(Side::White, Square::B8);
        assert!(!checker.is_crowned());
        assert!(!checker.heading().permits(Diagonal::SouthEast));

        checker.crown();
        assert!(checker.is_crowned());
        assert_eq!(checker.range(), KING_RANGE);
        for diagonal in Diagonal::ALL {
            assert!(checker.heading().permits(diagonal));
        }
    }

    #[test]
    fn symbols_round_trip() {
        let king = Checker::king(Side::Black, Square::D4);
        assert_eq!(king.symbol(), 'B');
        assert_eq!(Checker::from_symbol('B', Square::D4).unwrap(), king);

        let man = Checker::man(Side::White, Square::F2);
        assert_eq!(man.symbol(), 'w');
        assert_eq!(Checker::from_symbol('w', Square::F2).unwrap(), man);
    }

    #[test]
    fn move_commit_relocates() {
        let mut checker = Checker::man(Side::White, Square::C3);
        checker.move_to(Square::D4);
        assert_eq!(checker.square(), Square::D4);
        assert_eq!(checker.to_string(), "D4");
    }
}
