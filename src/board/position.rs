/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::{fmt, str::FromStr};

use anyhow::{bail, Context, Result};

use super::{Checker, Side, Square};
use crate::{BOARD_SIZE, LAYOUT_STARTPOS};

/// The square-occupancy query move generation depends on.
///
/// This is the one thing the core requires from whatever layer owns the game
/// state. The snapshot behind it must stay consistent for the duration of a
/// single [`generate`](super::generate) call. Implementations report `Ok(None)`
/// for an empty square and `Ok(Some(side))` for an occupied one; an `Err`
/// means the square could not be reported at all, and fails the whole
/// generation call rather than being guessed around.
pub trait Occupancy {
    /// Reports which side, if any, occupies `square`.
    fn side_at(&self, square: Square) -> Result<Option<Side>>;
}

/// A mailbox of checkers, one optional [`Checker`] per square.
///
/// This is the standard [`Occupancy`] implementation. It holds no game rules
/// of its own: placement, removal, and the decision of *which* move to commit
/// all belong to the layer that owns it.
#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    cells: [Option<Checker>; Square::COUNT],
}

impl Board {
    /// Creates an empty [`Board`].
    #[inline(always)]
    pub const fn new() -> Self {
        Self {
            cells: [None; Square::COUNT],
        }
    }

    /// Parses a [`Board`] from a layout string.
    ///
    /// A layout is eight `/`-separated rows, written from the top of the board
    /// down. Within a row, digits skip that many empty squares, `w`/`b` place
    /// men, and `W`/`B` place kings.
    ///
    /// # Example
    /// ```
    /// # use draughts::{Board, Side, Square};
    /// let board = Board::from_layout("8/8/8/3b4/8/8/8/8").unwrap();
    /// assert_eq!(board.checker_at(Square::D5).unwrap().side(), Side::Black);
    /// ```
    pub fn from_layout(layout: &str) -> Result<Self> {
        let mut board = Self::new();
        let mut rows = layout.trim().split('/');

        for row in 0..BOARD_SIZE {
            let row_str = rows
                .next()
                .with_context(|| format!("Layout {layout:?} is missing row {}", row + 1))?;

            let mut col = 0u8;
            for symbol in row_str.chars() {
                if let Some(run) = symbol.to_digit(10) {
                    col += run as u8;
                    continue;
                }

                let square = Square::new(col, row)
                    .with_context(|| format!("Row {row_str:?} of layout overflows the board"))?;
                let checker = Checker::from_symbol(symbol, square)
                    .with_context(|| format!("Invalid symbol in layout row {row_str:?}"))?;
                board.place(checker)?;
                col += 1;
            }

            if col != BOARD_SIZE {
                bail!(
                    "Row {row_str:?} of layout covers {col} squares. Must be exactly {BOARD_SIZE}"
                );
            }
        }

        if rows.next().is_some() {
            bail!("Layout {layout:?} has more than {BOARD_SIZE} rows");
        }

        Ok(board)
    }

    /// Writes this [`Board`] back out as a layout string.
    ///
    /// Inverse of [`Board::from_layout`].
    pub fn layout(&self) -> String {
        let mut layout = String::with_capacity(Square::COUNT + BOARD_SIZE as usize);

        for row in 0..BOARD_SIZE {
            if row > 0 {
                layout.push('/');
            }

            let mut empty_run = 0u8;
            for col in 0..BOARD_SIZE {
                match self.checker_at(Square::new_unchecked(col, row)) {
                    None => empty_run += 1,
                    Some(checker) => {
                        if empty_run > 0 {
                            layout.push((b'0' + empty_run) as char);
                            empty_run = 0;
                        }
                        layout.push(checker.symbol());
                    }
                }
            }
            if empty_run > 0 {
                layout.push((b'0' + empty_run) as char);
            }
        }

        layout
    }

    /// Puts `checker` on the board, on the square it believes it occupies.
    ///
    /// # Errors
    /// If that square is already occupied.
    pub fn place(&mut self, checker: Checker) -> Result<()> {
        let square = checker.square();
        if self.cells[square].is_some() {
            bail!("Square {square} is already occupied");
        }
        self.cells[square] = Some(checker);
        Ok(())
    }

    /// Takes the checker on `square` off the board, returning it if there was one.
    #[inline(always)]
    pub fn remove(&mut self, square: Square) -> Option<Checker> {
        self.cells[square].take()
    }

    /// Fetches the checker on `square`, if any.
    #[inline(always)]
    pub fn checker_at(&self, square: Square) -> Option<&Checker> {
        self.cells[square].as_ref()
    }

    /// Iterates over every checker on the board, in square-index order.
    #[inline(always)]
    pub fn checkers(&self) -> impl Iterator<Item = &Checker> {
        self.cells.iter().flatten()
    }

    /// Removes every checker from the board.
    #[inline(always)]
    pub fn clear(&mut self) {
        self.cells = [None; Square::COUNT];
    }
}

impl Occupancy for Board {
    #[inline(always)]
    fn side_at(&self, square: Square) -> Result<Option<Side>> {
        Ok(self.cells[square].map(|checker| checker.side()))
    }
}

impl Default for Board {
    /// The standard starting position: twelve men per side on the dark squares.
    fn default() -> Self {
        // The bundled start layout always parses.
        Self::from_layout(LAYOUT_STARTPOS).unwrap()
    }
}

impl FromStr for Board {
    type Err = anyhow::Error;
    /// Wrapper for [`Board::from_layout`].
    #[inline(always)]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_layout(s)
    }
}

impl fmt::Display for Board {
    /// Formats this [`Board`] as a bordered grid, checkers shown by their
    /// layout symbols and empty squares as dots.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..BOARD_SIZE {
            write!(f, "{}|", (b'8' - row) as char)?;
            for col in 0..BOARD_SIZE {
                match self.checker_at(Square::new_unchecked(col, row)) {
                    Some(checker) => write!(f, " {}", checker.symbol())?,
                    None => write!(f, " .")?,
                }
            }
            writeln!(f)?;
        }
        writeln!(f, " +{}", "-".repeat(2 * BOARD_SIZE as usize))?;
        write!(f, "   A B C D E F G H")
    }
}

impl fmt::Debug for Board {
    /// Formats this [`Board`] as its layout string.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.layout())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_layout_round_trips() {
        let board = Board::default();
        assert_eq!(board.layout(), LAYOUT_STARTPOS);
        assert_eq!(board.checkers().count(), 24);
    }

    #[test]
    fn start_position_sits_on_dark_squares() {
        for checker in Board::default().checkers() {
            assert!(checker.square().is_dark(), "{checker} is on a light square");
        }
    }

    #[test]
    fn placement_refuses_occupied_squares() {
        let mut board = Board::new();
        board.place(Checker::man(Side::White, Square::C3)).unwrap();
        assert!(board.place(Checker::king(Side::Black, Square::C3)).is_err());
    }

    #[test]
    fn remove_empties_the_square() {
        let mut board = Board::new();
        board.place(Checker::man(Side::White, Square::C3)).unwrap();

        let taken = board.remove(Square::C3).unwrap();
        assert_eq!(taken.square(), Square::C3);
        assert!(board.checker_at(Square::C3).is_none());
        assert!(board.remove(Square::C3).is_none());
    }

    #[test]
    fn rejects_malformed_layouts() {
        assert!(Board::from_layout("8/8/8/8").is_err());
        assert!(Board::from_layout("9/8/8/8/8/8/8/8").is_err());
        assert!(Board::from_layout("7/8/8/8/8/8/8/8").is_err());
        assert!(Board::from_layout("x7/8/8/8/8/8/8/8").is_err());
        assert!(Board::from_layout("8/8/8/8/8/8/8/8/8").is_err());
    }

    #[test]
    fn kings_survive_the_round_trip() {
        let layout = "8/8/4W3/8/2B5/8/8/8";
        let board = Board::from_layout(layout).unwrap();
        assert!(board.checker_at(Square::E6).unwrap().is_crowned());
        assert!(board.checker_at(Square::C4).unwrap().is_crowned());
        assert_eq!(board.layout(), layout);
    }
}
