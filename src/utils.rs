/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

/// Width and height of the board, in squares.
pub const BOARD_SIZE: u8 = 8;

/// Move range of an uncrowned checker.
pub const MAN_RANGE: u8 = 1;

/// Move range of a king: effectively unbounded, since no slide can exceed the board.
pub const KING_RANGE: u8 = BOARD_SIZE;

/// Layout string for the starting position of checkers.
pub const LAYOUT_STARTPOS: &str = "1b1b1b1b/b1b1b1b1/1b1b1b1b/8/8/w1w1w1w1/1w1w1w1w/w1w1w1w1";
