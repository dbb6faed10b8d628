/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

/// The four diagonal travel directions.
mod direction;

/// Move generation: path trees and the generator itself.
mod movegen;

/// Sides, headings, and the checkers they describe.
mod piece;

/// Board occupancy: the injected query trait and the mailbox board.
mod position;

/// Squares and board notation.
mod square;

pub use direction::*;
pub use movegen::*;
pub use piece::*;
pub use position::*;
pub use square::*;
