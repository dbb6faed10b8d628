/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

/// Board primitives and move generation.
mod board;

/// Interactive console for driving the move generator.
mod console;

/// Misc crate-wide constants.
mod utils;

pub use board::*;
pub use console::*;
pub use utils::*;
