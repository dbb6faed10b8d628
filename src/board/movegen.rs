/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::fmt;

use anyhow::{bail, Result};

use super::{Diagonal, Heading, Occupancy, Side, Square};
use crate::MAN_RANGE;

/// One reachable destination within a [`PathTree`].
///
/// A node records where the checker lands, the square of the enemy checker it
/// jumped to get there (if any), and the further destinations reachable by
/// continuing the capture chain from the landing square. A node that was not
/// reached by a jump never has continuations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathNode {
    square: Square,
    captured: Option<Square>,
    next: Vec<PathNode>,
}

impl PathNode {
    /// A terminal, non-capturing step onto `square`.
    #[inline(always)]
    pub(crate) const fn step(square: Square) -> Self {
        Self {
            square,
            captured: None,
            next: Vec::new(),
        }
    }

    /// A jump landing on `square`, capturing the checker on `captured`.
    #[inline(always)]
    pub(crate) const fn jump(square: Square, captured: Square, next: Vec<PathNode>) -> Self {
        Self {
            square,
            captured: Some(captured),
            next,
        }
    }

    /// The destination square of this move.
    #[inline(always)]
    pub const fn square(&self) -> Square {
        self.square
    }

    /// The square of the enemy checker this move jumps, if it is a capture.
    #[inline(always)]
    pub const fn captured(&self) -> Option<Square> {
        self.captured
    }

    /// Returns `true` if reaching this node captures an enemy checker.
    #[inline(always)]
    pub const fn is_jump(&self) -> bool {
        self.captured.is_some()
    }

    /// The capturing continuations available from this node's destination.
    #[inline(always)]
    pub fn next(&self) -> &[PathNode] {
        &self.next
    }

    fn fmt_indented(&self, f: &mut fmt::Formatter<'_>, depth: usize) -> fmt::Result {
        write!(f, "{:indent$}{}", "", self.square, indent = depth * 2)?;
        if let Some(captured) = self.captured {
            write!(f, " (x{captured})")?;
        }
        writeln!(f)?;

        for continuation in &self.next {
            continuation.fmt_indented(f, depth + 1)?;
        }
        Ok(())
    }
}

/// Every move available to one checker, as a tree rooted just before its first step.
///
/// The root is a sentinel with no square of its own; its children are the legal
/// first moves. Each capturing child's subtree enumerates the legal
/// continuations of the chain. An empty tree means the checker has no legal
/// move, which is a valid result rather than an error.
///
/// A tree is built fresh by each [`generate`] call, never mutated afterwards,
/// and owned exclusively by the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathTree {
    moves: Vec<PathNode>,
}

impl PathTree {
    #[inline(always)]
    pub(crate) fn new(moves: Vec<PathNode>) -> Self {
        Self { moves }
    }

    /// The legal first moves, in the fixed NE, NW, SE, SW scan order.
    #[inline(always)]
    pub fn moves(&self) -> &[PathNode] {
        &self.moves
    }

    /// Returns `true` if the checker has no legal move.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// Number of legal first moves.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    /// The destination squares of the legal first moves.
    #[inline(always)]
    pub fn destinations(&self) -> impl Iterator<Item = Square> + '_ {
        self.moves.iter().map(PathNode::square)
    }
}

impl fmt::Display for PathTree {
    /// Formats the tree with one destination per line, continuations indented
    /// beneath the jump they extend, captured squares in parentheses.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.moves.is_empty() {
            return writeln!(f, "(no moves)");
        }

        for node in &self.moves {
            node.fmt_indented(f, 0)?;
        }
        Ok(())
    }
}

/// Enumerates every legal move for a checker of `side` on `origin` with the
/// given `range`, consulting `occupancy` for the contents of each square.
///
/// A `range` of one scans the two diagonals toward the opponent's edge; any
/// greater range belongs to a crowned checker and scans all four. When
/// `banned` is present that diagonal is skipped entirely, which is how a
/// capture chain is kept from reversing onto the square it just came from.
///
/// Each diagonal is walked at most `range` steps. Every empty square reached
/// before the first blocker becomes a terminal, non-capturing move. The first
/// occupied square ends the walk: a same-side checker blocks outright, while
/// an enemy checker with an empty square immediately beyond it becomes a jump.
/// The jump's continuations are generated from its landing square with the
/// reversed diagonal banned, and keep only further jumps: once a chain has
/// started, plain steps are no longer moves of their own.
///
/// Failures of the `occupancy` query propagate out of this call; a missing
/// square report is never treated as empty or as an enemy.
///
/// # Errors
/// If `range` is zero, or if `occupancy` fails to report a queried square.
///
/// # Example
/// ```
/// # use draughts::{generate, Board, Side, Square};
/// let board = Board::new();
/// let tree = generate(&board, Square::C3, 1, Side::White, None).unwrap();
/// let destinations: Vec<_> = tree.destinations().collect();
/// assert_eq!(destinations, [Square::D4, Square::B4]);
/// ```
pub fn generate(
    occupancy: &impl Occupancy,
    origin: Square,
    range: u8,
    side: Side,
    banned: Option<Diagonal>,
) -> Result<PathTree> {
    if range == 0 {
        bail!("Invalid range for move generation: A checker's range must be at least 1");
    }

    let moves = walk(occupancy, origin, range, side, banned, false, 0)?;
    Ok(PathTree::new(moves))
}

/// Walks every permitted diagonal from `origin`, producing the move nodes for
/// one level of the tree.
///
/// `jumps_only` is set for continuation levels, where plain steps are ignored
/// (though a king still slides across them while hunting its next victim).
/// `jumped` is a bitmask of the squares already captured along the current
/// chain; a checker may not be jumped twice, and it keeps blocking its square
/// until the chain completes, so the mask both terminates cyclic chains and
/// stops re-captures.
fn walk(
    occupancy: &impl Occupancy,
    origin: Square,
    range: u8,
    side: Side,
    banned: Option<Diagonal>,
    jumps_only: bool,
    jumped: u64,
) -> Result<Vec<PathNode>> {
    let heading = if range > MAN_RANGE {
        Heading::Both
    } else {
        side.heading()
    };

    let mut moves = Vec::new();

    for diagonal in Diagonal::ALL {
        if Some(diagonal) == banned || !heading.permits(diagonal) {
            continue;
        }

        let mut current = origin;
        let mut remaining = range;
        while remaining > 0 {
            let Some(next) = current.toward(diagonal) else {
                break;
            };

            match occupancy.side_at(next)? {
                // Empty: a plain step, and a king keeps sliding
                None => {
                    if !jumps_only {
                        moves.push(PathNode::step(next));
                    }
                    current = next;
                    remaining -= 1;
                }

                // Occupied by a teammate, or by a checker this chain already jumped
                Some(owner) if owner == side || jumped & next.bit() != 0 => break,

                // Enemy: a jump, if the landing square behind it is free
                Some(_) => {
                    if let Some(landing) = next.toward(diagonal) {
                        if occupancy.side_at(landing)?.is_none() {
                            let continuations = walk(
                                occupancy,
                                landing,
                                range,
                                side,
                                Some(diagonal.opposite()),
                                true,
                                jumped | next.bit(),
                            )?;
                            moves.push(PathNode::jump(landing, next, continuations));
                        }
                    }
                    break;
                }
            }
        }
    }

    Ok(moves)
}
