/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use anyhow::{bail, Result};
use draughts::{generate, Board, Checker, Diagonal, Occupancy, PathNode, PathTree, Side, Square};

fn board(layout: &str) -> Board {
    Board::from_layout(layout).unwrap()
}

fn destinations(tree: &PathTree) -> Vec<Square> {
    tree.destinations().collect()
}

/// The diagonal a move travelled, reconstructed from its endpoints.
fn diagonal_between(from: Square, to: Square) -> Diagonal {
    let col_delta = to.col() as i8 - from.col() as i8;
    let row_delta = to.row() as i8 - from.row() as i8;
    *Diagonal::ALL
        .iter()
        .find(|d| (d.col_delta() > 0) == (col_delta > 0) && (d.row_delta() > 0) == (row_delta > 0))
        .unwrap()
}

fn assert_no_reversal(parent: Square, node: &PathNode) {
    let inbound = diagonal_between(parent, node.square());
    for continuation in node.next() {
        assert_ne!(
            diagonal_between(node.square(), continuation.square()),
            inbound.opposite(),
            "continuation from {} reverses the jump that reached it",
            node.square()
        );
        assert_no_reversal(node.square(), continuation);
    }
}

fn assert_non_captures_terminal(node: &PathNode) {
    if !node.is_jump() {
        assert!(
            node.next().is_empty(),
            "non-capturing node {} has continuations",
            node.square()
        );
    }
    for continuation in node.next() {
        assert_non_captures_terminal(continuation);
    }
}

#[test]
fn man_gets_exactly_the_two_forward_diagonals() {
    let board = board("8/8/8/8/3w4/8/8/8");

    let tree = generate(&board, Square::D4, 1, Side::White, None).unwrap();
    assert_eq!(destinations(&tree), [Square::E5, Square::C5]);
    for node in tree.moves() {
        assert!(!node.is_jump());
        assert!(node.next().is_empty());
    }

    // The same square seen from the other side walks the other way
    let board = Board::from_layout("8/8/8/8/3b4/8/8/8").unwrap();
    let tree = generate(&board, Square::D4, 1, Side::Black, None).unwrap();
    assert_eq!(destinations(&tree), [Square::E3, Square::C3]);
}

#[test]
fn single_jump_records_landing_and_victim() {
    let board = board("8/8/8/3b4/4w3/8/8/8");

    let tree = generate(&board, Square::D5, 1, Side::Black, None).unwrap();
    assert_eq!(tree.len(), 2);

    let jump = &tree.moves()[0];
    assert!(jump.is_jump());
    assert_eq!(jump.square(), Square::F3);
    assert_eq!(jump.captured(), Some(Square::E4));
    assert!(jump.next().is_empty());

    let step = &tree.moves()[1];
    assert!(!step.is_jump());
    assert_eq!(step.square(), Square::C4);
}

#[test]
fn jump_needs_an_empty_landing_square() {
    let board = board("8/8/8/3b4/4w3/5w2/8/8");

    let tree = generate(&board, Square::D5, 1, Side::Black, None).unwrap();
    assert_eq!(destinations(&tree), [Square::C4]);
    assert!(!tree.moves()[0].is_jump());
}

#[test]
fn man_never_jumps_behind_itself() {
    let board = board("8/8/8/8/3w4/2b5/8/8");

    let tree = generate(&board, Square::D4, 1, Side::White, None).unwrap();
    assert_eq!(destinations(&tree), [Square::E5, Square::C5]);
    assert!(tree.moves().iter().all(|node| !node.is_jump()));
}

#[test]
fn men_chain_jumps_forward() {
    let board = board("8/8/5b2/8/3b4/2w5/8/8");

    let tree = generate(&board, Square::C3, 1, Side::White, None).unwrap();
    assert_eq!(tree.len(), 2);

    let first = &tree.moves()[0];
    assert_eq!(first.square(), Square::E5);
    assert_eq!(first.captured(), Some(Square::D4));
    assert_eq!(first.next().len(), 1);

    let second = &first.next()[0];
    assert_eq!(second.square(), Square::G7);
    assert_eq!(second.captured(), Some(Square::F6));
    assert!(second.next().is_empty());
}

#[test]
fn chain_continuations_never_reverse() {
    let board = board("8/8/2B5/3w4/8/5w2/8/8");

    let tree = generate(&board, Square::C6, 8, Side::Black, None).unwrap();

    let jump = tree
        .moves()
        .iter()
        .find(|node| node.is_jump())
        .expect("the king should have a jump available");
    assert_eq!(jump.square(), Square::E4);
    assert_eq!(jump.captured(), Some(Square::D5));

    // The only continuation carries the chain onward, never back over D5
    assert_eq!(jump.next().len(), 1);
    assert_eq!(jump.next()[0].square(), Square::G2);
    assert_eq!(jump.next()[0].captured(), Some(Square::F3));

    for node in tree.moves() {
        assert_no_reversal(Square::C6, node);
    }
}

#[test]
fn continuations_contain_jumps_only() {
    let board = board("8/8/5b2/8/3b4/2w5/8/8");

    let tree = generate(&board, Square::C3, 1, Side::White, None).unwrap();
    for node in tree.moves() {
        assert_non_captures_terminal(node);
        for continuation in node.next() {
            assert!(continuation.is_jump());
        }
    }
}

#[test]
fn king_slides_the_whole_diagonal() {
    let tree = generate(
        &board("8/8/8/8/8/8/8/W7"),
        Square::A1,
        8,
        Side::White,
        None,
    )
    .unwrap();
    assert_eq!(
        destinations(&tree),
        [
            Square::B2,
            Square::C3,
            Square::D4,
            Square::E5,
            Square::F6,
            Square::G7,
            Square::H8
        ]
    );
    assert!(tree.moves().iter().all(|node| !node.is_jump()));
}

#[test]
fn king_stops_at_the_first_blocker() {
    // A teammate exhausts the diagonal outright
    let tree = generate(
        &board("8/8/8/4w3/8/8/8/W7"),
        Square::A1,
        8,
        Side::White,
        None,
    )
    .unwrap();
    assert_eq!(destinations(&tree), [Square::B2, Square::C3, Square::D4]);

    // An enemy with a free square behind it becomes the diagonal's one jump
    let tree = generate(
        &board("8/8/8/4b3/8/8/8/W7"),
        Square::A1,
        8,
        Side::White,
        None,
    )
    .unwrap();
    assert_eq!(
        destinations(&tree),
        [Square::B2, Square::C3, Square::D4, Square::F6]
    );
    let jump = &tree.moves()[3];
    assert!(jump.is_jump());
    assert_eq!(jump.captured(), Some(Square::E5));
}

#[test]
fn scan_order_is_fixed() {
    let tree = generate(
        &board("8/8/8/8/3W4/8/8/8"),
        Square::D4,
        8,
        Side::White,
        None,
    )
    .unwrap();
    assert_eq!(
        destinations(&tree),
        [
            // NE
            Square::E5,
            Square::F6,
            Square::G7,
            Square::H8,
            // NW
            Square::C5,
            Square::B6,
            Square::A7,
            // SE
            Square::E3,
            Square::F2,
            Square::G1,
            // SW
            Square::C3,
            Square::B2,
            Square::A1
        ]
    );
}

#[test]
fn identical_inputs_build_identical_trees() {
    let board = board("8/8/2B5/3w4/8/5w2/8/8");

    let first = generate(&board, Square::C6, 8, Side::Black, None).unwrap();
    let second = generate(&board, Square::C6, 8, Side::Black, None).unwrap();
    assert_eq!(first, second);
}

#[test]
fn checker_accessors_match_the_generator() {
    let board = board("8/8/8/3b4/4w3/8/8/8");
    let checker = *board.checker_at(Square::D5).unwrap();

    let direct = generate(&board, Square::D5, 1, Side::Black, None).unwrap();
    assert_eq!(checker.moves(&board).unwrap(), direct);

    let banned = generate(&board, Square::D5, 1, Side::Black, Some(Diagonal::NorthWest)).unwrap();
    assert_eq!(
        checker
            .moves_after_jump(&board, Diagonal::SouthEast)
            .unwrap(),
        banned
    );
}

#[test]
fn mid_chain_query_skips_the_reversed_diagonal() {
    let mut board = Board::new();
    let king = Checker::king(Side::White, Square::E4);
    board.place(king).unwrap();

    // Having just jumped northeast, the king may not immediately head back southwest
    let tree = king.moves_after_jump(&board, Diagonal::NorthEast).unwrap();
    assert_eq!(
        destinations(&tree),
        [
            Square::F5,
            Square::G6,
            Square::H7,
            Square::D5,
            Square::C6,
            Square::B7,
            Square::A8,
            Square::F3,
            Square::G2,
            Square::H1
        ]
    );
}

#[test]
fn empty_board_square_has_no_moves_for_nobody() {
    let tree = generate(&Board::new(), Square::D4, 1, Side::White, None).unwrap();
    assert_eq!(tree.len(), 2);

    let crowded = board("8/8/8/2w1w3/3w4/8/8/8");
    let tree = generate(&crowded, Square::D4, 1, Side::White, None).unwrap();
    // Both forward diagonals blocked by teammates: no moves is a result, not an error
    assert!(tree.is_empty());
}

struct Unavailable;

impl Occupancy for Unavailable {
    fn side_at(&self, _square: Square) -> Result<Option<Side>> {
        bail!("occupancy snapshot unavailable")
    }
}

#[test]
fn occupancy_failures_fail_the_generation() {
    let err = generate(&Unavailable, Square::C3, 1, Side::White, None).unwrap_err();
    assert!(err.to_string().contains("unavailable"));
}

#[test]
fn zero_range_is_an_invalid_argument() {
    let err = generate(&Board::new(), Square::C3, 0, Side::White, None).unwrap_err();
    assert!(err.to_string().contains("range"));
}
