/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use draughts::{generate, Board, Side, Square};

#[derive(Clone, Copy)]
struct BenchCase {
    name: &'static str,
    layout: &'static str,
    origin: Square,
    range: u8,
    side: Side,
}

const CASES: &[BenchCase] = &[
    BenchCase {
        name: "man_startpos",
        layout: "1b1b1b1b/b1b1b1b1/1b1b1b1b/8/8/w1w1w1w1/1w1w1w1w/w1w1w1w1",
        origin: Square::C3,
        range: 1,
        side: Side::White,
    },
    BenchCase {
        name: "king_open_board",
        layout: "8/8/8/8/3W4/8/8/8",
        origin: Square::D4,
        range: 8,
        side: Side::White,
    },
    BenchCase {
        name: "king_jump_chain",
        layout: "8/8/2B5/3w4/8/3w1w2/8/1w3w2",
        origin: Square::C6,
        range: 8,
        side: Side::Black,
    },
];

fn bench_generate(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate");

    for case in CASES {
        let board = Board::from_layout(case.layout).unwrap();
        group.bench_function(case.name, |b| {
            b.iter(|| {
                generate(
                    black_box(&board),
                    black_box(case.origin),
                    case.range,
                    case.side,
                    None,
                )
                .unwrap()
            })
        });
    }

    group.finish();
}

fn bench_all_startpos_moves(c: &mut Criterion) {
    let board = Board::default();

    c.bench_function("startpos_every_checker", |b| {
        b.iter(|| {
            for checker in board.checkers() {
                black_box(checker.moves(&board).unwrap());
            }
        })
    });
}

criterion_group!(benches, bench_generate, bench_all_startpos_moves);
criterion_main!(benches);
