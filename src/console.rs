/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::io::BufRead;

use anyhow::{Context, Result};
use clap::Parser;

use crate::{Board, Checker, Side, Square};

/// A command to be executed by the [`Console`].
#[derive(Debug, Clone, Parser)]
#[command(multicall = true, about, rename_all = "lower")]
pub enum ConsoleCommand {
    /// Print a visual representation of the current board.
    #[command(alias = "d")]
    Display,

    /// Show every move available to the checker on the given square.
    #[command(alias = "m")]
    Moves { square: Square },

    /// Put a checker on the board.
    Place {
        side: Side,

        square: Square,

        /// If set, the checker is placed already crowned.
        #[arg(short, long, default_value = "false")]
        king: bool,
    },

    /// Take the checker on the given square off the board.
    Remove { square: Square },

    /// Replace the board with the given layout string.
    Load { layout: Board },

    /// Empty the board.
    Clear,

    /// Restore the starting position.
    Reset,

    /// Quit the console.
    #[command(aliases = ["quit", "q"])]
    Exit,
}

/// An interactive shell around the move generator.
///
/// Owns a [`Board`] and executes one [`ConsoleCommand`] per line of input.
/// The console arbitrates nothing: it places what it is told to place and
/// reports what the generator reports.
#[derive(Debug, Clone)]
pub struct Console {
    board: Board,
}

impl Console {
    /// Constructs a new [`Console`] holding the starting position.
    #[inline(always)]
    pub fn new() -> Self {
        Self {
            board: Board::default(),
        }
    }

    /// Runs the read-eval loop until `exit` or end of input.
    ///
    /// Command errors are printed and the loop continues; only input failures
    /// abort it.
    pub fn run(&mut self) -> Result<()> {
        println!(
            "{} {} (type 'help' for commands)",
            env!("CARGO_PKG_NAME"),
            env!("CARGO_PKG_VERSION")
        );

        for line in std::io::stdin().lock().lines() {
            let line = line.context("Failed to read from stdin")?;
            let args = line.split_whitespace();
            if args.clone().next().is_none() {
                continue;
            }

            match ConsoleCommand::try_parse_from(args) {
                Ok(command) => match self.execute(command) {
                    Ok(true) => {}
                    Ok(false) => break,
                    Err(e) => eprintln!("error: {e}"),
                },
                Err(e) => eprintln!("{e}"),
            }
        }

        Ok(())
    }

    /// Executes a single command, returning `false` when the loop should stop.
    fn execute(&mut self, command: ConsoleCommand) -> Result<bool> {
        match command {
            ConsoleCommand::Display => {
                println!("{}", self.board);
                println!("Layout: {}", self.board.layout());
            }

            ConsoleCommand::Moves { square } => match self.board.checker_at(square) {
                None => println!("{square} is empty"),
                Some(checker) => {
                    let kind = if checker.is_crowned() { "king" } else { "man" };
                    let tree = checker.moves(&self.board)?;
                    println!("Moves for the {} {kind} on {square}:", checker.side());
                    print!("{tree}");
                }
            },

            ConsoleCommand::Place { side, square, king } => {
                let checker = if king {
                    Checker::king(side, square)
                } else {
                    Checker::man(side, square)
                };
                self.board.place(checker)?;
            }

            ConsoleCommand::Remove { square } => {
                if self.board.remove(square).is_none() {
                    println!("{square} is empty");
                }
            }

            ConsoleCommand::Load { layout } => self.board = layout,

            ConsoleCommand::Clear => self.board.clear(),

            ConsoleCommand::Reset => self.board = Board::default(),

            ConsoleCommand::Exit => return Ok(false),
        }

        Ok(true)
    }
}

impl Default for Console {
    fn default() -> Self {
        Self::new()
    }
}
