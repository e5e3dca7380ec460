/*
cli_options.rs

Copyright 2025 Hervé Quatremain

This file is part of Trivia Board.

Trivia Board is free software: you can redistribute it and/or modify it under the
terms of the GNU General Public License as published by the Free Software
Foundation, either version 3 of the License, or (at your option) any later
version.

Trivia Board is distributed in the hope that it will be useful, but WITHOUT ANY
WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR
A PARTICULAR PURPOSE. See the GNU General Public License for more details.

You should have received a copy of the GNU General Public License along with
Trivia Board. If not, see <https://www.gnu.org/licenses/>.

SPDX-License-Identifier: GPL-3.0-or-later
*/

//! Process command-line options.
//!
//! The command line prints the board, lists the moves for a roll, and simulates games.
//!
//! # Examples
//!
//! Print the board squares:
//!
//! ```text
//! $ trivia-board --board
//!  id  type          category      x      y  connections
//!   0  HUB                  -   50.0   50.0  1 7 13 19 25 31
//!   1  SPOKE                1   60.0   50.0  0 2
//! ...
//! ```
//!
//! List the destinations for a roll of 2 from the second spoke square:
//!
//! ```text
//! $ trivia-board --from 2 --steps 2
//!   0: 2 -> 1 -> 0
//!   4: 2 -> 3 -> 4
//! ```
//!
//! Simulate a game between three players:
//!
//! ```text
//! $ trivia-board --play 3 --preset science
//! ```

use clap::builder::RangedU64ValueParser;
use clap::{CommandFactory, Parser};
use log::debug;
use rand::Rng;
use rand::seq::IndexedRandom;
use std::collections::BTreeMap;
use std::env;
use std::path::PathBuf;

use crate::board::builder::build_board;
use crate::board::layout::Board;
use crate::board::path::Path;
use crate::board::path_finder::{PathFinder, Witness};
use crate::board::square::SquareId;
use crate::categories::{Categories, Preset};
use crate::config::{CATEGORY_COUNT, COPYRIGHT_NOTICE};
use crate::game::{Game, Landing, Phase};
use crate::saver::game::SaverGame;

/// Largest number of squares accepted by `--steps`. The search enumerates every walk, so the
/// work grows exponentially with the number of steps.
const MAX_STEPS: u64 = 64;

/// Explore the trivia game board.
#[derive(Parser)]
#[command(about, long_about = None, version, long_version = COPYRIGHT_NOTICE)]
struct Args {
    /// Print the board squares and their connections
    #[arg(short, long, default_value_t = false)]
    board: bool,

    /// Print the board in JSON format
    #[arg(short, long, default_value_t = false)]
    json: bool,

    /// Square to move from
    #[arg(short, long, requires = "steps")]
    from: Option<SquareId>,

    /// Number of squares to move
    #[arg(
        short,
        long,
        requires = "from",
        value_parser = RangedU64ValueParser::<usize>::new().range(0..=MAX_STEPS)
    )]
    steps: Option<usize>,

    /// Keep the first path found for each destination instead of the last one
    #[arg(long, default_value_t = false, requires = "from")]
    first: bool,

    /// Simulate a game with the given number of players
    #[arg(short, long, group = "simulate")]
    play: Option<usize>,

    /// Category set for the simulated game (random by default)
    #[arg(value_enum, long, requires = "simulate")]
    preset: Option<Preset>,

    /// Rename categories after a player earns their wedge
    #[arg(short, long, default_value_t = false, requires = "simulate")]
    mutate: bool,

    /// Stop the simulated game after this number of die rolls
    #[arg(long, default_value_t = 1000, requires = "simulate")]
    max_rolls: usize,

    /// Directory where the simulated game is saved when it stops
    #[arg(long, requires = "simulate")]
    save: Option<PathBuf>,

    /// Enable debug messages
    #[arg(short, long, default_value_t = false)]
    debug: bool,
}

/// Parse and process command-line options. Return the exit code.
pub fn parse() -> u8 {
    let args: Args = match Args::try_parse() {
        Ok(a) => a,
        Err(e) => {
            let _ = e.print();
            // Help and version requests are not errors
            return if e.use_stderr() { 1 } else { 0 };
        }
    };

    if args.debug {
        unsafe {
            env::set_var("RUST_LOG", "debug");
        }
    }
    env_logger::init();

    if !args.board && !args.json && args.from.is_none() && args.play.is_none() {
        let _ = Args::command().print_help();
        return 0;
    }

    let board: Board = build_board();

    if args.board {
        print_board(&board);
    }

    if args.json {
        match serde_json::to_string_pretty(&board) {
            Ok(s) => println!("{s}"),
            Err(e) => {
                eprintln!("Cannot serialize the board: {e}");
                return 1;
            }
        }
    }

    if let (Some(from), Some(steps)) = (args.from, args.steps) {
        let witness: Witness = if args.first {
            Witness::First
        } else {
            Witness::Last
        };
        let mut finder: PathFinder = PathFinder::new(&board).with_witness(witness);
        let destinations: BTreeMap<SquareId, Path> = match finder.find(from, steps) {
            Ok(d) => d,
            Err(e) => {
                eprintln!("{e}");
                return 1;
            }
        };
        if destinations.is_empty() {
            println!("No possible move");
        }
        for (destination, path) in &destinations {
            println!("{destination:>3}: {}", format_path(path));
        }
        debug!("{} iterations", finder.iteration);
    }

    if let Some(players) = args.play {
        let preset: Preset = args.preset.unwrap_or_else(Preset::random);
        return simulate(players, preset, args.mutate, args.max_rolls, args.save);
    }
    0
}

/// Format a path as `a -> b -> c`.
fn format_path(path: &Path) -> String {
    path.get()
        .iter()
        .map(|s| s.to_string())
        .collect::<Vec<String>>()
        .join(" -> ")
}

/// Print the board as a table.
fn print_board(board: &Board) {
    println!(" id  type          category      x      y  connections");
    for s in board.squares() {
        let category: String = match s.category_index {
            Some(c) => c.to_string(),
            None => "-".to_string(),
        };
        let connections: Vec<String> = board
            .neighbors(s.id)
            .iter()
            .map(|n| n.to_string())
            .collect();
        println!(
            "{:>3}  {:<12}  {:>8}  {:>5.1}  {:>5.1}  {}",
            s.id,
            s.square_type.to_string(),
            category,
            s.position.x,
            s.position.y,
            connections.join(" ")
        );
    }
}

/// Play a game with random rolls, moves, and answers.
fn simulate(
    num_players: usize,
    preset: Preset,
    mutate: bool,
    max_rolls: usize,
    save: Option<PathBuf>,
) -> u8 {
    let names: Vec<String> = (1..=num_players).map(|i| format!("Player {i}")).collect();
    let mut game: Game = match Game::new(&names, Categories::from(preset), mutate) {
        Ok(g) => g,
        Err(e) => {
            eprintln!("{e}");
            return 1;
        }
    };
    let mut rng = rand::rng();
    println!("Categories: {}", game.categories.names().join(", "));

    let mut rolls: usize = 0;
    while game.winner().is_none() && rolls < max_rolls {
        let player: usize = game.current_player_index();
        let (value, destinations) = match game.roll_die() {
            Ok(r) => r,
            Err(e) => {
                eprintln!("{e}");
                return 1;
            }
        };
        rolls += 1;

        let Some(&destination) = destinations.choose(&mut rng) else {
            println!("{} rolls {value}: no possible move", game.players()[player].name);
            continue;
        };
        let landing: Landing = match game.move_to(destination) {
            Ok((path, landing)) => {
                println!(
                    "{} rolls {value}: {}",
                    game.players()[player].name,
                    format_path(&path)
                );
                landing
            }
            Err(e) => {
                eprintln!("{e}");
                return 1;
            }
        };

        if landing == Landing::RollAgain {
            println!("    Roll again");
            continue;
        }
        if landing == Landing::ChooseCategory {
            let category: usize = rng.random_range(0..CATEGORY_COUNT);
            if let Err(e) = game.choose_category(category) {
                eprintln!("{e}");
                return 1;
            }
        }

        let category: usize = game.question_category().unwrap_or_default();
        let correct: bool = rng.random_bool(0.5);
        println!(
            "    Question in {}: {}",
            game.categories.name(category).unwrap_or("?"),
            if correct { "correct" } else { "wrong" }
        );
        match game.answer(correct) {
            Ok(outcome) => {
                if let Some(w) = outcome.wedge {
                    println!(
                        "    Wedge earned: {}",
                        game.categories.name(w).unwrap_or("?")
                    );
                }
            }
            Err(e) => {
                eprintln!("{e}");
                return 1;
            }
        }

        if let Phase::AwaitingMutation { category_index } = game.phase() {
            let name: String = format!("{} II", game.categories.name(category_index).unwrap_or("?"));
            match game.mutate_category(&name) {
                Ok(old) => println!("    Category {old} becomes {name}"),
                Err(e) => {
                    eprintln!("{e}");
                    return 1;
                }
            }
        }
    }

    match game.winner() {
        Some(w) => println!("{} wins after {rolls} rolls", game.players()[w].name),
        None => println!("No winner after {rolls} rolls"),
    }
    for p in game.players() {
        println!("{:>12}: {} wedges", p.name, p.wedges.len());
    }

    if let Some(dir) = save {
        let saver: SaverGame = SaverGame::new(dir);
        if let Err(e) = saver.save_game(&game) {
            eprintln!("Cannot save the game: {e}");
            return 1;
        }
        println!("Game saved to {}", saver.path().display());
    }
    0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn steps_are_capped() {
        let ok = Args::try_parse_from(["trivia-board", "--from", "0", "--steps", "64"]).unwrap();
        assert_eq!(ok.steps, Some(64));
        assert!(Args::try_parse_from(["trivia-board", "--from", "0", "--steps", "65"]).is_err());
        assert!(Args::try_parse_from(["trivia-board", "--from", "0", "--steps", "-1"]).is_err());
    }

    #[test]
    fn steps_require_a_start_square() {
        assert!(Args::try_parse_from(["trivia-board", "--steps", "3"]).is_err());
        let args = Args::try_parse_from(["trivia-board", "-f", "6", "-s", "3", "--first"]).unwrap();
        assert_eq!(args.from, Some(6));
        assert!(args.first);
    }

    #[test]
    fn simulation_options_need_a_game() {
        assert!(Args::try_parse_from(["trivia-board", "--mutate"]).is_err());
        let args =
            Args::try_parse_from(["trivia-board", "--play", "3", "--preset", "video-games"])
                .unwrap();
        assert_eq!(args.play, Some(3));
        assert_eq!(args.preset, Some(Preset::VideoGames));
    }

    #[test]
    fn simulated_game_runs_and_saves() {
        let dir = tempfile::tempdir().unwrap();
        let code = simulate(2, Preset::Classic, true, 50, Some(dir.path().to_path_buf()));
        assert_eq!(code, 0);
        let saver = SaverGame::new(dir.path().to_path_buf());
        let game = saver.get_game().unwrap().unwrap();
        assert_eq!(game.players().len(), 2);
    }

    #[test]
    fn invalid_player_count_fails() {
        assert_eq!(simulate(0, Preset::Classic, false, 10, None), 1);
        assert_eq!(simulate(11, Preset::Classic, false, 10, None), 1);
    }
}
