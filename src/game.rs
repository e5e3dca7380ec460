/*
game.rs

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

//! Manage the status of a game in progress.
//!
//! The [`Game`] object owns the board and passes it explicitly to the path finder.
//! A turn goes through the following phases:
//!
//! 1. [`Phase::AwaitingRoll`]: the current player rolls the die ([`Game::roll`]).
//!    If no square can be reached with that roll, the turn passes to the next player.
//! 2. [`Phase::AwaitingMove`]: the player selects a destination ([`Game::move_to`]).
//!    Landing on a roll-again square goes back to step 1 for the same player.
//!    Landing on the hub requires choosing a category ([`Game::choose_category`]).
//! 3. [`Phase::AwaitingAnswer`]: the player answers the question ([`Game::answer`]).
//!    A correct answer lets the same player roll again, otherwise the turn passes.
//!    A correct answer on a headquarters square earns the wedge of the category, and can
//!    trigger a category mutation ([`Phase::AwaitingMutation`]).
//!
//! The game ends when a player has the wedges of all the categories.

use chrono::Local;
use log::debug;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::error::Error;
use std::fmt;

use crate::board::builder::build_board;
use crate::board::layout::Board;
use crate::board::path::Path;
use crate::board::path_finder::{PathFinderError, find_reachable_squares};
use crate::board::square::{SquareId, SquareType};
use crate::categories::{Categories, CategoryError};
use crate::config::{CATEGORY_COUNT, DIE_FACES, MAX_PLAYERS};
use crate::player::Player;

/// Type of errors.
#[derive(Debug, PartialEq)]
pub enum GameError {
    /// A game needs at least one player.
    NoPlayers,

    /// There are more players than available colors.
    TooManyPlayers(usize),

    /// The die value is outside `1..=DIE_FACES`.
    InvalidRoll(usize),

    /// The action is not possible in the current phase.
    UnexpectedPhase(Phase),

    /// The square is not one of the possible destinations.
    IllegalMove(SquareId),

    /// A token is on a square that does not exist.
    InvalidPosition(SquareId),

    /// Error from the path finder.
    Path(PathFinderError),

    /// Error from the categories.
    Category(CategoryError),
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            GameError::NoPlayers => write!(f, "At least one player is required"),
            GameError::TooManyPlayers(n) => {
                write!(f, "{n} players, but at most {MAX_PLAYERS} are allowed")
            }
            GameError::InvalidRoll(v) => write!(f, "Invalid die value {v}"),
            GameError::UnexpectedPhase(p) => write!(f, "Action not allowed while {p}"),
            GameError::IllegalMove(id) => write!(f, "Square {id} cannot be reached"),
            GameError::InvalidPosition(id) => write!(f, "Token on unknown square {id}"),
            GameError::Path(e) => write!(f, "{e}"),
            GameError::Category(e) => write!(f, "{e}"),
        }
    }
}

impl Error for GameError {}

impl From<PathFinderError> for GameError {
    fn from(e: PathFinderError) -> Self {
        GameError::Path(e)
    }
}

impl From<CategoryError> for GameError {
    fn from(e: CategoryError) -> Self {
        GameError::Category(e)
    }
}

/// Phase of the current turn.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, Default, PartialEq)]
pub enum Phase {
    #[default]
    AwaitingRoll,
    AwaitingMove {
        roll: usize,
    },
    AwaitingCategoryChoice,
    AwaitingAnswer {
        category_index: usize,
    },
    AwaitingMutation {
        category_index: usize,
    },
    Finished {
        winner: usize,
    },
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Phase::AwaitingRoll => write!(f, "waiting for a die roll"),
            Phase::AwaitingMove { roll } => write!(f, "waiting for a move of {roll}"),
            Phase::AwaitingCategoryChoice => write!(f, "waiting for a category choice"),
            Phase::AwaitingAnswer { category_index } => {
                write!(f, "waiting for an answer in category {category_index}")
            }
            Phase::AwaitingMutation { category_index } => {
                write!(f, "waiting for the mutation of category {category_index}")
            }
            Phase::Finished { winner } => write!(f, "finished (winner: player {winner})"),
        }
    }
}

/// What happens after the token reaches its destination.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Landing {
    /// Roll-again square: the same player rolls again.
    RollAgain,

    /// Hub: the player chooses the category of the question.
    ChooseCategory,

    /// The player answers a question of the given category.
    Question(usize),
}

/// Result of an answer.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct AnswerOutcome {
    /// Category of the wedge earned with this answer.
    pub wedge: Option<usize>,

    /// Whether the current player plays again.
    pub play_again: bool,

    /// Whether the category must now be mutated.
    pub mutation_pending: bool,

    /// Index of the player who won the game with this answer.
    pub winner: Option<usize>,
}

/// Manage the status of the game in progress.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Game {
    /// Game identifier.
    #[serde(default)]
    pub game_id: String,

    /// Players in turn order. Never empty.
    players: Vec<Player>,

    /// Category names.
    pub categories: Categories,

    /// Whether a category is renamed after a player earns its wedge.
    #[serde(default)]
    pub mutate_categories: bool,

    /// Index of the player whose turn it is.
    #[serde(default)]
    current_player: usize,

    /// Phase of the current turn. Not saved: a restored game waits for a die roll.
    #[serde(skip)]
    phase: Phase,

    /// Destinations for the last roll.
    #[serde(skip)]
    possible_paths: BTreeMap<SquareId, Path>,

    /// Board graph. Not saved, but rebuilt.
    #[serde(skip, default = "build_board")]
    board: Board,
}

/// Generate a game identifier from the current time.
fn generate_game_id() -> String {
    format!(
        "game-{}-{:07x}",
        Local::now().timestamp_millis(),
        rand::rng().random_range(0..0x1000_0000_u32)
    )
}

impl Game {
    /// Create a [`Game`] object. All the tokens start on the hub.
    ///
    /// # Errors
    ///
    /// The method fails if there is no player or more than [`MAX_PLAYERS`].
    pub fn new<S: AsRef<str>>(
        player_names: &[S],
        categories: Categories,
        mutate_categories: bool,
    ) -> Result<Self, GameError> {
        if player_names.is_empty() {
            return Err(GameError::NoPlayers);
        }
        if player_names.len() > MAX_PLAYERS {
            return Err(GameError::TooManyPlayers(player_names.len()));
        }
        let game: Game = Self {
            game_id: generate_game_id(),
            players: player_names
                .iter()
                .enumerate()
                .map(|(i, n)| Player::new(n.as_ref(), i))
                .collect(),
            categories,
            mutate_categories,
            current_player: 0,
            phase: Phase::AwaitingRoll,
            possible_paths: BTreeMap::new(),
            board: build_board(),
        };
        debug!(
            "New game {} with {} players",
            game.game_id,
            game.players.len()
        );
        Ok(game)
    }

    /// Check and complete a game that was just deserialized.
    pub(crate) fn restore(&mut self) -> Result<(), GameError> {
        if self.players.is_empty() {
            return Err(GameError::NoPlayers);
        }
        if self.players.len() > MAX_PLAYERS {
            return Err(GameError::TooManyPlayers(self.players.len()));
        }
        if let Some(p) = self.players.iter().find(|p| !self.board.contains(p.position)) {
            return Err(GameError::InvalidPosition(p.position));
        }
        if let Some(&wedge) = self
            .players
            .iter()
            .flat_map(|p| p.wedges.iter())
            .find(|&&w| w >= CATEGORY_COUNT)
        {
            return Err(CategoryError::InvalidIndex(wedge).into());
        }
        if self.game_id.is_empty() {
            self.game_id = generate_game_id();
            debug!("Restored game had no identifier, using {}", self.game_id);
        }
        if self.current_player >= self.players.len() {
            self.current_player = 0;
        }
        self.possible_paths.clear();
        self.phase = match self.players.iter().position(|p| p.has_all_wedges()) {
            Some(winner) => Phase::Finished { winner },
            None => Phase::AwaitingRoll,
        };
        Ok(())
    }

    /// Return the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Return the phase of the current turn.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Index of the player whose turn it is.
    pub fn current_player_index(&self) -> usize {
        self.current_player
    }

    /// Players in turn order.
    pub fn players(&self) -> &[Player] {
        &self.players[..]
    }

    /// Return the player at the given position in the turn order.
    pub fn player(&self, index: usize) -> Option<&Player> {
        self.players.get(index)
    }

    /// Player whose turn it is.
    pub fn current_player(&self) -> &Player {
        &self.players[self.current_player]
    }

    /// Destinations and their paths for the last roll.
    pub fn possible_paths(&self) -> &BTreeMap<SquareId, Path> {
        &self.possible_paths
    }

    /// Index of the winner, if the game is over.
    pub fn winner(&self) -> Option<usize> {
        match self.phase {
            Phase::Finished { winner } => Some(winner),
            _ => None,
        }
    }

    /// Roll the die with a random value, and then process the roll.
    pub fn roll_die(&mut self) -> Result<(usize, Vec<SquareId>), GameError> {
        let value: usize = rand::rng().random_range(1..=DIE_FACES);
        let destinations: Vec<SquareId> = self.roll(value)?;
        Ok((value, destinations))
    }

    /// Process a die roll and return the possible destinations.
    ///
    /// When there is no possible destination, the turn passes to the next player.
    pub fn roll(&mut self, value: usize) -> Result<Vec<SquareId>, GameError> {
        if self.phase != Phase::AwaitingRoll {
            return Err(GameError::UnexpectedPhase(self.phase));
        }
        if !(1..=DIE_FACES).contains(&value) {
            return Err(GameError::InvalidRoll(value));
        }

        let start: SquareId = self.current_player().position;
        self.possible_paths = find_reachable_squares(&self.board, start, value)?;
        debug!(
            "Player {} rolled {value} from square {start}: {:?}",
            self.current_player,
            self.possible_paths.keys().collect::<Vec<_>>()
        );

        if self.possible_paths.is_empty() {
            debug!("No possible move, next player");
            self.next_turn();
            return Ok(Vec::new());
        }
        self.phase = Phase::AwaitingMove { roll: value };
        Ok(self.possible_paths.keys().copied().collect())
    }

    /// Move the token of the current player to one of the possible destinations.
    ///
    /// Return the path that the token follows, and what happens on the destination square.
    pub fn move_to(&mut self, destination: SquareId) -> Result<(Path, Landing), GameError> {
        if !matches!(self.phase, Phase::AwaitingMove { .. }) {
            return Err(GameError::UnexpectedPhase(self.phase));
        }
        let path: Path = self
            .possible_paths
            .remove(&destination)
            .ok_or(GameError::IllegalMove(destination))?;
        self.possible_paths.clear();

        let square = self
            .board
            .get(destination)
            .ok_or(GameError::InvalidPosition(destination))?;
        let landing: Landing = match (square.square_type, square.category_index) {
            (SquareType::RollAgain, _) => Landing::RollAgain,
            (SquareType::Hub, _) => Landing::ChooseCategory,
            (_, Some(category_index)) => Landing::Question(category_index),
            (_, None) => Landing::RollAgain,
        };
        self.players[self.current_player].position = destination;

        self.phase = match landing {
            Landing::RollAgain => Phase::AwaitingRoll,
            Landing::ChooseCategory => Phase::AwaitingCategoryChoice,
            Landing::Question(category_index) => Phase::AwaitingAnswer { category_index },
        };
        debug!(
            "Player {} moved to square {destination}: {landing:?}",
            self.current_player
        );
        Ok((path, landing))
    }

    /// Select the question category after landing on the hub.
    pub fn choose_category(&mut self, category_index: usize) -> Result<(), GameError> {
        if self.phase != Phase::AwaitingCategoryChoice {
            return Err(GameError::UnexpectedPhase(self.phase));
        }
        if category_index >= CATEGORY_COUNT {
            return Err(CategoryError::InvalidIndex(category_index).into());
        }
        self.phase = Phase::AwaitingAnswer { category_index };
        Ok(())
    }

    /// Category of the question being asked.
    pub fn question_category(&self) -> Option<usize> {
        match self.phase {
            Phase::AwaitingAnswer { category_index } => Some(category_index),
            _ => None,
        }
    }

    /// Process the answer of the current player.
    pub fn answer(&mut self, correct: bool) -> Result<AnswerOutcome, GameError> {
        let Phase::AwaitingAnswer { category_index } = self.phase else {
            return Err(GameError::UnexpectedPhase(self.phase));
        };
        let position: SquareId = self.current_player().position;
        let on_headquarters: bool = self
            .board
            .get(position)
            .is_some_and(|s| s.square_type == SquareType::Headquarters);

        let mut outcome = AnswerOutcome {
            wedge: None,
            play_again: correct,
            mutation_pending: false,
            winner: None,
        };

        if correct && on_headquarters {
            let player: &mut Player = &mut self.players[self.current_player];
            if player.add_wedge(category_index) {
                outcome.wedge = Some(category_index);
                debug!(
                    "Player {} earned the wedge of category {category_index}",
                    self.current_player
                );
            }
            if player.has_all_wedges() {
                outcome.winner = Some(self.current_player);
                outcome.play_again = false;
                self.phase = Phase::Finished {
                    winner: self.current_player,
                };
                debug!("Player {} won", self.current_player);
                return Ok(outcome);
            }
            if self.mutate_categories {
                outcome.mutation_pending = true;
                self.phase = Phase::AwaitingMutation { category_index };
                return Ok(outcome);
            }
        }

        if correct {
            self.phase = Phase::AwaitingRoll;
        } else {
            self.next_turn();
        }
        Ok(outcome)
    }

    /// Rename the category for which the current player just earned the wedge. The player
    /// then plays again.
    ///
    /// Return the previous name.
    pub fn mutate_category(&mut self, name: &str) -> Result<String, GameError> {
        let Phase::AwaitingMutation { category_index } = self.phase else {
            return Err(GameError::UnexpectedPhase(self.phase));
        };
        let old: String = self.categories.mutate(category_index, name)?;
        debug!("Category {category_index} mutated from {old} to {name}");
        self.phase = Phase::AwaitingRoll;
        Ok(old)
    }

    /// Keep the category name when a mutation is pending.
    pub fn skip_mutation(&mut self) -> Result<(), GameError> {
        if !matches!(self.phase, Phase::AwaitingMutation { .. }) {
            return Err(GameError::UnexpectedPhase(self.phase));
        }
        self.phase = Phase::AwaitingRoll;
        Ok(())
    }

    /// Pass the turn to the next player.
    fn next_turn(&mut self) {
        self.current_player = (self.current_player + 1) % self.players.len();
        self.possible_paths.clear();
        self.phase = Phase::AwaitingRoll;
        debug!("Turn of player {}", self.current_player);
    }
}
