/*
square.rs

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

//! Squares of the board graph.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a square. Identifiers are assigned sequentially during the board
/// construction, and the hub is always `0`.
pub type SquareId = usize;

/// Kind of square.
///
/// - The `Hub` is the center of the board, where all the players start.
/// - A `Spoke` square is part of an arm, between the hub and a headquarters.
/// - A `Headquarters` square is at the end of an arm. A correct answer there earns the
///   category wedge.
/// - A `Ring` square is part of the outer ring that links the headquarters.
/// - A `RollAgain` square is a ring square without category. The player rolls again.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SquareType {
    Hub,
    Spoke,
    Headquarters,
    Ring,
    RollAgain,
}

impl fmt::Display for SquareType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SquareType::Hub => write!(f, "HUB"),
            SquareType::Spoke => write!(f, "SPOKE"),
            SquareType::Headquarters => write!(f, "HEADQUARTERS"),
            SquareType::Ring => write!(f, "RING"),
            SquareType::RollAgain => write!(f, "ROLL_AGAIN"),
        }
    }
}

/// Coordinates of a square, in percent of a square canvas.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, Default, PartialEq)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    /// Create a [`Position`] object.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Position at the given distance and angle (radians) from the given center.
    pub fn polar(center: f64, radius: f64, angle: f64) -> Self {
        Self {
            x: center + radius * angle.cos(),
            y: center + radius * angle.sin(),
        }
    }

    /// Angle of the position around the given center, in `(-π, π]`.
    pub fn angle(&self, center: f64) -> f64 {
        (self.y - center).atan2(self.x - center)
    }
}

/// Square of the board.
///
/// The connections are not stored in the square, but in the
/// [`crate::board::connections::Connections`] object of the board.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Square {
    /// Square identifier.
    pub id: SquareId,

    /// Kind of square. Never changes once the board is built.
    #[serde(rename = "type")]
    pub square_type: SquareType,

    /// Category of the square, in `[0, CATEGORY_COUNT)`.
    /// [`None`] for the hub and the roll-again squares.
    pub category_index: Option<usize>,

    /// Position used for drawing the board.
    pub position: Position,
}

impl Square {
    /// Create a [`Square`] object.
    pub fn new(
        id: SquareId,
        square_type: SquareType,
        category_index: Option<usize>,
        position: Position,
    ) -> Self {
        Self {
            id,
            square_type,
            category_index,
            position,
        }
    }

    /// Whether a question is asked when a player lands on the square.
    pub fn has_question(&self) -> bool {
        self.category_index.is_some()
    }
}
