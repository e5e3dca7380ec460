/*
layout.rs

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

//! Immutable board graph.

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

use super::connections::Connections;
use super::square::{Square, SquareId, SquareType};

/// Identifier of the hub.
pub const HUB_ID: SquareId = 0;

/// Board graph: the squares, indexed by their identifier, and the connections between them.
///
/// Build a board with [`crate::board::builder::build_board`]. Once built, the board is
/// never modified.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Board {
    /// Squares. The square at index `i` has the identifier `i`.
    squares: Vec<Square>,

    /// Connections between the squares.
    connections: Connections,
}

impl Board {
    /// Create a [`Board`] object from its parts.
    pub(super) fn new(squares: Vec<Square>, connections: Connections) -> Self {
        Self {
            squares,
            connections,
        }
    }

    /// Number of squares.
    pub fn len(&self) -> usize {
        self.squares.len()
    }

    /// Whether the board has no square.
    pub fn is_empty(&self) -> bool {
        self.squares.is_empty()
    }

    /// Return all the squares, ordered by identifier.
    pub fn squares(&self) -> &[Square] {
        &self.squares[..]
    }

    /// Return the square with the given identifier.
    pub fn get(&self, id: SquareId) -> Option<&Square> {
        self.squares.get(id)
    }

    /// Whether the identifier is a square of the board.
    pub fn contains(&self, id: SquareId) -> bool {
        id < self.squares.len()
    }

    /// Return the hub.
    pub fn hub(&self) -> Option<&Square> {
        self.get(HUB_ID)
    }

    /// Return the connections.
    pub fn connections(&self) -> &Connections {
        &self.connections
    }

    /// Return the adjacent squares of the given square.
    pub fn neighbors(&self, id: SquareId) -> &[SquareId] {
        self.connections.neighbors(id)
    }

    /// Number of adjacent squares.
    pub fn degree(&self, id: SquareId) -> usize {
        self.connections.degree(id)
    }

    /// Iterate over the squares of the given type.
    pub fn squares_of_type(&self, square_type: SquareType) -> impl Iterator<Item = &Square> {
        self.squares
            .iter()
            .filter(move |s| s.square_type == square_type)
    }

    /// Iterate over the squares of the given category, whatever their type.
    pub fn squares_of_category(&self, category_index: usize) -> impl Iterator<Item = &Square> {
        self.squares
            .iter()
            .filter(move |s| s.category_index == Some(category_index))
    }

    /// Return the headquarters of the given category.
    pub fn headquarters(&self, category_index: usize) -> Option<&Square> {
        self.squares_of_type(SquareType::Headquarters)
            .find(|s| s.category_index == Some(category_index))
    }

    /// Whether all the squares can be reached from the hub.
    pub fn is_connected(&self) -> bool {
        if self.squares.is_empty() {
            return true;
        }
        let mut visited: Vec<bool> = vec![false; self.squares.len()];
        let mut queue: VecDeque<SquareId> = VecDeque::new();
        visited[HUB_ID] = true;
        queue.push_back(HUB_ID);

        while let Some(current) = queue.pop_front() {
            for &n in self.neighbors(current) {
                if n < visited.len() && !visited[n] {
                    visited[n] = true;
                    queue.push_back(n);
                }
            }
        }
        visited.iter().all(|v| *v)
    }
}
