/*
connections.rs

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

//! Connections between squares in the board graph.

use log::debug;
use serde::{Deserialize, Serialize};

use super::square::SquareId;

/// Undirected connections between the squares.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct Connections {
    /// For each square, indexed by its identifier, the list of the adjacent squares in the
    /// order in which the connections were created.
    adjacent: Vec<Vec<SquareId>>,
}

impl Connections {
    /// Create a [`Connections`] object for the given number of squares, without any
    /// connection.
    pub fn new(num_squares: usize) -> Self {
        Self {
            adjacent: vec![Vec::new(); num_squares],
        }
    }

    /// Number of squares.
    pub fn len(&self) -> usize {
        self.adjacent.len()
    }

    /// Whether there is no square.
    pub fn is_empty(&self) -> bool {
        self.adjacent.is_empty()
    }

    /// Connect two squares in both directions.
    ///
    /// The list is grown if a square is outside the current range. Connecting two squares
    /// that are already connected does nothing.
    pub fn connect(&mut self, square1: SquareId, square2: SquareId) {
        let max: usize = square1.max(square2);
        if max >= self.adjacent.len() {
            self.adjacent.resize(max + 1, Vec::new());
        }
        if self.is_connected(square1, square2) {
            return;
        }
        self.adjacent[square1].push(square2);
        self.adjacent[square2].push(square1);
    }

    /// Return the adjacent squares of the given square.
    pub fn neighbors(&self, square: SquareId) -> &[SquareId] {
        match self.adjacent.get(square) {
            Some(a) => &a[..],
            None => &[],
        }
    }

    /// Number of adjacent squares.
    pub fn degree(&self, square: SquareId) -> usize {
        self.neighbors(square).len()
    }

    /// Whether the two squares are adjacent.
    pub fn is_connected(&self, square1: SquareId, square2: SquareId) -> bool {
        self.neighbors(square1).contains(&square2)
    }

    /// Number of connections. Each connection is counted once.
    pub fn num_connections(&self) -> usize {
        self.adjacent.iter().map(|a| a.len()).sum::<usize>() / 2
    }

    /// Iterate over the connections, each one once, as `(lower_id, higher_id)` pairs.
    pub fn pairs(&self) -> impl Iterator<Item = (SquareId, SquareId)> + '_ {
        self.adjacent.iter().enumerate().flat_map(|(s1, a)| {
            a.iter()
                .filter(move |&&s2| s1 < s2)
                .map(move |&s2| (s1, s2))
        })
    }

    /// Print the connections.
    pub fn debug(&self) {
        let mut s: String = String::new();

        for (s1, a) in self.adjacent.iter().enumerate() {
            s.clear();
            s.push_str(&format!("{s1:>3} -->"));
            for s2 in a {
                s.push_str(&format!(" {s2}"));
            }
            debug!("{s}");
        }
    }
}
