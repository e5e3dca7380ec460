/*
path.rs

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

//! Path of a token on the board.

use serde::{Deserialize, Serialize};

use super::square::SquareId;

/// Walk on the board as an ordered list of squares, from the starting square to the
/// destination, both included.
///
/// A walk can go through the same square several times.
#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq, Eq)]
pub struct Path {
    path: Vec<SquareId>,
}

impl Path {
    /// Create a [`Path`] object that only contains the starting square.
    pub fn new(start: SquareId) -> Self {
        Self { path: vec![start] }
    }

    /// Create a [`Path`] object from a vector.
    pub fn from_vec(path: Vec<SquareId>) -> Self {
        Self { path }
    }

    /// Return a new path with the given square appended.
    pub fn extended(&self, square: SquareId) -> Self {
        let mut path: Vec<SquareId> = Vec::with_capacity(self.path.len() + 1);
        path.extend_from_slice(&self.path);
        path.push(square);
        Self { path }
    }

    /// Number of squares in the path.
    pub fn len(&self) -> usize {
        self.path.len()
    }

    /// Whether the path is empty.
    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }

    /// Number of moves (edges) in the path.
    pub fn steps(&self) -> usize {
        self.path.len().saturating_sub(1)
    }

    /// Return a reference to the path vector.
    pub fn get(&self) -> &[SquareId] {
        &self.path[..]
    }

    /// Return the starting square.
    pub fn get_first(&self) -> Option<SquareId> {
        self.path.first().copied()
    }

    /// Return the destination.
    pub fn get_last(&self) -> Option<SquareId> {
        self.path.last().copied()
    }

    /// Return the square visited just before the current one.
    pub fn get_previous(&self) -> Option<SquareId> {
        let l: usize = self.path.len();
        if l > 1 { Some(self.path[l - 2]) } else { None }
    }

    /// Squares the token goes through after leaving the starting square.
    pub fn moves(&self) -> &[SquareId] {
        if self.path.is_empty() {
            &[]
        } else {
            &self.path[1..]
        }
    }

    /// Whether the path never goes straight back to the square it just left.
    pub fn has_no_reversal(&self) -> bool {
        self.path.windows(3).all(|w| w[0] != w[2])
    }
}
