/*
board.rs

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

//! Board graph and token moves.
//!
//! The board is built once per game with [`builder::build_board`], which returns an immutable
//! [`layout::Board`] object.
//! The board is never saved: it is rebuilt the same way when a saved game is restored.
//!
//! After each die roll, [`path_finder::find_reachable_squares`] returns the squares the player
//! can move to, each with a [`path::Path`] object that leads there.
//! The player selects one of these destinations, and the token follows the path.

pub mod builder;
pub mod connections;
pub mod layout;
pub mod path;
pub mod path_finder;
pub mod square;
