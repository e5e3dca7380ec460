/*
lib.rs

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

//! Board engine of a trivia board game.
//!
//! The board is a hub with six arms that end with headquarters squares, linked by an outer
//! ring. See [`board`] for building the board and finding the moves after a die roll, and
//! [`game`] for the state of a game in progress.

pub mod board;
pub mod categories;
pub mod cli_options;
pub mod config;
pub mod game;
pub mod player;
pub mod saver;
