/*
config.rs

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

//! Fixed game constants.
//!
//! The board shape is not configurable at runtime: these values define it.

/// Version notice printed by `--version`.
pub const COPYRIGHT_NOTICE: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    "\nCopyright 2025 Hervé Quatremain\n",
    "License GPL-3.0-or-later <https://www.gnu.org/licenses/gpl-3.0.html>"
);

/// Center of the square canvas, in percent.
pub const CENTER: f64 = 50.0;

/// Number of spoke squares between the hub and a headquarters square.
pub const ARM_LENGTH: usize = 5;

/// Distances from the center. Index 0 is the hub, 1 to 5 the spoke squares, and 6 the
/// headquarters and ring squares.
pub const RADII: [f64; ARM_LENGTH + 2] = [0.0, 10.0, 18.0, 26.0, 34.0, 42.0, 50.0];

/// Number of game categories. Also the number of arms and of ring segments.
pub const CATEGORY_COUNT: usize = 6;

/// Number of squares in a ring segment between two headquarters.
pub const RING_SEGMENT_SIZE: usize = 6;

/// Zero-based position of the roll-again square in every ring segment.
pub const ROLL_AGAIN_SLOT: usize = 2;

/// Total number of squares: hub, spokes, headquarters, and ring.
pub const SQUARE_COUNT: usize =
    1 + CATEGORY_COUNT * (ARM_LENGTH + 1) + CATEGORY_COUNT * RING_SEGMENT_SIZE;

/// Number of faces of the die.
pub const DIE_FACES: usize = 6;

/// Maximum number of players. There is one color per player.
pub const MAX_PLAYERS: usize = PLAYER_COLORS.len();

/// Player token colors.
pub const PLAYER_COLORS: [&str; 10] = [
    "#ef4444", "#3b82f6", "#22c55e", "#f97316", "#a855f7", "#ec4899", "#84cc16", "#eab308",
    "#06b6d4", "#6366f1",
];

/// Category colors, indexed by category.
pub const CATEGORY_COLORS: [&str; CATEGORY_COUNT] = [
    "#3b82f6", "#ef4444", "#22c55e", "#f97316", "#8b5cf6", "#facc15",
];

/// Emojis assigned to players in turn when none is given.
pub const EMOJI_OPTIONS: [&str; 10] = ["🚀", "🦄", "🤖", "🦊", "🧙", "👽", "👾", "👻", "👑", "💎"];

/// Name of the save file in the data directory.
pub const SAVE_FILE_NAME: &str = "savegame.json";
