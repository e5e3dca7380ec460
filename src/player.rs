/*
player.rs

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

//! Players and their tokens.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::board::layout::HUB_ID;
use crate::board::square::SquareId;
use crate::config::{CATEGORY_COUNT, EMOJI_OPTIONS, PLAYER_COLORS};

/// Player representation.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Player {
    /// Name displayed for the player.
    pub name: String,

    /// Emoji used as the token.
    pub emoji: String,

    /// Token color.
    pub color: String,

    /// Square where the token is.
    pub position: SquareId,

    /// Categories for which the player earned the wedge, at a headquarters square.
    pub wedges: BTreeSet<usize>,
}

impl Player {
    /// Create a [`Player`] object on the hub.
    ///
    /// The `number` parameter is the position of the player in the turn order. It selects the
    /// default emoji and the color.
    pub fn new(name: &str, number: usize) -> Self {
        let name: &str = name.trim();
        Self {
            name: if name.is_empty() {
                format!("Player {}", number + 1)
            } else {
                name.to_string()
            },
            emoji: EMOJI_OPTIONS[number % EMOJI_OPTIONS.len()].to_string(),
            color: PLAYER_COLORS[number % PLAYER_COLORS.len()].to_string(),
            position: HUB_ID,
            wedges: BTreeSet::new(),
        }
    }

    /// Add the wedge of the category. Return `false` if the player already had it.
    pub fn add_wedge(&mut self, category_index: usize) -> bool {
        self.wedges.insert(category_index)
    }

    /// Whether the player has the wedges of all the categories.
    pub fn has_all_wedges(&self) -> bool {
        (0..CATEGORY_COUNT).all(|c| self.wedges.contains(&c))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_player_starts_on_the_hub() {
        let p = Player::new("  Ada ", 1);
        assert_eq!(p.name, "Ada");
        assert_eq!(p.position, HUB_ID);
        assert_eq!(p.color, PLAYER_COLORS[1]);
        assert!(p.wedges.is_empty());
    }

    #[test]
    fn blank_name_gets_a_default() {
        assert_eq!(Player::new("", 2).name, "Player 3");
    }

    #[test]
    fn wedges_are_counted_once() {
        let mut p = Player::new("a", 0);
        assert!(p.add_wedge(3));
        assert!(!p.add_wedge(3));
        for c in 0..CATEGORY_COUNT {
            p.add_wedge(c);
        }
        assert!(p.has_all_wedges());
    }
}
