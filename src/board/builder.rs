/*
builder.rs

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

//! Build the board graph.
//!
//! The board is a hub at the center, six arms of spoke squares that each end with a
//! headquarters square, and an outer ring that links the six headquarters.
//! Identifiers are assigned in the following order:
//!
//! * `0`: the hub.
//! * `1..=36`: for each arm, five spoke squares from the hub outward, followed by the
//!   headquarters square.
//! * `37..=72`: for each ring segment, six ring squares from the headquarters of category
//!   `i` to the headquarters of category `i + 1`.
//!
//! Other parts of the game refer to squares by their identifiers, so this order must not
//! change.

use log::{Level, debug, log_enabled};
use std::f64::consts::PI;

use super::connections::Connections;
use super::layout::{Board, HUB_ID};
use super::square::{Position, Square, SquareId, SquareType};
use crate::config::{
    ARM_LENGTH, CATEGORY_COUNT, CENTER, RADII, RING_SEGMENT_SIZE, ROLL_AGAIN_SLOT, SQUARE_COUNT,
};

/// Build the board.
///
/// The construction is deterministic and never fails.
pub fn build_board() -> Board {
    BoardBuilder::new().build()
}

/// Identifier of the first spoke square of the given arm (next to the hub).
pub fn first_spoke_id(arm: usize) -> SquareId {
    1 + arm * (ARM_LENGTH + 1)
}

/// Identifier of the headquarters square at the end of the given arm.
pub fn headquarters_id(arm: usize) -> SquareId {
    first_spoke_id(arm) + ARM_LENGTH
}

/// Identifier of the first ring square.
pub fn ring_start_id() -> SquareId {
    first_spoke_id(CATEGORY_COUNT)
}

/// Category pattern of the spoke squares of an arm, from the hub outward.
fn spoke_category(arm: usize, slot: usize) -> usize {
    (arm + slot) % CATEGORY_COUNT
}

/// Category pattern of the squares of a ring segment.
fn ring_category(segment: usize, slot: usize) -> usize {
    (segment + slot + 2) % CATEGORY_COUNT
}

/// Build the board step by step.
pub struct BoardBuilder {
    /// Squares created so far. The index in the vector is the square identifier.
    squares: Vec<Square>,

    /// Connections created so far.
    connections: Connections,
}

impl Default for BoardBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl BoardBuilder {
    /// Create a [`BoardBuilder`] object.
    pub fn new() -> Self {
        Self {
            squares: Vec::with_capacity(SQUARE_COUNT),
            connections: Connections::new(SQUARE_COUNT),
        }
    }

    /// Create all the squares and connections, and return the board.
    pub fn build(mut self) -> Board {
        self.add_hub();
        self.add_arms();
        self.add_ring();
        self.connect_arms();
        self.connect_ring();

        debug!(
            "Board built: {} squares, {} connections",
            self.squares.len(),
            self.connections.num_connections()
        );
        if log_enabled!(Level::Debug) {
            self.connections.debug();
        }
        Board::new(self.squares, self.connections)
    }

    /// Add a square with the next identifier.
    fn push(&mut self, square_type: SquareType, category_index: Option<usize>, position: Position) {
        let id: SquareId = self.squares.len();
        self.squares
            .push(Square::new(id, square_type, category_index, position));
    }

    fn add_hub(&mut self) {
        self.push(SquareType::Hub, None, Position::new(CENTER, CENTER));
    }

    /// Add the spoke and headquarters squares of the six arms.
    fn add_arms(&mut self) {
        for arm in 0..CATEGORY_COUNT {
            let angle: f64 = (arm as f64 / CATEGORY_COUNT as f64) * 2.0 * PI;
            for slot in 1..=ARM_LENGTH {
                self.push(
                    SquareType::Spoke,
                    Some(spoke_category(arm, slot)),
                    Position::polar(CENTER, RADII[slot], angle),
                );
            }
            self.push(
                SquareType::Headquarters,
                Some(arm),
                Position::polar(CENTER, RADII[ARM_LENGTH + 1], angle),
            );
        }
    }

    /// Add the ring squares. Their positions are computed when they are connected.
    fn add_ring(&mut self) {
        for segment in 0..CATEGORY_COUNT {
            for slot in 0..RING_SEGMENT_SIZE {
                if slot == ROLL_AGAIN_SLOT {
                    self.push(SquareType::RollAgain, None, Position::default());
                } else {
                    self.push(
                        SquareType::Ring,
                        Some(ring_category(segment, slot)),
                        Position::default(),
                    );
                }
            }
        }
    }

    /// Connect each arm from the hub to its headquarters.
    fn connect_arms(&mut self) {
        for arm in 0..CATEGORY_COUNT {
            let first: SquareId = first_spoke_id(arm);
            self.connections.connect(HUB_ID, first);
            for spoke in first..first + ARM_LENGTH - 1 {
                self.connections.connect(spoke, spoke + 1);
            }
            self.connections
                .connect(first + ARM_LENGTH - 1, headquarters_id(arm));
        }
    }

    /// Return the identifier of the headquarters of the given category.
    fn find_headquarters(&self, category_index: usize) -> Option<SquareId> {
        self.squares
            .iter()
            .find(|s| {
                s.square_type == SquareType::Headquarters
                    && s.category_index == Some(category_index)
            })
            .map(|s| s.id)
    }

    /// Place the squares of each ring segment on the arc between two headquarters, and chain
    /// them from the first headquarters to the second.
    fn connect_ring(&mut self) {
        let radius: f64 = RADII[ARM_LENGTH + 1];
        let ring_start: SquareId = ring_start_id();

        for segment in 0..CATEGORY_COUNT {
            let (Some(hq1), Some(hq2)) = (
                self.find_headquarters(segment),
                self.find_headquarters((segment + 1) % CATEGORY_COUNT),
            ) else {
                continue;
            };
            let angle1: f64 = self.squares[hq1].position.angle(CENTER);
            let mut angle2: f64 = self.squares[hq2].position.angle(CENTER);
            if angle2 < angle1 {
                angle2 += 2.0 * PI;
            }
            let step: f64 = (angle2 - angle1) / (RING_SEGMENT_SIZE + 1) as f64;

            let segment_start: SquareId = ring_start + segment * RING_SEGMENT_SIZE;
            let mut previous: SquareId = hq1;
            for slot in 0..RING_SEGMENT_SIZE {
                let current: SquareId = segment_start + slot;
                self.squares[current].position =
                    Position::polar(CENTER, radius, angle1 + step * (slot + 1) as f64);
                self.connections.connect(previous, current);
                previous = current;
            }
            self.connections.connect(previous, hq2);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn count(board: &Board, square_type: SquareType) -> usize {
        board.squares_of_type(square_type).count()
    }

    #[test]
    fn board_has_73_squares() {
        let board = build_board();
        assert_eq!(board.len(), 73);
        assert_eq!(board.len(), SQUARE_COUNT);
        for (i, s) in board.squares().iter().enumerate() {
            assert_eq!(s.id, i);
        }
    }

    #[test]
    fn square_type_distribution() {
        let board = build_board();
        assert_eq!(count(&board, SquareType::Hub), 1);
        assert_eq!(count(&board, SquareType::Spoke), 30);
        assert_eq!(count(&board, SquareType::Headquarters), 6);
        assert_eq!(count(&board, SquareType::RollAgain), 6);
        assert_eq!(count(&board, SquareType::Ring), 30);
        assert_eq!(board.hub().map(|s| s.square_type), Some(SquareType::Hub));
    }

    #[test]
    fn board_is_connected() {
        assert!(build_board().is_connected());
    }

    #[test]
    fn degrees() {
        let board = build_board();
        for s in board.squares() {
            let expected: usize = match s.square_type {
                SquareType::Hub => 6,
                SquareType::Headquarters => 3,
                SquareType::Spoke | SquareType::Ring | SquareType::RollAgain => 2,
            };
            assert_eq!(board.degree(s.id), expected, "square {}", s.id);
        }
        assert_eq!(board.connections().num_connections(), 78);
    }

    #[test]
    fn arm_category_pattern() {
        let board = build_board();
        for arm in 0..CATEGORY_COUNT {
            for slot in 1..=ARM_LENGTH {
                let s = board.get(first_spoke_id(arm) + slot - 1).unwrap();
                assert_eq!(s.square_type, SquareType::Spoke);
                assert_eq!(s.category_index, Some((arm + slot) % 6));
                assert_ne!(s.category_index, Some(arm));
            }
            let hq = board.get(headquarters_id(arm)).unwrap();
            assert_eq!(hq.square_type, SquareType::Headquarters);
            assert_eq!(hq.category_index, Some(arm));
            assert_eq!(board.headquarters(arm).map(|s| s.id), Some(headquarters_id(arm)));
        }
    }

    #[test]
    fn ring_segment_pattern() {
        let board = build_board();
        assert_eq!(ring_start_id(), 37);
        for segment in 0..CATEGORY_COUNT {
            let pattern = [
                (segment + 2) % 6,
                (segment + 3) % 6,
                (segment + 4) % 6,
                (segment + 5) % 6,
                segment % 6,
                (segment + 1) % 6,
            ];
            for (slot, category) in pattern.iter().enumerate() {
                let s = board.get(37 + segment * 6 + slot).unwrap();
                if slot == 2 {
                    assert_eq!(s.square_type, SquareType::RollAgain);
                    assert_eq!(s.category_index, None);
                } else {
                    assert_eq!(s.square_type, SquareType::Ring);
                    assert_eq!(s.category_index, Some(*category));
                }
            }
        }
    }

    #[test]
    fn ring_chains_headquarters_in_order() {
        let board = build_board();
        for segment in 0..CATEGORY_COUNT {
            let start = 37 + segment * 6;
            assert!(board.connections().is_connected(headquarters_id(segment), start));
            for id in start..start + 5 {
                assert!(board.connections().is_connected(id, id + 1));
            }
            assert!(
                board
                    .connections()
                    .is_connected(start + 5, headquarters_id((segment + 1) % 6))
            );
        }
    }

    #[test]
    fn positions_stay_on_the_canvas() {
        let board = build_board();
        for s in board.squares() {
            assert!((-1e-9..=100.0 + 1e-9).contains(&s.position.x), "square {}", s.id);
            assert!((-1e-9..=100.0 + 1e-9).contains(&s.position.y), "square {}", s.id);
        }
    }

    #[test]
    fn ring_squares_lie_between_their_headquarters() {
        let board = build_board();
        for s in board.squares().iter().filter(|s| s.id >= 37) {
            let d = ((s.position.x - CENTER).powi(2) + (s.position.y - CENTER).powi(2)).sqrt();
            assert!((d - 50.0).abs() < 1e-9);
        }
        // First square of segment 0 sits at one seventh of the arc from headquarters 0.
        let first = board.get(37).unwrap().position;
        let expected = Position::polar(CENTER, 50.0, (PI / 3.0) / 7.0);
        assert!((first.x - expected.x).abs() < 1e-9);
        assert!((first.y - expected.y).abs() < 1e-9);
        // The segment that crosses the angle wraparound keeps a positive sweep.
        let last = board.get(37 + 3 * 6 + 5).unwrap().position;
        let expected = Position::polar(CENTER, 50.0, PI + (PI / 3.0) * 6.0 / 7.0);
        assert!((last.x - expected.x).abs() < 1e-9);
        assert!((last.y - expected.y).abs() < 1e-9);
    }

    #[test]
    fn build_is_deterministic() {
        assert_eq!(build_board(), build_board());
    }
}
