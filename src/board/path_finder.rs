/*
path_finder.rs

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

//! Find the squares a token can reach with a die roll.
//!
//! A token moves exactly the number of squares shown by the die. It can go through the same
//! square several times, because the ring is a loop, but it can never go straight back to
//! the square it just left.

use log::debug;
use std::collections::{BTreeMap, VecDeque};
use std::error::Error;
use std::fmt;

use super::layout::Board;
use super::path::Path;
use super::square::SquareId;

/// Type of errors.
#[derive(Debug, PartialEq)]
pub enum PathFinderError {
    /// The starting square is not on the board.
    InvalidStartSquare(SquareId),
}

impl fmt::Display for PathFinderError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            PathFinderError::InvalidStartSquare(id) => {
                write!(f, "Square {id} is not on the board")
            }
        }
    }
}

impl Error for PathFinderError {}

/// Path kept when several walks reach the same destination.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub enum Witness {
    /// Keep the last walk found by the breadth-first exploration.
    #[default]
    Last,

    /// Keep the first walk found.
    First,
}

/// [`PathFinder`] object.
pub struct PathFinder<'a> {
    /// Board to explore.
    board: &'a Board,

    /// Which walk to keep for a destination.
    witness: Witness,

    /// Number of queue entries processed during the last search.
    pub iteration: usize,
}

impl<'a> PathFinder<'a> {
    /// Create the object.
    pub fn new(board: &'a Board) -> Self {
        Self {
            board,
            witness: Witness::default(),
            iteration: 0,
        }
    }

    /// Select which walk is kept when several walks reach the same destination.
    pub fn with_witness(mut self, witness: Witness) -> Self {
        self.witness = witness;
        self
    }

    /// Return, for every square reachable with exactly `steps` moves from `start`, one walk
    /// that leads there.
    ///
    /// An empty map is not an error: it means that no move of that length is possible.
    ///
    /// # Errors
    ///
    /// The method returns [`PathFinderError::InvalidStartSquare`] if `start` is not a square of
    /// the board.
    pub fn find(
        &mut self,
        start: SquareId,
        steps: usize,
    ) -> Result<BTreeMap<SquareId, Path>, PathFinderError> {
        if !self.board.contains(start) {
            return Err(PathFinderError::InvalidStartSquare(start));
        }
        self.iteration = 0;

        let mut destinations: BTreeMap<SquareId, Path> = BTreeMap::new();
        let mut queue: VecDeque<(SquareId, Path)> = VecDeque::new();
        queue.push_back((start, Path::new(start)));

        while let Some((current, path)) = queue.pop_front() {
            self.iteration += 1;

            if path.steps() == steps {
                match self.witness {
                    Witness::Last => {
                        destinations.insert(current, path);
                    }
                    Witness::First => {
                        destinations.entry(current).or_insert(path);
                    }
                }
                continue;
            }
            if path.steps() > steps {
                continue;
            }

            let previous: Option<SquareId> = path.get_previous();
            for &neighbor in self.board.neighbors(current) {
                if previous == Some(neighbor) {
                    continue;
                }
                queue.push_back((neighbor, path.extended(neighbor)));
            }
        }

        debug!(
            "From square {start} with {steps} steps: {} destinations ({} iterations)",
            destinations.len(),
            self.iteration
        );
        Ok(destinations)
    }
}

/// Return, for every square reachable with exactly `steps` moves from `start`, the last walk
/// found that leads there.
///
/// # Errors
///
/// The function returns [`PathFinderError::InvalidStartSquare`] if `start` is not a square of
/// the board.
pub fn find_reachable_squares(
    board: &Board,
    start: SquareId,
    steps: usize,
) -> Result<BTreeMap<SquareId, Path>, PathFinderError> {
    PathFinder::new(board).find(start, steps)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::builder::{build_board, first_spoke_id, headquarters_id};
    use crate::board::square::SquareType;
    use std::collections::BTreeSet;

    /// Destinations found by a plain depth-first enumeration of the walks.
    fn brute_force(board: &Board, start: SquareId, steps: usize) -> BTreeSet<SquareId> {
        fn walk(
            board: &Board,
            current: SquareId,
            previous: Option<SquareId>,
            left: usize,
            out: &mut BTreeSet<SquareId>,
        ) {
            if left == 0 {
                out.insert(current);
                return;
            }
            for &n in board.neighbors(current) {
                if Some(n) != previous {
                    walk(board, n, Some(current), left - 1, out);
                }
            }
        }
        let mut out = BTreeSet::new();
        walk(board, start, None, steps, &mut out);
        out
    }

    #[test]
    fn paths_have_the_exact_length_and_no_reversal() {
        let board = build_board();
        for start in 0..board.len() {
            for steps in 0..=6 {
                let result = find_reachable_squares(&board, start, steps).unwrap();
                for (destination, path) in &result {
                    assert_eq!(path.len(), steps + 1);
                    assert_eq!(path.get_first(), Some(start));
                    assert_eq!(path.get_last(), Some(*destination));
                    assert!(path.has_no_reversal(), "{:?}", path.get());
                    for w in path.get().windows(2) {
                        assert!(board.connections().is_connected(w[0], w[1]));
                    }
                }
            }
        }
    }

    #[test]
    fn destinations_match_an_exhaustive_enumeration() {
        let board = build_board();
        for start in 0..board.len() {
            for steps in 0..=6 {
                let found: BTreeSet<SquareId> = find_reachable_squares(&board, start, steps)
                    .unwrap()
                    .into_keys()
                    .collect();
                assert_eq!(found, brute_force(&board, start, steps), "{start} {steps}");
            }
        }
    }

    #[test]
    fn zero_steps_stays_in_place() {
        let board = build_board();
        for start in [0, 7, 40] {
            let result = find_reachable_squares(&board, start, 0).unwrap();
            assert_eq!(result.len(), 1);
            assert_eq!(result[&start].get(), &[start]);
        }
    }

    #[test]
    fn one_step_from_the_hub_reaches_the_six_first_spokes() {
        let board = build_board();
        let result = find_reachable_squares(&board, 0, 1).unwrap();
        let expected: BTreeSet<SquareId> = (0..6).map(first_spoke_id).collect();
        assert_eq!(result.keys().copied().collect::<BTreeSet<_>>(), expected);
        for (destination, path) in &result {
            assert_eq!(path.get(), &[0, *destination]);
        }
    }

    #[test]
    fn one_step_from_headquarters_reaches_its_three_neighbors() {
        let board = build_board();
        for arm in 0..6 {
            let hq = headquarters_id(arm);
            let result = find_reachable_squares(&board, hq, 1).unwrap();
            assert_eq!(result.len(), 3);
            let types: Vec<SquareType> = result
                .keys()
                .map(|id| board.get(*id).unwrap().square_type)
                .collect();
            assert_eq!(types.iter().filter(|t| **t == SquareType::Spoke).count(), 1);
        }
    }

    #[test]
    fn a_spoke_square_never_goes_back() {
        let board = build_board();
        // Second spoke of arm 0: one side leads to the hub, the other toward headquarters 0.
        let result = find_reachable_squares(&board, 2, 2).unwrap();
        assert_eq!(result.keys().copied().collect::<Vec<_>>(), vec![0, 4]);

        let result = find_reachable_squares(&board, 2, 3).unwrap();
        assert_eq!(
            result.keys().copied().collect::<Vec<_>>(),
            vec![5, 7, 13, 19, 25, 31]
        );
    }

    #[test]
    fn two_steps_from_the_hub_reach_the_second_spokes() {
        let board = build_board();
        let result = find_reachable_squares(&board, 0, 2).unwrap();
        assert!(!result.contains_key(&0));
        let expected: BTreeSet<SquareId> = (0..6).map(|arm| first_spoke_id(arm) + 1).collect();
        assert_eq!(result.keys().copied().collect::<BTreeSet<_>>(), expected);
    }

    #[test]
    fn first_and_last_witness_offer_the_same_destinations() {
        let board = build_board();
        for start in [0, 6, 37, 55] {
            for steps in 1..=6 {
                let last = PathFinder::new(&board).find(start, steps).unwrap();
                let first = PathFinder::new(&board)
                    .with_witness(Witness::First)
                    .find(start, steps)
                    .unwrap();
                assert_eq!(
                    last.keys().collect::<Vec<_>>(),
                    first.keys().collect::<Vec<_>>()
                );
            }
        }
    }

    #[test]
    fn witness_choice_selects_different_walks() {
        let board = build_board();
        // Nineteen steps from the hub go out through one arm, along a ring segment, and back
        // through the next arm, in either direction.
        let mut finder = PathFinder::new(&board);
        let last = finder.find(0, 19).unwrap();
        assert!(finder.iteration > 0);
        let first = PathFinder::new(&board)
            .with_witness(Witness::First)
            .find(0, 19)
            .unwrap();

        let mut expected_first: Vec<SquareId> = (0..=6).collect();
        expected_first.extend(37..=42);
        expected_first.extend((7..=12).rev());
        expected_first.push(0);
        assert_eq!(first[&0].get(), &expected_first[..]);

        let mut expected_last: Vec<SquareId> = vec![0];
        expected_last.extend(31..=36);
        expected_last.extend(67..=72);
        expected_last.extend((1..=6).rev());
        expected_last.push(0);
        assert_eq!(last[&0].get(), &expected_last[..]);
    }

    #[test]
    fn invalid_start_square_is_an_error() {
        let board = build_board();
        assert_eq!(
            find_reachable_squares(&board, 73, 1),
            Err(PathFinderError::InvalidStartSquare(73))
        );
    }
}
