/*
categories.rs

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

//! Game categories.
//!
//! The six category names are only labels: the board refers to categories by their index.
//! Replacing a name (category mutation) never changes the board.

use clap::ValueEnum;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt;
use strum_macros::FromRepr;

use crate::config::{CATEGORY_COLORS, CATEGORY_COUNT};

/// Type of errors.
#[derive(Debug, PartialEq)]
pub enum CategoryError {
    /// The number of names is not [`CATEGORY_COUNT`].
    WrongCount(usize),

    /// The name at the given index is blank.
    Empty(usize),

    /// The index is not a category index.
    InvalidIndex(usize),
}

impl fmt::Display for CategoryError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            CategoryError::WrongCount(n) => {
                write!(f, "{CATEGORY_COUNT} categories are required, got {n}")
            }
            CategoryError::Empty(i) => write!(f, "Category {} has no name", i + 1),
            CategoryError::InvalidIndex(i) => write!(f, "No category at index {i}"),
        }
    }
}

impl Error for CategoryError {}

/// Predefined category sets.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, ValueEnum, FromRepr)]
#[repr(usize)]
pub enum Preset {
    #[default]
    Classic,
    Modern,
    Science,
    Cinema,
    VideoGames,
    Travel,
}

/// Number of entries in [`Preset`].
const PRESET_COUNT: usize = 6;

impl Preset {
    /// Category names of the preset.
    pub fn names(&self) -> [&'static str; CATEGORY_COUNT] {
        match self {
            Preset::Classic => [
                "History",
                "Geography",
                "Science",
                "Culture & Art",
                "Sports",
                "Media & Entertainment",
            ],
            Preset::Modern => [
                "Current Events",
                "Technology",
                "Pop Culture",
                "Scientific Discoveries",
                "Politics",
                "Internet & Social Media",
            ],
            Preset::Science => [
                "Physics",
                "Chemistry",
                "Biology",
                "Astronomy",
                "Mathematics",
                "Great Discoverers",
            ],
            Preset::Cinema => [
                "History of Cinema",
                "Film Genres",
                "Directors",
                "Actors",
                "Film Awards",
                "Cult Movies",
            ],
            Preset::VideoGames => [
                "History of Games",
                "Series & Characters",
                "Consoles",
                "Genres",
                "Gaming Culture",
                "E-sports",
            ],
            Preset::Travel => [
                "Continents",
                "Countries",
                "Cities",
                "Landmarks",
                "Natural Wonders",
                "Cultures & Traditions",
            ],
        }
    }

    /// Return a random preset.
    pub fn random() -> Self {
        let i: usize = rand::rng().random_range(0..PRESET_COUNT);
        Preset::from_repr(i).unwrap_or_default()
    }
}

/// The six category names, indexed by category.
///
/// Serialized as a list of names. Deserializing checks the names like [`Categories::new`].
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct Categories {
    names: Vec<String>,
}

impl TryFrom<Vec<String>> for Categories {
    type Error = CategoryError;

    fn try_from(names: Vec<String>) -> Result<Self, Self::Error> {
        Categories::new(&names)
    }
}

impl From<Categories> for Vec<String> {
    fn from(categories: Categories) -> Self {
        categories.names
    }
}

impl From<Preset> for Categories {
    fn from(preset: Preset) -> Self {
        Self {
            names: preset.names().iter().map(|n| n.to_string()).collect(),
        }
    }
}

impl Categories {
    /// Create a [`Categories`] object.
    ///
    /// # Errors
    ///
    /// Exactly [`CATEGORY_COUNT`] names are required, and none can be blank.
    pub fn new<S: AsRef<str>>(names: &[S]) -> Result<Self, CategoryError> {
        if names.len() != CATEGORY_COUNT {
            return Err(CategoryError::WrongCount(names.len()));
        }
        if let Some(i) = names.iter().position(|n| n.as_ref().trim().is_empty()) {
            return Err(CategoryError::Empty(i));
        }
        Ok(Self {
            names: names.iter().map(|n| n.as_ref().trim().to_string()).collect(),
        })
    }

    /// Return the name of the category.
    pub fn name(&self, index: usize) -> Option<&str> {
        self.names.get(index).map(|n| n.as_str())
    }

    /// Return all the names.
    pub fn names(&self) -> &[String] {
        &self.names[..]
    }

    /// Return the color of the category.
    pub fn color(index: usize) -> Option<&'static str> {
        CATEGORY_COLORS.get(index).copied()
    }

    /// Replace the name of a category and return the previous name.
    ///
    /// # Errors
    ///
    /// The method fails if the index is not a category index or if the name is blank.
    pub fn mutate(&mut self, index: usize, name: &str) -> Result<String, CategoryError> {
        if index >= self.names.len() {
            return Err(CategoryError::InvalidIndex(index));
        }
        if name.trim().is_empty() {
            return Err(CategoryError::Empty(index));
        }
        Ok(std::mem::replace(
            &mut self.names[index],
            name.trim().to_string(),
        ))
    }
}
