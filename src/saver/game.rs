/*
game.rs

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

//! Save and restore the game in progress.
//!
//! The saved object is a serialization of the [`Game`] object in JSON format by using
//! [`serde`].
//! The board and the state of the current turn are not saved. When the game is restored, the
//! board is rebuilt and the current player rolls the die.

use chrono::{DateTime, Local};
use log::debug;
use std::error::Error;
use std::fs::{File, remove_file};
use std::io::{BufReader, BufWriter, ErrorKind, Write};
use std::path::PathBuf;

use crate::config::SAVE_FILE_NAME;
use crate::game::Game;

/// Return the file name used when exporting a game, with the given timestamp.
pub fn export_file_name(when: DateTime<Local>) -> String {
    format!("trivia_save_{}.json", when.format("%Y-%m-%dT%H-%M-%S"))
}

/// Object to save and restore a game in progress.
pub struct SaverGame {
    /// Absolute path to the save file.
    save_file: PathBuf,
}

impl SaverGame {
    /// Create a [`SaverGame`] object.
    ///
    /// The provided [`PathBuf`] is the path to the directory where the game must be saved.
    pub fn new(mut data_dir: PathBuf) -> Self {
        data_dir.push(SAVE_FILE_NAME);
        debug!("Save game file: {data_dir:?}");
        SaverGame {
            save_file: data_dir,
        }
    }

    /// Return the path to the save file.
    pub fn path(&self) -> &PathBuf {
        &self.save_file
    }

    /// Retrieve the [`Game`] object for the saved game.
    ///
    /// Return the [`Game`] object or None if there is no saved game.
    pub fn get_game(&self) -> Result<Option<Game>, Box<dyn Error>> {
        let file: File;
        match File::open(&self.save_file) {
            Ok(f) => file = f,
            Err(error) => match error.kind() {
                ErrorKind::NotFound => return Ok(None),
                _ => return Err(Box::new(error)),
            },
        }
        let reader: BufReader<File> = BufReader::new(file);
        let mut game: Game = serde_json::from_reader(reader)?;
        game.restore()?;
        debug!("Game {} restored", game.game_id);
        Ok(Some(game))
    }

    /// Save the provided [`Game`] object.
    pub fn save_game(&self, game: &Game) -> Result<(), Box<dyn Error>> {
        let file: File = File::create(&self.save_file)?;
        let mut writer: BufWriter<File> = BufWriter::new(file);

        serde_json::to_writer_pretty(&mut writer, game)?;
        writer.flush()?;
        debug!("Game {} saved at {}", game.game_id, Local::now().format("%X"));
        Ok(())
    }

    /// Delete the saved game.
    pub fn delete_save(&self) {
        let _ = remove_file(&self.save_file);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::builder::headquarters_id;
    use crate::categories::{Categories, Preset};
    use crate::game::Phase;
    use chrono::TimeZone;
    use serde_json::{Value, json};
    use std::fs;
    use tempfile::tempdir;

    fn new_game(players: &[&str]) -> Game {
        Game::new(players, Categories::from(Preset::Classic), false).unwrap()
    }

    /// Write a save file from a game, after editing its JSON representation.
    fn write_edited(saver: &SaverGame, game: &Game, edit: impl FnOnce(&mut Value)) {
        let mut value: Value = serde_json::to_value(game).unwrap();
        edit(&mut value);
        fs::write(saver.path(), value.to_string()).unwrap();
    }

    #[test]
    fn missing_file_is_not_an_error() {
        let dir = tempdir().unwrap();
        let saver = SaverGame::new(dir.path().to_path_buf());
        assert!(saver.get_game().unwrap().is_none());
    }

    #[test]
    fn save_and_restore_rebuilds_the_board() {
        let dir = tempdir().unwrap();
        let saver = SaverGame::new(dir.path().to_path_buf());
        let mut game = Game::new(&["a", "b"], Categories::from(Preset::Science), true).unwrap();
        game.roll(2).unwrap();
        assert!(matches!(game.phase(), Phase::AwaitingMove { .. }));
        write_edited(&saver, &game, |v| {
            v["players"][1]["position"] = json!(headquarters_id(3));
            v["players"][1]["wedges"] = json!([3]);
        });

        let text = fs::read_to_string(saver.path()).unwrap();
        assert!(!text.contains("board"));
        assert!(!text.contains("possible_paths"));

        let restored = saver.get_game().unwrap().unwrap();
        assert_eq!(restored.game_id, game.game_id);
        assert_eq!(restored.players()[0], game.players()[0]);
        assert_eq!(restored.players()[1].position, headquarters_id(3));
        assert!(restored.players()[1].wedges.contains(&3));
        assert_eq!(restored.categories, game.categories);
        assert_eq!(restored.board(), game.board());
        assert_eq!(restored.phase(), Phase::AwaitingRoll);
        assert!(restored.possible_paths().is_empty());

        saver.save_game(&restored).unwrap();
        assert_eq!(saver.get_game().unwrap().unwrap(), restored);

        saver.delete_save();
        assert!(saver.get_game().unwrap().is_none());
    }

    #[test]
    fn restore_generates_a_missing_identifier() {
        let dir = tempdir().unwrap();
        let saver = SaverGame::new(dir.path().to_path_buf());
        write_edited(&saver, &new_game(&["a"]), |v| {
            v.as_object_mut().unwrap().remove("game_id");
        });
        let restored = saver.get_game().unwrap().unwrap();
        assert!(restored.game_id.starts_with("game-"));
    }

    #[test]
    fn restore_rejects_unknown_positions() {
        let dir = tempdir().unwrap();
        let saver = SaverGame::new(dir.path().to_path_buf());
        write_edited(&saver, &new_game(&["a"]), |v| {
            v["players"][0]["position"] = json!(500);
        });
        assert!(saver.get_game().is_err());
    }

    #[test]
    fn restore_rejects_invalid_categories() {
        let dir = tempdir().unwrap();
        let saver = SaverGame::new(dir.path().to_path_buf());
        write_edited(&saver, &new_game(&["a"]), |v| {
            v["categories"] = json!(["x", "", "z"]);
        });
        assert!(saver.get_game().is_err());

        write_edited(&saver, &new_game(&["a"]), |v| {
            v["categories"] = json!(["a", "b", "c", "d", "e", " "]);
        });
        assert!(saver.get_game().is_err());
    }

    #[test]
    fn restore_rejects_too_many_players() {
        let dir = tempdir().unwrap();
        let saver = SaverGame::new(dir.path().to_path_buf());
        let game = new_game(&["a"]);
        write_edited(&saver, &game, |v| {
            let player: Value = v["players"][0].clone();
            v["players"] = Value::Array(vec![player; 11]);
        });
        assert!(saver.get_game().is_err());
    }

    #[test]
    fn restore_rejects_unknown_wedges() {
        let dir = tempdir().unwrap();
        let saver = SaverGame::new(dir.path().to_path_buf());
        write_edited(&saver, &new_game(&["a"]), |v| {
            v["players"][0]["wedges"] = json!([9]);
        });
        assert!(saver.get_game().is_err());
    }

    #[test]
    fn restored_winner_finishes_the_game() {
        let dir = tempdir().unwrap();
        let saver = SaverGame::new(dir.path().to_path_buf());
        write_edited(&saver, &new_game(&["a", "b"]), |v| {
            v["players"][1]["wedges"] = json!([0, 1, 2, 3, 4, 5]);
        });
        let restored = saver.get_game().unwrap().unwrap();
        assert_eq!(restored.winner(), Some(1));
    }

    #[test]
    fn export_name_contains_the_timestamp() {
        let when = Local.with_ymd_and_hms(2025, 3, 4, 5, 6, 7).unwrap();
        assert_eq!(export_file_name(when), "trivia_save_2025-03-04T05-06-07.json");
    }
}
