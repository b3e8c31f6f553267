// Vortarkivo – A themed word search game
// Copyright (C) 2025  Neil Roberts
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <http://www.gnu.org/licenses/>.

use serde::Serialize;
use super::grid::Position;
use super::message::Message;
use super::session::{Game, GameState, CellState};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Cell {
    pub letter: char,
    #[serde(flatten)]
    pub state: CellState,
}

// Everything a front end needs to draw the game, copied out so
// that it can be kept after the game changes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    pub state: GameState,
    // One-based
    pub level: usize,
    pub n_levels: usize,
    pub theme: Option<String>,
    pub cells: Vec<Vec<Cell>>,
    pub found_words: Vec<String>,
    pub n_found: usize,
    pub n_words: usize,
    pub progress: f64,
    pub message: Option<Message>,
    // Milliseconds until the message should be dismissed
    pub message_timeout: Option<u64>,
}

impl Snapshot {
    pub fn new(game: &Game) -> Snapshot {
        let cells = game.grid().map(|grid| {
            (0..grid.size()).map(|row| {
                (0..grid.size()).map(|col| {
                    let position = Position::new(row, col);

                    Cell {
                        letter: grid.letter(position),
                        state: game.cell_state(position),
                    }
                }).collect()
            }).collect()
        }).unwrap_or_default();

        let (n_found, n_words) = game.progress();
        let message = game.message().cloned();

        let message_timeout = message.as_ref()
            .and_then(|message| game.message_timeout(message.severity))
            .map(|timeout| timeout.as_millis() as u64);

        Snapshot {
            state: game.state(),
            level: (game.level_num() + 1).min(game.n_levels()),
            n_levels: game.n_levels(),
            theme: game.theme_name().map(str::to_string),
            cells,
            found_words: game.found_words()
                .into_iter()
                .map(str::to_string)
                .collect(),
            n_found,
            n_words,
            progress: game.progress_fraction(),
            message,
            message_timeout,
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::config::Config;
    use crate::grid::Grid;
    use crate::session::Level;
    use crate::theme::Theme;

    fn small_game() -> Game {
        let themes = vec![Theme::new("Звери", ["ЁЖ", "ЯК"])];
        let grid = "ЁЖ\nЯК".parse::<Grid>().unwrap();
        let level = Level::from_grid(&themes[0], grid).unwrap();

        Game::with_level(themes, Config::default(), 0, level)
    }

    #[test]
    fn snapshot() {
        let mut game = small_game();

        game.begin_selection(0, 0);
        game.extend_selection(0, 1);
        game.end_selection();
        game.begin_selection(1, 1);

        let snapshot = Snapshot::new(&game);

        assert_eq!(snapshot.state, GameState::Playing);
        assert_eq!(snapshot.level, 1);
        assert_eq!(snapshot.n_levels, 1);
        assert_eq!(snapshot.theme.as_deref(), Some("Звери"));
        assert_eq!(snapshot.found_words, &["ЁЖ"]);
        assert_eq!((snapshot.n_found, snapshot.n_words), (1, 2));
        assert_eq!(snapshot.progress, 0.5);
        assert_eq!(snapshot.message_timeout, Some(2000));

        assert_eq!(
            snapshot.cells[0][1],
            Cell {
                letter: 'Ж',
                state: CellState { found: true, selected: false },
            },
        );
        assert_eq!(
            snapshot.cells[1][1],
            Cell {
                letter: 'К',
                state: CellState { found: false, selected: true },
            },
        );
    }

    #[test]
    fn json() {
        let mut game = small_game();

        game.begin_selection(1, 0);
        game.extend_selection(1, 1);
        game.end_selection();

        let value = serde_json::from_str::<serde_json::Value>(
            &Snapshot::new(&game).to_json().unwrap(),
        ).unwrap();

        assert_eq!(value["state"], "playing");
        assert_eq!(value["theme"], "Звери");
        assert_eq!(value["cells"][1][0]["letter"], "Я");
        assert_eq!(value["cells"][1][0]["found"], true);
        assert_eq!(value["cells"][0][0]["selected"], false);
        assert_eq!(value["message"]["text"], "Найдено: ЯК!");
        assert_eq!(value["message"]["severity"], "success");
        assert_eq!(value["found_words"][0], "ЯК");
    }

    #[test]
    fn game_complete() {
        let mut game = small_game();

        game.advance_level().unwrap();

        let snapshot = Snapshot::new(&game);

        assert_eq!(snapshot.state, GameState::GameComplete);
        assert_eq!(snapshot.level, 1);
        assert!(snapshot.cells.is_empty());
        assert!(snapshot.theme.is_none());
        assert_eq!(snapshot.message_timeout, None);
        assert!(snapshot.to_json().unwrap().contains("\"level-complete\""));
    }
}
