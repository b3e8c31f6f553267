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

use rand::rngs::StdRng;
use serde::Serialize;
use super::config::Config;
use super::generator::{self, GenerateError};
use super::grid::{Grid, Position};
use super::message::{self, Message, MessageBoard, Severity};
use super::placement::{LocateError, PlacementIndex};
use super::selection::{self, Selection};
use super::theme::Theme;

// One theme’s puzzle.
#[derive(Debug, Clone)]
pub struct Level {
    theme_name: String,
    // Sorted longest first. Words are referred to by their index in
    // this list.
    words: Vec<String>,
    grid: Grid,
    placements: PlacementIndex,
    // Indices of the found words in the order they were found
    found: Vec<usize>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum GameState {
    Playing,
    LevelComplete,
    GameComplete,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct CellState {
    pub found: bool,
    pub selected: bool,
}

// What happened when a drag ended.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SelectionOutcome {
    // Fewer than two cells were selected
    Discarded,
    InvalidShape,
    NoMatch,
    Found {
        word: String,
        level_complete: bool,
    },
}

pub struct Game {
    config: Config,
    themes: Vec<Theme>,
    level_num: usize,
    level: Option<Level>,
    state: GameState,
    selecting: bool,
    selection: Selection,
    messages: MessageBoard,
    rng: StdRng,
}

impl Level {
    pub fn generate(
        theme: &Theme,
        config: &Config,
        rng: &mut StdRng,
    ) -> Result<Level, GenerateError> {
        let words = theme.longest_first();

        let (grid, placements) = generator::generate_with_retries(
            &words,
            config.grid_size,
            config.placement_attempts,
            rng,
        )?;

        Ok(Level::new(theme, words, grid, placements))
    }

    // Makes a level from a grid that already has the theme’s words
    // written in it, for example one printed by `generate-grid`.
    pub fn from_grid(theme: &Theme, grid: Grid) -> Result<Level, LocateError> {
        let words = theme.longest_first();
        let placements = PlacementIndex::locate(&grid, &words)?;

        Ok(Level::new(theme, words, grid, placements))
    }

    fn new(
        theme: &Theme,
        words: Vec<String>,
        grid: Grid,
        placements: PlacementIndex,
    ) -> Level {
        Level {
            theme_name: theme.name().to_string(),
            words,
            grid,
            placements,
            found: Vec::new(),
        }
    }

    pub fn theme_name(&self) -> &str {
        &self.theme_name
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn placements(&self) -> &PlacementIndex {
        &self.placements
    }

    pub fn is_word_found(&self, word_num: usize) -> bool {
        self.found.contains(&word_num)
    }

    // Whether the cell belongs to a word that has been found.
    pub fn is_cell_found(&self, position: Position) -> bool {
        self.placements
            .words_at(position)
            .iter()
            .any(|&word_num| self.is_word_found(word_num))
    }

    pub fn found_words(&self) -> impl Iterator<Item = &str> {
        self.found.iter().map(|&word_num| self.words[word_num].as_str())
    }

    pub fn n_found(&self) -> usize {
        self.found.len()
    }

    pub fn is_complete(&self) -> bool {
        self.found.len() >= self.words.len()
    }

    // Looks for a word that hasn’t been found yet to match the
    // selected cells, which must be sorted row-major. A word placed on
    // exactly those cells wins, then one matching the letters forwards
    // and lastly one matching them backwards.
    fn find_remaining_word(
        &self,
        cells: &[Position],
        letters: &str,
    ) -> Option<usize> {
        let remaining = || {
            (0..self.words.len())
                .filter(move |&word_num| !self.is_word_found(word_num))
        };

        let placed = remaining().find(|&word_num| {
            self.placements.placement(word_num).map(|placement| {
                placement.positions().eq(cells.iter().copied())
            }).unwrap_or(false)
        });

        if placed.is_some() {
            return placed;
        }

        let reversed = letters.chars().rev().collect::<String>();

        remaining()
            .find(|&word_num| self.words[word_num] == letters)
            .or_else(|| {
                remaining().find(|&word_num| self.words[word_num] == reversed)
            })
    }

    fn mark_found(&mut self, word_num: usize) {
        if !self.is_word_found(word_num) {
            self.found.push(word_num);
        }
    }
}

impl Game {
    // Starts a game at the first theme. Fails if the first theme’s
    // words can’t be placed. A game with no themes is already
    // complete.
    pub fn new(themes: Vec<Theme>, config: Config) -> Result<Game, GenerateError> {
        Game::new_at_level(themes, config, 0)
    }

    // Starts a game at the theme with the index `level_num`.
    pub fn new_at_level(
        themes: Vec<Theme>,
        config: Config,
        level_num: usize,
    ) -> Result<Game, GenerateError> {
        let rng = config.make_rng();

        let mut game = Game {
            messages: MessageBoard::new(config.message_timeout),
            config,
            themes,
            level_num: 0,
            level: None,
            state: GameState::Playing,
            selecting: false,
            selection: Selection::new(),
            rng,
        };

        game.load_level(level_num)?;

        Ok(game)
    }

    // Starts a game on a level that was made elsewhere, such as
    // with `Level::from_grid`. `level_num` is the index of the
    // level’s theme in `themes`.
    pub fn with_level(
        themes: Vec<Theme>,
        config: Config,
        level_num: usize,
        level: Level,
    ) -> Game {
        assert!(level_num < themes.len());

        let level_complete = level.is_complete();

        let mut game = Game {
            messages: MessageBoard::new(config.message_timeout),
            rng: config.make_rng(),
            config,
            themes,
            level_num,
            level: Some(level),
            state: GameState::Playing,
            selecting: false,
            selection: Selection::new(),
        };

        if level_complete {
            game.complete_level();
        }

        game
    }

    // The current level is left alone if the new one can’t be made
    fn load_level(&mut self, level_num: usize) -> Result<(), GenerateError> {
        let level = match self.themes.get(level_num) {
            Some(theme) => {
                let level =
                    Level::generate(theme, &self.config, &mut self.rng)?;

                log::info!(
                    "level {}/{}: {}",
                    level_num + 1,
                    self.themes.len(),
                    theme.name(),
                );

                Some(level)
            },
            None => None,
        };

        self.level_num = level_num;
        self.selecting = false;
        self.selection.clear();
        self.messages.clear();

        match level {
            // A theme without words has nothing to find
            Some(level) if level.is_complete() => {
                self.level = Some(level);
                self.complete_level();
            },
            Some(level) => {
                self.level = Some(level);
                self.state = GameState::Playing;
            },
            None => self.finish_game(),
        }

        Ok(())
    }

    fn complete_level(&mut self) {
        self.state = GameState::LevelComplete;
        self.messages.show(
            message::LEVEL_COMPLETE_TEXT.to_string(),
            Severity::LevelComplete,
        );
    }

    fn finish_game(&mut self) {
        log::info!("all levels complete");

        self.level = None;
        self.state = GameState::GameComplete;
        self.messages.show(
            message::GAME_COMPLETE_TEXT.to_string(),
            Severity::LevelComplete,
        );
    }

    // Moves on to the next theme. After the last theme the game is
    // complete. Does nothing once the game is complete.
    pub fn advance_level(&mut self) -> Result<(), GenerateError> {
        if self.state == GameState::GameComplete {
            return Ok(());
        }

        self.load_level(self.level_num + 1)
    }

    // The level if it’s accepting selections
    fn playing_level(&self) -> Option<&Level> {
        if self.state == GameState::Playing {
            self.level.as_ref()
        } else {
            None
        }
    }

    fn is_selectable(&self, position: Position) -> bool {
        self.playing_level().map(|level| {
            level.grid().contains(position) && !level.is_cell_found(position)
        }).unwrap_or(false)
    }

    pub fn begin_selection(&mut self, row: usize, col: usize) {
        let position = Position::new(row, col);

        if !self.is_selectable(position) {
            return;
        }

        self.selecting = true;
        self.selection.clear();
        self.selection.add(position);
    }

    // Returns true if the cell was added to the selection.
    pub fn extend_selection(&mut self, row: usize, col: usize) -> bool {
        let position = Position::new(row, col);

        self.selecting
            && self.is_selectable(position)
            && self.selection.add(position)
    }

    // Drops the current selection without checking it.
    pub fn clear_selection(&mut self) {
        self.selecting = false;
        self.selection.clear();
    }

    // Ends the drag and checks the selected cells. Returns `None` if
    // there was no drag in progress.
    pub fn end_selection(&mut self) -> Option<SelectionOutcome> {
        if !self.selecting || self.selection.is_empty() {
            self.selecting = false;
            return None;
        }

        self.selecting = false;

        let outcome = self.resolve_selection();

        self.selection.clear();

        Some(outcome)
    }

    fn resolve_selection(&mut self) -> SelectionOutcome {
        let cells = self.selection.sorted();

        if cells.len() < 2 {
            return SelectionOutcome::Discarded;
        }

        let Some(level) = self.level.as_mut()
        else {
            return SelectionOutcome::Discarded;
        };

        if selection::line_step(&cells).is_none() {
            self.messages.show(
                message::STRAIGHT_LINE_TEXT.to_string(),
                Severity::Error,
            );
            return SelectionOutcome::InvalidShape;
        }

        let letters = cells.iter()
            .map(|&position| level.grid().letter(position))
            .collect::<String>();

        let Some(word_num) = level.find_remaining_word(&cells, &letters)
        else {
            self.messages.show(
                message::NOT_IN_THEME_TEXT.to_string(),
                Severity::Error,
            );
            return SelectionOutcome::NoMatch;
        };

        level.mark_found(word_num);

        let word = level.words()[word_num].clone();
        let level_complete = level.is_complete();

        log::debug!("found {} ({}/{})",
                    word,
                    level.n_found(),
                    level.words().len());

        self.messages.show(message::found_text(&word), Severity::Success);

        if level_complete {
            self.complete_level();
        }

        SelectionOutcome::Found { word, level_complete }
    }

    // Called by the presentation layer when the timeout for a message
    // expires.
    pub fn dismiss_message(&mut self, generation: u64) -> bool {
        self.messages.dismiss(generation)
    }

    pub fn message(&self) -> Option<&Message> {
        self.messages.current()
    }

    pub fn message_timeout(&self, severity: Severity) -> Option<std::time::Duration> {
        self.messages.timeout(severity)
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn is_selecting(&self) -> bool {
        self.selecting
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn level(&self) -> Option<&Level> {
        self.level.as_ref()
    }

    pub fn grid(&self) -> Option<&Grid> {
        self.level.as_ref().map(Level::grid)
    }

    pub fn theme_name(&self) -> Option<&str> {
        self.level.as_ref().map(Level::theme_name)
    }

    // Zero-based index of the current level.
    pub fn level_num(&self) -> usize {
        self.level_num
    }

    pub fn n_levels(&self) -> usize {
        self.themes.len()
    }

    pub fn cell_state(&self, position: Position) -> CellState {
        CellState {
            found: self.level
                .as_ref()
                .map(|level| level.is_cell_found(position))
                .unwrap_or(false),
            selected: self.selection.contains(position),
        }
    }

    pub fn found_words(&self) -> Vec<&str> {
        self.level
            .as_ref()
            .map(|level| level.found_words().collect())
            .unwrap_or_default()
    }

    // Number of words found and the total number of words.
    pub fn progress(&self) -> (usize, usize) {
        self.level
            .as_ref()
            .map(|level| (level.n_found(), level.words().len()))
            .unwrap_or((0, 0))
    }

    pub fn progress_fraction(&self) -> f64 {
        match self.progress() {
            (_, 0) => 0.0,
            (found, total) => found as f64 / total as f64,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::theme;

    fn seeded_config(seed: u64) -> Config {
        Config { seed: Some(seed), ..Config::default() }
    }

    fn cat_dog_game(seed: u64) -> Game {
        Game::new(
            vec![Theme::new("Животные", ["CAT", "DOG"])],
            Config { grid_size: 5, ..seeded_config(seed) },
        ).unwrap()
    }

    fn word_cells(game: &Game, word: &str) -> Vec<Position> {
        let level = game.level().unwrap();
        let word_num = level.words().iter().position(|w| w == word).unwrap();

        level.placements().placement(word_num).unwrap().positions().collect()
    }

    fn drag(game: &mut Game, cells: &[Position]) -> Option<SelectionOutcome> {
        let (first, rest) = cells.split_first().unwrap();

        game.begin_selection(first.row, first.col);

        for cell in rest {
            game.extend_selection(cell.row, cell.col);
        }

        game.end_selection()
    }

    // Level with a fixed grid. “КОТ” is on the first row, “ДОМ” runs
    // down the first column and “ЁЖ” is on the last row.
    fn fixed_game() -> Game {
        fixed_game_then(Theme::new("Звери", ["ЛИС"]))
    }

    fn fixed_game_then(next_theme: Theme) -> Game {
        let themes = vec![
            Theme::new("Дом", ["КОТ", "ДОМ", "ЁЖ"]),
            next_theme,
        ];
        let grid = "АКОТ\n\
                    ДЫЬЪ\n\
                    ОЩШЧ\n\
                    МЦЁЖ"
            .parse::<Grid>().unwrap();
        let level = Level::from_grid(&themes[0], grid).unwrap();

        Game::with_level(themes, seeded_config(1), 0, level)
    }

    #[test]
    fn cat_and_dog() {
        for seed in 0..20 {
            let mut game = cat_dog_game(seed);

            assert_eq!(game.state(), GameState::Playing);
            assert_eq!(game.progress(), (0, 2));

            let cells = word_cells(&game, "CAT");
            let outcome = drag(&mut game, &cells);
            assert_eq!(
                outcome,
                Some(SelectionOutcome::Found {
                    word: "CAT".to_string(),
                    level_complete: false,
                }),
            );
            assert_eq!(game.message().unwrap().text, "Найдено: CAT!");
            assert_eq!(game.message().unwrap().severity, Severity::Success);
            assert_eq!(game.state(), GameState::Playing);
            assert_eq!(game.progress_fraction(), 0.5);

            let cells = word_cells(&game, "DOG");
            let outcome = drag(&mut game, &cells);
            assert_eq!(
                outcome,
                Some(SelectionOutcome::Found {
                    word: "DOG".to_string(),
                    level_complete: true,
                }),
            );
            assert_eq!(game.state(), GameState::LevelComplete);
            assert_eq!(
                game.message().unwrap().severity,
                Severity::LevelComplete,
            );
            assert_eq!(game.found_words(), &["CAT", "DOG"]);
            assert_eq!(game.progress(), (2, 2));
        }
    }

    #[test]
    fn reversed_drag() {
        let mut game = cat_dog_game(3);
        let mut cells = word_cells(&game, "DOG");

        cells.reverse();

        assert!(matches!(
            drag(&mut game, &cells),
            Some(SelectionOutcome::Found { .. }),
        ));
    }

    #[test]
    fn found_cells_are_unselectable() {
        let mut game = fixed_game();

        let cat = [
            Position::new(0, 1),
            Position::new(0, 2),
            Position::new(0, 3),
        ];

        assert!(matches!(
            drag(&mut game, &cat),
            Some(SelectionOutcome::Found { .. }),
        ));

        for cell in cat.iter() {
            assert!(game.cell_state(*cell).found);
        }

        // Starting on a found cell doesn’t start a drag
        game.begin_selection(0, 2);
        assert!(!game.is_selecting());
        assert_eq!(game.end_selection(), None);

        // Found cells are skipped when extending
        game.begin_selection(0, 0);
        assert!(!game.extend_selection(0, 1));
        assert!(game.extend_selection(1, 0));
        assert_eq!(game.selection().len(), 2);

        assert_eq!(game.progress(), (1, 3));
    }

    #[test]
    fn extend_is_idempotent() {
        let mut game = fixed_game();

        game.begin_selection(3, 2);
        assert!(game.extend_selection(3, 3));
        assert!(!game.extend_selection(3, 3));
        assert!(!game.extend_selection(3, 2));

        assert_eq!(game.selection().len(), 2);
        assert!(game.cell_state(Position::new(3, 3)).selected);

        assert_eq!(
            game.end_selection(),
            Some(SelectionOutcome::Found {
                word: "ЁЖ".to_string(),
                level_complete: false,
            }),
        );
        assert!(game.selection().is_empty());
    }

    #[test]
    fn extend_without_begin() {
        let mut game = fixed_game();

        assert!(!game.extend_selection(0, 0));
        assert!(game.selection().is_empty());
        assert_eq!(game.end_selection(), None);
    }

    #[test]
    fn l_shape() {
        let mut game = fixed_game();

        let outcome = drag(
            &mut game,
            &[Position::new(0, 0), Position::new(0, 1), Position::new(1, 1)],
        );

        assert_eq!(outcome, Some(SelectionOutcome::InvalidShape));
        assert_eq!(
            game.message().unwrap().text,
            message::STRAIGHT_LINE_TEXT,
        );
        assert_eq!(game.message().unwrap().severity, Severity::Error);
        assert_eq!(game.progress(), (0, 3));
        assert!(game.selection().is_empty());
        assert!(!game.is_selecting());
    }

    #[test]
    fn no_match() {
        let mut game = fixed_game();

        // “ЫШЖ” diagonally down-right is a straight line but not a word
        let outcome = drag(
            &mut game,
            &[Position::new(1, 1), Position::new(2, 2), Position::new(3, 3)],
        );

        assert_eq!(outcome, Some(SelectionOutcome::NoMatch));
        assert_eq!(game.message().unwrap().text, message::NOT_IN_THEME_TEXT);
        assert_eq!(game.progress(), (0, 3));
        assert!(game.found_words().is_empty());
    }

    #[test]
    fn single_cell() {
        let mut game = fixed_game();

        game.begin_selection(2, 2);
        assert_eq!(game.end_selection(), Some(SelectionOutcome::Discarded));
        assert!(game.message().is_none());
        assert!(game.selection().is_empty());
    }

    #[test]
    fn out_of_grid() {
        let mut game = fixed_game();

        game.begin_selection(4, 0);
        assert!(!game.is_selecting());

        game.begin_selection(3, 2);
        assert!(!game.extend_selection(3, 4));
        assert_eq!(game.selection().len(), 1);
    }

    #[test]
    fn clear_selection() {
        let mut game = fixed_game();

        game.begin_selection(0, 1);
        game.extend_selection(0, 2);
        game.clear_selection();

        assert!(!game.is_selecting());
        assert!(game.selection().is_empty());
        assert_eq!(game.end_selection(), None);
        assert!(game.message().is_none());
    }

    #[test]
    fn word_is_only_found_once() {
        let mut game = fixed_game();

        // Dragged from the bottom of the column up
        let dom = [
            Position::new(3, 0),
            Position::new(2, 0),
            Position::new(1, 0),
        ];

        assert!(matches!(
            drag(&mut game, &dom),
            Some(SelectionOutcome::Found { .. }),
        ));
        assert_eq!(drag(&mut game, &dom), None);
        assert_eq!(game.found_words(), &["ДОМ"]);
    }

    fn reversed_pair_game(grid: &str) -> Game {
        let themes = vec![Theme::new("Перевёртыши", ["ТОК", "КОТ"])];
        let grid = grid.parse::<Grid>().unwrap();
        let level = Level::from_grid(&themes[0], grid).unwrap();

        Game::with_level(themes, seeded_config(1), 0, level)
    }

    #[test]
    fn reversed_pair() {
        // “КОТ” is on the first row and “ТОК” runs down the last column
        let mut game = reversed_pair_game("КОТЯ\nЯЯЯТ\nЯЯЯО\nЯЯЯК");

        let kot = [
            Position::new(0, 0),
            Position::new(0, 1),
            Position::new(0, 2),
        ];

        assert_eq!(
            drag(&mut game, &kot),
            Some(SelectionOutcome::Found {
                word: "КОТ".to_string(),
                level_complete: false,
            }),
        );
        assert!(game.cell_state(Position::new(0, 0)).found);
        assert!(!game.cell_state(Position::new(2, 3)).found);

        // Dragged from the bottom up
        let tok = [
            Position::new(3, 3),
            Position::new(2, 3),
            Position::new(1, 3),
        ];

        assert_eq!(
            drag(&mut game, &tok),
            Some(SelectionOutcome::Found {
                word: "ТОК".to_string(),
                level_complete: true,
            }),
        );
        assert_eq!(game.found_words(), &["КОТ", "ТОК"]);
    }

    #[test]
    fn forward_match_first() {
        // The last row spells “КОТ” again outside of any placement
        let mut game = reversed_pair_game("КОТЯ\nЯЯЯТ\nЯЯЯО\nКОТК");

        let cells = [
            Position::new(3, 0),
            Position::new(3, 1),
            Position::new(3, 2),
        ];

        assert_eq!(
            drag(&mut game, &cells),
            Some(SelectionOutcome::Found {
                word: "КОТ".to_string(),
                level_complete: false,
            }),
        );
        assert!(game.cell_state(Position::new(0, 1)).found);
        assert!(!game.cell_state(Position::new(1, 3)).found);
    }

    #[test]
    fn theme_without_words() {
        let mut game = Game::new(
            vec![
                Theme::new("Пусто", Vec::<&str>::new()),
                Theme::new("Звери", ["ЛИС"]),
            ],
            seeded_config(5),
        ).unwrap();

        assert_eq!(game.state(), GameState::LevelComplete);
        assert_eq!(game.progress(), (0, 0));
        assert_eq!(game.message().unwrap().text, message::LEVEL_COMPLETE_TEXT);

        game.advance_level().unwrap();

        assert_eq!(game.state(), GameState::Playing);
        assert_eq!(game.theme_name(), Some("Звери"));
    }

    #[test]
    fn level_complete_once() {
        let mut game = fixed_game();

        let words: [&[Position]; 3] = [
            &[Position::new(0, 1), Position::new(0, 2), Position::new(0, 3)],
            &[Position::new(1, 0), Position::new(2, 0), Position::new(3, 0)],
            &[Position::new(3, 2), Position::new(3, 3)],
        ];

        let mut completions = 0;

        for cells in words {
            if let Some(SelectionOutcome::Found { level_complete: true, .. }) =
                drag(&mut game, cells)
            {
                completions += 1;
            }
        }

        assert_eq!(completions, 1);
        assert_eq!(game.state(), GameState::LevelComplete);

        // The level is over so nothing more can be selected
        game.begin_selection(2, 2);
        assert!(!game.is_selecting());

        // The level complete message doesn’t time out
        let generation = game.message().unwrap().generation;
        assert!(!game.dismiss_message(generation));
        assert_eq!(game.message().unwrap().text, message::LEVEL_COMPLETE_TEXT);
        assert_eq!(game.message_timeout(Severity::LevelComplete), None);
    }

    #[test]
    fn advance_to_game_complete() {
        let mut game = fixed_game();

        assert_eq!(game.level_num(), 0);
        assert_eq!(game.n_levels(), 2);

        game.advance_level().unwrap();

        assert_eq!(game.level_num(), 1);
        assert_eq!(game.theme_name(), Some("Звери"));
        assert_eq!(game.state(), GameState::Playing);
        assert_eq!(game.progress(), (0, 1));
        assert_eq!(game.grid().unwrap().size(), 12);
        assert!(game.message().is_none());

        game.advance_level().unwrap();

        assert_eq!(game.state(), GameState::GameComplete);
        assert!(game.level().is_none());
        assert_eq!(game.message().unwrap().text, message::GAME_COMPLETE_TEXT);

        // Nothing happens after the last level
        game.advance_level().unwrap();
        assert_eq!(game.state(), GameState::GameComplete);
        assert_eq!(game.level_num(), 2);
    }

    #[test]
    fn failed_advance_keeps_level() {
        let mut game = fixed_game_then(
            Theme::new("Длинное", ["ДОСТОПРИМЕЧАТЕЛЬНОСТЬ"]),
        );

        game.begin_selection(0, 1);

        assert_eq!(
            game.advance_level(),
            Err(GenerateError::UnplaceableWord(
                "ДОСТОПРИМЕЧАТЕЛЬНОСТЬ".to_string(),
            )),
        );

        assert_eq!(game.level_num(), 0);
        assert_eq!(game.theme_name(), Some("Дом"));
        assert_eq!(game.state(), GameState::Playing);
        assert!(game.is_selecting());
    }

    #[test]
    fn transient_messages() {
        let mut game = fixed_game();

        drag(&mut game, &[Position::new(1, 1), Position::new(1, 3)]);
        let first = game.message().unwrap().generation;

        drag(&mut game, &[Position::new(2, 1), Position::new(2, 2)]);
        let second = game.message().unwrap().generation;

        // The first message’s timer must not hide the second one
        assert!(!game.dismiss_message(first));
        assert!(game.message().is_some());

        assert_eq!(
            game.message_timeout(game.message().unwrap().severity),
            Some(std::time::Duration::from_millis(2000)),
        );

        assert!(game.dismiss_message(second));
        assert!(game.message().is_none());
    }

    #[test]
    fn unplaceable_word() {
        let result = Game::new(
            vec![Theme::new("Длинное", ["ПОСВЯЩЕНИЕ"])],
            Config { grid_size: 5, ..seeded_config(2) },
        );

        assert_eq!(
            result.err(),
            Some(GenerateError::UnplaceableWord("ПОСВЯЩЕНИЕ".to_string())),
        );
    }

    #[test]
    fn start_at_level() {
        let game = Game::new_at_level(
            theme::builtin_themes(),
            seeded_config(4),
            3,
        ).unwrap();

        assert_eq!(game.level_num(), 3);
        assert_eq!(game.theme_name(), Some("Мифические существа"));
        assert_eq!(game.progress(), (0, 7));

        let game = Game::new_at_level(
            theme::builtin_themes(),
            seeded_config(4),
            4,
        ).unwrap();

        assert_eq!(game.state(), GameState::GameComplete);
    }

    #[test]
    fn no_themes() {
        let game = Game::new(Vec::new(), seeded_config(0)).unwrap();

        assert_eq!(game.state(), GameState::GameComplete);
        assert_eq!(game.progress(), (0, 0));
        assert_eq!(game.progress_fraction(), 0.0);
    }

    #[test]
    fn builtin_themes() {
        let mut game = Game::new(theme::builtin_themes(), seeded_config(9))
            .unwrap();

        for level_num in 0..4 {
            assert_eq!(game.level_num(), level_num);

            let words = game.level().unwrap().words().to_vec();

            // Placement order is longest first
            for pair in words.windows(2) {
                assert!(pair[0].chars().count() >= pair[1].chars().count());
            }

            for word in words.iter() {
                let cells = word_cells(&game, word);
                assert!(matches!(
                    drag(&mut game, &cells),
                    Some(SelectionOutcome::Found { .. }),
                ));
            }

            assert_eq!(game.state(), GameState::LevelComplete);

            game.advance_level().unwrap();
        }

        assert_eq!(game.state(), GameState::GameComplete);
    }
}
