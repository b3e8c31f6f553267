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

use std::fmt;
use std::path::Path;
use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    name: String,
    words: Vec<String>,
}

// Theme as it appears in a themes file before being normalised
#[derive(Deserialize)]
struct ThemeEntry {
    name: String,
    words: Vec<String>,
}

#[derive(Debug)]
pub enum LoadThemesError {
    Io(std::io::Error),
    Json(serde_json::Error),
    NoThemes,
    NoWords(usize),
    ShortWord(usize, String),
}

// A word has to span at least two cells to be selectable
pub const MIN_WORD_LENGTH: usize = 2;

static BUILTIN_THEMES: [(&str, &[&str]); 4] = [
    (
        "Артефакты",
        &[
            "АМУЛЕТ", "ПОСОХ", "ГРИМУАР", "КРИСТАЛЛ",
            "СВИТОК", "ТАЛИСМАН", "ПЕРСТЕНЬ",
        ],
    ),
    (
        "Магические ритуалы",
        &[
            "ЗАКЛИНАНИЕ", "ОБРЯД", "ПРИВОРОТ", "ЛЕВИТАЦИЯ",
            "ПРИЗЫВ", "МЕДИТАЦИЯ", "ПОСВЯЩЕНИЕ",
        ],
    ),
    (
        "Ингредиенты для зелья",
        &[
            "МАНДРАГОРА", "ЛАВАНДА", "ПОЛЫНЬ", "СЕРА",
            "РТУТЬ", "ЗОЛА", "РОСА",
        ],
    ),
    (
        "Мифические существа",
        &[
            "ФЕНИКС", "ВАСИЛИСК", "СФИНКС", "ГОБЛИН",
            "ЕДИНОРОГ", "СИРЕНА", "ГРИФОН",
        ],
    ),
];

impl Theme {
    // Words are converted to uppercase and only the first copy of
    // a repeated word is kept.
    pub fn new<I, S>(name: &str, words: I) -> Theme
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut unique_words = Vec::<String>::new();

        for word in words {
            let word = word.as_ref().trim().to_uppercase();

            if !unique_words.contains(&word) {
                unique_words.push(word);
            }
        }

        Theme {
            name: name.to_string(),
            words: unique_words,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    // The words in the order they should be placed in the grid.
    // The sort is stable so words of the same length keep the order
    // from the theme.
    pub fn longest_first(&self) -> Vec<String> {
        let mut words = self.words.clone();

        words.sort_by_key(|word| std::cmp::Reverse(word.chars().count()));

        words
    }
}

pub fn builtin_themes() -> Vec<Theme> {
    BUILTIN_THEMES
        .iter()
        .map(|&(name, words)| Theme::new(name, words))
        .collect()
}

// Parses a JSON list of objects with a `name` and a list of
// `words`.
pub fn parse_themes(source: &str) -> Result<Vec<Theme>, LoadThemesError> {
    let entries = serde_json::from_str::<Vec<ThemeEntry>>(source)?;

    if entries.is_empty() {
        return Err(LoadThemesError::NoThemes);
    }

    let mut themes = Vec::with_capacity(entries.len());

    for (theme_num, entry) in entries.into_iter().enumerate() {
        let theme = Theme::new(&entry.name, entry.words);

        if theme.words.is_empty() {
            return Err(LoadThemesError::NoWords(theme_num));
        }

        if let Some(word) = theme.words.iter().find(|word| {
            word.chars().count() < MIN_WORD_LENGTH
        }) {
            return Err(LoadThemesError::ShortWord(theme_num, word.clone()));
        }

        themes.push(theme);
    }

    Ok(themes)
}

pub fn load_themes<P: AsRef<Path>>(
    filename: P,
) -> Result<Vec<Theme>, LoadThemesError> {
    let source = std::fs::read_to_string(filename)?;

    parse_themes(&source)
}

impl From<std::io::Error> for LoadThemesError {
    fn from(e: std::io::Error) -> LoadThemesError {
        LoadThemesError::Io(e)
    }
}

impl From<serde_json::Error> for LoadThemesError {
    fn from(e: serde_json::Error) -> LoadThemesError {
        LoadThemesError::Json(e)
    }
}

impl fmt::Display for LoadThemesError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            LoadThemesError::Io(e) => write!(f, "{}", e),
            LoadThemesError::Json(e) => write!(f, "{}", e),
            LoadThemesError::NoThemes => write!(f, "no themes"),
            LoadThemesError::NoWords(theme_num) => {
                write!(f, "theme {}: no words", theme_num + 1)
            },
            LoadThemesError::ShortWord(theme_num, word) => {
                if word.is_empty() {
                    write!(f, "theme {}: empty word", theme_num + 1)
                } else {
                    write!(
                        f,
                        "theme {}: “{}” is too short",
                        theme_num + 1,
                        word,
                    )
                }
            },
        }
    }
}

impl std::error::Error for LoadThemesError {}
