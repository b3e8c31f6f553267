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

use std::collections::HashMap;
use std::fmt;
use super::grid::{Grid, Position, Orientation, ORIENTATIONS};

// Where a word was written in the grid. Words are identified by
// their index in the level’s word list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Placement {
    pub word: usize,
    pub start: Position,
    pub orientation: Orientation,
    pub length: usize,
}

#[derive(Debug, Clone, Default)]
pub struct PlacementIndex {
    placements: Vec<Placement>,
    // Set of words passing through each occupied cell
    cells: HashMap<Position, Vec<usize>>,
}

#[derive(Debug, PartialEq, Eq)]
pub enum LocateError {
    WordNotFound(String),
}

impl Placement {
    pub fn positions(&self) -> impl Iterator<Item = Position> + Clone {
        self.orientation.positions(self.start, self.length)
    }
}

impl PlacementIndex {
    pub fn new() -> PlacementIndex {
        PlacementIndex::default()
    }

    pub fn record(&mut self, placement: Placement) {
        for position in placement.positions() {
            let words = self.cells.entry(position).or_default();

            if !words.contains(&placement.word) {
                words.push(placement.word);
            }
        }

        self.placements.push(placement);
    }

    pub fn words_at(&self, position: Position) -> &[usize] {
        self.cells.get(&position).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn is_occupied(&self, position: Position) -> bool {
        self.cells.contains_key(&position)
    }

    pub fn placement(&self, word: usize) -> Option<&Placement> {
        self.placements.iter().find(|p| p.word == word)
    }

    pub fn placements(&self) -> &[Placement] {
        &self.placements
    }

    // Rebuilds the index for a grid that already contains the
    // words. Each word is looked for reading left-to-right or
    // top-to-bottom over cells that no earlier word has claimed, so
    // `words` should be ordered longest first like when generating.
    pub fn locate<S: AsRef<str>>(
        grid: &Grid,
        words: &[S],
    ) -> Result<PlacementIndex, LocateError> {
        let mut index = PlacementIndex::new();

        for (word_num, word) in words.iter().enumerate() {
            let word = word.as_ref();
            let letters = word.chars().collect::<Vec<char>>();

            let Some(placement) = find_free_run(grid, &index, &letters)
                .map(|(start, orientation)| Placement {
                    word: word_num,
                    start,
                    orientation,
                    length: letters.len(),
                })
            else {
                return Err(LocateError::WordNotFound(word.to_string()));
            };

            index.record(placement);
        }

        Ok(index)
    }
}

fn find_free_run(
    grid: &Grid,
    index: &PlacementIndex,
    letters: &[char],
) -> Option<(Position, Orientation)> {
    let size = grid.size();

    for orientation in ORIENTATIONS {
        for row in 0..size {
            for col in 0..size {
                let start = Position::new(row, col);

                if !orientation.fits(start, letters.len(), size) {
                    continue;
                }

                let matches = orientation.positions(start, letters.len())
                    .zip(letters.iter())
                    .all(|(position, &letter)| {
                        !index.is_occupied(position)
                            && grid.letter(position) == letter
                    });

                if matches {
                    return Some((start, orientation));
                }
            }
        }
    }

    None
}

impl fmt::Display for LocateError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            LocateError::WordNotFound(word) => {
                write!(f, "“{}” is not in the grid", word)
            },
        }
    }
}

impl std::error::Error for LocateError {}
