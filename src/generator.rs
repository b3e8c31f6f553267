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
use rand::Rng;
use rand::seq::SliceRandom;
use super::alphabet;
use super::grid::{Grid, Position, Orientation, ORIENTATIONS};
use super::placement::{Placement, PlacementIndex};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerateError {
    UnplaceableWord(String),
}

// Grid being filled in. Cells without a letter are None.
struct PartialGrid {
    size: usize,
    letters: Vec<Option<char>>,
}

impl PartialGrid {
    fn new(size: usize) -> PartialGrid {
        PartialGrid {
            size,
            letters: vec![None; size * size],
        }
    }

    fn cell(&self, position: Position) -> Option<char> {
        self.letters[position.row * self.size + position.col]
    }

    fn set_cell(&mut self, position: Position, letter: char) {
        self.letters[position.row * self.size + position.col] = Some(letter);
    }

    fn can_place(
        &self,
        length: usize,
        start: Position,
        orientation: Orientation,
    ) -> bool {
        // No overlapping is allowed, even where the letters would agree
        orientation.fits(start, length, self.size)
            && orientation.positions(start, length)
            .all(|position| self.cell(position).is_none())
    }

    fn candidates(&self, length: usize) -> Vec<(Position, Orientation)> {
        let mut candidates = Vec::new();

        for orientation in ORIENTATIONS {
            for row in 0..self.size {
                for col in 0..self.size {
                    let start = Position::new(row, col);

                    if self.can_place(length, start, orientation) {
                        candidates.push((start, orientation));
                    }
                }
            }
        }

        candidates
    }

    fn fill<R: Rng + ?Sized>(self, rng: &mut R) -> Grid {
        let letters = self.letters
            .into_iter()
            .map(|letter| {
                letter.unwrap_or_else(|| alphabet::random_letter(rng))
            })
            .collect::<Vec<char>>();

        Grid::from_letters(self.size, letters)
    }
}

// Places every word in a new grid of `size` × `size` letters and
// fills the remaining cells with random letters. The words are
// placed in the order given without any backtracking, so putting
// the longest words first makes failure less likely. Words are
// identified in the returned index by their position in `words`.
pub fn generate<S, R>(
    words: &[S],
    size: usize,
    rng: &mut R,
) -> Result<(Grid, PlacementIndex), GenerateError>
where
    S: AsRef<str>,
    R: Rng + ?Sized,
{
    let mut grid = PartialGrid::new(size);
    let mut index = PlacementIndex::new();

    for (word_num, word) in words.iter().enumerate() {
        let word = word.as_ref();
        let letters = word.chars().collect::<Vec<char>>();

        let Some(&(start, orientation)) =
            grid.candidates(letters.len()).choose(rng)
        else {
            return Err(GenerateError::UnplaceableWord(word.to_string()));
        };

        log::debug!(
            "placing {} at {} {:?}",
            word,
            start,
            orientation,
        );

        for (position, &letter) in orientation.positions(start, letters.len())
            .zip(letters.iter())
        {
            grid.set_cell(position, letter);
        }

        index.record(Placement {
            word: word_num,
            start,
            orientation,
            length: letters.len(),
        });
    }

    Ok((grid.fill(rng), index))
}

// Like `generate` but starts again with a fresh grid up to
// `attempts` times when a word can’t be placed.
pub fn generate_with_retries<S, R>(
    words: &[S],
    size: usize,
    attempts: u32,
    rng: &mut R,
) -> Result<(Grid, PlacementIndex), GenerateError>
where
    S: AsRef<str>,
    R: Rng + ?Sized,
{
    let mut attempt = 1;

    loop {
        match generate(words, size, rng) {
            Ok(result) => break Ok(result),
            Err(e) => {
                if attempt >= attempts {
                    break Err(e);
                }

                log::warn!("attempt {}: {}, retrying", attempt, e);

                attempt += 1;
            },
        }
    }
}

impl fmt::Display for GenerateError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            GenerateError::UnplaceableWord(word) => {
                write!(f, "cannot place word: {}", word)
            },
        }
    }
}

impl std::error::Error for GenerateError {}
