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
use std::str::FromStr;
use serde::Serialize;

pub const DEFAULT_SIZE: usize = 12;

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize,
)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Orientation {
    // Columns increasing
    Horizontal,
    // Rows increasing
    Vertical,
}

pub static ORIENTATIONS: [Orientation; 2] = [
    Orientation::Horizontal,
    Orientation::Vertical,
];

// A square grid of letters. Every cell contains a letter. The
// partially filled grid used while placing words is kept by the
// generator instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    size: usize,
    letters: Vec<char>,
}

#[derive(Debug, PartialEq, Eq)]
pub enum ParseError {
    UnexpectedCharacter(usize, char),
    LineTooLong(usize),
    LineTooShort(usize),
    NotEnoughLines,
    TooManyLines,
    Empty,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Position {
        Position { row, col }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{},{}", self.row, self.col)
    }
}

impl Orientation {
    // Returns the position of the letter `offset` cells along a
    // word starting at `start`.
    pub fn step(self, start: Position, offset: usize) -> Position {
        match self {
            Orientation::Horizontal => {
                Position::new(start.row, start.col + offset)
            },
            Orientation::Vertical => {
                Position::new(start.row + offset, start.col)
            },
        }
    }

    // Whether a word of `length` letters starting at `start` stays
    // inside a grid of the given size.
    pub fn fits(self, start: Position, length: usize, size: usize) -> bool {
        if length == 0 || start.row >= size || start.col >= size {
            return false;
        }

        let end = self.step(start, length - 1);

        end.row < size && end.col < size
    }

    pub fn positions(
        self,
        start: Position,
        length: usize,
    ) -> impl Iterator<Item = Position> + Clone {
        (0..length).map(move |offset| self.step(start, offset))
    }
}

impl Grid {
    // Builds a grid from its letters in row-major order.
    // `letters.len()` must be `size * size`.
    pub fn from_letters(size: usize, letters: Vec<char>) -> Grid {
        assert_eq!(letters.len(), size * size);

        Grid { size, letters }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn contains(&self, position: Position) -> bool {
        position.row < self.size && position.col < self.size
    }

    pub fn letter(&self, position: Position) -> char {
        assert!(self.contains(position));

        self.letters[position.row * self.size + position.col]
    }

    pub fn get(&self, position: Position) -> Option<char> {
        self.contains(position).then(|| self.letter(position))
    }

    pub fn row(&self, row: usize) -> &[char] {
        &self.letters[row * self.size..(row + 1) * self.size]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[char]> {
        self.letters.chunks(self.size.max(1))
    }

    // The letters read along a run of cells.
    pub fn word_at(
        &self,
        start: Position,
        orientation: Orientation,
        length: usize,
    ) -> String {
        orientation.positions(start, length)
            .map(|position| self.letter(position))
            .collect()
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (row_num, row) in self.rows().enumerate() {
            if row_num > 0 {
                writeln!(f)?;
            }

            for letter in row {
                write!(f, "{}", letter)?;
            }
        }

        Ok(())
    }
}

impl FromStr for Grid {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Grid, ParseError> {
        let mut lines = s.lines();

        let Some(first_line) = lines.next()
        else {
            return Err(ParseError::Empty);
        };

        // The grid is square so the first line gives the size
        let size = first_line.chars().count();

        if size == 0 {
            return Err(ParseError::Empty);
        }

        let mut letters = Vec::with_capacity(size * size);

        for (line_num, line) in std::iter::once(first_line)
            .chain(lines)
            .enumerate()
        {
            if line_num >= size {
                return Err(ParseError::TooManyLines);
            }

            let mut letter_num = 0;

            for ch in line.chars() {
                if letter_num >= size {
                    return Err(ParseError::LineTooLong(line_num));
                }

                if !ch.is_uppercase() {
                    return Err(ParseError::UnexpectedCharacter(line_num, ch));
                }

                letters.push(ch);
                letter_num += 1;
            }

            if letter_num < size {
                return Err(ParseError::LineTooShort(line_num));
            }
        }

        if letters.len() < size * size {
            Err(ParseError::NotEnoughLines)
        } else {
            Ok(Grid { size, letters })
        }
    }
}

fn format_character(ch: char, f: &mut fmt::Formatter) -> fmt::Result {
    if ch.is_control() {
        write!(f, "U+{:04x}", ch as u32)
    } else {
        write!(f, "{}", ch)
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ParseError::UnexpectedCharacter(line_num, ch) => {
                write!(f, "line {}: unexpected character: ", line_num + 1)?;
                format_character(*ch, f)
            },
            ParseError::LineTooLong(line_num) => {
                write!(f, "line {}: line too long", line_num + 1)
            },
            ParseError::LineTooShort(line_num) => {
                write!(f, "line {}: line too short", line_num + 1)
            },
            ParseError::NotEnoughLines => write!(f, "not enough lines"),
            ParseError::TooManyLines => write!(f, "too many lines"),
            ParseError::Empty => write!(f, "empty grid"),
        }
    }
}

impl std::error::Error for ParseError {}
