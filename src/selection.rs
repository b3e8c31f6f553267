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

use super::grid::Position;

// The cells highlighted by a drag. Each cell is only stored once
// and the cells are kept in the order they were visited, but the
// visit order isn’t used when checking the selection.
#[derive(Debug, Clone, Default)]
pub struct Selection {
    cells: Vec<Position>,
}

impl Selection {
    pub fn new() -> Selection {
        Selection::default()
    }

    // Returns false if the cell was already selected.
    pub fn add(&mut self, position: Position) -> bool {
        if self.cells.contains(&position) {
            false
        } else {
            self.cells.push(position);
            true
        }
    }

    pub fn contains(&self, position: Position) -> bool {
        self.cells.contains(&position)
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn clear(&mut self) {
        self.cells.clear();
    }

    pub fn cells(&self) -> &[Position] {
        &self.cells
    }

    // The cells sorted by row and then column.
    pub fn sorted(&self) -> Vec<Position> {
        let mut cells = self.cells.clone();
        cells.sort_unstable();
        cells
    }
}

// Checks that a list of cells sorted by row and then column forms a
// straight unbroken line. The step between the first two cells
// gives the direction and every other cell must continue it.
// Returns the (row, column) step if the line is valid.
//
// The cells come from a set so the line can have been drawn in
// either direction. Sorting always puts the cells of a straight line
// in order along the line, so only the steps (0, 1), (1, 0), (1, 1)
// and (1, -1) can come out of here, but between them they cover
// all eight compass directions.
pub fn line_step(cells: &[Position]) -> Option<(isize, isize)> {
    let [first, second, ..] = cells
    else {
        return None;
    };

    let row_step = second.row as isize - first.row as isize;
    let col_step = second.col as isize - first.col as isize;

    if row_step.abs() > 1 || col_step.abs() > 1 {
        return None;
    }

    if row_step == 0 && col_step == 0 {
        return None;
    }

    for (i, cell) in cells.iter().enumerate().skip(2) {
        let expected_row = first.row as isize + row_step * i as isize;
        let expected_col = first.col as isize + col_step * i as isize;

        if cell.row as isize != expected_row
            || cell.col as isize != expected_col
        {
            return None;
        }
    }

    Some((row_step, col_step))
}
