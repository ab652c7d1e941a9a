use alloc::string::String;
use alloc::vec::Vec;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Rectangular table of cells, rows outer and columns inner.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Grid {
    cells: Array2<Cell>,
    size: Coord2,
}

impl Grid {
    /// Builds a grid from row-major cells, checking that every row has the
    /// same length and every cell sits where it says it does.
    pub fn from_rows(rows: Vec<Vec<Cell>>) -> Result<Self> {
        let row_count = rows.len();
        let col_count = rows.first().map_or(0, Vec::len);
        let size: Coord2 = (
            row_count
                .try_into()
                .map_err(|_| PuzzleError::InvalidGridShape)?,
            col_count
                .try_into()
                .map_err(|_| PuzzleError::InvalidGridShape)?,
        );

        let mut flat = Vec::with_capacity(row_count * col_count);
        for (row_index, row) in rows.into_iter().enumerate() {
            if row.len() != col_count {
                return Err(PuzzleError::InvalidGridShape);
            }
            for (col_index, cell) in row.into_iter().enumerate() {
                if usize::from(cell.row) != row_index || usize::from(cell.col) != col_index {
                    return Err(PuzzleError::CellPositionMismatch {
                        row: cell.row,
                        col: cell.col,
                    });
                }
                flat.push(cell);
            }
        }

        let cells = Array2::from_shape_vec((row_count, col_count), flat)
            .map_err(|_| PuzzleError::InvalidGridShape)?;
        Ok(Self { cells, size })
    }

    /// `(rows, cols)`.
    pub fn size(&self) -> Coord2 {
        self.size
    }

    pub fn contains(&self, coords: Coord2) -> bool {
        coords.0 < self.size.0 && coords.1 < self.size.1
    }

    /// Bounds-checked lookup.
    pub fn get(&self, coords: Coord2) -> Option<&Cell> {
        self.contains(coords).then(|| &self.cells[coords.to_nd_index()])
    }

    pub fn is_blocked(&self, coords: Coord2) -> bool {
        self.get(coords).is_some_and(Cell::is_blocked)
    }

    /// Sets the entry of the cell at `coords`.
    ///
    /// Out-of-range coordinates and blocked cells are left alone.
    pub fn update(&mut self, coords: Coord2, entry: Option<char>) -> EntryOutcome {
        if !self.contains(coords) {
            return EntryOutcome::NoChange;
        }

        let cell = &mut self.cells[coords.to_nd_index()];
        if cell.is_blocked() {
            return EntryOutcome::NoChange;
        }
        cell.set_entry(entry)
    }

    /// Every cell, row by row.
    pub fn iter(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    /// Cells whose across or down clue is `clue_index`, row by row.
    pub fn cells_of_clue(&self, clue_index: ClueIndex) -> impl Iterator<Item = &Cell> {
        self.iter().filter(move |cell| cell.belongs_to(clue_index))
    }

    /// Current fill of the run starting at `start`: each entry, or `_` when
    /// empty, followed by a space. Stops at the first blocked cell or edge.
    pub fn fill_from(&self, start: Coord2, direction: Direction) -> String {
        let delta = match direction {
            Direction::Across => RIGHT,
            Direction::Down => DOWN,
        };

        let mut fill = String::new();
        let mut coords = self.contains(start).then_some(start);
        while let Some(pos) = coords {
            let cell = &self.cells[pos.to_nd_index()];
            if cell.is_blocked() {
                break;
            }
            fill.push(cell.entry.unwrap_or('_'));
            fill.push(' ');
            coords = apply_delta(pos, delta, self.size);
        }
        fill
    }
}
