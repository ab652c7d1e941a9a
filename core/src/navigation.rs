//! Cursor and clue selection.
//!
//! Two kinds of movement exist. Arrow keys skip over blocked cells until
//! an open one is found (`move_cell`). Moving after typing or deleting a
//! letter never skips (`move_cell_without_jump`), so the cursor stops at the
//! end of the current run.

use crate::*;

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum MoveOutcome {
    NoChange,
    Moved,
}

impl MoveOutcome {
    pub const fn has_update(self) -> bool {
        match self {
            Self::NoChange => false,
            Self::Moved => true,
        }
    }
}

/// Clue to activate when `cell` is selected.
///
/// With nothing active the across clue wins. Otherwise the direction of the
/// active clue is kept, unless `cell` is the active cell being selected
/// again, which flips it.
pub fn next_active_clue(
    active_clue_index: Option<ClueIndex>,
    cell: &Cell,
    active_cell: Option<Coord2>,
    clues: &ClueDirectory,
) -> Option<ClueIndex> {
    let Some(active_index) = active_clue_index else {
        return cell.clue_index(Direction::Across);
    };

    let current_direction = clues
        .direction_of(active_index)
        .unwrap_or(Direction::Across);
    let direction = if active_cell == Some(cell.coords()) {
        current_direction.other()
    } else {
        current_direction
    };

    cell.clue_index(direction)
}

impl PuzzleState {
    /// Makes the cell at `coords` active. Missing or blocked cells are ignored.
    pub fn select_cell(&mut self, coords: Coord2) -> MoveOutcome {
        let Some(cell) = self.grid.get(coords).filter(|cell| !cell.is_blocked()) else {
            log::trace!("select {:?}: not selectable", coords);
            return MoveOutcome::NoChange;
        };

        self.active_clue_index =
            next_active_clue(self.active_clue_index, cell, self.active_cell, &self.clues);
        self.active_cell = Some(coords);
        MoveOutcome::Moved
    }

    /// Selects the active cell again, flipping the clue direction.
    pub fn toggle_active_clue(&mut self) -> MoveOutcome {
        match self.active_cell {
            Some(coords) => self.select_cell(coords),
            None => MoveOutcome::NoChange,
        }
    }

    /// Steps once by `delta`; stays put when that cell is missing or blocked.
    pub fn move_cell_without_jump(&mut self, delta: Delta) -> MoveOutcome {
        let Some(coords) = self.active_cell else {
            return MoveOutcome::NoChange;
        };

        match apply_delta(coords, delta, self.grid.size()) {
            Some(next) if !self.grid.is_blocked(next) => self.select_cell(next),
            _ => MoveOutcome::NoChange,
        }
    }

    /// Steps by `delta`, passing over blocked cells, and selects the first
    /// open cell. Reaching the edge first leaves the state untouched. With no
    /// active cell the top-left cell is selected.
    pub fn move_cell(&mut self, delta: Delta) -> MoveOutcome {
        let Some(mut coords) = self.active_cell else {
            return self.select_cell((0, 0));
        };

        loop {
            let Some(next) = apply_delta(coords, delta, self.grid.size()) else {
                log::trace!("move {:?} from {:?}: hit edge", delta, self.active_cell);
                return MoveOutcome::NoChange;
            };

            if self.grid.is_blocked(next) {
                coords = next;
                continue;
            }

            return self.select_cell(next);
        }
    }

    pub fn move_up(&mut self) -> MoveOutcome {
        self.move_cell(UP)
    }

    pub fn move_down(&mut self) -> MoveOutcome {
        self.move_cell(DOWN)
    }

    pub fn move_left(&mut self) -> MoveOutcome {
        self.move_cell(LEFT)
    }

    pub fn move_right(&mut self) -> MoveOutcome {
        self.move_cell(RIGHT)
    }

    fn active_direction(&self) -> Option<Direction> {
        self.active_clue().map(|clue| clue.direction)
    }

    /// One cell forward along the active clue, without skipping.
    pub fn move_next(&mut self) -> MoveOutcome {
        match self.active_direction() {
            Some(Direction::Across) => self.move_cell_without_jump(RIGHT),
            Some(Direction::Down) => self.move_cell_without_jump(DOWN),
            None => MoveOutcome::NoChange,
        }
    }

    /// One cell back along the active clue, without skipping.
    pub fn move_previous(&mut self) -> MoveOutcome {
        match self.active_direction() {
            Some(Direction::Across) => self.move_cell_without_jump(LEFT),
            Some(Direction::Down) => self.move_cell_without_jump(UP),
            None => MoveOutcome::NoChange,
        }
    }

    /// Writes `letter` into the active cell, then moves forward for a letter
    /// or backward for a clear. The cell is cleared before the cursor moves.
    ///
    /// Returns the edit to broadcast, `None` without an active cell.
    pub fn change_active_entry(&mut self, letter: Option<char>) -> Option<CellUpdateData> {
        let coords = self.active_cell?;
        self.grid.update(coords, letter);

        match letter {
            Some(_) => self.move_next(),
            None => self.move_previous(),
        };

        Some(CellUpdateData {
            cell: coords.to_row_col(),
            letter,
        })
    }

    /// Activates clue `clue_index` with the cursor on its first cell.
    /// Selecting the clue that is already active keeps the cursor where it is.
    pub fn set_active_clue(&mut self, clue_index: ClueIndex) -> MoveOutcome {
        let Some(start) = self.clues.get(clue_index).map(Clue::start) else {
            return MoveOutcome::NoChange;
        };
        if self.active_clue_index == Some(clue_index) {
            return MoveOutcome::NoChange;
        }
        match self.grid.get(start) {
            Some(cell) if !cell.is_blocked() => {}
            _ => return MoveOutcome::NoChange,
        }

        self.active_clue_index = Some(clue_index);
        self.active_cell = Some(start);
        MoveOutcome::Moved
    }

    /// Moves the active clue by `delta` positions, wrapping at both ends.
    pub fn change_clue_index(&mut self, delta: isize) -> MoveOutcome {
        match self.clues.wrap(self.active_clue_index, delta) {
            Some(index) => self.set_active_clue(index),
            None => MoveOutcome::NoChange,
        }
    }

    pub fn select_next_clue(&mut self) -> MoveOutcome {
        self.change_clue_index(1)
    }

    pub fn select_previous_clue(&mut self) -> MoveOutcome {
        self.change_clue_index(-1)
    }
}
