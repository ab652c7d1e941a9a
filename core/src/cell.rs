use serde::{Deserialize, Serialize};

use crate::*;

/// Solution sentinel of a square outside the fillable area.
pub const BLOCKED: char = '.';

/// One grid square.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Cell {
    pub solution: char,
    pub row: Coord,
    pub col: Coord,
    pub grid_number: Option<u32>,
    pub across_clue_index: Option<ClueIndex>,
    pub down_clue_index: Option<ClueIndex>,
    pub entry: Option<char>,
    /// Last letter written here; survives a clear.
    pub old_entry: Option<char>,
}

impl Cell {
    pub const fn is_blocked(&self) -> bool {
        self.solution == BLOCKED
    }

    pub const fn is_filled(&self) -> bool {
        self.entry.is_some()
    }

    pub const fn coords(&self) -> Coord2 {
        (self.row, self.col)
    }

    pub fn is_correct(&self) -> bool {
        self.entry == Some(self.solution)
    }

    /// Clue this cell belongs to in `direction`, falling back to the other
    /// direction when the cell only takes part in one clue.
    pub fn clue_index(&self, direction: Direction) -> Option<ClueIndex> {
        match direction {
            Direction::Across => self.across_clue_index.or(self.down_clue_index),
            Direction::Down => self.down_clue_index.or(self.across_clue_index),
        }
    }

    pub fn belongs_to(&self, clue_index: ClueIndex) -> bool {
        self.across_clue_index == Some(clue_index) || self.down_clue_index == Some(clue_index)
    }

    /// Writes `entry`; a present letter is also remembered as `old_entry`.
    pub(crate) fn set_entry(&mut self, entry: Option<char>) -> EntryOutcome {
        let before = (self.entry, self.old_entry);

        self.entry = entry;
        if entry.is_some() {
            self.old_entry = entry;
        }

        if before == (self.entry, self.old_entry) {
            EntryOutcome::NoChange
        } else {
            EntryOutcome::Changed
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum EntryOutcome {
    NoChange,
    Changed,
}

impl EntryOutcome {
    pub const fn has_update(self) -> bool {
        match self {
            Self::NoChange => false,
            Self::Changed => true,
        }
    }
}
