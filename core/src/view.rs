//! Read-only queries the renderer needs.

use alloc::string::String;
use bitflags::bitflags;
use serde::{Deserialize, Serialize};

use crate::*;

bitflags! {
    #[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
    pub struct CellHighlight: u8 {
        const BLOCKED     = 1;
        const ACTIVE      = 1 << 1;
        const ACTIVE_CLUE = 1 << 2;
        const OTHER_CLUE  = 1 << 3;
        const FILLED      = 1 << 4;
    }
}

impl CellHighlight {
    /// CSS class names, in a fixed order.
    pub fn class_names(self) -> impl Iterator<Item = &'static str> {
        [
            (Self::BLOCKED, "blank"),
            (Self::ACTIVE, "active"),
            (Self::OTHER_CLUE, "other-clue"),
            (Self::ACTIVE_CLUE, "active-clue"),
            (Self::FILLED, "filled"),
        ]
        .into_iter()
        .filter(move |&(flag, _)| self.contains(flag))
        .map(|(_, name)| name)
    }
}

impl PuzzleState {
    /// Highlight of the cell at `coords`; empty for coordinates off the grid.
    pub fn cell_highlight(&self, coords: Coord2) -> CellHighlight {
        let Some(cell) = self.grid.get(coords) else {
            return CellHighlight::empty();
        };
        if cell.is_blocked() {
            return CellHighlight::BLOCKED;
        }

        let mut highlight = CellHighlight::empty();
        highlight.set(CellHighlight::ACTIVE, self.active_cell == Some(coords));
        highlight.set(
            CellHighlight::ACTIVE_CLUE,
            self.active_clue_index
                .is_some_and(|index| cell.belongs_to(index)),
        );
        highlight.set(
            CellHighlight::OTHER_CLUE,
            self.other_clue_index
                .is_some_and(|index| cell.belongs_to(index)),
        );
        highlight.set(CellHighlight::FILLED, cell.is_filled());
        highlight
    }

    pub fn is_active_clue(&self, index: ClueIndex) -> bool {
        self.active_clue_index == Some(index)
    }

    /// Current fill of clue `index`, e.g. `C _ T `.
    pub fn clue_fill(&self, index: ClueIndex) -> String {
        self.clues
            .get(index)
            .map(|clue| self.grid.fill_from(clue.start(), clue.direction))
            .unwrap_or_default()
    }
}

impl Cell {
    /// Letter to draw: the current entry, else the last one cleared.
    pub const fn display_letter(&self) -> Option<char> {
        match self.entry {
            Some(letter) => Some(letter),
            None => self.old_entry,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::tests::SAMPLE;
    use alloc::vec::Vec;

    fn puzzle() -> PuzzleState {
        load_puzzle(SAMPLE).unwrap()
    }

    #[test]
    fn active_cell_is_part_of_active_clue() {
        let mut puzzle = puzzle();
        puzzle.select_cell((0, 0));

        assert_eq!(
            puzzle.cell_highlight((0, 0)),
            CellHighlight::ACTIVE | CellHighlight::ACTIVE_CLUE
        );
        assert_eq!(puzzle.cell_highlight((0, 2)), CellHighlight::ACTIVE_CLUE);
        assert_eq!(puzzle.cell_highlight((2, 2)), CellHighlight::empty());
    }

    #[test]
    fn blocked_cell_only_reports_blocked() {
        let mut puzzle = puzzle();
        puzzle.set_other_clue(Some(0));

        assert_eq!(puzzle.cell_highlight((1, 1)), CellHighlight::BLOCKED);
        assert_eq!(puzzle.cell_highlight((5, 5)), CellHighlight::empty());
    }

    #[test]
    fn other_clue_and_fill_are_flagged() {
        let mut puzzle = puzzle();
        puzzle.set_other_clue(Some(3));
        puzzle.apply_cell_update(&CellUpdateData::new(2, 1, Some('E')));

        let highlight = puzzle.cell_highlight((2, 1));

        assert_eq!(highlight, CellHighlight::OTHER_CLUE | CellHighlight::FILLED);
        assert_eq!(
            highlight.class_names().collect::<Vec<_>>(),
            ["other-clue", "filled"]
        );
    }

    #[test]
    fn cleared_cell_shows_previous_letter_unfilled() {
        let mut puzzle = puzzle();
        puzzle.apply_cell_update(&CellUpdateData::new(2, 1, Some('E')));
        puzzle.apply_cell_update(&CellUpdateData::new(2, 1, None));

        let cell = puzzle.grid().get((2, 1)).unwrap();
        assert_eq!(cell.display_letter(), Some('E'));
        assert!(!puzzle.cell_highlight((2, 1)).contains(CellHighlight::FILLED));
        assert_eq!(puzzle.grid().get((2, 2)).unwrap().display_letter(), None);
    }

    #[test]
    fn clue_fill_marks_empty_cells() {
        let mut puzzle = puzzle();
        puzzle.apply_cell_update(&CellUpdateData::new(0, 0, Some('C')));
        puzzle.apply_cell_update(&CellUpdateData::new(0, 2, Some('T')));

        assert_eq!(puzzle.clue_fill(0), "C _ T ");
        assert_eq!(puzzle.clue_fill(2), "T _ _ ");
        assert_eq!(puzzle.clue_fill(9), "");
    }
}
