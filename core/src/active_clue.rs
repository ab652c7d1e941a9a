use alloc::vec::Vec;

use crate::*;

impl PuzzleState {
    /// Cells of the active clue, row by row. Empty when no clue is active.
    pub fn active_clue_cells(&self) -> impl Iterator<Item = &Cell> {
        self.active_clue_index
            .into_iter()
            .flat_map(|index| self.grid.cells_of_clue(index))
    }

    fn active_clue_coords(&self) -> Vec<Coord2> {
        self.active_clue_cells().map(Cell::coords).collect()
    }

    /// Fills every cell of the active clue with its solution and returns the
    /// edits to broadcast, one per cell.
    pub fn solve_active_clue(&mut self) -> Vec<CellUpdateData> {
        let coords = self.active_clue_coords();

        coords
            .into_iter()
            .filter_map(|pos| {
                let solution = self.grid.get(pos)?.solution;
                self.grid.update(pos, Some(solution));
                Some(CellUpdateData {
                    cell: pos.to_row_col(),
                    letter: Some(solution),
                })
            })
            .collect()
    }

    /// Clears every wrong entry in the active clue.
    ///
    /// Returns one edit per cell of the clue: the letter for cells that were
    /// already right, `None` for everything else.
    pub fn check_active_clue(&mut self) -> Vec<CellUpdateData> {
        let coords = self.active_clue_coords();

        coords
            .into_iter()
            .filter_map(|pos| {
                let cell = self.grid.get(pos)?;
                let letter = cell.is_correct().then_some(cell.solution);
                if letter.is_none() {
                    self.grid.update(pos, None);
                }
                Some(CellUpdateData {
                    cell: pos.to_row_col(),
                    letter,
                })
            })
            .collect()
    }

    /// Applies an edit received from a collaborator. The cursor is untouched.
    pub fn apply_cell_update(&mut self, update: &CellUpdateData) -> EntryOutcome {
        match coords_from_wire(update.cell) {
            Some(coords) => self.grid.update(coords, update.letter),
            None => {
                log::debug!("cell update outside grid: {:?}", update.cell);
                EntryOutcome::NoChange
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::tests::SAMPLE;

    const CAT: ClueIndex = 0;
    const TOE: ClueIndex = 2;

    fn puzzle() -> PuzzleState {
        load_puzzle(SAMPLE).unwrap()
    }

    fn entries(puzzle: &PuzzleState, clue_index: ClueIndex) -> Vec<Option<char>> {
        puzzle
            .grid()
            .cells_of_clue(clue_index)
            .map(|cell| cell.entry)
            .collect()
    }

    #[test]
    fn solve_fills_every_cell_of_clue() {
        let mut puzzle = puzzle();
        puzzle.set_active_clue(TOE);

        let updates = puzzle.solve_active_clue();

        assert_eq!(entries(&puzzle, TOE), [Some('T'), Some('O'), Some('E')]);
        assert_eq!(
            updates,
            [
                CellUpdateData::new(0, 2, Some('T')),
                CellUpdateData::new(1, 2, Some('O')),
                CellUpdateData::new(2, 2, Some('E')),
            ]
        );
    }

    #[test]
    fn solve_without_active_clue_is_noop() {
        let mut puzzle = puzzle();
        let before = puzzle.clone();

        assert!(puzzle.solve_active_clue().is_empty());
        assert_eq!(puzzle, before);
    }

    #[test]
    fn check_clears_only_wrong_entries() {
        let mut puzzle = puzzle();
        puzzle.set_active_clue(CAT);
        puzzle.change_active_entry(Some('C'));
        puzzle.change_active_entry(Some('X'));

        let updates = puzzle.check_active_clue();

        assert_eq!(entries(&puzzle, CAT), [Some('C'), None, None]);
        assert_eq!(
            updates,
            [
                CellUpdateData::new(0, 0, Some('C')),
                CellUpdateData::new(0, 1, None),
                CellUpdateData::new(0, 2, None),
            ]
        );
    }

    #[test]
    fn check_keeps_old_entry_of_cleared_cell() {
        let mut puzzle = puzzle();
        puzzle.set_active_clue(CAT);
        puzzle.change_active_entry(Some('Z'));

        puzzle.check_active_clue();

        let cell = puzzle.grid().get((0, 0)).unwrap();
        assert_eq!(cell.entry, None);
        assert_eq!(cell.old_entry, Some('Z'));
    }

    #[test]
    fn inbound_update_writes_without_moving() {
        let mut puzzle = puzzle();
        puzzle.select_cell((2, 0));

        let outcome = puzzle.apply_cell_update(&CellUpdateData::new(0, 1, Some('A')));

        assert_eq!(outcome, EntryOutcome::Changed);
        assert_eq!(puzzle.grid().get((0, 1)).unwrap().entry, Some('A'));
        assert_eq!(puzzle.active_cell(), Some((2, 0)));
    }

    #[test]
    fn inbound_update_ignores_blocked_and_missing_cells() {
        let mut puzzle = puzzle();
        let before = puzzle.clone();

        assert_eq!(
            puzzle.apply_cell_update(&CellUpdateData::new(1, 1, Some('Q'))),
            EntryOutcome::NoChange
        );
        assert_eq!(
            puzzle.apply_cell_update(&CellUpdateData::new(7, 0, Some('Q'))),
            EntryOutcome::NoChange
        );
        assert_eq!(
            puzzle.apply_cell_update(&CellUpdateData::new(1000, 0, Some('Q'))),
            EntryOutcome::NoChange
        );
        assert_eq!(puzzle, before);
    }
}
