use alloc::vec::Vec;
use cluegrid_protocol::{CellRecord, ClueRecord, InfoRecord, PuzzleDocument};

use crate::*;

impl TryFrom<PuzzleDocument> for PuzzleState {
    type Error = PuzzleError;

    fn try_from(document: PuzzleDocument) -> Result<Self> {
        let PuzzleDocument {
            clues,
            grid,
            size,
            info,
        } = document;

        let row_count = usize::try_from(size.rows).map_err(|_| PuzzleError::InvalidGridShape)?;
        let col_count = usize::try_from(size.cols).map_err(|_| PuzzleError::InvalidGridShape)?;
        if grid.len() != row_count || grid.iter().any(|row| row.len() != col_count) {
            return Err(PuzzleError::InvalidGridShape);
        }

        let rows = grid
            .into_iter()
            .map(|row| row.into_iter().map(cell_from_record).collect::<Result<Vec<_>>>())
            .collect::<Result<Vec<_>>>()?;
        let clues = clues
            .into_iter()
            .enumerate()
            .map(|(index, record)| clue_from_record(index, record))
            .collect::<Result<Vec<_>>>()?;

        PuzzleState::new(
            Grid::from_rows(rows)?,
            ClueDirectory::new(clues),
            info_from_record(info),
        )
    }
}

fn cell_from_record(record: CellRecord) -> Result<Cell> {
    let (row, col) = coords_from_wire(RowCol {
        row: record.row,
        col: record.col,
    })
    .ok_or(PuzzleError::InvalidCoords)?;
    let solution = record
        .solution
        .chars()
        .next()
        .ok_or(PuzzleError::EmptySolution { row, col })?;

    Ok(Cell {
        solution,
        row,
        col,
        grid_number: record.grid_number,
        across_clue_index: record.across_clue_index,
        down_clue_index: record.down_clue_index,
        entry: None,
        old_entry: None,
    })
}

/// Wire clue starts are 1-indexed.
fn clue_from_record(index: ClueIndex, record: ClueRecord) -> Result<Clue> {
    let start_row = record.start_row.checked_sub(1);
    let start_col = record.start_col.checked_sub(1);
    let (Some(row), Some(col)) = (start_row, start_col) else {
        return Err(PuzzleError::InvalidClueStart(index));
    };
    let (start_row, start_col) =
        coords_from_wire(RowCol { row, col }).ok_or(PuzzleError::InvalidClueStart(index))?;

    Ok(Clue {
        start_row,
        start_col,
        solution: record.solution,
        direction: record.direction,
        grid_number: record.number,
        text: record.text,
    })
}

fn info_from_record(record: InfoRecord) -> PuzzleInfo {
    let InfoRecord {
        date,
        title,
        author,
        editor,
        copyright,
    } = record;
    PuzzleInfo {
        date,
        title,
        author,
        editor,
        copyright,
    }
}

/// Decodes and validates a puzzle document in one step.
pub fn load_puzzle(text: &str) -> core::result::Result<PuzzleState, LoadError> {
    let document = cluegrid_protocol::decode_document(text)?;
    Ok(PuzzleState::try_from(document)?)
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// ```text
    /// C A T
    /// A . O
    /// B E E
    /// ```
    pub(crate) const SAMPLE: &str = r#"{
        "clues": [
            {"start_col": 1, "start_row": 1, "solution": "CAT", "direction": "Across", "number": 1, "text": "Feline"},
            {"start_col": 1, "start_row": 1, "solution": "CAB", "direction": "Down", "number": 1, "text": "Taxi"},
            {"start_col": 3, "start_row": 1, "solution": "TOE", "direction": "Down", "number": 2, "text": "Foot digit"},
            {"start_col": 1, "start_row": 3, "solution": "BEE", "direction": "Across", "number": 3, "text": "Honey maker"}
        ],
        "grid": [
            [
                {"solution": "C", "row": 0, "col": 0, "grid_number": 1, "across_clue_index": 0, "down_clue_index": 1},
                {"solution": "A", "row": 0, "col": 1, "grid_number": null, "across_clue_index": 0, "down_clue_index": null},
                {"solution": "T", "row": 0, "col": 2, "grid_number": 2, "across_clue_index": 0, "down_clue_index": 2}
            ],
            [
                {"solution": "A", "row": 1, "col": 0, "grid_number": null, "across_clue_index": null, "down_clue_index": 1},
                {"solution": ".", "row": 1, "col": 1, "grid_number": null, "across_clue_index": null, "down_clue_index": null},
                {"solution": "O", "row": 1, "col": 2, "grid_number": null, "across_clue_index": null, "down_clue_index": 2}
            ],
            [
                {"solution": "B", "row": 2, "col": 0, "grid_number": 3, "across_clue_index": 3, "down_clue_index": 1},
                {"solution": "E", "row": 2, "col": 1, "grid_number": null, "across_clue_index": 3, "down_clue_index": null},
                {"solution": "E", "row": 2, "col": 2, "grid_number": null, "across_clue_index": 3, "down_clue_index": 2}
            ]
        ],
        "size": {"rows": 3, "cols": 3},
        "info": {"date": "Oct 7, 2019", "title": "Tiny", "author": "Setter", "editor": "Editor", "copyright": "None"}
    }"#;

    #[test]
    fn load_puzzle_decrements_clue_starts() {
        let puzzle = load_puzzle(SAMPLE).unwrap();

        let bee = puzzle.clues().get(3).unwrap();
        assert_eq!(bee.start(), (2, 0));
        assert_eq!(bee.direction, Direction::Across);
        assert_eq!(puzzle.size(), PuzzleSize { rows: 3, cols: 3 });
        assert_eq!(puzzle.info().title, "Tiny");
        assert!(puzzle.grid().is_blocked((1, 1)));
        assert_eq!(puzzle.active_cell(), None);
        assert_eq!(puzzle.modal(), Modal::Empty);
    }

    #[test]
    fn load_puzzle_rejects_size_mismatch() {
        let text = SAMPLE.replace(r#""rows": 3"#, r#""rows": 4"#);

        assert_eq!(
            load_puzzle(&text),
            Err(LoadError::Invalid(PuzzleError::InvalidGridShape))
        );
    }

    #[test]
    fn load_puzzle_rejects_zero_based_clue_start() {
        let text = SAMPLE.replace(
            r#"{"start_col": 1, "start_row": 3"#,
            r#"{"start_col": 0, "start_row": 3"#,
        );

        assert_eq!(
            load_puzzle(&text),
            Err(LoadError::Invalid(PuzzleError::InvalidClueStart(3)))
        );
    }

    #[test]
    fn load_puzzle_rejects_dangling_clue_index() {
        let text = SAMPLE.replace(
            r#""across_clue_index": 3, "down_clue_index": 1"#,
            r#""across_clue_index": 9, "down_clue_index": 1"#,
        );

        assert_eq!(
            load_puzzle(&text),
            Err(LoadError::Invalid(PuzzleError::ClueIndexOutOfRange(9)))
        );
    }

    #[test]
    fn load_puzzle_reports_malformed_json_as_decode_error() {
        assert!(matches!(load_puzzle("{"), Err(LoadError::Decode(_))));
    }
}
