use serde::{Deserialize, Serialize};

use crate::{Direction, Result};

/// Puzzle document served once at startup.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PuzzleDocument {
    pub clues: Vec<ClueRecord>,
    pub grid: Vec<Vec<CellRecord>>,
    pub size: SizeRecord,
    pub info: InfoRecord,
}

/// Clue as stored in the document. `start_row`/`start_col` are 1-indexed.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ClueRecord {
    pub start_col: u32,
    pub start_row: u32,
    pub solution: String,
    pub direction: Direction,
    pub number: u32,
    /// HTML-escaped clue prose.
    pub text: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CellRecord {
    /// Single letter, or `"."` for a blocked square.
    pub solution: String,
    pub row: u32,
    pub col: u32,
    pub grid_number: Option<u32>,
    pub across_clue_index: Option<usize>,
    pub down_clue_index: Option<usize>,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SizeRecord {
    pub rows: u32,
    pub cols: u32,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InfoRecord {
    pub date: String,
    pub title: String,
    pub author: String,
    pub editor: String,
    pub copyright: String,
}

pub fn decode_document(text: &str) -> Result<PuzzleDocument> {
    Ok(serde_json::from_str(text)?)
}
