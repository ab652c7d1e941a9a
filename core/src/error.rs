use alloc::string::{String, ToString};
use cluegrid_protocol::ProtocolError;
use thiserror::Error;

use crate::*;

/// A decoded document that cannot back a playable puzzle.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PuzzleError {
    #[error("Grid shape does not match declared size")]
    InvalidGridShape,
    #[error("Coordinates do not fit the grid")]
    InvalidCoords,
    #[error("Cell at ({row}, {col}) reports a different position")]
    CellPositionMismatch { row: Coord, col: Coord },
    #[error("Cell at ({row}, {col}) has no solution")]
    EmptySolution { row: Coord, col: Coord },
    #[error("Blocked cell at ({row}, {col}) belongs to a clue")]
    BlockedCellInClue { row: Coord, col: Coord },
    #[error("Clue index {0} is out of range")]
    ClueIndexOutOfRange(ClueIndex),
    #[error("Clue {0} does not start on an open cell")]
    InvalidClueStart(ClueIndex),
}

pub type Result<T> = core::result::Result<T, PuzzleError>;

/// Why the initial load ended in failure.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LoadError {
    #[error("Could not fetch puzzle: {0}")]
    Fetch(String),
    #[error("Could not decode puzzle: {0}")]
    Decode(String),
    #[error("Invalid puzzle: {0}")]
    Invalid(#[from] PuzzleError),
}

impl From<ProtocolError> for LoadError {
    fn from(err: ProtocolError) -> Self {
        Self::Decode(err.to_string())
    }
}
