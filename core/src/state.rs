use alloc::string::String;
use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Modal {
    #[default]
    Empty,
    Info,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PuzzleSize {
    pub rows: Coord,
    pub cols: Coord,
}

/// Display-only metadata.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PuzzleInfo {
    pub date: String,
    pub title: String,
    pub author: String,
    pub editor: String,
    pub copyright: String,
}

/// Top-level client state. `Loading` forks once into `Loaded` or `Failure`.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum AppState {
    #[default]
    Loading,
    Loaded(PuzzleState),
    Failure,
}

impl AppState {
    pub fn puzzle(&self) -> Option<&PuzzleState> {
        match self {
            Self::Loaded(puzzle) => Some(puzzle),
            Self::Loading | Self::Failure => None,
        }
    }
}

/// A loaded puzzle together with the local selection.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PuzzleState {
    pub(crate) grid: Grid,
    pub(crate) clues: ClueDirectory,
    pub(crate) size: PuzzleSize,
    pub(crate) info: PuzzleInfo,
    pub(crate) active_clue_index: Option<ClueIndex>,
    pub(crate) active_cell: Option<Coord2>,
    pub(crate) other_clue_index: Option<ClueIndex>,
    pub(crate) modal: Modal,
}

impl PuzzleState {
    /// Checks the cross references between grid and clues and starts with
    /// nothing selected.
    pub fn new(grid: Grid, clues: ClueDirectory, info: PuzzleInfo) -> Result<Self> {
        for cell in grid.iter() {
            for index in [cell.across_clue_index, cell.down_clue_index]
                .into_iter()
                .flatten()
            {
                if cell.is_blocked() {
                    return Err(PuzzleError::BlockedCellInClue {
                        row: cell.row,
                        col: cell.col,
                    });
                }
                if index >= clues.len() {
                    return Err(PuzzleError::ClueIndexOutOfRange(index));
                }
            }
        }

        for (index, clue) in clues.iter().enumerate() {
            match grid.get(clue.start()) {
                Some(cell) if !cell.is_blocked() => {}
                _ => return Err(PuzzleError::InvalidClueStart(index)),
            }
        }

        let (rows, cols) = grid.size();
        Ok(Self {
            grid,
            clues,
            size: PuzzleSize { rows, cols },
            info,
            active_clue_index: None,
            active_cell: None,
            other_clue_index: None,
            modal: Modal::Empty,
        })
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn clues(&self) -> &ClueDirectory {
        &self.clues
    }

    pub fn size(&self) -> PuzzleSize {
        self.size
    }

    pub fn info(&self) -> &PuzzleInfo {
        &self.info
    }

    pub fn active_clue_index(&self) -> Option<ClueIndex> {
        self.active_clue_index
    }

    pub fn active_cell(&self) -> Option<Coord2> {
        self.active_cell
    }

    pub fn other_clue_index(&self) -> Option<ClueIndex> {
        self.other_clue_index
    }

    pub fn modal(&self) -> Modal {
        self.modal
    }

    pub fn active_clue(&self) -> Option<&Clue> {
        self.active_clue_index.and_then(|index| self.clues.get(index))
    }

    pub fn set_modal(&mut self, modal: Modal) {
        self.modal = modal;
    }

    /// Cosmetic highlight driven by a collaborator.
    pub fn set_other_clue(&mut self, other_clue_index: Option<ClueIndex>) {
        self.other_clue_index = other_clue_index;
    }
}
