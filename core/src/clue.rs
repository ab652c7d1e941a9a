use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Clue {
    pub start_row: Coord,
    pub start_col: Coord,
    /// Full answer; matches the per-cell solutions along the run.
    pub solution: String,
    pub direction: Direction,
    pub grid_number: u32,
    /// Clue prose, still HTML-escaped.
    pub text: String,
}

impl Clue {
    pub const fn start(&self) -> Coord2 {
        (self.start_row, self.start_col)
    }

    /// Answer length in letters.
    pub fn len(&self) -> usize {
        self.solution.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.solution.is_empty()
    }

    /// Unescaped prose followed by the answer length, e.g. `Rock & roll (4)`.
    pub fn display_text(&self) -> String {
        format!("{} ({})", unescape_html(&self.text), self.len())
    }
}

/// Ordered clue list. The position of a clue is its identity.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ClueDirectory(Vec<Clue>);

impl ClueDirectory {
    pub fn new(clues: Vec<Clue>) -> Self {
        Self(clues)
    }

    /// Bounds-checked lookup.
    pub fn get(&self, index: ClueIndex) -> Option<&Clue> {
        self.0.get(index)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Clue> {
        self.0.iter()
    }

    pub fn direction_of(&self, index: ClueIndex) -> Option<Direction> {
        self.get(index).map(|clue| clue.direction)
    }

    /// `current + delta` wrapped into the directory, an absent `current`
    /// counting as the first clue. `None` for an empty directory.
    pub fn wrap(&self, current: Option<ClueIndex>, delta: isize) -> Option<ClueIndex> {
        let len = isize::try_from(self.len()).ok().filter(|&len| len > 0)?;
        let current = isize::try_from(current.unwrap_or(0)).ok()?;
        usize::try_from((current + delta).rem_euclid(len)).ok()
    }
}
