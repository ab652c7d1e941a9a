#![no_std]

extern crate alloc;

pub use cluegrid_protocol::{CellUpdateData, Direction, RowCol};

pub use cell::*;
pub use clue::*;
pub use document::*;
pub use error::*;
pub use grid::*;
pub use keys::*;
pub use navigation::*;
pub use scroll::*;
pub use state::*;
pub use text::*;
pub use types::*;
pub use update::*;
pub use view::*;

mod active_clue;
mod cell;
mod clue;
mod document;
mod error;
mod grid;
mod keys;
mod navigation;
mod scroll;
mod state;
mod text;
mod types;
mod update;
mod view;
