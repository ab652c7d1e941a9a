use cluegrid_protocol::RowCol;

/// Single grid axis used for row and column positions.
pub type Coord = u8;

/// Two-dimensional grid position `(row, col)`, 0-indexed.
pub type Coord2 = (Coord, Coord);

/// Position of a clue in the clue directory; the stable clue identity.
pub type ClueIndex = usize;

/// Single-step displacement `(d_row, d_col)`.
pub type Delta = (isize, isize);

pub const UP: Delta = (-1, 0);
pub const DOWN: Delta = (1, 0);
pub const LEFT: Delta = (0, -1);
pub const RIGHT: Delta = (0, 1);

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.0.into(), self.1.into()]
    }
}

pub trait ToRowCol {
    fn to_row_col(self) -> RowCol;
}

impl ToRowCol for Coord2 {
    fn to_row_col(self) -> RowCol {
        RowCol {
            row: self.0.into(),
            col: self.1.into(),
        }
    }
}

/// Narrows a wire position into grid coordinates.
pub fn coords_from_wire(position: RowCol) -> Option<Coord2> {
    Some((
        position.row.try_into().ok()?,
        position.col.try_into().ok()?,
    ))
}

/// Applies `delta` to `coords`, returning a value only when it remains in bounds.
pub(crate) fn apply_delta(coords: Coord2, delta: Delta, bounds: Coord2) -> Option<Coord2> {
    let (row, col) = coords;
    let (d_row, d_col) = delta;
    let (rows, cols) = bounds;

    let next_row = row.checked_add_signed(d_row.try_into().ok()?)?;
    if next_row >= rows {
        return None;
    }

    let next_col = col.checked_add_signed(d_col.try_into().ok()?)?;
    if next_col >= cols {
        return None;
    }

    Some((next_row, next_col))
}
