//! Unit steps between squares.

use crate::square::Square;

/// A unit step on the board: each component is -1, 0 or 1 and not both are zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Direction {
    d_row: i8,
    d_col: i8,
}

impl Direction {
    pub const NORTH: Direction = Direction { d_row: 1, d_col: 0 };
    pub const SOUTH: Direction = Direction { d_row: -1, d_col: 0 };
    pub const EAST: Direction = Direction { d_row: 0, d_col: 1 };
    pub const WEST: Direction = Direction { d_row: 0, d_col: -1 };
    pub const NORTH_EAST: Direction = Direction { d_row: 1, d_col: 1 };
    pub const NORTH_WEST: Direction = Direction { d_row: 1, d_col: -1 };
    pub const SOUTH_EAST: Direction = Direction { d_row: -1, d_col: 1 };
    pub const SOUTH_WEST: Direction = Direction { d_row: -1, d_col: -1 };

    /// Rank and file directions.
    pub const STRAIGHT: [Direction; 4] = [Self::NORTH, Self::SOUTH, Self::EAST, Self::WEST];

    /// Diagonal directions.
    pub const DIAGONAL: [Direction; 4] = [
        Self::NORTH_EAST,
        Self::NORTH_WEST,
        Self::SOUTH_EAST,
        Self::SOUTH_WEST,
    ];

    /// All eight directions.
    pub const ALL: [Direction; 8] = [
        Self::NORTH,
        Self::SOUTH,
        Self::EAST,
        Self::WEST,
        Self::NORTH_EAST,
        Self::NORTH_WEST,
        Self::SOUTH_EAST,
        Self::SOUTH_WEST,
    ];

    /// Return the unit step from `from` toward `to` when the two squares share a
    /// rank, file or diagonal. Returns `None` for equal or unaligned squares.
    pub fn between(from: Square, to: Square) -> Option<Direction> {
        let d_row = to.row() as i8 - from.row() as i8;
        let d_col = to.col() as i8 - from.col() as i8;
        if (d_row, d_col) == (0, 0) {
            return None;
        }
        if d_row == 0 || d_col == 0 || d_row.abs() == d_col.abs() {
            Some(Direction {
                d_row: d_row.signum(),
                d_col: d_col.signum(),
            })
        } else {
            None
        }
    }

    /// Row component.
    #[inline]
    pub const fn d_row(self) -> i8 {
        self.d_row
    }

    /// Column component.
    #[inline]
    pub const fn d_col(self) -> i8 {
        self.d_col
    }

    /// Return `true` for the four diagonal directions.
    #[inline]
    pub const fn is_diagonal(self) -> bool {
        self.d_row != 0 && self.d_col != 0
    }

    /// Return the opposite direction.
    #[inline]
    pub const fn reverse(self) -> Direction {
        Direction {
            d_row: -self.d_row,
            d_col: -self.d_col,
        }
    }

    /// Return `true` if `other` lies on the same line (same or opposite direction).
    #[inline]
    pub fn is_parallel(self, other: Direction) -> bool {
        self == other || self == other.reverse()
    }
}
