//! Board squares using Little-Endian Rank-File (LERF) encoding.

use std::fmt;

use crate::direction::Direction;
use crate::file::File;
use crate::rank::Rank;

/// A square on the board, encoded as a `u8` in LERF format.
///
/// Index = row * 8 + column, where the row is the rank index (0 = rank 1)
/// and the column is the file index (0 = file a). So A1 = 0, B1 = 1, ..., H8 = 63.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Square(u8);

impl Square {
    /// Total number of squares.
    pub const COUNT: usize = 64;

    /// Create a square from a rank and file.
    #[inline]
    pub const fn new(rank: Rank, file: File) -> Square {
        Square(rank.index() as u8 * 8 + file.index() as u8)
    }

    /// Create a square from a zero-based index, returning `None` if out of range.
    #[inline]
    pub const fn from_index(index: u8) -> Option<Square> {
        if index < 64 { Some(Square(index)) } else { None }
    }

    /// Create a square from a zero-based index without bounds checking.
    #[inline]
    pub(crate) const fn from_index_unchecked(index: u8) -> Square {
        debug_assert!(index < 64);
        Square(index)
    }

    /// Create a square from signed (row, column) coordinates.
    ///
    /// Returns `None` when either coordinate falls outside `0..8`, which is how
    /// out-of-bounds move requests are detected.
    pub fn try_from_coords(row: i32, col: i32) -> Option<Square> {
        if (0..8).contains(&row) && (0..8).contains(&col) {
            Some(Square((row * 8 + col) as u8))
        } else {
            None
        }
    }

    /// Parse an algebraic notation string (e.g. "e4") into a square.
    pub fn from_algebraic(s: &str) -> Option<Square> {
        let mut chars = s.chars();
        let file = File::from_char(chars.next()?)?;
        let rank = Rank::from_char(chars.next()?)?;
        if chars.next().is_some() {
            return None;
        }
        Some(Square::new(rank, file))
    }

    /// Return the zero-based index (0..63).
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Return the row (rank index, 0..7).
    #[inline]
    pub const fn row(self) -> u8 {
        self.0 / 8
    }

    /// Return the column (file index, 0..7).
    #[inline]
    pub const fn col(self) -> u8 {
        self.0 % 8
    }

    /// Return the rank of this square.
    #[inline]
    pub const fn rank(self) -> Rank {
        Rank::ALL[(self.0 / 8) as usize]
    }

    /// Return the file of this square.
    #[inline]
    pub const fn file(self) -> File {
        File::ALL[(self.0 % 8) as usize]
    }

    /// Return the square `d_row` rows and `d_col` columns away, if it is on the board.
    #[inline]
    pub const fn offset(self, d_row: i8, d_col: i8) -> Option<Square> {
        let row = self.row() as i8 + d_row;
        let col = self.col() as i8 + d_col;
        if row < 0 || row >= 8 || col < 0 || col >= 8 {
            None
        } else {
            Some(Square((row * 8 + col) as u8))
        }
    }

    /// Return the neighbouring square one step in `dir`, if it is on the board.
    #[inline]
    pub const fn step(self, dir: Direction) -> Option<Square> {
        self.offset(dir.d_row(), dir.d_col())
    }

    /// Iterate the squares from `self` (exclusive) toward the board edge along `dir`.
    pub fn ray(self, dir: Direction) -> impl Iterator<Item = Square> {
        std::iter::successors(self.step(dir), move |sq| sq.step(dir))
    }

    /// Iterate over all 64 squares in index order (A1, B1, ..., H8).
    pub fn all() -> impl Iterator<Item = Square> {
        (0u8..64).map(Square)
    }

    pub const A1: Square = Square(0);
    pub const B1: Square = Square(1);
    pub const C1: Square = Square(2);
    pub const D1: Square = Square(3);
    pub const E1: Square = Square(4);
    pub const F1: Square = Square(5);
    pub const G1: Square = Square(6);
    pub const H1: Square = Square(7);
    pub const A2: Square = Square(8);
    pub const B2: Square = Square(9);
    pub const C2: Square = Square(10);
    pub const D2: Square = Square(11);
    pub const E2: Square = Square(12);
    pub const F2: Square = Square(13);
    pub const G2: Square = Square(14);
    pub const H2: Square = Square(15);
    pub const A3: Square = Square(16);
    pub const B3: Square = Square(17);
    pub const C3: Square = Square(18);
    pub const D3: Square = Square(19);
    pub const E3: Square = Square(20);
    pub const F3: Square = Square(21);
    pub const G3: Square = Square(22);
    pub const H3: Square = Square(23);
    pub const A4: Square = Square(24);
    pub const B4: Square = Square(25);
    pub const C4: Square = Square(26);
    pub const D4: Square = Square(27);
    pub const E4: Square = Square(28);
    pub const F4: Square = Square(29);
    pub const G4: Square = Square(30);
    pub const H4: Square = Square(31);
    pub const A5: Square = Square(32);
    pub const B5: Square = Square(33);
    pub const C5: Square = Square(34);
    pub const D5: Square = Square(35);
    pub const E5: Square = Square(36);
    pub const F5: Square = Square(37);
    pub const G5: Square = Square(38);
    pub const H5: Square = Square(39);
    pub const A6: Square = Square(40);
    pub const B6: Square = Square(41);
    pub const C6: Square = Square(42);
    pub const D6: Square = Square(43);
    pub const E6: Square = Square(44);
    pub const F6: Square = Square(45);
    pub const G6: Square = Square(46);
    pub const H6: Square = Square(47);
    pub const A7: Square = Square(48);
    pub const B7: Square = Square(49);
    pub const C7: Square = Square(50);
    pub const D7: Square = Square(51);
    pub const E7: Square = Square(52);
    pub const F7: Square = Square(53);
    pub const G7: Square = Square(54);
    pub const H7: Square = Square(55);
    pub const A8: Square = Square(56);
    pub const B8: Square = Square(57);
    pub const C8: Square = Square(58);
    pub const D8: Square = Square(59);
    pub const E8: Square = Square(60);
    pub const F8: Square = Square(61);
    pub const G8: Square = Square(62);
    pub const H8: Square = Square(63);
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file(), self.rank())
    }
}

impl fmt::Debug for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Square({})", self)
    }
}
