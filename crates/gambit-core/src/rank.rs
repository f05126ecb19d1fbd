//! Board ranks (rows 1–8).

use std::fmt;

/// A rank (row) on the board, from Rank1 (White's back rank) to Rank8.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Rank {
    Rank1 = 0,
    Rank2 = 1,
    Rank3 = 2,
    Rank4 = 3,
    Rank5 = 4,
    Rank6 = 5,
    Rank7 = 6,
    Rank8 = 7,
}

impl Rank {
    /// Total number of ranks.
    pub const COUNT: usize = 8;

    /// All ranks in index order.
    pub const ALL: [Rank; 8] = [
        Rank::Rank1,
        Rank::Rank2,
        Rank::Rank3,
        Rank::Rank4,
        Rank::Rank5,
        Rank::Rank6,
        Rank::Rank7,
        Rank::Rank8,
    ];

    /// Return the index (0..7), which is also the row of a square.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Create a rank from a zero-based index (0 = Rank1, 7 = Rank8).
    #[inline]
    pub const fn from_index(index: u8) -> Option<Rank> {
        if index < 8 {
            Some(Rank::ALL[index as usize])
        } else {
            None
        }
    }

    /// Parse a rank digit (`'1'..='8'`).
    pub fn from_char(c: char) -> Option<Rank> {
        if c.is_ascii_digit() {
            Rank::from_index((c as u8).wrapping_sub(b'1'))
        } else {
            None
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.index() + 1)
    }
}
