//! Side colors and the per-side rank geometry the rules depend on.

use std::fmt;
use std::ops::Not;

use crate::rank::Rank;

/// A side: White or Black.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Color {
    White = 0,
    Black = 1,
}

impl Color {
    /// Total number of colors.
    pub const COUNT: usize = 2;

    /// All colors in index order.
    pub const ALL: [Color; 2] = [Color::White, Color::Black];

    /// Return the index (0 for White, 1 for Black).
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Return the opposite color.
    #[inline]
    pub const fn flip(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Row delta of a single pawn step for this side (+1 for White, -1 for Black).
    #[inline]
    pub const fn forward(self) -> i8 {
        match self {
            Color::White => 1,
            Color::Black => -1,
        }
    }

    /// Rank holding this side's king and rooks at the start of a game.
    #[inline]
    pub const fn back_rank(self) -> Rank {
        match self {
            Color::White => Rank::Rank1,
            Color::Black => Rank::Rank8,
        }
    }

    /// Rank this side's pawns start on.
    #[inline]
    pub const fn pawn_rank(self) -> Rank {
        match self {
            Color::White => Rank::Rank2,
            Color::Black => Rank::Rank7,
        }
    }

    /// Rank a pawn of this side must stand on to capture en passant.
    #[inline]
    pub const fn en_passant_rank(self) -> Rank {
        match self {
            Color::White => Rank::Rank5,
            Color::Black => Rank::Rank4,
        }
    }

    /// Rank on which a pawn of this side promotes.
    #[inline]
    pub const fn promotion_rank(self) -> Rank {
        match self {
            Color::White => Rank::Rank8,
            Color::Black => Rank::Rank1,
        }
    }

    /// Lowercase English name, used in log fields and error messages.
    pub const fn name(self) -> &'static str {
        match self {
            Color::White => "white",
            Color::Black => "black",
        }
    }
}

impl Not for Color {
    type Output = Color;

    #[inline]
    fn not(self) -> Color {
        self.flip()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "w"),
            Color::Black => write!(f, "b"),
        }
    }
}
