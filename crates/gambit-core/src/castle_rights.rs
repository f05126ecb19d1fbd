//! Castling sides, their fixed squares, and the FEN castling field.

use std::fmt;

use crate::color::Color;
use crate::error::FenError;
use crate::file::File;
use crate::square::Square;

/// Which side of the board to castle toward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CastleSide {
    KingSide,
    QueenSide,
}

impl CastleSide {
    /// Both sides, king side first.
    pub const ALL: [CastleSide; 2] = [CastleSide::KingSide, CastleSide::QueenSide];

    /// Square the king starts from.
    #[inline]
    pub const fn king_origin(color: Color) -> Square {
        Square::new(color.back_rank(), File::FileE)
    }

    /// Square the king lands on.
    #[inline]
    pub const fn king_destination(self, color: Color) -> Square {
        let file = match self {
            CastleSide::KingSide => File::FileG,
            CastleSide::QueenSide => File::FileC,
        };
        Square::new(color.back_rank(), file)
    }

    /// Corner square the rook starts from.
    #[inline]
    pub const fn rook_origin(self, color: Color) -> Square {
        let file = match self {
            CastleSide::KingSide => File::FileH,
            CastleSide::QueenSide => File::FileA,
        };
        Square::new(color.back_rank(), file)
    }

    /// Square the rook lands on, next to the king on the inside.
    #[inline]
    pub const fn rook_destination(self, color: Color) -> Square {
        let file = match self {
            CastleSide::KingSide => File::FileF,
            CastleSide::QueenSide => File::FileD,
        };
        Square::new(color.back_rank(), file)
    }

    /// Classify a king move from `from` to `to` as castling, if it has that shape.
    pub fn from_king_move(color: Color, from: Square, to: Square) -> Option<CastleSide> {
        if from != Self::king_origin(color) {
            return None;
        }
        CastleSide::ALL
            .into_iter()
            .find(|side| side.king_destination(color) == to)
    }
}

/// Castling availability as written in FEN: bit 0 = K, 1 = Q, 2 = k, 3 = q.
///
/// The rules themselves never consult this; they look at whether the king and
/// rook have moved. It only bridges FEN text and the board's moved-piece set.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct CastleRights(u8);

impl CastleRights {
    /// No castling rights.
    pub const NONE: CastleRights = CastleRights(0);
    /// All castling rights.
    pub const ALL: CastleRights = CastleRights(0b1111);

    /// Return `true` if no castling rights remain.
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Check whether a specific color and side can castle.
    #[inline]
    pub const fn has(self, color: Color, side: CastleSide) -> bool {
        (self.0 & Self::flag(color, side)) != 0
    }

    /// Return new rights with the given color and side added.
    #[inline]
    pub const fn with(self, color: Color, side: CastleSide) -> CastleRights {
        CastleRights(self.0 | Self::flag(color, side))
    }

    #[inline]
    const fn flag(color: Color, side: CastleSide) -> u8 {
        match (color, side) {
            (Color::White, CastleSide::KingSide) => 0b0001,
            (Color::White, CastleSide::QueenSide) => 0b0010,
            (Color::Black, CastleSide::KingSide) => 0b0100,
            (Color::Black, CastleSide::QueenSide) => 0b1000,
        }
    }

    /// Parse the FEN castling field (e.g. "KQkq", "Kq", "-").
    pub fn from_fen(s: &str) -> Result<CastleRights, FenError> {
        if s == "-" {
            return Ok(CastleRights::NONE);
        }

        let mut rights = CastleRights::NONE;
        for c in s.chars() {
            let (color, side) = match c {
                'K' => (Color::White, CastleSide::KingSide),
                'Q' => (Color::White, CastleSide::QueenSide),
                'k' => (Color::Black, CastleSide::KingSide),
                'q' => (Color::Black, CastleSide::QueenSide),
                _ => return Err(FenError::InvalidCastlingChar { character: c }),
            };
            rights = rights.with(color, side);
        }
        Ok(rights)
    }

    /// Serialize to the FEN castling field.
    pub fn to_fen(self) -> String {
        if self.is_empty() {
            return "-".to_string();
        }
        let letters = [
            (Color::White, CastleSide::KingSide, 'K'),
            (Color::White, CastleSide::QueenSide, 'Q'),
            (Color::Black, CastleSide::KingSide, 'k'),
            (Color::Black, CastleSide::QueenSide, 'q'),
        ];
        letters
            .into_iter()
            .filter(|&(color, side, _)| self.has(color, side))
            .map(|(_, _, c)| c)
            .collect()
    }
}

impl fmt::Display for CastleRights {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_fen())
    }
}

impl fmt::Debug for CastleRights {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CastleRights({})", self.to_fen())
    }
}
