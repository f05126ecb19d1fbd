//! Chess piece kinds.

use std::fmt;

/// The kind of a chess piece, without color or identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum PieceKind {
    Pawn = 0,
    Knight = 1,
    Bishop = 2,
    Rook = 3,
    Queen = 4,
    King = 5,
}

impl PieceKind {
    /// Total number of piece kinds.
    pub const COUNT: usize = 6;

    /// All piece kinds in index order.
    pub const ALL: [PieceKind; 6] = [
        PieceKind::Pawn,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
        PieceKind::King,
    ];

    /// Return the index (0..5).
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Return `true` for rooks and queens, which slide along ranks and files.
    #[inline]
    pub const fn slides_straight(self) -> bool {
        matches!(self, PieceKind::Rook | PieceKind::Queen)
    }

    /// Return `true` for bishops and queens, which slide along diagonals.
    #[inline]
    pub const fn slides_diagonally(self) -> bool {
        matches!(self, PieceKind::Bishop | PieceKind::Queen)
    }

    /// Return the FEN character for this piece kind (lowercase).
    #[inline]
    pub const fn fen_char(self) -> char {
        match self {
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Rook => 'r',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        }
    }

    /// Parse a FEN character (case-insensitive) into a piece kind.
    #[inline]
    pub fn from_fen_char(c: char) -> Option<PieceKind> {
        match c.to_ascii_lowercase() {
            'p' => Some(PieceKind::Pawn),
            'n' => Some(PieceKind::Knight),
            'b' => Some(PieceKind::Bishop),
            'r' => Some(PieceKind::Rook),
            'q' => Some(PieceKind::Queen),
            'k' => Some(PieceKind::King),
            _ => None,
        }
    }

    /// Lowercase English name.
    pub const fn name(self) -> &'static str {
        match self {
            PieceKind::Pawn => "pawn",
            PieceKind::Knight => "knight",
            PieceKind::Bishop => "bishop",
            PieceKind::Rook => "rook",
            PieceKind::Queen => "queen",
            PieceKind::King => "king",
        }
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::PieceKind;

    #[test]
    fn fen_char_roundtrip() {
        for kind in PieceKind::ALL {
            let c = kind.fen_char();
            assert_eq!(PieceKind::from_fen_char(c), Some(kind));
            assert_eq!(PieceKind::from_fen_char(c.to_ascii_uppercase()), Some(kind));
        }
        assert_eq!(PieceKind::from_fen_char('x'), None);
    }

    #[test]
    fn slider_classes() {
        assert!(PieceKind::Rook.slides_straight());
        assert!(!PieceKind::Rook.slides_diagonally());
        assert!(PieceKind::Bishop.slides_diagonally());
        assert!(!PieceKind::Bishop.slides_straight());
        assert!(PieceKind::Queen.slides_straight() && PieceKind::Queen.slides_diagonally());
        for kind in [PieceKind::Pawn, PieceKind::Knight, PieceKind::King] {
            assert!(!kind.slides_straight() && !kind.slides_diagonally(), "{kind}");
        }
    }

    #[test]
    fn display_uses_name() {
        assert_eq!(format!("{}", PieceKind::Knight), "knight");
    }
}
