//! The move record appended to the move log.

use std::fmt;

use crate::castle_rights::CastleSide;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::square::Square;

/// The piece a pawn promotes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum PromotionPiece {
    Knight = 0,
    Bishop = 1,
    Rook = 2,
    Queen = 3,
}

impl PromotionPiece {
    /// All promotion pieces in index order.
    pub const ALL: [PromotionPiece; 4] = [
        PromotionPiece::Knight,
        PromotionPiece::Bishop,
        PromotionPiece::Rook,
        PromotionPiece::Queen,
    ];

    /// Convert to the corresponding [`PieceKind`].
    pub const fn to_piece_kind(self) -> PieceKind {
        match self {
            PromotionPiece::Knight => PieceKind::Knight,
            PromotionPiece::Bishop => PieceKind::Bishop,
            PromotionPiece::Rook => PieceKind::Rook,
            PromotionPiece::Queen => PieceKind::Queen,
        }
    }

    /// Parse a promotion letter (`n`, `b`, `r`, `q`, case-insensitive).
    pub fn from_char(c: char) -> Option<PromotionPiece> {
        match c.to_ascii_lowercase() {
            'n' => Some(PromotionPiece::Knight),
            'b' => Some(PromotionPiece::Bishop),
            'r' => Some(PromotionPiece::Rook),
            'q' => Some(PromotionPiece::Queen),
            _ => None,
        }
    }

    /// Return the lowercase letter for this promotion.
    pub const fn to_char(self) -> char {
        self.to_piece_kind().fen_char()
    }
}

/// The category of a move, including the chosen promotion kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveKind {
    /// A quiet move or an ordinary capture.
    Normal,
    /// King and rook repositioning toward the given side.
    Castling(CastleSide),
    /// Pawn capture of a pawn that just advanced two squares.
    EnPassant,
    /// Pawn reaching its last rank, replaced by the given piece.
    Promotion(PromotionPiece),
}

/// A completed (or fully validated) move.
///
/// Records the moving piece and any captured piece with their identities, so
/// the log can answer "which pawn moved last" without consulting the board.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    from: Square,
    to: Square,
    piece: Piece,
    captured: Option<Piece>,
    kind: MoveKind,
}

impl Move {
    /// Create a move record.
    pub const fn new(
        from: Square,
        to: Square,
        piece: Piece,
        captured: Option<Piece>,
        kind: MoveKind,
    ) -> Move {
        Move {
            from,
            to,
            piece,
            captured,
            kind,
        }
    }

    /// Return the source square.
    #[inline]
    pub const fn from(self) -> Square {
        self.from
    }

    /// Return the destination square.
    #[inline]
    pub const fn to(self) -> Square {
        self.to
    }

    /// Return the piece that moved, as it was before the move.
    #[inline]
    pub const fn piece(self) -> Piece {
        self.piece
    }

    /// Return the captured piece, if any. For en passant this is the passed pawn.
    #[inline]
    pub const fn captured(self) -> Option<Piece> {
        self.captured
    }

    /// Return the move kind.
    #[inline]
    pub const fn kind(self) -> MoveKind {
        self.kind
    }

    /// Return `true` if this is a castling move.
    #[inline]
    pub const fn is_castle(self) -> bool {
        matches!(self.kind, MoveKind::Castling(_))
    }

    /// Return `true` if this is an en passant capture.
    #[inline]
    pub const fn is_en_passant(self) -> bool {
        matches!(self.kind, MoveKind::EnPassant)
    }

    /// Return `true` if this is a promotion.
    #[inline]
    pub const fn is_promotion(self) -> bool {
        matches!(self.kind, MoveKind::Promotion(_))
    }

    /// Return `true` if a piece was captured.
    #[inline]
    pub const fn is_capture(self) -> bool {
        self.captured.is_some()
    }

    /// Return the chosen promotion piece, if this is a promotion.
    #[inline]
    pub const fn promotion(self) -> Option<PromotionPiece> {
        match self.kind {
            MoveKind::Promotion(promo) => Some(promo),
            _ => None,
        }
    }

    /// Return the castling side, if this is a castling move.
    #[inline]
    pub const fn castle_side(self) -> Option<CastleSide> {
        match self.kind {
            MoveKind::Castling(side) => Some(side),
            _ => None,
        }
    }

    /// Return this move with a different promotion choice.
    ///
    /// Moves that are not promotions are returned unchanged.
    pub const fn with_promotion(self, promo: PromotionPiece) -> Move {
        match self.kind {
            MoveKind::Promotion(_) => Move {
                kind: MoveKind::Promotion(promo),
                ..self
            },
            _ => self,
        }
    }

    /// Return `true` if this pawn move advanced exactly two ranks.
    pub fn is_double_step(self) -> bool {
        self.piece.kind() == PieceKind::Pawn && self.from.row().abs_diff(self.to.row()) == 2
    }

    /// Return the coordinate form (`e2e4`, `e7e8q`).
    pub fn to_coordinate(self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)?;
        if let Some(promo) = self.promotion() {
            write!(f, "{}", promo.to_char())?;
        }
        Ok(())
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({} {:?} kind={:?}", self, self.piece, self.kind)?;
        if let Some(captured) = self.captured {
            write!(f, " captured={captured:?}")?;
        }
        write!(f, ")")
    }
}
