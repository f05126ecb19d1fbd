//! Pieces with a stable identity.
//!
//! Castling and the pawn double step depend on whether a *particular* piece has
//! moved, and en passant on whether the last move was made by a particular
//! pawn, so every piece carries a [`PieceId`] that survives relocation. Two
//! pieces of the same kind and color are different pieces.

use std::fmt;

use crate::color::Color;
use crate::piece_kind::PieceKind;

/// Stable per-game identifier of one piece.
///
/// Ids are handed out in placement order when a position is set up; promotion
/// mints a fresh id for the new piece.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PieceId(u16);

impl PieceId {
    /// Create an id from its raw value.
    #[inline]
    pub const fn new(raw: u16) -> PieceId {
        PieceId(raw)
    }

    /// Return the raw value.
    #[inline]
    pub const fn raw(self) -> u16 {
        self.0
    }

    /// Return the id after this one.
    #[inline]
    pub(crate) const fn next(self) -> PieceId {
        PieceId(self.0 + 1)
    }
}

impl fmt::Debug for PieceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A piece on the board: identity, kind and color.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    id: PieceId,
    kind: PieceKind,
    color: Color,
}

impl Piece {
    /// Create a piece.
    #[inline]
    pub const fn new(id: PieceId, kind: PieceKind, color: Color) -> Piece {
        Piece { id, kind, color }
    }

    /// Return the piece's identity.
    #[inline]
    pub const fn id(self) -> PieceId {
        self.id
    }

    /// Return the piece kind.
    #[inline]
    pub const fn kind(self) -> PieceKind {
        self.kind
    }

    /// Return the piece color.
    #[inline]
    pub const fn color(self) -> Color {
        self.color
    }

    /// Return `true` if this piece has the given kind and color.
    #[inline]
    pub fn is(self, kind: PieceKind, color: Color) -> bool {
        self.kind == kind && self.color == color
    }

    /// Return the FEN character: uppercase for White, lowercase for Black.
    #[inline]
    pub fn fen_char(self) -> char {
        let base = self.kind.fen_char();
        match self.color {
            Color::White => base.to_ascii_uppercase(),
            Color::Black => base,
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.fen_char())
    }
}

impl fmt::Debug for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{:?}", self.fen_char(), self.id)
    }
}
