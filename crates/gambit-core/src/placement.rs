//! The 8×8 grid of pieces plus the cached king squares.
//!
//! A [`Placement`] is `Copy`, so "what would the board look like after this
//! move" is answered by copying it and playing the move on the copy. The live
//! grid inside a [`Board`](crate::Board) is never touched by such questions.

use std::collections::HashSet;

use crate::chess_move::{Move, MoveKind};
use crate::color::Color;
use crate::error::BoardError;
use crate::piece::{Piece, PieceId};
use crate::piece_kind::PieceKind;
use crate::square::Square;

/// Piece placement with cached king locations.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    squares: [Option<Piece>; Square::COUNT],
    /// King square per color, indexed by [`Color::index()`].
    kings: [Square; Color::COUNT],
}

impl Placement {
    /// Build a placement from a full grid, locating both kings.
    pub(crate) fn from_squares(squares: [Option<Piece>; Square::COUNT]) -> Result<Placement, BoardError> {
        let mut kings = [None; Color::COUNT];
        for color in Color::ALL {
            let mut found = Square::all().filter(|&sq| {
                squares[sq.index()].is_some_and(|p| p.is(PieceKind::King, color))
            });
            let first = found.next();
            let extra = found.count() as u32;
            match first {
                Some(sq) if extra == 0 => kings[color.index()] = Some(sq),
                _ => {
                    return Err(BoardError::InvalidKingCount {
                        color,
                        count: u32::from(first.is_some()) + extra,
                    });
                }
            }
        }
        match kings {
            [Some(white), Some(black)] => Ok(Placement {
                squares,
                kings: [white, black],
            }),
            _ => unreachable!("both king squares were filled above"),
        }
    }

    /// Return the piece on `sq`, if any.
    #[inline]
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.squares[sq.index()]
    }

    /// Return `true` if no piece stands on `sq`.
    #[inline]
    pub fn is_empty(&self, sq: Square) -> bool {
        self.squares[sq.index()].is_none()
    }

    /// Return the cached king square of `color`.
    #[inline]
    pub fn king_square(&self, color: Color) -> Square {
        self.kings[color.index()]
    }

    /// Iterate every occupied square with its piece, in square order.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(|sq| self.piece_at(sq).map(|p| (sq, p)))
    }

    /// Iterate the pieces of one color, in square order.
    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.pieces().filter(move |(_, p)| p.color() == color)
    }

    /// Return the number of pieces on the board.
    pub fn piece_count(&self) -> usize {
        self.squares.iter().flatten().count()
    }

    /// Move whatever stands on `from` to `to`, returning the piece that was on `to`.
    ///
    /// Keeps the king cache in step. Kings are never captured, so `to` must not
    /// hold a king.
    pub(crate) fn relocate(&mut self, from: Square, to: Square) -> Option<Piece> {
        let moving = self.squares[from.index()].take();
        let displaced = std::mem::replace(&mut self.squares[to.index()], moving);
        debug_assert!(
            displaced.is_none_or(|p| p.kind() != PieceKind::King),
            "a king was captured on {to}"
        );
        if let Some(piece) = moving
            && piece.kind() == PieceKind::King
        {
            self.kings[piece.color().index()] = to;
        }
        displaced
    }

    /// Remove and return the piece on `sq`. Never used on kings.
    pub(crate) fn remove(&mut self, sq: Square) -> Option<Piece> {
        let removed = self.squares[sq.index()].take();
        debug_assert!(removed.is_none_or(|p| p.kind() != PieceKind::King));
        removed
    }

    /// Put `piece` on `sq`, replacing whatever was there. Never used for kings.
    pub(crate) fn replace(&mut self, sq: Square, piece: Piece) {
        debug_assert!(piece.kind() != PieceKind::King);
        self.squares[sq.index()] = Some(piece);
    }

    /// Play `mv` on this grid: rook hop for castling, passed-pawn removal for
    /// en passant, the relocation itself, then promotion using `promoted_id`.
    pub(crate) fn play(&mut self, mv: &Move, promoted_id: PieceId) {
        let color = mv.piece().color();
        match mv.kind() {
            MoveKind::Castling(side) => {
                self.relocate(side.rook_origin(color), side.rook_destination(color));
            }
            MoveKind::EnPassant => {
                self.remove(Square::new(mv.from().rank(), mv.to().file()));
            }
            MoveKind::Normal | MoveKind::Promotion(_) => {}
        }
        self.relocate(mv.from(), mv.to());
        if let Some(promo) = mv.promotion() {
            self.replace(mv.to(), Piece::new(promoted_id, promo.to_piece_kind(), color));
        }
    }

    /// Return a copy of this grid with `mv` played on it.
    pub fn after(&self, mv: &Move) -> Placement {
        let mut next = *self;
        next.play(mv, mv.piece().id());
        next
    }

    /// Check the king cache, back-rank pawns and identity uniqueness.
    pub fn validate(&self) -> Result<(), BoardError> {
        for color in Color::ALL {
            let count = self
                .pieces_of(color)
                .filter(|(_, p)| p.kind() == PieceKind::King)
                .count() as u32;
            if count != 1 {
                return Err(BoardError::InvalidKingCount { color, count });
            }
            let cached = self.king_square(color);
            if !self.piece_at(cached).is_some_and(|p| p.is(PieceKind::King, color)) {
                return Err(BoardError::KingCacheMismatch { color, cached });
            }
        }

        let mut ids = HashSet::new();
        for (sq, piece) in self.pieces() {
            if piece.kind() == PieceKind::Pawn && (sq.row() == 0 || sq.row() == 7) {
                return Err(BoardError::PawnOnBackRank { square: sq });
            }
            if !ids.insert(piece.id()) {
                return Err(BoardError::DuplicatePieceId { id: piece.id().raw() });
            }
        }
        Ok(())
    }
}

impl std::fmt::Debug for Placement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_map()
            .entries(self.pieces().map(|(sq, p)| (sq, p.fen_char())))
            .finish()
    }
}
