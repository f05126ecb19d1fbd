//! Pin detection.

use crate::attacks::{first_blocker, slides_along};
use crate::color::Color;
use crate::direction::Direction;
use crate::piece_kind::PieceKind;
use crate::placement::Placement;
use crate::square::Square;
use crate::square_set::SquareSet;

/// Return the line along which the piece on `sq` is pinned to its own king.
///
/// A piece is pinned when it shares a rank, file or diagonal with its king,
/// nothing stands between them, and the first piece beyond it on the far side
/// is an enemy slider that moves along that line. Kings are never pinned.
/// The returned direction points from the king toward the pinned piece.
pub fn pin_direction(placement: &Placement, sq: Square) -> Option<Direction> {
    let piece = placement.piece_at(sq)?;
    if piece.kind() == PieceKind::King {
        return None;
    }
    let king_sq = placement.king_square(piece.color());
    let dir = Direction::between(king_sq, sq)?;
    if first_blocker(placement, king_sq, sq).is_some() {
        return None;
    }
    let attacker = sq.ray(dir).find_map(|s| placement.piece_at(s))?;
    (attacker.color() != piece.color() && slides_along(attacker.kind(), dir)).then_some(dir)
}

/// Return `true` if a piece pinned along `pin` may travel from `from` to `to`.
///
/// An unpinned piece may always go; a pinned one must stay on the pin line.
pub fn respects_pin(pin: Option<Direction>, from: Square, to: Square) -> bool {
    match pin {
        None => true,
        Some(axis) => Direction::between(from, to).is_some_and(|dir| dir.is_parallel(axis)),
    }
}

/// Return the squares of every `color` piece pinned to its king.
pub fn pinned_pieces(placement: &Placement, color: Color) -> SquareSet {
    placement
        .pieces_of(color)
        .filter(|&(sq, _)| pin_direction(placement, sq).is_some())
        .map(|(sq, _)| sq)
        .collect()
}
