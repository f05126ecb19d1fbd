//! Attack detection on a piece grid.
//!
//! Every question here is asked of a [`Placement`], so callers can pass either
//! the live grid or a simulated copy.

use crate::color::Color;
use crate::direction::Direction;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::placement::Placement;
use crate::square::Square;

/// Return the first occupied square strictly between `from` and `to`.
///
/// Returns `None` when the line is clear or the squares are not aligned.
pub fn first_blocker(placement: &Placement, from: Square, to: Square) -> Option<Square> {
    let dir = Direction::between(from, to)?;
    from.ray(dir)
        .take_while(|&sq| sq != to)
        .find(|&sq| !placement.is_empty(sq))
}

/// Return `true` if `piece`, standing on `from`, attacks `target`.
///
/// Pawns attack diagonally forward only. Sliders need a clear line. The
/// occupant of `target` is not considered.
pub fn attacks(placement: &Placement, from: Square, piece: Piece, target: Square) -> bool {
    let d_row = target.row() as i8 - from.row() as i8;
    let d_col = target.col() as i8 - from.col() as i8;
    match piece.kind() {
        PieceKind::Pawn => d_row == piece.color().forward() && d_col.abs() == 1,
        PieceKind::Knight => matches!((d_row.abs(), d_col.abs()), (1, 2) | (2, 1)),
        PieceKind::King => (d_row, d_col) != (0, 0) && d_row.abs() <= 1 && d_col.abs() <= 1,
        PieceKind::Bishop | PieceKind::Rook | PieceKind::Queen => {
            Direction::between(from, target).is_some_and(|dir| {
                slides_along(piece.kind(), dir) && first_blocker(placement, from, target).is_none()
            })
        }
    }
}

/// Return `true` if a slider of `kind` moves along `dir`.
#[inline]
pub(crate) fn slides_along(kind: PieceKind, dir: Direction) -> bool {
    if dir.is_diagonal() {
        kind.slides_diagonally()
    } else {
        kind.slides_straight()
    }
}

/// Return `true` if any piece of `by` attacks `sq`.
pub fn is_attacked(placement: &Placement, sq: Square, by: Color) -> bool {
    placement
        .pieces_of(by)
        .any(|(from, piece)| attacks(placement, from, piece, sq))
}

/// Return `true` if `color`'s king is attacked.
pub fn is_in_check(placement: &Placement, color: Color) -> bool {
    is_attacked(placement, placement.king_square(color), !color)
}
