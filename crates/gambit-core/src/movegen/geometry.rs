//! Per-kind movement shapes and path clearance.
//!
//! These checks look only at how a piece moves and what stands in its way.
//! Turn order, castling, en passant and king safety are handled elsewhere.

use crate::attacks::{first_blocker, slides_along};
use crate::direction::Direction;
use crate::error::Rejection;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::placement::Placement;
use crate::square::Square;

/// Offsets of the eight knight jumps as (row, col).
pub(crate) const KNIGHT_JUMPS: [(i8, i8); 8] = [
    (1, 2),
    (2, 1),
    (2, -1),
    (1, -2),
    (-1, -2),
    (-2, -1),
    (-2, 1),
    (-1, 2),
];

/// Check that `piece` may travel from `from` to `to` by its ordinary movement.
///
/// `first_move` enables the pawn double step. The caller has already ruled
/// out a friendly piece on `to`. A pawn's diagonal step is accepted only as a
/// capture; an empty diagonal target is en passant territory and is refused here.
pub fn check_geometry(
    placement: &Placement,
    from: Square,
    to: Square,
    piece: Piece,
    first_move: bool,
) -> Result<(), Rejection> {
    let d_row = to.row() as i8 - from.row() as i8;
    let d_col = to.col() as i8 - from.col() as i8;
    let illegal = Rejection::IllegalGeometry { kind: piece.kind() };

    match piece.kind() {
        PieceKind::Pawn => {
            let forward = piece.color().forward();
            if d_col == 0 && d_row == forward {
                require_empty(placement, to)
            } else if d_col == 0 && d_row == 2 * forward && first_move {
                let Some(skipped) = from.offset(forward, 0) else {
                    return Err(illegal);
                };
                require_empty(placement, skipped)?;
                require_empty(placement, to)
            } else if d_col.abs() == 1 && d_row == forward && !placement.is_empty(to) {
                Ok(())
            } else {
                Err(illegal)
            }
        }
        PieceKind::Knight => {
            if KNIGHT_JUMPS.contains(&(d_row, d_col)) {
                Ok(())
            } else {
                Err(illegal)
            }
        }
        PieceKind::King => {
            if (d_row, d_col) != (0, 0) && d_row.abs() <= 1 && d_col.abs() <= 1 {
                Ok(())
            } else {
                Err(illegal)
            }
        }
        PieceKind::Bishop | PieceKind::Rook | PieceKind::Queen => {
            match Direction::between(from, to) {
                Some(dir) if slides_along(piece.kind(), dir) => {
                    match first_blocker(placement, from, to) {
                        Some(square) => Err(Rejection::PathBlocked { square }),
                        None => Ok(()),
                    }
                }
                _ => Err(illegal),
            }
        }
    }
}

fn require_empty(placement: &Placement, sq: Square) -> Result<(), Rejection> {
    if placement.is_empty(sq) {
        Ok(())
    } else {
        Err(Rejection::PathBlocked { square: sq })
    }
}

#[cfg(test)]
mod tests {
    use super::check_geometry;
    use crate::board::Board;
    use crate::error::Rejection;
    use crate::piece_kind::PieceKind;
    use crate::square::Square;

    fn geometry(board: &Board, from: Square, to: Square, first_move: bool) -> Result<(), Rejection> {
        let piece = board.piece_at(from).unwrap();
        check_geometry(board.placement(), from, to, piece, first_move)
    }

    #[test]
    fn pawn_pushes() {
        let board = Board::starting_position();
        assert_eq!(geometry(&board, Square::E2, Square::E3, true), Ok(()));
        assert_eq!(geometry(&board, Square::E2, Square::E4, true), Ok(()));
        assert_eq!(
            geometry(&board, Square::E2, Square::E4, false),
            Err(Rejection::IllegalGeometry {
                kind: PieceKind::Pawn
            })
        );
        assert_eq!(geometry(&board, Square::E7, Square::E5, true), Ok(()));
        assert!(geometry(&board, Square::E2, Square::E5, true).is_err());
    }

    #[test]
    fn pawn_never_moves_backward() {
        let board: Board = "4k3/8/8/8/4P3/8/8/4K3 w - - 0 1".parse().unwrap();
        assert_eq!(
            geometry(&board, Square::E4, Square::E3, false),
            Err(Rejection::IllegalGeometry {
                kind: PieceKind::Pawn
            })
        );
    }

    #[test]
    fn pawn_blocked() {
        let board: Board = "4k3/8/8/8/8/4n3/4P3/4K3 w - - 0 1".parse().unwrap();
        assert_eq!(
            geometry(&board, Square::E2, Square::E3, true),
            Err(Rejection::PathBlocked { square: Square::E3 })
        );
        assert_eq!(
            geometry(&board, Square::E2, Square::E4, true),
            Err(Rejection::PathBlocked { square: Square::E3 })
        );
    }

    #[test]
    fn pawn_captures_diagonally_only_onto_pieces() {
        let board: Board = "4k3/8/8/8/8/3n4/4P3/4K3 w - - 0 1".parse().unwrap();
        assert_eq!(geometry(&board, Square::E2, Square::D3, true), Ok(()));
        assert!(geometry(&board, Square::E2, Square::F3, true).is_err());
    }

    #[test]
    fn knight_jumps() {
        let board = Board::starting_position();
        assert_eq!(geometry(&board, Square::G1, Square::F3, true), Ok(()));
        assert_eq!(geometry(&board, Square::G1, Square::H3, true), Ok(()));
        assert_eq!(
            geometry(&board, Square::G1, Square::G3, true),
            Err(Rejection::IllegalGeometry {
                kind: PieceKind::Knight
            })
        );
    }

    #[test]
    fn sliders_report_first_blocker() {
        let board = Board::starting_position();
        assert_eq!(
            geometry(&board, Square::A1, Square::A5, true),
            Err(Rejection::PathBlocked { square: Square::A2 })
        );
        assert_eq!(
            geometry(&board, Square::C1, Square::F4, true),
            Err(Rejection::PathBlocked { square: Square::D2 })
        );
        assert_eq!(
            geometry(&board, Square::C1, Square::C4, true),
            Err(Rejection::IllegalGeometry {
                kind: PieceKind::Bishop
            })
        );
        assert_eq!(
            geometry(&board, Square::D1, Square::E3, true),
            Err(Rejection::IllegalGeometry {
                kind: PieceKind::Queen
            })
        );
    }

    #[test]
    fn king_steps_once() {
        let board: Board = "4k3/8/8/8/8/8/8/4K3 w - - 0 1".parse().unwrap();
        assert_eq!(geometry(&board, Square::E1, Square::F2, false), Ok(()));
        assert!(geometry(&board, Square::E1, Square::E3, false).is_err());
        assert!(geometry(&board, Square::E1, Square::G1, false).is_err());
    }
}
