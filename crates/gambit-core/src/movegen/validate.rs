//! The single-move validator shared by request handling and generation.

use crate::attacks::is_in_check;
use crate::board::Board;
use crate::castle_rights::CastleSide;
use crate::chess_move::{Move, MoveKind, PromotionPiece};
use crate::error::Rejection;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::placement::Placement;
use crate::square::Square;

use super::geometry::check_geometry;
use super::pins::{pin_direction, respects_pin};
use super::special::{check_castling, en_passant_victim, is_promotion};

/// Decide whether the side to move may play `from` → `to`.
///
/// Checks run in a fixed order and the first failure is reported: source
/// occupancy, ownership, friendly capture, castling/en passant/geometry,
/// pins, then a full simulation for king safety. A pawn reaching its last
/// rank yields a queen promotion; use [`Move::with_promotion`] to pick another
/// piece.
pub fn validate_move(board: &Board, from: Square, to: Square) -> Result<Move, Rejection> {
    let piece = board
        .piece_at(from)
        .ok_or(Rejection::NoPieceAtSource { square: from })?;
    if piece.color() != board.side_to_move() {
        return Err(Rejection::NotCurrentPlayersPiece {
            square: from,
            owner: piece.color(),
        });
    }
    vet(board, from, to, piece)
}

/// Run every rule except turn order for `piece` on `from` going to `to`.
pub(super) fn vet(board: &Board, from: Square, to: Square, piece: Piece) -> Result<Move, Rejection> {
    if board
        .piece_at(to)
        .is_some_and(|target| target.color() == piece.color())
    {
        return Err(Rejection::FriendlyCapture { square: to });
    }

    let mv = classify(board, from, to, piece)?;
    let placement = board.placement();

    if piece.kind() != PieceKind::King && !respects_pin(pin_direction(placement, from), from, to) {
        debug_assert!(
            !is_safe(placement, &mv),
            "pin check refused {mv} but simulation allows it"
        );
        return Err(Rejection::LeavesKingInCheck);
    }

    if !is_safe(placement, &mv) {
        return Err(Rejection::LeavesKingInCheck);
    }
    Ok(mv)
}

/// Work out what kind of move `from` → `to` would be, checking its shape.
fn classify(board: &Board, from: Square, to: Square, piece: Piece) -> Result<Move, Rejection> {
    let color = piece.color();

    if piece.kind() == PieceKind::King
        && let Some(side) = CastleSide::from_king_move(color, from, to)
    {
        check_castling(board, color, side)?;
        return Ok(Move::new(from, to, piece, None, MoveKind::Castling(side)));
    }

    let diagonal_step = to.row() as i8 - from.row() as i8 == color.forward()
        && from.col().abs_diff(to.col()) == 1;
    if piece.kind() == PieceKind::Pawn && diagonal_step && board.piece_at(to).is_none() {
        let victim_sq = en_passant_victim(board, from, to).ok_or(Rejection::EnPassant)?;
        return Ok(Move::new(
            from,
            to,
            piece,
            board.piece_at(victim_sq),
            MoveKind::EnPassant,
        ));
    }

    check_geometry(board.placement(), from, to, piece, !board.has_moved(piece.id()))?;
    let kind = if is_promotion(piece, to) {
        MoveKind::Promotion(PromotionPiece::Queen)
    } else {
        MoveKind::Normal
    };
    Ok(Move::new(from, to, piece, board.piece_at(to), kind))
}

/// Return `true` if playing `mv` leaves the mover's king unattacked.
pub fn is_safe(placement: &Placement, mv: &Move) -> bool {
    !is_in_check(&placement.after(mv), mv.piece().color())
}

#[cfg(test)]
mod tests {
    use super::validate_move;
    use crate::board::Board;
    use crate::castle_rights::CastleSide;
    use crate::chess_move::{MoveKind, PromotionPiece};
    use crate::color::Color;
    use crate::error::{CastlingFailure, Rejection};
    use crate::piece_kind::PieceKind;
    use crate::square::Square;

    fn board(fen: &str) -> Board {
        fen.parse().unwrap()
    }

    #[test]
    fn rejection_order() {
        let b = Board::starting_position();
        assert_eq!(
            validate_move(&b, Square::E4, Square::E5),
            Err(Rejection::NoPieceAtSource { square: Square::E4 })
        );
        assert_eq!(
            validate_move(&b, Square::E7, Square::E5),
            Err(Rejection::NotCurrentPlayersPiece {
                square: Square::E7,
                owner: Color::Black
            })
        );
        assert_eq!(
            validate_move(&b, Square::D1, Square::D2),
            Err(Rejection::FriendlyCapture { square: Square::D2 })
        );
        assert_eq!(
            validate_move(&b, Square::G1, Square::G3),
            Err(Rejection::IllegalGeometry {
                kind: PieceKind::Knight
            })
        );
        assert_eq!(
            validate_move(&b, Square::F1, Square::C4),
            Err(Rejection::PathBlocked { square: Square::E2 })
        );
    }

    #[test]
    fn plain_moves_are_classified() {
        let b = Board::starting_position();
        let mv = validate_move(&b, Square::E2, Square::E4).unwrap();
        assert_eq!(mv.kind(), MoveKind::Normal);
        assert!(!mv.is_capture());
        assert_eq!(mv.piece(), b.piece_at(Square::E2).unwrap());
    }

    #[test]
    fn pinned_piece_cannot_leave_line() {
        let b = board("4r2k/8/8/8/8/8/4R3/4K3 w - - 0 1");
        assert_eq!(
            validate_move(&b, Square::E2, Square::D2),
            Err(Rejection::LeavesKingInCheck)
        );
        assert!(validate_move(&b, Square::E2, Square::E5).is_ok());
        let capture = validate_move(&b, Square::E2, Square::E8).unwrap();
        assert_eq!(capture.captured().map(|p| p.kind()), Some(PieceKind::Rook));
    }

    #[test]
    fn must_answer_check() {
        let b = board("4k3/8/8/8/8/8/8/R3K2r w - - 0 1");
        assert_eq!(
            validate_move(&b, Square::A1, Square::A2),
            Err(Rejection::LeavesKingInCheck)
        );
        assert!(validate_move(&b, Square::E1, Square::E2).is_ok());
        assert_eq!(
            validate_move(&b, Square::E1, Square::F1),
            Err(Rejection::LeavesKingInCheck)
        );
    }

    #[test]
    fn king_cannot_step_next_to_king() {
        let b = board("8/8/8/3k4/8/3K4/8/8 w - - 0 1");
        assert_eq!(
            validate_move(&b, Square::D3, Square::D4),
            Err(Rejection::LeavesKingInCheck)
        );
    }

    #[test]
    fn castling_is_recognised() {
        let b = board("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1");
        let mv = validate_move(&b, Square::E1, Square::G1).unwrap();
        assert_eq!(mv.kind(), MoveKind::Castling(CastleSide::KingSide));
        let b = board("r3k2r/8/8/8/8/8/8/RN2K2R w KQkq - 0 1");
        assert_eq!(
            validate_move(&b, Square::E1, Square::C1),
            Err(Rejection::Castling(CastlingFailure::PathOccupied {
                square: Square::B1
            }))
        );
    }

    #[test]
    fn en_passant_is_recognised() {
        let b = board("4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 1");
        let mv = validate_move(&b, Square::E5, Square::D6).unwrap();
        assert_eq!(mv.kind(), MoveKind::EnPassant);
        assert_eq!(mv.captured(), b.piece_at(Square::D5));
        assert_eq!(
            validate_move(&b, Square::E5, Square::F6),
            Err(Rejection::EnPassant)
        );
    }

    #[test]
    fn en_passant_exposing_king_is_refused() {
        let b = board("4k3/8/8/KPp4r/8/8/8/8 w - c6 0 1");
        assert_eq!(
            validate_move(&b, Square::B5, Square::C6),
            Err(Rejection::LeavesKingInCheck)
        );
    }

    #[test]
    fn promotion_defaults_to_queen() {
        let b = board("4k3/P7/8/8/8/8/8/4K3 w - - 0 1");
        let mv = validate_move(&b, Square::A7, Square::A8).unwrap();
        assert_eq!(mv.promotion(), Some(PromotionPiece::Queen));
    }
}
