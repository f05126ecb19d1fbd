//! Castling, en passant and promotion detection.

use crate::attacks::is_in_check;
use crate::board::Board;
use crate::castle_rights::CastleSide;
use crate::color::Color;
use crate::direction::Direction;
use crate::error::CastlingFailure;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::square::Square;

/// Check every precondition for `color` castling toward `side`.
///
/// The king and the corner rook must both be unmoved, the squares between
/// them empty, and the king may not be in check, pass through an attacked
/// square, or land on one. Attacks on the squares the king crosses are found
/// by simulating the king standing on each of them.
pub fn check_castling(board: &Board, color: Color, side: CastleSide) -> Result<(), CastlingFailure> {
    let king_sq = CastleSide::king_origin(color);
    let king = board
        .piece_at(king_sq)
        .filter(|p| p.is(PieceKind::King, color))
        .ok_or(CastlingFailure::KingMoved)?;
    if board.has_moved(king.id()) {
        return Err(CastlingFailure::KingMoved);
    }

    let rook_sq = side.rook_origin(color);
    let rook = board
        .piece_at(rook_sq)
        .filter(|p| p.is(PieceKind::Rook, color))
        .ok_or(CastlingFailure::RookMissing)?;
    if board.has_moved(rook.id()) {
        return Err(CastlingFailure::RookMoved);
    }

    let toward = toward_rook(side);
    if let Some(square) = king_sq
        .ray(toward)
        .take_while(|&sq| sq != rook_sq)
        .find(|&sq| board.piece_at(sq).is_some())
    {
        return Err(CastlingFailure::PathOccupied { square });
    }

    let placement = board.placement();
    if is_in_check(placement, color) {
        return Err(CastlingFailure::KingInCheck);
    }

    let destination = side.king_destination(color);
    for square in king_sq.ray(toward) {
        let mut simulated = *placement;
        simulated.relocate(king_sq, square);
        if is_in_check(&simulated, color) {
            return Err(if square == destination {
                CastlingFailure::DestinationAttacked { square }
            } else {
                CastlingFailure::PassesThroughCheck { square }
            });
        }
        if square == destination {
            break;
        }
    }
    Ok(())
}

fn toward_rook(side: CastleSide) -> Direction {
    match side {
        CastleSide::KingSide => Direction::EAST,
        CastleSide::QueenSide => Direction::WEST,
    }
}

/// Return the square of the pawn captured if the pawn on `from` takes en
/// passant by moving to `to`.
///
/// The capturer must stand on its fifth rank and step diagonally forward onto
/// an empty square, and the last move must have been a double step by an
/// enemy pawn that landed beside it on the file of `to`.
pub fn en_passant_victim(board: &Board, from: Square, to: Square) -> Option<Square> {
    let pawn = board
        .piece_at(from)
        .filter(|p| p.kind() == PieceKind::Pawn)?;
    let color = pawn.color();
    let d_row = to.row() as i8 - from.row() as i8;
    if from.rank() != color.en_passant_rank()
        || d_row != color.forward()
        || from.col().abs_diff(to.col()) != 1
        || board.piece_at(to).is_some()
    {
        return None;
    }

    let last = board.last_move()?;
    let victim_sq = Square::new(from.rank(), to.file());
    let victim = board.piece_at(victim_sq)?;
    let passed = last.is_double_step()
        && last.to() == victim_sq
        && last.piece().id() == victim.id()
        && victim.is(PieceKind::Pawn, !color);
    passed.then_some(victim_sq)
}

/// Return `true` if `piece` arriving on `to` must promote.
#[inline]
pub fn is_promotion(piece: Piece, to: Square) -> bool {
    piece.kind() == PieceKind::Pawn && to.rank() == piece.color().promotion_rank()
}
