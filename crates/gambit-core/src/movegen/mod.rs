//! Legal move generation and validation.

mod geometry;
mod pins;
mod special;
mod validate;

use crate::board::Board;
use crate::castle_rights::CastleSide;
use crate::chess_move::{Move, PromotionPiece};
use crate::direction::Direction;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::square::Square;
use crate::square_set::SquareSet;

pub use self::geometry::check_geometry;
pub use self::pins::{pin_direction, pinned_pieces, respects_pin};
pub use self::special::{check_castling, en_passant_victim, is_promotion};
pub use self::validate::{is_safe, validate_move};

use self::geometry::KNIGHT_JUMPS;
use self::validate::vet;

/// Growable buffer of generated moves.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MoveList {
    moves: Vec<Move>,
}

impl MoveList {
    /// Create an empty move list.
    pub fn new() -> MoveList {
        MoveList {
            moves: Vec::with_capacity(64),
        }
    }

    /// Push a move onto the list.
    #[inline]
    pub fn push(&mut self, mv: Move) {
        self.moves.push(mv);
    }

    /// Return the number of moves in the list.
    #[inline]
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    /// Return `true` if the list is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// Return a slice of the moves.
    #[inline]
    pub fn as_slice(&self) -> &[Move] {
        &self.moves
    }

    /// Iterate the moves.
    pub fn iter(&self) -> std::slice::Iter<'_, Move> {
        self.moves.iter()
    }
}

impl std::ops::Index<usize> for MoveList {
    type Output = Move;
    #[inline]
    fn index(&self, index: usize) -> &Move {
        &self.moves[index]
    }
}

impl<'a> IntoIterator for &'a MoveList {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;
    fn into_iter(self) -> Self::IntoIter {
        self.moves.iter()
    }
}

/// Squares `piece` on `from` might reach, before any legality check.
///
/// Over-approximates: everything returned still goes through the validator.
fn candidate_targets(board: &Board, from: Square, piece: Piece) -> SquareSet {
    let mut targets = SquareSet::EMPTY;
    match piece.kind() {
        PieceKind::Pawn => {
            let forward = piece.color().forward();
            for (d_row, d_col) in [(forward, 0), (2 * forward, 0), (forward, -1), (forward, 1)] {
                if let Some(sq) = from.offset(d_row, d_col) {
                    targets.insert(sq);
                }
            }
        }
        PieceKind::Knight => {
            for (d_row, d_col) in KNIGHT_JUMPS {
                if let Some(sq) = from.offset(d_row, d_col) {
                    targets.insert(sq);
                }
            }
        }
        PieceKind::King => {
            for dir in Direction::ALL {
                if let Some(sq) = from.step(dir) {
                    targets.insert(sq);
                }
            }
            if from == CastleSide::king_origin(piece.color()) {
                for side in CastleSide::ALL {
                    targets.insert(side.king_destination(piece.color()));
                }
            }
        }
        PieceKind::Bishop | PieceKind::Rook | PieceKind::Queen => {
            for dir in Direction::ALL {
                if !crate::attacks::slides_along(piece.kind(), dir) {
                    continue;
                }
                for sq in from.ray(dir) {
                    targets.insert(sq);
                    if board.piece_at(sq).is_some() {
                        break;
                    }
                }
            }
        }
    }
    targets
}

/// Legal moves of the piece on `from`, one per destination.
///
/// Promotions appear once, as queen promotions. Works for either color,
/// regardless of whose turn it is.
fn piece_moves(board: &Board, from: Square) -> impl Iterator<Item = Move> + '_ {
    let piece = board.piece_at(from);
    piece
        .map(|p| candidate_targets(board, from, p))
        .unwrap_or(SquareSet::EMPTY)
        .into_iter()
        .filter_map(move |to| piece.and_then(|p| vet(board, from, to, p).ok()))
}

/// Return every square the piece on `from` may legally move to.
///
/// Empty when `from` is empty. Turn order is not considered, so this also
/// answers for the side not on move.
pub fn legal_destinations(board: &Board, from: Square) -> SquareSet {
    piece_moves(board, from).map(|mv| mv.to()).collect()
}

/// Generate every legal move for the side to move.
///
/// Each promotion is listed four times, once per promotion piece.
pub fn legal_moves(board: &Board) -> MoveList {
    let mut list = MoveList::new();
    let us = board.side_to_move();
    for (from, _) in board.placement().pieces_of(us) {
        for mv in piece_moves(board, from) {
            if mv.is_promotion() {
                for promo in PromotionPiece::ALL {
                    list.push(mv.with_promotion(promo));
                }
            } else {
                list.push(mv);
            }
        }
    }
    list
}

/// Return `true` if the side to move has at least one legal move.
pub fn has_legal_move(board: &Board) -> bool {
    let us = board.side_to_move();
    board
        .placement()
        .pieces_of(us)
        .any(|(from, _)| piece_moves(board, from).next().is_some())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Board;
    use crate::piece_kind::PieceKind;
    use crate::square::Square;

    #[test]
    fn starting_position_20_moves() {
        let board = Board::starting_position();
        let moves = legal_moves(&board);
        assert_eq!(
            moves.len(),
            20,
            "starting position should have 20 legal moves, got {}",
            moves.len()
        );
    }

    #[test]
    fn knight_destinations_from_start() {
        let board = Board::starting_position();
        let dests = legal_destinations(&board, Square::G1);
        assert_eq!(dests.count(), 2);
        assert!(dests.contains(Square::F3));
        assert!(dests.contains(Square::H3));
        assert!(legal_destinations(&board, Square::E4).is_empty());
    }

    #[test]
    fn destinations_ignore_turn() {
        let board = Board::starting_position();
        assert_eq!(legal_destinations(&board, Square::B8).count(), 2);
    }

    #[test]
    fn pinned_knight_zero_moves() {
        // King on e1, knight on e2, rook on e8 — knight is pinned along the e-file
        let board: Board = "4r2k/8/8/8/8/8/4N3/4K3 w - - 0 1".parse().unwrap();
        assert!(legal_destinations(&board, Square::E2).is_empty());
    }

    #[test]
    fn double_check_king_only() {
        // King e1, black knight f3 + black rook e8 — double check
        let board: Board = "4r1k1/8/8/8/8/5n2/8/4K3 w - - 0 1".parse().unwrap();
        let moves = legal_moves(&board);
        assert!(!moves.is_empty());
        for mv in &moves {
            assert_eq!(mv.piece().kind(), PieceKind::King, "{mv} is not a king move");
        }
    }

    #[test]
    fn castling_not_through_check() {
        // Bishop on a6 attacks f1 (a6→b5→c4→d3→e2→f1), preventing kingside castling
        let board: Board = "4k3/8/b7/8/8/8/8/R3K2R w KQ - 0 1".parse().unwrap();
        let moves = legal_moves(&board);
        let castles: Vec<_> = moves.iter().filter(|m| m.is_castle()).collect();
        assert_eq!(castles.len(), 1);
        assert_eq!(castles[0].to(), Square::C1);
    }

    #[test]
    fn en_passant_legal() {
        // White pawn e5, black pawn d5 just moved, EP square d6
        let board: Board = "4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 1".parse().unwrap();
        let moves = legal_moves(&board);
        let ep_moves: Vec<_> = moves.iter().filter(|m| m.is_en_passant()).collect();
        assert_eq!(ep_moves.len(), 1, "should have 1 en passant move");
    }

    #[test]
    fn en_passant_discovered_check_illegal() {
        // EP capture bxc6 would expose the king on a5 to the rook on h5.
        let board: Board = "4k3/8/8/KPp4r/8/8/8/8 w - c6 0 1".parse().unwrap();
        let moves = legal_moves(&board);
        assert!(moves.iter().all(|m| !m.is_en_passant()));
    }

    #[test]
    fn promotion_generates_4_moves() {
        let board: Board = "4k3/P7/8/8/8/8/8/4K3 w - - 0 1".parse().unwrap();
        let moves = legal_moves(&board);
        let promo_moves: Vec<_> = moves.iter().filter(|m| m.is_promotion()).collect();
        assert_eq!(promo_moves.len(), 4, "promotion should generate 4 moves (Q/R/B/N)");
        assert_eq!(legal_destinations(&board, Square::A7).count(), 1);
    }

    #[test]
    fn generator_agrees_with_validator() {
        let fens = [
            "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
            "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1",
            "r3k2r/Pppp1ppp/1b3nbN/nP6/BBP1P3/q4N2/Pp1P2PP/R2Q1RK1 w kq - 0 1",
            "rnbq1k1r/pp1Pbppp/2p5/8/2B5/8/PPP1NnPP/RNBQK2R w KQ - 1 8",
            "rnbqkbnr/pp1ppppp/8/2p5/4P3/8/PPPP1PPP/RNBQKBNR w KQkq c6 0 2",
        ];
        for fen in fens {
            let board: Board = fen.parse().unwrap();
            let moves = legal_moves(&board);
            for (from, _) in board.placement().pieces_of(board.side_to_move()) {
                for to in Square::all() {
                    let listed = moves.iter().any(|m| m.from() == from && m.to() == to);
                    let validated = validate_move(&board, from, to).is_ok();
                    assert_eq!(listed, validated, "{fen}: {from}{to}");
                }
            }
        }
    }
}
