//! Error types: FEN parsing, board invariants, and move rejections.

use crate::color::Color;
use crate::piece_kind::PieceKind;
use crate::square::Square;

/// Errors that occur when parsing a FEN string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FenError {
    /// The FEN string does not have exactly 6 space-separated fields.
    #[error("expected 6 FEN fields, found {found}")]
    WrongFieldCount {
        /// Number of fields found.
        found: usize,
    },
    /// The piece placement section does not have exactly 8 ranks.
    #[error("expected 8 ranks in piece placement, found {found}")]
    WrongRankCount {
        /// Number of ranks found.
        found: usize,
    },
    /// A rank in the piece placement describes more or fewer than 8 squares.
    #[error("rank {rank_index} describes {length} squares, expected 8")]
    BadRankLength {
        /// Zero-based rank index (0 = rank 8 in FEN, 7 = rank 1).
        rank_index: usize,
        /// Number of squares described.
        length: usize,
    },
    /// An unrecognized character appeared in the piece placement.
    #[error("invalid piece character: '{character}'")]
    InvalidPieceChar {
        /// The invalid character.
        character: char,
    },
    /// The active color field is not "w" or "b".
    #[error("invalid active color: \"{found}\"")]
    InvalidColor {
        /// The invalid color string.
        found: String,
    },
    /// An unrecognized character appeared in the castling rights field.
    #[error("invalid castling character: '{character}'")]
    InvalidCastlingChar {
        /// The invalid character.
        character: char,
    },
    /// The en passant field is not "-", not a square, or names a square with no
    /// pawn that could just have double-stepped past it.
    #[error("invalid en passant square: \"{found}\"")]
    InvalidEnPassant {
        /// The invalid en passant string.
        found: String,
    },
    /// A move counter (halfmove clock or fullmove number) is not a valid number.
    #[error("invalid {field}: \"{found}\"")]
    InvalidMoveCounter {
        /// The field name ("halfmove clock" or "fullmove number").
        field: &'static str,
        /// The invalid string.
        found: String,
    },
    /// The parsed board fails structural validation.
    #[error("invalid board: {source}")]
    InvalidBoard {
        /// The underlying board validation error.
        #[from]
        source: BoardError,
    },
}

/// Structural invariant violations of a board.
///
/// Outside of FEN parsing these indicate a defect in move application and are
/// never expected during normal play.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    /// A side does not have exactly one king.
    #[error("expected 1 king for {side}, found {count}", side = .color.name())]
    InvalidKingCount {
        /// Which side has the wrong king count.
        color: Color,
        /// Number of kings found.
        count: u32,
    },
    /// The cached king square disagrees with the grid.
    #[error("cached {side} king square {cached} does not hold that king", side = .color.name())]
    KingCacheMismatch {
        /// Which side's cache drifted.
        color: Color,
        /// The square the cache points at.
        cached: Square,
    },
    /// Pawns occupy the first or eighth rank.
    #[error("pawn found on back rank at {square}")]
    PawnOnBackRank {
        /// Where the pawn stands.
        square: Square,
    },
    /// Two squares hold pieces with the same identity.
    #[error("piece id {id} appears more than once")]
    DuplicatePieceId {
        /// The repeated raw id.
        id: u16,
    },
    /// The side that just moved is still in check.
    #[error("{side} is not on move but its king is attacked", side = .color.name())]
    IdleKingAttacked {
        /// The side not on move.
        color: Color,
    },
}

/// Which castling precondition failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum CastlingFailure {
    /// The king has already moved.
    #[error("the king has already moved")]
    KingMoved,
    /// No friendly rook stands on the corner square.
    #[error("no rook on the corner square")]
    RookMissing,
    /// The rook on the corner has already moved.
    #[error("the rook has already moved")]
    RookMoved,
    /// A square between king and rook is occupied.
    #[error("square {square} between king and rook is occupied")]
    PathOccupied {
        /// The first occupied square.
        square: Square,
    },
    /// The king is currently in check.
    #[error("cannot castle out of check")]
    KingInCheck,
    /// The king would pass through an attacked square.
    #[error("the king would pass through attacked square {square}")]
    PassesThroughCheck {
        /// The attacked transit square.
        square: Square,
    },
    /// The king's destination is attacked.
    #[error("the king's destination {square} is attacked")]
    DestinationAttacked {
        /// The attacked destination.
        square: Square,
    },
}

/// Why a move request was refused. The board is left untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Rejection {
    /// The source square is empty.
    #[error("no piece on {square}")]
    NoPieceAtSource {
        /// The empty source square.
        square: Square,
    },
    /// A coordinate lies outside the board.
    #[error("square is off the board")]
    OutOfBounds,
    /// The piece belongs to the side not on move.
    #[error("the piece on {square} belongs to {side}, not the player to move", side = .owner.name())]
    NotCurrentPlayersPiece {
        /// The source square.
        square: Square,
        /// The piece's color.
        owner: Color,
    },
    /// The destination holds a piece of the mover's own color.
    #[error("{square} is occupied by a friendly piece")]
    FriendlyCapture {
        /// The destination square.
        square: Square,
    },
    /// The piece cannot move in that shape.
    #[error("a {kind} cannot move that way")]
    IllegalGeometry {
        /// The moving piece's kind.
        kind: PieceKind,
    },
    /// A piece stands in the way.
    #[error("the path is blocked at {square}")]
    PathBlocked {
        /// The first blocking square.
        square: Square,
    },
    /// A castling precondition failed.
    #[error("castling not allowed: {0}")]
    Castling(#[from] CastlingFailure),
    /// A diagonal pawn step onto an empty square that is not a legal en passant capture.
    #[error("en passant is not available")]
    EnPassant,
    /// The move would leave the mover's own king attacked.
    #[error("the move leaves the king in check")]
    LeavesKingInCheck,
}

#[cfg(test)]
mod tests {
    use super::{BoardError, CastlingFailure, FenError, Rejection};
    use crate::color::Color;
    use crate::piece_kind::PieceKind;
    use crate::square::Square;

    #[test]
    fn fen_error_display() {
        let err = FenError::WrongFieldCount { found: 4 };
        assert_eq!(format!("{err}"), "expected 6 FEN fields, found 4");
    }

    #[test]
    fn board_error_display() {
        let err = BoardError::InvalidKingCount {
            color: Color::Black,
            count: 0,
        };
        assert_eq!(format!("{err}"), "expected 1 king for black, found 0");
    }

    #[test]
    fn fen_error_from_board_error() {
        let fen_err: FenError = BoardError::DuplicatePieceId { id: 3 }.into();
        assert!(matches!(fen_err, FenError::InvalidBoard { .. }));
    }

    #[test]
    fn rejection_display() {
        let err = Rejection::IllegalGeometry {
            kind: PieceKind::Knight,
        };
        assert_eq!(format!("{err}"), "a knight cannot move that way");
        let err: Rejection = CastlingFailure::PassesThroughCheck { square: Square::F1 }.into();
        assert_eq!(
            format!("{err}"),
            "castling not allowed: the king would pass through attacked square f1"
        );
    }
}
