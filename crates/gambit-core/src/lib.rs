//! Core chess rules: board model, move validation, legal move generation and
//! game status.

mod attacks;
mod board;
mod castle_rights;
mod chess_move;
mod color;
mod direction;
mod error;
mod fen;
mod file;
mod movegen;
pub mod perft;
mod piece;
mod piece_kind;
mod placement;
mod rank;
mod square;
mod square_set;
mod status;

pub use attacks::{attacks, first_blocker, is_attacked, is_in_check};
pub use board::{Board, PrettyBoard};
pub use castle_rights::{CastleRights, CastleSide};
pub use chess_move::{Move, MoveKind, PromotionPiece};
pub use color::Color;
pub use direction::Direction;
pub use error::{BoardError, CastlingFailure, FenError, Rejection};
pub use fen::STARTING_FEN;
pub use file::File;
pub use movegen::{
    MoveList, check_castling, check_geometry, en_passant_victim, has_legal_move, is_promotion,
    is_safe, legal_destinations, legal_moves, pin_direction, pinned_pieces, respects_pin,
    validate_move,
};
pub use piece::{Piece, PieceId};
pub use piece_kind::PieceKind;
pub use placement::Placement;
pub use rank::Rank;
pub use square::Square;
pub use square_set::{SquareSet, SquareSetIter};
pub use status::{GameStatus, status, winner};
