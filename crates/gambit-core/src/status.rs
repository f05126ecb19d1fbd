//! End-of-move game status.

use std::fmt;

use crate::board::Board;
use crate::color::Color;
use crate::movegen::has_legal_move;

/// Situation of the side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameStatus {
    /// Play continues normally.
    Continue,
    /// The side to move is in check but can escape.
    Check,
    /// The side to move is in check with no legal move. The other side wins.
    Checkmate,
    /// The side to move is not in check and has no legal move. Drawn.
    Stalemate,
}

impl GameStatus {
    /// Return `true` if the game is over.
    #[inline]
    pub const fn is_terminal(self) -> bool {
        matches!(self, GameStatus::Checkmate | GameStatus::Stalemate)
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            GameStatus::Continue => "continue",
            GameStatus::Check => "check",
            GameStatus::Checkmate => "checkmate",
            GameStatus::Stalemate => "stalemate",
        };
        f.write_str(text)
    }
}

/// Classify the position for the side to move.
pub fn status(board: &Board) -> GameStatus {
    let in_check = board.is_in_check(board.side_to_move());
    match (in_check, has_legal_move(board)) {
        (true, true) => GameStatus::Check,
        (true, false) => GameStatus::Checkmate,
        (false, false) => GameStatus::Stalemate,
        (false, true) => GameStatus::Continue,
    }
}

/// Return the winner if the side to move is checkmated.
pub fn winner(board: &Board) -> Option<Color> {
    (status(board) == GameStatus::Checkmate).then(|| !board.side_to_move())
}
