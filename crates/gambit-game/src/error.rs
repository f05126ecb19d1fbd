//! Game-level errors.

use gambit_core::{BoardError, FenError};

/// Errors surfaced by [`Game`](crate::Game).
///
/// Rule violations are not errors; they come back as
/// [`MoveOutcome::Rejected`](crate::MoveOutcome::Rejected).
#[derive(Debug, thiserror::Error)]
pub enum GameError {
    /// The board broke one of its structural invariants after a move.
    #[error("board corrupted: {source}")]
    Corrupted {
        /// The violated invariant.
        #[from]
        source: BoardError,
    },

    /// A FEN string used to set up a game could not be parsed.
    #[error("invalid FEN: {source}")]
    InvalidFen {
        /// The underlying parse error.
        #[from]
        source: FenError,
    },
}

/// Errors from parsing a textual move request such as `e2e4` or `e7e8q`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RequestError {
    /// The text is not 4 or 5 characters long.
    #[error("expected a move like e2e4 or e7e8q, got \"{text}\"")]
    WrongLength {
        /// The offending text.
        text: String,
    },

    /// A square could not be parsed.
    #[error("invalid square: \"{text}\"")]
    InvalidSquare {
        /// The offending square text.
        text: String,
    },

    /// The fifth character is not one of `n`, `b`, `r`, `q`.
    #[error("invalid promotion piece: '{character}'")]
    InvalidPromotion {
        /// The offending character.
        character: char,
    },
}

#[cfg(test)]
mod tests {
    use super::{GameError, RequestError};
    use gambit_core::{BoardError, Color};

    #[test]
    fn corrupted_wraps_board_error() {
        let err: GameError = BoardError::InvalidKingCount {
            color: Color::White,
            count: 0,
        }
        .into();
        assert_eq!(
            err.to_string(),
            "board corrupted: expected 1 king for white, found 0"
        );
    }

    #[test]
    fn request_error_display() {
        let err = RequestError::InvalidPromotion { character: 'k' };
        assert_eq!(err.to_string(), "invalid promotion piece: 'k'");
    }
}
