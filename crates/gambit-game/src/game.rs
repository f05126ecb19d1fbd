//! The move-request state machine driving one game.

use tracing::{debug, info, trace, warn};

use gambit_core::{
    Board, Color, GameStatus, Move, Piece, PromotionPiece, Rejection, Square, SquareSet,
    legal_destinations, status, validate_move,
};

use crate::error::GameError;
use crate::promotion::{PromotionChooser, UseDefault};

/// Configuration knobs for a [`Game`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    /// Promotion piece used when the chooser declines to pick one.
    pub default_promotion: PromotionPiece,
    /// Run the board's structural checks after every applied move.
    pub verify_after_apply: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            default_promotion: PromotionPiece::Queen,
            verify_after_apply: true,
        }
    }
}

/// Where the interaction stands between requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// No piece is selected.
    AwaitingSelection,
    /// A piece of the side to move is selected.
    PieceSelected {
        /// The selected piece's square.
        square: Square,
        /// Where it may legally go.
        destinations: SquareSet,
    },
}

/// Result of a move request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The request broke a rule; nothing changed.
    Rejected(Rejection),
    /// The move was played.
    Applied {
        /// The move as recorded in the log.
        mv: Move,
        /// Status of the side now to move.
        status: GameStatus,
    },
}

impl MoveOutcome {
    /// Return `true` if the move was played.
    pub fn is_applied(&self) -> bool {
        matches!(self, MoveOutcome::Applied { .. })
    }

    /// Return the applied move, if any.
    pub fn applied(&self) -> Option<Move> {
        match self {
            MoveOutcome::Applied { mv, .. } => Some(*mv),
            MoveOutcome::Rejected(_) => None,
        }
    }

    /// Return the rejection, if any.
    pub fn rejection(&self) -> Option<Rejection> {
        match self {
            MoveOutcome::Rejected(rejection) => Some(*rejection),
            MoveOutcome::Applied { .. } => None,
        }
    }
}

/// A game in progress: the live board plus selection state.
///
/// Only fully validated moves ever reach the board. Rejected requests leave
/// it exactly as it was.
pub struct Game {
    board: Board,
    phase: Phase,
    status: GameStatus,
    config: GameConfig,
    chooser: Box<dyn PromotionChooser>,
}

impl Game {
    /// Start a game from the standard position with default configuration.
    pub fn new() -> Self {
        Self::with_config(GameConfig::default())
    }

    /// Start a game from the standard position.
    pub fn with_config(config: GameConfig) -> Self {
        Self::on_board(Board::starting_position(), config)
    }

    /// Start a game from a FEN position.
    pub fn from_fen(fen: &str) -> Result<Self, GameError> {
        let board: Board = fen.parse()?;
        Ok(Self::on_board(board, GameConfig::default()))
    }

    fn on_board(board: Board, config: GameConfig) -> Self {
        let status = status(&board);
        Self {
            board,
            phase: Phase::AwaitingSelection,
            status,
            config,
            chooser: Box::new(UseDefault),
        }
    }

    /// Replace the promotion chooser.
    pub fn with_promotion_chooser(mut self, chooser: impl PromotionChooser + 'static) -> Self {
        self.chooser = Box::new(chooser);
        self
    }

    /// Return the live board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Return the active configuration.
    pub fn config(&self) -> GameConfig {
        self.config
    }

    /// Return the current selection phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Return the status of the side to move.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Return the side to move.
    pub fn current_turn(&self) -> Color {
        self.board.side_to_move()
    }

    /// Return the piece on `square`, if any.
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.board.piece_at(square)
    }

    /// Return every move played so far, oldest first.
    pub fn move_log(&self) -> &[Move] {
        self.board.move_log()
    }

    /// Return the squares the piece on `square` may move to.
    pub fn legal_destinations(&self, square: Square) -> SquareSet {
        legal_destinations(&self.board, square)
    }

    /// Select the piece on `square` and return its destinations.
    ///
    /// Only pieces of the side to move can be selected; otherwise the phase
    /// returns to [`Phase::AwaitingSelection`] and the reason is returned.
    pub fn select(&mut self, square: Square) -> Result<SquareSet, Rejection> {
        self.phase = Phase::AwaitingSelection;
        let piece = self
            .board
            .piece_at(square)
            .ok_or(Rejection::NoPieceAtSource { square })?;
        if piece.color() != self.current_turn() {
            return Err(Rejection::NotCurrentPlayersPiece {
                square,
                owner: piece.color(),
            });
        }
        let destinations = self.legal_destinations(square);
        trace!(square = %square, count = destinations.count(), "piece selected");
        self.phase = Phase::PieceSelected {
            square,
            destinations,
        };
        Ok(destinations)
    }

    /// Drop the current selection.
    pub fn deselect(&mut self) {
        self.phase = Phase::AwaitingSelection;
    }

    /// Request a move. Promotions consult the chooser.
    pub fn request_move(&mut self, from: Square, to: Square) -> Result<MoveOutcome, GameError> {
        self.request(from, to, None)
    }

    /// Request a move whose promotion piece is already known.
    ///
    /// `promotion` is ignored when the move does not promote.
    pub fn request_move_promoting(
        &mut self,
        from: Square,
        to: Square,
        promotion: PromotionPiece,
    ) -> Result<MoveOutcome, GameError> {
        self.request(from, to, Some(promotion))
    }

    /// Request a move given raw `(row, col)` coordinates, row 0 being rank 1.
    ///
    /// Coordinates off the board are rejected with [`Rejection::OutOfBounds`].
    pub fn request_move_at(
        &mut self,
        from: (i32, i32),
        to: (i32, i32),
    ) -> Result<MoveOutcome, GameError> {
        let Some(from_sq) = Square::try_from_coords(from.0, from.1) else {
            return Ok(self.reject(Rejection::OutOfBounds));
        };
        if self.board.piece_at(from_sq).is_none() {
            return Ok(self.reject(Rejection::NoPieceAtSource { square: from_sq }));
        }
        let Some(to_sq) = Square::try_from_coords(to.0, to.1) else {
            return Ok(self.reject(Rejection::OutOfBounds));
        };
        self.request_move(from_sq, to_sq)
    }

    /// Discard the game and set up the standard position again.
    pub fn restart(&mut self) {
        self.board = Board::starting_position();
        self.phase = Phase::AwaitingSelection;
        self.status = GameStatus::Continue;
        info!("game restarted");
    }

    fn request(
        &mut self,
        from: Square,
        to: Square,
        promotion: Option<PromotionPiece>,
    ) -> Result<MoveOutcome, GameError> {
        self.phase = Phase::AwaitingSelection;
        debug!(from = %from, to = %to, side = self.current_turn().name(), "move requested");

        let mv = match validate_move(&self.board, from, to) {
            Ok(mv) => mv,
            Err(rejection) => {
                debug!(from = %from, to = %to, reason = %rejection, "move rejected");
                return Ok(MoveOutcome::Rejected(rejection));
            }
        };
        trace!(mv = %mv, "move validated");

        let mv = if mv.is_promotion() {
            let choice = promotion
                .or_else(|| self.chooser.choose(&mv))
                .unwrap_or(self.config.default_promotion);
            mv.with_promotion(choice)
        } else {
            mv
        };
        self.commit(mv)
    }

    fn reject(&mut self, rejection: Rejection) -> MoveOutcome {
        self.phase = Phase::AwaitingSelection;
        debug!(reason = %rejection, "move rejected");
        MoveOutcome::Rejected(rejection)
    }

    fn commit(&mut self, mv: Move) -> Result<MoveOutcome, GameError> {
        self.board.apply(mv);
        trace!(mv = %mv, "move applied");

        if self.config.verify_after_apply
            && let Err(err) = self.board.validate()
        {
            warn!(mv = %mv, error = %err, "board invariant violated");
            return Err(GameError::Corrupted { source: err });
        }

        let status = status(&self.board);
        self.status = status;
        trace!(status = %status, "status derived");
        info!(mv = %mv, status = %status, "move played");
        if status.is_terminal() {
            info!(status = %status, winner = ?self.winner(), "game over");
        }
        Ok(MoveOutcome::Applied { mv, status })
    }

    /// Return the winning side once the game ended in checkmate.
    pub fn winner(&self) -> Option<Color> {
        (self.status == GameStatus::Checkmate).then(|| !self.current_turn())
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
