//! The authoritative game position: placement, side to move, piece history.

use std::collections::HashSet;
use std::fmt;

use tracing::trace;

use crate::castle_rights::{CastleRights, CastleSide};
use crate::chess_move::Move;
use crate::color::Color;
use crate::error::BoardError;
use crate::attacks::is_in_check;
use crate::piece::{Piece, PieceId};
use crate::piece_kind::PieceKind;
use crate::placement::Placement;
use crate::rank::Rank;
use crate::square::Square;

/// Back-rank piece order from the a-file to the h-file.
const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// Complete position state.
///
/// Besides the grid it remembers which pieces have ever moved, the last move
/// made and the full move log. Castling, the pawn double step and en passant
/// are decided from that history rather than from stored flags.
#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    placement: Placement,
    side_to_move: Color,
    /// Identities of pieces that have moved at least once.
    moved: HashSet<PieceId>,
    last_move: Option<Move>,
    log: Vec<Move>,
    /// Id handed to the next promoted piece.
    next_id: PieceId,
    /// Halfmove clock, kept for FEN export only.
    halfmove_clock: u16,
    /// Fullmove number (starts at 1, incremented after Black moves).
    fullmove_number: u16,
}

impl Board {
    /// Return the standard starting position, White to move.
    pub fn starting_position() -> Board {
        let mut squares = [None; Square::COUNT];
        for (rank, color, kinds) in [
            (Rank::Rank1, Color::White, BACK_RANK),
            (Rank::Rank2, Color::White, [PieceKind::Pawn; 8]),
            (Rank::Rank7, Color::Black, [PieceKind::Pawn; 8]),
            (Rank::Rank8, Color::Black, BACK_RANK),
        ] {
            for (file, kind) in crate::file::File::ALL.into_iter().zip(kinds) {
                squares[Square::new(rank, file).index()] = Some((kind, color));
            }
        }
        match Board::assemble(squares, Color::White) {
            Ok(board) => board,
            Err(err) => unreachable!("starting position is valid: {err}"),
        }
    }

    /// Hand out ids in square order and build a board with an empty history.
    pub(crate) fn assemble(
        kinds: [Option<(PieceKind, Color)>; Square::COUNT],
        side_to_move: Color,
    ) -> Result<Board, BoardError> {
        let mut next_id = PieceId::new(0);
        let squares = kinds.map(|slot| {
            slot.map(|(kind, color)| {
                let piece = Piece::new(next_id, kind, color);
                next_id = next_id.next();
                piece
            })
        });
        Ok(Board {
            placement: Placement::from_squares(squares)?,
            side_to_move,
            moved: HashSet::new(),
            last_move: None,
            log: Vec::new(),
            next_id,
            halfmove_clock: 0,
            fullmove_number: 1,
        })
    }

    /// Return the piece on `sq`, if any.
    #[inline]
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.placement.piece_at(sq)
    }

    /// Return the piece grid.
    #[inline]
    pub fn placement(&self) -> &Placement {
        &self.placement
    }

    /// Return the side to move.
    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    /// Return the king square of `color`.
    #[inline]
    pub fn king_square(&self, color: Color) -> Square {
        self.placement.king_square(color)
    }

    /// Return `true` if the piece with identity `id` has ever moved.
    #[inline]
    pub fn has_moved(&self, id: PieceId) -> bool {
        self.moved.contains(&id)
    }

    /// Return the most recent move, if any.
    #[inline]
    pub fn last_move(&self) -> Option<Move> {
        self.last_move
    }

    /// Return every move applied to this board, oldest first.
    #[inline]
    pub fn move_log(&self) -> &[Move] {
        &self.log
    }

    /// Return `true` if `color`'s king is attacked.
    pub fn is_in_check(&self, color: Color) -> bool {
        is_in_check(&self.placement, color)
    }

    /// Return the halfmove clock.
    #[inline]
    pub fn halfmove_clock(&self) -> u16 {
        self.halfmove_clock
    }

    /// Return the fullmove number.
    #[inline]
    pub fn fullmove_number(&self) -> u16 {
        self.fullmove_number
    }

    /// Castling availability derived from the moved-piece set.
    ///
    /// A side keeps a right while its king and the matching corner rook are
    /// both in place and unmoved. Attacks are not considered.
    pub fn castle_rights(&self) -> CastleRights {
        let mut rights = CastleRights::NONE;
        for color in Color::ALL {
            let king_home = self
                .piece_at(CastleSide::king_origin(color))
                .is_some_and(|p| p.is(PieceKind::King, color) && !self.has_moved(p.id()));
            if !king_home {
                continue;
            }
            for side in CastleSide::ALL {
                let rook_home = self
                    .piece_at(side.rook_origin(color))
                    .is_some_and(|p| p.is(PieceKind::Rook, color) && !self.has_moved(p.id()));
                if rook_home {
                    rights = rights.with(color, side);
                }
            }
        }
        rights
    }

    /// Square skipped by the last move if it was a pawn double step.
    pub fn en_passant_target(&self) -> Option<Square> {
        let last = self.last_move.filter(|mv| mv.is_double_step())?;
        Square::try_from_coords(
            (i32::from(last.from().row()) + i32::from(last.to().row())) / 2,
            i32::from(last.from().col()),
        )
    }

    /// Return an independent copy of this board.
    pub fn snapshot(&self) -> Board {
        self.clone()
    }

    /// Commit a validated move.
    ///
    /// `mv` must come from [`validate_move`](crate::validate_move) or
    /// [`legal_moves`](crate::legal_moves) on this board; no legality checks
    /// happen here.
    pub fn apply(&mut self, mv: Move) {
        let us = mv.piece().color();
        debug_assert_eq!(us, self.side_to_move, "{mv} played out of turn");

        self.placement.play(&mv, self.next_id);
        if mv.is_promotion() {
            self.next_id = self.next_id.next();
        }

        self.moved.insert(mv.piece().id());
        if let Some(side) = mv.castle_side()
            && let Some(rook) = self.placement.piece_at(side.rook_destination(us))
        {
            self.moved.insert(rook.id());
        }

        if mv.piece().kind() == PieceKind::Pawn || mv.is_capture() {
            self.halfmove_clock = 0;
        } else {
            self.halfmove_clock = self.halfmove_clock.saturating_add(1);
        }
        if us == Color::Black {
            self.fullmove_number = self.fullmove_number.saturating_add(1);
        }

        self.log.push(mv);
        self.last_move = Some(mv);
        self.side_to_move = !us;
        trace!(mv = %mv, next = self.side_to_move.name(), "move applied to board");
    }

    /// Restore state carried by a FEN record: moved pieces, the synthesized
    /// double step behind an en passant square, and the move counters.
    pub(crate) fn restore_history(
        &mut self,
        moved: impl IntoIterator<Item = PieceId>,
        last_move: Option<Move>,
        halfmove_clock: u16,
        fullmove_number: u16,
    ) {
        self.moved.extend(moved);
        self.last_move = last_move;
        self.halfmove_clock = halfmove_clock;
        self.fullmove_number = fullmove_number;
    }

    /// Validate the structural integrity of the board.
    pub fn validate(&self) -> Result<(), BoardError> {
        self.placement.validate()?;
        let idle = !self.side_to_move;
        if is_in_check(&self.placement, idle) {
            return Err(BoardError::IdleKingAttacked { color: idle });
        }
        Ok(())
    }

    /// Return a pretty-printable wrapper for this board.
    pub fn pretty(&self) -> PrettyBoard<'_> {
        PrettyBoard(self)
    }
}

impl Default for Board {
    fn default() -> Board {
        Board::starting_position()
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Board(\"{}\")", self)
    }
}

/// Wrapper for pretty-printing a board as an 8x8 grid.
pub struct PrettyBoard<'a>(&'a Board);

impl fmt::Display for PrettyBoard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let board = self.0;
        for rank in Rank::ALL.into_iter().rev() {
            write!(f, "{}  ", rank.index() + 1)?;
            for file in crate::file::File::ALL {
                let c = board
                    .piece_at(Square::new(rank, file))
                    .map_or('.', |p| p.fen_char());
                if file.index() < 7 {
                    write!(f, "{c} ")?;
                } else {
                    write!(f, "{c}")?;
                }
            }
            writeln!(f)?;
        }
        write!(f, "   a b c d e f g h")
    }
}
