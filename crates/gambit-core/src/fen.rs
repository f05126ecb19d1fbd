//! FEN string parsing and serialization for [`Board`].
//!
//! FEN carries no piece history, so importing one reconstructs the parts the
//! rules need: pieces off their home squares count as moved, corner rooks
//! without a castling right count as moved, and an en passant square becomes
//! the opponent pawn's double step as the last move.

use std::fmt;
use std::str::FromStr;

use crate::board::Board;
use crate::castle_rights::{CastleRights, CastleSide};
use crate::chess_move::{Move, MoveKind};
use crate::color::Color;
use crate::error::FenError;
use crate::file::File;
use crate::piece::PieceId;
use crate::piece_kind::PieceKind;
use crate::rank::Rank;
use crate::square::Square;

/// The FEN string for the standard starting position.
pub const STARTING_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

impl FromStr for Board {
    type Err = FenError;

    fn from_str(fen: &str) -> Result<Board, FenError> {
        let fields: Vec<&str> = fen.split_whitespace().collect();
        if fields.len() != 6 {
            return Err(FenError::WrongFieldCount {
                found: fields.len(),
            });
        }

        // Parse piece placement
        let ranks: Vec<&str> = fields[0].split('/').collect();
        if ranks.len() != 8 {
            return Err(FenError::WrongRankCount {
                found: ranks.len(),
            });
        }

        let mut kinds = [None; Square::COUNT];

        for (rank_index, rank_str) in ranks.iter().enumerate() {
            // FEN ranks go from 8 to 1 (top to bottom)
            let rank = Rank::ALL[7 - rank_index];
            let mut file_index: u8 = 0;

            for c in rank_str.chars() {
                if let Some(digit) = c.to_digit(10) {
                    if !(1..=8).contains(&digit) {
                        return Err(FenError::InvalidPieceChar { character: c });
                    }
                    file_index += digit as u8;
                    if file_index > 8 {
                        return Err(FenError::BadRankLength {
                            rank_index,
                            length: file_index as usize,
                        });
                    }
                } else {
                    let kind = PieceKind::from_fen_char(c).ok_or(FenError::InvalidPieceChar {
                        character: c,
                    })?;
                    let color = if c.is_ascii_uppercase() {
                        Color::White
                    } else {
                        Color::Black
                    };

                    if file_index >= 8 {
                        return Err(FenError::BadRankLength {
                            rank_index,
                            length: file_index as usize + 1,
                        });
                    }

                    let file = File::ALL[file_index as usize];
                    kinds[Square::new(rank, file).index()] = Some((kind, color));
                    file_index += 1;
                }
            }

            if file_index != 8 {
                return Err(FenError::BadRankLength {
                    rank_index,
                    length: file_index as usize,
                });
            }
        }

        // Parse active color
        let side_to_move = match fields[1] {
            "w" => Color::White,
            "b" => Color::Black,
            other => {
                return Err(FenError::InvalidColor {
                    found: other.to_string(),
                })
            }
        };

        // Parse castling rights
        let castling = CastleRights::from_fen(fields[2])?;

        // Parse en passant
        let en_passant = if fields[3] == "-" {
            None
        } else {
            Some(
                Square::from_algebraic(fields[3]).ok_or_else(|| FenError::InvalidEnPassant {
                    found: fields[3].to_string(),
                })?,
            )
        };

        // Parse halfmove clock
        let halfmove_clock = fields[4].parse::<u16>().map_err(|_| FenError::InvalidMoveCounter {
            field: "halfmove clock",
            found: fields[4].to_string(),
        })?;

        // Parse fullmove number
        let fullmove_number =
            fields[5]
                .parse::<u16>()
                .map_err(|_| FenError::InvalidMoveCounter {
                    field: "fullmove number",
                    found: fields[5].to_string(),
                })?;

        let mut board = Board::assemble(kinds, side_to_move)?;
        let last_move = match en_passant {
            Some(target) => Some(synthesize_double_step(&board, target).ok_or_else(|| {
                FenError::InvalidEnPassant {
                    found: fields[3].to_string(),
                }
            })?),
            None => None,
        };
        let moved = moved_pieces(&board, castling);
        board.restore_history(moved, last_move, halfmove_clock, fullmove_number);

        board.validate()?;
        Ok(board)
    }
}

/// Identities of pieces that cannot still be on their starting square.
fn moved_pieces(board: &Board, castling: CastleRights) -> Vec<PieceId> {
    board
        .placement()
        .pieces()
        .filter(|&(sq, piece)| {
            let color = piece.color();
            match piece.kind() {
                PieceKind::Pawn => sq.rank() != color.pawn_rank(),
                PieceKind::King => sq != CastleSide::king_origin(color),
                PieceKind::Rook => !CastleSide::ALL
                    .into_iter()
                    .any(|side| sq == side.rook_origin(color) && castling.has(color, side)),
                PieceKind::Knight | PieceKind::Bishop | PieceKind::Queen => false,
            }
        })
        .map(|(_, piece)| piece.id())
        .collect()
}

/// Rebuild the opponent's double step that produced en passant square `target`.
///
/// Returns `None` if no pawn could have just skipped over `target`.
fn synthesize_double_step(board: &Board, target: Square) -> Option<Move> {
    let pusher = !board.side_to_move();
    let landing = target.offset(pusher.forward(), 0)?;
    let origin = target.offset(-pusher.forward(), 0)?;
    if origin.rank() != pusher.pawn_rank()
        || board.piece_at(target).is_some()
        || board.piece_at(origin).is_some()
    {
        return None;
    }
    let pawn = board
        .piece_at(landing)
        .filter(|p| p.is(PieceKind::Pawn, pusher))?;
    Some(Move::new(origin, landing, pawn, None, MoveKind::Normal))
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Piece placement
        for rank in Rank::ALL.into_iter().rev() {
            let mut empty_count = 0u8;

            for file in File::ALL {
                match self.piece_at(Square::new(rank, file)) {
                    Some(piece) => {
                        if empty_count > 0 {
                            write!(f, "{empty_count}")?;
                            empty_count = 0;
                        }
                        write!(f, "{}", piece.fen_char())?;
                    }
                    None => {
                        empty_count += 1;
                    }
                }
            }

            if empty_count > 0 {
                write!(f, "{empty_count}")?;
            }

            if rank != Rank::Rank1 {
                write!(f, "/")?;
            }
        }

        // Side to move
        write!(f, " {}", self.side_to_move())?;

        // Castling
        write!(f, " {}", self.castle_rights())?;

        // En passant
        match self.en_passant_target() {
            Some(sq) => write!(f, " {sq}")?,
            None => write!(f, " -")?,
        }

        // Move counters
        write!(f, " {} {}", self.halfmove_clock(), self.fullmove_number())
    }
}
