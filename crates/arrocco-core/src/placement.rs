//! Piece-placement parsing for [`Board`] setup.

use crate::board::Board;
use crate::color::Color;
use crate::error::PlacementError;
use crate::piece_kind::PieceKind;
use crate::square::Square;

/// The placement string for the standard starting position.
pub const STARTING_PLACEMENT: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR";

impl Board {
    /// Build a board from the piece-placement field of a FEN string, e.g.
    /// `"rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR"`.
    ///
    /// Uppercase letters are White, lowercase Black, digits skip empty
    /// squares; ranks run 8 down to 1. Every placed piece starts with
    /// `move_count == 0`, so kings and rooks parsed onto their home squares
    /// are castling-eligible and no pawn is en-passant-capturable. Only the
    /// placement field is understood: side to move belongs to the game
    /// session, and castling/en-passant eligibility derive from move
    /// counters in this model.
    ///
    /// The result is not structurally validated; call
    /// [`validate`](Board::validate) when full-game invariants are required.
    pub fn from_placement(placement: &str) -> Result<Board, PlacementError> {
        let ranks: Vec<&str> = placement.trim().split('/').collect();
        if ranks.len() != 8 {
            return Err(PlacementError::WrongRankCount { found: ranks.len() });
        }

        let mut board = Board::empty();

        for (rank_index, rank_str) in ranks.iter().enumerate() {
            // Placement ranks go from 8 to 1 (top to bottom).
            let rank = 7 - rank_index as u8;
            let mut file: u8 = 0;

            for c in rank_str.chars() {
                if let Some(digit) = c.to_digit(10) {
                    if !(1..=8).contains(&digit) {
                        return Err(PlacementError::InvalidPieceChar { character: c });
                    }
                    file += digit as u8;
                } else {
                    let kind = PieceKind::from_fen_char(c)
                        .ok_or(PlacementError::InvalidPieceChar { character: c })?;
                    let color = if c.is_ascii_uppercase() {
                        Color::White
                    } else {
                        Color::Black
                    };

                    if file >= 8 {
                        return Err(PlacementError::BadRankLength {
                            rank_index,
                            length: file as usize + 1,
                        });
                    }

                    board.add_piece(kind, color, Square::new(rank, file));
                    file += 1;
                }
            }

            if file != 8 {
                return Err(PlacementError::BadRankLength {
                    rank_index,
                    length: file as usize,
                });
            }
        }

        Ok(board)
    }
}
