//! Game session: turn order, move validation, and the per-ply pipeline.

use tracing::debug;

use crate::board::Board;
use crate::color::Color;
use crate::error::MoveError;
use crate::movegen;
use crate::piece::{PieceId, Promotion};
use crate::piece_kind::PieceKind;
use crate::square::Square;

/// Where a game stands after the last completed ply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    /// Nobody is in check.
    Ongoing,
    /// The named side is in check and on move.
    Check(Color),
    /// The named side is checkmated; the game is over.
    Checkmate(Color),
}

/// Result of a successfully selected move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The move is done and the turn has passed.
    Completed,
    /// A pawn reached the back rank; the ply finishes once
    /// [`Game::promote`] picks its new kind.
    PromotionRequired,
}

/// A chess game session driving the rules engine.
///
/// `Game` owns the board and runs the strict per-ply pipeline after every
/// applied move: regenerate all move sets, filter both kings, detect
/// check/checkmate for the side now on move, and under a survivable check
/// prune that side to check responses. Callers validate nothing themselves;
/// [`try_move`](Game::try_move) performs the full rejection ladder against
/// the engine's move sets.
pub struct Game {
    board: Board,
    turn: Color,
    status: GameStatus,
    pending_promotion: Option<PieceId>,
}

impl Game {
    /// Start a game from the standard starting position, White to move.
    pub fn new() -> Game {
        Game::from_board(Board::starting_position(), Color::White)
    }

    /// Start a game from an arbitrary board with the given side to move.
    ///
    /// The pipeline runs immediately, so the session starts with fresh move
    /// sets and a correct status even when the side to move is already in
    /// check.
    pub fn from_board(board: Board, to_move: Color) -> Game {
        let mut game = Game {
            board,
            turn: to_move.flip(),
            status: GameStatus::Ongoing,
            pending_promotion: None,
        };
        game.conclude_ply();
        game
    }

    /// Return the board.
    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Return the side to move.
    #[inline]
    pub fn turn(&self) -> Color {
        self.turn
    }

    /// Return the game status after the last completed ply.
    #[inline]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Return `true` while a pawn promotion blocks the next move.
    #[inline]
    pub fn promotion_pending(&self) -> bool {
        self.pending_promotion.is_some()
    }

    /// Select and apply a move for the side on move.
    ///
    /// The rejection ladder mirrors the engine contract: the game must not be
    /// over, no promotion may be pending, the origin must hold a piece of the
    /// side on move with at least one candidate move, the piece must not be
    /// pinned, and the destination must be in its move set. On success the
    /// board is mutated and the pipeline re-runs, unless the move carried a
    /// pawn to the back rank, in which case the ply stays open until
    /// [`promote`](Game::promote).
    pub fn try_move(&mut self, from: Square, to: Square) -> Result<MoveOutcome, MoveError> {
        if matches!(self.status, GameStatus::Checkmate(_)) {
            return Err(MoveError::GameOver);
        }
        if self.pending_promotion.is_some() {
            return Err(MoveError::PromotionPending);
        }

        let Some(id) = self.board.id_on(from) else {
            return Err(MoveError::EmptySquare { square: from });
        };
        let piece = self.board.piece(id);
        if piece.color() != self.turn {
            return Err(MoveError::OpponentPiece { square: from });
        }
        if piece.moves().is_empty() {
            return Err(MoveError::NoMoves { square: from });
        }
        if movegen::is_pinned(&self.board, id) {
            return Err(MoveError::Pinned { square: from });
        }
        if !self.board.piece(id).can_move_to(to) {
            return Err(MoveError::IllegalDestination { from, to });
        }

        debug!(%from, %to, side = %self.turn, "applying move");
        self.board.apply_move(from, to);

        let piece = self.board.piece(id);
        if piece.kind() == PieceKind::Pawn
            && (piece.square().rank() == 0 || piece.square().rank() == 7)
        {
            // The ply stays open until the promotion choice lands; move sets
            // are stale until then and every other entry point is locked out.
            self.pending_promotion = Some(id);
            return Ok(MoveOutcome::PromotionRequired);
        }

        self.conclude_ply();
        Ok(MoveOutcome::Completed)
    }

    /// Resolve a pending pawn promotion and finish the suspended ply.
    pub fn promote(&mut self, choice: Promotion) -> Result<(), MoveError> {
        let Some(id) = self.pending_promotion.take() else {
            return Err(MoveError::NoPendingPromotion);
        };
        debug!(square = %self.board.piece(id).square(), kind = ?choice, "promoting pawn");
        self.board.promote(id, choice);
        self.conclude_ply();
        Ok(())
    }

    /// Run the post-move pipeline and pass the turn.
    ///
    /// Order is a correctness requirement: full regeneration and king
    /// filtering first, then check/checkmate detection for the side about to
    /// move, then (under a survivable check) pruning that side's pieces to
    /// check responses.
    fn conclude_ply(&mut self) {
        let mover = self.turn;
        let opponent = mover.flip();

        movegen::refresh(&mut self.board);

        let attackers = self.board.color_ids(mover);
        let defenders = self.board.color_ids(opponent);
        let king = self.board.king_of(opponent);

        self.status = if movegen::in_check(&self.board, &attackers, king) {
            if movegen::in_checkmate(&self.board, &attackers, &defenders, king) {
                debug!(side = %opponent, "checkmate");
                GameStatus::Checkmate(opponent)
            } else {
                movegen::restrict_to_check_response(
                    &mut self.board,
                    &attackers,
                    &defenders,
                    king,
                );
                GameStatus::Check(opponent)
            }
        } else {
            GameStatus::Ongoing
        };

        self.turn = opponent;
    }
}

impl Default for Game {
    fn default() -> Self {
        Game::new()
    }
}
