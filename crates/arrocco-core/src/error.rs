//! Error types for board setup, structural validation, and move selection.

use crate::square::Square;

/// Errors that occur when parsing a piece-placement string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PlacementError {
    /// The placement does not describe exactly 8 ranks.
    #[error("expected 8 ranks in piece placement, found {found}")]
    WrongRankCount {
        /// Number of ranks found.
        found: usize,
    },
    /// A rank describes more or fewer than 8 squares.
    #[error("rank {rank_index} describes {length} squares, expected 8")]
    BadRankLength {
        /// Zero-based index into the placement string (0 = rank 8, 7 = rank 1).
        rank_index: usize,
        /// Number of squares described.
        length: usize,
    },
    /// An unrecognized character appeared in the placement.
    #[error("invalid piece character: '{character}'")]
    InvalidPieceChar {
        /// The invalid character.
        character: char,
    },
}

/// Errors from structural validation of a [`Board`](crate::board::Board).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    /// A side does not have exactly one king.
    #[error("expected 1 king for {color}, found {count}")]
    InvalidKingCount {
        /// Which side has the wrong king count.
        color: &'static str,
        /// Number of kings found.
        count: usize,
    },
    /// The grid and the live-piece list disagree about a square.
    #[error("grid and live pieces disagree at rank {rank}, file {file}")]
    GridDesync {
        /// Rank of the inconsistent square.
        rank: u8,
        /// File of the inconsistent square.
        file: u8,
    },
    /// A piece appears in both the live and the captured list.
    #[error("piece #{index} is both live and captured")]
    LiveAndCaptured {
        /// Arena index of the offending piece.
        index: usize,
    },
}

/// Reasons a move selection is rejected by [`Game`](crate::game::Game).
///
/// The engine itself reports bad geometry by omission; these are the
/// validation decisions the turn driver makes against the exposed move sets.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    /// The game has already ended in checkmate.
    #[error("the game is over")]
    GameOver,
    /// A pawn promotion must be resolved before the next move.
    #[error("a pawn promotion is pending")]
    PromotionPending,
    /// No piece stands on the selected square.
    #[error("no piece on {square}")]
    EmptySquare {
        /// The selected origin square.
        square: Square,
    },
    /// The selected piece belongs to the side not on move.
    #[error("piece on {square} belongs to the opponent")]
    OpponentPiece {
        /// The selected origin square.
        square: Square,
    },
    /// The selected piece has no candidate destinations.
    #[error("piece on {square} has no moves")]
    NoMoves {
        /// The selected origin square.
        square: Square,
    },
    /// The selected piece is pinned to its king.
    #[error("piece on {square} is pinned")]
    Pinned {
        /// The selected origin square.
        square: Square,
    },
    /// The destination is not in the selected piece's move set.
    #[error("{from} to {to} is not a legal move")]
    IllegalDestination {
        /// The selected origin square.
        from: Square,
        /// The rejected destination square.
        to: Square,
    },
    /// `promote` was called with no promotion pending.
    #[error("no promotion is pending")]
    NoPendingPromotion,
}
