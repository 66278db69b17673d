//! Move generation and the per-ply rules pipeline.
//!
//! Every ply runs the same strict sequence: regenerate each live piece's
//! pseudo-legal move set, strip both kings' moves onto attacked squares
//! (castle paths included), detect check and checkmate for the side that just
//! received a move, and, in check but not mate, prune the checked side's
//! pieces down to moves that capture the checker or block its line. Nothing
//! is maintained incrementally; the next ply's [`refresh`] discards all
//! prior filtering.

mod check;
mod king;
mod knights;
mod pawns;
mod pins;
mod sliders;

pub use check::{
    attack_vector, checking_pieces, in_check, in_checkmate, restrict_to_check_response,
};
pub use king::restrict_king_moves;
pub use pins::is_pinned;

use crate::board::Board;
use crate::color::Color;
use crate::piece::{Piece, PieceId};
use crate::piece_kind::PieceKind;
use crate::square::Square;

/// Append the square at (rank, file) to `moves` when the piece may land on
/// it: on the board and not occupied by a friendly piece.
///
/// Returns `true` when a ray may continue past the square: off-board
/// squares, captures, and friendly blockers all end a ray.
fn step(
    board: &Board,
    piece: &Piece,
    rank: i8,
    file: i8,
    moves: &mut Vec<Square>,
) -> bool {
    let Some(square) = Square::try_new(rank, file) else {
        return false;
    };
    match board.piece_on(square) {
        None => {
            moves.push(square);
            true
        }
        Some(other) if other.color() != piece.color() => {
            moves.push(square);
            false
        }
        Some(_) => false,
    }
}

/// Recompute the piece's move set with every pseudo-legal destination.
///
/// Pseudo-legal: obeys the piece's movement pattern and board occupancy,
/// without regard to whether the mover's own king is left in check. The set
/// is wholly replaced, never patched.
pub fn generate(board: &mut Board, id: PieceId) {
    let piece = board.piece(id);
    let moves = match piece.kind() {
        PieceKind::Pawn => pawns::pawn_moves(board, piece),
        PieceKind::Knight => knights::knight_moves(board, piece),
        PieceKind::Bishop => sliders::bishop_moves(board, piece),
        PieceKind::Rook => sliders::rook_moves(board, piece),
        PieceKind::Queen => sliders::queen_moves(board, piece),
        PieceKind::King => king::king_moves(board, piece),
    };
    board.piece_mut(id).set_moves(moves);
}

/// Run generation phases 1 and 2 for the whole board: regenerate every live
/// piece, then filter both kings.
///
/// King filtering intersects every enemy piece's freshly generated move set,
/// so it must not start until generation has finished for all pieces.
pub fn refresh(board: &mut Board) {
    for id in board.live_ids() {
        generate(board, id);
    }
    for color in Color::ALL {
        let king = board.king_of(color);
        king::restrict_king_moves(board, king);
    }
}
