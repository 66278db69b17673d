//! Pawn move generation.

use crate::board::Board;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::square::Square;

/// Generate pseudo-legal pawn moves: single and double advances, diagonal
/// captures, and en passant.
///
/// Promotion needs no handling here: it is a post-move side effect, and a
/// pawn on its last rank has been promoted before the next generation pass.
pub(super) fn pawn_moves(board: &Board, piece: &Piece) -> Vec<Square> {
    let mut moves = Vec::new();
    let dir = piece.color().direction();
    let rank = piece.square().rank() as i8;
    let file = piece.square().file() as i8;

    // Single advance onto an empty square; the double advance additionally
    // needs an untouched pawn and an empty destination, and is only reachable
    // through the empty intermediate square.
    if let Some(forward) = Square::try_new(rank + dir, file)
        && board.piece_on(forward).is_none()
    {
        moves.push(forward);
        if piece.move_count() == 0
            && let Some(double) = Square::try_new(rank + 2 * dir, file)
            && board.piece_on(double).is_none()
        {
            moves.push(double);
        }
    }

    // Diagonal captures, only onto occupied enemy squares.
    for file_delta in [-1, 1] {
        if let Some(target) = board.piece_at(rank + dir, file + file_delta)
            && target.color() != piece.color()
        {
            moves.push(target.square());
        }
    }

    // En passant: standing on the rank an enemy double advance lands on, with
    // a just-double-advanced enemy pawn alongside, the pawn may capture onto
    // the empty square behind it. A pawn on that rank with move_count == 1
    // can only have arrived by double advance.
    let ep_rank = if dir > 0 { 4 } else { 3 };
    if rank == ep_rank {
        for file_delta in [-1, 1] {
            if let Some(neighbor) = board.piece_at(rank, file + file_delta)
                && neighbor.kind() == PieceKind::Pawn
                && neighbor.color() != piece.color()
                && neighbor.move_count() == 1
                && board.piece_at(rank + dir, file + file_delta).is_none()
                && let Some(behind) = Square::try_new(rank + dir, file + file_delta)
            {
                moves.push(behind);
            }
        }
    }

    moves
}
