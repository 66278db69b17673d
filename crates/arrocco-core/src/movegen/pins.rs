//! Absolute-pin detection.

use crate::board::Board;
use crate::piece::PieceId;
use crate::piece_kind::PieceKind;
use crate::square::Square;

/// Return `true` if the piece is pinned: removing it from its square would
/// expose its own king to a slider already attacking it along that line.
///
/// For each enemy slider whose move set reaches the piece, the scan continues
/// from the piece along the attack line *away* from the attacker; if the
/// first occupied square holds the piece's own king, the piece is pinned.
/// A slider's move set only reaches the piece along a clear ray, so the
/// line direction falls out of the two squares directly.
///
/// The predicate is advisory: it gates piece selection and never edits move
/// sets. It relies on attacker move sets from the current generation pass.
pub fn is_pinned(board: &Board, id: PieceId) -> bool {
    let piece = board.piece(id);
    let square = piece.square();

    for attacker_id in board.color_ids(piece.color().flip()) {
        let attacker = board.piece(attacker_id);
        if !attacker.kind().is_slider() || !attacker.can_move_to(square) {
            continue;
        }

        let rank_delta = (square.rank() as i8 - attacker.square().rank() as i8).signum();
        let file_delta = (square.file() as i8 - attacker.square().file() as i8).signum();

        let mut rank = square.rank() as i8 + rank_delta;
        let mut file = square.file() as i8 + file_delta;
        while let Some(scan) = Square::try_new(rank, file) {
            if let Some(blocker) = board.piece_on(scan) {
                if blocker.kind() == PieceKind::King && blocker.color() == piece.color() {
                    return true;
                }
                break;
            }
            rank += rank_delta;
            file += file_delta;
        }
    }

    false
}
