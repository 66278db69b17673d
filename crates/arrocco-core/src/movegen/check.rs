//! Check and checkmate detection, attack vectors, and check-response pruning.

use crate::board::Board;
use crate::piece::PieceId;
use crate::piece_kind::PieceKind;
use crate::square::Square;

/// Return the attackers whose move sets reach the king's square.
pub fn checking_pieces(board: &Board, attackers: &[PieceId], king: PieceId) -> Vec<PieceId> {
    let king_square = board.piece(king).square();
    attackers
        .iter()
        .copied()
        .filter(|&id| board.piece(id).can_move_to(king_square))
        .collect()
}

/// Return `true` if any attacker's move set contains the king's square.
pub fn in_check(board: &Board, attackers: &[PieceId], king: PieceId) -> bool {
    !checking_pieces(board, attackers, king).is_empty()
}

/// Return the squares through which `attacker` threatens `king`: the
/// attacker's own square for a pawn or knight, or every square from the
/// attacker up to (but excluding) the king along their shared line.
///
/// Capturing or occupying any square of the vector resolves the check. The
/// attacker must actually reach the king along a rank, file, or diagonal.
pub fn attack_vector(board: &Board, king: PieceId, attacker: PieceId) -> Vec<Square> {
    let attacker_piece = board.piece(attacker);
    if matches!(attacker_piece.kind(), PieceKind::Pawn | PieceKind::Knight) {
        // Only capturing a pawn or knight resolves its check.
        return vec![attacker_piece.square()];
    }

    let from = attacker_piece.square();
    let to = board.piece(king).square();
    let rank_span = to.rank() as i8 - from.rank() as i8;
    let file_span = to.file() as i8 - from.file() as i8;
    debug_assert!(
        rank_span == 0 || file_span == 0 || rank_span.abs() == file_span.abs(),
        "slider check must lie on a rank, file, or diagonal"
    );
    let rank_delta = rank_span.signum();
    let file_delta = file_span.signum();

    let mut vector = Vec::new();
    let mut rank = from.rank() as i8;
    let mut file = from.file() as i8;
    while (rank, file) != (to.rank() as i8, to.file() as i8) {
        vector.push(Square::new(rank as u8, file as u8));
        rank += rank_delta;
        file += file_delta;
    }
    vector
}

/// Return `true` if the king is checkmated.
///
/// Not mate while the king has any move left. Otherwise, a double check is
/// mate outright (it cannot be blocked and the king cannot run), and a
/// single check is mate unless some defender's move lands on the checker's
/// attack vector, capturing the checker or interposing on its line.
pub fn in_checkmate(
    board: &Board,
    attackers: &[PieceId],
    defenders: &[PieceId],
    king: PieceId,
) -> bool {
    if !board.piece(king).moves().is_empty() {
        return false;
    }
    let checkers = checking_pieces(board, attackers, king);
    match checkers.as_slice() {
        [] => false,
        [checker] => {
            let vector = attack_vector(board, king, *checker);
            !defenders.iter().any(|&id| {
                board
                    .piece(id)
                    .moves()
                    .iter()
                    .any(|square| vector.contains(square))
            })
        }
        _ => true,
    }
}

/// Restrict the checked side's pieces to check responses.
///
/// Under double check only the king may act: every non-king defender's move
/// set is cleared. Under single check each non-king defender keeps only the
/// moves landing on the checker's attack vector. No checkers, no change.
pub fn restrict_to_check_response(
    board: &mut Board,
    attackers: &[PieceId],
    defenders: &[PieceId],
    king: PieceId,
) {
    let checkers = checking_pieces(board, attackers, king);
    match checkers.as_slice() {
        [] => {}
        [checker] => {
            let vector = attack_vector(board, king, *checker);
            for &id in defenders {
                if board.piece(id).kind() == PieceKind::King {
                    continue;
                }
                let kept: Vec<Square> = board
                    .piece(id)
                    .moves()
                    .iter()
                    .copied()
                    .filter(|square| vector.contains(square))
                    .collect();
                board.piece_mut(id).set_moves(kept);
            }
        }
        _ => {
            for &id in defenders {
                if board.piece(id).kind() != PieceKind::King {
                    board.piece_mut(id).clear_moves();
                }
            }
        }
    }
}
