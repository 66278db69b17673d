//! King move generation, castling candidates, and move-into-check filtering.

use crate::board::Board;
use crate::piece::{Piece, PieceId};
use crate::piece_kind::PieceKind;
use crate::square::Square;

use super::sliders::{DIAGONALS, ORTHOGONALS};
use super::step;

/// Generate pseudo-legal king moves: the eight adjacent squares, plus
/// castling candidates.
///
/// A castling candidate (two files toward a corner rook) requires an unmoved
/// king, empty squares strictly between king and corner, and an unmoved
/// same-color rook in the corner. Whether the king's path is attacked is not
/// checked here; [`restrict_king_moves`] strips unsafe candidates once every
/// piece's move set exists.
pub(super) fn king_moves(board: &Board, piece: &Piece) -> Vec<Square> {
    let mut moves = Vec::with_capacity(10);
    let rank = piece.square().rank() as i8;
    let file = piece.square().file() as i8;
    for (rank_delta, file_delta) in ORTHOGONALS.into_iter().chain(DIAGONALS) {
        step(board, piece, rank + rank_delta, file + file_delta, &mut moves);
    }

    if piece.move_count() == 0 {
        for corner_file in [0, 7] {
            if let Some(destination) = castle_candidate(board, piece, corner_file) {
                moves.push(destination);
            }
        }
    }

    moves
}

/// Return the castling destination toward the given corner, if the king and
/// rook placement allows it.
fn castle_candidate(board: &Board, king: &Piece, corner_file: u8) -> Option<Square> {
    let rank = king.square().rank();
    let king_file = king.square().file();

    let between = if corner_file < king_file {
        corner_file + 1..king_file
    } else {
        king_file + 1..corner_file
    };
    for file in between {
        if board.piece_on(Square::new(rank, file)).is_some() {
            return None;
        }
    }

    let corner = board.piece_on(Square::new(rank, corner_file))?;
    if corner.kind() != PieceKind::Rook
        || corner.color() != king.color()
        || corner.move_count() != 0
    {
        return None;
    }

    let toward = if corner_file < king_file { -2 } else { 2 };
    king.square().offset(0, toward)
}

/// Strip from the king's move set every square any enemy piece can move to,
/// and forfeit castling candidates whose watch squares any enemy piece can
/// reach.
///
/// The watch set for a candidate is every square on the king's rank from the
/// corner rook's file through the king's file inclusive (the squares king
/// and rook cross plus both endpoints), so castling is lost when the king
/// would pass *through* an attacked square, even if the destination itself
/// is safe.
///
/// Must run once per king, after [`generate`](super::generate) has finished
/// for every piece on the board.
pub fn restrict_king_moves(board: &mut Board, king: PieceId) {
    let piece = board.piece(king);
    let color = piece.color();
    let mut kept = piece.moves().to_vec();

    let queenside = castle_watch(piece, 0);
    let kingside = castle_watch(piece, 7);

    for enemy in board.color_ids(color.flip()) {
        for &threat in board.piece(enemy).moves() {
            kept.retain(|&square| square != threat);
            if let Some((destination, watch)) = &queenside
                && watch.contains(&threat)
            {
                kept.retain(|&square| square != *destination);
            }
            if let Some((destination, watch)) = &kingside
                && watch.contains(&threat)
            {
                kept.retain(|&square| square != *destination);
            }
        }
    }

    board.piece_mut(king).set_moves(kept);
}

/// Return the castle destination and its watch squares for one side, when
/// that side's candidate is still in the king's move set.
fn castle_watch(king: &Piece, corner_file: u8) -> Option<(Square, Vec<Square>)> {
    if king.move_count() != 0 {
        return None;
    }
    let rank = king.square().rank();
    let king_file = king.square().file();
    let toward = if corner_file < king_file { -2 } else { 2 };
    let destination = king.square().offset(0, toward)?;
    if !king.can_move_to(destination) {
        return None;
    }

    let span = if corner_file < king_file {
        corner_file..=king_file
    } else {
        king_file..=corner_file
    };
    let watch = span.map(|file| Square::new(rank, file)).collect();
    Some((destination, watch))
}

#[cfg(test)]
mod tests {
    use crate::board::Board;
    use crate::movegen::refresh;
    use crate::square::Square;

    #[test]
    fn lone_king_eight_moves() {
        let mut board = Board::from_placement("4k3/8/8/8/3K4/8/8/8").unwrap();
        refresh(&mut board);
        let king = board.piece_on(Square::D4).unwrap();
        assert_eq!(king.moves().len(), 8);
    }

    #[test]
    fn starting_king_boxed_in() {
        let mut board = Board::starting_position();
        refresh(&mut board);
        assert!(board.piece_on(Square::E1).unwrap().moves().is_empty());
    }

    #[test]
    fn both_castles_available() {
        let mut board = Board::from_placement("r3k2r/pppppppp/8/8/8/8/PPPPPPPP/R3K2R").unwrap();
        refresh(&mut board);
        let king = board.piece_on(Square::E1).unwrap();
        assert!(king.can_move_to(Square::G1));
        assert!(king.can_move_to(Square::C1));
        let king = board.piece_on(Square::E8).unwrap();
        assert!(king.can_move_to(Square::G8));
        assert!(king.can_move_to(Square::C8));
    }

    #[test]
    fn facing_rooks_forfeit_castling() {
        // With the files open, each rook reaches the opposing corner, a
        // watch square, so every castle candidate is stripped even though
        // the kings' own paths are quiet.
        let mut board = Board::from_placement("r3k2r/8/8/8/8/8/8/R3K2R").unwrap();
        refresh(&mut board);
        let king = board.piece_on(Square::E1).unwrap();
        assert!(!king.can_move_to(Square::G1));
        assert!(!king.can_move_to(Square::C1));
    }

    #[test]
    fn castle_needs_empty_path() {
        let mut board = Board::from_placement("4k3/8/8/8/8/8/8/R2BK2R").unwrap();
        refresh(&mut board);
        let king = board.piece_on(Square::E1).unwrap();
        assert!(king.can_move_to(Square::G1));
        assert!(!king.can_move_to(Square::C1), "bishop on d1 blocks queenside");
    }

    #[test]
    fn castle_needs_unmoved_rook() {
        let mut board = Board::from_placement("4k3/8/8/8/8/8/8/R3K2R").unwrap();
        // Shuffle the kingside rook away and back.
        board.apply_move(Square::H1, Square::H4);
        board.apply_move(Square::H4, Square::H1);
        refresh(&mut board);
        let king = board.piece_on(Square::E1).unwrap();
        assert!(!king.can_move_to(Square::G1), "rook has moved");
        assert!(king.can_move_to(Square::C1));
    }

    #[test]
    fn castle_needs_unmoved_king() {
        let mut board = Board::from_placement("4k3/8/8/8/8/8/8/R3K2R").unwrap();
        board.apply_move(Square::E1, Square::E2);
        board.apply_move(Square::E2, Square::E1);
        refresh(&mut board);
        let king = board.piece_on(Square::E1).unwrap();
        assert!(!king.can_move_to(Square::G1));
        assert!(!king.can_move_to(Square::C1));
    }

    #[test]
    fn king_avoids_attacked_squares() {
        // Black rook on d8 covers the whole d-file.
        let mut board = Board::from_placement("3rk3/8/8/8/8/8/8/4K3").unwrap();
        refresh(&mut board);
        let king = board.piece_on(Square::E1).unwrap();
        assert!(!king.can_move_to(Square::D1));
        assert!(!king.can_move_to(Square::D2));
        assert!(king.can_move_to(Square::E2));
        assert!(king.can_move_to(Square::F1));
    }

    #[test]
    fn castle_lost_when_path_attacked() {
        // Black rook on f8 attacks f1: the kingside destination g1 is not
        // itself attacked, but the king would pass through f1.
        let mut board = Board::from_placement("4kr2/8/8/8/8/8/8/R3K2R").unwrap();
        refresh(&mut board);
        let king = board.piece_on(Square::E1).unwrap();
        assert!(!king.can_move_to(Square::G1), "castling through attacked f1");
        assert!(!king.can_move_to(Square::F1));
        assert!(king.can_move_to(Square::C1), "queenside unaffected");
    }

    #[test]
    fn castle_lost_when_rook_path_attacked() {
        // Black rook on b8 attacks b1, a square only the rook crosses.
        // Queenside castling is still forfeited.
        let mut board = Board::from_placement("1r2k3/8/8/8/8/8/8/R3K2R").unwrap();
        refresh(&mut board);
        let king = board.piece_on(Square::E1).unwrap();
        assert!(!king.can_move_to(Square::C1), "queenside watch includes b1");
        assert!(king.can_move_to(Square::G1), "kingside unaffected");
    }

    #[test]
    fn king_takes_defended_square_anyway() {
        // The filter intersects enemy move sets, not defended squares: an
        // empty square a pawn could only capture onto does not repel the
        // king.
        let mut board = Board::from_placement("4k3/8/8/8/8/3p4/8/4K3").unwrap();
        refresh(&mut board);
        let king = board.piece_on(Square::E1).unwrap();
        // The d3 pawn's move set holds only forward pushes, so e2 survives
        // even though the pawn would capture anything landing there.
        assert!(king.can_move_to(Square::E2));
        assert!(!king.can_move_to(Square::D2));
    }
}
