//! Sliding piece (bishop, rook, queen) move generation.

use crate::board::Board;
use crate::piece::Piece;
use crate::square::Square;

use super::step;

/// Rank/file ray directions.
pub(super) const ORTHOGONALS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

/// Diagonal ray directions.
pub(super) const DIAGONALS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

/// Generate pseudo-legal rook moves.
pub(super) fn rook_moves(board: &Board, piece: &Piece) -> Vec<Square> {
    let mut moves = Vec::new();
    ray_moves(board, piece, &ORTHOGONALS, &mut moves);
    moves
}

/// Generate pseudo-legal bishop moves.
pub(super) fn bishop_moves(board: &Board, piece: &Piece) -> Vec<Square> {
    let mut moves = Vec::new();
    ray_moves(board, piece, &DIAGONALS, &mut moves);
    moves
}

/// Generate pseudo-legal queen moves: the union of rook and bishop rays.
pub(super) fn queen_moves(board: &Board, piece: &Piece) -> Vec<Square> {
    let mut moves = Vec::new();
    ray_moves(board, piece, &ORTHOGONALS, &mut moves);
    ray_moves(board, piece, &DIAGONALS, &mut moves);
    moves
}

/// Walk each ray one square at a time. A ray runs through empty squares to
/// the board edge, stops before a friendly piece, and stops on (and
/// includes) the first enemy piece.
fn ray_moves(board: &Board, piece: &Piece, directions: &[(i8, i8)], moves: &mut Vec<Square>) {
    let rank = piece.square().rank() as i8;
    let file = piece.square().file() as i8;
    for &(rank_delta, file_delta) in directions {
        let mut r = rank + rank_delta;
        let mut f = file + file_delta;
        while step(board, piece, r, f, moves) {
            r += rank_delta;
            f += file_delta;
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::board::Board;
    use crate::movegen::refresh;
    use crate::square::Square;

    #[test]
    fn rook_open_board() {
        let mut board = Board::from_placement("8/8/8/8/3R4/8/8/8").unwrap();
        for id in board.live_ids() {
            crate::movegen::generate(&mut board, id);
        }
        let rook = board.piece_on(Square::D4).unwrap();
        assert_eq!(rook.moves().len(), 14);
    }

    #[test]
    fn ray_stops_before_friendly() {
        let mut board = Board::from_placement("8/8/3P4/8/3R4/8/8/8").unwrap();
        for id in board.live_ids() {
            crate::movegen::generate(&mut board, id);
        }
        let rook = board.piece_on(Square::D4).unwrap();
        assert!(rook.can_move_to(Square::D5));
        assert!(!rook.can_move_to(Square::D6));
        assert!(!rook.can_move_to(Square::D7));
    }

    #[test]
    fn ray_stops_on_enemy_inclusive() {
        let mut board = Board::from_placement("8/8/3p4/8/3R4/8/8/8").unwrap();
        for id in board.live_ids() {
            crate::movegen::generate(&mut board, id);
        }
        let rook = board.piece_on(Square::D4).unwrap();
        assert!(rook.can_move_to(Square::D5));
        assert!(rook.can_move_to(Square::D6));
        assert!(!rook.can_move_to(Square::D7));
    }

    #[test]
    fn bishop_diagonals_only() {
        let mut board = Board::from_placement("8/8/8/8/3B4/8/8/8").unwrap();
        for id in board.live_ids() {
            crate::movegen::generate(&mut board, id);
        }
        let bishop = board.piece_on(Square::D4).unwrap();
        assert_eq!(bishop.moves().len(), 13);
        assert!(bishop.can_move_to(Square::A7));
        assert!(bishop.can_move_to(Square::H8));
        assert!(!bishop.can_move_to(Square::D5));
    }

    #[test]
    fn queen_is_rook_plus_bishop() {
        let mut board = Board::from_placement("8/8/8/8/3Q4/8/8/8").unwrap();
        for id in board.live_ids() {
            crate::movegen::generate(&mut board, id);
        }
        let queen = board.piece_on(Square::D4).unwrap();
        assert_eq!(queen.moves().len(), 27);
    }

    #[test]
    fn starting_sliders_have_no_moves() {
        let mut board = Board::starting_position();
        refresh(&mut board);
        for sq in [Square::A1, Square::C1, Square::D1, Square::F1, Square::H1] {
            assert!(
                board.piece_on(sq).unwrap().moves().is_empty(),
                "slider on {sq} should be boxed in"
            );
        }
    }
}
