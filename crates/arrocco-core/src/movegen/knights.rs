//! Knight move generation.

use crate::board::Board;
use crate::piece::Piece;
use crate::square::Square;

use super::step;

/// The eight knight offsets as (rank, file) deltas.
const OFFSETS: [(i8, i8); 8] = [
    (2, -1),
    (2, 1),
    (1, -2),
    (-1, -2),
    (1, 2),
    (-1, 2),
    (-2, -1),
    (-2, 1),
];

/// Generate pseudo-legal knight moves: the eight fixed offsets, kept when on
/// the board and not blocked by a friendly piece.
pub(super) fn knight_moves(board: &Board, piece: &Piece) -> Vec<Square> {
    let mut moves = Vec::with_capacity(8);
    let rank = piece.square().rank() as i8;
    let file = piece.square().file() as i8;
    for (rank_delta, file_delta) in OFFSETS {
        step(board, piece, rank + rank_delta, file + file_delta, &mut moves);
    }
    moves
}

#[cfg(test)]
mod tests {
    use crate::board::Board;
    use crate::movegen::refresh;
    use crate::square::Square;

    #[test]
    fn center_knight_eight_moves() {
        let mut board = Board::from_placement("4k3/8/8/8/3N4/8/8/4K3").unwrap();
        refresh(&mut board);
        let knight = board.piece_on(Square::D4).unwrap();
        assert_eq!(knight.moves().len(), 8);
        assert!(knight.can_move_to(Square::C6));
        assert!(knight.can_move_to(Square::E6));
        assert!(knight.can_move_to(Square::F5));
        assert!(knight.can_move_to(Square::F3));
        assert!(knight.can_move_to(Square::B3));
    }

    #[test]
    fn corner_knight_two_moves() {
        let mut board = Board::from_placement("4k3/8/8/8/8/8/8/N3K3").unwrap();
        refresh(&mut board);
        let knight = board.piece_on(Square::A1).unwrap();
        assert_eq!(knight.moves().len(), 2);
        assert!(knight.can_move_to(Square::B3));
        assert!(knight.can_move_to(Square::C2));
    }

    #[test]
    fn friendly_square_excluded_enemy_included() {
        // White pawn on f5 blocks, black pawn on b5 is a capture.
        let mut board = Board::from_placement("4k3/8/8/1p3P2/3N4/8/8/4K3").unwrap();
        refresh(&mut board);
        let knight = board.piece_on(Square::D4).unwrap();
        assert!(!knight.can_move_to(Square::F5));
        assert!(knight.can_move_to(Square::B5));
        assert_eq!(knight.moves().len(), 7);
    }

    #[test]
    fn starting_knights_jump_over_pawns() {
        let mut board = Board::starting_position();
        refresh(&mut board);
        let knight = board.piece_on(Square::B1).unwrap();
        assert_eq!(knight.moves().len(), 2);
        assert!(knight.can_move_to(Square::A3));
        assert!(knight.can_move_to(Square::C3));
    }
}
