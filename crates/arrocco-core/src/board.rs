//! The chess board: a piece arena plus an 8x8 grid of ids into it.

use std::fmt;

use tracing::warn;

use crate::color::Color;
use crate::error::BoardError;
use crate::piece::{Piece, PieceId, Promotion};
use crate::piece_kind::PieceKind;
use crate::square::Square;

/// Piece kinds on a back rank, file 0 through file 7.
const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// Complete board state: piece placement and capture bookkeeping.
///
/// The arena (`pieces`) is the single source of truth for piece state; the
/// grid stores [`PieceId`]s into it, and the live/captured lists partition
/// the ids still in play from those taken off the board. Pieces are created
/// at setup and never destroyed: capture moves an id between lists, and
/// promotion rewrites a pawn's kind in place.
pub struct Board {
    /// `grid[rank][file]`, rank 0 being White's back rank.
    grid: [[Option<PieceId>; 8]; 8],
    /// Arena of every piece ever placed, indexed by [`PieceId`].
    pieces: Vec<Piece>,
    /// Ids of pieces currently on the board.
    live: Vec<PieceId>,
    /// Ids of captured pieces, in capture order.
    captured: Vec<PieceId>,
}

impl Board {
    /// Return an empty board with no pieces.
    pub(crate) fn empty() -> Board {
        Board {
            grid: [[None; 8]; 8],
            pieces: Vec::with_capacity(32),
            live: Vec::with_capacity(32),
            captured: Vec::with_capacity(32),
        }
    }

    /// Return the standard 32-piece starting position.
    pub fn starting_position() -> Board {
        let mut board = Board::empty();
        for file in 0..8u8 {
            board.add_piece(BACK_RANK[file as usize], Color::White, Square::new(0, file));
            board.add_piece(PieceKind::Pawn, Color::White, Square::new(1, file));
            board.add_piece(PieceKind::Pawn, Color::Black, Square::new(6, file));
            board.add_piece(BACK_RANK[file as usize], Color::Black, Square::new(7, file));
        }
        board
    }

    /// Create a piece and place it on an empty square.
    pub(crate) fn add_piece(&mut self, kind: PieceKind, color: Color, square: Square) -> PieceId {
        debug_assert!(self.grid[square.rank() as usize][square.file() as usize].is_none());
        let id = PieceId(self.pieces.len());
        self.pieces.push(Piece::new(kind, color, square));
        self.live.push(id);
        self.grid[square.rank() as usize][square.file() as usize] = Some(id);
        id
    }

    /// Return the piece for an arena id.
    #[inline]
    pub fn piece(&self, id: PieceId) -> &Piece {
        &self.pieces[id.0]
    }

    /// Return mutable access to a piece. Move-set writes only.
    #[inline]
    pub(crate) fn piece_mut(&mut self, id: PieceId) -> &mut Piece {
        &mut self.pieces[id.0]
    }

    /// Return the id of the piece standing on `square`, if any.
    #[inline]
    pub fn id_on(&self, square: Square) -> Option<PieceId> {
        self.grid[square.rank() as usize][square.file() as usize]
    }

    /// Return the piece standing on `square`, if any.
    #[inline]
    pub fn piece_on(&self, square: Square) -> Option<&Piece> {
        self.id_on(square).map(|id| &self.pieces[id.0])
    }

    /// Return the piece at the given coordinates.
    ///
    /// Out-of-range coordinates yield `None`, the same as an empty square,
    /// so callers walking rays and offsets never need a bounds check first.
    #[inline]
    pub fn piece_at(&self, rank: i8, file: i8) -> Option<&Piece> {
        Square::try_new(rank, file).and_then(|sq| self.piece_on(sq))
    }

    /// Return a snapshot of the ids of all live pieces.
    pub fn live_ids(&self) -> Vec<PieceId> {
        self.live.clone()
    }

    /// Iterate over all live pieces.
    pub fn live_pieces(&self) -> impl Iterator<Item = &Piece> {
        self.live.iter().map(|&id| &self.pieces[id.0])
    }

    /// Return the ids of all live pieces of the given color.
    pub fn color_ids(&self, color: Color) -> Vec<PieceId> {
        self.live
            .iter()
            .copied()
            .filter(|&id| self.pieces[id.0].color() == color)
            .collect()
    }

    /// Return the id of the king of the given side.
    ///
    /// # Panics
    ///
    /// Panics if the side has no live king (invalid board state).
    pub fn king_of(&self, color: Color) -> PieceId {
        self.live
            .iter()
            .copied()
            .find(|&id| {
                let piece = &self.pieces[id.0];
                piece.kind() == PieceKind::King && piece.color() == color
            })
            .expect("board must have a king for each side")
    }

    /// Iterate over captured pieces, in capture order.
    pub fn captured_pieces(&self) -> impl Iterator<Item = &Piece> {
        self.captured.iter().map(|&id| &self.pieces[id.0])
    }

    /// Move a live piece to the captured list and clear its grid square.
    fn capture(&mut self, id: PieceId) {
        let square = self.pieces[id.0].square();
        self.grid[square.rank() as usize][square.file() as usize] = None;
        self.live.retain(|&live_id| live_id != id);
        self.captured.push(id);
    }

    /// Apply a validated move from `from` to `to`.
    ///
    /// Performs capture bookkeeping (including the en passant bypassed pawn),
    /// relocates the moving piece, and, when the mover is a king advancing
    /// two files, relocates the corresponding rook. This castling side-effect
    /// is the only case where two pieces move in one logical turn.
    ///
    /// Legality is the caller's responsibility; an empty origin square is
    /// ignored.
    pub fn apply_move(&mut self, from: Square, to: Square) {
        let Some(mover) = self.id_on(from) else {
            warn!(%from, %to, "apply_move with empty origin ignored");
            return;
        };

        if let Some(victim) = self.id_on(to) {
            self.capture(victim);
        } else if self.pieces[mover.0].kind() == PieceKind::Pawn && from.file() != to.file() {
            // A pawn moving diagonally onto an empty square is an en passant
            // execution: the captured pawn sits beside the origin, on the
            // destination file.
            if let Some(victim) = self.id_on(Square::new(from.rank(), to.file())) {
                self.capture(victim);
            }
        }

        self.grid[from.rank() as usize][from.file() as usize] = None;
        self.pieces[mover.0].relocate(to);
        self.grid[to.rank() as usize][to.file() as usize] = Some(mover);

        if self.pieces[mover.0].kind() == PieceKind::King {
            let file_delta = to.file() as i8 - from.file() as i8;
            if file_delta.abs() == 2 {
                let (rook_from, rook_to) = if file_delta > 0 {
                    (Square::new(from.rank(), 7), Square::new(from.rank(), to.file() - 1))
                } else {
                    (Square::new(from.rank(), 0), Square::new(from.rank(), to.file() + 1))
                };
                if let Some(rook) = self.id_on(rook_from) {
                    self.grid[rook_from.rank() as usize][rook_from.file() as usize] = None;
                    self.pieces[rook.0].relocate(rook_to);
                    self.grid[rook_to.rank() as usize][rook_to.file() as usize] = Some(rook);
                }
            }
        }
    }

    /// Rewrite a pawn's kind in place. The piece keeps its id, square, and
    /// move counter.
    pub fn promote(&mut self, id: PieceId, choice: Promotion) {
        debug_assert!(self.pieces[id.0].kind() == PieceKind::Pawn);
        self.pieces[id.0].set_kind(choice.to_piece_kind());
    }

    /// Validate the structural integrity of the board.
    ///
    /// Checks that the grid and the live list agree square-for-square, that
    /// no id is both live and captured, and that each side has exactly one
    /// king.
    pub fn validate(&self) -> Result<(), BoardError> {
        // Grid -> live agreement.
        for rank in 0..8u8 {
            for file in 0..8u8 {
                if let Some(id) = self.grid[rank as usize][file as usize] {
                    let piece = &self.pieces[id.0];
                    if piece.square() != Square::new(rank, file) || !self.live.contains(&id) {
                        return Err(BoardError::GridDesync { rank, file });
                    }
                }
            }
        }

        // Live -> grid agreement.
        for &id in &self.live {
            let square = self.pieces[id.0].square();
            if self.grid[square.rank() as usize][square.file() as usize] != Some(id) {
                return Err(BoardError::GridDesync {
                    rank: square.rank(),
                    file: square.file(),
                });
            }
        }

        // No id in both lists.
        for &id in &self.captured {
            if self.live.contains(&id) {
                return Err(BoardError::LiveAndCaptured { index: id.0 });
            }
        }

        // Exactly one king per side.
        for color in Color::ALL {
            let count = self
                .live_pieces()
                .filter(|p| p.kind() == PieceKind::King && p.color() == color)
                .count();
            if count != 1 {
                let color_name = match color {
                    Color::White => "white",
                    Color::Black => "black",
                };
                return Err(BoardError::InvalidKingCount {
                    color: color_name,
                    count,
                });
            }
        }

        Ok(())
    }

    /// Return a pretty-printable wrapper for this board.
    pub fn pretty(&self) -> PrettyBoard<'_> {
        PrettyBoard(self)
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Board({} live, {} captured)",
            self.live.len(),
            self.captured.len()
        )
    }
}

/// Wrapper for pretty-printing a board as an 8x8 grid.
pub struct PrettyBoard<'a>(&'a Board);

impl fmt::Display for PrettyBoard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let board = self.0;
        for rank in (0u8..8).rev() {
            write!(f, "{}  ", rank + 1)?;
            for file in 0u8..8 {
                let c = match board.piece_on(Square::new(rank, file)) {
                    Some(piece) if piece.color() == Color::White => {
                        piece.kind().fen_char().to_ascii_uppercase()
                    }
                    Some(piece) => piece.kind().fen_char(),
                    None => '.',
                };
                if file < 7 {
                    write!(f, "{c} ")?;
                } else {
                    write!(f, "{c}")?;
                }
            }
            writeln!(f)?;
        }
        write!(f, "   a b c d e f g h")
    }
}
