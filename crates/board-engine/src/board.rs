//! Live board state: the piece list and the active player.

use board_core::{Color, File, PieceKind, Rank, Square};

/// A piece on the board.
///
/// `color` never changes after creation. `square` is mutated only by the
/// move executor, and `kind` only flips once, from pawn to queen, when a
/// pawn reaches the far rank. The engine's handle on a piece is its square:
/// at most one piece occupies a square, so coordinates identify it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Piece {
    /// What the piece is.
    pub kind: PieceKind,
    /// Which player owns it.
    pub color: Color,
    /// Where it currently stands.
    pub square: Square,
}

impl Piece {
    /// Creates a piece.
    #[inline]
    pub const fn new(kind: PieceKind, color: Color, square: Square) -> Self {
        Piece {
            kind,
            color,
            square,
        }
    }
}

/// Back-rank piece order, a-file through h-file.
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

/// The set of live pieces plus whose turn it is.
///
/// Captured pieces are removed from the live set permanently. The square
/// grid itself is not stored; square colors and labels are a render-side
/// artifact with no bearing on the rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardState {
    pieces: Vec<Piece>,
    /// The player whose pick/drop intents are currently honored.
    pub active_player: Color,
}

impl BoardState {
    /// Creates a board with no pieces, white to move.
    pub fn empty() -> Self {
        BoardState {
            pieces: Vec::new(),
            active_player: Color::White,
        }
    }

    /// Creates the standard 32-piece starting layout, white to move.
    ///
    /// White occupies ranks 1-2 and black ranks 7-8. A flipped on-screen
    /// board is a render-side transform; the rules frame is fixed.
    pub fn standard() -> Self {
        let mut pieces = Vec::with_capacity(32);
        for color in Color::ALL {
            let (back_rank, pawn_rank) = match color {
                Color::White => (Rank::R1, Rank::R2),
                Color::Black => (Rank::R8, Rank::R7),
            };
            for (&file, &kind) in File::ALL.iter().zip(BACK_RANK.iter()) {
                pieces.push(Piece::new(kind, color, Square::new(file, back_rank)));
            }
            for &file in File::ALL.iter() {
                pieces.push(Piece::new(
                    PieceKind::Pawn,
                    color,
                    Square::new(file, pawn_rank),
                ));
            }
        }
        BoardState {
            pieces,
            active_player: Color::White,
        }
    }

    /// Returns the live pieces.
    #[inline]
    pub fn pieces(&self) -> &[Piece] {
        &self.pieces
    }

    /// Returns the piece occupying `square`, if any.
    pub fn piece_at(&self, square: Square) -> Option<&Piece> {
        self.pieces.iter().find(|p| p.square == square)
    }

    /// Returns true if any piece occupies `square`.
    #[inline]
    pub fn is_occupied(&self, square: Square) -> bool {
        self.piece_at(square).is_some()
    }

    /// Returns the king of `color`, if it is still on the board.
    pub fn king(&self, color: Color) -> Option<&Piece> {
        self.pieces
            .iter()
            .find(|p| p.kind == PieceKind::King && p.color == color)
    }

    /// Adds a piece to the live set.
    ///
    /// Intended for custom setups and tests. Callers keep the one-piece-per-
    /// square invariant; the engine does not defend it against malformed
    /// placements.
    pub fn place(&mut self, kind: PieceKind, color: Color, square: Square) {
        self.pieces.push(Piece::new(kind, color, square));
    }

    pub(crate) fn index_at(&self, square: Square) -> Option<usize> {
        self.pieces.iter().position(|p| p.square == square)
    }

    pub(crate) fn remove(&mut self, index: usize) -> Piece {
        self.pieces.swap_remove(index)
    }

    pub(crate) fn piece_mut(&mut self, index: usize) -> &mut Piece {
        &mut self.pieces[index]
    }
}
