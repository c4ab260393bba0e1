//! Move execution: the only code that mutates the board.

use crate::board::BoardState;
use board_core::{Move, PieceKind, Square};

/// What a committed move did, for the renderer's benefit.
///
/// Purely observational: highlighting the origin/destination pair or
/// reporting a capture has no effect on any later legality decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveOutcome {
    /// The committed origin/destination pair.
    pub mov: Move,
    /// Kind of the piece removed from the live set, if any.
    pub captured: Option<PieceKind>,
    /// True if the mover was a pawn that just became a queen.
    pub promoted: bool,
}

/// Applies a move that has already passed [`is_legal_move`].
///
/// Relocates the mover, removes any occupant of `to` from the live set,
/// promotes a pawn landing on rank 1 or 8 to a queen, and toggles the
/// active player. Legality is not re-validated here; the caller gates on
/// the evaluator. Handing this function a move the evaluator would reject
/// is out of contract (notably, an occupant of the mover's own color is
/// removed just like an opponent's would be).
///
/// # Panics
///
/// Panics if no piece occupies `from`.
///
/// [`is_legal_move`]: crate::rules::is_legal_move
pub fn apply_move(board: &mut BoardState, from: Square, to: Square) -> MoveOutcome {
    let captured = board.index_at(to).map(|idx| board.remove(idx).kind);

    // Removal above may have shuffled indices; look the mover up afterwards.
    let mover_idx = board
        .index_at(from)
        .expect("apply_move called with an empty origin square");
    let mover = board.piece_mut(mover_idx);
    mover.square = to;

    let mut promoted = false;
    if mover.kind == PieceKind::Pawn && matches!(to.rank_index(), 0 | 7) {
        mover.kind = PieceKind::Queen;
        promoted = true;
    }
    let color = mover.color;

    board.active_player = board.active_player.opposite();

    let outcome = MoveOutcome {
        mov: Move::new(from, to),
        captured,
        promoted,
    };
    tracing::debug!(
        mov = %outcome.mov,
        color = %color,
        captured = ?captured,
        promoted,
        "Move committed"
    );
    outcome
}
