//! Check detection.

use crate::board::BoardState;
use crate::rules::is_legal_move;
use board_core::Color;
use thiserror::Error;

/// Errors from board queries that must not be absorbed into a game result.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum QueryError {
    /// The named color has no king in the live set. Normal play never
    /// reaches a kingless board, so this is a setup or programming error,
    /// not a game event, and silently answering "not in check" would mask
    /// it.
    #[error("no {0} king on the board")]
    KingMissing(Color),
}

/// Returns true if the king of `color` stands on a square some opposing
/// piece could move to.
///
/// Reuses [`is_legal_move`] as an attack query, which gets the pawn case
/// right for free: a pawn's forward squares are pushes, not attacks, so
/// they never deliver check, while its diagonals do. Whether the attacker
/// could actually afford the move (e.g. it is pinned to its own king) is
/// not considered.
pub fn king_in_check(board: &BoardState, color: Color) -> Result<bool, QueryError> {
    let king_sq = board
        .king(color)
        .map(|k| k.square)
        .ok_or(QueryError::KingMissing(color))?;

    Ok(board
        .pieces()
        .iter()
        .filter(|p| p.color != color)
        .any(|&attacker| is_legal_move(board, attacker, king_sq)))
}
