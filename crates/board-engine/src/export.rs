//! JSON snapshots for an out-of-process renderer.
//!
//! A canvas or web front end drawing the board needs the piece list and the
//! latest annotations, nothing more. Squares are rendered in algebraic
//! notation and kinds/colors as lowercase names, which is also what the
//! asset layer keys its image lookups on (e.g. "queen" + "white"). The
//! mapping from those names to an actual image path stays outside this
//! crate.

use crate::board::BoardState;
use crate::session::RenderUpdate;
use serde::Serialize;

/// JSON representation of one live piece.
#[derive(Serialize)]
struct PieceJson {
    /// Lowercase kind name, e.g. "knight".
    kind: &'static str,
    /// Lowercase color name, "white" or "black".
    color: &'static str,
    /// Algebraic square, e.g. "g1".
    square: String,
}

/// JSON representation of the full board state.
#[derive(Serialize)]
struct BoardJson {
    /// Lowercase color of the player to move.
    active_player: &'static str,
    /// Every live piece.
    pieces: Vec<PieceJson>,
}

/// JSON representation of a committed move.
#[derive(Serialize)]
struct MoveJson {
    /// Origin square in algebraic notation.
    from: String,
    /// Destination square in algebraic notation.
    to: String,
    /// Lowercase kind of the captured piece, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    captured: Option<&'static str>,
    /// True if the move promoted a pawn.
    promoted: bool,
}

/// JSON representation of a render update.
#[derive(Serialize)]
struct UpdateJson {
    redraw: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    ghost: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    last_move: Option<MoveJson>,
    checked_kings: Vec<String>,
}

/// Serializes the board state for a renderer.
pub fn board_to_json(board: &BoardState) -> serde_json::Result<String> {
    let pieces = board
        .pieces()
        .iter()
        .map(|p| PieceJson {
            kind: p.kind.name(),
            color: p.color.name(),
            square: p.square.to_algebraic(),
        })
        .collect();
    serde_json::to_string(&BoardJson {
        active_player: board.active_player.name(),
        pieces,
    })
}

/// Serializes a render update for a renderer.
pub fn update_to_json(update: &RenderUpdate) -> serde_json::Result<String> {
    let last_move = update.last_move.map(|outcome| MoveJson {
        from: outcome.mov.from().to_algebraic(),
        to: outcome.mov.to().to_algebraic(),
        captured: outcome.captured.map(|kind| kind.name()),
        promoted: outcome.promoted,
    });
    serde_json::to_string(&UpdateJson {
        redraw: update.redraw,
        ghost: update.ghost.map(|sq| sq.to_algebraic()),
        last_move,
        checked_kings: update
            .checked_kings
            .iter()
            .map(|sq| sq.to_algebraic())
            .collect(),
    })
}
