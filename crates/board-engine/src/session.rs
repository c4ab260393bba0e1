//! The pick/drag/release state machine.
//!
//! An input adapter (mouse or touch, already normalized to board
//! coordinates) drives a [`Session`] with discrete intents. The session
//! owns the board, gates pick-ups on active-player ownership, queries the
//! evaluator on hover and release, and hands the executor only moves the
//! evaluator has approved. Everything is synchronous: one intent is fully
//! processed before the next is accepted, so no locking is needed anywhere.

use crate::board::{BoardState, Piece};
use crate::check::{king_in_check, QueryError};
use crate::config::SessionConfig;
use crate::execute::{apply_move, MoveOutcome};
use crate::rules::{is_legal_move, legal_destinations};
use board_core::{Color, Square};

/// Where the session is in a drag gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DragState {
    Idle,
    Dragging {
        /// Snapshot of the selected piece at pick-up time.
        piece: Piece,
        /// Pick-up square, the origin an illegal drop reverts to.
        origin: Square,
    },
}

/// What the renderer should do after an intent was processed.
///
/// A pure notification; rendering it (or ignoring it) has no effect on the
/// board.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RenderUpdate {
    /// True if anything visible may have changed.
    pub redraw: bool,
    /// Square to draw the ghost piece on while dragging over a legal
    /// target.
    pub ghost: Option<Square>,
    /// The just-committed move, for origin/destination highlighting.
    pub last_move: Option<MoveOutcome>,
    /// Squares of kings currently attacked, for check highlighting.
    /// Empty, one, or (in unguarded sandbox positions) both.
    pub checked_kings: Vec<Square>,
}

impl RenderUpdate {
    /// An ignored intent: nothing changed, nothing to draw.
    fn none() -> Self {
        RenderUpdate::default()
    }

    /// A bare redraw signal with no annotations.
    fn redraw() -> Self {
        RenderUpdate {
            redraw: true,
            ..RenderUpdate::default()
        }
    }
}

/// An interactive board: state, rules, and the drag gesture in progress.
#[derive(Debug, Clone)]
pub struct Session {
    board: BoardState,
    config: SessionConfig,
    state: DragState,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    /// Creates a session on the standard starting layout.
    pub fn new() -> Self {
        Self::from_board(BoardState::standard(), SessionConfig::default())
    }

    /// Creates a session on the standard starting layout with options.
    pub fn with_config(config: SessionConfig) -> Self {
        Self::from_board(BoardState::standard(), config)
    }

    /// Creates a session over an arbitrary board.
    pub fn from_board(board: BoardState, config: SessionConfig) -> Self {
        Session {
            board,
            config,
            state: DragState::Idle,
        }
    }

    /// Returns the board for drawing.
    pub fn board(&self) -> &BoardState {
        &self.board
    }

    /// Returns the piece being dragged, if any.
    pub fn selected(&self) -> Option<Piece> {
        match self.state {
            DragState::Dragging { piece, .. } => Some(piece),
            DragState::Idle => None,
        }
    }

    /// Lifts the piece on `square`, if it belongs to the active player.
    ///
    /// Anything else (empty square, opponent's piece, a drag already in
    /// progress) is ignored.
    pub fn pick_up(&mut self, square: Square) -> RenderUpdate {
        if let DragState::Dragging { .. } = self.state {
            tracing::trace!(square = %square, "Pick-up ignored, drag in progress");
            return RenderUpdate::none();
        }
        match self.board.piece_at(square) {
            Some(&piece) if piece.color == self.board.active_player => {
                self.state = DragState::Dragging {
                    piece,
                    origin: square,
                };
                tracing::debug!(square = %square, kind = %piece.kind, "Piece lifted");
                RenderUpdate::redraw()
            }
            _ => {
                tracing::trace!(square = %square, "Pick-up ignored");
                RenderUpdate::none()
            }
        }
    }

    /// Reports the square currently hovered while dragging.
    ///
    /// Produces only a render hint: a ghost square when the hover target is
    /// a legal destination. Board and gesture state are untouched, so an
    /// adapter may deliver these at any rate.
    pub fn drag_to(&mut self, square: Square) -> RenderUpdate {
        match self.state {
            DragState::Dragging { piece, .. } => {
                let ghost = (self.config.show_drag_ghost
                    && is_legal_move(&self.board, piece, square))
                .then_some(square);
                RenderUpdate {
                    redraw: true,
                    ghost,
                    ..RenderUpdate::default()
                }
            }
            DragState::Idle => {
                tracing::trace!(square = %square, "Drag ignored while idle");
                RenderUpdate::none()
            }
        }
    }

    /// Drops the dragged piece on `square`.
    ///
    /// A legal drop commits the move and reports both kings' check status;
    /// an illegal drop snaps the piece back to its origin (a board no-op,
    /// since dragging never moved it). Either way the gesture ends.
    ///
    /// # Errors
    ///
    /// Propagates [`QueryError`] from the post-move check queries; normal
    /// play, where both kings are always live, never hits this.
    pub fn release(&mut self, square: Square) -> Result<RenderUpdate, QueryError> {
        let (piece, origin) = match self.state {
            DragState::Dragging { piece, origin } => (piece, origin),
            DragState::Idle => {
                tracing::trace!(square = %square, "Release ignored while idle");
                return Ok(RenderUpdate::none());
            }
        };
        self.state = DragState::Idle;

        if !is_legal_move(&self.board, piece, square) {
            tracing::trace!(from = %origin, to = %square, "Illegal drop, snapping back");
            return Ok(RenderUpdate::redraw());
        }

        let outcome = apply_move(&mut self.board, origin, square);

        let mut checked_kings = Vec::new();
        for color in Color::ALL {
            if king_in_check(&self.board, color)? {
                let king = self
                    .board
                    .king(color)
                    .expect("king_in_check found this king");
                checked_kings.push(king.square);
            }
        }

        Ok(RenderUpdate {
            redraw: true,
            ghost: None,
            last_move: Some(outcome),
            checked_kings,
        })
    }

    /// Aborts the drag, e.g. on a release outside the board.
    ///
    /// The piece snaps back to its origin; nothing else happens.
    pub fn cancel(&mut self) -> RenderUpdate {
        match self.state {
            DragState::Dragging { origin, .. } => {
                tracing::trace!(from = %origin, "Drag cancelled");
                self.state = DragState::Idle;
                RenderUpdate::redraw()
            }
            DragState::Idle => RenderUpdate::none(),
        }
    }

    /// Returns the legal destinations of the dragged piece, lazily.
    ///
    /// Empty while idle, and always empty when legal-move markers are
    /// disabled in the configuration. Recomputed on every call, never
    /// cached.
    pub fn legal_targets(&self) -> impl Iterator<Item = Square> + '_ {
        let selected = match self.state {
            DragState::Dragging { piece, .. } if self.config.show_legal_moves => Some(piece),
            _ => None,
        };
        selected
            .into_iter()
            .flat_map(move |piece| legal_destinations(&self.board, piece))
    }
}
