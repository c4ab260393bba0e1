//! Move legality evaluation.
//!
//! [`is_legal_move`] is a pure read over the board: no mutation, and no
//! knowledge of whose turn it is. That keeps it reusable verbatim by the
//! check detector (as an attack query) and by the renderer's legal-move
//! markers, neither of which cares about the active player.

use crate::board::{BoardState, Piece};
use board_core::{PieceKind, Square};

/// Returns true if `piece` may move to `dest` on this board.
///
/// Applies the universal preconditions first (no null moves, no capturing
/// your own piece), then the geometry of the piece's kind, including path
/// clearance for the sliding kinds. Castling and en passant do not exist
/// here; whether the move would leave the mover's own king in check is not
/// considered.
pub fn is_legal_move(board: &BoardState, piece: Piece, dest: Square) -> bool {
    let origin = piece.square;
    if dest == origin {
        return false;
    }
    if let Some(occupant) = board.piece_at(dest) {
        if occupant.color == piece.color {
            return false;
        }
    }

    let dfile = dest.file_index() as i8 - origin.file_index() as i8;
    let drank = dest.rank_index() as i8 - origin.rank_index() as i8;

    match piece.kind {
        PieceKind::Pawn => pawn_reaches(board, piece, dest, dfile, drank),
        PieceKind::Knight => matches!((dfile.abs(), drank.abs()), (1, 2) | (2, 1)),
        PieceKind::Bishop => dfile.abs() == drank.abs() && path_clear(board, origin, dest),
        PieceKind::Rook => ((dfile == 0) != (drank == 0)) && path_clear(board, origin, dest),
        PieceKind::Queen => {
            (dfile.abs() == drank.abs() || (dfile == 0) != (drank == 0))
                && path_clear(board, origin, dest)
        }
        PieceKind::King => dfile.abs() <= 1 && drank.abs() <= 1,
    }
}

/// Pawn geometry: forward pushes move, diagonals capture, never the reverse.
fn pawn_reaches(board: &BoardState, piece: Piece, dest: Square, dfile: i8, drank: i8) -> bool {
    let dir = piece.color.pawn_direction();

    // Forward one: the destination is the front square and must be empty.
    if dfile == 0 && drank == dir {
        return !board.is_occupied(dest);
    }

    // Forward two: home rank only, and only the intermediate square blocks.
    if dfile == 0 && drank == 2 * dir {
        if piece.square.rank_index() != piece.color.home_rank() {
            return false;
        }
        let front = piece
            .square
            .offset(0, dir)
            .expect("front square exists when the two-square destination does");
        return !board.is_occupied(front);
    }

    // Diagonal forward: a capture, so the square must hold an opponent.
    if dfile.abs() == 1 && drank == dir {
        return board
            .piece_at(dest)
            .map_or(false, |occupant| occupant.color != piece.color);
    }

    false
}

/// Returns true if every square strictly between `from` and `to` is empty.
///
/// Walks the line one square at a time, excluding both endpoints. The walk
/// stops when both coordinates reach the destination; including the
/// destination itself in the scan would wrongly block captures. Callers
/// guarantee `from` and `to` share a rank, file, or diagonal.
fn path_clear(board: &BoardState, from: Square, to: Square) -> bool {
    let dfile = to.file_index() as i8 - from.file_index() as i8;
    let drank = to.rank_index() as i8 - from.rank_index() as i8;
    let (step_file, step_rank) = (dfile.signum(), drank.signum());
    let steps = dfile.abs().max(drank.abs());

    for i in 1..steps {
        let sq = from
            .offset(step_file * i, step_rank * i)
            .expect("interior square of a straight path is on the board");
        if board.is_occupied(sq) {
            return false;
        }
    }
    true
}

/// Returns the legal destination squares of `piece`, lazily.
///
/// At most 28 squares for a queen on an open board. Recomputed on every
/// call; nothing is cached, so the sequence always reflects the current
/// occupancy.
pub fn legal_destinations(
    board: &BoardState,
    piece: Piece,
) -> impl Iterator<Item = Square> + '_ {
    Square::all().filter(move |&sq| is_legal_move(board, piece, sq))
}

#[cfg(test)]
mod tests {
    use super::*;
    use board_core::Color;

    fn sq(s: &str) -> Square {
        Square::from_algebraic(s).unwrap()
    }

    fn lone(kind: PieceKind, color: Color, at: &str) -> (BoardState, Piece) {
        let mut board = BoardState::empty();
        board.place(kind, color, sq(at));
        let piece = *board.piece_at(sq(at)).unwrap();
        (board, piece)
    }

    #[test]
    fn null_move_is_illegal_for_every_kind() {
        for &kind in PieceKind::ALL.iter() {
            let (board, piece) = lone(kind, Color::White, "d4");
            assert!(!is_legal_move(&board, piece, sq("d4")), "{}", kind);
        }
    }

    #[test]
    fn own_piece_on_destination_is_illegal_for_every_kind() {
        for &kind in PieceKind::ALL.iter() {
            let (mut board, piece) = lone(kind, Color::White, "d4");
            board.place(PieceKind::Pawn, Color::White, sq("d5"));
            assert!(!is_legal_move(&board, piece, sq("d5")), "{}", kind);
        }
    }

    #[test]
    fn knight_jumps() {
        let (mut board, knight) = lone(PieceKind::Knight, Color::White, "d4");
        for target in ["b3", "b5", "c2", "c6", "e2", "e6", "f3", "f5"] {
            assert!(is_legal_move(&board, knight, sq(target)), "{}", target);
        }
        assert!(!is_legal_move(&board, knight, sq("d5")));
        assert!(!is_legal_move(&board, knight, sq("f4")));

        // Interposed pieces never block a knight.
        board.place(PieceKind::Pawn, Color::Black, sq("d5"));
        board.place(PieceKind::Pawn, Color::Black, sq("e5"));
        assert!(is_legal_move(&board, knight, sq("e6")));
    }

    #[test]
    fn rook_moves_on_lines_only() {
        let (board, rook) = lone(PieceKind::Rook, Color::White, "d4");
        assert!(is_legal_move(&board, rook, sq("d8")));
        assert!(is_legal_move(&board, rook, sq("a4")));
        assert!(!is_legal_move(&board, rook, sq("e5")));
        assert!(!is_legal_move(&board, rook, sq("c6")));
    }

    #[test]
    fn rook_blocked_by_interposed_piece() {
        let (mut board, rook) = lone(PieceKind::Rook, Color::White, "a1");
        board.place(PieceKind::Pawn, Color::Black, sq("a4"));
        assert!(is_legal_move(&board, rook, sq("a3")));
        assert!(is_legal_move(&board, rook, sq("a4"))); // capture the blocker
        assert!(!is_legal_move(&board, rook, sq("a6")));
    }

    #[test]
    fn bishop_moves_on_diagonals_only() {
        let (board, bishop) = lone(PieceKind::Bishop, Color::White, "c1");
        assert!(is_legal_move(&board, bishop, sq("h6")));
        assert!(is_legal_move(&board, bishop, sq("a3")));
        assert!(!is_legal_move(&board, bishop, sq("c4")));
        assert!(!is_legal_move(&board, bishop, sq("d4")));
    }

    #[test]
    fn bishop_blocked_by_interposed_piece() {
        let (mut board, bishop) = lone(PieceKind::Bishop, Color::White, "c1");
        board.place(PieceKind::Pawn, Color::White, sq("e3"));
        assert!(is_legal_move(&board, bishop, sq("d2")));
        assert!(!is_legal_move(&board, bishop, sq("f4")));
        assert!(!is_legal_move(&board, bishop, sq("h6")));
    }

    #[test]
    fn capture_at_far_end_of_scanned_line_is_legal() {
        // The path scan excludes the destination; an occupied destination is
        // a capture, not a block. a1-h8 with the target itself on h8.
        let (mut board, queen) = lone(PieceKind::Queen, Color::White, "a1");
        board.place(PieceKind::Rook, Color::Black, sq("h8"));
        assert!(is_legal_move(&board, queen, sq("h8")));
        board.place(PieceKind::Pawn, Color::Black, sq("g7"));
        assert!(!is_legal_move(&board, queen, sq("h8")));
        assert!(is_legal_move(&board, queen, sq("g7")));
    }

    #[test]
    fn queen_unions_rook_and_bishop() {
        let (board, queen) = lone(PieceKind::Queen, Color::White, "d4");
        assert!(is_legal_move(&board, queen, sq("d8")));
        assert!(is_legal_move(&board, queen, sq("h4")));
        assert!(is_legal_move(&board, queen, sq("a7")));
        assert!(is_legal_move(&board, queen, sq("g1")));
        assert!(!is_legal_move(&board, queen, sq("e6")));
        assert!(!is_legal_move(&board, queen, sq("c7")));
    }

    #[test]
    fn king_steps_one_square() {
        let (board, king) = lone(PieceKind::King, Color::White, "e1");
        for target in ["d1", "f1", "d2", "e2", "f2"] {
            assert!(is_legal_move(&board, king, sq(target)), "{}", target);
        }
        assert!(!is_legal_move(&board, king, sq("e3")));
        assert!(!is_legal_move(&board, king, sq("g1"))); // no castling
    }

    #[test]
    fn pawn_forward_one() {
        let (mut board, pawn) = lone(PieceKind::Pawn, Color::White, "e4");
        assert!(is_legal_move(&board, pawn, sq("e5")));
        assert!(!is_legal_move(&board, pawn, sq("e3"))); // no retreat
        assert!(!is_legal_move(&board, pawn, sq("f4")));

        // A front square occupied by either color blocks the push.
        board.place(PieceKind::Knight, Color::Black, sq("e5"));
        assert!(!is_legal_move(&board, pawn, sq("e5")));
    }

    #[test]
    fn pawn_forward_two_from_home_rank_only() {
        let (board, pawn) = lone(PieceKind::Pawn, Color::White, "e2");
        assert!(is_legal_move(&board, pawn, sq("e4")));

        let (board, advanced) = lone(PieceKind::Pawn, Color::White, "e3");
        assert!(!is_legal_move(&board, advanced, sq("e5")));
    }

    #[test]
    fn pawn_forward_two_blocked_by_intermediate_square() {
        let (mut board, pawn) = lone(PieceKind::Pawn, Color::White, "e2");
        board.place(PieceKind::Bishop, Color::Black, sq("e3"));
        assert!(!is_legal_move(&board, pawn, sq("e4")));
    }

    #[test]
    fn pawn_forward_two_ignores_destination_occupancy() {
        // Only the intermediate square gates the two-square advance; an
        // opposing piece sitting on the destination does not.
        let (mut board, pawn) = lone(PieceKind::Pawn, Color::White, "e2");
        board.place(PieceKind::Knight, Color::Black, sq("e4"));
        assert!(is_legal_move(&board, pawn, sq("e4")));
    }

    #[test]
    fn pawn_diagonal_requires_opponent() {
        let (mut board, pawn) = lone(PieceKind::Pawn, Color::White, "e4");
        assert!(!is_legal_move(&board, pawn, sq("d5"))); // empty
        board.place(PieceKind::Rook, Color::Black, sq("d5"));
        assert!(is_legal_move(&board, pawn, sq("d5")));
        board.place(PieceKind::Rook, Color::White, sq("f5"));
        assert!(!is_legal_move(&board, pawn, sq("f5"))); // own piece
    }

    #[test]
    fn black_pawn_mirrors_white() {
        let (board, pawn) = lone(PieceKind::Pawn, Color::Black, "e7");
        assert!(is_legal_move(&board, pawn, sq("e6")));
        assert!(is_legal_move(&board, pawn, sq("e5")));
        assert!(!is_legal_move(&board, pawn, sq("e8")));

        let (mut board, pawn) = lone(PieceKind::Pawn, Color::Black, "d5");
        board.place(PieceKind::Pawn, Color::White, sq("c4"));
        assert!(is_legal_move(&board, pawn, sq("c4")));
        assert!(!is_legal_move(&board, pawn, sq("e4")));
    }

    #[test]
    fn legal_destinations_open_queen() {
        let (board, queen) = lone(PieceKind::Queen, Color::White, "d4");
        let targets: Vec<Square> = legal_destinations(&board, queen).collect();
        assert_eq!(targets.len(), 27);
        assert!(targets.contains(&sq("d8")));
        assert!(targets.contains(&sq("a1")));
        assert!(!targets.contains(&sq("d4")));
    }

    #[test]
    fn legal_destinations_startpos_pawn_and_knight() {
        let board = BoardState::standard();
        let pawn = *board.piece_at(sq("e2")).unwrap();
        let targets: Vec<Square> = legal_destinations(&board, pawn).collect();
        assert_eq!(targets, vec![sq("e3"), sq("e4")]);

        let knight = *board.piece_at(sq("b1")).unwrap();
        let targets: Vec<Square> = legal_destinations(&board, knight).collect();
        assert_eq!(targets, vec![sq("a3"), sq("c3")]);
    }
}
