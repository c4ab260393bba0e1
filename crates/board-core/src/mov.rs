//! Move representation.

use crate::Square;
use std::fmt;

/// An origin/destination square pair.
///
/// Encoded compactly: 6 bits from, 6 bits to = 12 bits of a u16. There are
/// no special-move flags; capture and promotion are decided by the executor
/// from the board itself.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move(u16);

impl Move {
    /// Creates a new move.
    #[inline]
    pub const fn new(from: Square, to: Square) -> Self {
        Move((from.index() as u16) | ((to.index() as u16) << 6))
    }

    /// Returns the origin square.
    #[inline]
    pub const fn from(self) -> Square {
        match Square::from_index((self.0 & 0x3F) as u8) {
            Some(sq) => sq,
            None => unreachable!(),
        }
    }

    /// Returns the destination square.
    #[inline]
    pub const fn to(self) -> Square {
        match Square::from_index(((self.0 >> 6) & 0x3F) as u8) {
            Some(sq) => sq,
            None => unreachable!(),
        }
    }

    /// Parses a square pair such as "e2e4".
    ///
    /// This is a coordinate lookup only; it carries no knowledge of the
    /// position and never validates legality.
    pub fn from_coords(s: &str) -> Option<Self> {
        if s.len() != 4 {
            return None;
        }
        let from = Square::from_algebraic(&s[0..2])?;
        let to = Square::from_algebraic(&s[2..4])?;
        Some(Move::new(from, to))
    }

    /// Returns the square-pair notation for this move (e.g., "e2e4").
    pub fn to_coords(self) -> String {
        format!("{}{}", self.from(), self.to())
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({})", self.to_coords())
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_coords())
    }
}
