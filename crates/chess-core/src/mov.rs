//! Move representation.

use crate::{PieceKind, Square};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A chess move: a source square, a destination square, and the kind a pawn
/// promotes to when it reaches the far rank.
///
/// Equality is structural, so two moves between the same squares with
/// different promotion kinds are distinct.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub from: Square,
    pub to: Square,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub promotion: Option<PieceKind>,
}

impl Move {
    /// Creates a new move.
    #[inline]
    pub const fn new(from: Square, to: Square, promotion: Option<PieceKind>) -> Self {
        Move {
            from,
            to,
            promotion,
        }
    }

    /// Creates a move without promotion.
    #[inline]
    pub const fn normal(from: Square, to: Square) -> Self {
        Self::new(from, to, None)
    }

    /// Creates a promotion move.
    #[inline]
    pub const fn promoting(from: Square, to: Square, kind: PieceKind) -> Self {
        Self::new(from, to, Some(kind))
    }

    /// Returns true if this move carries a promotion kind.
    #[inline]
    pub const fn is_promotion(self) -> bool {
        self.promotion.is_some()
    }

    /// Returns the coordinate form of this move (e.g., "e2e4", "e7e8q").
    pub fn to_coordinates(self) -> String {
        match self.promotion {
            Some(kind) => format!("{}{}{}", self.from, self.to, kind.to_char()),
            None => format!("{}{}", self.from, self.to),
        }
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({})", self.to_coordinates())
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_coordinates())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{File, Rank};

    #[test]
    fn move_fields() {
        let e2 = Square::new(File::E, Rank::R2);
        let e4 = Square::new(File::E, Rank::R4);
        let m = Move::normal(e2, e4);

        assert_eq!(m.from, e2);
        assert_eq!(m.to, e4);
        assert_eq!(m.promotion, None);
        assert!(!m.is_promotion());
    }

    #[test]
    fn move_coordinates() {
        let e2 = Square::new(File::E, Rank::R2);
        let e4 = Square::new(File::E, Rank::R4);
        assert_eq!(Move::normal(e2, e4).to_coordinates(), "e2e4");

        let e7 = Square::new(File::E, Rank::R7);
        let e8 = Square::new(File::E, Rank::R8);
        assert_eq!(
            Move::promoting(e7, e8, PieceKind::Queen).to_coordinates(),
            "e7e8q"
        );
        assert_eq!(
            Move::promoting(e7, e8, PieceKind::Knight).to_coordinates(),
            "e7e8n"
        );
    }

    #[test]
    fn equality_includes_promotion() {
        let a7 = Square::new(File::A, Rank::R7);
        let a8 = Square::A8;
        assert_eq!(
            Move::promoting(a7, a8, PieceKind::Rook),
            Move::promoting(a7, a8, PieceKind::Rook)
        );
        assert_ne!(
            Move::promoting(a7, a8, PieceKind::Rook),
            Move::promoting(a7, a8, PieceKind::Queen)
        );
        assert_ne!(Move::normal(a7, a8), Move::promoting(a7, a8, PieceKind::Queen));
    }

    #[test]
    fn move_debug_display() {
        let e2 = Square::new(File::E, Rank::R2);
        let e4 = Square::new(File::E, Rank::R4);
        let m = Move::normal(e2, e4);
        assert_eq!(format!("{:?}", m), "Move(e2e4)");
        assert_eq!(format!("{}", m), "e2e4");
    }
}
