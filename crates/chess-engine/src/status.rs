//! Game status as seen by the side to move.

use chess_core::Color;
use std::fmt;

/// Where the game stands for the side to move.
///
/// Always derived from the live position; never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameStatus {
    /// The side to move has legal moves and is not in check.
    Ongoing(Color),
    /// The side to move is in check but can answer it.
    Check(Color),
    /// The side to move is in check with no legal reply.
    Checkmate(Color),
    /// The side to move has no legal move and is not in check.
    Stalemate(Color),
}

impl GameStatus {
    /// The side this status describes (the side to move).
    pub const fn side(self) -> Color {
        match self {
            GameStatus::Ongoing(c)
            | GameStatus::Check(c)
            | GameStatus::Checkmate(c)
            | GameStatus::Stalemate(c) => c,
        }
    }

    /// Returns true for checkmate and stalemate.
    pub const fn is_terminal(self) -> bool {
        matches!(self, GameStatus::Checkmate(_) | GameStatus::Stalemate(_))
    }

    /// The winning side, if the game ended in checkmate.
    pub const fn winner(self) -> Option<Color> {
        match self {
            GameStatus::Checkmate(loser) => Some(loser.opposite()),
            _ => None,
        }
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameStatus::Ongoing(c) => write!(f, "{} to move", c),
            GameStatus::Check(c) => write!(f, "{} to move, in check", c),
            GameStatus::Checkmate(c) => write!(f, "{} is checkmated", c),
            GameStatus::Stalemate(c) => write!(f, "{} is stalemated", c),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn terminal_states() {
        assert!(!GameStatus::Ongoing(Color::White).is_terminal());
        assert!(!GameStatus::Check(Color::White).is_terminal());
        assert!(GameStatus::Checkmate(Color::Black).is_terminal());
        assert!(GameStatus::Stalemate(Color::Black).is_terminal());
    }

    #[test]
    fn winner_only_on_checkmate() {
        assert_eq!(GameStatus::Checkmate(Color::Black).winner(), Some(Color::White));
        assert_eq!(GameStatus::Stalemate(Color::Black).winner(), None);
        assert_eq!(GameStatus::Check(Color::White).side(), Color::White);
    }

    #[test]
    fn display() {
        assert_eq!(GameStatus::Ongoing(Color::White).to_string(), "White to move");
        assert_eq!(
            GameStatus::Checkmate(Color::Black).to_string(),
            "Black is checkmated"
        );
    }
}
