//! Perft (performance test) for move generator validation.
//!
//! Perft counts the number of leaf nodes at a given depth, which can be
//! compared against known-correct values to validate the move generator.
//! Castling and en passant are not generated here, so only depths where
//! neither can occur match published tables.

use super::legal_moves;
use crate::Position;
use chess_core::{Color, Move};

/// Collects every legal move of `side`.
fn side_moves(position: &Position, side: Color) -> Vec<Move> {
    position
        .pieces_of(side)
        .flat_map(|(from, _)| legal_moves(position, from).as_slice().to_vec())
        .collect()
}

/// Counts the number of leaf nodes at the given depth with `side` to move.
pub fn perft(position: &Position, side: Color, depth: u32) -> u64 {
    if depth == 0 {
        return 1;
    }

    let moves = side_moves(position, side);

    if depth == 1 {
        return moves.len() as u64;
    }

    let mut nodes = 0u64;
    for m in &moves {
        let mut next = position.clone();
        next.apply_move(*m);
        nodes += perft(&next, side.opposite(), depth - 1);
    }
    nodes
}

/// Perft with divide - shows node count for each move at depth-1.
/// Useful for debugging to identify which moves have incorrect counts.
pub fn perft_divide(position: &Position, side: Color, depth: u32) -> Vec<(String, u64)> {
    let moves = side_moves(position, side);
    let mut results = Vec::with_capacity(moves.len());

    for m in &moves {
        let mut next = position.clone();
        next.apply_move(*m);
        let nodes = if depth > 1 {
            perft(&next, side.opposite(), depth - 1)
        } else {
            1
        };
        results.push((m.to_coordinates(), nodes));
    }

    results.sort_by(|a, b| a.0.cmp(&b.0));
    results
}

#[cfg(test)]
mod tests {
    use super::*;

    // Starting position perft values (well-known and verified)
    #[test]
    fn perft_startpos_depth_1() {
        assert_eq!(perft(&Position::startpos(), Color::White, 1), 20);
    }

    #[test]
    fn perft_startpos_depth_2() {
        assert_eq!(perft(&Position::startpos(), Color::White, 2), 400);
    }

    #[test]
    fn perft_startpos_depth_3() {
        assert_eq!(perft(&Position::startpos(), Color::White, 3), 8902);
    }

    #[test]
    fn perft_depth_0_is_one() {
        assert_eq!(perft(&Position::startpos(), Color::Black, 0), 1);
    }

    #[test]
    fn perft_divide_startpos() {
        let results = perft_divide(&Position::startpos(), Color::White, 2);
        assert_eq!(results.len(), 20);
        assert!(results.iter().all(|(_, nodes)| *nodes == 20));
        assert_eq!(results.iter().map(|(_, n)| n).sum::<u64>(), 400);
        assert_eq!(results[0].0, "a2a3");
    }

    #[test]
    fn perft_counts_past_move_list_capacity() {
        let position = Position::from_fen("1QQ1QQQk/1Q5Q/Q4Q2/Q6Q/Q6Q/Q3Q3/Q6Q/KQQQ1Q1Q").unwrap();
        assert_eq!(perft(&position, Color::White, 1), 259);
        assert_eq!(perft_divide(&position, Color::White, 1).len(), 259);
    }

    #[test]
    fn perft_promotion_position() {
        // Lone pawn about to promote: 4 promotions + 5 king moves
        let position = Position::from_fen("7k/P7/8/8/8/8/8/4K3").unwrap();
        assert_eq!(perft(&position, Color::White, 1), 9);
    }
}
