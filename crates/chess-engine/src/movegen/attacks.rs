//! Attacked-square detection.
//!
//! A square is attacked by a side when some piece of that side has a
//! pseudo-legal move landing on it. The same generators that produce moves
//! answer the question, so pawn pushes never count as attacks.

use super::pieces::{generate_piece_moves, pawn_capture_squares};
use super::MoveList;
use crate::Position;
use chess_core::{Color, PieceKind, Square};

/// Returns true if any piece of `by_color` can pseudo-legally move to `target`.
pub fn is_square_attacked(position: &Position, target: Square, by_color: Color) -> bool {
    let mut moves = MoveList::new();
    position.pieces_of(by_color).any(|(from, piece)| {
        moves.clear();
        generate_piece_moves(position, from, piece, &mut moves);
        moves.iter().any(|m| m.to == target)
    })
}

/// Like [`is_square_attacked`], but a pawn also controls its diagonal
/// squares when they are empty.
///
/// This is the test for squares a king wants to cross, which are empty and
/// so would never show up as pawn captures.
pub fn is_square_threatened(position: &Position, target: Square, by_color: Color) -> bool {
    let mut moves = MoveList::new();
    position.pieces_of(by_color).any(|(from, piece)| {
        if piece.kind == PieceKind::Pawn {
            return pawn_capture_squares(from, by_color).any(|sq| sq == target);
        }
        moves.clear();
        generate_piece_moves(position, from, piece, &mut moves);
        moves.iter().any(|m| m.to == target)
    })
}

/// Returns true if the king of the given color is attacked.
///
/// A side without a king is never in check.
pub fn is_king_attacked(position: &Position, king_color: Color) -> bool {
    position
        .king_square(king_color)
        .is_some_and(|king_sq| is_square_attacked(position, king_sq, king_color.opposite()))
}
