//! Legality filter: pseudo-legal moves minus those that expose the king.

use super::{is_king_attacked, pseudo_legal_moves, MoveList};
use crate::Position;
use chess_core::{Color, Move, Square};
use tracing::trace;

/// Generates the legal moves of the piece on `from`.
///
/// The mover is whoever owns the piece. Each candidate is played on a clone
/// of `position` and kept only if the mover's king is not attacked
/// afterwards. `position` itself is never touched. An empty square, or a
/// piece with no legal moves, gives an empty list.
pub fn legal_moves(position: &Position, from: Square) -> MoveList {
    let mut moves = pseudo_legal_moves(position, from);
    if let Some(piece) = position.piece_at(from) {
        moves.retain(|m| leaves_king_safe(position, *m, piece.color));
    }
    moves
}

/// Returns true if playing `m` leaves `mover`'s king unattacked.
pub fn leaves_king_safe(position: &Position, m: Move, mover: Color) -> bool {
    let mut scratch = position.clone();
    scratch.apply_move(m);
    let safe = !is_king_attacked(&scratch, mover);
    if !safe {
        trace!(mv = %m, side = %mover, "candidate leaves king attacked");
    }
    safe
}
