//! Pseudo-legal move generation for each piece kind.
//!
//! Nothing here looks at whether the mover's own king ends up attacked;
//! that is the job of the legality filter.

use super::MoveList;
use crate::Position;
use chess_core::{Color, Move, Piece, PieceKind, Square};

/// Orthogonal unit steps as (row, column) deltas.
const ROOK_DIRECTIONS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

/// Diagonal unit steps.
const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

/// All eight unit steps. Also the king's step set.
const QUEEN_DIRECTIONS: [(i8, i8); 8] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (2, 1),
    (2, -1),
    (-2, 1),
    (-2, -1),
    (1, 2),
    (1, -2),
    (-1, 2),
    (-1, -2),
];

/// Generates the pseudo-legal moves of the piece on `from`.
///
/// An empty square yields an empty list.
pub fn pseudo_legal_moves(position: &Position, from: Square) -> MoveList {
    let mut moves = MoveList::new();
    if let Some(piece) = position.piece_at(from) {
        generate_piece_moves(position, from, piece, &mut moves);
    }
    moves
}

/// Appends the pseudo-legal moves of `piece` standing on `from`.
pub(crate) fn generate_piece_moves(
    position: &Position,
    from: Square,
    piece: Piece,
    moves: &mut MoveList,
) {
    let us = piece.color;
    match piece.kind {
        PieceKind::Pawn => generate_pawn_moves(position, from, us, moves),
        PieceKind::Knight => generate_step_moves(position, from, us, &KNIGHT_OFFSETS, moves),
        PieceKind::Bishop => generate_sliding_moves(position, from, us, &BISHOP_DIRECTIONS, moves),
        PieceKind::Rook => generate_sliding_moves(position, from, us, &ROOK_DIRECTIONS, moves),
        PieceKind::Queen => generate_sliding_moves(position, from, us, &QUEEN_DIRECTIONS, moves),
        PieceKind::King => generate_step_moves(position, from, us, &QUEEN_DIRECTIONS, moves),
    }
}

/// Casts a ray along each direction until it leaves the board or hits a
/// piece. An enemy piece ends the ray with a capture, a friendly one ends
/// it without a move.
fn generate_sliding_moves(
    position: &Position,
    from: Square,
    us: Color,
    directions: &[(i8, i8)],
    moves: &mut MoveList,
) {
    for &(d_row, d_col) in directions {
        let mut current = from;
        while let Some(to) = current.offset(d_row, d_col) {
            match position.piece_at(to) {
                None => moves.push(Move::normal(from, to)),
                Some(blocker) => {
                    if blocker.color != us {
                        moves.push(Move::normal(from, to));
                    }
                    break;
                }
            }
            current = to;
        }
    }
}

/// Single jumps to each offset that lands on an empty or enemy square.
fn generate_step_moves(
    position: &Position,
    from: Square,
    us: Color,
    offsets: &[(i8, i8)],
    moves: &mut MoveList,
) {
    for &(d_row, d_col) in offsets {
        let Some(to) = from.offset(d_row, d_col) else {
            continue;
        };
        if position.piece_at(to).map_or(true, |target| target.color != us) {
            moves.push(Move::normal(from, to));
        }
    }
}

fn generate_pawn_moves(position: &Position, from: Square, us: Color, moves: &mut MoveList) {
    let dir = us.pawn_direction();

    // Pushes
    if let Some(one) = from.offset(dir, 0) {
        if position.is_empty(one) {
            push_pawn_move(from, one, us, moves);

            if from.rank() == us.pawn_rank() {
                if let Some(two) = one.offset(dir, 0) {
                    if position.is_empty(two) {
                        moves.push(Move::normal(from, two));
                    }
                }
            }
        }
    }

    // Captures
    for to in pawn_capture_squares(from, us) {
        if position
            .piece_at(to)
            .is_some_and(|target| target.color != us)
        {
            push_pawn_move(from, to, us, moves);
        }
    }
}

/// Returns the (up to two) squares diagonally ahead of a pawn.
pub(crate) fn pawn_capture_squares(from: Square, us: Color) -> impl Iterator<Item = Square> {
    let dir = us.pawn_direction();
    [-1, 1]
        .into_iter()
        .filter_map(move |d_col| from.offset(dir, d_col))
}

/// Pushes a pawn move, expanded into one move per promotion kind on the far rank.
fn push_pawn_move(from: Square, to: Square, us: Color, moves: &mut MoveList) {
    if to.rank() == us.promotion_rank() {
        for kind in PieceKind::PROMOTIONS {
            moves.push(Move::promoting(from, to, kind));
        }
    } else {
        moves.push(Move::normal(from, to));
    }
}
