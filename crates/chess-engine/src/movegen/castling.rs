//! Castling rights and castling move generation.
//!
//! Castling is an optional rule. When enabled, a king on its home square
//! may castle toward a rook on its home square if:
//! - neither has moved (the matching right is still held)
//! - every square between them is empty
//! - the king is not in check
//! - the king neither passes through nor lands on a threatened square

use super::{is_square_threatened, MoveList};
use crate::Position;
use chess_core::{Color, Move, Piece, PieceKind, Square};

/// The two castling directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CastleSide {
    /// Toward the h-file rook (O-O).
    King,
    /// Toward the a-file rook (O-O-O).
    Queen,
}

impl CastleSide {
    pub const ALL: [CastleSide; 2] = [CastleSide::King, CastleSide::Queen];

    /// Column of the rook before castling.
    const fn rook_col(self) -> i8 {
        match self {
            CastleSide::King => 8,
            CastleSide::Queen => 1,
        }
    }

    /// Column the king lands on.
    const fn king_target_col(self) -> i8 {
        match self {
            CastleSide::King => 7,
            CastleSide::Queen => 3,
        }
    }

    /// Columns that must be empty.
    const fn between_cols(self) -> &'static [i8] {
        match self {
            CastleSide::King => &[6, 7],
            CastleSide::Queen => &[2, 3, 4],
        }
    }

    /// Columns the king passes through and lands on.
    const fn king_path_cols(self) -> [i8; 2] {
        match self {
            CastleSide::King => [6, 7],
            CastleSide::Queen => [4, 3],
        }
    }

    /// Home square of the rook on this side for the given color.
    pub fn rook_square(self, color: Color) -> Square {
        let row = color.back_rank().index() as i8 + 1;
        match Square::at(row, self.rook_col()) {
            Some(sq) => sq,
            None => unreachable!("back rank corners are on the board"),
        }
    }
}

/// Castling availability for both sides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CastlingRights(u8);

impl CastlingRights {
    pub const NONE: CastlingRights = CastlingRights(0);
    pub const WHITE_KINGSIDE: u8 = 0b0001;
    pub const WHITE_QUEENSIDE: u8 = 0b0010;
    pub const BLACK_KINGSIDE: u8 = 0b0100;
    pub const BLACK_QUEENSIDE: u8 = 0b1000;
    pub const ALL: CastlingRights = CastlingRights(0b1111);

    /// Creates new castling rights from flags.
    #[inline]
    pub const fn new(flags: u8) -> Self {
        CastlingRights(flags & 0b1111)
    }

    /// Parses the castling field of FEN ("KQkq" subset or "-").
    ///
    /// Unknown characters are ignored; the FEN parser rejects them earlier.
    pub fn from_fen_field(field: &str) -> Self {
        let mut flags = 0u8;
        for c in field.chars() {
            match c {
                'K' => flags |= Self::WHITE_KINGSIDE,
                'Q' => flags |= Self::WHITE_QUEENSIDE,
                'k' => flags |= Self::BLACK_KINGSIDE,
                'q' => flags |= Self::BLACK_QUEENSIDE,
                _ => {}
            }
        }
        CastlingRights::new(flags)
    }

    /// Returns the castling field of FEN for these rights.
    pub fn to_fen_field(self) -> String {
        if self.0 == 0 {
            return "-".to_string();
        }
        let mut field = String::new();
        for (flag, c) in [
            (Self::WHITE_KINGSIDE, 'K'),
            (Self::WHITE_QUEENSIDE, 'Q'),
            (Self::BLACK_KINGSIDE, 'k'),
            (Self::BLACK_QUEENSIDE, 'q'),
        ] {
            if self.0 & flag != 0 {
                field.push(c);
            }
        }
        field
    }

    const fn flag(color: Color, side: CastleSide) -> u8 {
        match (color, side) {
            (Color::White, CastleSide::King) => Self::WHITE_KINGSIDE,
            (Color::White, CastleSide::Queen) => Self::WHITE_QUEENSIDE,
            (Color::Black, CastleSide::King) => Self::BLACK_KINGSIDE,
            (Color::Black, CastleSide::Queen) => Self::BLACK_QUEENSIDE,
        }
    }

    /// Returns true if `color` still holds the right to castle on `side`.
    #[inline]
    pub const fn can_castle(self, color: Color, side: CastleSide) -> bool {
        (self.0 & Self::flag(color, side)) != 0
    }

    /// Removes one castling right.
    #[inline]
    pub fn remove(&mut self, color: Color, side: CastleSide) {
        self.0 &= !Self::flag(color, side);
    }

    /// Removes castling rights for a color.
    #[inline]
    pub fn remove_color(&mut self, color: Color) {
        self.remove(color, CastleSide::King);
        self.remove(color, CastleSide::Queen);
    }

    /// Updates the rights for `mover` playing `m`.
    ///
    /// A king move gives up both rights; a rook leaving its home corner, or
    /// any piece landing on an enemy home corner, gives up that corner's
    /// right.
    pub fn update_for_move(&mut self, mover: Piece, m: Move) {
        if mover.kind == PieceKind::King {
            self.remove_color(mover.color);
        }
        for color in Color::ALL {
            for side in CastleSide::ALL {
                let corner = side.rook_square(color);
                if m.from == corner || m.to == corner {
                    self.remove(color, side);
                }
            }
        }
    }

    /// Returns the raw flags.
    #[inline]
    pub const fn raw(self) -> u8 {
        self.0
    }
}

/// Generates the castling moves available to `color`.
///
/// Moves are encoded as the king stepping two files toward the rook. The
/// result is already legal: the king's start, path, and landing squares are
/// all checked.
pub fn castling_moves(position: &Position, color: Color, rights: CastlingRights) -> MoveList {
    let mut moves = MoveList::new();
    let row = color.back_rank().index() as i8 + 1;
    let them = color.opposite();

    let Some(king_from) = Square::at(row, 5) else {
        return moves;
    };
    if position.piece_at(king_from) != Some(Piece::new(color, PieceKind::King)) {
        return moves;
    }
    if is_square_threatened(position, king_from, them) {
        return moves;
    }

    for side in CastleSide::ALL {
        if !rights.can_castle(color, side) {
            continue;
        }
        if position.piece_at(side.rook_square(color)) != Some(Piece::new(color, PieceKind::Rook)) {
            continue;
        }

        let path_clear = side
            .between_cols()
            .iter()
            .filter_map(|&col| Square::at(row, col))
            .all(|sq| position.is_empty(sq));
        if !path_clear {
            continue;
        }

        let path_safe = side
            .king_path_cols()
            .iter()
            .filter_map(|&col| Square::at(row, col))
            .all(|sq| !is_square_threatened(position, sq, them));
        if !path_safe {
            continue;
        }

        if let Some(king_to) = Square::at(row, side.king_target_col()) {
            moves.push(Move::normal(king_from, king_to));
        }
    }

    moves
}
