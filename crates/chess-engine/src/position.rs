//! Chess position representation.

use chess_core::{Color, Fen, FenError, Move, Piece, PieceKind, Square};
use std::fmt;

/// Back-rank arrangement from the a-file to the h-file.
const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// Piece placement on the 8x8 board.
///
/// The board is a flat array indexed by [`Square::index`], so cloning a
/// position copies every square and the clone shares nothing with the
/// original. The legality filter relies on this to simulate moves on a
/// scratch copy.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Position {
    squares: [Option<Piece>; 64],
}

impl Position {
    /// Creates an empty board.
    pub const fn empty() -> Self {
        Position {
            squares: [None; 64],
        }
    }

    /// Creates the standard starting position.
    pub fn startpos() -> Self {
        let mut position = Position::empty();
        for color in Color::ALL {
            let back_row = color.back_rank().index() as i8 + 1;
            let pawn_row = color.pawn_rank().index() as i8 + 1;
            for (col, kind) in (1..=8).zip(BACK_RANK) {
                if let Some(sq) = Square::at(back_row, col) {
                    position.set_piece(sq, Piece::new(color, kind));
                }
                if let Some(sq) = Square::at(pawn_row, col) {
                    position.set_piece(sq, Piece::new(color, PieceKind::Pawn));
                }
            }
        }
        position
    }

    /// Creates a position from a FEN string.
    ///
    /// Only the piece placement is used; see [`Game::from_fen`](crate::Game::from_fen)
    /// to also load the side to move and castling rights.
    pub fn from_fen(fen: &str) -> Result<Self, FenError> {
        let parsed = Fen::parse(fen)?;
        Ok(Self::from_parsed(&parsed))
    }

    /// Builds the board from an already validated FEN.
    pub(crate) fn from_parsed(fen: &Fen) -> Self {
        let mut position = Position::empty();

        // FEN lists rank 8 first
        for (rank_idx, rank_str) in fen.piece_placement.split('/').enumerate() {
            let row = 8 - rank_idx as i8;
            let mut col = 1i8;

            for c in rank_str.chars() {
                if let Some(digit) = c.to_digit(10) {
                    col += digit as i8;
                } else if let Some(piece) = Piece::from_fen_char(c) {
                    if let Some(sq) = Square::at(row, col) {
                        position.set_piece(sq, piece);
                    }
                    col += 1;
                }
            }
        }

        position
    }

    /// Returns the piece placement field of FEN for this board.
    pub fn to_fen_placement(&self) -> String {
        let mut fen = String::new();

        for row in (1..=8).rev() {
            let mut empty_count = 0;
            for col in 1..=8 {
                match Square::at(row, col).and_then(|sq| self.piece_at(sq)) {
                    Some(piece) => {
                        if empty_count > 0 {
                            fen.push_str(&empty_count.to_string());
                            empty_count = 0;
                        }
                        fen.push(piece.to_fen_char());
                    }
                    None => empty_count += 1,
                }
            }
            if empty_count > 0 {
                fen.push_str(&empty_count.to_string());
            }
            if row > 1 {
                fen.push('/');
            }
        }

        fen
    }

    /// Returns the piece at the given square, if any.
    #[inline]
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.squares[sq.index() as usize]
    }

    /// Puts a piece on a square, replacing whatever was there.
    #[inline]
    pub fn set_piece(&mut self, sq: Square, piece: Piece) {
        self.squares[sq.index() as usize] = Some(piece);
    }

    /// Empties a square, returning the piece that stood there.
    #[inline]
    pub fn remove_piece(&mut self, sq: Square) -> Option<Piece> {
        self.squares[sq.index() as usize].take()
    }

    /// Returns true if no piece stands on the square.
    #[inline]
    pub fn is_empty(&self, sq: Square) -> bool {
        self.piece_at(sq).is_none()
    }

    /// Iterates over every occupied square, a1 first.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.squares
            .iter()
            .enumerate()
            .filter_map(|(i, piece)| Some((Square::from_index(i as u8)?, (*piece)?)))
    }

    /// Iterates over the squares holding pieces of the given color.
    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.pieces().filter(move |(_, piece)| piece.color == color)
    }

    /// Returns the square of the given color's king.
    ///
    /// Positions are trusted to hold at most one king per side; if there are
    /// several, the one closest to a1 is returned.
    pub fn king_square(&self, color: Color) -> Option<Square> {
        self.pieces_of(color)
            .find(|(_, piece)| piece.kind == PieceKind::King)
            .map(|(sq, _)| sq)
    }

    /// Plays a move on the board without any legality checks.
    ///
    /// The source is vacated and the moving piece (promoted if the move
    /// carries a promotion and the piece is a pawn) lands on the destination,
    /// capturing whatever stood there. A king moving two files also carries
    /// the rook on that side across it. An empty source square leaves the
    /// board unchanged.
    pub fn apply_move(&mut self, m: Move) {
        let Some(piece) = self.remove_piece(m.from) else {
            return;
        };

        let placed = match (piece.kind, m.promotion) {
            (PieceKind::Pawn, Some(kind)) => piece.with_kind(kind),
            _ => piece,
        };
        self.set_piece(m.to, placed);

        if piece.kind == PieceKind::King && (m.to.col() - m.from.col()).abs() == 2 {
            let row = m.from.row();
            let (rook_col, rook_target_col) = if m.to.col() > m.from.col() {
                (8, 6)
            } else {
                (1, 4)
            };
            if let (Some(rook_from), Some(rook_to)) =
                (Square::at(row, rook_col), Square::at(row, rook_target_col))
            {
                if let Some(rook) = self.remove_piece(rook_from) {
                    self.set_piece(rook_to, rook);
                }
            }
        }
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::startpos()
    }
}

impl fmt::Debug for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Position({})", self.to_fen_placement())
    }
}

/// Renders the board as an 8x8 diagram with rank 8 at the top.
impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in (1..=8).rev() {
            write!(f, "{} ", row)?;
            for col in 1..=8 {
                let c = Square::at(row, col)
                    .and_then(|sq| self.piece_at(sq))
                    .map_or('.', Piece::to_fen_char);
                write!(f, " {}", c)?;
            }
            writeln!(f)?;
        }
        write!(f, "   a b c d e f g h")
    }
}
