//! Core types for chess.
//!
//! This crate provides the fundamental value types used by the rules engine:
//! - [`Piece`], [`PieceKind`] and [`Color`] for piece representation
//! - [`Square`], [`File`], and [`Rank`] for board coordinates
//! - [`Move`] for move representation
//! - FEN parsing for loading positions

mod color;
mod fen;
mod mov;
mod piece;
mod square;

pub use color::Color;
pub use fen::{Fen, FenError};
pub use mov::Move;
pub use piece::{Piece, PieceKind};
pub use square::{File, ParseSquareError, Rank, Square};
