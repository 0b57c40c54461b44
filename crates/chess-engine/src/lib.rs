//! Chess rules engine on a mailbox board.
//!
//! This crate provides:
//! - [`Position`] - 64-square board holding the pieces
//! - [`movegen`] - pseudo-legal generation, the attack oracle and the legality filter
//! - [`Game`] - live game state: side to move, move application, check and mate detection
//! - [`RulesConfig`] - optional rules such as castling, loadable from TOML
//!
//! # Architecture
//!
//! Every piece's movement pattern lives in one generator. Attack detection
//! reuses those generators, and legality is decided by playing a candidate
//! on a copy of the position and asking whether the mover's king is attacked.
//! Check, checkmate, and stalemate are derived from the board on demand.
//!
//! # Example
//!
//! ```
//! use chess_engine::{Game, GameStatus};
//! use chess_core::{Color, Move, Square};
//!
//! let mut game = Game::new();
//! let e2 = Square::from_algebraic("e2").unwrap();
//! let e4 = Square::from_algebraic("e4").unwrap();
//!
//! assert_eq!(game.legal_moves_at(e2).map(|m| m.len()), Some(2));
//! game.make_move(Move::normal(e2, e4)).unwrap();
//! assert_eq!(game.status(), GameStatus::Ongoing(Color::Black));
//! ```

mod config;
mod game;
pub mod movegen;
mod position;
mod status;

pub use config::{ConfigError, RulesConfig};
pub use game::{Game, IllegalMoveError};
pub use movegen::{
    castling_moves, is_king_attacked, is_square_attacked, is_square_threatened, legal_moves,
    pseudo_legal_moves, CastleSide, CastlingRights, MoveList,
};
pub use position::Position;
pub use status::GameStatus;
