//! Game state management.
//!
//! [`Game`] owns the live position and the side to move, and is the only
//! thing that changes them. Check, checkmate, and stalemate are recomputed
//! from the board on every query.

use crate::movegen::{
    castling_moves, is_king_attacked, leaves_king_safe, legal_moves, CastlingRights,
};
use crate::{GameStatus, MoveList, Position, RulesConfig};
use chess_core::{Color, Fen, FenError, Move, PieceKind, Square};
use thiserror::Error;
use tracing::debug;

/// Reasons a move is refused by [`Game::make_move`].
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum IllegalMoveError {
    /// The source square is empty.
    #[error("no piece on {0}")]
    NoPiece(Square),
    /// The piece on the source square belongs to the side not to move.
    #[error("piece on {square} belongs to {color}, who is not to move")]
    NotYourTurn { square: Square, color: Color },
    /// The move is not among the legal moves of the piece.
    #[error("illegal move: {0}")]
    NotLegal(Move),
}

/// A chess game: the live position, whose turn it is, and the rules in force.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    position: Position,
    side_to_move: Color,
    castling: CastlingRights,
    rules: RulesConfig,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// Creates a new game with the standard starting position, White to move.
    pub fn new() -> Self {
        Self::with_config(RulesConfig::default())
    }

    /// Creates a new game from the starting position under the given rules.
    pub fn with_config(rules: RulesConfig) -> Self {
        Game {
            position: Position::startpos(),
            side_to_move: Color::White,
            castling: CastlingRights::ALL,
            rules,
        }
    }

    /// Creates a game from a FEN string under the default rules.
    pub fn from_fen(fen: &str) -> Result<Self, FenError> {
        Self::from_fen_with_config(fen, RulesConfig::default())
    }

    /// Creates a game from a FEN string under the given rules.
    ///
    /// The placement, side to move, and castling field are used.
    pub fn from_fen_with_config(fen: &str, rules: RulesConfig) -> Result<Self, FenError> {
        let parsed = Fen::parse(fen)?;
        Ok(Game {
            position: Position::from_parsed(&parsed),
            side_to_move: parsed.side_to_move,
            castling: CastlingRights::from_fen_field(&parsed.castling),
            rules,
        })
    }

    /// Returns the current position as a FEN string.
    ///
    /// En passant is never tracked and the clocks are not kept, so those
    /// fields are always "- 0 1".
    pub fn to_fen(&self) -> String {
        Fen {
            piece_placement: self.position.to_fen_placement(),
            side_to_move: self.side_to_move,
            castling: self.castling.to_fen_field(),
        }
        .to_fen()
    }

    /// Returns a reference to the live position.
    pub fn position(&self) -> &Position {
        &self.position
    }

    /// Returns the side whose turn it is.
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    /// Returns the castling rights still held.
    pub fn castling_rights(&self) -> CastlingRights {
        self.castling
    }

    /// Returns the rules in force.
    pub fn rules(&self) -> RulesConfig {
        self.rules
    }

    /// Replaces the live position and sets the side to move.
    ///
    /// Castling rights are cleared; use
    /// [`set_position_with_castling`](Self::set_position_with_castling) to
    /// keep some.
    pub fn set_position(&mut self, position: Position, side_to_move: Color) {
        self.set_position_with_castling(position, side_to_move, CastlingRights::NONE);
    }

    /// Replaces the live position, the side to move, and the castling rights.
    pub fn set_position_with_castling(
        &mut self,
        position: Position,
        side_to_move: Color,
        castling: CastlingRights,
    ) {
        debug!(side = %side_to_move, placement = %position.to_fen_placement(), "position replaced");
        self.position = position;
        self.side_to_move = side_to_move;
        self.castling = castling;
    }

    /// Returns the legal moves of the piece on `square`.
    ///
    /// `None` means the square is empty; `Some` with an empty list means the
    /// piece is there but cannot move. The turn is not consulted.
    pub fn legal_moves_at(&self, square: Square) -> Option<MoveList> {
        let piece = self.position.piece_at(square)?;
        let mut moves = legal_moves(&self.position, square);

        if self.rules.castling && piece.kind == PieceKind::King {
            let castles = castling_moves(&self.position, piece.color, self.castling);
            moves.extend(
                castles
                    .iter()
                    .copied()
                    .filter(|m| leaves_king_safe(&self.position, *m, piece.color)),
            );
        }

        Some(moves)
    }

    /// Returns every legal move of the given side.
    ///
    /// Unlike the per-piece lists this is not capped: positions built by the
    /// caller may hold more moves than any reachable game.
    pub fn all_legal_moves(&self, color: Color) -> Vec<Move> {
        self.position
            .pieces_of(color)
            .filter_map(|(from, _)| self.legal_moves_at(from))
            .flat_map(|moves| moves.as_slice().to_vec())
            .collect()
    }

    fn has_legal_move(&self, color: Color) -> bool {
        self.position
            .pieces_of(color)
            .any(|(from, _)| self.legal_moves_at(from).is_some_and(|moves| !moves.is_empty()))
    }

    /// Plays a move for the side to move.
    ///
    /// # Errors
    ///
    /// Returns [`IllegalMoveError`] if the source square is empty, holds a
    /// piece of the side not to move, or the move is not legal. The game is
    /// left untouched in that case.
    pub fn make_move(&mut self, m: Move) -> Result<(), IllegalMoveError> {
        if let Err(err) = self.validate(m) {
            debug!(mv = %m, reason = %err, "move rejected");
            return Err(err);
        }

        let mover = self.side_to_move;
        if let Some(piece) = self.position.piece_at(m.from) {
            self.castling.update_for_move(piece, m);
        }
        self.position.apply_move(m);
        self.side_to_move = mover.opposite();

        debug!(mv = %m, side = %mover, "move applied");
        Ok(())
    }

    fn validate(&self, m: Move) -> Result<(), IllegalMoveError> {
        let piece = self
            .position
            .piece_at(m.from)
            .ok_or(IllegalMoveError::NoPiece(m.from))?;
        if piece.color != self.side_to_move {
            return Err(IllegalMoveError::NotYourTurn {
                square: m.from,
                color: piece.color,
            });
        }
        let legal = self.legal_moves_at(m.from).unwrap_or_default();
        if !legal.contains(&m) {
            return Err(IllegalMoveError::NotLegal(m));
        }
        Ok(())
    }

    /// Returns true if `color`'s king is attacked.
    pub fn is_in_check(&self, color: Color) -> bool {
        is_king_attacked(&self.position, color)
    }

    /// Returns true if `color` is in check and has no legal move.
    pub fn is_checkmate(&self, color: Color) -> bool {
        self.is_in_check(color) && !self.has_legal_move(color)
    }

    /// Returns true if `color` is not in check but has no legal move.
    ///
    /// Insufficient material and repetition are not considered.
    pub fn is_stalemate(&self, color: Color) -> bool {
        !self.is_in_check(color) && !self.has_legal_move(color)
    }

    /// Returns the status of the side to move.
    pub fn status(&self) -> GameStatus {
        let side = self.side_to_move;
        match (self.is_in_check(side), self.has_legal_move(side)) {
            (true, true) => GameStatus::Check(side),
            (true, false) => GameStatus::Checkmate(side),
            (false, true) => GameStatus::Ongoing(side),
            (false, false) => GameStatus::Stalemate(side),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chess_core::Piece;

    fn sq(s: &str) -> Square {
        Square::from_algebraic(s).unwrap()
    }

    fn mv(from: &str, to: &str) -> Move {
        Move::normal(sq(from), sq(to))
    }

    #[test]
    fn new_game() {
        let game = Game::new();
        assert_eq!(game.side_to_move(), Color::White);
        assert_eq!(game.position(), &Position::startpos());
        assert_eq!(game.status(), GameStatus::Ongoing(Color::White));
        assert_eq!(game.all_legal_moves(Color::White).len(), 20);
        assert_eq!(game.all_legal_moves(Color::Black).len(), 20);
    }

    #[test]
    fn all_legal_moves_beyond_move_list_capacity() {
        let game = Game::from_fen("1QQ1QQQk/1Q5Q/Q4Q2/Q6Q/Q6Q/Q3Q3/Q6Q/KQQQ1Q1Q w").unwrap();
        let moves = game.all_legal_moves(Color::White);
        assert!(moves.len() > MoveList::MAX_MOVES);
        assert_eq!(moves.len(), 259);
        assert_eq!(game.status(), GameStatus::Ongoing(Color::White));
    }

    #[test]
    fn startpos_is_quiet_for_both_sides() {
        let game = Game::new();
        for color in Color::ALL {
            assert!(!game.is_in_check(color));
            assert!(!game.is_checkmate(color));
            assert!(!game.is_stalemate(color));
        }
    }

    #[test]
    fn legal_moves_at_distinguishes_empty_from_immobile() {
        let game = Game::new();
        assert!(game.legal_moves_at(sq("e4")).is_none());
        let king_moves = game.legal_moves_at(Square::E1).unwrap();
        assert!(king_moves.is_empty());
    }

    #[test]
    fn make_move_flips_turn() {
        let mut game = Game::new();
        game.make_move(mv("e2", "e4")).unwrap();
        assert_eq!(game.side_to_move(), Color::Black);
        assert_eq!(game.position().piece_at(sq("e2")), None);
        assert_eq!(
            game.position().piece_at(sq("e4")),
            Some(Piece::new(Color::White, PieceKind::Pawn))
        );
        game.make_move(mv("e7", "e5")).unwrap();
        assert_eq!(game.side_to_move(), Color::White);
    }

    #[test]
    fn rejects_empty_source() {
        let mut game = Game::new();
        assert_eq!(
            game.make_move(mv("e4", "e5")),
            Err(IllegalMoveError::NoPiece(sq("e4")))
        );
    }

    #[test]
    fn rejects_wrong_side() {
        let mut game = Game::new();
        assert_eq!(
            game.make_move(mv("e7", "e5")),
            Err(IllegalMoveError::NotYourTurn {
                square: sq("e7"),
                color: Color::Black
            })
        );
    }

    #[test]
    fn rejected_move_leaves_game_unchanged() {
        let mut game = Game::new();
        game.make_move(mv("e2", "e4")).unwrap();
        let before = game.clone();

        let bad = mv("d7", "d4");
        assert_eq!(game.make_move(bad), Err(IllegalMoveError::NotLegal(bad)));
        assert_eq!(game, before);
    }

    #[test]
    fn promotion_requires_kind() {
        let mut game = Game::from_fen("7k/P7/8/8/8/8/8/K7 w").unwrap();
        let plain = mv("a7", "a8");
        assert_eq!(game.make_move(plain), Err(IllegalMoveError::NotLegal(plain)));

        game.make_move(Move::promoting(sq("a7"), Square::A8, PieceKind::Rook))
            .unwrap();
        assert_eq!(
            game.position().piece_at(Square::A8),
            Some(Piece::new(Color::White, PieceKind::Rook))
        );
    }

    #[test]
    fn promotion_gives_check() {
        let mut game = Game::from_fen("7k/P7/8/8/8/8/8/K7 w").unwrap();
        game.make_move(Move::promoting(sq("a7"), Square::A8, PieceKind::Queen))
            .unwrap();
        assert!(game.is_in_check(Color::Black));
        assert_eq!(game.status(), GameStatus::Check(Color::Black));
    }

    #[test]
    fn fools_mate() {
        let mut game = Game::new();
        game.make_move(mv("f2", "f3")).unwrap();
        game.make_move(mv("e7", "e5")).unwrap();
        game.make_move(mv("g2", "g4")).unwrap();
        game.make_move(mv("d8", "h4")).unwrap();

        assert!(game.is_in_check(Color::White));
        assert!(game.is_checkmate(Color::White));
        assert!(!game.is_stalemate(Color::White));
        assert_eq!(game.status(), GameStatus::Checkmate(Color::White));
        assert!(game.all_legal_moves(Color::White).is_empty());
    }

    #[test]
    fn stalemate() {
        let game = Game::from_fen("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1").unwrap();
        assert!(game.is_stalemate(Color::Black));
        assert!(!game.is_checkmate(Color::Black));
        assert_eq!(game.status(), GameStatus::Stalemate(Color::Black));
    }

    #[test]
    fn set_position_replaces_state() {
        let mut game = Game::new();
        let position = Position::from_fen("4k3/8/8/8/8/8/8/4K2R").unwrap();
        game.set_position(position.clone(), Color::Black);
        assert_eq!(game.position(), &position);
        assert_eq!(game.side_to_move(), Color::Black);
        assert_eq!(game.castling_rights(), CastlingRights::NONE);
    }

    #[test]
    fn fen_roundtrip() {
        let fen = "r3k2r/8/8/8/8/8/8/R3K2R b Kq - 0 1";
        assert_eq!(Game::from_fen(fen).unwrap().to_fen(), fen);
        assert_eq!(Game::new().to_fen(), Fen::STARTPOS);
    }

    #[test]
    fn castling_off_by_default() {
        let game = Game::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq").unwrap();
        let moves = game.legal_moves_at(Square::E1).unwrap();
        assert!(!moves.contains(&Move::normal(Square::E1, Square::G1)));
        assert_eq!(moves.len(), 5);
    }

    #[test]
    fn castling_when_enabled() {
        let mut game = Game::from_fen_with_config(
            "r3k2r/8/8/8/8/8/8/R3K2R w KQkq",
            RulesConfig::with_castling(),
        )
        .unwrap();
        let moves = game.legal_moves_at(Square::E1).unwrap();
        assert_eq!(moves.len(), 7);

        game.make_move(Move::normal(Square::E1, Square::G1)).unwrap();
        assert_eq!(
            game.position().piece_at(Square::F1),
            Some(Piece::new(Color::White, PieceKind::Rook))
        );
        assert_eq!(game.position().piece_at(Square::H1), None);
        assert_eq!(game.castling_rights().to_fen_field(), "kq");
    }

    #[test]
    fn rook_move_forfeits_castling_on_that_side() {
        let mut game = Game::from_fen_with_config(
            "r3k2r/8/8/8/8/8/8/R3K2R w KQkq",
            RulesConfig::with_castling(),
        )
        .unwrap();
        game.make_move(mv("h1", "h2")).unwrap();
        game.make_move(mv("a8", "a7")).unwrap();
        game.make_move(mv("h2", "h1")).unwrap();

        let moves = game.legal_moves_at(Square::E8).unwrap();
        assert!(!moves.contains(&Move::normal(Square::E8, Square::C8)));
        assert!(moves.contains(&Move::normal(Square::E8, Square::G8)));

        game.make_move(mv("e8", "d8")).unwrap();
        let moves = game.legal_moves_at(Square::E1).unwrap();
        assert!(!moves.contains(&Move::normal(Square::E1, Square::G1)));
        assert!(moves.contains(&Move::normal(Square::E1, Square::C1)));
    }

    #[test]
    fn castling_not_offered_into_check() {
        let game = Game::from_fen_with_config(
            "r3k1r1/8/8/8/8/8/8/R3K2R w KQ",
            RulesConfig::with_castling(),
        )
        .unwrap();
        // g-file rook covers g1
        let moves = game.legal_moves_at(Square::E1).unwrap();
        assert!(!moves.contains(&Move::normal(Square::E1, Square::G1)));
        assert!(moves.contains(&Move::normal(Square::E1, Square::C1)));
    }
}
