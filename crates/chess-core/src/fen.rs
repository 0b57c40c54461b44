//! FEN (Forsyth-Edwards Notation) parsing for position loading.
//!
//! Only the fields the rules engine tracks are kept: piece placement, the
//! side to move, and castling availability. The en passant square and the
//! move clocks are accepted so that full FEN strings load, but they are
//! only checked for shape and then dropped.

use crate::Color;
use thiserror::Error;

/// Errors that can occur when parsing FEN strings.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FenError {
    #[error("invalid FEN: expected 1 to 6 fields, got {0}")]
    InvalidPartCount(usize),

    #[error("invalid piece placement: {0}")]
    InvalidPiecePlacement(String),

    #[error("invalid active color: expected 'w' or 'b', got '{0}'")]
    InvalidActiveColor(String),

    #[error("invalid castling rights: {0}")]
    InvalidCastlingRights(String),

    #[error("invalid en passant square: {0}")]
    InvalidEnPassantSquare(String),

    #[error("invalid halfmove clock: {0}")]
    InvalidHalfmoveClock(String),

    #[error("invalid fullmove number: {0}")]
    InvalidFullmoveNumber(String),
}

/// Parsed FEN data.
///
/// Holds validated raw components. The engine turns the placement into its
/// own board representation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fen {
    /// Piece placement (e.g., "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR").
    pub piece_placement: String,
    /// Side to move. Defaults to White when the field is absent.
    pub side_to_move: Color,
    /// Castling availability ("KQkq" subset, or "-"). Defaults to "-".
    pub castling: String,
}

impl Fen {
    /// The standard starting position FEN.
    pub const STARTPOS: &'static str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

    /// Parses a FEN string.
    pub fn parse(fen: &str) -> Result<Self, FenError> {
        let parts: Vec<&str> = fen.split_whitespace().collect();

        if parts.is_empty() || parts.len() > 6 {
            return Err(FenError::InvalidPartCount(parts.len()));
        }

        let piece_placement = parts[0];
        Self::validate_piece_placement(piece_placement)?;

        let side_to_move = match parts.get(1).copied() {
            None | Some("w") => Color::White,
            Some("b") => Color::Black,
            Some(other) => return Err(FenError::InvalidActiveColor(other.to_string())),
        };

        let castling = parts.get(2).copied().unwrap_or("-");
        Self::validate_castling(castling)?;

        if let Some(ep) = parts.get(3) {
            Self::validate_en_passant(ep)?;
        }
        if let Some(halfmove) = parts.get(4) {
            halfmove
                .parse::<u32>()
                .map_err(|_| FenError::InvalidHalfmoveClock(halfmove.to_string()))?;
        }
        if let Some(fullmove) = parts.get(5) {
            fullmove
                .parse::<u32>()
                .map_err(|_| FenError::InvalidFullmoveNumber(fullmove.to_string()))?;
        }

        Ok(Fen {
            piece_placement: piece_placement.to_string(),
            side_to_move,
            castling: castling.to_string(),
        })
    }

    fn validate_piece_placement(placement: &str) -> Result<(), FenError> {
        let ranks: Vec<&str> = placement.split('/').collect();
        if ranks.len() != 8 {
            return Err(FenError::InvalidPiecePlacement(format!(
                "expected 8 ranks, got {}",
                ranks.len()
            )));
        }

        for (i, rank) in ranks.iter().enumerate() {
            let mut squares = 0;
            for c in rank.chars() {
                if let Some(digit) = c.to_digit(10) {
                    squares += digit;
                } else if "pnbrqkPNBRQK".contains(c) {
                    squares += 1;
                } else {
                    return Err(FenError::InvalidPiecePlacement(format!(
                        "invalid character '{}' in rank {}",
                        c,
                        8 - i
                    )));
                }
            }
            if squares != 8 {
                return Err(FenError::InvalidPiecePlacement(format!(
                    "rank {} has {} squares, expected 8",
                    8 - i,
                    squares
                )));
            }
        }

        Ok(())
    }

    fn validate_castling(castling: &str) -> Result<(), FenError> {
        if castling == "-" {
            return Ok(());
        }

        for c in castling.chars() {
            if !"KQkq".contains(c) {
                return Err(FenError::InvalidCastlingRights(format!(
                    "invalid character '{}'",
                    c
                )));
            }
        }

        Ok(())
    }

    fn validate_en_passant(ep: &str) -> Result<(), FenError> {
        if ep == "-" {
            return Ok(());
        }

        let chars: Vec<char> = ep.chars().collect();
        if chars.len() != 2
            || !('a'..='h').contains(&chars[0])
            || !(chars[1] == '3' || chars[1] == '6')
        {
            return Err(FenError::InvalidEnPassantSquare(ep.to_string()));
        }

        Ok(())
    }

    /// Converts back to a FEN string with an empty en passant field and
    /// reset clocks.
    pub fn to_fen(&self) -> String {
        let active = match self.side_to_move {
            Color::White => 'w',
            Color::Black => 'b',
        };
        format!("{} {} {} - 0 1", self.piece_placement, active, self.castling)
    }
}
