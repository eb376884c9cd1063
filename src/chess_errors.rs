//! Errors used throughout the rules engine.
//!
//! `ChessErrors` is the single error type returned by parsing utilities and by
//! the position state machine. Boundary failures (bad square names, malformed
//! FEN) are recoverable and suitable for showing to a user. `IllegalMove`
//! signals a caller that broke the move-application contract.

use std::error::Error;
use std::fmt;

use crate::game_state::chess_types::Square;
use crate::moves::chess_move::Move;

/// Unified error type for the rules engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChessErrors {
    /// A square name did not match `[a-h][1-8]` (case-insensitive).
    ///
    /// Payload: the original string.
    InvalidAlgebraicString(String),

    /// A square index outside `0..=63` was supplied.
    SquareOutOfRange(Square),

    /// A FEN string did not have exactly six space-separated fields.
    ///
    /// Payload: the number of fields found.
    InvalidFenFieldCount(usize),

    /// Unexpected character in the piece-placement field of a FEN string.
    InvalidFenToken(char),

    /// The piece-placement field did not describe an 8x8 board.
    ///
    /// Payload: the offending placement field.
    InvalidFenBoard(String),

    /// A non-placement FEN field (side, castling, en passant, clocks) was malformed.
    ///
    /// Payload: the offending field.
    InvalidFenField(String),

    /// A move outside the cached legal set was offered for application.
    IllegalMove(Move),
}

impl fmt::Display for ChessErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChessErrors::InvalidAlgebraicString(s) => {
                write!(f, "invalid square '{s}', expected [a-h][1-8]")
            }
            ChessErrors::SquareOutOfRange(square) => {
                write!(f, "square index {square} out of range 0..=63")
            }
            ChessErrors::InvalidFenFieldCount(count) => {
                write!(f, "FEN must have 6 fields, found {count}")
            }
            ChessErrors::InvalidFenToken(ch) => write!(f, "invalid FEN piece token '{ch}'"),
            ChessErrors::InvalidFenBoard(board) => write!(f, "invalid FEN board layout '{board}'"),
            ChessErrors::InvalidFenField(field) => write!(f, "invalid FEN field '{field}'"),
            ChessErrors::IllegalMove(mv) => write!(f, "illegal move {mv}"),
        }
    }
}

impl Error for ChessErrors {}
