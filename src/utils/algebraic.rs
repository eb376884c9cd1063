//! Square-name conversions.
//!
//! Converts between coordinates such as `e4` and internal `0..=63` square
//! indices. Input outside `[a-h][1-8]` (either case) is rejected, never clamped.

use crate::chess_errors::ChessErrors;
use crate::game_state::chess_types::{file_of, rank_of, square_at, Square};

/// Convert a square name (for example: "e4" or "E4") to a square index.
#[inline]
pub fn algebraic_to_square(square: &str) -> Result<Square, ChessErrors> {
    let bytes = square.as_bytes();
    if bytes.len() != 2 {
        return Err(ChessErrors::InvalidAlgebraicString(square.to_owned()));
    }

    let file = bytes[0].to_ascii_lowercase();
    let rank = bytes[1];

    if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
        return Err(ChessErrors::InvalidAlgebraicString(square.to_owned()));
    }

    Ok(square_at(file - b'a', rank - b'1'))
}

/// Convert a square index (`0..=63`) to its lowercase name (for example: "e4").
#[inline]
pub fn square_to_algebraic(square: Square) -> Result<String, ChessErrors> {
    if square > 63 {
        return Err(ChessErrors::SquareOutOfRange(square));
    }

    let file_char = char::from(b'a' + file_of(square));
    let rank_char = char::from(b'1' + rank_of(square));

    Ok(format!("{file_char}{rank_char}"))
}
