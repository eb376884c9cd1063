//! Canonical chess-rule constants.
//!
//! Static rule-related literals: the standard starting position and the
//! thresholds used by draw detection.

/// Standard chess starting position in Forsyth-Edwards Notation (FEN).
pub const STARTING_POSITION_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// Half-move clock value at which the position is declared drawn.
pub const FIFTY_MOVE_HALF_MOVE_LIMIT: u32 = 50;

/// Number of occurrences of the same position that makes a draw.
pub const REPETITION_DRAW_COUNT: usize = 3;
