//! Compact single-ply move value.
//!
//! A `Move` carries an origin, a destination, an optional promotion choice and,
//! for castling, the square the rook departs from.
//!
//! # Identity
//!
//! Equality and hashing use **only** `start` and `target`. Promotion and
//! castling metadata are not part of a move's identity, so a caller can build a
//! bare start/target pair and use it to look up the canonical legal move that
//! carries the full metadata (see [`GameState::find_legal_move`]). The flip
//! side is that the four promotion moves of one pawn push all compare equal:
//! picking the promotion piece is the caller's job, and the exact value must be
//! passed when applying it. Use [`Move::exact_eq`] when every field matters.
//!
//! [`GameState::find_legal_move`]: crate::game_state::game_state::GameState::find_legal_move

use std::fmt;
use std::hash::{Hash, Hasher};

use crate::chess_errors::ChessErrors;
use crate::game_state::chess_types::{PieceKind, Square};
use crate::utils::algebraic::{algebraic_to_square, square_to_algebraic};

/// Piece a pawn may promote to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Promotion {
    Bishop,
    Rook,
    Knight,
    Queen,
}

impl Promotion {
    pub const ALL: [Promotion; 4] = [
        Promotion::Queen,
        Promotion::Rook,
        Promotion::Bishop,
        Promotion::Knight,
    ];

    #[inline]
    pub const fn kind(self) -> PieceKind {
        match self {
            Promotion::Bishop => PieceKind::Bishop,
            Promotion::Rook => PieceKind::Rook,
            Promotion::Knight => PieceKind::Knight,
            Promotion::Queen => PieceKind::Queen,
        }
    }

    pub fn from_char(ch: char) -> Option<Promotion> {
        match ch.to_ascii_lowercase() {
            'b' => Some(Promotion::Bishop),
            'r' => Some(Promotion::Rook),
            'n' => Some(Promotion::Knight),
            'q' => Some(Promotion::Queen),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Move {
    start: Square,
    target: Square,
    promotion: Option<Promotion>,
    castling_rook_square: Option<Square>,
}

impl Move {
    /// Passes the turn without moving a piece.
    pub const NULL: Move = Move {
        start: 0,
        target: 0,
        promotion: None,
        castling_rook_square: None,
    };

    /// Plain move. Squares are trusted to be on the board; see [`Move::try_new`].
    #[inline]
    pub const fn new(start: Square, target: Square) -> Self {
        Move {
            start,
            target,
            promotion: None,
            castling_rook_square: None,
        }
    }

    #[inline]
    pub const fn with_promotion(start: Square, target: Square, promotion: Promotion) -> Self {
        Move {
            start,
            target,
            promotion: Some(promotion),
            castling_rook_square: None,
        }
    }

    /// King move of a castle, remembering where the rook starts.
    #[inline]
    pub const fn castle(start: Square, target: Square, rook_square: Square) -> Self {
        Move {
            start,
            target,
            promotion: None,
            castling_rook_square: Some(rook_square),
        }
    }

    /// Checked constructor for squares coming from outside the engine.
    pub fn try_new(start: Square, target: Square) -> Result<Self, ChessErrors> {
        for square in [start, target] {
            if square > 63 {
                return Err(ChessErrors::SquareOutOfRange(square));
            }
        }
        Ok(Move::new(start, target))
    }

    /// Parse long algebraic notation such as `e2e4` or `e7e8q`.
    pub fn from_long_algebraic(text: &str) -> Result<Self, ChessErrors> {
        let invalid = || ChessErrors::InvalidAlgebraicString(text.to_owned());
        if !text.is_ascii() || !(4..=5).contains(&text.len()) {
            return Err(invalid());
        }

        let start = algebraic_to_square(&text[0..2])?;
        let target = algebraic_to_square(&text[2..4])?;
        match text[4..].chars().next() {
            None => Ok(Move::new(start, target)),
            Some(ch) => {
                let promotion = Promotion::from_char(ch).ok_or_else(invalid)?;
                Ok(Move::with_promotion(start, target, promotion))
            }
        }
    }

    #[inline]
    pub const fn start(&self) -> Square {
        self.start
    }

    #[inline]
    pub const fn target(&self) -> Square {
        self.target
    }

    #[inline]
    pub const fn promotion(&self) -> Option<Promotion> {
        self.promotion
    }

    #[inline]
    pub const fn castling_rook_square(&self) -> Option<Square> {
        self.castling_rook_square
    }

    #[inline]
    pub const fn is_castle(&self) -> bool {
        self.castling_rook_square.is_some()
    }

    /// True only for [`Move::NULL`] itself, metadata included.
    #[inline]
    pub fn is_null(&self) -> bool {
        self.exact_eq(&Move::NULL)
    }

    /// Full-field comparison, including promotion and castling metadata.
    #[inline]
    pub fn exact_eq(&self, other: &Move) -> bool {
        self.start == other.start
            && self.target == other.target
            && self.promotion == other.promotion
            && self.castling_rook_square == other.castling_rook_square
    }
}

impl PartialEq for Move {
    fn eq(&self, other: &Self) -> bool {
        self.start == other.start && self.target == other.target
    }
}

impl Eq for Move {}

impl Hash for Move {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.start.hash(state);
        self.target.hash(state);
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let start = square_to_algebraic(self.start).map_err(|_| fmt::Error)?;
        let target = square_to_algebraic(self.target).map_err(|_| fmt::Error)?;
        write!(f, "{start}{target}")?;
        if let Some(promotion) = self.promotion {
            write!(f, "{}", promotion.kind().to_char())?;
        }
        Ok(())
    }
}
