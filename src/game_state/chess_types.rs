//! Primitive board encodings shared by every subsystem.
//!
//! Squares are plain `0..=63` indices (`rank * 8 + file`, a1 = 0, h8 = 63).
//! Pieces are bit-flag values combining a kind and a color; all flag tests go
//! through the named predicates on [`Piece`] so call sites never touch raw bits.

use std::fmt;

/// Board square index (`0..=63`).
pub type Square = u8;

/// Number of squares on the board.
pub const BOARD_SQUARES: usize = 64;

#[inline]
pub const fn rank_of(square: Square) -> u8 {
    square / 8
}

#[inline]
pub const fn file_of(square: Square) -> u8 {
    square % 8
}

#[inline]
pub const fn square_at(file: u8, rank: u8) -> Square {
    rank * 8 + file
}

#[inline]
pub const fn square_bit(square: Square) -> u64 {
    1u64 << square
}

/// Side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 1,
        }
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Rank a pawn of this color promotes on.
    #[inline]
    pub const fn promotion_rank(self) -> u8 {
        match self {
            Color::White => 7,
            Color::Black => 0,
        }
    }

    /// Rank a pawn of this color may double-push from.
    #[inline]
    pub const fn pawn_home_rank(self) -> u8 {
        match self {
            Color::White => 1,
            Color::Black => 6,
        }
    }

    const fn flag(self) -> u8 {
        match self {
            Color::White => Piece::WHITE_FLAG,
            Color::Black => Piece::BLACK_FLAG,
        }
    }
}

/// Piece kind without color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Bishop,
    Rook,
    Knight,
    Queen,
    King,
}

impl PieceKind {
    pub const ALL: [PieceKind; 6] = [
        PieceKind::Pawn,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Knight,
        PieceKind::Queen,
        PieceKind::King,
    ];

    #[inline]
    const fn flag(self) -> u8 {
        match self {
            PieceKind::Pawn => 1 << 0,
            PieceKind::Bishop => 1 << 1,
            PieceKind::Rook => 1 << 2,
            PieceKind::Knight => 1 << 3,
            PieceKind::Queen => 1 << 4,
            PieceKind::King => 1 << 5,
        }
    }

    /// Lowercase FEN letter for this kind.
    pub const fn to_char(self) -> char {
        match self {
            PieceKind::Pawn => 'p',
            PieceKind::Bishop => 'b',
            PieceKind::Rook => 'r',
            PieceKind::Knight => 'n',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        }
    }

    pub fn from_char(ch: char) -> Option<PieceKind> {
        match ch.to_ascii_lowercase() {
            'p' => Some(PieceKind::Pawn),
            'b' => Some(PieceKind::Bishop),
            'r' => Some(PieceKind::Rook),
            'n' => Some(PieceKind::Knight),
            'q' => Some(PieceKind::Queen),
            'k' => Some(PieceKind::King),
            _ => None,
        }
    }
}

/// Contents of one square: a kind flag plus a color flag, or nothing.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Piece(u8);

impl Piece {
    const WHITE_FLAG: u8 = 1 << 6;
    const BLACK_FLAG: u8 = 1 << 7;
    const COLOR_MASK: u8 = Self::WHITE_FLAG | Self::BLACK_FLAG;
    const SLIDING_MASK: u8 =
        PieceKind::Bishop.flag() | PieceKind::Rook.flag() | PieceKind::Queen.flag();

    /// The empty square.
    pub const NONE: Piece = Piece(0);

    #[inline]
    pub const fn new(kind: PieceKind, color: Color) -> Self {
        Piece(kind.flag() | color.flag())
    }

    #[inline]
    pub const fn is_none(self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub const fn is_some(self) -> bool {
        self.0 != 0
    }

    #[inline]
    pub const fn is_kind(self, kind: PieceKind) -> bool {
        self.0 & kind.flag() != 0
    }

    #[inline]
    pub const fn is_color(self, color: Color) -> bool {
        self.0 & color.flag() != 0
    }

    /// Bishop, rook or queen.
    #[inline]
    pub const fn is_sliding(self) -> bool {
        self.0 & Self::SLIDING_MASK != 0
    }

    pub fn kind(self) -> Option<PieceKind> {
        PieceKind::ALL.into_iter().find(|kind| self.is_kind(*kind))
    }

    pub const fn color(self) -> Option<Color> {
        match self.0 & Self::COLOR_MASK {
            Self::WHITE_FLAG => Some(Color::White),
            Self::BLACK_FLAG => Some(Color::Black),
            _ => None,
        }
    }

    /// Swap the pawn flag for `kind`, keeping the color.
    #[inline]
    pub const fn promoted(self, kind: PieceKind) -> Self {
        Piece(self.0 ^ (PieceKind::Pawn.flag() | kind.flag()))
    }

    /// FEN letter: uppercase for white, lowercase for black.
    pub fn to_fen_char(self) -> Option<char> {
        let ch = self.kind()?.to_char();
        match self.color()? {
            Color::White => Some(ch.to_ascii_uppercase()),
            Color::Black => Some(ch),
        }
    }

    pub fn from_fen_char(ch: char) -> Option<Self> {
        let color = if ch.is_ascii_uppercase() {
            Color::White
        } else if ch.is_ascii_lowercase() {
            Color::Black
        } else {
            return None;
        };
        PieceKind::from_char(ch).map(|kind| Piece::new(kind, color))
    }
}

impl fmt::Debug for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.color(), self.kind()) {
            (Some(color), Some(kind)) => write!(f, "{color:?}{kind:?}"),
            _ => write!(f, "None"),
        }
    }
}

/// Packed castling rights, one bit per side and wing.
pub type CastlingRights = u8;

pub const CASTLE_WHITE_KINGSIDE: CastlingRights = 1 << 0;
pub const CASTLE_WHITE_QUEENSIDE: CastlingRights = 1 << 1;
pub const CASTLE_BLACK_KINGSIDE: CastlingRights = 1 << 2;
pub const CASTLE_BLACK_QUEENSIDE: CastlingRights = 1 << 3;
pub const CASTLE_ALL: CastlingRights = CASTLE_WHITE_KINGSIDE
    | CASTLE_WHITE_QUEENSIDE
    | CASTLE_BLACK_KINGSIDE
    | CASTLE_BLACK_QUEENSIDE;

/// Both rights belonging to `color`.
#[inline]
pub const fn castling_rights_for(color: Color) -> CastlingRights {
    match color {
        Color::White => CASTLE_WHITE_KINGSIDE | CASTLE_WHITE_QUEENSIDE,
        Color::Black => CASTLE_BLACK_KINGSIDE | CASTLE_BLACK_QUEENSIDE,
    }
}

/// Right tied to a rook starting on `square`, or 0 when it is not a corner.
#[inline]
pub const fn castling_right_for_corner(square: Square) -> CastlingRights {
    match square {
        0 => CASTLE_WHITE_QUEENSIDE,
        7 => CASTLE_WHITE_KINGSIDE,
        56 => CASTLE_BLACK_QUEENSIDE,
        63 => CASTLE_BLACK_KINGSIDE,
        _ => 0,
    }
}
