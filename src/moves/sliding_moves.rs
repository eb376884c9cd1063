//! Ray geometry for bishops, rooks and queens.
//!
//! Direction offsets are indexed so that `0..4` are the orthogonal rays and
//! `4..8` the diagonal ones; `NUM_SQUARES_TO_EDGE[square][dir]` bounds each
//! walk so rays never wrap across a board edge.

use std::ops::Range;

use crate::game_state::chess_types::{Piece, PieceKind, Square};

/// North, south, west, east, north-west, south-east, north-east, south-west.
pub const DIRECTION_OFFSETS: [i8; 8] = [8, -8, -1, 1, 7, -7, 9, -9];

pub const NUM_SQUARES_TO_EDGE: [[u8; 8]; 64] = generate_num_squares_to_edge();

const ORTHOGONAL: Range<usize> = 0..4;
const DIAGONAL: Range<usize> = 4..8;
const ALL_DIRECTIONS: Range<usize> = 0..8;

/// Direction indices a sliding piece walks along.
#[inline]
pub fn slider_directions(piece: Piece) -> Range<usize> {
    if piece.is_kind(PieceKind::Bishop) {
        DIAGONAL
    } else if piece.is_kind(PieceKind::Rook) {
        ORTHOGONAL
    } else {
        ALL_DIRECTIONS
    }
}

/// Square reached after `steps` moves along direction `dir` from `square`.
///
/// Callers keep `steps` within `NUM_SQUARES_TO_EDGE[square][dir]`.
#[inline]
pub const fn ray_square(square: Square, dir: usize, steps: u8) -> Square {
    (square as i16 + DIRECTION_OFFSETS[dir] as i16 * steps as i16) as Square
}

const fn min(a: u8, b: u8) -> u8 {
    if a < b {
        a
    } else {
        b
    }
}

const fn generate_num_squares_to_edge() -> [[u8; 8]; 64] {
    let mut table = [[0u8; 8]; 64];
    let mut sq = 0usize;

    while sq < 64 {
        let file = (sq % 8) as u8;
        let rank = (sq / 8) as u8;

        let north = 7 - rank;
        let south = rank;
        let west = file;
        let east = 7 - file;

        table[sq] = [
            north,
            south,
            west,
            east,
            min(north, west),
            min(south, east),
            min(north, east),
            min(south, west),
        ];
        sq += 1;
    }

    table
}
