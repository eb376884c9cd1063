//! Output of one generation pass.
//!
//! Moves are split by whether the moving piece belongs to the side to move;
//! attack bitmaps are kept per color with one bit per attacked square.

use crate::game_state::chess_types::{square_bit, Color, Square};
use crate::moves::chess_move::Move;

/// Upper bound on pseudo-legal moves in any reachable position.
const MOVE_CAPACITY: usize = 256;

#[derive(Debug, Clone, Default)]
pub struct LegalMoveCollection {
    friendly_moves: Vec<Move>,
    enemy_moves: Vec<Move>,
    attack_bits: [u64; 2],
}

impl LegalMoveCollection {
    pub fn new() -> Self {
        Self {
            friendly_moves: Vec::with_capacity(MOVE_CAPACITY),
            enemy_moves: Vec::with_capacity(MOVE_CAPACITY),
            attack_bits: [0; 2],
        }
    }

    /// Legal moves for the side to move once the legality filter has run.
    #[inline]
    pub fn friendly_moves(&self) -> &[Move] {
        &self.friendly_moves
    }

    /// Pseudo-legal moves of the side not to move.
    #[inline]
    pub fn enemy_moves(&self) -> &[Move] {
        &self.enemy_moves
    }

    #[inline]
    pub fn attack_bits(&self, color: Color) -> u64 {
        self.attack_bits[color.index()]
    }

    #[inline]
    pub fn is_attacked(&self, square: Square, by: Color) -> bool {
        self.attack_bits[by.index()] & square_bit(square) != 0
    }

    #[inline]
    pub(crate) fn push(&mut self, mv: Move, mover: Color, side_to_move: Color) {
        if mover == side_to_move {
            self.friendly_moves.push(mv);
        } else {
            self.enemy_moves.push(mv);
        }
    }

    #[inline]
    pub(crate) fn mark_attack(&mut self, square: Square, by: Color) {
        self.attack_bits[by.index()] |= square_bit(square);
    }

    pub(crate) fn take_friendly_moves(&mut self) -> Vec<Move> {
        std::mem::take(&mut self.friendly_moves)
    }

    pub(crate) fn set_friendly_moves(&mut self, moves: Vec<Move>) {
        self.friendly_moves = moves;
    }
}
