//! Full legal move generation.
//!
//! Pseudo-legal candidates are filtered by playing each one on a lightweight
//! clone and checking whether the mover's king is attacked afterwards. The
//! attack maps kept on the position are the ones from the pre-filter pass.

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::game_state::terminal_state::classify_terminal_state;
use crate::move_generation::legal_move_apply::apply_move;
use crate::move_generation::move_generator::generate_pseudo_legal_moves;
use crate::moves::chess_move::Move;

/// Regenerate legal moves, the check flag and the terminal flags in place.
pub fn generate_legal_moves(game_state: &mut GameState) {
    let side = game_state.color_to_move;
    let mut collection = generate_pseudo_legal_moves(game_state);

    let king_square = game_state.king_square(side);
    let is_check = king_square.is_some_and(|square| collection.is_attacked(square, side.opposite()));

    let position: &GameState = game_state;
    let legal = collection
        .take_friendly_moves()
        .into_iter()
        .filter(|mv| !leaves_king_attacked(position, *mv, king_square))
        .collect();
    collection.set_friendly_moves(legal);

    game_state.legal_moves = collection;
    game_state.is_check = is_check;
    classify_terminal_state(game_state);
}

/// Play `mv` on a simulation clone and test the mover's king.
///
/// A side without a king is never in check, so every candidate passes.
fn leaves_king_attacked(game_state: &GameState, mv: Move, king_square: Option<Square>) -> bool {
    let Some(king_square) = king_square else {
        return false;
    };
    let king_after = if mv.start() == king_square {
        mv.target()
    } else {
        king_square
    };

    let mut future = game_state.simulation_clone();
    apply_move(&mut future, mv);
    let replies = generate_pseudo_legal_moves(&future);
    replies.is_attacked(king_after, game_state.color_to_move.opposite())
}
