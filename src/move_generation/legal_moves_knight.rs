use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::move_collection::LegalMoveCollection;
use crate::moves::chess_move::Move;
use crate::moves::knight_moves::knight_targets;

pub fn generate_knight_moves(
    game_state: &GameState,
    from: Square,
    color: Color,
    out: &mut LegalMoveCollection,
) {
    let side_to_move = game_state.color_to_move;
    let mut targets = knight_targets(from);

    while targets != 0 {
        let to = targets.trailing_zeros() as Square;
        targets &= targets - 1;

        out.mark_attack(to, color);
        if !game_state.squares[to as usize].is_color(color) {
            out.push(Move::new(from, to), color, side_to_move);
        }
    }
}
