use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::move_collection::LegalMoveCollection;
use crate::moves::chess_move::Move;
use crate::moves::sliding_moves::{ray_square, slider_directions, NUM_SQUARES_TO_EDGE};

/// Bishop, rook and queen rays from `from`.
///
/// Each ray marks attack bits up to and including the first occupied square,
/// and yields moves up to that square unless it holds a friendly piece.
pub fn generate_sliding_moves(
    game_state: &GameState,
    from: Square,
    piece: Piece,
    color: Color,
    out: &mut LegalMoveCollection,
) {
    let side_to_move = game_state.color_to_move;

    for dir in slider_directions(piece) {
        for steps in 1..=NUM_SQUARES_TO_EDGE[from as usize][dir] {
            let to = ray_square(from, dir, steps);
            let occupant = game_state.squares[to as usize];

            out.mark_attack(to, color);
            if occupant.is_color(color) {
                break;
            }

            out.push(Move::new(from, to), color, side_to_move);
            if occupant.is_some() {
                break;
            }
        }
    }
}
