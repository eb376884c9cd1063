use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::move_collection::LegalMoveCollection;
use crate::moves::chess_move::{Move, Promotion};
use crate::moves::pawn_moves::pawn_attacks;

/// Pushes, captures, en passant and promotions for the pawn on `from`.
///
/// Both capture diagonals are marked as attacked whatever stands on them;
/// forward pushes never are.
pub fn generate_pawn_moves(
    game_state: &GameState,
    from: Square,
    color: Color,
    out: &mut LegalMoveCollection,
) {
    let side_to_move = game_state.color_to_move;

    let mut diagonals = pawn_attacks(color, from);
    while diagonals != 0 {
        let to = diagonals.trailing_zeros() as Square;
        diagonals &= diagonals - 1;

        out.mark_attack(to, color);
        let occupant = game_state.squares[to as usize];
        if occupant.is_some() && !occupant.is_color(color) {
            push_with_promotions(from, to, color, side_to_move, out);
        } else if color == side_to_move && game_state.en_passant_target == Some(to) {
            out.push(Move::new(from, to), color, side_to_move);
        }
    }

    let Some(one_step) = forward(from, color) else {
        return;
    };
    if game_state.squares[one_step as usize].is_some() {
        return;
    }
    push_with_promotions(from, one_step, color, side_to_move, out);

    if rank_of(from) == color.pawn_home_rank() {
        if let Some(two_step) = forward(one_step, color) {
            if game_state.squares[two_step as usize].is_none() {
                out.push(Move::new(from, two_step), color, side_to_move);
            }
        }
    }
}

fn forward(square: Square, color: Color) -> Option<Square> {
    match color {
        Color::White => square.checked_add(8).filter(|sq| (*sq as usize) < BOARD_SQUARES),
        Color::Black => square.checked_sub(8),
    }
}

fn push_with_promotions(
    from: Square,
    to: Square,
    color: Color,
    side_to_move: Color,
    out: &mut LegalMoveCollection,
) {
    if rank_of(to) == color.promotion_rank() {
        for promotion in Promotion::ALL {
            out.push(Move::with_promotion(from, to, promotion), color, side_to_move);
        }
    } else {
        out.push(Move::new(from, to), color, side_to_move);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pawn_moves(fen: &str, from: Square) -> (Vec<Move>, LegalMoveCollection) {
        let game = GameState::from_fen(fen).expect("valid FEN");
        let color = game.squares()[from as usize].color().expect("pawn on square");
        let mut out = LegalMoveCollection::new();
        generate_pawn_moves(&game, from, color, &mut out);
        let moves = if color == game.color_to_move() {
            out.friendly_moves().to_vec()
        } else {
            out.enemy_moves().to_vec()
        };
        (moves, out)
    }

    #[test]
    fn home_rank_pawn_pushes_one_or_two() {
        let (moves, _) = pawn_moves("8/8/8/8/8/8/4P3/8 w - - 0 1", 12);
        assert_eq!(moves, vec![Move::new(12, 20), Move::new(12, 28)]);

        let (moves, _) = pawn_moves("8/4p3/8/8/8/8/8/8 b - - 0 1", 52);
        assert_eq!(moves, vec![Move::new(52, 44), Move::new(52, 36)]);
    }

    #[test]
    fn blocked_pawn_cannot_jump() {
        let (moves, _) = pawn_moves("8/8/8/8/8/4n3/4P3/8 w - - 0 1", 12);
        assert!(moves.is_empty());

        let (moves, _) = pawn_moves("8/8/8/8/4n3/8/4P3/8 w - - 0 1", 12);
        assert_eq!(moves, vec![Move::new(12, 20)]);
    }

    #[test]
    fn edge_pawns_do_not_wrap() {
        let (moves, out) = pawn_moves("8/8/8/8/8/1p5p/P6P/8 w - - 0 1", 8);
        assert!(moves.contains(&Move::new(8, 17)));
        assert!(!out.is_attacked(23, Color::White));

        let (moves, out) = pawn_moves("8/8/8/8/8/p5p1/7P/8 w - - 0 1", 15);
        assert!(moves.contains(&Move::new(15, 22)));
        assert!(!out.is_attacked(16, Color::White));
    }

    #[test]
    fn promotion_expands_to_four_moves() {
        let (moves, _) = pawn_moves("3r4/4P3/8/8/8/8/8/8 w - - 0 1", 52);
        assert_eq!(moves.len(), 8);
        for target in [59, 60] {
            let mut pieces: Vec<_> = moves
                .iter()
                .filter(|mv| mv.target() == target)
                .filter_map(|mv| mv.promotion())
                .collect();
            pieces.sort();
            assert_eq!(
                pieces,
                vec![Promotion::Bishop, Promotion::Rook, Promotion::Knight, Promotion::Queen]
            );
        }
    }

    #[test]
    fn en_passant_only_for_side_to_move() {
        let (moves, _) = pawn_moves("8/8/8/3pP3/8/8/8/8 w - d6 0 1", 36);
        assert!(moves.contains(&Move::new(36, 43)));

        // Same square as target, but the black pawn on e4 is not the mover.
        let (moves, _) = pawn_moves("8/8/8/8/4p3/8/8/8 w - d3 0 1", 28);
        assert!(!moves.contains(&Move::new(28, 19)));
    }

    #[test]
    fn diagonals_are_attacked_even_when_empty_or_friendly() {
        let (_, out) = pawn_moves("8/8/8/8/8/3N4/4P3/8 w - - 0 1", 12);
        assert!(out.is_attacked(19, Color::White));
        assert!(out.is_attacked(21, Color::White));
        assert!(!out.is_attacked(20, Color::White));
    }
}
