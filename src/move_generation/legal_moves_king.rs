use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::move_collection::LegalMoveCollection;
use crate::moves::chess_move::Move;
use crate::moves::king_moves::king_targets;

/// Geometry of one castling option.
struct CastlingLane {
    color: Color,
    right: CastlingRights,
    king_from: Square,
    king_to: Square,
    rook_from: Square,
    /// Squares between king and rook.
    must_be_empty: u64,
    /// King start, transit and destination.
    must_be_safe: u64,
}

const fn squares_mask(squares: &[Square]) -> u64 {
    let mut mask = 0u64;
    let mut i = 0;
    while i < squares.len() {
        mask |= 1u64 << squares[i];
        i += 1;
    }
    mask
}

const CASTLING_LANES: [CastlingLane; 4] = [
    CastlingLane {
        color: Color::White,
        right: CASTLE_WHITE_KINGSIDE,
        king_from: 4,
        king_to: 6,
        rook_from: 7,
        must_be_empty: squares_mask(&[5, 6]),
        must_be_safe: squares_mask(&[4, 5, 6]),
    },
    CastlingLane {
        color: Color::White,
        right: CASTLE_WHITE_QUEENSIDE,
        king_from: 4,
        king_to: 2,
        rook_from: 0,
        must_be_empty: squares_mask(&[1, 2, 3]),
        must_be_safe: squares_mask(&[4, 3, 2]),
    },
    CastlingLane {
        color: Color::Black,
        right: CASTLE_BLACK_KINGSIDE,
        king_from: 60,
        king_to: 62,
        rook_from: 63,
        must_be_empty: squares_mask(&[61, 62]),
        must_be_safe: squares_mask(&[60, 61, 62]),
    },
    CastlingLane {
        color: Color::Black,
        right: CASTLE_BLACK_QUEENSIDE,
        king_from: 60,
        king_to: 58,
        rook_from: 56,
        must_be_empty: squares_mask(&[57, 58, 59]),
        must_be_safe: squares_mask(&[60, 59, 58]),
    },
];

/// One-step king moves. Castling is produced separately by
/// [`generate_castling_moves`] once the enemy attack map is complete.
pub fn generate_king_moves(
    game_state: &GameState,
    from: Square,
    color: Color,
    out: &mut LegalMoveCollection,
) {
    let side_to_move = game_state.color_to_move;
    let mut targets = king_targets(from);

    while targets != 0 {
        let to = targets.trailing_zeros() as Square;
        targets &= targets - 1;

        out.mark_attack(to, color);
        if !game_state.squares[to as usize].is_color(color) {
            out.push(Move::new(from, to), color, side_to_move);
        }
    }
}

/// Castling moves for the side to move.
///
/// Requires the right, king and rook on their home squares, an empty lane and
/// no enemy attack on the king's start, transit or destination square.
pub fn generate_castling_moves(game_state: &GameState, out: &mut LegalMoveCollection) {
    let side = game_state.color_to_move;
    let enemy_attacks = out.attack_bits(side.opposite());
    let king = Piece::new(PieceKind::King, side);
    let rook = Piece::new(PieceKind::Rook, side);

    for lane in CASTLING_LANES.iter().filter(|lane| lane.color == side) {
        if game_state.castling_rights & lane.right == 0 {
            continue;
        }
        if game_state.squares[lane.king_from as usize] != king
            || game_state.squares[lane.rook_from as usize] != rook
        {
            continue;
        }
        if !lane_is_empty(game_state, lane.must_be_empty) || enemy_attacks & lane.must_be_safe != 0
        {
            continue;
        }

        out.push(
            Move::castle(lane.king_from, lane.king_to, lane.rook_from),
            side,
            side,
        );
    }
}

fn lane_is_empty(game_state: &GameState, mut mask: u64) -> bool {
    while mask != 0 {
        let square = mask.trailing_zeros() as usize;
        if game_state.squares[square].is_some() {
            return false;
        }
        mask &= mask - 1;
    }
    true
}

#[cfg(test)]
mod tests {
    use crate::game_state::{chess_types::*, game_state::GameState};
    use crate::moves::chess_move::Move;

    fn castles(fen: &str) -> Vec<Move> {
        let game = GameState::from_fen(fen).expect("valid FEN");
        game.legal_moves()
            .friendly_moves()
            .iter()
            .copied()
            .filter(Move::is_castle)
            .collect()
    }

    #[test]
    fn both_wings_available_on_open_back_rank() {
        let moves = castles("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1");
        assert_eq!(moves.len(), 2);
        assert!(moves.iter().any(|mv| mv.exact_eq(&Move::castle(4, 6, 7))));
        assert!(moves.iter().any(|mv| mv.exact_eq(&Move::castle(4, 2, 0))));

        let moves = castles("r3k2r/8/8/8/8/8/8/R3K2R b KQkq - 0 1");
        assert!(moves.iter().any(|mv| mv.exact_eq(&Move::castle(60, 62, 63))));
        assert!(moves.iter().any(|mv| mv.exact_eq(&Move::castle(60, 58, 56))));
    }

    #[test]
    fn blocked_lane_prevents_castling() {
        assert!(castles("r3k2r/8/8/8/8/8/8/RN2K1NR w KQkq - 0 1").is_empty());
    }

    #[test]
    fn queenside_b_file_attack_does_not_matter() {
        // Black rook on b8 covers b1, which the king never crosses.
        let moves = castles("1r2k3/8/8/8/8/8/8/R3K3 w Q - 0 1");
        assert_eq!(moves.len(), 1);
    }

    #[test]
    fn attacked_transit_square_prevents_castling() {
        // Black rook on f8 covers f1.
        assert!(castles("4kr2/8/8/8/8/8/8/4K2R w K - 0 1").is_empty());
    }

    #[test]
    fn cannot_castle_out_of_check() {
        assert!(castles("4r1k1/8/8/8/8/8/8/R3K2R w KQ - 0 1").is_empty());
    }

    #[test]
    fn missing_right_or_rook_prevents_castling() {
        assert!(castles("4k3/8/8/8/8/8/8/R3K2R w - - 0 1").is_empty());
        assert!(castles("4k3/8/8/8/8/8/8/4K3 w KQ - 0 1").is_empty());
    }

    #[test]
    fn king_steps_never_land_on_friendly_pieces() {
        let game = GameState::new_game();
        assert!(game
            .legal_moves()
            .friendly_moves()
            .iter()
            .all(|mv| mv.start() != 4));
    }
}
