use crate::game_state::{chess_types::*, game_state::GameState};
use crate::moves::chess_move::{Move, Promotion};

/// Apply `mv` to the board, rights, en-passant target and clocks.
///
/// The move is trusted; legal moves and terminal flags are not touched here.
/// [`Move::NULL`] only passes the turn and clears the en-passant target.
pub fn apply_move(game_state: &mut GameState, mv: Move) {
    let mover = game_state.color_to_move;
    game_state.color_to_move = mover.opposite();
    game_state.en_passant_target = None;

    if mv.is_null() {
        return;
    }

    if mover == Color::Black {
        game_state.full_move_count += 1;
    }

    let start = mv.start();
    let target = mv.target();
    let moving = game_state.squares[start as usize];
    let captured = game_state.squares[target as usize];

    game_state.half_move_clock += 1;
    if captured.is_some() || moving.is_kind(PieceKind::Pawn) {
        game_state.half_move_clock = 0;
    }

    if captured.is_kind(PieceKind::Rook) {
        game_state.castling_rights &= !castling_right_for_corner(target);
    }

    game_state.squares[target as usize] = moving;
    game_state.squares[start as usize] = Piece::NONE;

    if moving.is_kind(PieceKind::Pawn) {
        apply_pawn_specials(game_state, mv, moving, captured);
    } else if moving.is_kind(PieceKind::King) {
        game_state.castling_rights &= !castling_rights_for(mover);
        if let Some(rook_from) = mv.castling_rook_square() {
            let rook_to = if target > start { target - 1 } else { target + 1 };
            let rook = game_state.squares[rook_from as usize];
            game_state.squares[rook_from as usize] = Piece::NONE;
            game_state.squares[rook_to as usize] = rook;
        }
    } else if moving.is_kind(PieceKind::Rook) {
        game_state.castling_rights &= !castling_right_for_corner(start);
    }
}

fn apply_pawn_specials(game_state: &mut GameState, mv: Move, pawn: Piece, captured: Piece) {
    let start = mv.start();
    let target = mv.target();

    if rank_of(target) == 0 || rank_of(target) == 7 {
        // No choice given: queen.
        let promotion = mv.promotion().unwrap_or(Promotion::Queen);
        game_state.squares[target as usize] = pawn.promoted(promotion.kind());
    } else if start.abs_diff(target) == 16 {
        game_state.en_passant_target = Some((start + target) / 2);
    } else if file_of(start) != file_of(target) && captured.is_none() {
        let victim = square_at(file_of(target), rank_of(start));
        game_state.squares[victim as usize] = Piece::NONE;
    }
}
