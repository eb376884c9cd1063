//! Pseudo-legal move generation for both colors in one board scan.
//!
//! Every piece on the board contributes moves and attack bits; moves of the
//! side to move land in `friendly_moves`, the rest in `enemy_moves`. Castling
//! is appended last because it needs the opponent's finished attack map.

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_moves_king::{generate_castling_moves, generate_king_moves};
use crate::move_generation::legal_moves_knight::generate_knight_moves;
use crate::move_generation::legal_moves_pawn::generate_pawn_moves;
use crate::move_generation::legal_moves_sliding::generate_sliding_moves;
use crate::move_generation::move_collection::LegalMoveCollection;

pub fn generate_pseudo_legal_moves(game_state: &GameState) -> LegalMoveCollection {
    let mut out = LegalMoveCollection::new();

    for (index, piece) in game_state.squares.iter().enumerate() {
        let Some(color) = piece.color() else {
            continue;
        };
        let from = index as Square;

        if piece.is_sliding() {
            generate_sliding_moves(game_state, from, *piece, color, &mut out);
        } else if piece.is_kind(PieceKind::Knight) {
            generate_knight_moves(game_state, from, color, &mut out);
        } else if piece.is_kind(PieceKind::King) {
            generate_king_moves(game_state, from, color, &mut out);
        } else if piece.is_kind(PieceKind::Pawn) {
            generate_pawn_moves(game_state, from, color, &mut out);
        }
    }

    generate_castling_moves(game_state, &mut out);
    out
}
