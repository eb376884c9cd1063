//! Game-over classification.
//!
//! Runs after every full generation pass, once the legal move set and the
//! check flag are known. Checkmate and stalemate take precedence; otherwise the
//! draw rules are tried in order: fifty-move, insufficient material,
//! threefold repetition. Only the repetition rule records history, so a
//! position that is already drawn by an earlier rule is not appended.

use log::debug;

use crate::game_state::chess_rules::{FIFTY_MOVE_HALF_MOVE_LIMIT, REPETITION_DRAW_COUNT};
use crate::game_state::{chess_types::*, game_state::GameState};

/// Why a position was declared drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DrawReason {
    Stalemate,
    FiftyMoveRule,
    InsufficientMaterial,
    ThreefoldRepetition,
}

/// Exact identity of a position for repetition counting.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PositionSignature {
    squares: [Piece; BOARD_SQUARES],
    color_to_move: Color,
    castling_rights: CastlingRights,
    en_passant_target: Option<Square>,
}

impl PositionSignature {
    pub fn of(game_state: &GameState) -> Self {
        Self {
            squares: game_state.squares,
            color_to_move: game_state.color_to_move,
            castling_rights: game_state.castling_rights,
            en_passant_target: game_state.en_passant_target,
        }
    }
}

/// Neither side can possibly deliver mate.
///
/// Any pawn, rook or queen keeps the game alive. With minors only: zero or one
/// minor is a draw, one minor each is a draw, two minors on one side are a draw
/// only when they are two knights, and three or more minors are never a draw.
pub fn has_insufficient_material(squares: &[Piece; BOARD_SQUARES]) -> bool {
    let mut bishops = [0u8; 2];
    let mut knights = [0u8; 2];

    for piece in squares.iter().filter(|piece| piece.is_some()) {
        if piece.is_kind(PieceKind::Pawn)
            || piece.is_kind(PieceKind::Rook)
            || piece.is_kind(PieceKind::Queen)
        {
            return false;
        }

        let Some(color) = piece.color() else {
            continue;
        };
        if piece.is_kind(PieceKind::Bishop) {
            bishops[color.index()] += 1;
        } else if piece.is_kind(PieceKind::Knight) {
            knights[color.index()] += 1;
        }
    }

    let minors = [
        bishops[0] + knights[0],
        bishops[1] + knights[1],
    ];

    match minors[0] + minors[1] {
        0 | 1 => true,
        2 => {
            // Two minors on one side mate only with a bishop among them.
            let side_with_both = minors.iter().position(|count| *count == 2);
            match side_with_both {
                Some(side) => bishops[side] == 0,
                None => true,
            }
        }
        _ => false,
    }
}

/// Set the checkmate/draw flags from the freshly generated legal moves.
pub(crate) fn classify_terminal_state(game_state: &mut GameState) {
    game_state.is_checkmate = false;
    game_state.is_draw = false;
    game_state.draw_reason = None;

    if game_state.legal_moves.friendly_moves().is_empty() {
        if game_state.is_check {
            game_state.is_checkmate = true;
            debug!("checkmate, {:?} to move has no legal moves", game_state.color_to_move);
        } else {
            declare_draw(game_state, DrawReason::Stalemate);
        }
        return;
    }

    if game_state.half_move_clock >= FIFTY_MOVE_HALF_MOVE_LIMIT {
        declare_draw(game_state, DrawReason::FiftyMoveRule);
    } else if has_insufficient_material(&game_state.squares) {
        declare_draw(game_state, DrawReason::InsufficientMaterial);
    } else {
        let signature = PositionSignature::of(game_state);
        game_state.position_history.push(signature);
        if repetition_count(game_state) >= REPETITION_DRAW_COUNT {
            declare_draw(game_state, DrawReason::ThreefoldRepetition);
        }
    }
}

/// Occurrences of the newest recorded signature in the history.
fn repetition_count(game_state: &GameState) -> usize {
    let Some(latest) = game_state.position_history.last() else {
        return 0;
    };
    game_state
        .position_history
        .iter()
        .filter(|signature| *signature == latest)
        .count()
}

fn declare_draw(game_state: &mut GameState, reason: DrawReason) {
    game_state.is_draw = true;
    game_state.draw_reason = Some(reason);
    debug!("draw by {reason:?} at {}", game_state.to_fen());
}
