//! Leaf-node counting over the legal move tree.
//!
//! Used to validate generation against published reference counts. Depth 1
//! counts the cached legal set directly; deeper levels play each move on a
//! clone through the full state machine.

use std::thread;

use log::debug;

use crate::game_state::game_state::GameState;
use crate::moves::chess_move::Move;

/// Per-root-move node counts from [`perft_divide`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PerftDivide {
    pub total: u64,
    pub moves: Vec<(Move, u64)>,
}

pub fn perft(game_state: &GameState, depth: u8) -> u64 {
    match depth {
        0 => 1,
        1 => game_state.legal_moves().friendly_moves().len() as u64,
        _ => game_state
            .legal_moves()
            .friendly_moves()
            .iter()
            .map(|mv| perft(&child(game_state, *mv), depth - 1))
            .sum(),
    }
}

/// Node counts split by root move, for diffing against another generator.
pub fn perft_divide(game_state: &GameState, depth: u8) -> PerftDivide {
    if depth == 0 {
        return PerftDivide {
            total: 1,
            moves: Vec::new(),
        };
    }

    let moves: Vec<(Move, u64)> = game_state
        .legal_moves()
        .friendly_moves()
        .iter()
        .map(|mv| (*mv, perft(&child(game_state, *mv), depth - 1)))
        .collect();
    let total: u64 = moves.iter().map(|(_, nodes)| nodes).sum();

    debug!("perft divide depth {depth}: {total} nodes over {} root moves", moves.len());
    PerftDivide { total, moves }
}

/// Same count as [`perft`], one worker thread per root move.
pub fn perft_multi_threaded(game_state: &GameState, depth: u8) -> u64 {
    if depth <= 1 {
        return perft(game_state, depth);
    }

    thread::scope(|scope| {
        let handles: Vec<_> = game_state
            .legal_moves()
            .friendly_moves()
            .iter()
            .map(|mv| {
                let next = child(game_state, *mv);
                scope.spawn(move || perft(&next, depth - 1))
            })
            .collect();

        handles
            .into_iter()
            .map(|handle| {
                handle
                    .join()
                    .unwrap_or_else(|payload| std::panic::resume_unwind(payload))
            })
            .sum()
    })
}

fn child(game_state: &GameState, mv: Move) -> GameState {
    let mut next = game_state.clone();
    next.make_move_unchecked(mv);
    next
}
