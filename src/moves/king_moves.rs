//! King step tables.
//!
//! The king uses the eight queen directions at distance one; a destination
//! whose file differs from the origin's by more than one wrapped around the
//! board edge and is dropped.

use crate::moves::sliding_moves::DIRECTION_OFFSETS;

pub const KING_TARGETS: [u64; 64] = generate_king_targets();

#[inline]
pub const fn king_targets(square: u8) -> u64 {
    KING_TARGETS[square as usize]
}

const fn generate_king_targets() -> [u64; 64] {
    let mut table = [0u64; 64];
    let mut sq = 0usize;

    while sq < 64 {
        let mut targets = 0u64;
        let mut i = 0usize;

        while i < DIRECTION_OFFSETS.len() {
            let target = sq as i16 + DIRECTION_OFFSETS[i] as i16;
            if target >= 0 && target < 64 {
                let file_distance = (sq % 8) as i16 - target % 8;
                if file_distance >= -1 && file_distance <= 1 {
                    targets |= 1u64 << target;
                }
            }
            i += 1;
        }

        table[sq] = targets;
        sq += 1;
    }

    table
}
