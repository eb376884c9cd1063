//! Knight target tables.
//!
//! Each of the eight jump offsets is guarded by its own file/rank condition so
//! that, for example, `+17` from the h-file never wraps onto the a-file.

pub const KNIGHT_TARGETS: [u64; 64] = generate_knight_targets();

/// Offset and the (min file, max file, min rank, max rank) the origin must lie in.
const KNIGHT_JUMPS: [(i8, u8, u8, u8, u8); 8] = [
    (17, 0, 6, 0, 5),
    (-15, 0, 6, 2, 7),
    (10, 0, 5, 0, 6),
    (-6, 0, 5, 1, 7),
    (6, 2, 7, 0, 6),
    (-10, 2, 7, 1, 7),
    (15, 1, 7, 0, 5),
    (-17, 1, 7, 2, 7),
];

#[inline]
pub const fn knight_targets(square: u8) -> u64 {
    KNIGHT_TARGETS[square as usize]
}

const fn generate_knight_targets() -> [u64; 64] {
    let mut table = [0u64; 64];
    let mut sq = 0usize;

    while sq < 64 {
        let file = (sq % 8) as u8;
        let rank = (sq / 8) as u8;
        let mut targets = 0u64;
        let mut i = 0usize;

        while i < KNIGHT_JUMPS.len() {
            let (offset, min_file, max_file, min_rank, max_rank) = KNIGHT_JUMPS[i];
            if file >= min_file && file <= max_file && rank >= min_rank && rank <= max_rank {
                targets |= 1u64 << (sq as i16 + offset as i16);
            }
            i += 1;
        }

        table[sq] = targets;
        sq += 1;
    }

    table
}
