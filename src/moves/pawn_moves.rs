//! Pawn diagonal attack tables, one per color.
//!
//! Only the capture diagonals live here; pushes depend on occupancy and are
//! produced by the pawn generator.

use crate::game_state::chess_types::Color;

pub const WHITE_PAWN_ATTACKS: [u64; 64] = generate_white_pawn_attacks();
pub const BLACK_PAWN_ATTACKS: [u64; 64] = generate_black_pawn_attacks();

#[inline]
pub const fn pawn_attacks(color: Color, square: u8) -> u64 {
    match color {
        Color::White => WHITE_PAWN_ATTACKS[square as usize],
        Color::Black => BLACK_PAWN_ATTACKS[square as usize],
    }
}

const fn generate_white_pawn_attacks() -> [u64; 64] {
    let mut table = [0u64; 64];
    let mut sq = 0usize;

    while sq < 64 {
        let file = sq % 8;
        let rank = sq / 8;
        let mut attacks = 0u64;

        if rank < 7 {
            if file > 0 {
                attacks |= 1u64 << (sq + 7);
            }
            if file < 7 {
                attacks |= 1u64 << (sq + 9);
            }
        }

        table[sq] = attacks;
        sq += 1;
    }

    table
}

const fn generate_black_pawn_attacks() -> [u64; 64] {
    let mut table = [0u64; 64];
    let mut sq = 0usize;

    while sq < 64 {
        let file = sq % 8;
        let rank = sq / 8;
        let mut attacks = 0u64;

        if rank > 0 {
            if file > 0 {
                attacks |= 1u64 << (sq - 9);
            }
            if file < 7 {
                attacks |= 1u64 << (sq - 7);
            }
        }

        table[sq] = attacks;
        sq += 1;
    }

    table
}

#[cfg(test)]
mod tests {
    use super::{pawn_attacks, BLACK_PAWN_ATTACKS, WHITE_PAWN_ATTACKS};
    use crate::game_state::chess_types::Color;

    #[test]
    fn white_pawn_attacks_from_e2() {
        let e2 = 12u8;
        let expected = (1u64 << 19) | (1u64 << 21);
        assert_eq!(WHITE_PAWN_ATTACKS[e2 as usize], expected);
        assert_eq!(pawn_attacks(Color::White, e2), expected);
    }

    #[test]
    fn black_pawn_attacks_from_e7() {
        let e7 = 52u8;
        let expected = (1u64 << 43) | (1u64 << 45);
        assert_eq!(BLACK_PAWN_ATTACKS[e7 as usize], expected);
        assert_eq!(pawn_attacks(Color::Black, e7), expected);
    }

    #[test]
    fn edge_file_pawns_attack_one_diagonal() {
        // a2 only attacks b3; h7 (black) only attacks g6.
        assert_eq!(pawn_attacks(Color::White, 8), 1u64 << 17);
        assert_eq!(pawn_attacks(Color::Black, 55), 1u64 << 46);
    }
}
