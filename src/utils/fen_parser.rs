//! FEN-to-InitialState parser.
//!
//! Reads the six Forsyth-Edwards Notation fields into the record a
//! [`GameState`](crate::game_state::game_state::GameState) is built from.

use crate::chess_errors::ChessErrors;
use crate::game_state::chess_types::*;
use crate::game_state::game_state::InitialState;
use crate::utils::algebraic::algebraic_to_square;

pub fn parse_fen(fen: &str) -> Result<InitialState, ChessErrors> {
    let fields: Vec<&str> = fen.split_whitespace().collect();
    let [board, side, castling, en_passant, half_move, full_move] = fields.as_slice() else {
        return Err(ChessErrors::InvalidFenFieldCount(fields.len()));
    };

    Ok(InitialState {
        squares: parse_board(board)?,
        color_to_move: parse_side_to_move(side)?,
        castling_rights: parse_castling_rights(castling)?,
        en_passant_target: parse_en_passant_square(en_passant)?,
        half_move_clock: parse_counter(half_move)?,
        full_move_count: parse_counter(full_move)?,
    })
}

fn parse_board(board: &str) -> Result<[Piece; BOARD_SQUARES], ChessErrors> {
    let invalid = || ChessErrors::InvalidFenBoard(board.to_owned());
    let ranks: Vec<&str> = board.split('/').collect();
    if ranks.len() != 8 {
        return Err(invalid());
    }

    let mut squares = [Piece::NONE; BOARD_SQUARES];
    for (fen_rank_idx, rank_str) in ranks.iter().enumerate() {
        let rank = 7 - fen_rank_idx as u8;
        let mut file = 0u8;

        for ch in rank_str.chars() {
            if let Some(empty_count) = ch.to_digit(10) {
                if !(1..=8).contains(&empty_count) {
                    return Err(invalid());
                }
                file += empty_count as u8;
                if file > 8 {
                    return Err(invalid());
                }
                continue;
            }

            let piece = Piece::from_fen_char(ch).ok_or(ChessErrors::InvalidFenToken(ch))?;
            if file >= 8 {
                return Err(invalid());
            }
            squares[square_at(file, rank) as usize] = piece;
            file += 1;
        }

        if file != 8 {
            return Err(invalid());
        }
    }

    Ok(squares)
}

fn parse_side_to_move(side: &str) -> Result<Color, ChessErrors> {
    match side {
        "w" => Ok(Color::White),
        "b" => Ok(Color::Black),
        _ => Err(ChessErrors::InvalidFenField(side.to_owned())),
    }
}

fn parse_castling_rights(castling: &str) -> Result<CastlingRights, ChessErrors> {
    if castling == "-" {
        return Ok(0);
    }

    let mut rights: CastlingRights = 0;
    for ch in castling.chars() {
        rights |= match ch {
            'K' => CASTLE_WHITE_KINGSIDE,
            'Q' => CASTLE_WHITE_QUEENSIDE,
            'k' => CASTLE_BLACK_KINGSIDE,
            'q' => CASTLE_BLACK_QUEENSIDE,
            _ => return Err(ChessErrors::InvalidFenField(castling.to_owned())),
        };
    }

    Ok(rights)
}

fn parse_en_passant_square(en_passant: &str) -> Result<Option<Square>, ChessErrors> {
    if en_passant == "-" {
        return Ok(None);
    }

    Ok(Some(algebraic_to_square(en_passant)?))
}

fn parse_counter(field: &str) -> Result<u32, ChessErrors> {
    field
        .parse::<u32>()
        .map_err(|_| ChessErrors::InvalidFenField(field.to_owned()))
}

#[cfg(test)]
mod tests {
    use super::parse_fen;
    use crate::chess_errors::ChessErrors;
    use crate::game_state::chess_rules::STARTING_POSITION_FEN;
    use crate::game_state::chess_types::*;
    use crate::game_state::game_state::InitialState;

    #[test]
    fn parses_starting_position() {
        let state = parse_fen(STARTING_POSITION_FEN).expect("starting FEN should parse");
        assert_eq!(state, InitialState::standard());
        assert_eq!(state.squares[4], Piece::new(PieceKind::King, Color::White));
        assert_eq!(state.squares[59], Piece::new(PieceKind::Queen, Color::Black));
    }

    #[test]
    fn parses_side_rights_en_passant_and_clocks() {
        let state = parse_fen("4k3/8/8/3pP3/8/8/8/4K2R w Kq d6 7 42").expect("valid FEN");
        assert_eq!(state.color_to_move, Color::White);
        assert_eq!(state.castling_rights, CASTLE_WHITE_KINGSIDE | CASTLE_BLACK_QUEENSIDE);
        assert_eq!(state.en_passant_target, Some(43));
        assert_eq!(state.half_move_clock, 7);
        assert_eq!(state.full_move_count, 42);
    }

    #[test]
    fn rejects_wrong_field_count() {
        assert_eq!(
            parse_fen("8/8/8/8/8/8/8/8 w - -"),
            Err(ChessErrors::InvalidFenFieldCount(4))
        );
        assert_eq!(
            parse_fen("8/8/8/8/8/8/8/8 w - - 0 1 extra"),
            Err(ChessErrors::InvalidFenFieldCount(7))
        );
    }

    #[test]
    fn rejects_malformed_board() {
        assert!(matches!(
            parse_fen("8/8/8/8/8/8/8 w - - 0 1"),
            Err(ChessErrors::InvalidFenBoard(_))
        ));
        assert!(matches!(
            parse_fen("9/8/8/8/8/8/8/8 w - - 0 1"),
            Err(ChessErrors::InvalidFenBoard(_))
        ));
        assert!(matches!(
            parse_fen("7/8/8/8/8/8/8/8 w - - 0 1"),
            Err(ChessErrors::InvalidFenBoard(_))
        ));
        assert_eq!(
            parse_fen("7x/8/8/8/8/8/8/8 w - - 0 1"),
            Err(ChessErrors::InvalidFenToken('x'))
        );
    }

    #[test]
    fn rejects_malformed_fields() {
        assert!(parse_fen("8/8/8/8/8/8/8/8 x - - 0 1").is_err());
        assert!(parse_fen("8/8/8/8/8/8/8/8 w KX - 0 1").is_err());
        assert!(parse_fen("8/8/8/8/8/8/8/8 w - z9 0 1").is_err());
        assert!(parse_fen("8/8/8/8/8/8/8/8 w - - -1 1").is_err());
        assert!(parse_fen("8/8/8/8/8/8/8/8 w - - 0 one").is_err());
    }
}
