//! Position state machine.
//!
//! `GameState` owns the 64-square board, side to move, castling rights,
//! en-passant target, clocks and repetition history. Every transition goes
//! through [`GameState::make_move`], which applies the move and then rebuilds
//! the legal move set and the check/mate/draw flags from scratch.
//!
//! Clones are plain value copies: the board array is copied, nothing is shared,
//! so callers may explore independent clones on separate threads.

use log::{debug, trace, warn};

use crate::chess_errors::ChessErrors;
use crate::game_state::chess_types::*;
use crate::game_state::terminal_state::{DrawReason, PositionSignature};
use crate::move_generation::legal_move_apply::apply_move;
use crate::move_generation::legal_move_filter::generate_legal_moves;
use crate::move_generation::move_collection::LegalMoveCollection;
use crate::moves::chess_move::{Move, Promotion};
use crate::utils::fen_generator::generate_fen;
use crate::utils::fen_parser::parse_fen;

/// Plain record a position is built from and can be read back into.
///
/// This is the contract with notation parsers and serializers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InitialState {
    pub squares: [Piece; BOARD_SQUARES],
    pub color_to_move: Color,
    pub castling_rights: CastlingRights,
    pub en_passant_target: Option<Square>,
    pub half_move_clock: u32,
    pub full_move_count: u32,
}

impl Default for InitialState {
    fn default() -> Self {
        Self {
            squares: [Piece::NONE; BOARD_SQUARES],
            color_to_move: Color::White,
            castling_rights: 0,
            en_passant_target: None,
            half_move_clock: 0,
            full_move_count: 1,
        }
    }
}

impl InitialState {
    /// The standard chess starting position.
    pub fn standard() -> Self {
        const BACK_RANK: [PieceKind; 8] = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];

        let mut state = Self {
            castling_rights: CASTLE_ALL,
            ..Self::default()
        };
        for (file, kind) in BACK_RANK.into_iter().enumerate() {
            state.squares[file] = Piece::new(kind, Color::White);
            state.squares[8 + file] = Piece::new(PieceKind::Pawn, Color::White);
            state.squares[48 + file] = Piece::new(PieceKind::Pawn, Color::Black);
            state.squares[56 + file] = Piece::new(kind, Color::Black);
        }
        state
    }
}

#[derive(Debug, Clone)]
pub struct GameState {
    pub(crate) squares: [Piece; BOARD_SQUARES],
    pub(crate) color_to_move: Color,
    pub(crate) en_passant_target: Option<Square>,
    pub(crate) castling_rights: CastlingRights,
    pub(crate) half_move_clock: u32,
    pub(crate) full_move_count: u32,

    // Derived after every generation pass; never set by callers.
    pub(crate) is_check: bool,
    pub(crate) is_checkmate: bool,
    pub(crate) is_draw: bool,
    pub(crate) draw_reason: Option<DrawReason>,

    pub(crate) position_history: Vec<PositionSignature>,
    pub(crate) legal_moves: LegalMoveCollection,
}

impl GameState {
    /// Build a position from an initial-state record and generate its legal moves.
    pub fn new(initial: InitialState) -> Self {
        let mut game_state = Self::from_record(initial);
        game_state.regenerate_legal_moves();
        debug!(
            "built position {} ({} legal moves)",
            game_state.to_fen(),
            game_state.legal_moves.friendly_moves().len()
        );
        game_state
    }

    #[inline]
    pub fn new_game() -> Self {
        Self::new(InitialState::standard())
    }

    /// Empty board, white to move. Pieces are placed with [`GameState::set_piece`].
    #[inline]
    pub fn empty() -> Self {
        Self::new(InitialState::default())
    }

    #[inline]
    pub fn from_fen(fen: &str) -> Result<Self, ChessErrors> {
        Ok(Self::new(parse_fen(fen)?))
    }

    #[inline]
    pub fn to_fen(&self) -> String {
        generate_fen(self)
    }

    /// Read the position back into the record form it was built from.
    pub fn initial_state(&self) -> InitialState {
        InitialState {
            squares: self.squares,
            color_to_move: self.color_to_move,
            castling_rights: self.castling_rights,
            en_passant_target: self.en_passant_target,
            half_move_clock: self.half_move_clock,
            full_move_count: self.full_move_count,
        }
    }

    fn from_record(initial: InitialState) -> Self {
        Self {
            squares: initial.squares,
            color_to_move: initial.color_to_move,
            en_passant_target: initial.en_passant_target,
            castling_rights: initial.castling_rights,
            half_move_clock: initial.half_move_clock,
            full_move_count: initial.full_move_count,
            is_check: false,
            is_checkmate: false,
            is_draw: false,
            draw_reason: None,
            position_history: Vec::new(),
            legal_moves: LegalMoveCollection::default(),
        }
    }

    /// Copy used by the legality filter: board and rights only, no history or moves.
    pub(crate) fn simulation_clone(&self) -> Self {
        Self::from_record(self.initial_state())
    }

    #[inline]
    pub fn squares(&self) -> &[Piece; BOARD_SQUARES] {
        &self.squares
    }

    pub fn piece_at(&self, square: Square) -> Result<Piece, ChessErrors> {
        self.squares
            .get(square as usize)
            .copied()
            .ok_or(ChessErrors::SquareOutOfRange(square))
    }

    /// Place (or clear, with `Piece::NONE`) a piece while setting up a position.
    ///
    /// Derived state is stale until [`GameState::regenerate_legal_moves`] runs.
    pub fn set_piece(&mut self, square: Square, piece: Piece) -> Result<(), ChessErrors> {
        let slot = self
            .squares
            .get_mut(square as usize)
            .ok_or(ChessErrors::SquareOutOfRange(square))?;
        *slot = piece;
        Ok(())
    }

    #[inline]
    pub fn color_to_move(&self) -> Color {
        self.color_to_move
    }

    #[inline]
    pub fn en_passant_target(&self) -> Option<Square> {
        self.en_passant_target
    }

    #[inline]
    pub fn castling_rights(&self) -> CastlingRights {
        self.castling_rights
    }

    #[inline]
    pub fn has_castling_right(&self, right: CastlingRights) -> bool {
        self.castling_rights & right == right
    }

    #[inline]
    pub fn half_move_clock(&self) -> u32 {
        self.half_move_clock
    }

    #[inline]
    pub fn full_move_count(&self) -> u32 {
        self.full_move_count
    }

    #[inline]
    pub fn is_check(&self) -> bool {
        self.is_check
    }

    #[inline]
    pub fn is_checkmate(&self) -> bool {
        self.is_checkmate
    }

    #[inline]
    pub fn is_draw(&self) -> bool {
        self.is_draw
    }

    #[inline]
    pub fn draw_reason(&self) -> Option<DrawReason> {
        self.draw_reason
    }

    /// Signatures recorded for threefold-repetition detection, oldest first.
    #[inline]
    pub fn position_history(&self) -> &[PositionSignature] {
        &self.position_history
    }

    #[inline]
    pub fn legal_moves(&self) -> &LegalMoveCollection {
        &self.legal_moves
    }

    pub fn king_square(&self, color: Color) -> Option<Square> {
        let king = Piece::new(PieceKind::King, color);
        self.squares
            .iter()
            .position(|piece| *piece == king)
            .map(|index| index as Square)
    }

    /// Canonical legal move for a start/target pair.
    ///
    /// For promotions `promotion` picks among the four candidates; for every
    /// other move it is ignored.
    pub fn find_legal_move(
        &self,
        start: Square,
        target: Square,
        promotion: Option<Promotion>,
    ) -> Option<Move> {
        let wanted = Move::new(start, target);
        let mut matches = self
            .legal_moves
            .friendly_moves()
            .iter()
            .filter(|mv| **mv == wanted);

        match promotion {
            Some(piece) => matches
                .find(|mv| mv.promotion().map_or(true, |p| p == piece))
                .copied(),
            None => matches.next().copied(),
        }
    }

    /// Rebuild legal moves and check/mate/draw flags for the current side to move.
    pub fn regenerate_legal_moves(&mut self) {
        generate_legal_moves(self);
    }

    /// Apply a legal move (or [`Move::NULL`]) and advance to the next position.
    ///
    /// `mv` is resolved against the cached legal set, so a bare start/target
    /// pair still castles with its rook and promotes to a queen unless another
    /// piece is given. Moves missing from the set are rejected without touching
    /// the position.
    pub fn make_move(&mut self, mv: Move) -> Result<(), ChessErrors> {
        if mv.is_null() {
            self.make_move_unchecked(mv);
            return Ok(());
        }

        let Some(canonical) = self.find_legal_move(mv.start(), mv.target(), mv.promotion()) else {
            warn!("rejected illegal move {mv} in {}", self.to_fen());
            return Err(ChessErrors::IllegalMove(mv));
        };

        self.make_move_unchecked(canonical);
        Ok(())
    }

    /// Apply a move the caller guarantees is legal. Illegal input leaves the
    /// position in an unspecified state.
    pub fn make_move_unchecked(&mut self, mv: Move) {
        trace!("apply {mv} for {:?}", self.color_to_move);
        apply_move(self, mv);
        self.regenerate_legal_moves();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_rules::STARTING_POSITION_FEN;

    #[test]
    fn standard_record_matches_starting_fen() {
        let from_record = GameState::new_game();
        assert_eq!(from_record.to_fen(), STARTING_POSITION_FEN);

        let parsed = GameState::from_fen(STARTING_POSITION_FEN).expect("starting FEN should parse");
        assert_eq!(parsed.initial_state(), InitialState::standard());
    }

    #[test]
    fn start_position_has_twenty_moves_and_no_flags() {
        let game = GameState::new_game();
        assert_eq!(game.legal_moves().friendly_moves().len(), 20);
        assert_eq!(game.legal_moves().enemy_moves().len(), 20);
        assert!(!game.is_check());
        assert!(!game.is_checkmate());
        assert!(!game.is_draw());
        assert_eq!(game.position_history().len(), 1);
    }

    #[test]
    fn clones_share_no_board_storage() {
        let original = GameState::new_game();
        let mut copy = original.clone();
        copy.make_move(Move::new(12, 28)).expect("e2e4 is legal");

        assert_eq!(original.piece_at(12), Ok(Piece::new(PieceKind::Pawn, Color::White)));
        assert_eq!(copy.piece_at(12), Ok(Piece::NONE));
        assert_eq!(original.color_to_move(), Color::White);
        assert_eq!(original.legal_moves().friendly_moves().len(), 20);
    }

    #[test]
    fn out_of_range_squares_are_rejected() {
        let mut game = GameState::empty();
        assert_eq!(game.piece_at(64), Err(ChessErrors::SquareOutOfRange(64)));
        assert_eq!(
            game.set_piece(200, Piece::new(PieceKind::Rook, Color::White)),
            Err(ChessErrors::SquareOutOfRange(200))
        );
    }

    #[test]
    fn illegal_move_is_rejected_without_side_effects() {
        let mut game = GameState::new_game();
        let before = game.to_fen();

        let result = game.make_move(Move::new(12, 36));
        assert_eq!(result, Err(ChessErrors::IllegalMove(Move::new(12, 36))));
        assert_eq!(game.to_fen(), before);
        assert_eq!(game.legal_moves().friendly_moves().len(), 20);
    }

    #[test]
    fn bare_castle_move_brings_the_rook() {
        let mut game = GameState::from_fen("4k3/8/8/8/8/8/8/4K2R w K - 0 1").expect("valid FEN");
        let bare = Move::from_long_algebraic("e1g1").expect("valid move text");
        game.make_move(bare).expect("castle is legal");

        assert_eq!(game.piece_at(6), Ok(Piece::new(PieceKind::King, Color::White)));
        assert_eq!(game.piece_at(5), Ok(Piece::new(PieceKind::Rook, Color::White)));
        assert_eq!(game.piece_at(7), Ok(Piece::NONE));
        assert_eq!(game.to_fen(), "4k3/8/8/8/8/8/8/5RK1 b - - 1 1");
    }

    #[test]
    fn bare_promotion_move_makes_a_queen() {
        let mut game = GameState::from_fen("8/4P3/8/8/8/8/8/k6K w - - 0 1").expect("valid FEN");
        game.make_move(Move::new(52, 60)).expect("promotion is legal");
        assert_eq!(game.piece_at(60), Ok(Piece::new(PieceKind::Queen, Color::White)));
    }

    #[test]
    fn promotion_choice_is_ignored_for_ordinary_moves() {
        let mut game = GameState::from_fen("8/4P3/8/8/8/8/8/k6K w - - 0 1").expect("valid FEN");
        game.make_move(Move::with_promotion(7, 15, Promotion::Rook))
            .expect("king step is legal");
        assert_eq!(game.piece_at(15), Ok(Piece::new(PieceKind::King, Color::White)));
        assert_eq!(game.piece_at(52), Ok(Piece::new(PieceKind::Pawn, Color::White)));
    }

    #[test]
    fn null_move_only_passes_the_turn() {
        let mut game = GameState::new_game();
        game.make_move(Move::NULL).expect("null move is always accepted");

        assert_eq!(game.color_to_move(), Color::Black);
        assert_eq!(game.half_move_clock(), 0);
        assert_eq!(game.full_move_count(), 1);
        assert_eq!(game.legal_moves().friendly_moves().len(), 20);
        assert!(game
            .legal_moves()
            .friendly_moves()
            .iter()
            .all(|mv| game.squares()[mv.start() as usize].is_color(Color::Black)));
    }

    #[test]
    fn null_move_clears_en_passant_target() {
        let mut game = GameState::new_game();
        game.make_move(Move::new(12, 28)).expect("e2e4 is legal");
        assert_eq!(game.en_passant_target(), Some(20));

        game.make_move(Move::NULL).expect("null move is always accepted");
        assert_eq!(game.en_passant_target(), None);
    }

    #[test]
    fn clocks_follow_full_and_half_moves() {
        let mut game = GameState::new_game();
        for (start, target) in [(6, 21), (62, 45), (21, 6)] {
            game.make_move(Move::new(start, target)).expect("knight move is legal");
        }
        assert_eq!(game.half_move_clock(), 3);
        assert_eq!(game.full_move_count(), 2);

        game.make_move(Move::new(52, 36)).expect("e7e5 is legal");
        assert_eq!(game.half_move_clock(), 0);
        assert_eq!(game.full_move_count(), 3);
    }

    #[test]
    fn find_legal_move_returns_canonical_metadata() {
        let game = GameState::from_fen("4k3/8/8/8/8/8/8/4K2R w K - 0 1").expect("valid FEN");
        let castle = game.find_legal_move(4, 6, None).expect("castle should be legal");
        assert!(castle.exact_eq(&Move::castle(4, 6, 7)));

        let game = GameState::from_fen("8/4P3/8/8/8/8/8/k6K w - - 0 1").expect("valid FEN");
        let knight = game
            .find_legal_move(52, 60, Some(Promotion::Knight))
            .expect("promotion should be legal");
        assert_eq!(knight.promotion(), Some(Promotion::Knight));
        assert!(game.find_legal_move(52, 44, None).is_none());
    }

    #[test]
    fn random_playouts_keep_invariants() {
        use rand::rngs::StdRng;
        use rand::seq::IndexedRandom;
        use rand::SeedableRng;

        let mut rng = StdRng::seed_from_u64(0x5EED);
        for _ in 0..20 {
            let mut game = GameState::new_game();
            for _ in 0..120 {
                let Some(mv) = game.legal_moves().friendly_moves().choose(&mut rng).copied() else {
                    break;
                };
                let mover = game.color_to_move();
                let rights_before = game.castling_rights();
                let double_push = game.squares()[mv.start() as usize].is_kind(PieceKind::Pawn)
                    && mv.start().abs_diff(mv.target()) == 16;

                game.make_move(mv).expect("chosen move comes from the legal set");

                assert_eq!(game.en_passant_target().is_some(), double_push);
                // Castling rights only ever decrease.
                assert_eq!(game.castling_rights() & !rights_before, 0);
                // The mover never leaves its own king attacked.
                if let Some(king) = game.king_square(mover) {
                    assert!(!game.legal_moves().is_attacked(king, mover.opposite()));
                }
                assert_eq!(
                    GameState::from_fen(&game.to_fen()).expect("generated FEN parses").to_fen(),
                    game.to_fen()
                );
                let no_moves = game.legal_moves().friendly_moves().is_empty();
                assert_eq!(game.is_checkmate(), game.is_check() && no_moves);
                assert!(!(game.is_checkmate() && game.is_draw()));

                if game.is_checkmate() || game.is_draw() {
                    break;
                }
            }
        }
    }

    #[test]
    fn king_square_finds_each_side() {
        let game = GameState::new_game();
        assert_eq!(game.king_square(Color::White), Some(4));
        assert_eq!(game.king_square(Color::Black), Some(60));
        assert_eq!(GameState::empty().king_square(Color::White), None);
    }
}
