//! Core mutable game state.
//!
//! `GameState` owns the board and every piece of bookkeeping the rules need:
//! side to move, tracked king squares, castling rights, the en-passant target,
//! the terminal flags, and the history stacks that make `undo_move` exact.
//! It is created once per game and mutated in place; it is not meant to be
//! shared between threads without external synchronization.

use crate::chess_errors::{ChessError, ChessResult};
use crate::game_state::chess_rules::{home_row, KING_HOME_COL, STARTING_POSITION_FEN};
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_apply;
use crate::move_generation::legal_move_checks;
use crate::move_generation::legal_move_generator;
use crate::moves::move_descriptions::ChessMove;
use crate::utils::fen_generator::generate_fen;
use crate::utils::fen_parser::parse_fen;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub board: Board,
    pub side_to_move: Color,
    /// Indexed by `Color::index()`.
    pub king_squares: [Square; 2],

    // Terminal flags, refreshed by `get_valid_moves` and cleared by `undo_move`.
    pub check_mate: bool,
    pub stale_mate: bool,

    pub en_passant_target: Option<Square>,
    pub castle_rights: CastleRights,

    pub halfmove_clock: u16,
    pub fullmove_number: u16,

    // History stacks. One entry per applied move in each, always equal length.
    // The auxiliary logs hold the values in force *before* the matching move.
    pub move_log: Vec<ChessMove>,
    pub en_passant_log: Vec<Option<Square>>,
    pub castle_rights_log: Vec<CastleRights>,
    pub halfmove_clock_log: Vec<u16>,
}

impl Default for GameState {
    fn default() -> Self {
        Self {
            board: EMPTY_BOARD,
            side_to_move: Color::Light,
            king_squares: [
                Square::new(home_row(Color::Light), KING_HOME_COL),
                Square::new(home_row(Color::Dark), KING_HOME_COL),
            ],

            check_mate: false,
            stale_mate: false,

            en_passant_target: None,
            castle_rights: CastleRights::NONE,

            halfmove_clock: 0,
            fullmove_number: 1,

            move_log: Vec::new(),
            en_passant_log: Vec::new(),
            castle_rights_log: Vec::new(),
            halfmove_clock_log: Vec::new(),
        }
    }
}

impl GameState {
    /// Empty board with no kings. Only useful as a scratch base for builders
    /// such as the FEN parser, which restore the one-king-per-side invariant.
    #[inline]
    pub fn new_empty() -> Self {
        Self::default()
    }

    /// Standard starting position, light to move, full castling rights.
    pub fn new_game() -> Self {
        let mut game_state = Self::new_empty();
        game_state.board = starting_board();
        game_state.castle_rights = CastleRights::ALL;
        game_state
    }

    #[inline]
    pub fn from_fen(fen: &str) -> ChessResult<Self> {
        parse_fen(fen)
    }

    #[inline]
    pub fn get_fen(&self) -> String {
        generate_fen(self)
    }

    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.board[square.row as usize][square.col as usize]
    }

    #[inline]
    pub fn set_piece(&mut self, square: Square, piece: Option<Piece>) {
        self.board[square.row as usize][square.col as usize] = piece;
    }

    #[inline]
    pub fn king_square(&self, color: Color) -> Square {
        self.king_squares[color.index()]
    }

    #[inline]
    pub fn is_light_to_move(&self) -> bool {
        self.side_to_move == Color::Light
    }

    /// Moves applied so far, oldest first.
    #[inline]
    pub fn game_log(&self) -> &[ChessMove] {
        &self.move_log
    }

    #[inline]
    pub fn make_move(&mut self, mv: ChessMove) {
        legal_move_apply::make_move(self, mv);
    }

    #[inline]
    pub fn undo_move(&mut self) {
        legal_move_apply::undo_move(self);
    }

    #[inline]
    pub fn get_valid_moves(&mut self) -> Vec<ChessMove> {
        legal_move_generator::get_valid_moves(self)
    }

    #[inline]
    pub fn get_all_possible_moves(&self) -> Vec<ChessMove> {
        legal_move_generator::get_all_possible_moves(self)
    }

    #[inline]
    pub fn in_check(&self) -> bool {
        legal_move_checks::in_check(self, self.side_to_move)
    }

    #[inline]
    pub fn square_under_attack(&self, square: Square) -> bool {
        legal_move_checks::square_under_attack(self, square)
    }

    /// Looks up the legal move written as `<file><rank><file><rank>`.
    pub fn find_valid_move(&mut self, notation: &str) -> ChessResult<ChessMove> {
        let trimmed = notation.trim();
        self.get_valid_moves()
            .into_iter()
            .find(|mv| mv.get_chess_notation() == trimmed)
            .ok_or_else(|| ChessError::InvalidMove(format!("{trimmed} is not legal here")))
    }
}

fn starting_board() -> Board {
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

    let mut board = EMPTY_BOARD;
    for (col, kind) in BACK_RANK.into_iter().enumerate() {
        board[0][col] = Some(Piece::new(Color::Dark, kind));
        board[1][col] = Some(Piece::new(Color::Dark, PieceKind::Pawn));
        board[6][col] = Some(Piece::new(Color::Light, PieceKind::Pawn));
        board[7][col] = Some(Piece::new(Color::Light, kind));
    }
    board
}
