//! Canonical chess-rule constants.
//!
//! Static literals for the starting position, home rows and the fixed
//! file/rank glyphs used by move notation.

use crate::game_state::chess_types::Color;

/// Standard chess starting position in Forsyth-Edwards Notation (FEN).
pub const STARTING_POSITION_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// File letters indexed by column.
pub const FILE_GLYPHS: [char; 8] = ['a', 'b', 'c', 'd', 'e', 'f', 'g', 'h'];

/// Rank digits indexed by row; row 0 is rank 8.
pub const RANK_GLYPHS: [char; 8] = ['8', '7', '6', '5', '4', '3', '2', '1'];

pub const KING_HOME_COL: u8 = 4;
pub const KINGSIDE_ROOK_COL: u8 = 7;
pub const QUEENSIDE_ROOK_COL: u8 = 0;

/// Row holding a side's king and rooks at the start of the game.
#[inline]
pub const fn home_row(color: Color) -> u8 {
    match color {
        Color::Light => 7,
        Color::Dark => 0,
    }
}
