//! Conversions between board squares and algebraic coordinates such as `e4`.
//!
//! Rows count down from rank 8: row 0 is rank 8 and row 7 is rank 1.

use crate::chess_errors::{ChessError, ChessResult};
use crate::game_state::chess_rules::{FILE_GLYPHS, RANK_GLYPHS};
use crate::game_state::chess_types::Square;

/// Convert algebraic notation (for example: "e4") to a square.
pub fn algebraic_to_square(square: &str) -> ChessResult<Square> {
    let mut chars = square.chars();
    let (Some(file), Some(rank), None) = (chars.next(), chars.next(), chars.next()) else {
        return Err(ChessError::InvalidSquare(square.to_owned()));
    };

    let col = FILE_GLYPHS
        .iter()
        .position(|&glyph| glyph == file)
        .ok_or_else(|| ChessError::InvalidSquare(format!("bad file '{file}' in {square}")))?;
    let row = RANK_GLYPHS
        .iter()
        .position(|&glyph| glyph == rank)
        .ok_or_else(|| ChessError::InvalidSquare(format!("bad rank '{rank}' in {square}")))?;

    Ok(Square::new(row as u8, col as u8))
}

/// Convert a square to algebraic notation (for example: "e4").
#[inline]
pub fn square_to_algebraic(square: Square) -> String {
    let mut out = String::with_capacity(2);
    out.push(FILE_GLYPHS[square.col as usize]);
    out.push(RANK_GLYPHS[square.row as usize]);
    out
}
