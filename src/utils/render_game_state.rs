//! Terminal-oriented Unicode board renderer for debugging and diagnostics.

use crate::game_state::chess_rules::{FILE_GLYPHS, RANK_GLYPHS};
use crate::game_state::{chess_types::*, game_state::GameState};

/// Render the board with rank 8 at the top.
pub fn render_game_state(game_state: &GameState) -> String {
    let files: String = FILE_GLYPHS.iter().map(|f| format!(" {f}")).collect();
    let mut out = String::new();

    out.push(' ');
    out.push_str(&files);
    out.push('\n');

    for (row, cells) in game_state.board.iter().enumerate() {
        out.push(RANK_GLYPHS[row]);
        out.push(' ');

        for (col, cell) in cells.iter().enumerate() {
            match cell {
                Some(piece) => out.push(piece_to_unicode(*piece)),
                None => out.push('·'),
            }

            if col < 7 {
                out.push(' ');
            }
        }

        out.push(' ');
        out.push(RANK_GLYPHS[row]);
        out.push('\n');
    }

    out.push(' ');
    out.push_str(&files);

    out
}

fn piece_to_unicode(piece: Piece) -> char {
    match (piece.color, piece.kind) {
        (Color::Light, PieceKind::Pawn) => '♙',
        (Color::Light, PieceKind::Knight) => '♘',
        (Color::Light, PieceKind::Bishop) => '♗',
        (Color::Light, PieceKind::Rook) => '♖',
        (Color::Light, PieceKind::Queen) => '♕',
        (Color::Light, PieceKind::King) => '♔',
        (Color::Dark, PieceKind::Pawn) => '♟',
        (Color::Dark, PieceKind::Knight) => '♞',
        (Color::Dark, PieceKind::Bishop) => '♝',
        (Color::Dark, PieceKind::Rook) => '♜',
        (Color::Dark, PieceKind::Queen) => '♛',
        (Color::Dark, PieceKind::King) => '♚',
    }
}
