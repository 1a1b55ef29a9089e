//! King steps and castling.
//!
//! Castling is generated separately from the per-square scan and appended
//! after every other pseudo-legal move.

use crate::game_state::chess_rules::{home_row, KING_HOME_COL, KINGSIDE_ROOK_COL, QUEENSIDE_ROOK_COL};
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_checks::is_square_attacked;
use crate::move_generation::legal_move_shared::push_leaper_moves;
use crate::moves::king_moves::king_targets;
use crate::moves::move_descriptions::{ChessMove, SpecialMove};

pub fn generate_king_moves(game_state: &GameState, from: Square, king: Piece, out: &mut Vec<ChessMove>) {
    push_leaper_moves(game_state, from, king, king_targets(from), out);
}

/// Appends the castle moves currently available to the side to move.
pub fn generate_castle_moves(game_state: &GameState, out: &mut Vec<ChessMove>) {
    let side = game_state.side_to_move;
    let enemy = side.opposite();
    let king_from = game_state.king_square(side);
    let row = home_row(side);

    if king_from != Square::new(row, KING_HOME_COL) {
        return;
    }

    // Cannot castle out of check.
    if is_square_attacked(game_state, king_from, enemy) {
        return;
    }

    let king = Piece::new(side, PieceKind::King);
    let is_empty = |col: u8| game_state.piece_at(Square::new(row, col)).is_none();
    let is_safe = |col: u8| !is_square_attacked(game_state, Square::new(row, col), enemy);
    let has_rook = |col: u8| game_state.piece_at(Square::new(row, col)) == Some(Piece::new(side, PieceKind::Rook));

    if game_state.castle_rights.kingside(side)
        && has_rook(KINGSIDE_ROOK_COL)
        && is_empty(5)
        && is_empty(6)
        && is_safe(5)
        && is_safe(6)
    {
        out.push(ChessMove::build(
            king_from,
            Square::new(row, 6),
            king,
            &game_state.board,
            SpecialMove::Castle,
        ));
    }

    // The b-file square only has to be empty; the king never crosses it.
    if game_state.castle_rights.queenside(side)
        && has_rook(QUEENSIDE_ROOK_COL)
        && is_empty(3)
        && is_empty(2)
        && is_empty(1)
        && is_safe(3)
        && is_safe(2)
    {
        out.push(ChessMove::build(
            king_from,
            Square::new(row, 2),
            king,
            &game_state.board,
            SpecialMove::Castle,
        ));
    }
}
