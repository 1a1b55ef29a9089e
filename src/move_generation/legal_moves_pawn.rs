//! Pseudo-legal pawn moves: single and double advances, diagonal captures,
//! and en-passant captures onto the current en-passant target.

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::moves::move_descriptions::{ChessMove, SpecialMove};
use crate::moves::pawn_moves::{pawn_forward, pawn_start_row, PAWN_CAPTURE_COLUMNS};

pub fn generate_pawn_moves(game_state: &GameState, from: Square, pawn: Piece, out: &mut Vec<ChessMove>) {
    let forward = pawn_forward(pawn.color);
    let board = &game_state.board;

    if let Some(one_step) = from.offset(forward, 0) {
        if game_state.piece_at(one_step).is_none() {
            out.push(ChessMove::build(from, one_step, pawn, board, SpecialMove::Normal));

            if from.row == pawn_start_row(pawn.color) {
                if let Some(two_step) = one_step.offset(forward, 0) {
                    if game_state.piece_at(two_step).is_none() {
                        out.push(ChessMove::build(from, two_step, pawn, board, SpecialMove::Normal));
                    }
                }
            }
        }
    }

    for d_col in PAWN_CAPTURE_COLUMNS {
        let Some(to) = from.offset(forward, d_col) else {
            continue;
        };

        match game_state.piece_at(to) {
            Some(target) if target.color != pawn.color => {
                out.push(ChessMove::build(from, to, pawn, board, SpecialMove::Normal));
            }
            None if game_state.en_passant_target == Some(to) => {
                out.push(ChessMove::build(from, to, pawn, board, SpecialMove::EnPassant));
            }
            _ => {}
        }
    }
}
