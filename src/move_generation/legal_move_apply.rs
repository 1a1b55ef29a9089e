//! In-place move application and reversal.
//!
//! `make_move` pushes one entry onto every history stack and `undo_move` pops
//! one from each, so the stacks stay the same length and undo is exact.

use crate::game_state::chess_rules::{home_row, KINGSIDE_ROOK_COL, QUEENSIDE_ROOK_COL};
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::moves::move_descriptions::ChessMove;

/// Applies `mv`, which must come from the current legal-move list.
pub fn make_move(game_state: &mut GameState, mv: ChessMove) {
    let mover = mv.piece_moved.color;

    game_state.en_passant_log.push(game_state.en_passant_target);
    game_state.castle_rights_log.push(game_state.castle_rights);
    game_state.halfmove_clock_log.push(game_state.halfmove_clock);

    game_state.set_piece(mv.from, None);
    game_state.set_piece(mv.to, Some(mv.piece_moved));
    game_state.move_log.push(mv);
    game_state.side_to_move = game_state.side_to_move.opposite();

    if mv.piece_moved.kind == PieceKind::King {
        game_state.king_squares[mover.index()] = mv.to;
    }

    // Promotion always resolves to a queen.
    if mv.is_promotion {
        game_state.set_piece(mv.to, Some(Piece::new(mover, PieceKind::Queen)));
    }

    // The captured pawn sits beside the mover's origin, not on the destination.
    if mv.is_en_passant {
        game_state.set_piece(Square::new(mv.from.row, mv.to.col), None);
    }

    game_state.en_passant_target =
        if mv.piece_moved.kind == PieceKind::Pawn && mv.from.row.abs_diff(mv.to.row) == 2 {
            Some(Square::new((mv.from.row + mv.to.row) / 2, mv.from.col))
        } else {
            None
        };

    if mv.is_castle {
        let (rook_from, rook_to) = castle_rook_squares(&mv);
        let rook = game_state.piece_at(rook_from);
        game_state.set_piece(rook_to, rook);
        game_state.set_piece(rook_from, None);
    }

    update_castle_rights(&mut game_state.castle_rights, &mv);

    if mv.piece_moved.kind == PieceKind::Pawn || mv.is_capture() {
        game_state.halfmove_clock = 0;
    } else {
        game_state.halfmove_clock = game_state.halfmove_clock.saturating_add(1);
    }
    if mover == Color::Dark {
        game_state.fullmove_number = game_state.fullmove_number.saturating_add(1);
    }
}

/// Reverts the most recent move. Does nothing when no move has been made.
pub fn undo_move(game_state: &mut GameState) {
    let Some(mv) = game_state.move_log.pop() else {
        return;
    };
    let mover = mv.piece_moved.color;

    game_state.set_piece(mv.from, Some(mv.piece_moved));
    if mv.is_en_passant {
        game_state.set_piece(mv.to, None);
        game_state.set_piece(Square::new(mv.from.row, mv.to.col), mv.piece_captured);
    } else {
        game_state.set_piece(mv.to, mv.piece_captured);
    }
    game_state.side_to_move = game_state.side_to_move.opposite();

    if mv.piece_moved.kind == PieceKind::King {
        game_state.king_squares[mover.index()] = mv.from;
    }

    if let Some(previous) = game_state.en_passant_log.pop() {
        game_state.en_passant_target = previous;
    }
    if let Some(previous) = game_state.castle_rights_log.pop() {
        game_state.castle_rights = previous;
    }
    if let Some(previous) = game_state.halfmove_clock_log.pop() {
        game_state.halfmove_clock = previous;
    }

    if mv.is_castle {
        let (rook_from, rook_to) = castle_rook_squares(&mv);
        let rook = game_state.piece_at(rook_to);
        game_state.set_piece(rook_from, rook);
        game_state.set_piece(rook_to, None);
    }

    if mover == Color::Dark {
        game_state.fullmove_number = game_state.fullmove_number.saturating_sub(1).max(1);
    }

    // The position we return to had at least one legal move.
    game_state.check_mate = false;
    game_state.stale_mate = false;
}

/// Rook origin and destination for a castle move, derived from the king's row.
fn castle_rook_squares(mv: &ChessMove) -> (Square, Square) {
    let row = mv.from.row;
    if mv.to.col > mv.from.col {
        (Square::new(row, KINGSIDE_ROOK_COL), Square::new(row, mv.to.col - 1))
    } else {
        (Square::new(row, QUEENSIDE_ROOK_COL), Square::new(row, mv.to.col + 1))
    }
}

fn update_castle_rights(rights: &mut CastleRights, mv: &ChessMove) {
    let mover = mv.piece_moved.color;

    match mv.piece_moved.kind {
        PieceKind::King => rights.revoke_all(mover),
        PieceKind::Rook if mv.from.row == home_row(mover) => match mv.from.col {
            QUEENSIDE_ROOK_COL => rights.revoke_queenside(mover),
            KINGSIDE_ROOK_COL => rights.revoke_kingside(mover),
            _ => {}
        },
        _ => {}
    }

    // Capturing a rook on its original square also removes the owner's right.
    if let Some(captured) = mv.piece_captured {
        if captured.kind == PieceKind::Rook && mv.to.row == home_row(captured.color) {
            match mv.to.col {
                QUEENSIDE_ROOK_COL => rights.revoke_queenside(captured.color),
                KINGSIDE_ROOK_COL => rights.revoke_kingside(captured.color),
                _ => {}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game(fen: &str) -> GameState {
        GameState::from_fen(fen).expect("test FEN should parse")
    }

    fn play(game_state: &mut GameState, notation: &str) -> ChessMove {
        let mv = game_state
            .find_valid_move(notation)
            .expect("test move should be legal");
        make_move(game_state, mv);
        mv
    }

    #[test]
    fn undo_on_empty_history_is_a_no_op() {
        let mut g = GameState::new_game();
        let before = g.clone();
        undo_move(&mut g);
        assert_eq!(g, before);
    }

    #[test]
    fn double_advance_sets_en_passant_target_and_next_move_clears_it() {
        let mut g = GameState::new_game();
        play(&mut g, "e2e4");
        assert_eq!(g.en_passant_target, Some(Square::new(5, 4)));
        play(&mut g, "g8f6");
        assert_eq!(g.en_passant_target, None);
    }

    #[test]
    fn en_passant_removes_the_passed_pawn() {
        let mut g = game("4k3/3p4/8/4P3/8/8/8/4K3 b - - 0 1");
        play(&mut g, "d7d5");
        let mv = play(&mut g, "e5d6");
        assert!(mv.is_en_passant);
        assert_eq!(g.piece_at(Square::new(3, 3)), None);
        assert_eq!(
            g.piece_at(Square::new(2, 3)),
            Some(Piece::new(Color::Light, PieceKind::Pawn))
        );

        undo_move(&mut g);
        assert_eq!(
            g.piece_at(Square::new(3, 3)),
            Some(Piece::new(Color::Dark, PieceKind::Pawn))
        );
        assert_eq!(g.piece_at(Square::new(2, 3)), None);
        assert_eq!(g.en_passant_target, Some(Square::new(2, 3)));
    }

    #[test]
    fn queenside_castle_moves_rook_off_its_corner() {
        let mut g = game("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1");
        let before = g.clone();
        play(&mut g, "e1c1");

        assert_eq!(g.piece_at(Square::new(7, 0)), None);
        assert_eq!(
            g.piece_at(Square::new(7, 3)),
            Some(Piece::new(Color::Light, PieceKind::Rook))
        );
        assert_eq!(g.king_square(Color::Light), Square::new(7, 2));
        assert!(!g.castle_rights.light_queenside);
        assert!(!g.castle_rights.light_kingside);

        undo_move(&mut g);
        assert_eq!(g, before);
    }

    #[test]
    fn kingside_castle_for_dark_moves_rook_off_its_corner() {
        let mut g = game("r3k2r/8/8/8/8/8/8/R3K2R b KQkq - 0 1");
        play(&mut g, "e8g8");
        assert_eq!(g.piece_at(Square::new(0, 7)), None);
        assert_eq!(
            g.piece_at(Square::new(0, 5)),
            Some(Piece::new(Color::Dark, PieceKind::Rook))
        );
        assert!(g.castle_rights.light_kingside);
        assert!(!g.castle_rights.dark_kingside);
    }

    #[test]
    fn capturing_a_home_rook_revokes_its_owner_right() {
        let mut g = game("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1");
        play(&mut g, "a1a8");
        assert!(!g.castle_rights.dark_queenside);
        assert!(!g.castle_rights.light_queenside);
        assert!(g.castle_rights.dark_kingside);
        assert!(g.castle_rights.light_kingside);
    }

    #[test]
    fn revoked_rights_stay_revoked_until_undo() {
        let mut g = game("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1");
        play(&mut g, "h1h2");
        assert!(!g.castle_rights.light_kingside);
        play(&mut g, "a8a7");
        play(&mut g, "h2h1");
        assert!(!g.castle_rights.light_kingside);

        undo_move(&mut g);
        undo_move(&mut g);
        assert!(!g.castle_rights.light_kingside);
        undo_move(&mut g);
        assert_eq!(g.castle_rights, CastleRights::ALL);
    }

    #[test]
    fn promotion_creates_queen_and_undo_restores_pawn() {
        let mut g = game("1r2k3/P7/8/8/8/8/8/4K3 w - - 0 1");
        let before = g.clone();
        let mv = play(&mut g, "a7b8");
        assert!(mv.is_promotion);
        assert_eq!(
            g.piece_at(Square::new(0, 1)),
            Some(Piece::new(Color::Light, PieceKind::Queen))
        );

        undo_move(&mut g);
        assert_eq!(g, before);
    }

    #[test]
    fn history_stacks_stay_parallel() {
        let mut g = GameState::new_game();
        for notation in ["e2e4", "e7e5", "g1f3", "b8c6"] {
            play(&mut g, notation);
            assert_eq!(g.move_log.len(), g.en_passant_log.len());
            assert_eq!(g.move_log.len(), g.castle_rights_log.len());
            assert_eq!(g.move_log.len(), g.halfmove_clock_log.len());
        }
        assert_eq!(g.fullmove_number, 3);
        assert_eq!(g.halfmove_clock, 2);
    }
}
