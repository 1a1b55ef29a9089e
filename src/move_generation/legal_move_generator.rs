//! Full legal move generation pipeline.
//!
//! Scans the board for pseudo-legal moves, appends castling, then filters out
//! every move that would leave the mover's own king attacked by trying it on
//! the live state and undoing it again.

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_apply::{make_move, undo_move};
use crate::move_generation::legal_move_checks::in_check;
use crate::move_generation::legal_moves_bishop::generate_bishop_moves;
use crate::move_generation::legal_moves_king::{generate_castle_moves, generate_king_moves};
use crate::move_generation::legal_moves_knight::generate_knight_moves;
use crate::move_generation::legal_moves_pawn::generate_pawn_moves;
use crate::move_generation::legal_moves_queen::generate_queen_moves;
use crate::move_generation::legal_moves_rook::generate_rook_moves;
use crate::move_generation::move_generator::MoveGenerator;
use crate::moves::move_descriptions::ChessMove;

pub struct LegalMoveGenerator;

impl MoveGenerator for LegalMoveGenerator {
    fn generate_legal_moves(&self, game_state: &mut GameState) -> Vec<ChessMove> {
        get_valid_moves(game_state)
    }
}

/// Pseudo-legal moves for the side to move in board scan order, castling excluded.
pub fn get_all_possible_moves(game_state: &GameState) -> Vec<ChessMove> {
    let side = game_state.side_to_move;
    let mut out = Vec::with_capacity(64);

    for from in Square::all() {
        let Some(piece) = game_state.piece_at(from) else {
            continue;
        };
        if piece.color != side {
            continue;
        }

        match piece.kind {
            PieceKind::Pawn => generate_pawn_moves(game_state, from, piece, &mut out),
            PieceKind::Knight => generate_knight_moves(game_state, from, piece, &mut out),
            PieceKind::Bishop => generate_bishop_moves(game_state, from, piece, &mut out),
            PieceKind::Rook => generate_rook_moves(game_state, from, piece, &mut out),
            PieceKind::Queen => generate_queen_moves(game_state, from, piece, &mut out),
            PieceKind::King => generate_king_moves(game_state, from, piece, &mut out),
        }
    }

    out
}

/// Legal moves for the side to move.
///
/// Also refreshes `check_mate` / `stale_mate`: an empty result means the side
/// to move is mated (if in check) or stalemated. The en-passant target and
/// castling rights are restored before returning.
pub fn get_valid_moves(game_state: &mut GameState) -> Vec<ChessMove> {
    let saved_en_passant = game_state.en_passant_target;
    let saved_castle_rights = game_state.castle_rights;

    let mut moves = get_all_possible_moves(game_state);
    generate_castle_moves(game_state, &mut moves);

    let mover = game_state.side_to_move;
    for index in (0..moves.len()).rev() {
        make_move(game_state, moves[index]);
        let exposes_king = in_check(game_state, mover);
        undo_move(game_state);

        if exposes_king {
            moves.remove(index);
        }
    }

    if moves.is_empty() {
        let mated = in_check(game_state, mover);
        game_state.check_mate = mated;
        game_state.stale_mate = !mated;
    } else {
        game_state.check_mate = false;
        game_state.stale_mate = false;
    }

    game_state.en_passant_target = saved_en_passant;
    game_state.castle_rights = saved_castle_rights;

    moves
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::move_generation::legal_move_checks::is_square_attacked;

    fn game(fen: &str) -> GameState {
        GameState::from_fen(fen).expect("test FEN should parse")
    }

    #[test]
    fn start_position_has_twenty_moves() {
        let mut g = GameState::new_game();
        let moves = get_valid_moves(&mut g);
        assert_eq!(moves.len(), 20);
        assert!(!g.check_mate);
        assert!(!g.stale_mate);
        assert_eq!(LegalMoveGenerator.generate_legal_moves(&mut g).len(), 20);
    }

    #[test]
    fn generation_leaves_position_untouched() {
        let mut g = game("r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1");
        let before = g.clone();
        get_valid_moves(&mut g);
        assert_eq!(g, before);
    }

    #[test]
    fn castle_moves_come_last() {
        let mut g = game("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1");
        let moves = get_valid_moves(&mut g);
        let tail: Vec<String> = moves[moves.len() - 2..]
            .iter()
            .map(|mv| mv.get_chess_notation())
            .collect();
        assert_eq!(tail, vec!["e1g1", "e1c1"]);
        assert!(moves[moves.len() - 1].is_castle);
    }

    #[test]
    fn queen_next_to_king_is_checkmate() {
        // Light king h1 against a dark queen on g2; the bishop on f3 guards the queen.
        let mut g = game("k7/8/8/8/8/5b2/6q1/7K w - - 0 1");
        let moves = get_valid_moves(&mut g);
        assert!(moves.is_empty());
        assert!(g.check_mate);
        assert!(!g.stale_mate);
    }

    #[test]
    fn boxed_in_king_is_stalemate() {
        let mut g = game("k7/2Q5/1K6/8/8/8/8/8 b - - 0 1");
        let moves = get_valid_moves(&mut g);
        assert!(moves.is_empty());
        assert!(g.stale_mate);
        assert!(!g.check_mate);
    }

    #[test]
    fn pinned_piece_may_not_leave_the_line() {
        let mut g = game("4r1k1/8/8/8/8/8/4N3/4K3 w - - 0 1");
        let moves = get_valid_moves(&mut g);
        assert!(moves.iter().all(|mv| mv.from != Square::new(6, 4)));
    }

    #[test]
    fn no_legal_move_leaves_own_king_attacked() {
        let mut g = game("r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1");
        let mover = g.side_to_move;
        for mv in get_valid_moves(&mut g) {
            g.make_move(mv);
            assert!(
                !is_square_attacked(&g, g.king_square(mover), mover.opposite()),
                "{mv} exposes the king"
            );
            g.undo_move();
        }
    }

    #[test]
    fn horizontally_pinned_en_passant_is_rejected() {
        // Capturing e.p. would clear both pawns off the fifth rank and expose the king.
        let mut g = game("8/8/8/K2pP2r/8/8/8/7k w - d6 0 1");
        let moves = get_valid_moves(&mut g);
        assert!(moves.iter().all(|mv| !mv.is_en_passant));
    }

    #[test]
    fn undo_after_terminal_clears_flags() {
        let mut g = GameState::new_game();
        for notation in ["f2f3", "e7e5", "g2g4", "d8h4"] {
            let mv = g.find_valid_move(notation).expect("fool's mate line is legal");
            g.make_move(mv);
        }
        assert!(get_valid_moves(&mut g).is_empty());
        assert!(g.check_mate);

        g.undo_move();
        assert!(!g.check_mate);
        assert!(!g.stale_mate);
    }
}
