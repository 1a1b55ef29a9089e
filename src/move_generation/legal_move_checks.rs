//! King-safety oracle.
//!
//! Everything that asks "is this square attacked?" goes through
//! `is_square_attacked`, so the scan below can later be replaced by an
//! incrementally maintained attack map without touching any caller.
//! Pawns attack their forward diagonals whether or not the target is occupied,
//! which is what castle-path checks on empty squares need.

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_shared::first_piece_along;
use crate::moves::bishop_moves::BISHOP_DIRECTIONS;
use crate::moves::king_moves::king_targets;
use crate::moves::knight_moves::knight_targets;
use crate::moves::pawn_moves::{pawn_forward, PAWN_CAPTURE_COLUMNS};
use crate::moves::rook_moves::ROOK_DIRECTIONS;

/// True if any `attacker_color` piece attacks `square`. The occupant of
/// `square` itself is ignored.
pub fn is_square_attacked(game_state: &GameState, square: Square, attacker_color: Color) -> bool {
    let is_attacker = |sq: Square, kinds: &[PieceKind]| {
        matches!(game_state.piece_at(sq), Some(p) if p.color == attacker_color && kinds.contains(&p.kind))
    };

    // A pawn attacks from one row behind the target, relative to its own direction.
    let pawn_row_step = -pawn_forward(attacker_color);
    if PAWN_CAPTURE_COLUMNS
        .iter()
        .filter_map(|&d_col| square.offset(pawn_row_step, d_col))
        .any(|sq| is_attacker(sq, &[PieceKind::Pawn]))
    {
        return true;
    }

    if knight_targets(square).any(|sq| is_attacker(sq, &[PieceKind::Knight])) {
        return true;
    }

    if king_targets(square).any(|sq| is_attacker(sq, &[PieceKind::King])) {
        return true;
    }

    let straight = [PieceKind::Rook, PieceKind::Queen];
    if ROOK_DIRECTIONS.iter().any(|&dir| {
        first_piece_along(game_state, square, dir)
            .is_some_and(|(sq, _)| is_attacker(sq, &straight))
    }) {
        return true;
    }

    let diagonal = [PieceKind::Bishop, PieceKind::Queen];
    BISHOP_DIRECTIONS.iter().any(|&dir| {
        first_piece_along(game_state, square, dir)
            .is_some_and(|(sq, _)| is_attacker(sq, &diagonal))
    })
}

/// True if the side *not* to move attacks `square`.
#[inline]
pub fn square_under_attack(game_state: &GameState, square: Square) -> bool {
    is_square_attacked(game_state, square, game_state.side_to_move.opposite())
}

#[inline]
pub fn in_check(game_state: &GameState, color: Color) -> bool {
    is_square_attacked(game_state, game_state.king_square(color), color.opposite())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game(fen: &str) -> GameState {
        GameState::from_fen(fen).expect("test FEN should parse")
    }

    #[test]
    fn start_position_has_no_check() {
        let g = GameState::new_game();
        assert!(!in_check(&g, Color::Light));
        assert!(!in_check(&g, Color::Dark));
    }

    #[test]
    fn pawn_attacks_diagonals_even_when_empty() {
        // Dark pawn on d5 attacks c4 and e4 (rows grow toward light's side).
        let g = game("4k3/8/8/3p4/8/8/8/4K3 w - - 0 1");
        assert!(is_square_attacked(&g, Square::new(4, 2), Color::Dark));
        assert!(is_square_attacked(&g, Square::new(4, 4), Color::Dark));
        assert!(!is_square_attacked(&g, Square::new(4, 3), Color::Dark));
        assert!(!is_square_attacked(&g, Square::new(2, 2), Color::Dark));
    }

    #[test]
    fn sliders_are_blocked_by_any_piece() {
        let g = game("4k3/8/8/8/r2P3K/8/8/8 w - - 0 1");
        // Rook on a4 is blocked by the pawn on d4 before reaching h4.
        assert!(!in_check(&g, Color::Light));
        assert!(is_square_attacked(&g, Square::new(4, 3), Color::Dark));
    }

    #[test]
    fn queen_checks_along_diagonal() {
        let g = game("k7/8/8/8/8/8/6q1/7K w - - 0 1");
        assert!(in_check(&g, Color::Light));
        assert!(square_under_attack(&g, Square::new(7, 7)));
    }

    #[test]
    fn knight_and_king_attacks() {
        let g = game("4k3/8/8/8/8/5n2/8/4K3 w - - 0 1");
        assert!(in_check(&g, Color::Light));
        assert!(is_square_attacked(&g, Square::new(1, 4), Color::Dark));
    }
}
