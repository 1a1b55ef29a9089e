//! Perft: exhaustive legal-move tree counting for move generator validation.

use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_generator::LegalMoveGenerator;
use crate::move_generation::move_generator::MoveGenerator;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: usize,
    pub captures: usize,
    pub en_passant: usize,
    pub castles: usize,
    pub promotions: usize,
    pub checkmates: usize,
}

pub fn perft_legal(game_state: &GameState, depth: u8) -> PerftCounts {
    let mut scratch = game_state.clone();
    perft(&LegalMoveGenerator, &mut scratch, depth)
}

/// Counts leaf nodes (and leaf-move features) `depth` plies below `game_state`.
/// The state is walked with make/undo and handed back unchanged.
pub fn perft<G: MoveGenerator>(generator: &G, game_state: &mut GameState, depth: u8) -> PerftCounts {
    let mut counts = PerftCounts::default();
    if depth == 0 {
        counts.nodes = 1;
        return counts;
    }

    perft_recurse(generator, game_state, depth, &mut counts);
    counts
}

fn perft_recurse<G: MoveGenerator>(
    generator: &G,
    game_state: &mut GameState,
    depth: u8,
    counts: &mut PerftCounts,
) {
    let moves = generator.generate_legal_moves(game_state);

    for mv in moves {
        game_state.make_move(mv);

        if depth == 1 {
            counts.nodes += 1;
            if mv.is_capture() {
                counts.captures += 1;
            }
            if mv.is_en_passant {
                counts.en_passant += 1;
            }
            if mv.is_castle {
                counts.castles += 1;
            }
            if mv.is_promotion {
                counts.promotions += 1;
            }
            if generator.generate_legal_moves(game_state).is_empty() && game_state.check_mate {
                counts.checkmates += 1;
            }
        } else {
            perft_recurse(generator, game_state, depth - 1, counts);
        }

        game_state.undo_move();
    }
}
