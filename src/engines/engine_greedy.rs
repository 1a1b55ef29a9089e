//! Two-ply greedy engine: minimizes the opponent's best material reply.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::chess_errors::ChessResult;
use crate::engines::engine_trait::{Engine, EngineOutput, SearchParams};
use crate::game_state::game_state::GameState;
use crate::moves::move_descriptions::ChessMove;
use crate::search::minimax::{find_best_move_greedy, find_random_move};

pub struct GreedyEngine {
    rng: StdRng,
}

impl GreedyEngine {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_rng(&mut rand::rng()),
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for GreedyEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for GreedyEngine {
    fn name(&self) -> &str {
        "GridChess Greedy"
    }

    fn choose_move(
        &mut self,
        game_state: &GameState,
        valid_moves: &[ChessMove],
        _params: &SearchParams,
    ) -> ChessResult<EngineOutput> {
        let mut out = EngineOutput::default();
        out.info_lines.push(format!(
            "info string greedy_engine legal_moves {}",
            valid_moves.len()
        ));

        if valid_moves.is_empty() {
            return Ok(out);
        }

        // Shuffle so equal-scoring moves vary from game to game.
        let mut candidates = valid_moves.to_vec();
        candidates.shuffle(&mut self.rng);

        let mut scratch = game_state.clone();
        out.best_move = find_best_move_greedy(&mut scratch, &candidates)
            .or_else(|| find_random_move(&candidates, &mut self.rng));
        Ok(out)
    }
}
