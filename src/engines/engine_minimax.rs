//! Fixed-depth minimax engine.
//!
//! Searches a private copy of the state, so the caller's `GameState` is never
//! touched and the engine can run on a worker thread.

use log::warn;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::chess_errors::ChessResult;
use crate::engines::engine_trait::{Engine, EngineOutput, SearchParams};
use crate::game_state::game_state::GameState;
use crate::moves::move_descriptions::ChessMove;
use crate::search::board_scoring::{BoardScorer, MaterialScorer};
use crate::search::minimax::{find_random_move, search_min_max, DEFAULT_SEARCH_DEPTH};

pub struct MinimaxEngine {
    scorer: Box<dyn BoardScorer>,
    depth: u8,
    rng: StdRng,
}

impl MinimaxEngine {
    pub fn new(scorer: impl BoardScorer + 'static, depth: u8) -> Self {
        Self {
            scorer: Box::new(scorer),
            depth: depth.max(1),
            rng: StdRng::from_rng(&mut rand::rng()),
        }
    }

    pub fn new_material(depth: u8) -> Self {
        Self::new(MaterialScorer, depth)
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    #[inline]
    pub fn depth(&self) -> u8 {
        self.depth
    }
}

impl Default for MinimaxEngine {
    fn default() -> Self {
        Self::new_material(DEFAULT_SEARCH_DEPTH)
    }
}

impl Engine for MinimaxEngine {
    fn name(&self) -> &str {
        "GridChess Minimax"
    }

    fn choose_move(
        &mut self,
        game_state: &GameState,
        valid_moves: &[ChessMove],
        params: &SearchParams,
    ) -> ChessResult<EngineOutput> {
        let mut out = EngineOutput::default();
        if valid_moves.is_empty() {
            return Ok(out);
        }

        let depth = params.depth.unwrap_or(self.depth).max(1);

        let mut candidates = valid_moves.to_vec();
        candidates.shuffle(&mut self.rng);

        let mut scratch = game_state.clone();
        let outcome = search_min_max(&mut scratch, &candidates, depth, self.scorer.as_ref());
        out.info_lines.push(format!(
            "info depth {depth} nodes {} score {}",
            outcome.nodes, outcome.score
        ));

        out.best_move = match outcome.best_move {
            Some(mv) => Some(mv),
            None => {
                warn!("minimax found no move among {} candidates, falling back to random", candidates.len());
                find_random_move(&candidates, &mut self.rng)
            }
        };
        Ok(out)
    }
}
