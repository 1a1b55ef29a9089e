//! Random-move engine.
//!
//! Selects uniformly from the legal moves. Used as the search fallback and
//! for diagnostics and low-strength play.

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::chess_errors::{ChessError, ChessResult};
use crate::engines::engine_trait::{Engine, EngineOutput, SearchParams};
use crate::game_state::game_state::GameState;
use crate::moves::move_descriptions::ChessMove;
use crate::search::minimax::find_random_move;

pub struct RandomEngine {
    rng: StdRng,
}

impl RandomEngine {
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

impl Default for RandomEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for RandomEngine {
    fn name(&self) -> &str {
        "GridChess Random"
    }

    fn choose_move(
        &mut self,
        _game_state: &GameState,
        valid_moves: &[ChessMove],
        _params: &SearchParams,
    ) -> ChessResult<EngineOutput> {
        let picked = find_random_move(valid_moves, &mut self.rng).ok_or(ChessError::NoLegalMoves)?;

        Ok(EngineOutput {
            best_move: Some(picked),
            info_lines: vec![format!(
                "info string random_engine legal_moves {}",
                valid_moves.len()
            )],
        })
    }
}
