//! Move generation seam used by perft and the engines.

use crate::game_state::game_state::GameState;
use crate::moves::move_descriptions::ChessMove;

pub trait MoveGenerator: Send + Sync {
    /// Legal moves for the side to move. May refresh the state's terminal
    /// flags, but leaves the position itself as it found it.
    fn generate_legal_moves(&self, game_state: &mut GameState) -> Vec<ChessMove>;
}
