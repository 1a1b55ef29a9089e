//! Off-thread search.
//!
//! A `SearchWorker` owns a snapshot of the game and runs one engine call on a
//! background thread, so an interactive caller is never blocked while the
//! engine thinks. The result travels back through a single-slot channel and
//! is handed out exactly once. Cancelling simply detaches: the worker holds
//! no shared state, finishes on its own copy, and its late result is dropped.

use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread::{self, JoinHandle};

use crate::chess_errors::{ChessError, ChessResult};
use crate::engines::engine_trait::{Engine, EngineOutput, SearchParams};
use crate::game_state::game_state::GameState;
use crate::moves::move_descriptions::ChessMove;

/// Everything a worker needs; owned, so nothing is shared with the caller.
#[derive(Debug, Clone)]
pub struct SearchRequest {
    pub game_state: GameState,
    pub valid_moves: Vec<ChessMove>,
    pub params: SearchParams,
}

impl SearchRequest {
    /// Snapshots `game_state` together with its freshly generated legal moves.
    pub fn snapshot(game_state: &GameState, params: SearchParams) -> Self {
        let mut game_state = game_state.clone();
        let valid_moves = game_state.get_valid_moves();
        Self {
            game_state,
            valid_moves,
            params,
        }
    }
}

pub struct SearchWorker {
    receiver: Receiver<ChessResult<EngineOutput>>,
    handle: Option<JoinHandle<()>>,
    delivered: bool,
}

impl SearchWorker {
    pub fn spawn(mut engine: Box<dyn Engine>, request: SearchRequest) -> Self {
        let (sender, receiver) = mpsc::sync_channel(1);

        let handle = thread::spawn(move || {
            let result = engine.choose_move(&request.game_state, &request.valid_moves, &request.params);
            // The caller may have cancelled; a closed channel is fine.
            let _ = sender.send(result);
        });

        Self {
            receiver,
            handle: Some(handle),
            delivered: false,
        }
    }

    /// Non-blocking check. Returns the result the first time it is available
    /// and `None` before that and on every later call.
    pub fn poll(&mut self) -> Option<ChessResult<EngineOutput>> {
        if self.delivered {
            return None;
        }

        let result = match self.receiver.try_recv() {
            Ok(result) => result,
            Err(TryRecvError::Empty) => return None,
            Err(TryRecvError::Disconnected) => Err(ChessError::WorkerDisconnected),
        };
        self.delivered = true;
        self.join();
        Some(result)
    }

    /// Blocks until the worker answers.
    pub fn wait(mut self) -> ChessResult<EngineOutput> {
        if self.delivered {
            return Err(ChessError::WorkerDisconnected);
        }

        let result = self
            .receiver
            .recv()
            .map_err(|_| ChessError::WorkerDisconnected)
            .and_then(|result| result);
        self.delivered = true;
        self.join();
        result
    }

    /// Abandons the search. The thread is detached and its result discarded.
    pub fn cancel(mut self) {
        self.handle.take();
    }

    fn join(&mut self) {
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engines::engine_minimax::MinimaxEngine;
    use crate::engines::engine_random::RandomEngine;

    #[test]
    fn worker_delivers_exactly_once() {
        let game = GameState::from_fen("6k1/5ppp/8/8/8/8/8/R5K1 w - - 0 1").expect("FEN should parse");
        let request = SearchRequest::snapshot(&game, SearchParams { depth: Some(2) });
        let mut worker = SearchWorker::spawn(Box::new(MinimaxEngine::new_material(2).with_seed(5)), request);

        let result = loop {
            if let Some(result) = worker.poll() {
                break result;
            }
            std::thread::yield_now();
        };
        let out = result.expect("worker should succeed");
        assert_eq!(
            out.best_move.map(|mv| mv.get_chess_notation()),
            Some("a1a8".to_owned())
        );
        assert!(worker.poll().is_none());
    }

    #[test]
    fn wait_blocks_for_the_result() {
        let game = GameState::new_game();
        let request = SearchRequest::snapshot(&game, SearchParams::default());
        let moves = request.valid_moves.clone();
        let worker = SearchWorker::spawn(Box::new(RandomEngine::with_seed(9)), request);

        let out = worker.wait().expect("worker should succeed");
        assert!(moves.contains(&out.best_move.expect("a move should be chosen")));
    }

    #[test]
    fn engine_errors_pass_through() {
        let game = GameState::from_fen("k7/2Q5/1K6/8/8/8/8/8 b - - 0 1").expect("FEN should parse");
        let request = SearchRequest::snapshot(&game, SearchParams::default());
        assert!(request.valid_moves.is_empty());
        let worker = SearchWorker::spawn(Box::new(RandomEngine::with_seed(9)), request);
        assert_eq!(
            worker.wait().map(|out| out.best_move),
            Err(ChessError::NoLegalMoves)
        );
    }

    #[test]
    fn cancel_leaves_the_callers_state_alone() {
        let game = GameState::new_game();
        let before = game.clone();
        let worker = SearchWorker::spawn(
            Box::new(MinimaxEngine::new_material(1)),
            SearchRequest::snapshot(&game, SearchParams::default()),
        );
        worker.cancel();
        assert_eq!(game, before);
    }
}
