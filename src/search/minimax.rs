//! Move selection for the automated player.
//!
//! `find_best_move_min_max` is a fixed-depth negamax: each node maximizes the
//! negation of its children's scores, seen from the side to move there.
//! Terminal positions are detected at every node, leaves included: a side to
//! move with no legal moves scores `-CHECKMATE` if it is in check and
//! `STALEMATE` otherwise. Non-terminal leaves use the static scorer.
//! There is no pruning, no transposition table and no time cutoff.

use log::{debug, trace};
use rand::prelude::IndexedRandom;
use rand::Rng;

use crate::game_state::game_state::GameState;
use crate::moves::move_descriptions::ChessMove;
use crate::search::board_scoring::{BoardScorer, MaterialScorer, CHECKMATE, STALEMATE};

pub const DEFAULT_SEARCH_DEPTH: u8 = 3;

/// Result of one top-level search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchOutcome {
    /// Best score, signed positive-for-light.
    pub score: i32,
    /// Root move reaching `score`; `None` only for an empty root list.
    pub best_move: Option<ChessMove>,
    pub nodes: u64,
}

/// Scratch owned by a single top-level search.
struct SearchContext<'a> {
    scorer: &'a dyn BoardScorer,
    nodes: u64,
}

/// Uniform pick; `None` for an empty list.
pub fn find_random_move<R: Rng + ?Sized>(valid_moves: &[ChessMove], rng: &mut R) -> Option<ChessMove> {
    valid_moves.choose(rng).copied()
}

/// Best move by material negamax at `depth` plies (at least one).
///
/// Ties keep the first move seen, so with a unique best score the result does
/// not depend on the order of `valid_moves`.
pub fn find_best_move_min_max(
    game_state: &mut GameState,
    valid_moves: &[ChessMove],
    depth: u8,
) -> Option<ChessMove> {
    search_min_max(game_state, valid_moves, depth, &MaterialScorer).best_move
}

pub fn search_min_max(
    game_state: &mut GameState,
    valid_moves: &[ChessMove],
    depth: u8,
    scorer: &dyn BoardScorer,
) -> SearchOutcome {
    let depth = depth.max(1);
    let turn_multiplier = game_state.side_to_move.sign();
    let mut ctx = SearchContext { scorer, nodes: 0 };

    let mut best_score = -CHECKMATE - 1;
    let mut best_move = None;

    for &mv in valid_moves {
        game_state.make_move(mv);
        let replies = game_state.get_valid_moves();
        let score = -negamax(&mut ctx, game_state, &replies, depth - 1);
        game_state.undo_move();

        trace!("root move {mv} scored {score}");
        if score > best_score {
            best_score = score;
            best_move = Some(mv);
        }
    }

    let outcome = SearchOutcome {
        score: if best_move.is_some() {
            best_score * turn_multiplier
        } else {
            0
        },
        best_move,
        nodes: ctx.nodes,
    };

    debug!(
        "minimax depth {depth} visited {} nodes, best {:?} score {}",
        outcome.nodes,
        outcome.best_move.map(|mv| mv.get_chess_notation()),
        outcome.score
    );

    outcome
}

/// Score of the position for its side to move. `valid_moves` must be the
/// legal list just generated for `game_state`, which keeps the terminal flags fresh.
fn negamax(ctx: &mut SearchContext<'_>, game_state: &mut GameState, valid_moves: &[ChessMove], depth: u8) -> i32 {
    ctx.nodes += 1;

    if valid_moves.is_empty() {
        return if game_state.check_mate { -CHECKMATE } else { STALEMATE };
    }

    if depth == 0 {
        return game_state.side_to_move.sign() * ctx.scorer.score(&game_state.board);
    }

    let mut best_score = -CHECKMATE - 1;
    for &mv in valid_moves {
        game_state.make_move(mv);
        let replies = game_state.get_valid_moves();
        let score = -negamax(ctx, game_state, &replies, depth - 1);
        game_state.undo_move();

        if score > best_score {
            best_score = score;
        }
    }

    best_score
}

/// Two-ply greedy choice: pick the move whose best opponent reply is least
/// bad for us, scoring replies by material and by terminal state.
pub fn find_best_move_greedy(game_state: &mut GameState, valid_moves: &[ChessMove]) -> Option<ChessMove> {
    let turn_multiplier = game_state.side_to_move.sign();
    let scorer = MaterialScorer;

    let mut opponent_min_max_score = CHECKMATE + 1;
    let mut best_move = None;

    for &player_move in valid_moves {
        game_state.make_move(player_move);
        let opponent_moves = game_state.get_valid_moves();

        let opponent_max_score = if game_state.stale_mate {
            STALEMATE
        } else if game_state.check_mate {
            -CHECKMATE
        } else {
            let mut opponent_max_score = -CHECKMATE;
            for &opponent_move in &opponent_moves {
                game_state.make_move(opponent_move);
                game_state.get_valid_moves();

                let score = if game_state.check_mate {
                    CHECKMATE
                } else if game_state.stale_mate {
                    STALEMATE
                } else {
                    -turn_multiplier * scorer.score(&game_state.board)
                };
                if score > opponent_max_score {
                    opponent_max_score = score;
                }

                game_state.undo_move();
            }
            opponent_max_score
        };

        if opponent_max_score < opponent_min_max_score {
            opponent_min_max_score = opponent_max_score;
            best_move = Some(player_move);
        }

        game_state.undo_move();
    }

    debug!(
        "greedy search picked {:?} (opponent best {opponent_min_max_score})",
        best_move.map(|mv| mv.get_chess_notation())
    );
    best_move
}
