//! Minimal head-to-head engine match harness for local testing.
//!
//! Runs two `Engine` implementations against each other on one `GameState`,
//! with an optional seeded random opening prefix so a series does not replay
//! the same game over and over.

use std::time::Instant;

use chrono::{DateTime, Local};
use log::info;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::chess_errors::{ChessError, ChessResult};
use crate::engines::engine_trait::{Engine, SearchParams};
use crate::game_state::chess_types::Color;
use crate::game_state::game_state::GameState;
use crate::search::minimax::find_random_move;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOutcome {
    LightWinCheckmate,
    DarkWinCheckmate,
    DrawStalemate,
    DrawMaxPlies,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerId {
    Player1,
    Player2,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeriesOutcome {
    PlayerWinCheckmate { player: PlayerId, color: Color },
    DrawStalemate,
    DrawMaxPlies,
}

#[derive(Debug, Clone)]
pub struct MatchConfig {
    pub max_plies: u16,
    /// Random plies played before the engines take over.
    pub opening_random_plies: u8,
    pub params: SearchParams,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            max_plies: 200,
            opening_random_plies: 2,
            params: SearchParams::default(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct MatchResult {
    pub outcome: MatchOutcome,
    pub started_at: DateTime<Local>,
    pub final_state: GameState,
    pub opening_moves: Vec<String>,
    pub played_moves: Vec<String>,
    pub light_move_count: u32,
    pub dark_move_count: u32,
    pub light_total_time_ns: u128,
    pub dark_total_time_ns: u128,
}

#[derive(Debug, Clone)]
pub struct MatchSeriesConfig {
    pub games: u16,
    pub base_seed: u64,
    pub per_game: MatchConfig,
    pub verbose: bool,
}

impl Default for MatchSeriesConfig {
    fn default() -> Self {
        Self {
            games: 4,
            base_seed: 0,
            per_game: MatchConfig::default(),
            verbose: false,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct MatchSeriesStats {
    pub games: u16,
    pub player1_wins: u16,
    pub player2_wins: u16,
    pub draws: u16,
    pub outcomes: Vec<SeriesOutcome>,
    pub player1_moves: u32,
    pub player2_moves: u32,
    pub player1_total_time_ns: u128,
    pub player2_total_time_ns: u128,
}

impl MatchSeriesStats {
    pub fn report(&self) -> String {
        format!(
            "games={} player1_wins={} player2_wins={} draws={} p1_avg_ms={:.3} p2_avg_ms={:.3}",
            self.games,
            self.player1_wins,
            self.player2_wins,
            self.draws,
            average_ms(self.player1_total_time_ns, self.player1_moves),
            average_ms(self.player2_total_time_ns, self.player2_moves)
        )
    }
}

fn average_ms(total_ns: u128, moves: u32) -> f64 {
    if moves == 0 {
        0.0
    } else {
        total_ns as f64 / f64::from(moves) / 1_000_000.0
    }
}

/// Play a single seeded engine-vs-engine match from the starting position.
pub fn play_engine_match(
    engine_light: &mut dyn Engine,
    engine_dark: &mut dyn Engine,
    seed: u64,
    config: &MatchConfig,
) -> ChessResult<MatchResult> {
    let started_at = Local::now();
    let mut state = GameState::new_game();
    let mut rng = StdRng::seed_from_u64(seed);

    engine_light.new_game();
    engine_dark.new_game();

    let mut opening_moves = Vec::new();
    for _ in 0..config.opening_random_plies {
        let moves = state.get_valid_moves();
        let Some(mv) = find_random_move(&moves, &mut rng) else {
            break;
        };
        opening_moves.push(mv.get_chess_notation());
        state.make_move(mv);
    }

    let mut result = MatchResult {
        outcome: MatchOutcome::DrawMaxPlies,
        started_at,
        final_state: GameState::new_empty(),
        opening_moves,
        played_moves: Vec::new(),
        light_move_count: 0,
        dark_move_count: 0,
        light_total_time_ns: 0,
        dark_total_time_ns: 0,
    };

    for _ in 0..config.max_plies {
        let legal_moves = state.get_valid_moves();
        if legal_moves.is_empty() {
            result.outcome = if state.check_mate {
                match state.side_to_move {
                    Color::Light => MatchOutcome::DarkWinCheckmate,
                    Color::Dark => MatchOutcome::LightWinCheckmate,
                }
            } else {
                MatchOutcome::DrawStalemate
            };
            break;
        }

        let mover = state.side_to_move;
        let started = Instant::now();
        let out = match mover {
            Color::Light => engine_light.choose_move(&state, &legal_moves, &config.params)?,
            Color::Dark => engine_dark.choose_move(&state, &legal_moves, &config.params)?,
        };
        let elapsed_ns = started.elapsed().as_nanos();

        match mover {
            Color::Light => {
                result.light_move_count += 1;
                result.light_total_time_ns += elapsed_ns;
            }
            Color::Dark => {
                result.dark_move_count += 1;
                result.dark_total_time_ns += elapsed_ns;
            }
        }

        let chosen = out.best_move.ok_or(ChessError::NoLegalMoves)?;
        // Engines hand back a copy; play the generator's own instance.
        let Some(legal) = legal_moves.iter().copied().find(|mv| *mv == chosen) else {
            return Err(ChessError::InvalidMove(format!(
                "engine returned illegal move {chosen}"
            )));
        };

        result.played_moves.push(legal.get_chess_notation());
        state.make_move(legal);
    }

    info!(
        "match seed {seed} finished {:?} after {} plies",
        result.outcome,
        state.game_log().len()
    );
    result.final_state = state;
    Ok(result)
}

/// Play a series of matches and aggregate win/loss/draw statistics.
///
/// Player colors are randomized each game (deterministic from `base_seed`).
pub fn play_engine_match_series<F1, F2>(
    player1_factory: F1,
    player2_factory: F2,
    config: &MatchSeriesConfig,
) -> ChessResult<MatchSeriesStats>
where
    F1: Fn() -> Box<dyn Engine>,
    F2: Fn() -> Box<dyn Engine>,
{
    let mut stats = MatchSeriesStats {
        games: config.games,
        ..MatchSeriesStats::default()
    };
    let mut color_rng = StdRng::seed_from_u64(config.base_seed ^ 0xA5A5_5A5A_0123_4567);

    for i in 0..config.games {
        let player1_is_light = color_rng.random_bool(0.5);
        let seed = config.base_seed.wrapping_add(u64::from(i));

        let mut player1 = player1_factory();
        let mut player2 = player2_factory();
        if config.verbose {
            let (light, dark) = if player1_is_light {
                (player1.name().to_owned(), player2.name().to_owned())
            } else {
                (player2.name().to_owned(), player1.name().to_owned())
            };
            println!(
                "[series] game {}/{} seed={seed} light={light} dark={dark}",
                i + 1,
                config.games
            );
        }

        let result = if player1_is_light {
            play_engine_match(player1.as_mut(), player2.as_mut(), seed, &config.per_game)?
        } else {
            play_engine_match(player2.as_mut(), player1.as_mut(), seed, &config.per_game)?
        };

        let (p1_moves, p1_time, p2_moves, p2_time) = if player1_is_light {
            (
                result.light_move_count,
                result.light_total_time_ns,
                result.dark_move_count,
                result.dark_total_time_ns,
            )
        } else {
            (
                result.dark_move_count,
                result.dark_total_time_ns,
                result.light_move_count,
                result.light_total_time_ns,
            )
        };
        stats.player1_moves += p1_moves;
        stats.player1_total_time_ns += p1_time;
        stats.player2_moves += p2_moves;
        stats.player2_total_time_ns += p2_time;

        let series_outcome = match result.outcome {
            MatchOutcome::LightWinCheckmate | MatchOutcome::DarkWinCheckmate => {
                let winner_color = if result.outcome == MatchOutcome::LightWinCheckmate {
                    Color::Light
                } else {
                    Color::Dark
                };
                let player = if (winner_color == Color::Light) == player1_is_light {
                    stats.player1_wins += 1;
                    PlayerId::Player1
                } else {
                    stats.player2_wins += 1;
                    PlayerId::Player2
                };
                SeriesOutcome::PlayerWinCheckmate {
                    player,
                    color: winner_color,
                }
            }
            MatchOutcome::DrawStalemate => {
                stats.draws += 1;
                SeriesOutcome::DrawStalemate
            }
            MatchOutcome::DrawMaxPlies => {
                stats.draws += 1;
                SeriesOutcome::DrawMaxPlies
            }
        };

        if config.verbose {
            println!(
                "[series] game {} started {} outcome {:?} moves: {}",
                i + 1,
                result.started_at.format("%Y-%m-%d %H:%M:%S"),
                series_outcome,
                result.played_moves.join(" ")
            );
        }
        stats.outcomes.push(series_outcome);
    }

    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engines::engine_greedy::GreedyEngine;
    use crate::engines::engine_random::RandomEngine;

    #[test]
    fn random_match_ends_within_ply_limit() {
        let mut light = RandomEngine::with_seed(1);
        let mut dark = RandomEngine::with_seed(2);
        let config = MatchConfig {
            max_plies: 40,
            ..MatchConfig::default()
        };

        let result = play_engine_match(&mut light, &mut dark, 17, &config).expect("match should run");
        assert_eq!(result.opening_moves.len(), 2);
        assert!(result.played_moves.len() <= 40);
        assert_eq!(
            result.final_state.game_log().len(),
            result.opening_moves.len() + result.played_moves.len()
        );
        assert_eq!(
            (result.light_move_count + result.dark_move_count) as usize,
            result.played_moves.len()
        );
    }

    #[test]
    fn series_accounts_for_every_game() {
        let config = MatchSeriesConfig {
            games: 2,
            base_seed: 99,
            per_game: MatchConfig {
                max_plies: 12,
                ..MatchConfig::default()
            },
            verbose: false,
        };

        let stats = play_engine_match_series(
            || Box::new(GreedyEngine::with_seed(4)) as Box<dyn Engine>,
            || Box::new(RandomEngine::with_seed(5)) as Box<dyn Engine>,
            &config,
        )
        .expect("series should run");

        assert_eq!(stats.outcomes.len(), 2);
        assert_eq!(stats.player1_wins + stats.player2_wins + stats.draws, 2);
        assert!(stats.report().starts_with("games=2 "));
    }
}
