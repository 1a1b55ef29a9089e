//! Standalone engine-vs-engine series runner.
//!
//! Run with:
//! `cargo run --release --bin engine_match_series`
//! `cargo run --release --bin engine_match_series -- --verbose --games 6 --depth 2`
//!
//! `RUST_LOG=info` shows per-game outcomes, `RUST_LOG=debug` the search roots.

use grid_chess::engines::engine_greedy::GreedyEngine;
use grid_chess::engines::engine_minimax::MinimaxEngine;
use grid_chess::engines::engine_trait::{Engine, SearchParams};
use grid_chess::search::minimax::DEFAULT_SEARCH_DEPTH;
use grid_chess::utils::engine_match_harness::{
    play_engine_match_series, MatchConfig, MatchSeriesConfig,
};

fn flag_value(args: &[String], name: &str) -> Result<Option<u32>, String> {
    let Some(pos) = args.iter().position(|a| a == name) else {
        return Ok(None);
    };
    let raw = args
        .get(pos + 1)
        .ok_or_else(|| format!("{name} expects a value"))?;
    raw.parse::<u32>()
        .map(Some)
        .map_err(|e| format!("invalid value for {name}: {raw} ({e})"))
}

fn main() -> Result<(), String> {
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let verbose = args.iter().any(|a| a == "--verbose" || a == "-v");
    let games = flag_value(&args, "--games")?.unwrap_or(10);
    let depth = flag_value(&args, "--depth")?.unwrap_or(u32::from(DEFAULT_SEARCH_DEPTH));

    let games = u16::try_from(games).map_err(|_| format!("--games out of range: {games}"))?;
    let depth = u8::try_from(depth).map_err(|_| format!("--depth out of range: {depth}"))?;

    let player1 = move || Box::new(MinimaxEngine::new_material(depth)) as Box<dyn Engine>;
    let player2 = || Box::new(GreedyEngine::new()) as Box<dyn Engine>;

    let config = MatchSeriesConfig {
        games,
        base_seed: 1234,
        per_game: MatchConfig {
            max_plies: 200,
            params: SearchParams { depth: Some(depth) },
            ..MatchConfig::default()
        },
        verbose,
    };

    let stats = play_engine_match_series(player1, player2, &config).map_err(|e| e.to_string())?;

    println!("{}", stats.report());
    println!("outcomes: {:?}", stats.outcomes);
    Ok(())
}
