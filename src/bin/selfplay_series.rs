//! Standalone seeded self-play series runner.
//!
//! Run with:
//! `cargo run --release --bin selfplay_series`
//! `cargo run --release --bin selfplay_series -- --verbose`

use chrono::Local;

use oak_draughts::utils::render_board::render_board;
use oak_draughts::utils::selfplay_harness::{
    play_random_game, play_random_series, GameConfig, SeriesConfig,
};

fn main() {
    let verbose = std::env::args().any(|a| a == "--verbose" || a == "-v");

    let config = SeriesConfig {
        games: 20,
        base_seed: 1234,
        per_game: GameConfig { max_plies: 500 },
    };

    let stats = play_random_series(config);

    println!(
        "self-play series finished {}",
        Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    println!("{}", stats.report());
    println!("outcomes: {:?}", stats.outcomes);

    if verbose {
        for game_index in 0..config.games {
            let seed = config.base_seed.wrapping_add(game_index as u64);
            let record = play_random_game(seed, config.per_game);
            println!(
                "seed {seed}: {:?} after {} plies, {} captures",
                record.outcome, record.plies, record.captures
            );
            println!("{}", render_board(record.final_engine.board()));
        }
    }
}
