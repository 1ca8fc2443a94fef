//! Crate root module declarations for the Oak Draughts rules engine.
//!
//! This file exposes all top-level subsystems (game state, move generation,
//! errors, and utility helpers) so binaries, tests, and external front-ends
//! can import stable module paths.

pub mod game_state {
    pub mod board;
    pub mod draughts_rules;
    pub mod draughts_types;
    pub mod game_engine;
}

pub mod move_generation {
    pub mod capture_scan;
    pub mod destination_finder;
    pub mod move_apply;
}

pub mod draughts_errors;

pub mod utils {
    pub mod coordinates;
    pub mod layout;
    pub mod render_board;
    pub mod selfplay_harness;
}
