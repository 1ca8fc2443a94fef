//! Seeded random self-play harness for local testing.
//!
//! Plays full games by choosing uniformly among the pieces the engine will
//! accept and the destinations it offers, with a seeded RNG so runs are
//! reproducible. Used by the `selfplay_series` binary and by invariant
//! tests that sweep many positions.

use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::SeedableRng;

use crate::game_state::draughts_types::{Cell, Player};
use crate::game_state::game_engine::{GameEngine, TurnProgress};
use crate::move_generation::destination_finder::MoveKind;

/// How a self-play game ended.
///
/// `Blocked` is a harness-level outcome: the side to move still has pieces
/// but no legal move, so the harness scores it a forfeit. The engine itself
/// only terminates on elimination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Win(Player),
    Blocked(Player),
    MaxPlies,
}

#[derive(Debug, Clone, Copy)]
pub struct GameConfig {
    pub max_plies: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self { max_plies: 500 }
    }
}

/// Record of one finished self-play game.
#[derive(Debug, Clone)]
pub struct GameRecord {
    pub outcome: GameOutcome,
    pub plies: u32,
    pub captures: u32,
    pub final_engine: GameEngine,
}

#[derive(Debug, Clone, Copy)]
pub struct SeriesConfig {
    pub games: u32,
    pub base_seed: u64,
    pub per_game: GameConfig,
}

impl Default for SeriesConfig {
    fn default() -> Self {
        Self {
            games: 10,
            base_seed: 1234,
            per_game: GameConfig::default(),
        }
    }
}

/// Aggregate results of a self-play series.
#[derive(Debug, Clone, Default)]
pub struct SeriesStats {
    pub player_one_wins: u32,
    pub player_two_wins: u32,
    pub blocked_games: u32,
    pub max_ply_games: u32,
    pub total_plies: u64,
    pub total_captures: u64,
    pub outcomes: Vec<GameOutcome>,
}

impl SeriesStats {
    pub fn report(&self) -> String {
        let games = self.outcomes.len() as u64;
        let average_plies = if games == 0 {
            0
        } else {
            self.total_plies / games
        };
        format!(
            "games: {games}, P1 wins: {}, P2 wins: {}, blocked: {}, max-ply: {}, avg plies: {average_plies}, captures: {}",
            self.player_one_wins,
            self.player_two_wins,
            self.blocked_games,
            self.max_ply_games,
            self.total_captures,
        )
    }
}

/// Cells the current player may legally select this turn: the must-capture
/// set when it is non-empty, otherwise every owned piece with a destination.
fn selectable_cells(engine: &GameEngine) -> Vec<Cell> {
    if let Some(chained) = engine.selected_cell() {
        return vec![chained];
    }
    if !engine.must_capture_cells().is_empty() {
        return engine.must_capture_cells().to_vec();
    }
    engine
        .board()
        .occupied_cells()
        .filter(|(_, piece)| piece.owner == engine.current_turn())
        .filter(|(cell, _)| !engine.legal_destinations(*cell).is_empty())
        .map(|(cell, _)| cell)
        .collect()
}

/// Play one seeded random game from the starting position.
pub fn play_random_game(seed: u64, config: GameConfig) -> GameRecord {
    play_random_game_from(GameEngine::new_game(), seed, config)
}

/// Play one seeded random game from a supplied position.
pub fn play_random_game_from(engine: GameEngine, seed: u64, config: GameConfig) -> GameRecord {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut engine = engine;
    let mut plies = 0u32;
    let mut captures = 0u32;

    let outcome = loop {
        if let Some(winner) = engine.winner() {
            break GameOutcome::Win(winner);
        }
        if plies >= config.max_plies {
            break GameOutcome::MaxPlies;
        }

        let selectable = selectable_cells(&engine);
        let Some(&origin) = selectable.choose(&mut rng) else {
            break GameOutcome::Blocked(engine.current_turn());
        };
        engine
            .select_piece(origin)
            .expect("selectable cell should be accepted");

        let destinations = engine.legal_destinations(origin);
        let &destination = destinations
            .choose(&mut rng)
            .expect("selected piece should have a destination");

        if destination.kind == MoveKind::Capture {
            captures += 1;
        }
        let outcome = engine
            .apply_move(destination.cell)
            .expect("offered destination should be accepted");
        if outcome.progress == TurnProgress::TurnSwitched {
            plies += 1;
        }
    };

    GameRecord {
        outcome,
        plies,
        captures,
        final_engine: engine,
    }
}

/// Play a series of seeded games and aggregate the outcomes.
pub fn play_random_series(config: SeriesConfig) -> SeriesStats {
    let mut stats = SeriesStats::default();

    for game_index in 0..config.games {
        let seed = config.base_seed.wrapping_add(game_index as u64);
        let record = play_random_game(seed, config.per_game);

        match record.outcome {
            GameOutcome::Win(Player::One) => stats.player_one_wins += 1,
            GameOutcome::Win(Player::Two) => stats.player_two_wins += 1,
            GameOutcome::Blocked(_) => stats.blocked_games += 1,
            GameOutcome::MaxPlies => stats.max_ply_games += 1,
        }
        stats.total_plies += record.plies as u64;
        stats.total_captures += record.captures as u64;
        stats.outcomes.push(record.outcome);
    }

    stats
}
