//! Test utilities & fixtures.
//! Sessions here always use a temp data dir so saves never touch the repo.

use dragons_bane::config::GameConfig;
use dragons_bane::game::{GameSession, SaveStore};
use dragons_bane::world::{Location, Player, Position, WorldGrid};

/// Seed used by tests that need a generated world.
#[allow(dead_code)]
pub const SEED: u64 = 42;

/// Default game settings with the intro delay switched off.
#[allow(dead_code)]
pub fn game_config() -> GameConfig {
    GameConfig {
        typewriter_delay_ms: 0,
        ..GameConfig::default()
    }
}

#[allow(dead_code)]
pub fn store(td: &tempfile::TempDir) -> SaveStore {
    SaveStore::new(td.path(), "gamesave")
}

/// New game on the default 15x15 world.
#[allow(dead_code)]
pub fn new_session(td: &tempfile::TempDir, seed: u64) -> GameSession {
    GameSession::new_game("Aria", &game_config(), seed, store(td))
}

/// A hand-built strip of locations along y = 0, named left to right.
#[allow(dead_code)]
pub fn strip_session(td: &tempfile::TempDir, names: &[&str], start_x: i32) -> GameSession {
    let mut grid = WorldGrid::empty(names.len(), 3);
    for (x, name) in names.iter().enumerate() {
        grid.set_location(
            Position::new(x as i32, 0),
            Location::new(*name, format!("Somewhere called {}.", name)),
        );
    }
    let player = Player::new("Aria", Position::new(start_x, 0));
    GameSession::from_parts(player, grid, store(td))
}
