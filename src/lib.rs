//! # Dragon's Bane - a terminal text adventure
//!
//! Explore a procedurally filled world map, talk to its people, pick up what
//! you find and gather the three medallions before the wilds wear you down.
//!
//! ## Features
//!
//! - **Seeded World Generation**: A walkable centre cross, random connecting paths, fixed quest landmarks and randomly populated filler.
//! - **Sub-Maps**: The Village of Hope opens into its own 5x5 map; a navigation stack brings you back out where you went in.
//! - **Quests**: Positional and item-reward quests, plus quests granted through NPC dialogue.
//! - **Hazards**: Some places drain health every turn you stay in them.
//! - **Save Slot**: JSON save written atomically under an exclusive file lock.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use dragons_bane::config::Config;
//! use dragons_bane::game::{GameSession, SaveStore, Terminal};
//!
//! fn main() -> anyhow::Result<()> {
//!     let config = Config::default();
//!     let store = SaveStore::new(config.storage.data_path(), &config.storage.save_slot);
//!     let mut session = GameSession::new_game("Aria", &config.game, 42, store);
//!
//!     let stdin = std::io::stdin();
//!     let mut term = Terminal::new(stdin.lock(), std::io::stdout().lock(), 0);
//!     term.run(&mut session)?;
//!     Ok(())
//! }
//! ```
//!
//! ## Module Organization
//!
//! - [`world`] - Positions, items, quests, locations, grids and the player
//! - [`game`] - Command parsing, dialogue, the turn loop, saving and the terminal driver
//! - [`config`] - Configuration loading and validation
//! - [`errors`] - Error types shared across the crate
//! - [`validation`] - Player name checks and save filename encoding

pub mod config;
pub mod errors;
pub mod game;
pub mod validation;
pub mod world;
