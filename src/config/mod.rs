//! # Configuration
//!
//! Dragon's Bane reads an optional TOML file with three sections:
//!
//! - [`GameConfig`] - world size, seed, intro pacing, default hero name
//! - [`StorageConfig`] - where the save slot lives
//! - [`LoggingConfig`] - log level and optional log file
//!
//! ## Usage
//!
//! ```rust,no_run
//! use dragons_bane::config::Config;
//!
//! fn main() -> anyhow::Result<()> {
//!     let config = Config::load("config.toml")?;
//!     println!("World: {}x{}", config.game.world_width, config.game.world_height);
//!
//!     Config::create_default("config.toml")?;
//!     Ok(())
//! }
//! ```
//!
//! ## File Format
//!
//! ```toml
//! [game]
//! world_width = 15
//! world_height = 15
//! # seed = 42
//! typewriter_delay_ms = 30
//! default_player_name = "Hero"
//!
//! [storage]
//! data_dir = "./data"
//! save_slot = "gamesave"
//!
//! [logging]
//! level = "warn"
//! # file = "dragons-bane.log"
//! ```
//!
//! Every field has a default, so a partial file (or none at all) is fine.
//! Precedence for the seed is: CLI flag > config file > random.

use anyhow::{anyhow, bail, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

pub const MIN_WORLD_SIZE: usize = 5;
pub const MAX_WORLD_SIZE: usize = 64;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub game: GameConfig,
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub world_width: usize,
    pub world_height: usize,
    /// Fixed world seed. A random one is drawn per game when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    /// Per-character delay of the intro text. 0 prints it instantly.
    pub typewriter_delay_ms: u64,
    pub default_player_name: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            world_width: 15,
            world_height: 15,
            seed: None,
            typewriter_delay_ms: 30,
            default_player_name: crate::world::DEFAULT_PLAYER_NAME.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    pub data_dir: String,
    pub save_slot: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: "./data".to_string(),
            save_slot: "gamesave".to_string(),
        }
    }
}

impl StorageConfig {
    pub fn data_path(&self) -> PathBuf {
        PathBuf::from(&self.data_dir)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            file: None,
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &str) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| anyhow!("Failed to read config file {}: {}", path, e))?;

        let config: Config = toml::from_str(&content)
            .map_err(|e| anyhow!("Failed to parse config file {}: {}", path, e))?;

        config.validate()?;
        Ok(config)
    }

    /// Create a default configuration file
    pub fn create_default(path: &str) -> Result<()> {
        let config = Config::default();
        let content = toml::to_string_pretty(&config)
            .map_err(|e| anyhow!("Failed to serialize default config: {}", e))?;

        fs::write(path, content).map_err(|e| anyhow!("Failed to write config file {}: {}", path, e))?;

        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        let g = &self.game;
        for (label, v) in [("world_width", g.world_width), ("world_height", g.world_height)] {
            if !(MIN_WORLD_SIZE..=MAX_WORLD_SIZE).contains(&v) {
                bail!(
                    "game.{} must be between {} and {} (got {})",
                    label,
                    MIN_WORLD_SIZE,
                    MAX_WORLD_SIZE,
                    v
                );
            }
        }
        if self.storage.save_slot.trim().is_empty() {
            bail!("storage.save_slot must not be empty");
        }
        if crate::validation::validate_player_name(&g.default_player_name).is_err() {
            bail!(
                "game.default_player_name {:?} is not a valid player name",
                g.default_player_name
            );
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let cfg = Config::default();
        cfg.validate().unwrap();
        assert_eq!(cfg.game.world_width, 15);
        assert_eq!(cfg.storage.save_slot, "gamesave");
        assert!(cfg.game.seed.is_none());
    }

    #[test]
    fn partial_file_fills_defaults() {
        let cfg: Config = toml::from_str("[game]\nseed = 42\n").unwrap();
        assert_eq!(cfg.game.seed, Some(42));
        assert_eq!(cfg.game.world_height, 15);
        assert_eq!(cfg.logging.level, "warn");
    }

    #[test]
    fn tiny_world_is_rejected() {
        let mut cfg = Config::default();
        cfg.game.world_width = 4;
        assert!(cfg.validate().is_err());
        cfg.game.world_width = 65;
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn create_then_load() {
        let td = tempfile::tempdir().unwrap();
        let path = td.path().join("config.toml");
        let path = path.to_str().unwrap();
        Config::create_default(path).unwrap();
        let cfg = Config::load(path).unwrap();
        assert_eq!(cfg.storage.data_dir, "./data");
    }
}
