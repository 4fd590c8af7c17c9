//! The single save slot.
//!
//! Persistence: JSON at `<data_dir>/saves/<slot>.json`, written with an
//! exclusive lock and an atomic write+rename so a crash mid-save never leaves
//! a half-written slot behind.
//!
//! The record is a lossy projection of the player: item and quest names only.

use chrono::{DateTime, Utc};
use fs2::FileExt;
use log::debug;
use serde::{Deserialize, Serialize};
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::errors::SaveError;
use crate::validation::{safe_filename, validate_player_name};
use crate::world::{Player, Position};

pub const SAVE_VERSION: u32 = 1;

fn default_version() -> u32 {
    SAVE_VERSION
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SaveRecord {
    #[serde(default = "default_version")]
    pub version: u32,
    #[serde(default)]
    pub saved_at: Option<DateTime<Utc>>,
    pub position: Position,
    pub health: i32,
    pub name: String,
    #[serde(default)]
    pub inventory_item_names: Vec<String>,
    #[serde(default)]
    pub completed_quest_names: Vec<String>,
}

impl SaveRecord {
    pub fn from_player(player: &Player) -> Self {
        SaveRecord {
            version: SAVE_VERSION,
            saved_at: Some(Utc::now()),
            position: player.position,
            health: player.health,
            name: player.name.clone(),
            inventory_item_names: player.inventory.names(),
            completed_quest_names: player.completed_quest_names(),
        }
    }

    /// Rejects records a live session could never have written: a bad name
    /// or a dead player. The name comes back trimmed.
    fn checked(mut self) -> Result<Self, SaveError> {
        self.name = validate_player_name(&self.name)
            .map_err(|e| SaveError::Invalid(format!("player name: {}", e)))?;
        if self.health <= 0 {
            return Err(SaveError::Invalid(format!(
                "health {} leaves nobody to play",
                self.health
            )));
        }
        Ok(self)
    }
}

/// File-backed save slot.
#[derive(Debug, Clone)]
pub struct SaveStore {
    path: PathBuf,
}

impl SaveStore {
    pub fn new(data_dir: impl AsRef<Path>, slot: &str) -> Self {
        let path = data_dir
            .as_ref()
            .join("saves")
            .join(format!("{}.json", safe_filename(slot)));
        SaveStore { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Overwrites the slot with `record`.
    pub fn save(&self, record: &SaveRecord) -> Result<(), SaveError> {
        let json = serde_json::to_string_pretty(record)?;
        write_json_atomic(&self.path, &json)?;
        debug!("wrote save slot {}", self.path.display());
        Ok(())
    }

    pub fn load(&self) -> Result<SaveRecord, SaveError> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(s) => s,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(SaveError::NotFound(self.path.clone()));
            }
            Err(e) => return Err(e.into()),
        };
        serde_json::from_str::<SaveRecord>(&content)?.checked()
    }
}

fn write_json_atomic(path: &Path, content: &str) -> std::io::Result<()> {
    let dir = path.parent().unwrap_or(Path::new("."));
    std::fs::create_dir_all(dir)?;
    let base = path
        .file_name()
        .and_then(|s| s.to_str())
        .unwrap_or("save.json");

    // Lock a sidecar so concurrent writers queue up without truncating the slot.
    let lock_file = OpenOptions::new()
        .create(true)
        .truncate(false)
        .read(true)
        .write(true)
        .open(dir.join(format!(".{}.lock", base)))?;
    lock_file.lock_exclusive()?;

    let mut counter = 0u32;
    let tmp_path = loop {
        let cand = dir.join(format!(".{}.tmp-{}-{}", base, std::process::id(), counter));
        match OpenOptions::new().write(true).create_new(true).open(&cand) {
            Ok(mut tmp) => {
                if let Err(e) = tmp.write_all(content.as_bytes()).and_then(|_| tmp.flush()) {
                    let _ = std::fs::remove_file(&cand);
                    return Err(e);
                }
                let _ = tmp.sync_all();
                break cand;
            }
            Err(e) if e.kind() == std::io::ErrorKind::AlreadyExists => {
                counter = counter.saturating_add(1);
            }
            Err(e) => return Err(e),
        }
    };
    if let Err(e) = std::fs::rename(&tmp_path, path) {
        let _ = std::fs::remove_file(&tmp_path);
        return Err(e);
    }
    if let Ok(dirf) = File::open(dir) {
        let _ = dirf.sync_all();
    }
    lock_file.unlock()?;
    Ok(())
}
