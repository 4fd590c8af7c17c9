use std::path::PathBuf;

use thiserror::Error;

use crate::world::Item;

/// Recoverable failures raised while applying a player command.
///
/// None of these end the session; the turn loop turns them into log lines.
#[derive(Debug, Error)]
pub enum GameError {
    /// Input that does not map to any command.
    #[error("Invalid command. Try again.")]
    InvalidCommand(String),

    /// Move out of bounds or onto an empty cell. Carries the boundary message.
    #[error("{0}")]
    InvalidMove(String),

    /// The inventory is at capacity. The rejected item is handed back.
    #[error("Your inventory is full! {} stays where it was.", .0.name)]
    InventoryFull(Item),

    /// Take/use with an index of zero or past the end.
    #[error("Nothing selected.")]
    EmptySelection,

    #[error("There are no items here to take.")]
    NoItemsHere,

    #[error("There's no one here to talk to.")]
    NoOneHere,

    #[error("There's nothing to enter here.")]
    NothingToEnter,

    #[error("You can't exit from here.")]
    NotInSubMap,

    #[error("You have no items to use!")]
    InventoryEmpty,

    #[error("You have no {0} to use!")]
    ItemNotCarried(String),
}

/// Errors from the save slot.
#[derive(Debug, Error)]
pub enum SaveError {
    /// No save file at the slot path.
    #[error("No saved game found at {}", .0.display())]
    NotFound(PathBuf),

    /// The slot exists but does not parse as a save record.
    #[error("Saved game is corrupt: {0}")]
    Corrupt(#[from] serde_json::Error),

    /// The slot parses but holds a player no new game could have produced.
    #[error("Saved game is invalid: {0}")]
    Invalid(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
