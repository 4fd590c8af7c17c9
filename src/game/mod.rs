//! Game layer: command parsing, dialogue, persistence, the turn loop and the
//! terminal front end.

pub mod commands;
pub mod dialogue;
pub mod messages;
pub mod render;
pub mod save;
pub mod session;
pub mod terminal;

pub use commands::{Command, Parsed, Prompt};
pub use dialogue::{Dialogue, DialogueOption, DialogueProvider, Effect, StandardDialogues};
pub use messages::{MessageLog, MESSAGE_LOG_CAPACITY};
pub use save::{SaveRecord, SaveStore};
pub use session::{GameSession, Reply, Status};
pub use terminal::Terminal;
