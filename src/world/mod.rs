//! World model: positions, items, quests, locations, grids and the player.

pub mod content;
pub mod grid;
pub mod inventory;
pub mod item;
pub mod location;
pub mod navigation;
pub mod player;
pub mod position;
pub mod quest;

pub use content::MEDALLIONS;
pub use grid::{WorldGrid, VILLAGE_ENTRY, VILLAGE_SIZE};
pub use inventory::{Inventory, MAX_ITEMS};
pub use item::{item_effect, Item, ItemEffect, HEALTH_POTION};
pub use location::{Location, Npc};
pub use navigation::NavigationStack;
pub use player::{Player, DEFAULT_PLAYER_NAME, MAX_HEALTH};
pub use position::{Direction, Position};
pub use quest::{Quest, QuestTemplate, DRAGONS_THREAT, OPENING_QUEST};
