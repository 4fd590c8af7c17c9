use serde::{Deserialize, Serialize};

/// Something the player can carry. Items are matched by name everywhere.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Item {
    pub name: String,
    pub description: String,
    pub value: u32,
}

impl Item {
    pub fn new(name: impl Into<String>, description: impl Into<String>, value: u32) -> Self {
        Item {
            name: name.into(),
            description: description.into(),
            value,
        }
    }

    /// An item rebuilt from a save slot, where only the name survives.
    pub fn named(name: impl Into<String>) -> Self {
        Item::new(name, String::new(), 0)
    }

    pub fn is_named(&self, name: &str) -> bool {
        self.name == name
    }
}

/// What using an item does to the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemEffect {
    /// Restores health and consumes the item.
    Heal(i32),
    NoEffect,
}

pub const HEALTH_POTION: &str = "Health Potion";
pub const POTION_HEAL_AMOUNT: i32 = 50;

/// Resolves the effect of using an item by name. Unknown items do nothing.
pub fn item_effect(name: &str) -> ItemEffect {
    match name {
        HEALTH_POTION => ItemEffect::Heal(POTION_HEAL_AMOUNT),
        _ => ItemEffect::NoEffect,
    }
}
