use super::inventory::Inventory;
use super::item::{item_effect, ItemEffect};
use super::position::Position;
use super::quest::Quest;

pub const MAX_HEALTH: i32 = 100;
pub const DEFAULT_PLAYER_NAME: &str = "Hero";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    pub name: String,
    pub position: Position,
    /// Clamped to 0..=MAX_HEALTH wherever it changes.
    pub health: i32,
    pub inventory: Inventory,
    pub current_quest: Option<Quest>,
    pub completed_quests: Vec<Quest>,
}

impl Player {
    pub fn new(name: impl Into<String>, position: Position) -> Self {
        Player {
            name: name.into(),
            position,
            health: MAX_HEALTH,
            inventory: Inventory::new(),
            current_quest: None,
            completed_quests: Vec::new(),
        }
    }

    pub fn is_alive(&self) -> bool {
        self.health > 0
    }

    pub fn heal(&mut self, amount: i32) {
        self.health = (self.health + amount).clamp(0, MAX_HEALTH);
    }

    pub fn damage(&mut self, amount: i32) {
        self.health = (self.health - amount).clamp(0, MAX_HEALTH);
    }

    /// Moves the active quest into the completed history. Returns the name
    /// of the quest that was completed, or `None` if there was none.
    pub fn complete_current_quest(&mut self) -> Option<String> {
        let mut quest = self.current_quest.take()?;
        quest.complete();
        let name = quest.name.clone();
        self.completed_quests.push(quest);
        Some(name)
    }

    /// Offers a new quest. Only accepted when no quest is active.
    pub fn offer_quest(&mut self, quest: Quest) -> bool {
        if self.current_quest.is_some() {
            return false;
        }
        self.current_quest = Some(quest);
        true
    }

    /// Applies an item's effect. Consumable items are removed from the
    /// inventory; items without an effect are kept.
    pub fn use_item(&mut self, name: &str) -> ItemEffect {
        let effect = item_effect(name);
        if let ItemEffect::Heal(amount) = effect {
            if self.inventory.remove(name).is_some() {
                self.heal(amount);
            }
        }
        effect
    }

    pub fn completed_quest_names(&self) -> Vec<String> {
        self.completed_quests.iter().map(|q| q.name.clone()).collect()
    }
}
