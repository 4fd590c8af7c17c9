//! Quest records and the declarative templates dialogue effects grant.
use super::item::Item;
use super::position::Position;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Quest {
    pub name: String,
    pub description: String,
    pub reward: Option<Item>,
    pub target: Option<Position>,
    completed: bool,
}

impl Quest {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        reward: Option<Item>,
        target: Option<Position>,
    ) -> Self {
        Quest {
            name: name.into(),
            description: description.into(),
            reward,
            target,
            completed: false,
        }
    }

    /// A completed quest rebuilt from a save slot; only the name survives.
    pub fn completed_named(name: impl Into<String>) -> Self {
        let mut quest = Quest::new(name, String::new(), None, None);
        quest.completed = true;
        quest
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    /// Marks the quest completed. Returns false if it already was.
    pub fn complete(&mut self) -> bool {
        if self.completed {
            return false;
        }
        self.completed = true;
        true
    }

    pub fn is_target(&self, pos: Position) -> bool {
        self.target == Some(pos)
    }

    pub fn reward_name(&self) -> Option<&str> {
        self.reward.as_ref().map(|item| item.name.as_str())
    }
}

/// Static description of a quest, instantiated when an NPC hands it out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestTemplate {
    pub name: &'static str,
    pub description: &'static str,
    pub reward: Option<(&'static str, &'static str, u32)>,
    pub target: Option<Position>,
}

impl QuestTemplate {
    pub fn instantiate(&self) -> Quest {
        Quest::new(
            self.name,
            self.description,
            self.reward
                .map(|(name, desc, value)| Item::new(name, desc, value)),
            self.target,
        )
    }
}

/// The quest every new game starts with.
pub const OPENING_QUEST: QuestTemplate = QuestTemplate {
    name: "Forest Investigation",
    description: "Investigate the strange occurrences in the Mysterious Forest",
    reward: Some(("Ancient Amulet", "A powerful magical amulet", 100)),
    target: Some(Position::new(0, 1)),
};

/// Granted by the Village Elder.
pub const DRAGONS_THREAT: QuestTemplate = QuestTemplate {
    name: "The Dragon's Threat",
    description: "Collect all three medallions to seal away the dragon.",
    reward: None,
    target: None,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn complete_only_transitions_once() {
        let mut quest = OPENING_QUEST.instantiate();
        assert!(!quest.is_completed());
        assert!(quest.complete());
        assert!(quest.is_completed());
        assert!(!quest.complete());
        assert!(quest.is_completed());
    }

    #[test]
    fn template_carries_reward_and_target() {
        let quest = OPENING_QUEST.instantiate();
        assert_eq!(quest.reward_name(), Some("Ancient Amulet"));
        assert!(quest.is_target(Position::new(0, 1)));
        assert!(DRAGONS_THREAT.instantiate().reward.is_none());
    }
}
