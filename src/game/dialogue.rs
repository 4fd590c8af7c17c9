//! NPC conversations.
//!
//! Conversations are plain data: an introduction line and numbered options,
//! each with a response and an [`Effect`] that the session dispatches when the
//! option is picked. Selecting `0` ends the conversation.

use crate::world::{QuestTemplate, DRAGONS_THREAT};

/// What picking a dialogue option does to the game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    NoEffect,
    /// Hands the player a quest if they have no active one.
    GrantQuest(QuestTemplate),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DialogueOption {
    pub text: String,
    pub response: String,
    pub effect: Effect,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dialogue {
    pub speaker: String,
    pub introduction: String,
    pub options: Vec<DialogueOption>,
}

/// Menu value that ends a conversation.
pub const END_CONVERSATION: usize = 0;

impl Dialogue {
    pub fn new(speaker: impl Into<String>, introduction: impl Into<String>) -> Self {
        Dialogue {
            speaker: speaker.into(),
            introduction: introduction.into(),
            options: Vec::new(),
        }
    }

    pub fn with_option(mut self, text: &str, response: &str, effect: Effect) -> Self {
        self.options.push(DialogueOption {
            text: text.to_string(),
            response: response.to_string(),
            effect,
        });
        self
    }

    /// Looks up an option by its 1-based menu number.
    pub fn option(&self, choice: usize) -> Option<&DialogueOption> {
        choice.checked_sub(1).and_then(|i| self.options.get(i))
    }
}

/// Supplies conversation content for an NPC by name.
pub trait DialogueProvider {
    fn dialogue_for(&self, npc: &str) -> Dialogue;
}

/// The conversations that ship with the game.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardDialogues;

impl DialogueProvider for StandardDialogues {
    fn dialogue_for(&self, npc: &str) -> Dialogue {
        match npc {
            "Village Elder" => Dialogue::new(npc, "Welcome to our village, brave soul.")
                .with_option(
                    "Tell me about the dragon.",
                    "An ancient evil has awakened. The dragon threatens to destroy everything we hold dear.",
                    Effect::NoEffect,
                )
                .with_option(
                    "How can I help?",
                    "You must collect the three medallions. Only then will you have the power to face the dragon.",
                    Effect::GrantQuest(DRAGONS_THREAT),
                ),
            "Forest Spirit" => Dialogue::new(npc, "The forest whispers ancient secrets...")
                .with_option(
                    "Tell me about the Forest Medallion.",
                    "It is hidden deep within the Sacred Grove, protected by ancient magic.",
                    Effect::NoEffect,
                )
                .with_option(
                    "How can I prove myself worthy?",
                    "Help restore balance to the forest, and the medallion shall be yours.",
                    Effect::NoEffect,
                ),
            "Water Spirit" => Dialogue::new(npc, "Cool mist gathers into a shimmering shape.")
                .with_option(
                    "Where is the Water Medallion?",
                    "It rests in my shrine to the north. Take it, and carry it with care.",
                    Effect::NoEffect,
                ),
            "Mountain Hermit" => Dialogue::new(npc, "An old man squints at you through the sleet.")
                .with_option(
                    "Is the Mountain Medallion here?",
                    "Aye, but the cold bites deep. Do not linger on the peak longer than you must.",
                    Effect::NoEffect,
                ),
            _ => Dialogue::new(npc, format!("Greetings, traveler. I am {}.", npc)).with_option(
                "What brings you here?",
                "I'm just passing through these lands.",
                Effect::NoEffect,
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn elder_grants_the_dragon_quest() {
        let d = StandardDialogues.dialogue_for("Village Elder");
        assert_eq!(d.speaker, "Village Elder");
        let help = d.option(2).expect("second option");
        assert_eq!(help.effect, Effect::GrantQuest(DRAGONS_THREAT));
        assert_eq!(d.option(1).unwrap().effect, Effect::NoEffect);
    }

    #[test]
    fn unknown_npc_gets_a_greeting() {
        let d = StandardDialogues.dialogue_for("Lost Traveler");
        assert!(d.introduction.contains("Lost Traveler"));
        assert_eq!(d.options.len(), 1);
    }

    #[test]
    fn zero_is_not_an_option() {
        let d = StandardDialogues.dialogue_for("Forest Spirit");
        assert!(d.option(END_CONVERSATION).is_none());
        assert!(d.option(3).is_none());
    }
}
