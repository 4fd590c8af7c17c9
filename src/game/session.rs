//! Turn processing.
//!
//! A [`GameSession`] owns everything a running game needs: the player, the
//! grid they are standing on, the grids they stepped out of, the rolling
//! message log and the save slot. [`GameSession::apply`] runs one turn:
//!
//! 1. dispatch the command to its handler (errors become log lines)
//! 2. hazard damage for the location the player ended up in
//! 3. loss check, then win check
//!
//! Once the session leaves [`Status::Running`] the ending is logged once and
//! every later command is ignored.

use log::{debug, info, warn};

use super::commands::Command;
use super::dialogue::{Dialogue, DialogueProvider, Effect, StandardDialogues};
use super::messages::MessageLog;
use super::save::{SaveRecord, SaveStore};
use crate::config::GameConfig;
use crate::errors::GameError;
use crate::world::{
    Direction, Item, ItemEffect, Location, NavigationStack, Player, Quest, WorldGrid, MAX_HEALTH,
    MEDALLIONS, OPENING_QUEST, VILLAGE_ENTRY,
};

/// Health lost per turn in a hazardous location.
pub const HAZARD_DAMAGE: i32 = 10;

pub const HAZARD_MESSAGE: &str = "This dangerous place is draining your health!";
pub const VICTORY_MESSAGE: &str =
    "You have collected all three medallions! The dragon's power is sealed, and the land is saved!";
pub const DEFEAT_MESSAGE: &str =
    "Your health has reached zero! The dragon's darkness continues to spread across the land...";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Running,
    Victory,
    Defeat,
    Quit,
}

impl Status {
    pub fn is_over(self) -> bool {
        self != Status::Running
    }
}

/// What an NPC said back, and the quest it handed out if any.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub speaker: String,
    pub response: String,
    pub granted_quest: Option<String>,
}

pub struct GameSession {
    player: Player,
    current_grid: WorldGrid,
    stack: NavigationStack,
    log: MessageLog,
    status: Status,
    store: SaveStore,
    dialogues: Box<dyn DialogueProvider>,
}

impl GameSession {
    /// Starts a fresh game: new world from `seed`, player at the centre with
    /// the opening quest.
    pub fn new_game(name: &str, config: &GameConfig, seed: u64, store: SaveStore) -> Self {
        let grid = WorldGrid::generate_seeded(config.world_width, config.world_height, seed);
        let mut player = Player::new(name, grid.center());
        player.current_quest = Some(OPENING_QUEST.instantiate());

        let mut session = Self::from_parts(player, grid, store);
        session.log.push("Welcome to Dragon's Bane!");
        session.log.push("Your quest begins in the Village of Hope.");
        info!(
            "new game for {} (world {}x{}, seed {})",
            session.player.name, config.world_width, config.world_height, seed
        );
        session
    }

    /// Rebuilds a session from a save record. The world is regenerated from
    /// `seed`; items and quests come back by name only.
    pub fn restore(record: SaveRecord, config: &GameConfig, seed: u64, store: SaveStore) -> Self {
        let grid = WorldGrid::generate_seeded(config.world_width, config.world_height, seed);
        let mut position = record.position;
        if !grid.is_passable(position) {
            warn!(
                "saved position {} is not walkable in the regenerated world; starting at the centre",
                position
            );
            position = grid.center();
        }

        let mut player = Player::new(record.name, position);
        player.health = record.health.clamp(0, MAX_HEALTH);
        for name in record.inventory_item_names {
            if let Err(e) = player.inventory.add(Item::named(name)) {
                warn!("dropping restored item: {}", e);
            }
        }
        player.completed_quests = record
            .completed_quest_names
            .into_iter()
            .map(Quest::completed_named)
            .collect();

        let mut session = Self::from_parts(player, grid, store);
        session.log.push(format!("Welcome back, {}!", session.player.name));
        info!(
            "restored {} at {} with {} items",
            session.player.name,
            session.player.position,
            session.player.inventory.len()
        );
        session
    }

    /// Assembles a session around an existing player and grid.
    pub fn from_parts(player: Player, grid: WorldGrid, store: SaveStore) -> Self {
        GameSession {
            player,
            current_grid: grid,
            stack: NavigationStack::new(),
            log: MessageLog::new(),
            status: Status::Running,
            store,
            dialogues: Box::new(StandardDialogues),
        }
    }

    pub fn with_dialogues(mut self, dialogues: Box<dyn DialogueProvider>) -> Self {
        self.dialogues = dialogues;
        self
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn player_mut(&mut self) -> &mut Player {
        &mut self.player
    }

    pub fn grid(&self) -> &WorldGrid {
        &self.current_grid
    }

    pub fn grid_mut(&mut self) -> &mut WorldGrid {
        &mut self.current_grid
    }

    pub fn nav_depth(&self) -> usize {
        self.stack.depth()
    }

    pub fn messages(&self) -> &MessageLog {
        &self.log
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn store(&self) -> &SaveStore {
        &self.store
    }

    pub fn current_location(&self) -> Option<&Location> {
        self.current_grid.location(self.player.position)
    }

    /// Runs one turn and returns the status afterwards.
    pub fn apply(&mut self, command: Command) -> Status {
        if self.status.is_over() {
            debug!("ignoring {:?}: session already ended ({:?})", command, self.status);
            return self.status;
        }
        debug!("turn: {:?} at {}", command, self.player.position);

        let result = match command {
            Command::Move(dir) => self.move_player(dir),
            Command::Talk => self.finish_talk(),
            Command::ShowInventory => Ok(()),
            Command::Take(index) => self.take_item(index),
            Command::UseNumbered(index) => self.use_numbered(index),
            Command::Use(name) => self.use_item(&name),
            Command::Enter => self.enter_location(),
            Command::Exit => self.exit_location(),
            Command::Save => {
                self.save();
                Ok(())
            }
            Command::Quit => return self.quit(),
            Command::Unknown(raw) => Err(GameError::InvalidCommand(raw)),
        };

        match result {
            Ok(()) => {}
            Err(GameError::EmptySelection) => debug!("selection cancelled"),
            Err(e) => {
                debug!("command rejected: {:?}", e);
                self.log.push(e.to_string());
            }
        }

        self.apply_hazard();
        self.evaluate();
        self.status
    }

    /// Dialogue of the first NPC here, if anyone is around.
    pub fn conversation(&self) -> Option<Dialogue> {
        let npc = self.current_location()?.first_npc()?;
        Some(self.dialogues.dialogue_for(&npc.name))
    }

    /// Picks a dialogue option (1-based) and dispatches its effect.
    pub fn respond(&mut self, dialogue: &Dialogue, choice: usize) -> Result<Reply, GameError> {
        let option = dialogue.option(choice).ok_or(GameError::EmptySelection)?;
        let mut reply = Reply {
            speaker: dialogue.speaker.clone(),
            response: option.response.clone(),
            granted_quest: None,
        };

        match &option.effect {
            Effect::NoEffect => {}
            Effect::GrantQuest(template) => {
                let already_done = self
                    .player
                    .completed_quests
                    .iter()
                    .any(|q| q.name == template.name);
                if already_done {
                    debug!("{} already completed, not granting again", template.name);
                } else if self.player.offer_quest(template.instantiate()) {
                    self.log.push(format!("New Quest: {}", template.name));
                    info!("{} accepted quest {}", self.player.name, template.name);
                    reply.granted_quest = Some(template.name.to_string());
                } else {
                    debug!("{} offered while another quest is active", template.name);
                }
            }
        }
        Ok(reply)
    }

    /// Writes the save slot. Failure is logged and play continues.
    pub fn save(&mut self) -> bool {
        let record = SaveRecord::from_player(&self.player);
        match self.store.save(&record) {
            Ok(()) => {
                info!("saved game to {}", self.store.path().display());
                self.log.push("Game saved successfully!");
                true
            }
            Err(e) => {
                warn!("save failed: {}", e);
                self.log.push(format!("Failed to save game: {}", e));
                false
            }
        }
    }

    pub fn has_all_medallions(&self) -> bool {
        MEDALLIONS
            .iter()
            .all(|m| self.player.inventory.has_item(m))
    }

    fn quit(&mut self) -> Status {
        self.save();
        self.status = Status::Quit;
        info!("{} left the game", self.player.name);
        self.status
    }

    fn move_player(&mut self, dir: Direction) -> Result<(), GameError> {
        let target = self.player.position.step(dir);
        let Some(loc) = self.current_grid.location(target) else {
            return Err(GameError::InvalidMove(
                self.current_grid.boundary_message(target),
            ));
        };
        let (name, description) = (loc.name.clone(), loc.description.clone());

        self.player.position = target;
        self.log.push(format!("Moved to {}", name));
        self.log.push(description);

        let arrived = self
            .player
            .current_quest
            .as_ref()
            .is_some_and(|q| q.is_target(target));
        if arrived {
            self.complete_active_quest();
        }
        Ok(())
    }

    /// Finishes the active quest and hands out its reward. A reward that does
    /// not fit is left at the player's feet.
    fn complete_active_quest(&mut self) {
        let reward = self
            .player
            .current_quest
            .as_ref()
            .and_then(|q| q.reward.clone());
        let Some(name) = self.player.complete_current_quest() else {
            return;
        };
        self.log.push(format!("Quest Completed: {}", name));
        info!("{} completed quest {}", self.player.name, name);

        let Some(item) = reward else {
            return;
        };
        let reward_name = item.name.clone();
        match self.player.inventory.add(item) {
            Ok(()) => self.log.push(format!("Reward: {}", reward_name)),
            Err(GameError::InventoryFull(item)) => {
                self.log.push(format!(
                    "Your inventory is full! {} was left on the ground.",
                    reward_name
                ));
                if let Some(loc) = self.current_grid.location_mut(self.player.position) {
                    loc.add_item(item);
                }
            }
            Err(e) => self.log.push(e.to_string()),
        }
    }

    fn take_item(&mut self, index: usize) -> Result<(), GameError> {
        let loc = self
            .current_grid
            .location_mut(self.player.position)
            .filter(|l| l.has_items())
            .ok_or(GameError::NoItemsHere)?;
        let item = loc.take_item(index).ok_or(GameError::EmptySelection)?;
        let name = item.name.clone();

        match self.player.inventory.add(item) {
            Ok(()) => {}
            Err(GameError::InventoryFull(item)) => {
                loc.return_item(index, item.clone());
                return Err(GameError::InventoryFull(item));
            }
            Err(e) => return Err(e),
        }
        self.log.push(format!("Took {}", name));

        let is_reward = self
            .player
            .current_quest
            .as_ref()
            .and_then(|q| q.reward_name())
            == Some(name.as_str());
        if is_reward {
            // The item is already in hand; only the quest bookkeeping remains.
            if let Some(quest) = self.player.complete_current_quest() {
                self.log.push(format!("Quest Completed: {}", quest));
                info!("{} completed quest {}", self.player.name, quest);
            }
        }
        Ok(())
    }

    fn enter_location(&mut self) -> Result<(), GameError> {
        let pos = self.player.position;
        let name = self
            .current_grid
            .location(pos)
            .filter(|l| l.has_sub_map)
            .map(|l| l.name.clone())
            .ok_or(GameError::NothingToEnter)?;

        let village = WorldGrid::create_village_map(pos);
        let parent = std::mem::replace(&mut self.current_grid, village);
        self.stack.push(parent);
        self.player.position = VILLAGE_ENTRY;
        self.log.push(format!("Entered {}.", name));
        debug!("entered {} from {}, depth {}", name, pos, self.stack.depth());
        Ok(())
    }

    fn exit_location(&mut self) -> Result<(), GameError> {
        let parent = self.stack.pop().ok_or(GameError::NotInSubMap)?;
        let return_to = self.current_grid.parent_position();
        self.current_grid = parent;
        self.player.position = return_to;
        self.log.push("Returned to the world map.");
        debug!("exited to {}, depth {}", return_to, self.stack.depth());
        Ok(())
    }

    fn use_numbered(&mut self, index: usize) -> Result<(), GameError> {
        if self.player.inventory.is_empty() {
            return Err(GameError::InventoryEmpty);
        }
        let name = self
            .player
            .inventory
            .get_numbered(index)
            .map(|item| item.name.clone())
            .ok_or(GameError::EmptySelection)?;
        self.use_item(&name)
    }

    fn use_item(&mut self, name: &str) -> Result<(), GameError> {
        if self.player.inventory.is_empty() {
            return Err(GameError::InventoryEmpty);
        }
        if !self.player.inventory.has_item(name) {
            return Err(GameError::ItemNotCarried(name.to_string()));
        }
        match self.player.use_item(name) {
            ItemEffect::Heal(_) => self.log.push(format!(
                "Used {}. Health is now {}/{}.",
                name, self.player.health, MAX_HEALTH
            )),
            ItemEffect::NoEffect => self.log.push(format!("Nothing happens when you use {}.", name)),
        }
        Ok(())
    }

    fn finish_talk(&mut self) -> Result<(), GameError> {
        if self.current_location().is_some_and(|l| l.has_npc()) {
            self.log.push("Finished conversation.");
            Ok(())
        } else {
            Err(GameError::NoOneHere)
        }
    }

    fn apply_hazard(&mut self) {
        if self.current_location().is_some_and(|l| l.is_hazardous()) {
            self.player.damage(HAZARD_DAMAGE);
            self.log.push(HAZARD_MESSAGE);
            debug!("hazard: health now {}", self.player.health);
        }
    }

    /// Loss first, then win. Logs the ending once.
    fn evaluate(&mut self) {
        if self.status.is_over() {
            return;
        }
        if !self.player.is_alive() {
            self.status = Status::Defeat;
            self.log.push(DEFEAT_MESSAGE);
            info!("{} was defeated at {}", self.player.name, self.player.position);
        } else if self.has_all_medallions() {
            self.status = Status::Victory;
            self.log.push(VICTORY_MESSAGE);
            info!("{} collected all medallions", self.player.name);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::{Npc, Position};

    fn store() -> (tempfile::TempDir, SaveStore) {
        let td = tempfile::tempdir().unwrap();
        let store = SaveStore::new(td.path(), "gamesave");
        (td, store)
    }

    /// A 3x3 grid: open everywhere except the bottom-right corner.
    fn small_session() -> (tempfile::TempDir, GameSession) {
        let mut grid = WorldGrid::empty(3, 3);
        for y in 0..3 {
            for x in 0..3 {
                if (x, y) != (2, 2) {
                    grid.set_location(Position::new(x, y), Location::new("Field", "Grass."));
                }
            }
        }
        let (td, store) = store();
        let player = Player::new("Aria", Position::new(1, 1));
        (td, GameSession::from_parts(player, grid, store))
    }

    #[test]
    fn blocked_move_keeps_position() {
        let (_td, mut s) = small_session();
        s.player_mut().position = Position::new(2, 1);
        s.apply(Command::Move(Direction::Down));
        assert_eq!(s.player().position, Position::new(2, 1));
        assert!(s.messages().latest().unwrap().contains("blocked"));

        s.apply(Command::Move(Direction::Right));
        assert_eq!(s.player().position, Position::new(2, 1));
        assert!(s.messages().latest().unwrap().contains("eastern"));
    }

    #[test]
    fn unknown_command_is_logged() {
        let (_td, mut s) = small_session();
        assert_eq!(s.apply(Command::Unknown("dance".into())), Status::Running);
        assert_eq!(s.messages().latest(), Some("Invalid command. Try again."));
    }

    #[test]
    fn take_zero_is_silent() {
        let (_td, mut s) = small_session();
        s.grid_mut()
            .location_mut(Position::new(1, 1))
            .unwrap()
            .add_item(Item::new("Rusty Key", "", 125));
        s.apply(Command::Take(0));
        assert!(s.messages().is_empty());
        assert!(s.player().inventory.is_empty());
        assert_eq!(s.current_location().unwrap().items().len(), 1);
    }

    #[test]
    fn full_inventory_leaves_item_in_place() {
        let (_td, mut s) = small_session();
        for i in 0..crate::world::MAX_ITEMS {
            s.player_mut()
                .inventory
                .add(Item::new(format!("Pebble {}", i), "", 1))
                .unwrap();
        }
        s.grid_mut()
            .location_mut(Position::new(1, 1))
            .unwrap()
            .add_item(Item::new("Rusty Key", "", 125));
        s.apply(Command::Take(1));
        assert_eq!(s.current_location().unwrap().items()[0].name, "Rusty Key");
        assert!(s.messages().latest().unwrap().contains("inventory is full"));
    }

    #[test]
    fn taking_the_reward_item_completes_the_quest() {
        let (_td, mut s) = small_session();
        s.player_mut().current_quest = Some(Quest::new(
            "Find the key",
            "",
            Some(Item::named("Rusty Key")),
            None,
        ));
        s.grid_mut()
            .location_mut(Position::new(1, 1))
            .unwrap()
            .add_item(Item::new("Rusty Key", "", 125));
        s.apply(Command::Take(1));
        assert!(s.player().current_quest.is_none());
        assert_eq!(s.player().completed_quest_names(), vec!["Find the key"]);
        assert_eq!(s.player().inventory.len(), 1);
    }

    #[test]
    fn using_items() {
        let (_td, mut s) = small_session();
        s.apply(Command::UseNumbered(1));
        assert_eq!(s.messages().latest(), Some("You have no items to use!"));

        s.player_mut().health = 40;
        s.player_mut()
            .inventory
            .add(Item::new("Health Potion", "", 50))
            .unwrap();
        s.player_mut()
            .inventory
            .add(Item::new("Magic Scroll", "", 75))
            .unwrap();
        s.apply(Command::Use("Health Potion".into()));
        assert_eq!(s.player().health, 90);
        assert!(!s.player().inventory.has_item("Health Potion"));

        s.apply(Command::UseNumbered(1));
        assert!(s.player().inventory.has_item("Magic Scroll"));
        assert!(s.messages().latest().unwrap().starts_with("Nothing happens"));
    }

    #[test]
    fn elder_quest_only_when_slot_free() {
        let (_td, mut s) = small_session();
        s.grid_mut()
            .location_mut(Position::new(1, 1))
            .unwrap()
            .add_npc(Npc::new("Village Elder"));
        let d = s.conversation().expect("elder is here");
        let reply = s.respond(&d, 2).unwrap();
        assert_eq!(reply.granted_quest.as_deref(), Some("The Dragon's Threat"));
        assert_eq!(s.messages().latest(), Some("New Quest: The Dragon's Threat"));

        let again = s.respond(&d, 2).unwrap();
        assert!(again.granted_quest.is_none());
        assert!(matches!(s.respond(&d, 9), Err(GameError::EmptySelection)));

        s.apply(Command::Talk);
        assert_eq!(s.messages().latest(), Some("Finished conversation."));
    }

    #[test]
    fn talking_to_nobody() {
        let (_td, mut s) = small_session();
        assert!(s.conversation().is_none());
        s.apply(Command::Talk);
        assert_eq!(s.messages().latest(), Some("There's no one here to talk to."));
    }

    #[test]
    fn quit_saves_and_stops() {
        let (_td, mut s) = small_session();
        assert_eq!(s.apply(Command::Quit), Status::Quit);
        assert!(s.store().exists());
        assert_eq!(s.apply(Command::Move(Direction::Up)), Status::Quit);
        assert_eq!(s.player().position, Position::new(1, 1));
    }

    #[test]
    fn enter_requires_a_sub_map() {
        let (_td, mut s) = small_session();
        s.apply(Command::Enter);
        assert_eq!(s.messages().latest(), Some("There's nothing to enter here."));
        s.apply(Command::Exit);
        assert_eq!(s.messages().latest(), Some("You can't exit from here."));
        assert_eq!(s.nav_depth(), 0);
    }
}
