//! Plain-text screens. Everything here returns a `String`; the terminal
//! driver decides where it goes.

use super::dialogue::Dialogue;
use super::session::{GameSession, Status};
use crate::world::content::{MOUNTAIN_PEAK, SACRED_GROVE, VILLAGE_NAME, WATER_SHRINE};
use crate::world::{Inventory, Location, Position, WorldGrid, MAX_HEALTH, MAX_ITEMS};

const QUEST_LANDMARKS: [&str; 3] = [SACRED_GROVE.name, WATER_SHRINE.name, MOUNTAIN_PEAK.name];

fn cell_symbol(loc: &Location) -> char {
    if loc.name == VILLAGE_NAME {
        'H'
    } else if QUEST_LANDMARKS.iter().any(|n| loc.name.contains(n)) {
        '!'
    } else if loc.has_npc() {
        '@'
    } else if loc.has_items() {
        '*'
    } else {
        '#'
    }
}

/// The map with the player marked `P`. Empty cells are `.`.
pub fn render_map(grid: &WorldGrid, player: Position) -> String {
    let title = if grid.is_sub_map() {
        "Village Map"
    } else {
        "World Map"
    };
    let border = format!("+{}+", "-".repeat(grid.width() * 2 + 1));

    let mut out = format!("=== {} ===\n{}\n", title, border);
    for y in 0..grid.height() as i32 {
        out.push_str("| ");
        for x in 0..grid.width() as i32 {
            let pos = Position::new(x, y);
            let c = if pos == player {
                'P'
            } else {
                grid.location(pos).map(cell_symbol).unwrap_or('.')
            };
            out.push(c);
            out.push(' ');
        }
        out.push_str("|\n");
    }
    out.push_str(&border);
    out.push('\n');
    out.push_str("Legend: P You  @ NPC  * Item  H Village  ! Quest Location  # Path/Place  . Blocked\n");
    out
}

fn render_location(loc: &Location) -> String {
    let mut out = format!("=== {} ===\n{}\n", loc.name, loc.description);
    if loc.has_npc() {
        let names: Vec<&str> = loc.npcs().iter().map(|n| n.name.as_str()).collect();
        out.push_str(&format!("People here: {}\n", names.join(", ")));
    }
    if loc.has_items() {
        let names: Vec<&str> = loc.items().iter().map(|i| i.name.as_str()).collect();
        out.push_str(&format!("Items here: {}\n", names.join(", ")));
    }
    out
}

/// The full status screen shown after every turn.
pub fn render_screen(session: &GameSession) -> String {
    let player = session.player();
    let mut out = render_map(session.grid(), player.position);

    if let Some(loc) = session.current_location() {
        out.push('\n');
        out.push_str(&render_location(loc));
    }

    out.push_str(&format!("\nHealth: {}/{}\n", player.health, MAX_HEALTH));

    out.push_str("\nControls:\n");
    out.push_str("Movement: u (Up), d (Down), l (Left), r (Right)\n");
    out.push_str("Actions: t (Talk), i (Inventory), take (Take Item), use (Use Item)\n");
    out.push_str("         save (Save Game), q (Save and Quit)\n");
    if session.current_location().is_some_and(|l| l.has_sub_map) {
        out.push_str("         enter (Enter Location)\n");
    }
    if session.nav_depth() > 0 {
        out.push_str("         exit (Exit to World Map)\n");
    }

    if let Some(quest) = &player.current_quest {
        out.push_str("\n=== Current Quest ===\n");
        out.push_str(&format!("Quest: {}\nObjective: {}\n", quest.name, quest.description));
    }

    out.push_str("\n=== Recent Events ===\n");
    for m in session.messages().iter() {
        out.push_str(m);
        out.push('\n');
    }
    out
}

pub fn render_inventory(inventory: &Inventory) -> String {
    let mut out = format!("=== Inventory ({}/{}) ===\n", inventory.len(), MAX_ITEMS);
    if inventory.is_empty() {
        out.push_str("Your inventory is empty.\n");
    }
    for item in inventory.items() {
        if item.description.is_empty() {
            out.push_str(&format!("- {}\n", item.name));
        } else {
            out.push_str(&format!("- {}: {}\n", item.name, item.description));
        }
    }
    out
}

/// Numbered list for the take/use prompts.
pub fn render_numbered(title: &str, names: &[&str]) -> String {
    let mut out = format!("=== {} ===\n", title);
    for (i, name) in names.iter().enumerate() {
        out.push_str(&format!("{}. {}\n", i + 1, name));
    }
    out
}

pub fn render_dialogue(dialogue: &Dialogue) -> String {
    let mut out = format!("=== Talking to {} ===\n", dialogue.speaker);
    out.push_str(&format!("{}: \"{}\"\n\n", dialogue.speaker, dialogue.introduction));
    for (i, opt) in dialogue.options.iter().enumerate() {
        out.push_str(&format!("{}. {}\n", i + 1, opt.text));
    }
    out.push_str("0. End conversation\n");
    out
}

/// Final screen for a finished session. `None` while the game is running.
pub fn render_ending(status: Status) -> Option<String> {
    match status {
        Status::Victory => Some(
            "=== Congratulations! ===\n\
             You have collected all three medallions!\n\
             The dragon's power is sealed, and the land is saved!\n\
             You have won the game!\n"
                .to_string(),
        ),
        Status::Defeat => Some(
            "=== Game Over ===\n\
             Your health has reached zero!\n\
             The dragon's darkness continues to spread across the land...\n"
                .to_string(),
        ),
        Status::Quit => Some("Your progress has been saved. Farewell, traveler.\n".to_string()),
        Status::Running => None,
    }
}

pub fn how_to_play() -> &'static str {
    "=== How to Play ===\n\
\n\
OBJECTIVE:\n\
Collect all three medallions to seal away the dragon and save the land!\n\
\n\
CONTROLS:\n\
u - Move Up        d - Move Down\n\
l - Move Left      r - Move Right\n\
t - Talk to NPCs   i - View inventory\n\
take - Pick up items\n\
use - Use items (e.g., Health Potion)\n\
enter - Enter a location (the village)\n\
exit - Return to the world map\n\
save - Save game   q - Save and quit\n\
\n\
MAP SYMBOLS:\n\
P - Your character     ! - Quest locations\n\
@ - NPCs to talk to    * - Items to collect\n\
H - The Village of Hope\n\
\n\
HOW TO WIN:\n\
1. Find the three quest locations marked with '!'\n\
2. Talk to the spirits in each location\n\
3. Collect all three medallions\n\
\n\
HOW TO LOSE:\n\
1. Your health starts at 100\n\
2. Dangerous areas drain 10 health per turn\n\
3. If your health reaches 0, you lose\n\
\n\
TIPS:\n\
- Talk to the Village Elder for guidance\n\
- Avoid dangerous areas until necessary\n\
- Plan your route to save health\n"
}

pub fn credits() -> &'static str {
    "=== Credits ===\nDragon's Bane, a text adventure.\nCreated by Muhammed Usame Toktas.\n"
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::{Item, Npc};

    #[test]
    fn map_symbols() {
        let mut grid = WorldGrid::empty(5, 1);
        grid.set_location(Position::new(0, 0), Location::new(VILLAGE_NAME, ""));
        grid.set_location(Position::new(1, 0), Location::new("Mountain Peak", ""));
        let mut npc = Location::new("Misty Lake", "");
        npc.add_npc(Npc::new("Lost Traveler"));
        grid.set_location(Position::new(2, 0), npc);
        let mut item = Location::new("Stone Circle", "");
        item.add_item(Item::named("Ancient Coin"));
        grid.set_location(Position::new(3, 0), item);

        let out = render_map(&grid, Position::new(4, 0));
        assert!(out.contains("| H ! @ * P |"), "{}", out);
        assert!(out.starts_with("=== World Map ==="));
    }

    #[test]
    fn village_title() {
        let v = WorldGrid::create_village_map(Position::new(7, 7));
        let out = render_map(&v, Position::new(2, 2));
        assert!(out.starts_with("=== Village Map ==="));
    }

    #[test]
    fn endings() {
        assert!(render_ending(Status::Running).is_none());
        assert!(render_ending(Status::Victory).unwrap().contains("won"));
        assert!(render_ending(Status::Defeat).unwrap().contains("Game Over"));
    }
}
