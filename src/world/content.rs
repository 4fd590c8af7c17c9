//! Fixed name/description pools used by world generation.

pub const PATH_NAME: &str = "Path";
pub const PATH_DESC: &str = "A well-traveled path through the land.";

pub const VILLAGE_NAME: &str = "Village of Hope";
pub const VILLAGE_DESC: &str =
    "The last bastion of hope in these troubled times. The village elder awaits your arrival.";
pub const VILLAGE_ELDER: &str = "Village Elder";

pub const FOREST_MEDALLION: &str = "Forest Medallion";
pub const WATER_MEDALLION: &str = "Water Medallion";
pub const MOUNTAIN_MEDALLION: &str = "Mountain Medallion";

/// All three are needed to seal the dragon away.
pub const MEDALLIONS: [&str; 3] = [FOREST_MEDALLION, WATER_MEDALLION, MOUNTAIN_MEDALLION];

pub struct Landmark {
    pub name: &'static str,
    pub description: &'static str,
    pub medallion: (&'static str, &'static str, u32),
    pub npc: &'static str,
}

pub const SACRED_GROVE: Landmark = Landmark {
    name: "Sacred Grove",
    description: "An ancient grove humming with magical energy. The Forest Medallion must be nearby.",
    medallion: (
        FOREST_MEDALLION,
        "An ancient medallion pulsing with nature's power.",
        100,
    ),
    npc: "Forest Spirit",
};

pub const WATER_SHRINE: Landmark = Landmark {
    name: "Water Spirit's Shrine",
    description:
        "An ancient shrine dedicated to the water spirit. The Water Medallion's power resonates here.",
    medallion: (
        WATER_MEDALLION,
        "A medallion that flows with water's essence.",
        100,
    ),
    npc: "Water Spirit",
};

pub const MOUNTAIN_PEAK: Landmark = Landmark {
    name: "Mountain Peak",
    description: "The frigid peak where the Mountain Medallion is said to be hidden.",
    medallion: (MOUNTAIN_MEDALLION, "A medallion carved from ancient stone.", 100),
    npc: "Mountain Hermit",
};

pub const FILLER_LOCATIONS: [(&str, &str); 12] = [
    ("Mystic Grove", "A mystical place filled with strange energies."),
    ("Ancient Ruins", "Ruins of an ancient civilization."),
    ("Crystal Cave", "A cave glittering with mysterious crystals."),
    ("Hidden Valley", "A peaceful valley hidden from the world."),
    ("Enchanted Clearing", "A clearing where magic flows freely."),
    ("Abandoned Temple", "An old temple reclaimed by nature."),
    ("Misty Lake", "A lake shrouded in eternal mist."),
    ("Stone Circle", "Ancient stones arranged in a perfect circle."),
    ("Forgotten Shrine", "A shrine dedicated to forgotten gods."),
    ("Dark Forest", "A dense, dark forest with ancient trees."),
    ("Mountain Pass", "A treacherous path through the mountains."),
    ("Sacred Spring", "A spring with healing properties."),
];

pub const NPC_NAMES: [&str; 7] = [
    "Wandering Merchant",
    "Lost Traveler",
    "Mysterious Stranger",
    "Forest Spirit",
    "Mountain Hermit",
    "Ancient Guardian",
    VILLAGE_ELDER,
];

pub const RANDOM_ITEMS: [(&str, &str, u32); 8] = [
    ("Health Potion", "Restores health when consumed", 50),
    ("Magic Scroll", "Contains ancient magical knowledge", 75),
    ("Ancient Coin", "Currency from a lost civilization", 100),
    ("Mysterious Gem", "Glows with mysterious energy", 150),
    ("Enchanted Ring", "A ring with strange markings", 200),
    ("Rusty Key", "Might unlock something important", 125),
    ("Sacred Relic", "A powerful artifact of the old world", 300),
    ("Crystal Shard", "Fragment of a larger crystal", 175),
];

/// Odds, in percent, used by the filler and population passes.
pub const LOCATION_CHANCE: u32 = 70;
pub const NPC_CHANCE: u32 = 30;
pub const ITEM_CHANCE: u32 = 20;

/// Number of random connecting paths carved after the centre cross.
pub const EXTRA_PATHS: usize = 5;
