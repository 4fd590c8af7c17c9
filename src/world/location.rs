use super::item::Item;

/// A non-player character standing in a location. Conversation content is
/// looked up by name through a dialogue provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Npc {
    pub name: String,
}

impl Npc {
    pub fn new(name: impl Into<String>) -> Self {
        Npc { name: name.into() }
    }
}

/// The content of one grid cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    pub name: String,
    pub description: String,
    /// True when the location can be entered as a sub-map.
    pub has_sub_map: bool,
    npcs: Vec<Npc>,
    items: Vec<Item>,
}

impl Location {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Location {
            name: name.into(),
            description: description.into(),
            has_sub_map: false,
            npcs: Vec::new(),
            items: Vec::new(),
        }
    }

    pub fn with_sub_map(mut self) -> Self {
        self.has_sub_map = true;
        self
    }

    pub fn npcs(&self) -> &[Npc] {
        &self.npcs
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn has_npc(&self) -> bool {
        !self.npcs.is_empty()
    }

    pub fn has_items(&self) -> bool {
        !self.items.is_empty()
    }

    /// The NPC that answers when the player talks here.
    pub fn first_npc(&self) -> Option<&Npc> {
        self.npcs.first()
    }

    pub fn add_npc(&mut self, npc: Npc) {
        self.npcs.push(npc);
    }

    pub fn add_item(&mut self, item: Item) {
        self.items.push(item);
    }

    /// Removes the item at a 1-based menu index.
    pub fn take_item(&mut self, index: usize) -> Option<Item> {
        let i = index.checked_sub(1)?;
        if i < self.items.len() {
            Some(self.items.remove(i))
        } else {
            None
        }
    }

    /// Puts an item back at a 1-based index (clamped to the end), used when
    /// the player could not carry it.
    pub fn return_item(&mut self, index: usize, item: Item) {
        let i = index.saturating_sub(1).min(self.items.len());
        self.items.insert(i, item);
    }

    /// Hazard locations drain health every turn the player spends in them.
    pub fn is_hazardous(&self) -> bool {
        HAZARD_MARKERS.iter().any(|m| self.name.contains(m))
    }
}

pub const HAZARD_MARKERS: [&str; 2] = ["Mountain Peak", "Dark Forest"];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn take_and_return_keep_order() {
        let mut loc = Location::new("Misty Lake", "A lake shrouded in eternal mist.");
        loc.add_item(Item::new("Rusty Key", "", 125));
        loc.add_item(Item::new("Ancient Coin", "", 100));
        assert!(loc.take_item(0).is_none());
        assert!(loc.take_item(3).is_none());
        let key = loc.take_item(1).unwrap();
        assert_eq!(key.name, "Rusty Key");
        loc.return_item(1, key);
        assert_eq!(loc.items()[0].name, "Rusty Key");
        assert_eq!(loc.items()[1].name, "Ancient Coin");
    }

    #[test]
    fn hazard_matches_substring() {
        assert!(Location::new("Mountain Peak", "").is_hazardous());
        assert!(Location::new("Dark Forest", "").is_hazardous());
        assert!(!Location::new("Mountain Pass", "").is_hazardous());
    }
}
