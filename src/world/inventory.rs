//! Bounded item storage carried by the player.
use super::item::Item;
use crate::errors::GameError;

/// Maximum number of items a player can carry.
pub const MAX_ITEMS: usize = 10;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Inventory {
    items: Vec<Item>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.items.len() >= MAX_ITEMS
    }

    /// Adds an item at the end. At capacity the item is returned untouched
    /// inside [`GameError::InventoryFull`].
    pub fn add(&mut self, item: Item) -> Result<(), GameError> {
        if self.is_full() {
            return Err(GameError::InventoryFull(item));
        }
        self.items.push(item);
        Ok(())
    }

    /// Removes the first item with the given name.
    pub fn remove(&mut self, name: &str) -> Option<Item> {
        let idx = self.items.iter().position(|i| i.is_named(name))?;
        Some(self.items.remove(idx))
    }

    pub fn has_item(&self, name: &str) -> bool {
        self.items.iter().any(|i| i.is_named(name))
    }

    /// Looks up an item by 1-based menu index.
    pub fn get_numbered(&self, index: usize) -> Option<&Item> {
        index.checked_sub(1).and_then(|i| self.items.get(i))
    }

    pub fn names(&self) -> Vec<String> {
        self.items.iter().map(|i| i.name.clone()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coin(n: usize) -> Item {
        Item::new(format!("Coin {}", n), "shiny", 1)
    }

    #[test]
    fn eleventh_item_is_rejected_and_returned() {
        let mut inv = Inventory::new();
        for n in 0..MAX_ITEMS {
            inv.add(coin(n)).expect("room left");
        }
        let before = inv.clone();
        match inv.add(Item::new("Crystal Shard", "", 175)) {
            Err(GameError::InventoryFull(item)) => assert_eq!(item.name, "Crystal Shard"),
            other => panic!("expected InventoryFull, got {:?}", other),
        }
        assert_eq!(inv, before);
        assert_eq!(inv.len(), MAX_ITEMS);
    }

    #[test]
    fn remove_takes_a_single_instance() {
        let mut inv = Inventory::new();
        inv.add(Item::new("Health Potion", "", 50)).unwrap();
        inv.add(Item::new("Health Potion", "", 50)).unwrap();
        assert!(inv.remove("Health Potion").is_some());
        assert_eq!(inv.len(), 1);
        assert!(inv.has_item("Health Potion"));
        assert!(inv.remove("Rusty Key").is_none());
    }

    #[test]
    fn numbered_lookup_is_one_based() {
        let mut inv = Inventory::new();
        inv.add(coin(1)).unwrap();
        assert!(inv.get_numbered(0).is_none());
        assert_eq!(inv.get_numbered(1).map(|i| i.name.as_str()), Some("Coin 1"));
        assert!(inv.get_numbered(2).is_none());
    }
}
