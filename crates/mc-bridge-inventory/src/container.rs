//! Player inventory and open-container storage.
//!
//! Slots use Java numbering. For the player inventory that is:
//!
//! ```text
//! 0        crafting output
//! 1-4      crafting grid
//! 5-8      armor
//! 9-35     main inventory (27 slots)
//! 36-44    hotbar (9 slots)
//! 45       offhand
//! ```

use std::ops::Range;

use mc_bridge_proto::types::{BlockPos, WindowType};

use crate::item::ItemStack;

pub const PLAYER_INVENTORY_SIZE: usize = 46;
pub const ARMOR_START: usize = 5;
pub const ARMOR_SIZE: usize = 4;
pub const MAIN_START: usize = 9;
pub const MAIN_SIZE: usize = 27;
pub const HOTBAR_START: usize = 36;
pub const HOTBAR_SIZE: usize = 9;
pub const OFFHAND_SLOT: usize = 45;

/// Java slots of the main inventory body.
pub fn main_slots() -> Range<usize> {
    MAIN_START..MAIN_START + MAIN_SIZE
}

/// Java slots of the hotbar.
pub fn hotbar_slots() -> Range<usize> {
    HOTBAR_START..HOTBAR_START + HOTBAR_SIZE
}

/// The player's own inventory: always open, window ID 0.
#[derive(Debug, Clone)]
pub struct PlayerInventory {
    items: Vec<ItemStack>,
    /// Item being dragged by the player.
    cursor: ItemStack,
    /// Currently selected hotbar slot (0-8).
    held_slot: u8,
}

impl Default for PlayerInventory {
    fn default() -> Self {
        Self::new()
    }
}

impl PlayerInventory {
    pub const WINDOW_ID: u8 = 0;

    /// Create an empty inventory.
    pub fn new() -> Self {
        Self {
            items: vec![ItemStack::empty(); PLAYER_INVENTORY_SIZE],
            cursor: ItemStack::empty(),
            held_slot: 0,
        }
    }

    /// Item in a Java slot. Out-of-range slots read as empty.
    pub fn get(&self, slot: usize) -> &ItemStack {
        static EMPTY: ItemStack = ItemStack {
            java_id: 0,
            count: 0,
            tag: None,
        };
        self.items.get(slot).unwrap_or(&EMPTY)
    }

    /// Set a Java slot. Returns false for an out-of-range slot.
    pub fn set(&mut self, slot: usize, item: ItemStack) -> bool {
        match self.items.get_mut(slot) {
            Some(s) => {
                *s = item;
                true
            }
            None => false,
        }
    }

    pub fn items(&self) -> &[ItemStack] {
        &self.items
    }

    pub fn cursor(&self) -> &ItemStack {
        &self.cursor
    }

    pub fn set_cursor(&mut self, item: ItemStack) {
        self.cursor = item;
    }

    pub fn held_slot(&self) -> u8 {
        self.held_slot
    }

    /// Select a hotbar slot. Values past the hotbar are ignored.
    pub fn set_held_slot(&mut self, slot: u8) -> bool {
        if (slot as usize) < HOTBAR_SIZE {
            self.held_slot = slot;
            true
        } else {
            false
        }
    }

    /// Java slot of the held hotbar item.
    pub fn held_inventory_slot(&self) -> usize {
        HOTBAR_START + self.held_slot as usize
    }

    /// Get the currently held item.
    pub fn item_in_hand(&self) -> &ItemStack {
        self.get(self.held_inventory_slot())
    }
}

/// A container window the Java server opened, other than the player inventory.
#[derive(Debug, Clone, PartialEq)]
pub struct Container {
    pub id: u8,
    pub window_type: WindowType,
    pub title: String,
    items: Vec<ItemStack>,
    /// Where the fake holder block was placed, once prepared.
    pub holder: Option<BlockPos>,
}

impl Container {
    pub fn new(id: u8, window_type: WindowType, title: impl Into<String>) -> Self {
        Self {
            id,
            window_type,
            title: title.into(),
            items: vec![ItemStack::empty(); window_type.size()],
            holder: None,
        }
    }

    pub fn size(&self) -> usize {
        self.items.len()
    }

    pub fn get(&self, slot: usize) -> Option<&ItemStack> {
        self.items.get(slot)
    }

    /// Set a container slot. Returns false for an out-of-range slot.
    pub fn set(&mut self, slot: usize, item: ItemStack) -> bool {
        match self.items.get_mut(slot) {
            Some(s) => {
                *s = item;
                true
            }
            None => false,
        }
    }

    pub fn items(&self) -> &[ItemStack] {
        &self.items
    }
}

/// Result of resolving a window ID.
#[derive(Debug, Clone, Copy)]
pub enum ContainerRef<'a> {
    Player(&'a PlayerInventory),
    Open(&'a Container),
}

impl ContainerRef<'_> {
    pub fn id(&self) -> u8 {
        match self {
            ContainerRef::Player(_) => PlayerInventory::WINDOW_ID,
            ContainerRef::Open(container) => container.id,
        }
    }

    pub fn holder(&self) -> Option<BlockPos> {
        match self {
            ContainerRef::Player(_) => None,
            ContainerRef::Open(container) => container.holder,
        }
    }

    pub fn is_player(&self) -> bool {
        matches!(self, ContainerRef::Player(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ranges_are_contiguous_and_disjoint() {
        assert_eq!(main_slots().end, hotbar_slots().start);
        assert_eq!(main_slots().len(), 27);
        assert_eq!(hotbar_slots().len(), 9);
        assert!(hotbar_slots().end <= PLAYER_INVENTORY_SIZE);
    }

    #[test]
    fn held_slot_bounds() {
        let mut inv = PlayerInventory::new();
        assert!(inv.set_held_slot(8));
        assert_eq!(inv.held_inventory_slot(), 44);
        assert!(!inv.set_held_slot(9));
        assert_eq!(inv.held_slot(), 8);
    }

    #[test]
    fn item_in_hand_follows_held_slot() {
        let mut inv = PlayerInventory::new();
        inv.set(38, ItemStack::new(1, 10));
        assert!(inv.item_in_hand().is_empty());
        inv.set_held_slot(2);
        assert_eq!(inv.item_in_hand(), &ItemStack::new(1, 10));
    }

    #[test]
    fn out_of_range_slots() {
        let mut inv = PlayerInventory::new();
        assert!(!inv.set(PLAYER_INVENTORY_SIZE, ItemStack::new(1, 1)));
        assert!(inv.get(100).is_empty());

        let mut chest = Container::new(3, WindowType::Hopper, "Hopper");
        assert_eq!(chest.size(), 5);
        assert!(chest.set(4, ItemStack::new(1, 1)));
        assert!(!chest.set(5, ItemStack::new(1, 1)));
        assert!(chest.get(5).is_none());
    }

    #[test]
    fn container_ref_ids() {
        let inv = PlayerInventory::new();
        let chest = Container::new(7, WindowType::Generic9x(3), "Chest");
        assert_eq!(ContainerRef::Player(&inv).id(), 0);
        assert!(ContainerRef::Player(&inv).is_player());
        assert_eq!(ContainerRef::Open(&chest).id(), 7);
        assert_eq!(ContainerRef::Open(&chest).holder(), None);
    }
}
