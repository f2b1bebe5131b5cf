//! Pick-block: make a named item the held item.
//!
//! Mirrors what the Java client does on a middle click. Look in the hotbar,
//! then the main inventory, and in creative mode conjure the item.

use mc_bridge_proto::item_stack::JavaItem;
use mc_bridge_proto::packets::{CreativeInventoryAction, PickItem, PlayerHotbar};
use mc_bridge_proto::types::GameMode;
use tracing::debug;

use crate::container::{hotbar_slots, main_slots, HOTBAR_START};
use crate::item_registry::AIR_IDENTIFIER;
use crate::session::InventorySession;

impl InventorySession {
    /// Select `identifier` (a Java item identifier) in the player's hand.
    ///
    /// 1. In the hotbar: select that slot on the client.
    /// 2. In the main inventory: ask the server to move it to the hotbar. The
    ///    server reports where it ended up.
    /// 3. Otherwise, in creative mode only: create one in the held slot, or in
    ///    the first empty hotbar slot if the held slot is occupied.
    pub fn find_or_create(&self, identifier: &str) {
        if identifier == AIR_IDENTIFIER {
            return;
        }
        let inventory = self.player_inventory();
        let registry = self.registry();

        if let Some(slot) = hotbar_slots().find(|&i| inventory.get(i).is_item(registry, identifier)) {
            // The client confirms the new held slot with its own equipment
            // packet, which reaches the server the normal way.
            self.select_hotbar_slot(slot);
            return;
        }

        if let Some(slot) = main_slots().find(|&i| inventory.get(i).is_item(registry, identifier)) {
            self.sink().send_downstream(PickItem { slot: slot as i32 });
            return;
        }

        if self.game_mode() != GameMode::Creative {
            return;
        }

        let held = inventory.held_inventory_slot();
        let mut target = held;
        if !inventory.item_in_hand().is_empty() {
            if let Some(empty) = hotbar_slots().find(|&i| inventory.get(i).is_empty()) {
                target = empty;
            }
        }

        let Some(entry) = registry.get(identifier) else {
            debug!("Cannot find item for block {identifier}");
            return;
        };

        if target != held {
            self.select_hotbar_slot(target);
        }
        self.sink().send_downstream(CreativeInventoryAction {
            slot: target as i16,
            item: Some(JavaItem::new(entry.java_id, 1)),
        });
    }

    /// Move the client's held-item selection to a Java hotbar slot.
    fn select_hotbar_slot(&self, slot: usize) {
        let hotbar_index = (slot - HOTBAR_START) as u32;
        self.sink().send_upstream(PlayerHotbar::select(hotbar_index));
    }
}
