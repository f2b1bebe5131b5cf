//! PlayerHotbar (0x30), bridge to Bedrock client.
//!
//! Changes which hotbar slot the client holds.

use crate::types::container_id;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerHotbar {
    /// Hotbar slot (0-8).
    pub selected_slot: u32,
    pub window_id: u8,
    /// Whether the client should switch to `selected_slot`.
    pub select_slot: bool,
}

impl PlayerHotbar {
    /// Select `slot` in the player's own inventory.
    pub fn select(slot: u32) -> Self {
        Self {
            selected_slot: slot,
            window_id: container_id::INVENTORY,
            select_slot: true,
        }
    }
}
