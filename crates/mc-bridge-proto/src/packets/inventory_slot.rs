//! InventorySlot (0x32), bridge to Bedrock client.
//!
//! Updates a single slot in a container.

use crate::item_stack::BedrockItem;
use crate::types::container_id;

/// Update a single container slot.
#[derive(Debug, Clone, PartialEq)]
pub struct InventorySlot {
    /// Container window ID.
    pub window_id: u32,
    /// Slot index within the container.
    pub slot: u32,
    /// The item to set in the slot.
    pub item: BedrockItem,
}

impl InventorySlot {
    /// The cursor lives in slot 0 of the UI container.
    pub fn cursor(item: BedrockItem) -> Self {
        Self {
            window_id: container_id::UI as u32,
            slot: 0,
            item,
        }
    }
}
