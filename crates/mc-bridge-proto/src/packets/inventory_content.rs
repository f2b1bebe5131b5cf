//! InventoryContent (0x31), bridge to Bedrock client.
//!
//! Sends the full contents of a container window to the client.

use crate::item_stack::BedrockItem;

/// Full contents of a container window.
#[derive(Debug, Clone, PartialEq)]
pub struct InventoryContent {
    /// Container window ID: 0 = inventory, 119 = offhand, 120 = armor.
    pub window_id: u32,
    /// All item slots in the container, in Bedrock slot order.
    pub items: Vec<BedrockItem>,
}
