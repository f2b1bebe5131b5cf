//! ContainerOpen (0x2E), bridge to Bedrock client.
//!
//! Opens a container window (chest, furnace, etc.) on the client.

use crate::types::{BlockPos, ContainerType};

/// Opens a container window for the player.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContainerOpen {
    /// Window ID, taken from the Java server's window.
    pub window_id: u8,
    pub container_type: ContainerType,
    /// Position of the block holding the container.
    pub position: BlockPos,
    /// Entity unique ID (-1 for block containers).
    pub entity_unique_id: i64,
}
