//! UpdateBlock (0x15), bridge to Bedrock client.
//!
//! Used to place and remove the fake blocks that back an open container.

use crate::types::BlockPos;

/// UpdateBlock packet.
///
/// `block` is a Bedrock block identifier; the upstream transport resolves it
/// to the client's runtime ID.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateBlock {
    pub position: BlockPos,
    pub block: String,
    pub flags: u32,
    pub layer: u32,
}

/// Flags: Neighbours (0x01) + Network (0x02).
pub const UPDATE_BLOCK_FLAGS_DEFAULT: u32 = 0x03;

impl UpdateBlock {
    /// Create an UpdateBlock for the default layer with standard flags.
    pub fn new(position: BlockPos, block: impl Into<String>) -> Self {
        Self {
            position,
            block: block.into(),
            flags: UPDATE_BLOCK_FLAGS_DEFAULT,
            layer: 0,
        }
    }
}
