//! BlockActorData (0x38), bridge to Bedrock client.
//!
//! Carries block entity data; the bridge uses it to pair the two halves of a
//! fake double chest.

use crate::tag::{CompoundBuilder, NbtCompound, NbtTag};
use crate::types::BlockPos;

/// Block entity data packet.
#[derive(Debug, Clone, PartialEq)]
pub struct BlockActorData {
    /// Position of the block entity.
    pub position: BlockPos,
    pub data: NbtCompound,
}

impl BlockActorData {
    /// Chest entity at `position` paired with the chest at `pair`.
    pub fn chest_pair(position: BlockPos, pair: BlockPos, lead: bool) -> Self {
        let data = CompoundBuilder::new()
            .put_string("id", "Chest")
            .put("x", NbtTag::Int(position.x))
            .put("y", NbtTag::Int(position.y))
            .put("z", NbtTag::Int(position.z))
            .put("pairx", NbtTag::Int(pair.x))
            .put("pairz", NbtTag::Int(pair.z))
            .put("pairlead", NbtTag::Byte(lead as i8))
            .build();
        Self { position, data }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chest_pair_points_at_partner() {
        let pkt = BlockActorData::chest_pair(BlockPos::new(1, 60, 2), BlockPos::new(2, 60, 2), true);
        assert_eq!(pkt.data["pairx"], NbtTag::Int(2));
        assert_eq!(pkt.data["pairz"], NbtTag::Int(2));
        assert_eq!(pkt.data["pairlead"], NbtTag::Byte(1));
    }
}
