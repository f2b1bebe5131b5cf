//! Item stacks as they appear on each side of the bridge.
//!
//! [`BedrockItem`] is the upstream (client-facing) `ItemData` shape;
//! [`JavaItem`] is the downstream (server-facing) `ItemStack` shape.

use crate::tag::NbtCompound;

/// A single item stack in the Bedrock protocol.
///
/// `runtime_id == 0` means the slot is empty (air).
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BedrockItem {
    /// Item runtime ID from the StartGame item table. 0 = air/empty.
    pub runtime_id: i32,
    /// Item damage/variant metadata.
    pub damage: i16,
    /// Number of items in this stack.
    pub count: u16,
    /// Item tag (enchantments, custom names, etc.).
    pub tag: Option<NbtCompound>,
    /// Blocks this item can be placed on (adventure mode).
    pub can_place_on: Vec<String>,
    /// Blocks this item can destroy (adventure mode).
    pub can_destroy: Vec<String>,
    /// Block runtime ID if this item represents a placeable block.
    pub block_runtime_id: i32,
}

/// Which parts of two [`BedrockItem`]s [`BedrockItem::equals`] compares.
///
/// The runtime ID is always compared.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemCompare {
    pub count: bool,
    /// Damage and block runtime ID.
    pub metadata: bool,
    pub tag: bool,
    /// `can_place_on` and `can_destroy`.
    pub adventure: bool,
}

impl ItemCompare {
    /// What decides whether two stacks merge: count and adventure lists ignored.
    pub const STACKING: Self = Self {
        count: false,
        metadata: true,
        tag: true,
        adventure: false,
    };
}

impl BedrockItem {
    /// An empty slot (air).
    pub fn empty() -> Self {
        Self::default()
    }

    /// Create a simple item stack with no tag or special data.
    pub fn new(runtime_id: i32, damage: i16, count: u16) -> Self {
        Self {
            runtime_id,
            damage,
            count,
            ..Self::default()
        }
    }

    pub fn with_tag(mut self, tag: NbtCompound) -> Self {
        self.tag = Some(tag);
        self
    }

    /// Whether this slot is empty.
    pub fn is_empty(&self) -> bool {
        self.runtime_id == 0 || self.count == 0
    }

    /// Compare against `other`, looking only at the parts `compare` selects.
    pub fn equals(&self, other: &BedrockItem, compare: ItemCompare) -> bool {
        self.runtime_id == other.runtime_id
            && (!compare.count || self.count == other.count)
            && (!compare.metadata
                || (self.damage == other.damage
                    && self.block_runtime_id == other.block_runtime_id))
            && (!compare.tag || self.tag == other.tag)
            && (!compare.adventure
                || (self.can_place_on == other.can_place_on
                    && self.can_destroy == other.can_destroy))
    }
}

/// A single item stack in the Java protocol. `None` slots are sent as absent.
#[derive(Debug, Clone, PartialEq)]
pub struct JavaItem {
    /// Numeric Java item ID.
    pub id: i32,
    pub count: u8,
    pub tag: Option<NbtCompound>,
}

impl JavaItem {
    pub fn new(id: i32, count: u8) -> Self {
        Self {
            id,
            count,
            tag: None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.id == 0 || self.count == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tag::{CompoundBuilder, NbtTag};

    #[test]
    fn is_empty_checks() {
        assert!(BedrockItem::empty().is_empty());
        assert!(BedrockItem::new(0, 0, 10).is_empty());
        assert!(BedrockItem::new(1, 0, 0).is_empty());
        assert!(!BedrockItem::new(1, 0, 1).is_empty());
        assert!(JavaItem::new(0, 1).is_empty());
        assert!(!JavaItem::new(5, 1).is_empty());
    }

    #[test]
    fn stacking_compare_ignores_count_and_adventure_lists() {
        let mut a = BedrockItem::new(5, 0, 3);
        a.can_destroy = vec!["minecraft:stone".into()];
        let b = BedrockItem::new(5, 0, 40);

        assert!(a.equals(&b, ItemCompare::STACKING));
        let with_count = ItemCompare {
            count: true,
            ..ItemCompare::STACKING
        };
        assert!(!a.equals(&b, with_count));
        let with_adventure = ItemCompare {
            adventure: true,
            ..ItemCompare::STACKING
        };
        assert!(!a.equals(&BedrockItem::new(5, 0, 3), with_adventure));
    }

    #[test]
    fn stacking_compare_checks_metadata_and_tag() {
        let a = BedrockItem::new(5, 0, 1);
        assert!(!a.equals(&BedrockItem::new(5, 1, 1), ItemCompare::STACKING));
        assert!(!a.equals(&BedrockItem::new(6, 0, 1), ItemCompare::STACKING));

        let mut block = BedrockItem::new(5, 0, 1);
        block.block_runtime_id = 99;
        assert!(!a.equals(&block, ItemCompare::STACKING));

        let tagged = BedrockItem::new(5, 0, 1)
            .with_tag(CompoundBuilder::new().put("Damage", NbtTag::Int(2)).build());
        assert!(!a.equals(&tagged, ItemCompare::STACKING));
    }
}
