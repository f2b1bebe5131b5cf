//! Per-container-kind behaviour.
//!
//! Each Java window kind maps to one [`InventoryTranslator`] variant, which
//! knows how the Bedrock client must be shown that window: which fake block
//! holds it, which Bedrock container type it opens as, and how its slots are
//! laid out.
//!
//! Every translator runs through the same four hooks, in this order:
//! `prepare` (place the holder), `open`, `update` (full contents), `close`.

use mc_bridge_proto::item_stack::BedrockItem;
use mc_bridge_proto::packets::{
    BlockActorData, ContainerClose, ContainerOpen, InventoryContent, UpdateBlock,
};
use mc_bridge_proto::types::{container_id, BlockPos, ContainerType, WindowType};
use tracing::debug;

use crate::container::{
    hotbar_slots, main_slots, Container, PlayerInventory, ARMOR_SIZE, ARMOR_START, OFFHAND_SLOT,
};
use crate::item::unusable_space_block;
use crate::item_registry::ItemRegistry;
use crate::transport::PacketSink;

/// Bedrock slot counts of the fake chest blocks.
const SINGLE_CHEST_SLOTS: usize = 27;
const DOUBLE_CHEST_SLOTS: usize = 54;

/// Lore of the placeholder filling Bedrock slots the Java window lacks.
const UNUSABLE_SLOT_DESCRIPTION: &str = "This slot does not exist in the server's container";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InventoryTranslator {
    /// The player's own inventory; active whenever no other window is open.
    Player,
    /// Java chests of up to 27 slots, shown as a single Bedrock chest.
    Chest { size: usize },
    /// Java chests of 36 to 54 slots, shown as a paired Bedrock double chest.
    DoubleChest { size: usize },
    Furnace,
    Dispenser,
    Hopper,
}

/// Data a translator needs to render items.
#[derive(Debug, Clone, Copy)]
pub struct RenderContext<'a> {
    pub registry: &'a ItemRegistry,
    /// Display name of the unusable-slot placeholder.
    pub unusable_item_name: &'a str,
}

impl InventoryTranslator {
    /// Translator for a Java window kind, if the bridge supports it.
    pub fn for_window(window_type: WindowType) -> Option<Self> {
        match window_type {
            WindowType::Generic9x(1..=3) => Some(Self::Chest {
                size: window_type.size(),
            }),
            WindowType::Generic9x(4..=6) => Some(Self::DoubleChest {
                size: window_type.size(),
            }),
            WindowType::Generic3x3 => Some(Self::Dispenser),
            WindowType::Furnace => Some(Self::Furnace),
            WindowType::Hopper => Some(Self::Hopper),
            WindowType::Generic9x(_) | WindowType::Other => None,
        }
    }

    pub fn is_double_chest(self) -> bool {
        matches!(self, Self::DoubleChest { .. })
    }

    /// Number of slots the Bedrock window has.
    pub fn bedrock_size(self) -> usize {
        match self {
            Self::Player => 36,
            Self::Chest { .. } => SINGLE_CHEST_SLOTS,
            Self::DoubleChest { .. } => DOUBLE_CHEST_SLOTS,
            Self::Furnace => 3,
            Self::Dispenser => 9,
            Self::Hopper => 5,
        }
    }

    pub fn container_type(self) -> ContainerType {
        match self {
            Self::Player => ContainerType::Inventory,
            Self::Chest { .. } | Self::DoubleChest { .. } => ContainerType::Container,
            Self::Furnace => ContainerType::Furnace,
            Self::Dispenser => ContainerType::Dispenser,
            Self::Hopper => ContainerType::Hopper,
        }
    }

    /// Bedrock block that holds the window on the client.
    fn holder_block(self) -> Option<&'static str> {
        match self {
            Self::Player => None,
            Self::Chest { .. } | Self::DoubleChest { .. } => Some("minecraft:chest"),
            Self::Furnace => Some("minecraft:furnace"),
            Self::Dispenser => Some("minecraft:dispenser"),
            Self::Hopper => Some("minecraft:hopper"),
        }
    }

    /// Place the fake holder block(s) near the player and record where.
    pub fn prepare(self, container: &mut Container, player_position: BlockPos, sink: &PacketSink) {
        let Some(block) = self.holder_block() else {
            return;
        };
        // Out of sight below the player.
        let position = player_position.offset(0, -2, 0);
        sink.send_upstream(UpdateBlock::new(position, block));

        if self.is_double_chest() {
            let partner = position.offset(1, 0, 0);
            sink.send_upstream(UpdateBlock::new(partner, block));
            sink.send_upstream(BlockActorData::chest_pair(position, partner, true));
            sink.send_upstream(BlockActorData::chest_pair(partner, position, false));
        }

        container.holder = Some(position);
    }

    /// Show the window on the client.
    pub fn open(self, container: &Container, sink: &PacketSink) {
        if self == Self::Player {
            return;
        }
        let Some(position) = container.holder else {
            debug!("Window {} opened without a holder block", container.id);
            return;
        };
        debug!(
            "Opening window {} as container type {} at {position}",
            container.id,
            self.container_type().id()
        );
        sink.send_upstream(ContainerOpen {
            window_id: container.id,
            container_type: self.container_type(),
            position,
            entity_unique_id: -1,
        });
    }

    /// Send the full contents of the window, then of the player inventory.
    pub fn update(
        self,
        container: &Container,
        player: &PlayerInventory,
        ctx: RenderContext<'_>,
        sink: &PacketSink,
    ) {
        if self != Self::Player {
            let mut items: Vec<BedrockItem> = container
                .items()
                .iter()
                .take(self.bedrock_size())
                .map(|item| item.to_upstream(ctx.registry))
                .collect();
            if items.len() < self.bedrock_size() {
                let filler = unusable_space_block(
                    ctx.registry,
                    ctx.unusable_item_name,
                    UNUSABLE_SLOT_DESCRIPTION,
                );
                items.resize(self.bedrock_size(), filler);
            }
            sink.send_upstream(InventoryContent {
                window_id: container.id as u32,
                items,
            });
        }
        update_player_inventory(player, ctx, sink);
    }

    /// Close the window on the client and remove its holder block(s).
    pub fn close(self, window_id: u8, holder: Option<BlockPos>, sink: &PacketSink) {
        if self == Self::Player {
            return;
        }
        sink.send_upstream(ContainerClose {
            window_id,
            server_initiated: false,
        });
        if let Some(position) = holder {
            sink.send_upstream(UpdateBlock::new(position, "minecraft:air"));
            if self.is_double_chest() {
                sink.send_upstream(UpdateBlock::new(position.offset(1, 0, 0), "minecraft:air"));
            }
        }
    }
}

/// Bedrock window 0 lists the hotbar first, then the main inventory.
fn update_player_inventory(player: &PlayerInventory, ctx: RenderContext<'_>, sink: &PacketSink) {
    let items = hotbar_slots()
        .chain(main_slots())
        .map(|slot| player.get(slot).to_upstream(ctx.registry))
        .collect();
    sink.send_upstream(InventoryContent {
        window_id: container_id::INVENTORY as u32,
        items,
    });

    let armor = (ARMOR_START..ARMOR_START + ARMOR_SIZE)
        .map(|slot| player.get(slot).to_upstream(ctx.registry))
        .collect();
    sink.send_upstream(InventoryContent {
        window_id: container_id::ARMOR as u32,
        items: armor,
    });

    sink.send_upstream(InventoryContent {
        window_id: container_id::OFFHAND as u32,
        items: vec![player.get(OFFHAND_SLOT).to_upstream(ctx.registry)],
    });
}
