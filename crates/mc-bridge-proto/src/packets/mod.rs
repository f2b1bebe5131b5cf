//! Packets the inventory bridge sends in either direction.

pub mod block_actor_data;
pub mod container_close;
pub mod container_open;
pub mod creative_inventory_action;
pub mod inventory_content;
pub mod inventory_slot;
pub mod pick_item;
pub mod player_hotbar;
pub mod update_block;

pub use block_actor_data::BlockActorData;
pub use container_close::ContainerClose;
pub use container_open::ContainerOpen;
pub use creative_inventory_action::CreativeInventoryAction;
pub use inventory_content::InventoryContent;
pub use inventory_slot::InventorySlot;
pub use pick_item::PickItem;
pub use player_hotbar::PlayerHotbar;
pub use update_block::UpdateBlock;

/// Packet IDs.
pub mod id {
    /// Bedrock (upstream) game packet IDs.
    pub const UPDATE_BLOCK: u32 = 0x15;
    pub const CONTAINER_OPEN: u32 = 0x2E;
    pub const CONTAINER_CLOSE: u32 = 0x2F;
    pub const PLAYER_HOTBAR: u32 = 0x30;
    pub const INVENTORY_CONTENT: u32 = 0x31;
    pub const INVENTORY_SLOT: u32 = 0x32;
    pub const BLOCK_ACTOR_DATA: u32 = 0x38;

    /// Java (downstream) serverbound play packet IDs.
    pub const JAVA_PICK_ITEM: u32 = 0x17;
    pub const JAVA_CREATIVE_INVENTORY_ACTION: u32 = 0x26;
}

/// Everything the bridge sends to the Bedrock client.
#[derive(Debug, Clone, PartialEq)]
pub enum UpstreamPacket {
    UpdateBlock(UpdateBlock),
    BlockActorData(BlockActorData),
    ContainerOpen(ContainerOpen),
    ContainerClose(ContainerClose),
    PlayerHotbar(PlayerHotbar),
    InventoryContent(InventoryContent),
    InventorySlot(InventorySlot),
}

impl UpstreamPacket {
    pub fn packet_id(&self) -> u32 {
        match self {
            UpstreamPacket::UpdateBlock(_) => id::UPDATE_BLOCK,
            UpstreamPacket::BlockActorData(_) => id::BLOCK_ACTOR_DATA,
            UpstreamPacket::ContainerOpen(_) => id::CONTAINER_OPEN,
            UpstreamPacket::ContainerClose(_) => id::CONTAINER_CLOSE,
            UpstreamPacket::PlayerHotbar(_) => id::PLAYER_HOTBAR,
            UpstreamPacket::InventoryContent(_) => id::INVENTORY_CONTENT,
            UpstreamPacket::InventorySlot(_) => id::INVENTORY_SLOT,
        }
    }
}

/// Everything the bridge sends to the Java server.
#[derive(Debug, Clone, PartialEq)]
pub enum DownstreamPacket {
    PickItem(PickItem),
    CreativeInventoryAction(CreativeInventoryAction),
}

impl DownstreamPacket {
    pub fn packet_id(&self) -> u32 {
        match self {
            DownstreamPacket::PickItem(_) => id::JAVA_PICK_ITEM,
            DownstreamPacket::CreativeInventoryAction(_) => id::JAVA_CREATIVE_INVENTORY_ACTION,
        }
    }
}

macro_rules! impl_from_packet {
    ($direction:ident, $($variant:ident),+ $(,)?) => {
        $(
            impl From<$variant> for $direction {
                fn from(pkt: $variant) -> Self {
                    $direction::$variant(pkt)
                }
            }
        )+
    };
}

impl_from_packet!(
    UpstreamPacket,
    UpdateBlock,
    BlockActorData,
    ContainerOpen,
    ContainerClose,
    PlayerHotbar,
    InventoryContent,
    InventorySlot,
);
impl_from_packet!(DownstreamPacket, PickItem, CreativeInventoryAction);
