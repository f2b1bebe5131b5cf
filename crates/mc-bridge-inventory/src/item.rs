//! The bridge's own item stack and its conversions to both wire forms.

use mc_bridge_proto::item_stack::{BedrockItem, JavaItem};
use mc_bridge_proto::tag::{CompoundBuilder, NbtCompound};
use tracing::debug;

use crate::item_registry::{ItemEntry, ItemRegistry};

/// Minecraft formatting codes used in item names and lore.
const RESET: &str = "\u{a7}r";
const DARK_PURPLE: &str = "\u{a7}5";

/// An item stack in the bridge's canonical form, keyed by Java item ID.
///
/// `java_id == 0` or `count == 0` means the slot is empty.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ItemStack {
    pub java_id: i32,
    pub count: u8,
    pub tag: Option<NbtCompound>,
}

impl ItemStack {
    /// An empty slot.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn new(java_id: i32, count: u8) -> Self {
        Self {
            java_id,
            count,
            tag: None,
        }
    }

    pub fn with_tag(mut self, tag: NbtCompound) -> Self {
        self.tag = Some(tag);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.java_id == 0 || self.count == 0
    }

    /// The registry entry for this stack's item type.
    pub fn entry<'r>(&self, registry: &'r ItemRegistry) -> Option<&'r ItemEntry> {
        registry.by_java_id(self.java_id)
    }

    /// Whether this stack is a non-empty stack of `identifier`.
    pub fn is_item(&self, registry: &ItemRegistry, identifier: &str) -> bool {
        !self.is_empty()
            && self
                .entry(registry)
                .is_some_and(|entry| entry.java_identifier == identifier)
    }

    /// Build from a slot the Java server sent; `None` is an empty slot.
    pub fn from_downstream(item: Option<JavaItem>) -> Self {
        match item {
            Some(item) if !item.is_empty() => Self {
                java_id: item.id,
                count: item.count,
                tag: item.tag,
            },
            _ => Self::empty(),
        }
    }

    /// The Java wire form; empty slots are absent.
    pub fn to_downstream(&self) -> Option<JavaItem> {
        if self.is_empty() {
            return None;
        }
        Some(JavaItem {
            id: self.java_id,
            count: self.count,
            tag: self.tag.clone(),
        })
    }

    /// The Bedrock wire form. Items with no mapping are shown as empty.
    pub fn to_upstream(&self, registry: &ItemRegistry) -> BedrockItem {
        if self.is_empty() {
            return BedrockItem::empty();
        }
        let Some(entry) = self.entry(registry) else {
            debug!("No Bedrock mapping for Java item {}", self.java_id);
            return BedrockItem::empty();
        };
        BedrockItem {
            tag: self.tag.clone(),
            ..BedrockItem::new(entry.bedrock_id, entry.bedrock_data, self.count as u16)
        }
    }
}

/// A barrier with a custom name and lore explaining why part of the
/// inventory cannot be used.
pub fn unusable_space_block(registry: &ItemRegistry, name: &str, description: &str) -> BedrockItem {
    let display = CompoundBuilder::new()
        .put_string("Name", format!("{RESET}{name}"))
        .put_string_list("Lore", [format!("{RESET}{DARK_PURPLE}{description}")])
        .build();
    let root = CompoundBuilder::new().put_compound("display", display).build();

    let barrier = registry.barrier();
    BedrockItem::new(barrier.bedrock_id, 0, 1).with_tag(root)
}
