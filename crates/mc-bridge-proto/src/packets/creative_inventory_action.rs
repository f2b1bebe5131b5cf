//! Set Creative Mode Slot, bridge to Java server.
//!
//! Places an item directly into a player inventory slot. Only honoured by the
//! server while the player is in creative mode.

use crate::item_stack::JavaItem;

#[derive(Debug, Clone, PartialEq)]
pub struct CreativeInventoryAction {
    /// Java inventory slot (36-44 for the hotbar).
    pub slot: i16,
    /// `None` clears the slot.
    pub item: Option<JavaItem>,
}
