//! Pick Item, bridge to Java server.
//!
//! Asks the server to swap the given main-inventory slot into the hotbar.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PickItem {
    /// Java inventory slot holding the wanted item.
    pub slot: i32,
}
