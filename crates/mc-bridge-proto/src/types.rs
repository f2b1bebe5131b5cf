//! Shared value types used by both protocol directions.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Bedrock container ids with a fixed meaning.
pub mod container_id {
    pub const INVENTORY: u8 = 0;
    pub const OFFHAND: u8 = 119;
    pub const ARMOR: u8 = 120;
    /// Cursor and other UI-only slots.
    pub const UI: u8 = 124;
}

/// Bedrock container type sent in `ContainerOpen`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContainerType {
    Inventory,
    Container,
    Furnace,
    Dispenser,
    Hopper,
}

impl ContainerType {
    pub fn id(self) -> i8 {
        match self {
            ContainerType::Inventory => -1,
            ContainerType::Container => 0,
            ContainerType::Furnace => 2,
            ContainerType::Dispenser => 6,
            ContainerType::Hopper => 8,
        }
    }
}

// ---------------------------------------------------------------------------
// BlockPos (i32 x, y, z)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct BlockPos {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl BlockPos {
    pub fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    pub fn offset(self, dx: i32, dy: i32, dz: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            z: self.z + dz,
        }
    }
}

impl fmt::Display for BlockPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

// ---------------------------------------------------------------------------
// GameMode
// ---------------------------------------------------------------------------

/// Game mode as reported by the Java server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameMode {
    #[default]
    Survival,
    Creative,
    Adventure,
    Spectator,
}

impl FromStr for GameMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "survival" | "0" => Ok(GameMode::Survival),
            "creative" | "1" => Ok(GameMode::Creative),
            "adventure" | "2" => Ok(GameMode::Adventure),
            "spectator" | "3" => Ok(GameMode::Spectator),
            other => Err(format!("unknown game mode: {other}")),
        }
    }
}

// ---------------------------------------------------------------------------
// WindowType
// ---------------------------------------------------------------------------

/// Java window (menu) type carried by the server's open-window packet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WindowType {
    /// `generic_9xN`, N rows of nine slots (1..=6).
    Generic9x(u8),
    Generic3x3,
    Furnace,
    Hopper,
    /// Any menu the bridge has no translator for.
    Other,
}

impl WindowType {
    /// Number of container slots, not counting the player inventory part.
    pub fn size(self) -> usize {
        match self {
            WindowType::Generic9x(rows) => rows as usize * 9,
            WindowType::Generic3x3 => 9,
            WindowType::Furnace => 3,
            WindowType::Hopper => 5,
            WindowType::Other => 0,
        }
    }
}

impl FromStr for WindowType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.strip_prefix("minecraft:").unwrap_or(s);
        if let Some(rows) = name.strip_prefix("generic_9x") {
            return match rows.parse::<u8>() {
                Ok(r @ 1..=6) => Ok(WindowType::Generic9x(r)),
                _ => Err(format!("invalid chest rows in {s}")),
            };
        }
        Ok(match name {
            "generic_3x3" => WindowType::Generic3x3,
            "furnace" => WindowType::Furnace,
            "hopper" => WindowType::Hopper,
            _ => WindowType::Other,
        })
    }
}
