//! Item mapping registry: Java identifier <-> Java ID <-> Bedrock ID.
//!
//! A small canonical mapping ships with the crate; deployments load the full
//! table from a JSON file with the same shape.

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;

use crate::error::RegistryError;

/// Mapping bundled with the crate.
const ITEM_MAPPINGS_JSON: &str = include_str!("../data/items.json");

pub const AIR_IDENTIFIER: &str = "minecraft:air";
pub const BARRIER_IDENTIFIER: &str = "minecraft:barrier";

/// A single entry from the mapping JSON.
#[derive(Deserialize)]
struct RawItemEntry {
    java_id: i32,
    bedrock_id: i32,
    #[serde(default)]
    bedrock_data: i16,
}

/// How one item type is known on each side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemEntry {
    /// Namespaced Java identifier, e.g. `"minecraft:stone"`.
    pub java_identifier: String,
    pub java_id: i32,
    pub bedrock_id: i32,
    /// Bedrock damage value selecting the variant (e.g. planks wood type).
    pub bedrock_data: i16,
}

/// Registry of all mapped items.
#[derive(Debug)]
pub struct ItemRegistry {
    by_identifier: HashMap<String, ItemEntry>,
    by_java_id: HashMap<i32, String>,
}

impl ItemRegistry {
    /// Build the registry from the bundled mapping.
    pub fn bundled() -> Result<Self, RegistryError> {
        Self::from_json(ITEM_MAPPINGS_JSON)
    }

    /// Build the registry from a mapping file on disk.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, RegistryError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json(&contents)
    }

    pub fn from_json(json: &str) -> Result<Self, RegistryError> {
        let raw: HashMap<String, RawItemEntry> = serde_json::from_str(json)?;

        let mut by_identifier = HashMap::with_capacity(raw.len());
        let mut by_java_id = HashMap::with_capacity(raw.len());

        for (name, entry) in raw {
            if let Some(first) = by_java_id.insert(entry.java_id, name.clone()) {
                return Err(RegistryError::DuplicateJavaId {
                    id: entry.java_id,
                    first,
                    second: name,
                });
            }
            by_identifier.insert(
                name.clone(),
                ItemEntry {
                    java_identifier: name,
                    java_id: entry.java_id,
                    bedrock_id: entry.bedrock_id,
                    bedrock_data: entry.bedrock_data,
                },
            );
        }

        for required in [AIR_IDENTIFIER, BARRIER_IDENTIFIER] {
            if !by_identifier.contains_key(required) {
                return Err(RegistryError::MissingEntry(required));
            }
        }

        Ok(Self {
            by_identifier,
            by_java_id,
        })
    }

    /// Look up an item by its Java identifier.
    pub fn get(&self, identifier: &str) -> Option<&ItemEntry> {
        self.by_identifier.get(identifier)
    }

    /// Look up an item by its numeric Java ID.
    pub fn by_java_id(&self, id: i32) -> Option<&ItemEntry> {
        self.by_java_id
            .get(&id)
            .and_then(|name| self.by_identifier.get(name))
    }

    /// The barrier, used as the unusable-slot placeholder.
    pub fn barrier(&self) -> &ItemEntry {
        // Presence is checked in `from_json`.
        &self.by_identifier[BARRIER_IDENTIFIER]
    }

    pub fn len(&self) -> usize {
        self.by_identifier.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_identifier.is_empty()
    }
}
