use serde::Deserialize;

/// `[inventory]` section of the bridge configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct InventoryConfig {
    /// Minimum time between a window close and the next window open, in ms.
    /// The Bedrock client drops an open that arrives while it is still
    /// animating the previous close.
    #[serde(default = "default_min_reopen_interval_ms")]
    pub min_reopen_interval_ms: u64,
    /// Lowest open delay for double chests, in ms, however long ago the last
    /// close was. The paired fake chest blocks need this long to merge.
    #[serde(default = "default_double_chest_open_floor_ms")]
    pub double_chest_open_floor_ms: u64,
    /// Drop a delayed open when a later open or close request has replaced it.
    /// Off by default: both the delayed open and the later request go out.
    #[serde(default)]
    pub cancel_superseded_opens: bool,
    /// Display name of the barrier item that fills unusable Bedrock slots.
    #[serde(default = "default_unusable_item_name")]
    pub unusable_item_name: String,
}

fn default_min_reopen_interval_ms() -> u64 {
    700
}

fn default_double_chest_open_floor_ms() -> u64 {
    200
}

fn default_unusable_item_name() -> String {
    "Unusable Space".into()
}

impl Default for InventoryConfig {
    fn default() -> Self {
        Self {
            min_reopen_interval_ms: default_min_reopen_interval_ms(),
            double_chest_open_floor_ms: default_double_chest_open_floor_ms(),
            cancel_superseded_opens: false,
            unusable_item_name: default_unusable_item_name(),
        }
    }
}
