//! Errors raised while setting up the inventory bridge.
//!
//! Runtime inventory operations never fail; see [`crate::session`].

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("failed to read item mappings: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid item mappings: {0}")]
    Json(#[from] serde_json::Error),

    #[error("item mappings are missing required entry {0}")]
    MissingEntry(&'static str),

    #[error("Java item id {id} is mapped by both {first} and {second}")]
    DuplicateJavaId {
        id: i32,
        first: String,
        second: String,
    },
}
