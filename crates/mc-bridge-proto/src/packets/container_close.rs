//! ContainerClose (0x2F), bridge to Bedrock client.
//!
//! Closes a container window on the client.

/// Closes a container window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContainerClose {
    /// The window ID of the container to close.
    pub window_id: u8,
    /// Whether the close was initiated by the server side rather than the client.
    pub server_initiated: bool,
}
