//! Bedrock (upstream) and Java (downstream) item and packet shapes used by the
//! inventory bridge.
//!
//! Packets are plain values. Framing and byte encoding belong to the
//! transports that carry them.

pub mod item_stack;
pub mod packets;
pub mod tag;
pub mod types;
