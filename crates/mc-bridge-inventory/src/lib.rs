//! Inventory synchronization between a Bedrock client and a Java server.
//!
//! One [`InventorySession`] per connected player owns the open container, the
//! cursor, and the reopen timing. Everything it does is observable only as
//! packets pushed into its [`PacketSink`].

pub mod config;
pub mod container;
pub mod driver;
pub mod equivalence;
pub mod error;
pub mod item;
pub mod item_registry;
mod resolver;
pub mod scheduler;
pub mod session;
pub mod translator;
pub mod transport;

pub use config::InventoryConfig;
pub use container::{Container, ContainerRef, PlayerInventory};
pub use driver::{SessionDriver, SessionEvent};
pub use equivalence::{stackable, StackRef};
pub use error::RegistryError;
pub use item::ItemStack;
pub use item_registry::{ItemEntry, ItemRegistry};
pub use scheduler::{Scheduler, ScheduledTask, TokioScheduler};
pub use session::{InventorySession, SyncState};
pub use translator::InventoryTranslator;
pub use transport::PacketSink;
