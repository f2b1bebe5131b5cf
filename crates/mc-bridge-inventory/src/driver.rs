//! Event loop that owns one [`InventorySession`].
//!
//! Translated packets from both connections arrive as [`SessionEvent`]s and
//! scheduled continuations arrive from the session's [`TokioScheduler`]. Both
//! are handled on the same task, one at a time, so the session needs no
//! locking.

use std::sync::Arc;

use mc_bridge_proto::types::{BlockPos, GameMode, WindowType};
use tokio::sync::mpsc;
use tracing::{debug, info};

use crate::config::InventoryConfig;
use crate::container::Container;
use crate::item::ItemStack;
use crate::item_registry::ItemRegistry;
use crate::scheduler::{ScheduledTask, TokioScheduler};
use crate::session::InventorySession;
use crate::transport::PacketSink;

/// Something that happened on either connection that the inventory cares about.
#[derive(Debug, Clone)]
pub enum SessionEvent {
    /// The Java server opened a window.
    OpenWindow {
        window_id: u8,
        window_type: WindowType,
        title: String,
    },
    /// Either side closed a window.
    CloseWindow(u8),
    /// The Bedrock client asked for an item in hand (pick block).
    PickItem(String),
    SetGameMode(GameMode),
    /// The Bedrock client changed its hotbar selection.
    SetHeldSlot(u8),
    /// The Java server set a slot of `window_id` (0 = player inventory).
    SetSlot {
        window_id: u8,
        slot: usize,
        item: ItemStack,
    },
    PlayerMoved(BlockPos),
}

pub struct SessionDriver {
    session: InventorySession,
    events: mpsc::UnboundedReceiver<SessionEvent>,
    scheduled: mpsc::UnboundedReceiver<ScheduledTask>,
}

impl SessionDriver {
    /// Build a driver with a tokio-backed scheduler. Returns the handle used
    /// to feed it events; dropping every handle stops the driver.
    pub fn new(
        config: InventoryConfig,
        registry: Arc<ItemRegistry>,
        sink: PacketSink,
    ) -> (Self, mpsc::UnboundedSender<SessionEvent>) {
        let (scheduler, scheduled) = TokioScheduler::new();
        let (tx, events) = mpsc::unbounded_channel();
        let session = InventorySession::new(config, registry, sink, Box::new(scheduler));
        (
            Self {
                session,
                events,
                scheduled,
            },
            tx,
        )
    }

    pub fn session(&self) -> &InventorySession {
        &self.session
    }

    /// Process events until every sender is dropped, then hand the session
    /// back. Scheduled tasks still pending at that point are discarded.
    pub async fn run(mut self) -> InventorySession {
        loop {
            tokio::select! {
                event = self.events.recv() => {
                    match event {
                        Some(e) => self.handle(e),
                        None => break,
                    }
                }
                Some(task) = self.scheduled.recv() => {
                    self.session.run_scheduled(task);
                }
            }
        }
        info!("Inventory session ended");
        self.session
    }

    pub fn handle(&mut self, event: SessionEvent) {
        debug!("Session event {event:?}");
        match event {
            SessionEvent::OpenWindow {
                window_id,
                window_type,
                title,
            } => {
                self.session
                    .request_open(Container::new(window_id, window_type, title));
            }
            SessionEvent::CloseWindow(window_id) => self.session.request_close(window_id),
            SessionEvent::PickItem(identifier) => self.session.find_or_create(&identifier),
            SessionEvent::SetGameMode(mode) => self.session.set_game_mode(mode),
            SessionEvent::SetHeldSlot(slot) => {
                if !self.session.player_inventory_mut().set_held_slot(slot) {
                    debug!("Ignoring invalid hotbar slot {slot}");
                }
            }
            SessionEvent::SetSlot {
                window_id,
                slot,
                item,
            } => self.session.set_slot(window_id, slot, item),
            SessionEvent::PlayerMoved(position) => self.session.set_player_position(position),
        }
    }
}
