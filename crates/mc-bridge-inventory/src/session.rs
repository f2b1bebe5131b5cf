//! Per-session inventory state and the open/close state machine.
//!
//! The Bedrock client ignores a container open that arrives while it is still
//! animating the close of the previous one, so opens are delayed until
//! `min_reopen_interval_ms` has passed since the last close. Double chests
//! always wait at least `double_chest_open_floor_ms`.
//!
//! None of the operations here fail. Unknown windows and other bad requests
//! are logged and ignored; the worst outcome is a stale client UI.

use std::sync::Arc;
use std::time::Duration;

use mc_bridge_proto::packets::InventorySlot;
use mc_bridge_proto::types::{BlockPos, GameMode};
use tokio::time::Instant;
use tracing::debug;

use crate::config::InventoryConfig;
use crate::container::{Container, ContainerRef, PlayerInventory};
use crate::item::ItemStack;
use crate::item_registry::ItemRegistry;
use crate::scheduler::{PendingOpen, ScheduledTask, Scheduler};
use crate::translator::{InventoryTranslator, RenderContext};
use crate::transport::PacketSink;

/// Where the session's non-player window is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncState {
    Closed,
    /// Prepared, waiting out the reopen delay.
    Opening,
    Open,
}

pub struct InventorySession {
    config: InventoryConfig,
    registry: Arc<ItemRegistry>,
    sink: PacketSink,
    scheduler: Box<dyn Scheduler>,
    player_inventory: PlayerInventory,
    open_container: Option<Container>,
    /// Behaviour of the open window; `Player` when none is open.
    translator: InventoryTranslator,
    state: SyncState,
    last_close: Option<Instant>,
    /// Bumped by every open and close request.
    open_generation: u64,
    game_mode: GameMode,
    player_position: BlockPos,
}

impl InventorySession {
    pub fn new(
        config: InventoryConfig,
        registry: Arc<ItemRegistry>,
        sink: PacketSink,
        scheduler: Box<dyn Scheduler>,
    ) -> Self {
        Self {
            config,
            registry,
            sink,
            scheduler,
            player_inventory: PlayerInventory::new(),
            open_container: None,
            translator: InventoryTranslator::Player,
            state: SyncState::Closed,
            last_close: None,
            open_generation: 0,
            game_mode: GameMode::Survival,
            player_position: BlockPos::default(),
        }
    }

    // -- Accessors --

    pub fn state(&self) -> SyncState {
        self.state
    }

    pub fn translator(&self) -> InventoryTranslator {
        self.translator
    }

    pub fn open_container(&self) -> Option<&Container> {
        self.open_container.as_ref()
    }

    pub fn last_close(&self) -> Option<Instant> {
        self.last_close
    }

    pub fn player_inventory(&self) -> &PlayerInventory {
        &self.player_inventory
    }

    pub fn player_inventory_mut(&mut self) -> &mut PlayerInventory {
        &mut self.player_inventory
    }

    pub fn game_mode(&self) -> GameMode {
        self.game_mode
    }

    pub fn set_game_mode(&mut self, game_mode: GameMode) {
        self.game_mode = game_mode;
    }

    pub fn set_player_position(&mut self, position: BlockPos) {
        self.player_position = position;
    }

    pub(crate) fn registry(&self) -> &ItemRegistry {
        &self.registry
    }

    pub(crate) fn sink(&self) -> &PacketSink {
        &self.sink
    }

    fn render_context(&self) -> RenderContext<'_> {
        RenderContext {
            registry: &self.registry,
            unusable_item_name: &self.config.unusable_item_name,
        }
    }

    // -- Window lookup --

    /// The window with this ID: the player inventory for 0, otherwise the
    /// open container if its ID matches.
    pub fn resolve(&self, window_id: u8) -> Option<ContainerRef<'_>> {
        if window_id == PlayerInventory::WINDOW_ID {
            return Some(ContainerRef::Player(&self.player_inventory));
        }
        self.open_container
            .as_ref()
            .filter(|container| container.id == window_id)
            .map(ContainerRef::Open)
    }

    /// Store a slot the Java server sent for `window_id`.
    pub fn set_slot(&mut self, window_id: u8, slot: usize, item: ItemStack) {
        let stored = if window_id == PlayerInventory::WINDOW_ID {
            self.player_inventory.set(slot, item)
        } else {
            match self.open_container.as_mut() {
                Some(container) if container.id == window_id => container.set(slot, item),
                _ => {
                    debug!("Slot update for unknown window {window_id}");
                    return;
                }
            }
        };
        if !stored {
            debug!("Slot {slot} out of range for window {window_id}");
        }
    }

    // -- Open / close --

    /// How long an open requested now must wait.
    pub fn open_delay(&self, translator: InventoryTranslator) -> Duration {
        let interval = Duration::from_millis(self.config.min_reopen_interval_ms);
        let remaining = match self.last_close {
            Some(closed_at) => interval.saturating_sub(closed_at.elapsed()),
            None => Duration::ZERO,
        };
        if translator.is_double_chest() {
            remaining.max(Duration::from_millis(self.config.double_chest_open_floor_ms))
        } else {
            remaining
        }
    }

    /// Open a window the Java server asked for.
    ///
    /// A window that is already open or opening is closed first. When the
    /// reopen delay has not passed, the open and the contents refresh are
    /// scheduled and the session stays `Opening` until they fire.
    pub fn request_open(&mut self, mut container: Container) {
        if container.id == PlayerInventory::WINDOW_ID {
            debug!("Window ID 0 is the player inventory, not opening it as a container");
            return;
        }
        let Some(translator) = InventoryTranslator::for_window(container.window_type) else {
            debug!(
                "No translator for window {} ({:?}), not opening",
                container.id, container.window_type
            );
            return;
        };

        if let Some(current) = self.open_container.as_ref().map(|c| c.id) {
            debug!("Closing window {current} before opening {}", container.id);
            self.request_close(current);
        }

        self.open_generation += 1;
        self.translator = translator;
        translator.prepare(&mut container, self.player_position, &self.sink);

        let delay = self.open_delay(translator);
        if delay.is_zero() {
            self.open_container = Some(container);
            self.state = SyncState::Open;
            if let Some(container) = &self.open_container {
                translator.open(container, &self.sink);
                translator.update(container, &self.player_inventory, self.render_context(), &self.sink);
            }
        } else {
            debug!("Delaying open of window {} by {delay:?}", container.id);
            self.state = SyncState::Opening;
            self.scheduler.schedule(
                delay,
                ScheduledTask::FinishOpen(PendingOpen {
                    window_id: container.id,
                    generation: self.open_generation,
                    translator,
                    container: container.clone(),
                }),
            );
            self.open_container = Some(container);
        }
    }

    /// Close a window. Always clears the cursor and resets to the player
    /// inventory, even when `window_id` is unknown.
    pub fn request_close(&mut self, window_id: u8) {
        self.player_inventory.set_cursor(ItemStack::empty());
        self.update_cursor();

        let resolved = self.resolve(window_id).map(|c| (c.id(), c.holder()));
        match resolved {
            Some((id, holder)) => {
                self.translator.close(id, holder, &self.sink);
                self.last_close = Some(Instant::now());
            }
            None => debug!("Close for unknown window {window_id}"),
        }

        self.open_generation += 1;
        self.translator = InventoryTranslator::Player;
        self.open_container = None;
        self.state = SyncState::Closed;
    }

    /// Run a task this session scheduled earlier.
    pub fn run_scheduled(&mut self, task: ScheduledTask) {
        match task {
            ScheduledTask::FinishOpen(pending) => self.finish_open(pending),
        }
    }

    fn finish_open(&mut self, pending: PendingOpen) {
        let current = pending.generation == self.open_generation;
        if !current && self.config.cancel_superseded_opens {
            debug!("Dropping superseded open of window {}", pending.window_id);
            return;
        }

        let live = current
            && self
                .open_container
                .as_ref()
                .is_some_and(|c| c.id == pending.window_id);
        if live {
            self.state = SyncState::Open;
        }

        // Slot updates that arrived while opening are in the live container.
        let container = match &self.open_container {
            Some(c) if live => c,
            _ => &pending.container,
        };
        pending.translator.open(container, &self.sink);
        pending.translator.update(
            container,
            &self.player_inventory,
            self.render_context(),
            &self.sink,
        );
    }

    /// Send the cursor contents to the client.
    fn update_cursor(&self) {
        let item = self.player_inventory.cursor().to_upstream(&self.registry);
        self.sink.send_upstream(InventorySlot::cursor(item));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    use mc_bridge_proto::packets::{ContainerClose, DownstreamPacket, UpstreamPacket};
    use mc_bridge_proto::types::WindowType;
    use tokio::sync::mpsc::UnboundedReceiver;

    /// Records scheduled tasks instead of running timers.
    #[derive(Clone, Default)]
    struct RecordingScheduler {
        tasks: Arc<Mutex<Vec<(Duration, ScheduledTask)>>>,
    }

    impl Scheduler for RecordingScheduler {
        fn schedule(&self, delay: Duration, task: ScheduledTask) {
            self.tasks.lock().unwrap().push((delay, task));
        }
    }

    impl RecordingScheduler {
        fn take(&self) -> Vec<(Duration, ScheduledTask)> {
            std::mem::take(&mut *self.tasks.lock().unwrap())
        }
    }

    struct Harness {
        session: InventorySession,
        scheduler: RecordingScheduler,
        up: UnboundedReceiver<UpstreamPacket>,
        down: UnboundedReceiver<DownstreamPacket>,
    }

    impl Harness {
        fn new(config: InventoryConfig) -> Self {
            let registry = Arc::new(ItemRegistry::bundled().unwrap());
            let (sink, up, down) = PacketSink::channel();
            let scheduler = RecordingScheduler::default();
            let session =
                InventorySession::new(config, registry, sink, Box::new(scheduler.clone()));
            Self {
                session,
                scheduler,
                up,
                down,
            }
        }

        fn upstream(&mut self) -> Vec<UpstreamPacket> {
            let mut out = Vec::new();
            while let Ok(pkt) = self.up.try_recv() {
                out.push(pkt);
            }
            out
        }
    }

    fn chest(id: u8) -> Container {
        Container::new(id, WindowType::Generic9x(3), "Chest")
    }

    fn double_chest(id: u8) -> Container {
        Container::new(id, WindowType::Generic9x(6), "Large Chest")
    }

    fn opened(packets: &[UpstreamPacket]) -> Vec<u8> {
        packets
            .iter()
            .filter_map(|p| match p {
                UpstreamPacket::ContainerOpen(open) => Some(open.window_id),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn starts_closed() {
        let h = Harness::new(InventoryConfig::default());
        assert_eq!(h.session.state(), SyncState::Closed);
        assert!(h.session.open_container().is_none());
        assert_eq!(h.session.translator(), InventoryTranslator::Player);
    }

    #[tokio::test(start_paused = true)]
    async fn resolve_zero_is_always_player_inventory() {
        let mut h = Harness::new(InventoryConfig::default());
        assert!(h.session.resolve(0).unwrap().is_player());

        h.session.request_open(chest(1));
        assert_eq!(h.session.resolve(1).unwrap().id(), 1);
        assert!(h.session.resolve(2).is_none());

        h.session.request_close(1);
        assert!(h.session.resolve(0).unwrap().is_player());
        assert!(h.session.resolve(1).is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn first_open_is_immediate() {
        let mut h = Harness::new(InventoryConfig::default());
        h.session.request_open(chest(1));

        assert_eq!(h.session.state(), SyncState::Open);
        assert!(h.scheduler.take().is_empty());
        let packets = h.upstream();
        assert_eq!(opened(&packets), vec![1]);
        // holder block, open, window contents, inventory, armor, offhand
        assert_eq!(packets.len(), 6);
        assert!(matches!(packets[0], UpstreamPacket::UpdateBlock(_)));
        assert!(matches!(packets[2], UpstreamPacket::InventoryContent(ref c) if c.window_id == 1));
    }

    #[tokio::test(start_paused = true)]
    async fn reopen_waits_out_remaining_interval() {
        let mut h = Harness::new(InventoryConfig::default());
        h.session.request_open(chest(1));
        h.session.request_close(1);
        h.upstream();

        tokio::time::advance(Duration::from_millis(300)).await;
        h.session.request_open(chest(2));

        assert_eq!(h.session.state(), SyncState::Opening);
        let tasks = h.scheduler.take();
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].0, Duration::from_millis(400));
        // Prepared but not opened yet.
        let packets = h.upstream();
        assert!(opened(&packets).is_empty());
        assert_eq!(packets.len(), 1);

        let (_, task) = tasks.into_iter().next().unwrap();
        h.session.run_scheduled(task);
        assert_eq!(h.session.state(), SyncState::Open);
        assert_eq!(opened(&h.upstream()), vec![2]);
    }

    #[tokio::test(start_paused = true)]
    async fn delay_never_negative() {
        let mut h = Harness::new(InventoryConfig::default());
        h.session.request_open(chest(1));
        h.session.request_close(1);

        tokio::time::advance(Duration::from_millis(5000)).await;
        assert_eq!(h.session.open_delay(InventoryTranslator::Chest { size: 27 }), Duration::ZERO);
        h.session.request_open(chest(2));
        assert_eq!(h.session.state(), SyncState::Open);
        assert!(h.scheduler.take().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn double_chest_waits_at_least_floor() {
        let mut h = Harness::new(InventoryConfig::default());
        let double = InventoryTranslator::DoubleChest { size: 54 };
        assert_eq!(h.session.open_delay(double), Duration::from_millis(200));

        h.session.request_open(double_chest(1));
        assert_eq!(h.session.state(), SyncState::Opening);
        assert_eq!(h.scheduler.take()[0].0, Duration::from_millis(200));

        h.session.request_close(1);
        tokio::time::advance(Duration::from_millis(100)).await;
        assert_eq!(h.session.open_delay(double), Duration::from_millis(600));
        tokio::time::advance(Duration::from_millis(550)).await;
        assert_eq!(h.session.open_delay(double), Duration::from_millis(200));
    }

    #[tokio::test(start_paused = true)]
    async fn close_clears_cursor_even_for_unknown_window() {
        let mut h = Harness::new(InventoryConfig::default());
        h.session
            .player_inventory_mut()
            .set_cursor(ItemStack::new(1, 5));

        h.session.request_close(42);

        assert!(h.session.player_inventory().cursor().is_empty());
        let packets = h.upstream();
        assert_eq!(packets.len(), 1);
        let UpstreamPacket::InventorySlot(slot) = &packets[0] else {
            panic!("expected cursor update, got {:?}", packets[0]);
        };
        assert_eq!(slot.window_id, 124);
        assert!(slot.item.is_empty());
        // Nothing resolved, so the reopen timer was not touched.
        assert!(h.session.last_close().is_none());
        assert_eq!(h.session.state(), SyncState::Closed);
    }

    #[tokio::test(start_paused = true)]
    async fn close_runs_hook_and_resets_translator() {
        let mut h = Harness::new(InventoryConfig::default());
        h.session.request_open(chest(3));
        h.upstream();

        h.session.request_close(3);
        let packets = h.upstream();
        assert!(matches!(packets[0], UpstreamPacket::InventorySlot(_)));
        assert_eq!(
            packets[1],
            ContainerClose {
                window_id: 3,
                server_initiated: false
            }
            .into()
        );
        assert!(matches!(packets[2], UpstreamPacket::UpdateBlock(ref b) if b.block == "minecraft:air"));
        assert!(h.session.last_close().is_some());
        assert_eq!(h.session.translator(), InventoryTranslator::Player);
        assert!(h.session.open_container().is_none());
        assert_eq!(h.session.state(), SyncState::Closed);
    }

    #[tokio::test(start_paused = true)]
    async fn closing_player_inventory_records_close_time() {
        let mut h = Harness::new(InventoryConfig::default());
        h.session.request_close(0);
        assert!(h.session.last_close().is_some());
        // Only the cursor update; the player translator closes silently.
        assert_eq!(h.upstream().len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn open_over_open_window_closes_it_first() {
        let mut h = Harness::new(InventoryConfig::default());
        h.session.request_open(chest(1));
        h.upstream();

        h.session.request_open(chest(2));
        let packets = h.upstream();
        assert!(packets.iter().any(|p| matches!(
            p,
            UpstreamPacket::ContainerClose(ContainerClose { window_id: 1, .. })
        )));
        assert_eq!(h.session.state(), SyncState::Opening);
        assert_eq!(h.scheduler.take()[0].0, Duration::from_millis(700));
        assert_eq!(h.session.open_container().unwrap().id, 2);
    }

    #[tokio::test(start_paused = true)]
    async fn superseded_open_still_fires_by_default() {
        let mut h = Harness::new(InventoryConfig::default());
        h.session.request_close(0);
        h.session.request_open(chest(5));
        h.session.request_close(5);
        h.upstream();

        let (_, task) = h.scheduler.take().into_iter().next().unwrap();
        h.session.run_scheduled(task);

        assert_eq!(opened(&h.upstream()), vec![5]);
        // The window was closed in between; the late open does not revive it.
        assert_eq!(h.session.state(), SyncState::Closed);
        assert!(h.session.open_container().is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn superseded_open_dropped_when_configured() {
        let config = InventoryConfig {
            cancel_superseded_opens: true,
            ..InventoryConfig::default()
        };
        let mut h = Harness::new(config);
        h.session.request_close(0);
        h.session.request_open(chest(5));
        h.session.request_close(5);
        h.upstream();

        let (_, task) = h.scheduler.take().into_iter().next().unwrap();
        h.session.run_scheduled(task);
        assert!(h.upstream().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn delayed_refresh_uses_live_contents() {
        let mut h = Harness::new(InventoryConfig::default());
        h.session.request_close(0);
        h.session.request_open(chest(6));
        h.session.set_slot(6, 0, ItemStack::new(1, 32));
        h.upstream();

        let (_, task) = h.scheduler.take().into_iter().next().unwrap();
        h.session.run_scheduled(task);

        let packets = h.upstream();
        let contents = packets
            .iter()
            .find_map(|p| match p {
                UpstreamPacket::InventoryContent(c) if c.window_id == 6 => Some(c),
                _ => None,
            })
            .unwrap();
        assert_eq!(contents.items[0].runtime_id, 1);
        assert_eq!(contents.items[0].count, 32);
    }

    #[test]
    fn unsupported_window_is_ignored() {
        let mut h = Harness::new(InventoryConfig::default());
        h.session
            .request_open(Container::new(1, WindowType::Other, "Anvil"));
        assert_eq!(h.session.state(), SyncState::Closed);
        assert!(h.session.open_container().is_none());
        assert!(h.upstream().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn window_zero_is_never_opened_as_container() {
        let mut h = Harness::new(InventoryConfig::default());
        h.session.request_open(chest(0));

        assert_eq!(h.session.state(), SyncState::Closed);
        assert!(h.session.open_container().is_none());
        assert_eq!(h.session.translator(), InventoryTranslator::Player);
        assert!(h.upstream().is_empty());
        assert!(h.scheduler.take().is_empty());

        // Slot 0 of window 0 still lands in the player inventory.
        h.session.set_slot(0, 0, ItemStack::new(1, 1));
        assert_eq!(h.session.player_inventory().get(0), &ItemStack::new(1, 1));
    }

    #[tokio::test(start_paused = true)]
    async fn close_of_mismatched_window_still_resets() {
        let mut h = Harness::new(InventoryConfig::default());
        h.session.request_open(chest(1));
        h.upstream();

        h.session.request_close(7);

        assert!(h.session.open_container().is_none());
        assert_eq!(h.session.translator(), InventoryTranslator::Player);
        assert_eq!(h.session.state(), SyncState::Closed);
        assert!(h.session.last_close().is_none());
        let packets = h.upstream();
        assert!(!packets
            .iter()
            .any(|p| matches!(p, UpstreamPacket::ContainerClose(_))));
        // Only the cursor update went out.
        assert_eq!(packets.len(), 1);
        assert!(matches!(packets[0], UpstreamPacket::InventorySlot(_)));
    }

    #[tokio::test(start_paused = true)]
    async fn reopen_exactly_at_interval_is_immediate() {
        let mut h = Harness::new(InventoryConfig::default());
        h.session.request_open(chest(1));
        h.session.request_close(1);

        tokio::time::advance(Duration::from_millis(700)).await;
        h.session.request_open(chest(2));

        assert_eq!(h.session.state(), SyncState::Open);
        assert!(h.scheduler.take().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn reopen_one_ms_early_waits_one_ms() {
        let mut h = Harness::new(InventoryConfig::default());
        h.session.request_open(chest(1));
        h.session.request_close(1);

        tokio::time::advance(Duration::from_millis(699)).await;
        h.session.request_open(chest(2));

        assert_eq!(h.session.state(), SyncState::Opening);
        let tasks = h.scheduler.take();
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].0, Duration::from_millis(1));
    }

    #[test]
    fn set_slot_ignores_unknown_window() {
        let mut h = Harness::new(InventoryConfig::default());
        h.session.set_slot(0, 40, ItemStack::new(1, 1));
        h.session.set_slot(9, 0, ItemStack::new(1, 1));
        h.session.set_slot(0, 99, ItemStack::new(1, 1));
        assert_eq!(h.session.player_inventory().get(40), &ItemStack::new(1, 1));
        assert!(h.down.try_recv().is_err());
    }
}
