//! Fire-once timers for work a session defers.
//!
//! A scheduled task is never run on the timer itself. It is posted back to the
//! session's own event loop (see [`crate::driver`]), so session state keeps a
//! single owner.

use std::time::Duration;

use tokio::sync::mpsc;
use tracing::debug;

use crate::container::Container;
use crate::translator::InventoryTranslator;

/// A container open waiting out the reopen delay.
#[derive(Debug, Clone)]
pub struct PendingOpen {
    pub window_id: u8,
    /// Open generation at the time of the request; see
    /// [`crate::InventoryConfig::cancel_superseded_opens`].
    pub generation: u64,
    pub translator: InventoryTranslator,
    /// The container as prepared. Used when the window is no longer the
    /// session's open container by the time the task fires.
    pub container: Container,
}

#[derive(Debug, Clone)]
pub enum ScheduledTask {
    FinishOpen(PendingOpen),
}

pub trait Scheduler: Send {
    /// Deliver `task` to the session after `delay`. Must not block.
    fn schedule(&self, delay: Duration, task: ScheduledTask);
}

/// Sleeps on a spawned tokio task, then posts into the session's channel.
#[derive(Debug, Clone)]
pub struct TokioScheduler {
    tx: mpsc::UnboundedSender<ScheduledTask>,
}

impl TokioScheduler {
    pub fn new() -> (Self, mpsc::UnboundedReceiver<ScheduledTask>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }
}

impl Scheduler for TokioScheduler {
    fn schedule(&self, delay: Duration, task: ScheduledTask) {
        let tx = self.tx.clone();
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            if tx.send(task).is_err() {
                debug!("Session ended before scheduled task fired");
            }
        });
    }
}
