//! Cloneable façade for talking to the runtime.
//!
//! [`RuntimeHandle`] hides channel plumbing. Controls are level-triggered: a
//! frontend publishes whatever is held right now and the simulation samples
//! the latest value once per frame.
use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::{broadcast, mpsc, oneshot, watch};

use game_core::{Controls, GameState};

use super::errors::{Result, RuntimeError};
use crate::events::{Event, EventBus, Topic};
use crate::workers::Command;

/// Client-facing handle to interact with the runtime
#[derive(Clone)]
pub struct RuntimeHandle {
    command_tx: mpsc::Sender<Command>,
    controls_tx: Arc<watch::Sender<Controls>>,
    snapshot_rx: watch::Receiver<Arc<GameState>>,
    event_bus: EventBus,
}

impl RuntimeHandle {
    pub(crate) fn new(
        command_tx: mpsc::Sender<Command>,
        controls_tx: Arc<watch::Sender<Controls>>,
        snapshot_rx: watch::Receiver<Arc<GameState>>,
        event_bus: EventBus,
    ) -> Self {
        Self {
            command_tx,
            controls_tx,
            snapshot_rx,
            event_bus,
        }
    }

    /// Replace the set of held controls. Takes effect on the next frame.
    pub fn set_controls(&self, controls: Controls) {
        self.controls_tx.send_replace(controls);
    }

    /// Controls the next frame will sample.
    pub fn controls(&self) -> Controls {
        *self.controls_tx.borrow()
    }

    /// State as of the last completed frame.
    pub fn snapshot(&self) -> Arc<GameState> {
        Arc::clone(&self.snapshot_rx.borrow())
    }

    /// Receiver that is notified after every frame.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let mut frames = handle.watch_state();
    /// while frames.changed().await.is_ok() {
    ///     let state = frames.borrow_and_update().clone();
    ///     draw(&state);
    /// }
    /// ```
    pub fn watch_state(&self) -> watch::Receiver<Arc<GameState>> {
        self.snapshot_rx.clone()
    }

    /// Query the current game state straight from the worker.
    ///
    /// Unlike [`RuntimeHandle::snapshot`] this waits for the worker, so the
    /// answer reflects every frame stepped before the query was received.
    pub async fn query_state(&self) -> Result<GameState> {
        let (reply_tx, reply_rx) = oneshot::channel();

        self.command_tx
            .send(Command::QueryState { reply: reply_tx })
            .await
            .map_err(|_| RuntimeError::CommandChannelClosed)?;

        reply_rx.await.map_err(RuntimeError::ReplyChannelClosed)
    }

    /// Ask the simulation worker to stop after the current frame.
    pub async fn shutdown(&self) -> Result<()> {
        self.command_tx
            .send(Command::Shutdown)
            .await
            .map_err(|_| RuntimeError::CommandChannelClosed)
    }

    /// Subscribe to events from a specific topic
    ///
    /// # Topics
    ///
    /// - `Topic::GameState` - events reported by each frame step
    /// - `Topic::Audio` - music track changes
    pub fn subscribe(&self, topic: Topic) -> broadcast::Receiver<Event> {
        self.event_bus.subscribe(topic)
    }

    /// Subscribe to multiple topics at once
    pub fn subscribe_multiple(&self, topics: &[Topic]) -> HashMap<Topic, broadcast::Receiver<Event>> {
        self.event_bus.subscribe_multiple(topics)
    }

    /// Get a reference to the event bus for advanced usage
    pub fn event_bus(&self) -> &EventBus {
        &self.event_bus
    }
}
