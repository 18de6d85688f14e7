//! Simulation worker that owns the authoritative [`game_core::GameState`].
//!
//! Steps [`game_core::GameEngine`] once per frame tick with the latest
//! controls, publishes the resulting [`GameEvent`]s and a fresh snapshot, and
//! answers commands from [`crate::RuntimeHandle`] between frames.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{mpsc, oneshot, watch};
use tokio::time::{Instant, MissedTickBehavior};
use tracing::{debug, info};

use game_core::{Controls, FrameInput, GameEngine, GameEvent, GameState, Timestamp};

use crate::events::{Event, EventBus, GameStateEvent};
use crate::oracle::OracleManager;

/// Commands that can be sent to the simulation worker
pub enum Command {
    /// Query the current game state (read-only).
    QueryState { reply: oneshot::Sender<GameState> },
    /// Stop the frame loop.
    Shutdown,
}

/// Background task that steps the game.
pub struct SimulationWorker {
    state: GameState,
    oracles: OracleManager,
    frame_interval: Duration,
    command_rx: mpsc::Receiver<Command>,
    controls_rx: watch::Receiver<Controls>,
    snapshot_tx: watch::Sender<Arc<GameState>>,
    event_bus: EventBus,
}

impl SimulationWorker {
    pub fn new(
        state: GameState,
        oracles: OracleManager,
        frame_interval: Duration,
        command_rx: mpsc::Receiver<Command>,
        controls_rx: watch::Receiver<Controls>,
        snapshot_tx: watch::Sender<Arc<GameState>>,
        event_bus: EventBus,
    ) -> Self {
        Self {
            state,
            oracles,
            frame_interval,
            command_rx,
            controls_rx,
            snapshot_tx,
            event_bus,
        }
    }

    /// Main worker loop.
    ///
    /// Runs until [`Command::Shutdown`] arrives or every handle is dropped.
    pub async fn run(mut self) {
        let started = Instant::now();
        let mut ticker = tokio::time::interval(self.frame_interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

        info!(
            frame_ms = self.frame_interval.as_millis() as u64,
            npcs = self.state.npcs.len(),
            "simulation started"
        );

        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    self.step(started.elapsed());
                }
                cmd = self.command_rx.recv() => match cmd {
                    Some(Command::QueryState { reply }) => {
                        let _ = reply.send(self.state.clone());
                    }
                    Some(Command::Shutdown) | None => break,
                },
            }
        }

        info!(frame = self.state.frame, "simulation stopped");
    }

    /// Advances the game by one frame at `elapsed` since the session began.
    fn step(&mut self, elapsed: Duration) {
        let now = Timestamp(u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX));
        let controls = *self.controls_rx.borrow_and_update();
        let input = FrameInput::new(now, controls);

        let env = self.oracles.as_game_env();
        let report = GameEngine::new(&mut self.state).update(&env, &input);

        for event in report.events {
            log_event(report.frame, &event);
            self.event_bus.publish(Event::GameState(GameStateEvent {
                frame: report.frame,
                event,
            }));
        }

        self.snapshot_tx.send_replace(Arc::new(self.state.clone()));
    }
}

fn log_event(frame: u64, event: &GameEvent) {
    match event {
        GameEvent::ModeChanged { from, to } => info!(frame, %from, %to, "mode changed"),
        GameEvent::ConversationStarted { partner, .. } => {
            info!(frame, ?partner, "conversation started")
        }
        GameEvent::ConversationEnded { partner } => info!(frame, ?partner, "conversation ended"),
        GameEvent::GameOver => info!(frame, "player collapsed"),
        other => debug!(frame, event = ?other, "game event"),
    }
}
