//! Event loop orchestrating runtime events, user input, and rendering.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Instant;

use anyhow::Result;
use crossterm::event::{self as term_event, Event as TermEvent};
use game_core::{Controls, GameConfig, GameState};
use runtime::{Event as RuntimeEvent, RuntimeHandle, Topic};
use tokio::{
    sync::{broadcast, broadcast::error::RecvError},
    time::{self, Duration},
};

use crate::config::CliConfig;
use crate::input::{HeldKeys, InputHandler, KeyAction};
use crate::presentation::{terminal::Tui, ui};
use client_frontend_core::{EventConsumer, ViewModel};

type Subscription = Option<broadcast::Receiver<RuntimeEvent>>;

/// Event loop driving the terminal UI.
///
/// Owns the latest state snapshot and the held-key tracker. Every redraw
/// tick it drains pending key events, publishes the held controls and
/// redraws if anything changed since the last draw.
pub struct EventLoop<C>
where
    C: EventConsumer,
{
    handle: RuntimeHandle,
    subscriptions: HashMap<Topic, broadcast::Receiver<RuntimeEvent>>,
    input: InputHandler,
    held: HeldKeys,
    consumer: C,
    game_config: GameConfig,
    cli_config: CliConfig,
    state: Arc<GameState>,
    dirty: bool,
}

impl<C> EventLoop<C>
where
    C: EventConsumer,
{
    pub fn new(
        handle: RuntimeHandle,
        consumer: C,
        game_config: GameConfig,
        cli_config: CliConfig,
        reports_releases: bool,
    ) -> Self {
        let subscriptions = handle.subscribe_multiple(&[Topic::GameState, Topic::Audio]);
        let state = handle.snapshot();
        let held = HeldKeys::new(cli_config.input.clone(), reports_releases);

        Self {
            handle,
            subscriptions,
            input: InputHandler::new(),
            held,
            consumer,
            game_config,
            cli_config,
            state,
            dirty: true,
        }
    }

    pub async fn run(mut self, terminal: &mut Tui) -> Result<C> {
        self.render(terminal)?;

        let mut game_rx = self.subscriptions.remove(&Topic::GameState);
        let mut audio_rx = self.subscriptions.remove(&Topic::Audio);
        let mut frames = self.handle.watch_state();

        let mut redraw = time::interval(self.cli_config.ui.redraw_interval);
        redraw.set_missed_tick_behavior(time::MissedTickBehavior::Skip);

        loop {
            tokio::select! {
                result = recv(&mut game_rx), if game_rx.is_some() => {
                    self.handle_runtime_event(result, &mut game_rx);
                }
                result = recv(&mut audio_rx), if audio_rx.is_some() => {
                    self.handle_runtime_event(result, &mut audio_rx);
                }
                changed = frames.changed() => {
                    if changed.is_err() {
                        tracing::warn!("Simulation stopped; leaving the UI");
                        break;
                    }
                    self.state = Arc::clone(&frames.borrow_and_update());
                    self.dirty = true;
                }
                _ = redraw.tick() => {
                    if self.handle_input_tick()? {
                        break;
                    }
                    if self.dirty {
                        self.render(terminal)?;
                    }
                }
            }
        }

        self.handle.set_controls(Controls::empty());
        Ok(self.consumer)
    }

    fn handle_runtime_event(
        &mut self,
        result: Result<RuntimeEvent, RecvError>,
        subscription: &mut Subscription,
    ) {
        match result {
            Ok(event) => {
                let impact = self.consumer.on_event(&event, &self.state);
                self.dirty |= impact.requires_redraw;
            }
            Err(RecvError::Closed) => {
                tracing::warn!("Event stream closed");
                *subscription = None;
            }
            Err(RecvError::Lagged(skipped)) => {
                tracing::warn!("Dropped {} stale events", skipped);
            }
        }
    }

    /// Drain pending terminal events and publish the resulting controls.
    ///
    /// Returns `true` when the user asked to quit.
    fn handle_input_tick(&mut self) -> Result<bool> {
        let now = Instant::now();
        while term_event::poll(Duration::from_millis(0))? {
            match term_event::read()? {
                TermEvent::Key(key) => match self.input.handle_key(key) {
                    KeyAction::Quit => return Ok(true),
                    KeyAction::Press(control) => self.held.press(control, now),
                    KeyAction::Release(control) => self.held.release(control),
                    KeyAction::None => {}
                },
                TermEvent::FocusLost => self.held.clear(),
                TermEvent::Resize(_, _) => self.dirty = true,
                _ => {}
            }
        }

        let controls = self.held.current(now);
        if controls != self.handle.controls() {
            tracing::trace!(?controls, "controls changed");
            self.handle.set_controls(controls);
        }
        Ok(false)
    }

    fn render(&mut self, terminal: &mut Tui) -> Result<()> {
        let panel_height = self.cli_config.ui.message_panel_height;
        let view_model = ViewModel::from_state(
            &self.state,
            &self.game_config,
            self.consumer.message_log(),
            usize::from(panel_height.saturating_sub(2)),
        );
        ui::render(terminal, &view_model, panel_height)?;
        self.dirty = false;
        Ok(())
    }
}

/// Next event of an optional subscription; pends forever once it is gone.
async fn recv(subscription: &mut Subscription) -> Result<RuntimeEvent, RecvError> {
    match subscription {
        Some(rx) => rx.recv().await,
        None => std::future::pending().await,
    }
}
