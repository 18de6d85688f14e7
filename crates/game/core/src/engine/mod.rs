//! Frame step.
//!
//! The [`GameEngine`] is the only writer of [`GameState`]. One call to
//! [`GameEngine::update`] advances the world by exactly one frame and decides
//! which subsystem consumes the frame's input: the conversation, the
//! inventory screen, or free movement. Nothing in here can fail.

mod events;
mod inventory;

pub use events::{FrameReport, GameEvent};

use crate::control::{update_npcs, update_player};
use crate::dialogue::{try_interact, update_conversation};
use crate::env::GameEnv;
use crate::input::{Controls, FrameInput};
use crate::state::{GameState, InputTimers, Mode};

/// Drives a [`GameState`] one frame at a time.
pub struct GameEngine<'a> {
    state: &'a mut GameState,
}

impl<'a> GameEngine<'a> {
    pub fn new(state: &'a mut GameState) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &GameState {
        self.state
    }

    /// Advances the world by one frame.
    ///
    /// Order within a frame:
    /// 1. game over holds the clock, waits for confirm and restarts;
    /// 2. NPCs wander;
    /// 3. the clock advances and drains the bars;
    /// 4. an open conversation takes the input and ends the frame;
    /// 5. confirm may open the inventory, ending the frame;
    /// 6. an open inventory takes the input and ends the frame;
    /// 7. the player moves;
    /// 8. confirm may start a conversation.
    pub fn update(&mut self, env: &GameEnv<'_>, input: &FrameInput) -> FrameReport {
        let mut report = FrameReport {
            frame: self.state.frame,
            ..FrameReport::default()
        };
        self.step(env, input, &mut report);
        self.state.frame += 1;
        report
    }

    fn step(&mut self, env: &GameEnv<'_>, input: &FrameInput, report: &mut FrameReport) {
        let state = &mut *self.state;
        let config = env.config();
        let now = input.now;
        let events = &mut report.events;

        if state.mode == Mode::GameOver {
            state.clock.hold(now);
            if input.held(Controls::CONFIRM) {
                restart(state, env, events);
            }
            return;
        }

        update_npcs(state, env, events);

        report.minutes_advanced = advance_clock(state, env, input, events);
        if state.mode == Mode::GameOver {
            return;
        }

        if state.mode == Mode::Chatting {
            update_conversation(state, env, input, events);
            return;
        }

        if inventory::can_open(state, env, input) {
            inventory::open(state, input, events);
            return;
        }

        if state.mode == Mode::InventoryOpen {
            inventory::update_open(state, env, input, events);
            return;
        }

        report.player_moved = update_player(state, env, input);

        if input.held(Controls::CONFIRM)
            && !InputTimers::within(state.timers.last_chat_end, now, config.interaction_cooldown_ms)
        {
            try_interact(state, env, now, events);
        }
    }
}

/// Records a mode switch; no-op when already in `to`.
pub(crate) fn set_mode(state: &mut GameState, to: Mode, events: &mut Vec<GameEvent>) {
    if state.mode != to {
        events.push(GameEvent::ModeChanged {
            from: state.mode,
            to,
        });
        state.mode = to;
    }
}

fn restart(state: &mut GameState, env: &GameEnv<'_>, events: &mut Vec<GameEvent>) {
    let from = state.mode;
    state.restart(env.config());
    events.push(GameEvent::ModeChanged {
        from,
        to: state.mode,
    });
    events.push(GameEvent::Restarted);
}

/// Moves the clock forward and drains the bars once per elapsed minute.
///
/// Returns the number of minutes advanced.
fn advance_clock(
    state: &mut GameState,
    env: &GameEnv<'_>,
    input: &FrameInput,
    events: &mut Vec<GameEvent>,
) -> u32 {
    let config = env.config();
    let hour_before = state.clock.hour();
    let advanced = state
        .clock
        .advance(input.now, config.real_ms_per_game_hour);
    if advanced == 0 {
        return 0;
    }

    let was_starving = state.needs.hunger.is_empty();
    for _ in 0..advanced {
        state
            .needs
            .drain_minute(config.drain_per_minute, config.starvation_drain_per_minute);
    }
    state.clock.mark_drained();

    if state.clock.hour() != hour_before {
        events.push(GameEvent::HourChanged {
            hour: state.clock.hour(),
        });
    }
    if !was_starving && state.needs.hunger.is_empty() {
        events.push(GameEvent::Starving);
    }
    if state.needs.health.is_empty() {
        state.conversation = None;
        set_mode(state, Mode::GameOver, events);
        events.push(GameEvent::GameOver);
    }
    advanced
}
