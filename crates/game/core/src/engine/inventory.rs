//! Inventory screen: opening, closing, cooking and eating.

use super::{GameEvent, set_mode};
use crate::dialogue::facing;
use crate::env::GameEnv;
use crate::input::{Controls, FrameInput};
use crate::state::{GameState, InputTimers, Mode, items};

/// Whether confirm may open the inventory this frame.
///
/// Refused while open, inside the input delay, inside the post-conversation
/// block, or while the player faces anything interactable (so confirm is
/// left for the conversation trigger).
pub fn can_open(state: &GameState, env: &GameEnv<'_>, input: &FrameInput) -> bool {
    let config = env.config();
    let now = input.now;
    input.held(Controls::CONFIRM)
        && state.mode != Mode::InventoryOpen
        && InputTimers::elapsed(state.timers.last_inventory, now, config.input_delay_ms)
        && !InputTimers::within(state.timers.last_chat_end, now, config.interaction_cooldown_ms)
        && facing(state, config.tile_size).is_none()
}

pub fn open(state: &mut GameState, input: &FrameInput, events: &mut Vec<GameEvent>) {
    state.timers.last_inventory = Some(input.now);
    set_mode(state, Mode::InventoryOpen, events);
    events.push(GameEvent::InventoryOpened);
}

/// Handles one inventory action; at most one fires per frame, in the order
/// close, cook, eat.
pub fn update_open(
    state: &mut GameState,
    env: &GameEnv<'_>,
    input: &FrameInput,
    events: &mut Vec<GameEvent>,
) {
    let config = env.config();
    let now = input.now;
    if !InputTimers::elapsed(state.timers.last_inventory, now, config.input_delay_ms) {
        return;
    }

    if input.held(Controls::CONFIRM) {
        state.timers.last_inventory = Some(now);
        set_mode(state, Mode::Exploring, events);
        events.push(GameEvent::InventoryClosed);
    } else if input.held(Controls::COOK) {
        state.timers.last_inventory = Some(now);
        let inventory = &mut state.inventory;
        if inventory.has_item(items::FISH, 1) && inventory.has_item(items::WOOD, 1) {
            inventory.remove(items::FISH, 1);
            inventory.remove(items::WOOD, 1);
            inventory.add(items::COOKED_FISH, 1);
            state.timers.last_chat_end = Some(now);
            events.push(GameEvent::Cooked);
        } else {
            events.push(GameEvent::CookFailed);
        }
    } else if input.held(Controls::EAT) {
        state.timers.last_inventory = Some(now);
        if state.inventory.remove(items::COOKED_FISH, 1) == 1 {
            state.needs.hunger.add(config.hunger_per_meal);
            events.push(GameEvent::Ate);
        } else {
            events.push(GameEvent::NothingToEat);
        }
    }
}
