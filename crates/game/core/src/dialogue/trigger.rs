//! What the player is looking at, and starting conversations about it.

use crate::collision::CollisionMap;
use crate::dialogue::scripts;
use crate::dialogue::session::{start_with_environment, start_with_npc};
use crate::engine::GameEvent;
use crate::env::GameEnv;
use crate::state::{GameState, LayerRole, NpcId, PendingRemoval, Timestamp};

/// Something the player can currently interact with.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Interactable {
    Npc(NpcId),
    Water,
    Tree(PendingRemoval),
    Door,
}

/// First NPC in roster order within reach of the player.
pub fn facing_npc(state: &GameState, tile_size: i32) -> Option<NpcId> {
    let grid = CollisionMap::new(&state.map, tile_size);
    let player = state.player.position();
    state
        .npc_ids()
        .find(|id| grid.is_facing_npc(player, state.npcs[id.index()].position()))
}

/// Interactable in priority order: NPCs, then water, trees and doors in the
/// tile the player faces.
pub fn facing(state: &GameState, tile_size: i32) -> Option<Interactable> {
    if let Some(id) = facing_npc(state, tile_size) {
        return Some(Interactable::Npc(id));
    }

    let grid = CollisionMap::new(&state.map, tile_size);
    let body = &state.player.body;
    let cell = grid.facing_cell(body.position, body.facing);
    let map = &state.map;

    if map.has_tile(LayerRole::Water, cell) {
        return Some(Interactable::Water);
    }
    if let Some(layer) = map.layer_index(LayerRole::Trees)
        && map.tile(layer, cell).is_some()
        && let Some(index) = map.index_of(cell)
    {
        return Some(Interactable::Tree(PendingRemoval { layer, index }));
    }
    if map.has_tile(LayerRole::Doors, cell) {
        return Some(Interactable::Door);
    }
    None
}

/// Starts a conversation with whatever the player faces. Doors have nothing
/// to say. Returns `true` when a conversation opened.
pub fn try_interact(
    state: &mut GameState,
    env: &GameEnv<'_>,
    now: Timestamp,
    events: &mut Vec<GameEvent>,
) -> bool {
    match facing(state, env.config().tile_size) {
        Some(Interactable::Npc(id)) => start_with_npc(state, env, id, now, events),
        Some(Interactable::Water) => {
            start_with_environment(state, scripts::fishing(), None, now, events)
        }
        Some(Interactable::Tree(pending)) => {
            start_with_environment(state, scripts::tree_cutting(), Some(pending), now, events)
        }
        Some(Interactable::Door) | None => return false,
    }
    true
}
