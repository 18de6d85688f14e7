//! Autonomous NPC wandering.
//!
//! Each NPC idles for a random number of frames, then tries the four
//! directions in shuffled order and walks one tile in the first that is free.
//! Everyone stands still while a conversation is open.

use crate::collision::CollisionMap;
use crate::engine::GameEvent;
use crate::env::{GameEnv, compute_seed, roll, shuffle};
use crate::state::{Facing, GameState, Mode, NpcId, NpcMotion, Point};

/// Advances every NPC by one frame, in roster order.
///
/// Later NPCs see the positions and reservations of earlier ones, so two
/// NPCs never claim the same free cell in one frame.
pub fn update_npcs(state: &mut GameState, env: &GameEnv<'_>, events: &mut Vec<GameEvent>) {
    for id in state.npc_ids() {
        if state.mode == Mode::Chatting {
            state.npcs[id.index()].freeze();
            continue;
        }

        match state.npcs[id.index()].motion {
            NpcMotion::Idle { ticks } => idle(state, env, id, ticks + 1, events),
            NpcMotion::MovingTo { target } => walk(state, env, id, target),
        }

        let period = env.config().npc_anim_period;
        state.npcs[id.index()].body.animation.advance(period);
    }
}

fn idle(
    state: &mut GameState,
    env: &GameEnv<'_>,
    id: NpcId,
    ticks: u32,
    events: &mut Vec<GameEvent>,
) {
    let config = env.config();
    let seed = compute_seed(state.game_seed, state.frame, id.0, roll::WANDER_THRESHOLD);
    let spread = config.npc_wander_spread.max(1);
    let threshold = config.npc_wander_min + env.rng().range(seed, 0, spread - 1);

    if ticks <= threshold {
        state.npcs[id.index()].motion = NpcMotion::Idle { ticks };
        return;
    }
    state.npcs[id.index()].motion = NpcMotion::idle();

    let mut directions = Facing::ALL;
    let seed = compute_seed(state.game_seed, state.frame, id.0, roll::WANDER_SHUFFLE);
    shuffle(env.rng(), seed, &mut directions);

    let Some((facing, target)) = directions
        .into_iter()
        .map(|facing| (facing, destination(state, id, facing, config.tile_size)))
        .find(|&(_, target)| can_wander_to(state, id, target, config.tile_size))
    else {
        return;
    };

    let npc = &mut state.npcs[id.index()];
    npc.body.facing = facing;
    npc.motion = NpcMotion::MovingTo { target };
    events.push(GameEvent::NpcWandered {
        npc: id,
        facing,
        target,
    });
}

fn destination(state: &GameState, id: NpcId, facing: Facing, tile_size: i32) -> Point {
    let (dx, dy) = facing.delta();
    state.npcs[id.index()]
        .position()
        .offset(dx * tile_size, dy * tile_size)
}

/// Bounds, layers, the player, other NPCs and the cells they are walking to.
fn can_wander_to(state: &GameState, id: NpcId, target: Point, tile_size: i32) -> bool {
    let grid = CollisionMap::new(&state.map, tile_size);
    if !grid.npc_in_bounds(target) {
        return false;
    }
    !grid.blocked(target, occupied_by_others(state, id))
}

/// Every box another actor holds or is about to hold.
fn occupied_by_others(state: &GameState, id: NpcId) -> impl Iterator<Item = Point> + '_ {
    let npcs = state
        .npcs
        .iter()
        .enumerate()
        .filter(move |(idx, _)| *idx != id.index())
        .flat_map(|(_, npc)| {
            let target = match npc.motion {
                NpcMotion::MovingTo { target } => Some(target),
                NpcMotion::Idle { .. } => None,
            };
            std::iter::once(npc.position()).chain(target)
        });
    std::iter::once(state.player.position()).chain(npcs)
}

fn walk(state: &mut GameState, env: &GameEnv<'_>, id: NpcId, target: Point) {
    let config = env.config();
    let current = state.npcs[id.index()].position();
    let next = Point::new(
        approach(current.x, target.x, config.npc_step),
        approach(current.y, target.y, config.npc_step),
    );

    // The player may have stepped into the path since the walk began; wait.
    let grid = CollisionMap::new(&state.map, config.tile_size);
    if grid.overlaps_any(next, [state.player.position()]) {
        return;
    }

    let npc = &mut state.npcs[id.index()];
    npc.body.position = next;
    if next == target {
        npc.motion = NpcMotion::idle();
    }
}

/// Moves `from` towards `to` by `step`, snapping when closer than a step.
fn approach(from: i32, to: i32, step: i32) -> i32 {
    let delta = to - from;
    if delta.abs() < step {
        to
    } else {
        from + step * delta.signum()
    }
}
