//! Input-driven player movement.

use crate::collision::CollisionMap;
use crate::env::GameEnv;
use crate::input::{Controls, FrameInput};
use crate::state::{Facing, GameState};

/// Tested in this order; the last held key decides the facing.
const KEY_ORDER: [(Controls, Facing); 4] = [
    (Controls::LEFT, Facing::Left),
    (Controls::RIGHT, Facing::Right),
    (Controls::UP, Facing::Up),
    (Controls::DOWN, Facing::Down),
];

/// Moves the player for one frame. Returns `true` when the position changed.
///
/// Held directions are summed, the result is clamped to the map, and the move
/// is dropped if the destination collides. Facing follows the keys even when
/// the move is dropped.
pub fn update_player(state: &mut GameState, env: &GameEnv<'_>, input: &FrameInput) -> bool {
    let config = env.config();
    let speed = config.player_speed;
    let body = &mut state.player.body;

    let mut candidate = body.position;
    for (control, facing) in KEY_ORDER {
        if input.held(control) {
            let (dx, dy) = facing.delta();
            candidate = candidate.offset(dx * speed, dy * speed);
            body.facing = facing;
        }
    }

    let grid = CollisionMap::new(&state.map, config.tile_size);
    let candidate = grid.clamp(candidate);
    let blocked = grid.blocked(candidate, state.npcs.iter().map(|npc| npc.position()));

    let body = &mut state.player.body;
    let moved = !blocked && candidate != body.position;
    if moved {
        body.position = candidate;
        body.animation.advance(config.player_anim_period);
    } else {
        body.animation.reset();
    }
    moved
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::env::{Env, NoDialogues, PcgRng};
    use crate::state::{Layer, NpcSpawn, Point, Tile, TileMap, Timestamp};

    fn state(trees: &[usize], spawns: &[NpcSpawn]) -> GameState {
        let ground = vec![Some(Tile::new(0, 1)); 100];
        let mut tree_layer = vec![None; 100];
        for &idx in trees {
            tree_layer[idx] = Some(Tile::new(1, 1));
        }
        let map = TileMap::new(
            10,
            10,
            vec![
                Layer::new("Base ground", true, ground),
                Layer::new("Trees", true, tree_layer),
            ],
        )
        .unwrap();
        GameState::new(&GameConfig::default(), map, spawns, 0).unwrap()
    }

    fn step(state: &mut GameState, controls: Controls) -> bool {
        let config = GameConfig::default();
        let env = Env::new(&config, &NoDialogues, &PcgRng).as_game_env();
        update_player(state, &env, &FrameInput::new(Timestamp(0), controls))
    }

    #[test]
    fn diagonal_input_sums_axes_and_last_key_wins() {
        let mut state = state(&[], &[]);
        let start = state.player.position();
        assert!(step(&mut state, Controls::RIGHT | Controls::DOWN));
        assert_eq!(state.player.position(), start.offset(1, 1));
        assert_eq!(state.player.body.facing, Facing::Down);
    }

    #[test]
    fn opposite_keys_cancel_but_still_turn() {
        let mut state = state(&[], &[]);
        let start = state.player.position();
        assert!(!step(&mut state, Controls::LEFT | Controls::RIGHT));
        assert_eq!(state.player.position(), start);
        assert_eq!(state.player.body.facing, Facing::Right);
    }

    #[test]
    fn map_edge_clamps_and_turns() {
        let mut state = state(&[], &[]);
        state.player.body.position = Point::new(0, 30);
        assert!(!step(&mut state, Controls::LEFT));
        assert_eq!(state.player.position(), Point::new(0, 30));
        assert_eq!(state.player.body.facing, Facing::Left);
    }

    #[test]
    fn trees_block_movement() {
        // Tree at column 3, row 2; player just left of its sampling boundary.
        let mut state = state(&[2 * 10 + 3], &[]);
        state.player.body.position = Point::new(37, 30);
        assert!(!step(&mut state, Controls::RIGHT));
        assert_eq!(state.player.position(), Point::new(37, 30));
    }

    #[test]
    fn npcs_block_movement() {
        let mut state = state(&[], &[NpcSpawn::new("Kid", 2, 2)]);
        state.player.body.position = Point::new(15, 30);
        assert!(!step(&mut state, Controls::RIGHT));
        assert_eq!(state.player.position(), Point::new(15, 30));
    }

    #[test]
    fn animation_runs_while_moving_and_resets_when_still() {
        let mut state = state(&[], &[]);
        for _ in 0..11 {
            step(&mut state, Controls::UP);
        }
        assert_eq!(state.player.body.animation.frame, 1);
        step(&mut state, Controls::empty());
        assert_eq!(state.player.body.animation.frame, 0);
        assert_eq!(state.player.body.animation.tick, 0);
    }
}
