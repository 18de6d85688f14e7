//! Authoritative game state representation.
//!
//! Everything the frame step reads or writes lives in [`GameState`]. The
//! runtime clones it for rendering but mutates it only through
//! [`crate::engine::GameEngine`].
pub mod types;

pub use types::{
    Actor, Animation, Cell, Conversation, ConversationChoice, ConversationNode,
    ConversationSource, DayPhase, DialogueBuilder, DialogueGraph, DialogueLibrary, Facing, GOODBYE,
    Inventory, InventorySlot, Layer, LayerRole, MAX_DARKNESS, Meter, Needs, NodeId, Npc, NpcId,
    NpcMotion, NpcSpawn, PendingRemoval, Player, Point, Rect, Tile, TileMap, Timestamp, WorldClock,
    items,
};

use std::collections::HashSet;

use crate::config::GameConfig;
use crate::error::InitializationError;

/// Exclusive top-level interaction state.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Mode {
    #[default]
    Exploring,
    Chatting,
    InventoryOpen,
    GameOver,
}

/// Timestamps of the last input consumed by each rate limiter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InputTimers {
    /// Last dialogue navigation or commit.
    pub last_choice: Option<Timestamp>,
    /// Last inventory open, close, cook or eat.
    pub last_inventory: Option<Timestamp>,
    /// End of the last conversation, or the last successful cook.
    pub last_chat_end: Option<Timestamp>,
}

impl InputTimers {
    /// True once more than `delay_ms` passed since `last` (or it never happened).
    pub fn elapsed(last: Option<Timestamp>, now: Timestamp, delay_ms: u64) -> bool {
        last.is_none_or(|at| now.since(at) > delay_ms)
    }

    /// True while still inside `cooldown_ms` of `last`.
    pub fn within(last: Option<Timestamp>, now: Timestamp, cooldown_ms: u64) -> bool {
        last.is_some_and(|at| now.since(at) < cooldown_ms)
    }
}

/// Canonical snapshot of the simulation.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameState {
    /// Base seed for NPC wandering; fixed for the session.
    pub game_seed: u64,
    /// Frames stepped so far. Mixed into every random roll.
    pub frame: u64,

    pub map: TileMap,
    pub player: Player,
    pub npcs: Vec<Npc>,
    pub inventory: Inventory,
    pub clock: WorldClock,
    pub needs: Needs,

    pub mode: Mode,
    pub conversation: Option<Conversation>,
    /// Survives restarts.
    pub dialogues: DialogueLibrary,
    pub timers: InputTimers,
}

impl GameState {
    /// Places the player at the map centre and every NPC on its spawn tile.
    ///
    /// # Errors
    ///
    /// Fails when an NPC name repeats, an NPC lies outside the map, or two
    /// actors start overlapping.
    pub fn new(
        config: &GameConfig,
        map: TileMap,
        spawns: &[NpcSpawn],
        game_seed: u64,
    ) -> Result<Self, InitializationError> {
        let ts = config.tile_size;
        let player = Player::new(Self::spawn_point(&map, ts));
        let player_rect = player.body.rect(ts);

        let mut names = HashSet::new();
        let mut npcs: Vec<Npc> = Vec::with_capacity(spawns.len());
        for spawn in spawns {
            if !names.insert(spawn.name.as_str()) {
                return Err(InitializationError::DuplicateNpc(spawn.name.clone()));
            }

            let position = Point::from_tile(spawn.col, spawn.row, ts);
            if !map.contains(Cell::new(spawn.col, spawn.row)) {
                return Err(InitializationError::OutOfBounds {
                    actor: spawn.name.clone(),
                    position,
                });
            }

            let rect = position.tile_rect(ts);
            if rect.overlaps(&player_rect) {
                return Err(InitializationError::Overlap {
                    actor: spawn.name.clone(),
                    other: "player".into(),
                    position,
                });
            }
            if let Some(other) = npcs.iter().find(|npc| npc.body.rect(ts).overlaps(&rect)) {
                return Err(InitializationError::Overlap {
                    actor: spawn.name.clone(),
                    other: other.name.clone(),
                    position,
                });
            }

            npcs.push(Npc::new(spawn.name.clone(), position));
        }

        Ok(Self {
            game_seed,
            frame: 0,
            map,
            player,
            npcs,
            inventory: Inventory::new(config.stack_limit),
            clock: WorldClock::new(config.start_minute),
            needs: Needs::full(),
            mode: Mode::Exploring,
            conversation: None,
            dialogues: DialogueLibrary::new(),
            timers: InputTimers::default(),
        })
    }

    /// Top-left corner that centres a tile-sized box on the map.
    pub fn spawn_point(map: &TileMap, tile_size: i32) -> Point {
        let (width, height) = Self::world_size(map, tile_size);
        Point::new((width - tile_size) / 2, (height - tile_size) / 2)
    }

    /// Map extent in world units.
    pub fn world_size(map: &TileMap, tile_size: i32) -> (i32, i32) {
        (map.width() as i32 * tile_size, map.height() as i32 * tile_size)
    }

    pub fn npc(&self, id: NpcId) -> Option<&Npc> {
        self.npcs.get(id.index())
    }

    pub fn npc_ids(&self) -> impl Iterator<Item = NpcId> + use<> {
        (0..self.npcs.len() as u32).map(NpcId)
    }

    /// NPC currently in conversation with the player.
    pub fn chat_partner(&self) -> Option<NpcId> {
        self.conversation.as_ref().and_then(Conversation::partner)
    }

    /// Puts the player back on the spawn point with full bars.
    ///
    /// Inventory, clock, map changes and the dialogue cache carry over.
    pub fn restart(&mut self, config: &GameConfig) {
        self.player = Player::new(Self::spawn_point(&self.map, config.tile_size));
        self.needs = Needs::full();
        self.mode = Mode::Exploring;
        self.conversation = None;
    }
}
