//! Deterministic game logic and data types shared across clients.
//!
//! `game-core` defines the canonical rules (collision, actor controllers,
//! dialogue, inventory, world clock) and exposes pure APIs that the runtime
//! drives once per frame. All state mutation flows through
//! [`engine::GameEngine`], and supporting crates depend on the types
//! re-exported here.
pub mod collision;
pub mod config;
pub mod control;
pub mod dialogue;
pub mod engine;
pub mod env;
pub mod error;
pub mod input;
pub mod state;

pub use collision::CollisionMap;
pub use config::GameConfig;
pub use dialogue::{ChoiceEffect, Interactable};
pub use engine::{FrameReport, GameEngine, GameEvent};
pub use env::{
    DialogueOracle, DialogueScripts, Env, GameEnv, NoDialogues, PcgRng, RngOracle,
};
pub use error::{DialogueError, InitializationError, MapError};
pub use input::{Controls, FrameInput};
pub use state::{
    Actor, Animation, Cell, Conversation, ConversationChoice, ConversationNode,
    ConversationSource, DayPhase, DialogueBuilder, DialogueGraph, DialogueLibrary, Facing, GOODBYE,
    GameState, InputTimers, Inventory, InventorySlot, Layer, LayerRole, MAX_DARKNESS, Meter, Mode,
    Needs, NodeId, Npc, NpcId, NpcMotion, NpcSpawn, Player, Point, Rect, Tile, TileMap, Timestamp,
    WorldClock, items,
};
