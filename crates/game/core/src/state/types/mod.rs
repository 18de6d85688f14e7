pub mod actor;
pub mod clock;
pub mod common;
pub mod dialogue;
pub mod inventory;
pub mod map;

pub use actor::{Actor, Animation, Npc, NpcMotion, NpcSpawn, Player};
pub use clock::{DayPhase, MAX_DARKNESS, Meter, Needs, WorldClock};
pub use common::{Cell, Facing, NpcId, Point, Rect, Timestamp};
pub use dialogue::{
    Conversation, ConversationChoice, ConversationNode, ConversationSource, DialogueBuilder,
    DialogueGraph, DialogueLibrary, GOODBYE, NodeId, PendingRemoval,
};
pub use inventory::{Inventory, InventorySlot, items};
pub use map::{Layer, LayerRole, Tile, TileMap};
