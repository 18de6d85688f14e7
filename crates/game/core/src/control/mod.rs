//! Per-frame actor controllers.
mod npc;
mod player;

pub use npc::update_npcs;
pub use player::update_player;
