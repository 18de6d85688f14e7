//! Conversation flow: triggers, per-frame navigation and side effects.
pub mod scripts;
mod session;
mod trigger;

pub use scripts::ChoiceEffect;
pub use session::{end_conversation, start_with_environment, start_with_npc, update_conversation};
pub use trigger::{Interactable, facing, facing_npc, try_interact};
