//! Widgets composing the terminal UI. Each one reads the [`ViewModel`] only.
//!
//! [`ViewModel`]: client_frontend_core::ViewModel

pub mod dialogue;
pub mod footer;
pub mod game_over;
pub mod header;
pub mod inventory;
pub mod map;
pub mod messages;
pub mod needs;
