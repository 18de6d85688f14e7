//! Terminal UI frontend for the meadow game.
//!
//! # Architecture
//!
//! CliFrontend is a pure UI layer that:
//! - Receives a RuntimeHandle for communication
//! - Does NOT own the Runtime
//! - Publishes held keys as controls and renders state snapshots

mod app;
mod config;
mod event;
mod input;
pub mod logging;
pub mod presentation;

pub use app::CliFrontend;
pub use config::{CliConfig, InputConfig, UiConfig};
pub use input::{HeldKeys, InputHandler, KeyAction};

// Re-export for convenience (used in main.rs)
pub use client_frontend_core::FrontendConfig;
