//! Event handling for CLI client.
//!
//! The event loop coordinates runtime events, state snapshots, keyboard
//! input and redraws.

mod r#loop;

pub use r#loop::EventLoop;
