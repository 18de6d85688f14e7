//! Drives the game simulation on a fixed frame tick.
//!
//! The runtime owns the canonical [`game_core::GameState`] inside a
//! [`workers::SimulationWorker`], samples level-triggered controls published
//! through a [`RuntimeHandle`], and fans frame events out on a topic based
//! [`EventBus`]. Background music is played by a [`MusicDirector`] that never
//! overlaps tracks.
pub mod api;
pub mod audio;
pub mod events;
pub mod oracle;
pub mod workers;

mod runtime;

pub use api::{Result, RuntimeError, RuntimeHandle};
pub use audio::{AudioBackend, MusicDirector, Playback, Playlist, SilentBackend};
pub use events::{AudioEvent, Event, EventBus, GameStateEvent, Topic};
pub use oracle::OracleManager;
pub use runtime::{Runtime, RuntimeBuilder, RuntimeConfig};
