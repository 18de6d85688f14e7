//! Event types for different topics.

use std::path::PathBuf;

use game_core::GameEvent;
use serde::{Deserialize, Serialize};

/// Something the frame step reported.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameStateEvent {
    /// Frame the event happened in.
    pub frame: u64,
    pub event: GameEvent,
}

/// Events related to background music
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum AudioEvent {
    TrackStarted { track: PathBuf },
    TrackFinished { track: PathBuf },
    TrackFailed { track: PathBuf, error: String },
}
