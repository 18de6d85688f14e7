//! Unified error types surfaced by the runtime API.
use std::path::PathBuf;

use thiserror::Error;
use tokio::sync::oneshot;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("simulation worker command channel closed")]
    CommandChannelClosed,

    #[error("simulation worker reply channel closed")]
    ReplyChannelClosed(#[source] oneshot::error::RecvError),

    #[error("runtime worker join failed")]
    WorkerJoin(#[source] tokio::task::JoinError),

    #[error("runtime requires a world (map and NPC roster) before building")]
    MissingWorld,

    #[error("failed to initialize game state")]
    InitialState(#[source] game_core::InitializationError),

    #[error("cannot play {}: {reason}", track.display())]
    Playback { track: PathBuf, reason: String },

    #[error("failed to scan {} for music", dir.display())]
    TrackDiscovery {
        dir: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
