//! Background music.
//!
//! A [`MusicDirector`] draws tracks from a [`Playlist`] and hands them to an
//! [`AudioBackend`] one at a time. The backend signals the end of a track
//! through its [`Playback`]; only then is the next track started.
mod backend;
mod director;
mod playlist;

pub use backend::{AudioBackend, Playback, SilentBackend};
pub use director::MusicDirector;
pub use playlist::{Playlist, discover_tracks};
