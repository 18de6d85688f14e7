//! Where the client finds its content, music and log files.
use std::env;
use std::path::PathBuf;

use directories::ProjectDirs;

/// Filesystem layout of one client session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    /// Directory holding `config.toml`, `npcs.ron`, `dialogues.ron` and `maps/`.
    pub data_dir: PathBuf,
    /// Map loaded from `maps/{map}.ron`.
    pub map: String,
    /// Folder scanned for `.mp3` background tracks.
    pub assets_dir: PathBuf,
    pub log_dir: PathBuf,
}

impl ClientConfig {
    pub const DEFAULT_DATA_DIR: &'static str = "data";
    pub const DEFAULT_MAP: &'static str = "meadow";
    pub const DEFAULT_ASSETS_DIR: &'static str = "assets";

    /// Construct the configuration from environment variables.
    ///
    /// Environment variables:
    /// - `MEADOW_DATA_DIR` - content directory (default: `data`)
    /// - `MEADOW_MAP` - map name (default: `meadow`)
    /// - `MEADOW_ASSETS_DIR` - folder with the `.mp3` tracks (default: `assets`)
    /// - `MEADOW_LOG_DIR` - log directory (default: the platform data
    ///   directory, e.g. `~/.local/share/meadow/logs`)
    pub fn from_env() -> Self {
        Self {
            data_dir: env::var_os("MEADOW_DATA_DIR")
                .map_or_else(|| PathBuf::from(Self::DEFAULT_DATA_DIR), PathBuf::from),
            map: env::var("MEADOW_MAP").unwrap_or_else(|_| Self::DEFAULT_MAP.to_string()),
            assets_dir: env::var_os("MEADOW_ASSETS_DIR")
                .map_or_else(|| PathBuf::from(Self::DEFAULT_ASSETS_DIR), PathBuf::from),
            log_dir: env::var_os("MEADOW_LOG_DIR")
                .map_or_else(default_log_dir, PathBuf::from),
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(Self::DEFAULT_DATA_DIR),
            map: Self::DEFAULT_MAP.to_string(),
            assets_dir: PathBuf::from(Self::DEFAULT_ASSETS_DIR),
            log_dir: default_log_dir(),
        }
    }
}

/// Platform data directory, or `./logs` when there is no home directory.
fn default_log_dir() -> PathBuf {
    ProjectDirs::from("", "", "meadow")
        .map(|dirs| dirs.data_local_dir().join("logs"))
        .unwrap_or_else(|| PathBuf::from("logs"))
}
