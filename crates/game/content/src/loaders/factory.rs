//! Content factory for loading everything a session needs from one directory.

use std::path::{Path, PathBuf};

use game_core::{DialogueScripts, GameConfig, NpcSpawn, TileMap};

use crate::loaders::{ConfigLoader, DialogueLoader, LoadResult, MapLoader, NpcLoader};

/// Content factory that loads all game content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml
/// ├── npcs.ron
/// ├── dialogues.ron
/// └── maps/
///     └── meadow.ron
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    pub const CONFIG_FILE: &'static str = "config.toml";
    pub const NPCS_FILE: &'static str = "npcs.ron";
    pub const DIALOGUES_FILE: &'static str = "dialogues.ron";
    pub const MAPS_DIR: &'static str = "maps";

    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load game configuration from `config.toml`.
    ///
    /// A missing file yields the default configuration.
    pub fn load_config(&self) -> LoadResult<GameConfig> {
        let path = self.data_dir.join(Self::CONFIG_FILE);
        if !path.exists() {
            return Ok(GameConfig::default());
        }
        ConfigLoader::load(&path)
    }

    /// Load a map from `maps/{map_name}.ron`.
    pub fn load_map(&self, map_name: &str) -> LoadResult<TileMap> {
        let path = self
            .data_dir
            .join(Self::MAPS_DIR)
            .join(format!("{}.ron", map_name));
        MapLoader::load(&path)
    }

    /// Load the NPC roster from `npcs.ron`.
    pub fn load_npcs(&self) -> LoadResult<Vec<NpcSpawn>> {
        NpcLoader::load(&self.data_dir.join(Self::NPCS_FILE))
    }

    /// Load NPC dialogue scripts from `dialogues.ron`.
    pub fn load_dialogues(&self) -> LoadResult<DialogueScripts> {
        DialogueLoader::load(&self.data_dir.join(Self::DIALOGUES_FILE))
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}
