//! Content loaders for reading game data from files.
//!
//! Every loader offers `load(path)` for files and `parse(text)` for in-memory
//! sources, and reports failures through [`LoadResult`].

pub mod config;
pub mod dialogue;
pub mod factory;
pub mod map;
pub mod npcs;

pub use config::ConfigLoader;
pub use dialogue::DialogueLoader;
pub use factory::ContentFactory;
pub use map::MapLoader;
pub use npcs::NpcLoader;

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
