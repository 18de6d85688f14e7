//! Data-driven content definitions and loaders.
//!
//! This crate turns the files under `data/` into game-core values:
//! - Tile maps (RON character grids with a tile legend)
//! - The NPC roster (RON)
//! - NPC dialogue scripts (RON, named nodes)
//! - Game configuration (TOML)
//!
//! Content is consumed by the runtime at startup; the core only ever sees the
//! resulting `TileMap`, `NpcSpawn`s and `DialogueScripts`.

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{
    ConfigLoader, ContentFactory, DialogueLoader, LoadResult, MapLoader, NpcLoader,
};
