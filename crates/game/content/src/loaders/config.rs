//! Game configuration loader.

use std::path::Path;

use game_core::GameConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for game configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    ///
    /// Keys missing from the file keep their [`GameConfig::default`] values.
    pub fn load(path: &Path) -> LoadResult<GameConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML {}: {}", path.display(), e))
    }

    pub fn parse(content: &str) -> LoadResult<GameConfig> {
        let config: GameConfig = toml::from_str(content)?;
        anyhow::ensure!(config.tile_size > 0, "tile_size must be positive");
        anyhow::ensure!(config.stack_limit > 0, "stack_limit must be positive");
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_file_keeps_defaults() {
        let config = ConfigLoader::parse("input_delay_ms = 150\nwood_per_tree = 3\n").unwrap();
        assert_eq!(config.input_delay_ms, 150);
        assert_eq!(config.wood_per_tree, 3);
        assert_eq!(config.tile_size, GameConfig::DEFAULT_TILE_SIZE);
        assert_eq!(config.stack_limit, GameConfig::DEFAULT_STACK_LIMIT);
    }

    #[test]
    fn zero_tile_size_is_rejected() {
        assert!(ConfigLoader::parse("tile_size = 0").is_err());
    }

    #[test]
    fn missing_file_reports_path() {
        let err = ConfigLoader::load(Path::new("/nonexistent/config.toml")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/config.toml"));
    }
}
