//! NPC roster loader.

use std::collections::HashSet;
use std::path::Path;

use game_core::NpcSpawn;

use crate::loaders::{LoadResult, read_file};

/// Loader for the NPC roster from RON files.
///
/// File format: a list of spawns in roster order.
///
/// ```ron
/// [
///     (name: "Kid", col: 2, row: 2),
///     (name: "Merchant", col: 5, row: 5),
/// ]
/// ```
pub struct NpcLoader;

impl NpcLoader {
    pub fn load(path: &Path) -> LoadResult<Vec<NpcSpawn>> {
        let content = read_file(path)?;
        Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse NPC roster {}: {}", path.display(), e))
    }

    pub fn parse(content: &str) -> LoadResult<Vec<NpcSpawn>> {
        let spawns: Vec<NpcSpawn> = ron::from_str(content)?;

        let mut seen = HashSet::new();
        for spawn in &spawns {
            anyhow::ensure!(!spawn.name.is_empty(), "NPC names must not be empty");
            anyhow::ensure!(seen.insert(spawn.name.as_str()), "duplicate NPC `{}`", spawn.name);
        }
        Ok(spawns)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roster_keeps_file_order() {
        let spawns = NpcLoader::parse(
            r#"[(name: "Merchant", col: 5, row: 5), (name: "Kid", col: 2, row: 2)]"#,
        )
        .unwrap();
        assert_eq!(
            spawns,
            vec![NpcSpawn::new("Merchant", 5, 5), NpcSpawn::new("Kid", 2, 2)]
        );
    }

    #[test]
    fn duplicate_names_are_rejected() {
        let err = NpcLoader::parse(r#"[(name: "Kid", col: 2, row: 2), (name: "Kid", col: 3, row: 2)]"#)
            .unwrap_err();
        assert!(err.to_string().contains("duplicate NPC `Kid`"));
    }
}
