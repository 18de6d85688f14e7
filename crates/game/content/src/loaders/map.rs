//! Map data loader.
//!
//! Maps are authored as one character grid per layer plus a legend mapping
//! characters to tiles. `.` always means "no tile".

use std::collections::HashMap;
use std::path::Path;

use game_core::{Layer, Tile, TileMap};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Character for an empty cell in every layer.
pub const EMPTY_CELL: char = '.';

/// Map data structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct MapDataRon {
    width: u32,
    height: u32,
    legend: HashMap<char, Tile>,
    /// Draw order; the first layer is drawn first.
    layers: Vec<LayerRon>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct LayerRon {
    name: String,
    #[serde(default = "visible_by_default")]
    visible: bool,
    rows: Vec<String>,
}

fn visible_by_default() -> bool {
    true
}

/// Loader for map data from RON files.
///
/// ```ron
/// (
///     width: 4,
///     height: 2,
///     legend: { 'g': (tileset: 0, id: 1), 'T': (tileset: 2, id: 3) },
///     layers: [
///         (name: "Base ground", rows: ["gggg", "gggg"]),
///         (name: "Trees", rows: ["T...", "...."]),
///     ],
/// )
/// ```
pub struct MapLoader;

impl MapLoader {
    pub fn load(path: &Path) -> LoadResult<TileMap> {
        let content = read_file(path)?;
        Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse map RON {}: {}", path.display(), e))
    }

    pub fn parse(content: &str) -> LoadResult<TileMap> {
        let data: MapDataRon = ron::from_str(content)?;

        let layers = data
            .layers
            .into_iter()
            .map(|layer| Self::build_layer(layer, data.width, data.height, &data.legend))
            .collect::<LoadResult<Vec<_>>>()?;

        Ok(TileMap::new(data.width, data.height, layers)?)
    }

    fn build_layer(
        layer: LayerRon,
        width: u32,
        height: u32,
        legend: &HashMap<char, Tile>,
    ) -> LoadResult<Layer> {
        anyhow::ensure!(
            layer.rows.len() == height as usize,
            "layer `{}` has {} rows, expected {}",
            layer.name,
            layer.rows.len(),
            height
        );

        let mut tiles = Vec::with_capacity((width * height) as usize);
        for (row, line) in layer.rows.iter().enumerate() {
            let before = tiles.len();
            for (col, symbol) in line.chars().enumerate() {
                let tile = match symbol {
                    EMPTY_CELL => None,
                    other => Some(*legend.get(&other).ok_or_else(|| {
                        anyhow::anyhow!(
                            "layer `{}` uses unknown symbol `{}` at ({}, {})",
                            layer.name,
                            other,
                            col,
                            row
                        )
                    })?),
                };
                tiles.push(tile);
            }
            anyhow::ensure!(
                tiles.len() - before == width as usize,
                "layer `{}` row {} has {} cells, expected {}",
                layer.name,
                row,
                tiles.len() - before,
                width
            );
        }

        Ok(Layer::new(layer.name, layer.visible, tiles))
    }
}
