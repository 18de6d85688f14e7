//! Map view types for grid rendering.

use game_core::{Cell, Layer, LayerRole, TileMap};

/// What a cell looks like from above.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Terrain {
    /// No visible tile in any layer.
    Void,
    Ground,
    Water,
    Tree,
    Door,
    /// Any other collidable layer (buildings, fences, ...).
    Wall,
}

impl Terrain {
    fn of(layer: &Layer) -> Self {
        match layer.role() {
            Some(LayerRole::BaseGround) => Terrain::Ground,
            Some(LayerRole::Water) => Terrain::Water,
            Some(LayerRole::Trees) => Terrain::Tree,
            Some(LayerRole::Doors) => Terrain::Door,
            None => Terrain::Wall,
        }
    }
}

/// Map view optimized for grid rendering.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MapView {
    pub width: u32,
    pub height: u32,
    /// One row per map row, top row first.
    pub rows: Vec<Vec<Terrain>>,
}

impl MapView {
    /// The topmost visible tile of every cell decides its terrain.
    pub fn from_map(map: &TileMap) -> Self {
        let rows = (0..map.height() as i32)
            .map(|row| {
                (0..map.width() as i32)
                    .map(|col| Self::terrain_at(map, Cell::new(col, row)))
                    .collect()
            })
            .collect();

        Self {
            width: map.width(),
            height: map.height(),
            rows,
        }
    }

    fn terrain_at(map: &TileMap, cell: Cell) -> Terrain {
        map.layers()
            .iter()
            .enumerate()
            .rev()
            .find(|(index, layer)| layer.visible && map.tile(*index, cell).is_some())
            .map_or(Terrain::Void, |(_, layer)| Terrain::of(layer))
    }

    pub fn terrain(&self, cell: Cell) -> Option<Terrain> {
        let row = self.rows.get(usize::try_from(cell.row).ok()?)?;
        row.get(usize::try_from(cell.col).ok()?).copied()
    }
}
