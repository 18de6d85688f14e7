//! Layered tile map supplied by the map provider.
//!
//! The core only ever mutates one thing here: individual cells of a layer
//! (felling a tree clears its tile). Geometry is fixed once constructed.

use crate::error::MapError;
use crate::state::types::Cell;

/// Layer names with gameplay meaning.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::EnumString, strum::AsRefStr)]
pub enum LayerRole {
    /// The single walkable layer; never collidable.
    #[strum(serialize = "Base ground")]
    BaseGround,
    /// Fishing spot.
    Water,
    /// Choppable trees.
    Trees,
    /// Doors block the inventory toggle but have no interaction of their own.
    Doors,
}

impl LayerRole {
    pub const BASE_GROUND: &'static str = "Base ground";

    pub fn name(self) -> &'static str {
        match self {
            LayerRole::BaseGround => Self::BASE_GROUND,
            LayerRole::Water => "Water",
            LayerRole::Trees => "Trees",
            LayerRole::Doors => "Doors",
        }
    }
}

/// Reference to a tileset-bound tile.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tile {
    pub tileset: u16,
    pub id: u32,
}

impl Tile {
    pub const fn new(tileset: u16, id: u32) -> Self {
        Self { tileset, id }
    }
}

/// A named dense grid of optional tiles, row-major.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Layer {
    pub name: String,
    pub visible: bool,
    pub tiles: Vec<Option<Tile>>,
}

impl Layer {
    pub fn new(name: impl Into<String>, visible: bool, tiles: Vec<Option<Tile>>) -> Self {
        Self {
            name: name.into(),
            visible,
            tiles,
        }
    }

    pub fn role(&self) -> Option<LayerRole> {
        self.name.parse().ok()
    }

    pub fn is_base_ground(&self) -> bool {
        self.name == LayerRole::BASE_GROUND
    }

    /// Any visible layer except the base ground blocks movement where populated.
    pub fn is_collidable(&self) -> bool {
        self.visible && !self.is_base_ground()
    }
}

/// Map geometry plus every layer in draw order.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TileMap {
    width: u32,
    height: u32,
    layers: Vec<Layer>,
}

impl TileMap {
    /// Validates dimensions and layer sizes.
    ///
    /// # Errors
    ///
    /// Fails when a dimension is zero, when a layer does not hold exactly
    /// `width * height` cells, or when there is not exactly one base ground
    /// layer.
    pub fn new(width: u32, height: u32, layers: Vec<Layer>) -> Result<Self, MapError> {
        if width == 0 || height == 0 {
            return Err(MapError::EmptyDimensions { width, height });
        }

        let expected = (width * height) as usize;
        if let Some(layer) = layers.iter().find(|layer| layer.tiles.len() != expected) {
            return Err(MapError::LayerSize {
                layer: layer.name.clone(),
                expected,
                actual: layer.tiles.len(),
            });
        }

        let ground = layers.iter().filter(|layer| layer.is_base_ground()).count();
        if ground != 1 {
            return Err(MapError::GroundLayer {
                name: LayerRole::BASE_GROUND,
                count: ground,
            });
        }

        Ok(Self {
            width,
            height,
            layers,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    pub fn contains(&self, cell: Cell) -> bool {
        cell.col >= 0
            && cell.row >= 0
            && cell.col < self.width as i32
            && cell.row < self.height as i32
    }

    /// Row-major index of an in-bounds cell.
    pub fn index_of(&self, cell: Cell) -> Option<usize> {
        self.contains(cell)
            .then(|| cell.row as usize * self.width as usize + cell.col as usize)
    }

    pub fn layer_index(&self, role: LayerRole) -> Option<usize> {
        self.layers.iter().position(|layer| layer.role() == Some(role))
    }

    pub fn layer(&self, role: LayerRole) -> Option<&Layer> {
        self.layer_index(role).map(|idx| &self.layers[idx])
    }

    /// Tile of `layer` at `cell`, if any.
    pub fn tile(&self, layer: usize, cell: Cell) -> Option<Tile> {
        let idx = self.index_of(cell)?;
        self.layers.get(layer)?.tiles[idx]
    }

    /// True when the layer with `role` has a tile at `cell`.
    pub fn has_tile(&self, role: LayerRole, cell: Cell) -> bool {
        self.layer_index(role)
            .is_some_and(|layer| self.tile(layer, cell).is_some())
    }

    /// True when any collidable layer has a tile at `cell`.
    ///
    /// Out-of-bounds cells never block.
    pub fn is_blocked(&self, cell: Cell) -> bool {
        let Some(idx) = self.index_of(cell) else {
            return false;
        };
        self.layers
            .iter()
            .filter(|layer| layer.is_collidable())
            .any(|layer| layer.tiles[idx].is_some())
    }

    /// Clears one cell of one layer. Returns the removed tile.
    pub fn clear_tile(&mut self, layer: usize, index: usize) -> Option<Tile> {
        self.layers
            .get_mut(layer)
            .and_then(|layer| layer.tiles.get_mut(index))
            .and_then(Option::take)
    }

    /// Toggles a layer's visibility; hidden layers never collide.
    pub fn set_visible(&mut self, role: LayerRole, visible: bool) {
        if let Some(idx) = self.layer_index(role) {
            self.layers[idx].visible = visible;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layer(name: &str, cells: &[u8]) -> Layer {
        let tiles = cells
            .iter()
            .map(|&c| (c != 0).then(|| Tile::new(0, c as u32)))
            .collect();
        Layer::new(name, true, tiles)
    }

    fn sample() -> TileMap {
        TileMap::new(
            3,
            2,
            vec![
                layer("Base ground", &[1, 1, 1, 1, 1, 1]),
                layer("Trees", &[0, 2, 0, 0, 0, 0]),
            ],
        )
        .unwrap()
    }

    #[test]
    fn ground_layer_never_blocks() {
        let map = sample();
        assert!(!map.is_blocked(Cell::new(0, 0)));
        assert!(map.is_blocked(Cell::new(1, 0)));
    }

    #[test]
    fn out_of_bounds_is_not_blocked() {
        let map = sample();
        assert!(!map.is_blocked(Cell::new(-1, 0)));
        assert!(!map.is_blocked(Cell::new(3, 0)));
    }

    #[test]
    fn hidden_layers_do_not_collide() {
        let mut map = sample();
        map.set_visible(LayerRole::Trees, false);
        assert!(!map.is_blocked(Cell::new(1, 0)));
    }

    #[test]
    fn clearing_a_tile_unblocks_the_cell() {
        let mut map = sample();
        let trees = map.layer_index(LayerRole::Trees).unwrap();
        assert_eq!(map.clear_tile(trees, 1), Some(Tile::new(0, 2)));
        assert!(!map.is_blocked(Cell::new(1, 0)));
        assert_eq!(map.clear_tile(trees, 1), None);
    }

    #[test]
    fn rejects_missing_ground_layer() {
        let err = TileMap::new(1, 1, vec![layer("Trees", &[0])]).unwrap_err();
        assert_eq!(
            err,
            MapError::GroundLayer {
                name: "Base ground",
                count: 0
            }
        );
    }

    #[test]
    fn rejects_short_layers() {
        let err = TileMap::new(2, 2, vec![layer("Base ground", &[1, 1, 1])]).unwrap_err();
        assert!(matches!(err, MapError::LayerSize { expected: 4, actual: 3, .. }));
    }
}
