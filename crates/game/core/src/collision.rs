//! Axis-aligned tile collision.
//!
//! Movement tests sample a single cell at the centre of the destination box
//! against every collidable layer, then test the box against other actors
//! with strict rectangle overlap. Interaction uses a looser test: the NPC's
//! box grows by half a tile on each side.

use crate::state::{Cell, Facing, LayerRole, Point, Rect, TileMap};

/// Collision queries over one map at one tile size.
#[derive(Clone, Copy, Debug)]
pub struct CollisionMap<'a> {
    map: &'a TileMap,
    tile_size: i32,
}

impl<'a> CollisionMap<'a> {
    pub fn new(map: &'a TileMap, tile_size: i32) -> Self {
        Self { map, tile_size }
    }

    pub fn map(&self) -> &'a TileMap {
        self.map
    }

    pub fn tile_size(&self) -> i32 {
        self.tile_size
    }

    /// Largest top-left coordinate that keeps a tile-sized box on the map.
    pub fn max_position(&self) -> Point {
        Point::new(
            self.map.width() as i32 * self.tile_size - self.tile_size,
            self.map.height() as i32 * self.tile_size - self.tile_size,
        )
    }

    /// Pulls `position` back inside the map extents.
    pub fn clamp(&self, position: Point) -> Point {
        let max = self.max_position();
        Point::new(position.x.clamp(0, max.x.max(0)), position.y.clamp(0, max.y.max(0)))
    }

    /// Bounds test for NPC wander targets.
    ///
    /// Only a quarter tile is reserved at the far edges, so this accepts
    /// positions the player clamp would pull back.
    pub fn npc_in_bounds(&self, position: Point) -> bool {
        let margin = self.tile_size / 4;
        position.x >= 0
            && position.y >= 0
            && position.x <= self.map.width() as i32 * self.tile_size - margin
            && position.y <= self.map.height() as i32 * self.tile_size - margin
    }

    /// Cell sampled for a box anchored at `position`.
    pub fn sample_cell(&self, position: Point) -> Cell {
        position.center_cell(self.tile_size)
    }

    /// True when a collidable layer is populated at the sampled cell.
    pub fn layer_blocked(&self, position: Point) -> bool {
        self.map.is_blocked(self.sample_cell(position))
    }

    /// True when the box at `position` overlaps any of `others`.
    pub fn overlaps_any<I>(&self, position: Point, others: I) -> bool
    where
        I: IntoIterator<Item = Point>,
    {
        let rect = position.tile_rect(self.tile_size);
        others
            .into_iter()
            .any(|other| rect.overlaps(&other.tile_rect(self.tile_size)))
    }

    /// Full movement test: layers first, then actors.
    pub fn blocked<I>(&self, position: Point, actors: I) -> bool
    where
        I: IntoIterator<Item = Point>,
    {
        self.layer_blocked(position) || self.overlaps_any(position, actors)
    }

    /// Interaction reach around an NPC standing at `npc`.
    pub fn reach(&self, npc: Point) -> Rect {
        npc.tile_rect(self.tile_size).inflate(self.tile_size / 2)
    }

    /// True when an actor at `actor` is close enough to talk to the NPC at `npc`.
    pub fn is_facing_npc(&self, actor: Point, npc: Point) -> bool {
        actor.tile_rect(self.tile_size).overlaps(&self.reach(npc))
    }

    /// Cell directly in front of an actor.
    pub fn facing_cell(&self, position: Point, facing: Facing) -> Cell {
        self.sample_cell(position).offset(facing.delta())
    }

    /// True when `role`'s layer has a tile in front of the actor.
    pub fn facing_tile(&self, position: Point, facing: Facing, role: LayerRole) -> bool {
        self.map.has_tile(role, self.facing_cell(position, facing))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{Layer, Tile};

    const TS: i32 = 15;

    /// 4x4 map with a tree at (2, 1) and water at (0, 3).
    fn map() -> TileMap {
        let mut trees = vec![None; 16];
        trees[4 + 2] = Some(Tile::new(1, 7));
        let mut water = vec![None; 16];
        water[12] = Some(Tile::new(1, 3));
        TileMap::new(
            4,
            4,
            vec![
                Layer::new("Base ground", true, vec![Some(Tile::new(0, 1)); 16]),
                Layer::new("Water", true, water),
                Layer::new("Trees", true, trees),
            ],
        )
        .unwrap()
    }

    #[test]
    fn sampling_uses_the_box_centre() {
        let map = map();
        let grid = CollisionMap::new(&map, TS);
        // Box at x=23 has its centre at 30, inside column 2.
        assert!(grid.layer_blocked(Point::new(23, 15)));
        // Box at x=22 centres at 29, still column 1.
        assert!(!grid.layer_blocked(Point::new(22, 15)));
    }

    #[test]
    fn actors_touching_edges_do_not_block() {
        let map = map();
        let grid = CollisionMap::new(&map, TS);
        assert!(!grid.overlaps_any(Point::new(0, 0), [Point::new(15, 0)]));
        assert!(grid.overlaps_any(Point::new(1, 0), [Point::new(15, 0)]));
    }

    #[test]
    fn clamp_keeps_full_tile_on_map() {
        let map = map();
        let grid = CollisionMap::new(&map, TS);
        assert_eq!(grid.clamp(Point::new(-1, 99)), Point::new(0, 45));
    }

    #[test]
    fn npc_bounds_allow_three_quarter_overhang() {
        let map = map();
        let grid = CollisionMap::new(&map, TS);
        // 60 - 15/4 = 57
        assert!(grid.npc_in_bounds(Point::new(57, 0)));
        assert!(!grid.npc_in_bounds(Point::new(58, 0)));
        assert!(!grid.npc_in_bounds(Point::new(-1, 0)));
    }

    #[test]
    fn facing_reach_is_half_a_tile_wider() {
        let map = map();
        let grid = CollisionMap::new(&map, TS);
        let npc = Point::new(30, 30);
        assert!(grid.is_facing_npc(Point::new(9, 30), npc));
        assert!(!grid.is_facing_npc(Point::new(8, 30), npc));
        assert!(grid.is_facing_npc(Point::new(30, 51), npc));
        assert!(!grid.is_facing_npc(Point::new(30, 52), npc));
    }

    #[test]
    fn facing_tile_probes_neighbour() {
        let map = map();
        let grid = CollisionMap::new(&map, TS);
        let at = Point::new(15, 15);
        assert!(grid.facing_tile(at, Facing::Right, LayerRole::Trees));
        assert!(!grid.facing_tile(at, Facing::Left, LayerRole::Trees));
        assert!(grid.facing_tile(Point::new(0, 30), Facing::Down, LayerRole::Water));
    }
}
