use std::fmt;

/// Index of an NPC in the world roster.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NpcId(pub u32);

impl NpcId {
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for NpcId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "npc#{}", self.0)
    }
}

/// Milliseconds elapsed since the session started.
///
/// Supplied by the caller every frame; the core never reads a clock itself.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Timestamp(pub u64);

impl Timestamp {
    pub const ZERO: Self = Self(0);

    pub const fn from_millis(ms: u64) -> Self {
        Self(ms)
    }

    pub const fn as_millis(self) -> u64 {
        self.0
    }

    /// Milliseconds from `earlier` to `self`, saturating at zero.
    pub const fn since(self, earlier: Timestamp) -> u64 {
        self.0.saturating_sub(earlier.0)
    }
}

impl std::ops::Add<u64> for Timestamp {
    type Output = Timestamp;
    fn add(self, rhs: u64) -> Timestamp {
        Timestamp(self.0 + rhs)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}ms", self.0)
    }
}

/// Position in world units (one tile spans `GameConfig::tile_size` units).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const ORIGIN: Self = Self { x: 0, y: 0 };

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Top-left corner of the tile at `(col, row)`.
    pub const fn from_tile(col: i32, row: i32, tile_size: i32) -> Self {
        Self {
            x: col * tile_size,
            y: row * tile_size,
        }
    }

    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Tile-sized rectangle anchored at this point.
    pub const fn tile_rect(self, tile_size: i32) -> Rect {
        Rect::new(self.x, self.y, self.x + tile_size, self.y + tile_size)
    }

    /// Cell sampled at the centre of the tile-sized box anchored here.
    pub const fn center_cell(self, tile_size: i32) -> Cell {
        let half = tile_size / 2;
        Cell::new(
            (self.x + half).div_euclid(tile_size),
            (self.y + half).div_euclid(tile_size),
        )
    }
}

/// Grid coordinates of a single tile.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pub col: i32,
    pub row: i32,
}

impl Cell {
    pub const fn new(col: i32, row: i32) -> Self {
        Self { col, row }
    }

    pub const fn offset(self, (dc, dr): (i32, i32)) -> Self {
        Self {
            col: self.col + dc,
            row: self.row + dr,
        }
    }
}

/// Half-open axis-aligned rectangle `[min, max)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rect {
    pub min: Point,
    pub max: Point,
}

impl Rect {
    pub const fn new(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        Self {
            min: Point::new(x0, y0),
            max: Point::new(x1, y1),
        }
    }

    /// Expands the rectangle by `pad` on every side.
    pub const fn inflate(self, pad: i32) -> Self {
        Self::new(
            self.min.x - pad,
            self.min.y - pad,
            self.max.x + pad,
            self.max.y + pad,
        )
    }

    pub const fn is_empty(&self) -> bool {
        self.min.x >= self.max.x || self.min.y >= self.max.y
    }

    /// True when the interiors intersect. Shared edges do not count.
    pub const fn overlaps(&self, other: &Rect) -> bool {
        !self.is_empty()
            && !other.is_empty()
            && self.min.x < other.max.x
            && other.min.x < self.max.x
            && self.min.y < other.max.y
            && other.min.y < self.max.y
    }
}

/// Direction an actor is facing.
///
/// Facing is geometric: `Left` looks towards decreasing `x`. The tile probed
/// for interactions is always the neighbour in the facing direction, which is
/// the tile the player last walked towards.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumIter,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum Facing {
    #[default]
    Down,
    Right,
    Left,
    Up,
}

impl Facing {
    pub const ALL: [Facing; 4] = [Facing::Up, Facing::Down, Facing::Left, Facing::Right];

    /// Unit cell offset in the facing direction.
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Facing::Down => (0, 1),
            Facing::Right => (1, 0),
            Facing::Left => (-1, 0),
            Facing::Up => (0, -1),
        }
    }

    pub const fn opposite(self) -> Facing {
        match self {
            Facing::Down => Facing::Up,
            Facing::Right => Facing::Left,
            Facing::Left => Facing::Right,
            Facing::Up => Facing::Down,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn touching_rectangles_do_not_overlap() {
        let a = Rect::new(0, 0, 15, 15);
        let b = Rect::new(15, 0, 30, 15);
        assert!(!a.overlaps(&b));
        assert!(!b.overlaps(&a));
    }

    #[test]
    fn interior_intersection_overlaps() {
        let a = Rect::new(0, 0, 15, 15);
        let b = Rect::new(14, 14, 29, 29);
        assert!(a.overlaps(&b));
    }

    #[test]
    fn center_cell_rounds_towards_tile_centres() {
        // 15-unit tiles: half = 7, so x = 7 still samples cell 0, x = 8 samples cell 1.
        assert_eq!(Point::new(7, 0).center_cell(15), Cell::new(0, 0));
        assert_eq!(Point::new(8, 0).center_cell(15), Cell::new(1, 0));
    }

    #[test]
    fn timestamp_since_saturates() {
        assert_eq!(Timestamp(100).since(Timestamp(250)), 0);
        assert_eq!(Timestamp(250).since(Timestamp(100)), 150);
    }
}
