//! Fixed-grid stacking inventory.
//!
//! Slots are scanned row-major for every operation. Overflow is dropped
//! silently: `add` never fails, it simply stops when the grid is full.

use arrayvec::ArrayVec;

use crate::config::GameConfig;

/// Canonical item names.
pub mod items {
    pub const WOOD: &str = "Wood";
    pub const FISH: &str = "Fish";
    pub const COOKED_FISH: &str = "Cooked Fish";
}

/// One cell of the grid. An empty name or a zero count means "empty".
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InventorySlot {
    pub item: String,
    pub count: u32,
}

impl InventorySlot {
    pub fn new(item: impl Into<String>, count: u32) -> Self {
        Self {
            item: item.into(),
            count,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.item.is_empty() || self.count == 0
    }

    fn holds(&self, item: &str) -> bool {
        self.item == item
    }

    fn clear(&mut self) {
        self.item.clear();
        self.count = 0;
    }
}

/// 8x8 grid of item stacks.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Inventory {
    slots: ArrayVec<InventorySlot, { GameConfig::INVENTORY_SLOTS }>,
    stack_limit: u32,
}

impl Inventory {
    pub fn new(stack_limit: u32) -> Self {
        let mut slots = ArrayVec::new();
        for _ in 0..GameConfig::INVENTORY_SLOTS {
            slots.push(InventorySlot::default());
        }
        Self { slots, stack_limit }
    }

    pub fn stack_limit(&self) -> u32 {
        self.stack_limit
    }

    pub fn slots(&self) -> &[InventorySlot] {
        &self.slots
    }

    /// Slot at `(row, col)`.
    pub fn slot(&self, row: usize, col: usize) -> Option<&InventorySlot> {
        if row >= GameConfig::INVENTORY_ROWS || col >= GameConfig::INVENTORY_COLS {
            return None;
        }
        self.slots.get(row * GameConfig::INVENTORY_COLS + col)
    }

    /// Rows of the grid in display order.
    pub fn rows(&self) -> impl Iterator<Item = &[InventorySlot]> {
        self.slots.chunks(GameConfig::INVENTORY_COLS)
    }

    /// Adds `count` of `item`, topping up existing stacks before opening new
    /// ones. Returns how many were actually stored.
    pub fn add(&mut self, item: &str, count: u32) -> u32 {
        let limit = self.stack_limit;
        let mut remaining = count;

        for slot in self.slots.iter_mut() {
            if remaining == 0 {
                break;
            }
            if slot.holds(item) && slot.count > 0 && slot.count < limit {
                let moved = remaining.min(limit - slot.count);
                slot.count += moved;
                remaining -= moved;
            }
        }

        for slot in self.slots.iter_mut() {
            if remaining == 0 {
                break;
            }
            if slot.is_empty() {
                let moved = remaining.min(limit);
                slot.item.clear();
                slot.item.push_str(item);
                slot.count = moved;
                remaining -= moved;
            }
        }

        count - remaining
    }

    /// True when the running total of `item` reaches `count`.
    pub fn has_item(&self, item: &str, count: u32) -> bool {
        if count == 0 {
            return true;
        }
        let mut total = 0;
        for slot in self.slots.iter().filter(|slot| slot.holds(item)) {
            total += slot.count;
            if total >= count {
                return true;
            }
        }
        false
    }

    /// Removes up to `count` of `item`; fully drained slots become empty.
    /// Returns how many were removed.
    pub fn remove(&mut self, item: &str, count: u32) -> u32 {
        let mut remaining = count;
        for slot in self.slots.iter_mut() {
            if remaining == 0 {
                break;
            }
            if !slot.holds(item) || slot.count == 0 {
                continue;
            }
            if slot.count > remaining {
                slot.count -= remaining;
                remaining = 0;
            } else {
                remaining -= slot.count;
                slot.clear();
            }
        }
        count - remaining
    }

    /// Total quantity of `item` across all slots.
    pub fn count_of(&self, item: &str) -> u32 {
        self.slots
            .iter()
            .filter(|slot| slot.holds(item))
            .map(|slot| slot.count)
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(InventorySlot::is_empty)
    }

    /// Empties every slot.
    pub fn clear(&mut self) {
        self.slots.iter_mut().for_each(InventorySlot::clear);
    }
}

impl Default for Inventory {
    fn default() -> Self {
        Self::new(GameConfig::DEFAULT_STACK_LIMIT)
    }
}
