//! The occupancy grid: cell-to-owner map plus item index.
//!
//! This is the single source of truth for what occupies which cell. The
//! invariant held after every successful public operation: each stored
//! record's derived footprint equals exactly the set of cells owned by its
//! identity, every owned cell is in bounds, and footprints of distinct
//! identities never intersect.
//!
//! All failure outcomes are plain `bool`/`Option` returns. Bounds and
//! collision failures happen routinely during interactive dragging, so they
//! must be cheap and never panic or allocate an error.

use std::collections::BTreeMap;

use crate::item::ItemRecord;
use crate::shape::ShapeKind;
use crate::types::{Cell, ItemId};

/// Fixed-size grid mapping cells to owning item identities.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OccupancyGrid {
    width: u32,
    height: u32,
    /// Row-major cell owners; `None` is empty.
    cells: Vec<Option<ItemId>>,
    items: BTreeMap<ItemId, ItemRecord>,
}

impl OccupancyGrid {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            cells: vec![None; (width * height) as usize],
            items: BTreeMap::new(),
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn in_bounds(&self, cell: Cell) -> bool {
        cell.x >= 0 && cell.y >= 0 && (cell.x as u32) < self.width && (cell.y as u32) < self.height
    }

    fn index(&self, cell: Cell) -> usize {
        (cell.y as u32 * self.width + cell.x as u32) as usize
    }

    /// Identity owning `cell`, if any. Out-of-bounds cells are empty.
    pub fn owner_at(&self, cell: Cell) -> Option<ItemId> {
        if !self.in_bounds(cell) {
            return None;
        }
        self.cells[self.index(cell)]
    }

    pub fn get(&self, id: ItemId) -> Option<&ItemRecord> {
        self.items.get(&id)
    }

    /// Snapshot copy of every stored record. Iteration order is unspecified.
    pub fn items(&self) -> Vec<ItemRecord> {
        self.items.values().cloned().collect()
    }

    /// True when the candidate pose fits: every cell in bounds and every
    /// cell empty or owned by `ignore`.
    ///
    /// `ignore` lets an item validate a new pose against a grid that still
    /// contains its own old placement, without removing it first.
    pub fn is_valid_placement(
        &self,
        anchor: Cell,
        shape: ShapeKind,
        rotation_index: usize,
        ignore: Option<ItemId>,
    ) -> bool {
        for cell in ItemRecord::cells_at(shape, anchor, rotation_index) {
            if !self.in_bounds(cell) {
                return false;
            }
            match self.cells[self.index(cell)] {
                Some(owner) if Some(owner) != ignore => return false,
                _ => {}
            }
        }
        true
    }

    /// Inserts or repositions `record`. Returns `false` (grid unchanged)
    /// when the pose is invalid. When the identity already exists its old
    /// cells are cleared first, so one call repositions in place.
    pub fn place(&mut self, record: ItemRecord) -> bool {
        if !self.is_valid_placement(
            record.anchor,
            record.shape,
            record.rotation_index,
            Some(record.id),
        ) {
            return false;
        }
        let old_cells = self.items.get(&record.id).map(ItemRecord::occupied_cells);
        if let Some(cells) = old_cells {
            for cell in cells {
                let idx = self.index(cell);
                self.cells[idx] = None;
            }
        }
        for cell in record.occupied_cells() {
            let idx = self.index(cell);
            self.cells[idx] = Some(record.id);
        }
        self.items.insert(record.id, record);
        true
    }

    /// Removes `id` and vacates its cells. Unknown identities are a no-op
    /// returning `false`.
    pub fn remove(&mut self, id: ItemId) -> bool {
        let Some(record) = self.items.remove(&id) else {
            return false;
        };
        for cell in record.occupied_cells() {
            let idx = self.index(cell);
            self.cells[idx] = None;
        }
        true
    }

    /// First anchor, scanning row-major from `scan_from`, where the pose
    /// fits. Rows advance from `scan_from.y`; columns start at `scan_from.x`
    /// on the first row only, then at zero.
    ///
    /// The scan order is a contract: callers rely on it for deterministic
    /// auto-placement.
    pub fn find_first_fit(
        &self,
        shape: ShapeKind,
        rotation_index: usize,
        scan_from: Cell,
    ) -> Option<Cell> {
        for y in scan_from.y.max(0)..self.height as i32 {
            let x_start = if y == scan_from.y { scan_from.x.max(0) } else { 0 };
            for x in x_start..self.width as i32 {
                let anchor = Cell::new(x, y);
                if self.is_valid_placement(anchor, shape, rotation_index, None) {
                    return Some(anchor);
                }
            }
        }
        None
    }

    /// Moves `id` to `new_anchor`, keeping its rotation. Returns `false`
    /// and leaves the grid untouched when the identity is unknown or the
    /// target pose is invalid.
    ///
    /// Sequence: remove, try the candidate, re-place the original on
    /// failure. The re-place cannot fail because its cells were vacated by
    /// this same identity, so the grid never transiently holds an invalid
    /// placement and never loses the item.
    pub fn move_item(&mut self, id: ItemId, new_anchor: Cell) -> bool {
        let Some(original) = self.items.get(&id).cloned() else {
            return false;
        };
        self.remove(id);
        if self.is_valid_placement(new_anchor, original.shape, original.rotation_index, Some(id)) {
            let mut moved = original;
            moved.anchor = new_anchor;
            self.place(moved);
            true
        } else {
            self.place(original);
            false
        }
    }

    /// Cycles `id` to its next rotation state at a fixed anchor, with the
    /// same remove/try/revert-or-commit sequence as [`Self::move_item`].
    /// Shapes with a single rotation state report `false`: nothing to
    /// rotate.
    pub fn rotate_item(&mut self, id: ItemId) -> bool {
        let Some(original) = self.items.get(&id).cloned() else {
            return false;
        };
        let count = original.shape.rotation_count();
        if count <= 1 {
            return false;
        }
        let next_index = (original.rotation_index + 1) % count;
        self.remove(id);
        if self.is_valid_placement(original.anchor, original.shape, next_index, Some(id)) {
            let mut rotated = original;
            rotated.rotation_index = next_index;
            self.place(rotated);
            true
        } else {
            self.place(original);
            false
        }
    }

    /// Empties the grid unconditionally.
    pub fn clear(&mut self) {
        self.cells.fill(None);
        self.items.clear();
    }

    /// Verifies the cell-owner/item-index invariant. Intended for tests and
    /// debug assertions, not hot paths.
    pub fn is_consistent(&self) -> bool {
        let mut expected = vec![None; self.cells.len()];
        for record in self.items.values() {
            for cell in record.occupied_cells() {
                if !self.in_bounds(cell) {
                    return false;
                }
                let idx = self.index(cell);
                if expected[idx].is_some() {
                    return false;
                }
                expected[idx] = Some(record.id);
            }
        }
        expected == self.cells
    }
}
