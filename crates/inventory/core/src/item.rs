//! Item records: one placed entity and its derived footprint.

use arrayvec::ArrayVec;

use crate::config::InventoryConfig;
use crate::shape::{RotationState, ShapeKind};
use crate::types::{Cell, ItemId};

/// Bounded set of cells one placement occupies.
pub type Footprint = ArrayVec<Cell, { InventoryConfig::MAX_SHAPE_CELLS }>;

/// One placed entity: identity, shape, current pose, and a reference into
/// the external item catalog (resolved lazily by the consuming layer).
///
/// The occupied-cell set is never stored; it is recomputed from the shape
/// tables on demand. Footprints are at most six cells, so eager
/// recomputation is cheaper than keeping a cache coherent.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemRecord {
    pub id: ItemId,
    pub shape: ShapeKind,
    pub rotation_index: usize,
    pub anchor: Cell,
    pub external_ref: String,
}

impl ItemRecord {
    pub fn new(
        id: ItemId,
        shape: ShapeKind,
        rotation_index: usize,
        anchor: Cell,
        external_ref: impl Into<String>,
    ) -> Self {
        Self {
            id,
            shape,
            rotation_index,
            anchor,
            external_ref: external_ref.into(),
        }
    }

    /// The rotation state this record currently poses in.
    pub fn rotation_state(&self) -> &'static RotationState {
        self.shape.state_at(self.rotation_index)
    }

    /// Cells this record occupies at its current anchor and rotation.
    pub fn occupied_cells(&self) -> Footprint {
        Self::cells_at(self.shape, self.anchor, self.rotation_index)
    }

    /// Footprint of a candidate pose without mutating any record. Used by
    /// the grid to validate moves and rotations before committing them.
    pub fn cells_at(shape: ShapeKind, anchor: Cell, rotation_index: usize) -> Footprint {
        shape
            .state_at(rotation_index)
            .offsets
            .iter()
            .map(|&off| anchor + off)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn footprint_translates_offsets_by_anchor() {
        let record = ItemRecord::new(ItemId(1), ShapeKind::LShape, 0, Cell::new(3, 2), "machete");
        let cells = record.occupied_cells();
        assert_eq!(
            cells.as_slice(),
            &[
                Cell::new(3, 2),
                Cell::new(4, 2),
                Cell::new(5, 2),
                Cell::new(3, 3),
            ]
        );
    }

    #[test]
    fn cells_at_wraps_rotation_index() {
        let at_zero = ItemRecord::cells_at(ShapeKind::Domino, Cell::ORIGIN, 0);
        let wrapped = ItemRecord::cells_at(ShapeKind::Domino, Cell::ORIGIN, 2);
        assert_eq!(at_zero, wrapped);
    }
}
