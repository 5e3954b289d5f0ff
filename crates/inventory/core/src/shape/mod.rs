//! The shape catalog: compile-time rotation-state tables for every item shape.
//!
//! Each [`ShapeKind`] maps to a fixed, ordered list of [`RotationState`]s
//! built once at compile time. Rotation-symmetric orientations are
//! deduplicated (the 2x2 square has one state, a domino two, an L-shape
//! four), so cycling the rotation index always walks distinct footprints.
//!
//! The tables are plain `static` data: no runtime lookup, no mutation, safe
//! for concurrent reads.

mod tables;

use crate::types::CellOffset;

/// Named polyomino category carried by every item.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::EnumIter)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ShapeKind {
    /// 1 cell.
    Single,
    /// 2 cells in a row.
    Domino,
    /// 2x2 block.
    Square,
    /// 4 cells in a row.
    Line,
    /// 4-cell L: a 3-cell bar with one cell hooked off the end.
    LShape,
    /// 5-cell comb: a 3-cell bar with two teeth.
    Comb,
    /// 3-cell corner piece.
    Corner,
}

/// Display tag attached to each rotation state, consumed by presentation
/// layers when painting occupied cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Tint {
    Slate,
    Amber,
    Moss,
    Rust,
    Sky,
    Ivory,
    Plum,
}

/// One concrete orientation of a shape: a fixed set of unique cell offsets
/// relative to the anchor at (0, 0), normalized so the minimum column and
/// row offsets are zero.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RotationState {
    pub offsets: &'static [CellOffset],
    pub tint: Tint,
}

impl RotationState {
    pub const fn new(offsets: &'static [CellOffset], tint: Tint) -> Self {
        Self { offsets, tint }
    }

    /// Width and height of this orientation's bounding box.
    pub fn bounding_size(&self) -> (u32, u32) {
        let mut max_dx = 0;
        let mut max_dy = 0;
        for off in self.offsets {
            max_dx = max_dx.max(off.dx);
            max_dy = max_dy.max(off.dy);
        }
        (max_dx as u32 + 1, max_dy as u32 + 1)
    }
}

impl ShapeKind {
    /// Ordered rotation states for this shape. Never empty.
    pub fn rotations(self) -> &'static [RotationState] {
        match self {
            Self::Single => &tables::SINGLE,
            Self::Domino => &tables::DOMINO,
            Self::Square => &tables::SQUARE,
            Self::Line => &tables::LINE,
            Self::LShape => &tables::L_SHAPE,
            Self::Comb => &tables::COMB,
            Self::Corner => &tables::CORNER,
        }
    }

    pub fn rotation_count(self) -> usize {
        self.rotations().len()
    }

    /// State at `rotation_index`, taken modulo the rotation count. Wraps
    /// instead of erroring so callers can cycle indices freely.
    pub fn state_at(self, rotation_index: usize) -> &'static RotationState {
        let states = self.rotations();
        &states[rotation_index % states.len()]
    }

    /// Cells occupied by any orientation of this shape.
    pub fn cell_count(self) -> usize {
        self.rotations()[0].offsets.len()
    }
}
