//! Session error types.
//!
//! Only catalog resolution and snapshot restore produce errors; placement,
//! bounds, and unknown-identity failures stay plain `bool` results because
//! they happen routinely during interactive dragging.

use inventory_core::{Cell, ItemId, ShapeKind};

/// Failures of [`crate::InventorySession::add_item`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum AddItemError {
    /// The item catalog has no definition for the requested ref. Usually a
    /// data-integrity bug; the caller decides how loudly to report it.
    #[error("Item catalog cannot resolve ref '{external_ref}'")]
    UnresolvedRef {
        /// The unresolvable reference.
        external_ref: String,
    },

    /// No anchor on the grid fits the item's shape. The expected
    /// "inventory full" outcome, not a bug.
    #[error("No free placement for '{external_ref}' (shape {shape:?})")]
    NoSpace {
        /// The reference that could not be placed.
        external_ref: String,
        /// The shape that found no fit.
        shape: ShapeKind,
    },
}

/// Failures of [`crate::InventorySession::restore`].
///
/// Either variant means the snapshot does not describe a state this catalog
/// could have saved; the session is left untouched.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RestoreError {
    /// A snapshot entry references an item the catalog no longer knows.
    #[error("Snapshot entry {id} references unknown ref '{external_ref}'")]
    UnresolvedRef {
        /// Identity of the offending entry.
        id: ItemId,
        /// The unresolvable reference.
        external_ref: String,
    },

    /// Snapshot entries collide or leave the grid. Honest saves replay in
    /// any order, so this indicates corruption.
    #[error("Snapshot entry {id} cannot be placed at {anchor}")]
    InvalidPlacement {
        /// Identity of the offending entry.
        id: ItemId,
        /// The anchor that failed validation.
        anchor: Cell,
    },
}
