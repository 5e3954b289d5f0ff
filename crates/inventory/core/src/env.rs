//! Read-only oracle trait describing the external item catalog.
//!
//! The core never owns item definitions; it resolves shapes through this
//! trait so content loading stays outside the placement logic.

use crate::shape::ShapeKind;

/// Lookup surface of the item-definition catalog.
///
/// Unknown refs return `None`; converting that into an error (or a user
/// message) is the caller's decision, never the catalog's.
pub trait CatalogOracle: Send + Sync {
    /// Resolves the shape an external item reference occupies.
    fn resolve_shape(&self, external_ref: &str) -> Option<ShapeKind>;

    /// Bounding-box size of the ref's rotation-0 footprint, for callers
    /// doing layout heuristics.
    fn bounding_size(&self, external_ref: &str) -> Option<(u32, u32)>;
}
