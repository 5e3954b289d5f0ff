//! Deterministic polyomino inventory placement logic.
//!
//! `inventory-core` defines the canonical rules for placing multi-cell item
//! shapes on a fixed-size grid: the shape catalog (rotation-state tables),
//! item records, and the occupancy grid that owns all placement, removal,
//! move and rotate algorithms. All state mutation flows through
//! [`grid::OccupancyGrid`]; supporting crates depend on the types re-exported
//! here.
//!
//! The crate is synchronous and single-writer by design: no interior locking,
//! no background work, no I/O. Callers embedding it in a threaded environment
//! must serialize access externally.
pub mod config;
pub mod env;
pub mod grid;
pub mod item;
pub mod shape;
pub mod types;

pub use config::InventoryConfig;
pub use env::CatalogOracle;
pub use grid::OccupancyGrid;
pub use item::{Footprint, ItemRecord};
pub use shape::{RotationState, ShapeKind, Tint};
pub use types::{Cell, CellOffset, ItemId};
