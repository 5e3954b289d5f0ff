//! Session-level orchestration over one occupancy grid.
//!
//! `inventory-runtime` layers identity assignment, catalog resolution, and
//! change-notification fan-out on top of [`inventory_core::OccupancyGrid`].
//! Presentation and persistence collaborators talk to
//! [`session::InventorySession`] only; they never mutate the grid directly.
//!
//! Everything here is synchronous: notifications are delivered in-line,
//! before the mutating call returns, and listeners must not re-enter the
//! session from inside a handler.

pub mod error;
pub mod event;
pub mod session;
pub mod snapshot;

pub use error::{AddItemError, RestoreError};
pub use event::{InventoryEvent, InventoryListener};
pub use session::InventorySession;
pub use snapshot::{InventorySnapshot, SnapshotEntry};
