//! Change notifications emitted by the session.

use inventory_core::{ItemId, ItemRecord};

use crate::snapshot::InventorySnapshot;

/// Events emitted by the session after successful mutations.
///
/// Each successful mutating call fires exactly one event of its category
/// (plus one `ItemAdded` per restored record after a `DataReplaced`).
/// Failed attempts fire nothing.
#[derive(Debug, Clone, PartialEq)]
pub enum InventoryEvent {
    /// An item was added to the grid.
    ItemAdded(ItemRecord),
    /// An item was removed from the grid.
    ItemRemoved(ItemId),
    /// An existing item moved or rotated; carries the updated record.
    ItemChanged(ItemRecord),
    /// The whole grid was replaced from persisted state.
    DataReplaced(InventorySnapshot),
}

/// Receiver of session notifications.
///
/// Delivery is synchronous, in-line with the mutating call, and not guarded
/// against reentrancy: handlers must not call back into the session.
pub trait InventoryListener {
    fn on_event(&mut self, event: &InventoryEvent);
}
