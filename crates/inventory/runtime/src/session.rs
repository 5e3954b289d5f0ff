//! The inventory session: the façade collaborators talk to.

use std::sync::Arc;

use inventory_core::{
    CatalogOracle, Cell, InventoryConfig, ItemId, ItemRecord, OccupancyGrid,
};

use crate::error::{AddItemError, RestoreError};
use crate::event::{InventoryEvent, InventoryListener};
use crate::snapshot::{InventorySnapshot, SnapshotEntry};

/// Stateful session wrapping one occupancy grid.
///
/// The session assigns fresh identities, resolves shapes through the
/// catalog oracle, and fans successful mutations out to registered
/// listeners. It is a plain owned object: pass it by reference to whatever
/// needs it, there is no ambient global instance.
///
/// Single-writer by design. Embedders running threads must serialize
/// access externally; the session performs no internal locking.
pub struct InventorySession {
    grid: OccupancyGrid,
    catalog: Arc<dyn CatalogOracle>,
    next_item_id: u32,
    listeners: Vec<Box<dyn InventoryListener>>,
}

impl InventorySession {
    pub fn new(config: InventoryConfig, catalog: Arc<dyn CatalogOracle>) -> Self {
        Self {
            grid: OccupancyGrid::new(config.width, config.height),
            catalog,
            next_item_id: 0,
            listeners: Vec::new(),
        }
    }

    /// Registers a listener for change notifications. Delivery is
    /// synchronous and in registration order.
    pub fn subscribe(&mut self, listener: Box<dyn InventoryListener>) {
        self.listeners.push(listener);
    }

    /// Read-only access to the backing grid.
    pub fn grid(&self) -> &OccupancyGrid {
        &self.grid
    }

    fn emit(&mut self, event: InventoryEvent) {
        for listener in &mut self.listeners {
            listener.on_event(&event);
        }
    }

    /// Adds one item for `external_ref`, at `preferred_anchor` when that
    /// pose is free, else at the first row-major fit.
    ///
    /// New items start at rotation 0. A full grid is the expected
    /// [`AddItemError::NoSpace`] outcome, not a bug.
    pub fn add_item(
        &mut self,
        external_ref: &str,
        preferred_anchor: Option<Cell>,
    ) -> Result<ItemId, AddItemError> {
        let Some(shape) = self.catalog.resolve_shape(external_ref) else {
            tracing::warn!("Add rejected, unresolvable ref '{}'", external_ref);
            return Err(AddItemError::UnresolvedRef {
                external_ref: external_ref.to_string(),
            });
        };
        let anchor = match preferred_anchor {
            Some(anchor) if self.grid.is_valid_placement(anchor, shape, 0, None) => anchor,
            _ => self
                .grid
                .find_first_fit(shape, 0, Cell::ORIGIN)
                .ok_or_else(|| AddItemError::NoSpace {
                    external_ref: external_ref.to_string(),
                    shape,
                })?,
        };
        let id = ItemId(self.next_item_id);
        let record = ItemRecord::new(id, shape, 0, anchor, external_ref);
        let committed = self.grid.place(record.clone());
        debug_assert!(committed, "anchor was validated before placing");
        self.next_item_id += 1;
        tracing::debug!("Added {} ({:?}) at {}", id, shape, anchor);
        self.emit(InventoryEvent::ItemAdded(record));
        Ok(id)
    }

    /// Removes `id`. Unknown identities return `false` without an event.
    pub fn remove_item(&mut self, id: ItemId) -> bool {
        if !self.grid.remove(id) {
            return false;
        }
        tracing::debug!("Removed {}", id);
        self.emit(InventoryEvent::ItemRemoved(id));
        true
    }

    /// Moves `id` to `new_anchor`. On failure the grid is untouched and no
    /// event fires.
    pub fn move_item(&mut self, id: ItemId, new_anchor: Cell) -> bool {
        if !self.grid.move_item(id, new_anchor) {
            tracing::debug!("Move of {} to {} rejected", id, new_anchor);
            return false;
        }
        tracing::debug!("Moved {} to {}", id, new_anchor);
        if let Some(record) = self.grid.get(id).cloned() {
            self.emit(InventoryEvent::ItemChanged(record));
        }
        true
    }

    /// Cycles `id` to its next rotation state. On failure the grid is
    /// untouched and no event fires.
    pub fn rotate_item(&mut self, id: ItemId) -> bool {
        if !self.grid.rotate_item(id) {
            tracing::debug!("Rotate of {} rejected", id);
            return false;
        }
        if let Some(record) = self.grid.get(id).cloned() {
            tracing::debug!("Rotated {} to state {}", id, record.rotation_index);
            self.emit(InventoryEvent::ItemChanged(record));
        }
        true
    }

    /// Complete persisted state of this session.
    pub fn snapshot(&self) -> InventorySnapshot {
        InventorySnapshot {
            width: self.grid.width(),
            height: self.grid.height(),
            next_item_id: self.next_item_id,
            entries: self.grid.items().iter().map(SnapshotEntry::from).collect(),
        }
    }

    /// Bulk-swaps the backing grid from persisted state.
    ///
    /// Emits one [`InventoryEvent::DataReplaced`] followed by one
    /// [`InventoryEvent::ItemAdded`] per restored record, so presentation
    /// layers rebuild without per-item diffing. On error the session is
    /// left untouched.
    pub fn restore(&mut self, snapshot: InventorySnapshot) -> Result<(), RestoreError> {
        let mut grid = OccupancyGrid::new(snapshot.width, snapshot.height);
        let mut restored = Vec::with_capacity(snapshot.entries.len());
        for entry in &snapshot.entries {
            let shape = self.catalog.resolve_shape(&entry.external_ref).ok_or_else(|| {
                RestoreError::UnresolvedRef {
                    id: entry.id,
                    external_ref: entry.external_ref.clone(),
                }
            })?;
            let record = ItemRecord::new(
                entry.id,
                shape,
                entry.rotation_index,
                Cell::new(entry.anchor_x, entry.anchor_y),
                entry.external_ref.clone(),
            );
            if !grid.place(record.clone()) {
                return Err(RestoreError::InvalidPlacement {
                    id: record.id,
                    anchor: record.anchor,
                });
            }
            restored.push(record);
        }
        tracing::debug!(
            "Restored {}x{} grid with {} items",
            snapshot.width,
            snapshot.height,
            restored.len()
        );
        self.grid = grid;
        self.next_item_id = snapshot.next_item_id;
        self.emit(InventoryEvent::DataReplaced(snapshot));
        for record in restored {
            self.emit(InventoryEvent::ItemAdded(record));
        }
        Ok(())
    }
}
