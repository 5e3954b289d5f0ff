//! Persistence shape for one inventory session.
//!
//! The snapshot is the complete, minimal serialization of an occupancy
//! grid: occupied cells and shapes are re-derived from the shape catalog
//! and the external refs on load. Entries replay through `place` in any
//! order, because records that did not conflict when saved cannot conflict
//! on restore.

use serde::{Deserialize, Serialize};

use inventory_core::{ItemId, ItemRecord};

/// One persisted item placement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnapshotEntry {
    pub id: ItemId,
    pub external_ref: String,
    pub anchor_x: i32,
    pub anchor_y: i32,
    pub rotation_index: usize,
}

impl From<&ItemRecord> for SnapshotEntry {
    fn from(record: &ItemRecord) -> Self {
        Self {
            id: record.id,
            external_ref: record.external_ref.clone(),
            anchor_x: record.anchor.x,
            anchor_y: record.anchor.y,
            rotation_index: record.rotation_index,
        }
    }
}

/// Complete persisted state of one session: grid dimensions, the identity
/// counter, and every placement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventorySnapshot {
    pub width: u32,
    pub height: u32,
    pub next_item_id: u32,
    pub entries: Vec<SnapshotEntry>,
}
