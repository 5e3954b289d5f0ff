/// Inventory configuration constants and tunable parameters.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InventoryConfig {
    /// Grid width in cells.
    pub width: u32,
    /// Grid height in cells.
    pub height: u32,
}

impl InventoryConfig {
    // ===== compile-time constants used as type parameters =====
    /// Maximum cells any single rotation state may occupy. The shape tables
    /// are validated against this bound; footprint buffers are sized by it.
    pub const MAX_SHAPE_CELLS: usize = 6;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_GRID_WIDTH: u32 = 10;
    pub const DEFAULT_GRID_HEIGHT: u32 = 8;

    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

impl Default for InventoryConfig {
    fn default() -> Self {
        Self {
            width: Self::DEFAULT_GRID_WIDTH,
            height: Self::DEFAULT_GRID_HEIGHT,
        }
    }
}
