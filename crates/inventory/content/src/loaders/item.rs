//! Item catalog loader.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::catalog::{ItemCatalog, ItemDefinition};
use crate::loaders::{LoadResult, read_file};

/// Item catalog structure for RON files.
///
/// ```ron
/// ItemCatalogFile(
///     items: [
///         ItemDefinition(external_ref: "stone", name: "Stone", shape: Single),
///     ],
/// )
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemCatalogFile {
    pub items: Vec<ItemDefinition>,
}

/// Loader for item catalogs from RON files.
pub struct ItemLoader;

impl ItemLoader {
    /// Load an item catalog from a RON file.
    ///
    /// Duplicate external refs are a load error: a catalog where one ref
    /// resolves to two shapes would make saved grids ambiguous.
    pub fn load(path: &Path) -> LoadResult<ItemCatalog> {
        let content = read_file(path)?;
        let file: ItemCatalogFile = ron::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse item catalog RON: {}", e))?;

        let mut catalog = ItemCatalog::new();
        for def in file.items {
            let external_ref = def.external_ref.clone();
            if catalog.insert(def).is_some() {
                anyhow::bail!("Duplicate item ref in {}: {}", path.display(), external_ref);
            }
        }
        Ok(catalog)
    }
}
