//! Item definitions and the catalog oracle implementation.

use std::collections::HashMap;

use inventory_core::{CatalogOracle, ShapeKind};

/// One item definition: the external reference items carry, a display name,
/// and the shape the item occupies on the grid.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemDefinition {
    pub external_ref: String,
    pub name: String,
    pub shape: ShapeKind,
}

impl ItemDefinition {
    pub fn new(external_ref: impl Into<String>, name: impl Into<String>, shape: ShapeKind) -> Self {
        Self {
            external_ref: external_ref.into(),
            name: name.into(),
            shape,
        }
    }
}

/// Lookup table from external ref to definition.
#[derive(Clone, Debug, Default)]
pub struct ItemCatalog {
    definitions: HashMap<String, ItemDefinition>,
}

impl ItemCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// The stock survival-game item set. File-loaded catalogs replace this
    /// in shipping builds; tests and tools lean on it.
    pub fn builtin() -> Self {
        let mut catalog = Self::new();
        for def in [
            ItemDefinition::new("stone", "Stone", ShapeKind::Single),
            ItemDefinition::new("canteen", "Canteen", ShapeKind::Single),
            ItemDefinition::new("rope", "Coil of Rope", ShapeKind::Domino),
            ItemDefinition::new("firewood", "Firewood Bundle", ShapeKind::Domino),
            ItemDefinition::new("tackle_box", "Tackle Box", ShapeKind::Square),
            ItemDefinition::new("plank", "Plank", ShapeKind::Line),
            ItemDefinition::new("fishing_rod", "Fishing Rod", ShapeKind::Line),
            ItemDefinition::new("machete", "Machete", ShapeKind::LShape),
            ItemDefinition::new("rake", "Garden Rake", ShapeKind::Comb),
            ItemDefinition::new("jerry_can", "Jerry Can", ShapeKind::Corner),
        ] {
            catalog.insert(def);
        }
        catalog
    }

    /// Inserts a definition, returning the previous one under the same ref.
    pub fn insert(&mut self, definition: ItemDefinition) -> Option<ItemDefinition> {
        self.definitions
            .insert(definition.external_ref.clone(), definition)
    }

    pub fn get(&self, external_ref: &str) -> Option<&ItemDefinition> {
        self.definitions.get(external_ref)
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }
}

impl CatalogOracle for ItemCatalog {
    fn resolve_shape(&self, external_ref: &str) -> Option<ShapeKind> {
        self.get(external_ref).map(|def| def.shape)
    }

    fn bounding_size(&self, external_ref: &str) -> Option<(u32, u32)> {
        self.resolve_shape(external_ref)
            .map(|shape| shape.state_at(0).bounding_size())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_resolves_known_refs() {
        let catalog = ItemCatalog::builtin();
        assert_eq!(catalog.resolve_shape("stone"), Some(ShapeKind::Single));
        assert_eq!(catalog.resolve_shape("machete"), Some(ShapeKind::LShape));
        assert_eq!(catalog.resolve_shape("compass"), None);
    }

    #[test]
    fn bounding_size_follows_rotation_zero() {
        let catalog = ItemCatalog::builtin();
        assert_eq!(catalog.bounding_size("plank"), Some((4, 1)));
        assert_eq!(catalog.bounding_size("tackle_box"), Some((2, 2)));
        assert_eq!(catalog.bounding_size("compass"), None);
    }

    #[test]
    fn insert_reports_replaced_definition() {
        let mut catalog = ItemCatalog::new();
        let first = ItemDefinition::new("rope", "Rope", ShapeKind::Domino);
        assert!(catalog.insert(first.clone()).is_none());
        let replaced =
            catalog.insert(ItemDefinition::new("rope", "Long Rope", ShapeKind::Line));
        assert_eq!(replaced, Some(first));
        assert_eq!(catalog.len(), 1);
    }
}
