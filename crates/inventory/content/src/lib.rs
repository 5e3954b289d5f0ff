//! Item-definition content for the inventory engine.
//!
//! `inventory-content` owns the catalog that maps external item references
//! to shapes and display names, plus file loaders that build catalogs from
//! RON data. It implements [`inventory_core::CatalogOracle`] so sessions can
//! resolve shapes without knowing where definitions come from.

pub mod catalog;
#[cfg(feature = "loaders")]
pub mod loaders;

pub use catalog::{ItemCatalog, ItemDefinition};
#[cfg(feature = "loaders")]
pub use loaders::ItemLoader;
