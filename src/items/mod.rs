//! Training item catalog

pub mod item;
pub mod catalog;
pub mod grouping;

pub use item::{TrainingItem, Tier, WeaponCategory, WeaponFamily, BonusKind, ItemKind};
pub use catalog::{Catalog, CatalogError, default_catalog};
pub use grouping::{ItemGroup, group_similar_items, group_display_name, ungrouped};
