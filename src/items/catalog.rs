//! Canonical training item catalog
//!
//! The catalog is the single source of truth for charges and bonuses.
//! Every lookup goes through `(tier, category)` or `(tier, family)`.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::item::{BonusKind, Tier, TrainingItem, WeaponCategory, WeaponFamily};

/// Catalog validation and lookup failures
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CatalogError {
    #[error("unknown training item: {0}")]
    UnknownItem(String),
    #[error("catalog contains no items")]
    EmptyCatalog,
    #[error("item {name} has zero charges")]
    InvalidCharges { name: String },
    #[error("duplicate item name: {0}")]
    DuplicateName(String),
}

/// Ordered collection of training items
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    pub items: Vec<TrainingItem>,
}

impl Catalog {
    pub fn new(items: Vec<TrainingItem>) -> Self {
        Self { items }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &TrainingItem> {
        self.items.iter()
    }

    /// Find an item by its display name (case-insensitive)
    pub fn find(&self, name: &str) -> Result<&TrainingItem, CatalogError> {
        self.items
            .iter()
            .find(|i| i.name.eq_ignore_ascii_case(name.trim()))
            .ok_or_else(|| CatalogError::UnknownItem(name.to_string()))
    }

    /// Typed lookup by tier and category
    pub fn get(&self, tier: Tier, category: WeaponCategory) -> Option<&TrainingItem> {
        self.items
            .iter()
            .find(|i| i.tier == tier && i.category == category)
    }

    /// First catalog entry of a family within a tier
    pub fn family_representative(&self, tier: Tier, family: WeaponFamily) -> Option<&TrainingItem> {
        self.items
            .iter()
            .find(|i| i.tier == tier && family.contains(i.category))
    }

    /// All items of a tier, in catalog order
    pub fn by_tier(&self, tier: Tier) -> Vec<&TrainingItem> {
        self.items.iter().filter(|i| i.tier == tier).collect()
    }

    /// Reject catalogs the engine cannot meaningfully price
    pub fn validate(&self) -> Result<(), CatalogError> {
        if self.items.is_empty() {
            return Err(CatalogError::EmptyCatalog);
        }
        for (idx, item) in self.items.iter().enumerate() {
            if item.charges == 0 {
                return Err(CatalogError::InvalidCharges { name: item.name.clone() });
            }
            if self.items[..idx].iter().any(|other| other.name == item.name) {
                return Err(CatalogError::DuplicateName(item.name.clone()));
            }
        }
        Ok(())
    }
}

impl Default for Catalog {
    fn default() -> Self {
        default_catalog()
    }
}

/// Charges for a (tier, category) pair in the reference game
fn reference_charges(tier: Tier, category: WeaponCategory) -> u32 {
    match (tier, category) {
        (Tier::Spark, WeaponCategory::Shield) => 7_200,
        (Tier::Spark, _) => 3_600,
        (Tier::Lightning, WeaponCategory::Shield) => 14_400,
        (Tier::Lightning, WeaponCategory::Rod | WeaponCategory::Wand) => 5_400,
        (Tier::Lightning, _) => 7_200,
        (Tier::Inferno, WeaponCategory::Shield) => 21_600,
        (Tier::Inferno, WeaponCategory::Rod | WeaponCategory::Wand) => 7_200,
        (Tier::Inferno, _) => 10_800,
    }
}

/// Bonus magnitude per tier, in percent
fn reference_bonus_magnitude(tier: Tier) -> f64 {
    match tier {
        Tier::Spark => 10.0,
        Tier::Lightning => 15.0,
        Tier::Inferno => 20.0,
    }
}

fn reference_item(tier: Tier, category: WeaponCategory) -> TrainingItem {
    let magnitude = reference_bonus_magnitude(tier);
    let (bonus_kind, bonus_percent) = if category == WeaponCategory::Shield {
        (BonusKind::ShieldingGain, magnitude)
    } else {
        (BonusKind::AttackIntervalReduction, -magnitude)
    };
    let (attack, defense) = match category {
        WeaponCategory::Axe | WeaponCategory::Sword | WeaponCategory::Club => (5, 0),
        WeaponCategory::Spear => (10, 0),
        WeaponCategory::Rod | WeaponCategory::Wand => (0, 0),
        WeaponCategory::Shield => (0, 10),
    };

    TrainingItem {
        name: TrainingItem::canonical_name(tier, category),
        tier,
        category,
        attack,
        defense,
        hands: 1,
        charges: reference_charges(tier, category),
        weight: 10.0,
        bonus_kind,
        bonus_percent,
    }
}

/// Listing order of the reference catalog within a tier
fn reference_order(tier: Tier) -> [WeaponCategory; 7] {
    use WeaponCategory::*;
    match tier {
        Tier::Spark | Tier::Lightning => [Axe, Sword, Club, Rod, Wand, Spear, Shield],
        Tier::Inferno => [Axe, Sword, Club, Rod, Spear, Wand, Shield],
    }
}

/// Build the canonical 21-item catalog (hardcoded fallback for `catalog.ron`)
pub fn default_catalog() -> Catalog {
    let items = Tier::ALL
        .into_iter()
        .flat_map(|tier| {
            reference_order(tier)
                .into_iter()
                .map(move |category| reference_item(tier, category))
        })
        .collect();
    Catalog { items }
}
