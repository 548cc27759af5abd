//! Tier comparison for one weapon family
//!
//! Answers "how many units of each tier do I need to train for N hours, and
//! what does that cost in total". Charges and bonuses come from the catalog.

use serde::Serialize;

use crate::items::{Catalog, Tier, WeaponFamily};
use crate::progression::SkillKind;
use super::pricing::TierPrices;
use super::row::compute_row;

/// One tier's figures for a family
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TierQuantity {
    pub tier: Tier,
    /// Catalog item the figures were taken from
    pub item_name: String,
    pub charges: u32,
    pub hours_per_unit: f64,
    pub effective_hours_per_unit: f64,
    pub units_needed: u64,
    pub unit_price: f64,
    pub total_cost: f64,
}

/// Training weapon family that raises a skill
pub fn family_for_skill(kind: SkillKind) -> Option<WeaponFamily> {
    match kind {
        SkillKind::Melee => Some(WeaponFamily::Melee),
        SkillKind::Magic => Some(WeaponFamily::Wand),
        SkillKind::Distance => Some(WeaponFamily::Spear),
        SkillKind::Shielding => Some(WeaponFamily::Shield),
        SkillKind::Fishing => None,
    }
}

/// Units and total cost per tier for `target_hours` of training.
///
/// Tiers without an item of the family in the catalog are skipped.
pub fn compare_tiers(
    catalog: &Catalog,
    family: WeaponFamily,
    target_hours: f64,
    tier_prices: &TierPrices,
) -> Vec<TierQuantity> {
    Tier::ALL
        .into_iter()
        .filter_map(|tier| {
            let item = catalog.family_representative(tier, family)?;
            let unit_price = tier_prices.get(tier);
            let row = compute_row(item, target_hours, unit_price);

            Some(TierQuantity {
                tier,
                item_name: item.name.clone(),
                charges: item.charges,
                hours_per_unit: row.minutes_per_unit / 60.0,
                effective_hours_per_unit: row.effective_minutes_per_unit / 60.0,
                units_needed: row.units_needed,
                unit_price,
                total_cost: row.units_needed as f64 * unit_price,
            })
        })
        .collect()
}

/// Tier with the lowest total cost; first wins on ties
pub fn cheapest_tier(quantities: &[TierQuantity]) -> Option<&TierQuantity> {
    quantities
        .iter()
        .filter(|q| q.units_needed > 0)
        .fold(None, |best: Option<&TierQuantity>, q| match best {
            Some(b) if b.total_cost <= q.total_cost => Some(b),
            _ => Some(q),
        })
}
