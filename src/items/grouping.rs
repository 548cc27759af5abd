//! Item grouping
//!
//! Axe, sword and club items of the same tier behave identically, so the
//! display collapses them into one "Melee" entry per tier.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::item::{Tier, TrainingItem, WeaponCategory, WeaponFamily};

/// Display entry produced by grouping: either a single item or a fused group
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemGroup {
    /// Representative item, renamed to the group display name
    pub item: TrainingItem,
    pub family: WeaponFamily,
    /// Category of the item the representative was taken from
    pub source_category: WeaponCategory,
    /// True when several categories were fused (melee only)
    pub is_group: bool,
}

impl ItemGroup {
    /// Wrap a single item without fusing anything
    pub fn single(item: &TrainingItem) -> Self {
        Self {
            item: item.clone(),
            family: item.family(),
            source_category: item.category,
            is_group: false,
        }
    }

    pub fn display_name(&self) -> &str {
        &self.item.name
    }

    pub fn tier(&self) -> Tier {
        self.item.tier
    }
}

/// Display name for a (tier, family) group
pub fn group_display_name(tier: Tier, family: WeaponFamily) -> String {
    format!("{} Training {}", tier.name(), family.name())
}

/// Collapse items sharing a (tier, family) key, first item wins.
///
/// Catalog order is preserved and the input is never modified. Feeding the
/// representatives back in yields the same groups.
pub fn group_similar_items<'a, I>(items: I) -> Vec<ItemGroup>
where
    I: IntoIterator<Item = &'a TrainingItem>,
{
    let mut seen: HashSet<(Tier, WeaponFamily)> = HashSet::new();
    let mut groups = Vec::new();

    for item in items {
        let family = item.family();
        if !seen.insert((item.tier, family)) {
            continue;
        }

        let mut representative = item.clone();
        representative.name = group_display_name(item.tier, family);

        groups.push(ItemGroup {
            item: representative,
            family,
            source_category: item.category,
            is_group: family == WeaponFamily::Melee,
        });
    }

    groups
}

/// Wrap every item as its own group, for ungrouped views
pub fn ungrouped<'a, I>(items: I) -> Vec<ItemGroup>
where
    I: IntoIterator<Item = &'a TrainingItem>,
{
    items.into_iter().map(ItemGroup::single).collect()
}
