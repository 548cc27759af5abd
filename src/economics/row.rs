//! Per-item training economics
//!
//! Cycle time, wall and effective minutes per unit, units needed for a
//! target duration, and cost per effective hour.

use serde::Serialize;

use crate::items::{ItemGroup, ItemKind, Tier, TrainingItem, WeaponFamily};
use super::pricing::{PriceMap, TierPrices};

/// Seconds between two actions without any bonus
pub const BASE_INTERVAL_SECS: f64 = 2.0;
const SECONDS_PER_MINUTE: f64 = 60.0;
const MINUTES_PER_HOUR: f64 = 60.0;

/// Computed figures for one displayed item or group
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RowResult {
    /// Item name, or the group name for fused entries
    pub name: String,
    pub kind: ItemKind,
    pub tier: Tier,
    pub family: WeaponFamily,
    pub is_group: bool,
    pub charges: u32,
    /// Seconds per action after the speed bonus
    pub effective_interval: f64,
    /// Wall time one unit lasts
    pub minutes_per_unit: f64,
    /// Benefit-adjusted time one unit is worth
    pub effective_minutes_per_unit: f64,
    pub units_needed: u64,
    pub unit_price: f64,
    /// Gold per effective hour; infinite when a unit is worth no time
    #[serde(serialize_with = "serialize_finite")]
    pub cost_per_hour: f64,
}

fn serialize_finite<S: serde::Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    if value.is_finite() {
        serializer.serialize_f64(*value)
    } else {
        serializer.serialize_none()
    }
}

/// Seconds per action. Shields keep the base interval; weapons scale it by
/// `1 + bonus/100` with no clamping.
pub fn effective_interval(item: &TrainingItem) -> f64 {
    if item.bonus_kind.is_gain() {
        BASE_INTERVAL_SECS
    } else {
        BASE_INTERVAL_SECS * (1.0 + item.bonus_percent / 100.0)
    }
}

/// Wall minutes one unit lasts
pub fn minutes_per_unit(charges: u32, interval: f64) -> f64 {
    f64::from(charges) * interval / SECONDS_PER_MINUTE
}

/// Benefit-adjusted minutes. Only gain-type bonuses change it.
pub fn effective_minutes_per_unit(item: &TrainingItem, minutes: f64) -> f64 {
    if item.bonus_kind.is_gain() {
        minutes * (1.0 + item.bonus_percent / 100.0)
    } else {
        minutes
    }
}

/// Whole units covering `target_hours`; zero for a non-positive divisor
pub fn units_needed(target_hours: f64, effective_minutes: f64) -> u64 {
    if effective_minutes <= 0.0 {
        return 0;
    }
    ceil_positive(target_hours * MINUTES_PER_HOUR / effective_minutes)
}

/// Gold per effective hour; `+inf` when a unit yields no positive time
pub fn cost_per_hour(unit_price: f64, effective_minutes: f64) -> f64 {
    let hours_per_unit = effective_minutes / MINUTES_PER_HOUR;
    if hours_per_unit > 0.0 {
        unit_price / hours_per_unit
    } else {
        f64::INFINITY
    }
}

fn ceil_positive(n: f64) -> u64 {
    if !n.is_finite() || n <= 0.0 {
        0
    } else {
        n.ceil() as u64
    }
}

/// Compute the row for a single item
pub fn compute_row(item: &TrainingItem, target_hours: f64, unit_price: f64) -> RowResult {
    let interval = effective_interval(item);
    let minutes = minutes_per_unit(item.charges, interval);
    let effective_minutes = effective_minutes_per_unit(item, minutes);

    RowResult {
        name: item.name.clone(),
        kind: item.kind(),
        tier: item.tier,
        family: item.family(),
        is_group: false,
        charges: item.charges,
        effective_interval: interval,
        minutes_per_unit: minutes,
        effective_minutes_per_unit: effective_minutes,
        units_needed: units_needed(target_hours, effective_minutes),
        unit_price,
        cost_per_hour: cost_per_hour(unit_price, effective_minutes),
    }
}

/// Compute the row for a display entry (single item or fused group)
pub fn compute_group_row(group: &ItemGroup, target_hours: f64, unit_price: f64) -> RowResult {
    let mut row = compute_row(&group.item, target_hours, unit_price);
    row.is_group = group.is_group;
    row
}

/// Rows for every entry, in input order, pricing each from the price map
pub fn compute_rows(
    groups: &[ItemGroup],
    target_hours: f64,
    prices: &PriceMap,
    tier_prices: &TierPrices,
) -> Vec<RowResult> {
    groups
        .iter()
        .map(|group| {
            let price = prices.resolve(group.display_name(), group.tier(), tier_prices);
            compute_group_row(group, target_hours, price)
        })
        .collect()
}
