//! Property tests for the economics engine

use proptest::prelude::*;

use crate::items::{group_similar_items, BonusKind, Tier, TrainingItem, WeaponCategory};
use super::pricing::{PriceMap, TierPrices};
use super::row::{compute_row, compute_rows};
use super::sort::{sort_rows, SortDirection, SortField};

fn arb_tier() -> impl Strategy<Value = Tier> {
    prop::sample::select(Tier::ALL.to_vec())
}

fn arb_category() -> impl Strategy<Value = WeaponCategory> {
    prop::sample::select(WeaponCategory::ALL.to_vec())
}

fn arb_item() -> impl Strategy<Value = TrainingItem> {
    (arb_tier(), arb_category(), 1u32..50_000, -90.0f64..90.0).prop_map(|(tier, category, charges, bonus)| {
        let bonus_kind = if category == WeaponCategory::Shield {
            BonusKind::ShieldingGain
        } else {
            BonusKind::AttackIntervalReduction
        };
        TrainingItem {
            name: TrainingItem::canonical_name(tier, category),
            tier,
            category,
            attack: 0,
            defense: 0,
            hands: 1,
            charges,
            weight: 10.0,
            bonus_kind,
            bonus_percent: bonus,
        }
    })
}

fn arb_field() -> impl Strategy<Value = SortField> {
    prop::sample::select(SortField::ALL.to_vec())
}

fn arb_direction() -> impl Strategy<Value = SortDirection> {
    prop::sample::select(vec![SortDirection::Ascending, SortDirection::Descending])
}

proptest! {
    #[test]
    fn units_needed_is_monotonic(item in arb_item(), a in 0.0f64..10_000.0, b in 0.0f64..10_000.0) {
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        let low_units = compute_row(&item, low, 1.0).units_needed;
        let high_units = compute_row(&item, high, 1.0).units_needed;
        prop_assert!(low_units <= high_units);
    }

    #[test]
    fn units_never_under_provision(item in arb_item(), hours in 0.0f64..10_000.0) {
        let row = compute_row(&item, hours, 1.0);
        if row.effective_minutes_per_unit > 0.0 {
            let covered = row.units_needed as f64 * row.effective_minutes_per_unit * 60.0 / 3600.0;
            prop_assert!(covered >= hours * (1.0 - 1e-12));
        }
    }

    #[test]
    fn non_positive_effective_time_costs_infinity(mut item in arb_item(), price in 0.0f64..1e9) {
        item.bonus_kind = BonusKind::AttackIntervalReduction;
        item.bonus_percent = -100.0 - price.fract() * 50.0;
        let row = compute_row(&item, 10.0, price);
        prop_assert!(row.effective_minutes_per_unit <= 0.0);
        prop_assert_eq!(row.cost_per_hour, f64::INFINITY);
        prop_assert_eq!(row.units_needed, 0);
    }

    #[test]
    fn grouping_is_idempotent(items in prop::collection::vec(arb_item(), 0..40)) {
        let once = group_similar_items(items.iter());
        let twice = group_similar_items(once.iter().map(|g| &g.item));
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn resorting_sorted_rows_changes_nothing(
        items in prop::collection::vec(arb_item(), 0..40),
        hours in 0.0f64..500.0,
        field in arb_field(),
        direction in arb_direction(),
    ) {
        let groups = crate::items::ungrouped(items.iter());
        let mut rows = compute_rows(&groups, hours, &PriceMap::new(), &TierPrices::default());
        sort_rows(&mut rows, field, direction);
        let mut again = rows.clone();
        sort_rows(&mut again, field, direction);
        prop_assert_eq!(rows, again);
    }
}
