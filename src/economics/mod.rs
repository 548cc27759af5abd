//! Training economics engine
//!
//! Converts item charges and bonuses into time per unit, units needed and
//! cost per effective hour.

pub mod row;
pub mod pricing;
pub mod sort;
pub mod kpi;
pub mod quantity;

pub use row::{RowResult, BASE_INTERVAL_SECS, compute_row, compute_group_row, compute_rows};
pub use row::{effective_interval, minutes_per_unit, effective_minutes_per_unit, units_needed, cost_per_hour};
pub use pricing::{PriceMap, TierPrices};
pub use sort::{SortField, SortDirection, sort_rows};
pub use kpi::{FinalKpis, CheapestKpi, LongestKpi, cheapest, longest, final_kpis};
pub use quantity::{TierQuantity, compare_tiers, cheapest_tier, family_for_skill};

#[cfg(test)]
mod properties;
