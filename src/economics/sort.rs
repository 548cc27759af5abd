//! Row ordering

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use super::row::RowResult;

/// Field rows are ordered by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SortField {
    #[default]
    CostPerHour,
    /// Wall-time minutes per unit
    MinutesPerUnit,
    EffectiveMinutesPerUnit,
    /// Case-insensitive display name
    Name,
}

impl SortField {
    pub const ALL: [SortField; 4] = [
        SortField::CostPerHour,
        SortField::MinutesPerUnit,
        SortField::EffectiveMinutesPerUnit,
        SortField::Name,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            SortField::CostPerHour => "cost",
            SortField::MinutesPerUnit => "time",
            SortField::EffectiveMinutesPerUnit => "effective",
            SortField::Name => "name",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortField::CostPerHour => "Cost per effective hour",
            SortField::MinutesPerUnit => "Hours per unit",
            SortField::EffectiveMinutesPerUnit => "Effective hours per unit",
            SortField::Name => "Name",
        }
    }

    pub fn from_key(key: &str) -> Option<SortField> {
        SortField::ALL
            .into_iter()
            .find(|f| f.key().eq_ignore_ascii_case(key.trim()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

/// Compare two floats, treating unordered pairs (NaN) as equal
fn compare_f64(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b).unwrap_or(Ordering::Equal)
}

fn compare_by(field: SortField, a: &RowResult, b: &RowResult) -> Ordering {
    match field {
        SortField::CostPerHour => compare_f64(a.cost_per_hour, b.cost_per_hour),
        SortField::MinutesPerUnit => compare_f64(a.minutes_per_unit, b.minutes_per_unit),
        SortField::EffectiveMinutesPerUnit => {
            compare_f64(a.effective_minutes_per_unit, b.effective_minutes_per_unit)
        }
        SortField::Name => a
            .name
            .to_lowercase()
            .cmp(&b.name.to_lowercase()),
    }
}

/// Stable sort on one field; ties keep their relative order in both directions
pub fn sort_rows(rows: &mut [RowResult], field: SortField, direction: SortDirection) {
    rows.sort_by(|a, b| {
        let ord = compare_by(field, a, b);
        match direction {
            SortDirection::Ascending => ord,
            SortDirection::Descending => ord.reverse(),
        }
    });
}
