//! Summary figures over a set of rows

use serde::Serialize;

use super::row::RowResult;

/// Cheapest item by cost per effective hour
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CheapestKpi {
    pub name: String,
    pub cost_per_hour: f64,
}

/// Item whose single unit lasts the longest wall time
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LongestKpi {
    pub name: String,
    pub minutes_per_unit: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FinalKpis {
    pub cheapest: Option<CheapestKpi>,
    pub longest: Option<LongestKpi>,
}

/// Row with the lowest finite, positive cost per hour; first wins on ties
pub fn cheapest(rows: &[RowResult]) -> Option<&RowResult> {
    rows.iter()
        .filter(|r| r.cost_per_hour.is_finite() && r.cost_per_hour > 0.0)
        .fold(None, |best: Option<&RowResult>, row| match best {
            Some(b) if b.cost_per_hour <= row.cost_per_hour => Some(b),
            _ => Some(row),
        })
}

/// Row with the most wall minutes per unit; first wins on ties
pub fn longest(rows: &[RowResult]) -> Option<&RowResult> {
    rows.iter().fold(None, |best: Option<&RowResult>, row| match best {
        Some(b) if b.minutes_per_unit >= row.minutes_per_unit => Some(b),
        _ => Some(row),
    })
}

pub fn final_kpis(rows: &[RowResult]) -> FinalKpis {
    FinalKpis {
        cheapest: cheapest(rows).map(|r| CheapestKpi {
            name: r.name.clone(),
            cost_per_hour: r.cost_per_hour,
        }),
        longest: longest(rows).map(|r| LongestKpi {
            name: r.name.clone(),
            minutes_per_unit: r.minutes_per_unit,
        }),
    }
}
