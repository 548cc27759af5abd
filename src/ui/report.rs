//! Plain-text reports
//!
//! Renders engine results as aligned text tables for the terminal.

use std::fmt::Write;

use crate::economics::{cheapest_tier, FinalKpis, RowResult, TierQuantity};
use crate::items::WeaponFamily;
use crate::progression::{SkillProgressionRequest, TrainingPlan};
use super::format::{format_fixed, format_minutes, format_thousands, format_training_time, format_units, MISSING};

/// Table of item rows followed by the KPI summary
pub fn render_rows(rows: &[RowResult], kpis: &FinalKpis, target_hours: f64) -> String {
    let mut out = String::new();
    let name_width = rows
        .iter()
        .map(|r| r.name.chars().count())
        .max()
        .unwrap_or(4)
        .max(4);

    let _ = writeln!(out, "Target: {} hours", format_fixed(target_hours, 2));
    let _ = writeln!(
        out,
        "{:<name_width$}  {:<6}  {:>7}  {:>8}  {:>9}  {:>9}  {:>6}  {:>8}  {:>10}",
        "Item", "Type", "Charges", "Interval", "Time/un.", "Eff./un.", "Units", "Price", "Gold/h",
    );

    for row in rows {
        let _ = writeln!(
            out,
            "{:<name_width$}  {:<6}  {:>7}  {:>8}  {:>9}  {:>9}  {:>6}  {:>8}  {:>10}",
            row.name,
            row.kind.name(),
            format_thousands(f64::from(row.charges), 0),
            format!("{}s", format_fixed(row.effective_interval, 3)),
            format_minutes(row.minutes_per_unit),
            format_minutes(row.effective_minutes_per_unit),
            row.units_needed,
            format_thousands(row.unit_price, 0),
            format_thousands(row.cost_per_hour, 2),
        );
    }

    out.push('\n');
    match &kpis.cheapest {
        Some(c) => {
            let _ = writeln!(out, "Cheapest:  {} ({} gold/h)", c.name, format_thousands(c.cost_per_hour, 2));
        }
        None => {
            let _ = writeln!(out, "Cheapest:  {}", MISSING);
        }
    }
    match &kpis.longest {
        Some(l) => {
            let _ = writeln!(out, "Longest:   {} ({} per unit)", l.name, format_minutes(l.minutes_per_unit));
        }
        None => {
            let _ = writeln!(out, "Longest:   {}", MISSING);
        }
    }

    out
}

/// Summary of a skill training plan
pub fn render_plan(request: &SkillProgressionRequest, plan: &TrainingPlan) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{} {}: {} -> {} (+{})",
        request.vocation.name(),
        request.kind.name(),
        format_fixed(request.current_level, 0),
        format_fixed(request.target_level, 0),
        format_fixed(request.level_difference(), 0),
    );
    let _ = writeln!(out, "Points needed:   {}", format_thousands(plan.points, 2));
    let _ = writeln!(out, "Actions needed:  {}", format_thousands(plan.actions, 0));
    let _ = writeln!(out, "Training time:   {}", format_training_time(plan.elapsed_hours));
    let _ = writeln!(out, "Cost:            {} gold", format_thousands(plan.cost, 0));
    out
}

/// Per-tier units and total cost for one family
pub fn render_tier_comparison(family: WeaponFamily, target_hours: f64, quantities: &[TierQuantity]) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{} training for {} hours",
        family.name(),
        format_fixed(target_hours, 1),
    );

    if quantities.is_empty() {
        let _ = writeln!(out, "No catalog items for this family");
        return out;
    }

    let _ = writeln!(
        out,
        "{:<10}  {:>10}  {:>10}  {:>10}  {:>12}",
        "Tier", "Per unit", "Effective", "Units", "Total gold",
    );
    for q in quantities {
        let _ = writeln!(
            out,
            "{:<10}  {:>10}  {:>10}  {:>10}  {:>12}",
            q.tier.name(),
            format_minutes(q.hours_per_unit * 60.0),
            format_minutes(q.effective_hours_per_unit * 60.0),
            format_units(q.units_needed),
            format_thousands(q.total_cost, 0),
        );
    }

    if let Some(best) = cheapest_tier(quantities) {
        let _ = writeln!(
            out,
            "\nBest value: {} ({} for {} gold)",
            best.item_name,
            format_units(best.units_needed),
            format_thousands(best.total_cost, 0),
        );
    }

    out
}
