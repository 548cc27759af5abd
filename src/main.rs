//! Training Calc - Entry Point
//!
//! Parses the command line, loads config and data, and prints reports.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;

use training_calc::data::{export_default_data, load_config, AppConfig, DataManager, DEFAULT_DATA_DIR};
use training_calc::economics::{
    compare_tiers, compute_rows, family_for_skill, final_kpis, sort_rows, FinalKpis, PriceMap,
    RowResult, SortDirection, TierQuantity,
};
use training_calc::items::{group_similar_items, ungrouped};
use training_calc::progression::{checked_training_plan, SkillProgressionRequest, TrainingPlan};
use training_calc::ui::input::{
    parse_family, parse_price_entry, parse_skill_kind, parse_sort_field, parse_vocation,
};
use training_calc::ui::{filter_groups, render_plan, render_rows, render_tier_comparison, validate_levels, NumberPolicy};

/// Skill training and training-item cost calculator
#[derive(Parser, Debug)]
#[command(name = "training-calc", version)]
#[command(about = "Plan skill training and compare training weapon tiers by cost")]
struct Cli {
    /// Config file (defaults to the platform config directory)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Directory holding catalog.ron and skill_rates.ron
    #[arg(long, global = true, default_value = DEFAULT_DATA_DIR)]
    data_dir: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Points, actions, time and cost to raise a skill
    Skill {
        /// knight, paladin, sorcerer or druid
        #[arg(long)]
        vocation: String,
        /// magic, melee, distance or shielding (defaults to the vocation's main skill)
        #[arg(long)]
        kind: Option<String>,
        /// Current skill level
        #[arg(long)]
        from: String,
        /// Target skill level
        #[arg(long)]
        to: String,
        /// Also compare training weapon tiers for the plan's duration
        #[arg(long)]
        compare: bool,
        #[arg(long)]
        json: bool,
    },
    /// Cost and duration table for every training item
    Items {
        /// Hours of training to cover
        #[arg(long)]
        hours: Option<String>,
        /// cost, time, effective or name
        #[arg(long)]
        sort: Option<String>,
        /// Sort descending
        #[arg(long, conflicts_with = "asc")]
        desc: bool,
        /// Sort ascending, overriding the configured direction
        #[arg(long)]
        asc: bool,
        /// Only items whose name contains this text
        #[arg(long)]
        search: Option<String>,
        /// Show axe, sword and club separately
        #[arg(long)]
        no_group: bool,
        /// Custom price, NAME=GOLD (repeatable)
        #[arg(long = "price")]
        prices: Vec<String>,
        #[arg(long)]
        json: bool,
    },
    /// Units and total cost per tier for one weapon family
    Quantity {
        /// melee, rod, wand, spear or shield
        #[arg(long)]
        family: String,
        /// Hours of training to cover
        #[arg(long)]
        hours: Option<String>,
        #[arg(long)]
        json: bool,
    },
    /// Write the built-in catalog and skill rates as editable RON files
    ExportData {
        #[arg(long, default_value = DEFAULT_DATA_DIR)]
        out: PathBuf,
    },
}

#[derive(Serialize)]
struct ItemsOutput<'a> {
    target_hours: f64,
    rows: &'a [RowResult],
    kpis: &'a FinalKpis,
}

#[derive(Serialize)]
struct SkillOutput<'a> {
    request: &'a SkillProgressionRequest,
    plan: &'a TrainingPlan,
    #[serde(skip_serializing_if = "Option::is_none")]
    tiers: Option<&'a [TierQuantity]>,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("warn")
    )
    .init();

    let cli = Cli::parse();
    log::debug!("Starting Training Calc v{}", env!("CARGO_PKG_VERSION"));

    let config = load_config(cli.config.as_deref()).context("failed to load config")?;
    let policy = NumberPolicy::from_coerce_flag(config.coerce_invalid_numbers);

    match cli.command {
        Command::ExportData { out } => {
            export_default_data(&out)
                .with_context(|| format!("failed to export data to {}", out.display()))?;
            println!("Wrote default data to {}", out.display());
        }
        Command::Skill { vocation, kind, from, to, compare, json } => {
            let data = DataManager::load_from(&cli.data_dir);
            run_skill(&data, &config, policy, &vocation, kind.as_deref(), &from, &to, compare, json)?;
        }
        Command::Items { hours, sort, desc, asc, search, no_group, prices, json } => {
            let data = DataManager::load_from(&cli.data_dir);
            let options = ItemsOptions {
                hours: hours.as_deref(),
                sort: sort.as_deref(),
                direction: direction_override(asc, desc),
                search: search.as_deref(),
                group: config.group_items && !no_group,
                prices: &prices,
                json,
            };
            run_items(&data, &config, policy, &options)?;
        }
        Command::Quantity { family, hours, json } => {
            let data = DataManager::load_from(&cli.data_dir);
            let family = parse_family(&family)?;
            let target_hours = resolve_hours(hours.as_deref(), &config, policy)?;
            let tiers = compare_tiers(&data.catalog, family, target_hours, &config.tier_prices);
            if json {
                println!("{}", serde_json::to_string_pretty(&tiers)?);
            } else {
                print!("{}", render_tier_comparison(family, target_hours, &tiers));
            }
        }
    }

    Ok(())
}

fn resolve_hours(raw: Option<&str>, config: &AppConfig, policy: NumberPolicy) -> Result<f64> {
    match raw {
        Some(raw) => Ok(policy.parse(raw)?),
        None => Ok(config.target_hours),
    }
}

#[allow(clippy::too_many_arguments)]
fn run_skill(
    data: &DataManager,
    config: &AppConfig,
    policy: NumberPolicy,
    vocation: &str,
    kind: Option<&str>,
    from: &str,
    to: &str,
    compare: bool,
    json: bool,
) -> Result<()> {
    let vocation = parse_vocation(vocation)?;
    let kind = match kind {
        Some(raw) => parse_skill_kind(raw)?,
        None => vocation.primary_skill(),
    };
    let current = policy.parse(from)?;
    let target = policy.parse(to)?;
    validate_levels(kind, current, target)?;

    log::debug!("Planning {} {} from {} to {}", vocation.name(), kind.name(), current, target);
    let request = SkillProgressionRequest::new(vocation, kind, current, target);
    let plan = checked_training_plan(&data.rates, &request)?;

    let tiers = if compare {
        match family_for_skill(kind) {
            Some(family) => Some((family, compare_tiers(&data.catalog, family, plan.elapsed_hours, &config.tier_prices))),
            None => bail!("{} cannot be trained with training weapons", kind.name()),
        }
    } else {
        None
    };

    if json {
        let output = SkillOutput {
            request: &request,
            plan: &plan,
            tiers: tiers.as_ref().map(|(_, t)| t.as_slice()),
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        print!("{}", render_plan(&request, &plan));
        if let Some((family, tiers)) = &tiers {
            println!();
            print!("{}", render_tier_comparison(*family, plan.elapsed_hours, tiers));
        }
    }

    Ok(())
}

/// Direction requested on the command line, if any
fn direction_override(asc: bool, desc: bool) -> Option<SortDirection> {
    match (asc, desc) {
        (_, true) => Some(SortDirection::Descending),
        (true, false) => Some(SortDirection::Ascending),
        (false, false) => None,
    }
}

struct ItemsOptions<'a> {
    hours: Option<&'a str>,
    sort: Option<&'a str>,
    direction: Option<SortDirection>,
    search: Option<&'a str>,
    group: bool,
    prices: &'a [String],
    json: bool,
}

fn run_items(data: &DataManager, config: &AppConfig, policy: NumberPolicy, options: &ItemsOptions) -> Result<()> {
    let target_hours = resolve_hours(options.hours, config, policy)?;
    let sort_field = match options.sort {
        Some(raw) => parse_sort_field(raw)?,
        None => config.sort_field,
    };
    let direction = options.direction.unwrap_or(config.sort_direction);

    let mut price_map = PriceMap::new();
    for entry in options.prices {
        let (name, price) = parse_price_entry(entry, policy)?;
        price_map.set(name, price);
    }

    let groups = if options.group {
        group_similar_items(data.catalog.iter())
    } else {
        ungrouped(data.catalog.iter())
    };
    let groups = match options.search {
        Some(query) => filter_groups(groups, query),
        None => groups,
    };

    let mut rows = compute_rows(&groups, target_hours, &price_map, &config.tier_prices);
    sort_rows(&mut rows, sort_field, direction);
    let kpis = final_kpis(&rows);

    if options.json {
        let output = ItemsOutput { target_hours, rows: &rows, kpis: &kpis };
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        print!("{}", render_rows(&rows, &kpis, target_hours));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_flags() {
        assert_eq!(direction_override(false, false), None);
        assert_eq!(direction_override(true, false), Some(SortDirection::Ascending));
        assert_eq!(direction_override(false, true), Some(SortDirection::Descending));
    }

    #[test]
    fn test_asc_overrides_configured_descending() {
        let cli = Cli::try_parse_from(["training-calc", "items", "--asc"]).unwrap();
        let Command::Items { asc, desc, .. } = cli.command else {
            panic!("expected the items command");
        };
        let config = AppConfig { sort_direction: SortDirection::Descending, ..AppConfig::default() };
        let direction = direction_override(asc, desc).unwrap_or(config.sort_direction);
        assert_eq!(direction, SortDirection::Ascending);

        assert!(Cli::try_parse_from(["training-calc", "items", "--asc", "--desc"]).is_err());
    }
}
