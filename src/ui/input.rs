//! Input boundary
//!
//! Raw user text is normalized here before any engine sees it. The engines
//! require well-formed numbers; coercion of malformed fields to zero is a
//! choice made at this layer.

use thiserror::Error;

use crate::economics::SortField;
use crate::items::{ItemGroup, WeaponFamily};
use crate::progression::{SkillKind, Vocation};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum InputError {
    #[error("'{0}' is not a number")]
    NotANumber(String),
    #[error("'{0}' is not a finite number")]
    NotFinite(String),
    #[error("{0} must not be negative")]
    Negative(f64),
    #[error("level {0} is below the lowest level for this skill")]
    NonPositiveLevel(f64),
    #[error("unknown vocation '{0}' (expected knight, paladin, sorcerer or druid)")]
    UnknownVocation(String),
    #[error("unknown skill '{0}' (expected magic, melee, distance or shielding)")]
    UnknownSkillKind(String),
    #[error("unknown sort field '{0}' (expected cost, time, effective or name)")]
    UnknownSortField(String),
    #[error("unknown weapon family '{0}' (expected melee, rod, wand, spear or shield)")]
    UnknownWeaponFamily(String),
    #[error("malformed price '{0}' (expected NAME=GOLD)")]
    MalformedPrice(String),
}

/// How malformed numeric fields are handled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumberPolicy {
    /// Empty, unparseable, non-finite or negative values become zero
    Coerce,
    /// Such values are rejected
    Strict,
}

impl NumberPolicy {
    pub fn from_coerce_flag(coerce: bool) -> Self {
        if coerce {
            NumberPolicy::Coerce
        } else {
            NumberPolicy::Strict
        }
    }

    pub fn parse(&self, raw: &str) -> Result<f64, InputError> {
        match self {
            NumberPolicy::Coerce => Ok(coerce_number(raw)),
            NumberPolicy::Strict => parse_number_strict(raw),
        }
    }
}

/// Parse a non-negative number, rejecting anything else
pub fn parse_number_strict(raw: &str) -> Result<f64, InputError> {
    let value: f64 = raw
        .trim()
        .parse()
        .map_err(|_| InputError::NotANumber(raw.to_string()))?;
    if !value.is_finite() {
        return Err(InputError::NotFinite(raw.to_string()));
    }
    if value < 0.0 {
        return Err(InputError::Negative(value));
    }
    Ok(value)
}

/// Parse a number, treating anything malformed as zero
pub fn coerce_number(raw: &str) -> f64 {
    match parse_number_strict(raw) {
        Ok(value) => value,
        Err(e) => {
            log::debug!("Coercing input to 0: {}", e);
            0.0
        }
    }
}

/// Check a level range before planning. The range itself is checked by the
/// planner.
///
/// Magic level starts at 0, so a magic plan may begin there; every other
/// level must be positive.
pub fn validate_levels(kind: SkillKind, current: f64, target: f64) -> Result<(), InputError> {
    for level in [current, target] {
        if !level.is_finite() {
            return Err(InputError::NotFinite(level.to_string()));
        }
    }
    let lowest_current = if kind == SkillKind::Magic { 0.0 } else { f64::MIN_POSITIVE };
    if current < lowest_current {
        return Err(InputError::NonPositiveLevel(current));
    }
    if target <= 0.0 {
        return Err(InputError::NonPositiveLevel(target));
    }
    Ok(())
}

pub fn parse_vocation(raw: &str) -> Result<Vocation, InputError> {
    Vocation::from_name(raw).ok_or_else(|| InputError::UnknownVocation(raw.to_string()))
}

pub fn parse_skill_kind(raw: &str) -> Result<SkillKind, InputError> {
    SkillKind::from_name(raw).ok_or_else(|| InputError::UnknownSkillKind(raw.to_string()))
}

pub fn parse_sort_field(raw: &str) -> Result<SortField, InputError> {
    SortField::from_key(raw).ok_or_else(|| InputError::UnknownSortField(raw.to_string()))
}

pub fn parse_family(raw: &str) -> Result<WeaponFamily, InputError> {
    WeaponFamily::from_name(raw).ok_or_else(|| InputError::UnknownWeaponFamily(raw.to_string()))
}

/// Parse a `NAME=GOLD` price entry
pub fn parse_price_entry(raw: &str, policy: NumberPolicy) -> Result<(String, f64), InputError> {
    let (name, price) = raw
        .rsplit_once('=')
        .ok_or_else(|| InputError::MalformedPrice(raw.to_string()))?;
    let name = name.trim();
    if name.is_empty() {
        return Err(InputError::MalformedPrice(raw.to_string()));
    }
    Ok((name.to_string(), policy.parse(price)?))
}

/// Case-insensitive substring match on the display name
pub fn matches_search(display_name: &str, query: &str) -> bool {
    display_name
        .to_lowercase()
        .contains(&query.trim().to_lowercase())
}

/// Keep the entries whose display name matches the query
pub fn filter_groups(groups: Vec<ItemGroup>, query: &str) -> Vec<ItemGroup> {
    groups
        .into_iter()
        .filter(|g| matches_search(g.display_name(), query))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::items::{default_catalog, group_similar_items};

    #[test]
    fn test_strict_parsing() {
        assert_eq!(parse_number_strict(" 68 "), Ok(68.0));
        assert_eq!(parse_number_strict("12.5"), Ok(12.5));
        assert_eq!(parse_number_strict("abc"), Err(InputError::NotANumber("abc".to_string())));
        assert_eq!(parse_number_strict(""), Err(InputError::NotANumber(String::new())));
        assert_eq!(parse_number_strict("NaN"), Err(InputError::NotFinite("NaN".to_string())));
        assert_eq!(parse_number_strict("-3"), Err(InputError::Negative(-3.0)));
    }

    #[test]
    fn test_coercion_matches_reference_behaviour() {
        assert_eq!(coerce_number("42"), 42.0);
        assert_eq!(coerce_number(""), 0.0);
        assert_eq!(coerce_number("ten"), 0.0);
        assert_eq!(coerce_number("inf"), 0.0);
        assert_eq!(coerce_number("-1"), 0.0);
    }

    #[test]
    fn test_policy() {
        assert_eq!(NumberPolicy::from_coerce_flag(true).parse("x"), Ok(0.0));
        assert!(NumberPolicy::from_coerce_flag(false).parse("x").is_err());
    }

    #[test]
    fn test_validate_levels() {
        assert!(validate_levels(SkillKind::Melee, 40.0, 70.0).is_ok());
        // Range direction is the planner's concern
        assert!(validate_levels(SkillKind::Melee, 70.0, 40.0).is_ok());
        assert_eq!(
            validate_levels(SkillKind::Melee, 0.0, 70.0),
            Err(InputError::NonPositiveLevel(0.0))
        );
        assert!(validate_levels(SkillKind::Distance, 10.0, f64::NAN).is_err());
    }

    #[test]
    fn test_magic_may_start_at_zero() {
        assert!(validate_levels(SkillKind::Magic, 0.0, 10.0).is_ok());
        assert_eq!(
            validate_levels(SkillKind::Magic, -1.0, 10.0),
            Err(InputError::NonPositiveLevel(-1.0))
        );
        assert_eq!(
            validate_levels(SkillKind::Magic, 0.0, 0.0),
            Err(InputError::NonPositiveLevel(0.0))
        );
        assert_eq!(
            validate_levels(SkillKind::Shielding, 0.0, 10.0),
            Err(InputError::NonPositiveLevel(0.0))
        );
    }

    #[test]
    fn test_enum_parsing() {
        assert_eq!(parse_vocation("Knight"), Ok(Vocation::Knight));
        assert!(matches!(parse_vocation("bard"), Err(InputError::UnknownVocation(_))));
        assert_eq!(parse_skill_kind("distance"), Ok(SkillKind::Distance));
        assert_eq!(parse_sort_field("effective"), Ok(SortField::EffectiveMinutesPerUnit));
        assert_eq!(parse_family("SHIELD"), Ok(WeaponFamily::Shield));
        assert!(parse_family("bow").is_err());
    }

    #[test]
    fn test_price_entry() {
        assert_eq!(
            parse_price_entry("Inferno Training Melee=25000", NumberPolicy::Strict),
            Ok(("Inferno Training Melee".to_string(), 25_000.0))
        );
        assert_eq!(
            parse_price_entry("Spark Training Rod=oops", NumberPolicy::Coerce),
            Ok(("Spark Training Rod".to_string(), 0.0))
        );
        assert!(parse_price_entry("no separator", NumberPolicy::Coerce).is_err());
        assert!(parse_price_entry("=100", NumberPolicy::Coerce).is_err());
    }

    #[test]
    fn test_search_filter() {
        let catalog = default_catalog();
        let groups = group_similar_items(catalog.iter());

        let shields = filter_groups(groups.clone(), "shield");
        assert_eq!(shields.len(), 3);

        let inferno_melee = filter_groups(groups.clone(), "INFERNO training mel");
        assert_eq!(inferno_melee.len(), 1);

        assert_eq!(filter_groups(groups.clone(), "").len(), groups.len());
        assert!(filter_groups(groups, "bow").is_empty());
    }
}
