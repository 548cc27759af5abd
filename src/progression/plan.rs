//! Training plans
//!
//! Turns a skill level range into actions, elapsed time and gold cost using
//! a per-(vocation, skill) rate table.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::skills::{points_needed, SkillKind, Vocation};

const SECONDS_PER_HOUR: f64 = 3600.0;

/// Skill plan failures
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SkillError {
    #[error("target level {target} must be greater than current level {current}")]
    InvalidRange { current: f64, target: f64 },
    #[error("no training configuration for {vocation} {kind}")]
    ConfigurationNotFound { vocation: &'static str, kind: &'static str },
}

/// Speed and cost of one training action
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillRate {
    pub vocation: Vocation,
    pub kind: SkillKind,
    /// Seconds per action (hit or cast)
    pub seconds_per_action: f64,
    /// Gold spent per action
    pub cost_per_action: f64,
    pub description: String,
}

/// Rate table covering the trainable (vocation, skill) pairs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillRates {
    pub rates: Vec<SkillRate>,
}

impl SkillRates {
    /// Find the rate for a pair, failing loudly instead of defaulting
    pub fn lookup(&self, vocation: Vocation, kind: SkillKind) -> Result<&SkillRate, SkillError> {
        self.rates
            .iter()
            .find(|r| r.vocation == vocation && r.kind == kind)
            .ok_or(SkillError::ConfigurationNotFound {
                vocation: vocation.name(),
                kind: kind.name(),
            })
    }
}

impl Default for SkillRates {
    fn default() -> Self {
        default_skill_rates()
    }
}

/// Reference rates: physical actions take 2s and are free, magic casts
/// take 0.1s and cost 50 gold in reagents. Fishing is not trainable.
pub fn default_skill_rates() -> SkillRates {
    let mut rates = Vec::new();
    for vocation in Vocation::ALL {
        for kind in [SkillKind::Melee, SkillKind::Magic, SkillKind::Distance, SkillKind::Shielding] {
            let (seconds_per_action, cost_per_action, description) = match kind {
                SkillKind::Magic => (0.1, 50.0, "Casting spells"),
                SkillKind::Distance => (2.0, 0.0, "Bow and arrow"),
                SkillKind::Shielding => (2.0, 0.0, "Blocking with a shield"),
                _ => (2.0, 0.0, "Training dummy or creatures"),
            };
            rates.push(SkillRate {
                vocation,
                kind,
                seconds_per_action,
                cost_per_action,
                description: description.to_string(),
            });
        }
    }
    SkillRates { rates }
}

/// Input for a training plan
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SkillProgressionRequest {
    pub vocation: Vocation,
    pub kind: SkillKind,
    pub current_level: f64,
    pub target_level: f64,
}

impl SkillProgressionRequest {
    pub fn new(vocation: Vocation, kind: SkillKind, current_level: f64, target_level: f64) -> Self {
        Self { vocation, kind, current_level, target_level }
    }

    /// Levels gained by the plan (zero for an empty range)
    pub fn level_difference(&self) -> f64 {
        (self.target_level - self.current_level).max(0.0)
    }

    pub fn is_empty_range(&self) -> bool {
        self.target_level <= self.current_level
    }
}

/// Result of a training plan
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrainingPlan {
    /// Skill points between the two levels
    pub points: f64,
    /// Whole actions needed, one point each
    pub actions: f64,
    pub elapsed_seconds: f64,
    pub elapsed_hours: f64,
    /// Gold spent on reagents
    pub cost: f64,
}

impl TrainingPlan {
    pub const ZERO: TrainingPlan = TrainingPlan {
        points: 0.0,
        actions: 0.0,
        elapsed_seconds: 0.0,
        elapsed_hours: 0.0,
        cost: 0.0,
    };
}

/// Compute a plan. An empty range (target <= current) gives a zero plan.
pub fn compute_training_plan(
    rates: &SkillRates,
    request: &SkillProgressionRequest,
) -> Result<TrainingPlan, SkillError> {
    let rate = rates.lookup(request.vocation, request.kind)?;

    if request.is_empty_range() {
        return Ok(TrainingPlan::ZERO);
    }

    let points = points_needed(
        request.vocation,
        request.kind,
        request.current_level,
        request.target_level,
    );
    let actions = points.ceil();
    let elapsed_seconds = actions * rate.seconds_per_action;

    Ok(TrainingPlan {
        points,
        actions,
        elapsed_seconds,
        elapsed_hours: elapsed_seconds / SECONDS_PER_HOUR,
        cost: actions * rate.cost_per_action,
    })
}

/// Like [`compute_training_plan`] but rejects an empty range
pub fn checked_training_plan(
    rates: &SkillRates,
    request: &SkillProgressionRequest,
) -> Result<TrainingPlan, SkillError> {
    if request.is_empty_range() {
        return Err(SkillError::InvalidRange {
            current: request.current_level,
            target: request.target_level,
        });
    }
    compute_training_plan(rates, request)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::progression::skills::total_points;

    fn request(vocation: Vocation, kind: SkillKind, from: f64, to: f64) -> SkillProgressionRequest {
        SkillProgressionRequest::new(vocation, kind, from, to)
    }

    #[test]
    fn test_knight_melee_plan() {
        let rates = default_skill_rates();
        let plan = compute_training_plan(&rates, &request(Vocation::Knight, SkillKind::Melee, 40.0, 70.0)).unwrap();

        let expected = total_points(Vocation::Knight, SkillKind::Melee, 70.0)
            - total_points(Vocation::Knight, SkillKind::Melee, 40.0);
        assert_eq!(plan.points, expected);
        assert_eq!(plan.actions, expected.ceil());
        assert_eq!(plan.elapsed_seconds, plan.actions * 2.0);
        assert_eq!(plan.elapsed_hours, plan.elapsed_seconds / 3600.0);
        assert_eq!(plan.cost, 0.0);
    }

    #[test]
    fn test_magic_plan_costs_gold() {
        let rates = default_skill_rates();
        let plan = compute_training_plan(&rates, &request(Vocation::Druid, SkillKind::Magic, 10.0, 20.0)).unwrap();

        assert!(plan.actions > 0.0);
        assert_eq!(plan.cost, plan.actions * 50.0);
        assert!((plan.elapsed_seconds - plan.actions * 0.1).abs() < 1e-6);
    }

    #[test]
    fn test_magic_plan_from_level_zero() {
        let rates = default_skill_rates();
        let plan = compute_training_plan(&rates, &request(Vocation::Sorcerer, SkillKind::Magic, 0.0, 10.0)).unwrap();

        assert_eq!(total_points(Vocation::Sorcerer, SkillKind::Magic, 0.0), 0.0);
        assert_eq!(plan.points, total_points(Vocation::Sorcerer, SkillKind::Magic, 10.0));
        assert!(plan.cost > 0.0);
    }

    #[test]
    fn test_empty_range_is_zero_plan() {
        let rates = default_skill_rates();
        let plan = compute_training_plan(&rates, &request(Vocation::Paladin, SkillKind::Distance, 80.0, 80.0)).unwrap();
        assert_eq!(plan, TrainingPlan::ZERO);

        let plan = compute_training_plan(&rates, &request(Vocation::Paladin, SkillKind::Distance, 90.0, 80.0)).unwrap();
        assert_eq!(plan, TrainingPlan::ZERO);
    }

    #[test]
    fn test_checked_plan_rejects_empty_range() {
        let rates = default_skill_rates();
        let err = checked_training_plan(&rates, &request(Vocation::Knight, SkillKind::Melee, 70.0, 40.0)).unwrap_err();
        assert_eq!(err, SkillError::InvalidRange { current: 70.0, target: 40.0 });
    }

    #[test]
    fn test_unknown_configuration() {
        let rates = default_skill_rates();
        let err = compute_training_plan(&rates, &request(Vocation::Knight, SkillKind::Fishing, 10.0, 20.0)).unwrap_err();
        assert_eq!(
            err,
            SkillError::ConfigurationNotFound { vocation: "knight", kind: "fishing" }
        );

        let empty = SkillRates { rates: Vec::new() };
        assert!(compute_training_plan(&empty, &request(Vocation::Knight, SkillKind::Melee, 10.0, 20.0)).is_err());
    }

    #[test]
    fn test_actions_are_whole() {
        let rates = default_skill_rates();
        for vocation in Vocation::ALL {
            let plan = compute_training_plan(&rates, &request(vocation, SkillKind::Shielding, 12.5, 30.0)).unwrap();
            assert_eq!(plan.actions.fract(), 0.0);
            assert!(plan.actions >= plan.points);
            assert!(plan.actions - plan.points < 1.0);
        }
    }

    #[test]
    fn test_level_difference() {
        let req = request(Vocation::Knight, SkillKind::Melee, 40.0, 70.0);
        assert_eq!(req.level_difference(), 30.0);
        assert!(!req.is_empty_range());
        assert_eq!(request(Vocation::Knight, SkillKind::Melee, 70.0, 40.0).level_difference(), 0.0);
    }
}
