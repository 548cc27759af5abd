//! Skill progression engine

pub mod skills;
pub mod plan;

pub use skills::{Vocation, SkillKind, growth_rate, total_points, points_needed};
pub use plan::{SkillError, SkillRate, SkillRates, SkillProgressionRequest, TrainingPlan};
pub use plan::{compute_training_plan, checked_training_plan, default_skill_rates};
