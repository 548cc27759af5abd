//! Training Calc - skill training planner for a fantasy MMO
//!
//! Estimates how many training items, how much time and how much gold it
//! takes to raise a skill, and compares training weapon tiers by cost.

pub mod progression;
pub mod items;
pub mod economics;
pub mod data;
pub mod ui;

// Re-export commonly used types
pub use progression::{Vocation, SkillKind, SkillProgressionRequest, TrainingPlan, compute_training_plan};
pub use items::{Catalog, TrainingItem, ItemGroup, group_similar_items};
pub use economics::{RowResult, PriceMap, compute_row, sort_rows};
