//! Presentation boundary
//!
//! Input normalization, formatting and text reports used by the CLI.

pub mod input;
pub mod format;
pub mod report;

pub use input::{InputError, NumberPolicy, filter_groups, matches_search, validate_levels};
pub use format::{format_fixed, format_minutes, format_thousands, format_training_time, format_units};
pub use report::{render_plan, render_rows, render_tier_comparison};
