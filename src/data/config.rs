//! Application configuration
//!
//! Stored as `config.ron` in the platform config directory.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::economics::{SortDirection, SortField, TierPrices};
use super::loader::{read_ron, DataError};

pub const CONFIG_FILE: &str = "config.ron";

/// Defaults for a calculator session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Training duration used when none is given
    pub target_hours: f64,
    pub sort_field: SortField,
    pub sort_direction: SortDirection,
    /// Fuse axe/sword/club into one melee entry per tier
    pub group_items: bool,
    pub tier_prices: TierPrices,
    /// Treat malformed numbers as zero instead of rejecting them
    pub coerce_invalid_numbers: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            target_hours: 68.0,
            sort_field: SortField::default(),
            sort_direction: SortDirection::default(),
            group_items: true,
            tier_prices: TierPrices::default(),
            coerce_invalid_numbers: true,
        }
    }
}

/// Get the config directory path
pub fn config_directory() -> PathBuf {
    use directories::ProjectDirs;

    if let Some(proj_dirs) = ProjectDirs::from("com", "trainingcalc", "TrainingCalc") {
        proj_dirs.config_dir().to_path_buf()
    } else {
        // Fallback to current directory
        PathBuf::from(".")
    }
}

/// Default config file location
pub fn config_path() -> PathBuf {
    config_directory().join(CONFIG_FILE)
}

/// Resolve the configuration.
///
/// An explicit path must exist and parse. The implicit location is optional
/// and a broken file there only produces a warning.
pub fn load_config(explicit: Option<&Path>) -> Result<AppConfig, DataError> {
    if let Some(path) = explicit {
        log::debug!("Loading config from {}", path.display());
        return read_ron(path);
    }

    let path = config_path();
    if !path.exists() {
        log::debug!("No config at {}, using defaults", path.display());
        return Ok(AppConfig::default());
    }

    match read_ron(&path) {
        Ok(config) => Ok(config),
        Err(e) => {
            log::warn!("{}. Using default config", e);
            Ok(AppConfig::default())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.target_hours, 68.0);
        assert_eq!(config.sort_field, SortField::CostPerHour);
        assert_eq!(config.sort_direction, SortDirection::Ascending);
        assert!(config.group_items);
        assert!(config.coerce_invalid_numbers);
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let config: AppConfig = ron::from_str("(target_hours: 12.5, group_items: false)").unwrap();
        assert_eq!(config.target_hours, 12.5);
        assert!(!config.group_items);
        assert_eq!(config.tier_prices, TierPrices::default());
    }

    #[test]
    fn test_explicit_path_must_exist() {
        let path = std::env::temp_dir().join(format!("training-calc-no-config-{}.ron", std::process::id()));
        let err = load_config(Some(&path)).unwrap_err();
        assert!(matches!(err, DataError::Io { .. }));
    }

    #[test]
    fn test_explicit_path_is_loaded() {
        let path = std::env::temp_dir().join(format!("training-calc-config-{}.ron", std::process::id()));
        fs::write(&path, "(sort_field: Name, sort_direction: Descending)").unwrap();

        let config = load_config(Some(&path)).unwrap();
        assert_eq!(config.sort_field, SortField::Name);
        assert_eq!(config.sort_direction, SortDirection::Descending);
        assert_eq!(config.target_hours, 68.0);
        let _ = fs::remove_file(&path);
    }
}
