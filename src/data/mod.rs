//! Data loading and configuration
//!
//! This module handles loading the item catalog and skill rates from
//! external RON files, plus the application config file.

pub mod loader;
pub mod config;

pub use loader::{DataManager, DataError, export_default_data, read_ron, DEFAULT_DATA_DIR};
pub use config::{AppConfig, load_config, config_path};
