//! RON data loader
//!
//! Loads the item catalog and skill rate table from external RON files, with
//! fallback to the built-in tables.

use std::fs;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::items::{default_catalog, Catalog, CatalogError};
use crate::progression::{default_skill_rates, SkillRates};

/// Default location of the data files, relative to the working directory
pub const DEFAULT_DATA_DIR: &str = "assets/data";
pub const CATALOG_FILE: &str = "catalog.ron";
pub const SKILL_RATES_FILE: &str = "skill_rates.ron";

/// Data file failures
#[derive(Debug, Error)]
pub enum DataError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: ron::error::SpannedError,
    },
    #[error("failed to serialize data: {0}")]
    Serialize(#[from] ron::Error),
    #[error("invalid catalog: {0}")]
    Catalog(#[from] CatalogError),
}

/// Read and parse one RON file
pub fn read_ron<T: DeserializeOwned>(path: &Path) -> Result<T, DataError> {
    let content = fs::read_to_string(path).map_err(|source| DataError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    ron::from_str(&content).map_err(|source| DataError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Catalog and rate tables used by the engines
#[derive(Debug, Clone, PartialEq)]
pub struct DataManager {
    pub catalog: Catalog,
    pub rates: SkillRates,
}

impl DataManager {
    /// Load from a data directory, falling back per file to built-in tables
    pub fn load_from(base_path: &Path) -> Self {
        Self {
            catalog: Self::load_catalog(base_path),
            rates: Self::load_rates(base_path),
        }
    }

    fn load_catalog(base_path: &Path) -> Catalog {
        let path = base_path.join(CATALOG_FILE);
        if !path.exists() {
            log::debug!("{} not found, using built-in catalog", path.display());
            return default_catalog();
        }

        let loaded = read_ron::<Catalog>(&path)
            .and_then(|catalog| catalog.validate().map(|()| catalog).map_err(DataError::from));
        match loaded {
            Ok(catalog) => {
                log::info!("Loaded {} training items from {}", catalog.len(), path.display());
                catalog
            }
            Err(e) => {
                log::warn!("{}. Using built-in catalog", e);
                default_catalog()
            }
        }
    }

    fn load_rates(base_path: &Path) -> SkillRates {
        let path = base_path.join(SKILL_RATES_FILE);
        if !path.exists() {
            log::debug!("{} not found, using built-in skill rates", path.display());
            return default_skill_rates();
        }

        match read_ron::<SkillRates>(&path) {
            Ok(rates) => {
                log::info!("Loaded {} skill rates from {}", rates.rates.len(), path.display());
                rates
            }
            Err(e) => {
                log::warn!("{}. Using built-in skill rates", e);
                default_skill_rates()
            }
        }
    }
}

impl Default for DataManager {
    fn default() -> Self {
        Self {
            catalog: default_catalog(),
            rates: default_skill_rates(),
        }
    }
}

/// Export the built-in tables to RON files for editing
pub fn export_default_data(base_path: &Path) -> Result<(), DataError> {
    fs::create_dir_all(base_path).map_err(|source| DataError::Io {
        path: base_path.to_path_buf(),
        source,
    })?;

    let pretty = ron::ser::PrettyConfig::default();
    let catalog_ron = ron::ser::to_string_pretty(&default_catalog(), pretty.clone())?;
    write_file(&base_path.join(CATALOG_FILE), &catalog_ron)?;

    let rates_ron = ron::ser::to_string_pretty(&default_skill_rates(), pretty)?;
    write_file(&base_path.join(SKILL_RATES_FILE), &rates_ron)?;

    log::info!("Exported default data to {}", base_path.display());
    Ok(())
}

fn write_file(path: &Path, content: &str) -> Result<(), DataError> {
    fs::write(path, content).map_err(|source| DataError::Io {
        path: path.to_path_buf(),
        source,
    })
}
