//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading payroll
//! configurations from YAML files.

use chrono::NaiveDate;
use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::{JurisdictionMetadata, PayrollConfig, RateTable};

/// Loads and provides access to payroll configuration.
///
/// The `ConfigLoader` reads YAML configuration files from a directory
/// and answers which rate table applies on a given date.
///
/// # Directory Structure
///
/// ```text
/// config/kr/
/// ├── jurisdiction.yaml   # Jurisdiction metadata
/// └── rates/
///     └── 2025-01-01.yaml # Rates effective from this date
/// ```
///
/// # Example
///
/// ```no_run
/// use payroll_engine::config::ConfigLoader;
/// use chrono::NaiveDate;
///
/// let loader = ConfigLoader::load("./config/kr").unwrap();
/// let date = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();
/// let table = loader.rates_for(date).unwrap();
/// println!("Pension rate: {}", table.deductions.national_pension);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: PayrollConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// Returns an error if `jurisdiction.yaml` or the `rates` directory is
    /// missing, if any file contains invalid YAML, or if a rate table holds a
    /// negative rate.
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let metadata_path = path.join("jurisdiction.yaml");
        let metadata = Self::load_yaml::<JurisdictionMetadata>(&metadata_path)?;

        let rates_dir = path.join("rates");
        let rate_tables = Self::load_rates(&rates_dir)?;

        Ok(Self {
            config: PayrollConfig::new(metadata, rate_tables),
        })
    }

    /// Wraps an already-built configuration.
    pub fn from_config(config: PayrollConfig) -> Self {
        Self { config }
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Loads all rate tables from the rates directory.
    fn load_rates(rates_dir: &Path) -> EngineResult<Vec<RateTable>> {
        let rates_dir_str = rates_dir.display().to_string();

        let entries = fs::read_dir(rates_dir).map_err(|_| EngineError::ConfigNotFound {
            path: rates_dir_str.clone(),
        })?;

        let mut tables = Vec::new();

        for entry in entries {
            let entry = entry.map_err(|_| EngineError::ConfigNotFound {
                path: rates_dir_str.clone(),
            })?;

            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "yaml") {
                let table = Self::load_yaml::<RateTable>(&path)?;
                table
                    .deductions
                    .validate()
                    .and_then(|_| table.premiums.validate())
                    .map_err(|e| EngineError::ConfigParseError {
                        path: path.display().to_string(),
                        message: e.to_string(),
                    })?;
                tables.push(table);
            }
        }

        if tables.is_empty() {
            return Err(EngineError::ConfigNotFound {
                path: format!("{} (no rate files found)", rates_dir_str),
            });
        }

        Ok(tables)
    }

    /// Returns the underlying configuration.
    pub fn config(&self) -> &PayrollConfig {
        &self.config
    }

    /// Returns the jurisdiction metadata.
    pub fn jurisdiction(&self) -> &JurisdictionMetadata {
        self.config.metadata()
    }

    /// Returns the rate table with the latest effective date.
    pub fn latest_rates(&self) -> Option<&RateTable> {
        self.config.latest_rates()
    }

    /// Returns the rate table effective on `date`.
    pub fn rates_for(&self, date: NaiveDate) -> EngineResult<&RateTable> {
        self.config.rates_for(date)
    }
}
