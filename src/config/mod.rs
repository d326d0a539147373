//! Configuration loading and management for the payroll engine.
//!
//! This module loads jurisdiction metadata and effective-dated rate tables
//! from YAML files. The statutory constants are also available without any
//! files through [`DeductionRates::default`] and [`PremiumRates::default`].
//!
//! # Example
//!
//! ```no_run
//! use payroll_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/kr").unwrap();
//! println!("Loaded rules: {}", config.jurisdiction().name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{DeductionRates, JurisdictionMetadata, PayrollConfig, PremiumRates, RateTable};
