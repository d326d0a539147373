//! Application state for the payroll engine API.

use std::sync::Arc;

use crate::config::{ConfigLoader, PayrollConfig};

/// Shared application state.
///
/// Holds the loaded rate configuration. It is read-only after startup.
#[derive(Clone)]
pub struct AppState {
    config: Arc<ConfigLoader>,
}

impl AppState {
    /// Creates a new application state with the given configuration loader.
    pub fn new(config: ConfigLoader) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// State backed by the built-in statutory rates only.
    pub fn statutory_default() -> Self {
        Self::new(ConfigLoader::from_config(PayrollConfig::statutory_default()))
    }

    /// Returns the payroll configuration.
    pub fn payroll_config(&self) -> &PayrollConfig {
        self.config.config()
    }
}
