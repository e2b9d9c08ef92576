//! Record mapping file loading and validation.
//!
//! A mapping file declares, per record, the field metadata a
//! [`ColumnSet`](crate::core::ColumnSet) is derived from:
//!
//! ```yaml
//! records:
//!   - name: users
//!     fields:
//!       - field: FirstName
//!         column: first_name
//!       - field: LastName
//!       - field: Unwanted
//!         skip: true
//! ```

mod types;
mod validation;

pub use types::*;

use crate::error::Result;
use std::path::Path;
use tracing::debug;

impl Config {
    /// Load configuration from a YAML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        debug!("Read mapping file {:?} ({} bytes)", path, content.len());
        Self::from_yaml(&content)
    }

    /// Parse configuration from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: Config = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<()> {
        validation::validate(self)
    }
}
