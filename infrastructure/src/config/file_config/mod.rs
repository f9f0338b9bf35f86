//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.

mod behavior;
mod output;
mod source;

pub use behavior::FileBehaviorConfig;
pub use output::FileOutputConfig;
pub use source::FileSourceConfig;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration validation errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigValidationError {
    #[error("source.program cannot be empty")]
    EmptyProgram,

    #[error("source.timeout_secs cannot be 0")]
    InvalidTimeout,

    #[error("output.path cannot be empty")]
    EmptyOutputPath,
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Where environment values come from
    pub source: FileSourceConfig,
    /// Where the settings document goes
    pub output: FileOutputConfig,
    /// Run behavior
    pub behavior: FileBehaviorConfig,
}

impl FileConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.source.program.trim().is_empty() {
            return Err(ConfigValidationError::EmptyProgram);
        }

        if self.source.timeout_secs == 0 {
            return Err(ConfigValidationError::InvalidTimeout);
        }

        if self.output.path.as_os_str().is_empty() {
            return Err(ConfigValidationError::EmptyOutputPath);
        }

        Ok(())
    }
}
