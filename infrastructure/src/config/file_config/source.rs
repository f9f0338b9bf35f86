//! Value source configuration from TOML (`[source]` section)
//!
//! ```toml
//! [source]
//! program = "azd"
//! args = ["env", "get-values"]
//! environment = "dev"        # passed as --environment
//! timeout_secs = 60
//! dump_file = "values.env"   # read a captured dump instead of running program
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Raw value source configuration from TOML
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileSourceConfig {
    /// Provisioning tool executable
    pub program: String,
    /// Arguments that make the tool print its value dump
    pub args: Vec<String>,
    /// Named environment to query instead of the tool's default
    pub environment: Option<String>,
    /// Upper bound for the tool invocation
    pub timeout_secs: u64,
    /// Captured value dump to read instead of running the tool
    pub dump_file: Option<PathBuf>,
}

impl Default for FileSourceConfig {
    fn default() -> Self {
        Self {
            program: "azd".to_string(),
            args: vec!["env".to_string(), "get-values".to_string()],
            environment: None,
            timeout_secs: 60,
            dump_file: None,
        }
    }
}
