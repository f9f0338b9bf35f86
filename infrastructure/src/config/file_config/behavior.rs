//! Behavior configuration from TOML (`[behavior]` section)

use serde::{Deserialize, Serialize};

/// Raw behavior configuration from TOML
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileBehaviorConfig {
    /// Fail instead of writing empty values for absent keys
    pub require_all_keys: bool,
}
