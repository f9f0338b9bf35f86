//! Output configuration from TOML (`[output]` section)

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Default location of the generated document, relative to the working directory
pub const DEFAULT_SETTINGS_PATH: &str = "src/local.settings.json";

/// Raw output configuration from TOML
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOutputConfig {
    /// Path of the settings document
    pub path: PathBuf,
}

impl Default for FileOutputConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_SETTINGS_PATH),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_path_deserialize() {
        let toml_str = r#"
[output]
path = "functions/local.settings.json"
"#;
        let config: super::super::FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(
            config.output.path,
            PathBuf::from("functions/local.settings.json")
        );
    }
}
