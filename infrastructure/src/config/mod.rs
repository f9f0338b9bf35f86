//! Configuration file loading for materialize-settings
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `MATERIALIZER_*` environment variables
//! 2. `--config <path>` specified file
//! 3. Project root: `./materializer.toml` or `./.materializer.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/materialize-settings/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, FileBehaviorConfig, FileConfig, FileOutputConfig, FileSourceConfig,
};
pub use loader::ConfigLoader;
