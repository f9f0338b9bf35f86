//! Infrastructure layer for materialize-settings
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod sources;
pub mod store;

// Re-export commonly used types
pub use config::{
    ConfigLoader, ConfigValidationError, FileBehaviorConfig, FileConfig, FileOutputConfig,
    FileSourceConfig,
};
pub use sources::{AzdEnvValueSource, DumpFileEnvValueSource, parse_value_dump};
pub use store::JsonFileSettingsStore;
