//! Application layer for materialize-settings
//!
//! This crate contains use cases and port definitions.
//! It depends only on the domain layer.

pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use ports::{
    env_source::{EnvSourceError, EnvValueSource},
    progress::{MaterializeProgressNotifier, NoMaterializeProgress},
    settings_store::{SettingsStore, SettingsStoreError},
};
pub use use_cases::check_settings::{
    CheckOutcome, CheckReport, CheckSettingsError, CheckSettingsUseCase,
};
pub use use_cases::materialize::{
    MaterializeError, MaterializeInput, MaterializeOutput, MaterializeSettingsUseCase,
};
