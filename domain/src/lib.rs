//! Domain layer for materialize-settings
//!
//! This crate contains the value objects and entities of the settings
//! materializer. It has no dependencies on infrastructure or presentation
//! concerns.
//!
//! # Core Concepts
//!
//! - **Value set**: key/value pairs reported by the provisioning tool for a
//!   deployed environment
//! - **Recognized key**: one of the four keys copied into the document
//! - **Local settings**: the `local.settings.json` document, made of fixed
//!   literals plus the recognized values copied verbatim
//! - **Runtime settings**: the document with the runtime's defaults applied

pub mod core;
pub mod env;
pub mod settings;

// Re-export commonly used types
pub use crate::core::error::DomainError;
pub use env::value_set::EnvValueSet;
pub use settings::{
    ENABLE_WORKER_EXTENSIONS, MODEL_NAME, SECRET_STORAGE_TYPE, WORKER_RUNTIME,
    document::{LocalSettings, SettingsValues, missing_keys, require_all_keys},
    keys::RecognizedKey,
    runtime::{
        DEFAULT_API_VERSION, DEFAULT_CONTAINER_NAME, DEFAULT_DATABASE_NAME,
        DEFAULT_RUNTIME_MODEL, RuntimeSettings,
    },
};
