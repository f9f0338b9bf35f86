//! Settings store port
//!
//! Defines where the generated settings document lives.

use materializer_domain::LocalSettings;
use std::path::Path;
use thiserror::Error;

/// Errors that can occur while reading or writing the settings document
#[derive(Error, Debug)]
pub enum SettingsStoreError {
    #[error("Failed to write {path}: {source}")]
    Write {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to serialize settings document: {0}")]
    Serialize(#[source] serde_json::Error),

    #[error("Malformed settings document {path}: {source}")]
    Malformed {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Storage for the local settings document
pub trait SettingsStore: Send + Sync {
    /// Location of the document
    fn path(&self) -> &Path;

    /// Text `write` would store for this document
    fn render(&self, settings: &LocalSettings) -> Result<String, SettingsStoreError> {
        settings.to_json().map_err(SettingsStoreError::Serialize)
    }

    /// Overwrite the document unconditionally, returning the text written
    fn write(&self, settings: &LocalSettings) -> Result<String, SettingsStoreError>;

    /// Read the document back, `None` if it does not exist
    fn read(&self) -> Result<Option<LocalSettings>, SettingsStoreError>;
}
