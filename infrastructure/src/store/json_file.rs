//! JSON file settings store
//!
//! Writes `local.settings.json` with two-space indentation and a trailing
//! newline. The previous file is replaced without a backup. The parent
//! directory is not created: writing into a missing directory is reported as
//! a write failure.

use materializer_application::{SettingsStore, SettingsStoreError};
use materializer_domain::LocalSettings;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Debug, Clone)]
pub struct JsonFileSettingsStore {
    path: PathBuf,
}

impl JsonFileSettingsStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl SettingsStore for JsonFileSettingsStore {
    fn path(&self) -> &Path {
        &self.path
    }

    fn write(&self, settings: &LocalSettings) -> Result<String, SettingsStoreError> {
        let json = self.render(settings)?;
        fs::write(&self.path, json.as_bytes()).map_err(|source| SettingsStoreError::Write {
            path: self.path.display().to_string(),
            source,
        })?;
        debug!("Wrote {} bytes to {}", json.len(), self.path.display());
        Ok(json)
    }

    fn read(&self) -> Result<Option<LocalSettings>, SettingsStoreError> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(source) => {
                return Err(SettingsStoreError::Read {
                    path: self.path.display().to_string(),
                    source,
                });
            }
        };

        LocalSettings::from_json(&text)
            .map(Some)
            .map_err(|source| SettingsStoreError::Malformed {
                path: self.path.display().to_string(),
                source,
            })
    }
}
