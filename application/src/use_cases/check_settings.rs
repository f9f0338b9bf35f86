//! Check settings use case
//!
//! Reads the generated document back and resolves it the way the runtime
//! does at startup, so blank endpoints surface before the host is started.

use crate::ports::settings_store::{SettingsStore, SettingsStoreError};
use materializer_domain::{DomainError, RuntimeSettings};
use std::path::PathBuf;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Error, Debug)]
pub enum CheckSettingsError {
    #[error("Settings document not found at {0}")]
    NotFound(String),

    #[error(transparent)]
    Store(#[from] SettingsStoreError),
}

/// Result of resolving the stored document
#[derive(Debug, Clone)]
pub enum CheckOutcome {
    /// Every required setting is present
    Ready(RuntimeSettings),
    /// The runtime would refuse to start
    Incomplete(Vec<DomainError>),
}

impl CheckOutcome {
    pub fn is_ready(&self) -> bool {
        matches!(self, CheckOutcome::Ready(_))
    }
}

#[derive(Debug, Clone)]
pub struct CheckReport {
    pub path: PathBuf,
    pub outcome: CheckOutcome,
}

pub struct CheckSettingsUseCase {
    store: Arc<dyn SettingsStore>,
}

impl CheckSettingsUseCase {
    pub fn new(store: Arc<dyn SettingsStore>) -> Self {
        Self { store }
    }

    pub fn execute(&self) -> Result<CheckReport, CheckSettingsError> {
        let path = self.store.path().to_path_buf();
        let settings = self
            .store
            .read()?
            .ok_or_else(|| CheckSettingsError::NotFound(path.display().to_string()))?;

        let outcome = match RuntimeSettings::resolve(&settings) {
            Ok(resolved) => {
                for name in &resolved.defaulted {
                    debug!("{} is blank, runtime default applies", name);
                }
                CheckOutcome::Ready(resolved)
            }
            Err(errors) => {
                for error in &errors {
                    warn!("{}", error);
                }
                CheckOutcome::Incomplete(errors)
            }
        };

        Ok(CheckReport { path, outcome })
    }
}
