//! Materialize settings use case
//!
//! Queries the deployed environment once, builds the local settings document
//! from the recognized keys and overwrites the settings file.
//!
//! # Flow
//!
//! 1. **Query** - fetch the value set through [`EnvValueSource`]
//! 2. **Check keys** - report recognized keys that are absent
//! 3. **Build** - [`LocalSettings::from_env_values`]
//! 4. **Write** - overwrite the document through [`SettingsStore`]; the
//!    store's rendering is also what a dry run returns
//!
//! A missing key produces an empty field and a warning unless
//! `require_all_keys` is set, in which case nothing is written.

use crate::ports::env_source::{EnvSourceError, EnvValueSource};
use crate::ports::progress::{MaterializeProgressNotifier, NoMaterializeProgress};
use crate::ports::settings_store::{SettingsStore, SettingsStoreError};
use materializer_domain::{
    DomainError, LocalSettings, RecognizedKey, missing_keys, require_all_keys,
};
use std::path::PathBuf;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors that can occur while materializing the settings document
#[derive(Error, Debug)]
pub enum MaterializeError {
    /// The provisioning tool could not be queried.
    #[error("Failed to query environment values: {0}")]
    Source(#[from] EnvSourceError),

    /// Recognized keys were absent and `require_all_keys` was set.
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// The document could not be written.
    #[error(transparent)]
    Store(#[from] SettingsStoreError),
}

/// Input for the materialize use case
#[derive(Debug, Clone, Default)]
pub struct MaterializeInput {
    /// Fail instead of writing empty fields for absent keys
    pub require_all_keys: bool,
    /// Render the document without writing it
    pub dry_run: bool,
}

impl MaterializeInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_require_all_keys(mut self, require: bool) -> Self {
        self.require_all_keys = require;
        self
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }
}

/// Output from the materialize use case
#[derive(Debug, Clone)]
pub struct MaterializeOutput {
    /// The generated document
    pub settings: LocalSettings,
    /// Exact text that was (or would have been) written
    pub rendered: String,
    /// Target path of the document
    pub path: PathBuf,
    /// Recognized keys absent from the value set
    pub missing_keys: Vec<RecognizedKey>,
    /// Whether the file was written (false on dry run)
    pub written: bool,
}

/// Use case for turning a deployed environment into local settings
pub struct MaterializeSettingsUseCase {
    source: Arc<dyn EnvValueSource>,
    store: Arc<dyn SettingsStore>,
}

impl MaterializeSettingsUseCase {
    pub fn new(source: Arc<dyn EnvValueSource>, store: Arc<dyn SettingsStore>) -> Self {
        Self { source, store }
    }

    /// Execute without progress reporting
    pub async fn execute(
        &self,
        input: MaterializeInput,
    ) -> Result<MaterializeOutput, MaterializeError> {
        self.execute_with_progress(input, &NoMaterializeProgress)
            .await
    }

    /// Execute with progress notifications
    ///
    /// # Errors
    ///
    /// - [`MaterializeError::Source`] - the value source failed
    /// - [`MaterializeError::Domain`] - keys missing with `require_all_keys`
    /// - [`MaterializeError::Store`] - the document could not be rendered or written
    pub async fn execute_with_progress(
        &self,
        input: MaterializeInput,
        progress: &dyn MaterializeProgressNotifier,
    ) -> Result<MaterializeOutput, MaterializeError> {
        let description = self.source.describe();
        info!("Querying environment values from {}", description);
        progress.on_query_start(&description);

        let env = match self.source.fetch().await {
            Ok(env) => env,
            Err(e) => {
                progress.on_query_failed(&e.to_string());
                return Err(e.into());
            }
        };
        debug!("Received {} environment values", env.len());
        progress.on_query_complete(env.len());

        let missing = missing_keys(&env);
        for key in &missing {
            warn!("{} not found in environment values, writing empty value", key);
            progress.on_missing_key(*key);
        }
        if input.require_all_keys {
            require_all_keys(&env)?;
        }

        let settings = LocalSettings::from_env_values(&env);
        let path = self.store.path().to_path_buf();

        let (rendered, written) = if input.dry_run {
            info!("Dry run, not writing {}", path.display());
            (self.store.render(&settings)?, false)
        } else {
            let rendered = self.store.write(&settings)?;
            info!("Wrote {}", path.display());
            progress.on_written(&path);
            (rendered, true)
        };

        Ok(MaterializeOutput {
            settings,
            rendered,
            path,
            missing_keys: missing,
            written,
        })
    }
}
