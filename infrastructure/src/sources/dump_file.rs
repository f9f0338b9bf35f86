//! Captured value dump adapter

use super::value_dump::parse_value_dump;
use async_trait::async_trait;
use materializer_application::{EnvSourceError, EnvValueSource};
use materializer_domain::EnvValueSet;
use std::path::PathBuf;
use tracing::debug;

/// Value source reading a dump saved earlier, e.g. `azd env get-values > values.env`
#[derive(Debug, Clone)]
pub struct DumpFileEnvValueSource {
    path: PathBuf,
}

impl DumpFileEnvValueSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl EnvValueSource for DumpFileEnvValueSource {
    async fn fetch(&self) -> Result<EnvValueSet, EnvSourceError> {
        let text = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|source| EnvSourceError::Read {
                path: self.path.display().to_string(),
                source,
            })?;
        debug!("Read {} bytes from {}", text.len(), self.path.display());
        Ok(parse_value_dump(&text))
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
