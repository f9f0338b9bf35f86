//! Provisioning tool adapter
//!
//! Runs `azd env get-values` (or the configured equivalent) once and parses
//! its stdout. A missing executable, a non-zero exit and a timeout are each
//! reported as their own [`EnvSourceError`] variant.

use super::value_dump::parse_value_dump;
use crate::config::FileSourceConfig;
use async_trait::async_trait;
use materializer_application::{EnvSourceError, EnvValueSource};
use materializer_domain::EnvValueSet;
use std::process::Stdio;
use std::time::Duration;
use tokio::process::Command;
use tracing::{debug, warn};

/// Value source backed by the provisioning tool's CLI
#[derive(Debug, Clone)]
pub struct AzdEnvValueSource {
    program: String,
    args: Vec<String>,
    environment: Option<String>,
    timeout: Duration,
}

impl AzdEnvValueSource {
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
            environment: None,
            timeout: Duration::from_secs(60),
        }
    }

    pub fn from_config(config: &FileSourceConfig) -> Self {
        Self::new(config.program.clone(), config.args.clone())
            .with_environment(config.environment.clone())
            .with_timeout(Duration::from_secs(config.timeout_secs))
    }

    /// Query a named environment instead of the default one
    pub fn with_environment(mut self, environment: Option<String>) -> Self {
        self.environment = environment;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Full argument list passed to the program
    pub fn command_args(&self) -> Vec<String> {
        let mut args = self.args.clone();
        if let Some(env) = &self.environment {
            args.push("--environment".to_string());
            args.push(env.clone());
        }
        args
    }
}

#[async_trait]
impl EnvValueSource for AzdEnvValueSource {
    async fn fetch(&self) -> Result<EnvValueSet, EnvSourceError> {
        let resolved = which::which(&self.program)
            .map_err(|_| EnvSourceError::ToolNotFound(self.program.clone()))?;
        debug!("Resolved {} to {}", self.program, resolved.display());

        let child = Command::new(&resolved)
            .args(self.command_args())
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|source| EnvSourceError::Spawn {
                program: self.program.clone(),
                source,
            })?;

        let output = tokio::time::timeout(self.timeout, child.wait_with_output())
            .await
            .map_err(|_| EnvSourceError::Timeout {
                program: self.program.clone(),
                secs: self.timeout.as_secs(),
            })?
            .map_err(|source| EnvSourceError::Spawn {
                program: self.program.clone(),
                source,
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            warn!("{} failed: {}", self.program, stderr);
            return Err(EnvSourceError::CommandFailed {
                program: self.program.clone(),
                status: output.status.to_string(),
                stderr,
            });
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        Ok(parse_value_dump(&stdout))
    }

    fn describe(&self) -> String {
        let mut parts = vec![self.program.clone()];
        parts.extend(self.command_args());
        parts.join(" ")
    }
}
