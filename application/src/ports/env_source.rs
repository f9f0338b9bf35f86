//! Environment value source port
//!
//! Defines how the application obtains the value set of a deployed
//! environment. The production adapter shells out to the provisioning tool;
//! tests substitute an in-memory mapping.

use async_trait::async_trait;
use materializer_domain::EnvValueSet;
use thiserror::Error;

/// Errors that can occur while querying the provisioning tool
#[derive(Error, Debug)]
pub enum EnvSourceError {
    #[error("Provisioning tool not found: {0}")]
    ToolNotFound(String),

    #[error("Failed to start {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{program} exited with {status}: {stderr}")]
    CommandFailed {
        program: String,
        status: String,
        stderr: String,
    },

    #[error("{program} did not finish within {secs} seconds")]
    Timeout { program: String, secs: u64 },

    #[error("Failed to read value dump {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Source of the environment value set
#[async_trait]
pub trait EnvValueSource: Send + Sync {
    /// Query the current value set
    async fn fetch(&self) -> Result<EnvValueSet, EnvSourceError>;

    /// Human-readable description of where values come from
    fn describe(&self) -> String;
}
