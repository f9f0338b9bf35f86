//! The local settings document consumed by the Functions host at startup

use super::keys::RecognizedKey;
use super::{ENABLE_WORKER_EXTENSIONS, MODEL_NAME, SECRET_STORAGE_TYPE, WORKER_RUNTIME};
use crate::core::error::DomainError;
use crate::env::value_set::EnvValueSet;
use serde::{Deserialize, Serialize};

/// `local.settings.json` (Entity)
///
/// Serialization order is the field order below, so rendering the same
/// document twice yields identical bytes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalSettings {
    #[serde(rename = "IsEncrypted", default)]
    pub is_encrypted: bool,
    #[serde(rename = "Values", default)]
    pub values: SettingsValues,
}

/// The `Values` table of [`LocalSettings`]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SettingsValues {
    #[serde(rename = "AzureWebJobsSecretStorageType")]
    pub secret_storage_type: String,
    #[serde(rename = "FUNCTIONS_WORKER_RUNTIME")]
    pub worker_runtime: String,
    #[serde(rename = "PYTHON_ENABLE_WORKER_EXTENSIONS")]
    pub enable_worker_extensions: String,
    #[serde(rename = "COSMOSDB_DATABASE_NAME")]
    pub database_name: String,
    #[serde(rename = "COSMOSDB_CONTAINER_NAME")]
    pub container_name: String,
    #[serde(rename = "OPENAI_MODEL_NAME")]
    pub model_name: String,
    #[serde(rename = "COSMOS_ENDPOINT")]
    pub cosmos_endpoint: String,
    #[serde(rename = "AZURE_OPENAI_ENDPOINT")]
    pub openai_endpoint: String,
}

impl LocalSettings {
    /// Build the document from a value set
    ///
    /// Recognized keys are copied verbatim; absent keys become empty strings.
    /// Every other field is a fixed literal.
    pub fn from_env_values(env: &EnvValueSet) -> Self {
        let extract = |key: RecognizedKey| env.get(key.as_str()).unwrap_or_default().to_string();

        Self {
            is_encrypted: false,
            values: SettingsValues {
                secret_storage_type: SECRET_STORAGE_TYPE.to_string(),
                worker_runtime: WORKER_RUNTIME.to_string(),
                enable_worker_extensions: ENABLE_WORKER_EXTENSIONS.to_string(),
                database_name: extract(RecognizedKey::DatabaseName),
                container_name: extract(RecognizedKey::ContainerName),
                model_name: MODEL_NAME.to_string(),
                cosmos_endpoint: extract(RecognizedKey::CosmosEndpoint),
                openai_endpoint: extract(RecognizedKey::OpenAiEndpoint),
            },
        }
    }

    /// Value stored for a recognized key
    pub fn value(&self, key: RecognizedKey) -> &str {
        match key {
            RecognizedKey::CosmosEndpoint => &self.values.cosmos_endpoint,
            RecognizedKey::OpenAiEndpoint => &self.values.openai_endpoint,
            RecognizedKey::DatabaseName => &self.values.database_name,
            RecognizedKey::ContainerName => &self.values.container_name,
        }
    }

    /// Render as pretty JSON with a trailing newline
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        let mut json = serde_json::to_string_pretty(self)?;
        json.push('\n');
        Ok(json)
    }

    /// Parse a document previously written to disk
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }
}

/// Recognized keys absent from the value set, in extraction order
pub fn missing_keys(env: &EnvValueSet) -> Vec<RecognizedKey> {
    RecognizedKey::ALL
        .into_iter()
        .filter(|key| !env.contains(key.as_str()))
        .collect()
}

/// Fail unless every recognized key is present
pub fn require_all_keys(env: &EnvValueSet) -> Result<(), DomainError> {
    let missing = missing_keys(env);
    if missing.is_empty() {
        Ok(())
    } else {
        Err(DomainError::MissingKeys(
            missing.iter().map(|k| k.as_str().to_string()).collect(),
        ))
    }
}
