//! Runtime view of a settings document
//!
//! The Functions app reads its connection settings from the environment the
//! host builds out of `local.settings.json`. An empty endpoint stops the
//! runtime; a whitespace-only one is passed through like any other value.
//! Names that are blank fall back to the runtime defaults, since a generated
//! document always carries the key even when the value dump lacked it.

use super::document::LocalSettings;
use super::keys::RecognizedKey;
use crate::core::error::DomainError;

pub const DEFAULT_DATABASE_NAME: &str = "medicaldata";
pub const DEFAULT_CONTAINER_NAME: &str = "medical_records";
pub const DEFAULT_API_VERSION: &str = "2024-02-15-preview";
pub const DEFAULT_RUNTIME_MODEL: &str = "gpt-4";

/// Connection settings as the runtime resolves them at startup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeSettings {
    pub cosmos_endpoint: String,
    pub openai_endpoint: String,
    pub database_name: String,
    pub container_name: String,
    pub model_name: String,
    pub api_version: String,
    /// Settings that were blank and replaced by their default
    pub defaulted: Vec<String>,
}

impl RuntimeSettings {
    /// Resolve a document, collecting every problem instead of stopping at the first
    pub fn resolve(doc: &LocalSettings) -> Result<Self, Vec<DomainError>> {
        let mut errors = Vec::new();
        let mut defaulted = Vec::new();

        for key in RecognizedKey::ALL.into_iter().filter(RecognizedKey::is_endpoint) {
            if doc.value(key).is_empty() {
                errors.push(DomainError::EmptySetting(key.as_str().to_string()));
            }
        }

        let mut or_default = |name: &str, value: &str, default: &str| {
            if value.trim().is_empty() {
                defaulted.push(name.to_string());
                default.to_string()
            } else {
                value.to_string()
            }
        };
        let database_name = or_default(
            RecognizedKey::DatabaseName.as_str(),
            &doc.values.database_name,
            DEFAULT_DATABASE_NAME,
        );
        let container_name = or_default(
            RecognizedKey::ContainerName.as_str(),
            &doc.values.container_name,
            DEFAULT_CONTAINER_NAME,
        );
        let model_name = or_default(
            "OPENAI_MODEL_NAME",
            &doc.values.model_name,
            DEFAULT_RUNTIME_MODEL,
        );

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(Self {
            cosmos_endpoint: doc.values.cosmos_endpoint.clone(),
            openai_endpoint: doc.values.openai_endpoint.clone(),
            database_name,
            container_name,
            model_name,
            api_version: DEFAULT_API_VERSION.to_string(),
            defaulted,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::value_set::EnvValueSet;

    fn doc_from(pairs: &[(&str, &str)]) -> LocalSettings {
        let env: EnvValueSet = pairs.iter().copied().collect();
        LocalSettings::from_env_values(&env)
    }

    #[test]
    fn test_resolve_complete_document() {
        let doc = doc_from(&[
            ("COSMOS_ENDPOINT", "https://x.documents.azure.com:443/"),
            ("AZURE_OPENAI_ENDPOINT", "https://y.openai.azure.com/"),
            ("COSMOSDB_DATABASE_NAME", "clinical"),
            ("COSMOSDB_CONTAINER_NAME", "visits"),
        ]);
        let settings = RuntimeSettings::resolve(&doc).unwrap();
        assert_eq!(settings.database_name, "clinical");
        assert_eq!(settings.container_name, "visits");
        assert_eq!(settings.model_name, "gpt-4o");
        assert_eq!(settings.api_version, DEFAULT_API_VERSION);
        assert!(settings.defaulted.is_empty());
    }

    #[test]
    fn test_blank_names_fall_back_to_defaults() {
        let doc = doc_from(&[
            ("COSMOS_ENDPOINT", "https://x/"),
            ("AZURE_OPENAI_ENDPOINT", "https://y/"),
        ]);
        let settings = RuntimeSettings::resolve(&doc).unwrap();
        assert_eq!(settings.database_name, DEFAULT_DATABASE_NAME);
        assert_eq!(settings.container_name, DEFAULT_CONTAINER_NAME);
        assert_eq!(
            settings.defaulted,
            vec!["COSMOSDB_DATABASE_NAME", "COSMOSDB_CONTAINER_NAME"]
        );
    }

    #[test]
    fn test_blank_model_uses_runtime_default() {
        let mut doc = doc_from(&[
            ("COSMOS_ENDPOINT", "https://x/"),
            ("AZURE_OPENAI_ENDPOINT", "https://y/"),
        ]);
        doc.values.model_name.clear();
        let settings = RuntimeSettings::resolve(&doc).unwrap();
        assert_eq!(settings.model_name, DEFAULT_RUNTIME_MODEL);
    }

    #[test]
    fn test_blank_endpoints_are_all_reported() {
        let errors = RuntimeSettings::resolve(&doc_from(&[])).unwrap_err();
        assert_eq!(
            errors,
            vec![
                DomainError::EmptySetting("COSMOS_ENDPOINT".to_string()),
                DomainError::EmptySetting("AZURE_OPENAI_ENDPOINT".to_string()),
            ]
        );
    }

    #[test]
    fn test_whitespace_endpoint_is_passed_through() {
        let doc = doc_from(&[
            ("COSMOS_ENDPOINT", "   "),
            ("AZURE_OPENAI_ENDPOINT", "https://y/"),
        ]);
        let settings = RuntimeSettings::resolve(&doc).unwrap();
        assert_eq!(settings.cosmos_endpoint, "   ");
    }

    #[test]
    fn test_only_empty_endpoint_is_reported() {
        let doc = doc_from(&[
            ("COSMOS_ENDPOINT", "https://x/"),
            ("AZURE_OPENAI_ENDPOINT", ""),
        ]);
        let errors = RuntimeSettings::resolve(&doc).unwrap_err();
        assert_eq!(
            errors,
            vec![DomainError::EmptySetting("AZURE_OPENAI_ENDPOINT".to_string())]
        );
    }
}
