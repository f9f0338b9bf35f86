//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Missing recognized keys in value dump: {}", .0.join(", "))]
    MissingKeys(Vec<String>),

    #[error("Required setting {0} is empty")]
    EmptySetting(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_keys_display() {
        let error = DomainError::MissingKeys(vec![
            "COSMOS_ENDPOINT".to_string(),
            "AZURE_OPENAI_ENDPOINT".to_string(),
        ]);
        assert_eq!(
            error.to_string(),
            "Missing recognized keys in value dump: COSMOS_ENDPOINT, AZURE_OPENAI_ENDPOINT"
        );
    }

    #[test]
    fn test_empty_setting_display() {
        let error = DomainError::EmptySetting("COSMOS_ENDPOINT".to_string());
        assert_eq!(error.to_string(), "Required setting COSMOS_ENDPOINT is empty");
    }
}
