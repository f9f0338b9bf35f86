//! Recognized value dump keys

use std::fmt;

/// A key the materializer extracts from the value dump
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecognizedKey {
    /// Endpoint of the document database account
    CosmosEndpoint,
    /// Endpoint of the completion service
    OpenAiEndpoint,
    /// Database name inside the account
    DatabaseName,
    /// Container name inside the database
    ContainerName,
}

impl RecognizedKey {
    /// All recognized keys, in extraction order
    pub const ALL: [RecognizedKey; 4] = [
        RecognizedKey::CosmosEndpoint,
        RecognizedKey::OpenAiEndpoint,
        RecognizedKey::DatabaseName,
        RecognizedKey::ContainerName,
    ];

    /// The exact key text as it appears in the dump and in the document
    pub fn as_str(&self) -> &'static str {
        match self {
            RecognizedKey::CosmosEndpoint => "COSMOS_ENDPOINT",
            RecognizedKey::OpenAiEndpoint => "AZURE_OPENAI_ENDPOINT",
            RecognizedKey::DatabaseName => "COSMOSDB_DATABASE_NAME",
            RecognizedKey::ContainerName => "COSMOSDB_CONTAINER_NAME",
        }
    }

    /// Whether the runtime refuses to start without this value
    pub fn is_endpoint(&self) -> bool {
        matches!(
            self,
            RecognizedKey::CosmosEndpoint | RecognizedKey::OpenAiEndpoint
        )
    }
}

impl fmt::Display for RecognizedKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
