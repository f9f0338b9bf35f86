//! Local runtime settings
//!
//! - [`keys::RecognizedKey`] — the four keys extracted from a value dump
//! - [`document::LocalSettings`] — the `local.settings.json` document
//! - [`runtime::RuntimeSettings`] — the document as the runtime resolves it

pub mod document;
pub mod keys;
pub mod runtime;

/// Secret storage backend written for the Functions host
pub const SECRET_STORAGE_TYPE: &str = "files";

/// Worker runtime identifier
pub const WORKER_RUNTIME: &str = "python";

/// Feature flag string enabling Python worker extensions
pub const ENABLE_WORKER_EXTENSIONS: &str = "True";

/// Model name written into every generated document
pub const MODEL_NAME: &str = "gpt-4o";
