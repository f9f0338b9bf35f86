//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure adapters must implement.

pub mod env_source;
pub mod progress;
pub mod settings_store;
