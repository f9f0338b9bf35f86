//! Deployment environment values
//!
//! - [`value_set::EnvValueSet`] — key/value pairs reported by the provisioning tool

pub mod value_set;
