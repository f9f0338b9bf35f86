//! Environment value sources
//!
//! Adapters implementing [`EnvValueSource`](materializer_application::EnvValueSource):
//!
//! - [`AzdEnvValueSource`] — runs the provisioning tool and parses its dump
//! - [`DumpFileEnvValueSource`] — reads a previously captured dump
//!
//! Both feed the same [`parse_value_dump`] so the shell and PowerShell
//! renderings of the dump are handled by one parser.

mod azd;
mod dump_file;
mod value_dump;

pub use azd::AzdEnvValueSource;
pub use dump_file::DumpFileEnvValueSource;
pub use value_dump::parse_value_dump;
