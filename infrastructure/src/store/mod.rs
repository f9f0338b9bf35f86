//! Settings document storage

mod json_file;

pub use json_file::JsonFileSettingsStore;
