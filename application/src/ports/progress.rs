//! Progress notification port
//!
//! Defines the interface for reporting progress while materializing settings.

use materializer_domain::RecognizedKey;
use std::path::Path;

/// Callback for progress updates during a materialize run
///
/// Implementations live in the presentation layer. All methods default to
/// no-ops so implementors only override what they display.
pub trait MaterializeProgressNotifier: Send + Sync {
    /// Called before the value source is queried
    fn on_query_start(&self, _source: &str) {}

    /// Called once the value set has been received
    fn on_query_complete(&self, _value_count: usize) {}

    /// Called when the value source could not be queried
    fn on_query_failed(&self, _error: &str) {}

    /// Called for each recognized key absent from the value set
    fn on_missing_key(&self, _key: RecognizedKey) {}

    /// Called after the document has been written
    fn on_written(&self, _path: &Path) {}
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoMaterializeProgress;

impl MaterializeProgressNotifier for NoMaterializeProgress {}
