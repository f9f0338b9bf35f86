//! Progress reporting for a materialize run

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use materializer_application::MaterializeProgressNotifier;
use std::time::Duration;

/// Shows a spinner on stderr while the provisioning tool runs
pub struct ProgressReporter {
    spinner: ProgressBar,
}

impl ProgressReporter {
    pub fn new() -> Self {
        let spinner = ProgressBar::new_spinner();
        spinner.set_style(Self::spinner_style());
        Self { spinner }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {prefix:.bold} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl MaterializeProgressNotifier for ProgressReporter {
    fn on_query_start(&self, source: &str) {
        self.spinner.set_prefix("Querying");
        self.spinner.set_message(source.to_string());
        self.spinner.enable_steady_tick(Duration::from_millis(100));
    }

    fn on_query_complete(&self, value_count: usize) {
        self.spinner.finish_with_message(format!(
            "{} {} values",
            "✓".green(),
            value_count
        ));
    }

    fn on_query_failed(&self, _error: &str) {
        self.spinner.finish_and_clear();
    }
}

/// Plain-text progress for non-interactive output
pub struct SimpleProgress;

impl MaterializeProgressNotifier for SimpleProgress {
    fn on_query_start(&self, source: &str) {
        eprintln!("Querying {}...", source);
    }

    fn on_query_complete(&self, value_count: usize) {
        eprintln!("Received {} values", value_count);
    }
}
