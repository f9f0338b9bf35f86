//! Console output for materialize and check results

use colored::Colorize;
use materializer_application::{CheckOutcome, CheckReport, MaterializeOutput};

/// Formats use case results for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Summary of a materialize run
    pub fn format_materialize(output: &MaterializeOutput) -> String {
        let mut out = String::new();

        if output.written {
            out.push_str(&format!(
                "{} {}\n",
                "Wrote".green().bold(),
                output.path.display()
            ));
        } else {
            out.push_str(&format!(
                "{} {} (dry run)\n",
                "Would write".yellow().bold(),
                output.path.display()
            ));
        }

        if !output.missing_keys.is_empty() {
            out.push_str(&format!(
                "{} missing from environment values, written empty:\n",
                "Warning:".yellow().bold()
            ));
            for key in &output.missing_keys {
                out.push_str(&format!("  - {}\n", key));
            }
        }

        out
    }

    /// Summary of a settings check
    pub fn format_check(report: &CheckReport) -> String {
        let mut out = String::new();
        out.push_str(&format!(
            "{} {}\n",
            "Settings:".cyan().bold(),
            report.path.display()
        ));

        match &report.outcome {
            CheckOutcome::Ready(resolved) => {
                out.push_str(&format!("{}\n", "Ready".green().bold()));
                out.push_str(&format!("  Cosmos endpoint:  {}\n", resolved.cosmos_endpoint));
                out.push_str(&format!("  OpenAI endpoint:  {}\n", resolved.openai_endpoint));
                out.push_str(&format!("  Database:         {}\n", resolved.database_name));
                out.push_str(&format!("  Container:        {}\n", resolved.container_name));
                out.push_str(&format!("  Model:            {}\n", resolved.model_name));
                out.push_str(&format!("  API version:      {}\n", resolved.api_version));
                for name in &resolved.defaulted {
                    out.push_str(&format!(
                        "  {} {} is blank, runtime default used\n",
                        "note:".dimmed(),
                        name
                    ));
                }
            }
            CheckOutcome::Incomplete(errors) => {
                out.push_str(&format!("{}\n", "Incomplete".red().bold()));
                for error in errors {
                    out.push_str(&format!("  - {}\n", error));
                }
            }
        }

        out
    }
}
