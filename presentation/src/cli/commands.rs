//! CLI command definitions

use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for materialize-settings
#[derive(Parser, Debug)]
#[command(name = "materialize-settings")]
#[command(author, version, about = "Write local.settings.json from deployed environment values")]
#[command(long_about = r#"
Queries the provisioning tool for the values of the deployed environment and
writes the local runtime settings document from them.

Run without arguments to query `azd env get-values` and overwrite
src/local.settings.json.

Configuration files are loaded from (in priority order):
1. MATERIALIZER_* environment variables
2. --config <path>     Explicit config file
3. ./materializer.toml Project-level config
4. ~/.config/materialize-settings/config.toml   Global config

Example:
  materialize-settings
  materialize-settings -e staging
  materialize-settings --from-file values.env --dry-run
  materialize-settings --check
"#)]
pub struct Cli {
    /// Environment to query (passed to the provisioning tool as --environment)
    #[arg(short, long, value_name = "NAME")]
    pub environment: Option<String>,

    /// Read a captured value dump instead of running the provisioning tool
    #[arg(long, value_name = "PATH")]
    pub from_file: Option<PathBuf>,

    /// Path of the settings document to write
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Fail if any recognized key is missing instead of writing it empty
    #[arg(long)]
    pub require_all: bool,

    /// Print the document to stdout without writing it
    #[arg(long)]
    pub dry_run: bool,

    /// Check the existing settings document instead of regenerating it
    #[arg(long, conflicts_with_all = ["dry_run", "require_all", "from_file", "environment"])]
    pub check: bool,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_arguments() {
        let cli = Cli::try_parse_from(["materialize-settings"]).unwrap();
        assert!(cli.environment.is_none());
        assert!(cli.output.is_none());
        assert!(!cli.require_all);
        assert!(!cli.dry_run);
        assert!(!cli.check);
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn test_flags() {
        let cli = Cli::try_parse_from([
            "materialize-settings",
            "-e",
            "dev",
            "-o",
            "app/local.settings.json",
            "--require-all",
            "-vv",
        ])
        .unwrap();
        assert_eq!(cli.environment.as_deref(), Some("dev"));
        assert_eq!(cli.output, Some(PathBuf::from("app/local.settings.json")));
        assert!(cli.require_all);
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_check_conflicts_with_dry_run() {
        assert!(Cli::try_parse_from(["materialize-settings", "--check", "--dry-run"]).is_err());
    }

    #[test]
    fn test_command_definition() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
