//! CLI entrypoint for materialize-settings
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, anyhow, bail};
use clap::Parser;
use materializer_application::{
    CheckSettingsUseCase, EnvValueSource, MaterializeInput, MaterializeProgressNotifier,
    MaterializeSettingsUseCase, NoMaterializeProgress, SettingsStore,
};
use materializer_infrastructure::{
    AzdEnvValueSource, ConfigLoader, DumpFileEnvValueSource, FileConfig, FileSourceConfig,
    JsonFileSettingsStore,
};
use materializer_presentation::{Cli, ConsoleFormatter, ProgressReporter, SimpleProgress};
use std::io::IsTerminal;
use std::sync::Arc;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if cli.show_config {
        print!("{}", ConfigLoader::describe_config_sources());
        return Ok(());
    }

    let config = load_config(&cli)?;
    debug!("Effective configuration: {:?}", config);

    // === Dependency Injection ===
    let store: Arc<dyn SettingsStore> = Arc::new(JsonFileSettingsStore::new(&config.output.path));

    if cli.check {
        let report = CheckSettingsUseCase::new(store).execute()?;
        print!("{}", ConsoleFormatter::format_check(&report));
        if !report.outcome.is_ready() {
            bail!("{} is not ready for the runtime", report.path.display());
        }
        return Ok(());
    }

    let source = build_source(&config.source);
    debug!("Reading values from {}", source.describe());

    let input = MaterializeInput::new()
        .with_require_all_keys(config.behavior.require_all_keys)
        .with_dry_run(cli.dry_run);

    let progress: Box<dyn MaterializeProgressNotifier> = if cli.quiet {
        Box::new(NoMaterializeProgress)
    } else if std::io::stderr().is_terminal() {
        Box::new(ProgressReporter::new())
    } else {
        Box::new(SimpleProgress)
    };

    info!("Materializing {}", config.output.path.display());
    let use_case = MaterializeSettingsUseCase::new(source, store);
    let output = use_case
        .execute_with_progress(input, progress.as_ref())
        .await?;

    if output.written {
        if !cli.quiet {
            print!("{}", ConsoleFormatter::format_materialize(&output));
        }
    } else {
        // Keep stdout to the document so it can be redirected
        print!("{}", output.rendered);
        if !cli.quiet {
            eprint!("{}", ConsoleFormatter::format_materialize(&output));
        }
    }

    Ok(())
}

/// Load file configuration and apply command-line overrides
fn load_config(cli: &Cli) -> Result<FileConfig> {
    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_deref())
            .map_err(|e| anyhow!("Failed to load configuration: {}", e))?
    };

    let config = apply_overrides(cli, config);
    config.validate().context("Invalid configuration")?;
    Ok(config)
}

/// Command-line flags win over file config; `--require-all` can only turn
/// the strict mode on
fn apply_overrides(cli: &Cli, mut config: FileConfig) -> FileConfig {
    if let Some(environment) = &cli.environment {
        config.source.environment = Some(environment.clone());
    }
    if let Some(path) = &cli.from_file {
        config.source.dump_file = Some(path.clone());
    }
    if let Some(path) = &cli.output {
        config.output.path = path.clone();
    }
    if cli.require_all {
        config.behavior.require_all_keys = true;
    }
    config
}

/// A captured dump replaces the provisioning tool
fn build_source(config: &FileSourceConfig) -> Arc<dyn EnvValueSource> {
    match &config.dump_file {
        Some(path) => Arc::new(DumpFileEnvValueSource::new(path)),
        None => Arc::new(AzdEnvValueSource::from_config(config)),
    }
}
