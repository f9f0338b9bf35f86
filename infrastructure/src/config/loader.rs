//! Configuration file loader with multi-source merging

use super::file_config::FileConfig;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::path::{Path, PathBuf};

const PROJECT_CONFIG_FILES: [&str; 2] = ["materializer.toml", ".materializer.toml"];
const ENV_PREFIX: &str = "MATERIALIZER_";

/// Configuration loader that handles file discovery and merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources with proper priority
    ///
    /// Priority (highest to lowest):
    /// 1. `MATERIALIZER_*` environment variables (`__` separates sections)
    /// 2. Explicit config path (if provided)
    /// 3. Project root: `./materializer.toml` or `./.materializer.toml`
    /// 4. XDG config: `$XDG_CONFIG_HOME/materialize-settings/config.toml`
    /// 5. Default values
    ///
    /// Global and project files are optional; an explicit path that does not
    /// exist is an error.
    pub fn load(config_path: Option<&Path>) -> Result<FileConfig, Box<figment::Error>> {
        let mut figment = Figment::new().merge(Serialized::defaults(FileConfig::default()));

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(&global_path));
            }
        }

        if let Some(project_path) = Self::project_config_path() {
            figment = figment.merge(Toml::file(&project_path));
        }

        if let Some(path) = config_path {
            if !path.is_file() {
                return Err(Box::new(figment::Error::from(format!(
                    "Config file not found: {}",
                    path.display()
                ))));
            }
            figment = figment.merge(Toml::file(path));
        }

        figment = figment.merge(Env::prefixed(ENV_PREFIX).split("__"));

        figment.extract().map_err(Box::new)
    }

    /// Load only default configuration (for --no-config)
    pub fn load_defaults() -> FileConfig {
        FileConfig::default()
    }

    /// Get the global config file path
    ///
    /// Returns `$XDG_CONFIG_HOME/materialize-settings/config.toml` if set,
    /// otherwise the platform config directory equivalent.
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("materialize-settings").join("config.toml"))
    }

    /// Get the project-level config file path (if it exists)
    pub fn project_config_path() -> Option<PathBuf> {
        PROJECT_CONFIG_FILES
            .iter()
            .map(PathBuf::from)
            .find(|path| path.exists())
    }

    /// Describe the config file locations being used (for --show-config)
    pub fn describe_config_sources() -> String {
        let mut out = String::from("Configuration sources (in priority order):\n");

        out.push_str(&format!("  [     ] Env:     {}*\n", ENV_PREFIX));

        if let Some(path) = Self::project_config_path() {
            out.push_str(&format!("  [FOUND] Project: {}\n", path.display()));
        } else {
            out.push_str("  [     ] Project: ./materializer.toml or ./.materializer.toml\n");
        }

        if let Some(path) = Self::global_config_path() {
            let mark = if path.exists() { "FOUND" } else { "     " };
            out.push_str(&format!("  [{}] Global:  {}\n", mark, path.display()));
        }

        out.push_str("  [     ] Default: built-in defaults\n");
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;

    #[test]
    fn test_load_defaults() {
        let config = ConfigLoader::load_defaults();
        assert_eq!(config.source.program, "azd");
        assert!(!config.behavior.require_all_keys);
    }

    #[test]
    fn test_global_config_path_returns_some() {
        let path = ConfigLoader::global_config_path();
        assert!(path.is_some());
        let path = path.unwrap();
        assert!(path.to_string_lossy().contains("materialize-settings"));
    }

    #[test]
    fn test_project_file_then_explicit_then_env() {
        Jail::expect_with(|jail| {
            jail.create_file(
                "materializer.toml",
                r#"
[source]
environment = "dev"
timeout_secs = 10

[output]
path = "project.json"
"#,
            )?;
            jail.create_file(
                "override.toml",
                r#"
[output]
path = "explicit.json"
"#,
            )?;
            jail.set_env("MATERIALIZER_SOURCE__ENVIRONMENT", "prod");

            let config = ConfigLoader::load(Some(Path::new("override.toml"))).map_err(|e| *e)?;
            assert_eq!(config.source.environment, Some("prod".to_string()));
            assert_eq!(config.source.timeout_secs, 10);
            assert_eq!(config.output.path, PathBuf::from("explicit.json"));
            assert_eq!(config.source.program, "azd");
            Ok(())
        });
    }

    #[test]
    fn test_missing_explicit_config_is_an_error() {
        Jail::expect_with(|_jail| {
            let err = ConfigLoader::load(Some(Path::new("does-not-exist.toml")))
                .expect_err("missing --config file must not be ignored");
            assert!(err.to_string().contains("does-not-exist.toml"));
            Ok(())
        });
    }

    #[test]
    fn test_hidden_project_file_is_found() {
        Jail::expect_with(|jail| {
            jail.create_file(
                ".materializer.toml",
                r#"
[behavior]
require_all_keys = true
"#,
            )?;

            assert_eq!(
                ConfigLoader::project_config_path(),
                Some(PathBuf::from(".materializer.toml"))
            );
            let config = ConfigLoader::load(None).map_err(|e| *e)?;
            assert!(config.behavior.require_all_keys);
            Ok(())
        });
    }

    #[test]
    fn test_describe_config_sources_lists_defaults() {
        let text = ConfigLoader::describe_config_sources();
        assert!(text.contains("Default: built-in defaults"));
        assert!(text.contains("MATERIALIZER_"));
    }
}
