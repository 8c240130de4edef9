//! Configuration file loader with multi-source merging

use super::file_config::FileConfig;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::path::{Path, PathBuf};

const PROJECT_FILES: [&str; 2] = ["symposium.toml", ".symposium.toml"];

/// Configuration loader that handles file discovery and merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources with proper priority
    ///
    /// Priority (highest to lowest):
    /// 1. Environment: `SYMPOSIUM_<SECTION>__<KEY>`
    /// 2. Explicit config path (if provided)
    /// 3. Project root: `./symposium.toml` or `./.symposium.toml`
    /// 4. Global: `$XDG_CONFIG_HOME/symposium/config.toml`
    /// 5. Default values
    ///
    /// Command-line flags are applied on top by the caller.
    pub fn load(config_path: Option<&Path>) -> Result<FileConfig, Box<figment::Error>> {
        Self::figment(config_path).extract().map_err(Box::new)
    }

    fn figment(config_path: Option<&Path>) -> Figment {
        Self::layered(Self::global_config_path(), config_path)
    }

    /// Defaults, then each file that exists, then the environment
    fn layered(global_path: Option<PathBuf>, config_path: Option<&Path>) -> Figment {
        let mut figment = Figment::new().merge(Serialized::defaults(FileConfig::default()));

        if let Some(path) = global_path.filter(|path| path.exists()) {
            figment = figment.merge(Toml::file(path));
        }

        if let Some(path) = Self::project_config_path() {
            figment = figment.merge(Toml::file(path));
        }

        if let Some(path) = config_path {
            figment = figment.merge(Toml::file(path));
        }

        figment.merge(Env::prefixed("SYMPOSIUM_").split("__"))
    }

    /// Load only default configuration (for --no-config)
    pub fn load_defaults() -> FileConfig {
        FileConfig::default()
    }

    /// Get the global config file path
    ///
    /// Returns XDG_CONFIG_HOME/symposium/config.toml if set,
    /// otherwise falls back to ~/.config/symposium/config.toml
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("symposium").join("config.toml"))
    }

    /// Get the project-level config file path (if it exists)
    pub fn project_config_path() -> Option<PathBuf> {
        PROJECT_FILES
            .iter()
            .map(PathBuf::from)
            .find(|path| path.exists())
    }

    /// Print the config file locations being used (for --show-config)
    pub fn print_config_sources(config_path: Option<&Path>) {
        println!("Configuration sources (in priority order):");
        println!("  [ENV  ] Environment: SYMPOSIUM_<SECTION>__<KEY>");

        if let Some(path) = config_path {
            let mark = if path.exists() { "FOUND" } else { "MISSING" };
            println!("  [{mark:<5}] Explicit: {}", path.display());
        }

        if let Some(path) = Self::project_config_path() {
            println!("  [FOUND] Project: {}", path.display());
        } else {
            println!("  [     ] Project: ./symposium.toml or ./.symposium.toml");
        }

        if let Some(path) = Self::global_config_path() {
            if path.exists() {
                println!("  [FOUND] Global:  {}", path.display());
            } else {
                println!("  [     ] Global:  {}", path.display());
            }
        }

        println!("  [     ] Default: built-in defaults");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;
    use symposium_domain::Model;

    const FILE: &str = r#"
[debate]
topic = "Nuclear power"
max_turns = 3

[models]
base = "gpt-4.1-mini"
"#;

    #[test]
    fn test_load_defaults() {
        let config = ConfigLoader::load_defaults();
        assert!(config.debate.topic.is_none());
        assert_eq!(config.debate.max_turns, 10);
        assert!(config.output.color);
    }

    #[test]
    fn test_global_config_path_returns_some() {
        // Should return a path (even if file doesn't exist)
        let path = ConfigLoader::global_config_path();
        assert!(path.is_some());
        let path = path.unwrap();
        assert!(path.to_string_lossy().contains("symposium"));
    }

    #[test]
    fn test_explicit_file_overrides_defaults() {
        Jail::expect_with(|jail| {
            jail.clear_env();
            jail.create_file("debate.toml", FILE)?;

            let config: FileConfig =
                ConfigLoader::layered(None, Some(Path::new("debate.toml"))).extract()?;
            assert_eq!(config.debate.topic.as_deref(), Some("Nuclear power"));
            assert_eq!(config.debate.max_turns, 3);
            assert_eq!(config.models.base, Model::Gpt41Mini);
            // Untouched keys keep their defaults
            assert_eq!(config.debate.style, "structured");
            Ok(())
        });
    }

    #[test]
    fn test_precedence_of_sources() {
        Jail::expect_with(|jail| {
            jail.clear_env();
            jail.create_file("global.toml", "[debate]\nstyle = \"socratic\"\nmax_turns = 7")?;
            jail.create_file("symposium.toml", "[debate]\nmax_turns = 5\ntopic = \"Project\"")?;
            jail.create_file("debate.toml", FILE)?;
            jail.set_env("SYMPOSIUM_DEBATE__TOPIC", "From env");

            let config: FileConfig = ConfigLoader::layered(
                Some(PathBuf::from("global.toml")),
                Some(Path::new("debate.toml")),
            )
            .extract()?;
            assert_eq!(config.debate.topic.as_deref(), Some("From env"));
            assert_eq!(config.debate.max_turns, 3);
            assert_eq!(config.debate.style, "socratic");
            Ok(())
        });
    }

    #[test]
    fn test_missing_global_file_is_skipped() {
        Jail::expect_with(|jail| {
            jail.clear_env();
            let config: FileConfig =
                ConfigLoader::layered(Some(PathBuf::from("absent.toml")), None).extract()?;
            assert_eq!(config.debate.max_turns, 10);
            Ok(())
        });
    }

    #[test]
    fn test_invalid_file_is_an_error() {
        Jail::expect_with(|jail| {
            jail.clear_env();
            jail.create_file("debate.toml", "[debate]\nmax_turns = \"many\"")?;
            let result: Result<FileConfig, _> =
                ConfigLoader::layered(None, Some(Path::new("debate.toml"))).extract();
            assert!(result.is_err());
            Ok(())
        });
    }
}
