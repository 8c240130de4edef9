//! Configuration file loading for symposium
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. Environment variables prefixed with `SYMPOSIUM_`
//! 2. `--config <path>` specified file
//! 3. Project root: `./symposium.toml` or `./.symposium.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/symposium/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, FileConfig, FileDebateConfig, FileLoggingConfig, FileModelsConfig,
    FileOutputConfig, FileOutputFormat, FileProviderConfig,
};
pub use loader::ConfigLoader;
