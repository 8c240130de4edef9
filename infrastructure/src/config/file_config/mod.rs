//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod debate;
mod logging;
mod models;
mod output;
mod providers;

pub use debate::FileDebateConfig;
pub use logging::FileLoggingConfig;
pub use models::FileModelsConfig;
pub use output::{FileOutputConfig, FileOutputFormat};
pub use providers::FileProviderConfig;

use serde::{Deserialize, Serialize};
use symposium_domain::DomainError;
use thiserror::Error;

/// Configuration validation errors
#[derive(Debug, Error)]
pub enum ConfigValidationError {
    #[error("{0} is required (set it in the config file or on the command line)")]
    MissingField(&'static str),

    #[error("provider.{0} cannot be empty")]
    EmptyProviderField(&'static str),

    #[error("provider.temperature must be between 0.0 and 2.0, got {0}")]
    InvalidTemperature(f32),

    #[error("provider.max_tokens cannot be 0")]
    InvalidMaxTokens,

    #[error(transparent)]
    Debate(#[from] DomainError),
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Debate settings
    pub debate: FileDebateConfig,
    /// Model selection
    pub models: FileModelsConfig,
    /// Chat-completion provider settings
    pub provider: FileProviderConfig,
    /// Output settings
    pub output: FileOutputConfig,
    /// Log file locations
    pub logging: FileLoggingConfig,
}

impl FileConfig {
    /// Validate the settings that do not depend on the debate itself.
    ///
    /// Debate fields are validated when converted with
    /// [`FileDebateConfig::to_debate_config`], since the topic and positions
    /// usually arrive from the command line.
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        self.provider.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use symposium_domain::{Model, OutputFormat};

    #[test]
    fn test_deserialize_full_config() {
        let toml_str = r#"
[debate]
topic = "Remote work"
pro_position = "Boosts productivity"
con_position = "Erodes collaboration"
max_turns = 6
style = "casual"

[models]
base = "gpt-4o"

[provider]
api_key_env = "MY_KEY"
base_url = "http://localhost:8080"
temperature = 0.3

[output]
format = "json"
color = false

[logging]
debug_log_dir = "logs"
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.debate.topic.as_deref(), Some("Remote work"));
        assert_eq!(config.debate.max_turns, 6);
        assert_eq!(config.debate.style, "casual");
        assert_eq!(config.models.base, Model::Gpt4o);
        assert_eq!(config.provider.api_key_env, "MY_KEY");
        assert_eq!(config.provider.temperature, Some(0.3));
        assert_eq!(config.output.format, Some(OutputFormat::Json));
        assert!(!config.output.color);
        assert_eq!(
            config.logging.debug_log_dir.as_deref(),
            Some(std::path::Path::new("logs"))
        );
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_deserialize_partial_config() {
        let toml_str = r#"
[models]
base = "gpt-4.1"
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.models.base, Model::Gpt41);
        // Defaults should apply
        assert!(config.debate.topic.is_none());
        assert_eq!(config.debate.max_turns, 10);
        assert_eq!(config.provider.api_key_env, "OPENAI_API_KEY");
        assert!(config.output.color);
        assert!(config.output.show_progress);
    }

    #[test]
    fn test_default_config() {
        let config = FileConfig::default();
        assert_eq!(config.models.base, Model::Gpt4oMini);
        assert_eq!(config.debate.style, "structured");
        assert_eq!(config.debate.time_per_turn, 300);
        assert!(config.logging.transcript_dir.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_provider() {
        let mut config = FileConfig::default();
        config.provider.temperature = Some(3.5);
        assert!(matches!(
            config.validate(),
            Err(ConfigValidationError::InvalidTemperature(_))
        ));
    }
}
