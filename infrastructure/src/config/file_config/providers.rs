//! Provider configuration from TOML (`[provider]` section)

use super::ConfigValidationError;
use serde::{Deserialize, Serialize};

/// OpenAI-compatible chat-completion provider configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileProviderConfig {
    /// Environment variable name for the API key (default: "OPENAI_API_KEY").
    pub api_key_env: String,
    /// Base URL of the API (can be pointed at any compatible server).
    pub base_url: String,
    /// Max tokens per response; provider default when unset.
    pub max_tokens: Option<u32>,
    /// Sampling temperature; provider default when unset.
    pub temperature: Option<f32>,
}

impl Default for FileProviderConfig {
    fn default() -> Self {
        Self {
            api_key_env: "OPENAI_API_KEY".to_string(),
            base_url: "https://api.openai.com".to_string(),
            max_tokens: None,
            temperature: None,
        }
    }
}

impl FileProviderConfig {
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.api_key_env.trim().is_empty() {
            return Err(ConfigValidationError::EmptyProviderField("api_key_env"));
        }
        if self.base_url.trim().is_empty() {
            return Err(ConfigValidationError::EmptyProviderField("base_url"));
        }
        if self.max_tokens == Some(0) {
            return Err(ConfigValidationError::InvalidMaxTokens);
        }
        match self.temperature {
            Some(t) if !(0.0..=2.0).contains(&t) => {
                Err(ConfigValidationError::InvalidTemperature(t))
            }
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = FileProviderConfig::default();
        assert_eq!(config.api_key_env, "OPENAI_API_KEY");
        assert_eq!(config.base_url, "https://api.openai.com");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate() {
        let config = FileProviderConfig {
            max_tokens: Some(0),
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigValidationError::InvalidMaxTokens)
        ));

        let config = FileProviderConfig {
            api_key_env: " ".to_string(),
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigValidationError::EmptyProviderField("api_key_env"))
        ));
    }
}
