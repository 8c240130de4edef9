//! Model configuration from TOML (`[models]` section)

use serde::{Deserialize, Serialize};
use symposium_domain::Model;

/// Model configuration from TOML
///
/// ```toml
/// [models]
/// base = "gpt-4o-mini"   # shared by the moderator and both speakers
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileModelsConfig {
    /// Base model for every persona
    pub base: Model,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_model_is_custom() {
        let config: FileModelsConfig = toml::from_str(r#"base = "o3-mini""#).unwrap();
        assert_eq!(config.base, Model::Custom("o3-mini".to_string()));
    }
}
