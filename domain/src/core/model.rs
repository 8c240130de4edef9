//! Model value object representing a chat-completion model

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Chat models a persona can run on (Value Object)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Model {
    Gpt4oMini,
    Gpt4o,
    Gpt41,
    Gpt41Mini,
    // Custom
    Custom(String),
}

impl Model {
    /// Get the string identifier for this model
    pub fn as_str(&self) -> &str {
        match self {
            Model::Gpt4oMini => "gpt-4o-mini",
            Model::Gpt4o => "gpt-4o",
            Model::Gpt41 => "gpt-4.1",
            Model::Gpt41Mini => "gpt-4.1-mini",
            Model::Custom(s) => s,
        }
    }
}

impl Default for Model {
    /// Returns the default model (gpt-4o-mini)
    fn default() -> Self {
        Model::Gpt4oMini
    }
}

impl std::fmt::Display for Model {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Model {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(match s {
            "gpt-4o-mini" => Model::Gpt4oMini,
            "gpt-4o" => Model::Gpt4o,
            "gpt-4.1" => Model::Gpt41,
            "gpt-4.1-mini" => Model::Gpt41Mini,
            other => Model::Custom(other.to_string()),
        })
    }
}

impl Serialize for Model {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Model {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        let Ok(model) = s.parse::<Model>();
        Ok(model)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_model() {
        assert_eq!(Model::default(), Model::Gpt4oMini);
        assert_eq!(Model::default().as_str(), "gpt-4o-mini");
    }

    #[test]
    fn test_parse_known_and_custom() {
        assert_eq!("gpt-4o".parse::<Model>().unwrap(), Model::Gpt4o);
        assert_eq!(
            "llama3.1:8b".parse::<Model>().unwrap(),
            Model::Custom("llama3.1:8b".to_string())
        );
    }

    #[test]
    fn test_serde_as_identifier() {
        let json = serde_json::to_string(&Model::Gpt41).unwrap();
        assert_eq!(json, "\"gpt-4.1\"");

        let model: Model = serde_json::from_str("\"gpt-4.1-mini\"").unwrap();
        assert_eq!(model, Model::Gpt41Mini);
    }
}
