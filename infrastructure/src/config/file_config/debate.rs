//! Debate configuration from TOML (`[debate]` section)

use super::ConfigValidationError;
use serde::{Deserialize, Serialize};
use symposium_domain::{DEFAULT_MAX_TURNS, DEFAULT_STYLE, DEFAULT_TIME_PER_TURN, DebateConfig};

/// Raw debate configuration from TOML
///
/// # Example
///
/// ```toml
/// [debate]
/// topic = "Should cities ban cars from downtown?"
/// pro_position = "Car-free centers are healthier and safer"
/// con_position = "Bans hurt businesses and accessibility"
/// max_turns = 8
/// style = "structured"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileDebateConfig {
    pub topic: Option<String>,
    pub pro_position: Option<String>,
    pub con_position: Option<String>,
    pub max_turns: u32,
    pub style: String,
    /// Advisory per-turn time budget in seconds
    pub time_per_turn: u64,
    /// Opening prompt; derived from the topic and positions when unset
    pub opening_prompt: Option<String>,
}

impl Default for FileDebateConfig {
    fn default() -> Self {
        Self {
            topic: None,
            pro_position: None,
            con_position: None,
            max_turns: DEFAULT_MAX_TURNS,
            style: DEFAULT_STYLE.to_string(),
            time_per_turn: DEFAULT_TIME_PER_TURN,
            opening_prompt: None,
        }
    }
}

impl FileDebateConfig {
    /// Build a validated [`DebateConfig`]
    pub fn to_debate_config(&self) -> Result<DebateConfig, ConfigValidationError> {
        let topic = self
            .topic
            .as_deref()
            .ok_or(ConfigValidationError::MissingField("debate.topic"))?;
        let pro = self
            .pro_position
            .as_deref()
            .ok_or(ConfigValidationError::MissingField("debate.pro_position"))?;
        let con = self
            .con_position
            .as_deref()
            .ok_or(ConfigValidationError::MissingField("debate.con_position"))?;

        let config = DebateConfig::new(topic, pro, con)?
            .with_max_turns(self.max_turns)?
            .with_style(self.style.as_str())?
            .with_time_per_turn(self.time_per_turn);
        Ok(config)
    }
}
