//! Debate configuration (Value Object)

use crate::core::error::DomainError;
use serde::Serialize;

/// Default number of turns before the debate is forced to conclude
pub const DEFAULT_MAX_TURNS: u32 = 10;

/// Default debate style tag
pub const DEFAULT_STYLE: &str = "structured";

/// Default seconds allotted per turn (informational only)
pub const DEFAULT_TIME_PER_TURN: u64 = 300;

/// Immutable parameters of a debate session.
///
/// Construct with [`DebateConfig::new`], which validates the parameters
/// so that an invalid debate fails before any session starts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DebateConfig {
    topic: String,
    pro_position: String,
    con_position: String,
    max_turns: u32,
    style: String,
    time_per_turn: u64,
}

impl DebateConfig {
    /// Create a validated configuration with default turn budget and style
    pub fn new(
        topic: impl Into<String>,
        pro_position: impl Into<String>,
        con_position: impl Into<String>,
    ) -> Result<Self, DomainError> {
        let config = Self {
            topic: topic.into(),
            pro_position: pro_position.into(),
            con_position: con_position.into(),
            max_turns: DEFAULT_MAX_TURNS,
            style: DEFAULT_STYLE.to_string(),
            time_per_turn: DEFAULT_TIME_PER_TURN,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn with_max_turns(mut self, max_turns: u32) -> Result<Self, DomainError> {
        self.max_turns = max_turns;
        self.validate()?;
        Ok(self)
    }

    pub fn with_style(mut self, style: impl Into<String>) -> Result<Self, DomainError> {
        self.style = style.into();
        self.validate()?;
        Ok(self)
    }

    pub fn with_time_per_turn(mut self, seconds: u64) -> Self {
        self.time_per_turn = seconds;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), DomainError> {
        let required = [
            ("topic", &self.topic),
            ("pro_position", &self.pro_position),
            ("con_position", &self.con_position),
            ("style", &self.style),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(DomainError::InvalidConfig(format!("{field} cannot be empty")));
            }
        }
        if self.max_turns == 0 {
            return Err(DomainError::InvalidConfig(
                "max_turns must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }

    pub fn topic(&self) -> &str {
        &self.topic
    }

    pub fn pro_position(&self) -> &str {
        &self.pro_position
    }

    pub fn con_position(&self) -> &str {
        &self.con_position
    }

    pub fn max_turns(&self) -> u32 {
        self.max_turns
    }

    pub fn style(&self) -> &str {
        &self.style
    }

    /// Seconds allotted per turn. Not acted upon by the orchestrator.
    pub fn time_per_turn(&self) -> u64 {
        self.time_per_turn
    }
}
