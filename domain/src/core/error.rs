//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid debate configuration: {0}")]
    InvalidConfig(String),

    #[error("Unknown debate phase: {0}")]
    UnknownPhase(String),

    #[error("Unknown action '{action}' for {persona}")]
    UnknownAction { persona: String, action: String },

    #[error("Protocol violation: {0}")]
    ProtocolViolation(String),
}

impl DomainError {
    /// Check if this error is a configuration problem (as opposed to a
    /// violation of the handoff protocol during a running debate)
    pub fn is_config(&self) -> bool {
        matches!(self, DomainError::InvalidConfig(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_action_display() {
        let error = DomainError::UnknownAction {
            persona: "Pro Speaker".to_string(),
            action: "advance_phase".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Unknown action 'advance_phase' for Pro Speaker"
        );
    }

    #[test]
    fn test_is_config_check() {
        assert!(DomainError::InvalidConfig("topic".to_string()).is_config());
        assert!(!DomainError::UnknownPhase("intermission".to_string()).is_config());
        assert!(!DomainError::ProtocolViolation("no handoff".to_string()).is_config());
    }
}
