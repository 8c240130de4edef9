//! Debate phase value object

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// Phase of a debate
///
/// Phases are totally ordered and only ever advance forward, one step at a time:
/// opening → discussion → rebuttal → closing → summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    /// Speakers present their main arguments
    Opening,
    /// Back-and-forth development of the arguments
    Discussion,
    /// Speakers address the opposing arguments
    Rebuttal,
    /// Final statements
    Closing,
    /// Moderator summarizes the debate
    Summary,
}

impl Phase {
    /// All phases in debate order
    pub const ALL: [Phase; 5] = [
        Phase::Opening,
        Phase::Discussion,
        Phase::Rebuttal,
        Phase::Closing,
        Phase::Summary,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Opening => "opening",
            Phase::Discussion => "discussion",
            Phase::Rebuttal => "rebuttal",
            Phase::Closing => "closing",
            Phase::Summary => "summary",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Phase::Opening => "Opening Statements",
            Phase::Discussion => "Discussion",
            Phase::Rebuttal => "Rebuttal",
            Phase::Closing => "Closing Statements",
            Phase::Summary => "Summary",
        }
    }

    /// The phase that follows this one, or `None` at the last phase
    pub fn successor(&self) -> Option<Phase> {
        let index = Self::ALL.iter().position(|p| p == self)?;
        Self::ALL.get(index + 1).copied()
    }

    /// Whether this is the final phase of the debate
    pub fn is_last(&self) -> bool {
        self.successor().is_none()
    }
}

impl Default for Phase {
    fn default() -> Self {
        Phase::Opening
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Phase {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .find(|p| p.as_str().eq_ignore_ascii_case(s.trim()))
            .copied()
            .ok_or_else(|| DomainError::UnknownPhase(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_successor_follows_fixed_ordering() {
        assert_eq!(Phase::Opening.successor(), Some(Phase::Discussion));
        assert_eq!(Phase::Discussion.successor(), Some(Phase::Rebuttal));
        assert_eq!(Phase::Rebuttal.successor(), Some(Phase::Closing));
        assert_eq!(Phase::Closing.successor(), Some(Phase::Summary));
        assert_eq!(Phase::Summary.successor(), None);
    }

    #[test]
    fn test_phases_are_totally_ordered() {
        for pair in Phase::ALL.windows(2) {
            assert!(pair[0] < pair[1]);
        }
        assert!(Phase::Summary.is_last());
        assert!(!Phase::Closing.is_last());
    }

    #[test]
    fn test_parse_labels() {
        assert_eq!("rebuttal".parse::<Phase>().unwrap(), Phase::Rebuttal);
        assert_eq!("OPENING".parse::<Phase>().unwrap(), Phase::Opening);
    }

    #[test]
    fn test_parse_unknown_label_fails() {
        let err = "intermission".parse::<Phase>().unwrap_err();
        assert_eq!(err, DomainError::UnknownPhase("intermission".to_string()));
    }

    #[test]
    fn test_serialize_lowercase() {
        let json = serde_json::to_string(&Phase::Closing).unwrap();
        assert_eq!(json, "\"closing\"");
    }
}
