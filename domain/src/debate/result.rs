//! Debate result value object

use super::phase::Phase;
use crate::session::entities::Message;
use serde::{Deserialize, Serialize};

/// Placeholder used when the closing summary exchange produced no text
pub const NO_SUMMARY: &str = "No summary available";

/// Final output of a completed debate session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DebateResult {
    /// The debated topic
    pub topic: String,
    /// Full transcript, opening prompt first
    pub messages: Vec<Message>,
    /// Number of turns executed
    pub turns: u32,
    /// Closing summary from the moderator
    pub final_summary: String,
    /// Phase the debate ended in
    pub final_phase: Phase,
    /// Whether the moderator explicitly concluded the debate
    pub concluded: bool,
}

impl DebateResult {
    /// Creates a result, substituting [`NO_SUMMARY`] for an empty summary.
    pub fn new(
        topic: impl Into<String>,
        messages: Vec<Message>,
        turns: u32,
        summary: Option<&str>,
        final_phase: Phase,
        concluded: bool,
    ) -> Self {
        let final_summary = summary
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .unwrap_or(NO_SUMMARY)
            .to_string();

        Self {
            topic: topic.into(),
            messages,
            turns,
            final_summary,
            final_phase,
            concluded,
        }
    }

    /// Returns `true` if the closing summary exchange produced text
    pub fn has_summary(&self) -> bool {
        self.final_summary != NO_SUMMARY
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_summary_uses_marker() {
        let result = DebateResult::new("X", vec![], 2, Some("   "), Phase::Opening, false);
        assert_eq!(result.final_summary, NO_SUMMARY);
        assert!(!result.has_summary());

        let result = DebateResult::new("X", vec![], 2, None, Phase::Opening, false);
        assert_eq!(result.final_summary, NO_SUMMARY);
    }

    #[test]
    fn test_summary_is_kept() {
        let result = DebateResult::new(
            "X",
            vec![Message::user("Welcome")],
            1,
            Some("Both sides argued well."),
            Phase::Closing,
            true,
        );
        assert_eq!(result.final_summary, "Both sides argued well.");
        assert!(result.has_summary());
        assert_eq!(result.messages.len(), 1);
    }
}
