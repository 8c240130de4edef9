//! Debate context and proposed context mutations
//!
//! The [`DebateContext`] is owned by the orchestrator. Personas never write
//! to it: their actions return a [`ContextUpdate`], which the orchestrator
//! merges after each exchange via [`DebateContext::apply`].

use super::config::DebateConfig;
use super::phase::Phase;
use crate::core::error::DomainError;
use crate::persona::entities::Stance;
use serde::{Deserialize, Serialize};

/// Live state of a running debate
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DebateContext {
    pub topic: String,
    pub pro_position: String,
    pub con_position: String,
    pub phase: Phase,
    pub turn_count: u32,
    pub style: String,
    /// Set once the moderator explicitly concludes the debate
    pub concluded: bool,
    /// Transient signal that the debate should wrap up with a summary
    pub should_conclude: bool,
}

impl DebateContext {
    /// Initial context for a new session: opening phase, no turns taken
    pub fn new(config: &DebateConfig) -> Self {
        Self {
            topic: config.topic().to_string(),
            pro_position: config.pro_position().to_string(),
            con_position: config.con_position().to_string(),
            phase: Phase::Opening,
            turn_count: 0,
            style: config.style().to_string(),
            concluded: false,
            should_conclude: false,
        }
    }

    /// Merge a proposed mutation into the context.
    ///
    /// A proposed phase must be the current phase or its immediate successor.
    /// `concluded` only ever flips from false to true.
    pub fn apply(&mut self, update: &ContextUpdate) -> Result<(), DomainError> {
        if let Some(phase) = update.phase {
            if phase != self.phase && self.phase.successor() != Some(phase) {
                return Err(DomainError::ProtocolViolation(format!(
                    "phase cannot move from {} to {}",
                    self.phase, phase
                )));
            }
            self.phase = phase;
        }

        if let Some(should_conclude) = update.should_conclude {
            self.should_conclude = should_conclude;
        }

        if update.concluded == Some(true) {
            if self.concluded {
                tracing::debug!("Debate already concluded, ignoring repeated conclusion");
            }
            self.concluded = true;
        }

        Ok(())
    }

    /// Count one completed turn
    pub fn advance_turn(&mut self) {
        self.turn_count += 1;
    }

    /// Whether the debate should move on to its closing summary
    pub fn is_concluding(&self) -> bool {
        self.should_conclude || self.concluded
    }

    /// Position statement for the given side
    pub fn position(&self, stance: Stance) -> &str {
        match stance {
            Stance::Pro => &self.pro_position,
            Stance::Con => &self.con_position,
        }
    }
}

/// A set of context mutations proposed by a persona action
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContextUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phase: Option<Phase>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub should_conclude: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub concluded: Option<bool>,
}

impl ContextUpdate {
    pub fn phase(phase: Phase) -> Self {
        Self {
            phase: Some(phase),
            ..Default::default()
        }
    }

    pub fn should_conclude() -> Self {
        Self {
            should_conclude: Some(true),
            ..Default::default()
        }
    }

    pub fn concluded() -> Self {
        Self {
            concluded: Some(true),
            ..Default::default()
        }
    }

    /// Merge `other` on top of `self`; keys set in `other` win
    pub fn merge(&mut self, other: &ContextUpdate) {
        if other.phase.is_some() {
            self.phase = other.phase;
        }
        if other.should_conclude.is_some() {
            self.should_conclude = other.should_conclude;
        }
        if other.concluded.is_some() {
            self.concluded = other.concluded;
        }
    }

    /// Whether this update proposes no mutation at all
    pub fn is_empty(&self) -> bool {
        self.phase.is_none() && self.should_conclude.is_none() && self.concluded.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn context() -> DebateContext {
        let config = DebateConfig::new("X", "A", "B").unwrap();
        DebateContext::new(&config)
    }

    #[test]
    fn test_initial_context() {
        let ctx = context();
        assert_eq!(ctx.phase, Phase::Opening);
        assert_eq!(ctx.turn_count, 0);
        assert!(!ctx.concluded);
        assert!(!ctx.should_conclude);
        assert_eq!(ctx.position(Stance::Pro), "A");
        assert_eq!(ctx.position(Stance::Con), "B");
    }

    #[test]
    fn test_apply_successor_phase() {
        let mut ctx = context();
        ctx.apply(&ContextUpdate::phase(Phase::Discussion)).unwrap();
        assert_eq!(ctx.phase, Phase::Discussion);
    }

    #[test]
    fn test_apply_rejects_skipped_phase() {
        let mut ctx = context();
        let err = ctx.apply(&ContextUpdate::phase(Phase::Closing)).unwrap_err();
        assert!(matches!(err, DomainError::ProtocolViolation(_)));
        assert_eq!(ctx.phase, Phase::Opening);
    }

    #[test]
    fn test_apply_rejects_backward_phase() {
        let mut ctx = context();
        ctx.phase = Phase::Rebuttal;
        assert!(ctx.apply(&ContextUpdate::phase(Phase::Discussion)).is_err());
        assert_eq!(ctx.phase, Phase::Rebuttal);
    }

    #[test]
    fn test_concluded_is_sticky() {
        let mut ctx = context();
        ctx.apply(&ContextUpdate::concluded()).unwrap();
        ctx.apply(&ContextUpdate::concluded()).unwrap();
        ctx.apply(&ContextUpdate {
            concluded: Some(false),
            ..Default::default()
        })
        .unwrap();
        assert!(ctx.concluded);
        assert!(ctx.is_concluding());
    }

    #[test]
    fn test_merge_last_write_wins() {
        let mut update = ContextUpdate::phase(Phase::Discussion);
        update.merge(&ContextUpdate::should_conclude());
        update.merge(&ContextUpdate {
            should_conclude: Some(false),
            ..Default::default()
        });
        assert_eq!(update.phase, Some(Phase::Discussion));
        assert_eq!(update.should_conclude, Some(false));
        assert_eq!(update.concluded, None);
    }

    #[test]
    fn test_empty_update() {
        assert!(ContextUpdate::default().is_empty());
        assert!(!ContextUpdate::concluded().is_empty());
    }

    #[test]
    fn test_update_deserializes_from_partial_json() {
        let update: ContextUpdate = serde_json::from_str(r#"{"phase":"rebuttal"}"#).unwrap();
        assert_eq!(update, ContextUpdate::phase(Phase::Rebuttal));

        let bad = serde_json::from_str::<ContextUpdate>(r#"{"phase":"intermission"}"#);
        assert!(bad.is_err());
    }
}
