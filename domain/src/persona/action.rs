//! Persona actions
//!
//! Actions are the callable functions a persona exposes to the model.
//! Invoking one never touches the live context: it reads a snapshot and
//! returns an [`ActionOutcome`] holding the proposed handoff and mutations.

use super::entities::PersonaId;
use crate::debate::context::{ContextUpdate, DebateContext};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// A callable action of a persona
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    /// Speaker hands the floor back to the moderator
    ReturnToModerator,
    /// Moderator gives the floor to the pro speaker
    CallProSpeaker,
    /// Moderator gives the floor to the con speaker
    CallConSpeaker,
    /// Moderator moves the debate to its next phase
    AdvancePhase,
    /// Moderator ends the debate
    ConcludeDebate,
}

impl Action {
    /// Actions available to a speaker persona
    pub const SPEAKER: &'static [Action] = &[Action::ReturnToModerator];

    /// Actions available to the moderator persona
    pub const MODERATOR: &'static [Action] = &[
        Action::CallProSpeaker,
        Action::CallConSpeaker,
        Action::AdvancePhase,
        Action::ConcludeDebate,
    ];

    /// Function name exposed to the model
    pub fn name(&self) -> &'static str {
        match self {
            Action::ReturnToModerator => "return_to_moderator",
            Action::CallProSpeaker => "call_pro_speaker",
            Action::CallConSpeaker => "call_con_speaker",
            Action::AdvancePhase => "advance_phase",
            Action::ConcludeDebate => "conclude_debate",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Action::ReturnToModerator => {
                "Return control to the moderator once you have completed your point."
            }
            Action::CallProSpeaker => "Give the floor to the pro position speaker.",
            Action::CallConSpeaker => "Give the floor to the con position speaker.",
            Action::AdvancePhase => "Advance the debate to the next phase.",
            Action::ConcludeDebate => "End the debate and provide the final summary.",
        }
    }

    /// Look up an action by its function name
    pub fn from_name(name: &str) -> Option<Action> {
        [Self::SPEAKER, Self::MODERATOR]
            .into_iter()
            .flatten()
            .find(|a| a.name() == name)
            .copied()
    }

    /// Invoke the action against a read-only context snapshot
    pub fn invoke(&self, context: &DebateContext) -> ActionOutcome {
        match self {
            Action::ReturnToModerator => {
                debug!("Speaker returning control to moderator");
                ActionOutcome::handoff(PersonaId::Moderator)
            }
            Action::CallProSpeaker => {
                debug!("Transferring control to pro speaker");
                ActionOutcome::handoff(PersonaId::Pro)
            }
            Action::CallConSpeaker => {
                debug!("Transferring control to con speaker");
                ActionOutcome::handoff(PersonaId::Con)
            }
            Action::AdvancePhase => {
                info!("Advancing from phase: {}", context.phase);
                match context.phase.successor() {
                    Some(next) => {
                        info!("Moving to next phase: {}", next);
                        ActionOutcome::update(
                            format!("Moving to {} phase", next),
                            ContextUpdate::phase(next),
                        )
                    }
                    None => {
                        info!("All phases completed, preparing to conclude");
                        ActionOutcome::update(
                            "Debate phases completed",
                            ContextUpdate::should_conclude(),
                        )
                    }
                }
            }
            Action::ConcludeDebate => {
                info!("Concluding debate");
                ActionOutcome::update("Debate concluded", ContextUpdate::concluded())
            }
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// What invoking an action proposes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionOutcome {
    /// Text reported back to the model as the function result
    pub value: String,
    /// Persona to hand control to, if any
    pub handoff: Option<PersonaId>,
    /// Proposed context mutations
    pub update: ContextUpdate,
}

impl ActionOutcome {
    pub fn handoff(persona: PersonaId) -> Self {
        Self {
            value: format!("Control passed to {}", persona.display_name()),
            handoff: Some(persona),
            update: ContextUpdate::default(),
        }
    }

    pub fn update(value: impl Into<String>, update: ContextUpdate) -> Self {
        Self {
            value: value.into(),
            handoff: None,
            update,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::debate::config::DebateConfig;
    use crate::debate::phase::Phase;

    fn context_at(phase: Phase) -> DebateContext {
        let config = DebateConfig::new("X", "A", "B").unwrap();
        let mut ctx = DebateContext::new(&config);
        ctx.phase = phase;
        ctx
    }

    #[test]
    fn test_return_to_moderator_has_no_side_effects() {
        let ctx = context_at(Phase::Rebuttal);
        let outcome = Action::ReturnToModerator.invoke(&ctx);
        assert_eq!(outcome.handoff, Some(PersonaId::Moderator));
        assert!(outcome.update.is_empty());
    }

    #[test]
    fn test_call_speakers_hand_off() {
        let ctx = context_at(Phase::Opening);
        assert_eq!(
            Action::CallProSpeaker.invoke(&ctx).handoff,
            Some(PersonaId::Pro)
        );
        assert_eq!(
            Action::CallConSpeaker.invoke(&ctx).handoff,
            Some(PersonaId::Con)
        );
    }

    #[test]
    fn test_advance_phase_proposes_successor() {
        let ctx = context_at(Phase::Discussion);
        let outcome = Action::AdvancePhase.invoke(&ctx);
        assert_eq!(outcome.handoff, None);
        assert_eq!(outcome.update, ContextUpdate::phase(Phase::Rebuttal));
        assert_eq!(outcome.value, "Moving to rebuttal phase");
    }

    #[test]
    fn test_advance_phase_at_summary_signals_conclusion() {
        let ctx = context_at(Phase::Summary);
        let outcome = Action::AdvancePhase.invoke(&ctx);
        assert_eq!(outcome.update, ContextUpdate::should_conclude());
        assert_eq!(outcome.update.phase, None);
    }

    #[test]
    fn test_conclude_proposes_concluded() {
        let ctx = context_at(Phase::Closing);
        let outcome = Action::ConcludeDebate.invoke(&ctx);
        assert_eq!(outcome.update, ContextUpdate::concluded());
        assert_eq!(outcome.handoff, None);
    }

    #[test]
    fn test_invoke_does_not_mutate_snapshot() {
        let ctx = context_at(Phase::Opening);
        let before = ctx.clone();
        Action::AdvancePhase.invoke(&ctx);
        Action::ConcludeDebate.invoke(&ctx);
        assert_eq!(ctx, before);
    }

    #[test]
    fn test_from_name() {
        assert_eq!(
            Action::from_name("advance_phase"),
            Some(Action::AdvancePhase)
        );
        assert_eq!(
            Action::from_name("return_to_moderator"),
            Some(Action::ReturnToModerator)
        );
        assert_eq!(Action::from_name("filibuster"), None);
    }
}
