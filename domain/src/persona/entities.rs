//! Persona entities
//!
//! Moderator and speakers refer to each other through [`PersonaId`] handles
//! into a [`PersonaRegistry`] rather than through direct links, so the
//! mutual reference never becomes an ownership cycle.

use super::action::{Action, ActionOutcome};
use crate::core::error::DomainError;
use crate::core::model::Model;
use crate::debate::context::DebateContext;
use crate::prompt::PromptTemplate;
use serde::{Deserialize, Serialize};

/// Handle identifying a persona in the registry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PersonaId {
    Moderator,
    Pro,
    Con,
}

impl PersonaId {
    pub fn display_name(&self) -> &'static str {
        match self {
            PersonaId::Moderator => "Moderator",
            PersonaId::Pro => "Pro Speaker",
            PersonaId::Con => "Con Speaker",
        }
    }
}

impl std::fmt::Display for PersonaId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Side argued by a speaker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Stance {
    Pro,
    Con,
}

impl Stance {
    pub fn as_str(&self) -> &'static str {
        match self {
            Stance::Pro => "pro",
            Stance::Con => "con",
        }
    }
}

/// What a persona does in the debate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PersonaRole {
    Moderator,
    /// A speaker holds the handle of the persona it yields control to
    Speaker { stance: Stance, moderator: PersonaId },
}

/// A named behavior unit: instructions, actions and model (Entity)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Persona {
    id: PersonaId,
    role: PersonaRole,
    model: Model,
}

impl Persona {
    pub fn moderator(model: Model) -> Self {
        Self {
            id: PersonaId::Moderator,
            role: PersonaRole::Moderator,
            model,
        }
    }

    pub fn speaker(stance: Stance, moderator: PersonaId, model: Model) -> Self {
        let id = match stance {
            Stance::Pro => PersonaId::Pro,
            Stance::Con => PersonaId::Con,
        };
        Self {
            id,
            role: PersonaRole::Speaker { stance, moderator },
            model,
        }
    }

    pub fn id(&self) -> PersonaId {
        self.id
    }

    pub fn name(&self) -> &'static str {
        self.id.display_name()
    }

    pub fn model(&self) -> &Model {
        &self.model
    }

    /// Actions this persona may call
    pub fn actions(&self) -> &'static [Action] {
        match self.role {
            PersonaRole::Moderator => Action::MODERATOR,
            PersonaRole::Speaker { .. } => Action::SPEAKER,
        }
    }

    /// Build the instructions from the live context.
    ///
    /// Called once per exchange so phase-dependent wording always reflects
    /// the current phase.
    pub fn instructions(&self, context: &DebateContext) -> String {
        match self.role {
            PersonaRole::Moderator => PromptTemplate::moderator_instructions(context),
            PersonaRole::Speaker { stance, .. } => {
                PromptTemplate::speaker_instructions(stance, context)
            }
        }
    }

    /// Invoke one of this persona's actions by function name
    pub fn invoke_action(
        &self,
        name: &str,
        context: &DebateContext,
    ) -> Result<ActionOutcome, DomainError> {
        let action = Action::from_name(name)
            .filter(|a| self.actions().contains(a))
            .ok_or_else(|| DomainError::UnknownAction {
                persona: self.name().to_string(),
                action: name.to_string(),
            })?;

        let mut outcome = action.invoke(context);
        // A speaker yields to whichever moderator it was registered with
        if let (Action::ReturnToModerator, PersonaRole::Speaker { moderator, .. }) =
            (action, self.role)
        {
            outcome.handoff = Some(moderator);
        }
        Ok(outcome)
    }
}

/// Owns the moderator and both speakers of a debate
#[derive(Debug, Clone)]
pub struct PersonaRegistry {
    moderator: Persona,
    pro: Persona,
    con: Persona,
}

impl PersonaRegistry {
    /// Build all three personas on the same model
    pub fn new(model: Model) -> Self {
        Self {
            pro: Persona::speaker(Stance::Pro, PersonaId::Moderator, model.clone()),
            con: Persona::speaker(Stance::Con, PersonaId::Moderator, model.clone()),
            moderator: Persona::moderator(model),
        }
    }

    pub fn get(&self, id: PersonaId) -> &Persona {
        match id {
            PersonaId::Moderator => &self.moderator,
            PersonaId::Pro => &self.pro,
            PersonaId::Con => &self.con,
        }
    }

    pub fn moderator(&self) -> &Persona {
        &self.moderator
    }
}
