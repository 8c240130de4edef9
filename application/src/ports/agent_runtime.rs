//! Agent runtime port
//!
//! Defines the interface for running a single persona exchange against a
//! hosted chat model.

use async_trait::async_trait;
use symposium_domain::{
    ContextUpdate, DebateContext, DomainError, Message, Model, Persona, PersonaId,
};
use thiserror::Error;

/// Errors that can occur while running an exchange
#[derive(Error, Debug)]
pub enum RuntimeError {
    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Provider returned an error ({status}): {body}")]
    ApiError { status: u16, body: String },

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("{0} not found in environment variables")]
    MissingCredential(String),

    /// The model called an action the persona could not perform
    #[error(transparent)]
    Action(#[from] DomainError),
}

/// Input for one exchange
#[derive(Debug, Clone, Copy)]
pub struct ExchangeRequest<'a> {
    /// Persona taking the floor
    pub persona: &'a Persona,
    /// Transcript so far
    pub messages: &'a [Message],
    /// Read-only snapshot of the debate context
    pub context: &'a DebateContext,
    /// Maximum model round trips; the orchestrator always asks for one
    pub max_turns: usize,
    /// Run on this model instead of the persona's own
    pub model_override: Option<&'a Model>,
}

impl<'a> ExchangeRequest<'a> {
    pub fn new(
        persona: &'a Persona,
        messages: &'a [Message],
        context: &'a DebateContext,
    ) -> Self {
        Self {
            persona,
            messages,
            context,
            max_turns: 1,
            model_override: None,
        }
    }

    pub fn with_model_override(mut self, model: &'a Model) -> Self {
        self.model_override = Some(model);
        self
    }

    /// Model the exchange should run on
    pub fn model(&self) -> &'a Model {
        let persona: &'a Persona = self.persona;
        self.model_override.unwrap_or_else(|| persona.model())
    }
}

/// Result of one exchange
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Exchange {
    /// The persona's reply (content may be empty if it only called actions)
    pub reply: Message,
    /// Persona selected by an action to take control next
    pub handoff: Option<PersonaId>,
    /// Context mutations proposed by the actions called during the exchange
    pub update: ContextUpdate,
}

impl Exchange {
    /// Returns `true` if the exchange neither handed off nor proposed a mutation
    pub fn is_noop(&self) -> bool {
        self.handoff.is_none() && self.update.is_empty()
    }
}

/// Runs persona exchanges against a hosted model
///
/// Implementations (adapters) live in the infrastructure layer. An
/// implementation sends the persona's instructions, the transcript and the
/// persona's actions to the model, invokes whichever actions the model calls
/// via [`Persona::invoke_action`], and reports the combined outcome.
#[async_trait]
pub trait AgentRuntime: Send + Sync {
    /// Run one exchange and return the reply, handoff and proposed mutations
    async fn run(&self, request: ExchangeRequest<'_>) -> Result<Exchange, RuntimeError>;
}
