//! Run Debate use case
//!
//! Orchestrates a debate session: alternates control between the moderator
//! and the speakers, merges proposed context mutations, enforces the turn
//! budget and assembles the final result.

use crate::ports::agent_runtime::{AgentRuntime, Exchange, ExchangeRequest, RuntimeError};
use crate::ports::conversation_logger::{
    ConversationEvent, ConversationLogger, NoConversationLogger,
};
use crate::ports::observer::{DebateEvent, DebateObserver, NoObserver};
use serde_json::json;
use std::sync::Arc;
use symposium_domain::{
    ContextUpdate, DebateConfig, DebateContext, DebateResult, DomainError, Message, Model,
    PersonaId, PersonaRegistry,
};
use thiserror::Error;
use tracing::{debug, error, info, warn};

/// Errors that can occur while setting up or running a debate
#[derive(Error, Debug)]
pub enum SymposiumError {
    #[error("Configuration error: {0}")]
    Config(DomainError),

    #[error("State error: {0}")]
    State(&'static str),

    #[error("Protocol violation: {0}")]
    Protocol(String),

    #[error("Runtime error: {0}")]
    Runtime(RuntimeError),
}

impl From<DomainError> for SymposiumError {
    fn from(error: DomainError) -> Self {
        match error {
            DomainError::InvalidConfig(_) => SymposiumError::Config(error),
            DomainError::ProtocolViolation(msg) => SymposiumError::Protocol(msg),
            other => SymposiumError::Protocol(other.to_string()),
        }
    }
}

impl From<RuntimeError> for SymposiumError {
    fn from(error: RuntimeError) -> Self {
        match error {
            RuntimeError::Action(domain) => domain.into(),
            other => SymposiumError::Runtime(other),
        }
    }
}

/// Lifecycle of a debate session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Configured, not yet started
    Setup,
    /// Taking turns
    Running,
    /// Running the closing summary exchange
    Concluding,
    /// Result assembled
    Done,
    /// Aborted by an error
    Failed,
}

struct DebateSession {
    config: DebateConfig,
    personas: PersonaRegistry,
    context: DebateContext,
    state: SessionState,
    messages: Vec<Message>,
}

/// Debate orchestrator
///
/// Owns the debate context exclusively: personas only see read-only
/// snapshots through the [`AgentRuntime`] and propose mutations, which are
/// merged here after each exchange.
pub struct Symposium<R: AgentRuntime + 'static> {
    runtime: Arc<R>,
    model: Model,
    observer: Arc<dyn DebateObserver>,
    conversation_logger: Arc<dyn ConversationLogger>,
    session: Option<DebateSession>,
}

impl<R: AgentRuntime + 'static> Symposium<R> {
    pub fn new(runtime: Arc<R>, model: Model) -> Self {
        info!("Initializing Symposium with model: {}", model);
        Self {
            runtime,
            model,
            observer: Arc::new(NoObserver),
            conversation_logger: Arc::new(NoConversationLogger),
            session: None,
        }
    }

    pub fn with_observer(mut self, observer: Arc<dyn DebateObserver>) -> Self {
        self.observer = observer;
        self
    }

    pub fn with_conversation_logger(mut self, logger: Arc<dyn ConversationLogger>) -> Self {
        self.conversation_logger = logger;
        self
    }

    /// Initialize a new debate session with the given configuration.
    ///
    /// Fails with [`SymposiumError::State`] if a session is already held;
    /// the existing session is left untouched.
    pub fn setup_debate(&mut self, config: DebateConfig) -> Result<(), SymposiumError> {
        if self.session.is_some() {
            return Err(SymposiumError::State(
                "a debate session is already active; complete or reset it first",
            ));
        }
        config.validate()?;

        info!("Setting up debate on topic: {}", config.topic());
        let context = DebateContext::new(&config);
        debug!(
            "Initialized debate context: {}",
            serde_json::to_string_pretty(&context).unwrap_or_default()
        );

        self.session = Some(DebateSession {
            personas: PersonaRegistry::new(self.model.clone()),
            context,
            config,
            state: SessionState::Setup,
            messages: Vec::new(),
        });
        Ok(())
    }

    /// Drop the current session, if any, so a new one can be set up
    pub fn reset(&mut self) {
        if self.session.take().is_some() {
            info!("Debate session reset");
        }
    }

    pub fn state(&self) -> Option<SessionState> {
        self.session.as_ref().map(|s| s.state)
    }

    pub fn context(&self) -> Option<&DebateContext> {
        self.session.as_ref().map(|s| &s.context)
    }

    pub fn config(&self) -> Option<&DebateConfig> {
        self.session.as_ref().map(|s| &s.config)
    }

    /// Execute the debate session set up by [`setup_debate`](Self::setup_debate).
    ///
    /// Any error aborts the session: it moves to [`SessionState::Failed`]
    /// and must be reset before another debate can run.
    pub async fn run_debate(
        &mut self,
        opening_prompt: &str,
    ) -> Result<DebateResult, SymposiumError> {
        let session = self.session.as_mut().ok_or(SymposiumError::State(
            "no debate session; call setup_debate first",
        ))?;

        match session.state {
            SessionState::Setup => {}
            SessionState::Running | SessionState::Concluding => {
                return Err(SymposiumError::State("the debate is already running"));
            }
            SessionState::Done | SessionState::Failed => {
                return Err(SymposiumError::State(
                    "the debate session has finished; reset it first",
                ));
            }
        }

        let driver = Driver {
            runtime: self.runtime.as_ref(),
            model: &self.model,
            observer: self.observer.as_ref(),
            logger: self.conversation_logger.as_ref(),
        };

        match driver.run(session, opening_prompt).await {
            Ok(result) => {
                session.state = SessionState::Done;
                Ok(result)
            }
            Err(e) => {
                error!("Error during debate execution: {}", e);
                session.state = SessionState::Failed;
                self.conversation_logger.log(ConversationEvent::new(
                    "session_failed",
                    json!({
                        "error": e.to_string(),
                        "turn": session.context.turn_count,
                        "phase": session.context.phase,
                    }),
                ));
                Err(e)
            }
        }
    }
}

/// Borrowed collaborators for the duration of one run
struct Driver<'a, R: AgentRuntime> {
    runtime: &'a R,
    model: &'a Model,
    observer: &'a dyn DebateObserver,
    logger: &'a dyn ConversationLogger,
}

impl<R: AgentRuntime> Driver<'_, R> {
    async fn run(
        &self,
        session: &mut DebateSession,
        opening_prompt: &str,
    ) -> Result<DebateResult, SymposiumError> {
        info!("Starting debate execution");
        session.state = SessionState::Running;

        self.observer.on_session_start(&session.config);
        self.logger.log(ConversationEvent::new(
            "session_start",
            json!({
                "topic": session.config.topic(),
                "pro_position": session.config.pro_position(),
                "con_position": session.config.con_position(),
                "max_turns": session.config.max_turns(),
                "style": session.config.style(),
                "model": self.model,
            }),
        ));

        let opening = Message::user(opening_prompt);
        self.observer.on_message(&DebateEvent {
            speaker: PersonaId::Moderator.display_name(),
            content: opening.content.trim(),
            phase: "setup",
        });
        session.messages.push(opening);

        loop {
            debug!(
                "Turn {}, Phase: {}",
                session.context.turn_count, session.context.phase
            );

            let moderator_turn = self
                .exchange(session, PersonaId::Moderator, Some(self.model))
                .await?;
            if moderator_turn.is_noop() {
                return Err(SymposiumError::Protocol(
                    "moderator exchange produced neither a handoff nor a context update"
                        .to_string(),
                ));
            }
            // Without a handoff the moderator keeps the floor
            let next = moderator_turn.handoff.unwrap_or(PersonaId::Moderator);
            let mut update = moderator_turn.update;
            self.record(session, moderator_turn.reply);

            let speaker_turn = self.exchange(session, next, Some(self.model)).await?;
            update.merge(&speaker_turn.update);
            self.record(session, speaker_turn.reply);

            session.context.apply(&update)?;
            session.context.advance_turn();
            self.enforce_turn_limit(session)?;

            if session.context.is_concluding() {
                break;
            }
        }

        session.state = SessionState::Concluding;
        info!("Generating final summary");
        self.observer.on_summary_start();

        let summary = self.exchange(session, PersonaId::Moderator, None).await?;
        if let Some(handoff) = summary.handoff {
            warn!("Ignoring handoff to {} requested during the closing summary", handoff);
        }
        session.context.apply(&summary.update)?;
        let summary_text = summary.reply.content.clone();
        self.record(session, summary.reply);

        let result = DebateResult::new(
            session.config.topic(),
            session.messages.clone(),
            session.context.turn_count,
            Some(&summary_text),
            session.context.phase,
            session.context.concluded,
        );

        self.logger.log(ConversationEvent::new(
            "session_end",
            json!({
                "turns": result.turns,
                "final_phase": result.final_phase,
                "concluded": result.concluded,
                "final_summary": result.final_summary,
            }),
        ));
        self.observer.on_session_end(&result);
        info!("Debate completed in {} turns", result.turns);

        Ok(result)
    }

    /// Run one exchange for `persona` against the current transcript
    async fn exchange(
        &self,
        session: &DebateSession,
        persona: PersonaId,
        model_override: Option<&Model>,
    ) -> Result<Exchange, SymposiumError> {
        let persona = session.personas.get(persona);
        self.observer
            .on_exchange_start(persona.name(), session.context.phase);
        debug!("Invoking {} ({})", persona.name(), session.context.phase);

        let mut request = ExchangeRequest::new(persona, &session.messages, &session.context);
        if let Some(model) = model_override {
            request = request.with_model_override(model);
        }
        let exchange = self.runtime.run(request).await?;

        self.logger.log(ConversationEvent::new(
            "exchange",
            json!({
                "persona": persona.name(),
                "phase": session.context.phase,
                "turn": session.context.turn_count,
                "content": exchange.reply.content,
                "handoff": exchange.handoff,
                "update": exchange.update,
            }),
        ));
        Ok(exchange)
    }

    /// Append a reply to the transcript and emit it, unless it has no text
    fn record(&self, session: &mut DebateSession, reply: Message) {
        if !reply.has_content() {
            debug!("{} replied without text", reply.speaker());
            return;
        }
        self.observer.on_message(&DebateEvent {
            speaker: reply.speaker(),
            content: reply.content.trim(),
            phase: session.context.phase.as_str(),
        });
        session.messages.push(reply);
    }

    /// Force conclusion once the turn budget is spent
    fn enforce_turn_limit(&self, session: &mut DebateSession) -> Result<(), SymposiumError> {
        let max_turns = session.config.max_turns();
        if session.context.turn_count >= max_turns && !session.context.should_conclude {
            info!("Reached maximum turns, initiating conclusion");
            session.context.apply(&ContextUpdate::should_conclude())?;
            self.observer.on_turn_limit_reached(max_turns);
            self.logger.log(ConversationEvent::new(
                "turn_limit_reached",
                json!({ "max_turns": max_turns }),
            ));
        }
        Ok(())
    }
}
