//! Application layer for symposium
//!
//! This crate contains the debate orchestrator and the port definitions it
//! drives. It depends only on the domain layer.

pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use ports::{
    agent_runtime::{AgentRuntime, Exchange, ExchangeRequest, RuntimeError},
    conversation_logger::{ConversationEvent, ConversationLogger, NoConversationLogger},
    observer::{DebateEvent, DebateObserver, NoObserver},
};
pub use use_cases::run_debate::{SessionState, Symposium, SymposiumError};
