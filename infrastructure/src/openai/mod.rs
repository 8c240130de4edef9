//! OpenAI-compatible chat-completion adapter
//!
//! Implements the [`AgentRuntime`](symposium_application::AgentRuntime)
//! port over HTTP using function calling for persona actions.

pub mod protocol;
pub mod runtime;

pub use runtime::OpenAiAgentRuntime;
