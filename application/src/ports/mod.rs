//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure and presentation adapters must implement.

pub mod agent_runtime;
pub mod conversation_logger;
pub mod observer;
