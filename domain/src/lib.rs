//! Domain layer for symposium
//!
//! This crate contains the debate configuration, phase ordering, context
//! rules and personas. It has no dependencies on infrastructure or
//! presentation concerns.
//!
//! # Core Concepts
//!
//! ## Debate
//!
//! A moderator persona hands the floor to a pro and a con speaker while the
//! debate moves through its phases: opening → discussion → rebuttal →
//! closing → summary.
//!
//! ## Personas and actions
//!
//! Personas never mutate the [`DebateContext`]. Their actions return an
//! [`ActionOutcome`] (next persona and/or a [`ContextUpdate`]) which the
//! orchestrator merges after each exchange.

pub mod config;
pub mod core;
pub mod debate;
pub mod persona;
pub mod prompt;
pub mod session;

// Re-export commonly used types
pub use config::OutputFormat;
pub use core::{error::DomainError, model::Model};
pub use debate::{
    config::{DEFAULT_MAX_TURNS, DEFAULT_STYLE, DEFAULT_TIME_PER_TURN, DebateConfig},
    context::{ContextUpdate, DebateContext},
    phase::Phase,
    result::{DebateResult, NO_SUMMARY},
};
pub use persona::{
    action::{Action, ActionOutcome},
    entities::{Persona, PersonaId, PersonaRegistry, PersonaRole, Stance},
};
pub use prompt::PromptTemplate;
pub use session::entities::{Message, Role};
