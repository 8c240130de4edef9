//! Debate domain.
//!
//! - [`config::DebateConfig`]: validated, immutable debate parameters
//! - [`phase::Phase`]: opening → discussion → rebuttal → closing → summary
//! - [`context::DebateContext`]: live debate state, mutated only through [`context::ContextUpdate`]
//! - [`result::DebateResult`]: transcript and closing summary of a finished debate

pub mod config;
pub mod context;
pub mod phase;
pub mod result;
