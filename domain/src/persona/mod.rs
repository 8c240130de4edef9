//! Persona domain (the persona factory).
//!
//! - [`entities::Persona`]: moderator or speaker: instructions, actions, model
//! - [`entities::PersonaRegistry`]: owns all personas, resolves [`entities::PersonaId`] handles
//! - [`action::Action`]: callable actions returning proposed handoffs and mutations

pub mod action;
pub mod entities;
