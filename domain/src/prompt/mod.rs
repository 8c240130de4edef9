//! Prompt domain
//!
//! Templates for the moderator and speaker instructions.

mod template;

pub use template::PromptTemplate;
