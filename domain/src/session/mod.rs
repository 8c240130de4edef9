//! Transcript domain.
//!
//! - [`entities::Message`]: a single transcript entry
//! - [`entities::Role`]: user prompt or persona reply

pub mod entities;
