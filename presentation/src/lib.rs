//! Presentation layer for symposium
//!
//! This crate contains the CLI definition, the live debate reporter and
//! result formatters.

pub mod cli;
pub mod output;
pub mod progress;

// Re-export commonly used types
pub use cli::commands::{Cli, OutputFormat};
pub use output::console::ConsoleFormatter;
pub use progress::reporter::DebateReporter;
