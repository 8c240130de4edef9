//! Output configuration from TOML (`[output]` section)

use serde::{Deserialize, Serialize};
use symposium_domain::OutputFormat;

// Re-export OutputFormat from domain for convenience
pub use symposium_domain::OutputFormat as FileOutputFormat;

/// Raw output configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOutputConfig {
    /// Output format for the final result (uses domain type)
    pub format: Option<OutputFormat>,
    /// Enable colored terminal output
    pub color: bool,
    /// Show a spinner while a persona is thinking
    pub show_progress: bool,
}

impl Default for FileOutputConfig {
    fn default() -> Self {
        Self {
            format: None,
            color: true,
            show_progress: true,
        }
    }
}
