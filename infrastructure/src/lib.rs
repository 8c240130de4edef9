//! Infrastructure layer for symposium
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod logging;
pub mod openai;

// Re-export commonly used types
pub use config::{
    ConfigLoader, ConfigValidationError, FileConfig, FileDebateConfig, FileLoggingConfig,
    FileModelsConfig, FileOutputConfig, FileOutputFormat, FileProviderConfig,
};
pub use logging::{JsonlConversationLogger, debug_log_file_name};
pub use openai::OpenAiAgentRuntime;
