//! Log file configuration from TOML (`[logging]` section)

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Where debug logs and transcripts are written; nothing is written when unset
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLoggingConfig {
    /// Directory for `debate_logs_<timestamp>.log`
    pub debug_log_dir: Option<PathBuf>,
    /// Directory for JSONL debate transcripts
    pub transcript_dir: Option<PathBuf>,
}
