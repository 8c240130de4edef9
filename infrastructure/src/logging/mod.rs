//! Logging infrastructure: debate transcripts and debug log naming.
//!
//! Provides [`JsonlConversationLogger`], a JSONL file writer that implements
//! the [`ConversationLogger`](symposium_application::ConversationLogger) port.

mod jsonl_logger;

pub use jsonl_logger::JsonlConversationLogger;

/// Local time formatted as `YYYYmmdd_HHMMSS`
fn timestamp_suffix() -> String {
    chrono::Local::now().format("%Y%m%d_%H%M%S").to_string()
}

/// File name for a run's debug log: `debate_logs_<YYYYmmdd_HHMMSS>.log`
pub fn debug_log_file_name() -> String {
    format!("debate_logs_{}.log", timestamp_suffix())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_log_file_name() {
        let name = debug_log_file_name();
        assert!(name.starts_with("debate_logs_"));
        assert!(name.ends_with(".log"));
        // debate_logs_ + 15 timestamp chars + .log
        assert_eq!(name.len(), 12 + 15 + 4);
    }
}
